// History stack seam - browser history or an in-memory stand-in
use super::route::HistorySnapshot;

/// A back/forward step reported by the history backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopEvent {
    pub path: String,
    /// Absent for entries created before the app loaded.
    pub snapshot: Option<HistorySnapshot>,
}

/// The browser's session history, as far as the router needs it.
///
/// `push` and `replace` never emit pop events. `back` and `forward` only
/// request a move; the backend reports the resulting entry through
/// `take_pop_events`, possibly on a later frame.
pub trait HistoryBackend {
    /// Path of the current entry (may include a query or fragment).
    fn location(&self) -> String;
    fn len(&self) -> usize;
    fn push(&mut self, path: &str, snapshot: HistorySnapshot);
    fn replace(&mut self, path: &str, snapshot: HistorySnapshot);
    fn back(&mut self);
    fn forward(&mut self);
    fn take_pop_events(&mut self) -> Vec<PopEvent>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: HistoryBackend + ?Sized> HistoryBackend for Box<T> {
    fn location(&self) -> String {
        (**self).location()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn push(&mut self, path: &str, snapshot: HistorySnapshot) {
        (**self).push(path, snapshot)
    }

    fn replace(&mut self, path: &str, snapshot: HistorySnapshot) {
        (**self).replace(path, snapshot)
    }

    fn back(&mut self) {
        (**self).back()
    }

    fn forward(&mut self) {
        (**self).forward()
    }

    fn take_pop_events(&mut self) -> Vec<PopEvent> {
        (**self).take_pop_events()
    }
}

#[derive(Debug, Clone)]
struct Entry {
    path: String,
    snapshot: Option<HistorySnapshot>,
}

/// Vector-backed history used by the native window and by tests.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Entry>,
    index: usize,
    pending: Vec<PopEvent>,
}

impl MemoryHistory {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry {
                path: initial_path.into(),
                snapshot: None,
            }],
            index: 0,
            pending: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Snapshot attached to the current entry.
    pub fn current_snapshot(&self) -> Option<&HistorySnapshot> {
        self.entries[self.index].snapshot.as_ref()
    }

    fn emit_current(&mut self) {
        let entry = &self.entries[self.index];
        self.pending.push(PopEvent {
            path: entry.path.clone(),
            snapshot: entry.snapshot.clone(),
        });
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].path.clone()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, path: &str, snapshot: HistorySnapshot) {
        // Drop forward entries when navigating somewhere new
        self.entries.truncate(self.index + 1);
        self.entries.push(Entry {
            path: path.to_string(),
            snapshot: Some(snapshot),
        });
        self.index += 1;
    }

    fn replace(&mut self, path: &str, snapshot: HistorySnapshot) {
        self.entries[self.index] = Entry {
            path: path.to_string(),
            snapshot: Some(snapshot),
        };
    }

    fn back(&mut self) {
        if self.can_go_back() {
            self.index -= 1;
            self.emit_current();
        }
    }

    fn forward(&mut self) {
        if self.can_go_forward() {
            self.index += 1;
            self.emit_current();
        }
    }

    fn take_pop_events(&mut self) -> Vec<PopEvent> {
        std::mem::take(&mut self.pending)
    }
}
