// ViewRouter - the single source of truth for what is on screen
//
// Keeps the navigation state, the history stack and the scroll position in
// step. Metadata is left to the views (see `crate::head`).

pub mod history;
pub mod route;
pub mod scroll;

pub use history::{HistoryBackend, MemoryHistory, PopEvent};
pub use route::{BestFitSegment, HistorySnapshot, NavigationState, RouteMatch, ViewKind};
pub use scroll::{PendingScroll, ScrollTiming, Section, Viewport, CONTACT_ANCHOR};

use std::time::Duration;
use tracing::{debug, info};
use web_time::Instant;

pub struct ViewRouter<H, V> {
    state: NavigationState,
    history: H,
    viewport: V,
    timing: ScrollTiming,
    generation: u64,
    pending: Option<PendingScroll>,
}

impl<H: HistoryBackend, V: Viewport> ViewRouter<H, V> {
    /// Mount the router on the current history entry.
    ///
    /// Deep links and aliases replace the entry they arrived on, so the
    /// first back press leaves the site instead of landing on a duplicate.
    pub fn new(mut history: H, viewport: V, timing: ScrollTiming) -> Self {
        let location = history.location();
        let RouteMatch { state, canonical } = route::decode(&location);

        if !state.is_home() || !canonical {
            let path = route::encode(&state);
            if path != location {
                debug!(from = %location, to = %path, "normalizing initial location");
            }
            history.replace(&path, state.snapshot());
        }

        info!(view = ?state.current_view(), "router mounted");

        Self {
            state,
            history,
            viewport,
            timing: timing.validated(),
            generation: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn timing(&self) -> ScrollTiming {
        self.timing
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.generation == self.generation)
    }

    // --- Transitions ---

    /// Move to `next`: set state, push history, scroll to the top.
    fn navigate(&mut self, next: NavigationState) {
        debug!(from = ?self.state, to = ?next, "navigate");
        self.state = next;
        self.history
            .push(&route::encode(&self.state), self.state.snapshot());
        self.viewport.scroll_to_origin();
        self.invalidate_pending();
    }

    pub fn navigate_to_home(&mut self) {
        self.navigate(NavigationState::Home);
    }

    pub fn navigate_to_project(&mut self, id: impl Into<String>) {
        self.navigate(NavigationState::project(id));
    }

    pub fn navigate_to_category(&mut self, name: impl Into<String>) {
        self.navigate(NavigationState::category(name));
    }

    pub fn navigate_to_creative_director(&mut self) {
        self.navigate(NavigationState::CreativeDirector);
    }

    pub fn navigate_to_architecture_ai(&mut self) {
        self.navigate(NavigationState::ArchitectureAi);
    }

    pub fn navigate_to_about_studio(&mut self) {
        self.navigate(NavigationState::AboutStudio);
    }

    pub fn navigate_to_best_fit(&mut self, segment: BestFitSegment) {
        self.navigate(NavigationState::BestFit(segment));
    }

    /// Go Home if needed, then scroll to the contact section.
    pub fn navigate_to_contact(&mut self) {
        self.navigate_to_section_at(Section::Contact, Instant::now());
    }

    pub fn navigate_to_section(&mut self, section: Section) {
        self.navigate_to_section_at(section, Instant::now());
    }

    /// Go Home if needed, then schedule a smooth scroll to the section anchor.
    pub fn navigate_to_section_at(&mut self, section: Section, now: Instant) {
        if self.state.is_home() {
            self.invalidate_pending();
        } else {
            self.navigate(NavigationState::Home);
        }
        debug!(anchor = section.anchor(), "scheduling anchor scroll");
        self.pending = Some(PendingScroll::new(
            section.anchor(),
            now,
            self.timing,
            self.generation,
        ));
    }

    // --- Deferred scroll ---

    /// Run the deferred anchor scroll if it is due.
    ///
    /// Returns how long until the next attempt, when one is still scheduled.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let mut pending = self.pending.take()?;

        if pending.generation != self.generation {
            debug!(anchor = pending.anchor, "dropping stale anchor scroll");
            return None;
        }

        if !pending.is_due(now) {
            let wait = pending.due.saturating_duration_since(now);
            self.pending = Some(pending);
            return Some(wait);
        }

        if self.viewport.scroll_to_anchor(pending.anchor) {
            debug!(anchor = pending.anchor, "scrolled to anchor");
            return None;
        }

        if pending.retries_left > 0 {
            pending.retries_left -= 1;
            pending.due = now + self.timing.retry_delay;
            debug!(anchor = pending.anchor, "anchor not rendered yet, retrying");
            self.pending = Some(pending);
            return Some(self.timing.retry_delay);
        }

        debug!(anchor = pending.anchor, "anchor never appeared, giving up");
        None
    }

    fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    // --- History ---

    pub fn back(&mut self) {
        self.history.back();
        self.sync_history();
    }

    pub fn forward(&mut self) {
        self.history.forward();
        self.sync_history();
    }

    /// Apply every pop event the history backend has queued.
    ///
    /// Returns true when at least one was applied.
    pub fn sync_history(&mut self) -> bool {
        let events = self.history.take_pop_events();
        let applied = !events.is_empty();
        for event in events {
            self.handle_pop(event);
        }
        applied
    }

    /// Restore the state of one history entry.
    pub fn handle_pop(&mut self, event: PopEvent) {
        let state = match event.snapshot {
            Some(snapshot) => NavigationState::from_snapshot(&snapshot),
            None => {
                let RouteMatch { state, canonical } = route::decode(&event.path);
                if !canonical {
                    self.history
                        .replace(&route::encode(&state), state.snapshot());
                }
                state
            }
        };

        debug!(path = %event.path, to = ?state, "history pop");
        self.state = state;
        self.viewport.scroll_to_origin();
        self.invalidate_pending();
    }
}
