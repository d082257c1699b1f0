use super::{generate, GeneratorOptions};
use crate::error::{Result, SiteError};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Outcome of waiting for a quiet period after the first event of a burst.
#[derive(Debug, PartialEq, Eq)]
pub struct Burst<T> {
    pub events: Vec<T>,
    /// The sender went away while collecting.
    pub closed: bool,
}

/// Collect events until nothing arrives for `quiet`.
pub fn collect_burst<T>(rx: &Receiver<T>, first: T, quiet: Duration) -> Burst<T> {
    let mut events = vec![first];
    loop {
        match rx.recv_timeout(quiet) {
            Ok(event) => events.push(event),
            Err(RecvTimeoutError::Timeout) => return Burst { events, closed: false },
            Err(RecvTimeoutError::Disconnected) => return Burst { events, closed: true },
        }
    }
}

/// Generate once, then regenerate after every burst of changes under the
/// source folder. Blocks until the watcher shuts down.
pub fn watch(options: &GeneratorOptions) -> Result<()> {
    if let Err(e) = generate(options) {
        error!("initial generation failed: {e}");
    }

    let (tx, rx) = channel();
    let mut watcher: RecommendedWatcher =
        notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })
        .map_err(|e| SiteError::Watch(e.to_string()))?;

    watcher
        .watch(&options.source, RecursiveMode::Recursive)
        .map_err(|e| SiteError::Watch(e.to_string()))?;
    info!("watching {} for changes", options.source.display());

    while let Ok(first) = rx.recv() {
        let burst = collect_burst(&rx, first, DEBOUNCE);
        let changed = burst
            .events
            .iter()
            .filter_map(|res| match res {
                Ok(event) => Some(event.paths.len()),
                Err(e) => {
                    warn!("watch error: {e}");
                    None
                }
            })
            .sum::<usize>();

        info!(paths = changed, "change detected, regenerating");
        if let Err(e) = generate(options) {
            error!("regeneration failed: {e}");
        }
        if burst.closed {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_burst_until_quiet() {
        let (tx, rx) = channel();
        tx.send(2).unwrap();
        tx.send(3).unwrap();

        let burst = collect_burst(&rx, 1, Duration::from_millis(20));
        assert_eq!(burst, Burst { events: vec![1, 2, 3], closed: false });
        drop(tx);
    }

    #[test]
    fn test_burst_reports_closed_channel() {
        let (tx, rx) = channel();
        tx.send("b").unwrap();
        drop(tx);

        let burst = collect_burst(&rx, "a", Duration::from_millis(20));
        assert_eq!(burst, Burst { events: vec!["a", "b"], closed: true });
    }
}
