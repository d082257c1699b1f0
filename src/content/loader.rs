#[cfg(not(target_arch = "wasm32"))]
use super::remote::{fetch_all, RemoteConfig};
use super::ContentUpdate;
use std::sync::mpsc::{channel, Receiver};
use tracing::warn;
#[cfg(not(target_arch = "wasm32"))]
use tracing::error;

pub enum LoadResult {
    Loaded(ContentUpdate),
    /// No credentials were configured; the static dataset stays.
    Unconfigured,
    Failed(String),
}

/// Fetch remote content on a background thread.
///
/// The result arrives on the returned channel and a repaint is requested.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_remote_load(
    ctx: eframe::egui::Context,
    config: Option<RemoteConfig>,
) -> Receiver<LoadResult> {
    let (tx, rx) = channel();

    std::thread::spawn(move || {
        let result = match config {
            None => {
                warn!("remote content not configured, using static content");
                LoadResult::Unconfigured
            }
            Some(config) => match config.into_provider() {
                Ok(provider) => LoadResult::Loaded(fetch_all(provider.as_ref())),
                Err(e) => {
                    error!("could not create content provider: {e}");
                    LoadResult::Failed(e.to_string())
                }
            },
        };
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    rx
}

/// Loader for builds without a remote provider, such as the browser build.
/// Answers at once; the static dataset stays.
pub fn static_only() -> Receiver<LoadResult> {
    warn!("remote content not available in this build, using static content");
    let (tx, rx) = channel();
    let _ = tx.send(LoadResult::Unconfigured);
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_only_answers_unconfigured() {
        let rx = static_only();
        assert!(matches!(rx.try_recv(), Ok(LoadResult::Unconfigured)));
        assert!(rx.try_recv().is_err());
    }
}
