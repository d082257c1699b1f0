// Image sources for site paths like /images/projects/<category>/<project>/x.jpg

use crate::style;
use eframe::egui;
use std::path::{Path, PathBuf};

/// Percent-encode every segment of a site path, keeping the slashes.
pub fn encode_path(url: &str) -> String {
    url.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// The encoded form first, then the raw path when it differs.
pub fn candidates(url: &str) -> Vec<String> {
    let encoded = encode_path(url);
    if encoded == url {
        vec![encoded]
    } else {
        vec![encoded, url.to_string()]
    }
}

/// Resolves site paths to loader URIs.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    public_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// First candidate that exists under the public directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }
        candidates(url)
            .into_iter()
            .map(|candidate| self.public_dir.join(candidate.trim_start_matches('/')))
            .find(|path| path.is_file())
            .map(|path| format!("file://{}", path.display()))
    }

    /// The browser fetches relative to the page; the encoded path is the one
    /// that survives spaces in folder names.
    #[cfg(target_arch = "wasm32")]
    pub fn resolve(&self, url: &str) -> Option<String> {
        (!url.is_empty()).then(|| encode_path(url))
    }

    /// Draw an image filling `size`, or a placeholder frame when it cannot
    /// be found.
    pub fn show(&self, ui: &mut egui::Ui, url: &str, size: egui::Vec2) -> egui::Response {
        match self.resolve(url) {
            Some(uri) => ui.add(
                egui::Image::new(uri)
                    .fit_to_exact_size(size)
                    .maintain_aspect_ratio(false)
                    .show_loading_spinner(true),
            ),
            None => placeholder(ui, size),
        }
    }
}

pub fn placeholder(ui: &mut egui::Ui, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter().rect_filled(rect, 0.0, style::PLACEHOLDER);
    ui.painter().rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, style::BORDER),
        egui::StrokeKind::Inside,
    );
    response
}
