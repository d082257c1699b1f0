// Main image and gallery selection for a project folder

use image::ImageFormat;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_MAIN_IMAGE: &str = "render-01.jpg";
pub const MAX_GALLERY_IMAGES: usize = 10;

const MAIN_MARKERS: [&str; 4] = ["render-01", "main", "cover", "hero"];
const GALLERY_MARKERS: [&str; 2] = ["gallery", "img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImages {
    pub main: String,
    pub gallery: Vec<String>,
    /// Combined size of every image found in the folder.
    pub total_bytes: u64,
}

impl Default for ProjectImages {
    fn default() -> Self {
        Self {
            main: DEFAULT_MAIN_IMAGE.to_string(),
            gallery: Vec::new(),
            total_bytes: 0,
        }
    }
}

pub fn is_image(name: &str) -> bool {
    matches!(
        ImageFormat::from_path(name),
        Ok(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP)
    )
}

/// Number following the first `render-` marker, if any.
pub fn render_number(name: &str) -> Option<u64> {
    let lower = name.to_lowercase();
    lower.match_indices("render-").find_map(|(index, marker)| {
        let digits: String = lower[index + marker.len()..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits.parse().unwrap_or(u64::MAX))
        }
    })
}

/// Numbered renders first in numeric order, then the rest alphabetically.
pub fn sort_images(names: &mut [String]) {
    names.sort_by(|a, b| match (render_number(a), render_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}

pub fn select_images(mut names: Vec<String>) -> ProjectImages {
    sort_images(&mut names);

    let main = names
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            MAIN_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .or_else(|| names.first())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MAIN_IMAGE.to_string());

    let gallery = names
        .iter()
        .filter(|name| **name != main)
        .filter(|name| match render_number(name) {
            Some(number) => number >= 2,
            None => {
                let lower = name.to_lowercase();
                GALLERY_MARKERS.iter().any(|marker| lower.contains(marker))
            }
        })
        .take(MAX_GALLERY_IMAGES)
        .cloned()
        .collect();

    ProjectImages {
        main,
        gallery,
        total_bytes: 0,
    }
}

/// Scan a project folder. Read errors log a warning and yield the defaults.
pub fn find_images(dir: &Path) -> ProjectImages {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("could not read images in {}: {e}", dir.display());
            return ProjectImages::default();
        }
    };

    let mut names = Vec::new();
    let mut total_bytes = 0;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_image(&name) {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            if !metadata.is_file() {
                continue;
            }
            total_bytes += metadata.len();
        }
        names.push(name);
    }

    ProjectImages {
        total_bytes,
        ..select_images(names)
    }
}
