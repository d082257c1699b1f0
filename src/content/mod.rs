// Content model and the in-memory dataset the views read from
pub mod loader;
#[cfg(not(target_arch = "wasm32"))]
pub mod remote;

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PROJECTS_FILE: &str = "projects.json";
pub const SERVICES_FILE: &str = "services.json";
pub const ABOUT_FILE: &str = "about.json";

const MAX_SIGNATURE_PROJECTS: usize = 4;

const BUNDLED_PROJECTS: &str = include_str!("../../assets/content/projects.json");
const BUNDLED_SERVICES: &str = include_str!("../../assets/content/services.json");
const BUNDLED_ABOUT: &str = include_str!("../../assets/content/about.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub is_signature: bool,
    #[serde(default)]
    pub signature_order: Option<i64>,
    #[serde(default)]
    pub category_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Project category this service links to.
    pub category_filter: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub image_url: String,
    pub image_alt: String,
    pub heading: String,
    pub heading_highlight: String,
    pub description: String,
    pub philosophy: String,
}

/// Datasets delivered by a remote provider. `None` keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentUpdate {
    pub about: Option<AboutContent>,
    pub projects: Option<Vec<Project>>,
    pub services: Option<Vec<Service>>,
}

impl ContentUpdate {
    pub fn is_empty(&self) -> bool {
        self.about.is_none() && self.projects.is_none() && self.services.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    projects: Vec<Project>,
    services: Vec<Service>,
    about: AboutContent,
}

impl ContentStore {
    pub fn new(projects: Vec<Project>, services: Vec<Service>, about: AboutContent) -> Self {
        Self {
            projects,
            services,
            about,
        }
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            projects: parse_json(BUNDLED_PROJECTS, "bundled projects")?,
            services: parse_json(BUNDLED_SERVICES, "bundled services")?,
            about: parse_json(BUNDLED_ABOUT, "bundled about content")?,
        })
    }

    /// Load a generator output directory. A missing `about.json` falls back
    /// to the bundled copy.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let projects = read_json(&dir.join(PROJECTS_FILE))?;
        let services = read_json(&dir.join(SERVICES_FILE))?;

        let about_path = dir.join(ABOUT_FILE);
        let about = if about_path.exists() {
            read_json(&about_path)?
        } else {
            parse_json(BUNDLED_ABOUT, "bundled about content")?
        };

        Ok(Self {
            projects,
            services,
            about,
        })
    }

    pub fn apply(&mut self, update: ContentUpdate) {
        if let Some(about) = update.about {
            self.about = about;
        }
        if let Some(projects) = update.projects {
            self.projects = projects;
        }
        if let Some(services) = update.services {
            self.services = services;
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn about(&self) -> &AboutContent {
        &self.about
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Projects of one category, explicitly ordered ones first, then by title.
    pub fn projects_in_category(&self, category: &str) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .iter()
            .filter(|project| project.category == category)
            .collect();
        projects.sort_by(|a, b| compare_ordered(a.category_order, b.category_order, &a.title, &b.title));
        projects
    }

    /// Image shown on a service card.
    pub fn cover_image(&self, category: &str) -> Option<&str> {
        let mut in_category = self
            .projects
            .iter()
            .filter(|project| project.category == category)
            .peekable();

        if in_category.peek().is_none() {
            return self
                .services
                .iter()
                .find(|service| service.category_filter == category)
                .map(|service| service.image_url.as_str());
        }

        let mut first = None;
        for project in in_category {
            if project.category_order == Some(1) {
                return Some(project.image_url.as_str());
            }
            first.get_or_insert(project);
        }
        first.map(|project| project.image_url.as_str())
    }

    pub fn signature_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|project| project.is_signature)
            .take(MAX_SIGNATURE_PROJECTS)
    }
}

/// Order by an optional explicit position, then by title.
pub fn compare_ordered(
    a_order: Option<i64>,
    b_order: Option<i64>,
    a_title: &str,
    b_title: &str,
) -> std::cmp::Ordering {
    match (a_order, b_order) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| a_title.cmp(b_title)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a_title.cmp(b_title),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(text: &str, context: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| SiteError::json(context, e))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
    parse_json(&text, &path.display().to_string())
}
