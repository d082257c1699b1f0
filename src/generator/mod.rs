// Build-time scanner turning a project image tree into the content dataset
//
// Layout: <root>/<category folder>/<project folder>/ with images and the
// optional project.json and description.md sidecars.
pub mod category;
pub mod description;
pub mod images;
pub mod location;
pub mod watch;

use crate::content::{compare_ordered, Project, Service, PROJECTS_FILE, SERVICES_FILE};
use crate::error::{Result, SiteError};
use bytesize::ByteSize;
use chrono::Datelike;
use ignore::WalkBuilder;
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const PROJECT_CONFIG_FILE: &str = "project.json";
pub const PROJECT_IMAGE_PREFIX: &str = "/images/projects";
pub const SERVICE_IMAGE_PREFIX: &str = "/images/services";

const SKIPPED_FOLDERS: [&str; 1] = ["node_modules"];

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Root of the category folders.
    pub source: PathBuf,
    /// Directory receiving projects.json and services.json.
    pub out: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub image_bytes: u64,
}

/// Ordering hints from project.json.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub is_signature: bool,
    pub signature_order: Option<i64>,
    pub category_order: Option<i64>,
}

impl ProjectConfig {
    pub fn from_value(value: &Value) -> Self {
        Self {
            is_signature: value.get("isSignature") == Some(&Value::Bool(true)),
            signature_order: json_number(value.get("signatureOrder")),
            category_order: json_number(value.get("categoryOrder")),
        }
    }

    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(PROJECT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| SiteError::io(&path, e))?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| SiteError::json(path.display().to_string(), e))?;
        Ok(Self::from_value(&value))
    }
}

fn json_number(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

struct ProjectFolder {
    id: String,
    category_folder: String,
    name: String,
    path: PathBuf,
}

/// Scan `source` and write the dataset to `out`.
pub fn generate(options: &GeneratorOptions) -> Result<Dataset> {
    let dataset = scan(&options.source, chrono::Local::now().year())?;
    write_dataset(&dataset, &options.out)?;
    info!(
        projects = dataset.projects.len(),
        services = dataset.services.len(),
        images = %ByteSize(dataset.image_bytes),
        "wrote dataset to {}",
        options.out.display()
    );
    Ok(dataset)
}

pub fn write_dataset(dataset: &Dataset, out: &Path) -> Result<()> {
    fs::create_dir_all(out).map_err(|e| SiteError::io(out, e))?;
    write_pretty(&out.join(PROJECTS_FILE), &dataset.projects)?;
    write_pretty(&out.join(SERVICES_FILE), &dataset.services)
}

fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| SiteError::json(path.display().to_string(), e))?;
    fs::write(path, text).map_err(|e| SiteError::io(path, e))
}

/// Build the dataset from a folder tree. A missing root yields an empty one.
pub fn scan(source: &Path, current_year: i32) -> Result<Dataset> {
    if !source.is_dir() {
        warn!("projects directory {} not found", source.display());
        return Ok(Dataset::default());
    }

    let category_folders = child_dirs(source)?;
    let mut folders = Vec::new();
    for (category_folder, category_path) in &category_folders {
        let projects = match child_dirs(category_path) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("skipping category {category_folder}: {e}");
                continue;
            }
        };
        for (name, path) in projects {
            folders.push(ProjectFolder {
                id: format!("p{}", folders.len() + 1),
                category_folder: category_folder.clone(),
                name,
                path,
            });
        }
    }

    let built: Vec<(Project, u64)> = folders
        .par_iter()
        .map(|folder| build_project(folder, current_year))
        .collect();

    let image_bytes = built.iter().map(|(_, bytes)| bytes).sum();
    let projects: Vec<Project> = built.into_iter().map(|(project, _)| project).collect();
    let services = build_services(&projects, &category_folders);

    Ok(Dataset {
        projects: order_projects(projects),
        services,
        image_bytes,
    })
}

fn child_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .hidden(true)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut dirs = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| SiteError::io(dir, std::io::Error::other(e)))?;
        if entry.depth() == 0 || !entry.file_type().is_some_and(|kind| kind.is_dir()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if SKIPPED_FOLDERS.contains(&name.as_str()) {
            continue;
        }
        dirs.push((name, entry.into_path()));
    }
    Ok(dirs)
}

fn build_project(folder: &ProjectFolder, current_year: i32) -> (Project, u64) {
    let info = category::category_info(&folder.category_folder);
    let images = images::find_images(&folder.path);

    let details = description::read(&folder.path).unwrap_or_else(|e| {
        warn!("could not read description for {}: {e}", folder.name);
        None
    });
    let config = ProjectConfig::read(&folder.path).unwrap_or_else(|e| {
        warn!("invalid project config for {}: {e}", folder.name);
        ProjectConfig::default()
    });
    let details = details.unwrap_or_default();

    let location = details
        .location
        .filter(|location| !location::is_placeholder(location))
        .unwrap_or_else(|| location::location_from_title(&folder.name));
    let year = details
        .year
        .unwrap_or_else(|| location::year_from_folder(&folder.name, current_year));
    let description = if description::is_template(&details.description) {
        format!(
            "A {} project in {} showcasing innovative design and architectural excellence.",
            info.category.to_lowercase(),
            location
        )
    } else {
        details.description
    };

    let base = format!(
        "{}/{}/{}",
        PROJECT_IMAGE_PREFIX, folder.category_folder, folder.name
    );
    debug!(id = %folder.id, title = %folder.name, "parsed project folder");

    let project = Project {
        id: folder.id.clone(),
        title: folder.name.clone(),
        category: info.category,
        year,
        location,
        description,
        image_url: format!("{base}/{}", images.main),
        gallery: images
            .gallery
            .iter()
            .map(|image| format!("{base}/{image}"))
            .collect(),
        is_signature: config.is_signature,
        signature_order: config.signature_order,
        category_order: config.category_order,
    };
    (project, images.total_bytes)
}

/// One service per category present, sorted by title.
fn build_services(projects: &[Project], category_folders: &[(String, PathBuf)]) -> Vec<Service> {
    let mut services: Vec<Service> = Vec::new();
    for project in projects {
        if services.iter().any(|service| service.category_filter == project.category) {
            continue;
        }
        let Some(folder) = category_folders
            .iter()
            .map(|(name, _)| name)
            .find(|name| category::category_info(name).category == project.category)
        else {
            continue;
        };
        let info = category::category_info(folder);
        let key = category::folder_key(folder);
        services.push(Service {
            id: category::camel_case(&key),
            title: info.display_name,
            description: info.description,
            image_url: format!("{SERVICE_IMAGE_PREFIX}/{key}.jpg"),
            category_filter: info.category,
        });
    }
    services.sort_by(|a, b| a.title.cmp(&b.title));
    services
}

/// Categories keep scan order and are sorted internally; signature
/// projects then move to the front in their own order.
fn order_projects(projects: Vec<Project>) -> Vec<Project> {
    let mut categories: Vec<String> = Vec::new();
    for project in &projects {
        if !categories.contains(&project.category) {
            categories.push(project.category.clone());
        }
    }

    let mut ordered = Vec::with_capacity(projects.len());
    for category in &categories {
        let mut group: Vec<Project> = projects
            .iter()
            .filter(|project| &project.category == category)
            .cloned()
            .collect();
        group.sort_by(|a, b| compare_ordered(a.category_order, b.category_order, &a.title, &b.title));
        ordered.extend(group);
    }

    let (mut signature, rest): (Vec<Project>, Vec<Project>) =
        ordered.into_iter().partition(|project| project.is_signature);
    signature.sort_by(|a, b| compare_ordered(a.signature_order, b.signature_order, &a.title, &b.title));
    signature.extend(rest);
    signature
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn project_dir(root: &Path, category: &str, name: &str, images: &[&str]) -> PathBuf {
        let dir = root.join(category).join(name);
        fs::create_dir_all(&dir).unwrap();
        for image in images {
            fs::write(dir.join(image), [0u8; 4]).unwrap();
        }
        dir
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dataset = scan(Path::new("/no/such/projects"), 2026).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_scan_builds_projects_and_services() {
        let root = tempfile::tempdir().unwrap();
        let villa = project_dir(
            root.path(),
            "residential",
            "Sea Villa, Alibaug",
            &["render-01.jpg", "render-02.jpg"],
        );
        fs::write(
            villa.join("description.md"),
            "## Overview\n\nA house by the sea.\n\n- **Year:** 2021\n",
        )
        .unwrap();
        project_dir(root.path(), "Commercial Design", "Tower 2018", &["cover.png"]);
        project_dir(root.path(), ".drafts", "Hidden", &["a.jpg"]);
        fs::create_dir_all(root.path().join("node_modules/pkg")).unwrap();

        let dataset = scan(root.path(), 2026).unwrap();
        assert_eq!(dataset.projects.len(), 2);
        assert_eq!(dataset.image_bytes, 12);

        let tower = &dataset.projects[0];
        assert_eq!(tower.id, "p1");
        assert_eq!(tower.category, "Commercial Design");
        assert_eq!(tower.year, "2018");
        assert_eq!(tower.location, "India");
        assert_eq!(
            tower.image_url,
            "/images/projects/Commercial Design/Tower 2018/cover.png"
        );
        assert_eq!(
            tower.description,
            "A commercial design project in India showcasing innovative design and architectural excellence."
        );

        let villa = &dataset.projects[1];
        assert_eq!(villa.id, "p2");
        assert_eq!(villa.description, "A house by the sea.");
        assert_eq!(villa.year, "2021");
        assert_eq!(villa.location, "Alibaug, India");
        assert_eq!(
            villa.gallery,
            vec!["/images/projects/residential/Sea Villa, Alibaug/render-02.jpg"]
        );

        let ids: Vec<&str> = dataset.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["commercialDesign", "residential"]);
        assert_eq!(dataset.services[0].image_url, "/images/services/commercial-design.jpg");
        assert_eq!(dataset.services[1].category_filter, "Residential Design");
    }

    #[test]
    fn test_ordering_rules() {
        let root = tempfile::tempdir().unwrap();
        let configs = [
            ("explorations", "Alpha", r#"{"categoryOrder": 2}"#),
            ("explorations", "Beta", r#"{"categoryOrder": 1}"#),
            ("explorations", "Gamma", "{}"),
            ("residential", "Home B", r#"{"isSignature": true, "signatureOrder": 2}"#),
            ("residential", "Home A", r#"{"isSignature": true}"#),
            ("residential", "Home C", r#"{"isSignature": true, "signatureOrder": 1}"#),
            ("residential", "Home D", r#"{"isSignature": "true"}"#),
        ];
        for (category, name, config) in configs {
            let dir = project_dir(root.path(), category, name, &["main.jpg"]);
            fs::write(dir.join(PROJECT_CONFIG_FILE), config).unwrap();
        }

        let dataset = scan(root.path(), 2026).unwrap();
        assert_eq!(
            titles(&dataset.projects),
            vec!["Home C", "Home B", "Home A", "Beta", "Alpha", "Gamma", "Home D"]
        );
    }

    #[test]
    fn test_malformed_project_json_uses_defaults() {
        let root = tempfile::tempdir().unwrap();
        let dir = project_dir(root.path(), "explorations", "Study", &[]);
        fs::write(dir.join(PROJECT_CONFIG_FILE), "{ not json").unwrap();

        let dataset = scan(root.path(), 2026).unwrap();
        let study = &dataset.projects[0];
        assert!(!study.is_signature);
        assert_eq!(study.category_order, None);
        assert_eq!(study.image_url, "/images/projects/explorations/Study/render-01.jpg");
        assert_eq!(study.year, "2026");
    }

    #[test]
    fn test_project_config_numbers_only() {
        let value = serde_json::json!({"isSignature": 1, "signatureOrder": "3", "categoryOrder": 4});
        let config = ProjectConfig::from_value(&value);
        assert_eq!(
            config,
            ProjectConfig {
                is_signature: false,
                signature_order: None,
                category_order: Some(4),
            }
        );
    }

    #[test]
    fn test_generate_writes_pretty_json() {
        let root = tempfile::tempdir().unwrap();
        project_dir(root.path(), "mixed-use", "Plaza, Pune", &["hero.webp"]);
        let out = root.path().join("out/data");

        let options = GeneratorOptions {
            source: root.path().to_path_buf(),
            out: out.clone(),
        };
        let dataset = generate(&options).unwrap();

        let text = fs::read_to_string(out.join(PROJECTS_FILE)).unwrap();
        assert!(text.contains("\n  {\n    \"id\": \"p1\""));
        let projects: Vec<Project> = serde_json::from_str(&text).unwrap();
        assert_eq!(projects, dataset.projects);

        let services: Vec<Service> =
            serde_json::from_str(&fs::read_to_string(out.join(SERVICES_FILE)).unwrap()).unwrap();
        assert_eq!(services[0].id, "mixedUse");
        assert_eq!(services[0].title, "MIXED-USE DESIGN");
    }
}
