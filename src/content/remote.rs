// Remote content providers - Supabase (PostgREST) and Firestore (REST)
use super::{AboutContent, ContentUpdate, Project, Service};
use crate::error::{Result, SiteError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{error, info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A database that can override the bundled dataset.
///
/// `Ok(None)` means the provider has nothing for that dataset.
pub trait ContentProvider: Send {
    fn name(&self) -> &'static str;
    fn fetch_about(&self) -> Result<Option<AboutContent>>;
    fn fetch_projects(&self) -> Result<Option<Vec<Project>>>;
    fn fetch_services(&self) -> Result<Option<Vec<Service>>>;
}

/// Credentials found in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteConfig {
    Supabase {
        url: String,
        anon_key: String,
    },
    Firestore {
        project_id: String,
        api_key: String,
    },
}

impl RemoteConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Supabase wins when both providers are configured.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let (Some(url), Some(anon_key)) = (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            return Some(RemoteConfig::Supabase {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            });
        }

        if let (Some(project_id), Some(api_key)) =
            (get("FIREBASE_PROJECT_ID"), get("FIREBASE_API_KEY"))
        {
            return Some(RemoteConfig::Firestore {
                project_id,
                api_key,
            });
        }

        None
    }

    pub fn into_provider(self) -> Result<Box<dyn ContentProvider>> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SiteError::remote("http", e))?;

        Ok(match self {
            RemoteConfig::Supabase { url, anon_key } => Box::new(SupabaseProvider {
                client,
                url,
                anon_key,
            }),
            RemoteConfig::Firestore {
                project_id,
                api_key,
            } => Box::new(FirestoreProvider {
                client,
                project_id,
                api_key,
            }),
        })
    }
}

/// Fetch every dataset, keeping whatever succeeded.
///
/// Errors are logged per dataset; the static copy stays in place for those.
pub fn fetch_all(provider: &dyn ContentProvider) -> ContentUpdate {
    let name = provider.name();
    let about = log_failure(name, "about content", provider.fetch_about());
    let projects = log_failure(name, "projects", provider.fetch_projects());
    let services = log_failure(name, "services", provider.fetch_services());

    let update = ContentUpdate {
        about,
        projects,
        services,
    };
    if update.is_empty() {
        warn!(provider = name, "remote provider returned nothing, keeping static content");
    } else {
        info!(
            provider = name,
            projects = update.projects.as_ref().map(Vec::len),
            services = update.services.as_ref().map(Vec::len),
            "remote content loaded"
        );
    }
    update
}

fn log_failure<T>(provider: &str, what: &str, result: Result<Option<T>>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(provider, "error fetching {what}: {e}");
            None
        }
    }
}

// --- Supabase ---

pub struct SupabaseProvider {
    client: Client,
    url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct AboutRow {
    image_url: String,
    image_alt: String,
    heading: String,
    heading_highlight: String,
    description: String,
    philosophy: String,
}

impl From<AboutRow> for AboutContent {
    fn from(row: AboutRow) -> Self {
        AboutContent {
            image_url: row.image_url,
            image_alt: row.image_alt,
            heading: row.heading,
            heading_highlight: row.heading_highlight,
            description: row.description,
            philosophy: row.philosophy,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectRow {
    id: Value,
    title: String,
    category: String,
    #[serde(default)]
    year: Value,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    description: Option<String>,
    image_url: String,
    #[serde(default)]
    gallery: Option<Vec<String>>,
    #[serde(default)]
    is_signature: Option<bool>,
    #[serde(default)]
    signature_order: Option<i64>,
    #[serde(default)]
    category_order: Option<i64>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: scalar_to_string(&row.id),
            title: row.title,
            category: row.category,
            year: scalar_to_string(&row.year),
            location: row.location.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            image_url: row.image_url,
            gallery: row.gallery.unwrap_or_default(),
            is_signature: row.is_signature.unwrap_or(false),
            signature_order: row.signature_order,
            category_order: row.category_order,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ServiceRow {
    id: Value,
    title: String,
    description: String,
    image_url: String,
    category_filter: String,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            id: scalar_to_string(&row.id),
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            category_filter: row.category_filter,
        }
    }
}

impl SupabaseProvider {
    fn table_url(&self, table: &str, query: &str) -> String {
        format!("{}/rest/v1/{}?{}", self.url, table, query)
    }

    fn get<T: DeserializeOwned>(&self, url: &str, single: bool) -> Result<Option<T>> {
        let accept = if single {
            "application/vnd.pgrst.object+json"
        } else {
            "application/json"
        };
        let response = self
            .client
            .get(url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", accept)
            .send()
            .map_err(|e| SiteError::remote(self.name(), e))?;

        let status = response.status();
        // PostgREST answers 406 when a single-row request matches no row
        if single && status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SiteError::remote(self.name(), format!("HTTP {status}")));
        }

        response
            .json()
            .map(Some)
            .map_err(|e| SiteError::remote(self.name(), e))
    }
}

impl ContentProvider for SupabaseProvider {
    fn name(&self) -> &'static str {
        "supabase"
    }

    fn fetch_about(&self) -> Result<Option<AboutContent>> {
        let url = self.table_url("about_content", "select=*");
        Ok(self.get::<AboutRow>(&url, true)?.map(AboutContent::from))
    }

    fn fetch_projects(&self) -> Result<Option<Vec<Project>>> {
        let url = self.table_url("projects", "select=*&order=created_at.desc");
        let rows: Option<Vec<ProjectRow>> = self.get(&url, false)?;
        Ok(rows.map(|rows| rows.into_iter().map(Project::from).collect()))
    }

    fn fetch_services(&self) -> Result<Option<Vec<Service>>> {
        let url = self.table_url("services", "select=*&order=created_at.asc");
        let rows: Option<Vec<ServiceRow>> = self.get(&url, false)?;
        Ok(rows.map(|rows| rows.into_iter().map(Service::from).collect()))
    }
}

// --- Firestore ---

pub struct FirestoreProvider {
    client: Client,
    project_id: String,
    api_key: String,
}

impl FirestoreProvider {
    fn document_url(&self, path: &str) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents/{}?key={}",
            self.project_id, path, self.api_key
        )
    }

    fn get(&self, path: &str) -> Result<Option<Value>> {
        let response = self
            .client
            .get(self.document_url(path))
            .send()
            .map_err(|e| SiteError::remote(self.name(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SiteError::remote(self.name(), format!("HTTP {status}")));
        }

        response
            .json()
            .map(Some)
            .map_err(|e| SiteError::remote(self.name(), e))
    }

    fn collection<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>> {
        let Some(body) = self.get(name)? else {
            return Ok(None);
        };
        let documents = body
            .get("documents")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        documents
            .iter()
            .map(|document| {
                serde_json::from_value(document_to_json(document))
                    .map_err(|e| SiteError::remote(self.name(), e))
            })
            .collect::<Result<Vec<T>>>()
            .map(Some)
    }
}

impl ContentProvider for FirestoreProvider {
    fn name(&self) -> &'static str {
        "firestore"
    }

    fn fetch_about(&self) -> Result<Option<AboutContent>> {
        let Some(document) = self.get("aboutContent/main")? else {
            return Ok(None);
        };
        serde_json::from_value(document_to_json(&document))
            .map(Some)
            .map_err(|e| SiteError::remote(self.name(), e))
    }

    fn fetch_projects(&self) -> Result<Option<Vec<Project>>> {
        self.collection("projects")
    }

    fn fetch_services(&self) -> Result<Option<Vec<Service>>> {
        self.collection("services")
    }
}

/// Flatten a Firestore REST document into plain JSON, with the document id
/// stored under `id`.
pub fn document_to_json(document: &Value) -> Value {
    let mut object = match document.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields),
        _ => Map::new(),
    };

    if let Some(id) = document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
    {
        object
            .entry("id")
            .or_insert_with(|| Value::String(id.to_string()));
    }

    Value::Object(object)
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|map| map.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" => inner.clone(),
        "booleanValue" | "doubleValue" => inner.clone(),
        // 64-bit integers travel as strings
        "integerValue" => match inner {
            Value::String(text) => text
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
            _ => Value::Object(Map::new()),
        },
        _ => Value::Null,
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_credentials() {
        assert_eq!(RemoteConfig::from_lookup(lookup(&[])), None);
        assert_eq!(
            RemoteConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x.supabase.co")])),
            None
        );
        assert_eq!(
            RemoteConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x"), ("SUPABASE_ANON_KEY", "  ")])),
            None
        );
    }

    #[test]
    fn test_supabase_preferred() {
        let config = RemoteConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://x.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("FIREBASE_PROJECT_ID", "site"),
            ("FIREBASE_API_KEY", "key"),
        ]));
        assert_eq!(
            config,
            Some(RemoteConfig::Supabase {
                url: "https://x.supabase.co".to_string(),
                anon_key: "anon".to_string(),
            })
        );
    }

    #[test]
    fn test_firestore_config() {
        let config = RemoteConfig::from_lookup(lookup(&[
            ("FIREBASE_PROJECT_ID", "site"),
            ("FIREBASE_API_KEY", "key"),
        ]));
        assert!(matches!(config, Some(RemoteConfig::Firestore { .. })));
    }

    #[test]
    fn test_supabase_row_mapping() {
        let row: ProjectRow = serde_json::from_value(json!({
            "id": 12,
            "title": "Tower",
            "category": "Commercial Design",
            "year": 2024,
            "location": "Mumbai, India",
            "description": "Offices",
            "image_url": "/images/t.jpg",
            "gallery": null,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        let project = Project::from(row);
        assert_eq!(project.id, "12");
        assert_eq!(project.year, "2024");
        assert!(project.gallery.is_empty());
        assert!(!project.is_signature);
    }

    #[test]
    fn test_firestore_document_decoding() {
        let document = json!({
            "name": "projects/site/databases/(default)/documents/projects/abc123",
            "fields": {
                "title": { "stringValue": "Villa" },
                "category": { "stringValue": "Residential Design" },
                "year": { "stringValue": "2023" },
                "imageUrl": { "stringValue": "/images/v.jpg" },
                "gallery": { "arrayValue": { "values": [ { "stringValue": "/images/v2.jpg" } ] } },
                "isSignature": { "booleanValue": true },
                "signatureOrder": { "integerValue": "2" },
                "categoryOrder": { "nullValue": null }
            }
        });

        let project: Project = serde_json::from_value(document_to_json(&document)).unwrap();
        assert_eq!(project.id, "abc123");
        assert_eq!(project.gallery, vec!["/images/v2.jpg".to_string()]);
        assert!(project.is_signature);
        assert_eq!(project.signature_order, Some(2));
        assert_eq!(project.category_order, None);
    }

    #[test]
    fn test_firestore_empty_array_and_map() {
        let decoded = decode_value(&json!({ "arrayValue": {} }));
        assert_eq!(decoded, json!([]));
        let decoded = decode_value(&json!({ "mapValue": { "fields": { "a": { "integerValue": "7" } } } }));
        assert_eq!(decoded, json!({ "a": 7 }));
    }

    struct Flaky;

    impl ContentProvider for Flaky {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn fetch_about(&self) -> Result<Option<AboutContent>> {
            Err(SiteError::remote("flaky", "timeout"))
        }

        fn fetch_projects(&self) -> Result<Option<Vec<Project>>> {
            Ok(Some(Vec::new()))
        }

        fn fetch_services(&self) -> Result<Option<Vec<Service>>> {
            Ok(None)
        }
    }

    #[test]
    fn test_fetch_all_keeps_partial_results() {
        let update = fetch_all(&Flaky);
        assert_eq!(update.about, None);
        assert_eq!(update.projects, Some(Vec::new()));
        assert_eq!(update.services, None);
    }
}
