// Document metadata - title, social tags and JSON-LD
//
// A view applies its metadata when it mounts and gets back a guard; dropping
// the guard puts the document back the way it was.

pub mod schema;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::{debug, warn};

/// Head tags a page overwrites while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetaTag {
    Description,
    OgTitle,
    OgDescription,
    TwitterTitle,
    TwitterDescription,
}

impl MetaTag {
    pub const ALL: [MetaTag; 5] = [
        MetaTag::Description,
        MetaTag::OgTitle,
        MetaTag::OgDescription,
        MetaTag::TwitterTitle,
        MetaTag::TwitterDescription,
    ];

    /// CSS selector of the tag in an HTML document.
    pub fn selector(self) -> &'static str {
        match self {
            MetaTag::Description => r#"meta[name="description"]"#,
            MetaTag::OgTitle => r#"meta[property="og:title"]"#,
            MetaTag::OgDescription => r#"meta[property="og:description"]"#,
            MetaTag::TwitterTitle => r#"meta[name="twitter:title"]"#,
            MetaTag::TwitterDescription => r#"meta[name="twitter:description"]"#,
        }
    }

    fn is_title(self) -> bool {
        matches!(self, MetaTag::OgTitle | MetaTag::TwitterTitle)
    }
}

/// The document `<head>`.
pub trait DocumentHead {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    /// Content of a meta tag, `None` when the document has no such tag.
    fn meta(&self, tag: MetaTag) -> Option<String>;
    /// Overwrite a meta tag. Tags missing from the document are not created.
    fn set_meta(&mut self, tag: MetaTag, content: &str);
    /// Insert a JSON-LD script, replacing any script with the same id.
    fn insert_script(&mut self, id: &str, json: &str);
    fn remove_script(&mut self, id: &str);
    fn script(&self, id: &str) -> Option<String>;
}

pub type SharedHead = Rc<RefCell<dyn DocumentHead>>;

pub fn shared<H: DocumentHead + 'static>(head: H) -> SharedHead {
    Rc::new(RefCell::new(head))
}

/// Plain in-memory head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    title: String,
    meta: BTreeMap<MetaTag, String>,
    scripts: BTreeMap<String, String>,
}

impl MemoryHead {
    /// A head carrying every meta tag, the way the site's index page ships.
    pub fn with_site_defaults(title: &str, description: &str) -> Self {
        let meta = MetaTag::ALL
            .into_iter()
            .map(|tag| {
                let content = if tag.is_title() { title } else { description };
                (tag, content.to_string())
            })
            .collect();

        Self {
            title: title.to_string(),
            meta,
            scripts: BTreeMap::new(),
        }
    }

    /// A head with only a title and none of the meta tags.
    pub fn bare(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }
}

impl DocumentHead for MemoryHead {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn meta(&self, tag: MetaTag) -> Option<String> {
        self.meta.get(&tag).cloned()
    }

    fn set_meta(&mut self, tag: MetaTag, content: &str) {
        if let Some(existing) = self.meta.get_mut(&tag) {
            *existing = content.to_string();
        }
    }

    fn insert_script(&mut self, id: &str, json: &str) {
        self.scripts.insert(id.to_string(), json.to_string());
    }

    fn remove_script(&mut self, id: &str) {
        self.scripts.remove(id);
    }

    fn script(&self, id: &str) -> Option<String> {
        self.scripts.get(id).cloned()
    }
}

/// One JSON-LD block keyed by its element id.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredData {
    pub id: &'static str,
    pub json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub structured_data: Vec<StructuredData>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            structured_data: Vec::new(),
        }
    }

    pub fn with_structured_data(mut self, data: StructuredData) -> Self {
        self.structured_data.push(data);
        self
    }
}

/// Restores the document head when dropped.
pub struct MetadataGuard {
    head: SharedHead,
    previous_title: String,
    previous_meta: Vec<(MetaTag, String)>,
    scripts: Vec<&'static str>,
}

impl MetadataGuard {
    pub fn apply(head: &SharedHead, metadata: &PageMetadata) -> Self {
        let mut doc = head.borrow_mut();

        let previous_title = doc.title();
        let previous_meta = MetaTag::ALL
            .into_iter()
            .filter_map(|tag| doc.meta(tag).map(|content| (tag, content)))
            .collect();

        doc.set_title(&metadata.title);
        for tag in MetaTag::ALL {
            let content = if tag.is_title() {
                &metadata.title
            } else {
                &metadata.description
            };
            doc.set_meta(tag, content);
        }

        let mut scripts = Vec::with_capacity(metadata.structured_data.len());
        for data in &metadata.structured_data {
            doc.insert_script(data.id, &data.json);
            scripts.push(data.id);
        }
        drop(doc);

        debug!(title = %metadata.title, "page metadata applied");

        Self {
            head: Rc::clone(head),
            previous_title,
            previous_meta,
            scripts,
        }
    }
}

impl Drop for MetadataGuard {
    fn drop(&mut self) {
        let Ok(mut doc) = self.head.try_borrow_mut() else {
            warn!("document head busy, metadata not restored");
            return;
        };

        doc.set_title(&self.previous_title);
        for (tag, content) in &self.previous_meta {
            doc.set_meta(*tag, content);
        }
        for id in &self.scripts {
            doc.remove_script(id);
        }
    }
}
