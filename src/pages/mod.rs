// Long-form pages and per-destination metadata
//
// Page copy lives in TOML documents under assets/pages and is compiled in.

use crate::content::ContentStore;
use crate::error::{Result, SiteError};
use crate::head::schema::{self, Organization};
use crate::head::PageMetadata;
use crate::router::{BestFitSegment, NavigationState, Section};
use serde::Deserialize;
use std::collections::HashMap;

pub const STUDIO_NAME: &str = "Mukherji Architects Milano";
pub const STUDIO_DESCRIPTION: &str = "Mukherji Architects Milano: residential, commercial and hospitality architecture, interiors and master planning between Milan and Mumbai.";
pub const STUDIO_URL: &str = "https://www.mukherjiarchitects.com";
pub const LINEAGE_NAME: &str = "Bobby Mukherji Architects";
pub const LINEAGE_URL: &str = "https://bobbymukherji.com/";
pub const CREATIVE_DIRECTOR_NAME: &str = "Shaunak Mukherji";

/// Long-form page identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    CreativeDirector,
    ArchitectureAi,
    AboutStudio,
    BestFit(BestFitSegment),
}

impl PageId {
    pub fn for_state(state: &NavigationState) -> Option<Self> {
        match state {
            NavigationState::CreativeDirector => Some(PageId::CreativeDirector),
            NavigationState::ArchitectureAi => Some(PageId::ArchitectureAi),
            NavigationState::AboutStudio => Some(PageId::AboutStudio),
            NavigationState::BestFit(segment) => Some(PageId::BestFit(*segment)),
            NavigationState::Home
            | NavigationState::ProjectDetail(_)
            | NavigationState::CategoryListing(_) => None,
        }
    }

    fn source(self) -> (&'static str, &'static str) {
        match self {
            PageId::CreativeDirector => (
                "creative-director.toml",
                include_str!("../../assets/pages/creative-director.toml"),
            ),
            PageId::ArchitectureAi => (
                "architecture-ai.toml",
                include_str!("../../assets/pages/architecture-ai.toml"),
            ),
            PageId::AboutStudio => (
                "about-studio.toml",
                include_str!("../../assets/pages/about-studio.toml"),
            ),
            PageId::BestFit(BestFitSegment::Commercial) => (
                "best-fit-commercial.toml",
                include_str!("../../assets/pages/best-fit-commercial.toml"),
            ),
            PageId::BestFit(BestFitSegment::Institutional) => (
                "best-fit-institutional.toml",
                include_str!("../../assets/pages/best-fit-institutional.toml"),
            ),
            PageId::BestFit(BestFitSegment::MasterPlanning) => (
                "best-fit-master-planning.toml",
                include_str!("../../assets/pages/best-fit-master-planning.toml"),
            ),
            PageId::BestFit(BestFitSegment::MixedUse) => (
                "best-fit-mixed-use.toml",
                include_str!("../../assets/pages/best-fit-mixed-use.toml"),
            ),
            PageId::BestFit(BestFitSegment::Research) => (
                "best-fit-research.toml",
                include_str!("../../assets/pages/best-fit-research.toml"),
            ),
            PageId::BestFit(BestFitSegment::Residential) => (
                "best-fit-residential.toml",
                include_str!("../../assets/pages/best-fit-residential.toml"),
            ),
        }
    }

    fn all() -> impl Iterator<Item = PageId> {
        [PageId::CreativeDirector, PageId::ArchitectureAi, PageId::AboutStudio]
            .into_iter()
            .chain(BestFitSegment::ALL.into_iter().map(PageId::BestFit))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// Document title while the page is mounted.
    pub title: String,
    pub description: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub portrait_fallback: Option<String>,
    #[serde(default)]
    pub tldr: Option<String>,
    #[serde(default)]
    pub sections: Vec<ArticleSection>,
    #[serde(default)]
    pub links_heading: Option<String>,
    #[serde(default)]
    pub links_intro: Option<String>,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSection {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
    /// Paragraphs after the bullet list.
    #[serde(default)]
    pub closing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageLink {
    pub label: String,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LinkTarget {
    /// An internal path, decoded with the router's codec.
    Route { path: String },
    /// A home page section.
    Section { section: Section },
    Category { name: String },
    External { url: String },
}

#[derive(Debug, Clone, Default)]
pub struct PageCatalog {
    pages: HashMap<PageId, Article>,
}

impl PageCatalog {
    pub fn load() -> Result<Self> {
        let mut pages = HashMap::new();
        for id in PageId::all() {
            let (name, text) = id.source();
            let article = toml::from_str(text).map_err(|e| SiteError::toml(name, e))?;
            pages.insert(id, article);
        }
        Ok(Self { pages })
    }

    pub fn get(&self, id: PageId) -> Option<&Article> {
        self.pages.get(&id)
    }

    pub fn for_state(&self, state: &NavigationState) -> Option<&Article> {
        PageId::for_state(state).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Title, description and JSON-LD for a destination. Home keeps the site's own.
pub fn metadata_for(
    state: &NavigationState,
    content: &ContentStore,
    catalog: &PageCatalog,
) -> Option<PageMetadata> {
    match state {
        NavigationState::Home => None,
        NavigationState::ProjectDetail(id) => {
            let project = content.project(id)?;
            let description = if project.description.is_empty() {
                format!("{} in {}, {}.", project.category, project.location, project.year)
            } else {
                project.description.clone()
            };
            Some(PageMetadata::new(
                format!("{} | {}", project.title, STUDIO_NAME),
                description,
            ))
        }
        NavigationState::CategoryListing(name) => Some(PageMetadata::new(
            format!("{} Projects | {}", name, STUDIO_NAME),
            format!(
                "Selected works demonstrating our approach to {} architecture.",
                name.to_lowercase()
            ),
        )),
        NavigationState::CreativeDirector => {
            let article = catalog.get(PageId::CreativeDirector)?;
            Some(article_metadata(article).with_structured_data(creative_director_person()))
        }
        NavigationState::ArchitectureAi => {
            let article = catalog.get(PageId::ArchitectureAi)?;
            let work = schema::creative_work(
                &article.heading,
                &article.description,
                CREATIVE_DIRECTOR_NAME,
            );
            Some(article_metadata(article).with_structured_data(work))
        }
        NavigationState::AboutStudio => {
            let article = catalog.get(PageId::AboutStudio)?;
            Some(
                article_metadata(article)
                    .with_structured_data(creative_director_person())
                    .with_structured_data(faq_schema(article)),
            )
        }
        NavigationState::BestFit(segment) => {
            let article = catalog.get(PageId::BestFit(*segment))?;
            Some(article_metadata(article).with_structured_data(faq_schema(article)))
        }
    }
}

fn article_metadata(article: &Article) -> PageMetadata {
    PageMetadata::new(article.title.clone(), article.description.clone())
}

fn faq_schema(article: &Article) -> crate::head::StructuredData {
    schema::faq_page(
        article
            .faqs
            .iter()
            .map(|faq| (faq.question.as_str(), faq.answer.as_str())),
    )
}

fn creative_director_person() -> crate::head::StructuredData {
    schema::person(
        CREATIVE_DIRECTOR_NAME,
        "Founder and Creative Director",
        Organization {
            name: STUDIO_NAME,
            url: STUDIO_URL,
        },
        Some(Organization {
            name: LINEAGE_NAME,
            url: LINEAGE_URL,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::sample_store;
    use crate::head::schema::{CREATIVE_WORK_SCRIPT_ID, FAQ_SCRIPT_ID, PERSON_SCRIPT_ID};
    use crate::router::route;
    use pretty_assertions::assert_eq;

    fn script_ids(metadata: &PageMetadata) -> Vec<&'static str> {
        metadata.structured_data.iter().map(|data| data.id).collect()
    }

    #[test]
    fn test_catalog_loads_every_page() {
        let catalog = PageCatalog::load().unwrap();
        assert_eq!(catalog.len(), 9);
        for segment in BestFitSegment::ALL {
            let article = catalog.get(PageId::BestFit(segment)).unwrap();
            assert!(!article.faqs.is_empty(), "{segment:?}");
            assert!(!article.links.is_empty(), "{segment:?}");
        }
    }

    #[test]
    fn test_route_links_decode_to_real_destinations() {
        let catalog = PageCatalog::load().unwrap();
        for id in PageId::all() {
            for link in &catalog.get(id).unwrap().links {
                if let LinkTarget::Route { path } = &link.target {
                    let matched = route::decode(path);
                    assert!(matched.canonical, "{path}");
                    assert!(!matched.state.is_home(), "{path}");
                }
            }
        }
    }

    #[test]
    fn test_about_studio_metadata() {
        let catalog = PageCatalog::load().unwrap();
        let metadata = metadata_for(&NavigationState::AboutStudio, &sample_store(), &catalog).unwrap();
        assert_eq!(
            metadata.title,
            "About Mukherji Architects Milano | Milan Architecture Studio"
        );
        assert_eq!(script_ids(&metadata), vec![PERSON_SCRIPT_ID, FAQ_SCRIPT_ID]);
    }

    #[test]
    fn test_structured_data_per_page() {
        let catalog = PageCatalog::load().unwrap();
        let store = sample_store();

        let director = metadata_for(&NavigationState::CreativeDirector, &store, &catalog).unwrap();
        assert_eq!(script_ids(&director), vec![PERSON_SCRIPT_ID]);

        let essay = metadata_for(&NavigationState::ArchitectureAi, &store, &catalog).unwrap();
        assert_eq!(script_ids(&essay), vec![CREATIVE_WORK_SCRIPT_ID]);

        let best_fit = metadata_for(
            &NavigationState::BestFit(BestFitSegment::Commercial),
            &store,
            &catalog,
        )
        .unwrap();
        assert_eq!(
            best_fit.title,
            "Best-Fit Commercial Architects | Mukherji Architects Milano"
        );
        assert_eq!(script_ids(&best_fit), vec![FAQ_SCRIPT_ID]);
    }

    #[test]
    fn test_content_destinations() {
        let catalog = PageCatalog::default();
        let store = sample_store();

        assert_eq!(metadata_for(&NavigationState::Home, &store, &catalog), None);
        assert_eq!(
            metadata_for(&NavigationState::project("p99"), &store, &catalog),
            None
        );

        let project = metadata_for(&NavigationState::project("p4"), &store, &catalog).unwrap();
        assert_eq!(project.title, "Tower | Mukherji Architects Milano");
        assert_eq!(project.description, "Commercial Design in Mumbai, India, 2024.");

        let listing = metadata_for(
            &NavigationState::category("Residential Design"),
            &store,
            &catalog,
        )
        .unwrap();
        assert_eq!(listing.title, "Residential Design Projects | Mukherji Architects Milano");
        assert!(listing.structured_data.is_empty());
    }
}
