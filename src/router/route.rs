// Canonical URL encoding for navigation states
//
// Every navigation state has exactly one canonical path. Decoding is the
// inverse of encoding; anything unrecognised lands on Home.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const HOME_PATH: &str = "/";
pub const CREATIVE_DIRECTOR_PATH: &str = "/shaunak-mukherji";
pub const LEGACY_CREATIVE_DIRECTOR_PATH: &str = "/creative-director";
pub const ARCHITECTURE_AI_PATH: &str = "/architecture-artificial-intelligence";
pub const ABOUT_STUDIO_PATH: &str = "/about-mukherji-architects-milano";
pub const ABOUT_ALIAS_PATH: &str = "/about";

const PROJECT_PREFIX: &str = "/project/";
const CATEGORY_PREFIX: &str = "/category/";
const BEST_FIT_PREFIX: &str = "/best-fit/";

/// Client segments that each have a long-form "best-fit" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestFitSegment {
    Commercial,
    Institutional,
    MasterPlanning,
    MixedUse,
    Research,
    Residential,
}

impl BestFitSegment {
    pub const ALL: [BestFitSegment; 6] = [
        BestFitSegment::Commercial,
        BestFitSegment::Institutional,
        BestFitSegment::MasterPlanning,
        BestFitSegment::MixedUse,
        BestFitSegment::Research,
        BestFitSegment::Residential,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            BestFitSegment::Commercial => "commercial",
            BestFitSegment::Institutional => "institutional",
            BestFitSegment::MasterPlanning => "master-planning",
            BestFitSegment::MixedUse => "mixed-use",
            BestFitSegment::Research => "research",
            BestFitSegment::Residential => "residential",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|segment| segment.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            BestFitSegment::Commercial => "Commercial",
            BestFitSegment::Institutional => "Institutional",
            BestFitSegment::MasterPlanning => "Master Planning",
            BestFitSegment::MixedUse => "Mixed-Use",
            BestFitSegment::Research => "Research & Exploration",
            BestFitSegment::Residential => "Residential",
        }
    }
}

/// The `currentView` tag of a navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewKind {
    Home,
    ProjectDetail,
    CategoryListing,
    CreativeDirector,
    ArchitectureAi,
    AboutStudio,
    BestFit(BestFitSegment),
}

impl ViewKind {
    /// Whether states of this kind carry a `selected_id`.
    pub fn takes_parameter(self) -> bool {
        matches!(self, ViewKind::ProjectDetail | ViewKind::CategoryListing)
    }
}

/// What is currently shown.
///
/// The parameter lives inside the variant, so a `selected_id` exists exactly
/// for the destinations that need one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NavigationState {
    #[default]
    Home,
    ProjectDetail(String),
    CategoryListing(String),
    CreativeDirector,
    ArchitectureAi,
    AboutStudio,
    BestFit(BestFitSegment),
}

impl NavigationState {
    pub fn project(id: impl Into<String>) -> Self {
        NavigationState::ProjectDetail(id.into())
    }

    pub fn category(name: impl Into<String>) -> Self {
        NavigationState::CategoryListing(name.into())
    }

    pub fn current_view(&self) -> ViewKind {
        match self {
            NavigationState::Home => ViewKind::Home,
            NavigationState::ProjectDetail(_) => ViewKind::ProjectDetail,
            NavigationState::CategoryListing(_) => ViewKind::CategoryListing,
            NavigationState::CreativeDirector => ViewKind::CreativeDirector,
            NavigationState::ArchitectureAi => ViewKind::ArchitectureAi,
            NavigationState::AboutStudio => ViewKind::AboutStudio,
            NavigationState::BestFit(segment) => ViewKind::BestFit(*segment),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            NavigationState::ProjectDetail(id) | NavigationState::CategoryListing(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, NavigationState::Home)
    }

    /// Rebuild a state from a history snapshot.
    ///
    /// A parameterised view whose id went missing keeps an empty id; the view
    /// renders its not-found state for it.
    pub fn from_snapshot(snapshot: &HistorySnapshot) -> Self {
        let id = || snapshot.id.clone().unwrap_or_default();
        match snapshot.view {
            ViewKind::Home => NavigationState::Home,
            ViewKind::ProjectDetail => NavigationState::ProjectDetail(id()),
            ViewKind::CategoryListing => NavigationState::CategoryListing(id()),
            ViewKind::CreativeDirector => NavigationState::CreativeDirector,
            ViewKind::ArchitectureAi => NavigationState::ArchitectureAi,
            ViewKind::AboutStudio => NavigationState::AboutStudio,
            ViewKind::BestFit(segment) => NavigationState::BestFit(segment),
        }
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            view: self.current_view(),
            id: self.selected_id().map(str::to_string),
        }
    }
}

/// State attached to one browser history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub view: ViewKind,
    pub id: Option<String>,
}

/// Result of decoding a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub state: NavigationState,
    /// False when the address bar should be rewritten: aliases, unknown
    /// paths and parameters spelled differently from their encoding.
    pub canonical: bool,
}

impl RouteMatch {
    fn exact(state: NavigationState) -> Self {
        Self {
            state,
            canonical: true,
        }
    }

    fn rewritten(state: NavigationState) -> Self {
        Self {
            state,
            canonical: false,
        }
    }
}

pub fn encode(state: &NavigationState) -> String {
    match state {
        NavigationState::Home => HOME_PATH.to_string(),
        NavigationState::ProjectDetail(id) => {
            format!("{}{}", PROJECT_PREFIX, urlencoding::encode(id))
        }
        NavigationState::CategoryListing(name) => {
            format!("{}{}", CATEGORY_PREFIX, urlencoding::encode(name))
        }
        NavigationState::CreativeDirector => CREATIVE_DIRECTOR_PATH.to_string(),
        NavigationState::ArchitectureAi => ARCHITECTURE_AI_PATH.to_string(),
        NavigationState::AboutStudio => ABOUT_STUDIO_PATH.to_string(),
        NavigationState::BestFit(segment) => format!("{}{}", BEST_FIT_PREFIX, segment.slug()),
    }
}

pub fn decode(path: &str) -> RouteMatch {
    let path = path_only(path);
    let path = if path.is_empty() { HOME_PATH } else { path };

    match path {
        HOME_PATH => return RouteMatch::exact(NavigationState::Home),
        CREATIVE_DIRECTOR_PATH => return RouteMatch::exact(NavigationState::CreativeDirector),
        LEGACY_CREATIVE_DIRECTOR_PATH => {
            return RouteMatch::rewritten(NavigationState::CreativeDirector)
        }
        ARCHITECTURE_AI_PATH => return RouteMatch::exact(NavigationState::ArchitectureAi),
        ABOUT_STUDIO_PATH => return RouteMatch::exact(NavigationState::AboutStudio),
        ABOUT_ALIAS_PATH => return RouteMatch::rewritten(NavigationState::AboutStudio),
        _ => {}
    }

    let state = if let Some(raw) = path.strip_prefix(PROJECT_PREFIX) {
        decode_parameter(raw).map(NavigationState::ProjectDetail)
    } else if let Some(raw) = path.strip_prefix(CATEGORY_PREFIX) {
        decode_parameter(raw).map(NavigationState::CategoryListing)
    } else if let Some(slug) = path.strip_prefix(BEST_FIT_PREFIX) {
        BestFitSegment::from_slug(slug).map(NavigationState::BestFit)
    } else {
        None
    }
    .unwrap_or_default();

    if encode(&state) == path {
        RouteMatch::exact(state)
    } else {
        RouteMatch::rewritten(state)
    }
}

fn path_only(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn decode_parameter(raw: &str) -> Option<String> {
    // Encoded parameters never contain a raw separator.
    if raw.contains('/') {
        return None;
    }
    urlencoding::decode(raw).ok().map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn every_state() -> Vec<NavigationState> {
        let mut states = vec![
            NavigationState::Home,
            NavigationState::project("p7"),
            NavigationState::category("Residential Design"),
            NavigationState::CreativeDirector,
            NavigationState::ArchitectureAi,
            NavigationState::AboutStudio,
        ];
        states.extend(BestFitSegment::ALL.into_iter().map(NavigationState::BestFit));
        states
    }

    #[test]
    fn test_every_destination_round_trips() {
        for state in every_state() {
            let path = encode(&state);
            assert_eq!(decode(&path), RouteMatch::exact(state.clone()), "path {path}");
        }
    }

    #[test]
    fn test_canonical_paths() {
        assert_eq!(encode(&NavigationState::Home), "/");
        assert_eq!(encode(&NavigationState::project("p7")), "/project/p7");
        assert_eq!(encode(&NavigationState::CreativeDirector), "/shaunak-mukherji");
        assert_eq!(
            encode(&NavigationState::ArchitectureAi),
            "/architecture-artificial-intelligence"
        );
        assert_eq!(
            encode(&NavigationState::AboutStudio),
            "/about-mukherji-architects-milano"
        );
        assert_eq!(
            encode(&NavigationState::BestFit(BestFitSegment::MasterPlanning)),
            "/best-fit/master-planning"
        );
    }

    #[test]
    fn test_category_with_space_is_percent_encoded() {
        let state = NavigationState::category("Mixed-use Design");
        let path = encode(&state);
        assert_eq!(path, "/category/Mixed-use%20Design");
        assert_eq!(decode(&path).state, state);
    }

    #[test]
    fn test_slash_in_parameter_survives() {
        let state = NavigationState::project("a/b");
        let path = encode(&state);
        assert_eq!(path, "/project/a%2Fb");
        assert_eq!(decode(&path).state, state);
    }

    #[test]
    fn test_legacy_creative_director_is_alias() {
        let matched = decode("/creative-director");
        assert_eq!(matched.state, NavigationState::CreativeDirector);
        assert!(!matched.canonical);
    }

    #[test]
    fn test_about_alias() {
        let matched = decode("/about");
        assert_eq!(matched.state, NavigationState::AboutStudio);
        assert!(!matched.canonical);
    }

    #[test]
    fn test_unknown_paths_decode_home() {
        for path in [
            "/totally/unknown/path",
            "/best-fit/hospitality",
            "/project/a/b",
            "/project",
            "/category/%FF",
            "no-leading-slash",
        ] {
            let matched = decode(path);
            assert_eq!(matched.state, NavigationState::Home, "path {path}");
            assert_eq!(matched.state.selected_id(), None);
            assert!(!matched.canonical, "path {path}");
        }
    }

    #[test]
    fn test_invalid_escape_is_not_canonical() {
        let matched = decode("/project/%zz");
        assert_eq!(matched.state, NavigationState::project("%zz"));
        assert!(!matched.canonical);
        assert_eq!(encode(&matched.state), "/project/%25zz");
        assert_eq!(decode("/project/%25zz"), RouteMatch::exact(matched.state));
    }

    #[test]
    fn test_lowercase_escape_is_rewritten() {
        let matched = decode("/category/Mixed-use%20design");
        assert!(matched.canonical);
        let matched = decode("/project/a%2fb");
        assert_eq!(matched.state, NavigationState::project("a/b"));
        assert!(!matched.canonical);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(decode("/project/p7?ref=mail").state, NavigationState::project("p7"));
        assert_eq!(decode("/about-mukherji-architects-milano#faq").state, NavigationState::AboutStudio);
        assert_eq!(decode("").state, NavigationState::Home);
    }

    #[test]
    fn test_empty_parameter_is_kept() {
        let state = NavigationState::project("");
        assert_eq!(encode(&state), "/project/");
        assert_eq!(decode("/project/").state, state);
    }

    #[test]
    fn test_selected_id_only_on_parameterised_views() {
        for state in every_state() {
            assert_eq!(
                state.selected_id().is_some(),
                state.current_view().takes_parameter(),
                "{state:?}"
            );
        }
    }

    #[test]
    fn test_snapshot_round_trip_and_tags() {
        let state = NavigationState::category("Residential Design");
        let snapshot = state.snapshot();
        assert_eq!(NavigationState::from_snapshot(&snapshot), state);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"view":"CATEGORY_LISTING","id":"Residential Design"}"#);

        let best_fit = NavigationState::BestFit(BestFitSegment::MixedUse).snapshot();
        let json = serde_json::to_string(&best_fit).unwrap();
        assert_eq!(json, r#"{"view":{"BEST_FIT":"mixed-use"},"id":null}"#);
    }

    #[test]
    fn test_snapshot_missing_id_is_tolerated() {
        let snapshot = HistorySnapshot {
            view: ViewKind::ProjectDetail,
            id: None,
        };
        assert_eq!(NavigationState::from_snapshot(&snapshot), NavigationState::project(""));

        let stray = HistorySnapshot {
            view: ViewKind::AboutStudio,
            id: Some("p1".to_string()),
        };
        assert_eq!(NavigationState::from_snapshot(&stray).selected_id(), None);
    }

    proptest! {
        #[test]
        fn project_ids_round_trip(id in ".*") {
            let state = NavigationState::project(id);
            let matched = decode(&encode(&state));
            prop_assert!(matched.canonical);
            prop_assert_eq!(matched.state, state);
        }

        #[test]
        fn category_names_round_trip(name in ".*") {
            let state = NavigationState::category(name);
            prop_assert_eq!(decode(&encode(&state)).state, state);
        }

        #[test]
        fn decoding_is_idempotent_through_encode(path in "/[a-zA-Z0-9%/ ._-]{0,32}") {
            let first = decode(&path).state;
            let again = decode(&encode(&first)).state;
            prop_assert_eq!(first, again);
        }
    }
}
