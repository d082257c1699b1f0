use crate::pages::{LinkTarget, PageId};
use crate::router::{route, NavigationState, Section};

/// What a click asked for. Views collect one per frame; the app applies it
/// after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Home,
    OpenProject(String),
    OpenCategory(String),
    OpenPage(PageId),
    Contact,
    ScrollTo(Section),
    Back,
    Forward,
    /// Mail, phone and social links handed to the platform.
    OpenExternal(String),
    ToggleMenu,
    CloseMenu,
}

impl Message {
    /// The message that leads to `state`.
    pub fn open(state: NavigationState) -> Self {
        match state {
            NavigationState::Home => Message::Home,
            NavigationState::ProjectDetail(id) => Message::OpenProject(id),
            NavigationState::CategoryListing(name) => Message::OpenCategory(name),
            NavigationState::CreativeDirector => Message::OpenPage(PageId::CreativeDirector),
            NavigationState::ArchitectureAi => Message::OpenPage(PageId::ArchitectureAi),
            NavigationState::AboutStudio => Message::OpenPage(PageId::AboutStudio),
            NavigationState::BestFit(segment) => Message::OpenPage(PageId::BestFit(segment)),
        }
    }

    /// Messages that move the router; these also close the menu.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Message::Home
                | Message::OpenProject(_)
                | Message::OpenCategory(_)
                | Message::OpenPage(_)
                | Message::Contact
                | Message::ScrollTo(_)
        )
    }

    pub fn scroll_to(section: Section) -> Self {
        match section {
            Section::Contact => Message::Contact,
            section => Message::ScrollTo(section),
        }
    }

    pub fn from_link(target: &LinkTarget) -> Self {
        match target {
            LinkTarget::Route { path } => Message::open(route::decode(path).state),
            LinkTarget::Section { section } => Message::scroll_to(*section),
            LinkTarget::Category { name } => Message::OpenCategory(name.clone()),
            LinkTarget::External { url } => Message::OpenExternal(url.clone()),
        }
    }
}

/// Deferred message slot; the last click in a frame wins.
pub type Outbox = std::cell::RefCell<Option<Message>>;

pub fn send(outbox: &Outbox, message: Message) {
    *outbox.borrow_mut() = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::BestFitSegment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_targets() {
        let route = LinkTarget::Route {
            path: "/best-fit/research".to_string(),
        };
        assert_eq!(
            Message::from_link(&route),
            Message::OpenPage(PageId::BestFit(BestFitSegment::Research))
        );

        let contact = LinkTarget::Section {
            section: Section::Contact,
        };
        assert_eq!(Message::from_link(&contact), Message::Contact);

        let services = LinkTarget::Section {
            section: Section::Services,
        };
        assert_eq!(Message::from_link(&services), Message::ScrollTo(Section::Services));

        let category = LinkTarget::Category {
            name: "Mixed-use Design".to_string(),
        };
        assert_eq!(
            Message::from_link(&category),
            Message::OpenCategory("Mixed-use Design".to_string())
        );

        let project = LinkTarget::Route {
            path: "/project/p2".to_string(),
        };
        assert_eq!(Message::from_link(&project), Message::OpenProject("p2".to_string()));
    }

    #[test]
    fn test_open_covers_every_destination() {
        assert_eq!(Message::open(NavigationState::Home), Message::Home);
        assert_eq!(
            Message::open(NavigationState::AboutStudio),
            Message::OpenPage(PageId::AboutStudio)
        );
        assert_eq!(
            Message::open(NavigationState::category("Explorations")),
            Message::OpenCategory("Explorations".to_string())
        );
    }

    #[test]
    fn test_last_message_wins() {
        let outbox = Outbox::default();
        send(&outbox, Message::Back);
        send(&outbox, Message::CloseMenu);
        assert_eq!(outbox.into_inner(), Some(Message::CloseMenu));
    }
}
