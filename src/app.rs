use crate::content::ContentStore;
use crate::head::{MetadataGuard, SharedHead};
use crate::message::{Message, Outbox};
use crate::pages::{self, PageCatalog, PageId};
use crate::router::{HistoryBackend, NavigationState, ScrollTiming, ViewRouter};
use crate::style;
use crate::view::{self, EguiViewport, ImageResolver};
use eframe::egui;
use tracing::{info, warn};
use web_time::Instant;

use crate::content::loader::LoadResult;
use std::sync::mpsc::{Receiver, TryRecvError};

pub type SiteRouter = ViewRouter<Box<dyn HistoryBackend>, EguiViewport>;

/// Everything the app is built from; the platform entry points fill it in.
pub struct Launch {
    pub history: Box<dyn HistoryBackend>,
    pub head: SharedHead,
    pub content: ContentStore,
    pub catalog: PageCatalog,
    pub images: ImageResolver,
    pub timing: ScrollTiming,
}

pub struct SiteApp {
    router: SiteRouter,
    content: ContentStore,
    catalog: PageCatalog,
    head: SharedHead,
    images: ImageResolver,
    /// Metadata of the mounted view; dropping it restores the head.
    guard: Option<MetadataGuard>,
    mounted: Option<NavigationState>,
    menu_open: bool,
    loader: Option<Receiver<LoadResult>>,
}

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: Launch) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(style::visuals());
        Self::from_launch(launch)
    }

    pub fn from_launch(launch: Launch) -> Self {
        let router = ViewRouter::new(launch.history, EguiViewport::default(), launch.timing);
        let mut app = Self {
            router,
            content: launch.content,
            catalog: launch.catalog,
            head: launch.head,
            images: launch.images,
            guard: None,
            mounted: None,
            menu_open: false,
            loader: None,
        };
        app.remount();
        app
    }

    /// Receive remote content as it arrives.
    pub fn with_loader(mut self, loader: Receiver<LoadResult>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn router(&self) -> &SiteRouter {
        &self.router
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the mounted view carries its own head metadata.
    pub fn has_page_metadata(&self) -> bool {
        self.guard.is_some()
    }

    /// Apply one deferred UI message.
    pub fn apply(&mut self, message: Message) {
        if message.is_navigation() {
            self.menu_open = false;
        }
        match message {
            Message::Home => self.router.navigate_to_home(),
            Message::OpenProject(id) => self.router.navigate_to_project(id),
            Message::OpenCategory(name) => self.router.navigate_to_category(name),
            Message::OpenPage(page) => match page {
                PageId::CreativeDirector => self.router.navigate_to_creative_director(),
                PageId::ArchitectureAi => self.router.navigate_to_architecture_ai(),
                PageId::AboutStudio => self.router.navigate_to_about_studio(),
                PageId::BestFit(segment) => self.router.navigate_to_best_fit(segment),
            },
            Message::Contact => self.router.navigate_to_contact(),
            Message::ScrollTo(section) => self.router.navigate_to_section(section),
            Message::Back => self.router.back(),
            Message::Forward => self.router.forward(),
            Message::OpenExternal(url) => open_external(&url),
            Message::ToggleMenu => self.menu_open = !self.menu_open,
            Message::CloseMenu => self.menu_open = false,
        }
        self.remount();
    }

    /// Swap page metadata when the destination changed. The old guard is
    /// dropped before the new one is applied.
    fn remount(&mut self) {
        let state = self.router.state();
        if self.mounted.as_ref() == Some(state) {
            return;
        }

        self.guard = None;
        self.guard = pages::metadata_for(state, &self.content, &self.catalog)
            .map(|metadata| MetadataGuard::apply(&self.head, &metadata));
        self.mounted = Some(state.clone());
    }

    fn poll_content(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };
        match loader.try_recv() {
            Ok(LoadResult::Loaded(update)) => {
                if !update.is_empty() {
                    info!("remote content loaded");
                    self.content.apply(update);
                    // Project titles may have changed under the mounted view.
                    self.mounted = None;
                    self.remount();
                }
                self.loader = None;
            }
            Ok(LoadResult::Unconfigured) | Ok(LoadResult::Failed(_)) => self.loader = None,
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("content loader stopped without a result");
                self.loader = None;
            }
        }
    }

    fn handle_input(&self, ctx: &egui::Context) -> Option<Message> {
        ctx.input(|i| {
            let alt = i.modifiers.alt;
            if (alt && i.key_pressed(egui::Key::ArrowLeft))
                || i.pointer.button_pressed(egui::PointerButton::Extra1)
            {
                Some(Message::Back)
            } else if (alt && i.key_pressed(egui::Key::ArrowRight))
                || i.pointer.button_pressed(egui::PointerButton::Extra2)
            {
                Some(Message::Forward)
            } else if i.key_pressed(egui::Key::Escape) && self.menu_open {
                Some(Message::CloseMenu)
            } else {
                None
            }
        })
    }

    fn render_page(&mut self, ui: &mut egui::Ui, outbox: &Outbox) {
        let state = self.router.state().clone();
        let viewport = self.router.viewport_mut();
        match state {
            NavigationState::Home => {
                view::home::show(ui, &self.content, &self.images, viewport, outbox)
            }
            NavigationState::ProjectDetail(id) => {
                view::project::show(ui, self.content.project(&id), &self.images, outbox)
            }
            NavigationState::CategoryListing(name) => {
                let projects = self.content.projects_in_category(&name);
                view::category::show(ui, &name, &projects, &self.images, outbox)
            }
            state => match self.catalog.for_state(&state) {
                Some(article) => view::article::show(ui, article, &self.images, outbox),
                None => {
                    ui.label(style::heading("Page not found"));
                }
            },
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_content();

        if let Some(message) = self.handle_input(ctx) {
            self.apply(message);
        }
        if self.router.sync_history() {
            self.remount();
        }

        self.router.viewport_mut().begin_frame();
        if let Some(wait) = self.router.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        // Deferred actions
        let outbox = Outbox::default();

        view::navbar::show(ctx, self.menu_open, &outbox);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(style::PAPER))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false]);
                if self.router.viewport_mut().take_origin_request() {
                    area = area.vertical_scroll_offset(0.0);
                }
                area.show(ui, |ui| self.render_page(ui, &outbox));
            });

        // Apply deferred actions
        if let Some(message) = outbox.into_inner() {
            self.apply(message);
            ctx.request_repaint();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_external(url: &str) {
    if let Err(e) = open::that(url) {
        warn!("could not open {url}: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn open_external(url: &str) {
    let opened = web_sys::window().map(|window| window.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        warn!("could not open {url}");
    }
}
