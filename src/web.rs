// Browser seams and the wasm entry point

use crate::app::{Launch, SiteApp};
use crate::content::{loader, ContentStore};
use crate::head::{self, DocumentHead, MetaTag};
use crate::pages::PageCatalog;
use crate::router::{HistoryBackend, HistorySnapshot, PopEvent, ScrollTiming};
use crate::view::ImageResolver;
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "site-canvas";
const JSON_LD_TYPE: &str = "application/ld+json";

/// `window.history` with a popstate listener feeding the router.
pub struct BrowserHistory {
    window: web_sys::Window,
    history: web_sys::History,
    events: Rc<RefCell<Vec<PopEvent>>>,
    _listener: Closure<dyn FnMut(web_sys::PopStateEvent)>,
}

impl BrowserHistory {
    pub fn new(ctx: egui::Context) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let history = window.history()?;
        let events = Rc::new(RefCell::new(Vec::new()));

        let queue = Rc::clone(&events);
        let location_window = window.clone();
        let listener = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |event: web_sys::PopStateEvent| {
            let snapshot = event
                .state()
                .as_string()
                .and_then(|json| serde_json::from_str::<HistorySnapshot>(&json).ok());
            queue.borrow_mut().push(PopEvent {
                path: current_location(&location_window),
                snapshot,
            });
            ctx.request_repaint();
        });
        window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())?;

        Ok(Self {
            window,
            history,
            events,
            _listener: listener,
        })
    }

    fn write(&mut self, path: &str, snapshot: HistorySnapshot, replace: bool) {
        let state = match serde_json::to_string(&snapshot) {
            Ok(json) => JsValue::from_str(&json),
            Err(e) => {
                warn!("could not serialize history snapshot: {e}");
                JsValue::NULL
            }
        };
        let result = if replace {
            self.history.replace_state_with_url(&state, "", Some(path))
        } else {
            self.history.push_state_with_url(&state, "", Some(path))
        };
        if let Err(e) = result {
            warn!("history update to {path} failed: {e:?}");
        }
    }
}

fn current_location(window: &web_sys::Window) -> String {
    let location = window.location();
    let part = |value: Result<String, JsValue>| value.unwrap_or_default();
    format!(
        "{}{}{}",
        part(location.pathname()),
        part(location.search()),
        part(location.hash())
    )
}

impl HistoryBackend for BrowserHistory {
    fn location(&self) -> String {
        current_location(&self.window)
    }

    fn len(&self) -> usize {
        self.history.length().map(|len| len as usize).unwrap_or_default()
    }

    fn push(&mut self, path: &str, snapshot: HistorySnapshot) {
        self.write(path, snapshot, false);
    }

    fn replace(&mut self, path: &str, snapshot: HistorySnapshot) {
        self.write(path, snapshot, true);
    }

    fn back(&mut self) {
        if let Err(e) = self.history.back() {
            warn!("history.back failed: {e:?}");
        }
    }

    fn forward(&mut self) {
        if let Err(e) = self.history.forward() {
            warn!("history.forward failed: {e:?}");
        }
    }

    fn take_pop_events(&mut self) -> Vec<PopEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

/// The page's own `<head>`.
pub struct BrowserHead {
    document: web_sys::Document,
}

impl BrowserHead {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn meta_element(&self, tag: MetaTag) -> Option<web_sys::Element> {
        self.document.query_selector(tag.selector()).ok().flatten()
    }
}

impl DocumentHead for BrowserHead {
    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn meta(&self, tag: MetaTag) -> Option<String> {
        self.meta_element(tag)
            .map(|element| element.get_attribute("content").unwrap_or_default())
    }

    fn set_meta(&mut self, tag: MetaTag, content: &str) {
        if let Some(element) = self.meta_element(tag) {
            if let Err(e) = element.set_attribute("content", content) {
                warn!("could not set {}: {e:?}", tag.selector());
            }
        }
    }

    fn insert_script(&mut self, id: &str, json: &str) {
        self.remove_script(id);
        let Some(parent) = self.document.head() else {
            return;
        };
        let inserted = self.document.create_element("script").and_then(|script| {
            script.set_attribute("type", JSON_LD_TYPE)?;
            script.set_id(id);
            script.set_text_content(Some(json));
            parent.append_child(&script).map(|_| ())
        });
        if let Err(e) = inserted {
            warn!("could not insert script {id}: {e:?}");
        }
    }

    fn remove_script(&mut self, id: &str) {
        if let Some(element) = self.document.get_element_by_id(id) {
            element.remove();
        }
    }

    fn script(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.text_content())
    }
}

/// Line-buffered writer onto the browser console.
#[derive(Default)]
struct ConsoleWriter(Vec<u8>);

impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.0.is_empty() {
            let line = String::from_utf8_lossy(&self.0);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.0.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = std::io::Write::flush(self);
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .init();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            error!("site failed to start: {e:?}");
        }
    });
}

async fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing canvas element"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                let history = BrowserHistory::new(cc.egui_ctx.clone())
                    .map_err(|e| format!("history unavailable: {e:?}"))?;
                let content = ContentStore::bundled()?;
                let catalog = PageCatalog::load()?;
                let launch = Launch {
                    history: Box::new(history),
                    head: head::shared(BrowserHead::new(document)),
                    content,
                    catalog,
                    images: ImageResolver::new(""),
                    timing: ScrollTiming::default(),
                };
                let app = SiteApp::new(cc, launch).with_loader(loader::static_only());
                Ok(Box::new(app))
            }),
        )
        .await
}
