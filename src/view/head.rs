use crate::head::{DocumentHead, MemoryHead, MetaTag};
use eframe::egui;

/// In-memory head whose title is mirrored onto the native window.
pub struct EguiHead {
    inner: MemoryHead,
    ctx: egui::Context,
}

impl EguiHead {
    pub fn new(ctx: egui::Context, inner: MemoryHead) -> Self {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(inner.title()));
        Self { inner, ctx }
    }
}

impl DocumentHead for EguiHead {
    fn title(&self) -> String {
        self.inner.title()
    }

    fn set_title(&mut self, title: &str) {
        self.inner.set_title(title);
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }

    fn meta(&self, tag: MetaTag) -> Option<String> {
        self.inner.meta(tag)
    }

    fn set_meta(&mut self, tag: MetaTag, content: &str) {
        self.inner.set_meta(tag, content);
    }

    fn insert_script(&mut self, id: &str, json: &str) {
        self.inner.insert_script(id, json);
    }

    fn remove_script(&mut self, id: &str) {
        self.inner.remove_script(id);
    }

    fn script(&self, id: &str) -> Option<String> {
        self.inner.script(id)
    }
}
