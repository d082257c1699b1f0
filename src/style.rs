use eframe::egui;

// --- Colors ---
pub const INK: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
pub const PAPER: egui::Color32 = egui::Color32::BLACK;
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(39, 39, 42);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(196, 164, 106);
pub const PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);

// --- Sizing ---
pub const NAVBAR_HEIGHT: f32 = 64.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const ARTICLE_MAX_WIDTH: f32 = 760.0;
pub const SECTION_SPACING: f32 = 72.0;
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_IMAGE_HEIGHT: f32 = 220.0;
pub const HERO_HEIGHT: f32 = 520.0;
pub const DETAIL_IMAGE_HEIGHT: f32 = 480.0;
pub const THUMBNAIL_HEIGHT: f32 = 140.0;
pub const PORTRAIT_SIZE: f32 = 280.0;
pub const COMPACT_BREAKPOINT: f32 = 900.0;

// --- Type ---
pub const HERO_SIZE: f32 = 44.0;
pub const HEADING_SIZE: f32 = 30.0;
pub const SUBHEADING_SIZE: f32 = 20.0;
pub const BODY_SIZE: f32 = 16.0;
pub const CAPTION_SIZE: f32 = 13.0;

// --- Contact ---
pub const CONTACT_EMAIL: &str = "admin@mukherjiarchitects.com";
pub const CONTACT_PHONE: &str = "+39 3343059860";
pub const CONTACT_PHONE_URI: &str = "tel:+393343059860";
pub const CONTACT_ADDRESS: &str = "Via Privata Giovanni Ventura, 20134 Milano MI";
pub const SOCIAL_LINKS: [(&str, &str); 2] = [
    (
        "Instagram",
        "https://www.instagram.com/mukherjiarchitects?igsh=MWhiOGdscHNvMHZtZg==",
    ),
    (
        "LinkedIn",
        "https://www.linkedin.com/company/mukherimukherji-architects-milano/about/",
    ),
];

// --- Helper functions ---

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PAPER;
    visuals.window_fill = PAPER;
    visuals.override_text_color = Some(INK);
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals
}

pub fn is_compact(ctx: &egui::Context) -> bool {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(CONTENT_MAX_WIDTH)
    });
    width < COMPACT_BREAKPOINT
}

pub fn heading(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(HEADING_SIZE).strong()
}

pub fn subheading(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(SUBHEADING_SIZE)
}

pub fn body(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(BODY_SIZE)
}

pub fn caption(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).size(CAPTION_SIZE).color(MUTED)
}

/// Clickable text that looks like a link.
pub fn link_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Centre a column of at most `max_width` in the available space.
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
