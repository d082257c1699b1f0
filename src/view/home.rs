// Home page: hero, about, services, portfolio, contact

use super::image::ImageResolver;
use super::viewport::EguiViewport;
use crate::content::ContentStore;
use crate::message::{send, Message, Outbox};
use crate::router::Section;
use crate::style;
use eframe::egui;

const HERO_TAGLINE: &str = "Based in Milano · Est. 2023";
const HERO_TITLE: &str = "HIGH-PERFORMANCE";
const HERO_TITLE_MUTED: &str = "ARCHITECTURE";
const HERO_BODY: [&str; 3] = [
    "We design buildings as problem-solving systems.",
    "As the world moves faster, traditional architectural processes remain slow.",
    "We use artificial intelligence to work faster, reduce human error, and deliver more efficient buildings.",
];

pub fn show(
    ui: &mut egui::Ui,
    content: &ContentStore,
    images: &ImageResolver,
    viewport: &mut EguiViewport,
    outbox: &Outbox,
) {
    hero(ui, content, images, outbox);
    ui.add_space(style::SECTION_SPACING);

    style::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
        viewport.anchor(ui, Section::About.anchor());
        about(ui, content, images);
        ui.add_space(style::SECTION_SPACING);

        viewport.anchor(ui, Section::Services.anchor());
        services(ui, content, images, outbox);
        ui.add_space(style::SECTION_SPACING);

        viewport.anchor(ui, Section::Portfolio.anchor());
        portfolio(ui, content, images, outbox);
        ui.add_space(style::SECTION_SPACING);

        viewport.anchor(ui, Section::Contact.anchor());
        contact(ui, outbox);
        ui.add_space(style::SECTION_SPACING);

        footer(ui, outbox);
    });
}

fn section_header(ui: &mut egui::Ui, title: &str, number: &str) {
    ui.horizontal(|ui| {
        ui.label(style::heading(title));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(style::caption(number));
        });
    });
    ui.add_space(24.0);
}

fn hero(ui: &mut egui::Ui, content: &ContentStore, images: &ImageResolver, outbox: &Outbox) {
    let width = ui.available_width();
    let cover = content
        .signature_projects()
        .next()
        .map(|project| project.image_url.as_str())
        .unwrap_or_default();

    let response = images.show(ui, cover, egui::vec2(width, style::HERO_HEIGHT));
    let rect = response.rect;
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));

    let text_rect = rect.shrink2(egui::vec2(48.0, 48.0));
    let mut text_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(text_rect)
            .layout(egui::Layout::bottom_up(egui::Align::Min)),
    );

    if text_ui.button("EXPLORE OUR WORK").clicked() {
        send(outbox, Message::scroll_to(Section::Portfolio));
    }
    text_ui.add_space(16.0);
    for line in HERO_BODY.iter().rev() {
        text_ui.label(egui::RichText::new(*line).size(style::BODY_SIZE).color(style::MUTED));
    }
    text_ui.add_space(12.0);
    text_ui.horizontal(|ui| {
        ui.label(egui::RichText::new(HERO_TITLE).size(style::HERO_SIZE).strong());
        ui.label(
            egui::RichText::new(HERO_TITLE_MUTED)
                .size(style::HERO_SIZE)
                .strong()
                .color(style::MUTED),
        );
    });
    text_ui.label(style::caption(HERO_TAGLINE));
}

fn about(ui: &mut egui::Ui, content: &ContentStore, images: &ImageResolver) {
    let about = content.about();
    ui.horizontal_wrapped(|ui| {
        ui.label(style::heading(&about.heading));
        ui.label(style::heading(&about.heading_highlight).color(style::ACCENT));
        ui.label(style::heading("to stand still."));
    });
    ui.label(style::caption("(01) About Us"));
    ui.add_space(24.0);

    let columns = if style::is_compact(ui.ctx()) { 1 } else { 2 };
    ui.columns(columns, |cols| {
        let width = cols[0].available_width();
        images
            .show(&mut cols[0], &about.image_url, egui::vec2(width, style::CARD_IMAGE_HEIGHT * 1.6))
            .on_hover_text(&about.image_alt);

        let text = &mut cols[columns - 1];
        text.label(style::body(&about.description));
        text.add_space(16.0);
        text.separator();
        text.add_space(16.0);
        text.label(style::body(&about.philosophy).color(style::MUTED));
    });
}

fn services(ui: &mut egui::Ui, content: &ContentStore, images: &ImageResolver, outbox: &Outbox) {
    section_header(ui, "Our Expertise", "(02) Services");

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(24.0, 32.0);
        for (index, service) in content.services().iter().enumerate() {
            ui.allocate_ui(egui::vec2(style::CARD_WIDTH, 0.0), |ui| {
                ui.vertical(|ui| {
                    ui.set_width(style::CARD_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(style::caption(format!("{:02}", index + 1)));
                        ui.label(style::caption("Design Service"));
                    });
                    let cover = content.cover_image(&service.category_filter).unwrap_or_default();
                    images.show(ui, cover, egui::vec2(style::CARD_WIDTH, style::CARD_IMAGE_HEIGHT));
                    ui.label(style::subheading(&service.title).strong());
                    ui.label(style::body(&service.description).color(style::MUTED));
                    if style::link_label(ui, egui::RichText::new("View Projects →").color(style::ACCENT))
                        .clicked()
                    {
                        send(
                            outbox,
                            Message::OpenCategory(service.category_filter.clone()),
                        );
                    }
                });
            });
        }
    });
}

fn portfolio(ui: &mut egui::Ui, content: &ContentStore, images: &ImageResolver, outbox: &Outbox) {
    section_header(ui, "Our Signature Projects", "(03) Portfolio");

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        let full = ui.available_width();
        for (index, project) in content.signature_projects().enumerate() {
            // Bento layout: a wide first tile, then narrower ones.
            let width = match index {
                0 => full * 0.64,
                1 => full * 0.32,
                _ => full * 0.48,
            };
            ui.allocate_ui(egui::vec2(width, 0.0), |ui| {
                ui.vertical(|ui| {
                    let response = images
                        .show(ui, &project.image_url, egui::vec2(width, width.min(style::HERO_HEIGHT)))
                        .interact(egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);
                    ui.label(style::caption(format!("{} · {}", project.category, project.year)));
                    let title = style::link_label(ui, style::subheading(&project.title).strong());
                    if response.clicked() || title.clicked() {
                        send(outbox, Message::OpenProject(project.id.clone()));
                    }
                });
            });
        }
    });
}

fn contact(ui: &mut egui::Ui, outbox: &Outbox) {
    ui.label(style::heading("LET'S BUILD"));
    ui.label(style::heading("SOMETHING").color(style::MUTED));
    ui.label(style::heading("EXTRAORDINARY"));
    ui.add_space(16.0);
    ui.label(
        style::body("Ready to start your project? Get in touch with our team to discuss your vision.")
            .color(style::MUTED),
    );
    ui.add_space(24.0);

    ui.label(style::caption("MUKHERJI ARCHITECTS MILANO"));
    ui.label(style::caption(style::CONTACT_ADDRESS));
    if style::link_label(ui, style::body(style::CONTACT_PHONE)).clicked() {
        send(outbox, Message::OpenExternal(style::CONTACT_PHONE_URI.to_string()));
    }
    if style::link_label(ui, style::body(style::CONTACT_EMAIL)).clicked() {
        send(outbox, Message::OpenExternal(format!("mailto:{}", style::CONTACT_EMAIL)));
    }
    ui.add_space(16.0);
    social_links(ui, outbox);
}

fn footer(ui: &mut egui::Ui, outbox: &Outbox) {
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(style::caption("© 2024 Mukherji Architects. All Rights Reserved."));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            social_links(ui, outbox);
        });
    });
}

fn social_links(ui: &mut egui::Ui, outbox: &Outbox) {
    ui.horizontal(|ui| {
        for (label, url) in style::SOCIAL_LINKS {
            if style::link_label(ui, style::caption(label)).clicked() {
                send(outbox, Message::OpenExternal(url.to_string()));
            }
        }
    });
}
