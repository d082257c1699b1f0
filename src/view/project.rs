use super::image::ImageResolver;
use crate::content::Project;
use crate::message::{send, Message, Outbox};
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, project: Option<&Project>, images: &ImageResolver, outbox: &Outbox) {
    style::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
        ui.add_space(32.0);
        if style::link_label(ui, style::caption("← BACK TO HOME")).clicked() {
            send(outbox, Message::Home);
        }
        ui.add_space(24.0);

        let Some(project) = project else {
            ui.label(style::heading("Project not found"));
            return;
        };

        ui.label(egui::RichText::new(&project.title).size(style::HERO_SIZE).strong());
        ui.add_space(24.0);

        let columns = if style::is_compact(ui.ctx()) { 1 } else { 2 };
        ui.columns(columns, |cols| {
            media(&mut cols[0], project, images);
            facts(&mut cols[columns - 1], project, outbox);
        });
        ui.add_space(style::SECTION_SPACING);
    });
}

fn media(ui: &mut egui::Ui, project: &Project, images: &ImageResolver) {
    let width = ui.available_width();
    images
        .show(ui, &project.image_url, egui::vec2(width, style::DETAIL_IMAGE_HEIGHT))
        .on_hover_text(&project.title);

    if project.gallery.is_empty() {
        return;
    }
    ui.add_space(16.0);
    let thumb = ((width - 16.0) / 2.0).max(0.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for (index, image) in project.gallery.iter().enumerate() {
            images
                .show(ui, image, egui::vec2(thumb, style::THUMBNAIL_HEIGHT.max(thumb * 0.75)))
                .on_hover_text(format!("Gallery {}", index + 2));
        }
    });
}

fn facts(ui: &mut egui::Ui, project: &Project, outbox: &Outbox) {
    fact(ui, "LOCATION", &project.location);
    fact(ui, "YEAR OF COMMISSION", &project.year);
    fact(ui, "CATEGORY", &project.category);

    ui.separator();
    ui.add_space(12.0);
    ui.label(style::body(&project.description).color(style::MUTED));
    ui.add_space(32.0);

    let inquire = egui::Button::new(egui::RichText::new("Inquire About This Project").size(style::BODY_SIZE))
        .min_size(egui::vec2(ui.available_width(), 44.0));
    if ui.add(inquire).clicked() {
        send(outbox, Message::Contact);
    }
}

fn fact(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.separator();
    ui.add_space(12.0);
    ui.label(style::caption(label));
    ui.label(style::subheading(value));
    ui.add_space(16.0);
}
