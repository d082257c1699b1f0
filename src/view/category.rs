use super::image::ImageResolver;
use crate::content::Project;
use crate::message::{send, Message, Outbox};
use crate::style;
use eframe::egui;

pub const EMPTY_MESSAGE: &str = "No projects found in this category.";

/// Listing for one category; `projects` arrive already ordered, the first is
/// the cover.
pub fn show(
    ui: &mut egui::Ui,
    category: &str,
    projects: &[&Project],
    images: &ImageResolver,
    outbox: &Outbox,
) {
    style::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
        ui.add_space(32.0);
        if style::link_label(ui, style::caption("← BACK TO OVERVIEW")).clicked() {
            send(outbox, Message::Home);
        }
        ui.add_space(24.0);

        ui.label(egui::RichText::new(format!("{category} Projects")).size(style::HERO_SIZE).strong());
        ui.label(
            style::body(format!(
                "Selected works demonstrating our approach to {} architecture.",
                category.to_lowercase()
            ))
            .color(style::MUTED),
        );
        ui.add_space(32.0);

        let Some((cover, rest)) = projects.split_first() else {
            ui.label(style::body(EMPTY_MESSAGE).color(style::MUTED));
            return;
        };

        let width = ui.available_width();
        let response = images
            .show(ui, &cover.image_url, egui::vec2(width, style::DETAIL_IMAGE_HEIGHT))
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        ui.label(style::caption(format!("{} · {}", cover.category, cover.year)));
        let title = style::link_label(ui, style::heading(&cover.title));
        if response.clicked() || title.clicked() {
            send(outbox, Message::OpenProject(cover.id.clone()));
        }
        ui.add_space(40.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(24.0, 32.0);
            for project in rest {
                card(ui, project, images, outbox);
            }
        });
        ui.add_space(style::SECTION_SPACING);
    });
}

fn card(ui: &mut egui::Ui, project: &Project, images: &ImageResolver, outbox: &Outbox) {
    ui.allocate_ui(egui::vec2(style::CARD_WIDTH, 0.0), |ui| {
        ui.vertical(|ui| {
            ui.set_width(style::CARD_WIDTH);
            let response = images
                .show(ui, &project.image_url, egui::vec2(style::CARD_WIDTH, style::CARD_IMAGE_HEIGHT))
                .interact(egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            let title = style::link_label(ui, style::subheading(&project.title).strong());
            ui.label(style::caption(format!("{} · {}", project.location, project.year)));
            if response.clicked() || title.clicked() {
                send(outbox, Message::OpenProject(project.id.clone()));
            }
        });
    });
}
