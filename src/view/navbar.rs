use crate::message::{send, Message, Outbox};
use crate::router::Section;
use crate::style;
use eframe::egui;

const LOGO_TEXT: &str = "MUKHERJI ARCHITECTS MILANO";
const CONTACT_LABEL: &str = "CONTACT US";

pub fn show(ctx: &egui::Context, menu_open: bool, outbox: &Outbox) {
    let compact = style::is_compact(ctx);

    egui::TopBottomPanel::top("navbar")
        .exact_height(style::NAVBAR_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(style::PAPER)
                .stroke(egui::Stroke::new(1.0, style::BORDER))
                .inner_margin(egui::Margin::symmetric(24, 0)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let logo = egui::RichText::new(LOGO_TEXT).strong().size(style::BODY_SIZE);
                if style::link_label(ui, logo).clicked() {
                    send(outbox, Message::Home);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if compact {
                        let icon = if menu_open { "✕" } else { "☰" };
                        let hover = if menu_open { "Close menu" } else { "Open menu" };
                        if ui.button(icon).on_hover_text(hover).clicked() {
                            send(outbox, Message::ToggleMenu);
                        }
                        return;
                    }

                    let contact = egui::RichText::new(CONTACT_LABEL).color(style::ACCENT);
                    if ui.button(contact).clicked() {
                        send(outbox, Message::Contact);
                    }
                    ui.add_space(16.0);
                    for section in Section::NAVBAR.iter().rev() {
                        if style::link_label(ui, section_text(*section)).clicked() {
                            send(outbox, Message::scroll_to(*section));
                        }
                        ui.add_space(12.0);
                    }
                });
            });
        });

    if compact && menu_open {
        show_menu(ctx, outbox);
    }
}

fn show_menu(ctx: &egui::Context, outbox: &Outbox) {
    egui::TopBottomPanel::top("navbar_menu")
        .frame(
            egui::Frame::new()
                .fill(style::PAPER)
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for section in Section::NAVBAR {
                    let text = section_text(section).size(style::SUBHEADING_SIZE);
                    if style::link_label(ui, text).clicked() {
                        send(outbox, Message::scroll_to(section));
                    }
                    ui.add_space(12.0);
                }
                let contact = egui::RichText::new(CONTACT_LABEL)
                    .size(style::SUBHEADING_SIZE)
                    .color(style::ACCENT);
                if style::link_label(ui, contact).clicked() {
                    send(outbox, Message::Contact);
                }
            });
        });
}

fn section_text(section: Section) -> egui::RichText {
    egui::RichText::new(section.label().to_uppercase()).size(style::CAPTION_SIZE)
}
