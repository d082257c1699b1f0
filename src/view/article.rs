// Long-form pages rendered from the page catalogue

use super::image::{placeholder, ImageResolver};
use crate::message::{send, Message, Outbox};
use crate::pages::{Article, ArticleSection};
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, article: &Article, images: &ImageResolver, outbox: &Outbox) {
    style::centered_column(ui, style::ARTICLE_MAX_WIDTH, |ui| {
        ui.add_space(32.0);
        if style::link_label(ui, style::caption("← BACK TO HOME")).clicked() {
            send(outbox, Message::Home);
        }
        ui.add_space(24.0);

        if let Some(quote) = &article.quote {
            ui.label(style::subheading(format!("\u{201c}{quote}\u{201d}")).italics().color(style::MUTED));
            ui.add_space(16.0);
        }
        if article.portrait.is_some() {
            portrait(ui, article, images);
            ui.add_space(24.0);
        }

        ui.label(egui::RichText::new(&article.heading).size(style::HERO_SIZE).strong());
        if let Some(subheading) = &article.subheading {
            ui.label(style::subheading(subheading).color(style::ACCENT));
        }
        ui.add_space(24.0);

        if let Some(tldr) = &article.tldr {
            egui::Frame::new()
                .stroke(egui::Stroke::new(1.0, style::BORDER))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.label(style::caption("TL;DR"));
                    ui.label(style::body(tldr));
                });
            ui.add_space(24.0);
        }

        for section in &article.sections {
            render_section(ui, section);
        }

        links(ui, article, outbox);
        faqs(ui, article);
        ui.add_space(style::SECTION_SPACING);
    });
}

fn portrait(ui: &mut egui::Ui, article: &Article, images: &ImageResolver) {
    let size = egui::vec2(style::PORTRAIT_SIZE, style::PORTRAIT_SIZE * 1.25);
    let source = [&article.portrait, &article.portrait_fallback]
        .into_iter()
        .flatten()
        .find_map(|url| images.resolve(url));
    match source {
        Some(uri) => {
            ui.add(egui::Image::new(uri).fit_to_exact_size(size).maintain_aspect_ratio(false));
        }
        None => {
            placeholder(ui, size);
        }
    }
}

fn render_section(ui: &mut egui::Ui, section: &ArticleSection) {
    if let Some(heading) = &section.heading {
        ui.label(style::subheading(heading).strong());
        ui.add_space(8.0);
    }
    for paragraph in &section.paragraphs {
        ui.label(style::body(paragraph));
        ui.add_space(12.0);
    }
    for bullet in &section.bullets {
        ui.horizontal_wrapped(|ui| {
            ui.label(style::body("•").color(style::ACCENT));
            ui.label(style::body(bullet));
        });
    }
    if !section.bullets.is_empty() {
        ui.add_space(12.0);
    }
    for paragraph in &section.closing {
        ui.label(style::body(paragraph));
        ui.add_space(12.0);
    }
    ui.add_space(16.0);
}

fn links(ui: &mut egui::Ui, article: &Article, outbox: &Outbox) {
    if article.links.is_empty() {
        return;
    }
    ui.separator();
    ui.add_space(16.0);
    if let Some(heading) = &article.links_heading {
        ui.label(style::subheading(heading).strong());
    }
    if let Some(intro) = &article.links_intro {
        ui.label(style::body(intro).color(style::MUTED));
    }
    ui.add_space(8.0);
    for link in &article.links {
        let text = egui::RichText::new(format!("→ {}", link.label))
            .size(style::BODY_SIZE)
            .color(style::ACCENT);
        if style::link_label(ui, text).clicked() {
            send(outbox, Message::from_link(&link.target));
        }
    }
    ui.add_space(24.0);
}

fn faqs(ui: &mut egui::Ui, article: &Article) {
    if article.faqs.is_empty() {
        return;
    }
    ui.separator();
    ui.add_space(16.0);
    ui.label(style::subheading("Frequently asked questions").strong());
    ui.add_space(8.0);
    for (index, faq) in article.faqs.iter().enumerate() {
        egui::CollapsingHeader::new(style::body(&faq.question).strong())
            .id_salt(("faq", index))
            .show(ui, |ui| {
                ui.label(style::body(&faq.answer).color(style::MUTED));
            });
    }
}
