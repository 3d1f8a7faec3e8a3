//! Small widgets shared by the section renderers.

use eframe::egui;
use egui::{RichText, Stroke};
use rfolio::ThemeColors;

/// Renders a section heading followed by the standard gap.
pub fn section_title(ui: &mut egui::Ui, title: &str, colors: &ThemeColors) {
    ui.label(RichText::new(title).size(30.0).strong().color(colors.text_strong));
    ui.add_space(24.0);
}

/// Frame used for news rows and project cards.
pub fn card_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.card_background)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
}

/// Renders a small rounded label used for project tags.
pub fn tag_chip(ui: &mut egui::Ui, tag: &str, colors: &ThemeColors) {
    egui::Frame::new()
        .fill(colors.hover)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(tag).small().color(colors.accent_strong));
        });
}
