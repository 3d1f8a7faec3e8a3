//! News section

use eframe::egui;
use egui::RichText;
use rfolio::{NewsItem, ThemeColors};

use crate::ui::widgets;

/// Width of the date column
const DATE_WIDTH: f32 = 88.0;

/// Renders news items as dated rows, newest first as authored.
pub fn render_news(ui: &mut egui::Ui, items: &[NewsItem], colors: &ThemeColors) {
    widgets::section_title(ui, "News", colors);

    for item in items {
        widgets::card_frame(colors).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.allocate_ui_with_layout(
                    egui::vec2(DATE_WIDTH, 0.0),
                    egui::Layout::top_down(egui::Align::Max),
                    |ui| {
                        ui.set_width(DATE_WIDTH);
                        ui.label(RichText::new(&item.date).strong().color(colors.accent));
                    },
                );
                ui.separator();
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.text).color(colors.text));
                });
            });
        });
        ui.add_space(4.0);
    }
}
