//! About section

use eframe::egui;
use egui::RichText;
use rfolio::{Paragraph, ThemeColors};

use crate::ui::widgets;

/// Renders the biography paragraphs, with linked spans as hyperlinks.
pub fn render_about(ui: &mut egui::Ui, paragraphs: &[Paragraph], colors: &ThemeColors) {
    widgets::section_title(ui, "About Me", colors);

    for paragraph in paragraphs {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for span in &paragraph.spans {
                let text = RichText::new(&span.text).size(15.0);
                match &span.url {
                    Some(url) => {
                        ui.hyperlink_to(text, url);
                    }
                    None => {
                        ui.label(text.color(colors.text));
                    }
                }
            }
        });
        ui.add_space(12.0);
    }
}
