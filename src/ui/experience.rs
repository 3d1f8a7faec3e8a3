//! Experience section
//!
//! Wide windows show a two-column timeline (role details on the left,
//! description on the right) with a rail and a dot per entry between the
//! columns. Compact windows stack each entry.

use eframe::egui;
use egui::{RichText, Stroke};
use rfolio::{ExperienceEntry, ThemeColors};

use crate::ui::widgets;

const DOT_RADIUS: f32 = 6.0;
const ENTRY_GAP: f32 = 32.0;
const COLUMN_GAP: f32 = 48.0;

/// Renders the work history timeline.
pub fn render_experience(
    ui: &mut egui::Ui,
    entries: &[ExperienceEntry],
    colors: &ThemeColors,
    compact: bool,
) {
    widgets::section_title(ui, "Experience", colors);

    if compact {
        for entry in entries {
            entry_heading(ui, entry, colors);
            ui.add_space(4.0);
            ui.label(RichText::new(&entry.description).color(colors.text));
            ui.add_space(ENTRY_GAP / 2.0);
        }
        return;
    }

    let timeline = ui.vertical(|ui| {
        // Gap between the columns leaves room for the rail and dots
        ui.spacing_mut().item_spacing.x = COLUMN_GAP;

        let mut row_tops = Vec::with_capacity(entries.len());
        for entry in entries {
            row_tops.push(ui.cursor().top());
            ui.columns(2, |columns| {
                columns[0].with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    entry_heading(ui, entry, colors);
                });
                columns[1].label(RichText::new(&entry.description).color(colors.text));
            });
            ui.add_space(ENTRY_GAP);
        }
        row_tops
    });

    let rect = timeline.response.rect;
    let rail_x = rect.center().x;
    let painter = ui.painter();
    painter.vline(rail_x, rect.y_range(), Stroke::new(2.0, colors.timeline_rail));
    for top in timeline.inner {
        let center = egui::pos2(rail_x, top + DOT_RADIUS + 4.0);
        painter.circle_filled(center, DOT_RADIUS + 4.0, colors.background);
        painter.circle_filled(center, DOT_RADIUS, colors.accent);
    }
}

fn entry_heading(ui: &mut egui::Ui, entry: &ExperienceEntry, colors: &ThemeColors) {
    ui.label(
        RichText::new(&entry.role)
            .size(17.0)
            .strong()
            .color(colors.accent_strong),
    );
    ui.label(RichText::new(&entry.organization).color(colors.text_dim));
    ui.label(RichText::new(&entry.duration).small().color(colors.text_dim));
}
