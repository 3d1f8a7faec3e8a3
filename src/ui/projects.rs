//! Projects section
//!
//! Research project summaries as cards: two per row on wide windows, one per
//! row on compact ones.

use eframe::egui;
use egui::RichText;
use rfolio::{ProjectCard, ThemeColors};

use crate::ui::widgets;

/// Renders the project cards.
pub fn render_projects(
    ui: &mut egui::Ui,
    projects: &[ProjectCard],
    colors: &ThemeColors,
    compact: bool,
) {
    widgets::section_title(ui, "Projects", colors);

    if compact {
        for project in projects {
            project_card(ui, project, colors);
            ui.add_space(8.0);
        }
        return;
    }

    for pair in projects.chunks(2) {
        ui.columns(2, |columns| {
            for (column, project) in columns.iter_mut().zip(pair) {
                project_card(column, project, colors);
            }
        });
        ui.add_space(8.0);
    }
}

fn project_card(ui: &mut egui::Ui, project: &ProjectCard, colors: &ThemeColors) {
    widgets::card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.label(
            RichText::new(&project.title)
                .size(18.0)
                .strong()
                .color(colors.accent_strong),
        );
        ui.label(
            RichText::new(format!("{} · {}", project.venue, project.period))
                .small()
                .color(colors.text_dim),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(&project.summary).color(colors.text));

        if !project.tags.is_empty() {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &project.tags {
                    widgets::tag_chip(ui, tag, colors);
                }
            });
        }

        if let Some(url) = &project.url {
            ui.add_space(4.0);
            ui.hyperlink_to("Project page ↗", url);
        }
    });
}
