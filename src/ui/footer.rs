//! Footer rendering

use chrono::Datelike;
use eframe::egui;
use egui::RichText;
use rfolio::{Profile, ThemeColors};

/// Renders the copyright footer below the last section.
pub fn render_footer(ui: &mut egui::Ui, profile: &Profile, colors: &ThemeColors) {
    let year = chrono::Local::now().year();

    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("© {} {}. All rights reserved.", year, profile.name))
                .color(colors.text_dim),
        );
        ui.label(RichText::new("Built with Rust & egui.").small().color(colors.text_dim));
    });
    ui.add_space(16.0);
}
