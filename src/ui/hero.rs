//! Hero section (home)
//!
//! Avatar badge, name, headline, profile links and the button that leads into
//! the About section.

use eframe::egui;
use egui::{Align2, FontId, RichText, Sense, Stroke};
use rfolio::{Profile, SectionId, ThemeColors};

const AVATAR_RADIUS: f32 = 64.0;

/// Renders the hero section.
///
/// Returns `Some(SectionId::About)` when the "Learn More About Me" button was clicked.
pub fn render_hero(
    ui: &mut egui::Ui,
    profile: &Profile,
    colors: &ThemeColors,
    compact: bool,
) -> Option<SectionId> {
    let mut requested = None;

    let mut intro = |ui: &mut egui::Ui| {
        ui.label(
            RichText::new(&profile.name)
                .size(40.0)
                .strong()
                .color(colors.text_strong),
        );
        ui.label(RichText::new(&profile.headline).size(18.0).color(colors.text_dim));
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            for link in &profile.links {
                ui.hyperlink_to(RichText::new(&link.label).strong(), &link.url);
            }
        });
        ui.add_space(16.0);

        let button = egui::Button::new(
            RichText::new("Learn More About Me")
                .strong()
                .color(colors.on_accent),
        )
        .fill(colors.accent)
        .corner_radius(8.0)
        .min_size(egui::vec2(200.0, 40.0));

        if ui.add(button).clicked() {
            requested = Some(SectionId::About);
        }
    };

    if compact {
        avatar(ui, &profile.initials, colors);
        ui.add_space(16.0);
        intro(ui);
    } else {
        ui.horizontal(|ui| {
            avatar(ui, &profile.initials, colors);
            ui.add_space(32.0);
            ui.vertical(|ui| intro(ui));
        });
    }

    requested
}

/// Draws the circular initials badge.
fn avatar(ui: &mut egui::Ui, initials: &str, colors: &ThemeColors) {
    let size = egui::Vec2::splat(AVATAR_RADIUS * 2.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let center = rect.center();

    let painter = ui.painter();
    painter.circle_filled(center, AVATAR_RADIUS, colors.hover);
    painter.circle_stroke(center, AVATAR_RADIUS - 2.0, Stroke::new(4.0, colors.card_background));
    painter.text(
        center,
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(40.0),
        colors.text_dim,
    );
}
