//! Header panel UI rendering
//!
//! Shows the owner's name, one navigation control per section with the active
//! section highlighted, and the theme toggle. Narrow windows get a menu button
//! that expands the navigation into a vertical list.

use eframe::egui;
use egui::RichText;
use rfolio::{NavigationController, Profile, SectionId, Theme, ThemeColors};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked a section's navigation control
    SectionClicked(SectionId),
    /// User clicked the sun/moon button
    ThemeToggleClicked,
    /// User clicked the compact menu button
    MenuButtonClicked,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `navigation` - Current navigation and theme state
/// * `profile` - Owner profile (for the name)
/// * `colors` - Current theme palette
/// * `compact` - Whether to collapse navigation into the menu
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(
    ui: &mut egui::Ui,
    navigation: &NavigationController,
    profile: &Profile,
    colors: &ThemeColors,
    compact: bool,
) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&profile.name)
                .size(20.0)
                .strong()
                .color(colors.accent_strong),
        );

        // Controls are laid out from the right edge, so in reverse order
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if compact {
                let menu_icon = if navigation.is_menu_open() { "✖" } else { "☰" };
                if ui
                    .button(RichText::new(menu_icon).size(18.0))
                    .on_hover_text("Open main menu")
                    .clicked()
                {
                    interaction = Some(HeaderInteraction::MenuButtonClicked);
                }
            }

            if theme_button(ui, navigation.theme()).clicked() {
                interaction = Some(HeaderInteraction::ThemeToggleClicked);
            }

            if !compact {
                ui.add_space(16.0);
                for section in SectionId::ALL.iter().rev() {
                    let active = navigation.active_section() == *section;
                    if nav_button(ui, *section, active, colors).clicked() {
                        interaction = Some(HeaderInteraction::SectionClicked(*section));
                    }
                }
            }
        });
    });

    if compact && navigation.is_menu_open() {
        ui.add_space(4.0);
        ui.vertical(|ui| {
            for section in SectionId::ALL {
                let active = navigation.active_section() == section;
                let response = ui.add_sized(
                    [ui.available_width(), 28.0],
                    nav_item(section, active, colors),
                );
                if response.clicked() {
                    interaction = Some(HeaderInteraction::SectionClicked(section));
                }
            }
        });
    }

    interaction
}

/// Moon while light (switches to dark), sun while dark.
fn theme_button(ui: &mut egui::Ui, theme: Theme) -> egui::Response {
    let (icon, hint) = match theme {
        Theme::Light => ("🌙", "Switch to dark theme"),
        Theme::Dark => ("☀", "Switch to light theme"),
    };

    ui.add(egui::Button::new(RichText::new(icon).size(18.0)).frame(false))
        .on_hover_text(hint)
}

fn nav_button(
    ui: &mut egui::Ui,
    section: SectionId,
    active: bool,
    colors: &ThemeColors,
) -> egui::Response {
    ui.add(nav_item(section, active, colors))
}

fn nav_item(section: SectionId, active: bool, colors: &ThemeColors) -> egui::Button<'static> {
    if active {
        egui::Button::new(RichText::new(section.title()).color(colors.on_accent))
            .fill(colors.accent)
            .corner_radius(6.0)
    } else {
        egui::Button::new(RichText::new(section.title()).color(colors.text)).frame(false)
    }
}
