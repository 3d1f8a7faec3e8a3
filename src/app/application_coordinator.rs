//! Application-level coordination of user interactions.
//!
//! Translates interactions reported by the panels into calls on the
//! navigation controller, wiring in the document layout, the egui context and
//! the persistent storage each call needs.

use crate::app::AppState;
use tracing::debug;
use rfolio::SectionId;

/// Coordinates navigation, theming and scroll handling.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Navigates to a section and schedules the frame that performs the scroll.
    pub fn navigate_to(state: &mut AppState, section: SectionId, ctx: &egui::Context) {
        debug!(%section, "navigation requested");
        state.navigation.set_active_section(section, &mut state.document);

        // The pending scroll is consumed while laying out the next frame
        ctx.request_repaint();
    }

    /// Flips the theme, persisting it when storage is available.
    pub fn toggle_theme<S>(state: &mut AppState, ctx: &egui::Context, storage: Option<&mut S>)
    where
        S: eframe::Storage + ?Sized,
    {
        state.navigation.toggle_theme(storage, ctx);
    }

    /// Opens or closes the compact navigation menu.
    pub fn toggle_menu(state: &mut AppState) {
        state.navigation.toggle_menu();
    }

    /// Re-derives the active section after the document scrolled.
    pub fn handle_scroll(state: &mut AppState) {
        state
            .navigation
            .recompute_active_section_from_scroll(&state.document);
    }
}
