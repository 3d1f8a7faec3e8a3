//! Panel orchestration and layout management.
//!
//! Lays out the header and the scrolling document, and collects the
//! interactions that the application coordinator applies after rendering.

use crate::app::AppState;
use crate::ui::{document_panel, header, COMPACT_WIDTH};
use rfolio::SectionId;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// User asked to navigate to a section
    SectionRequested(SectionId),
    /// User clicked the theme toggle
    ThemeToggleRequested,
    /// User clicked the compact menu button
    MenuToggleRequested,
    /// The document's scroll offset changed
    DocumentScrolled,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called once per frame from the eframe::App::update() implementation.
    /// Interactions are returned in the order they were produced.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        let colors = state.navigation.theme().colors();
        let compact = ctx.content_rect().width() < COMPACT_WIDTH;

        // Header panel at the top
        let header_frame = egui::Frame::default()
            .inner_margin(egui::Margin::symmetric(16, 8))
            .fill(colors.header_background);

        egui::TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                let header_interaction = header::render_header(
                    ui,
                    &state.navigation,
                    &state.portfolio.profile,
                    &colors,
                    compact,
                );

                if let Some(header_interaction) = header_interaction {
                    interactions.push(match header_interaction {
                        header::HeaderInteraction::SectionClicked(section) => {
                            PanelInteraction::SectionRequested(section)
                        }
                        header::HeaderInteraction::ThemeToggleClicked => {
                            PanelInteraction::ThemeToggleRequested
                        }
                        header::HeaderInteraction::MenuButtonClicked => {
                            PanelInteraction::MenuToggleRequested
                        }
                    });
                }
            });

        // Central panel: the scrolling document
        let document_frame = egui::Frame::default().fill(colors.background);

        egui::CentralPanel::default()
            .frame(document_frame)
            .show(ctx, |ui| {
                let document_interactions = document_panel::render_document(
                    ui,
                    &state.portfolio,
                    &mut state.document,
                    &colors,
                    compact,
                );

                interactions.extend(document_interactions.into_iter().map(|interaction| {
                    match interaction {
                        document_panel::DocumentInteraction::SectionRequested(section) => {
                            PanelInteraction::SectionRequested(section)
                        }
                        document_panel::DocumentInteraction::Scrolled => {
                            PanelInteraction::DocumentScrolled
                        }
                    }
                }));
            });

        interactions
    }
}
