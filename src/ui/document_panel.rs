//! Document panel UI rendering
//!
//! Lays out every section in document order inside one vertical scroll area,
//! records each section's extent in document coordinates, performs pending
//! smooth scrolls, and reports scroll events.

use eframe::egui;
use rfolio::{DocumentLayout, Portfolio, SectionId, ThemeColors};

use crate::ui::{about, experience, footer, hero, news, projects, MAX_CONTENT_WIDTH};

/// Vertical padding at the top and bottom of every section
const SECTION_PADDING: f32 = 48.0;

/// Fraction of the viewport that every inner section fills at least
const MIN_SECTION_FRACTION: f32 = 0.6;

/// Result of user interaction with the document
pub enum DocumentInteraction {
    /// A control inside the document asked to navigate to a section
    SectionRequested(SectionId),
    /// The scroll offset changed since the previous frame
    Scrolled,
}

/// Renders the scrolling document
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `portfolio` - Content to render
/// * `document` - Layout bookkeeping, updated with this pass's extents and scroll state
/// * `colors` - Current theme palette
/// * `compact` - Whether the window is narrow
pub fn render_document(
    ui: &mut egui::Ui,
    portfolio: &Portfolio,
    document: &mut DocumentLayout,
    colors: &ThemeColors,
    compact: bool,
) -> Vec<DocumentInteraction> {
    let mut interactions = Vec::new();
    document.begin_pass();
    let viewport_height = ui.available_height();

    let output = egui::ScrollArea::vertical()
        .id_salt("portfolio_document")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Top of the scrolled content in screen space
            let origin = ui.min_rect().top();

            let column_width = ui.available_width().min(MAX_CONTENT_WIDTH);
            let side_space = ((ui.available_width() - column_width) / 2.0).max(0.0);

            ui.horizontal(|ui| {
                ui.add_space(side_space);
                ui.vertical(|ui| {
                    ui.set_width(column_width);
                    ui.spacing_mut().item_spacing.y = 8.0;

                    for section in SectionId::ALL {
                        let section_response = ui.vertical(|ui| {
                            ui.set_min_height(min_section_height(section, viewport_height));
                            ui.add_space(SECTION_PADDING);
                            let requested = render_section(ui, section, portfolio, colors, compact);
                            ui.add_space(SECTION_PADDING);
                            requested
                        });

                        if let Some(requested) = section_response.inner {
                            interactions.push(DocumentInteraction::SectionRequested(requested));
                        }

                        let rect = section_response.response.rect;
                        document.record_extent(section, rect.top() - origin, rect.height());

                        if document.take_pending_scroll_for(section) {
                            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                        }
                    }
                });
            });

            footer::render_footer(ui, &portfolio.profile, colors);
        });

    let offset = output.state.offset.y;
    if document.observe_scroll(offset, output.inner_rect.height()) {
        interactions.push(DocumentInteraction::Scrolled);
    }

    interactions
}

/// Smallest height a section may take for the given viewport height.
///
/// Every section is taller than half the viewport, so scrolling its top to the
/// top of the viewport puts the viewport midpoint inside it. The first section
/// fills the whole viewport, as does the last one so that its top stays
/// reachable at the end of the document.
fn min_section_height(section: SectionId, viewport_height: f32) -> f32 {
    let is_first = section == SectionId::ALL[0];
    let is_last = section == SectionId::ALL[SectionId::COUNT - 1];
    if is_first || is_last {
        viewport_height
    } else {
        viewport_height * MIN_SECTION_FRACTION
    }
}

/// Renders one section's content, returning a navigation request if one was made.
fn render_section(
    ui: &mut egui::Ui,
    section: SectionId,
    portfolio: &Portfolio,
    colors: &ThemeColors,
    compact: bool,
) -> Option<SectionId> {
    match section {
        SectionId::Home => hero::render_hero(ui, &portfolio.profile, colors, compact),
        SectionId::About => {
            about::render_about(ui, &portfolio.about, colors);
            None
        }
        SectionId::News => {
            news::render_news(ui, &portfolio.news, colors);
            None
        }
        SectionId::Experience => {
            experience::render_experience(ui, &portfolio.experience, colors, compact);
            None
        }
        SectionId::Projects => {
            projects::render_projects(ui, &portfolio.projects, colors, compact);
            None
        }
    }
}
