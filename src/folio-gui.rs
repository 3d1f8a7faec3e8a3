//! Portfolio Viewer GUI Application
//!
//! Renders the portfolio as one scrolling document using the egui framework:
//! - Header with per-section navigation, highlighted for the section in view
//! - Light/dark theme toggle persisted across sessions
//! - Compact navigation menu for narrow windows
//! - Smooth scrolling to a section when its navigation control is clicked

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is split into:
//! - `app/` - Application state and coordination of user interactions
//! - `ui/` - Panel layout and stateless rendering of the portfolio content

use anyhow::Context as _;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator};
use rfolio::{NavigationController, Portfolio, SectionId, StyleTarget};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes logging and launches the viewer.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("rfolio=info".parse()?)
                .add_directive("folio_gui=info".parse()?),
        )
        .init();

    // Optional section to open on startup, e.g. `folio-gui news`
    let initial_section = std::env::args().nth(1).and_then(|arg| {
        arg.parse::<SectionId>()
            .map_err(|err| warn!("ignoring startup argument: {err}"))
            .ok()
    });

    let portfolio = Portfolio::embedded()?;
    info!(name = %portfolio.profile.name, "starting portfolio viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(format!("{} - Portfolio", portfolio.profile.name)),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, portfolio, initial_section)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("Portfolio viewer exited with an error")
}

/// The main portfolio viewer application.
///
/// Delegates to:
/// - `ApplicationCoordinator` for navigation, theme and scroll handling
/// - `PanelManager` for panel layout and rendering
struct PortfolioApp {
    /// Centralized application state
    state: AppState,
    /// Section to navigate to once the document has been laid out
    pending_section: Option<SectionId>,
}

impl PortfolioApp {
    /// Creates a new viewer with the theme preference loaded from persistent storage.
    fn new(
        cc: &eframe::CreationContext,
        portfolio: Portfolio,
        initial_section: Option<SectionId>,
    ) -> Self {
        let navigation = NavigationController::load(cc.storage);
        cc.egui_ctx.apply_theme(navigation.theme());

        Self {
            state: AppState::new(portfolio, navigation),
            pending_section: initial_section,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        ctx: &egui::Context,
        frame: &mut eframe::Frame,
    ) {
        match interaction {
            PanelInteraction::SectionRequested(section) => {
                ApplicationCoordinator::navigate_to(&mut self.state, section, ctx);
            }
            PanelInteraction::ThemeToggleRequested => {
                ApplicationCoordinator::toggle_theme(&mut self.state, ctx, frame.storage_mut());
            }
            PanelInteraction::MenuToggleRequested => {
                ApplicationCoordinator::toggle_menu(&mut self.state);
            }
            PanelInteraction::DocumentScrolled => {
                ApplicationCoordinator::handle_scroll(&mut self.state);
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    /// Called when the app is being shut down - ensures the theme preference is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.state.navigation.save_theme(storage);
    }

    /// Main update loop.
    ///
    /// 1. Render all panels, recording section layout and scroll position
    /// 2. Navigate to the startup section once the layout is known
    /// 3. Apply the interactions collected while rendering, in order
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let interactions = PanelManager::render_all_panels(ctx, &mut self.state);

        if let Some(section) = self.pending_section.take() {
            ApplicationCoordinator::navigate_to(&mut self.state, section, ctx);
        }

        for interaction in interactions {
            self.handle_panel_interaction(interaction, ctx, frame);
        }
    }
}
