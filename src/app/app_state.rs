//! Centralized application state for the portfolio viewer.
//!
//! The state is composed of focused parts so the renderer and the coordinator
//! can borrow them independently:
//! - navigation and theme state (the controller)
//! - document layout recorded by the renderer
//! - the static portfolio content

use rfolio::{DocumentLayout, NavigationController, Portfolio};

/// Main application state composed of focused state components.
#[derive(Debug)]
pub struct AppState {
    /// Active section, theme and compact menu flag
    pub navigation: NavigationController,

    /// Section extents and scroll position from the last layout pass
    pub document: DocumentLayout,

    /// Content rendered by the document
    pub portfolio: Portfolio,
}

impl AppState {
    /// Creates the application state around loaded content and navigation state.
    pub fn new(portfolio: Portfolio, navigation: NavigationController) -> Self {
        Self {
            navigation,
            document: DocumentLayout::new(),
            portfolio,
        }
    }
}
