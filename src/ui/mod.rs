//! UI panel rendering subsystem
//!
//! This module contains all rendering logic for the portfolio viewer:
//! - Header panel (owner name, section navigation, theme toggle, compact menu)
//! - Document panel (scroll area laying out every section in order)
//! - Section renderers (hero, about, news, experience, projects)
//! - Footer
//! - Shared widgets (section titles, cards, tag chips)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod document_panel;
pub mod hero;
pub mod about;
pub mod news;
pub mod experience;
pub mod projects;
pub mod footer;
pub mod widgets;
pub mod panel_manager;

/// Window width below which navigation collapses into the compact menu
pub const COMPACT_WIDTH: f32 = 768.0;

/// Maximum width of the document's content column
pub const MAX_CONTENT_WIDTH: f32 = 900.0;
