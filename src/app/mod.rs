//! Application-level modules for the portfolio viewer.
//!
//! This module contains the application coordinator and the composed state it
//! operates on.

mod app_state;
mod application_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
