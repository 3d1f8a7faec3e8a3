pub mod error;
pub mod section;
pub mod traits;
pub mod theme;
pub mod document;
pub mod navigation;
pub mod content;

// Export error type
pub use error::ParseError;

// Export navigation core
pub use section::SectionId;
pub use navigation::{NavigationController, active_section_at, THEME_KEY};

// Export collaborator interfaces
pub use traits::{DocumentView, StyleTarget, SectionExtent, ScrollMetrics};
pub use document::DocumentLayout;

// Export theme support
pub use theme::{Theme, ThemeColors, hex_to_color32, with_alpha};

// Export content model
pub use content::{
    Portfolio, Profile, Link, Paragraph, Span,
    NewsItem, ExperienceEntry, ProjectCard
};
