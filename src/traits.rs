use crate::section::SectionId;
use crate::theme::Theme;

/// Vertical extent of a section within the full scrollable document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    /// Offset of the section's top edge from the top of the document
    pub top: f32,
    /// Rendered height of the section
    pub height: f32,
}

impl SectionExtent {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Returns the offset just past the section's bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns true if `position` lies in `[top, top + height)`.
    pub fn contains(&self, position: f32) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Scroll state of the viewport over the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the document
    pub offset: f32,
    /// Height of the visible viewport
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport_height: f32) -> Self {
        Self {
            offset,
            viewport_height,
        }
    }

    /// Document position at the vertical middle of the viewport.
    pub fn probe(&self) -> f32 {
        self.offset + self.viewport_height / 2.0
    }
}

/// Trait for querying and scrolling the rendered document.
///
/// Implemented by whatever lays out the sections; the navigation controller
/// only talks to the document through this interface.
pub trait DocumentView {
    /// Returns the extent of a section, or None if it is not laid out
    fn section_extent(&self, id: SectionId) -> Option<SectionExtent>;

    /// Starts a smooth scroll that brings the section's top into view
    fn scroll_to(&mut self, id: SectionId);

    /// Returns the current scroll offset and viewport height
    fn current_scroll(&self) -> ScrollMetrics;
}

/// Trait for the global presentation flag consumed by styling.
pub trait StyleTarget {
    /// Switches the visual palette to `theme`
    fn apply_theme(&self, theme: Theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_is_half_open() {
        let extent = SectionExtent::new(800.0, 600.0);
        assert!(!extent.contains(799.9));
        assert!(extent.contains(800.0));
        assert!(extent.contains(1399.9));
        assert!(!extent.contains(1400.0));
    }

    #[test]
    fn test_zero_height_contains_nothing() {
        let extent = SectionExtent::new(100.0, 0.0);
        assert!(!extent.contains(100.0));
    }

    #[test]
    fn test_probe_is_viewport_midpoint() {
        let metrics = ScrollMetrics::new(1200.0, 900.0);
        assert_eq!(metrics.probe(), 1650.0);
    }
}
