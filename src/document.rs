//! Layout bookkeeping for the scrolling portfolio document.
//!
//! The renderer records where each section landed during a layout pass and
//! reports the scroll area's offset. Navigation reads those values back
//! through [`DocumentView`] and queues scroll requests that the renderer
//! consumes on the next pass.

use crate::section::SectionId;
use crate::traits::{DocumentView, ScrollMetrics, SectionExtent};

/// Section extents and scroll state collected from the last layout pass.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    /// Extent of each section, indexed by `SectionId::index`
    extents: [Option<SectionExtent>; SectionId::COUNT],
    /// Most recently observed scroll metrics
    scroll: ScrollMetrics,
    /// Whether `scroll` holds a real observation yet
    observed: bool,
    /// Section the renderer should scroll to when it next lays it out
    pending_scroll: Option<SectionId>,
}

impl DocumentLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the extents of the previous pass.
    ///
    /// Sections that are not recorded again during the pass read as absent.
    pub fn begin_pass(&mut self) {
        self.extents = [None; SectionId::COUNT];
    }

    /// Records where a section was laid out, in document coordinates.
    pub fn record_extent(&mut self, id: SectionId, top: f32, height: f32) {
        self.extents[id.index()] = Some(SectionExtent::new(top, height.max(0.0)));
    }

    /// Stores the viewport's scroll metrics.
    ///
    /// Returns true when the offset moved since the previous observation,
    /// which is what counts as a scroll event. The first observation never
    /// does.
    pub fn observe_scroll(&mut self, offset: f32, viewport_height: f32) -> bool {
        let scrolled = self.observed && self.scroll.offset != offset;
        self.scroll = ScrollMetrics::new(offset, viewport_height);
        self.observed = true;
        scrolled
    }

    /// Returns the section a scroll has been requested for, if any.
    pub fn pending_scroll(&self) -> Option<SectionId> {
        self.pending_scroll
    }

    /// Takes the pending scroll request if it targets `id`.
    pub fn take_pending_scroll_for(&mut self, id: SectionId) -> bool {
        if self.pending_scroll == Some(id) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }
}

impl DocumentView for DocumentLayout {
    fn section_extent(&self, id: SectionId) -> Option<SectionExtent> {
        self.extents[id.index()]
    }

    fn scroll_to(&mut self, id: SectionId) {
        self.pending_scroll = Some(id);
    }

    fn current_scroll(&self) -> ScrollMetrics {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_query_extent() {
        let mut layout = DocumentLayout::new();
        layout.record_extent(SectionId::About, 800.0, 600.0);

        assert_eq!(
            layout.section_extent(SectionId::About),
            Some(SectionExtent::new(800.0, 600.0))
        );
        assert_eq!(layout.section_extent(SectionId::News), None);
    }

    #[test]
    fn test_begin_pass_clears_extents() {
        let mut layout = DocumentLayout::new();
        layout.record_extent(SectionId::Home, 0.0, 800.0);
        layout.begin_pass();

        assert_eq!(layout.section_extent(SectionId::Home), None);
    }

    #[test]
    fn test_first_observation_is_not_a_scroll() {
        let mut layout = DocumentLayout::new();

        assert!(!layout.observe_scroll(0.0, 900.0));
        assert!(!layout.observe_scroll(0.0, 900.0));
        assert!(layout.observe_scroll(25.0, 900.0));
        assert_eq!(layout.current_scroll(), ScrollMetrics::new(25.0, 900.0));
    }

    #[test]
    fn test_resize_alone_is_not_a_scroll() {
        let mut layout = DocumentLayout::new();
        layout.observe_scroll(100.0, 900.0);

        assert!(!layout.observe_scroll(100.0, 700.0));
        assert_eq!(layout.current_scroll().viewport_height, 700.0);
    }

    #[test]
    fn test_pending_scroll_is_consumed_once() {
        let mut layout = DocumentLayout::new();
        layout.scroll_to(SectionId::News);

        assert!(!layout.take_pending_scroll_for(SectionId::About));
        assert!(layout.take_pending_scroll_for(SectionId::News));
        assert!(!layout.take_pending_scroll_for(SectionId::News));
        assert_eq!(layout.pending_scroll(), None);
    }
}
