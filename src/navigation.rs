//! Navigation and theme state for the portfolio document.
//!
//! [`NavigationController`] is the single owner of the active section, the
//! theme and the compact-menu flag. It is driven by explicit calls (a click on
//! a navigation control, a theme toggle, a scroll event) and reaches the
//! document, the styling layer and the preference store only through the
//! collaborators passed into each call. Every operation is total: missing
//! anchors, missing preferences and probes outside the document are no-ops.

use tracing::debug;

use crate::section::SectionId;
use crate::theme::Theme;
use crate::traits::{DocumentView, SectionExtent, StyleTarget};

/// Preference store key holding the theme as text.
pub const THEME_KEY: &str = "theme";

/// Returns the section containing `probe`, scanning in the given order.
///
/// Every matching section overwrites the previous match, so when extents
/// overlap the later one wins. Returns None when nothing contains the probe.
pub fn active_section_at<I>(extents: I, probe: f32) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, SectionExtent)>,
{
    let mut active = None;
    for (id, extent) in extents {
        if extent.contains(probe) {
            active = Some(id);
        }
    }
    active
}

/// Session state for navigation and theming.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationController {
    /// Section currently considered in view
    active_section: SectionId,
    /// Current visual mode
    theme: Theme,
    /// Whether the compact navigation menu is expanded
    menu_open: bool,
}

impl NavigationController {
    /// Creates a controller on the home section with the light theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller on the home section with a specific theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Creates a controller with the theme read from persistent storage.
    ///
    /// An absent store, an absent key or an unrecognized value all yield
    /// the light theme.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let stored = storage.and_then(|s| s.get_string(THEME_KEY));
        let theme = Theme::from_stored(stored.as_deref()).unwrap_or_default();
        debug!(stored = ?stored, %theme, "loaded theme preference");
        Self::with_theme(theme)
    }

    // ===== Queries =====

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // ===== Actions =====

    /// Navigates to a section.
    ///
    /// The active section is set unconditionally. If the document has laid
    /// out the target, a smooth scroll to it is requested; otherwise the
    /// scroll is skipped. The compact menu is closed either way.
    pub fn set_active_section(&mut self, id: SectionId, document: &mut dyn DocumentView) {
        self.active_section = id;

        if document.section_extent(id).is_some() {
            document.scroll_to(id);
        } else {
            debug!(section = %id, "section not laid out, skipping scroll");
        }

        self.menu_open = false;
    }

    /// Flips between the light and dark theme.
    ///
    /// The new value is written and flushed to `storage` when one is
    /// available, and applied to `style` before returning.
    pub fn toggle_theme<S>(&mut self, storage: Option<&mut S>, style: &dyn StyleTarget)
    where
        S: eframe::Storage + ?Sized,
    {
        self.theme = self.theme.toggled();

        match storage {
            Some(storage) => self.save_theme(storage),
            None => debug!("no persistent storage, theme preference not saved"),
        }

        style.apply_theme(self.theme);
        debug!(theme = %self.theme, "theme toggled");
    }

    /// Writes the current theme to persistent storage and flushes it.
    pub fn save_theme<S>(&self, storage: &mut S)
    where
        S: eframe::Storage + ?Sized,
    {
        storage.set_string(THEME_KEY, self.theme.as_str().to_string());
        storage.flush();
    }

    /// Flips the compact navigation menu open or closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Updates the active section from the document's scroll position.
    ///
    /// The probe is the document position at the middle of the viewport.
    /// The last section (in declared order) whose extent contains the probe
    /// becomes active; if none does, the active section is left as it was.
    pub fn recompute_active_section_from_scroll(&mut self, document: &dyn DocumentView) {
        let probe = document.current_scroll().probe();
        let extents = SectionId::ALL
            .into_iter()
            .filter_map(|id| document.section_extent(id).map(|extent| (id, extent)));

        if let Some(id) = active_section_at(extents, probe) {
            if id != self.active_section {
                debug!(section = %id, probe, "active section changed by scroll");
            }
            self.active_section = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ScrollMetrics;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
        flushes: usize,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
                flushes: 0,
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    /// Document with fixed extents that records scroll requests
    #[derive(Default)]
    struct FakeDocument {
        extents: HashMap<SectionId, SectionExtent>,
        scroll: ScrollMetrics,
        scrolled_to: Vec<SectionId>,
    }

    impl FakeDocument {
        fn with_sections(sections: &[(SectionId, f32, f32)]) -> Self {
            let extents = sections
                .iter()
                .map(|&(id, top, height)| (id, SectionExtent::new(top, height)))
                .collect();
            Self {
                extents,
                ..Self::default()
            }
        }

        /// Positions the viewport so that its midpoint is at `probe`.
        fn probe_at(&mut self, probe: f32) {
            self.scroll = ScrollMetrics::new(probe - 400.0, 800.0);
        }
    }

    impl DocumentView for FakeDocument {
        fn section_extent(&self, id: SectionId) -> Option<SectionExtent> {
            self.extents.get(&id).copied()
        }

        fn scroll_to(&mut self, id: SectionId) {
            self.scrolled_to.push(id);
        }

        fn current_scroll(&self) -> ScrollMetrics {
            self.scroll
        }
    }

    #[derive(Default)]
    struct RecordingStyle {
        applied: RefCell<Vec<Theme>>,
    }

    impl StyleTarget for RecordingStyle {
        fn apply_theme(&self, theme: Theme) {
            self.applied.borrow_mut().push(theme);
        }
    }

    fn three_sections() -> FakeDocument {
        FakeDocument::with_sections(&[
            (SectionId::Home, 0.0, 800.0),
            (SectionId::About, 800.0, 600.0),
            (SectionId::News, 1400.0, 500.0),
        ])
    }

    #[test]
    fn test_new_controller_defaults() {
        let nav = NavigationController::new();
        assert_eq!(nav.active_section(), SectionId::Home);
        assert_eq!(nav.theme(), Theme::Light);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_set_active_section_from_any_state() {
        let mut doc = three_sections();
        for from in SectionId::ALL {
            for to in SectionId::ALL {
                let mut nav = NavigationController::new();
                nav.set_active_section(from, &mut doc);
                nav.set_active_section(to, &mut doc);
                assert_eq!(nav.active_section(), to);
            }
        }
    }

    #[test]
    fn test_set_active_section_scrolls_only_to_laid_out_sections() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();

        nav.set_active_section(SectionId::About, &mut doc);
        nav.set_active_section(SectionId::Projects, &mut doc);

        assert_eq!(nav.active_section(), SectionId::Projects);
        assert_eq!(doc.scrolled_to, vec![SectionId::About]);
    }

    #[test]
    fn test_set_active_section_is_idempotent() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();

        nav.set_active_section(SectionId::News, &mut doc);
        let before = nav.clone();
        nav.set_active_section(SectionId::News, &mut doc);

        assert_eq!(nav, before);
    }

    #[test]
    fn test_set_active_section_closes_menu() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.set_active_section(SectionId::About, &mut doc);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_toggle_theme_persists_and_applies() {
        let mut storage = MockStorage::new();
        let style = RecordingStyle::default();
        let mut nav = NavigationController::new();

        nav.toggle_theme(Some(&mut storage), &style);

        assert_eq!(nav.theme(), Theme::Dark);
        assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("dark"));
        assert_eq!(storage.flushes, 1);
        assert_eq!(*style.applied.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn test_toggle_theme_is_an_involution() {
        let mut storage = MockStorage::new();
        let style = RecordingStyle::default();
        let mut nav = NavigationController::with_theme(Theme::Dark);

        nav.toggle_theme(Some(&mut storage), &style);
        assert_eq!(nav.theme(), Theme::Light);
        nav.toggle_theme(Some(&mut storage), &style);
        assert_eq!(nav.theme(), Theme::Dark);
        assert_eq!(storage.data.get(THEME_KEY).map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_toggle_theme_without_storage() {
        let style = RecordingStyle::default();
        let mut nav = NavigationController::new();

        nav.toggle_theme(None::<&mut MockStorage>, &style);

        assert_eq!(nav.theme(), Theme::Dark);
        assert_eq!(*style.applied.borrow(), vec![Theme::Dark]);
    }

    #[test]
    fn test_load_round_trip() {
        let mut storage = MockStorage::new();
        let style = RecordingStyle::default();

        let mut nav = NavigationController::load(Some(&storage));
        nav.toggle_theme(Some(&mut storage), &style);

        let reloaded = NavigationController::load(Some(&storage));
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.active_section(), SectionId::Home);
    }

    #[test]
    fn test_load_defaults_to_light() {
        let mut storage = MockStorage::new();
        assert_eq!(NavigationController::load(None).theme(), Theme::Light);
        assert_eq!(NavigationController::load(Some(&storage)).theme(), Theme::Light);

        eframe::Storage::set_string(&mut storage, THEME_KEY, "midnight".to_string());
        assert_eq!(NavigationController::load(Some(&storage)).theme(), Theme::Light);
    }

    #[test]
    fn test_scroll_selects_containing_section() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();

        doc.probe_at(850.0);
        nav.recompute_active_section_from_scroll(&doc);
        assert_eq!(nav.active_section(), SectionId::About);

        doc.probe_at(1400.0);
        nav.recompute_active_section_from_scroll(&doc);
        assert_eq!(nav.active_section(), SectionId::News);
    }

    #[test]
    fn test_scroll_miss_keeps_previous_section() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();
        nav.set_active_section(SectionId::About, &mut doc);

        doc.probe_at(50000.0);
        nav.recompute_active_section_from_scroll(&doc);
        assert_eq!(nav.active_section(), SectionId::About);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut doc = three_sections();
        let mut nav = NavigationController::new();
        nav.toggle_menu();

        doc.probe_at(850.0);
        nav.recompute_active_section_from_scroll(&doc);
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_overlap_last_declared_wins() {
        let extents = [
            (SectionId::Home, SectionExtent::new(0.0, 1000.0)),
            (SectionId::About, SectionExtent::new(500.0, 1000.0)),
        ];
        assert_eq!(active_section_at(extents, 700.0), Some(SectionId::About));
        assert_eq!(active_section_at(extents, 300.0), Some(SectionId::Home));
        assert_eq!(active_section_at(extents, 1500.0), None);
    }

    #[test]
    fn test_overlap_resolved_in_declared_order_not_offset_order() {
        let mut doc = FakeDocument::with_sections(&[
            (SectionId::Experience, 0.0, 2000.0),
            (SectionId::News, 0.0, 2000.0),
        ]);
        let mut nav = NavigationController::new();

        doc.probe_at(1000.0);
        nav.recompute_active_section_from_scroll(&doc);
        assert_eq!(nav.active_section(), SectionId::Experience);
    }
}
