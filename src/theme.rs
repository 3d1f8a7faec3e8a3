//! Theme support for the portfolio viewer.
//!
//! The document has exactly two visual modes. Each mode maps to a color
//! palette for the page's light and dark styling, and to
//! egui visuals that are installed on the context when the mode changes.
//!
//! # Examples
//!
//! ```
//! use rfolio::theme::Theme;
//!
//! let theme: Theme = "dark".parse().unwrap();
//! assert_eq!(theme.toggled(), Theme::Light);
//! println!("Dark accent: {:?}", theme.colors().accent);
//! ```

use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::error::ParseError;
use crate::traits::StyleTarget;

/// Binary light/dark visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the text form stored in the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a stored preference, treating unrecognized text as unset.
    pub fn from_stored(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }

    /// Returns the color palette of this theme.
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => light_colors(),
            Theme::Dark => dark_colors(),
        }
    }

    /// Builds the egui visuals for this theme.
    pub fn visuals(self) -> egui::Visuals {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        self.colors().apply(&mut visuals);
        visuals
    }

    fn egui_theme(self) -> egui::Theme {
        match self {
            Theme::Light => egui::Theme::Light,
            Theme::Dark => egui::Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    /// Only the exact stored identifiers are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

/// Color palette for one theme, covering every element the document draws
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Color32,
    pub header_background: Color32,
    pub card_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Accents
    pub accent: Color32,
    pub accent_strong: Color32,
    pub on_accent: Color32,

    // Lines and hover fills
    pub border: Color32,
    pub hover: Color32,
    pub timeline_rail: Color32,
}

impl ThemeColors {
    /// Overrides egui visuals with this palette.
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card_background;
        visuals.extreme_bg_color = self.card_background;
        visuals.faint_bg_color = self.hover;

        visuals.override_text_color = Some(self.text);

        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke.color = self.on_accent;

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.weak_bg_fill = self.background;
        visuals.widgets.inactive.bg_fill = self.hover;
        visuals.widgets.hovered.weak_bg_fill = self.hover;
        visuals.widgets.hovered.bg_fill = self.hover;
        visuals.widgets.active.bg_fill = self.accent;

        visuals.hyperlink_color = self.accent;
    }
}

impl StyleTarget for egui::Context {
    /// Pins egui to the matching built-in theme and installs the palette.
    fn apply_theme(&self, theme: Theme) {
        self.set_visuals_of(theme.egui_theme(), theme.visuals());
        self.set_theme(theme.egui_theme());
    }
}

fn light_colors() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#f9fafb"),
        header_background: with_alpha(hex_to_color32("#ffffff"), 204),
        card_background: hex_to_color32("#ffffff"),

        text: hex_to_color32("#1f2937"),
        text_dim: hex_to_color32("#6b7280"),
        text_strong: hex_to_color32("#111827"),

        accent: hex_to_color32("#2563eb"),
        accent_strong: hex_to_color32("#1d4ed8"),
        on_accent: hex_to_color32("#ffffff"),

        border: hex_to_color32("#e5e7eb"),
        hover: hex_to_color32("#dbeafe"),
        timeline_rail: hex_to_color32("#e5e7eb"),
    }
}

fn dark_colors() -> ThemeColors {
    ThemeColors {
        background: hex_to_color32("#111827"),
        header_background: with_alpha(hex_to_color32("#1f2937"), 204),
        card_background: hex_to_color32("#1f2937"),

        text: hex_to_color32("#e5e7eb"),
        text_dim: hex_to_color32("#9ca3af"),
        text_strong: hex_to_color32("#ffffff"),

        accent: hex_to_color32("#60a5fa"),
        accent_strong: hex_to_color32("#60a5fa"),
        on_accent: hex_to_color32("#ffffff"),

        border: hex_to_color32("#374151"),
        hover: hex_to_color32("#374151"),
        timeline_rail: hex_to_color32("#374151"),
    }
}

/// Converts a hex color string (like "#2563eb") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Returns the color with its alpha channel replaced
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_two_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_from_stored_ignores_garbage() {
        assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Some("purple")), None);
        assert_eq!(Theme::from_stored(None), None);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#2563eb"), Color32::from_rgb(0x25, 0x63, 0xeb));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_visuals_follow_mode() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
        assert_eq!(Theme::Dark.visuals().panel_fill, Theme::Dark.colors().background);
    }
}
