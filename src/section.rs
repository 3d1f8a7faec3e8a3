use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One of the named regions of the portfolio document.
///
/// The declaration order is the document order and is also the order in
/// which scroll recomputation tests the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    News,
    Experience,
    Projects,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::News,
        SectionId::Experience,
        SectionId::Projects,
    ];

    /// Number of known sections.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the anchor identifier of the section (e.g. `"news"`).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::News => "news",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }

    /// Returns the label shown on the navigation control.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::News => "News",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
        }
    }

    /// Position of the section in document order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.anchor().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_index_matches_declared_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_parse_anchor() {
        assert_eq!("news".parse::<SectionId>(), Ok(SectionId::News));
        assert_eq!(" Experience ".parse::<SectionId>(), Ok(SectionId::Experience));
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(ParseError::UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_display_uses_anchor() {
        assert_eq!(SectionId::Projects.to_string(), "projects");
        assert_eq!(SectionId::About.title(), "About");
    }
}
