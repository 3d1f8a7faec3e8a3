//! Error types for parsing identifiers supplied as text.
//!
//! Controller operations never fail; these errors only surface where text
//! from outside the program (command line, stored preferences) is parsed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::UnknownSection("blog".to_string());
        assert_eq!(err.to_string(), "unknown section 'blog'");

        let err = ParseError::UnknownTheme("sepia".to_string());
        assert_eq!(err.to_string(), "unknown theme 'sepia'");
    }
}
