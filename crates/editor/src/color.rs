//! Normalized `#rrggbb` colors.

use std::fmt::{self, Display};
use std::str::FromStr;

use shared::DEFAULT_COLOR;

use crate::error::EditorError;

/// An RGB color stored in its normalized form: `#` followed by six
/// lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parses `#rgb`, `#rrggbb` (the `#` is optional, case is ignored).
    pub fn parse(input: &str) -> Result<Self, EditorError> {
        let malformed = || EditorError::MalformedColor(input.to_string());

        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let digits = digits.to_ascii_lowercase();
        let expanded = match digits.len() {
            6 => digits,
            // #rgb shorthand
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(malformed()),
        };

        Ok(Self(format!("#{expanded}")))
    }

    /// The normalized string, e.g. `#4da3ff`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl FromStr for HexColor {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        assert_eq!(HexColor::parse("#4DA3FF").unwrap().as_str(), "#4da3ff");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(HexColor::parse("ff0000").unwrap().as_str(), "#ff0000");
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(HexColor::parse("#AbC").unwrap().as_str(), "#aabbcc");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(HexColor::parse("  #00ff00 ").unwrap().as_str(), "#00ff00");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#gggggg", "red", "# 123456", "##123456"] {
            assert!(
                matches!(HexColor::parse(bad), Err(EditorError::MalformedColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_color() {
        assert_eq!(HexColor::default().as_str(), "#4da3ff");
    }
}
