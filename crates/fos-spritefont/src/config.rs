//! Font configuration

use serde::{Deserialize, Serialize};

/// Adjustable layout settings of a sprite font
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Distance from baseline to baseline, and the minimum line height
    pub line_spacing: i32,
    /// Extra tracking between consecutive glyphs on a line
    pub spacing: f32,
    /// Substituted for characters the font does not cover
    pub default_character: Option<char>,
}

impl FontConfig {
    /// Set line spacing
    pub fn line_spacing(mut self, line_spacing: i32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Set tracking
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the substitution character
    pub fn default_character(mut self, c: Option<char>) -> Self {
        self.default_character = c;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = FontConfig::default();
        assert_eq!(config.line_spacing, 0);
        assert_eq!(config.spacing, 0.0);
        assert_eq!(config.default_character, None);
    }

    #[test]
    fn test_builder() {
        let config = FontConfig::default()
            .line_spacing(18)
            .spacing(1.5)
            .default_character(Some('?'));
        assert_eq!(config.line_spacing, 18);
        assert_eq!(config.spacing, 1.5);
        assert_eq!(config.default_character, Some('?'));
    }
}
