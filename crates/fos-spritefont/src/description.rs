//! Parsed font asset data
//!
//! The content importer turns a font asset into parallel per-character
//! arrays. [`FontDescription`] is that hand-off record; it is validated
//! when a [`SpriteFont`](crate::SpriteFont) is built from it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::FontConfig;
use crate::geometry::Rectangle;
use crate::glyph::Kerning;
use crate::{FontError, Result};

/// Per-character glyph data plus layout settings, as produced by a loader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontDescription {
    /// Covered character codes, strictly ascending. Loaders may send
    /// numbers or one-character strings.
    #[serde(deserialize_with = "deserialize_codes")]
    pub characters: Vec<u32>,
    /// Glyph rectangles in the font texture
    pub glyph_bounds: Vec<Rectangle>,
    /// Ink rectangles relative to each glyph's bounds
    pub cropping: Vec<Rectangle>,
    /// Bearing/width triples
    pub kerning: Vec<Kerning>,
    #[serde(flatten)]
    pub config: FontConfig,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CharacterCode {
    Code(u32),
    Char(char),
}

fn deserialize_codes<'de, D>(deserializer: D) -> std::result::Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Vec::<CharacterCode>::deserialize(deserializer)?;
    Ok(codes
        .into_iter()
        .map(|code| match code {
            CharacterCode::Code(n) => n,
            CharacterCode::Char(c) => c as u32,
        })
        .collect())
}

impl FontDescription {
    pub fn new(config: FontConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Append one character's glyph data
    pub fn push(&mut self, c: char, bounds: Rectangle, cropping: Rectangle, kerning: Kerning) {
        self.characters.push(c as u32);
        self.glyph_bounds.push(bounds);
        self.cropping.push(cropping);
        self.kerning.push(kerning);
    }

    /// Builder form of [`push`](Self::push)
    pub fn with_glyph(
        mut self,
        c: char,
        bounds: Rectangle,
        cropping: Rectangle,
        kerning: Kerning,
    ) -> Self {
        self.push(c, bounds, cropping, kerning);
        self
    }

    /// Character codes as `char`s.
    ///
    /// Fails with [`FontError::InvalidFontData`] on a code that is not a
    /// Unicode scalar value (a surrogate, or above `U+10FFFF`).
    pub fn chars(&self) -> Result<Vec<char>> {
        self.characters
            .iter()
            .map(|&code| {
                char::from_u32(code).ok_or_else(|| {
                    tracing::warn!("Rejecting font data: invalid character code {:#x}", code);
                    FontError::InvalidFontData(format!("invalid character code {code:#x}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_stores_codes() {
        let desc = FontDescription::default().with_glyph(
            'A',
            Rectangle::EMPTY,
            Rectangle::EMPTY,
            Kerning::default(),
        );
        assert_eq!(desc.characters, vec![65]);
        assert_eq!(desc.chars().unwrap(), vec!['A']);
    }

    #[test]
    fn test_invalid_codes_rejected() {
        for code in [0xD800, 0xDFFF, 0x11_0000] {
            let desc = FontDescription {
                characters: vec![0x41, code],
                ..FontDescription::default()
            };
            assert!(
                matches!(desc.chars(), Err(FontError::InvalidFontData(_))),
                "{code:#x} should be rejected"
            );
        }
    }
}
