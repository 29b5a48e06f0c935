//! fOS Sprite Font - Bitmap Font Metrics
//!
//! Glyph lookup and text measurement for pre-rendered bitmap fonts:
//! - Glyph table with range-compressed character lookup
//! - Default-character substitution
//! - Batch and incremental (running) string measurement
//! - Character sources over strings, buffers and slices
//!
//! Nothing here touches pixels. The font texture is an opaque handle owned
//! by the font and handed back to whatever renderer draws the glyphs.

pub mod config;
pub mod description;
pub mod font;
pub mod geometry;
pub mod glyph;
pub mod measure;
pub mod source;
pub mod table;

pub use config::FontConfig;
pub use description::FontDescription;
pub use font::SpriteFont;
pub use geometry::{Rectangle, Vector2};
pub use glyph::{Glyph, Kerning};
pub use measure::MeasureState;
pub use source::{CharWindow, CharacterSource};
pub use table::{CharacterRegion, GlyphTable};

/// Sprite font error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    #[error("Invalid sprite font: {0}")]
    InvalidFontData(String),

    #[error("Character {0:?} cannot be resolved by this sprite font")]
    UnresolvableCharacter(char),

    #[error("Character window at {offset} (length {length:?}) exceeds {available} characters")]
    WindowOutOfRange {
        offset: usize,
        length: Option<usize>,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, FontError>;
