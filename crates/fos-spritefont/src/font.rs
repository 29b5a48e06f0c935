//! Sprite font

use std::collections::HashMap;

use crate::config::FontConfig;
use crate::description::FontDescription;
use crate::glyph::Glyph;
use crate::table::GlyphTable;
use crate::{FontError, Result};

/// A bitmap font: glyph table, layout settings and the texture the glyphs
/// are drawn from.
///
/// `T` is the renderer's texture handle and is never inspected here.
/// Measurement only needs `&self`, so a font can be shared across threads
/// for concurrent measuring; changing settings needs `&mut self`.
#[derive(Debug, Clone)]
pub struct SpriteFont<T = ()> {
    texture: T,
    table: GlyphTable,
    line_spacing: i32,
    spacing: f32,
    default_character: Option<char>,
    /// Cached glyph index of `default_character`
    default_glyph_index: Option<usize>,
}

impl<T> SpriteFont<T> {
    /// Create a font over an already built glyph table
    pub fn new(texture: T, table: GlyphTable, config: FontConfig) -> Result<Self> {
        let mut font = Self {
            texture,
            table,
            line_spacing: config.line_spacing,
            spacing: config.spacing,
            default_character: None,
            default_glyph_index: None,
        };
        font.set_default_character(config.default_character)?;
        Ok(font)
    }

    /// Build the glyph table from loader output and create the font
    pub fn from_description(texture: T, desc: &FontDescription) -> Result<Self> {
        let characters = desc.chars()?;
        let table =
            GlyphTable::build(&characters, &desc.glyph_bounds, &desc.cropping, &desc.kerning)?;
        Self::new(texture, table, desc.config)
    }

    /// Texture the glyphs live in
    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// All glyphs, in character order
    pub fn glyphs(&self) -> &[Glyph] {
        self.table.glyphs()
    }

    /// Characters this font covers
    pub fn characters(&self) -> Vec<char> {
        self.table.characters().collect()
    }

    /// Copy of the glyphs keyed by character, for custom renderers
    pub fn glyph_map(&self) -> HashMap<char, Glyph> {
        self.table.to_map()
    }

    pub fn line_spacing(&self) -> i32 {
        self.line_spacing
    }

    pub fn set_line_spacing(&mut self, line_spacing: i32) {
        self.line_spacing = line_spacing;
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
    }

    pub fn default_character(&self) -> Option<char> {
        self.default_character
    }

    /// Change the substitution character.
    ///
    /// Fails with [`FontError::UnresolvableCharacter`] if the font has no
    /// glyph for `c`; the previous default is then kept.
    pub fn set_default_character(&mut self, c: Option<char>) -> Result<()> {
        let index = match c {
            Some(c) => Some(self.table.resolve(c).ok_or(FontError::UnresolvableCharacter(c))?),
            None => None,
        };

        if self.default_character != c {
            tracing::debug!("Default character changed: {:?} -> {:?}", self.default_character, c);
        }
        self.default_character = c;
        self.default_glyph_index = index;
        Ok(())
    }

    /// Current settings
    pub fn config(&self) -> FontConfig {
        FontConfig {
            line_spacing: self.line_spacing,
            spacing: self.spacing,
            default_character: self.default_character,
        }
    }

    /// Glyph index of `c`, without substitution
    pub fn glyph_index(&self, c: char) -> Option<usize> {
        self.table.resolve(c)
    }

    /// Glyph index of `c`, or of the default character if `c` is missing
    pub fn glyph_index_or_default(&self, c: char) -> Option<usize> {
        self.table.resolve_or(c, self.default_glyph_index)
    }

    /// Glyph of `c`, without substitution
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.table.glyph(c)
    }

    /// Glyph used to draw `c`, with default-character substitution
    pub fn glyph_or_default(&self, c: char) -> Result<&Glyph> {
        self.glyph_index_or_default(c)
            .and_then(|i| self.table.get(i))
            .ok_or(FontError::UnresolvableCharacter(c))
    }
}
