//! Glyph table
//!
//! Maps characters to glyph records. Fonts usually cover a few large
//! contiguous blocks of the character space (ASCII, Latin-1, a kana block,
//! ...), so the table stores those blocks as sorted ranges and resolves a
//! character with a binary search over ranges instead of a hash map.

use std::collections::HashMap;

use crate::geometry::Rectangle;
use crate::glyph::{Glyph, Kerning};
use crate::{FontError, Result};

/// A run `[start, end]` of consecutive characters whose glyphs occupy
/// consecutive slots of the glyph array, beginning at `start_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterRegion {
    pub start: char,
    pub end: char,
    pub start_index: usize,
}

impl CharacterRegion {
    fn new(start: char, start_index: usize) -> Self {
        Self {
            start,
            end: start,
            start_index,
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        (self.end as u32 - self.start as u32) as usize + 1
    }
}

/// Immutable character → glyph catalog
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: Vec<Glyph>,
    regions: Vec<CharacterRegion>,
}

impl GlyphTable {
    /// Build a table from parallel importer arrays.
    ///
    /// `characters` must be strictly ascending; the other slices must have
    /// the same length. Either violation fails with
    /// [`FontError::InvalidFontData`] and no table is produced.
    pub fn build(
        characters: &[char],
        glyph_bounds: &[Rectangle],
        cropping: &[Rectangle],
        kerning: &[Kerning],
    ) -> Result<Self> {
        let count = characters.len();
        if glyph_bounds.len() != count || cropping.len() != count || kerning.len() != count {
            tracing::warn!(
                "Rejecting font data: {} characters, {} bounds, {} croppings, {} kernings",
                count,
                glyph_bounds.len(),
                cropping.len(),
                kerning.len()
            );
            return Err(FontError::InvalidFontData(format!(
                "glyph arrays differ in length \
                 (characters: {}, bounds: {}, cropping: {}, kerning: {})",
                count,
                glyph_bounds.len(),
                cropping.len(),
                kerning.len()
            )));
        }

        let mut glyphs = Vec::with_capacity(count);
        let mut regions: Vec<CharacterRegion> = Vec::new();

        for (i, &c) in characters.iter().enumerate() {
            glyphs.push(Glyph::new(c, glyph_bounds[i], cropping[i], kerning[i]));

            match regions.last_mut() {
                Some(region) if c as u32 == region.end as u32 + 1 => region.end = c,
                Some(region) if c <= region.end => {
                    tracing::warn!("Rejecting font data: {:?} follows {:?}", c, region.end);
                    return Err(FontError::InvalidFontData(format!(
                        "character map must be in ascending order ({:?} follows {:?})",
                        c, region.end
                    )));
                }
                _ => regions.push(CharacterRegion::new(c, i)),
            }
        }

        tracing::debug!(
            "Built glyph table: {} glyphs in {} regions",
            glyphs.len(),
            regions.len()
        );

        Ok(Self { glyphs, regions })
    }

    /// Resolve a character to its glyph index.
    ///
    /// A miss is an ordinary outcome for characters outside the font's
    /// coverage and is reported as `None`.
    pub fn resolve(&self, c: char) -> Option<usize> {
        let mut low = 0usize;
        let mut high = self.regions.len();

        // half-open [low, high)
        while low < high {
            let mid = low + (high - low) / 2;
            let region = &self.regions[mid];
            if region.end < c {
                low = mid + 1;
            } else if region.start > c {
                high = mid;
            } else {
                return Some(region.start_index + (c as u32 - region.start as u32) as usize);
            }
        }

        None
    }

    /// Resolve a character, falling back to `default_index` on a miss
    pub fn resolve_or(&self, c: char, default_index: Option<usize>) -> Option<usize> {
        self.resolve(c).or(default_index)
    }

    /// Glyph record at `index`
    pub fn get(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// Glyph record for a character
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.resolve(c).and_then(|i| self.glyphs.get(i))
    }

    /// All glyphs, in construction order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Contiguous regions, ascending by `start`
    pub fn regions(&self) -> &[CharacterRegion] {
        &self.regions
    }

    /// Characters covered, in ascending order
    pub fn characters(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.glyphs.iter().map(|g| g.character)
    }

    /// Copy of the table as a character → glyph map
    pub fn to_map(&self) -> HashMap<char, Glyph> {
        self.glyphs.iter().map(|g| (g.character, *g)).collect()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
