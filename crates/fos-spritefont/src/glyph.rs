//! Glyph metrics records

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Rectangle;

/// Horizontal advance components of a glyph, as produced by the font importer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kerning {
    /// Space before the first ink pixel (may be negative)
    pub left_side_bearing: f32,
    /// Advance width of the glyph body
    pub width: f32,
    /// Space after the last ink pixel (may be negative)
    pub right_side_bearing: f32,
}

impl Kerning {
    pub const fn new(left_side_bearing: f32, width: f32, right_side_bearing: f32) -> Self {
        Self {
            left_side_bearing,
            width,
            right_side_bearing,
        }
    }
}

/// Spacing, kerning and texture location of a single character.
///
/// Carries everything a custom renderer needs to place the glyph; the
/// bitmap itself stays in the font texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Character this glyph renders
    pub character: char,
    /// Rectangle in the font texture holding the glyph image
    pub bounds_in_texture: Rectangle,
    /// Ink rectangle relative to `bounds_in_texture`
    pub cropping: Rectangle,
    pub left_side_bearing: f32,
    pub width: f32,
    pub right_side_bearing: f32,
    /// `left_side_bearing + width + right_side_bearing`
    pub width_including_bearings: f32,
}

impl Glyph {
    /// Glyph with no character, bounds or advance
    pub const EMPTY: Glyph = Glyph {
        character: '\0',
        bounds_in_texture: Rectangle::EMPTY,
        cropping: Rectangle::EMPTY,
        left_side_bearing: 0.0,
        width: 0.0,
        right_side_bearing: 0.0,
        width_including_bearings: 0.0,
    };

    /// Build a glyph from importer data
    pub fn new(
        character: char,
        bounds_in_texture: Rectangle,
        cropping: Rectangle,
        kerning: Kerning,
    ) -> Self {
        Self {
            character,
            bounds_in_texture,
            cropping,
            left_side_bearing: kerning.left_side_bearing,
            width: kerning.width,
            right_side_bearing: kerning.right_side_bearing,
            width_including_bearings: kerning.left_side_bearing
                + kerning.width
                + kerning.right_side_bearing,
        }
    }

    pub fn kerning(&self) -> Kerning {
        Kerning::new(self.left_side_bearing, self.width, self.right_side_bearing)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character={:?}, Glyph={}, Cropping={}, Kerning={},{},{}",
            self.character,
            self.bounds_in_texture,
            self.cropping,
            self.left_side_bearing,
            self.width,
            self.right_side_bearing
        )
    }
}
