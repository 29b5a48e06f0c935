//! Text measurement
//!
//! Computes the pixel size of text as the sprite batch would lay it out,
//! without drawing. Layout is a single left-to-right pass:
//! - `\r` is ignored
//! - `\n` starts a new line `line_spacing` below the previous one
//! - every other character advances the cursor by its glyph's bearings,
//!   width and the font's tracking
//!
//! The same per-character step backs both [`SpriteFont::measure`] and the
//! incremental [`SpriteFont::running_measure`], so measuring a string one
//! character at a time gives exactly the batch result.

use crate::font::SpriteFont;
use crate::geometry::Vector2;
use crate::source::{CharWindow, CharacterSource};
use crate::{FontError, Result};

/// Layout state carried between characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureState {
    /// Widest line so far, including the last glyph's positive right bearing
    pub width: f32,
    /// Height of the current line: `line_spacing`, or the tallest glyph
    /// cropping on the line if larger
    pub final_line_height: f32,
    /// Pen position; `x` restarts on each line
    pub cursor: Vector2,
    /// Set at the start of text and after every `\n`
    pub first_glyph_of_line: bool,
}

impl MeasureState {
    /// Initial state for a font with the given line spacing
    pub fn new(line_spacing: i32) -> Self {
        Self {
            width: 0.0,
            final_line_height: line_spacing as f32,
            cursor: Vector2::ZERO,
            first_glyph_of_line: true,
        }
    }

    /// Size of everything measured so far
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.cursor.y + self.final_line_height)
    }
}

impl<T> SpriteFont<T> {
    /// Size of `text` when rendered in this font.
    ///
    /// Fails with [`FontError::UnresolvableCharacter`] if a character has no
    /// glyph and no default character is set.
    pub fn measure<S: CharacterSource + ?Sized>(&self, text: &S) -> Result<Vector2> {
        self.measure_window(CharWindow::full(text))
    }

    /// Size of the characters `[offset, offset + length)` of `text`. A
    /// `length` of `None` measures to the end.
    pub fn measure_range<S: CharacterSource + ?Sized>(
        &self,
        text: &S,
        offset: usize,
        length: Option<usize>,
    ) -> Result<Vector2> {
        self.measure_window(CharWindow::new(text, offset, length)?)
    }

    /// Size of a window of characters
    pub fn measure_window<S: CharacterSource + ?Sized>(
        &self,
        window: CharWindow<'_, S>,
    ) -> Result<Vector2> {
        if window.is_empty() {
            return Ok(Vector2::ZERO);
        }

        let mut state = self.begin_measure();
        for c in window.chars() {
            self.measure_char(c, &mut state)?;
        }
        Ok(state.size())
    }

    /// Fresh state for [`running_measure`](Self::running_measure)
    pub fn begin_measure(&self) -> MeasureState {
        MeasureState::new(self.line_spacing())
    }

    /// Add one character to a running measurement and return the size so
    /// far. On error `state` is left as it was before the call.
    pub fn running_measure(&self, c: char, state: &mut MeasureState) -> Result<Vector2> {
        self.measure_char(c, state)?;
        Ok(state.size())
    }

    fn measure_char(&self, c: char, state: &mut MeasureState) -> Result<()> {
        match c {
            '\r' => return Ok(()),
            '\n' => {
                let line_spacing = self.line_spacing() as f32;
                state.final_line_height = line_spacing;
                state.cursor.x = 0.0;
                state.cursor.y += line_spacing;
                state.first_glyph_of_line = true;
                return Ok(());
            }
            _ => {}
        }

        let glyph = self
            .glyph_index_or_default(c)
            .and_then(|i| self.table().get(i))
            .ok_or(FontError::UnresolvableCharacter(c))?;

        // A negative left bearing on the first glyph would hang it off the
        // left edge; the renderer shifts the line right instead.
        if state.first_glyph_of_line {
            state.cursor.x = glyph.left_side_bearing.max(0.0);
            state.first_glyph_of_line = false;
        } else {
            state.cursor.x += self.spacing() + glyph.left_side_bearing;
        }

        state.cursor.x += glyph.width;

        let proposed_width = state.cursor.x + glyph.right_side_bearing.max(0.0);
        if proposed_width > state.width {
            state.width = proposed_width;
        }

        // Negative right bearing still pulls the next glyph in.
        state.cursor.x += glyph.right_side_bearing;

        let glyph_height = glyph.cropping.height as f32;
        if glyph_height > state.final_line_height {
            state.final_line_height = glyph_height;
        }

        Ok(())
    }
}
