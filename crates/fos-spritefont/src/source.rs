//! Character sources
//!
//! Measurement reads text through [`CharacterSource`], a read-only view
//! with a length and indexed character access. Owned strings, growable
//! buffers and borrowed slices all implement it, so one measuring routine
//! serves every representation without copying. Sources are always
//! borrowed for the duration of a call; a buffer mutated afterwards does
//! not affect a finished measurement.

use std::ops::{Bound, RangeBounds};

use crate::{FontError, Result};

/// Indexable, length-bearing sequence of characters
pub trait CharacterSource {
    /// Number of characters
    fn char_len(&self) -> usize;

    /// Character at `index`. Panics if `index >= char_len()`.
    fn char_at(&self, index: usize) -> char;

    /// Characters in `[offset, offset + len)`, in order.
    ///
    /// Callers validate the window first; sources with cheaper sequential
    /// access than `char_at` override this.
    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        (offset..offset + len).map(move |i| self.char_at(i))
    }
}

impl CharacterSource for [char] {
    fn char_len(&self) -> usize {
        self.len()
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        self[offset..offset + len].iter().copied()
    }
}

impl CharacterSource for Vec<char> {
    fn char_len(&self) -> usize {
        self.len()
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        self.as_slice().chars_in(offset, len)
    }
}

impl<const N: usize> CharacterSource for [char; N] {
    fn char_len(&self) -> usize {
        N
    }

    fn char_at(&self, index: usize) -> char {
        self[index]
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        self.as_slice().chars_in(offset, len)
    }
}

// UTF-8 text is indexed by character, not by byte.
impl CharacterSource for str {
    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn char_at(&self, index: usize) -> char {
        match self.chars().nth(index) {
            Some(c) => c,
            None => panic!("character index {index} out of range"),
        }
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        self.chars().skip(offset).take(len)
    }
}

impl CharacterSource for String {
    fn char_len(&self) -> usize {
        self.as_str().char_len()
    }

    fn char_at(&self, index: usize) -> char {
        self.as_str().char_at(index)
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        self.as_str().chars_in(offset, len)
    }
}

impl<S: CharacterSource + ?Sized> CharacterSource for &S {
    fn char_len(&self) -> usize {
        (**self).char_len()
    }

    fn char_at(&self, index: usize) -> char {
        (**self).char_at(index)
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        (**self).chars_in(offset, len)
    }
}

/// A bounds-checked `(offset, length)` window over another source
#[derive(Debug)]
pub struct CharWindow<'a, S: CharacterSource + ?Sized> {
    source: &'a S,
    offset: usize,
    len: usize,
}

impl<S: CharacterSource + ?Sized> Clone for CharWindow<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: CharacterSource + ?Sized> Copy for CharWindow<'_, S> {}

impl<'a, S: CharacterSource + ?Sized> CharWindow<'a, S> {
    /// Window starting at `offset`. A `length` of `None` runs to the end of
    /// the source.
    pub fn new(source: &'a S, offset: usize, length: Option<usize>) -> Result<Self> {
        Self::checked(source, source.char_len(), offset, length)
    }

    /// The whole source
    pub fn full(source: &'a S) -> Self {
        Self {
            source,
            offset: 0,
            len: source.char_len(),
        }
    }

    fn checked(
        source: &'a S,
        available: usize,
        offset: usize,
        length: Option<usize>,
    ) -> Result<Self> {
        let out_of_range = || FontError::WindowOutOfRange {
            offset,
            length,
            available,
        };
        let rest = available.checked_sub(offset).ok_or_else(out_of_range)?;
        let len = match length {
            Some(len) if len > rest => return Err(out_of_range()),
            Some(len) => len,
            None => rest,
        };
        Ok(Self { source, offset, len })
    }

    /// Re-slice this window; the range is relative to the window start
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        let length = match end {
            Some(end) if end < start => {
                return Err(FontError::WindowOutOfRange {
                    offset: start,
                    length: None,
                    available: self.len,
                });
            }
            Some(end) => Some(end - start),
            None => None,
        };
        let inner = Self::checked(self.source, self.len, start, length)?;
        Ok(Self {
            offset: self.offset + inner.offset,
            ..inner
        })
    }

    /// Offset of the window in the underlying source
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the window's characters
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        let source: &'a S = self.source;
        source.chars_in(self.offset, self.len)
    }
}

impl<S: CharacterSource + ?Sized> CharacterSource for CharWindow<'_, S> {
    fn char_len(&self) -> usize {
        self.len
    }

    fn char_at(&self, index: usize) -> char {
        assert!(index < self.len, "character index {index} out of range");
        self.source.char_at(self.offset + index)
    }

    fn chars_in(&self, offset: usize, len: usize) -> impl Iterator<Item = char> + '_ {
        assert!(offset + len <= self.len, "character window out of range");
        self.source.chars_in(self.offset + offset, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_source() {
        let s = "héllo";
        assert_eq!(s.char_len(), 5);
        assert_eq!(s.char_at(1), 'é');
        assert_eq!(s.chars_in(1, 3).collect::<String>(), "éll");
    }

    #[test]
    fn test_slice_and_vec_sources() {
        let v = vec!['a', 'b', 'c'];
        assert_eq!(v.char_len(), 3);
        assert_eq!(v.as_slice().char_at(2), 'c');
        assert_eq!(v.chars_in(1, 2).collect::<String>(), "bc");
    }

    #[test]
    fn test_window_defaults_to_rest() {
        let text = String::from("abcdef");
        let w = CharWindow::new(&text, 2, None).unwrap();
        assert_eq!(w.len(), 4);
        assert_eq!(w.chars().collect::<String>(), "cdef");
        assert_eq!(w.char_at(0), 'c');
    }

    #[test]
    fn test_window_out_of_range() {
        let text = "abc";
        assert!(matches!(
            CharWindow::new(text, 4, None),
            Err(FontError::WindowOutOfRange { offset: 4, available: 3, .. })
        ));
        assert!(CharWindow::new(text, 1, Some(3)).is_err());
        assert!(CharWindow::new(text, 3, None).unwrap().is_empty());
    }

    #[test]
    fn test_window_slice() {
        let chars = ['0', '1', '2', '3', '4', '5', '6'];
        let w = CharWindow::new(&chars[..], 1, Some(5)).unwrap();
        let inner = w.slice(1..3).unwrap();
        assert_eq!(inner.offset(), 2);
        assert_eq!(inner.chars().collect::<String>(), "23");
        assert_eq!(w.slice(2..).unwrap().chars().collect::<String>(), "345");
        assert_eq!(w.slice(..=0).unwrap().chars().collect::<String>(), "1");
        assert!(w.slice(4..7).is_err());
    }

    #[test]
    fn test_window_is_a_source() {
        let text = "hello world";
        let w = CharWindow::new(text, 6, None).unwrap();
        let nested = CharWindow::new(&w, 1, Some(3)).unwrap();
        assert_eq!(nested.chars().collect::<String>(), "orl");
    }
}
