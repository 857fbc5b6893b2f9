//! Numbered tiles.

use std::num::NonZeroU16;

use crate::Position;

/// A numbered tile.
///
/// Tile values start at 1; the blank cell is represented as `None` wherever a
/// cell may hold either a tile or the blank, so a `Tile` is never the blank.
///
/// # Examples
///
/// ```
/// use slidetile_core::{Position, Tile};
///
/// let tile = Tile::new(5).unwrap();
/// assert_eq!(tile.value(), 5);
///
/// // On a 3x3 board, tile 5 belongs in the middle of the board.
/// assert_eq!(tile.home(3), Position::new(1, 1));
/// assert_eq!(Tile::new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{_0}")]
pub struct Tile(NonZeroU16);

impl Tile {
    /// Creates a tile with the given value, or `None` for zero.
    #[must_use]
    #[inline]
    pub const fn new(value: u16) -> Option<Self> {
        match NonZeroU16::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Returns the tile number.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u16 {
        self.0.get()
    }

    /// Returns the dense index of the tile (`value - 1`).
    #[must_use]
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.value() - 1)
    }

    /// Returns the tile whose dense index is `index`, if it fits in a tile.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let value = u16::try_from(index.checked_add(1)?).ok()?;
        Self::new(value)
    }

    /// Returns the position this tile occupies on a solved board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the tile does not exist on a board of that size.
    #[must_use]
    pub fn home(self, size: u8) -> Position {
        Position::from_index(self.index(), size)
    }

    /// Returns the tile that belongs at `pos` on a solved board of the given size.
    ///
    /// Returns `None` for the bottom-right cell, which belongs to the blank.
    #[must_use]
    pub fn solved_at(pos: Position, size: u8) -> Option<Self> {
        let index = pos.index(size);
        let cells = usize::from(size) * usize::from(size);
        if index + 1 >= cells {
            return None;
        }
        Self::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_value_minus_one() {
        let tile = Tile::new(7).unwrap();
        assert_eq!(tile.index(), 6);
        assert_eq!(Tile::from_index(6), Some(tile));
    }

    #[test]
    fn test_solved_at_matches_home() {
        for size in 2..=5 {
            for pos in Position::all(size) {
                match Tile::solved_at(pos, size) {
                    Some(tile) => assert_eq!(tile.home(size), pos),
                    None => assert_eq!(pos, Position::new(size - 1, size - 1)),
                }
            }
        }
    }

    #[test]
    fn test_from_index_rejects_overflow() {
        assert_eq!(Tile::from_index(usize::from(u16::MAX)), None);
        assert!(Tile::from_index(usize::from(u16::MAX) - 1).is_some());
    }
}
