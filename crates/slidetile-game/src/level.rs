use slidetile_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

/// A difficulty level, identified by its board size.
///
/// Levels run from 2×2 up to 9×9.
///
/// # Examples
///
/// ```
/// use slidetile_game::Level;
///
/// let first = Level::ALL[0];
/// assert_eq!(first.size(), 2);
/// assert_eq!(first.next().map(Level::size), Some(3));
/// assert_eq!(Level::ALL[7].next(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}x{_0}")]
pub struct Level(u8);

impl Level {
    /// Smallest board size offered as a level.
    pub const MIN_SIZE: u8 = 2;
    /// Largest board size offered as a level.
    pub const MAX_SIZE: u8 = 9;

    /// All levels in ascending order of size.
    pub const ALL: [Self; 8] = [
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns the level for `size`, or `None` if no level uses that size.
    #[must_use]
    pub const fn from_size(size: u8) -> Option<Self> {
        if size >= Self::MIN_SIZE && size <= Self::MAX_SIZE {
            Some(Self(size))
        } else {
            None
        }
    }

    /// Returns the board side length.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.0
    }

    /// Returns the following level, or `None` for the last one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_size(self.0 + 1)
    }

    /// Generates a puzzle for this level from a fresh random seed.
    #[must_use]
    pub fn generate(self) -> GeneratedPuzzle {
        PuzzleGenerator::new(self.0).generate()
    }

    /// Generates the puzzle for this level determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(self, seed: PuzzleSeed) -> GeneratedPuzzle {
        PuzzleGenerator::new(self.0).generate_with_seed(seed)
    }
}
