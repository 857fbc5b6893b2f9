//! Random puzzle generation for sliding-tile boards.
//!
//! [`PuzzleGenerator`] shuffles the tiles of a solved board until the result is
//! solvable and not already solved. Every puzzle carries the [`PuzzleSeed`] it
//! was generated from, so the same seed and size always reproduce the same
//! board.
//!
//! # Examples
//!
//! ```
//! use slidetile_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(4);
//! let puzzle = generator.generate();
//! assert!(puzzle.board.is_solvable());
//! assert!(!puzzle.board.is_solved());
//!
//! // Regenerate the same board from its seed.
//! let seed: PuzzleSeed = puzzle.seed.to_string().parse()?;
//! assert_eq!(generator.generate_with_seed(seed), puzzle);
//! # Ok::<(), slidetile_generator::PuzzleSeedParseError>(())
//! ```

use std::{fmt, str::FromStr};

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};
use slidetile_core::Board;

/// A 256-bit seed that determines a generated puzzle.
///
/// Displayed and parsed as 64 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the input string in bytes.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        let mut digits = s.char_indices().map(|(index, ch)| {
            ch.to_digit(16)
                .ok_or(PuzzleSeedParseError::InvalidDigit { index, ch })
        });
        for byte in &mut bytes {
            // Multi-byte input runs out of chars before the bytes are filled.
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                return Err(PuzzleSeedParseError::InvalidLength { len: s.len() });
            };
            #[expect(clippy::cast_possible_truncation)]
            let value = ((high? << 4) | low?) as u8;
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

/// A generated puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// Seed the board was generated from.
    pub seed: PuzzleSeed,
    /// The shuffled, solvable starting board.
    pub board: Board,
}

/// Generates random solvable boards of a fixed size.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    size: u8,
}

impl PuzzleGenerator {
    /// Creates a generator for `size`×`size` boards.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`Board::MIN_SIZE`].
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(
            size >= Board::MIN_SIZE,
            "board size must be at least {}, got {size}",
            Board::MIN_SIZE
        );
        Self { size }
    }

    /// Returns the side length of generated boards.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The seed is mixed with the board size, so one seed yields unrelated
    /// boards for different sizes.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(self.rng_seed(seed));
        let mut cells = Board::solved(self.size).cells().to_vec();
        let mut shuffles = 0_usize;
        let board = loop {
            cells.shuffle(&mut rng);
            shuffles += 1;
            let board = match Board::from_cells(self.size, cells.clone()) {
                Ok(board) => board,
                Err(err) => unreachable!("shuffled cells of a valid board are valid: {err}"),
            };
            if board.is_solvable() && !board.is_solved() {
                break board;
            }
        };
        log::debug!(
            "generated {size}x{size} board from seed {seed} after {shuffles} shuffles",
            size = self.size
        );
        GeneratedPuzzle { seed, board }
    }

    fn rng_seed(&self, seed: PuzzleSeed) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(seed.bytes());
        hasher.update([self.size]);
        hasher.finalize().into()
    }
}
