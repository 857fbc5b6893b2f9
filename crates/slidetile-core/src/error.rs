//! Errors produced by board construction and move application.

use crate::Position;

/// Errors that can occur while building a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board size is outside the supported range.
    #[display("board size {size} is not supported (expected 2..=255)")]
    SizeOutOfRange {
        /// Requested side length.
        size: usize,
    },
    /// The number of cells does not match `size * size`.
    #[display("expected {expected} cells, got {actual}")]
    WrongCellCount {
        /// Number of cells required by the board size.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
    /// A row does not have `size` cells.
    #[display("row {row} has {len} cells, expected {size}")]
    WrongRowLength {
        /// Row index (0-based).
        row: usize,
        /// Number of cells in the row.
        len: usize,
        /// Board size.
        size: usize,
    },
    /// A tile value is zero or larger than `size * size - 1`.
    #[display("tile {value} does not fit on a {size}x{size} board")]
    TileOutOfRange {
        /// Offending tile value.
        value: u16,
        /// Board size.
        size: u8,
    },
    /// A tile value appears more than once.
    #[display("tile {value} appears more than once")]
    DuplicateTile {
        /// Duplicated tile value.
        value: u16,
    },
    /// No blank cell is present.
    #[display("board has no blank cell")]
    MissingBlank,
    /// More than one blank cell is present.
    #[display("board has more than one blank cell")]
    MultipleBlanks,
    /// A cell token in the text format could not be parsed.
    #[display("invalid cell token {token:?}")]
    InvalidToken {
        /// The unparsable token.
        token: String,
    },
}

/// Errors that can occur while sliding a tile into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The position lies outside the board.
    #[display("position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Board size.
        size: u8,
    },
    /// The position does not share an edge with the blank.
    #[display("cell {position} is not adjacent to the blank at {blank}")]
    NotAdjacent {
        /// Requested position.
        position: Position,
        /// Current blank position.
        blank: Position,
    },
}
