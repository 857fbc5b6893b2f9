use slidetile_core::{Position, Tile};

/// Errors returned by [`LayeredSolver`](crate::LayeredSolver).
///
/// Apart from [`SolverError::Unsolvable`], every variant reports a broken
/// internal invariant. They are deterministic for a given board, so retrying
/// the same input will fail the same way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolverError {
    /// The board fails the solvability test.
    #[display("board is not solvable")]
    Unsolvable,
    /// A tile is missing from the location index.
    #[display("tile {tile} is not tracked by the solver")]
    TileNotTracked {
        /// The missing tile.
        tile: Tile,
    },
    /// A cell was expected to have a home tile but is the blank's home.
    #[display("no tile belongs at {position}")]
    NoTileForCell {
        /// The cell without a home tile.
        position: Position,
    },
    /// The blank cannot be routed to a target without crossing fixed cells.
    #[display("blank cannot reach {to} from {from}")]
    BlankUnreachable {
        /// Blank position when routing started.
        from: Position,
        /// Requested target.
        to: Position,
    },
    /// A swap would move a fixed tile or a non-adjacent cell.
    #[display("cannot swap the blank at {blank} with {target}")]
    IllegalSwap {
        /// Blank position.
        blank: Position,
        /// Requested swap target.
        target: Position,
    },
    /// A relative move sequence points off the board.
    #[display("relative move sequence anchored at {anchor} leaves the board")]
    ChoreographyOffBoard {
        /// Anchor of the sequence.
        anchor: Position,
    },
    /// All layers were processed but the board is not in the solved state.
    #[display("solver finished without reaching the solved state")]
    Unfinished,
}
