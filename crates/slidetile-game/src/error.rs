use slidetile_core::{MoveError, Position, Tile};
use slidetile_solver::SolverError;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The puzzle is already solved; no further moves are accepted.
    #[display("the puzzle is already complete")]
    AlreadyComplete,
    /// The requested slide is not legal on the current board.
    #[display("illegal move: {_0}")]
    IllegalMove(#[from] MoveError),
    /// The starting board cannot reach the solved state.
    #[display("board is not solvable")]
    Unsolvable,
    /// The solver failed to produce a solution.
    #[display("solver failed: {_0}")]
    Solver(#[from] SolverError),
    /// A solver move does not match the current board.
    #[display("move of tile at {from} expects the blank at {expected}, found it at {found}")]
    StaleMove {
        /// Tile position recorded in the move.
        from: Position,
        /// Blank position recorded in the move.
        expected: Position,
        /// Current blank position.
        found: Position,
    },
    /// A solver move names a tile that is not at its recorded position.
    #[display("move expects tile {expected} at {position}, found {found:?}")]
    TileMismatch {
        /// Tile position recorded in the move.
        position: Position,
        /// Tile recorded in the move.
        expected: Tile,
        /// Current content of that cell.
        found: Option<Tile>,
    },
}
