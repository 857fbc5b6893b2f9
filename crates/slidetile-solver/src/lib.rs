//! Layer-by-layer solver for sliding-tile puzzles.
//!
//! [`LayeredSolver`] turns any solvable [`Board`](slidetile_core::Board) into an
//! ordered list of [`Move`] records. Replaying the records in order against the
//! original board yields the solved arrangement.
//!
//! The solver is constructive rather than search based: it peels the top row and
//! left column off the active sub-board, one layer at a time, until only a 2×2
//! block is left. The result is deterministic and correct, but not minimal.
//!
//! # Examples
//!
//! ```
//! use slidetile_core::Board;
//! use slidetile_solver::{LayeredSolver, replay};
//!
//! let board: Board = "8 6 7 / 2 5 4 / 3 _ 1".parse()?;
//! let moves = LayeredSolver::new().solve(&board)?;
//!
//! let solved = replay(&board, &moves)?;
//! assert!(solved.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::SolverError,
    layered_solver::LayeredSolver,
    moves::{Move, ReplayError, replay},
    relative_move::{COLUMN_JAM_ROTATION, ROW_JAM_ROTATION, RelativeMove},
};

mod error;
mod layered_solver;
mod moves;
mod relative_move;
mod solver_grid;
pub mod testing;
