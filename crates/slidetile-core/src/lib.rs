//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the board representation shared by the solver, the
//! generator, and game management components.
//!
//! # Overview
//!
//! - [`position`]: Cell coordinates `(x, y)` on an N×N board
//! - [`tile`]: Numbered tiles `1..=N²-1`
//! - [`board`]: The [`Board`] itself, with inversion counting, the solvability
//!   test, the win-state test, and single-move legality/application
//! - [`error`]: Errors produced while building boards or applying moves
//!
//! # Examples
//!
//! ```
//! use slidetile_core::{Board, Position};
//!
//! let mut board: Board = "1 2 3 / 4 5 6 / 7 _ 8".parse()?;
//! assert!(board.is_solvable());
//! assert!(!board.is_solved());
//!
//! // Slide tile 8 left into the blank.
//! board.apply_move(Position::new(2, 2))?;
//! assert!(board.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod error;
pub mod position;
pub mod tile;

pub use self::{
    board::Board,
    error::{BoardError, MoveError},
    position::Position,
    tile::Tile,
};
