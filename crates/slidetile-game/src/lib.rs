//! Game session logic for sliding-tile puzzles.
//!
//! A [`Game`] owns the board the player is working on, counts accepted slides
//! and flips to complete once the tiles are in order. It can also ask the
//! solver for a full solution and replay it one move at a time, leaving pacing
//! to the caller.
//!
//! # Examples
//!
//! ```
//! use slidetile_game::{Game, Level};
//!
//! let mut game = Game::new(Level::ALL[1].generate());
//! for mv in game.solve_moves()? {
//!     game.apply_solver_move(&mv)?;
//! }
//! assert!(game.is_complete());
//! # Ok::<(), slidetile_game::GameError>(())
//! ```

pub use self::{
    error::GameError,
    game::{Game, SlideOutcome},
    level::Level,
};

mod error;
mod game;
mod level;
