use slidetile_core::{Board, Position};
use slidetile_generator::{GeneratedPuzzle, PuzzleSeed};
use slidetile_solver::{LayeredSolver, Move};

use crate::GameError;

/// Result of an accepted slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SlideOutcome {
    /// The tile moved and the puzzle is still unsolved.
    Moved,
    /// The tile moved and the puzzle is now solved.
    Solved,
}

/// A sliding-tile game session.
///
/// Tracks the starting arrangement, the current board and the number of
/// accepted slides. Once the board reaches the solved state the session is
/// complete and rejects further moves until [`restart`](Self::restart).
///
/// # Example
///
/// ```
/// use slidetile_core::Position;
/// use slidetile_game::{Game, SlideOutcome};
///
/// let board = "1 2 3 / 4 5 6 / 7 _ 8".parse()?;
/// let mut game = Game::from_board(board)?;
///
/// assert_eq!(game.slide(Position::new(2, 2))?, SlideOutcome::Solved);
/// assert_eq!(game.move_count(), 1);
/// assert!(game.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    seed: Option<PuzzleSeed>,
    initial: Board,
    board: Board,
    move_count: usize,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle { seed, board } = puzzle;
        log::debug!("new {size}x{size} game from seed {seed}", size = board.size());
        Self {
            seed: Some(seed),
            initial: board.clone(),
            board,
            move_count: 0,
        }
    }

    /// Creates a game from an arbitrary starting board.
    ///
    /// An already solved board is accepted and starts out complete.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Unsolvable`] if the board cannot reach the solved
    /// state.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        if !board.is_solvable() {
            return Err(GameError::Unsolvable);
        }
        Ok(Self {
            seed: None,
            initial: board.clone(),
            board,
            move_count: 0,
        })
    }

    /// Returns the seed the puzzle was generated from, if any.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the starting board.
    #[must_use]
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns the number of accepted slides since the start or last restart.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns `true` once the board is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_solved()
    }

    /// Slides the tile at `from` into the blank.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyComplete`] if the puzzle is solved, or
    /// [`GameError::IllegalMove`] if `from` is not next to the blank. A
    /// rejected slide leaves the board and the counter unchanged.
    pub fn slide(&mut self, from: Position) -> Result<SlideOutcome, GameError> {
        if self.is_complete() {
            return Err(GameError::AlreadyComplete);
        }
        self.board.apply_move(from)?;
        self.move_count += 1;
        if self.is_complete() {
            log::debug!("puzzle solved in {} moves", self.move_count);
            return Ok(SlideOutcome::Solved);
        }
        Ok(SlideOutcome::Moved)
    }

    /// Computes a full solution from the current board.
    ///
    /// The game itself is not changed. Feed the moves back through
    /// [`apply_solver_move`](Self::apply_solver_move) to play them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the solver fails. The game stays
    /// playable in that case.
    pub fn solve_moves(&self) -> Result<Vec<Move>, GameError> {
        let moves = LayeredSolver::new().solve(&self.board)?;
        log::debug!("solver found {} moves", moves.len());
        Ok(moves)
    }

    /// Plays one move produced by [`solve_moves`](Self::solve_moves).
    ///
    /// Counts as a regular slide.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StaleMove`] if the blank is not where the move
    /// expects it, [`GameError::TileMismatch`] if a different tile sits at the
    /// move's source cell, and otherwise the same errors as
    /// [`slide`](Self::slide).
    pub fn apply_solver_move(&mut self, mv: &Move) -> Result<SlideOutcome, GameError> {
        let found = self.board.blank();
        if found != mv.blank {
            return Err(GameError::StaleMove {
                from: mv.from,
                expected: mv.blank,
                found,
            });
        }
        if let Some(found) = self.board.get(mv.from).filter(|&cell| cell != Some(mv.tile)) {
            return Err(GameError::TileMismatch {
                position: mv.from,
                expected: mv.tile,
                found,
            });
        }
        self.slide(mv.from)
    }

    /// Resets the board to the starting arrangement and the counter to zero.
    pub fn restart(&mut self) {
        self.board.clone_from(&self.initial);
        self.move_count = 0;
    }
}
