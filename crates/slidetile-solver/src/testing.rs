//! Test utilities for solver runs.
//!
//! This module provides [`SolveTester`], a harness that runs the solver on a
//! board and checks the resulting move list against the board it came from.
//!
//! # Example
//!
//! ```
//! # use slidetile_solver::testing::SolveTester;
//! SolveTester::from_str(
//!     "
//!     1 2 3
//!     4 5 6
//!     7 _ 8
//! ",
//! )
//! .solve()
//! .assert_solved()
//! .assert_move_count(1);
//! ```

use std::str::FromStr as _;

use slidetile_core::{Board, Position};

use crate::{LayeredSolver, Move, SolverError, replay};

/// A test harness for verifying solver output.
///
/// `SolveTester` keeps the initial board and the outcome of the last
/// [`solve`](Self::solve) call, so assertions can compare the two.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolveTester {
    initial: Board,
    solver: LayeredSolver,
    outcome: Option<Result<Vec<Move>, SolverError>>,
}

impl SolveTester {
    /// Creates a new tester for `initial`.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self {
            initial,
            solver: LayeredSolver::new(),
            outcome: None,
        }
    }

    /// Creates a new tester from a board string.
    ///
    /// The string format matches [`Board::from_str`]: rows separated by `/` or
    /// newlines, tiles separated by whitespace, and `_`, `.` or `0` for the
    /// blank.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let board = Board::from_str(s).unwrap();
        Self::new(board)
    }

    /// Runs the solver on the initial board.
    #[must_use]
    pub fn solve(mut self) -> Self {
        self.outcome = Some(self.solver.solve(&self.initial));
        self
    }

    #[track_caller]
    fn outcome(&self) -> &Result<Vec<Move>, SolverError> {
        self.outcome
            .as_ref()
            .expect("call `solve` before asserting on its outcome")
    }

    #[track_caller]
    fn moves(&self) -> &[Move] {
        match self.outcome() {
            Ok(moves) => moves,
            Err(err) => panic!("Expected {} to be solved, but got: {err}", self.initial),
        }
    }

    /// Asserts that the moves replay cleanly and end on the solved board.
    ///
    /// # Panics
    ///
    /// Panics if the solver failed, a move does not fit the board, or the final
    /// board is not solved.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        let moves = self.moves();
        let board = match replay(&self.initial, moves) {
            Ok(board) => board,
            Err(err) => panic!("Replaying moves for\n{}\nfailed: {err}", self.initial),
        };
        assert!(
            board.is_solved(),
            "Expected moves for\n{}\nto solve the board, but ended at\n{board}",
            self.initial
        );
        assert_eq!(
            board.blank(),
            Position::new(board.size() - 1, board.size() - 1),
            "Expected the blank to finish in the bottom-right corner"
        );
        self
    }

    /// Asserts that the solver produced exactly `count` moves.
    ///
    /// # Panics
    ///
    /// Panics if the solver failed or produced a different number of moves.
    #[track_caller]
    pub fn assert_move_count(self, count: usize) -> Self {
        let len = self.moves().len();
        assert_eq!(
            len, count,
            "Expected {count} moves for\n{}\nbut got {len}",
            self.initial
        );
        self
    }

    /// Asserts that the solver produced at least one move.
    ///
    /// # Panics
    ///
    /// Panics if the solver failed or produced no moves.
    #[track_caller]
    pub fn assert_moves_nonempty(self) -> Self {
        assert!(
            !self.moves().is_empty(),
            "Expected at least one move for\n{}",
            self.initial
        );
        self
    }

    /// Asserts that the solver failed with `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the solver succeeded or failed with a different error.
    #[track_caller]
    pub fn assert_error(self, expected: SolverError) -> Self {
        match self.outcome() {
            Ok(moves) => panic!(
                "Expected {expected} for\n{}\nbut got {} moves",
                self.initial,
                moves.len()
            ),
            Err(err) => assert_eq!(*err, expected, "Unexpected error for\n{}", self.initial),
        }
        self
    }
}
