use slidetile_core::{Board, MoveError, Position, Tile};

/// One slide of a tile into the blank, as emitted by the solver.
///
/// `blank` and `from` are the positions *before* the swap: after the move the
/// tile sits at `blank` and the blank sits at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{tile}: {from} -> {blank}")]
pub struct Move {
    /// Blank position before the move.
    pub blank: Position,
    /// Tile position before the move.
    pub from: Position,
    /// The tile that slides.
    pub tile: Tile,
}

impl Move {
    /// Slides the recorded tile on `board`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is not legal on `board`.
    pub fn apply(&self, board: &mut Board) -> Result<(), MoveError> {
        board.apply_move(self.from).map(|_| ())
    }
}

/// Errors produced by [`replay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    /// The move is not legal on the board reached so far.
    #[display("move #{index} is illegal: {source}")]
    Illegal {
        /// Index of the move in the list.
        index: usize,
        /// Underlying legality failure.
        source: MoveError,
    },
    /// The recorded blank position does not match the board.
    #[display("move #{index} expects the blank at {expected}, found it at {found}")]
    BlankMismatch {
        /// Index of the move in the list.
        index: usize,
        /// Recorded blank position.
        expected: Position,
        /// Actual blank position.
        found: Position,
    },
    /// The recorded tile is not the one at the recorded position.
    #[display("move #{index} expects tile {expected} at {position}, found {found:?}")]
    TileMismatch {
        /// Index of the move in the list.
        index: usize,
        /// Recorded tile position.
        position: Position,
        /// Recorded tile.
        expected: Tile,
        /// Cell content on the board.
        found: Option<Tile>,
    },
}

/// Applies `moves` in order to a copy of `board` and returns the resulting board.
///
/// Every record is checked against the board reached so far: the blank must
/// be where the record says, the tile must match, and the slide must be legal.
///
/// # Errors
///
/// Returns a [`ReplayError`] naming the first move that does not fit.
pub fn replay(board: &Board, moves: &[Move]) -> Result<Board, ReplayError> {
    let mut board = board.clone();
    for (index, mv) in moves.iter().enumerate() {
        if board.blank() != mv.blank {
            return Err(ReplayError::BlankMismatch {
                index,
                expected: mv.blank,
                found: board.blank(),
            });
        }
        board
            .check_move(mv.from)
            .map_err(|source| ReplayError::Illegal { index, source })?;
        let found = board[mv.from];
        if found != Some(mv.tile) {
            return Err(ReplayError::TileMismatch {
                index,
                position: mv.from,
                expected: mv.tile,
                found,
            });
        }
        mv.apply(&mut board)
            .map_err(|source| ReplayError::Illegal { index, source })?;
    }
    Ok(board)
}
