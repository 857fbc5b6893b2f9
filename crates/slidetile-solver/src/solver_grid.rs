use std::{cmp::Ordering, collections::VecDeque};

use slidetile_core::{Board, Position, Tile};

use crate::{Move, RelativeMove, SolverError};

/// Which axis a tile closes first when it is pushed toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Working state of a single solve.
///
/// Wraps a private copy of the caller's board together with the bookkeeping the
/// solver needs, all mutated in lockstep by [`swap_blank`](Self::swap_blank):
///
/// - a fixed mask marking cells whose tiles are final (grows, never shrinks),
/// - a dense location index from tile to position,
/// - the move records emitted so far.
///
/// Every swap goes through [`Board::apply_move`], so the board's legality
/// check guards each emitted record.
#[derive(Debug, Clone)]
pub(crate) struct SolverGrid {
    board: Board,
    fixed: Vec<bool>,
    locations: Vec<Position>,
    moves: Vec<Move>,
}

impl SolverGrid {
    pub(crate) fn new(board: &Board) -> Self {
        let cells = board.cells();
        let mut locations = vec![Position::new(0, 0); cells.len() - 1];
        for (index, cell) in cells.iter().enumerate() {
            if let Some(tile) = cell {
                locations[tile.index()] = Position::from_index(index, board.size());
            }
        }
        Self {
            board: board.clone(),
            fixed: vec![false; cells.len()],
            locations,
            moves: Vec::new(),
        }
    }

    pub(crate) fn size(&self) -> u8 {
        self.board.size()
    }

    pub(crate) fn blank(&self) -> Position {
        self.board.blank()
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    pub(crate) fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Returns the tile that belongs at `pos` once solved.
    pub(crate) fn home_tile(&self, pos: Position) -> Result<Tile, SolverError> {
        Tile::solved_at(pos, self.size()).ok_or(SolverError::NoTileForCell { position: pos })
    }

    pub(crate) fn location(&self, tile: Tile) -> Result<Position, SolverError> {
        self.locations
            .get(tile.index())
            .copied()
            .ok_or(SolverError::TileNotTracked { tile })
    }

    pub(crate) fn fix(&mut self, pos: Position) {
        let index = pos.index(self.size());
        self.fixed[index] = true;
    }

    fn is_fixed(&self, pos: Position) -> bool {
        self.fixed[pos.index(self.size())]
    }

    /// Returns `true` if the blank may pass through `pos`.
    fn is_open(&self, pos: Position, locked: &[Position]) -> bool {
        pos.is_within(self.size()) && !self.is_fixed(pos) && !locked.contains(&pos)
    }

    /// Slides the tile at `target` into the blank and records the move.
    pub(crate) fn swap_blank(&mut self, target: Position) -> Result<(), SolverError> {
        let blank = self.blank();
        let illegal = SolverError::IllegalSwap { blank, target };
        if !target.is_within(self.size()) || self.is_fixed(target) {
            return Err(illegal);
        }
        let tile = self.board.apply_move(target).map_err(|_| illegal)?;
        let slot = self
            .locations
            .get_mut(tile.index())
            .ok_or(SolverError::TileNotTracked { tile })?;
        *slot = blank;

        let mv = Move {
            blank,
            from: target,
            tile,
        };
        log::trace!("slide {mv}");
        self.moves.push(mv);
        Ok(())
    }

    /// Routes the blank to `target` without entering fixed or `locked` cells.
    ///
    /// Each step closes the horizontal gap before the vertical one. When neither
    /// step is open, the rest of the route is found by breadth-first search.
    pub(crate) fn move_blank_to(
        &mut self,
        target: Position,
        locked: &[Position],
    ) -> Result<(), SolverError> {
        while self.blank() != target {
            let step = closing_steps(self.blank(), target)
                .into_iter()
                .flatten()
                .find(|&pos| self.is_open(pos, locked));
            if let Some(step) = step {
                self.swap_blank(step)?;
                continue;
            }
            for step in self.route(target, locked)? {
                self.swap_blank(step)?;
            }
        }
        Ok(())
    }

    /// Finds a shortest open path for the blank, excluding its start cell.
    fn route(&self, target: Position, locked: &[Position]) -> Result<Vec<Position>, SolverError> {
        let size = self.size();
        let start = self.blank();
        let unreachable = SolverError::BlankUnreachable {
            from: start,
            to: target,
        };
        if !self.is_open(target, locked) {
            return Err(unreachable);
        }

        let mut previous: Vec<Option<Position>> = vec![None; self.fixed.len()];
        previous[start.index(size)] = Some(start);
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            if pos == target {
                break;
            }
            for next in pos.neighbors(size) {
                let slot = &mut previous[next.index(size)];
                if slot.is_none() && self.is_open(next, locked) {
                    *slot = Some(pos);
                    queue.push_back(next);
                }
            }
        }

        let mut path = Vec::new();
        let mut pos = target;
        while pos != start {
            path.push(pos);
            pos = previous[pos.index(size)].ok_or(unreachable)?;
        }
        path.reverse();
        Ok(path)
    }

    /// Pushes `tile` one cell at a time until it reaches `target`.
    ///
    /// Before each push the blank is routed to the cell the tile moves into,
    /// treating the tile itself and `locked` as walls.
    pub(crate) fn move_tile_to(
        &mut self,
        tile: Tile,
        target: Position,
        first: Axis,
        locked: &[Position],
    ) -> Result<(), SolverError> {
        let mut walls = Vec::with_capacity(locked.len() + 1);
        loop {
            let current = self.location(tile)?;
            if current == target {
                return Ok(());
            }
            walls.clear();
            walls.extend_from_slice(locked);
            walls.push(current);
            self.move_blank_to(step_toward(current, target, first), &walls)?;
            self.swap_blank(current)?;
        }
    }

    /// Runs a fixed blank choreography relative to `anchor`.
    pub(crate) fn apply_relative_moves(
        &mut self,
        anchor: Position,
        moves: &[RelativeMove],
    ) -> Result<(), SolverError> {
        for relative in moves {
            let target = relative
                .resolve(anchor, self.size())
                .ok_or(SolverError::ChoreographyOffBoard { anchor })?;
            self.swap_blank(target)?;
        }
        Ok(())
    }
}

/// Returns the horizontal and vertical steps that bring `from` closer to `to`.
fn closing_steps(from: Position, to: Position) -> [Option<Position>; 2] {
    let (x, y) = (from.x(), from.y());
    let horizontal = match x.cmp(&to.x()) {
        Ordering::Less => Some(Position::new(x + 1, y)),
        Ordering::Greater => Some(Position::new(x - 1, y)),
        Ordering::Equal => None,
    };
    let vertical = match y.cmp(&to.y()) {
        Ordering::Less => Some(Position::new(x, y + 1)),
        Ordering::Greater => Some(Position::new(x, y - 1)),
        Ordering::Equal => None,
    };
    [horizontal, vertical]
}

/// Returns the next cell on the L-shaped path from `from` to `to`.
///
/// `from` and `to` must differ.
fn step_toward(from: Position, to: Position, first: Axis) -> Position {
    let [horizontal, vertical] = closing_steps(from, to);
    let step = match first {
        Axis::Horizontal => horizontal.or(vertical),
        Axis::Vertical => vertical.or(horizontal),
    };
    step.unwrap_or(from)
}
