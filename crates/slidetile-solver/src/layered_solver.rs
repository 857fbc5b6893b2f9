use slidetile_core::{Board, Position};

use crate::{
    COLUMN_JAM_ROTATION, Move, ROW_JAM_ROTATION, RelativeMove, SolverError,
    solver_grid::{Axis, SolverGrid},
};

/// A constructive solver that finishes the board one layer at a time.
///
/// For each layer `k` from `0` to `N - 3`, the solver completes row `k` (from
/// column `k` rightward) and then column `k` (from row `k + 1` downward),
/// fixing each finished cell so later work never disturbs it. The last two
/// cells of every row and column are placed together, with a fixed rotation
/// for the case where the pair is jammed. What remains is a 2×2 block, which
/// is solved by placing its top-left tile and parking the blank in the corner.
///
/// The solver never mutates its input: it works on a private copy and returns
/// the moves it made.
///
/// # Examples
///
/// ```
/// use slidetile_core::Board;
/// use slidetile_solver::{LayeredSolver, replay};
///
/// let board: Board = "3 _ / 2 1".parse()?;
/// let moves = LayeredSolver::new().solve(&board)?;
/// assert!(!moves.is_empty());
/// assert!(replay(&board, &moves)?.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredSolver;

impl LayeredSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes a move list that solves `board`.
    ///
    /// Returns an empty list if the board is already solved.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board fails the solvability
    /// test. Any other error means an internal invariant was broken.
    pub fn solve(&self, board: &Board) -> Result<Vec<Move>, SolverError> {
        if !board.is_solvable() {
            return Err(SolverError::Unsolvable);
        }
        self.solve_unchecked(board)
    }

    /// Computes a move list without checking solvability first.
    ///
    /// On an unsolvable board the layers still complete, but the final block
    /// cannot be finished and [`SolverError::Unfinished`] is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the board cannot be brought to the solved
    /// state.
    pub fn solve_unchecked(&self, board: &Board) -> Result<Vec<Move>, SolverError> {
        let mut grid = SolverGrid::new(board);
        if grid.is_solved() {
            return Ok(Vec::new());
        }

        let size = grid.size();
        for layer in 0..size - 2 {
            solve_row(&mut grid, layer)?;
            solve_column(&mut grid, layer)?;
            log::debug!("layer {layer} done on {size}x{size} board");
        }
        solve_final_block(&mut grid)?;

        if !grid.is_solved() {
            return Err(SolverError::Unfinished);
        }
        let moves = grid.into_moves();
        log::debug!("solved {size}x{size} board in {} moves", moves.len());
        Ok(moves)
    }
}

/// Completes row `row` from column `row` to the right edge.
fn solve_row(grid: &mut SolverGrid, row: u8) -> Result<(), SolverError> {
    let last = grid.size() - 1;
    for x in row..last - 1 {
        let target = Position::new(x, row);
        let tile = grid.home_tile(target)?;
        grid.move_tile_to(tile, target, Axis::Horizontal, &[])?;
        grid.fix(target);
    }

    let pocket = Position::new(last - 1, row);
    let corner = Position::new(last, row);
    let below_pocket = Position::new(last - 1, row + 1);
    let below_corner = Position::new(last, row + 1);
    place_pair(
        grid,
        Pair {
            pocket,
            corner,
            beside_pocket: below_pocket,
            beside_corner: below_corner,
            axis: Axis::Horizontal,
            rotation: &ROW_JAM_ROTATION,
        },
    )
}

/// Completes column `col` from row `col + 1` to the bottom edge.
fn solve_column(grid: &mut SolverGrid, col: u8) -> Result<(), SolverError> {
    let last = grid.size() - 1;
    for y in col + 1..last - 1 {
        let target = Position::new(col, y);
        let tile = grid.home_tile(target)?;
        grid.move_tile_to(tile, target, Axis::Vertical, &[])?;
        grid.fix(target);
    }

    let pocket = Position::new(col, last - 1);
    let corner = Position::new(col, last);
    let beside_pocket = Position::new(col + 1, last - 1);
    let beside_corner = Position::new(col + 1, last);
    place_pair(
        grid,
        Pair {
            pocket,
            corner,
            beside_pocket,
            beside_corner,
            axis: Axis::Vertical,
            rotation: &COLUMN_JAM_ROTATION,
        },
    )
}

/// The last two cells of a row or column, plus the two cells next to them
/// on the unsolved side.
struct Pair<'a> {
    pocket: Position,
    corner: Position,
    beside_pocket: Position,
    beside_corner: Position,
    axis: Axis,
    rotation: &'a [RelativeMove],
}

/// Places the pocket and corner tiles together and fixes both cells.
///
/// The pocket's tile is parked in the corner and the corner's tile next to
/// it. Then the blank walks round to the pocket and slides both in. If the
/// corner's tile is stuck in the pocket, the jam rotation pulls it out first.
fn place_pair(grid: &mut SolverGrid, pair: Pair<'_>) -> Result<(), SolverError> {
    let Pair {
        pocket,
        corner,
        beside_pocket,
        beside_corner,
        axis,
        rotation,
    } = pair;
    let first = grid.home_tile(pocket)?;
    let second = grid.home_tile(corner)?;

    if grid.location(first)? != pocket || grid.location(second)? != corner {
        grid.move_tile_to(first, corner, axis, &[])?;
        if grid.blank() == pocket {
            grid.swap_blank(beside_pocket)?;
        }
        if grid.location(second)? == pocket {
            log::trace!("unjamming {second} at {pocket}");
            grid.move_blank_to(beside_pocket, &[corner, pocket])?;
            grid.apply_relative_moves(beside_corner, rotation)?;
        } else {
            grid.move_tile_to(second, beside_corner, axis, &[corner])?;
        }
        grid.move_blank_to(pocket, &[corner, beside_corner])?;
        grid.swap_blank(corner)?;
        grid.swap_blank(beside_corner)?;
    }

    grid.fix(pocket);
    grid.fix(corner);
    Ok(())
}

/// Solves the bottom-right 2×2 block left after every layer is done.
fn solve_final_block(grid: &mut SolverGrid) -> Result<(), SolverError> {
    let last = grid.size() - 1;
    let target = Position::new(last - 1, last - 1);
    let tile = grid.home_tile(target)?;
    grid.move_tile_to(tile, target, Axis::Horizontal, &[])?;
    grid.fix(target);
    grid.move_blank_to(Position::new(last, last), &[])
}
