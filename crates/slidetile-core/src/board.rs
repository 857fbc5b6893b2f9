//! The N×N sliding-tile board.

use std::{fmt, mem, ops::Index, str::FromStr};

use crate::{BoardError, MoveError, Position, Tile};

/// An N×N arrangement of numbered tiles and exactly one blank cell.
///
/// Every tile `1..=N²-1` appears exactly once and the blank appears exactly once;
/// all constructors validate this, and [`apply_move`](Self::apply_move) preserves it.
/// The blank position is cached so legality checks do not scan the grid.
///
/// # Text format
///
/// Rows are separated by `/` or newlines and cells by whitespace. The blank is
/// written as `_`, `.` or `0`.
///
/// ```
/// use slidetile_core::{Board, Position, Tile};
///
/// let board: Board = "
///     1 2 3
///     4 _ 6
///     7 5 8
/// ".parse()?;
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.blank(), Position::new(1, 1));
/// assert_eq!(board[Position::new(1, 2)], Tile::new(5));
/// # Ok::<(), slidetile_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Tile>>,
    blank: Position,
}

impl Board {
    /// Smallest supported side length.
    pub const MIN_SIZE: u8 = 2;
    /// Largest supported side length.
    pub const MAX_SIZE: u8 = u8::MAX;

    /// Creates a solved board: tiles in ascending row-major order, blank last.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`Board::MIN_SIZE`].
    #[must_use]
    pub fn solved(size: u8) -> Self {
        assert!(
            size >= Self::MIN_SIZE,
            "board size must be at least {}, got {size}",
            Self::MIN_SIZE
        );
        let count = usize::from(size) * usize::from(size);
        let cells = (0..count)
            .map(|index| {
                if index + 1 == count {
                    None
                } else {
                    Tile::from_index(index)
                }
            })
            .collect();
        Self {
            size,
            cells,
            blank: Position::new(size - 1, size - 1),
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the size is unsupported, the cell count is
    /// wrong, a tile is out of range or duplicated, or there is not exactly one blank.
    pub fn from_cells(size: u8, cells: Vec<Option<Tile>>) -> Result<Self, BoardError> {
        if size < Self::MIN_SIZE {
            return Err(BoardError::SizeOutOfRange {
                size: usize::from(size),
            });
        }
        let expected = usize::from(size) * usize::from(size);
        if cells.len() != expected {
            return Err(BoardError::WrongCellCount {
                expected,
                actual: cells.len(),
            });
        }

        let mut seen = vec![false; expected - 1];
        let mut blank = None;
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                None => {
                    if blank.replace(Position::from_index(index, size)).is_some() {
                        return Err(BoardError::MultipleBlanks);
                    }
                }
                Some(tile) => {
                    let slot = seen.get_mut(tile.index()).ok_or(BoardError::TileOutOfRange {
                        value: tile.value(),
                        size,
                    })?;
                    if mem::replace(slot, true) {
                        return Err(BoardError::DuplicateTile {
                            value: tile.value(),
                        });
                    }
                }
            }
        }
        let blank = blank.ok_or(BoardError::MissingBlank)?;

        Ok(Self { size, cells, blank })
    }

    /// Builds a board from rows of raw values, `None` marking the blank.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the rows do not form a valid square board.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// let board = Board::from_rows(&[[Some(1_u16), Some(2)], [Some(3), None]])?;
    /// assert!(board.is_solved());
    /// # Ok::<(), slidetile_core::BoardError>(())
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, BoardError>
    where
        R: AsRef<[Option<u16>]>,
    {
        let size = u8::try_from(rows.len())
            .map_err(|_| BoardError::SizeOutOfRange { size: rows.len() })?;
        let mut cells = Vec::with_capacity(rows.len() * rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != rows.len() {
                return Err(BoardError::WrongRowLength {
                    row: row_index,
                    len: row.len(),
                    size: rows.len(),
                });
            }
            for &value in row {
                let cell = match value {
                    None => None,
                    Some(value) => {
                        Some(Tile::new(value).ok_or(BoardError::TileOutOfRange { value, size })?)
                    }
                };
                cells.push(cell);
            }
        }
        Self::from_cells(size, cells)
    }

    /// Returns the side length.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the current blank position.
    #[must_use]
    #[inline]
    pub fn blank(&self) -> Position {
        self.blank
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Returns the cell at `pos`, or `None` if `pos` is not on the board.
    ///
    /// The inner `None` marks the blank.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Option<Tile>> {
        pos.is_within(self.size).then(|| self.cells[pos.index(self.size)])
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.cells.chunks(usize::from(self.size))
    }

    /// Returns the rows as raw values, `None` marking the blank.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<u16>>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.map(Tile::value)).collect())
            .collect()
    }

    /// Returns the position of a tile, or `None` if the tile is not on this board.
    #[must_use]
    pub fn position_of(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == Some(tile))
            .map(|index| Position::from_index(index, self.size))
    }

    /// Counts inversions among the numbered tiles in row-major order.
    ///
    /// An inversion is a pair of tiles where the earlier one has the larger value.
    /// The blank is ignored.
    #[must_use]
    ///
    /// Runs in `O(k log k)` for `k` tiles.
    pub fn inversions(&self) -> usize {
        // Fenwick tree over tile indices, filled from the last tile backwards;
        // each prefix sum counts the smaller tiles that come later.
        let mut seen = vec![0_usize; self.cells.len()];
        let mut inversions = 0;
        for tile in self.cells.iter().rev().flatten() {
            let mut i = tile.index();
            while i > 0 {
                inversions += seen[i];
                i &= i - 1;
            }
            let mut i = tile.index() + 1;
            while i < seen.len() {
                seen[i] += 1;
                i += i & i.wrapping_neg();
            }
        }
        inversions
    }

    /// Returns `true` if the solved state is reachable from this arrangement.
    ///
    /// On odd-sized boards the inversion count must be even. On even-sized boards
    /// the inversion count plus the number of rows below the blank must be even.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Board;
    ///
    /// let solvable: Board = "1 2 3 / 4 5 6 / 7 _ 8".parse()?;
    /// assert!(solvable.is_solvable());
    ///
    /// let swapped: Board = "1 2 3 / 4 5 6 / 8 7 _".parse()?;
    /// assert!(!swapped.is_solvable());
    /// # Ok::<(), slidetile_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let rows_below_blank = usize::from(self.size - 1 - self.blank.y());
            (inversions + rows_below_blank) % 2 == 0
        }
    }

    /// Returns `true` if tiles are in ascending row-major order with the blank last.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells.iter().enumerate().all(|(index, cell)| {
            if index == last {
                cell.is_none()
            } else {
                cell.is_some_and(|tile| tile.index() == index)
            }
        })
    }

    /// Returns `true` if the tile at `from` can slide into the blank.
    #[must_use]
    #[inline]
    pub fn is_legal_move(&self, from: Position) -> bool {
        self.check_move(from).is_ok()
    }

    /// Checks whether the tile at `from` can slide into the blank.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `from` is not on the board, or
    /// [`MoveError::NotAdjacent`] if it does not share an edge with the blank
    /// (including `from` being the blank itself).
    pub fn check_move(&self, from: Position) -> Result<(), MoveError> {
        if !from.is_within(self.size) {
            return Err(MoveError::OutOfBounds {
                position: from,
                size: self.size,
            });
        }
        if !from.is_adjacent(self.blank) {
            return Err(MoveError::NotAdjacent {
                position: from,
                blank: self.blank,
            });
        }
        Ok(())
    }

    /// Slides the tile at `from` into the blank and returns the moved tile.
    ///
    /// After the move the blank sits at `from`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is not legal; the board is left unchanged.
    pub fn apply_move(&mut self, from: Position) -> Result<Tile, MoveError> {
        self.check_move(from)?;
        let from_index = from.index(self.size);
        let Some(tile) = self.cells[from_index] else {
            return Err(MoveError::NotAdjacent {
                position: from,
                blank: self.blank,
            });
        };
        self.cells.swap(from_index, self.blank.index(self.size));
        self.blank = from;
        Ok(tile)
    }

    /// Returns the positions whose tiles can slide into the blank.
    pub fn legal_moves(&self) -> impl Iterator<Item = Position> {
        self.blank.neighbors(self.size)
    }
}

impl Index<Position> for Board {
    type Output = Option<Tile>;

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not on the board.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            pos.is_within(self.size),
            "{pos} is outside the {size}x{size} board",
            size = self.size
        );
        &self.cells[pos.index(self.size)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(tile) => write!(f, "{:>width$}", tile.value())?,
                    None => write!(f, "{:>width$}", "_")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.split_whitespace()
                    .map(parse_cell)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}

fn parse_cell(token: &str) -> Result<Option<u16>, BoardError> {
    match token {
        "_" | "." | "0" => Ok(None),
        _ => token
            .parse()
            .map(Some)
            .map_err(|_| BoardError::InvalidToken {
                token: token.to_owned(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use proptest::prelude::*;

    use super::*;

    fn reachable_from_solved(size: u8) -> HashSet<Board> {
        let start = Board::solved(size);
        let mut seen = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([start]);
        while let Some(board) = queue.pop_front() {
            for from in board.legal_moves() {
                let mut next = board.clone();
                next.apply_move(from).unwrap();
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn test_solved_board_layout() {
        let board = Board::solved(3);
        let expected: Vec<Vec<Option<u16>>> = vec![
            vec![Some(1), Some(2), Some(3)],
            vec![Some(4), Some(5), Some(6)],
            vec![Some(7), Some(8), None],
        ];
        assert_eq!(board.to_rows(), expected);
        assert_eq!(board.blank(), Position::new(2, 2));
        assert!(board.is_solved());
        assert!(board.is_solvable());
        assert_eq!(board.inversions(), 0);
    }

    #[test]
    fn test_solved_boards_are_solvable_for_every_parity() {
        for size in 2..=8 {
            let board = Board::solved(size);
            assert!(board.is_solved(), "size {size}");
            assert!(board.is_solvable(), "size {size}");
        }
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "1 2 3 / 4 5 6 / 7 8 _".parse().unwrap();
        assert_eq!(board, Board::solved(3));
        assert_eq!(board.to_string(), "1 2 3\n4 5 6\n7 8 _");

        let wide = Board::solved(4);
        assert_eq!(
            wide.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  _"
        );
        assert_eq!(wide.to_string().parse::<Board>().unwrap(), wide);
    }

    #[test]
    fn test_parse_accepts_all_blank_markers() {
        for marker in ["_", ".", "0"] {
            let board: Board = format!("1 2\n3 {marker}").parse().unwrap();
            assert!(board.is_solved());
        }
    }

    #[test]
    fn test_parse_rejects_invalid_token() {
        assert_eq!(
            "1 x / 3 _".parse::<Board>(),
            Err(BoardError::InvalidToken {
                token: "x".to_owned()
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let rows: [&[Option<u16>]; 2] = [&[Some(1), Some(2)], &[None]];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::WrongRowLength {
                row: 1,
                len: 1,
                size: 2
            })
        );
    }

    #[test]
    fn test_from_cells_validation() {
        let t = |v| Tile::new(v);

        assert_eq!(
            Board::from_cells(1, vec![None]),
            Err(BoardError::SizeOutOfRange { size: 1 })
        );
        assert_eq!(
            Board::from_cells(2, vec![t(1), t(2), None]),
            Err(BoardError::WrongCellCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_cells(2, vec![t(1), t(4), t(3), None]),
            Err(BoardError::TileOutOfRange { value: 4, size: 2 })
        );
        assert_eq!(
            Board::from_cells(2, vec![t(1), t(1), t(3), None]),
            Err(BoardError::DuplicateTile { value: 1 })
        );
        assert_eq!(
            Board::from_cells(2, vec![t(1), None, t(3), None]),
            Err(BoardError::MultipleBlanks)
        );
        assert_eq!(
            Board::from_cells(2, vec![t(1), t(2), t(3), t(3)]),
            Err(BoardError::DuplicateTile { value: 3 })
        );
    }

    #[test]
    fn test_from_rows_rejects_zero_tile_as_value() {
        assert_eq!(
            Board::from_rows(&[[Some(0_u16), Some(1)], [Some(2), None]]),
            Err(BoardError::TileOutOfRange { value: 0, size: 2 })
        );
    }

    #[test]
    fn test_inversions() {
        let board: Board = "3 _ / 2 1".parse().unwrap();
        assert_eq!(board.inversions(), 3);

        let board: Board = "1 2 3 / 4 5 6 / 8 7 _".parse().unwrap();
        assert_eq!(board.inversions(), 1);
    }

    #[test]
    fn test_two_by_two_scenario_is_solvable() {
        let board: Board = "3 _ / 2 1".parse().unwrap();
        assert!(board.is_solvable());
        assert!(reachable_from_solved(2).contains(&board));
    }

    #[test]
    fn test_classic_fifteen_fourteen_swap_is_unsolvable() {
        let board: Board = "1 2 3 4 / 5 6 7 8 / 9 10 11 12 / 13 15 14 _"
            .parse()
            .unwrap();
        assert!(!board.is_solvable());
    }

    #[test]
    fn test_blank_row_changes_parity_on_even_boards() {
        // Moving the blank up one row is a legal move: still solvable.
        let mut board = Board::solved(4);
        board.apply_move(Position::new(3, 2)).unwrap();
        assert!(board.is_solvable());
        assert_eq!(board.inversions(), 3);
    }

    #[test]
    fn test_solvability_matches_reachability_exhaustively_for_2x2() {
        let reachable = reachable_from_solved(2);
        assert_eq!(reachable.len(), 12);

        let orders = [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]];
        for blank in 0..4 {
            for order in orders {
                let mut values = order.into_iter();
                let cells = (0..4)
                    .map(|i| if i == blank { None } else { values.next().and_then(Tile::new) })
                    .collect();
                let board = Board::from_cells(2, cells).unwrap();
                assert_eq!(
                    board.is_solvable(),
                    reachable.contains(&board),
                    "board:\n{board}"
                );
            }
        }
    }

    #[test]
    fn test_solvability_matches_reachability_exhaustively_for_3x3() {
        let reachable = reachable_from_solved(3);
        assert_eq!(reachable.len(), 181_440);

        let mut values: Vec<u16> = (0..9).collect();
        let mut count = 0;
        loop {
            let cells = values.iter().copied().map(Tile::new).collect();
            let board = Board::from_cells(3, cells).unwrap();
            assert_eq!(
                board.is_solvable(),
                reachable.contains(&board),
                "board:\n{board}"
            );
            count += 1;
            if !next_permutation(&mut values) {
                break;
            }
        }
        assert_eq!(count, 362_880);
    }

    /// Steps `values` to the next permutation in lexicographic order.
    fn next_permutation(values: &mut [u16]) -> bool {
        let Some(i) = values.windows(2).rposition(|w| w[0] < w[1]) else {
            return false;
        };
        let j = values.iter().rposition(|&v| v > values[i]).unwrap();
        values.swap(i, j);
        values[i + 1..].reverse();
        true
    }

    #[test]
    fn test_inversions_on_large_boards() {
        let board = Board::solved(Board::MAX_SIZE);
        assert_eq!(board.inversions(), 0);
        assert!(board.is_solvable());

        let size = 100_u16;
        let count = size * size;
        let cells = (1..count).rev().map(Tile::new).chain([None]).collect();
        let reversed = Board::from_cells(100, cells).unwrap();
        let tiles = usize::from(count - 1);
        assert_eq!(reversed.inversions(), tiles * (tiles - 1) / 2);
    }

    #[test]
    fn test_legal_moves_and_apply() {
        let mut board: Board = "1 2 3 / 4 _ 5 / 6 7 8".parse().unwrap();
        let legal: Vec<_> = board.legal_moves().collect();
        assert_eq!(legal.len(), 4);
        for pos in legal {
            assert!(board.is_legal_move(pos));
        }

        assert!(!board.is_legal_move(Position::new(0, 0)));
        assert!(!board.is_legal_move(Position::new(1, 1)));
        assert_eq!(
            board.apply_move(Position::new(1, 1)),
            Err(MoveError::NotAdjacent {
                position: Position::new(1, 1),
                blank: Position::new(1, 1)
            })
        );
        assert_eq!(
            board.apply_move(Position::new(3, 1)),
            Err(MoveError::OutOfBounds {
                position: Position::new(3, 1),
                size: 3
            })
        );

        let moved = board.apply_move(Position::new(2, 1)).unwrap();
        assert_eq!(moved, Tile::new(5).unwrap());
        assert_eq!(board.blank(), Position::new(2, 1));
        assert_eq!(board[Position::new(1, 1)], Tile::new(5));
        assert_eq!(board[Position::new(2, 1)], None);
    }

    #[test]
    fn test_failed_move_leaves_board_unchanged() {
        let mut board: Board = "1 2 / _ 3".parse().unwrap();
        let before = board.clone();
        assert!(board.apply_move(Position::new(1, 0)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_position_of() {
        let board: Board = "4 1 2 / _ 6 3 / 7 5 8".parse().unwrap();
        assert_eq!(
            board.position_of(Tile::new(6).unwrap()),
            Some(Position::new(1, 1))
        );
        assert_eq!(board.position_of(Tile::new(9).unwrap()), None);
    }

    #[test]
    fn test_get() {
        let board: Board = "4 1 2 / _ 6 3 / 7 5 8".parse().unwrap();
        assert_eq!(board.get(Position::new(1, 0)), Some(Tile::new(1)));
        assert_eq!(board.get(Position::new(0, 1)), Some(None));
        assert_eq!(board.get(Position::new(3, 0)), None);
    }

    proptest! {
        #[test]
        fn prop_inversions_match_pairwise_count(
            values in Just((0..36).collect::<Vec<u16>>()).prop_shuffle()
        ) {
            let tiles: Vec<u16> = values.iter().copied().filter(|&v| v != 0).collect();
            let pairwise = (0..tiles.len())
                .flat_map(|i| (i + 1..tiles.len()).map(move |j| (i, j)))
                .filter(|&(i, j)| tiles[i] > tiles[j])
                .count();
            let cells = values.into_iter().map(Tile::new).collect();
            let board = Board::from_cells(6, cells).unwrap();
            prop_assert_eq!(board.inversions(), pairwise);
        }

        #[test]
        fn prop_legal_moves_preserve_solvability(
            values in Just((0..16).collect::<Vec<u16>>()).prop_shuffle(),
            picks in proptest::collection::vec(0usize..4, 0..40),
        ) {
            let cells = values.into_iter().map(Tile::new).collect();
            let mut board = Board::from_cells(4, cells).unwrap();
            let solvable = board.is_solvable();
            for pick in picks {
                let moves: Vec<_> = board.legal_moves().collect();
                let from = moves[pick % moves.len()];
                board.apply_move(from).unwrap();
                prop_assert_eq!(board.is_solvable(), solvable);
            }
        }
    }
}
