//! Cell coordinates on a square board.

/// A cell position on an N×N board.
///
/// `x` is the column and `y` is the row, both counted from the top-left corner.
/// A position carries no board size; bounds are checked against the size
/// passed to the methods that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

/// Orthogonal neighbor offsets in the order they are visited: right, left, down, up.
const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index on a board of the given size.
    #[must_use]
    #[inline]
    pub fn index(self, size: u8) -> usize {
        usize::from(self.y) * usize::from(size) + usize::from(self.x)
    }

    /// Converts a row-major cell index back into a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than `size * size`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize, size: u8) -> Self {
        let size = usize::from(size);
        assert!(
            index < size * size,
            "cell index {index} is out of range for a {size}x{size} board"
        );
        Self::new((index % size) as u8, (index / size) as u8)
    }

    /// Returns `true` if the position lies on a board of the given size.
    #[must_use]
    #[inline]
    pub const fn is_within(self, size: u8) -> bool {
        self.x < size && self.y < size
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> u16 {
        u16::from(self.x.abs_diff(other.x)) + u16::from(self.y.abs_diff(other.y))
    }

    /// Returns `true` if the two positions share an edge.
    ///
    /// A position is never adjacent to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidetile_core::Position;
    ///
    /// let pos = Position::new(1, 1);
    /// assert!(pos.is_adjacent(Position::new(1, 0)));
    /// assert!(!pos.is_adjacent(Position::new(2, 2)));
    /// assert!(!pos.is_adjacent(pos));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the position shifted by `(dx, dy)`, or `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8, size: u8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let pos = Self::new(x, y);
        pos.is_within(size).then_some(pos)
    }

    /// Returns the orthogonal neighbors that lie on the board.
    ///
    /// Neighbors are yielded in a fixed order: right, left, down, up.
    pub fn neighbors(self, size: u8) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy, size))
    }

    /// Returns every position of a board of the given size in row-major order.
    pub fn all(size: u8) -> impl Iterator<Item = Self> {
        (0..size).flat_map(move |y| (0..size).map(move |x| Self::new(x, y)))
    }
}
