use slidetile_core::Position;

/// A blank move expressed relative to an anchor cell.
///
/// Each step of a relative sequence swaps the blank with the cell at
/// `anchor + offset`. [`RelativeMove::SwapInPlace`] targets the anchor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// Up and left.
    UpLeft,
    /// Up and right.
    UpRight,
    /// Down and left.
    DownLeft,
    /// Down and right.
    DownRight,
    /// The anchor cell itself.
    SwapInPlace,
}

impl RelativeMove {
    /// Returns the `(dx, dy)` offset from the anchor.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
            Self::SwapInPlace => (0, 0),
        }
    }

    /// Resolves the move against `anchor`, or `None` if it leaves the board.
    #[must_use]
    pub fn resolve(self, anchor: Position, size: u8) -> Option<Position> {
        let (dx, dy) = self.offset();
        anchor.offset(dx, dy, size)
    }
}

use RelativeMove::{Down, DownLeft, Left, Right, SwapInPlace, Up, UpLeft, UpRight};

/// Unjams the last two tiles of a row.
///
/// Anchored one cell below the row's rightmost cell. Expects the row's
/// second-to-last tile in the rightmost cell, the last tile just left of it,
/// and the blank below that. Leaves the second-to-last tile in place and the
/// last tile on the anchor, with the blank below the anchor.
pub const ROW_JAM_ROTATION: [RelativeMove; 16] = [
    UpLeft, Up, SwapInPlace, Left, DownLeft, Down, SwapInPlace, Left, UpLeft, Up, SwapInPlace,
    Left, UpLeft, Up, SwapInPlace, Down,
];

/// Unjams the last two tiles of a column.
///
/// The transpose of [`ROW_JAM_ROTATION`], anchored one cell right of the
/// column's bottom cell.
pub const COLUMN_JAM_ROTATION: [RelativeMove; 16] = [
    UpLeft, Left, SwapInPlace, Up, UpRight, Right, SwapInPlace, Up, UpLeft, Left, SwapInPlace, Up,
    UpLeft, Left, SwapInPlace, Right,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn transpose(mv: RelativeMove) -> RelativeMove {
        match mv {
            Up => Left,
            Left => Up,
            Down => Right,
            Right => Down,
            UpRight => DownLeft,
            DownLeft => UpRight,
            other => other,
        }
    }

    #[test]
    fn test_column_rotation_is_transposed_row_rotation() {
        let transposed = ROW_JAM_ROTATION.map(transpose);
        assert_eq!(transposed, COLUMN_JAM_ROTATION);
    }

    #[test]
    fn test_rotations_only_move_between_neighbors() {
        for rotation in [ROW_JAM_ROTATION, COLUMN_JAM_ROTATION] {
            for pair in rotation.windows(2) {
                let (x0, y0) = pair[0].offset();
                let (x1, y1) = pair[1].offset();
                assert_eq!(x0.abs_diff(x1) + y0.abs_diff(y1), 1, "{pair:?}");
            }
        }
    }

    #[test]
    fn test_resolve_respects_bounds() {
        let anchor = Position::new(0, 1);
        assert_eq!(Up.resolve(anchor, 3), Some(Position::new(0, 0)));
        assert_eq!(Left.resolve(anchor, 3), None);
        assert_eq!(SwapInPlace.resolve(anchor, 3), Some(anchor));
        assert_eq!(
            RelativeMove::DownRight.resolve(anchor, 3),
            Some(Position::new(1, 2))
        );
    }
}
