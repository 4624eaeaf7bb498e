// The bounce path: row indices visited by the zigzag, one per unit.

use super::key::Key;

/// Vertical direction of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher row indices.
    Descending,
    /// Toward row 0.
    Ascending,
}

/// Iterator over the row index of every unit along the zigzag.
///
/// Starts at row 0, walks down to the last row, back up to row 0, and so
/// on. With a single row it stays at row 0 forever. The iterator is
/// unbounded; bound it with `take(len)`.
#[derive(Debug, Clone)]
pub struct BouncePath {
    last_row: usize,
    row: usize,
    direction: Direction,
}

impl BouncePath {
    pub fn new(key: Key) -> Self {
        Self {
            last_row: key.last_row(),
            row: 0,
            direction: Direction::Descending,
        }
    }

    /// Row the next call to `next` will yield.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn advance(&mut self) {
        if self.last_row == 0 {
            return;
        }
        if self.row == 0 {
            self.direction = Direction::Descending;
        } else if self.row == self.last_row {
            self.direction = Direction::Ascending;
        }
        match self.direction {
            Direction::Descending => self.row += 1,
            Direction::Ascending => self.row -= 1,
        }
    }
}

impl Iterator for BouncePath {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let row = self.row;
        self.advance();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for BouncePath {}
