// Row lengths of a zigzag layout.
//
// The bounce pattern repeats every `period = 2 * (rows - 1)` columns.
// For rows = 4 (`x` marks the start of each period):
//
//   x           x           x
//   A * * * * * G * * * * * M
//   * B * * * F * H * * * L *
//   * * C * E * * * I * K * *
//   * * * D * * * * * J * * *
//
// The top and bottom rows receive one unit per period; every middle row
// receives two (one descending, one ascending). Only the trailing partial
// period needs case analysis.

use log::{error, trace};

use super::key::Key;
use crate::error::{ConsistencyError, DecodeError};

/// Number of units that land in each row when `len` units are written
/// along a zigzag of `key` rows.
///
/// The result always has `key.rows()` entries summing to `len`; a sum
/// mismatch is reported as a [`ConsistencyError::RowLengthMismatch`].
/// A row count whose table cannot be allocated fails with
/// [`DecodeError::KeyTooLarge`].
pub fn row_lengths(len: usize, key: Key) -> Result<Vec<usize>, DecodeError> {
    let lengths = if key.rows() == 1 {
        // The path never leaves row 0 and the period is zero.
        vec![len]
    } else {
        multi_row_lengths(len, key)?
    };

    let total: usize = lengths.iter().sum();
    if total != len {
        error!("row lengths {lengths:?} sum to {total}, expected {len}");
        return Err(ConsistencyError::RowLengthMismatch {
            total,
            expected: len,
        }
        .into());
    }

    trace!("row lengths for {len} units / {key} rows: {lengths:?}");
    Ok(lengths)
}

fn multi_row_lengths(len: usize, key: Key) -> Result<Vec<usize>, DecodeError> {
    let half = key.half_period();
    let period = key.period();
    let last_row = key.last_row();

    let full_periods = len / period;
    let tail = len % period;

    let mut lengths = Vec::new();
    lengths
        .try_reserve_exact(key.rows())
        .map_err(|_| DecodeError::KeyTooLarge { rows: key.rows() })?;
    lengths.resize(key.rows(), 0);
    lengths[0] = len.div_ceil(period);
    lengths[last_row] = len.saturating_sub(half).div_ceil(period);

    for (row, slot) in lengths.iter_mut().enumerate().take(last_row).skip(1) {
        let extra = if tail <= half {
            // Tail only covers the descending half: it reaches this row
            // when it is wider than the row index (row 0 counts too).
            usize::from(tail > row)
        } else {
            // Tail reaches into the ascending half: one unit on the way
            // down, and a second one if the distance left to a full period
            // is below the row index.
            1 + usize::from(period - tail < row)
        };
        *slot = full_periods * 2 + extra;
    }

    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(rows: usize) -> Key {
        Key::new(rows).unwrap()
    }

    /// Count rows by walking the path one unit at a time.
    fn walked(len: usize, rows: usize) -> Vec<usize> {
        let mut counts = vec![0usize; rows];
        let (mut row, mut step) = (0usize, 1isize);
        for _ in 0..len {
            counts[row] += 1;
            if rows > 1 {
                if row == 0 {
                    step = 1;
                } else if row == rows - 1 {
                    step = -1;
                }
                row = row.checked_add_signed(step).unwrap();
            }
        }
        counts
    }

    #[test]
    fn hello_world_three_rows() {
        assert_eq!(row_lengths(12, key(3)).unwrap(), vec![3, 6, 3]);
    }

    #[test]
    fn single_row_takes_everything() {
        assert_eq!(row_lengths(0, key(1)).unwrap(), vec![0]);
        assert_eq!(row_lengths(17, key(1)).unwrap(), vec![17]);
    }

    #[test]
    fn two_units_two_rows() {
        assert_eq!(row_lengths(2, key(2)).unwrap(), vec![1, 1]);
    }

    #[test]
    fn empty_input_has_empty_rows() {
        assert_eq!(row_lengths(0, key(5)).unwrap(), vec![0; 5]);
    }

    #[test]
    fn shorter_than_half_period() {
        // Only the first units of the descending stroke exist.
        assert_eq!(row_lengths(1, key(5)).unwrap(), vec![1, 0, 0, 0, 0]);
        assert_eq!(row_lengths(3, key(5)).unwrap(), vec![1, 1, 1, 0, 0]);
        assert_eq!(row_lengths(4, key(5)).unwrap(), vec![1, 1, 1, 1, 0]);
    }

    #[test]
    fn tail_in_ascending_half() {
        assert_eq!(row_lengths(5, key(4)).unwrap(), vec![1, 1, 2, 1]);
    }

    #[test]
    fn moby_dick_fixture_layout() {
        assert_eq!(
            row_lengths(319, key(10)).unwrap(),
            vec![18, 35, 35, 35, 35, 35, 36, 36, 36, 18]
        );
    }

    #[test]
    fn unallocatable_row_table_is_an_error() {
        let rows = usize::MAX;
        assert_eq!(
            row_lengths(3, key(rows)).unwrap_err(),
            DecodeError::KeyTooLarge { rows }
        );
    }

    #[test]
    fn matches_walked_path() {
        for rows in 1..=24 {
            for len in 0..=150 {
                assert_eq!(
                    row_lengths(len, key(rows)).unwrap(),
                    walked(len, rows),
                    "len={len} rows={rows}"
                );
            }
        }
    }
}
