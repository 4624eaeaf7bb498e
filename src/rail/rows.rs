// Row buffers: the ciphertext cut into one contiguous run per row.

use crate::error::{ConsistencyError, DecodeError};

/// One row of the ciphertext, consumed front to back.
///
/// Borrows its run of units and keeps a cursor, so taking the next unit is
/// O(1) and nothing is copied until reconstruction clones it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBuffer<'a, T> {
    units: &'a [T],
    cursor: usize,
}

impl<'a, T> RowBuffer<'a, T> {
    pub fn new(units: &'a [T]) -> Self {
        Self { units, cursor: 0 }
    }

    /// Take the next unit in left-to-right order.
    #[inline]
    pub fn pop_front(&mut self) -> Option<&'a T> {
        let unit = self.units.get(self.cursor)?;
        self.cursor += 1;
        Some(unit)
    }

    /// Units not yet taken.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.units.len() - self.cursor
    }

    #[inline]
    pub fn is_drained(&self) -> bool {
        self.remaining() == 0
    }

    /// The full run assigned to this row, regardless of the cursor.
    pub fn as_slice(&self) -> &'a [T] {
        self.units
    }
}

/// Cut `ciphertext` into consecutive runs of `lengths[0]`, `lengths[1]`, ...
///
/// The runs must cover the input exactly; any shortfall or leftover is a
/// [`ConsistencyError::RowLengthMismatch`].
pub fn split_rows<'a, T>(
    ciphertext: &'a [T],
    lengths: &[usize],
) -> Result<Vec<RowBuffer<'a, T>>, DecodeError> {
    let total = lengths.iter().try_fold(0usize, |acc, &len| acc.checked_add(len));
    if total != Some(ciphertext.len()) {
        return Err(ConsistencyError::RowLengthMismatch {
            total: total.unwrap_or(usize::MAX),
            expected: ciphertext.len(),
        }
        .into());
    }

    let mut rows = Vec::new();
    rows.try_reserve_exact(lengths.len())
        .map_err(|_| DecodeError::KeyTooLarge {
            rows: lengths.len(),
        })?;

    let mut rest = ciphertext;
    for &len in lengths {
        let (run, tail) = rest.split_at(len);
        rest = tail;
        rows.push(RowBuffer::new(run));
    }
    Ok(rows)
}
