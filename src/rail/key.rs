// Row count of the zigzag.

use std::num::NonZeroUsize;

use crate::error::DecodeError;

/// Number of rows the zigzag bounces across. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(NonZeroUsize);

impl Key {
    /// Validate a row count. Zero is rejected with `InvalidKey`.
    pub fn new(rows: usize) -> Result<Self, DecodeError> {
        NonZeroUsize::new(rows)
            .map(Self)
            .ok_or(DecodeError::InvalidKey { key: 0 })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> usize {
        self.0.get()
    }

    /// Distance from the top row to the bottom row (`rows - 1`).
    #[inline]
    pub fn half_period(self) -> usize {
        self.rows() - 1
    }

    /// Horizontal period of the bounce pattern (`2 * (rows - 1)`).
    ///
    /// Zero for a single row, where the path never moves. Saturates instead
    /// of overflowing; this does not make a huge key cheap to lay out, see
    /// [`Key::fitted`].
    #[inline]
    pub fn period(self) -> usize {
        self.half_period().saturating_mul(2)
    }

    /// Index of the bottom row.
    #[inline]
    pub fn last_row(self) -> usize {
        self.half_period()
    }

    /// Key with at most `max(len, 1)` rows that walks the same first `len`
    /// steps as `self`.
    ///
    /// Rows at or past index `len` are never reached within `len` steps, so
    /// the row count can be capped at `max(len, 1)` without changing the
    /// path. Keeps the per-row tables bounded by the input length.
    pub fn fitted(self, len: usize) -> Self {
        let cap = NonZeroUsize::new(len).unwrap_or(NonZeroUsize::MIN);
        Self(self.0.min(cap))
    }
}

impl TryFrom<usize> for Key {
    type Error = DecodeError;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl TryFrom<i64> for Key {
    type Error = DecodeError;

    fn try_from(rows: i64) -> Result<Self, Self::Error> {
        usize::try_from(rows)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(DecodeError::InvalidKey { key: rows })
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
