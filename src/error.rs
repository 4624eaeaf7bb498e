// Decoder errors.
//
// Error classes, kept apart so callers can tell them apart:
//   - `InvalidKey`     caller supplied a row count below 1
//   - `KeyTooLarge`    the per-row table for the key cannot be allocated
//   - `Consistency`    the row layout and the input disagree; a defect in
//                      the layout arithmetic, never a user error

use thiserror::Error;

/// Errors returned by the zigzag decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The key (row count) is below 1.
    #[error("invalid key {key}: the zigzag needs at least one row")]
    InvalidKey { key: i64 },

    /// The row table for this key cannot be allocated.
    #[error("key {rows} is too large to lay out")]
    KeyTooLarge { rows: usize },

    /// An internal invariant of the decoder did not hold.
    #[error("internal consistency failure: {0}")]
    Consistency(#[from] ConsistencyError),
}

impl DecodeError {
    /// `true` for defects in the decoder itself rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Consistency(_))
    }
}

/// Invariant violations detected while laying out or replaying the rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("row lengths sum to {total}, expected {expected}")]
    RowLengthMismatch { total: usize, expected: usize },

    #[error("row {row} was empty at step {step}")]
    RowExhausted { row: usize, step: usize },

    #[error("row {row} still holds {remaining} unit(s) after reconstruction")]
    RowNotDrained { row: usize, remaining: usize },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
