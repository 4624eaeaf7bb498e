// Replay the bounce path over the row buffers to recover the plaintext.

use log::error;

use super::key::Key;
use super::path::BouncePath;
use super::rows::RowBuffer;
use crate::error::{ConsistencyError, DecodeError};

/// Walk `len` steps of the zigzag, taking the next unit of the current row
/// at each step.
///
/// Every row must hold exactly as many units as the path visits it: an
/// empty row at a step, or leftovers at the end, is a consistency error
/// and no partial output is returned.
pub fn reconstruct<T: Clone>(
    mut rows: Vec<RowBuffer<'_, T>>,
    len: usize,
    key: Key,
) -> Result<Vec<T>, DecodeError> {
    let mut plaintext = Vec::with_capacity(len);

    for (step, row) in BouncePath::new(key).take(len).enumerate() {
        let unit = rows
            .get_mut(row)
            .and_then(|buf| buf.pop_front())
            .ok_or_else(|| {
                error!("row {row} exhausted at step {step} of {len}");
                ConsistencyError::RowExhausted { row, step }
            })?;
        plaintext.push(unit.clone());
    }

    if let Some((row, buf)) = rows.iter().enumerate().find(|(_, buf)| !buf.is_drained()) {
        let remaining = buf.remaining();
        error!("row {row} left with {remaining} unit(s) after {len} steps");
        return Err(ConsistencyError::RowNotDrained { row, remaining }.into());
    }

    Ok(plaintext)
}
