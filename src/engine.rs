// Decode engine: ties the rail stages together.
//
// Provides the high-level decode APIs that orchestrate:
//   - Row layout (rail::layout) to size each row
//   - Splitting (rail::rows) to cut the ciphertext into row buffers
//   - Reconstruction (rail::reconstruct) to replay the bounce path

use log::debug;

use crate::error::DecodeError;
use crate::rail::{Key, reconstruct, row_lengths, split_rows};

// ---------------------------------------------------------------------------
// Single decode
// ---------------------------------------------------------------------------

/// Decode a zigzag ciphertext written across `key` rows.
///
/// Units are opaque: bytes, `char`s or any cloneable token. Nothing is
/// normalized. Fails with [`DecodeError::InvalidKey`] when `key` is 0.
pub fn decode<T: Clone>(ciphertext: &[T], key: usize) -> Result<Vec<T>, DecodeError> {
    decode_with_key(ciphertext, Key::new(key)?)
}

/// Decode with an already validated [`Key`].
pub fn decode_with_key<T: Clone>(ciphertext: &[T], key: Key) -> Result<Vec<T>, DecodeError> {
    let len = ciphertext.len();
    debug!("decoding {len} units across {key} rows");

    // Rows the path cannot reach within `len` steps stay empty; dropping
    // them leaves the path unchanged and bounds the row tables by `len`.
    let key = key.fitted(len);
    let lengths = row_lengths(len, key)?;
    let rows = split_rows(ciphertext, &lengths)?;
    reconstruct(rows, len, key)
}

/// Decode a string, one Unicode scalar value per unit.
pub fn decode_str(ciphertext: &str, key: usize) -> Result<String, DecodeError> {
    let key = Key::new(key)?;
    let units: Vec<char> = ciphertext.chars().collect();
    Ok(decode_with_key(&units, key)?.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Batch decode
// ---------------------------------------------------------------------------

/// Decode independent `(ciphertext, key)` jobs, preserving job order.
///
/// Each job succeeds or fails on its own. With the `parallel` feature the
/// jobs run on the rayon global pool.
pub fn decode_batch(jobs: &[(&str, usize)]) -> Vec<Result<String, DecodeError>> {
    debug!("decoding batch of {} job(s)", jobs.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        jobs.par_iter()
            .map(|&(ciphertext, key)| decode_str(ciphertext, key))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter()
            .map(|&(ciphertext, key)| decode_str(ciphertext, key))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
