// Core zigzag decoding stages.
//
// - `key`         — validated row count
// - `layout`      — how many units fall in each row (closed form)
// - `rows`        — cut the ciphertext into per-row buffers
// - `path`        — the bounce path as an iterator of row indices
// - `reconstruct` — replay the path over the buffers

pub mod key;
pub mod layout;
pub mod path;
pub mod reconstruct;
pub mod rows;

pub use key::Key;
pub use layout::row_lengths;
pub use path::{BouncePath, Direction};
pub use reconstruct::reconstruct;
pub use rows::{RowBuffer, split_rows};
