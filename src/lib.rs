//! Undiag: zigzag (rail-fence) transposition decoding in Rust.
//!
//! A zigzag cipher writes its input along a path that bounces between the
//! top and bottom of `key` rows, then reads the rows out one after another.
//! This crate inverts that: it sizes each row with a closed-form formula,
//! cuts the ciphertext into row buffers and replays the bounce path.
//!
//! The crate provides:
//! - One-call decoding (`engine`): [`decode`], [`decode_str`], [`decode_batch`]
//! - The individual stages (`rail`): row layout, splitting, bounce path and
//!   reconstruction, each usable and testable on its own
//! - Typed errors (`error`) separating bad input from internal defects
//!
//! # Quick Start
//!
//! ```
//! let plaintext = undiag::decode_str("HOREL,OL!LWD", 3).unwrap();
//! assert_eq!(plaintext, "HELLO,WORLD!");
//!
//! // Any cloneable unit works, e.g. raw bytes.
//! let bytes = undiag::decode(b"HOREL,OL!LWD", 3).unwrap();
//! assert_eq!(bytes, b"HELLO,WORLD!");
//! ```

pub mod engine;
pub mod error;
pub mod rail;

pub use engine::{decode, decode_batch, decode_str, decode_with_key};
pub use error::{ConsistencyError, DecodeError};
pub use rail::Key;
