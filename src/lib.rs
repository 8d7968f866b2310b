//! Text utilities: a multi-alphabet Caesar cipher, a word scrambler, and a
//! memoizing call cache.
//!
//! The three pieces are independent; nothing here is cryptographically
//! secure, and the cipher exists for classical-cipher exercises, not for
//! protecting data.
//!
//! # Architecture
//!
//! - [`cipher`]: `CipherEngine` over a registry of per-language alphabets
//! - [`scramble`]: word-interior scrambling filter (random or alphabetical)
//! - [`memo`]: memoizing function-call cache with hit/miss stats
//! - [`config`]: environment-based defaults for the CLI binaries
//!
//! # Example
//!
//! ```rust
//! use lettershift::cipher::{CipherEngine, ShiftDirection};
//!
//! let engine = CipherEngine::new();
//! let encoded = engine
//!     .shift_text_by_language_name("abc", 1, "en", ShiftDirection::Encode)
//!     .unwrap();
//! assert_eq!(encoded, "bcd");
//! ```

pub mod cipher;
pub mod config;
pub mod memo;
pub mod scramble;
