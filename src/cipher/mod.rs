//! Caesar-style substitution cipher with per-language alphabets.
//!
//! This module contains the cipher subsystem: the language registry, the
//! engine that applies positional shifts, and the error type for lookups.
//!
//! # Architecture
//!
//! - `language`: the `Language` record (alphabet pair + modulus) and the
//!   built-in language definitions
//! - `engine`: `CipherEngine`, which owns the registry and applies shifts
//! - `error`: typed error for unknown language lookups
//!
//! # Example
//!
//! ```rust
//! use lettershift::cipher::{CipherEngine, ShiftDirection};
//!
//! let engine = CipherEngine::new();
//! let encoded = engine
//!     .shift_text_by_language_name("Hello, World!", 3, "en", ShiftDirection::Encode)
//!     .unwrap();
//! assert_eq!(encoded, "Khoor, Zruog!");
//! ```

mod engine;
mod error;
mod language;

pub use engine::{CipherEngine, ShiftDirection};
pub use error::UnknownLanguageError;
pub use language::{default_languages, Language};
