// File: src/error.rs
//! Error types for number conversion and descriptor handling.

use thiserror::Error;

/// Result type alias for written-number operations.
pub type Result<T> = std::result::Result<T, WrittenNumberError>;

/// Errors that can occur while converting a number or loading a language.
#[derive(Debug, Error)]
pub enum WrittenNumberError {
    /// The value is negative, not finite, out of range or not numeric.
    /// The public entry points turn this into an empty string.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A language code does not name any built-in language.
    #[error("unknown language code `{0}`")]
    InvalidLanguage(String),

    /// A descriptor's `units` is neither a unit list nor an exponent map.
    #[error("invalid units: {0}")]
    InvalidUnits(String),

    /// A descriptor is well-formed JSON but breaks a structural invariant.
    #[error("invalid language descriptor: {0}")]
    InvalidDescriptor(String),

    /// An irregular-compound lookup found no lexicon entry.
    #[error("language descriptor defines no word for {0}")]
    MissingWord(u128),

    /// Decomposition nested deeper than any well-formed descriptor allows.
    #[error("recursion limit of {0} levels exceeded")]
    RecursionLimit(usize),

    /// Descriptor serialization/deserialization error.
    #[error("descriptor serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (descriptor files).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
