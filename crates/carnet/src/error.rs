//! Error types for carnet.
//!
//! Scheduling and deck selection never fail once their inputs are typed.
//! Errors only arise at the boundaries: parsing a quality score, loading a
//! card file or configuration, and looking up cards by id.
//!
//! # Example
//!
//! ```
//! use carnet::{Error, Quality};
//!
//! match Quality::new(7) {
//!     Ok(q) => println!("quality {}", q),
//!     Err(Error::InvalidQuality(raw)) => eprintln!("{} is not in 0..=5", raw),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Result type for carnet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at carnet's boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A quality score outside 0..=5.
    #[error("invalid quality {0}: expected a score between 0 and 5")]
    InvalidQuality(u8),

    /// A grade name that is neither a number nor one of again/hard/good/easy.
    #[error("unknown grade '{0}': use 0-5 or again, hard, good, easy")]
    UnknownGrade(String),

    /// A fixed interval table that cannot be used for scheduling.
    #[error("invalid interval table: {0}")]
    InvalidIntervals(String),

    /// No card with the given id.
    #[error("card not found: {0}")]
    CardNotFound(u64),

    /// Two cards share the same id in a card file.
    #[error("duplicate card id: {0}")]
    DuplicateCard(u64),

    /// A card violates the data model.
    #[error("invalid card: {0}")]
    InvalidCard(String),
}
