use thiserror::Error;

use crate::headers::validate::SeedDefect;

/// Errors produced by the header registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No seeded header has this canonical key.
    #[error("unknown header: {0:?}")]
    NotFound(String),
    #[error("unknown header category: {0:?}")]
    UnknownCategory(String),
    /// A strict build rejected its seed rows.
    #[error("malformed seed table ({} defects)", .0.len())]
    MalformedSeed(Vec<SeedDefect>),
}

/// A `Result` alias where the `Err` case is [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;
