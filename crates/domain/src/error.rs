//! Common error types used across the workspace.

use crate::id::PersonId;

/// Failure to interpret a path segment as a [`PersonId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParsePersonIdError {
    /// The segment contains something other than decimal digits.
    #[error("identifier is not a decimal number")]
    NonNumeric,
    /// The segment is all digits but exceeds the signed 64-bit range.
    #[error("identifier exceeds the supported range")]
    OutOfRange,
}

/// Top-level error for rolodex operations.
///
/// Each layer produces the typed variant for its failure mode and converts
/// via `#[from]` where a source type exists. The HTTP adapter owns the
/// mapping to status codes; nothing in here knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum RolodexError {
    /// A path identifier failed to parse.
    #[error("invalid person identifier")]
    InvalidId(#[from] ParsePersonIdError),

    /// No person with the given identifier exists.
    #[error("person {0} not found")]
    NotFound(PersonId),

    /// An insert collided with an existing identifier.
    #[error("person {0} already exists")]
    AlreadyExists(PersonId),

    /// The request body was not valid JSON for a person.
    #[error("invalid person payload")]
    InvalidPayload(#[from] serde_json::Error),

    /// CSV input could not be parsed, or CSV output could not be written.
    #[error("CSV error: {0}")]
    Csv(String),

    /// The address book holds no entries. Listing and exporting treat this
    /// as a failure rather than an empty collection.
    #[error("no people in the address book")]
    Empty,

    /// The storage layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
