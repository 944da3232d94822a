use thiserror::Error;

/// Reasons a wire value could not be decoded into a [`OneOrMany`](crate::OneOrMany).
///
/// These are raised through [`serde::de::Error::custom`], so the enclosing format keeps control of
/// the final error type (and `serde_json` appends the line and column).
///
/// A failure inside a structured `T` (a bad inner field of an object) is the enclosing
/// deserializer's own error and is passed through unchanged rather than wrapped here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The wire value is not an array, and it could not be decoded as a single value either.
    #[error("expected a single value or an array of values, found {found}: {reason}")]
    ShapeMismatch { found: String, reason: String },
    /// An element of a wire array could not be decoded.
    #[error("invalid element at index {index}: {reason}")]
    Element { index: usize, reason: String },
}

/// Errors from the JSON boundary helpers in [`crate::json`].
#[cfg(feature = "json")]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to decode document: {0}")]
    Decode(#[source] serde_json::Error),
}
