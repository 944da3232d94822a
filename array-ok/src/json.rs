//! JSON boundary for figure documents.
//!
//! Thin wrappers over `serde_json` that accept any document embedding [`OneOrMany`](crate::OneOrMany)
//! fields (or a bare container) and report failures through [`Error`].

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::Error;

/// Encode a document as a compact JSON string.
///
/// # Errors
///
/// Returns [`Error::Encode`] if a value in the document cannot be represented as JSON
/// (for example a map with non-string keys).
#[inline]
pub fn to_string<D>(document: &D) -> Result<String, Error>
where
    D: Serialize + ?Sized,
{
    serde_json::to_string(document).map_err(|e| {
        debug!("failed to encode document: {e}");
        Error::Encode(e)
    })
}

/// Encode a document as a JSON [`Value`].
///
/// # Errors
///
/// Returns [`Error::Encode`] if a value in the document cannot be represented as JSON.
#[inline]
pub fn to_value<D>(document: &D) -> Result<Value, Error>
where
    D: Serialize + ?Sized,
{
    serde_json::to_value(document).map_err(|e| {
        debug!("failed to encode document: {e}");
        Error::Encode(e)
    })
}

/// Decode a document from a JSON string.
///
/// # Errors
///
/// Returns [`Error::Decode`] on malformed JSON, or when a field does not match its declared type.
/// Only the first failure is reported.
#[inline]
pub fn from_str<D>(input: &str) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    serde_json::from_str(input).map_err(|e| {
        debug!("failed to decode document: {e}");
        Error::Decode(e)
    })
}

/// Decode a document from JSON bytes.
///
/// # Errors
///
/// See [`from_str`].
#[inline]
pub fn from_slice<D>(input: &[u8]) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    serde_json::from_slice(input).map_err(|e| {
        debug!("failed to decode document: {e}");
        Error::Decode(e)
    })
}

/// Decode a document from a JSON [`Value`].
///
/// # Errors
///
/// See [`from_str`].
#[inline]
pub fn from_value<D>(value: Value) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| {
        debug!("failed to decode document: {e}");
        Error::Decode(e)
    })
}
