//! Error types for the todo client.
//!
//! # Design
//! `NetworkError` covers everything that can go wrong between building a
//! request and decoding its response. `TodoError` adds the controller's own
//! rejections, raised before any request is built. `NotFound` keeps its own
//! variant so callers can tell a vanished item apart from a misbehaving store.

use thiserror::Error;

use crate::types::TodoId;

/// Failures of a single round-trip to the store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The store returned 404.
    #[error("resource not found")]
    NotFound,

    /// The store returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be encoded to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}

/// Errors returned by controller operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Create was asked for blank text.
    #[error("todo text must not be empty")]
    EmptyText,

    /// Commit was asked for an item that is not being edited.
    #[error("item {0} is not being edited")]
    NotEditing(TodoId),

    /// The id is not in the local list.
    #[error("no item with id {0}")]
    UnknownItem(TodoId),
}
