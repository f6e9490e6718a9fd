//! Error types for the invoice API client.
//!
//! # Design
//! Every failure in the list/create flow is a value, never a panic: the page
//! and the dialog both need something they can show. `NotFound` gets a
//! dedicated variant because callers distinguish "the invoice does not
//! exist" from "the server returned an unexpected status"; all other non-2xx
//! responses land in `HttpError` with the raw status code and body.
//! `NetworkError` is constructed by hosts: the core never performs IO, so
//! transport failures can only arise on the host side of the boundary.

use std::fmt;

/// Errors returned by `InvoiceClient` methods and by hosts executing the
/// HTTP round-trip.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested invoice does not exist.
    NotFound,

    /// The HTTP round-trip itself failed (connection refused, DNS, timeout).
    /// Produced by hosts; carries the transport's own message.
    NetworkError(String),

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "invoice not found"),
            ApiError::NetworkError(msg) => {
                write!(f, "request failed: {msg}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
