//! Domain DTOs for the invoice API.
//!
//! # Design
//! These types encode the wire contract of the invoice service and are
//! defined independently of the mock-server crate; integration tests catch
//! schema drift between the two. The backend marshals the record identifier
//! as `ID` (uppercase), so the Rust-side `id` field carries a serde rename.
//! Responses from the real service include bookkeeping fields beyond the
//! five modeled here; serde's default of ignoring unknown fields keeps
//! decoding tolerant of them.

use serde::{Deserialize, Serialize};

/// A single invoice returned by the API.
///
/// `id` is assigned by the server and treated as opaque — the client never
/// constructs or interprets one. `amount` is a float on the wire, which is
/// why this type is `PartialEq` but not `Eq`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub status: String,
    pub method: String,
    pub amount: f64,
}

/// Request payload for creating a new invoice. All fields are required;
/// the server responds with the full `Invoice` including its assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateInvoice {
    pub name: String,
    pub status: String,
    pub method: String,
    pub amount: f64,
}

/// Request payload for updating an existing invoice. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}
