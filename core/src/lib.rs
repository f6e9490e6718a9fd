//! Synchronous client core for the invoice service.
//!
//! # Overview
//! Everything a front-end needs to list and create invoices, minus the IO:
//! `InvoiceClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern), and
//! `InvoiceForm` models the create dialog — field state, validation, and
//! the open/closed lifecycle. The host executes the actual HTTP
//! round-trips, making the core fully deterministic and testable.
//!
//! # Design
//! - `InvoiceClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `InvoiceForm` follows the same split for submission: it validates and
//!   yields the payload; the host calls the API and reports the outcome.
//! - Failures are values (`ApiError`, `FieldError`) with messages fit for
//!   display; nothing in the flow panics.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod schema;
pub mod types;

pub use client::InvoiceClient;
pub use error::ApiError;
pub use form::InvoiceForm;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use schema::FieldError;
pub use types::{CreateInvoice, Invoice, UpdateInvoice};
