//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core never opens a socket. It describes the HTTP exchange as plain
//! data: `InvoiceClient` builds `HttpRequest` values, the host (the terminal
//! front-end, an integration test, any embedder) performs the round-trip with
//! whatever transport it has, and hands the resulting `HttpResponse` back for
//! parsing. Everything network-shaped stays on the host side, which keeps the
//! core deterministic and lets the wire contract be tested without a server.
//!
//! Fields are owned (`String`, `Vec`) so requests and responses can be moved
//! freely between the core and the host.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `InvoiceClient::build_*` methods. The host is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`, then passed to
/// `InvoiceClient::parse_*` methods for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
