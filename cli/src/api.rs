//! HTTP executor bridging core requests to the network.
//!
//! The core never touches the wire; this module runs its `HttpRequest`
//! values through ureq and returns plain `HttpResponse` data. Transport
//! failures surface as [`ApiError::NetworkError`] so callers handle them
//! alongside the API's own error statuses.

use invoice_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

/// Build the shared ureq agent.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Apply the request's headers to a ureq builder in either typestate.
fn with_headers<S>(
    mut builder: ureq::RequestBuilder<S>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<S> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Execute an `HttpRequest` and return the raw `HttpResponse`.
pub fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let headers = req.headers;
    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.path), &headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), &headers).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&req.path), &headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&req.path), &headers).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            with_headers(agent.put(&req.path), &headers).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => with_headers(agent.put(&req.path), &headers).send_empty(),
    }
    .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::NetworkError(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
