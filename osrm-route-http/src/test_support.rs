//! Test utilities for route clients.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that returns a pre-configured answer without making HTTP
//! requests and records every request it receives.

use std::sync::{Mutex, PoisonError};

use osrm_route_core::request::EncodedRequest;
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{Transport, TransportResponse};

/// Stub [`Transport`] for testing.
///
/// # Example
///
/// ```
/// use osrm_route_http::test_support::StubTransport;
/// use osrm_route_http::RoutingClient;
/// use serde_json::json;
///
/// let stub = StubTransport::with_json(200, &json!({ "code": "NoRoute" }));
/// let client = RoutingClient::new(&stub);
/// # let _ = client;
/// assert!(stub.requests().is_empty());
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: Mutex<Vec<EncodedRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Body(TransportResponse),
    Error(TransportError),
}

impl StubTransport {
    /// Answer every request with `status` and the serialised `body`.
    #[must_use]
    pub fn with_json(status: u16, body: &Value) -> Self {
        Self::with_body(status, body.to_string().into_bytes())
    }

    /// Answer every request with `status` and raw `body` bytes.
    #[must_use]
    pub fn with_body(status: u16, body: Vec<u8>) -> Self {
        Self::from_response(StubResponse::Body(TransportResponse { status, body }))
    }

    /// Fail every request with `error`.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    const fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<EncodedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, request: &EncodedRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        match &self.response {
            StubResponse::Body(response) => Ok(response.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
