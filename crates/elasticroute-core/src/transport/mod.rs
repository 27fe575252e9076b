//! Boundary between the plan pipeline and the network.
//!
//! The pipeline hands a fully built [`TransportRequest`] to a [`Transport`]
//! and receives the raw status and body back. Connection setup, TLS,
//! proxies and timeouts belong to the transport implementation.

#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(feature = "http")]
pub use http::HttpTransport;

/// HTTP method of a plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// Path relative to the service base address, with query string
    pub path: String,
    /// Credential for the `Authorization: Bearer` header
    pub bearer: String,
    /// JSON body, for requests that carry one
    pub body: Option<Value>,
}

/// Raw response from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends plan requests to the routing service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and returns the response, whatever its status.
    /// Errors are reserved for failures where no response was received.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}
