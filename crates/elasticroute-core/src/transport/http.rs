//! HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;

use super::{Method, Transport, TransportRequest, TransportResponse};
use crate::{
    config::Config,
    error::{Result, RouteError},
};

/// Sends plan requests over HTTPS to the configured base address.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport for `config.base_url`, applying the configured
    /// timeout if any.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RouteError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let url = self.url(&request.path);
        debug!("{:?} {url}", request.method);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = builder
            .bearer_auth(&request.bearer)
            .header(ACCEPT, "application/json");
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| RouteError::transport(format!("HTTP request failed: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RouteError::transport(format!("Failed to read response body: {e}")))?;

        debug!("Response status {status}");
        Ok(TransportResponse { status, body })
    }
}
