//! Executing core requests over the network.
//!
//! # Design
//! A `Transport` turns an `HttpRequest` into an `HttpResponse`. Non-2xx
//! statuses come back as data so the core keeps sole ownership of status
//! interpretation; only failures that produce no response at all become
//! `NetworkError::Transport`.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, NetworkError};

use crate::config::Config;

pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        tracing::debug!(%method, %url, "sending request");

        let result = match (method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(&url), &headers).send(body.as_bytes()),
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(&url), &headers).send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(self.agent.put(&url), &headers).send_empty(),
        };
        let mut response = result.map_err(|e| NetworkError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
