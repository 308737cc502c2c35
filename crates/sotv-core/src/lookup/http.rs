//! Blocking lookup over libcurl.

use std::time::Duration;

use super::{parse_response, LookupError, LookupRequest, LookupResponse};
use crate::config::SotvConfig;
use crate::resolver::Resolver;

/// Resolver that POSTs the request as JSON to a fixed endpoint.
///
/// Runs in the calling thread; the session moves it onto `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    endpoint: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(cfg: &SotvConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn post(&self, body: &[u8]) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, response))
    }
}

impl Resolver for HttpResolver {
    fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| LookupError::failed(format!("encode request: {e}"), None))?;

        let (code, response) = self.post(&body).map_err(|e| {
            tracing::warn!(endpoint = %self.endpoint, "lookup transport error: {}", e);
            LookupError::failed(e.to_string(), None)
        })?;
        tracing::debug!(status = code, bytes = response.len(), "lookup reply");

        parse_response(code, &response)
    }
}
