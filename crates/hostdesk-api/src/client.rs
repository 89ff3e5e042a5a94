// Console API HTTP client
//
// Wraps `reqwest::Client` with `/api/v1` URL construction, status
// checking, and envelope unwrapping. Endpoint groups (industries,
// services, customers) are implemented as inherent methods in separate
// files to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

const API_PREFIX: &str = "api/v1";
const PREVIEW_CHARS: usize = 200;

/// Raw HTTP client for the console REST API.
///
/// One network call per method invocation: no retries, no auth headers.
/// All methods return the unwrapped payload; the envelope is stripped
/// before the caller sees it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API host root, e.g. `https://api.example.com`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a resource path: `{base}/api/v1/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{API_PREFIX}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the given envelope.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        envelope: Envelope,
    ) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        Self::parse_response(resp, envelope).await
    }

    /// Send a POST request with a JSON body and unwrap the given envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
        envelope: Envelope,
    ) -> Result<T, Error> {
        debug!("POST {}", url);

        let resp = self.http.post(url).json(body).send().await?;
        Self::parse_response(resp, envelope).await
    }

    /// Check the status, decode JSON, and pull the payload out of its envelope.
    async fn parse_response<T: DeserializeOwned>(
        resp: reqwest::Response,
        envelope: Envelope,
    ) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "request rejected by server");
            return Err(Error::from_status(status));
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| deserialization(&e, &body))?;

        let payload = envelope.extract(value).ok_or_else(|| Error::Deserialization {
            message: format!(
                "response is missing the expected {envelope:?} envelope (body preview: {:?})",
                preview(&body)
            ),
            body: body.clone(),
        })?;

        serde_json::from_value(payload).map_err(|e| deserialization(&e, &body))
    }
}

fn deserialization(err: &serde_json::Error, body: &str) -> Error {
    Error::Deserialization {
        message: format!("{err} (body preview: {:?})", preview(body)),
        body: body.to_owned(),
    }
}

fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_prefix_and_path() {
        let client = ApiClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://api.example.com/").unwrap(),
        );
        assert_eq!(
            client.api_url("industry").unwrap().as_str(),
            "https://api.example.com/api/v1/industry"
        );
        assert_eq!(
            client.api_url("/service/categories").unwrap().as_str(),
            "https://api.example.com/api/v1/service/categories"
        );
    }

    #[test]
    fn preview_is_char_safe() {
        let body = "é".repeat(500);
        assert_eq!(preview(&body).chars().count(), PREVIEW_CHARS);
    }
}
