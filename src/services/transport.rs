use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Standard reason phrase for the status, if it has one.
    pub fn reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
    }
}

/// Sends a JSON body with POST. Any status is a successful exchange; only
/// failures to complete the request are errors.
pub trait Transport {
    fn post_json(&self, path: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(cfg: &ClientConfig) -> Result<Self, TransportError> {
        let base_url = parse_base_url(&cfg.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Resolves an endpoint below the base url, keeping any base path prefix.
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidUrl(format!("{path}: {e}")))
    }
}

/// Accepts absolute http(s) urls with a host. The path always ends in `/`
/// so endpoints join below it.
fn parse_base_url(raw: &str) -> Result<Url, TransportError> {
    let invalid = |why: String| TransportError::InvalidUrl(format!("{raw}: {why}"));

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &Value) -> Result<HttpReply, TransportError> {
        let url = self.url_for(path)?;
        log::debug!("POST {url}");

        let resp = self.client.post(url).json(body).send()?;
        let status = resp.status().as_u16();

        // Body read failures count as the request not completing.
        let body = resp.text()?;

        Ok(HttpReply { status, body })
    }
}
