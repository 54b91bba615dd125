//! Client for the upstream UniRate API.

use std::time::Duration;

use dioxus_logger::tracing::debug;
use serde_json::Value;
use thiserror::Error;

use super::config::ProxyConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("API key not configured")]
    MissingKey,
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(reqwest::Error),
}

// reqwest prints the request URL, and ours carries the key.
impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

/// Forwards requests to the rate provider, attaching the API key.
#[derive(Debug, Clone)]
pub struct UniRateClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl UniRateClient {
    pub fn new(config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: config.upstream_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn api_key_len(&self) -> Option<usize> {
        self.api_key.as_ref().map(String::len)
    }

    fn key(&self) -> Result<&str, UpstreamError> {
        self.api_key.as_deref().ok_or(UpstreamError::MissingKey)
    }

    async fn send(
        &self,
        path: &str,
        params: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<reqwest::Response, UpstreamError> {
        let key = self.key()?;
        // the key rides in the query string, so never log the full URL.
        debug!("upstream GET {}/{} {:?}", self.base_url, path, params);

        let resp = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .query(&[("api_key", key)])
            .query(params)
            .timeout(timeout)
            .send()
            .await?;
        Ok(resp)
    }

    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let resp = self.send(path, params, REQUEST_TIMEOUT).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        Ok(resp.json::<Value>().await?)
    }

    pub async fn currencies(&self) -> Result<Value, UpstreamError> {
        self.get_json("currencies", &[]).await
    }

    pub async fn convert(&self, amount: &str, from: &str, to: &str) -> Result<Value, UpstreamError> {
        self.get_json("convert", &[("amount", amount), ("from", from), ("to", to)])
            .await
    }

    pub async fn rates(&self, from: &str) -> Result<Value, UpstreamError> {
        self.get_json("rates", &[("from", from)]).await
    }

    /// Returns the upstream status code for a currencies request, whatever it is.
    pub async fn probe(&self) -> Result<u16, UpstreamError> {
        let resp = self.send("currencies", &[], HEALTH_TIMEOUT).await?;
        Ok(resp.status().as_u16())
    }
}
