//! Defines the converter API seen from the page, and its HTTP implementation.

use serde_json::Value;

use crate::conversion::ConvertPayload;
use crate::conversion::ErrorBody;
use crate::ApiError;
use crate::ConversionResult;
use crate::CurrencyCatalog;
use crate::RatesSnapshot;

/// A trait for any backend the converter page can talk to.
#[allow(async_fn_in_trait)]
pub trait ConverterApi {
    /// Fetches the full currency catalog.
    async fn currencies(&self) -> Result<CurrencyCatalog, ApiError>;

    /// Converts `amount` from one currency into another.
    async fn convert(&self, amount: f64, from: &str, to: &str)
        -> Result<ConversionResult, ApiError>;

    /// Fetches the rates of all currencies against `base`.
    async fn rates(&self, base: &str) -> Result<RatesSnapshot, ApiError>;

    /// Reachability check. Only the status of the reply matters.
    async fn probe(&self) -> bool {
        self.currencies().await.is_ok()
    }
}

/// Talks to the proxy server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpConverterApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConverterApi {
    /// `base_url` is the origin serving `/api/*`, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PartialEq for HttpConverterApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ConverterApi for HttpConverterApi {
    async fn currencies(&self) -> Result<CurrencyCatalog, ApiError> {
        let resp = self.client.get(self.url("/api/currencies")).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }
        Ok(resp.json::<CurrencyCatalog>().await?)
    }

    async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult, ApiError> {
        let resp = self
            .client
            .get(self.url("/api/convert"))
            .query(&[("amount", amount.to_string().as_str()), ("from", from), ("to", to)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            // prefer the server's own message over the bare status.
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            return Err(match body.error {
                Some(message) => ApiError::Application(message),
                None => ApiError::Http(status.as_u16()),
            });
        }

        resp.json::<ConvertPayload>().await?.into_result()
    }

    async fn rates(&self, base: &str) -> Result<RatesSnapshot, ApiError> {
        let resp = self
            .client
            .get(self.url("/api/rates"))
            .query(&[("from", base)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Http(status.as_u16()));
        }

        RatesSnapshot::from_payload(resp.json::<Value>().await?)
    }

    async fn probe(&self) -> bool {
        match self.client.get(self.url("/api/currencies")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Json;
    use axum::Router;
    use serde_json::json;

    use super::*;
    use crate::test_server;

    async fn api_for(proxy: Router) -> HttpConverterApi {
        HttpConverterApi::new(test_server::serve(proxy).await)
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let api = HttpConverterApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/api/rates"), "http://localhost:5000/api/rates");
    }

    #[tokio::test]
    async fn failed_status_becomes_http_error() {
        let api = api_for(Router::new().route(
            "/api/currencies",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        ))
        .await;

        assert_eq!(api.currencies().await, Err(ApiError::Http(503)));
        assert!(!api.probe().await);
    }

    #[tokio::test]
    async fn convert_prefers_the_server_message() {
        let api = api_for(Router::new().route(
            "/api/convert",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid currency code" })),
                )
            }),
        ))
        .await;

        assert_eq!(
            api.convert(100.0, "USD", "XXX").await,
            Err(ApiError::Application("Invalid currency code".to_string()))
        );
    }

    #[tokio::test]
    async fn convert_reads_the_result() {
        let api = api_for(Router::new().route(
            "/api/convert",
            get(|| async { Json(json!({ "result": 85.0 })) }),
        ))
        .await;

        assert_eq!(
            api.convert(100.0, "USD", "EUR").await,
            Ok(ConversionResult { result: 85.0 })
        );
    }

    #[tokio::test]
    async fn rates_server_error_is_http_500() {
        let api = api_for(Router::new().route(
            "/api/rates",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "API key not configured" })),
                )
            }),
        ))
        .await;

        assert_eq!(api.rates("USD").await, Err(ApiError::Http(500)));
    }
}
