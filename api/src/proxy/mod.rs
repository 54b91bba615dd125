//! The HTTP proxy in front of the rate provider.
//!
//! The page never talks to the provider directly: these routes attach the
//! API key server-side and normalize every failure into `{ "error": ... }`.

mod config;
mod unirate;

use std::sync::Arc;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::Json;
use axum::Router;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

pub use config::ConfigError;
pub use config::ProxyConfig;
pub use unirate::UniRateClient;
pub use unirate::UpstreamError;

/// Errors a proxy route answers with. Every variant becomes a JSON body of
/// the form `{ "error": "<display>" }`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("API key not configured")]
    MissingKey,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("API Error: {0}")]
    UpstreamStatus(u16),
    #[error("{0}")]
    Upstream(String),
}

impl From<UpstreamError> for ProxyError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::MissingKey => Self::MissingKey,
            other => Self::Upstream(other.to_string()),
        }
    }
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingKey | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Clone)]
pub struct ProxyState {
    upstream: Arc<UniRateClient>,
}

pub fn router(upstream: UniRateClient) -> Router {
    Router::new()
        .route("/api/currencies", get(currencies))
        .route("/api/convert", get(convert))
        .route("/api/rates", get(rates))
        .route("/api/health", get(health))
        .with_state(ProxyState {
            upstream: Arc::new(upstream),
        })
}

/// Accepts plain decimal amounts only: digits with at most one `.`.
pub fn is_valid_amount(amount: &str) -> bool {
    let digits = amount.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

async fn currencies(State(state): State<ProxyState>) -> Result<Json<Value>, ProxyError> {
    match state.upstream.currencies().await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            warn!("currencies request failed: {}", e);
            Err(e.into())
        }
    }
}

fn default_amount() -> String {
    "1".to_string()
}

fn default_from() -> String {
    "USD".to_string()
}

fn default_to() -> String {
    "EUR".to_string()
}

#[derive(Debug, Deserialize)]
struct ConvertQuery {
    #[serde(default = "default_amount")]
    amount: String,
    #[serde(default = "default_from")]
    from: String,
    #[serde(default = "default_to")]
    to: String,
}

async fn convert(
    State(state): State<ProxyState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<Value>, ProxyError> {
    if state.upstream.api_key_len().is_none() {
        return Err(ProxyError::MissingKey);
    }
    if !is_valid_amount(&query.amount) {
        return Err(ProxyError::InvalidAmount);
    }

    match state
        .upstream
        .convert(&query.amount, &query.from, &query.to)
        .await
    {
        Ok(body) => Ok(Json(body)),
        Err(UpstreamError::Status(code)) => {
            warn!("convert {} -> {} answered HTTP {}", query.from, query.to, code);
            Err(ProxyError::UpstreamStatus(code))
        }
        Err(e) => {
            warn!("convert request failed: {}", e);
            Err(e.into())
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesQuery {
    #[serde(default = "default_from")]
    from: String,
}

async fn rates(
    State(state): State<ProxyState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<Value>, ProxyError> {
    match state.upstream.rates(&query.from).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            warn!("rates request for {} failed: {}", query.from, e);
            Err(e.into())
        }
    }
}

async fn health(State(state): State<ProxyState>) -> (StatusCode, Json<Value>) {
    let Some(key_len) = state.upstream.api_key_len() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "error", "message": "API key not configured" })),
        );
    };

    match state.upstream.probe().await {
        Ok(code) => {
            let healthy = (200..300).contains(&code);
            (
                StatusCode::OK,
                Json(json!({
                    "status": if healthy { "healthy" } else { "error" },
                    "api_key_set": true,
                    "api_key_length": key_len,
                    "api_response": code,
                })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "status": "error", "message": e.to_string() })),
        ),
    }
}
