//! This crate contains the wire types shared by the converter page and the
//! proxy server, plus the HTTP client the page uses to reach the proxy.

pub mod client;
pub mod conversion;
pub mod currency_catalog;
#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
pub mod proxy;
pub mod rates_snapshot;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_server;

use thiserror::Error;

pub use client::ConverterApi;
pub use client::HttpConverterApi;
pub use conversion::ConversionResult;
pub use currency_catalog::CurrencyCatalog;
pub use rates_snapshot::RatesSnapshot;

/// Errors produced by a single request against the converter API.
///
/// The `Display` output is what the page shows to the user, so it is kept
/// short and free of internal detail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("HTTP {0}")]
    Http(u16),
    /// The payload carried an `error` field.
    #[error("{0}")]
    Application(String),
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("{0}")]
    Transport(String),
    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
