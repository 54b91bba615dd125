//! Conversion rules: input validation, the request itself, and the text
//! shown for a successful result.

use api::ApiError;
use api::ConversionResult;
use api::ConverterApi;
use thiserror::Error;

use crate::number_format::format_amount;
use crate::number_format::format_rate;

/// Input problems caught before any request is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid amount greater than 0")]
    InvalidAmount,
    #[error("Please select different currencies for conversion")]
    SameCurrency,
}

/// A request that was sent but did not produce a result.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Conversion failed: {0}")]
pub struct ConversionFailed(pub ApiError);

/// Parses the amount field. Only finite, strictly positive numbers pass.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// A conversion that passed validation and is ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    /// The amount is checked first, then the currency pair.
    pub fn validate(amount_text: &str, from: &str, to: &str) -> Result<Self, ValidationError> {
        let amount = parse_amount(amount_text).ok_or(ValidationError::InvalidAmount)?;
        if from == to {
            return Err(ValidationError::SameCurrency);
        }
        Ok(Self {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    pub async fn send<A: ConverterApi>(self, api: &A) -> Result<Conversion, ApiError> {
        let result = api.convert(self.amount, &self.from, &self.to).await?;
        Ok(Conversion {
            request: self,
            result,
        })
    }
}

/// A finished conversion and the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub result: ConversionResult,
}

impl Conversion {
    /// The effective rate, `result / amount`.
    pub fn rate(&self) -> f64 {
        self.result.result / self.request.amount
    }

    /// e.g. `"100.00 USD = 85.00 EUR"`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_amount(self.request.amount),
            self.request.from,
            format_amount(self.result.result),
            self.request.to
        )
    }

    /// e.g. `"1 USD = 0.8500 EUR"`.
    pub fn rate_line(&self) -> String {
        format!(
            "1 {} = {} {}",
            self.request.from,
            format_rate(self.rate()),
            self.request.to
        )
    }
}

/// Whether a reverse should be followed by a fresh conversion.
pub fn converts_after_reverse(amount_text: &str) -> bool {
    parse_amount(amount_text).is_some()
}

/// Text for the clipboard, built from the current field values and the raw,
/// unrounded result. `None` until a conversion has succeeded.
pub fn clipboard_text(
    amount_text: &str,
    from: &str,
    to: &str,
    last: Option<&ConversionResult>,
) -> Option<String> {
    last.map(|conversion| format!("{} {} = {} {}", amount_text, from, conversion.result, to))
}
