//! Payload of the `/api/convert` endpoint.

use serde::Deserialize;
use serde::Serialize;

use crate::ApiError;

/// The latest successful conversion, as returned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub result: f64,
}

/// The raw body of a convert response. The server sends either a `result`
/// or an `error`, but both are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConvertPayload {
    #[serde(default)]
    pub result: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ConvertPayload {
    /// An `error` field wins over any `result`.
    pub fn into_result(self) -> Result<ConversionResult, ApiError> {
        match (self.error, self.result) {
            (Some(error), _) => Err(ApiError::Application(error)),
            (None, Some(result)) => Ok(ConversionResult { result }),
            (None, None) => Err(ApiError::Decode("missing `result` field".to_string())),
        }
    }
}

/// Body of any error response, used to pull a message out of a
/// non-success reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
