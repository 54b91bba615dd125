//! Provides a map of exchange rates relative to one base currency.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::ApiError;

/// Rates of every known currency against the base the snapshot was
/// requested for. Rebuilt from scratch whenever the base changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatesSnapshot(BTreeMap<String, f64>);

impl RatesSnapshot {
    pub fn get(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Builds a snapshot from a `/api/rates` body.
    ///
    /// The body must be a JSON object. A string `error` field turns the whole
    /// reply into an [`ApiError::Application`]; entries that are not numbers
    /// are skipped.
    pub fn from_payload(payload: Value) -> Result<Self, ApiError> {
        let Value::Object(map) = payload else {
            return Err(ApiError::Decode("rates payload is not an object".to_string()));
        };

        if let Some(error) = map.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(ApiError::Application(message));
        }

        Ok(Self(
            map.into_iter()
                .filter_map(|(code, rate)| rate.as_f64().map(|r| (code, r)))
                .collect(),
        ))
    }
}

impl<C: Into<String>> FromIterator<(C, f64)> for RatesSnapshot {
    fn from_iter<T: IntoIterator<Item = (C, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(c, r)| (c.into(), r)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_numeric_entries_only() {
        let snapshot =
            RatesSnapshot::from_payload(json!({"EUR": 0.85, "JPY": 150, "base": "USD"})).unwrap();

        assert_eq!(
            snapshot,
            [("EUR", 0.85), ("JPY", 150.0)].into_iter().collect::<RatesSnapshot>()
        );
        assert_eq!(snapshot.get("base"), None);
    }

    #[test]
    fn error_field_rejects_the_payload() {
        let err = RatesSnapshot::from_payload(json!({"error": "API key not configured"}))
            .unwrap_err();
        assert_eq!(err, ApiError::Application("API key not configured".to_string()));
    }

    #[test]
    fn non_object_payload_is_a_decode_error() {
        assert!(matches!(
            RatesSnapshot::from_payload(json!([1, 2, 3])),
            Err(ApiError::Decode(_))
        ));
    }
}
