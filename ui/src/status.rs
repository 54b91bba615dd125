//! Reachability of the converter API.

use std::time::Duration;

use api::ConverterApi;

/// How often the status indicator re-checks the API.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum ApiStatus {
    /// Nothing has been checked yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Online
        } else {
            Self::Offline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Checking...",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    /// CSS class for the indicator.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Unknown => "status-unknown",
            Self::Online => "status-online",
            Self::Offline => "status-offline",
        }
    }
}

/// One poll: any reply with a success status means online.
pub async fn check<A: ConverterApi>(api: &A) -> ApiStatus {
    ApiStatus::from_reachable(api.probe().await)
}

#[cfg(test)]
mod tests {
    use api::CurrencyCatalog;

    use super::*;
    use crate::converter::tests::FakeApi;

    #[tokio::test]
    async fn reachable_api_is_online() {
        let api = FakeApi {
            catalog: Some(CurrencyCatalog::new()),
            ..FakeApi::default()
        };

        assert_eq!(check(&api).await, ApiStatus::Online);
        assert_eq!(api.calls(), ["currencies"]);
    }

    #[tokio::test]
    async fn failing_api_is_offline() {
        let api = FakeApi::default();

        let status = check(&api).await;

        assert!(status.is_offline());
        assert_eq!(status.label(), "Offline");
    }
}
