//! The popular-currencies rates table.

use api::ConverterApi;
use api::CurrencyCatalog;
use api::RatesSnapshot;
use dioxus_logger::tracing::warn;

use crate::number_format::format_amount;

/// Currencies shown in the table, in display order.
pub const POPULAR_CURRENCIES: [&str; 9] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR",
];

/// The base the page starts with.
pub const DEFAULT_BASE: &str = "USD";

#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub name: String,
    pub code: &'static str,
    pub rate: String,
    pub base: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RatesTable {
    #[default]
    Loading,
    Rows(Vec<RateRow>),
    Failed,
}

/// Picks the popular currencies out of `snapshot`.
///
/// The base itself is skipped, as is any code with no rate or a zero rate.
pub fn popular_rows(snapshot: &RatesSnapshot, base: &str, catalog: &CurrencyCatalog) -> Vec<RateRow> {
    POPULAR_CURRENCIES
        .iter()
        .filter(|&&code| code != base)
        .filter_map(|&code| {
            let rate = snapshot.get(code).filter(|r| *r != 0.0)?;
            Some(RateRow {
                name: catalog.display_name(code).to_string(),
                code,
                rate: format_amount(rate),
                base: base.to_string(),
            })
        })
        .collect()
}

/// Fetches rates for `base` and turns them into table rows.
///
/// Failures of any kind collapse into [`RatesTable::Failed`]; they are never
/// propagated.
pub async fn fetch_rates_table<A: ConverterApi>(
    api: &A,
    base: &str,
    catalog: &CurrencyCatalog,
) -> RatesTable {
    match api.rates(base).await {
        Ok(snapshot) => RatesTable::Rows(popular_rows(&snapshot, base, catalog)),
        Err(e) => {
            warn!("Failed to load rates for {}: {}", base, e);
            RatesTable::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use api::ApiError;

    use super::*;
    use crate::converter::tests::FakeApi;

    fn catalog() -> CurrencyCatalog {
        [("EUR", "Euro"), ("GBP", "British Pound"), ("USD", "US Dollar")]
            .into_iter()
            .collect()
    }

    fn snapshot() -> RatesSnapshot {
        [
            ("INR", 83.1),
            ("EUR", 0.92),
            ("USD", 1.0),
            ("XAU", 0.0004),
            ("JPY", 151.25),
            ("CAD", 0.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn rows_follow_popular_order_and_skip_base() {
        let rows = popular_rows(&snapshot(), "USD", &catalog());

        let codes: Vec<_> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, ["EUR", "JPY", "INR"]);
    }

    #[test]
    fn rows_use_catalog_names_with_code_fallback() {
        let rows = popular_rows(&snapshot(), "GBP", &catalog());

        assert_eq!(rows[0].name, "US Dollar");
        assert_eq!(rows[0].rate, "1.00");
        assert_eq!(rows[0].base, "GBP");
        let jpy = rows.iter().find(|r| r.code == "JPY").unwrap();
        assert_eq!(jpy.name, "JPY");
        assert_eq!(jpy.rate, "151.25");
    }

    #[test]
    fn rows_never_exceed_the_allow_list() {
        let everything: RatesSnapshot = POPULAR_CURRENCIES
            .iter()
            .map(|c| (*c, 2.0))
            .chain([("SEK", 10.0), ("NOK", 10.5)])
            .collect();

        let rows = popular_rows(&everything, "EUR", &CurrencyCatalog::new());

        assert_eq!(rows.len(), POPULAR_CURRENCIES.len() - 1);
        assert!(rows.iter().all(|r| r.code != "EUR"));
        assert!(rows.iter().all(|r| POPULAR_CURRENCIES.contains(&r.code)));
    }

    #[tokio::test]
    async fn server_error_becomes_failed_table() {
        let api = FakeApi {
            rates_reply: Some(Err(ApiError::Http(500))),
            ..FakeApi::default()
        };

        let table = fetch_rates_table(&api, "USD", &catalog()).await;

        assert_eq!(table, RatesTable::Failed);
        assert_eq!(api.calls(), ["rates USD"]);
    }

    #[tokio::test]
    async fn successful_fetch_builds_rows() {
        let api = FakeApi {
            rates_reply: Some(Ok(snapshot())),
            ..FakeApi::default()
        };

        let RatesTable::Rows(rows) = fetch_rates_table(&api, "USD", &catalog()).await else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Euro");
    }
}
