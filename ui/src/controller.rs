//! Event reactions of the converter page. Each function reads what it needs
//! from a [`PageView`], talks to the API, and writes the outcome back.
//!
//! Nothing here sequences or cancels requests: when two calls overlap, the
//! one that finishes last decides what the page shows.

use api::ConverterApi;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::warn;

use crate::converter;
use crate::converter::ConversionFailed;
use crate::converter::ConversionRequest;
use crate::page_view::PageView;
use crate::rates_table::fetch_rates_table;
use crate::rates_table::RatesTable;
use crate::rates_table::DEFAULT_BASE;
use crate::startup;
use crate::startup::INIT_FAILED;
use crate::status;
use crate::status::ApiStatus;

/// Validates the form and, if it passes, converts.
///
/// The loading indicator only covers the request; validation failures are
/// reported without touching it.
pub async fn run_conversion<A: ConverterApi, V: PageView>(api: &A, mut view: V) {
    let form = view.form_values();
    let request = match ConversionRequest::validate(&form.amount, &form.from, &form.to) {
        Ok(request) => request,
        Err(e) => {
            view.show_error(e.to_string());
            return;
        }
    };

    view.set_loading(true);
    let result = request.send(api).await;
    view.set_loading(false);

    match result {
        Ok(conversion) => view.show_conversion(&conversion),
        Err(e) => {
            warn!("Conversion error: {}", e);
            view.show_error(ConversionFailed(e).to_string());
        }
    }
}

/// Reloads the rates table for `base`. Only the table is touched.
pub async fn load_rates<A: ConverterApi, V: PageView>(api: &A, mut view: V, base: &str) {
    view.show_rates(RatesTable::Loading);
    let table = fetch_rates_table(api, base, &view.catalog()).await;
    view.show_rates(table);
}

/// Swaps the selected currencies, converting again if the amount is usable.
pub async fn reverse<A: ConverterApi, V: PageView>(api: &A, mut view: V) {
    view.swap_currencies();

    if converter::converts_after_reverse(&view.form_values().amount) {
        run_conversion(api, view).await;
    }
}

/// Clipboard text for the current result, or `None` before the first
/// successful conversion.
pub fn copy_text<V: PageView>(view: V) -> Option<String> {
    let form = view.form_values();
    converter::clipboard_text(&form.amount, &form.from, &form.to, view.last_result().as_ref())
}

/// Runs the page's load sequence and sets the status from how it went.
pub async fn initialize<A: ConverterApi, V: PageView>(api: &A, mut view: V) {
    match startup::start(api, &mut view, DEFAULT_BASE).await {
        Ok(()) => view.set_status(ApiStatus::Online),
        Err(e) => {
            error!("Initialization error: {}", e);
            view.set_status(ApiStatus::Offline);
            view.show_error(INIT_FAILED.to_string());
        }
    }
}

/// Polls the API forever, updating the status indicator after each check.
pub async fn poll_status<A: ConverterApi, V: PageView>(api: &A, mut view: V) {
    loop {
        crate::compat::sleep(status::STATUS_POLL_INTERVAL).await;
        view.set_status(status::check(api).await);
    }
}

#[cfg(test)]
mod tests {
    use api::ApiError;
    use api::ConversionResult;
    use api::RatesSnapshot;

    use super::*;
    use crate::converter::tests::FakeApi;
    use crate::page_view::tests::RecordingView;

    fn replying(result: f64) -> FakeApi {
        FakeApi {
            convert_reply: Some(Ok(ConversionResult { result })),
            ..FakeApi::default()
        }
    }

    #[tokio::test]
    async fn converts_and_shows_the_result() {
        let api = replying(85.0);
        let mut view = RecordingView::with_form("100", "USD", "EUR");

        run_conversion(&api, &mut view).await;

        assert_eq!(api.calls(), ["convert 100 USD EUR"]);
        assert_eq!(view.summary(), Some("100.00 USD = 85.00 EUR"));
        assert_eq!(view.last_result, Some(ConversionResult { result: 85.0 }));
        assert!(!view.loading);
    }

    #[tokio::test]
    async fn invalid_amount_never_reaches_the_network() {
        for amount in ["0", "ten", "", "-5"] {
            let api = replying(1.0);
            let mut view = RecordingView::with_form(amount, "USD", "EUR");

            run_conversion(&api, &mut view).await;

            assert!(api.calls().is_empty(), "{amount:?}");
            assert_eq!(view.error(), Some("Please enter a valid amount greater than 0"));
            assert_eq!(view.events, ["error"]);
        }
    }

    #[tokio::test]
    async fn same_currency_never_reaches_the_network() {
        let api = replying(1.0);
        let mut view = RecordingView::with_form("100", "USD", "USD");

        run_conversion(&api, &mut view).await;

        assert!(api.calls().is_empty());
        assert_eq!(
            view.error(),
            Some("Please select different currencies for conversion")
        );
    }

    #[tokio::test]
    async fn failed_conversion_releases_loading() {
        let api = FakeApi::default();
        let mut view = RecordingView::with_form("5", "USD", "EUR");

        run_conversion(&api, &mut view).await;

        assert_eq!(view.events, ["loading on", "loading off", "error"]);
        assert!(!view.loading);
        assert_eq!(view.error(), Some("Conversion failed: HTTP 500"));
        assert_eq!(view.last_result, None);
    }

    #[tokio::test]
    async fn error_replaces_an_earlier_result() {
        let mut view = RecordingView::with_form("100", "USD", "EUR");
        run_conversion(&replying(85.0), &mut view).await;
        assert!(view.summary().is_some());

        let api = FakeApi {
            convert_reply: Some(Err(ApiError::Application("Invalid amount".to_string()))),
            ..FakeApi::default()
        };
        run_conversion(&api, &mut view).await;

        assert_eq!(view.summary(), None);
        assert_eq!(view.error(), Some("Conversion failed: Invalid amount"));
    }

    #[tokio::test]
    async fn reverse_swaps_and_converts() {
        let api = replying(117.5);
        let mut view = RecordingView::with_form("100", "USD", "EUR");

        reverse(&api, &mut view).await;

        assert_eq!((view.form.from.as_str(), view.form.to.as_str()), ("EUR", "USD"));
        assert_eq!(api.calls(), ["convert 100 EUR USD"]);
        assert_eq!(view.summary(), Some("100.00 EUR = 117.50 USD"));
    }

    #[tokio::test]
    async fn reverse_with_empty_amount_only_swaps() {
        let api = replying(1.0);
        let mut view = RecordingView::with_form("", "GBP", "JPY");

        reverse(&api, &mut view).await;

        assert_eq!((view.form.from.as_str(), view.form.to.as_str()), ("JPY", "GBP"));
        assert!(api.calls().is_empty());
        assert_eq!(view.events, ["swap"]);
    }

    #[tokio::test]
    async fn copy_text_follows_the_current_fields() {
        let mut view = RecordingView::with_form("100", "USD", "EUR");
        assert_eq!(copy_text(&mut view), None);

        run_conversion(&replying(85.5), &mut view).await;
        view.form.amount = "100.0".to_string();

        assert_eq!(copy_text(&mut view).as_deref(), Some("100.0 USD = 85.5 EUR"));
    }

    #[tokio::test]
    async fn base_change_only_touches_the_table() {
        let api = FakeApi {
            rates_reply: Some(Ok([("USD", 1.18)].into_iter().collect::<RatesSnapshot>())),
            ..FakeApi::default()
        };
        let mut view = RecordingView::default();

        load_rates(&api, &mut view, "EUR").await;

        assert_eq!(api.calls(), ["rates EUR"]);
        assert_eq!(view.events, ["rates", "rates"]);
        assert!(matches!(view.rates, RatesTable::Rows(ref rows) if rows.len() == 1));
        assert_eq!(view.outcome, None);
    }

    #[tokio::test]
    async fn failed_load_marks_offline_and_keeps_the_catalog() {
        let api = FakeApi {
            catalog: Some([("USD", "US Dollar"), ("EUR", "Euro")].into_iter().collect()),
            rates_reply: Some(Ok(RatesSnapshot::default())),
            convert_reply: Some(Err(ApiError::Transport("connection refused".to_string()))),
            ..FakeApi::default()
        };
        let mut view = RecordingView::default();

        initialize(&api, &mut view).await;

        assert_eq!(view.status, ApiStatus::Offline);
        assert_eq!(view.error(), Some(INIT_FAILED));
        assert_eq!(view.catalog.len(), 2);
        assert_eq!(view.rates, RatesTable::Rows(Vec::new()));
    }

    #[tokio::test]
    async fn successful_load_marks_online() {
        let api = FakeApi {
            catalog: Some([("USD", "US Dollar"), ("EUR", "Euro")].into_iter().collect()),
            rates_reply: Some(Ok(RatesSnapshot::default())),
            convert_reply: Some(Ok(ConversionResult { result: 0.85 })),
            ..FakeApi::default()
        };
        let mut view = RecordingView::default();

        initialize(&api, &mut view).await;

        assert_eq!(view.status, ApiStatus::Online);
        assert_eq!(view.summary(), Some("1.00 USD = 0.85 EUR"));
    }
}
