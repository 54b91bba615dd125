//! The page's load sequence: catalog, rates for the default base, then a
//! first conversion.

use api::ApiError;
use api::ConverterApi;
use dioxus_logger::tracing::info;

use crate::converter::ConversionRequest;
use crate::page_view::PageView;
use crate::rates_table::fetch_rates_table;
use crate::rates_table::RatesTable;

/// Shown when any step of the load sequence fails.
pub const INIT_FAILED: &str = "Failed to initialize application. Please refresh the page.";

/// The form values the first conversion runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub amount: String,
    pub from: String,
    pub to: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            amount: "1".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
        }
    }
}

/// Runs the load sequence, showing each step's result as soon as it has it.
///
/// The first request failure stops the steps after it; what is already on
/// the page stays there. The rates table reports its own failure and never
/// stops the sequence. An initial form that does not validate only shows the
/// validation message, since nothing was sent.
pub async fn start<A: ConverterApi, V: PageView>(
    api: &A,
    view: &mut V,
    base: &str,
) -> Result<(), ApiError> {
    view.set_loading(true);
    let catalog = api.currencies().await;
    view.set_loading(false);

    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            view.show_rates(RatesTable::Failed);
            return Err(e);
        }
    };
    info!("loaded {} currencies", catalog.len());
    view.show_catalog(catalog.clone());

    let rates = fetch_rates_table(api, base, &catalog).await;
    view.show_rates(rates);

    let form = view.form_values();
    let request = match ConversionRequest::validate(&form.amount, &form.from, &form.to) {
        Ok(request) => request,
        Err(e) => {
            view.show_error(e.to_string());
            return Ok(());
        }
    };

    view.set_loading(true);
    let sent = request.send(api).await;
    view.set_loading(false);

    view.show_conversion(&sent?);
    Ok(())
}
