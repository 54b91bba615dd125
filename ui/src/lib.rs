// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod controller;
pub mod converter;
pub mod debounce;
mod hooks;
pub mod number_format;
pub mod page_view;
pub mod rates_table;
mod screens;
pub mod startup;
pub mod status;

use api::HttpConverterApi;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::pico::Grid;
use components::status_indicator::StatusIndicator;
use rates_table::RatesTable;
use rates_table::DEFAULT_BASE;
use screens::converter::ConverterScreen;
use screens::rates::RatesScreen;
use startup::FormValues;
use status::ApiStatus;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    .app-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    /* --- STATUS INDICATOR --- */
    .api-status.status-online { color: var(--pico-ins-color); }
    .api-status.status-offline { color: var(--pico-del-color); }
    .api-status.status-unknown { color: var(--pico-muted-color); }
    .status-dot { margin-right: 0.25rem; }

    /* --- CONVERTER --- */
    .currency-pair {
        display: flex;
        gap: 1rem;
        align-items: flex-end;
    }
    .currency-pair > label { flex: 1; }
    .currency-pair > button { margin-bottom: var(--pico-spacing); }

    .result-panel, .error-panel {
        margin-top: 1rem;
        padding: 1rem;
        border-radius: var(--pico-border-radius);
    }
    .result-panel { border: 1px solid var(--pico-ins-color); }
    .result-panel h4 { margin-bottom: 0.25rem; }
    .rate-line { color: var(--pico-muted-color); }
    .error-panel {
        border: 1px solid var(--pico-del-color);
        color: var(--pico-del-color);
    }

    .copy-button.copied {
        background-color: var(--pico-ins-color);
        border-color: var(--pico-ins-color);
    }

    /* --- RATES TABLE --- */
    .rate-cell { text-align: right; }
    .rates-error {
        text-align: center;
        color: var(--pico-del-color);
        padding: 1.5rem 0;
    }
    .currency-badge {
        padding: 0.1rem 0.5rem;
        border-radius: 1rem;
        background-color: var(--pico-primary-background);
        color: var(--pico-primary-inverse);
        font-size: 0.8rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{page_css}"
        }
        AppBody {}
    }
}

/// Creates the page state, starts the load sequence and the status poller,
/// and lays out the two cards.
#[component]
fn AppBody() -> Element {
    let api = use_hook(|| HttpConverterApi::new(compat::api_base_url()));
    let app_state = use_context_provider(|| AppState::new(api));

    let form = FormValues::default();
    let catalog = use_signal(Default::default);
    let amount = use_signal(|| form.amount.clone());
    let from = use_signal(|| form.from.clone());
    let to = use_signal(|| form.to.clone());
    let base = use_signal(|| DEFAULT_BASE.to_string());
    let loading = use_signal(|| false);
    let status = use_signal(ApiStatus::default);
    let outcome = use_signal(|| None);
    let last_conversion = use_signal(|| None);
    let rates = use_signal(RatesTable::default);

    let state = use_context_provider(|| AppStateMut {
        catalog,
        amount,
        from,
        to,
        base,
        loading,
        status,
        outcome,
        last_conversion,
        rates,
    });

    {
        let api = app_state.api.clone();
        use_future(move || {
            let api = api.clone();
            async move { controller::initialize(&api, state).await }
        });
    }
    hooks::use_status_poller(app_state.api.clone(), state);

    rsx! {
        Container {
            header {
                class: "app-header",
                h1 { style: "margin: 0; font-size: 1.75rem;", "Currency Converter" }
                StatusIndicator { status: state.status }
            }
            Grid {
                ConverterScreen {}
                RatesScreen {}
            }
        }
    }
}
