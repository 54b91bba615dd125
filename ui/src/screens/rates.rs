//=============================================================================
// File: src/screens/rates.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Card;
use crate::components::rates_table::RatesTableBody;
use crate::controller;
use crate::rates_table::POPULAR_CURRENCIES;
use dioxus::prelude::*;

#[component]
pub fn RatesScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut base = state.base;
    let catalog = state.catalog.read();

    let api = app_state.api.clone();
    let change_base = use_callback(move |code: String| {
        base.set(code.clone());
        let api = api.clone();
        spawn(async move { controller::load_rates(&api, state, &code).await });
    });

    rsx! {
        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "Popular Rates" }
                select {
                    id: "baseCurrencySelect",
                    style: "width: auto; margin: 0;",
                    value: "{base}",
                    onchange: move |evt: FormEvent| change_base.call(evt.value()),
                    for code in POPULAR_CURRENCIES {
                        option {
                            key: "{code}",
                            value: "{code}",
                            selected: *base.read() == code,
                            {format!("{} - {}", code, catalog.display_name(code))}
                        }
                    }
                }
            }
            table {
                thead {
                    tr {
                        th { "Currency" }
                        th { "Code" }
                        th { style: "text-align: right;", "Rate" }
                    }
                }
                tbody {
                    RatesTableBody { table: state.rates }
                }
            }
        }
    }
}
