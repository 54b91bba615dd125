//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Outcome;
use crate::components::copy_button::CopyButton;
use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::controller;
use crate::debounce::Debouncer;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

#[component]
pub fn ConverterScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_context::<AppStateMut>();
    let mut amount = state.amount;
    let debouncer = use_hook(Debouncer::default);

    // Every trigger funnels into this one callback.
    let convert = {
        let api = app_state.api.clone();
        use_callback(move |_: ()| {
            let api = api.clone();
            spawn(async move { controller::run_conversion(&api, state).await });
        })
    };

    let reverse = {
        let api = app_state.api.clone();
        use_callback(move |_: ()| {
            let api = api.clone();
            spawn(async move { controller::reverse(&api, state).await });
        })
    };

    let copy_text = use_callback(move |_: ()| controller::copy_text(state));

    let loading = (state.loading)();

    rsx! {
        Card {
            h3 { "Convert" }
            label {
                r#for: "amount",
                "Amount"
                input {
                    id: "amount",
                    r#type: "number",
                    min: "0",
                    step: "any",
                    placeholder: "Enter amount",
                    value: "{amount}",
                    oninput: move |evt: FormEvent| {
                        amount.set(evt.value());
                        let debouncer = debouncer.clone();
                        spawn(async move {
                            if debouncer.settle().await {
                                convert.call(());
                            }
                        });
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            convert.call(());
                        }
                    },
                }
            }
            div {
                class: "currency-pair",
                CurrencySelect {
                    label: "From".to_string(),
                    id: "fromCurrency".to_string(),
                    selected: state.from,
                    catalog: state.catalog,
                    on_change: move |_| convert.call(()),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    title: "Swap currencies".to_string(),
                    on_click: move |_| reverse.call(()),
                    "⇄"
                }
                CurrencySelect {
                    label: "To".to_string(),
                    id: "toCurrency".to_string(),
                    selected: state.to,
                    catalog: state.catalog,
                    on_change: move |_| convert.call(()),
                }
            }
            Button {
                disabled: loading,
                on_click: move |_| convert.call(()),
                if loading {
                    span { "aria-busy": "true", "Converting..." }
                } else {
                    "Convert Currency"
                }
            }
            match (state.outcome)() {
                Some(Outcome::Converted { summary, rate_line }) => rsx! {
                    section {
                        class: "result-panel",
                        h4 { "{summary}" }
                        p { class: "rate-line", "{rate_line}" }
                        CopyButton { text: copy_text }
                    }
                },
                Some(Outcome::Error(message)) => rsx! {
                    section {
                        class: "error-panel",
                        role: "alert",
                        "{message}"
                    }
                },
                None => rsx! {},
            }
        }
    }
}
