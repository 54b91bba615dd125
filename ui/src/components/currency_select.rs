// ui/src/components/currency_select.rs
#![allow(non_snake_case)]

use api::CurrencyCatalog;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    pub label: String,
    pub id: String,
    /// A signal holding the code of the selected currency, `""` for none.
    pub selected: Signal<String>,
    /// The currencies to offer. Options are rebuilt whenever it changes.
    pub catalog: Signal<CurrencyCatalog>,
    /// Called with the new code after `selected` has been updated.
    #[props(optional)]
    pub on_change: Option<EventHandler<String>>,
}

/// A labelled `<select>` of currencies. The first option is an empty
/// placeholder that stays in place whatever the catalog holds.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    let mut selected = props.selected;
    let on_change = props.on_change;
    let catalog = props.catalog.read();
    let current = selected.read().clone();

    rsx! {
        label {
            r#for: "{props.id}",
            "{props.label}"
            select {
                id: "{props.id}",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    let code = evt.value();
                    selected.set(code.clone());
                    if let Some(handler) = &on_change {
                        handler.call(code);
                    }
                },
                option {
                    value: "",
                    selected: current.is_empty(),
                    "Select currency"
                }
                for (code, name) in catalog.iter() {
                    option {
                        key: "{code}",
                        value: "{code}",
                        selected: current == code,
                        {CurrencyCatalog::option_label(code, name)}
                    }
                }
            }
        }
    }
}
