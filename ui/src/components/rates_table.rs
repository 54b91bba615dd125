use dioxus::prelude::*;

use crate::rates_table::RatesTable;

/// Body of the rates table: rows, a loading row, or the single error row.
#[component]
pub fn RatesTableBody(table: Signal<RatesTable>) -> Element {
    let body = match &*table.read() {
        RatesTable::Loading => rsx! {
            tr {
                td { colspan: "3", "aria-busy": "true", "Loading exchange rates..." }
            }
        },
        RatesTable::Failed => rsx! {
            tr {
                td {
                    colspan: "3",
                    class: "rates-error",
                    "⚠ Failed to load exchange rates"
                }
            }
        },
        RatesTable::Rows(rows) => rsx! {
            for row in rows.iter() {
                tr {
                    key: "{row.code}",
                    td { strong { "{row.name}" } }
                    td { span { class: "currency-badge", "{row.code}" } }
                    td {
                        class: "rate-cell",
                        strong { "{row.rate}" }
                        small { " {row.base}" }
                    }
                }
            }
        },
    };
    body
}
