use dioxus::prelude::*;

use crate::status::ApiStatus;

/// Coloured dot plus "Online"/"Offline" text.
#[component]
pub fn StatusIndicator(status: Signal<ApiStatus>) -> Element {
    let status = status();
    rsx! {
        small {
            class: "api-status {status.class()}",
            span { class: "status-dot", "●" }
            " API status: "
            strong { "{status.label()}" }
        }
    }
}
