use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

/// How long the "Copied!" confirmation stays up.
const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Copies whatever `text` produces to the clipboard.
///
/// When `text` yields `None`, or the write fails, nothing visible happens.
#[component]
pub fn CopyButton(text: Callback<(), Option<String>>) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        button {
            class: if copied() { "copy-button copied" } else { "copy-button secondary outline" },
            onclick: move |_| {
                let Some(content) = text.call(()) else {
                    return;
                };
                spawn(async move {
                    if compat::clipboard_set(content).await {
                        copied.set(true);
                        compat::sleep(FEEDBACK_DURATION).await;
                        copied.set(false);
                    }
                });
            },
            if copied() { "✓ Copied!" } else { "Copy" }
        }
    }
}
