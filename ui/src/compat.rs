// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// The origin serving `/api/*`. Defaults to the page's own origin.
    pub fn api_base_url() -> String {
        if let Some(url) = option_env!("CONVERTER_API_URL") {
            return url.to_string();
        }
        web_sys::window()
            .and_then(|win| win.location().origin().ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// There is no system clipboard outside the browser build.
    pub async fn clipboard_set(_text: String) -> bool {
        dioxus_logger::tracing::debug!("clipboard is not available on this target");
        false
    }

    pub fn api_base_url() -> String {
        option_env!("CONVERTER_API_URL")
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }
}
