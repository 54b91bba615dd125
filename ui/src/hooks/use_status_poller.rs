use api::ConverterApi;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::controller;

/// Keeps `state.status` current by re-checking the API on a fixed interval
/// for as long as the calling component is mounted.
pub fn use_status_poller<A>(api: A, state: AppStateMut)
where
    A: ConverterApi + Clone + 'static,
{
    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let api = api.clone();
        async move { controller::poll_status(&api, state).await }
    });
}
