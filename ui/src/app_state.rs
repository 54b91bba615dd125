use api::HttpConverterApi;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub api: HttpConverterApi,
}

/// Stable, non-reactive state shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(api: HttpConverterApi) -> Self {
        Self(Arc::new(AppStateData { api }))
    }
}
