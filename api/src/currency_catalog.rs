//! The code→name mapping of supported currencies.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// All currencies the backend knows about, keyed by ISO code.
///
/// Iteration is in code order, which is also the order the selection
/// controls list them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCatalog(BTreeMap<String, String>);

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts or replaces the name for `code`.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.0.insert(code.into(), name.into());
    }

    /// Returns the human-readable name for `code`, if known.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Returns the name for `code`, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    /// The label used for a selectable option, e.g. `"EUR - Euro"`.
    pub fn option_label(code: &str, name: &str) -> String {
        format!("{} - {}", code, name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(code, name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for CurrencyCatalog {
    fn from_iter<T: IntoIterator<Item = (C, N)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        )
    }
}
