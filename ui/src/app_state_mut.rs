//! Defines the mutable, reactive state for the converter page.

use api::ConversionResult;
use api::CurrencyCatalog;
use dioxus::prelude::*;

use crate::converter::Conversion;
use crate::page_view::PageView;
use crate::rates_table::RatesTable;
use crate::startup::FormValues;
use crate::status::ApiStatus;

/// What the result area shows. Holding a single value keeps the result and
/// error panels mutually exclusive.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Converted { summary: String, rate_line: String },
    Error(String),
}

/// A reactive state provided as a Dioxus context.
///
/// Every field is a `Signal`, so the struct is `Copy` and can be moved into
/// any number of event handlers and spawned tasks.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub catalog: Signal<CurrencyCatalog>,
    pub amount: Signal<String>,
    pub from: Signal<String>,
    pub to: Signal<String>,
    pub base: Signal<String>,
    /// `true` while a catalog load or conversion is in flight.
    pub loading: Signal<bool>,
    pub status: Signal<ApiStatus>,
    /// `None` until the first conversion finishes, one way or the other.
    pub outcome: Signal<Option<Outcome>>,
    pub last_conversion: Signal<Option<ConversionResult>>,
    pub rates: Signal<RatesTable>,
}

impl From<&Conversion> for Outcome {
    fn from(conversion: &Conversion) -> Self {
        Self::Converted {
            summary: conversion.summary(),
            rate_line: conversion.rate_line(),
        }
    }
}

// Reads go through `peek` so that event reactions never subscribe.
impl PageView for AppStateMut {
    fn form_values(&self) -> FormValues {
        FormValues {
            amount: self.amount.peek().clone(),
            from: self.from.peek().clone(),
            to: self.to.peek().clone(),
        }
    }

    fn catalog(&self) -> CurrencyCatalog {
        self.catalog.peek().clone()
    }

    fn last_result(&self) -> Option<ConversionResult> {
        *self.last_conversion.peek()
    }

    fn swap_currencies(&mut self) {
        let from = self.from.peek().clone();
        let to = self.to.peek().clone();
        self.from.set(to);
        self.to.set(from);
    }

    fn set_loading(&mut self, on: bool) {
        self.loading.set(on);
    }

    fn set_status(&mut self, status: ApiStatus) {
        self.status.set(status);
    }

    fn show_catalog(&mut self, catalog: CurrencyCatalog) {
        self.catalog.set(catalog);
    }

    fn show_rates(&mut self, table: RatesTable) {
        self.rates.set(table);
    }

    fn show_conversion(&mut self, conversion: &Conversion) {
        self.last_conversion.set(Some(conversion.result));
        self.outcome.set(Some(Outcome::from(conversion)));
    }

    fn show_error(&mut self, message: String) {
        self.outcome.set(Some(Outcome::Error(message)));
    }
}
