//! What the page's event reactions read from and write to.
//!
//! In the app this is [`crate::app_state_mut::AppStateMut`], backed by
//! signals; tests use a plain struct.

use api::ConversionResult;
use api::CurrencyCatalog;

use crate::converter::Conversion;
use crate::rates_table::RatesTable;
use crate::startup::FormValues;
use crate::status::ApiStatus;

pub trait PageView {
    /// Snapshot of the amount field and the two selected currencies.
    fn form_values(&self) -> FormValues;

    fn catalog(&self) -> CurrencyCatalog;

    /// The result of the latest successful conversion, if any.
    fn last_result(&self) -> Option<ConversionResult>;

    fn swap_currencies(&mut self);

    fn set_loading(&mut self, on: bool);

    fn set_status(&mut self, status: ApiStatus);

    fn show_catalog(&mut self, catalog: CurrencyCatalog);

    fn show_rates(&mut self, table: RatesTable);

    fn show_conversion(&mut self, conversion: &Conversion);

    /// Replaces whatever the result area shows with `message`.
    fn show_error(&mut self, message: String);
}

impl<V: PageView + ?Sized> PageView for &mut V {
    fn form_values(&self) -> FormValues {
        (**self).form_values()
    }

    fn catalog(&self) -> CurrencyCatalog {
        (**self).catalog()
    }

    fn last_result(&self) -> Option<ConversionResult> {
        (**self).last_result()
    }

    fn swap_currencies(&mut self) {
        (**self).swap_currencies()
    }

    fn set_loading(&mut self, on: bool) {
        (**self).set_loading(on)
    }

    fn set_status(&mut self, status: ApiStatus) {
        (**self).set_status(status)
    }

    fn show_catalog(&mut self, catalog: CurrencyCatalog) {
        (**self).show_catalog(catalog)
    }

    fn show_rates(&mut self, table: RatesTable) {
        (**self).show_rates(table)
    }

    fn show_conversion(&mut self, conversion: &Conversion) {
        (**self).show_conversion(conversion)
    }

    fn show_error(&mut self, message: String) {
        (**self).show_error(message)
    }
}
