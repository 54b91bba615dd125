//! Shared building blocks of the converter page.
pub mod copy_button;
pub mod currency_select;
pub mod pico;
pub mod rates_table;
pub mod status_indicator;
