//! Calculation logic for the IDMS marketing site.
//!
//! This module contains the little arithmetic and text shaping the pages
//! need: payslip totals and net pay, currency formatting, product slug
//! titles, and the column and row layout helpers.

mod currency;
mod layout;
mod payslip_totals;
mod slug;

pub use currency::{CURRENCY_SYMBOL, format_currency};
pub use layout::{pad_rows, split_columns};
pub use payslip_totals::{PayslipTotals, sum_items};
pub use slug::{SLUG_SEPARATOR, title_from_slug};
