//! Server-rendered pages.
//!
//! Every page is a pure function from its inputs to [`maud::Markup`];
//! handlers in [`crate::api`] only gather those inputs.

mod components;
mod footer;
mod header;
mod not_found;
mod payslip;
mod pricing;
mod product;

pub use components::{
    SCRIPT_PATH, STYLESHEET_PATH, animated_on_scroll, classes, document, icon,
};
pub use footer::footer;
pub use header::{header, mega_dropdown};
pub use not_found::not_found_page;
pub use payslip::payslip_page;
pub use pricing::pricing_page;
pub use product::product_page;
