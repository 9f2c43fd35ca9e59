//! Literal site content.
//!
//! Everything the pages render comes from here: navigation, the product
//! catalogue, pricing plans, FAQ entries and the mock payslip. The data is
//! rebuilt on each call and never mutated.

mod navigation;
mod payslip;
mod pricing;

pub use navigation::{FooterColumn, about_links, detailed_products, footer_columns, nav_items};
pub use payslip::mock_payslip;
pub use pricing::{DEFAULT_SELECTED_PLAN, faqs, pricing_plans};
