//! Core data models for the IDMS marketing site.
//!
//! This module contains the read-only records the pages render from.

mod navigation;
mod payslip;
mod pricing;
mod product;

pub use navigation::{Dropdown, Icon, Link, NavItem, ProductItem};
pub use payslip::{CompanyInfo, PayItem, PayslipData};
pub use pricing::{FaqEntry, PlanColor, PricingPlan};
pub use product::ProductParams;
