//! UI state for the marketing pages.
//!
//! Plain state types for the accordion, header menus, plan selection and
//! scroll reveal. Pages own these and render from them; none of them is
//! shared between requests.

mod accordion;
mod menus;
mod query;
mod reveal;
mod view;

pub use accordion::FaqAccordion;
pub use menus::NavMenus;
pub use query::PricingQuery;
pub use reveal::{
    DEFAULT_REVEAL_THRESHOLD, HEADER_SCROLL_THRESHOLD_PX, HeaderScroll, RevealLatch,
};
pub use view::{PRICING_PATH, PlanSelection, PricingView};
