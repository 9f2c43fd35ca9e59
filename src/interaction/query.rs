//! Query-string schema of the pricing page.
//!
//! [`PricingQuery`] is decoded by the handler and encoded by
//! [`PricingView::query_string`], so links and requests share one format.
//! Each field is parsed on its own: a value that does not parse becomes
//! `None` without discarding the rest of the query.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::content::{DEFAULT_SELECTED_PLAN, faqs, pricing_plans};
use crate::models::Dropdown;

use super::{FaqAccordion, PlanSelection, PricingView};

/// Query parameters of `GET /pricing`.
///
/// Flags are on when their value is `1`. Fields serialize in declaration
/// order and `None` fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuery {
    /// Index of the expanded FAQ entry.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub faq: Option<usize>,
    /// Selected plan id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Products dropdown flag.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub products: Option<u8>,
    /// About dropdown flag.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub about: Option<u8>,
    /// Mobile menu flag.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub menu: Option<u8>,
}

/// Reads the raw value and keeps it only if it parses as `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| raw.trim().parse().ok()))
}

impl From<PricingQuery> for PricingView {
    fn from(query: PricingQuery) -> Self {
        let mut view = PricingView {
            faq: FaqAccordion::restore(query.faq, faqs().len()),
            plan: PlanSelection::resolve(&pricing_plans(), query.plan.as_deref()),
            ..PricingView::default()
        };

        view.menus.set_open(Dropdown::Products, query.products == Some(1));
        view.menus.set_open(Dropdown::About, query.about == Some(1));
        if query.menu == Some(1) {
            view.menus.open_mobile();
        }

        view
    }
}

impl From<&PricingView> for PricingQuery {
    fn from(view: &PricingView) -> Self {
        let flag = |on: bool| on.then_some(1);
        let plan = view.plan.selected();

        Self {
            faq: view.faq.open_index(),
            plan: (plan != DEFAULT_SELECTED_PLAN).then(|| plan.to_string()),
            products: flag(view.menus.is_open(Dropdown::Products)),
            about: flag(view.menus.is_open(Dropdown::About)),
            menu: flag(view.menus.is_mobile_open()),
        }
    }
}
