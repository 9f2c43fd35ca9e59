//! Per-page UI state for the pricing page.
//!
//! The page root owns a [`PricingView`] and hands it to the render
//! functions read-only. Events are expressed as links: each clickable
//! control points at the URL of the state that follows the click, built
//! with [`PricingView::href_after`].

use serde::Serialize;
use tracing::warn;

use crate::content::DEFAULT_SELECTED_PLAN;
use crate::models::PricingPlan;

use super::{FaqAccordion, NavMenus, PricingQuery};

/// The path the pricing page is served under.
pub const PRICING_PATH: &str = "/pricing";

/// The currently selected plan card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSelection {
    selected: String,
}

impl PlanSelection {
    /// Resolves a requested plan id against the available plans.
    ///
    /// Unknown or missing ids fall back to the default plan.
    pub fn resolve(plans: &[PricingPlan], requested: Option<&str>) -> Self {
        let selected = requested
            .and_then(|id| plans.iter().find(|plan| plan.id == id))
            .map(|plan| plan.id)
            .unwrap_or(DEFAULT_SELECTED_PLAN);

        Self {
            selected: selected.to_string(),
        }
    }

    /// The selected plan id.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Whether `plan` is the selected one.
    pub fn is_selected(&self, plan: &PricingPlan) -> bool {
        self.selected == plan.id
    }

    /// Handles a click on a plan's call-to-action button.
    pub fn select(&mut self, plan: &PricingPlan) {
        self.selected = plan.id.to_string();
    }
}

impl Default for PlanSelection {
    fn default() -> Self {
        Self {
            selected: DEFAULT_SELECTED_PLAN.to_string(),
        }
    }
}

/// Everything the pricing page's controls can change.
///
/// The header's scrolled look is not part of it: the server always renders
/// the top-of-page header and `site.js` applies [`HeaderScroll`] while the
/// user scrolls.
///
/// [`HeaderScroll`]: super::HeaderScroll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingView {
    /// FAQ accordion.
    pub faq: FaqAccordion,
    /// Header dropdowns and mobile menu.
    pub menus: NavMenus,
    /// Selected plan card.
    pub plan: PlanSelection,
}

impl Default for PricingView {
    fn default() -> Self {
        Self {
            faq: FaqAccordion::closed(),
            menus: NavMenus::new("pricing"),
            plan: PlanSelection::default(),
        }
    }
}

impl PricingView {
    /// Query string encoding the round-trippable parts of the state.
    ///
    /// Default values are omitted, so the initial state encodes as `""`.
    ///
    /// # Example
    ///
    /// ```
    /// use idms_site::interaction::PricingView;
    ///
    /// let mut view = PricingView::default();
    /// assert_eq!(view.query_string(), "");
    ///
    /// view.faq.toggle(2);
    /// view.menus.open_mobile();
    /// assert_eq!(view.query_string(), "faq=2&menu=1");
    /// ```
    pub fn query_string(&self) -> String {
        let query = PricingQuery::from(self);
        serde_urlencoded::to_string(&query).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to encode pricing state");
            String::new()
        })
    }

    /// URL of the page in this state.
    pub fn href(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            PRICING_PATH.to_string()
        } else {
            format!("{}?{}", PRICING_PATH, query)
        }
    }

    /// URL of the page after applying `event` to a copy of this state.
    ///
    /// # Example
    ///
    /// ```
    /// use idms_site::interaction::PricingView;
    ///
    /// let view = PricingView::default();
    /// assert_eq!(view.href_after(|v| v.faq.toggle(0)), "/pricing?faq=0");
    /// assert_eq!(view.href(), "/pricing");
    /// ```
    pub fn href_after(&self, event: impl FnOnce(&mut PricingView)) -> String {
        let mut next = self.clone();
        event(&mut next);
        next.href()
    }
}
