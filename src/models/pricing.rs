//! Pricing plan and FAQ models.

use serde::Serialize;

use super::Icon;

/// Accent color of a pricing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanColor {
    /// Foundation tier.
    Blue,
    /// Strength tier.
    Green,
    /// Growth tier.
    Purple,
    /// Enterprise tier.
    Orange,
}

impl PlanColor {
    /// The card border class (e.g., `border-blue-500`).
    pub fn border_class(self) -> &'static str {
        match self {
            PlanColor::Blue => "border-blue-500",
            PlanColor::Green => "border-green-500",
            PlanColor::Purple => "border-purple-500",
            PlanColor::Orange => "border-orange-500",
        }
    }

    /// The icon text class matching the border (e.g., `text-blue-500`).
    pub fn text_class(self) -> &'static str {
        match self {
            PlanColor::Blue => "text-blue-500",
            PlanColor::Green => "text-green-500",
            PlanColor::Purple => "text-purple-500",
            PlanColor::Orange => "text-orange-500",
        }
    }
}

/// A plan card on the pricing page.
///
/// Plans are defined once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    /// Plan identifier (e.g., "strength").
    pub id: &'static str,
    /// Display name, upper-cased in the source data.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Price as displayed, including the currency symbol.
    pub price: &'static str,
    /// Billing period shown after the slash (e.g., "month").
    pub period: &'static str,
    /// Optional qualifier under the price (e.g., "(Upto 100 Users)").
    pub additional_price: Option<&'static str>,
    /// Feature bullet points, in display order.
    pub features: Vec<&'static str>,
    /// Whether the card carries the "Most Popular" badge.
    pub highlighted: bool,
    /// Accent color.
    pub color: PlanColor,
    /// Card icon.
    pub icon: Icon,
}

impl PricingPlan {
    /// Label of the call-to-action button.
    ///
    /// ```
    /// use idms_site::content::pricing_plans;
    ///
    /// let plans = pricing_plans();
    /// assert_eq!(plans[0].cta_label(), "Get Started");
    /// assert_eq!(plans[3].cta_label(), "Contact Sales");
    /// ```
    pub fn cta_label(&self) -> &'static str {
        if self.id == "enterprise" {
            "Contact Sales"
        } else {
            "Get Started"
        }
    }
}

/// A question and answer pair in the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// The question shown in the accordion header.
    pub question: &'static str,
    /// The answer revealed when the entry is open.
    pub answer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_class_mirrors_border_class() {
        for color in [
            PlanColor::Blue,
            PlanColor::Green,
            PlanColor::Purple,
            PlanColor::Orange,
        ] {
            assert_eq!(
                color.border_class().replace("border-", "text-"),
                color.text_class()
            );
        }
    }
}
