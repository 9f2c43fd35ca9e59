//! Pricing plans and FAQ entries.

use crate::models::{FaqEntry, Icon, PlanColor, PricingPlan};

/// The plan selected when the page first loads.
pub const DEFAULT_SELECTED_PLAN: &str = "strength";

/// The four plan cards, in display order.
pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "foundation",
            name: "FOUNDATION",
            description: "For companies that are just getting started with data automation",
            price: "₹9,999",
            period: "month",
            additional_price: Some("(Upto 100 Users)"),
            features: vec![
                "Data Management & Storage",
                "Basic Analytics & Reporting",
                "User Management (Up to 100)",
                "Document Management",
                "Basic Security Features",
                "Email Support",
                "Mobile App Access",
                "Basic Integrations",
                "Data Backup & Recovery",
                "Standard Compliance",
            ],
            highlighted: false,
            color: PlanColor::Blue,
            icon: Icon::Database,
        },
        PricingPlan {
            id: "strength",
            name: "STRENGTH",
            description: "Scaling with advanced automation & data insights",
            price: "₹12,999",
            period: "month",
            additional_price: Some("(Upto 100 Users)"),
            features: vec![
                "All Foundation Features+",
                "Advanced Analytics & BI",
                "Custom Dashboards",
                "Advanced Security & Compliance",
                "API Access & Webhooks",
                "Priority Support",
                "Advanced Integrations",
                "Data Visualization Tools",
                "Custom Reports Builder",
                "Advanced User Roles",
                "Audit Logs & Monitoring",
                "Performance Optimization",
            ],
            highlighted: true,
            color: PlanColor::Green,
            icon: Icon::BarChart3,
        },
        PricingPlan {
            id: "growth",
            name: "GROWTH",
            description: "With in-built performance management and business intelligence",
            price: "₹15,999",
            period: "month",
            additional_price: Some("(Upto 100 Users)"),
            features: vec![
                "All Strength Features+",
                "AI-Powered Insights",
                "Predictive Analytics",
                "Custom Workflows",
                "Advanced Data Processing",
                "Real-time Collaboration",
                "White-label Solutions",
                "Dedicated Account Manager",
                "Custom Training",
                "SLA Guarantee",
                "Advanced Compliance Tools",
                "Enterprise Security",
            ],
            highlighted: false,
            color: PlanColor::Purple,
            icon: Icon::TrendingUp,
        },
        PricingPlan {
            id: "enterprise",
            name: "ENTERPRISE",
            description: "Custom solutions for large organizations",
            price: "Custom",
            period: "pricing",
            additional_price: None,
            features: vec![
                "All Growth Features+",
                "Unlimited Users",
                "Custom Development",
                "On-premise Deployment",
                "24/7 Dedicated Support",
                "Custom Integrations",
                "Advanced Security Controls",
                "Compliance Management",
                "Data Governance Tools",
                "Multi-tenant Architecture",
                "Custom Branding",
                "Training & Consulting",
            ],
            highlighted: false,
            color: PlanColor::Orange,
            icon: Icon::Building,
        },
    ]
}

/// The FAQ accordion entries, in display order.
pub fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Who has access to data and other sensitive information?",
            answer: "IDMS provides robust privacy controls to ensure your data remains secure. Access is restricted to authorized personnel within your organization, and our support team can only view data if explicitly granted permission by you. This level of privacy control is unique to IDMS, setting us apart in the industry.",
        },
        FaqEntry {
            question: "Is there a setup or implementation fee?",
            answer: "Yes, a nominal setup fee applies to cover IDMS's comprehensive onboarding process. This includes guided configuration of data management, importing existing data, validating data integrity, and customizing features to suit your needs. Our expert-led onboarding ensures a seamless transition and helps you maximize the platform's potential from day one.",
        },
        FaqEntry {
            question: "Can IDMS assist with best practices for data management and compliance?",
            answer: "IDMS provides pre-configured, industry-standard data management structures and can assist with setting up compliance frameworks as part of the onboarding process—at no additional cost. We also offer recommendations for data policies, security management, and other data operations. While we provide guidance, we encourage you to customize these policies to align with your organization's unique needs.",
        },
        FaqEntry {
            question: "What kind of support do you provide?",
            answer: "We offer comprehensive support including email support for Foundation plans, priority support for Strength and Growth plans, and dedicated 24/7 support for Enterprise customers. Our support team includes data management experts who can help with implementation, troubleshooting, and best practices.",
        },
        FaqEntry {
            question: "Can I upgrade or downgrade my plan anytime?",
            answer: "Yes, you can upgrade your plan anytime to access more features. Downgrades are available at the end of your current billing cycle. We also offer prorated billing for mid-cycle upgrades to ensure you only pay for what you use.",
        },
        FaqEntry {
            question: "Do you offer custom integrations?",
            answer: "Yes, we offer a wide range of pre-built integrations with popular business tools. For custom integrations, our Enterprise plan includes custom development services. We also provide API access and webhooks for advanced integration needs.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let highlighted: Vec<_> = pricing_plans()
            .into_iter()
            .filter(|plan| plan.highlighted)
            .map(|plan| plan.id)
            .collect();
        assert_eq!(highlighted, vec![DEFAULT_SELECTED_PLAN]);
    }

    #[test]
    fn test_enterprise_has_no_qualifier() {
        let plans = pricing_plans();
        let enterprise = plans.iter().find(|plan| plan.id == "enterprise").unwrap();
        assert_eq!(enterprise.additional_price, None);
        assert_eq!(enterprise.price, "Custom");
    }

    #[test]
    fn test_six_faqs() {
        assert_eq!(faqs().len(), 6);
    }
}
