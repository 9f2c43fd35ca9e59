//! Pricing page: hero, plan cards, FAQ accordion and call-to-action.

use maud::{Markup, html};

use crate::config::SiteMetadata;
use crate::content::{faqs, pricing_plans};
use crate::interaction::{PricingView, RevealLatch};
use crate::models::{FaqEntry, Icon, PricingPlan};

use super::components::{animated_on_scroll, classes, document, icon};
use super::footer::footer;
use super::header::header;

/// Threshold used by the call-to-action regions.
const CTA_REVEAL_THRESHOLD: f64 = 0.3;

/// Renders the complete pricing page for the given UI state.
pub fn pricing_page(site: &SiteMetadata, view: &PricingView, year: i32) -> Markup {
    let body = html! {
        div class="min-h-screen bg-gray-50" {
            (header(site, view))
            main {
                (hero())
                (plans_section(view))
                (faq_section(view))
                (cta_section())
            }
            (footer(site, year))
        }
    };

    document(&format!("Pricing | {}", site.name), "", body)
}

fn hero() -> Markup {
    let reveal = RevealLatch::default();

    html! {
        section class="pt-32 pb-20 bg-gradient-to-br from-blue-50 to-cyan-100" {
            div class="container mx-auto px-4 text-center" {
                (animated_on_scroll(&reveal, "animate-fade-in-down", "delay-0", html! {
                    h1 class="text-5xl md:text-6xl font-extrabold text-gray-900 leading-tight mb-6" {
                        "Awesome doesn't have to be "
                        span class="text-blue-600" { "expensive" }
                    }
                }))
                (animated_on_scroll(&reveal, "animate-fade-in-up", "delay-200", html! {
                    p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto" {
                        "Loved by companies with 20 - 20,000 employees"
                    }
                }))
                (animated_on_scroll(&reveal, "animate-fade-in-up", "delay-400", html! {
                    p class="text-lg text-gray-500 mb-12" {
                        "Global presence spanning across 150 countries"
                    }
                }))
            }
        }
    }
}

fn plans_section(view: &PricingView) -> Markup {
    let reveal = RevealLatch::default();

    html! {
        section class="py-20 bg-white" {
            div class="container mx-auto px-4" {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8" {
                    @for (index, plan) in pricing_plans().iter().enumerate() {
                        (animated_on_scroll(
                            &reveal,
                            "animate-slide-up",
                            &format!("delay-{}", index * 200),
                            plan_card(plan, view),
                        ))
                    }
                }
            }
        }
    }
}

fn plan_card(plan: &PricingPlan, view: &PricingView) -> Markup {
    let emphasis = if plan.highlighted {
        "transform scale-105 ring-4 ring-green-200"
    } else {
        ""
    };
    let button = if plan.highlighted {
        "bg-green-500 text-white hover:bg-green-600 transform hover:scale-105"
    } else {
        "bg-gray-100 text-gray-700 hover:bg-gray-200"
    };
    let selected = view.plan.is_selected(plan);

    html! {
        div class=(classes(&[
            "relative p-8 bg-white rounded-2xl shadow-lg border-2",
            plan.color.border_class(),
            "hover:shadow-xl transition-all duration-300",
            emphasis,
        ])) data-plan=(plan.id) {
            @if plan.highlighted {
                div class="absolute -top-4 left-1/2 transform -translate-x-1/2" {
                    div class="bg-green-500 text-white px-4 py-2 rounded-full text-sm font-semibold" {
                        "Most Popular"
                    }
                }
            }
            div class="text-center mb-8" {
                (icon(plan.icon, &classes(&["w-12 h-12 mx-auto mb-4", plan.color.text_class()])))
                h3 class="text-2xl font-bold text-gray-900 mb-2" { (plan.name) }
                p class="text-gray-600 mb-4" { (plan.description) }
                div class="mb-2" {
                    span class="text-4xl font-bold text-gray-900" { (plan.price) }
                    span class="text-gray-600" { "/" (plan.period) }
                }
                @if let Some(qualifier) = plan.additional_price {
                    p class="text-sm text-gray-500" { (qualifier) }
                }
            }
            ul class="space-y-4 mb-8" {
                @for feature in &plan.features {
                    li class="flex items-start" {
                        (icon(Icon::Check, "w-5 h-5 text-green-500 mr-3 mt-0.5 flex-shrink-0"))
                        span class="text-gray-700" { (feature) }
                    }
                }
            }
            a href=(view.href_after(|v| v.plan.select(plan)))
                role="button"
                aria-pressed=(if selected { "true" } else { "false" })
                class=(classes(&[
                    "block text-center w-full py-3 px-6 rounded-full font-semibold transition-all duration-300",
                    button,
                ]))
            {
                (plan.cta_label())
            }
        }
    }
}

fn faq_section(view: &PricingView) -> Markup {
    let reveal = RevealLatch::default();

    html! {
        section class="py-20 bg-gray-50" {
            div class="container mx-auto px-4" {
                (animated_on_scroll(&reveal, "animate-slide-up", "delay-0", html! {
                    h2 class="text-3xl font-bold text-center text-gray-800 mb-12" {
                        "Frequently asked questions"
                    }
                }))
                div class="max-w-4xl mx-auto" {
                    @for (index, faq) in faqs().iter().enumerate() {
                        (animated_on_scroll(
                            &reveal,
                            "animate-slide-up",
                            &format!("delay-{}", index * 100),
                            faq_item(index, faq, view),
                        ))
                    }
                }
            }
        }
    }
}

fn faq_item(index: usize, faq: &FaqEntry, view: &PricingView) -> Markup {
    let open = view.faq.is_open(index);
    let rotation = if open { "rotate-90" } else { "" };

    html! {
        div class="bg-white rounded-lg shadow-md mb-4" id=(format!("faq-{}", index)) {
            a href=(format!("{}#faq-{}", view.href_after(|v| v.faq.toggle(index)), index))
                class="w-full p-6 text-left flex justify-between items-center hover:bg-gray-50 transition-colors"
                aria-expanded=(if open { "true" } else { "false" })
            {
                span class="text-lg font-semibold text-gray-900" { (faq.question) }
                (icon(Icon::ChevronRight, &classes(&["w-5 h-5 text-gray-500 transition-transform", rotation])))
            }
            @if open {
                div class="px-6 pb-6" {
                    p class="text-gray-600 leading-relaxed" { (faq.answer) }
                }
            }
        }
    }
}

fn cta_section() -> Markup {
    let reveal = RevealLatch::new(CTA_REVEAL_THRESHOLD);

    html! {
        section class="py-20 bg-blue-600" {
            div class="container mx-auto px-4 text-center" {
                (animated_on_scroll(&reveal, "animate-slide-up", "delay-0", html! {
                    h2 class="text-4xl font-bold text-white mb-4" {
                        "Not sure which plan is right for you?"
                    }
                }))
                (animated_on_scroll(&reveal, "animate-slide-up", "delay-200", html! {
                    p class="text-xl text-blue-100 mb-8" {
                        "Give us a call and we'll help you choose the perfect plan for your needs."
                    }
                }))
                (animated_on_scroll(&reveal, "animate-slide-up", "delay-400", html! {
                    div class="flex flex-col sm:flex-row justify-center gap-4" {
                        a href="tel:+91-89292-08062" class="px-8 py-4 bg-white text-blue-600 text-lg font-semibold rounded-full shadow-xl hover:bg-gray-100 transition-all transform hover:scale-105 flex items-center justify-center" {
                            (icon(Icon::Phone, "w-5 h-5 mr-2"))
                            "+91 89292 08062"
                        }
                        a href="mailto:sales@idms.com" class="px-8 py-4 border-2 border-white text-white text-lg font-semibold rounded-full hover:bg-white hover:text-blue-600 transition-all transform hover:scale-105 flex items-center justify-center" {
                            (icon(Icon::Mail, "w-5 h-5 mr-2"))
                            "sales@idms.com"
                        }
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn site() -> SiteMetadata {
        ConfigLoader::load("./config/idms")
            .expect("Failed to load config")
            .site()
            .site
            .clone()
    }

    fn render(view: &PricingView) -> String {
        pricing_page(&site(), view, 2025).into_string()
    }

    #[test]
    fn test_renders_every_plan_and_faq() {
        let html = render(&PricingView::default());

        for plan in pricing_plans() {
            assert!(html.contains(plan.name), "missing plan {}", plan.name);
        }
        for faq in faqs() {
            assert!(html.contains(&maud::html! { (faq.question) }.into_string()));
        }
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert!(html.contains("Contact Sales"));
    }

    #[test]
    fn test_closed_accordion_hides_answers() {
        let html = render(&PricingView::default());
        assert!(!html.contains("leading-relaxed"));
    }

    #[test]
    fn test_open_faq_shows_only_its_answer() {
        let mut view = PricingView::default();
        view.faq.toggle(3);
        let html = render(&view);

        assert_eq!(html.matches("leading-relaxed").count(), 1);
        assert!(html.contains("We offer comprehensive support"));
        // Its header now links back to the closed state.
        assert!(html.contains(r#"href="/pricing#faq-3""#));
    }

    #[test]
    fn test_selected_plan_is_pressed() {
        let html = render(&PricingView::default());
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);

        let (_, strength) = html.split_once(r#"data-plan="strength""#).unwrap();
        let (card, _) = strength.split_once("data-plan=").unwrap();
        assert!(card.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn test_cta_regions_use_higher_threshold() {
        let html = render(&PricingView::default());
        assert_eq!(html.matches(r#"data-reveal-threshold="0.3""#).count(), 3);
    }

    #[test]
    fn test_footer_shows_year() {
        let html = render(&PricingView::default());
        assert!(html.contains("© 2025 IDMS Technologies Private Limited. All rights reserved."));
    }
}
