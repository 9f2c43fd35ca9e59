//! Fallback page for unknown routes.

use maud::{Markup, html};

use crate::interaction::PRICING_PATH;
use crate::models::Icon;

use super::components::{document, icon};

/// Renders the 404 page for `path`.
pub fn not_found_page(path: &str) -> Markup {
    let body = html! {
        div class="min-h-screen flex items-center justify-center px-4" {
            div class="text-center max-w-lg" {
                p class="text-6xl font-extrabold text-blue-600 mb-4" { "404" }
                h1 class="text-3xl font-bold text-gray-900 mb-2" { "Page not found" }
                p class="text-gray-600 mb-8" {
                    "Nothing lives at "
                    code class="font-mono text-gray-800" { (path) }
                    "."
                }
                a href=(PRICING_PATH) class="inline-flex items-center px-6 py-3 bg-blue-600 text-white rounded-full hover:bg-blue-700 transition-colors font-medium" {
                    "See pricing "
                    (icon(Icon::ArrowRight, "w-4 h-4 ml-2"))
                }
            }
        }
    };

    document("Not Found | IDMS", "bg-gray-50", body)
}
