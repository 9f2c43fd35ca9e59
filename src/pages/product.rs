//! Product detail placeholder page.

use maud::{Markup, html};

use crate::calculation::title_from_slug;
use crate::models::ProductParams;

use super::components::document;

/// Renders the detail page for the product named by `params.slug`.
///
/// No catalogue lookup happens; every slug renders.
pub fn product_page(params: &ProductParams) -> Markup {
    let title = title_from_slug(&params.slug);

    let body = html! {
        div class="p-8 max-w-4xl mx-auto bg-white shadow-xl rounded-2xl" {
            h1 class="text-4xl font-extrabold text-gray-900 border-b pb-2 mb-6" {
                "Product Details"
            }
            div class="flex flex-col md:flex-row gap-6 items-start" {
                div class="w-full md:w-1/3 p-4 bg-indigo-50 rounded-xl" {
                    p class="text-sm font-semibold text-indigo-600 uppercase" { "Product Slug" }
                    p class="text-2xl font-mono text-indigo-800 mt-1 break-words" { (params.slug) }
                }
                div class="w-full md:w-2/3" {
                    h2 class="text-3xl font-bold text-gray-700" { (title) }
                    p class="text-lg text-gray-500 mt-2" {
                        "This page receives the product identifier from the URL."
                    }
                    p class="mt-4 p-3 bg-red-50 border border-red-200 rounded-lg text-sm text-red-700" {
                        "*ACTION REQUIRED: Replace this placeholder with the product's catalogue data.*"
                    }
                }
            }
        }
    };

    document(&format!("{} | IDMS", title), "min-h-screen bg-gray-50 py-12", body)
}
