//! Marketing footer.

use maud::{Markup, html};

use crate::config::SiteMetadata;
use crate::content::footer_columns;
use crate::models::Icon;

use super::components::icon;

const FOOTER_LINK: &str = "hover:text-blue-400 transition-colors";

/// Renders the footer with link columns, contact details and copyright.
pub fn footer(site: &SiteMetadata, year: i32) -> Markup {
    html! {
        footer class="bg-gray-800 text-white py-12" {
            div class="container mx-auto px-4 grid grid-cols-2 md:grid-cols-5 gap-8" {
                div {
                    div class="flex items-center space-x-3 mb-4" {
                        div class="bg-gradient-to-r from-blue-600 to-cyan-600 p-2 rounded-lg" {
                            (icon(Icon::Database, "w-6 h-6 text-white"))
                        }
                        h3 class="text-2xl font-bold text-blue-400" { (site.name) }
                    }
                    p class="text-gray-400 text-sm mb-4" { (site.tagline) }
                    div class="flex space-x-3" {
                        @for social in [Icon::Globe, Icon::Zap, Icon::Heart] {
                            (icon(social, "w-5 h-5 text-gray-400 hover:text-blue-400 cursor-pointer"))
                        }
                    }
                }
                @for column in footer_columns() {
                    div {
                        h4 class="font-semibold text-lg mb-4" { (column.title) }
                        ul class="space-y-2 text-gray-400" {
                            @for link in &column.links {
                                li { a href=(link.href) class=(FOOTER_LINK) { (link.label) } }
                            }
                        }
                    }
                }
                div {
                    h4 class="font-semibold text-lg mb-4" { "Get in Touch" }
                    div class="space-y-2 text-gray-400" {
                        div class="flex items-center" {
                            (icon(Icon::Mail, "w-4 h-4 mr-2 text-blue-400"))
                            a href="mailto:info@idms.com" class=(FOOTER_LINK) { "info@idms.com" }
                        }
                        div class="flex items-center" {
                            (icon(Icon::Phone, "w-4 h-4 mr-2 text-blue-400"))
                            span { "+1 (555) 123-4567" }
                        }
                        div class="flex items-start" {
                            (icon(Icon::MapPin, "w-4 h-4 mt-1 mr-2 text-blue-400 flex-shrink-0"))
                            span { "123 Data Street, Tech City, CA 94000" }
                        }
                    }
                }
            }
            div class="border-t border-gray-700 mt-8 pt-6 container mx-auto px-4 text-center text-sm text-gray-400" {
                "© " (year) " " (site.legal_name) ". All rights reserved."
            }
        }
    }
}
