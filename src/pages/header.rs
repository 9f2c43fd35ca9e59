//! Marketing header: brand, desktop navigation with dropdowns, and the
//! mobile slide-in menu.

use maud::{Markup, html};

use crate::calculation::split_columns;
use crate::config::SiteMetadata;
use crate::content::{about_links, detailed_products, nav_items};
use crate::interaction::{HEADER_SCROLL_THRESHOLD_PX, PricingView};
use crate::models::{Dropdown, Icon, NavItem, ProductItem};

use super::components::{classes, icon};

/// Number of products listed under Products in the mobile menu.
const MOBILE_PRODUCT_PREVIEW: usize = 3;

const NAV_LINK: &str = "text-gray-700 hover:text-blue-600 font-medium transition-colors";
const MOBILE_TOGGLE: &str = "flex justify-between items-center w-full p-3 text-lg text-gray-700 hover:bg-blue-50 hover:text-blue-600 transition-colors rounded-lg";

/// Renders the fixed page header.
///
/// Always rendered in its top-of-page look. `site.js` swaps in
/// `bg-white shadow-lg` once the scroll offset passes the threshold.
pub fn header(site: &SiteMetadata, view: &PricingView) -> Markup {
    html! {
        header
            class="fixed top-0 z-50 w-full transition-shadow duration-300 bg-transparent"
            data-scroll-threshold=(HEADER_SCROLL_THRESHOLD_PX)
        {
            div class="container mx-auto flex items-center justify-between p-4" {
                (brand(site))
                nav class="hidden space-x-8 md:flex" {
                    @for item in nav_items() {
                        div class="relative" { (desktop_item(&item, view)) }
                    }
                }
                div class="hidden md:flex space-x-4" {
                    a href="#" class="px-4 py-2 text-blue-600 border border-blue-600 rounded-full hover:bg-blue-50 transition-colors font-medium" {
                        "Log In"
                    }
                    a href="#" class="px-4 py-2 bg-blue-600 text-white rounded-full hover:bg-blue-700 transition-colors font-medium" {
                        "Start Free Trial"
                    }
                }
                a href=(view.href_after(|v| v.menus.open_mobile()))
                    class="md:hidden p-2 text-gray-700"
                    aria-label="Open menu"
                {
                    (icon(Icon::Menu, "w-6 h-6"))
                }
            }
            (mobile_menu(view))
        }
    }
}

fn brand(site: &SiteMetadata) -> Markup {
    html! {
        a href="/" class="flex items-center cursor-pointer group" {
            div class="flex items-center space-x-3" {
                div class="bg-gradient-to-r from-blue-600 to-cyan-600 p-3 rounded-xl" {
                    (icon(Icon::Database, "w-8 h-8 text-white"))
                }
                div {
                    h1 class="text-2xl font-bold text-gray-900" { (site.name) }
                    p class="text-sm text-gray-600 -mt-1" { (site.tagline) }
                }
            }
        }
    }
}

fn chevron(open: bool, size: &str) -> Markup {
    let rotation = if open { "rotate-90" } else { "rotate-0" };
    icon(
        Icon::ChevronRight,
        &classes(&[size, "ml-1 transform transition-transform", rotation]),
    )
}

fn desktop_item(item: &NavItem, view: &PricingView) -> Markup {
    let Some(dropdown) = item.dropdown() else {
        let active = if view.menus.is_active(item.id) {
            "text-blue-600 border-b-2 border-blue-600"
        } else {
            ""
        };
        return html! {
            a href=(item.href) class=(classes(&[NAV_LINK, active])) { (item.label) }
        };
    };

    let open = view.menus.is_open(dropdown);
    let panel_state = if open { "is-open" } else { "" };

    html! {
        div class="nav-dropdown group relative inline-block cursor-pointer" data-dropdown=(item.id) {
            a href=(item.href) class=(classes(&["flex items-center", NAV_LINK])) {
                (item.label) " " (chevron(open, "w-4 h-4"))
            }
            div class=(classes(&["dropdown-panel", panel_state])) {
                @match dropdown {
                    Dropdown::Products => (mega_dropdown(&detailed_products())),
                    Dropdown::About => (about_dropdown()),
                }
            }
        }
    }
}

/// The two-column products panel.
pub fn mega_dropdown(items: &[ProductItem]) -> Markup {
    let (left, right) = split_columns(items);

    html! {
        div class="absolute left-1/2 transform -translate-x-1/2 mt-3 w-[650px] rounded-2xl shadow-2xl bg-white ring-1 ring-black ring-opacity-5 focus:outline-none transition-all duration-300 overflow-hidden" {
            div class="grid grid-cols-2 p-5 gap-y-6 gap-x-8" {
                div class="space-y-6 border-r pr-4" {
                    @for item in left { (dropdown_product_item(item)) }
                }
                div class="space-y-6 pl-4" {
                    @for item in right { (dropdown_product_item(item)) }
                }
            }
        }
    }
}

fn dropdown_product_item(item: &ProductItem) -> Markup {
    let (icon_color, background) = item.colors();

    html! {
        a href=(item.href) class="flex p-3 rounded-xl hover:bg-gray-50 transition-colors duration-200 group" {
            div class=(classes(&["mr-4 p-2 rounded-full flex-shrink-0", background])) {
                (icon(item.icon, &classes(&["h-6 w-6", icon_color])))
            }
            div {
                h5 class="font-semibold text-base text-gray-900 group-hover:text-blue-600 transition-colors" {
                    (item.title)
                }
                p class="text-sm text-gray-500" { (item.description) }
            }
        }
    }
}

fn about_dropdown() -> Markup {
    html! {
        div class="absolute left-1/2 transform -translate-x-1/2 mt-3 w-56 rounded-xl shadow-2xl bg-white ring-1 ring-black ring-opacity-5 p-2" {
            @for link in about_links() {
                a href=(link.href) class="block px-4 py-2 text-gray-700 hover:text-blue-600 hover:bg-gray-50 rounded-lg" {
                    (link.label)
                }
            }
        }
    }
}

fn mobile_menu(view: &PricingView) -> Markup {
    let slide = if view.menus.is_mobile_open() {
        "translate-x-0"
    } else {
        "translate-x-full"
    };

    html! {
        div class=(classes(&[
            "fixed inset-0 z-50 transform transition-transform duration-300 ease-in-out md:hidden",
            slide,
            "bg-white shadow-xl",
        ])) {
            div class="flex justify-end p-4" {
                a href=(view.href_after(|v| v.menus.close_mobile())) class="p-2 text-gray-700" aria-label="Close menu" {
                    (icon(Icon::X, "w-6 h-6"))
                }
            }
            nav class="flex flex-col space-y-2 p-4" {
                @for item in nav_items() {
                    div class="w-full" { (mobile_item(&item, view)) }
                }
            }
        }
    }
}

fn mobile_item(item: &NavItem, view: &PricingView) -> Markup {
    let Some(dropdown) = item.dropdown() else {
        let state = if view.menus.is_active(item.id) {
            "text-blue-600 bg-blue-50 font-semibold"
        } else {
            "text-gray-700"
        };
        return html! {
            a href=(item.href)
                class=(classes(&["flex items-center p-3 text-lg hover:bg-blue-50 hover:text-blue-600 transition-colors rounded-lg", state]))
            {
                (icon(item.icon, "w-5 h-5 mr-3"))
                (item.label)
            }
        };
    };

    let open = view.menus.is_open(dropdown);

    html! {
        div class="w-full" {
            a href=(view.href_after(|v| v.menus.toggle(dropdown))) class=(MOBILE_TOGGLE) aria-expanded=(if open { "true" } else { "false" }) {
                span class="flex items-center" {
                    (icon(item.icon, "w-5 h-5 mr-3"))
                    (item.label)
                }
                (chevron(open, "w-5 h-5"))
            }
            @if open {
                div class="ml-4 border-l pl-4 my-2 space-y-1" {
                    @match dropdown {
                        Dropdown::Products => (mobile_products(item)),
                        Dropdown::About => {
                            @for link in about_links() {
                                a href=(link.href) class="block p-2 text-base text-gray-600 hover:bg-blue-50 hover:text-blue-600 rounded-lg" {
                                    (link.label)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn mobile_products(item: &NavItem) -> Markup {
    html! {
        @for sub_item in item.sub_items.iter().take(MOBILE_PRODUCT_PREVIEW) {
            a href=(sub_item.href) class="flex items-center p-2 text-base text-gray-600 hover:bg-blue-50 hover:text-blue-600 transition-colors rounded-lg" {
                (icon(sub_item.icon, "w-4 h-4 mr-2"))
                (sub_item.label)
            }
        }
        a href=(item.href) class="flex items-center p-2 text-base font-semibold text-blue-600 hover:bg-blue-50 transition-colors rounded-lg" {
            (icon(Icon::ArrowRight, "w-4 h-4 mr-2"))
            "View All Solutions (" (item.sub_items.len()) ")"
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

    #[test]
    fn test_mega_dropdown_first_column_holds_five() {
        let markup = mega_dropdown(&detailed_products()).into_string();
        let (left, _) = markup.split_once("space-y-6 pl-4").unwrap();
        assert_eq!(left.matches("/products/").count(), 5);
    }

    #[test]
    fn test_header_renders_top_of_page_look() {
        let markup = header(&site(), &PricingView::default()).into_string();
        let (opening, _) = markup.split_once('>').unwrap();

        assert!(opening.contains("bg-transparent"));
        assert!(!opening.contains("shadow-lg"));
        assert!(opening.contains(r#"data-scroll-threshold="50""#));
    }

    #[test]
    fn test_closed_header_hides_panels() {
        let markup = header(&site(), &PricingView::default()).into_string();
        assert!(!markup.contains("dropdown-panel is-open"));
        assert!(markup.contains("translate-x-full"));
        assert!(markup.contains(r#"href="/pricing?menu=1""#));
    }

    #[test]
    fn test_open_mobile_products_lists_three_and_view_all() {
        let mut view = PricingView::default();
        view.menus.open_mobile();
        view.menus.toggle(Dropdown::Products);

        let markup = header(&site(), &view).into_string();

        assert!(markup.contains("translate-x-0"));
        assert!(markup.contains("View All Solutions (9)"));
        assert!(markup.contains(r#"href="/pricing?menu=1""#));
    }

    #[test]
    fn test_pricing_link_is_active() {
        let markup = header(&site(), &PricingView::default()).into_string();
        assert!(markup.contains("text-blue-600 border-b-2 border-blue-600"));
    }
}
