//! Small building blocks shared by the page renderers.

use maud::{DOCTYPE, Markup, html};

use crate::interaction::RevealLatch;
use crate::models::Icon;

/// Path of the embedded stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/site.css";

/// Path of the embedded reveal / header script.
pub const SCRIPT_PATH: &str = "/assets/site.js";

/// Wraps page content in the HTML document shell.
pub fn document(title: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                link rel="stylesheet" href=(STYLESHEET_PATH);
            }
            body class=(body_class) {
                (content)
                script src="https://unpkg.com/lucide@latest" {}
                script src=(SCRIPT_PATH) {}
            }
        }
    }
}

/// An icon placeholder, swapped for an SVG by lucide on the client.
pub fn icon(icon: Icon, class: &str) -> Markup {
    html! {
        i data-lucide=(icon.name()) class=(class) aria-hidden="true" {}
    }
}

/// Wraps `content` in a scroll-reveal region.
///
/// The region renders with the latch's current state; the client script
/// latches it visible the first time it crosses the threshold.
pub fn animated_on_scroll(
    latch: &RevealLatch,
    animation_class: &str,
    delay_class: &str,
    content: Markup,
) -> Markup {
    let mut class = format!("{} {}", animation_class, delay_class);
    if latch.is_visible() {
        class.push_str(" is-visible");
    }

    html! {
        div class=(class) data-reveal-threshold=(latch.threshold()) {
            (content)
        }
    }
}

/// Joins the non-empty class fragments with single spaces.
pub fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
