use crate::auth::{use_nav_sections, use_user_role};
use crate::routes::Route;
use client::NavEntry;
use dioxus::prelude::*;

/// Landing page: one card per section the role can open.
#[component]
pub fn Dashboard() -> Element {
    let role = use_user_role();
    let sections = use_nav_sections();
    let greeting = role.map(|r| r.label()).unwrap_or("there");

    let cards = sections.iter().filter_map(|entry| match *entry {
        NavEntry::Link { label, href, .. } if href != "/" => href
            .parse::<Route>()
            .ok()
            .map(|route| (label, route)),
        _ => None,
    });

    rsx! {
        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Welcome, {greeting}" }
            div { class: "dashboard-cards",
                for (label, route) in cards {
                    Link { key: "{label}", to: route, class: "form-card",
                        h3 { "{label}" }
                    }
                }
            }
        }
    }
}
