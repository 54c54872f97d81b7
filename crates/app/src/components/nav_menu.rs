use client::{active_href, sections_for, NavEntry, NavIcon};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdLayoutDashboard, LdPackage, LdRoute, LdTruck, LdUsers,
};
use dioxus_free_icons::Icon;

/// Sidebar rendered from the navigation table for `role`.
///
/// `path` is the current location; the longest link matching it is marked
/// active. Clicks are handed to `on_navigate` with the link target.
#[component]
pub fn NavMenu(role: String, path: String, on_navigate: EventHandler<String>) -> Element {
    let entries = sections_for(Some(role.as_str()));
    let active = active_href(entries, &path);

    rsx! {
        nav { class: "nav-menu",
            for entry in entries.iter().copied() {
                match entry {
                    NavEntry::Header { label } => rsx! {
                        div { key: "header-{label}", class: "nav-header", "{label}" }
                    },
                    NavEntry::Link { label, icon, href } => rsx! {
                        a {
                            key: "{href}",
                            class: if active == Some(href) { "nav-link active" } else { "nav-link" },
                            href: "{href}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_navigate.call(href.to_string());
                            },
                            NavGlyph { icon }
                            span { "{label}" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Building => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Truck => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        NavIcon::Route => rsx! { Icon::<LdRoute> { icon: LdRoute, width: 18, height: 18 } },
        NavIcon::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
    }
}
