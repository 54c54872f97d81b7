pub mod companies;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod shipments;
pub mod trips;
pub mod users;

use crate::auth::{use_auth, use_store};
use crate::components::NavMenu;
use client::can_access;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::UserRole;

use companies::Companies;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use shipments::{AllShipments, CompanyShipments};
use trips::{TripDetail, Trips};
use users::{CompanyUsers, SuperAdminUsers};

/// Application routes. Paths match the sidebar targets of each role.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    // ── Super admin ──
    #[route("/superAdmin/users")]
    SuperAdminUsers {},
    #[route("/companies")]
    Companies {},
    #[route("/shipment")]
    AllShipments {},
    // ── Company admin ──
    #[route("/companyAdmin/Trips")]
    Trips {},
    #[route("/companyAdmin/Trips/:id")]
    TripDetail { id: i64 },
    #[route("/companyAdmin/Shipments")]
    CompanyShipments {},
    #[route("/users")]
    CompanyUsers {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Redirects to /login when there is no session.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if !auth.is_authenticated() {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Sidebar, top bar and the page, gated by the role's reachable paths.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let store = use_store();
    let mut auth = use_auth();

    let path = route.to_string();
    let role = auth.role().unwrap_or_default();
    let allowed = can_access(Some(role.as_str()), &path);
    let role_label = UserRole::parse(&role).map(|r| r.label()).unwrap_or("Unknown role");

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::SuperAdminUsers {} | Route::CompanyUsers {} => "Users",
        Route::Companies {} => "Companies",
        Route::AllShipments {} | Route::CompanyShipments {} => "Shipments",
        Route::Trips {} | Route::TripDetail { .. } => "Trips",
        Route::Login {} | Route::NotFound { .. } => "",
    };

    let sign_out = move |_: MouseEvent| {
        store.auth.logout();
        auth.sync(store.session());
        navigator().replace(Route::Login {});
    };

    rsx! {
        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand", "Logistics Admin" }
                NavMenu {
                    role: role.clone(),
                    path: path.clone(),
                    on_navigate: move |target: String| match target.parse::<Route>() {
                        Ok(route) => {
                            navigator().push(route);
                        }
                        Err(_) => tracing::warn!(target = %target, "Sidebar link has no route"),
                    },
                }
            }
            div { class: "main",
                header { class: "topbar",
                    h1 { "{page_title}" }
                    div { class: "topbar-user",
                        span { "{role_label}" }
                        button { onclick: sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Sign out"
                        }
                    }
                }
                main { class: "page",
                    if allowed {
                        Outlet::<Route> {}
                    } else {
                        p { class: "status-error", "This page is not available for your role." }
                    }
                }
            }
        }
    }
}
