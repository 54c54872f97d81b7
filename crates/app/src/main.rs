use client::Store;
use dioxus::prelude::*;

mod auth;
mod components;
mod routes;
mod slices;

use auth::AuthContext;
use routes::Route;

const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Session is rehydrated from the file named in config.toml.
    let store = use_context_provider(|| Store::from_config(client::load_config()));
    use_context_provider(|| AuthContext::new(store.session()));

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        Router::<Route> {}
    }
}
