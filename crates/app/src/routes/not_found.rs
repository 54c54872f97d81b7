use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "form-card",
                h1 { "404" }
                p {
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Dashboard {}, "Back to Dashboard" }
            }
        }
    }
}
