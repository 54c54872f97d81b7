use crate::auth::{use_auth, use_store};
use crate::routes::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Sign-in form. Blank fields are reported next to the input without
/// contacting the API.
#[component]
pub fn Login() -> Element {
    let store = use_store();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        let store = store.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            match store.auth.login(&username(), &password()).await {
                Ok(_) => {
                    auth.sync(store.session());
                    navigator().replace(Route::Dashboard {});
                }
                Err(e) if e.is_validation() => field_errors.set(e.field_errors),
                Err(e) => error_msg.set(Some(e.message)),
            }
            loading.set(false);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        div { class: "auth-page",
            form { class: "form-card auth-card", onsubmit: handle_login,
                h2 { "Sign In" }
                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                label { r#for: "username", "Email or username" }
                input {
                    id: "username",
                    value: "{username}",
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                if let Some(err) = field_error("username_or_email") {
                    div { class: "field-error", "{err}" }
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                if let Some(err) = field_error("password") {
                    div { class: "field-error", "{err}" }
                }

                button { r#type: "submit", disabled: loading(), style: "margin-top: 12px",
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
