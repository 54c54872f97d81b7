use crate::auth::use_store;
use crate::components::table::ROWS_PER_PAGE;
use crate::components::{Pager, SearchBox, StatusLine};
use crate::slices::{publish, use_slice};
use client::FetchStatus;
use dioxus::prelude::*;
use shared_types::{CreateUserRequest, UpdateUserRequest, UserRole};

#[component]
pub fn SuperAdminUsers() -> Element {
    rsx! { UsersPage {} }
}

#[component]
pub fn CompanyUsers() -> Element {
    rsx! { UsersPage {} }
}

/// User list with search, paging, a create form and profile editing.
#[component]
fn UsersPage() -> Element {
    let store = use_store();
    let mut state = use_slice(&store, &store.users);
    let query = use_signal(String::new);
    let page = use_signal(|| 0usize);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<(i64, String, String)>::None);

    let snapshot = state.read().clone();
    let (rows, total) = snapshot.page(&query(), page(), ROWS_PER_PAGE);
    let error = snapshot.error.clone().unwrap_or_default();

    let save_edit = {
        let store = store.clone();
        move |_: MouseEvent| {
            let store = store.clone();
            async move {
                let Some((id, full_name, phone)) = editing() else {
                    return;
                };
                let form = UpdateUserRequest {
                    full_name: Some(full_name),
                    phone: Some(phone),
                    ..Default::default()
                };
                if store.users.update(id, form).await.is_ok() {
                    editing.set(None);
                }
                publish(&mut state, &store.users, &store);
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            SearchBox { query, page, placeholder: "Search by name or email" }
            button { onclick: move |_| show_form.set(!show_form()), "Add user" }
        }

        if show_form() {
            CreateUserForm {
                on_created: {
                    let store = store.clone();
                    move |_| {
                        show_form.set(false);
                        publish(&mut state, &store.users, &store);
                    }
                },
            }
        }

        if let Some((id, full_name, phone)) = editing() {
            div { class: "form-card",
                h3 { "Edit user #{id}" }
                label { "Full name" }
                input {
                    value: "{full_name}",
                    oninput: move |evt: FormEvent| {
                        editing.with_mut(|e| if let Some(e) = e.as_mut() { e.1 = evt.value() });
                    },
                }
                label { "Phone" }
                input {
                    value: "{phone}",
                    oninput: move |evt: FormEvent| {
                        editing.with_mut(|e| if let Some(e) = e.as_mut() { e.2 = evt.value() });
                    },
                }
                button { onclick: save_edit, "Save" }
                button { onclick: move |_| editing.set(None), "Cancel" }
            }
        }

        StatusLine { status: snapshot.status, error }

        table { class: "data",
            thead {
                tr {
                    th { "Name" }
                    th { "Username" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Role" }
                    th { "Status" }
                    th {}
                }
            }
            tbody {
                for user in rows {
                    tr { key: "{user.user_id}",
                        td { "{user.full_name}" }
                        td { "{user.username}" }
                        td { "{user.email}" }
                        td { "{user.phone}" }
                        td { "{user.role}" }
                        td { "{user.status}" }
                        td {
                            button {
                                onclick: {
                                    let edit = (user.user_id, user.full_name.clone(), user.phone.clone());
                                    move |_| editing.set(Some(edit.clone()))
                                },
                                "Edit"
                            }
                        }
                    }
                }
            }
        }
        if snapshot.status == FetchStatus::Succeeded && total == 0 {
            p { "No users found." }
        }
        Pager { page, total }
    }
}

#[component]
fn CreateUserForm(on_created: EventHandler<()>) -> Element {
    let store = use_store();
    let mut form = use_signal(|| CreateUserRequest {
        role: UserRole::CompanyAdmin.as_str().to_string(),
        ..Default::default()
    });
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        let store = store.clone();
        async move {
            evt.prevent_default();
            saving.set(true);
            match store.users.create(form()).await {
                Ok(_) => {
                    error_msg.set(None);
                    on_created.call(());
                }
                Err(e) => error_msg.set(Some(e.message)),
            }
            saving.set(false);
        }
    };

    rsx! {
        form { class: "form-card", onsubmit: submit,
            h3 { "New user" }
            if let Some(err) = error_msg() {
                div { class: "auth-error", "{err}" }
            }
            label { "Username" }
            input { value: "{form.read().username}", oninput: move |e: FormEvent| form.write().username = e.value() }
            label { "Full name" }
            input { value: "{form.read().full_name}", oninput: move |e: FormEvent| form.write().full_name = e.value() }
            label { "Email" }
            input { r#type: "email", value: "{form.read().email}", oninput: move |e: FormEvent| form.write().email = e.value() }
            label { "Password" }
            input { r#type: "password", value: "{form.read().password}", oninput: move |e: FormEvent| form.write().password = e.value() }
            label { "Phone" }
            input { value: "{form.read().phone}", oninput: move |e: FormEvent| form.write().phone = e.value() }
            label { "Role" }
            select {
                value: "{form.read().role}",
                onchange: move |e: FormEvent| form.write().role = e.value(),
                for role in UserRole::ALL {
                    option { key: "{role.as_str()}", value: role.as_str(), "{role.label()}" }
                }
            }
            button { r#type: "submit", disabled: saving(), "Create" }
        }
    }
}
