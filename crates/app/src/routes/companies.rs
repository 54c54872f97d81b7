use crate::auth::use_store;
use crate::components::table::ROWS_PER_PAGE;
use crate::components::{Pager, SearchBox, StatusLine};
use crate::slices::{publish, use_slice};
use dioxus::prelude::*;
use shared_types::{Company, CompanyForm};

fn form_from(company: &Company) -> CompanyForm {
    CompanyForm {
        name: company.name.clone(),
        email: company.email.clone(),
        phone_number: company.phone_number.clone().unwrap_or_default(),
        place: company.place.clone(),
        is_active: company.is_active,
        logo: None,
    }
}

#[component]
pub fn Companies() -> Element {
    let store = use_store();
    let mut state = use_slice(&store, &store.companies);
    let query = use_signal(String::new);
    let page = use_signal(|| 0usize);
    let mut form = use_signal(CompanyForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);

    let snapshot = state.read().clone();
    let (rows, total) = snapshot.page(&query(), page(), ROWS_PER_PAGE);
    let error = snapshot.error.clone().unwrap_or_default();

    let submit = {
        let store = store.clone();
        move |evt: FormEvent| {
            let store = store.clone();
            async move {
                evt.prevent_default();
                match store.companies.create(form()).await {
                    Ok(_) => {
                        form.set(CompanyForm::default());
                        form_error.set(None);
                    }
                    Err(e) => form_error.set(Some(e.message)),
                }
                publish(&mut state, &store.companies, &store);
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            SearchBox { query, page, placeholder: "Search by name, email or phone" }
        }

        form { class: "form-card", onsubmit: submit,
            h3 { "New company" }
            if let Some(err) = form_error() {
                div { class: "auth-error", "{err}" }
            }
            label { "Name" }
            input { value: "{form.read().name}", oninput: move |e: FormEvent| form.write().name = e.value() }
            label { "Email" }
            input { r#type: "email", value: "{form.read().email}", oninput: move |e: FormEvent| form.write().email = e.value() }
            label { "Phone number" }
            input { value: "{form.read().phone_number}", oninput: move |e: FormEvent| form.write().phone_number = e.value() }
            label { "Place" }
            input { value: "{form.read().place}", oninput: move |e: FormEvent| form.write().place = e.value() }
            button { r#type: "submit", "Create" }
        }

        StatusLine { status: snapshot.status, error }

        table { class: "data",
            thead {
                tr {
                    th { "Name" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Place" }
                    th { "Active" }
                }
            }
            tbody {
                for company in rows {
                    tr { key: "{company.company_id}",
                        td { "{company.name}" }
                        td { "{company.email}" }
                        td { "{company.phone_number.clone().unwrap_or_default()}" }
                        td { "{company.place}" }
                        td {
                            input {
                                r#type: "checkbox",
                                checked: company.is_active,
                                onchange: {
                                    let store = store.clone();
                                    let id = company.company_id;
                                    let mut next = form_from(company);
                                    next.is_active = !company.is_active;
                                    move |_| {
                                        let store = store.clone();
                                        let next = next.clone();
                                        async move {
                                            let _ = store.companies.update(id, next).await;
                                            publish(&mut state, &store.companies, &store);
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
        Pager { page, total }
    }
}
