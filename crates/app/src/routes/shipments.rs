use crate::auth::use_store;
use crate::components::table::ROWS_PER_PAGE;
use crate::components::{Pager, SearchBox, StatusLine};
use crate::slices::{publish, use_slice};
use dioxus::prelude::*;
use shared_types::ShipmentForm;

#[component]
pub fn AllShipments() -> Element {
    rsx! { ShipmentsPage {} }
}

#[component]
pub fn CompanyShipments() -> Element {
    rsx! { ShipmentsPage {} }
}

#[component]
fn ShipmentsPage() -> Element {
    let store = use_store();
    let mut state = use_slice(&store, &store.shipments);
    let query = use_signal(String::new);
    let page = use_signal(|| 0usize);
    let mut form = use_signal(ShipmentForm::default);
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
                match store.shipments.create(form()).await {
                    Ok(_) => {
                        form.set(ShipmentForm::default());
                        form_error.set(None);
                    }
                    Err(e) => form_error.set(Some(e.message)),
                }
                publish(&mut state, &store.shipments, &store);
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            SearchBox { query, page, placeholder: "Search by tracking number or address" }
        }

        form { class: "form-card", onsubmit: submit,
            h3 { "New shipment" }
            if let Some(err) = form_error() {
                div { class: "auth-error", "{err}" }
            }
            label { "Tracking number" }
            input { value: "{form.read().tracking_number}", oninput: move |e: FormEvent| form.write().tracking_number = e.value() }
            label { "Origin address" }
            input { value: "{form.read().origin_address}", oninput: move |e: FormEvent| form.write().origin_address = e.value() }
            label { "Destination address" }
            input { value: "{form.read().destination_address}", oninput: move |e: FormEvent| form.write().destination_address = e.value() }
            label { "Estimated delivery" }
            input { r#type: "date", value: "{form.read().estimated_delivery_date}", oninput: move |e: FormEvent| form.write().estimated_delivery_date = e.value() }
            button { r#type: "submit", "Create" }
        }

        StatusLine { status: snapshot.status, error }

        table { class: "data",
            thead {
                tr {
                    th { "Tracking #" }
                    th { "Status" }
                    th { "Location" }
                    th { "Origin" }
                    th { "Destination" }
                    th { "ETA" }
                }
            }
            tbody {
                for shipment in rows {
                    tr { key: "{shipment.shipment_id}",
                        td { "{shipment.tracking_number}" }
                        td { "{shipment.current_status}" }
                        td { "{shipment.current_location}" }
                        td { "{shipment.origin_address}" }
                        td { "{shipment.destination_address}" }
                        td { "{shipment.estimated_delivery_date}" }
                    }
                }
            }
        }
        Pager { page, total }
    }
}
