use crate::auth::use_store;
use crate::components::table::ROWS_PER_PAGE;
use crate::components::{Pager, SearchBox, StatusLine};
use crate::routes::Route;
use crate::slices::{publish, use_slice};
use client::{FetchStatus, SliceState};
use dioxus::prelude::*;
use shared_types::{Port, ServiceType, Trip, TripForm};

#[component]
pub fn Trips() -> Element {
    let store = use_store();
    let mut state = use_slice(&store, &store.trips);
    let query = use_signal(String::new);
    let page = use_signal(|| 0usize);
    let mut form = use_signal(|| TripForm {
        service_type: ServiceType::Sea.as_str().to_string(),
        ..Default::default()
    });
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
                match store.trips.create(form()).await {
                    Ok(_) => form_error.set(None),
                    Err(e) => form_error.set(Some(e.message)),
                }
                publish(&mut state, &store.trips, &store);
            }
        }
    };

    rsx! {
        div { class: "toolbar",
            SearchBox { query, page, placeholder: "Search by location or service" }
        }

        form { class: "form-card", onsubmit: submit,
            h3 { "Add trip" }
            if let Some(err) = form_error() {
                div { class: "auth-error", "{err}" }
            }
            label { "Company ID" }
            input {
                r#type: "number",
                value: "{form.read().company_id}",
                oninput: move |e: FormEvent| form.write().company_id = e.value().parse().unwrap_or_default(),
            }
            label { "From" }
            PortPicker { value: form.read().from_location.clone(), on_change: move |v| form.write().from_location = v }
            label { "To" }
            PortPicker { value: form.read().to_location.clone(), on_change: move |v| form.write().to_location = v }
            label { "Trip date" }
            input { r#type: "date", value: "{form.read().trip_date}", oninput: move |e: FormEvent| form.write().trip_date = e.value() }
            label { "Service type" }
            select {
                value: "{form.read().service_type}",
                onchange: move |e: FormEvent| form.write().service_type = e.value(),
                for service in ServiceType::ALL {
                    option { key: "{service}", value: service.as_str(), "{service}" }
                }
            }
            label { "Price per kg" }
            input { value: "{form.read().price_per_kg}", oninput: move |e: FormEvent| form.write().price_per_kg = e.value() }
            button { r#type: "submit", "Add trip" }
        }

        StatusLine { status: snapshot.status, error }

        table { class: "data",
            thead {
                tr {
                    th { "From" }
                    th { "To" }
                    th { "Date" }
                    th { "Service" }
                    th { "Price / kg" }
                    th {}
                }
            }
            tbody {
                for trip in rows {
                    tr { key: "{trip.trip_id}",
                        td { "{trip.from_location}" }
                        td { "{trip.to_location}" }
                        td { "{trip.trip_date}" }
                        td { "{trip.service_type}" }
                        td { "{trip.price_per_kg}" }
                        td {
                            Link { to: Route::TripDetail { id: trip.trip_id }, "Details" }
                        }
                    }
                }
            }
        }
        Pager { page, total }
    }
}

/// Text input with port code suggestions from the API search.
#[component]
fn PortPicker(value: String, on_change: EventHandler<String>) -> Element {
    let store = use_store();
    let mut suggestions = use_signal(Vec::<Port>::new);

    let search = move |evt: FormEvent| {
        let store = store.clone();
        async move {
            let text = evt.value();
            on_change.call(text.clone());
            if text.trim().len() < 2 {
                suggestions.set(Vec::new());
                return;
            }
            if store.ports.fetch_where(&[("search", text.trim())]).await.is_ok() {
                suggestions.set(store.ports.items());
            }
        }
    };

    rsx! {
        input { value: "{value}", oninput: search }
        if !suggestions.read().is_empty() {
            ul { class: "port-suggestions",
                for port in suggestions() {
                    li {
                        key: "{port.id}",
                        onclick: {
                            let label = port.option_label();
                            move |_| {
                                on_change.call(label.clone());
                                suggestions.set(Vec::new());
                            }
                        },
                        "{port.option_label()}"
                    }
                }
            }
        }
    }
}

/// One trip and its legs in sequence order.
#[component]
pub fn TripDetail(id: i64) -> Element {
    let store = use_store();
    let mut detail = use_signal(SliceState::<Trip>::default);

    use_effect(use_reactive!(|id| {
        let store = store.clone();
        spawn(async move {
            detail.with_mut(SliceState::detail_pending);
            let _ = store.trips.fetch_by_id(id).await;
            publish(&mut detail, &store.trips, &store);
        });
    }));

    let snapshot = detail.read().clone();
    let error = snapshot.error.clone().unwrap_or_default();

    rsx! {
        Link { to: Route::Trips {}, "Back to trips" }
        StatusLine { status: snapshot.status, error }

        if let (FetchStatus::Succeeded, Some(trip)) = (snapshot.status, snapshot.selected.as_ref()) {
            div { class: "form-card",
                h2 { "{trip.from_location} to {trip.to_location}" }
                p { "Date: {trip.trip_date}" }
                p { "Service: {trip.service_type}" }
                p { "Price per kg: {trip.price_per_kg}" }
            }
            table { class: "data",
                thead {
                    tr {
                        th { "#" }
                        th { "Departure" }
                        th { "Arrival" }
                        th { "Vehicle" }
                        th { "Carrier" }
                        th { "Est. minutes" }
                        th { "CO2" }
                    }
                }
                tbody {
                    for leg in trip.legs() {
                        tr { key: "{leg.detail_id}",
                            td { "{leg.sequence_number}" }
                            td { "{leg.departure_location}" }
                            td { "{leg.arrival_location}" }
                            td { "{leg.vehicle_type:?} {leg.vehicle_model}" }
                            td { "{leg.carrier_company}" }
                            td { "{leg.estimated_time_minutes}" }
                            td { "{leg.co2_emissions}" }
                        }
                    }
                }
            }
        }
    }
}
