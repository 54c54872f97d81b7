use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use client::FetchStatus;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{ServiceType, TripForm, VehicleType};

use crate::common::{self, trip_json};

fn valid_trip() -> TripForm {
    TripForm {
        company_id: 2,
        from_location: "Rotterdam (RTM)".into(),
        to_location: "Hamburg (HAM)".into(),
        trip_date: "2025-03-01".into(),
        service_type: "Sea".into(),
        price_per_kg: "1.75".into(),
    }
}

#[tokio::test]
async fn trips_are_read_from_their_envelope() {
    let router = Router::new().route(
        "/getAllTrips",
        get(|| async {
            Json(json!({"trips": [
                trip_json(1, "Rotterdam", "Hamburg"),
                trip_json(2, "Gdansk", "Oslo")
            ]}))
        }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");

    store.trips.fetch_all().await.unwrap();

    let trips = store.trips.items();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[1].from_location, "Gdansk");
    assert_eq!(trips[0].service_type, ServiceType::Sea);
}

#[tokio::test]
async fn fetch_by_id_selects_trip_with_ordered_legs() {
    let router = Router::new().route(
        "/trips/{id}/details",
        get(|Path(id): Path<i64>| async move {
            let mut trip = trip_json(id, "Rotterdam", "Hamburg");
            trip["details"] = json!([
                {"detailId": 9, "sequenceNumber": 2, "departureLocation": "Bremerhaven",
                 "arrivalLocation": "Hamburg", "vehicleType": "truck", "CO2Emissions": "12.5"},
                {"detailId": 8, "sequenceNumber": 1, "departureLocation": "Rotterdam",
                 "arrivalLocation": "Bremerhaven", "vehicleType": "ship", "CO2Emissions": "40.1"}
            ]);
            Json(json!({"trip": trip}))
        }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");

    let trip = store.trips.fetch_by_id(4).await.unwrap();

    assert_eq!(trip.trip_id, 4);
    assert_eq!(store.trips.selected(), Some(trip.clone()));
    assert!(store.trips.items().is_empty());
    let legs: Vec<_> = trip.legs().iter().map(|l| l.vehicle_type).collect();
    assert_eq!(legs, vec![VehicleType::Ship, VehicleType::Truck]);
    assert_eq!(api.log.last().path, "/trips/4/details");
}

#[tokio::test]
async fn missing_trip_reports_fallback_message() {
    let router = Router::new().route("/trips/{id}/details", get(|| async { StatusCode::NOT_FOUND }));
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");

    let err = store.trips.fetch_by_id(99).await.unwrap_err();

    assert_eq!(err.status, Some(404));
    assert_eq!(store.trips.status(), FetchStatus::Failed);
    assert_eq!(store.trips.error().as_deref(), Some("Failed to fetch trip details"));
    assert_eq!(store.trips.selected(), None);
}

#[tokio::test]
async fn add_trip_posts_normalized_json_and_appends() {
    let router = Router::new()
        .route(
            "/getAllTrips",
            get(|| async { Json(json!({"trips": [trip_json(1, "Gdansk", "Oslo")]})) }),
        )
        .route(
            "/addTrip",
            post(|Json(body): Json<Value>| async move {
                let mut trip = trip_json(7, "Rotterdam (RTM)", "Hamburg (HAM)");
                trip["serviceType"] = body["serviceType"].clone();
                Json(json!({"trip": trip}))
            }),
        );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");
    store.trips.fetch_all().await.unwrap();

    let created = store.trips.create(valid_trip()).await.unwrap();

    assert_eq!(created.service_type, ServiceType::Sea);
    let ids: Vec<_> = store.trips.items().iter().map(|t| t.trip_id).collect();
    assert_eq!(ids, vec![1, 7]);

    let request = api.log.last();
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["serviceType"], "sea");
    assert_eq!(body["companyId"], 2);
}

#[tokio::test]
async fn incomplete_trip_form_is_rejected_locally() {
    let api = common::serve(Router::new()).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");

    let mut form = valid_trip();
    form.service_type = "rail".into();
    let err = store.trips.create(form).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.message, "Service type must be land, sea or air");
    assert_eq!(api.log.count(), 0);
    assert_eq!(store.trips.status(), FetchStatus::Idle);
}

#[tokio::test]
async fn update_trip_uses_id_path() {
    let router = Router::new()
        .route(
            "/getAllTrips",
            get(|| async { Json(json!({"trips": [trip_json(3, "Gdansk", "Oslo")]})) }),
        )
        .route(
            "/trips/{id}",
            put(|Path(id): Path<i64>| async move {
                Json(json!({"trip": trip_json(id, "Gdansk", "Bergen")}))
            }),
        );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");
    store.trips.fetch_all().await.unwrap();

    let mut form = valid_trip();
    form.from_location = "Gdansk".into();
    form.to_location = "Bergen".into();
    store.trips.update(3, form).await.unwrap();

    assert_eq!(store.trips.items()[0].to_location, "Bergen");
    assert_eq!(api.log.last().path, "/trips/3");
}
