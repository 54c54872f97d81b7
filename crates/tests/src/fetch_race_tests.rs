use axum::{routing::get, Json, Router};
use client::FetchStatus;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common::{self, user_json};

/// First request parks until released; later ones answer at once.
#[derive(Default)]
struct Gate {
    calls: AtomicUsize,
    first_arrived: Notify,
    release: Notify,
}

#[tokio::test]
async fn overlapping_fetches_last_to_settle_wins() {
    let gate = Arc::new(Gate::default());
    let handler_gate = gate.clone();
    let router = Router::new().route(
        "/get-users",
        get(move || {
            let gate = handler_gate.clone();
            async move {
                if gate.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    gate.first_arrived.notify_one();
                    gate.release.notified().await;
                    Json(json!([user_json(1, "A")]))
                } else {
                    Json(json!([user_json(2, "B")]))
                }
            }
        }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");

    let first = {
        let users = store.users.clone();
        tokio::spawn(async move { users.fetch_all().await })
    };
    gate.first_arrived.notified().await;

    store.users.fetch_all().await.unwrap();
    assert_eq!(store.users.items()[0].full_name, "B");

    gate.release.notify_one();
    first.await.unwrap().unwrap();

    let names: Vec<_> = store.users.items().into_iter().map(|u| u.full_name).collect();
    assert_eq!(names, vec!["A"]);
    assert_eq!(store.users.status(), FetchStatus::Succeeded);
}

#[tokio::test]
async fn slices_fail_independently() {
    let router = Router::new()
        .route("/get-users", get(|| async { Json(json!([user_json(1, "A")])) }))
        .route(
            "/get-companies",
            get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");

    let (users, companies) = tokio::join!(store.users.fetch_all(), store.companies.fetch_all());

    assert!(users.is_ok());
    assert!(companies.is_err());
    assert_eq!(store.users.status(), FetchStatus::Succeeded);
    assert_eq!(store.companies.status(), FetchStatus::Failed);
    assert_eq!(store.companies.error().as_deref(), Some("Failed to fetch companies"));
}
