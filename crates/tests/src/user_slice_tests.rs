use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use client::FetchStatus;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Attachment, CreateUserRequest, UpdateUserRequest};

use crate::common::{self, user_json};

fn ids(store: &client::Store) -> Vec<i64> {
    store.users.items().iter().map(|u| u.user_id).collect()
}

fn valid_user() -> CreateUserRequest {
    CreateUserRequest {
        username: "nora".into(),
        full_name: "Nora Vik".into(),
        email: "nora@example.com".into(),
        password: "secret1".into(),
        phone: "+47 900 00 000".into(),
        role: "companyAdmin".into(),
        image: None,
    }
}

#[tokio::test]
async fn fetch_all_replaces_collection_with_bearer_token() {
    let router = Router::new().route(
        "/get-users",
        get(|| async { Json(json!([user_json(1, "Anna Berg"), user_json(2, "Bo Lind")])) }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");

    store.users.fetch_all().await.unwrap();

    assert_eq!(ids(&store), vec![1, 2]);
    assert_eq!(store.users.status(), FetchStatus::Succeeded);
    assert_eq!(store.users.error(), None);
    assert_eq!(api.log.last().authorization.as_deref(), Some("Bearer t1"));
}

#[tokio::test]
async fn fetch_failure_stores_server_or_fallback_message() {
    let router = Router::new().route(
        "/get-users",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "database unavailable"})),
            )
        }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");

    assert!(store.users.fetch_all().await.is_err());
    assert_eq!(store.users.status(), FetchStatus::Failed);
    assert_eq!(store.users.error().as_deref(), Some("database unavailable"));

    // Blank bodies fall back to the fixed message.
    let router = Router::new().route("/get-users", get(|| async { StatusCode::BAD_GATEWAY }));
    let other = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&other, "superAdmin");
    assert!(store.users.fetch_all().await.is_err());
    assert_eq!(store.users.error().as_deref(), Some("Failed to fetch users"));
}

#[tokio::test]
async fn create_rejected_with_400_keeps_collection() {
    let router = Router::new()
        .route("/get-users", get(|| async { Json(json!([user_json(1, "Anna Berg")])) }))
        .route(
            "/create-user",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"message": "email taken"})),
                )
            }),
        );
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");
    store.users.fetch_all().await.unwrap();

    let err = store.users.create(valid_user()).await.unwrap_err();

    assert_eq!(err.status, Some(400));
    assert_eq!(ids(&store), vec![1]);
    assert_eq!(store.users.error().as_deref(), Some("email taken"));
    assert_eq!(store.users.status(), FetchStatus::Failed);
}

#[tokio::test]
async fn create_appends_and_sends_multipart() {
    let router = Router::new()
        .route("/get-users", get(|| async { Json(json!([user_json(1, "Anna Berg")])) }))
        .route("/create-user", post(|| async { Json(user_json(3, "Nora Vik")) }));
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");
    store.users.fetch_all().await.unwrap();

    let mut form = valid_user();
    form.image = Some(Attachment::new("nora.png", "image/png", vec![137, 80, 78, 71]));
    let created = store.users.create(form).await.unwrap();

    assert_eq!(created.full_name, "Nora Vik");
    assert_eq!(ids(&store), vec![1, 3]);

    let request = api.log.last();
    assert_eq!(request.path, "/create-user");
    assert_eq!(request.authorization.as_deref(), Some("Bearer t1"));
    assert!(request
        .content_type
        .as_deref()
        .is_some_and(|c| c.starts_with("multipart/form-data")));
    assert!(request.body.contains("name=\"username\""));
    assert!(request.body.contains("filename=\"nora.png\""));
}

#[tokio::test]
async fn invalid_create_form_sends_nothing() {
    let router = Router::new()
        .route("/get-users", get(|| async { Json(json!([user_json(1, "Anna Berg")])) }))
        .route("/create-user", post(|| async { Json(user_json(3, "Nora Vik")) }));
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");
    store.users.fetch_all().await.unwrap();

    let mut form = valid_user();
    form.password = "123".into();
    let err = store.users.create(form).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.message, "Password must be at least 6 characters");
    assert_eq!(api.log.count(), 1);
    assert_eq!(store.users.status(), FetchStatus::Succeeded);
    assert_eq!(store.users.error(), None);
}

#[tokio::test]
async fn update_replaces_matching_record_in_place() {
    let router = Router::new()
        .route(
            "/get-users",
            get(|| async {
                Json(json!([
                    user_json(1, "Anna Berg"),
                    user_json(2, "Bo Lind"),
                    user_json(3, "Cia Holm")
                ]))
            }),
        )
        .route("/update-user-profile", put(|| async { Json(user_json(2, "Bo Lindqvist")) }));
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "companyAdmin");
    store.users.fetch_all().await.unwrap();

    let form = UpdateUserRequest {
        full_name: Some("Bo Lindqvist".into()),
        ..Default::default()
    };
    store.users.update(2, form).await.unwrap();

    let names: Vec<_> = store.users.items().into_iter().map(|u| u.full_name).collect();
    assert_eq!(names, vec!["Anna Berg", "Bo Lindqvist", "Cia Holm"]);

    let request = api.log.last();
    assert_eq!(request.method, "PUT");
    assert!(request.body.contains("name=\"userId\""));
    assert!(request.body.contains("Bo Lindqvist"));
}

#[tokio::test]
async fn update_for_unknown_id_is_silently_dropped() {
    let router = Router::new()
        .route("/get-users", get(|| async { Json(json!([user_json(1, "Anna Berg")])) }))
        .route("/update-user-profile", put(|| async { Json(user_json(5, "Ghost")) }));
    let api = common::serve(router).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");
    store.users.fetch_all().await.unwrap();
    let before = store.users.items();

    let result = store
        .users
        .update(5, UpdateUserRequest::default())
        .await;

    assert!(result.is_ok());
    assert_eq!(store.users.items(), before);
    assert_eq!(store.users.error(), None);
    assert_eq!(store.users.status(), FetchStatus::Succeeded);
}

#[tokio::test]
async fn transport_failure_is_a_network_error_and_keeps_items() {
    let base_url = common::serve_once_then_drop(json!([user_json(1, "Anna Berg"), user_json(2, "Bo Lind")])).await;
    let store = common::signed_in_store_at(&base_url, "superAdmin");
    store.users.fetch_all().await.unwrap();
    assert_eq!(ids(&store), vec![1, 2]);

    let err = store.users.fetch_all().await.unwrap_err();

    assert_eq!(err.kind, shared_types::AppErrorKind::Network);
    assert_eq!(store.users.status(), FetchStatus::Failed);
    assert!(store
        .users
        .error()
        .is_some_and(|e| e.starts_with("Failed to fetch users")));
    assert_eq!(ids(&store), vec![1, 2]);
    assert_eq!(store.companies.status(), FetchStatus::Idle);
}

#[tokio::test]
async fn create_transport_failure_keeps_collection() {
    let base_url = common::serve_once_then_drop(json!([user_json(1, "Anna Berg")])).await;
    let store = common::signed_in_store_at(&base_url, "superAdmin");
    store.users.fetch_all().await.unwrap();

    let err = store.users.create(valid_user()).await.unwrap_err();

    assert_eq!(err.kind, shared_types::AppErrorKind::Network);
    assert_eq!(store.users.status(), FetchStatus::Failed);
    assert!(store
        .users
        .error()
        .is_some_and(|e| e.starts_with("Failed to create user")));
    assert_eq!(ids(&store), vec![1]);
}
