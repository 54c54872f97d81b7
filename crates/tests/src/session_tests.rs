use axum::{http::StatusCode, routing::{get, post}, Json, Router};
use client::{AuthState, FetchStatus, SessionStorage, Store};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::AppErrorKind;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::common;

fn login_ok() -> Router {
    Router::new().route(
        "/login",
        post(|Json(_): Json<Value>| async {
            Json(json!({
                "token": "t1",
                "user": {"userId": 4, "username": "ops", "role": "companyAdmin"}
            }))
        }),
    )
}

#[tokio::test]
async fn login_stores_token_and_role_across_reload() {
    let api = common::serve(login_ok()).await;
    let (store, storage) = common::anonymous_store(&api);

    let user = store.auth.login("ops@example.com", "secret").await.unwrap();
    assert_eq!(user.role, "companyAdmin");
    assert_eq!(store.auth.token().as_deref(), Some("t1"));
    assert_eq!(store.auth.role().as_deref(), Some("companyAdmin"));
    assert!(matches!(store.auth.state(), AuthState::Authenticated(_)));

    let reloaded = Store::new(&api.base_url, Arc::new(storage));
    assert_eq!(reloaded.auth.token().as_deref(), Some("t1"));
    assert_eq!(reloaded.auth.role().as_deref(), Some("companyAdmin"));
}

#[tokio::test]
async fn login_is_sent_unauthenticated_as_camel_case_json() {
    let api = common::serve(login_ok()).await;
    let (store, _storage) = common::signed_in_store(&api, "superAdmin");

    store.auth.login("ops", "secret").await.unwrap();

    let request = api.log.last();
    assert_eq!(request.method, "POST");
    assert_eq!(request.authorization, None);
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({"usernameOrEmail": "ops", "password": "secret"}));
}

#[tokio::test]
async fn rejected_login_surfaces_message_and_keeps_session() {
    let router = Router::new().route(
        "/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Invalid credentials"})),
            )
        }),
    );
    let api = common::serve(router).await;
    let (store, storage) = common::signed_in_store(&api, "superAdmin");

    let err = store.auth.login("ops", "wrong").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Auth);
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(store.auth.token().as_deref(), Some("t1"));
    assert_eq!(store.session().last_error().as_deref(), Some("Invalid credentials"));
    assert_eq!(storage.load().unwrap().and_then(|s| s.token).as_deref(), Some("t1"));
}

#[tokio::test]
async fn login_without_server_message_uses_fallback() {
    let router = Router::new().route(
        "/login",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let api = common::serve(router).await;
    let (store, _storage) = common::anonymous_store(&api);

    let err = store.auth.login("ops", "secret").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Auth);
    assert_eq!(err.message, "Login failed");
    assert_eq!(store.auth.state(), AuthState::Anonymous);
}

#[tokio::test]
async fn login_network_failure_is_an_auth_error() {
    let session = Arc::new(client::SessionStore::restore(Arc::new(client::MemoryStorage::new())));
    // Port 9 (discard) is closed on test hosts.
    let store = Store::with_api(client::ApiClient::new("http://127.0.0.1:9", session));

    let err = store.auth.login("ops", "secret").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Auth);
    assert_eq!(store.auth.token(), None);
    assert!(store.session().last_error().is_some());
}

#[tokio::test]
async fn blank_username_issues_no_request() {
    let api = common::serve(login_ok()).await;
    let (store, _storage) = common::anonymous_store(&api);

    let err = store.auth.login("", "secret").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Email or Username is required.");
    assert_eq!(
        err.field_errors.values().collect::<Vec<_>>(),
        vec!["Email or Username is required."]
    );
    assert_eq!(api.log.count(), 0);
    assert_eq!(store.auth.state(), AuthState::Anonymous);
}

#[tokio::test]
async fn logout_clears_token_and_role() {
    let api = common::serve(Router::new()).await;
    let (store, storage) = common::signed_in_store(&api, "companyAdmin");

    store.auth.logout();
    store.auth.logout();

    assert_eq!(store.auth.token(), None);
    assert_eq!(store.auth.role(), None);
    assert_eq!(storage.load().unwrap(), None);
    assert_eq!(api.log.count(), 0);
}

#[tokio::test]
async fn unauthorized_call_signs_the_session_out() {
    let router = Router::new().route(
        "/get-users",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Token expired"})),
            )
        }),
    );
    let api = common::serve(router).await;
    let (store, storage) = common::signed_in_store(&api, "superAdmin");

    let err = store.users.fetch_all().await.unwrap_err();

    assert_eq!(err.status, Some(401));
    assert_eq!(store.users.status(), FetchStatus::Failed);
    assert_eq!(store.users.error().as_deref(), Some("Token expired"));
    assert_eq!(store.auth.state(), AuthState::Anonymous);
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn stale_unauthorized_answer_keeps_a_newer_session() {
    let arrived = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let (handler_arrived, handler_release) = (arrived.clone(), release.clone());
    let router = Router::new()
        .route(
            "/get-users",
            get(move || {
                let (arrived, release) = (handler_arrived.clone(), handler_release.clone());
                async move {
                    arrived.notify_one();
                    release.notified().await;
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"message": "Token expired"})),
                    )
                }
            }),
        )
        .route(
            "/login",
            post(|| async { Json(json!({"token": "t2", "user": {"role": "superAdmin"}})) }),
        );
    let api = common::serve(router).await;
    let (store, storage) = common::signed_in_store(&api, "superAdmin");

    let pending = {
        let users = store.users.clone();
        tokio::spawn(async move { users.fetch_all().await })
    };
    arrived.notified().await;
    store.auth.login("ops", "secret").await.unwrap();
    assert_eq!(store.auth.token().as_deref(), Some("t2"));

    release.notify_one();
    let err = pending.await.unwrap().unwrap_err();

    assert_eq!(err.status, Some(401));
    assert_eq!(store.auth.token().as_deref(), Some("t2"));
    assert!(matches!(store.auth.state(), AuthState::Authenticated(_)));
    assert_eq!(storage.load().unwrap().and_then(|s| s.token).as_deref(), Some("t2"));
}

#[tokio::test]
async fn login_that_cannot_be_persisted_fails() {
    struct ReadOnlyDisk;

    impl SessionStorage for ReadOnlyDisk {
        fn load(&self) -> std::io::Result<Option<shared_types::Session>> {
            Ok(None)
        }
        fn save(&self, _: &shared_types::Session) -> std::io::Result<()> {
            Err(std::io::Error::other("read-only file system"))
        }
        fn clear(&self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let api = common::serve(login_ok()).await;
    let store = Store::new(&api.base_url, Arc::new(ReadOnlyDisk));

    let err = store.auth.login("ops", "secret").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Auth);
    assert_eq!(store.auth.token(), None);
    assert_eq!(store.auth.state(), AuthState::Anonymous);
    assert!(store.session().last_error().is_some_and(|e| e.starts_with("Failed to save session")));
}
