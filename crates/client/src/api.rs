use reqwest::Method;
use serde::de::DeserializeOwned;
use shared_types::{AppError, LoginRequest, LoginResponse};
use std::sync::Arc;

use crate::body::RequestBody;
use crate::session::SessionStore;

/// One call against the remote API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// Message reported when a failed response carries none.
    pub fallback: &'static str,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            fallback,
        }
    }

    pub fn get(path: impl Into<String>, fallback: &'static str) -> Self {
        Self::new(Method::GET, path, fallback)
    }

    pub fn query(mut self, query: &[(&str, &str)]) -> Self {
        self.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// HTTP client for the logistics API.
///
/// Carries the session store explicitly: every authorized call reads the
/// token from it, and a 401 answer signs the session out.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, session: Arc<SessionStore>) -> Self {
        Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a path onto the base URL. An empty base leaves the path as-is.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `POST /login`. The only call sent without a bearer token.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::network(format!("Login request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Login response unreadable: {e}")))?;

        if !status.is_success() {
            return Err(AppError::from_response_body(status.as_u16(), &body, "Login failed"));
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected login response: {e}")))
    }

    /// Send an authorized request and return the raw JSON answer.
    #[tracing::instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, AppError> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.url(&request.path));

        let sent_token = self.session.token();
        match &sent_token {
            Some(token) => builder = builder.bearer_auth(token),
            None => tracing::debug!("No session token, sending unauthenticated"),
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.multipart(RequestBody::into_multipart(parts)?),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed to send");
            AppError::network(format!("{}: {e}", request.fallback))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("{}: {e}", request.fallback)))?;

        if !status.is_success() {
            let err = AppError::from_response_body(status.as_u16(), &body, request.fallback);
            tracing::warn!(status = status.as_u16(), error = %err.message, "API returned an error");
            if let Some(token) = sent_token.as_deref().filter(|_| err.is_unauthorized()) {
                self.session.expire(token);
            }
            return Err(err);
        }

        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("{}: unexpected response ({e})", request.fallback)))
    }

    /// Send an authorized request and decode the answer as `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let fallback = request.fallback;
        let value = self.send(request).await?;
        serde_json::from_value(value)
            .map_err(|e| AppError::decode(format!("{fallback}: unexpected response ({e})")))
    }
}
