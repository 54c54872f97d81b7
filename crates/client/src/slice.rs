//! Generic remote collection: one entity list plus its fetch status.
//!
//! Every entity screen goes through a [`RemoteSlice`]. The reducers on
//! [`SliceState`] are plain functions of the current state and an outcome,
//! so the whole lifecycle can be tested without a network.

use shared_types::{paginate, AppError, Searchable};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use validator::Validate;

use crate::api::{ApiClient, ApiRequest};
use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// State of one slice. `items` keeps response order.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<E> {
    pub items: Vec<E>,
    /// Record loaded by the last fetch-by-id.
    pub selected: Option<E>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl<E> Default for SliceState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            status: FetchStatus::Idle,
            error: None,
        }
    }
}

impl<E: Resource> SliceState<E> {
    pub fn pending(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    pub fn rejected(&mut self, message: impl Into<String>) {
        self.status = FetchStatus::Failed;
        self.error = Some(message.into());
    }

    pub fn list_fulfilled(&mut self, items: Vec<E>) {
        self.items = items;
        self.status = FetchStatus::Succeeded;
    }

    pub fn detail_pending(&mut self) {
        self.pending();
        self.selected = None;
    }

    pub fn detail_fulfilled(&mut self, item: E) {
        self.selected = Some(item);
        self.status = FetchStatus::Succeeded;
    }

    pub fn created(&mut self, item: E) {
        self.items.push(item);
        self.status = FetchStatus::Succeeded;
    }

    /// Replace the first record with the same id. Returns `false` and
    /// leaves the collection alone when there is none.
    pub fn updated(&mut self, item: E) -> bool {
        self.status = FetchStatus::Succeeded;
        let id = item.id();
        if let Some(selected) = self.selected.as_mut().filter(|s| s.id() == id) {
            *selected = item.clone();
        }
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

impl<E: Searchable> SliceState<E> {
    /// Records matching a search box query, in collection order.
    pub fn filtered(&self, query: &str) -> Vec<&E> {
        self.items.iter().filter(|item| item.matches(query)).collect()
    }

    /// One page of the filtered records, plus the filtered total.
    pub fn page(&self, query: &str, page: usize, rows_per_page: usize) -> (Vec<&E>, usize) {
        let filtered = self.filtered(query);
        let total = filtered.len();
        (paginate(&filtered, page, rows_per_page).to_vec(), total)
    }
}

/// A slice bound to its remote endpoints.
///
/// Clones share the same state. Requests are never deduplicated or
/// cancelled: whichever response settles last decides the state.
#[derive(Clone)]
pub struct RemoteSlice<R> {
    api: ApiClient,
    state: Arc<Mutex<SliceState<R>>>,
}

impl<R: Resource> RemoteSlice<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SliceState::default())),
        }
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut SliceState<R>) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    fn reject(&self, err: &AppError) {
        tracing::warn!(entity = R::NAME, error = %err, "Request failed");
        self.with_state(|s| s.rejected(err.message.clone()));
    }

    pub fn snapshot(&self) -> SliceState<R> {
        self.with_state(|s| s.clone())
    }

    pub fn items(&self) -> Vec<R> {
        self.with_state(|s| s.items.clone())
    }

    pub fn selected(&self) -> Option<R> {
        self.with_state(|s| s.selected.clone())
    }

    pub fn status(&self) -> FetchStatus {
        self.with_state(|s| s.status)
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|s| s.error.clone())
    }

    /// Load the whole collection, replacing what the slice holds.
    pub async fn fetch_all(&self) -> Result<(), AppError> {
        self.fetch_where(&[]).await
    }

    /// Load the collection with query parameters (port code search).
    #[tracing::instrument(skip_all, fields(entity = R::NAME))]
    pub async fn fetch_where(&self, query: &[(&str, &str)]) -> Result<(), AppError> {
        let endpoints = R::endpoints();
        self.with_state(SliceState::pending);

        let request = ApiRequest::get(endpoints.list, endpoints.messages.fetch_all).query(query);
        match self.api.send(request).await.and_then(R::decode_list) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Collection loaded");
                self.with_state(|s| s.list_fulfilled(items));
                Ok(())
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    /// Load one record into `selected`. The collection is not touched.
    #[tracing::instrument(skip_all, fields(entity = R::NAME, id = id))]
    pub async fn fetch_by_id(&self, id: i64) -> Result<R, AppError> {
        let endpoints = R::endpoints();
        self.with_state(SliceState::detail_pending);

        let request = ApiRequest::get(endpoints.detail_path(id), endpoints.messages.fetch_one);
        match self.api.send(request).await.and_then(R::decode_item) {
            Ok(item) => {
                self.with_state(|s| s.detail_fulfilled(item.clone()));
                Ok(item)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    /// Validate, send and append the returned record.
    ///
    /// A validation failure is returned before any request and leaves the
    /// slice exactly as it was.
    #[tracing::instrument(skip_all, fields(entity = R::NAME))]
    pub async fn create(&self, form: R::CreateForm) -> Result<R, AppError> {
        form.validate()?;
        let endpoints = R::endpoints();
        let path = endpoints.create.ok_or_else(|| read_only::<R>("created"))?;
        let body = R::create_body(form)?;

        self.with_state(SliceState::pending);
        let request = ApiRequest::new(reqwest::Method::POST, path, endpoints.messages.create).body(body);
        match self.api.send(request).await.and_then(R::decode_item) {
            Ok(item) => {
                tracing::info!(id = item.id(), "Record created");
                self.with_state(|s| s.created(item.clone()));
                Ok(item)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    /// Validate, send and replace the record with the same id.
    ///
    /// When the collection holds no such record the answer is dropped
    /// without an error.
    #[tracing::instrument(skip_all, fields(entity = R::NAME, id = id))]
    pub async fn update(&self, id: i64, form: R::UpdateForm) -> Result<R, AppError> {
        form.validate()?;
        let endpoints = R::endpoints();
        let (method, path) = endpoints
            .update
            .as_ref()
            .ok_or_else(|| read_only::<R>("updated"))?;
        let body = R::update_body(id, form)?;

        self.with_state(SliceState::pending);
        let request = ApiRequest::new(
            method.clone(),
            path.replace("{id}", &id.to_string()),
            endpoints.messages.update,
        )
        .body(body);
        match self.api.send(request).await.and_then(R::decode_item) {
            Ok(item) => {
                if !self.with_state(|s| s.updated(item.clone())) {
                    tracing::warn!(id = item.id(), "Updated record is not in the collection, dropping it");
                }
                Ok(item)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }
}

fn read_only<R: Resource>(action: &str) -> AppError {
    AppError::validation(
        format!("{} records cannot be {action}", R::NAME),
        HashMap::new(),
    )
}
