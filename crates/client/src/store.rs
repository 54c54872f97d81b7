use shared_types::{AppConfig, Company, Port, Shipment, Trip, User};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::auth::Auth;
use crate::session::SessionStore;
use crate::slice::RemoteSlice;
use crate::storage::{FileStorage, SessionStorage};

/// Everything the dashboard views read and dispatch to.
///
/// One session, one API client, and one slice per entity. Clones share
/// all state.
#[derive(Clone)]
pub struct Store {
    pub api: ApiClient,
    pub auth: Auth,
    pub users: RemoteSlice<User>,
    pub companies: RemoteSlice<Company>,
    pub shipments: RemoteSlice<Shipment>,
    pub trips: RemoteSlice<Trip>,
    pub ports: RemoteSlice<Port>,
}

impl Store {
    /// Wire a store against `base_url`, rehydrating the session from `storage`.
    pub fn new(base_url: &str, storage: Arc<dyn SessionStorage>) -> Self {
        let session = Arc::new(SessionStore::restore(storage));
        Self::with_api(ApiClient::new(base_url, session))
    }

    pub fn with_api(api: ApiClient) -> Self {
        Self {
            auth: Auth::new(api.clone()),
            users: RemoteSlice::new(api.clone()),
            companies: RemoteSlice::new(api.clone()),
            shipments: RemoteSlice::new(api.clone()),
            trips: RemoteSlice::new(api.clone()),
            ports: RemoteSlice::new(api.clone()),
            api,
        }
    }

    /// Store for the desktop shell: base URL from config, session in a file.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.api.base_url,
            Arc::new(FileStorage::new(&config.session.path)),
        )
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.api.session()
    }
}
