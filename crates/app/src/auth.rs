use client::{NavEntry, SessionStore, Store};
use dioxus::prelude::*;
use shared_types::{Session, UserRole};

/// Reactive mirror of the client session.
///
/// The session itself lives in [`SessionStore`]; views read this signal so
/// they re-render on login, logout and token expiry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthContext {
    pub session: Signal<Session>,
}

impl AuthContext {
    pub fn new(store: &SessionStore) -> Self {
        Self {
            session: Signal::new(store.session()),
        }
    }

    /// Pull the current session out of the store. Called after every
    /// request that may have signed the user in or out.
    pub fn sync(&mut self, store: &SessionStore) {
        let current = store.session();
        if *self.session.peek() != current {
            self.session.set(current);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn role(&self) -> Option<String> {
        self.session.read().role.clone()
    }
}

pub fn use_store() -> Store {
    use_context::<Store>()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

pub fn use_user_role() -> Option<UserRole> {
    use_auth().session.read().user_role()
}

/// Sidebar entries for the signed-in role.
pub fn use_nav_sections() -> &'static [NavEntry] {
    let role = use_auth().role();
    client::sections_for(role.as_deref())
}
