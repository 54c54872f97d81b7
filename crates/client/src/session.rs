use shared_types::{Session, UserRole};
use std::io;
use std::sync::{Arc, Mutex};

use crate::storage::SessionStorage;

/// Where the login flow currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated(Session),
}

struct SessionInner {
    session: Session,
    authenticating: bool,
    error: Option<String>,
}

/// The process-wide authentication session.
///
/// Holds the token and role in memory and mirrors every change into its
/// [`SessionStorage`] before returning. Handed explicitly to the API client
/// and the views; nothing reads the storage behind its back.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    inner: Mutex<SessionInner>,
}

impl SessionStore {
    /// Rehydrate the session from durable storage (the "page reload" path).
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let session = match storage.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read persisted session, starting anonymous");
                Session::default()
            }
        };
        tracing::debug!(authenticated = session.is_authenticated(), "Session restored");
        Self {
            storage,
            inner: Mutex::new(SessionInner {
                session,
                authenticating: false,
                error: None,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.lock().session.token.clone()
    }

    pub fn role(&self) -> Option<String> {
        self.lock().session.role.clone()
    }

    /// The role parsed into a known [`UserRole`]; `None` when anonymous or unknown.
    pub fn user_role(&self) -> Option<UserRole> {
        self.lock().session.user_role()
    }

    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_authenticated()
    }

    /// Message of the last failed login, cleared when a new attempt starts.
    pub fn last_error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn state(&self) -> AuthState {
        let inner = self.lock();
        if inner.authenticating {
            AuthState::Authenticating
        } else if inner.session.is_authenticated() {
            AuthState::Authenticated(inner.session.clone())
        } else {
            AuthState::Anonymous
        }
    }

    pub(crate) fn begin_login(&self) {
        let mut inner = self.lock();
        inner.authenticating = true;
        inner.error = None;
    }

    /// Store a freshly issued session. Persisted before the in-memory copy
    /// changes, under the same lock; when the write fails memory is left
    /// as it was.
    pub(crate) fn complete_login(&self, session: Session) -> io::Result<()> {
        let mut inner = self.lock();
        if let Err(e) = self.storage.save(&session) {
            tracing::error!(error = %e, "Failed to persist session");
            return Err(e);
        }
        tracing::info!(role = session.role.as_deref().unwrap_or(""), "Signed in");
        inner.session = session;
        inner.authenticating = false;
        Ok(())
    }

    /// Leave the session as it was and record why the login failed.
    pub(crate) fn fail_login(&self, message: &str) {
        let mut inner = self.lock();
        inner.authenticating = false;
        inner.error = Some(message.to_string());
        tracing::warn!(error = message, "Sign-in failed");
    }

    /// Drop the session. Always succeeds and is idempotent.
    pub fn logout(&self) {
        let mut inner = self.lock();
        self.sign_out(&mut inner);
    }

    /// A 401 on an authorized call. Only signs out when `sent_token` is
    /// still the current token; a session issued after the request went
    /// out is kept.
    pub(crate) fn expire(&self, sent_token: &str) {
        let mut inner = self.lock();
        if inner.session.token.as_deref() != Some(sent_token) {
            tracing::debug!("Ignoring 401 for a token that is no longer current");
            return;
        }
        tracing::warn!("Session token rejected by the API, signing out");
        self.sign_out(&mut inner);
    }

    fn sign_out(&self, inner: &mut SessionInner) {
        if let Err(e) = self.storage.clear() {
            tracing::error!(error = %e, "Failed to clear persisted session");
        }
        if inner.session.is_authenticated() {
            tracing::info!("Signed out");
        }
        inner.session = Session::default();
        inner.authenticating = false;
        inner.error = None;
    }
}
