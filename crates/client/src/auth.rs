use shared_types::{AppError, AuthUser, LoginRequest, Session};
use std::sync::Arc;
use validator::Validate;

use crate::api::ApiClient;
use crate::session::{AuthState, SessionStore};

/// Login and logout on top of the shared session.
#[derive(Clone)]
pub struct Auth {
    api: ApiClient,
}

impl Auth {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.api.session()
    }

    /// Exchange credentials for a session.
    ///
    /// Blank credentials fail validation before any request is made and
    /// leave the session untouched. On success the token and role are
    /// stored and persisted; on failure the previous session stays and
    /// the error is recorded for display.
    #[tracing::instrument(skip_all, fields(user = %username_or_email))]
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<AuthUser, AppError> {
        let request = LoginRequest::new(username_or_email, password);
        request.validate()?;

        let session = self.session();
        session.begin_login();
        match self.api.login(&request).await {
            Ok(response) => match session.complete_login(Session::from_login(&response)) {
                Ok(()) => Ok(response.user),
                Err(e) => {
                    let e = AppError::auth(format!("Failed to save session: {e}"));
                    session.fail_login(&e.message);
                    Err(e)
                }
            },
            Err(e) => {
                let e = e.into_auth();
                session.fail_login(&e.message);
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    pub fn token(&self) -> Option<String> {
        self.session().token()
    }

    pub fn role(&self) -> Option<String> {
        self.session().role()
    }

    pub fn state(&self) -> AuthState {
        self.session().state()
    }
}
