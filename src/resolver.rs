use chrono::Local;

use crate::api::{self, LoginRequest};
use crate::error::{HoteldeskError, Result};
use crate::models::{Role, Session, UserRecord};
use crate::routes;
use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// Owns the persisted session and maps its role to a landing route.
///
/// The store is injected so callers can swap the filesystem backend for
/// [`crate::session::MemorySessionStore`] in tests.
pub struct SessionResolver<S: SessionStore> {
    store: S,
    login_endpoint: String,
}

impl<S: SessionStore> SessionResolver<S> {
    pub fn new(store: S, login_endpoint: impl Into<String>) -> Self {
        Self {
            store,
            login_endpoint: login_endpoint.into(),
        }
    }

    /// Authenticate against the login endpoint and persist the resulting
    /// session. A 2xx response without a token is rejected. A re-login
    /// overwrites any existing session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = api::login_request(&self.login_endpoint, &request).await?;
        if response.token.is_empty() {
            return Err(HoteldeskError::EmptyToken);
        }

        let session = Session {
            token: response.token,
            user: UserRecord {
                username: response.username,
                role: response.roles,
                logged_in_at: Local::now(),
            },
        };
        self.store_session(&session)?;
        Ok(session)
    }

    /// Persist a session, user record first, so no write order leaves a
    /// token in the store without its user record.
    pub fn store_session(&self, session: &Session) -> Result<()> {
        let user = serde_json::to_string(&session.user)?;
        self.store.set(USER_KEY, &user).map_err(store_err)?;
        self.store.set(TOKEN_KEY, &session.token).map_err(store_err)?;
        Ok(())
    }

    /// Read the persisted session. Missing or unparsable data yields `None`,
    /// never an error; both keys must be present.
    pub fn current_session(&self) -> Option<Session> {
        let user = self.store.get(USER_KEY)?;
        let user: UserRecord = serde_json::from_str(&user).ok()?;
        let token = self.token()?;
        Some(Session { token, user })
    }

    pub fn role(&self) -> Option<Role> {
        self.current_session().and_then(|session| session.role())
    }

    /// Landing route for the current role, falling back to
    /// [`routes::FALLBACK_ROUTE`] when logged out or the role is unknown.
    pub fn landing_route(&self) -> &'static str {
        routes::landing_route(self.role())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Delete the persisted session, token first so no intermediate state
    /// holds a token without a user record. Safe to call when logged out.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY).map_err(store_err)?;
        self.store.remove(USER_KEY).map_err(store_err)?;
        Ok(())
    }
}

fn store_err(err: Box<dyn std::error::Error>) -> HoteldeskError {
    HoteldeskError::StoreError(err.to_string())
}
