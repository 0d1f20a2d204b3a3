//! Session-cookie authentication.
//!
//! Requests carry a `geomark_session` cookie whose value is an opaque token.
//! [`SessionStore`] maps tokens to accounts; the [`AuthUser`] extractor
//! resolves the cookie and rejects requests without a valid session (401) or
//! with an unverified account (403), the contract the feature routes inherit
//! from the original app's `['auth', 'verified']` middleware.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::error::{GeomarkError, Result};
use crate::model::UserId;

pub const SESSION_COOKIE: &str = "geomark_session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    pub name: String,
    pub verified: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionEntry {
    token: String,
    account: Account,
}

/// Shared token-to-account map. Cloning is cheap; all clones see the same
/// sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Account>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load sessions from a `sessions.json` file. A missing file is an empty
    /// store; a corrupt file is an error (unlike client-local marker storage,
    /// silently dropping server credentials would be a misfeature).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(GeomarkError::Io)?;
        let entries: Vec<SessionEntry> =
            serde_json::from_str(&content).map_err(GeomarkError::Serialization)?;
        let store = Self::new();
        {
            let mut map = store.inner.write().expect("session store lock poisoned");
            for entry in entries {
                map.insert(entry.token, entry.account);
            }
        }
        Ok(store)
    }

    /// Issue a fresh session for `account`, returning the token.
    pub fn issue(&self, account: Account) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(token.clone(), account);
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Account> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .is_empty()
    }
}

/// Extractor for the authenticated, verified account behind the request.
pub struct AuthUser(pub Account);

impl<S> FromRequestParts<S> for AuthUser
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let sessions = SessionStore::from_ref(state);
        let token = session_token(parts).ok_or(ApiError::Unauthenticated)?;
        let account = sessions
            .resolve(&token)
            .ok_or(ApiError::Unauthenticated)?;
        if !account.verified {
            return Err(ApiError::Unverified);
        }
        Ok(AuthUser(account))
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
