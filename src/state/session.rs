//! Persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login writes the session, the landing page reads it on every visit and
//! logout clears it. The session lives under two plain `localStorage` keys,
//! `token` and `userName`, but is handled as one record: writes roll back on
//! partial failure and a half-present pair reads as no session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::routes::Route;
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_NAME_KEY: &str = "userName";

/// Server-issued token plus the display name shown on the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_name: String,
}

/// Session persistence over any [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `window.localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist both halves of `session`, or neither.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure. If the token write fails after the
    /// name was stored, the name is removed again before returning.
    pub fn write(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(USER_NAME_KEY, &session.user_name)?;
        if let Err(err) = self.storage.set_item(TOKEN_KEY, &session.token) {
            if let Err(rollback) = self.storage.remove_item(USER_NAME_KEY) {
                log::warn!("session rollback failed: {rollback}");
            }
            return Err(err);
        }
        Ok(())
    }

    /// Current session, if both values are present and non-empty.
    /// Storage failures read as no session.
    pub fn read(&self) -> Option<Session> {
        let read = |key| match self.storage.get_item(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                log::debug!("session read of {key} failed: {err}");
                None
            }
        };
        let user_name = read(USER_NAME_KEY)?;
        let token = read(TOKEN_KEY)?;
        Some(Session { token, user_name })
    }

    /// Remove both keys. Both removals are attempted.
    ///
    /// # Errors
    ///
    /// Returns the first removal failure.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove_item(TOKEN_KEY);
        let user_name = self.storage.remove_item(USER_NAME_KEY);
        token.and(user_name)
    }
}

// =============================================================================
// ACCESS
// =============================================================================

/// Outcome of the mount-time session check on a protected screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted(Session),
    Redirect(Route),
}

/// Decide whether a protected screen may render. Reads storage only, so
/// repeated calls with unchanged storage agree.
pub fn check_access<S: KeyValueStore>(store: &SessionStore<S>) -> Access {
    match store.read() {
        Some(session) => Access::Granted(session),
        None => Access::Redirect(Route::Login),
    }
}

/// Clear the session and return where the user should land next.
pub fn logout<S: KeyValueStore>(store: &SessionStore<S>) -> Route {
    if let Err(err) = store.clear() {
        log::warn!("logout could not clear session: {err}");
    }
    Route::Login
}
