//! Session gate for signdesk.
//!
//! A single shared password gates access to the knowledge base. The
//! authenticated flag is held in memory on an explicitly owned [`Session`]
//! and persisted through the [`StateStore`] so it survives restarts.
//!
//! This is advisory access control, not a security boundary: the shared
//! secret ships in configuration defaults and anyone with the binary can
//! read it. The original tool made the same trade-off deliberately, and
//! signdesk preserves it rather than pretending otherwise.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::StateStore;

/// State key holding the session flag.
///
/// Value is the string literal `"true"` when authenticated; the key is
/// absent otherwise. No other values are ever written.
pub const AUTH_KEY: &str = "authenticated";

/// State key holding the timestamp of the most recent successful login.
pub const LAST_LOGIN_KEY: &str = "last_login";

/// An authenticated (or not) session over the knowledge base.
///
/// The in-memory flag is initialized once from the store at construction
/// and is the sole gate for all protected operations.
#[derive(Debug)]
pub struct Session {
    /// Whether this session has presented the correct shared password.
    authenticated: bool,
    /// The shared password candidates are checked against.
    password: String,
    /// Persistence backend for the session flag.
    store: StateStore,
}

impl Session {
    /// Open a session, reading the persisted flag once.
    ///
    /// `password` is the shared secret from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the persisted flag fails.
    pub fn open(store: StateStore, password: impl Into<String>) -> Result<Self> {
        let authenticated = matches!(store.get(AUTH_KEY)?.as_deref(), Some("true"));
        debug!("Session opened, authenticated = {}", authenticated);
        Ok(Self {
            authenticated,
            password: password.into(),
            store,
        })
    }

    /// Attempt to log in with the given password.
    ///
    /// The comparison is exact: case-sensitive, no trimming. On match the
    /// flag is set and persisted and `Ok(true)` is returned. On mismatch
    /// state is unchanged and `Ok(false)` is returned; a wrong password is
    /// never an error. There is no rate limiting or lockout.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the flag fails.
    pub fn login(&mut self, candidate: &str) -> Result<bool> {
        if candidate != self.password {
            debug!("Login attempt rejected");
            return Ok(false);
        }

        self.store.set(AUTH_KEY, "true")?;
        self.store.set(LAST_LOGIN_KEY, &Utc::now().to_rfc3339())?;
        self.authenticated = true;
        info!("Session authenticated");
        Ok(true)
    }

    /// Log out, clearing the persisted flag. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if removing the persisted flag fails.
    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(AUTH_KEY)?;
        self.authenticated = false;
        info!("Session logged out");
        Ok(())
    }

    /// Whether this session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Timestamp of the most recent successful login, if any.
    ///
    /// Survives logout; cleared only when the state database is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn last_login(&self) -> Result<Option<DateTime<Utc>>> {
        let value = self.store.get(LAST_LOGIN_KEY)?;
        Ok(value
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    /// Borrow the underlying state store.
    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Consume the session, returning the underlying store.
    #[must_use]
    pub fn into_store(self) -> StateStore {
        self.store
    }
}
