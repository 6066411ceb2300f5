//! Signed-in user
//!
//! The terminal remembers who is signed in under one store key so a restart
//! lands on the same screen. There is no password check; picking a staff
//! member from the directory is the whole login.

use shared::{User, View, keys};
use thiserror::Error;

use crate::store::{KvStoreExt, SharedStore, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("User is inactive: {0}")]
    InactiveUser(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Current-user session backed by the store
#[derive(Clone)]
pub struct Session {
    store: SharedStore,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Sign in as the staff member with `user_id`
    pub fn login(&self, user_id: &str) -> SessionResult<User> {
        let staff: Vec<User> = self.store.get_or_default(keys::STAFF_USERS)?;
        let user = staff
            .into_iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| SessionError::UnknownUser(user_id.to_string()))?;
        if !user.active {
            return Err(SessionError::InactiveUser(user_id.to_string()));
        }

        self.store.set(keys::CURRENT_USER, &user)?;
        tracing::info!(user_id, role = %user.role, "User signed in");
        Ok(user)
    }

    pub fn logout(&self) -> SessionResult<()> {
        self.store.remove(keys::CURRENT_USER)?;
        tracing::info!("User signed out");
        Ok(())
    }

    pub fn current(&self) -> SessionResult<Option<User>> {
        Ok(self.store.get(keys::CURRENT_USER)?)
    }

    /// Views the signed-in user may open; empty when nobody is signed in
    pub fn available_views(&self) -> SessionResult<Vec<View>> {
        Ok(self.current()?.map(|user| user.role.views()).unwrap_or_default())
    }
}
