use std::sync::Mutex;

use crate::user::User;

use super::error::SessionError;
use super::traits::SessionStore;

/// In-memory session store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<User>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, user: &User) -> Result<(), SessionError> {
        let mut record = self.record.lock().map_err(|_| SessionError::Poisoned)?;
        *record = Some(user.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<User>, SessionError> {
        let record = self.record.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(record.clone())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut record = self.record.lock().map_err(|_| SessionError::Poisoned)?;
        *record = None;
        Ok(())
    }
}
