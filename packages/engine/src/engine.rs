use std::sync::Arc;

use tracing::warn;

use common::session::SessionStore;
use common::{Challenge, Contest, ContestAttempt, User};

use crate::error::{EngineError, Result};
use crate::store::Store;

/// The scoring and attempt-lifecycle engine.
///
/// Owns an injected [`Store`] and [`SessionStore`]; every operation is
/// synchronous and completes fully before returning. Operations read,
/// modify, and write back store records without holding a lock across the
/// round trip, so callers mutating the same attempt or user must serialize
/// those calls themselves.
pub struct Engine {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) sessions: Arc<dyn SessionStore>,
}

impl Engine {
    /// Create an engine over the given store and session store.
    pub fn new(store: Arc<dyn Store>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { store, sessions }
    }

    pub(crate) fn require_user(&self, id: &str) -> Result<User> {
        self.store
            .user(id)?
            .ok_or_else(|| EngineError::UserNotFound(id.to_string()))
    }

    pub(crate) fn require_contest(&self, id: &str) -> Result<Contest> {
        self.store
            .contest(id)?
            .ok_or_else(|| EngineError::ContestNotFound(id.to_string()))
    }

    pub(crate) fn require_challenge(&self, id: &str) -> Result<Challenge> {
        self.store
            .challenge(id)?
            .ok_or_else(|| EngineError::ChallengeNotFound(id.to_string()))
    }

    pub(crate) fn require_attempt(&self, id: &str) -> Result<ContestAttempt> {
        self.store
            .attempt(id)?
            .ok_or_else(|| EngineError::AttemptNotFound(id.to_string()))
    }

    /// Verify the actor exists and may perform catalog mutations.
    pub(crate) fn require_admin(&self, actor_id: &str) -> Result<User> {
        let actor = self.require_user(actor_id)?;
        if !actor.role.is_admin() {
            return Err(EngineError::PermissionDenied);
        }
        Ok(actor)
    }

    /// Overwrite the persisted session record. Best-effort: a session store
    /// failure is logged and never fails the calling operation.
    pub(crate) fn persist_session(&self, user: &User) {
        if let Err(e) = self.sessions.save(user) {
            warn!(user_id = %user.id, error = %e, "Failed to persist session record");
        }
    }

    /// Re-save the session record, but only when it already belongs to this
    /// user. Score updates for other users must not steal the session.
    pub(crate) fn refresh_session(&self, user: &User) {
        match self.sessions.load() {
            Ok(Some(record)) if record.id == user.id => self.persist_session(user),
            Ok(_) => {}
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Failed to read session record");
            }
        }
    }
}
