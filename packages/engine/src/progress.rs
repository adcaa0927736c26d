use common::UserProgress;

use crate::engine::Engine;
use crate::error::Result;

impl Engine {
    /// All progress entries of a user, oldest first.
    pub fn progress_for_user(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        Ok(self.store.progress_for(user_id)?)
    }

    /// Whether the user has ever completed the challenge standalone.
    pub fn has_completed(&self, user_id: &str, challenge_id: &str) -> Result<bool> {
        Ok(self
            .store
            .progress_for(user_id)?
            .iter()
            .any(|p| p.challenge_id == challenge_id))
    }

    pub(crate) fn log_completion(&self, entry: UserProgress) -> Result<()> {
        Ok(self.store.push_progress(entry)?)
    }
}
