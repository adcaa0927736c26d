use tracing::{info, instrument};

use common::User;

use crate::engine::Engine;
use crate::error::Result;

impl Engine {
    /// Credit a correct standalone answer to a user's running total.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn credit_standalone(&self, user_id: &str, points: i32) -> Result<i32> {
        self.credit(user_id, points, "standalone")
    }

    /// Credit a finished attempt's final score to a user's running total.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn credit_contest(&self, user_id: &str, final_score: i32) -> Result<i32> {
        self.credit(user_id, final_score, "contest")
    }

    /// A user's cumulative score. Zero when the user is unknown.
    pub fn user_score(&self, user_id: &str) -> Result<i32> {
        Ok(self.store.user(user_id)?.map(|u| u.score).unwrap_or(0))
    }

    /// All users ordered by score descending. The sort is stable, so ties
    /// keep registration order.
    pub fn leaderboard(&self) -> Result<Vec<User>> {
        let mut users = self.store.users()?;
        users.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(users)
    }

    fn credit(&self, user_id: &str, points: i32, source: &str) -> Result<i32> {
        let mut user = self.require_user(user_id)?;
        user.score += points;
        self.store.put_user(user.clone())?;
        self.refresh_session(&user);

        info!(points, total = user.score, source, "Score credited");
        Ok(user.score)
    }
}
