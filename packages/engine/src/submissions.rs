use tracing::{info, instrument};

use common::UserProgress;
use common::grade::grade;

use crate::engine::Engine;
use crate::error::Result;

impl Engine {
    /// Grade an answer outside any attempt, crediting the user on success.
    ///
    /// Every correct submission appends a progress entry and credits the
    /// challenge's points, repeats included. Incorrect submissions leave no
    /// trace.
    #[instrument(skip(self, answer), fields(user_id = %user_id, challenge_id = %challenge_id))]
    pub fn submit_standalone_answer(
        &self,
        user_id: &str,
        challenge_id: &str,
        answer: &str,
    ) -> Result<bool> {
        self.require_user(user_id)?;
        let challenge = self.require_challenge(challenge_id)?;

        let is_correct = grade(&challenge, answer);
        if is_correct {
            self.log_completion(UserProgress::new(user_id, challenge_id, challenge.points))?;
            self.credit_standalone(user_id, challenge.points)?;
            info!(points = challenge.points, "Standalone answer correct");
        }

        Ok(is_correct)
    }
}
