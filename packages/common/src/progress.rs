use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one successful standalone challenge completion.
///
/// The log is append-only; answering the same challenge correctly again
/// appends another entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    /// The user who completed the challenge.
    pub user_id: String,
    /// The completed challenge.
    pub challenge_id: String,
    /// Always true for recorded entries; kept for the history format.
    pub completed: bool,
    /// Points earned by this completion.
    pub score: i32,
    /// When the completion happened.
    pub completed_at: DateTime<Utc>,
}

impl UserProgress {
    /// Record a completion happening now.
    pub fn new(user_id: impl Into<String>, challenge_id: impl Into<String>, score: i32) -> Self {
        Self {
            user_id: user_id.into(),
            challenge_id: challenge_id.into(),
            completed: true,
            score,
            completed_at: Utc::now(),
        }
    }
}
