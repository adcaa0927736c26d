use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::challenge::Challenge;

/// A timed collection of challenges with a per-user attempt cap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    /// Unique contest ID.
    pub id: String,
    /// Contest title.
    pub title: String,
    /// Longer description shown on the contest page.
    pub description: String,
    /// Challenges in presentation order. Each carries this contest's ID.
    pub challenges: Vec<Challenge>,
    /// Time limit for one attempt, in minutes.
    pub time_limit_minutes: i64,
    /// Scheduled start of the contest.
    pub start_date: DateTime<Utc>,
    /// Scheduled end of the contest.
    pub end_date: DateTime<Utc>,
    /// Whether the contest is currently open. Informational only;
    /// attempts are gated by `max_attempts` alone.
    pub is_active: bool,
    /// Maximum attempts per user, unfinished ones included.
    pub max_attempts: i32,
    /// ID of the admin who created the contest.
    pub created_by: String,
}

impl Contest {
    /// Look up a challenge in this contest's list by ID.
    pub fn challenge(&self, challenge_id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == challenge_id)
    }
}
