use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a contest attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptStatus {
    /// Started and accepting answers.
    InProgress,
    /// Finished normally; the score includes the time bonus.
    Completed,
    /// Ran past the contest time limit without finishing. Credits nothing.
    Expired,
}

impl AttemptStatus {
    /// All possible status values.
    pub const ALL: &'static [AttemptStatus] = &[Self::InProgress, Self::Completed, Self::Expired];

    /// Returns the string representation (PascalCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Expired => "Expired",
        }
    }

    /// Returns true if the attempt can no longer be mutated.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AttemptStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Error when parsing an invalid status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    invalid: String,
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid attempt status: '{}'. Valid values are: InProgress, Completed, Expired",
            self.invalid
        )
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for AttemptStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Expired" => Ok(Self::Expired),
            _ => Err(ParseStatusError { invalid: s.to_string() }),
        }
    }
}

/// One recorded answer within an attempt. At most one per challenge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttemptAnswer {
    /// Challenge this answer is for.
    pub challenge_id: String,
    /// The raw submitted answer.
    pub answer: String,
    /// Verdict at the time of submission.
    pub is_correct: bool,
}

/// One user's timed run through a contest's challenges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContestAttempt {
    /// Unique attempt ID.
    pub id: String,
    /// The user who started the attempt.
    pub user_id: String,
    /// The contest being attempted.
    pub contest_id: String,
    /// When the attempt was started.
    pub started_at: DateTime<Utc>,
    /// When the attempt was finished. Unset while in progress.
    pub ended_at: Option<DateTime<Utc>>,
    /// Current score. After completion this includes the time bonus.
    pub score: i32,
    /// Latest answer per challenge; the most recently revised one sits last.
    pub answers: Vec<AttemptAnswer>,
    /// Whole seconds between start and finish. Zero while in progress.
    pub time_spent_secs: i64,
    /// Lifecycle state.
    pub status: AttemptStatus,
}

impl ContestAttempt {
    /// Create a fresh in-progress attempt starting now.
    pub fn new(user_id: impl Into<String>, contest_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            contest_id: contest_id.into(),
            started_at: Utc::now(),
            ended_at: None,
            score: 0,
            answers: Vec::new(),
            time_spent_secs: 0,
            status: AttemptStatus::InProgress,
        }
    }

    /// The recorded answer for a challenge, if any.
    pub fn answer_for(&self, challenge_id: &str) -> Option<&AttemptAnswer> {
        self.answers.iter().find(|a| a.challenge_id == challenge_id)
    }

    /// Record an answer, replacing any prior record for the same challenge.
    pub fn record_answer(&mut self, answer: AttemptAnswer) {
        self.answers.retain(|a| a.challenge_id != answer.challenge_id);
        self.answers.push(answer);
    }

    /// The instant this attempt runs out of time, given its contest's limit.
    pub fn deadline(&self, time_limit_minutes: i64) -> DateTime<Utc> {
        self.started_at + Duration::minutes(time_limit_minutes)
    }

    /// Whether the attempt has outlived the contest's time limit at `now`.
    pub fn is_overdue(&self, time_limit_minutes: i64, now: DateTime<Utc>) -> bool {
        now > self.deadline(time_limit_minutes)
    }
}
