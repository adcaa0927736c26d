use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use common::challenge::{Challenge, ChallengeKind, Difficulty};
use common::contest::Contest;

use crate::engine::Engine;
use crate::error::{EngineError, Result};

/// Fields for creating a contest. The challenge list always starts empty;
/// challenges are added one at a time afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContest {
    pub title: String,
    pub description: String,
    /// Time limit for one attempt, in minutes.
    pub time_limit_minutes: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    /// Maximum attempts per user.
    pub max_attempts: i32,
}

/// Fields for adding a challenge to a contest.
#[derive(Debug, Clone, Deserialize)]
pub struct NewChallenge {
    pub question: String,
    /// Kind-specific data; `options` exists exactly for multiple-choice.
    #[serde(flatten)]
    pub kind: ChallengeKind,
    pub correct_answer: String,
    pub points: i32,
    pub difficulty: Difficulty,
}

/// Partial update of contest metadata. Absent fields are left unchanged.
/// The challenge list is not touched here; use [`Engine::add_challenge_to_contest`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContestPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time_limit_minutes: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub max_attempts: Option<i32>,
}

impl Engine {
    /// All contests, in creation order.
    pub fn contests(&self) -> Result<Vec<Contest>> {
        Ok(self.store.contests()?)
    }

    /// Look up a contest by ID.
    pub fn contest(&self, contest_id: &str) -> Result<Contest> {
        self.require_contest(contest_id)
    }

    /// Look up a challenge in the catalog by ID.
    pub fn challenge(&self, challenge_id: &str) -> Result<Challenge> {
        self.require_challenge(challenge_id)
    }

    /// Create a contest with an empty challenge list. Admin only.
    #[instrument(skip(self, draft), fields(actor_id = %actor_id, title = %draft.title))]
    pub fn create_contest(&self, actor_id: &str, draft: NewContest) -> Result<Contest> {
        let actor = self.require_admin(actor_id)?;
        validate_new_contest(&draft)?;

        let contest = Contest {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            challenges: Vec::new(),
            time_limit_minutes: draft.time_limit_minutes,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_active: draft.is_active,
            max_attempts: draft.max_attempts,
            created_by: actor.id,
        };
        self.store.put_contest(contest.clone())?;

        info!(contest_id = %contest.id, "Contest created");
        Ok(contest)
    }

    /// Add a challenge to a contest's list and to the catalog. Admin only.
    #[instrument(skip(self, draft), fields(actor_id = %actor_id, contest_id = %contest_id))]
    pub fn add_challenge_to_contest(
        &self,
        actor_id: &str,
        contest_id: &str,
        draft: NewChallenge,
    ) -> Result<Challenge> {
        self.require_admin(actor_id)?;
        validate_new_challenge(&draft)?;

        let mut contest = self.require_contest(contest_id)?;
        let challenge = Challenge {
            id: Uuid::new_v4().to_string(),
            question: draft.question.trim().to_string(),
            kind: draft.kind,
            correct_answer: draft.correct_answer,
            points: draft.points,
            difficulty: draft.difficulty,
            contest_id: contest.id.clone(),
        };

        contest.challenges.push(challenge.clone());
        self.store.put_challenge(challenge.clone())?;
        self.store.put_contest(contest)?;

        info!(challenge_id = %challenge.id, "Challenge added to contest");
        Ok(challenge)
    }

    /// Partially update contest metadata. Admin only.
    #[instrument(skip(self, patch), fields(actor_id = %actor_id, contest_id = %contest_id))]
    pub fn update_contest(
        &self,
        actor_id: &str,
        contest_id: &str,
        patch: ContestPatch,
    ) -> Result<Contest> {
        self.require_admin(actor_id)?;
        validate_contest_patch(&patch)?;

        let mut contest = self.require_contest(contest_id)?;

        // Cross-field date validation against existing values.
        let effective_start = patch.start_date.unwrap_or(contest.start_date);
        let effective_end = patch.end_date.unwrap_or(contest.end_date);
        if effective_end <= effective_start {
            return Err(EngineError::Validation(
                "end_date must be after start_date".into(),
            ));
        }

        if let Some(ref title) = patch.title {
            contest.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            contest.description = description;
        }
        if let Some(limit) = patch.time_limit_minutes {
            contest.time_limit_minutes = limit;
        }
        if let Some(start_date) = patch.start_date {
            contest.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            contest.end_date = end_date;
        }
        if let Some(is_active) = patch.is_active {
            contest.is_active = is_active;
        }
        if let Some(max_attempts) = patch.max_attempts {
            contest.max_attempts = max_attempts;
        }

        self.store.put_contest(contest.clone())?;

        info!("Contest updated");
        Ok(contest)
    }

    /// Delete a contest and its catalog challenges. Admin only.
    ///
    /// Attempts and progress entries referencing the contest stay in place;
    /// an orphaned attempt remains readable and finishable, with no time
    /// bonus.
    #[instrument(skip(self), fields(actor_id = %actor_id, contest_id = %contest_id))]
    pub fn delete_contest(&self, actor_id: &str, contest_id: &str) -> Result<()> {
        self.require_admin(actor_id)?;

        if !self.store.remove_contest(contest_id)? {
            return Err(EngineError::ContestNotFound(contest_id.to_string()));
        }
        let removed = self.store.remove_challenges_for_contest(contest_id)?;

        info!(challenges_removed = removed, "Contest deleted");
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(EngineError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    Ok(())
}

fn validate_new_contest(draft: &NewContest) -> Result<()> {
    validate_title(&draft.title)?;
    if draft.time_limit_minutes <= 0 {
        return Err(EngineError::Validation(
            "Time limit must be a positive number of minutes".into(),
        ));
    }
    if draft.max_attempts <= 0 {
        return Err(EngineError::Validation(
            "Max attempts must be positive".into(),
        ));
    }
    if draft.end_date <= draft.start_date {
        return Err(EngineError::Validation(
            "end_date must be after start_date".into(),
        ));
    }
    Ok(())
}

fn validate_contest_patch(patch: &ContestPatch) -> Result<()> {
    if let Some(ref title) = patch.title {
        validate_title(title)?;
    }
    if let Some(limit) = patch.time_limit_minutes
        && limit <= 0
    {
        return Err(EngineError::Validation(
            "Time limit must be a positive number of minutes".into(),
        ));
    }
    if let Some(max_attempts) = patch.max_attempts
        && max_attempts <= 0
    {
        return Err(EngineError::Validation(
            "Max attempts must be positive".into(),
        ));
    }
    Ok(())
}

fn validate_new_challenge(draft: &NewChallenge) -> Result<()> {
    if draft.question.trim().is_empty() {
        return Err(EngineError::Validation("Question must not be empty".into()));
    }
    if draft.correct_answer.is_empty() {
        return Err(EngineError::Validation(
            "Correct answer must not be empty".into(),
        ));
    }
    if draft.points <= 0 {
        return Err(EngineError::Validation("Points must be positive".into()));
    }
    if let ChallengeKind::MultipleChoice { options } = &draft.kind {
        if options.len() < 2 {
            return Err(EngineError::Validation(
                "Multiple-choice challenges need at least 2 options".into(),
            ));
        }
        if !options.contains(&draft.correct_answer) {
            return Err(EngineError::Validation(
                "Correct answer must be one of the options".into(),
            ));
        }
    }
    Ok(())
}
