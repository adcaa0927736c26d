use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use common::attempt::{AttemptAnswer, AttemptStatus, ContestAttempt};
use common::contest::Contest;
use common::grade::grade;
use common::scoring::time_bonus;

use crate::engine::Engine;
use crate::error::{EngineError, Result};

impl Engine {
    /// Start a new attempt on a contest.
    ///
    /// Every prior attempt for the pair counts against the cap, finished
    /// or not.
    #[instrument(skip(self), fields(user_id = %user_id, contest_id = %contest_id))]
    pub fn start_attempt(&self, user_id: &str, contest_id: &str) -> Result<ContestAttempt> {
        self.require_user(user_id)?;
        let contest = self.require_contest(contest_id)?;

        let prior = self.store.attempts_for(user_id, contest_id)?.len();
        if prior as i32 >= contest.max_attempts {
            return Err(EngineError::MaxAttemptsReached {
                contest_id: contest.id,
                limit: contest.max_attempts,
            });
        }

        let attempt = ContestAttempt::new(user_id, contest_id);
        self.store.put_attempt(attempt.clone())?;

        info!(attempt_id = %attempt.id, prior_attempts = prior, "Attempt started");
        Ok(attempt)
    }

    /// Grade and record an answer within an attempt.
    ///
    /// The latest answer per challenge wins. The attempt score is recomputed
    /// from the recorded correct answers, so revising an answer can lower it
    /// and resubmitting the same one never inflates it.
    #[instrument(skip(self, answer), fields(attempt_id = %attempt_id, challenge_id = %challenge_id))]
    pub fn submit_attempt_answer(
        &self,
        attempt_id: &str,
        challenge_id: &str,
        answer: &str,
    ) -> Result<bool> {
        let mut attempt = self.require_attempt(attempt_id)?;
        require_in_progress(&attempt)?;

        let contest = self.require_contest(&attempt.contest_id)?;
        let challenge = contest
            .challenge(challenge_id)
            .ok_or_else(|| EngineError::ChallengeNotFound(challenge_id.to_string()))?;

        let is_correct = grade(challenge, answer);
        attempt.record_answer(AttemptAnswer {
            challenge_id: challenge.id.clone(),
            answer: answer.to_string(),
            is_correct,
        });
        attempt.score = base_score(&contest, &attempt);

        let score = attempt.score;
        self.store.put_attempt(attempt)?;

        debug!(is_correct, score, "Answer recorded");
        Ok(is_correct)
    }

    /// Finish an attempt, apply the time bonus, and credit the owner.
    ///
    /// Only the attempt's owner may finish it. Finishing succeeds even when
    /// the contest has been deleted; the time bonus is then zero.
    #[instrument(skip(self), fields(attempt_id = %attempt_id, acting_user_id = %acting_user_id))]
    pub fn finish_attempt(&self, attempt_id: &str, acting_user_id: &str) -> Result<ContestAttempt> {
        let mut attempt = self.require_attempt(attempt_id)?;
        if attempt.user_id != acting_user_id {
            return Err(EngineError::NotOwner);
        }
        require_in_progress(&attempt)?;

        let now = Utc::now();
        attempt.time_spent_secs = (now - attempt.started_at).num_seconds();

        let bonus = match self.store.contest(&attempt.contest_id)? {
            Some(contest) => time_bonus(contest.time_limit_minutes, attempt.time_spent_secs),
            None => {
                warn!(contest_id = %attempt.contest_id, "Contest missing at finish, no time bonus");
                0
            }
        };

        attempt.score += bonus;
        attempt.ended_at = Some(now);
        attempt.status = AttemptStatus::Completed;
        self.store.put_attempt(attempt.clone())?;

        self.credit_contest(acting_user_id, attempt.score)?;

        info!(
            final_score = attempt.score,
            time_bonus = bonus,
            time_spent_secs = attempt.time_spent_secs,
            "Attempt finished"
        );
        Ok(attempt)
    }

    /// The in-progress attempt of a user on a contest, if one exists and is
    /// still within the contest's time limit. Overdue attempts are hidden
    /// here but not mutated; [`Engine::expire_overdue_attempts`] retires them.
    pub fn current_attempt(
        &self,
        user_id: &str,
        contest_id: &str,
    ) -> Result<Option<ContestAttempt>> {
        let contest = self.store.contest(contest_id)?;
        let attempts = self.store.attempts_for(user_id, contest_id)?;
        let now = Utc::now();

        Ok(attempts.into_iter().rev().find(|a| {
            a.status == AttemptStatus::InProgress
                && contest
                    .as_ref()
                    .is_none_or(|c| !a.is_overdue(c.time_limit_minutes, now))
        }))
    }

    /// Transition every overdue in-progress attempt to `Expired`.
    ///
    /// Returns the number of attempts expired. Expired attempts credit
    /// nothing and still consume an attempt slot. Attempts whose contest is
    /// gone are skipped; without a time limit they cannot be overdue.
    #[instrument(skip(self))]
    pub fn expire_overdue_attempts(&self) -> Result<usize> {
        let now = Utc::now();
        let mut expired = 0;

        for mut attempt in self.store.attempts()? {
            if attempt.status != AttemptStatus::InProgress {
                continue;
            }
            let Some(contest) = self.store.contest(&attempt.contest_id)? else {
                continue;
            };
            if attempt.is_overdue(contest.time_limit_minutes, now) {
                debug!(attempt_id = %attempt.id, user_id = %attempt.user_id, "Expiring overdue attempt");
                attempt.status = AttemptStatus::Expired;
                self.store.put_attempt(attempt)?;
                expired += 1;
            }
        }

        if expired > 0 {
            info!(count = expired, "Expired overdue attempts");
        }
        Ok(expired)
    }
}

fn require_in_progress(attempt: &ContestAttempt) -> Result<()> {
    match attempt.status {
        AttemptStatus::InProgress => Ok(()),
        AttemptStatus::Completed => Err(EngineError::AttemptCompleted(attempt.id.clone())),
        AttemptStatus::Expired => Err(EngineError::AttemptExpired(attempt.id.clone())),
    }
}

/// Sum of points over the recorded correct answers, one per challenge.
fn base_score(contest: &Contest, attempt: &ContestAttempt) -> i32 {
    attempt
        .answers
        .iter()
        .filter(|a| a.is_correct)
        .filter_map(|a| contest.challenge(&a.challenge_id))
        .map(|c| c.points)
        .sum()
}
