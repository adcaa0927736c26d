use std::sync::{Mutex, MutexGuard};

use common::{Challenge, Contest, ContestAttempt, User, UserProgress};

use super::error::StoreError;
use super::traits::Store;

/// In-memory store keeping every collection in insertion order.
///
/// A single mutex serializes all access, which is the whole concurrency
/// model the engine needs: one operation completes before the next one
/// observes state.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Data>,
}

#[derive(Default)]
struct Data {
    users: Vec<User>,
    contests: Vec<Contest>,
    challenges: Vec<Challenge>,
    attempts: Vec<ContestAttempt>,
    progress: Vec<UserProgress>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn data(&self) -> Result<MutexGuard<'_, Data>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T) -> bool) {
    match items.iter().position(same) {
        Some(i) => items[i] = item,
        None => items.push(item),
    }
}

impl Store for MemoryStore {
    fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.data()?.users.clone())
    }

    fn user(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.data()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.data()?.users.iter().find(|u| u.email == email).cloned())
    }

    fn put_user(&self, user: User) -> Result<(), StoreError> {
        let mut data = self.data()?;
        let id = user.id.clone();
        upsert(&mut data.users, user, |u| u.id == id);
        Ok(())
    }

    fn contests(&self) -> Result<Vec<Contest>, StoreError> {
        Ok(self.data()?.contests.clone())
    }

    fn contest(&self, id: &str) -> Result<Option<Contest>, StoreError> {
        Ok(self.data()?.contests.iter().find(|c| c.id == id).cloned())
    }

    fn put_contest(&self, contest: Contest) -> Result<(), StoreError> {
        let mut data = self.data()?;
        let id = contest.id.clone();
        upsert(&mut data.contests, contest, |c| c.id == id);
        Ok(())
    }

    fn remove_contest(&self, id: &str) -> Result<bool, StoreError> {
        let mut data = self.data()?;
        let before = data.contests.len();
        data.contests.retain(|c| c.id != id);
        Ok(data.contests.len() < before)
    }

    fn challenge(&self, id: &str) -> Result<Option<Challenge>, StoreError> {
        Ok(self.data()?.challenges.iter().find(|c| c.id == id).cloned())
    }

    fn put_challenge(&self, challenge: Challenge) -> Result<(), StoreError> {
        let mut data = self.data()?;
        let id = challenge.id.clone();
        upsert(&mut data.challenges, challenge, |c| c.id == id);
        Ok(())
    }

    fn remove_challenges_for_contest(&self, contest_id: &str) -> Result<usize, StoreError> {
        let mut data = self.data()?;
        let before = data.challenges.len();
        data.challenges.retain(|c| c.contest_id != contest_id);
        Ok(before - data.challenges.len())
    }

    fn attempts(&self) -> Result<Vec<ContestAttempt>, StoreError> {
        Ok(self.data()?.attempts.clone())
    }

    fn attempt(&self, id: &str) -> Result<Option<ContestAttempt>, StoreError> {
        Ok(self.data()?.attempts.iter().find(|a| a.id == id).cloned())
    }

    fn attempts_for(
        &self,
        user_id: &str,
        contest_id: &str,
    ) -> Result<Vec<ContestAttempt>, StoreError> {
        Ok(self
            .data()?
            .attempts
            .iter()
            .filter(|a| a.user_id == user_id && a.contest_id == contest_id)
            .cloned()
            .collect())
    }

    fn put_attempt(&self, attempt: ContestAttempt) -> Result<(), StoreError> {
        let mut data = self.data()?;
        let id = attempt.id.clone();
        upsert(&mut data.attempts, attempt, |a| a.id == id);
        Ok(())
    }

    fn push_progress(&self, entry: UserProgress) -> Result<(), StoreError> {
        self.data()?.progress.push(entry);
        Ok(())
    }

    fn progress_for(&self, user_id: &str) -> Result<Vec<UserProgress>, StoreError> {
        Ok(self
            .data()?
            .progress
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}
