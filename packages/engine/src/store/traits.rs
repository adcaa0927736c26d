use common::{Challenge, Contest, ContestAttempt, User, UserProgress};

use super::error::StoreError;

/// Persistence boundary for engine state.
///
/// Lookups return `Ok(None)` for absent records; the engine maps absence to
/// its own not-found errors. Implementations serialize access so each call
/// observes and applies a consistent snapshot.
pub trait Store: Send + Sync {
    /// All users, in registration order.
    fn users(&self) -> Result<Vec<User>, StoreError>;

    /// Look up a user by ID.
    fn user(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by email.
    fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert or replace a user by ID.
    fn put_user(&self, user: User) -> Result<(), StoreError>;

    /// All contests, in creation order.
    fn contests(&self) -> Result<Vec<Contest>, StoreError>;

    /// Look up a contest by ID.
    fn contest(&self, id: &str) -> Result<Option<Contest>, StoreError>;

    /// Insert or replace a contest by ID.
    fn put_contest(&self, contest: Contest) -> Result<(), StoreError>;

    /// Remove a contest. Returns true if it existed.
    fn remove_contest(&self, id: &str) -> Result<bool, StoreError>;

    /// Look up a catalog challenge by ID.
    fn challenge(&self, id: &str) -> Result<Option<Challenge>, StoreError>;

    /// Insert or replace a catalog challenge by ID.
    fn put_challenge(&self, challenge: Challenge) -> Result<(), StoreError>;

    /// Remove all catalog challenges of a contest. Returns how many were removed.
    fn remove_challenges_for_contest(&self, contest_id: &str) -> Result<usize, StoreError>;

    /// All attempts, in creation order.
    fn attempts(&self) -> Result<Vec<ContestAttempt>, StoreError>;

    /// Look up an attempt by ID.
    fn attempt(&self, id: &str) -> Result<Option<ContestAttempt>, StoreError>;

    /// All attempts by a user on a contest, in creation order.
    fn attempts_for(&self, user_id: &str, contest_id: &str)
    -> Result<Vec<ContestAttempt>, StoreError>;

    /// Insert or replace an attempt by ID.
    fn put_attempt(&self, attempt: ContestAttempt) -> Result<(), StoreError>;

    /// Append a progress entry.
    fn push_progress(&self, entry: UserProgress) -> Result<(), StoreError>;

    /// All progress entries of a user, oldest first.
    fn progress_for(&self, user_id: &str) -> Result<Vec<UserProgress>, StoreError>;
}
