use super::error::SessionError;
use crate::user::User;

/// Persists the current-user record between runs.
///
/// The record is a single serialized [`User`] under a fixed key. It is
/// overwritten whenever the user's score changes and cleared on logout.
pub trait SessionStore: Send + Sync {
    /// Overwrite the stored record.
    fn save(&self, user: &User) -> Result<(), SessionError>;

    /// Load the stored record, if any.
    fn load(&self) -> Result<Option<User>, SessionError>;

    /// Remove the stored record. Removing an absent record is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}
