use tracing::{info, instrument};

use common::user::{DEFAULT_ROLE, User};

use crate::engine::Engine;
use crate::error::{EngineError, Result};

/// Placeholder credential accepted for every account. Credential storage
/// and real verification sit outside the engine; registration discards the
/// password and login compares against this constant.
pub const PLACEHOLDER_PASSWORD: &str = "password";

impl Engine {
    /// Register a new user and persist the session record.
    #[instrument(skip(self, password), fields(username = %username))]
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<User> {
        validate_registration(username, email, password)?;

        let email = email.trim();
        if self.store.user_by_email(email)?.is_some() {
            return Err(EngineError::EmailTaken);
        }

        let user = User::new(username.trim(), email, DEFAULT_ROLE);
        self.store.put_user(user.clone())?;
        self.persist_session(&user);

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Log a user in by email and persist the session record.
    ///
    /// Any registered email authenticates with [`PLACEHOLDER_PASSWORD`];
    /// everything else is rejected as invalid credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .store
            .user_by_email(email.trim())?
            .ok_or(EngineError::InvalidCredentials)?;

        if password != PLACEHOLDER_PASSWORD {
            return Err(EngineError::InvalidCredentials);
        }

        self.persist_session(&user);
        info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Clear the persisted session record.
    ///
    /// Unlike the best-effort session writes, a failure here is surfaced:
    /// a logout that leaves the record behind must not look successful.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<()> {
        self.sessions.clear()?;
        info!("Session cleared");
        Ok(())
    }

    /// Load the persisted session record, if any.
    pub fn current_session(&self) -> Result<Option<User>> {
        Ok(self.sessions.load()?)
    }
}

fn validate_registration(username: &str, email: &str, password: &str) -> Result<()> {
    let username = username.trim();
    if username.is_empty() || username.chars().count() > 32 {
        return Err(EngineError::Validation(
            "Username must be 1-32 characters".into(),
        ));
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(EngineError::Validation(
            "Email must be a valid address".into(),
        ));
    }
    if password.is_empty() {
        return Err(EngineError::Validation("Password must not be empty".into()));
    }
    Ok(())
}
