use common::session::SessionError;
use thiserror::Error;

use crate::store::StoreError;

/// Engine-level error type.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Contest not found: {0}")]
    ContestNotFound(String),

    #[error("Challenge not found: {0}")]
    ChallengeNotFound(String),

    #[error("Attempt not found: {0}")]
    AttemptNotFound(String),

    #[error("Insufficient permissions")]
    PermissionDenied,

    #[error("Attempt belongs to another user")]
    NotOwner,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Attempt limit ({limit}) reached for contest {contest_id}")]
    MaxAttemptsReached { contest_id: String, limit: i32 },

    #[error("Attempt is already completed: {0}")]
    AttemptCompleted(String),

    #[error("Attempt has expired: {0}")]
    AttemptExpired(String),

    #[error("{0}")]
    Validation(String),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Machine-readable error code for presentation-layer mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_)
            | Self::ContestNotFound(_)
            | Self::ChallengeNotFound(_)
            | Self::AttemptNotFound(_) => "NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotOwner => "NOT_OWNER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::MaxAttemptsReached { .. } => "MAX_ATTEMPTS_REACHED",
            Self::AttemptCompleted(_) => "ATTEMPT_COMPLETED",
            Self::AttemptExpired(_) => "ATTEMPT_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Session(_) | Self::Store(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
