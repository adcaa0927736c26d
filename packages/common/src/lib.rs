pub mod attempt;
pub mod challenge;
pub mod contest;
pub mod grade;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod user;

pub use attempt::{AttemptAnswer, AttemptStatus, ContestAttempt};
pub use challenge::{Challenge, ChallengeKind, Difficulty};
pub use contest::Contest;
pub use grade::grade;
pub use progress::UserProgress;
pub use user::{Role, User};
