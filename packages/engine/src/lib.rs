pub mod attempts;
pub mod auth;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod store;
pub mod submissions;

pub use catalog::{ContestPatch, NewChallenge, NewContest};
pub use common::grade::grade;
pub use engine::Engine;
pub use error::{EngineError, Result};
