use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty rating of a challenge, for display and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All possible difficulty values.
    pub const ALL: &'static [Difficulty] = &[Self::Easy, Self::Medium, Self::Hard];

    /// Returns the string representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an invalid difficulty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    invalid: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid difficulty: '{}'. Valid values are: easy, medium, hard",
            self.invalid
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError { invalid: s.to_string() }),
        }
    }
}

/// Challenge kind plus the data only that kind carries.
///
/// Modelling the kind as an enum keeps judging exhaustive: there is no
/// representable challenge without a defined judging rule, and `options`
/// exists exactly when the kind is multiple-choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChallengeKind {
    /// Answer must match the reference answer exactly.
    MultipleChoice {
        /// The options presented to the user.
        options: Vec<String>,
    },
    /// Free-form text answer judged by containment.
    Text,
}

impl ChallengeKind {
    /// Returns the kind name as used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "multiple-choice",
            Self::Text => "text",
        }
    }
}

/// A single graded question belonging to a contest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique challenge ID.
    pub id: String,
    /// The question presented to the user.
    pub question: String,
    /// Kind-specific data; decides the judging rule.
    #[serde(flatten)]
    pub kind: ChallengeKind,
    /// Reference answer submissions are judged against.
    pub correct_answer: String,
    /// Points awarded for a correct answer. Always positive.
    pub points: i32,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// ID of the contest this challenge belongs to.
    pub contest_id: String,
}

impl Challenge {
    /// Create a challenge with a generated ID.
    pub fn new(
        contest_id: impl Into<String>,
        question: impl Into<String>,
        kind: ChallengeKind,
        correct_answer: impl Into<String>,
        points: i32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            kind,
            correct_answer: correct_answer.into(),
            points,
            difficulty,
            contest_id: contest_id.into(),
        }
    }
}
