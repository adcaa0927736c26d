use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use common::challenge::{ChallengeKind, Difficulty};

/// A contest catalog loaded from a TOML file. Dates are not part of the
/// file; seeded contests open immediately.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub contests: Vec<ContestSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ContestSpec {
    pub title: String,
    pub description: String,
    pub time_limit_minutes: i64,
    pub max_attempts: i32,
    #[serde(default)]
    pub challenges: Vec<ChallengeSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeSpec {
    pub question: String,
    #[serde(flatten)]
    pub kind: ChallengeKind,
    pub correct_answer: String,
    pub points: i32,
    pub difficulty: Difficulty,
}

pub fn load(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse catalog file {}", path.display()))
}

/// Built-in catalog used when no file is given.
pub fn sample() -> Catalog {
    Catalog {
        contests: vec![
            ContestSpec {
                title: "General Knowledge Sprint".to_string(),
                description: "A quick tour through science and geography.".to_string(),
                time_limit_minutes: 30,
                max_attempts: 3,
                challenges: vec![
                    ChallengeSpec {
                        question: "Which planet is closest to the Sun?".to_string(),
                        kind: ChallengeKind::MultipleChoice {
                            options: vec![
                                "Mercury".to_string(),
                                "Venus".to_string(),
                                "Earth".to_string(),
                                "Mars".to_string(),
                            ],
                        },
                        correct_answer: "Mercury".to_string(),
                        points: 10,
                        difficulty: Difficulty::Easy,
                    },
                    ChallengeSpec {
                        question: "What process do plants use to turn sunlight into energy?"
                            .to_string(),
                        kind: ChallengeKind::Text,
                        correct_answer: "photosynthesis".to_string(),
                        points: 15,
                        difficulty: Difficulty::Medium,
                    },
                    ChallengeSpec {
                        question: "What is the chemical symbol for gold?".to_string(),
                        kind: ChallengeKind::MultipleChoice {
                            options: vec![
                                "Au".to_string(),
                                "Ag".to_string(),
                                "Gd".to_string(),
                                "Go".to_string(),
                            ],
                        },
                        correct_answer: "Au".to_string(),
                        points: 20,
                        difficulty: Difficulty::Hard,
                    },
                ],
            },
            ContestSpec {
                title: "Speed Round".to_string(),
                description: "Short questions, short clock.".to_string(),
                time_limit_minutes: 20,
                max_attempts: 2,
                challenges: vec![
                    ChallengeSpec {
                        question: "How many continents are there?".to_string(),
                        kind: ChallengeKind::MultipleChoice {
                            options: vec!["5".to_string(), "6".to_string(), "7".to_string()],
                        },
                        correct_answer: "7".to_string(),
                        points: 10,
                        difficulty: Difficulty::Easy,
                    },
                    ChallengeSpec {
                        question: "Which ocean is the largest?".to_string(),
                        kind: ChallengeKind::Text,
                        correct_answer: "pacific".to_string(),
                        points: 15,
                        difficulty: Difficulty::Medium,
                    },
                ],
            },
        ],
    }
}
