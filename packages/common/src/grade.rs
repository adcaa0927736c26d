use crate::challenge::{Challenge, ChallengeKind};

/// Judge a raw answer against a challenge's reference answer.
///
/// Multiple-choice answers must match the reference exactly, case-sensitive
/// and untrimmed. Text answers are correct when the lowercased submission
/// contains the lowercased reference as a substring.
pub fn grade(challenge: &Challenge, raw_answer: &str) -> bool {
    match &challenge.kind {
        ChallengeKind::MultipleChoice { .. } => raw_answer == challenge.correct_answer,
        ChallengeKind::Text => raw_answer
            .to_lowercase()
            .contains(&challenge.correct_answer.to_lowercase()),
    }
}
