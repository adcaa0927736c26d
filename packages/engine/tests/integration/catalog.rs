use crate::common::TestEngine;
use common::challenge::{ChallengeKind, Difficulty};
use engine::{ContestPatch, EngineError, NewChallenge, NewContest};

fn valid_contest_draft(title: &str) -> NewContest {
    NewContest {
        title: title.into(),
        description: "A contest description.".into(),
        time_limit_minutes: 30,
        start_date: "2099-01-01T00:00:00Z".parse().unwrap(),
        end_date: "2099-01-02T00:00:00Z".parse().unwrap(),
        is_active: true,
        max_attempts: 3,
    }
}

mod contest_creation {
    use super::*;

    #[test]
    fn admin_can_create_a_contest() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let contest = t
            .engine
            .create_contest(&admin.id, valid_contest_draft("My Contest"))
            .unwrap();

        assert_eq!(contest.title, "My Contest");
        assert_eq!(contest.created_by, admin.id);
        assert!(contest.challenges.is_empty());
        assert_eq!(t.engine.contest(&contest.id).unwrap(), contest);
    }

    #[test]
    fn regular_user_cannot_create_a_contest() {
        let t = TestEngine::spawn();
        let user = t.register_user("user1");

        let err = t
            .engine
            .create_contest(&user.id, valid_contest_draft("Nope"))
            .unwrap_err();

        assert!(matches!(err, EngineError::PermissionDenied));
        assert_eq!(err.code(), "PERMISSION_DENIED");
    }

    #[test]
    fn unknown_actor_cannot_create_a_contest() {
        let t = TestEngine::spawn();

        let err = t
            .engine
            .create_contest("ghost", valid_contest_draft("Nope"))
            .unwrap_err();

        assert!(matches!(err, EngineError::UserNotFound(_)));
    }

    #[test]
    fn rejects_blank_title() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let err = t
            .engine
            .create_contest(&admin.id, valid_contest_draft("   "))
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn rejects_nonpositive_time_limit() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let mut draft = valid_contest_draft("Bad Limit");
        draft.time_limit_minutes = 0;
        let err = t.engine.create_contest(&admin.id, draft).unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn rejects_nonpositive_max_attempts() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let mut draft = valid_contest_draft("Bad Cap");
        draft.max_attempts = 0;
        let err = t.engine.create_contest(&admin.id, draft).unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn rejects_end_date_before_start_date() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let mut draft = valid_contest_draft("Bad Dates");
        draft.start_date = "2099-01-02T00:00:00Z".parse().unwrap();
        draft.end_date = "2099-01-01T00:00:00Z".parse().unwrap();
        let err = t.engine.create_contest(&admin.id, draft).unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn contests_are_listed_in_creation_order() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        t.create_contest(&admin, "First", 30, 3);
        t.create_contest(&admin, "Second", 30, 3);

        let titles: Vec<_> = t
            .engine
            .contests()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();

        assert_eq!(titles, ["First", "Second"]);
    }
}

mod challenge_management {
    use super::*;

    #[test]
    fn added_challenge_lands_in_contest_and_catalog() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let challenge = t.add_choice_challenge(&admin, &contest.id, "Mercury", 10);

        assert_eq!(challenge.contest_id, contest.id);
        let reloaded = t.engine.contest(&contest.id).unwrap();
        assert_eq!(reloaded.challenges, vec![challenge.clone()]);
        assert_eq!(t.engine.challenge(&challenge.id).unwrap(), challenge);
    }

    #[test]
    fn regular_user_cannot_add_challenges() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let user = t.register_user("user1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .add_challenge_to_contest(
                &user.id,
                &contest.id,
                NewChallenge {
                    question: "Sneaky?".into(),
                    kind: ChallengeKind::Text,
                    correct_answer: "yes".into(),
                    points: 5,
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::PermissionDenied));
    }

    #[test]
    fn adding_to_missing_contest_fails() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let err = t
            .engine
            .add_challenge_to_contest(
                &admin.id,
                "no-such-contest",
                NewChallenge {
                    question: "Anyone home?".into(),
                    kind: ChallengeKind::Text,
                    correct_answer: "no".into(),
                    points: 5,
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::ContestNotFound(_)));
    }

    #[test]
    fn multiple_choice_needs_at_least_two_options() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .add_challenge_to_contest(
                &admin.id,
                &contest.id,
                NewChallenge {
                    question: "Only one way?".into(),
                    kind: ChallengeKind::MultipleChoice {
                        options: vec!["Yes".into()],
                    },
                    correct_answer: "Yes".into(),
                    points: 5,
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn correct_answer_must_be_among_options() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .add_challenge_to_contest(
                &admin.id,
                &contest.id,
                NewChallenge {
                    question: "Pick one.".into(),
                    kind: ChallengeKind::MultipleChoice {
                        options: vec!["A".into(), "B".into()],
                    },
                    correct_answer: "C".into(),
                    points: 5,
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn rejects_nonpositive_points() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .add_challenge_to_contest(
                &admin.id,
                &contest.id,
                NewChallenge {
                    question: "Worthless?".into(),
                    kind: ChallengeKind::Text,
                    correct_answer: "yes".into(),
                    points: 0,
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }
}

mod contest_updates {
    use super::*;

    #[test]
    fn patch_applies_only_the_given_fields() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Original", 30, 3);

        let updated = t
            .engine
            .update_contest(
                &admin.id,
                &contest.id,
                ContestPatch {
                    title: Some("Renamed".into()),
                    max_attempts: Some(5),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.max_attempts, 5);
        assert_eq!(updated.time_limit_minutes, contest.time_limit_minutes);
        assert_eq!(updated.description, contest.description);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Stable", 30, 3);

        let updated = t
            .engine
            .update_contest(&admin.id, &contest.id, ContestPatch::default())
            .unwrap();

        assert_eq!(updated, contest);
    }

    #[test]
    fn patch_cannot_invert_the_date_range() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .update_contest(
                &admin.id,
                &contest.id,
                ContestPatch {
                    end_date: Some("2000-01-01T00:00:00Z".parse().unwrap()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn regular_user_cannot_update_contests() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let user = t.register_user("user1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t
            .engine
            .update_contest(&user.id, &contest.id, ContestPatch::default())
            .unwrap_err();

        assert!(matches!(err, EngineError::PermissionDenied));
    }

    #[test]
    fn updating_missing_contest_fails() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let err = t
            .engine
            .update_contest(&admin.id, "no-such-contest", ContestPatch::default())
            .unwrap_err();

        assert!(matches!(err, EngineError::ContestNotFound(_)));
    }
}

mod contest_deletion {
    use super::*;

    #[test]
    fn delete_removes_contest_and_its_catalog_challenges() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let contest = t.create_contest(&admin, "Doomed", 30, 3);
        let challenge = t.add_choice_challenge(&admin, &contest.id, "Mercury", 10);
        let other = t.create_contest(&admin, "Survivor", 30, 3);
        let kept = t.add_text_challenge(&admin, &other.id, "photosynthesis", 15);

        t.engine.delete_contest(&admin.id, &contest.id).unwrap();

        assert!(matches!(
            t.engine.contest(&contest.id),
            Err(EngineError::ContestNotFound(_))
        ));
        assert!(matches!(
            t.engine.challenge(&challenge.id),
            Err(EngineError::ChallengeNotFound(_))
        ));
        assert_eq!(t.engine.challenge(&kept.id).unwrap(), kept);
    }

    #[test]
    fn regular_user_cannot_delete_contests() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");
        let user = t.register_user("user1");
        let contest = t.create_contest(&admin, "Quiz", 30, 3);

        let err = t.engine.delete_contest(&user.id, &contest.id).unwrap_err();

        assert!(matches!(err, EngineError::PermissionDenied));
    }

    #[test]
    fn deleting_missing_contest_fails() {
        let t = TestEngine::spawn();
        let admin = t.register_admin("admin1");

        let err = t
            .engine
            .delete_contest(&admin.id, "no-such-contest")
            .unwrap_err();

        assert!(matches!(err, EngineError::ContestNotFound(_)));
    }
}
