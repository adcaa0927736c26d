use crate::common::TestEngine;
use engine::EngineError;

mod registration {
    use super::*;
    use common::user::Role;

    #[test]
    fn register_creates_user_with_zero_score() {
        let t = TestEngine::spawn();

        let user = t.register_user("alice");

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.score, 0);
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn register_trims_username_and_email() {
        let t = TestEngine::spawn();

        let user = t
            .engine
            .register("  bob  ", " bob@example.com ", "password")
            .unwrap();

        assert_eq!(user.username, "bob");
        assert_eq!(user.email, "bob@example.com");
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let t = TestEngine::spawn();
        t.register_user("alice");

        let err = t
            .engine
            .register("alice2", "alice@example.com", "password")
            .unwrap_err();

        assert!(matches!(err, EngineError::EmailTaken));
        assert_eq!(err.code(), "EMAIL_TAKEN");
    }

    #[test]
    fn register_rejects_blank_username() {
        let t = TestEngine::spawn();

        let err = t
            .engine
            .register("   ", "x@example.com", "password")
            .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let t = TestEngine::spawn();

        let err = t.engine.register("carl", "not-an-email", "password").unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn register_persists_session_record() {
        let t = TestEngine::spawn();

        let user = t.register_user("alice");

        assert_eq!(t.engine.current_session().unwrap(), Some(user));
    }
}

mod login {
    use super::*;

    #[test]
    fn login_accepts_placeholder_password() {
        let t = TestEngine::spawn();
        let user = t.register_user("alice");

        let logged_in = t.engine.login("alice@example.com", "password").unwrap();

        assert_eq!(logged_in.id, user.id);
    }

    #[test]
    fn login_rejects_wrong_password() {
        let t = TestEngine::spawn();
        t.register_user("alice");

        let err = t.engine.login("alice@example.com", "hunter2").unwrap_err();

        assert!(matches!(err, EngineError::InvalidCredentials));
    }

    #[test]
    fn login_rejects_unknown_email() {
        let t = TestEngine::spawn();

        let err = t.engine.login("ghost@example.com", "password").unwrap_err();

        assert!(matches!(err, EngineError::InvalidCredentials));
    }

    #[test]
    fn login_replaces_session_record() {
        let t = TestEngine::spawn();
        let alice = t.register_user("alice");
        t.register_user("bob");

        t.engine.login("alice@example.com", "password").unwrap();

        assert_eq!(t.engine.current_session().unwrap(), Some(alice));
    }

    #[test]
    fn logout_clears_session_record() {
        let t = TestEngine::spawn();
        t.register_user("alice");

        t.engine.logout().unwrap();

        assert_eq!(t.engine.current_session().unwrap(), None);
    }
}

mod session_persistence {
    use std::sync::Arc;

    use common::session::FileSessionStore;
    use engine::Engine;
    use engine::store::MemoryStore;

    /// Full-stack check of the file-backed session record: a fresh engine
    /// over the same directory sees the user registered by the old one.
    #[test]
    fn session_record_survives_engine_restart() {
        let dir = tempfile::tempdir().unwrap();

        let sessions = FileSessionStore::new(dir.path()).unwrap();
        let engine = Engine::new(Arc::new(MemoryStore::new()), Arc::new(sessions));
        let user = engine.register("alice", "alice@example.com", "password").unwrap();

        let sessions = FileSessionStore::new(dir.path()).unwrap();
        let restarted = Engine::new(Arc::new(MemoryStore::new()), Arc::new(sessions));

        assert_eq!(restarted.current_session().unwrap(), Some(user));
    }
}
