use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Duration, Utc};
use console::Style;
use tracing::info;

use common::contest::Contest;
use common::session::FileSessionStore;
use common::user::Role;
use common::User;
use engine::store::{MemoryStore, Store};
use engine::{Engine, NewChallenge, NewContest};

use crate::catalog::{self, Catalog};
use crate::config::AppConfig;

/// Admin account seeded for catalog management.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@trivium.local";

const PASSWORD: &str = "password";

pub fn run(config: &AppConfig, catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = match catalog_path {
        Some(path) => catalog::load(path)?,
        None => catalog::sample(),
    };

    let store = Arc::new(MemoryStore::new());
    let sessions = Arc::new(
        FileSessionStore::new(&config.data.dir).context("Failed to open session store")?,
    );
    let engine = Engine::new(store.clone(), sessions);

    let admin = seed_admin(store.as_ref())?;
    let contests = seed_catalog(&engine, &admin, &catalog)?;

    section("Players register");
    let alice = engine.register("alice", "alice@trivium.local", PASSWORD)?;
    let bob = engine.register("bob", "bob@trivium.local", PASSWORD)?;
    println!("  {} and {} joined", alice.username, bob.username);

    let contest = contests.first().context("Catalog has no contests")?;
    run_full_attempt(&engine, &alice, contest)?;
    run_standalone_answers(&engine, &bob, contest)?;

    // Alice takes the session back so `trivium session` shows her total.
    engine.login("alice@trivium.local", PASSWORD)?;

    section("Leaderboard");
    for (rank, user) in engine.leaderboard()?.iter().enumerate() {
        println!("  {:>2}. {:<12} {:>5}", rank + 1, user.username, user.score);
    }

    println!();
    println!("Session record written to {}/", config.data.dir);
    Ok(())
}

fn section(title: &str) {
    println!();
    println!("{}", Style::new().green().bold().apply_to(title));
}

fn seed_admin(store: &dyn Store) -> anyhow::Result<User> {
    let admin = User::new(ADMIN_USERNAME, ADMIN_EMAIL, Role::Admin);
    store.put_user(admin.clone())?;
    info!(user_id = %admin.id, "Seeded admin account");
    Ok(admin)
}

/// Create every contest and challenge from the catalog, then read the
/// contests back with their challenge lists filled in.
fn seed_catalog(engine: &Engine, admin: &User, catalog: &Catalog) -> anyhow::Result<Vec<Contest>> {
    let now = Utc::now();
    for spec in &catalog.contests {
        let contest = engine.create_contest(
            &admin.id,
            NewContest {
                title: spec.title.clone(),
                description: spec.description.clone(),
                time_limit_minutes: spec.time_limit_minutes,
                start_date: now,
                end_date: now + Duration::days(30),
                is_active: true,
                max_attempts: spec.max_attempts,
            },
        )?;
        for challenge in &spec.challenges {
            engine.add_challenge_to_contest(
                &admin.id,
                &contest.id,
                NewChallenge {
                    question: challenge.question.clone(),
                    kind: challenge.kind.clone(),
                    correct_answer: challenge.correct_answer.clone(),
                    points: challenge.points,
                    difficulty: challenge.difficulty,
                },
            )?;
        }
    }

    let contests = engine.contests()?;
    section("Catalog seeded");
    for contest in &contests {
        println!(
            "  {} ({} challenges, {} min, {} attempts)",
            contest.title,
            contest.challenges.len(),
            contest.time_limit_minutes,
            contest.max_attempts
        );
    }
    Ok(contests)
}

/// One player answers every challenge correctly and finishes early enough
/// to collect the time bonus.
fn run_full_attempt(engine: &Engine, player: &User, contest: &Contest) -> anyhow::Result<()> {
    section(&format!("{} plays \"{}\"", player.username, contest.title));

    let attempt = engine.start_attempt(&player.id, &contest.id)?;
    for challenge in &contest.challenges {
        let correct =
            engine.submit_attempt_answer(&attempt.id, &challenge.id, &challenge.correct_answer)?;
        println!(
            "  {} {} (+{})",
            mark(correct),
            challenge.question,
            challenge.points
        );
    }

    let finished = engine.finish_attempt(&attempt.id, &player.id)?;
    let base: i32 = contest.challenges.iter().map(|c| c.points).sum();
    println!(
        "  Finished in {}s: {} base + {} time bonus = {}",
        finished.time_spent_secs,
        base,
        finished.score - base,
        finished.score
    );
    Ok(())
}

/// Another player answers outside any attempt: one hit, one miss.
fn run_standalone_answers(engine: &Engine, player: &User, contest: &Contest) -> anyhow::Result<()> {
    section(&format!("{} answers standalone", player.username));

    let first = contest
        .challenges
        .first()
        .context("The first contest has no challenges")?;
    let correct = engine.submit_standalone_answer(&player.id, &first.id, &first.correct_answer)?;
    println!("  {} {} (+{})", mark(correct), first.question, first.points);

    if let Some(second) = contest.challenges.get(1) {
        let correct = engine.submit_standalone_answer(&player.id, &second.id, "not even close")?;
        println!("  {} {} (+0)", mark(correct), second.question);
    }
    Ok(())
}

fn mark(correct: bool) -> console::StyledObject<&'static str> {
    if correct {
        Style::new().green().apply_to("✓")
    } else {
        Style::new().red().apply_to("✗")
    }
}
