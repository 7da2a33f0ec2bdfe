//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};
use zombie_deckbuilder::cards::CardKind;
use zombie_deckbuilder::core::{DeckEntry, EnemyId, RunConfig};
use zombie_deckbuilder::engine::{GameRun, GameRunBuilder, RecordingObserver};
use zombie_deckbuilder::enemies::Enemy;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A started headless run with a recording observer.
pub fn started_run(config: RunConfig, seed: u64) -> GameRun<RecordingObserver> {
    init_logging();
    let mut run = GameRunBuilder::new()
        .config(config)
        .seed(seed)
        .build(RecordingObserver::new())
        .expect("valid config");
    run.start_run().expect("map generation");
    run
}

/// Headless config whose starting deck is `count` copies of one card.
pub fn mono_deck(kind: CardKind, count: u32) -> RunConfig {
    RunConfig::headless().with_starting_deck([DeckEntry::new(kind, count)])
}

pub fn shambling_zombie() -> Enemy {
    Enemy::new(EnemyId::new(100), "Shambling Zombie", 20, "🧟")
}

pub fn infected_dog() -> Enemy {
    Enemy::new(EnemyId::new(101), "Infected Dog", 10, "🐕")
}
