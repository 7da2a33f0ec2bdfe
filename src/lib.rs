//! # zombie-deckbuilder
//!
//! Rules engine for a single-player roguelike deckbuilder: fight your way
//! through a procedurally generated mansion with a small deck of weapons,
//! drafting new cards and upgrades after every kill.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine renders nothing. It reports to
//!    an injected `Observer` and the host reads live state back.
//!
//! 2. **Deterministic**: Every random decision flows from one seed, with
//!    map layout on its own stream.
//!
//! 3. **Configuration Over Convention**: Floors, stats, starting deck,
//!    draft rules and delays all live in `RunConfig`; catalogs are injected.
//!
//! ## Architecture
//!
//! - **Single owner**: `GameRun` owns all mutable state. Inbound calls made
//!   at the wrong time are silent no-ops.
//!
//! - **Explicit continuations**: The two timed phase transitions are held
//!   as a single pending step, fired inline when the delay is zero.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, run configuration
//! - `cards`: Card definitions, instances and the catalog
//! - `effects`: Effect kinds and their resolution
//! - `enemies`: Enemies, intents and the enemy catalog
//! - `map`: Map graph and generator
//! - `zones`: Deck, hand and discard
//! - `engine`: The run state machine and the observer port
//! - `autoplay`: Headless policies and the autopilot

pub mod autoplay;
pub mod cards;
pub mod core;
pub mod effects;
pub mod enemies;
pub mod engine;
pub mod error;
pub mod map;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{CardId, DeckEntry, EnemyId, GameRng, IdAllocator, PlayerStats, RunConfig};

pub use crate::error::{EngineError, Result};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardKind, CardType};

pub use crate::effects::{Effect, EffectResolver, Resolved, Scaling};

pub use crate::enemies::{Enemy, EnemyCatalog, EnemyDefinition, Intent, IntentKind};

pub use crate::map::{DungeonMap, MapGenerator, MapNode, NodeId, NodeType};

pub use crate::zones::{DrawOutcome, Piles, Zone};

pub use crate::engine::{
    Continuation, DraftChoice, DraftSelection, GameRun, GameRunBuilder, LogCategory, Observer,
    Pending, PlayOutcome, PlayerState, TurnState,
};

pub use crate::autoplay::{AutoplayReport, Autopilot, GreedyPolicy, Policy, RandomPolicy};
