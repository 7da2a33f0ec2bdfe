//! Core value types shared by every component: ids, RNG, configuration.

pub mod config;
pub mod entity;
pub mod rng;

pub use config::{DeckEntry, PlayerStats, RunConfig};
pub use entity::{CardId, EnemyId, IdAllocator};
pub use rng::GameRng;
