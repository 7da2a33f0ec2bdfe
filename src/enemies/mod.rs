//! Enemies: instances, intent planning and the enemy catalog.

pub mod catalog;
pub mod enemy;

pub use catalog::{EnemyCatalog, EnemyDefinition, ELITE_PREFIX};
pub use enemy::{Enemy, Intent, IntentKind};
