//! Enemy catalog: the regular roster plus the boss encounter.
//!
//! Map nodes decide which factory is used: `Enemy` nodes spawn a random
//! regular, `Elite` nodes a random regular with multiplied HP and an
//! `Elite ` name prefix, and the boss node always spawns the boss.

use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use crate::core::{EnemyId, GameRng};

/// Prefix given to elite enemy names.
pub const ELITE_PREFIX: &str = "Elite ";

/// Static enemy data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_hp: u32,
    pub sprite_icon: String,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: u32, sprite_icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_hp,
            sprite_icon: sprite_icon.into(),
        }
    }

    /// Create a fresh full-health instance.
    #[must_use]
    pub fn spawn(&self, id: EnemyId) -> Enemy {
        Enemy::new(id, self.name.clone(), self.max_hp, self.sprite_icon.clone())
    }
}

/// Catalog of enemies the engine can spawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyCatalog {
    roster: Vec<EnemyDefinition>,
    boss: EnemyDefinition,
}

impl EnemyCatalog {
    /// Catalog with the given regular roster and boss.
    #[must_use]
    pub fn new(roster: Vec<EnemyDefinition>, boss: EnemyDefinition) -> Self {
        Self { roster, boss }
    }

    /// Shambling Zombie, Infected Dog and Licker Mutant, with the Tyrant as boss.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            vec![
                EnemyDefinition::new("Shambling Zombie", 20, "🧟"),
                EnemyDefinition::new("Infected Dog", 10, "🐕"),
                EnemyDefinition::new("Licker Mutant", 40, "🧠"),
            ],
            EnemyDefinition::new("The Tyrant", 150, "👹"),
        )
    }

    #[must_use]
    pub fn roster(&self) -> &[EnemyDefinition] {
        &self.roster
    }

    #[must_use]
    pub fn boss(&self) -> &EnemyDefinition {
        &self.boss
    }

    /// Look up a regular enemy by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&EnemyDefinition> {
        self.roster.iter().find(|d| d.name == name)
    }

    /// Spawn a uniformly chosen regular enemy.
    ///
    /// Falls back to the boss when the roster is empty.
    pub fn spawn_regular(&self, id: EnemyId, rng: &mut GameRng) -> Enemy {
        match rng.choose(&self.roster) {
            Some(def) => def.spawn(id),
            None => self.boss.spawn(id),
        }
    }

    /// Spawn a uniformly chosen regular enemy as an elite.
    pub fn spawn_elite(&self, id: EnemyId, hp_multiplier: u32, rng: &mut GameRng) -> Enemy {
        let base = self.spawn_regular(id, rng);
        let max_hp = base.max_hp.saturating_mul(hp_multiplier);
        Enemy::new(
            id,
            format!("{ELITE_PREFIX}{}", base.name),
            max_hp,
            base.sprite_icon,
        )
    }

    /// Spawn the boss.
    #[must_use]
    pub fn spawn_boss(&self, id: EnemyId) -> Enemy {
        self.boss.spawn(id)
    }
}

impl Default for EnemyCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
