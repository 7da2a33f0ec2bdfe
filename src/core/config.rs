//! Run configuration.
//!
//! A `RunConfig` fixes every tunable number of a run: map depth, player
//! stats, the starting deck, draft rules, safe-room rewards and the delays
//! of the engine's scheduled continuations. The defaults reproduce the
//! standard game; tests and headless drivers usually start from
//! [`RunConfig::headless`] so that continuations fire inline.
//!
//! ```
//! use zombie_deckbuilder::core::RunConfig;
//!
//! let config = RunConfig::headless().with_total_floors(3).with_hand_size(4);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.enemy_turn_delay().as_millis(), 0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::error::{EngineError, Result};

/// Starting values of the player's resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_hp: u32,
    pub max_ap: u32,
    pub max_ammo: u32,
    /// Ammo carried into the first fight. Ammo is never refilled per turn.
    pub starting_ammo: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            max_hp: 30,
            max_ap: 3,
            max_ammo: 10,
            starting_ammo: 5,
        }
    }
}

/// `count` copies of one card kind in the starting deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub kind: CardKind,
    pub count: u32,
}

impl DeckEntry {
    #[must_use]
    pub const fn new(kind: CardKind, count: u32) -> Self {
        Self { kind, count }
    }
}

/// Complete configuration of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of map floors, boss floor included.
    pub total_floors: usize,

    /// Player resource maxima and starting ammo.
    pub player: PlayerStats,

    /// Cards drawn at the start of every player turn.
    pub hand_size: usize,

    /// Starting deck, in creation order (before the opening shuffle).
    pub starting_deck: Vec<DeckEntry>,

    /// Choices offered after each victory.
    pub draft_size: usize,

    /// Chance that a draft slot offers an upgrade instead of a new card.
    pub upgrade_chance: f64,

    /// HP restored by a safe room (capped at max).
    pub safe_room_heal: u32,

    /// Ammo restored by a safe room (capped at max).
    pub safe_room_ammo: u32,

    /// Max-HP multiplier applied to elite enemies.
    pub elite_hp_multiplier: u32,

    /// Delay between ending the player turn and the enemy acting, and
    /// between the enemy acting and the next player turn.
    pub enemy_turn_delay_ms: u64,

    /// Delay between entering a safe room and re-presenting the map.
    pub safe_room_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_floors: 7,
            player: PlayerStats::default(),
            hand_size: 5,
            starting_deck: vec![
                DeckEntry::new(CardKind::Handgun, 3),
                DeckEntry::new(CardKind::CombatKnife, 1),
                DeckEntry::new(CardKind::Evade, 2),
                DeckEntry::new(CardKind::Scavenge, 2),
            ],
            draft_size: 3,
            upgrade_chance: 0.25,
            safe_room_heal: 15,
            safe_room_ammo: 5,
            elite_hp_multiplier: 2,
            enemy_turn_delay_ms: 1000,
            safe_room_delay_ms: 1000,
        }
    }
}

impl RunConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard configuration with every continuation delay set to zero.
    #[must_use]
    pub fn headless() -> Self {
        Self::default().with_delays(Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub fn with_total_floors(mut self, floors: usize) -> Self {
        self.total_floors = floors;
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: PlayerStats) -> Self {
        self.player = player;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Replace the starting deck.
    #[must_use]
    pub fn with_starting_deck(mut self, deck: impl IntoIterator<Item = DeckEntry>) -> Self {
        self.starting_deck = deck.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_draft_size(mut self, size: usize) -> Self {
        self.draft_size = size;
        self
    }

    #[must_use]
    pub fn with_upgrade_chance(mut self, chance: f64) -> Self {
        self.upgrade_chance = chance;
        self
    }

    /// Set the enemy-turn and safe-room delays.
    #[must_use]
    pub fn with_delays(mut self, enemy_turn: Duration, safe_room: Duration) -> Self {
        self.enemy_turn_delay_ms = saturating_millis(enemy_turn);
        self.safe_room_delay_ms = saturating_millis(safe_room);
        self
    }

    #[must_use]
    pub fn enemy_turn_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_turn_delay_ms)
    }

    #[must_use]
    pub fn safe_room_delay(&self) -> Duration {
        Duration::from_millis(self.safe_room_delay_ms)
    }

    /// Total number of cards in the starting deck.
    #[must_use]
    pub fn starting_deck_size(&self) -> usize {
        self.starting_deck.iter().map(|e| e.count as usize).sum()
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.total_floors == 0 {
            return Err(EngineError::NoFloors(self.total_floors));
        }
        if self.hand_size == 0 {
            return Err(invalid("hand_size must be positive"));
        }
        if self.draft_size == 0 {
            return Err(invalid("draft_size must be positive"));
        }
        if self.player.max_hp == 0 {
            return Err(invalid("player.max_hp must be positive"));
        }
        if self.player.starting_ammo > self.player.max_ammo {
            return Err(invalid(format!(
                "player.starting_ammo ({}) exceeds player.max_ammo ({})",
                self.player.starting_ammo, self.player.max_ammo
            )));
        }
        if !(0.0..=1.0).contains(&self.upgrade_chance) {
            return Err(invalid(format!(
                "upgrade_chance must be within [0, 1] (got {})",
                self.upgrade_chance
            )));
        }
        if self.elite_hp_multiplier == 0 {
            return Err(invalid("elite_hp_multiplier must be positive"));
        }
        if self.starting_deck_size() == 0 {
            return Err(invalid("starting_deck must contain at least one card"));
        }
        Ok(())
    }
}

fn saturating_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();

        assert_eq!(config.total_floors, 7);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.draft_size, 3);
        assert_eq!(config.starting_deck_size(), 8);
        assert_eq!(config.player.max_hp, 30);
        assert_eq!(config.player.starting_ammo, 5);
        assert_eq!(config.enemy_turn_delay(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_huge_delay_saturates() {
        let config = RunConfig::default().with_delays(Duration::MAX, Duration::from_millis(250));

        assert_eq!(config.enemy_turn_delay_ms, u64::MAX);
        assert_eq!(config.safe_room_delay_ms, 250);
    }

    #[test]
    fn test_headless_has_no_delays() {
        let config = RunConfig::headless();
        assert_eq!(config.enemy_turn_delay(), Duration::ZERO);
        assert_eq!(config.safe_room_delay(), Duration::ZERO);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new()
            .with_total_floors(3)
            .with_hand_size(2)
            .with_draft_size(1)
            .with_upgrade_chance(1.0)
            .with_starting_deck([DeckEntry::new(CardKind::Shotgun, 4)]);

        assert_eq!(config.total_floors, 3);
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.draft_size, 1);
        assert_eq!(config.starting_deck_size(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_floors() {
        let config = RunConfig::new().with_total_floors(0);
        assert_eq!(config.validate(), Err(EngineError::NoFloors(0)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            RunConfig::new().with_hand_size(0),
            RunConfig::new().with_draft_size(0),
            RunConfig::new().with_upgrade_chance(1.5),
            RunConfig::new().with_starting_deck([]),
            RunConfig::new().with_player(PlayerStats {
                starting_ammo: 20,
                ..PlayerStats::default()
            }),
        ];

        for config in bad {
            assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_config_serde_defaults_missing_fields() {
        let config: RunConfig =
            serde_json::from_str(r#"{ "total_floors": 4, "enemy_turn_delay_ms": 0 }"#).unwrap();

        assert_eq!(config.total_floors, 4);
        assert_eq!(config.enemy_turn_delay(), Duration::ZERO);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.starting_deck, RunConfig::default().starting_deck);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RunConfig::headless().with_total_floors(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
