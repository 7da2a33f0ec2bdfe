//! Enemy instances and intent planning.

use serde::{Deserialize, Serialize};

use crate::core::{EnemyId, GameRng};

/// Chance that a planned intent is an attack.
pub const ATTACK_CHANCE: f64 = 0.7;

/// Smallest attack intent damage.
pub const MIN_ATTACK: u32 = 3;

/// Largest attack intent damage.
pub const MAX_ATTACK: u32 = 6;

/// Value carried by a block intent. It has no mechanical effect yet.
pub const BLOCK_VALUE: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    Attack,
    Block,
}

/// The enemy's telegraphed next action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    pub value: u32,
    pub description: String,
}

impl Intent {
    #[must_use]
    pub fn attack(damage: u32) -> Self {
        Self {
            kind: IntentKind::Attack,
            value: damage,
            description: format!("Intends to bite ({damage})"),
        }
    }

    #[must_use]
    pub fn block(value: u32) -> Self {
        Self {
            kind: IntentKind::Block,
            value,
            description: "Stumbles unpredictably".to_string(),
        }
    }
}

/// An enemy in (or about to enter) combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub max_hp: u32,
    hp: u32,
    pub sprite_icon: String,
    pub current_intent: Option<Intent>,
}

impl Enemy {
    /// Create an enemy at full health with no intent.
    #[must_use]
    pub fn new(id: EnemyId, name: impl Into<String>, max_hp: u32, sprite_icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            max_hp,
            hp: max_hp,
            sprite_icon: sprite_icon.into(),
            current_intent: None,
        }
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Lose `amount` HP, never dropping below 0. Returns HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Roll the next intent and store it.
    pub fn plan_turn(&mut self, rng: &mut GameRng) -> &Intent {
        let intent = if rng.roll() < ATTACK_CHANCE {
            Intent::attack(rng.gen_range(MIN_ATTACK..=MAX_ATTACK))
        } else {
            Intent::block(BLOCK_VALUE)
        };
        self.current_intent.insert(intent)
    }

    /// Consume the current intent.
    pub fn take_intent(&mut self) -> Option<Intent> {
        self.current_intent.take()
    }
}
