//! Effect definitions.
//!
//! Every card does exactly one thing, and how much of it depends only on
//! the card's level. An `Effect` names the thing; its `Scaling` gives the
//! amount as `base + per_level * level`.

use serde::{Deserialize, Serialize};

/// Linear level formula: `base + per_level * level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scaling {
    pub base: u32,
    pub per_level: u32,
}

impl Scaling {
    #[must_use]
    pub const fn new(base: u32, per_level: u32) -> Self {
        Self { base, per_level }
    }

    /// Amount at the given level.
    #[must_use]
    pub const fn at(self, level: u32) -> u32 {
        self.base + self.per_level * level
    }
}

/// An atomic card effect.
///
/// - `Damage`: the enemy in combat loses HP (floored at 0)
/// - `Block`: the player gains block for the current turn
/// - `Heal`: the player regains HP, capped at max HP
/// - `GainAmmo`: the player regains ammo, capped at max ammo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    Damage(Scaling),
    Block(Scaling),
    Heal(Scaling),
    GainAmmo(Scaling),
}

impl Effect {
    /// Create a damage effect.
    pub const fn damage(base: u32, per_level: u32) -> Self {
        Self::Damage(Scaling::new(base, per_level))
    }

    /// Create a block effect.
    pub const fn block(base: u32, per_level: u32) -> Self {
        Self::Block(Scaling::new(base, per_level))
    }

    /// Create a heal effect.
    pub const fn heal(base: u32, per_level: u32) -> Self {
        Self::Heal(Scaling::new(base, per_level))
    }

    /// Create an ammo gain effect.
    pub const fn gain_ammo(base: u32, per_level: u32) -> Self {
        Self::GainAmmo(Scaling::new(base, per_level))
    }

    /// The level formula of this effect.
    #[must_use]
    pub const fn scaling(self) -> Scaling {
        match self {
            Effect::Damage(s) | Effect::Block(s) | Effect::Heal(s) | Effect::GainAmmo(s) => s,
        }
    }

    /// Nominal amount at the given level, before any cap is applied.
    #[must_use]
    pub const fn amount(self, level: u32) -> u32 {
        self.scaling().at(level)
    }

    /// Does this effect need an enemy to land on?
    #[must_use]
    pub const fn targets_enemy(self) -> bool {
        matches!(self, Effect::Damage(_))
    }
}
