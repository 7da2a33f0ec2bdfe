//! Player resources and the combat turn state.

use serde::{Deserialize, Serialize};

use crate::core::PlayerStats;

/// Whose move it is inside a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Player may play cards or end the turn. Also the resting state on the map.
    #[default]
    Player,
    /// Enemy turn is resolving.
    Enemy,
    /// Waiting for a draft pick after a victory.
    Drafting,
}

/// Outcome of an enemy attack against the player's block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackResolution {
    /// Damage the enemy announced.
    pub raw: u32,
    /// Portion absorbed by block.
    pub blocked: u32,
    /// HP actually lost.
    pub damage_taken: u32,
}

/// The player's resources.
///
/// All fields are unsigned, and every mutator clamps at its cap, so
/// `0 <= x <= max_x` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub max_hp: u32,
    pub hp: u32,
    pub max_ap: u32,
    pub ap: u32,
    pub max_ammo: u32,
    pub ammo: u32,
    pub block: u32,
}

impl PlayerState {
    /// Fresh player at full HP and AP with the configured starting ammo.
    #[must_use]
    pub fn from_stats(stats: &PlayerStats) -> Self {
        Self {
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            max_ap: stats.max_ap,
            ap: stats.max_ap,
            max_ammo: stats.max_ammo,
            ammo: stats.starting_ammo.min(stats.max_ammo),
            block: 0,
        }
    }

    #[must_use]
    pub fn can_afford(&self, ap_cost: u32, ammo_cost: u32) -> bool {
        self.ap >= ap_cost && self.ammo >= ammo_cost
    }

    /// Debit a card's costs. Returns false, changing nothing, if either
    /// resource is short.
    pub fn spend(&mut self, ap_cost: u32, ammo_cost: u32) -> bool {
        if !self.can_afford(ap_cost, ammo_cost) {
            return false;
        }
        self.ap -= ap_cost;
        self.ammo -= ammo_cost;
        true
    }

    /// Start-of-turn refresh: full AP, block wiped.
    pub fn reset_for_turn(&mut self) {
        self.ap = self.max_ap;
        self.block = 0;
    }

    /// Restore HP up to the cap. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp - self.hp);
        self.hp += applied;
        applied
    }

    /// Restore ammo up to the cap. Returns the amount actually gained.
    pub fn gain_ammo(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_ammo - self.ammo);
        self.ammo += applied;
        applied
    }

    pub fn gain_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Take an attack of `raw` damage. Block absorbs first and is
    /// consumed by what it absorbs; the rest comes off HP, floored at 0.
    pub fn absorb_attack(&mut self, raw: u32) -> AttackResolution {
        let blocked = self.block.min(raw);
        let damage_taken = raw - blocked;
        self.block -= blocked;
        self.hp = self.hp.saturating_sub(damage_taken);
        AttackResolution {
            raw,
            blocked,
            damage_taken,
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::from_stats(&PlayerStats::default())
    }
}
