//! Effect resolution - applying an effect to combat state.
//!
//! The resolver only touches what a card is allowed to touch: enemy HP and
//! the player's HP, ammo and block. It never sees the card itself, so card
//! costs cannot be modified by an effect.

use crate::enemies::Enemy;
use crate::engine::PlayerState;

use super::Effect;

/// What an effect actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Damage dealt to the enemy, and its HP afterwards.
    DamageDealt { amount: u32, enemy_hp: u32 },
    /// Block gained, and the player's total block afterwards.
    BlockGained { amount: u32, total: u32 },
    /// HP actually restored (after the max-HP cap).
    Healed { amount: u32 },
    /// Ammo actually restored (after the max-ammo cap).
    AmmoGained { amount: u32 },
    /// A damage effect with no enemy in combat.
    NoTarget,
}

impl Resolved {
    /// Player-facing log line for a card that produced this result.
    #[must_use]
    pub fn describe(&self, card_name: &str) -> String {
        match self {
            Resolved::DamageDealt { amount, .. } => {
                format!("{card_name} hits for {amount} damage!")
            }
            Resolved::BlockGained { amount, .. } => {
                format!("{card_name}: braced for {amount} Block.")
            }
            Resolved::Healed { amount } => format!("{card_name}: restored {amount} HP."),
            Resolved::AmmoGained { amount } => format!("{card_name}: scavenged {amount} Ammo."),
            Resolved::NoTarget => format!("{card_name} has nothing to hit."),
        }
    }

    /// Did this result damage the enemy?
    #[must_use]
    pub fn hit_enemy(&self) -> bool {
        matches!(self, Resolved::DamageDealt { .. })
    }
}

/// Applies effects to the player and the current enemy.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` at `level`.
    pub fn resolve(
        effect: Effect,
        level: u32,
        player: &mut PlayerState,
        enemy: Option<&mut Enemy>,
    ) -> Resolved {
        let amount = effect.amount(level);

        match effect {
            Effect::Damage(_) => match enemy {
                Some(enemy) => {
                    enemy.take_damage(amount);
                    Resolved::DamageDealt {
                        amount,
                        enemy_hp: enemy.hp(),
                    }
                }
                None => Resolved::NoTarget,
            },
            Effect::Block(_) => {
                player.gain_block(amount);
                Resolved::BlockGained {
                    amount,
                    total: player.block,
                }
            }
            Effect::Heal(_) => Resolved::Healed {
                amount: player.heal(amount),
            },
            Effect::GainAmmo(_) => Resolved::AmmoGained {
                amount: player.gain_ammo(amount),
            },
        }
    }
}
