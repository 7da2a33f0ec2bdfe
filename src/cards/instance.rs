//! Card instances - the copies the player actually owns.
//!
//! A `Card` is created fresh from a `CardDefinition` and owns all of its
//! data, so upgrading one Handgun never touches another. Its level only
//! ever goes up, and its rules text is recomputed from the level on every
//! read.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind, CardType, AMOUNT_PLACEHOLDER};
use crate::core::CardId;
use crate::effects::Effect;

/// A single owned card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique per instance.
    pub id: CardId,
    pub kind: CardKind,
    pub name: String,
    pub card_type: CardType,
    pub ap_cost: u32,
    pub ammo_cost: u32,
    pub effect: Effect,
    pub icon: String,
    text: String,
    level: u32,
}

impl Card {
    /// Instantiate a level-1 copy of a definition.
    #[must_use]
    pub fn from_definition(definition: &CardDefinition, id: CardId) -> Self {
        Self {
            id,
            kind: definition.kind,
            name: definition.name.clone(),
            card_type: definition.card_type,
            ap_cost: definition.ap_cost,
            ammo_cost: definition.ammo_cost,
            effect: definition.effect,
            icon: definition.icon.clone(),
            text: definition.text.clone(),
            level: 1,
        }
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Raise the level by one. Returns the new level.
    pub fn upgrade(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    /// Current rules text.
    #[must_use]
    pub fn description(&self) -> String {
        self.description_at(self.level)
    }

    /// Rules text as it would read at `level` (used for upgrade previews).
    #[must_use]
    pub fn description_at(&self, level: u32) -> String {
        self.text
            .replace(AMOUNT_PLACEHOLDER, &self.effect.amount(level).to_string())
    }

    /// Effect amount at the current level, before caps.
    #[must_use]
    pub fn effect_amount(&self) -> u32 {
        self.effect.amount(self.level)
    }
}
