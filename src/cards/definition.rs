//! Card definitions - static card data.
//!
//! `CardDefinition` holds what every copy of a card shares: name, type,
//! costs, effect and rules text. Level and identity belong to the
//! instance (`Card`).

use serde::{Deserialize, Serialize};

use crate::effects::Effect;

/// Placeholder in rules text replaced by the effect amount at the card's level.
pub const AMOUNT_PLACEHOLDER: &str = "{amount}";

/// Identifies a card definition ("Handgun"), not a specific copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Handgun,
    CombatKnife,
    Evade,
    Scavenge,
    Shotgun,
    FirstAidSpray,
}

impl CardKind {
    /// Every card kind in the standard catalog.
    pub const ALL: [CardKind; 6] = [
        CardKind::Handgun,
        CardKind::CombatKnife,
        CardKind::Evade,
        CardKind::Scavenge,
        CardKind::Shotgun,
        CardKind::FirstAidSpray,
    ];
}

/// Broad card category, used for display and by autoplay policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Attack,
    Defense,
    Utility,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Attack => "attack",
            CardType::Defense => "defense",
            CardType::Utility => "utility",
        };
        f.write_str(name)
    }
}

/// Static card definition.
///
/// ```
/// use zombie_deckbuilder::cards::{CardDefinition, CardKind, CardType};
/// use zombie_deckbuilder::effects::Effect;
///
/// let knife = CardDefinition::new(CardKind::CombatKnife, "Combat Knife", CardType::Attack)
///     .with_costs(1, 0)
///     .with_effect(Effect::damage(1, 1))
///     .with_text("Slash for {amount} Damage.");
///
/// assert_eq!(knife.describe(1), "Slash for 2 Damage.");
/// assert_eq!(knife.describe(4), "Slash for 5 Damage.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub kind: CardKind,
    pub name: String,
    pub card_type: CardType,
    pub ap_cost: u32,
    pub ammo_cost: u32,
    pub effect: Effect,
    /// Rules text; `{amount}` is filled in from the effect at read time.
    pub text: String,
    pub icon: String,
}

impl CardDefinition {
    /// Create a definition with zero costs, a zero-damage effect and no text.
    #[must_use]
    pub fn new(kind: CardKind, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            kind,
            name: name.into(),
            card_type,
            ap_cost: 0,
            ammo_cost: 0,
            effect: Effect::damage(0, 0),
            text: String::new(),
            icon: String::new(),
        }
    }

    #[must_use]
    pub fn with_costs(mut self, ap: u32, ammo: u32) -> Self {
        self.ap_cost = ap;
        self.ammo_cost = ammo;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Rules text at the given level.
    #[must_use]
    pub fn describe(&self, level: u32) -> String {
        self.text
            .replace(AMOUNT_PLACEHOLDER, &self.effect.amount(level).to_string())
    }
}
