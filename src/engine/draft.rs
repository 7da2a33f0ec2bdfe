//! Post-victory draft.
//!
//! Every slot independently rolls for an upgrade of an owned card; failing
//! that (or with nothing owned) it offers a fresh copy of a random catalog
//! card. New cards get their ids when offered, so an untaken offer simply
//! burns an id.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog};
use crate::core::{CardId, GameRng, IdAllocator};
use crate::zones::Piles;

/// One offer in a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftChoice {
    /// A fresh level-1 card, added to the discard pile if taken.
    New(Card),
    /// Raise an owned card's level by one.
    Upgrade {
        card_id: CardId,
        name: String,
        icon: String,
        current_level: u32,
        /// Rules text at `current_level + 1`.
        preview: String,
    },
}

impl DraftChoice {
    fn upgrade_of(card: &Card) -> Self {
        let next = card.level() + 1;
        DraftChoice::Upgrade {
            card_id: card.id,
            name: card.name.clone(),
            icon: card.icon.clone(),
            current_level: card.level(),
            preview: card.description_at(next),
        }
    }

    /// Heading shown on the choice.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            DraftChoice::New(card) => card.name.clone(),
            DraftChoice::Upgrade {
                name, current_level, ..
            } => format!("Upgrade {name} (Lv {})", current_level + 1),
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            DraftChoice::New(card) => card.description(),
            DraftChoice::Upgrade { preview, .. } => preview.clone(),
        }
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        match self {
            DraftChoice::New(card) => &card.icon,
            DraftChoice::Upgrade { icon, .. } => icon,
        }
    }

    #[must_use]
    pub fn is_upgrade(&self) -> bool {
        matches!(self, DraftChoice::Upgrade { .. })
    }
}

/// The player's answer to a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftSelection {
    /// Take the choice at this index.
    Pick(usize),
    /// Take nothing.
    Skip,
}

impl DraftSelection {
    /// Map a presentation-layer index where `-1` (or any negative) means skip.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index).map_or(DraftSelection::Skip, DraftSelection::Pick)
    }
}

/// Draft parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraftRules {
    pub size: usize,
    pub upgrade_chance: f64,
}

impl DraftRules {
    /// Roll `size` choices against the player's current collection.
    pub fn generate(
        &self,
        catalog: &CardCatalog,
        owned: &Piles,
        ids: &mut IdAllocator,
        rng: &mut GameRng,
    ) -> Vec<DraftChoice> {
        let owned_cards: Vec<&Card> = owned.iter().collect();
        let mut choices = Vec::with_capacity(self.size);

        for _ in 0..self.size {
            let wants_upgrade = rng.roll() < self.upgrade_chance;
            let upgrade = if wants_upgrade {
                rng.choose(&owned_cards).map(|card| DraftChoice::upgrade_of(card))
            } else {
                None
            };

            let choice = match upgrade {
                Some(choice) => Some(choice),
                None => catalog
                    .random_kind(rng)
                    .and_then(|kind| catalog.create(kind, ids.next_card()))
                    .map(DraftChoice::New),
            };

            if let Some(choice) = choice {
                choices.push(choice);
            }
        }

        choices
    }
}
