//! The player's three card piles and movement between them.
//!
//! Cards are owned by exactly one pile at a time. Moving a card moves the
//! value, so a card can never be duplicated or lost. For the deck, the last
//! element is the top: draws pop from the tail.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::core::{CardId, GameRng};

/// Which pile a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Discard,
}

/// Result of a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card moved to hand. `reshuffled` is set when the discard pile had
    /// to be shuffled back into the deck first.
    Drawn { card: CardId, reshuffled: bool },
    /// Deck and discard were both empty.
    Exhausted,
}

/// Deck, hand and discard.
///
/// ```
/// use zombie_deckbuilder::cards::{CardCatalog, CardKind};
/// use zombie_deckbuilder::core::{CardId, GameRng};
/// use zombie_deckbuilder::zones::{DrawOutcome, Piles, Zone};
///
/// let catalog = CardCatalog::standard();
/// let mut piles = Piles::new();
/// piles.add(catalog.create(CardKind::Handgun, CardId::new(1)).unwrap(), Zone::Deck);
///
/// let mut rng = GameRng::new(7);
/// assert!(matches!(piles.draw(&mut rng), DrawOutcome::Drawn { .. }));
/// assert_eq!(piles.zone_of(CardId::new(1)), Some(Zone::Hand));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl Piles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Piles with `cards` as the deck (last element on top).
    #[must_use]
    pub fn with_deck(cards: Vec<Card>) -> Self {
        Self {
            deck: cards,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Cards in a zone, in pile order.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
        }
    }

    fn pile_mut(&mut self, zone: Zone) -> &mut Vec<Card> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Discard => &mut self.discard,
        }
    }

    /// Put a card on top of a zone.
    ///
    /// Panics if a card with the same id is already held.
    pub fn add(&mut self, card: Card, zone: Zone) {
        if let Some(existing) = self.zone_of(card.id) {
            panic!("Card {} already in {:?}", card.id, existing);
        }
        self.pile_mut(zone).push(card);
    }

    /// Where a card currently is.
    #[must_use]
    pub fn zone_of(&self, id: CardId) -> Option<Zone> {
        [Zone::Hand, Zone::Deck, Zone::Discard]
            .into_iter()
            .find(|&zone| self.cards_in(zone).iter().any(|c| c.id == id))
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.zone_of(id).is_some()
    }

    /// Find a card in any pile.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.iter().find(|c| c.id == id)
    }

    /// Find a card in any pile, mutably.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.deck
            .iter_mut()
            .chain(self.hand.iter_mut())
            .chain(self.discard.iter_mut())
            .find(|c| c.id == id)
    }

    /// Find a card in hand.
    #[must_use]
    pub fn in_hand(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Move a card between zones, placing it on top of `to`.
    ///
    /// Returns false (and changes nothing) if the card is not in `from`.
    pub fn move_card(&mut self, id: CardId, from: Zone, to: Zone) -> bool {
        let source = self.pile_mut(from);
        let Some(pos) = source.iter().position(|c| c.id == id) else {
            return false;
        };
        let card = source.remove(pos);
        self.pile_mut(to).push(card);
        true
    }

    /// Shuffle the deck in place.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
        trace!(cards = self.deck.len(), "deck shuffled");
    }

    /// Draw the top card into hand.
    ///
    /// An empty deck is refilled from the discard pile and shuffled first.
    pub fn draw(&mut self, rng: &mut GameRng) -> DrawOutcome {
        let mut reshuffled = false;
        if self.deck.is_empty() {
            if self.discard.is_empty() {
                trace!("draw with deck and discard empty");
                return DrawOutcome::Exhausted;
            }
            self.deck.append(&mut self.discard);
            self.shuffle_deck(rng);
            reshuffled = true;
        }

        match self.deck.pop() {
            Some(card) => {
                let id = card.id;
                trace!(card = %id, reshuffled, "card drawn");
                self.hand.push(card);
                DrawOutcome::Drawn { card: id, reshuffled }
            }
            None => DrawOutcome::Exhausted,
        }
    }

    /// Move the whole hand to the discard pile. Returns how many moved.
    pub fn discard_hand(&mut self) -> usize {
        let count = self.hand.len();
        // Popped from the end, so the last card in hand ends up deepest.
        while let Some(card) = self.hand.pop() {
            self.discard.push(card);
        }
        count
    }

    /// Gather deck, hand and discard back into the deck (unshuffled).
    pub fn recombine_into_deck(&mut self) {
        self.deck.append(&mut self.hand);
        self.deck.append(&mut self.discard);
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.deck.clear();
        self.hand.clear();
        self.discard.clear();
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Every owned card: deck, then hand, then discard.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(&self.hand).chain(&self.discard)
    }
}
