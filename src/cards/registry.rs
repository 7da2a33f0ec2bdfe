//! Card catalog: definition lookup and instance factory.
//!
//! The engine receives a `CardCatalog` at construction and uses it for the
//! starting deck and for "new card" draft offers.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardKind, CardType};
use super::instance::Card;
use crate::core::{CardId, GameRng};
use crate::effects::Effect;

/// Catalog of card definitions.
///
/// ```
/// use zombie_deckbuilder::cards::{CardCatalog, CardKind};
/// use zombie_deckbuilder::core::CardId;
///
/// let catalog = CardCatalog::standard();
/// let gun = catalog.create(CardKind::Handgun, CardId::new(1)).unwrap();
///
/// assert_eq!(gun.name, "Handgun");
/// assert_eq!(gun.effect_amount(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardKind, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The six standard cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register(
            CardDefinition::new(CardKind::Handgun, "Handgun", CardType::Attack)
                .with_costs(1, 1)
                .with_effect(Effect::damage(4, 1))
                .with_text("Fire a single 9mm round for {amount} Damage.")
                .with_icon("🔫"),
        );
        catalog.register(
            CardDefinition::new(CardKind::CombatKnife, "Combat Knife", CardType::Attack)
                .with_costs(1, 0)
                .with_effect(Effect::damage(1, 1))
                .with_text("Slashing attack for {amount} Damage. Costs no Ammo.")
                .with_icon("🔪"),
        );
        catalog.register(
            CardDefinition::new(CardKind::Evade, "Evade", CardType::Defense)
                .with_costs(1, 0)
                .with_effect(Effect::block(3, 2))
                .with_text("Prepare to dodge. Gain {amount} Block this turn.")
                .with_icon("🛡️"),
        );
        catalog.register(
            CardDefinition::new(CardKind::Scavenge, "Scavenge", CardType::Utility)
                .with_costs(2, 0)
                .with_effect(Effect::gain_ammo(1, 1))
                .with_text("Search the surroundings. Gain up to {amount} Ammo.")
                .with_icon("🎒"),
        );
        catalog.register(
            CardDefinition::new(CardKind::Shotgun, "Shotgun", CardType::Attack)
                .with_costs(2, 2)
                .with_effect(Effect::damage(10, 2))
                .with_text("Point-blank blast for {amount} Damage.")
                .with_icon("💥"),
        );
        catalog.register(
            CardDefinition::new(CardKind::FirstAidSpray, "First Aid Spray", CardType::Utility)
                .with_costs(1, 0)
                .with_effect(Effect::heal(10, 5))
                .with_text("Patch yourself up. Restore up to {amount} HP.")
                .with_icon("🩹"),
        );

        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.kind) {
            panic!("Card kind {:?} already registered", card.kind);
        }
        self.cards.insert(card.kind, card);
    }

    /// Get a card definition by kind.
    #[must_use]
    pub fn get(&self, kind: CardKind) -> Option<&CardDefinition> {
        self.cards.get(&kind)
    }

    /// Create a fresh level-1 instance of `kind`.
    #[must_use]
    pub fn create(&self, kind: CardKind, id: CardId) -> Option<Card> {
        self.get(kind).map(|def| Card::from_definition(def, id))
    }

    /// Registered kinds in a stable order.
    #[must_use]
    pub fn kinds(&self) -> Vec<CardKind> {
        let mut kinds: Vec<_> = self.cards.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Pick a registered kind uniformly at random.
    pub fn random_kind(&self, rng: &mut GameRng) -> Option<CardKind> {
        rng.choose(&self.kinds()).copied()
    }

    #[must_use]
    pub fn contains(&self, kind: CardKind) -> bool {
        self.cards.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
