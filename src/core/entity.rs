//! Entity identification.
//!
//! Every card instance owned by the player has a unique `CardId`, and every
//! spawned enemy has an `EnemyId`. Ids are allocated by the engine and are
//! never reused within a run.
//!
//! ```
//! use zombie_deckbuilder::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::default();
//! let first: CardId = ids.next_card();
//! let second = ids.next_card();
//!
//! assert_ne!(first, second);
//! assert_eq!(first.to_string(), "card_1");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a single card instance.
///
/// Two Handguns in the same deck have different `CardId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Unique identifier of a spawned enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl EnemyId {
    /// Create a new enemy ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "enemy_{}", self.0)
    }
}

/// Monotonic id source for cards and enemies.
///
/// Ids start at 1 so that the starting deck reads `card_1..card_8`.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last_card: u32,
    last_enemy: u32,
}

impl IdAllocator {
    /// Allocate the next card id.
    pub fn next_card(&mut self) -> CardId {
        self.last_card += 1;
        CardId(self.last_card)
    }

    /// Allocate the next enemy id.
    pub fn next_enemy(&mut self) -> EnemyId {
        self.last_enemy += 1;
        EnemyId(self.last_enemy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "card_42");
    }

    #[test]
    fn test_enemy_id_display() {
        assert_eq!(EnemyId::new(3).to_string(), "enemy_3");
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = IdAllocator::default();
        let cards: Vec<_> = (0..8).map(|_| ids.next_card()).collect();

        assert_eq!(cards.first(), Some(&CardId(1)));
        assert_eq!(cards.last(), Some(&CardId(8)));
        assert!(cards.windows(2).all(|w| w[0] < w[1]));

        // Enemy ids are a separate sequence
        assert_eq!(ids.next_enemy(), EnemyId(1));
        assert_eq!(ids.next_card(), CardId(9));
    }
}
