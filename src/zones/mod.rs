//! Card piles.
//!
//! ## Key Types
//!
//! - `Zone`: deck, hand or discard
//! - `Piles`: owns every card the player has and moves them between zones
//! - `DrawOutcome`: what a single draw did

pub mod piles;

pub use piles::{DrawOutcome, Piles, Zone};
