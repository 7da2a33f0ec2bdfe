//! Effect system for card abilities.
//!
//! - `Effect`: the four effect kinds, each with a level formula
//! - `EffectResolver`: applies an effect to the player and the enemy
//! - `Resolved`: what an effect actually did, for logging and tests

mod effect;
mod resolver;

pub use effect::{Effect, Scaling};
pub use resolver::{EffectResolver, Resolved};
