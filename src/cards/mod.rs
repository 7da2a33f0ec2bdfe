//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardKind`: which card ("Handgun"), shared by every copy
//! - `CardDefinition`: static card data (costs, effect, rules text)
//! - `Card`: an owned copy with its own id and level
//! - `CardCatalog`: definition lookup and instance factory

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardKind, CardType};
pub use instance::Card;
pub use registry::CardCatalog;
