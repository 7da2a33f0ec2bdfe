//! Combat and progression engine.
//!
//! ## Key Types
//!
//! - `GameRun`: the aggregate root and its inbound operations
//! - `GameRunBuilder`: assembles config, seed, catalogs and observer
//! - `PlayerState` / `TurnState`: resources and whose move it is
//! - `Observer`: the presentation port the engine reports to
//! - `DraftChoice` / `DraftSelection`: post-victory rewards
//! - `Continuation` / `Pending`: the single deferred step

pub mod draft;
pub mod observer;
pub mod run;
pub mod schedule;
pub mod state;

pub use draft::{DraftChoice, DraftRules, DraftSelection};
pub use observer::{LogCategory, NullObserver, Observer, ObserverEvent, RecordingObserver, TracingObserver};
pub use run::{GameRun, GameRunBuilder, PlayOutcome, RunStats};
pub use schedule::{Continuation, Pending};
pub use state::{AttackResolution, PlayerState, TurnState};
