//! Procedural branching map.
//!
//! ## Key Types
//!
//! - `NodeId`, `NodeType`, `MapNode`: single encounters
//! - `DungeonMap`: the generated floor-by-floor graph and its queries
//! - `MapGenerator`: builds a `DungeonMap` with its reachability guarantees

pub mod generator;
pub mod graph;
pub mod node;

pub use generator::MapGenerator;
pub use graph::DungeonMap;
pub use node::{Connections, MapNode, NodeId, NodeType};
