//! Procedural map generation.
//!
//! Builds a layered DAG floor by floor:
//!
//! 1. Every floor but the last gets 2-4 nodes; the last floor holds only
//!    the boss.
//! 2. Floor 0 is always plain enemies. Later floors roll for safe rooms,
//!    and elites appear only past the third floor.
//! 3. Each node gets one forward edge to a random node on the next floor,
//!    then every next-floor node left without an incoming edge is wired
//!    from a random node on the current floor.
//!
//! Step 3 guarantees that every non-final node has an outgoing edge and
//! every node past floor 0 has an incoming edge, without a global search.

use tracing::debug;

use super::graph::DungeonMap;
use super::node::{MapNode, NodeId, NodeType};
use crate::core::GameRng;
use crate::error::{EngineError, Result};

/// Map generation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct MapGenerator {
    /// Fewest nodes on a non-boss floor.
    pub min_nodes: usize,
    /// Most nodes on a non-boss floor.
    pub max_nodes: usize,
    /// Rolls below this become safe rooms.
    pub safe_threshold: f64,
    /// Rolls below this (and not safe) become elites, past `elite_after_floor`.
    pub elite_threshold: f64,
    /// Elites only appear on floors strictly greater than this.
    pub elite_after_floor: usize,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self {
            min_nodes: 2,
            max_nodes: 4,
            safe_threshold: 0.15,
            elite_threshold: 0.30,
            elite_after_floor: 2,
        }
    }
}

impl MapGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the parameters can produce a connected map.
    pub fn validate(&self) -> Result<()> {
        if self.min_nodes == 0 {
            return Err(EngineError::InvalidConfig(
                "map min_nodes must be positive".into(),
            ));
        }
        if self.min_nodes > self.max_nodes {
            return Err(EngineError::InvalidConfig(format!(
                "map min_nodes ({}) exceeds max_nodes ({})",
                self.min_nodes, self.max_nodes
            )));
        }
        for (name, value) in [
            ("safe_threshold", self.safe_threshold),
            ("elite_threshold", self.elite_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig(format!(
                    "map {name} must be within [0, 1] (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Generate a map with `total_floors` floors, the last one being the boss.
    pub fn generate(&self, total_floors: usize, rng: &mut GameRng) -> Result<DungeonMap> {
        if total_floors == 0 {
            return Err(EngineError::NoFloors(total_floors));
        }
        self.validate()?;

        let boss_floor = total_floors - 1;
        let mut floors: Vec<Vec<MapNode>> = Vec::with_capacity(total_floors);

        for floor in 0..total_floors {
            let count = if floor == boss_floor {
                1
            } else {
                rng.gen_range(self.min_nodes..=self.max_nodes)
            };

            let nodes = (0..count)
                .map(|index| {
                    let node_type = self.roll_type(floor, boss_floor, rng);
                    MapNode::new(NodeId::new(floor, index), node_type)
                })
                .collect();
            floors.push(nodes);
        }

        for floor in 0..boss_floor {
            Self::connect_floors(&mut floors, floor, rng);
        }

        let map = DungeonMap::from_floors(floors);
        debug!(
            floors = total_floors,
            nodes = map.len(),
            safe = map.count_type(NodeType::Safe),
            elite = map.count_type(NodeType::Elite),
            "map generated"
        );
        Ok(map)
    }

    fn roll_type(&self, floor: usize, boss_floor: usize, rng: &mut GameRng) -> NodeType {
        if floor == boss_floor {
            return NodeType::Boss;
        }
        if floor == 0 {
            return NodeType::Enemy;
        }

        let roll = rng.roll();
        if roll < self.safe_threshold {
            NodeType::Safe
        } else if roll < self.elite_threshold && floor > self.elite_after_floor {
            NodeType::Elite
        } else {
            NodeType::Enemy
        }
    }

    /// Wire `floor` to `floor + 1`.
    fn connect_floors(floors: &mut [Vec<MapNode>], floor: usize, rng: &mut GameRng) {
        let next_len = floors[floor + 1].len();
        let current_len = floors[floor].len();

        for node in floors[floor].iter_mut() {
            if let Some(target) = rng.gen_index(next_len) {
                node.connect(NodeId::new(floor + 1, target));
            }
        }

        for target in (0..next_len).map(|i| NodeId::new(floor + 1, i)) {
            let orphaned = !floors[floor].iter().any(|n| n.connects_to(target));
            if orphaned {
                if let Some(source) = rng.gen_index(current_len) {
                    floors[floor][source].connect(target);
                }
            }
        }
    }
}
