//! Map nodes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Node identifier: floor plus position on that floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub floor: usize,
    pub index: usize,
}

impl NodeId {
    #[must_use]
    pub const fn new(floor: usize, index: usize) -> Self {
        Self { floor, index }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node_{}_{}", self.floor, self.index)
    }
}

/// What waits at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Enemy,
    Elite,
    Safe,
    Boss,
}

impl NodeType {
    /// Does entering this node start a fight?
    #[must_use]
    pub const fn is_combat(self) -> bool {
        !matches!(self, NodeType::Safe)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeType::Enemy => "enemy",
            NodeType::Elite => "elite",
            NodeType::Safe => "safe",
            NodeType::Boss => "boss",
        };
        f.write_str(name)
    }
}

/// Forward edges of a node; maps have at most 4 nodes per floor.
pub type Connections = SmallVec<[NodeId; 4]>;

/// One encounter on the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    pub node_type: NodeType,
    pub floor: usize,
    /// Nodes on `floor + 1` reachable from here.
    pub connected_nodes: Connections,
    /// Set once the player has entered the node; never cleared.
    pub completed: bool,
}

impl MapNode {
    #[must_use]
    pub fn new(id: NodeId, node_type: NodeType) -> Self {
        Self {
            id,
            node_type,
            floor: id.floor,
            connected_nodes: Connections::new(),
            completed: false,
        }
    }

    /// Add a forward edge unless it already exists. Returns true if added.
    pub fn connect(&mut self, target: NodeId) -> bool {
        if self.connected_nodes.contains(&target) {
            false
        } else {
            self.connected_nodes.push(target);
            true
        }
    }

    #[must_use]
    pub fn connects_to(&self, target: NodeId) -> bool {
        self.connected_nodes.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(3, 1).to_string(), "node_3_1");
    }

    #[test]
    fn test_connect_is_idempotent() {
        let mut node = MapNode::new(NodeId::new(0, 0), NodeType::Enemy);

        assert!(node.connect(NodeId::new(1, 2)));
        assert!(!node.connect(NodeId::new(1, 2)));
        assert!(node.connect(NodeId::new(1, 0)));

        assert_eq!(node.connected_nodes.len(), 2);
        assert!(node.connects_to(NodeId::new(1, 0)));
        assert!(!node.connects_to(NodeId::new(1, 1)));
    }

    #[test]
    fn test_node_type() {
        assert!(NodeType::Enemy.is_combat());
        assert!(NodeType::Elite.is_combat());
        assert!(NodeType::Boss.is_combat());
        assert!(!NodeType::Safe.is_combat());
        assert_eq!(NodeType::Elite.to_string(), "elite");
    }
}
