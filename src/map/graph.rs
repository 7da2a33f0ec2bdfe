//! The generated map: a layered DAG of encounter nodes.

use serde::{Deserialize, Serialize};

use super::node::{MapNode, NodeId, NodeType};

/// Floor-by-floor node storage. `NodeId { floor, index }` addresses
/// `floors[floor][index]` directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonMap {
    floors: Vec<Vec<MapNode>>,
}

impl DungeonMap {
    pub(crate) fn from_floors(floors: Vec<Vec<MapNode>>) -> Self {
        Self { floors }
    }

    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.floors.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Nodes on a floor; empty past the last floor.
    #[must_use]
    pub fn nodes_on_floor(&self, floor: usize) -> &[MapNode] {
        self.floors.get(floor).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.floors.get(id.floor)?.get(id.index)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut MapNode> {
        self.floors.get_mut(id.floor)?.get_mut(id.index)
    }

    /// Floor-0 nodes: where a run begins.
    #[must_use]
    pub fn start_nodes(&self) -> &[MapNode] {
        self.nodes_on_floor(0)
    }

    /// The single node of the last floor.
    #[must_use]
    pub fn boss(&self) -> Option<&MapNode> {
        self.floors.last()?.first()
    }

    /// Iterate over every node, floor by floor.
    pub fn iter(&self) -> impl Iterator<Item = &MapNode> {
        self.floors.iter().flatten()
    }

    /// Number of edges arriving at `id` from the previous floor.
    #[must_use]
    pub fn incoming_edges(&self, id: NodeId) -> usize {
        match id.floor.checked_sub(1) {
            Some(prev) => self
                .nodes_on_floor(prev)
                .iter()
                .filter(|n| n.connects_to(id))
                .count(),
            None => 0,
        }
    }

    /// Nodes the player may travel to next.
    ///
    /// Before any travel that is every uncompleted floor-0 node; afterwards
    /// the uncompleted successors of the last visited node.
    #[must_use]
    pub fn selectable_nodes(&self, last_visited: Option<NodeId>) -> Vec<NodeId> {
        match last_visited {
            None => self
                .start_nodes()
                .iter()
                .filter(|n| !n.completed)
                .map(|n| n.id)
                .collect(),
            Some(from) => self
                .node(from)
                .map(|n| {
                    n.connected_nodes
                        .iter()
                        .copied()
                        .filter(|id| self.node(*id).is_some_and(|t| !t.completed))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Mark a node completed. Returns false if it does not exist.
    pub(crate) fn mark_completed(&mut self, id: NodeId) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.completed = true;
                true
            }
            None => false,
        }
    }

    /// Count nodes of a type (handy for map statistics).
    #[must_use]
    pub fn count_type(&self, node_type: NodeType) -> usize {
        self.iter().filter(|n| n.node_type == node_type).count()
    }
}
