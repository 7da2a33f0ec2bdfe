//! Map generation invariants.

mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;

use zombie_deckbuilder::core::GameRng;
use zombie_deckbuilder::error::EngineError;
use zombie_deckbuilder::map::{DungeonMap, MapGenerator, NodeId, NodeType};

/// Every node reachable from some floor-0 node.
fn reachable(map: &DungeonMap) -> BTreeSet<NodeId> {
    let mut seen: BTreeSet<NodeId> = map.start_nodes().iter().map(|n| n.id).collect();
    let mut frontier: Vec<NodeId> = seen.iter().copied().collect();

    while let Some(id) = frontier.pop() {
        if let Some(node) = map.node(id) {
            for next in &node.connected_nodes {
                if seen.insert(*next) {
                    frontier.push(*next);
                }
            }
        }
    }
    seen
}

#[test]
fn test_zero_floors_is_an_error() {
    common::init_logging();
    let mut rng = GameRng::new(0);
    assert_eq!(
        MapGenerator::new().generate(0, &mut rng).unwrap_err(),
        EngineError::NoFloors(0)
    );
}

#[test]
fn test_same_seed_same_map() {
    let generator = MapGenerator::new();
    let a = generator.generate(7, &mut GameRng::new(21).for_context("map")).unwrap();
    let b = generator.generate(7, &mut GameRng::new(21).for_context("map")).unwrap();
    let c = generator.generate(7, &mut GameRng::new(22).for_context("map")).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_custom_generator_bounds() {
    let generator = MapGenerator {
        min_nodes: 3,
        max_nodes: 3,
        safe_threshold: 0.0,
        elite_threshold: 1.0,
        elite_after_floor: 0,
    };
    let map = generator.generate(5, &mut GameRng::new(9)).unwrap();

    for floor in 1..4 {
        assert_eq!(map.nodes_on_floor(floor).len(), 3);
        assert!(map.nodes_on_floor(floor).iter().all(|n| n.node_type == NodeType::Elite));
    }
    assert!(map.start_nodes().iter().all(|n| n.node_type == NodeType::Enemy));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_map_structure(total_floors in 2usize..12, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let map = MapGenerator::new().generate(total_floors, &mut rng).unwrap();
        let boss_floor = total_floors - 1;

        prop_assert_eq!(map.floor_count(), total_floors);
        prop_assert_eq!(map.nodes_on_floor(boss_floor).len(), 1);
        prop_assert_eq!(map.nodes_on_floor(boss_floor)[0].node_type, NodeType::Boss);

        for node in map.iter() {
            if node.floor < boss_floor {
                prop_assert!((2..=4).contains(&map.nodes_on_floor(node.floor).len()));
                prop_assert!(node.node_type != NodeType::Boss);
                prop_assert!(!node.connected_nodes.is_empty(), "{} has no exit", node.id);
            } else {
                prop_assert!(node.connected_nodes.is_empty());
            }
            if node.floor == 0 {
                prop_assert_eq!(node.node_type, NodeType::Enemy);
            } else {
                prop_assert!(map.incoming_edges(node.id) >= 1, "{} is orphaned", node.id);
            }
            if node.node_type == NodeType::Elite {
                prop_assert!(node.floor > 2);
            }

            let unique: BTreeSet<_> = node.connected_nodes.iter().collect();
            prop_assert_eq!(unique.len(), node.connected_nodes.len());
            for next in &node.connected_nodes {
                prop_assert_eq!(next.floor, node.floor + 1);
                prop_assert!(map.node(*next).is_some());
            }
        }

        prop_assert_eq!(reachable(&map).len(), map.len());
    }
}
