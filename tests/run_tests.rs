//! Run-level tests: map travel, continuations, observer traffic, autopilot.

mod common;

use std::collections::BTreeSet;
use std::time::Duration;

use proptest::prelude::*;

use common::{shambling_zombie, started_run};
use zombie_deckbuilder::autoplay::{Autopilot, GreedyPolicy, RandomPolicy};
use zombie_deckbuilder::core::RunConfig;
use zombie_deckbuilder::engine::{
    Continuation, GameRunBuilder, LogCategory, NullObserver, ObserverEvent, Pending,
    RecordingObserver, TurnState,
};
use zombie_deckbuilder::map::NodeType;

#[test]
fn test_config_from_partial_json() {
    let config: RunConfig = serde_json::from_str(r#"{ "total_floors": 3, "hand_size": 4 }"#).unwrap();

    assert_eq!(config.total_floors, 3);
    assert_eq!(config.hand_size, 4);
    assert_eq!(config.draft_size, RunConfig::default().draft_size);

    let run = started_run(config.with_delays(Duration::ZERO, Duration::ZERO), 1);
    assert_eq!(run.map().floor_count(), 3);
}

#[test]
fn test_travel_follows_edges() {
    let mut run = started_run(RunConfig::headless(), 11);
    let start = run.selectable_nodes()[0];
    run.travel_to_node(start);

    assert!(run.in_combat());
    assert!(run.selectable_nodes().is_empty());

    let mut pilot = Autopilot::new(GreedyPolicy);
    while run.in_combat() || run.turn_state() == TurnState::Drafting {
        if run.is_game_over() {
            return;
        }
        pilot.run(&mut run, 1);
    }

    let expected: BTreeSet<_> = run
        .map()
        .node(start)
        .unwrap()
        .connected_nodes
        .iter()
        .copied()
        .collect();
    let offered: BTreeSet<_> = run.selectable_nodes().into_iter().collect();
    assert_eq!(offered, expected);
}

#[test]
fn test_safe_room_delay_defers_map() {
    let config = RunConfig::headless().with_delays(Duration::ZERO, Duration::from_millis(750));

    // Find a seed whose first floor offers a safe room on the second step.
    for seed in 0..200 {
        let mut run = started_run(config.clone(), seed);
        let Some(safe) = run.map().nodes_on_floor(1).iter().find(|n| n.node_type == NodeType::Safe).map(|n| n.id)
        else {
            continue;
        };
        let Some(start) = run
            .map()
            .start_nodes()
            .iter()
            .find(|n| n.connects_to(safe))
            .map(|n| n.id)
        else {
            continue;
        };

        run.travel_to_node(start);
        let mut pilot = Autopilot::new(GreedyPolicy);
        while (run.in_combat() || run.turn_state() == TurnState::Drafting) && !run.is_game_over() {
            pilot.run(&mut run, 1);
        }
        if run.is_game_over() {
            continue;
        }

        run.observer_mut().clear();
        assert!(run.travel_to_node(safe));
        assert_eq!(
            run.pending(),
            Some(Pending::new(Continuation::RevealMap, Duration::from_millis(750)))
        );
        assert_eq!(run.observer().count(&ObserverEvent::ShowMap), 0);
        assert!(run.observer().logged(LogCategory::Heal));
        assert!(run.selectable_nodes().is_empty());

        assert!(run.resume());
        assert_eq!(run.observer().count(&ObserverEvent::ShowMap), 1);
        assert!(!run.selectable_nodes().is_empty());
        return;
    }
    panic!("no seed produced a reachable floor-1 safe room");
}

#[test]
fn test_observer_sees_combat_start_in_order() {
    let mut run = started_run(RunConfig::headless(), 12);
    run.observer_mut().clear();

    run.start_combat(shambling_zombie());

    let events = &run.observer().events;
    let hide = events.iter().position(|e| *e == ObserverEvent::HideAllOverlays);
    let turn_banner = events.iter().position(
        |e| matches!(e, ObserverEvent::Log { message, .. } if message == "--- PLAYER TURN ---"),
    );
    let refresh = events.iter().rposition(|e| *e == ObserverEvent::RefreshAll);

    assert!(hide.is_some() && turn_banner.is_some() && refresh.is_some());
    assert!(hide < turn_banner);
    assert!(turn_banner < refresh);
}

#[test]
fn test_restart_resets_everything() {
    let mut run = started_run(RunConfig::headless(), 13);
    run.start_combat(shambling_zombie());
    run.end_player_turn();

    assert_eq!(run.start_run(), Ok(true));

    assert!(!run.in_combat());
    assert_eq!(run.player().hp, run.player().max_hp);
    assert_eq!(run.piles().deck().len(), 8);
    assert_eq!(run.current_floor(), 0);
    assert_eq!(run.stats().player_turns, 0);
    assert!(run.last_visited_node().is_none());
}

#[test]
fn test_unseeded_build_records_seed() {
    let run = GameRunBuilder::new()
        .config(RunConfig::headless())
        .build(NullObserver)
        .unwrap();
    let replay = GameRunBuilder::new()
        .config(RunConfig::headless())
        .seed(run.seed())
        .build(NullObserver)
        .unwrap();
    assert_eq!(run.seed(), replay.seed());
}

#[test]
fn test_greedy_autopilot_same_seed_same_result() {
    let play = |seed| {
        let mut run = started_run(RunConfig::headless(), seed);
        Autopilot::new(GreedyPolicy).run(&mut run, 50_000)
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_autopilot_respects_delays() {
    let config = RunConfig::headless().with_delays(Duration::from_millis(10), Duration::from_millis(10));
    let mut run = GameRunBuilder::new()
        .config(config)
        .seed(5)
        .build(RecordingObserver::new())
        .unwrap();
    run.start_run().unwrap();

    let report = Autopilot::new(GreedyPolicy).run(&mut run, 50_000);
    assert!(report.defeated || report.cleared);
    assert!(run.pending().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Resources stay in range and card ids stay unique at every point
    /// of a randomly played run.
    #[test]
    fn prop_random_play_keeps_invariants(seed in any::<u64>(), policy_seed in any::<u64>(), checkpoints in 1usize..40) {
        let mut run = started_run(RunConfig::headless(), seed);
        let mut pilot = Autopilot::new(RandomPolicy::new(policy_seed));

        for _ in 0..checkpoints {
            pilot.run(&mut run, 25);

            let p = run.player();
            prop_assert!(p.hp <= p.max_hp);
            prop_assert!(p.ap <= p.max_ap);
            prop_assert!(p.ammo <= p.max_ammo);

            let ids: BTreeSet<_> = run.piles().iter().map(|c| c.id).collect();
            prop_assert_eq!(ids.len(), run.piles().total_cards());
            prop_assert!(run.piles().total_cards() >= 8);

            if let Some(enemy) = run.enemy() {
                prop_assert!(enemy.hp() <= enemy.max_hp);
                prop_assert!(enemy.hp() > 0);
            }
            if run.turn_state() == TurnState::Drafting {
                prop_assert_eq!(run.draft_choices().len(), 3);
            } else {
                prop_assert!(run.draft_choices().is_empty());
            }
            prop_assert_eq!(run.is_game_over(), p.hp == 0);

            if run.is_game_over() || run.is_cleared() {
                break;
            }
        }
    }
}
