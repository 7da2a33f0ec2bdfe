//! Headless autopilot.
//!
//! Drives a `GameRun` to completion without a presentation layer: a
//! `Policy` makes every decision a player would (which card, which node,
//! which reward) and the `Autopilot` fires pending continuations itself.
//! Used for balance sweeps and for end-to-end invariant tests.
//!
//! ```
//! use zombie_deckbuilder::autoplay::{Autopilot, GreedyPolicy};
//! use zombie_deckbuilder::core::RunConfig;
//! use zombie_deckbuilder::engine::{GameRunBuilder, NullObserver};
//!
//! let mut run = GameRunBuilder::new()
//!     .config(RunConfig::headless())
//!     .seed(3)
//!     .build(NullObserver)
//!     .unwrap();
//! run.start_run().unwrap();
//!
//! let report = Autopilot::new(GreedyPolicy).run(&mut run, 10_000);
//! assert!(report.defeated || report.cleared || report.steps == 10_000);
//! ```

use tracing::debug;

use crate::cards::Card;
use crate::core::{CardId, GameRng};
use crate::effects::Effect;
use crate::enemies::{Enemy, IntentKind};
use crate::engine::{DraftChoice, DraftSelection, GameRun, Observer, PlayerState, TurnState};
use crate::map::{DungeonMap, NodeId, NodeType};

/// Makes the player's decisions.
pub trait Policy {
    /// Card to play next, or `None` to end the turn.
    fn choose_card(&mut self, player: &PlayerState, hand: &[Card], enemy: &Enemy) -> Option<CardId>;

    /// Node to travel to, or `None` when `options` is empty.
    fn choose_node(&mut self, map: &DungeonMap, player: &PlayerState, options: &[NodeId]) -> Option<NodeId>;

    fn choose_draft(&mut self, choices: &[DraftChoice]) -> DraftSelection;
}

/// Plays the card with the best immediate value.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn score(player: &PlayerState, card: &Card, enemy: &Enemy) -> u32 {
        let amount = card.effect_amount();
        match card.effect {
            Effect::Damage(_) => amount.min(enemy.hp()) * 3,
            Effect::Block(_) => match &enemy.current_intent {
                Some(intent) if intent.kind == IntentKind::Attack => {
                    amount.min(intent.value.saturating_sub(player.block)) * 2
                }
                _ => 0,
            },
            Effect::Heal(_) => amount.min(player.max_hp - player.hp),
            Effect::GainAmmo(_) => amount.min(player.max_ammo - player.ammo),
        }
    }
}

impl Policy for GreedyPolicy {
    fn choose_card(&mut self, player: &PlayerState, hand: &[Card], enemy: &Enemy) -> Option<CardId> {
        hand.iter()
            .filter(|c| player.can_afford(c.ap_cost, c.ammo_cost))
            .map(|c| (Self::score(player, c, enemy), c.id))
            .filter(|&(score, _)| score > 0)
            .max_by_key(|&(score, id)| (score, std::cmp::Reverse(id)))
            .map(|(_, id)| id)
    }

    fn choose_node(&mut self, map: &DungeonMap, player: &PlayerState, options: &[NodeId]) -> Option<NodeId> {
        let hurt = player.hp * 2 < player.max_hp;
        let rank = |id: &NodeId| match map.node(*id).map(|n| n.node_type) {
            Some(NodeType::Safe) if hurt => 0,
            Some(NodeType::Enemy) => 1,
            Some(NodeType::Safe) => 2,
            Some(NodeType::Elite) => 3,
            _ => 4,
        };
        options
            .iter()
            .copied()
            .min_by_key(|id| (rank(id), *id))
    }

    fn choose_draft(&mut self, choices: &[DraftChoice]) -> DraftSelection {
        let upgrade = choices.iter().position(DraftChoice::is_upgrade);
        let attack = choices.iter().position(|c| match c {
            DraftChoice::New(card) => card.effect.targets_enemy(),
            DraftChoice::Upgrade { .. } => false,
        });
        match upgrade.or(attack) {
            Some(index) => DraftSelection::Pick(index),
            None if choices.is_empty() => DraftSelection::Skip,
            None => DraftSelection::Pick(0),
        }
    }
}

/// Uniformly random legal decisions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_card(&mut self, player: &PlayerState, hand: &[Card], _enemy: &Enemy) -> Option<CardId> {
        let playable: Vec<CardId> = hand
            .iter()
            .filter(|c| player.can_afford(c.ap_cost, c.ammo_cost))
            .map(|c| c.id)
            .collect();
        // One extra slot for ending the turn early.
        let index = self.rng.gen_index(playable.len() + 1)?;
        playable.get(index).copied()
    }

    fn choose_node(&mut self, _map: &DungeonMap, _player: &PlayerState, options: &[NodeId]) -> Option<NodeId> {
        self.rng.choose(options).copied()
    }

    fn choose_draft(&mut self, choices: &[DraftChoice]) -> DraftSelection {
        match self.rng.gen_index(choices.len() + 1) {
            Some(index) if index < choices.len() => DraftSelection::Pick(index),
            _ => DraftSelection::Skip,
        }
    }
}

/// Summary of an autopilot session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayReport {
    /// Decisions made (including resumed continuations).
    pub steps: usize,
    pub victories: u32,
    pub player_turns: u32,
    /// Nodes entered.
    pub floors_reached: usize,
    pub final_hp: u32,
    pub defeated: bool,
    /// The boss node was entered and beaten.
    pub cleared: bool,
}

/// Plays a run with a policy.
pub struct Autopilot<P: Policy> {
    policy: P,
}

impl<P: Policy> Autopilot<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Play until the run ends, nothing is selectable, or `max_steps`
    /// decisions have been made. The run must already be started.
    pub fn run<O: Observer>(&mut self, run: &mut GameRun<O>, max_steps: usize) -> AutoplayReport {
        let mut steps = 0;

        while steps < max_steps && !run.is_game_over() {
            if run.pending().is_some() {
                run.resume();
                steps += 1;
                continue;
            }

            let progressed = match run.turn_state() {
                TurnState::Drafting => {
                    let selection = self.policy.choose_draft(run.draft_choices());
                    run.resolve_draft(selection) || run.resolve_draft(DraftSelection::Skip)
                }
                TurnState::Player if run.in_combat() => self.combat_step(run),
                TurnState::Player => {
                    let options = run.selectable_nodes();
                    match self.policy.choose_node(run.map(), run.player(), &options) {
                        Some(node) => run.travel_to_node(node),
                        None => false,
                    }
                }
                TurnState::Enemy => false,
            };

            if !progressed {
                break;
            }
            steps += 1;
        }

        let stats = run.stats();
        let report = AutoplayReport {
            steps,
            victories: stats.victories,
            player_turns: stats.player_turns,
            floors_reached: run.current_floor(),
            final_hp: run.player().hp,
            defeated: run.is_game_over(),
            cleared: run.is_cleared(),
        };
        debug!(?report, "autoplay finished");
        report
    }

    fn combat_step<O: Observer>(&mut self, run: &mut GameRun<O>) -> bool {
        let choice = match run.enemy() {
            Some(enemy) => self.policy.choose_card(run.player(), run.piles().hand(), enemy),
            None => None,
        };

        match choice {
            Some(card) if run.play_card(card).is_played() => true,
            _ => run.end_player_turn(),
        }
    }
}
