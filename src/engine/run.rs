//! The run: combat turn state machine plus map progression.
//!
//! `GameRun` owns every piece of mutable state (player, piles, enemy, map,
//! draft) and is driven by a handful of inbound calls from the host. Calls
//! made at the wrong time are silent no-ops: they change nothing, emit
//! nothing to the observer, and report `false` / `PlayOutcome::Ignored`.
//!
//! ## Flow
//!
//! ```text
//! start_run -> show map
//! travel_to_node -> (safe) heal, reveal map
//!                -> (fight) start_combat -> player turn
//! play_card* -> enemy dead? -> Drafting -> resolve_draft -> next room -> show map
//! end_player_turn -> enemy turn -> player dead? -> game over
//!                              \-> player turn
//! ```
//!
//! ```
//! use zombie_deckbuilder::core::RunConfig;
//! use zombie_deckbuilder::engine::{GameRunBuilder, NullObserver, TurnState};
//!
//! let mut run = GameRunBuilder::new()
//!     .config(RunConfig::headless())
//!     .seed(42)
//!     .build(NullObserver)
//!     .unwrap();
//! run.start_run().unwrap();
//!
//! let first = run.selectable_nodes()[0];
//! assert!(run.travel_to_node(first));
//! assert_eq!(run.turn_state(), TurnState::Player);
//! assert_eq!(run.piles().hand().len(), 5);
//! ```

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::draft::{DraftChoice, DraftRules, DraftSelection};
use super::observer::{LogCategory, Observer};
use super::schedule::{Continuation, Pending};
use super::state::{PlayerState, TurnState};
use crate::cards::CardCatalog;
use crate::core::{CardId, GameRng, IdAllocator, RunConfig};
use crate::effects::{EffectResolver, Resolved};
use crate::enemies::{Enemy, EnemyCatalog, IntentKind};
use crate::error::{EngineError, Result};
use crate::map::{DungeonMap, MapGenerator, NodeId, NodeType};
use crate::zones::{DrawOutcome, Piles, Zone};

/// Result of `GameRun::play_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card resolved and went to the discard pile.
    Played,
    /// Not the player's turn, no combat, a continuation is pending, or the
    /// card is not in hand.
    Ignored,
    InsufficientAp { needed: u32, available: u32 },
    InsufficientAmmo { needed: u32, available: u32 },
}

impl PlayOutcome {
    #[must_use]
    pub fn is_played(self) -> bool {
        matches!(self, PlayOutcome::Played)
    }
}

/// Counters kept across a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Enemies killed.
    pub victories: u32,
    /// Player turns started.
    pub player_turns: u32,
    /// Nodes entered.
    pub nodes_visited: u32,
}

/// Builder for a `GameRun`.
pub struct GameRunBuilder {
    config: RunConfig,
    seed: Option<u64>,
    cards: CardCatalog,
    enemies: EnemyCatalog,
    map_generator: MapGenerator,
}

impl Default for GameRunBuilder {
    fn default() -> Self {
        Self {
            config: RunConfig::default(),
            seed: None,
            cards: CardCatalog::standard(),
            enemies: EnemyCatalog::standard(),
            map_generator: MapGenerator::default(),
        }
    }
}

impl GameRunBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the seed. Without one the run is seeded from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn cards(mut self, cards: CardCatalog) -> Self {
        self.cards = cards;
        self
    }

    #[must_use]
    pub fn enemies(mut self, enemies: EnemyCatalog) -> Self {
        self.enemies = enemies;
        self
    }

    #[must_use]
    pub fn map_generator(mut self, generator: MapGenerator) -> Self {
        self.map_generator = generator;
        self
    }

    /// Validate the configuration and assemble the run.
    ///
    /// The run starts idle; call [`GameRun::start_run`] to generate the map
    /// and deal the starting deck.
    pub fn build<O: Observer>(self, observer: O) -> Result<GameRun<O>> {
        self.config.validate()?;
        self.map_generator.validate()?;
        if let Some(missing) = self
            .config
            .starting_deck
            .iter()
            .find(|entry| !self.cards.contains(entry.kind))
        {
            return Err(EngineError::InvalidConfig(format!(
                "starting deck uses {:?}, which is not in the card catalog",
                missing.kind
            )));
        }

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let map_rng = rng.for_context("map");
        let player = PlayerState::from_stats(&self.config.player);

        debug!(seed = rng.seed(), floors = self.config.total_floors, "run built");

        Ok(GameRun {
            config: self.config,
            cards: self.cards,
            enemies: self.enemies,
            map_generator: self.map_generator,
            observer,
            rng,
            map_rng,
            ids: IdAllocator::default(),
            player,
            piles: Piles::new(),
            enemy: None,
            map: DungeonMap::default(),
            current_floor: 0,
            last_visited_node: None,
            turn_state: TurnState::Player,
            draft_choices: Vec::new(),
            pending: None,
            game_over: false,
            stats: RunStats::default(),
        })
    }
}

/// A single run of the game.
pub struct GameRun<O: Observer> {
    config: RunConfig,
    cards: CardCatalog,
    enemies: EnemyCatalog,
    map_generator: MapGenerator,
    observer: O,

    /// Combat, deck and draft randomness.
    rng: GameRng,
    /// Map layout randomness.
    map_rng: GameRng,
    ids: IdAllocator,

    player: PlayerState,
    piles: Piles,
    enemy: Option<Enemy>,
    map: DungeonMap,
    current_floor: usize,
    last_visited_node: Option<NodeId>,
    turn_state: TurnState,
    draft_choices: Vec<DraftChoice>,
    pending: Option<Pending>,
    game_over: bool,
    stats: RunStats,
}

impl<O: Observer> GameRun<O> {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn card_catalog(&self) -> &CardCatalog {
        &self.cards
    }

    #[must_use]
    pub fn enemy_catalog(&self) -> &EnemyCatalog {
        &self.enemies
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    #[must_use]
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    #[must_use]
    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    /// Number of nodes entered this run.
    #[must_use]
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    #[must_use]
    pub fn last_visited_node(&self) -> Option<NodeId> {
        self.last_visited_node
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    #[must_use]
    pub fn draft_choices(&self) -> &[DraftChoice] {
        &self.draft_choices
    }

    /// The continuation waiting for `resume`, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn in_combat(&self) -> bool {
        self.enemy.is_some()
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The boss node has been entered and its fight (and draft) is over.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        !self.game_over
            && self.enemy.is_none()
            && self.turn_state != TurnState::Drafting
            && self.map.boss().is_some_and(|boss| boss.completed)
    }

    /// Nodes `travel_to_node` would currently accept.
    #[must_use]
    pub fn selectable_nodes(&self) -> Vec<NodeId> {
        if !self.can_travel() {
            return Vec::new();
        }
        self.map.selectable_nodes(self.last_visited_node)
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    // === Inbound operations ===

    /// Reset everything and begin a new run: fresh player, new map, new
    /// shuffled starting deck.
    ///
    /// Returns `Ok(false)` if ignored because a continuation is pending.
    pub fn start_run(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            debug!("start_run ignored: continuation pending");
            return Ok(false);
        }

        let map = self
            .map_generator
            .generate(self.config.total_floors, &mut self.map_rng)?;

        self.player = PlayerState::from_stats(&self.config.player);
        self.piles.clear();
        self.enemy = None;
        self.draft_choices.clear();
        self.game_over = false;
        self.turn_state = TurnState::Player;
        self.current_floor = 0;
        self.last_visited_node = None;
        self.ids = IdAllocator::default();
        self.stats = RunStats::default();
        self.map = map;

        for entry in &self.config.starting_deck {
            for _ in 0..entry.count {
                if let Some(card) = self.cards.create(entry.kind, self.ids.next_card()) {
                    self.piles.add(card, Zone::Deck);
                }
            }
        }
        self.shuffle_deck();

        debug!(
            cards = self.piles.total_cards(),
            nodes = self.map.len(),
            "run started"
        );
        self.observer
            .log("The mansion doors groan shut behind you.", LogCategory::Info);
        self.observer.refresh_all();
        self.observer.show_map();
        Ok(true)
    }

    /// Enter a selectable map node.
    pub fn travel_to_node(&mut self, node_id: NodeId) -> bool {
        if !self.can_travel() {
            debug!(node = %node_id, "travel ignored: not on the map");
            return false;
        }
        if !self.map.selectable_nodes(self.last_visited_node).contains(&node_id) {
            debug!(node = %node_id, "travel ignored: node not selectable");
            return false;
        }
        let Some(node_type) = self.map.node(node_id).map(|n| n.node_type) else {
            return false;
        };

        self.map.mark_completed(node_id);
        self.current_floor += 1;
        self.last_visited_node = Some(node_id);
        self.stats.nodes_visited += 1;
        debug!(node = %node_id, %node_type, floor = self.current_floor, "travelled");

        match node_type {
            NodeType::Safe => {
                let healed = self.player.heal(self.config.safe_room_heal);
                let ammo = self.player.gain_ammo(self.config.safe_room_ammo);
                self.observer.log(
                    &format!("You rest in a safe room. +{healed} HP, +{ammo} Ammo."),
                    LogCategory::Heal,
                );
                self.observer.refresh_all();
                self.schedule(Continuation::RevealMap, self.config.safe_room_delay());
            }
            NodeType::Enemy | NodeType::Elite | NodeType::Boss => {
                let enemy = self.spawn_for(node_type);
                self.observer
                    .log(&format!("A {} blocks your path!", enemy.name), LogCategory::Info);
                self.start_combat(enemy);
            }
        }
        true
    }

    /// Begin a fight against `enemy`.
    ///
    /// Called by `travel_to_node`; hosts may also call it directly to stage
    /// a specific encounter. Ignored while already fighting, drafting, game
    /// over, or with a continuation pending.
    pub fn start_combat(&mut self, mut enemy: Enemy) -> bool {
        if self.pending.is_some()
            || self.game_over
            || self.enemy.is_some()
            || self.turn_state == TurnState::Drafting
        {
            debug!(enemy = %enemy.name, "start_combat ignored");
            return false;
        }

        self.observer.hide_all_overlays();
        enemy.plan_turn(&mut self.rng);
        debug!(enemy = %enemy.name, hp = enemy.hp(), "combat started");
        self.enemy = Some(enemy);
        self.start_player_turn();
        true
    }

    /// Play a card from hand against the current enemy.
    pub fn play_card(&mut self, card_id: CardId) -> PlayOutcome {
        if !self.is_player_turn() {
            debug!(card = %card_id, "play ignored: not the player's turn");
            return PlayOutcome::Ignored;
        }
        let Some(card) = self.piles.in_hand(card_id) else {
            debug!(card = %card_id, "play ignored: card not in hand");
            return PlayOutcome::Ignored;
        };
        let (name, ap_cost, ammo_cost, effect, level) = (
            card.name.clone(),
            card.ap_cost,
            card.ammo_cost,
            card.effect,
            card.level(),
        );

        if self.player.ap < ap_cost {
            self.observer
                .log(&format!("Not enough AP to play {name}!"), LogCategory::Warning);
            return PlayOutcome::InsufficientAp {
                needed: ap_cost,
                available: self.player.ap,
            };
        }
        if self.player.ammo < ammo_cost {
            self.observer
                .log(&format!("Not enough AMMO to play {name}!"), LogCategory::Warning);
            return PlayOutcome::InsufficientAmmo {
                needed: ammo_cost,
                available: self.player.ammo,
            };
        }

        self.player.spend(ap_cost, ammo_cost);
        let resolved = EffectResolver::resolve(effect, level, &mut self.player, self.enemy.as_mut());
        debug!(card = %card_id, %name, level, ?resolved, ap = self.player.ap, ammo = self.player.ammo, "card played");

        let category = match resolved {
            Resolved::DamageDealt { .. } => LogCategory::DamageEnemy,
            Resolved::Healed { .. } => LogCategory::Heal,
            _ => LogCategory::Info,
        };
        self.observer.log(&resolved.describe(&name), category);
        if resolved.hit_enemy() {
            self.observer.play_enemy_hit_animation();
        }

        self.piles.move_card(card_id, Zone::Hand, Zone::Discard);
        self.observer.refresh_all();
        self.check_win_state();
        PlayOutcome::Played
    }

    /// Discard the hand and hand the turn to the enemy.
    pub fn end_player_turn(&mut self) -> bool {
        if !self.is_player_turn() {
            debug!("end turn ignored: not the player's turn");
            return false;
        }

        let discarded = self.piles.discard_hand();
        self.turn_state = TurnState::Enemy;
        debug!(discarded, "player turn ended");
        self.observer.refresh_all();
        self.schedule(Continuation::EnemyTurn, self.config.enemy_turn_delay());
        true
    }

    /// Answer the open draft.
    ///
    /// Out-of-range picks are ignored and leave the draft open.
    pub fn resolve_draft(&mut self, selection: DraftSelection) -> bool {
        if self.pending.is_some() || self.game_over || self.turn_state != TurnState::Drafting {
            debug!(?selection, "draft ignored: no draft open");
            return false;
        }
        if let DraftSelection::Pick(index) = selection {
            if index >= self.draft_choices.len() {
                debug!(index, offered = self.draft_choices.len(), "draft ignored: pick out of range");
                return false;
            }
        }

        let mut choices = std::mem::take(&mut self.draft_choices);
        match selection {
            DraftSelection::Pick(index) => match choices.swap_remove(index) {
                DraftChoice::New(card) => {
                    self.observer
                        .log(&format!("Added {} to your deck.", card.name), LogCategory::Info);
                    debug!(card = %card.id, name = %card.name, "draft: new card");
                    self.piles.add(card, Zone::Discard);
                }
                DraftChoice::Upgrade { card_id, name, .. } => {
                    if let Some(card) = self.piles.get_mut(card_id) {
                        let level = card.upgrade();
                        self.observer
                            .log(&format!("{name} upgraded to level {level}!"), LogCategory::Info);
                        debug!(card = %card_id, level, "draft: upgrade");
                    } else {
                        warn!(card = %card_id, "draft upgrade target no longer owned");
                    }
                }
            },
            DraftSelection::Skip => {
                self.observer.log("You leave the rewards behind.", LogCategory::Info);
                debug!("draft skipped");
            }
        }

        self.next_room();
        true
    }

    /// Fire the pending continuation. Returns false if nothing was pending.
    pub fn resume(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                trace!(continuation = ?pending.continuation, "resuming");
                self.run_continuation(pending.continuation);
                true
            }
            None => false,
        }
    }

    // === State machine internals ===

    fn can_travel(&self) -> bool {
        self.pending.is_none()
            && !self.game_over
            && self.enemy.is_none()
            && self.turn_state != TurnState::Drafting
    }

    fn is_player_turn(&self) -> bool {
        self.pending.is_none()
            && !self.game_over
            && self.enemy.is_some()
            && self.turn_state == TurnState::Player
    }

    fn spawn_for(&mut self, node_type: NodeType) -> Enemy {
        let id = self.ids.next_enemy();
        match node_type {
            NodeType::Boss => self.enemies.spawn_boss(id),
            NodeType::Elite => {
                self.enemies
                    .spawn_elite(id, self.config.elite_hp_multiplier, &mut self.rng)
            }
            NodeType::Enemy | NodeType::Safe => self.enemies.spawn_regular(id, &mut self.rng),
        }
    }

    fn schedule(&mut self, continuation: Continuation, delay: Duration) {
        if delay.is_zero() {
            self.run_continuation(continuation);
        } else {
            trace!(?continuation, ?delay, "continuation pending");
            self.pending = Some(Pending::new(continuation, delay));
        }
    }

    fn run_continuation(&mut self, continuation: Continuation) {
        match continuation {
            Continuation::EnemyTurn => self.execute_enemy_turn(),
            Continuation::PlayerTurn => {
                if self.enemy.is_some() && !self.game_over {
                    self.start_player_turn();
                }
            }
            Continuation::RevealMap => self.observer.show_map(),
        }
    }

    fn shuffle_deck(&mut self) {
        self.piles.shuffle_deck(&mut self.rng);
        self.observer.log("Deck shuffled.", LogCategory::Info);
    }

    fn draw_card(&mut self) -> bool {
        match self.piles.draw(&mut self.rng) {
            DrawOutcome::Drawn { reshuffled, .. } => {
                if reshuffled {
                    self.observer.log("Deck shuffled.", LogCategory::Info);
                }
                true
            }
            DrawOutcome::Exhausted => {
                self.observer
                    .log("No cards left in deck or discard!", LogCategory::Warning);
                false
            }
        }
    }

    fn start_player_turn(&mut self) {
        self.turn_state = TurnState::Player;
        self.player.reset_for_turn();
        for _ in 0..self.config.hand_size {
            if !self.draw_card() {
                break;
            }
        }
        self.stats.player_turns += 1;

        debug!(
            turn = self.stats.player_turns,
            hand = self.piles.hand().len(),
            hp = self.player.hp,
            ammo = self.player.ammo,
            "player turn"
        );
        self.observer.log("--- PLAYER TURN ---", LogCategory::Info);
        self.observer.refresh_all();
    }

    fn execute_enemy_turn(&mut self) {
        let Some(enemy) = self.enemy.as_mut() else {
            return;
        };
        self.observer.log("--- ENEMY TURN ---", LogCategory::Info);

        match enemy.take_intent() {
            Some(intent) if intent.kind == IntentKind::Attack => {
                let hit = self.player.absorb_attack(intent.value);
                self.observer.log(
                    &format!(
                        "{} dealt {} damage! ({} actual)",
                        enemy.name, hit.raw, hit.damage_taken
                    ),
                    LogCategory::DamagePlayer,
                );
                debug!(raw = hit.raw, blocked = hit.blocked, taken = hit.damage_taken, hp = self.player.hp, "enemy attacked");
            }
            Some(_) => {
                self.observer.log(
                    &format!("{} stumbles and hardens its stance.", enemy.name),
                    LogCategory::Info,
                );
            }
            None => {
                self.observer
                    .log(&format!("{} stares blankly.", enemy.name), LogCategory::Info);
            }
        }

        enemy.plan_turn(&mut self.rng);
        self.observer.refresh_all();

        if self.player.is_dead() {
            self.game_over = true;
            debug!(turns = self.stats.player_turns, floor = self.current_floor, "player died");
            self.observer.log("You have been overwhelmed...", LogCategory::DamagePlayer);
            self.observer.show_game_over();
        } else {
            self.schedule(Continuation::PlayerTurn, self.config.enemy_turn_delay());
        }
    }

    fn check_win_state(&mut self) {
        if !self.enemy.as_ref().is_some_and(Enemy::is_dead) {
            return;
        }
        let Some(enemy) = self.enemy.take() else {
            return;
        };

        self.stats.victories += 1;
        self.observer
            .log(&format!("You killed the {}!", enemy.name), LogCategory::Info);

        self.turn_state = TurnState::Drafting;
        let rules = DraftRules {
            size: self.config.draft_size,
            upgrade_chance: self.config.upgrade_chance,
        };
        self.draft_choices = rules.generate(&self.cards, &self.piles, &mut self.ids, &mut self.rng);
        debug!(enemy = %enemy.name, choices = self.draft_choices.len(), "victory");
        self.observer.show_draft_choices(&self.draft_choices);
    }

    fn next_room(&mut self) {
        self.piles.recombine_into_deck();
        self.shuffle_deck();
        self.turn_state = TurnState::Player;
        debug!(cards = self.piles.total_cards(), "next room");
        self.observer.hide_all_overlays();
        self.observer.show_map();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::core::{DeckEntry, EnemyId};
    use crate::engine::observer::{ObserverEvent, RecordingObserver};

    fn headless_run(seed: u64) -> GameRun<RecordingObserver> {
        let mut run = GameRunBuilder::new()
            .config(RunConfig::headless())
            .seed(seed)
            .build(RecordingObserver::new())
            .unwrap();
        run.start_run().unwrap();
        run
    }

    fn zombie() -> Enemy {
        Enemy::new(EnemyId::new(99), "Shambling Zombie", 20, "🧟")
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let result = GameRunBuilder::new()
            .config(RunConfig::headless().with_total_floors(0))
            .build(RecordingObserver::new());
        assert!(matches!(result, Err(EngineError::NoFloors(0))));
    }

    #[test]
    fn test_build_rejects_bad_map_generator() {
        let generator = MapGenerator {
            min_nodes: 4,
            max_nodes: 2,
            ..MapGenerator::default()
        };
        let result = GameRunBuilder::new()
            .config(RunConfig::headless())
            .map_generator(generator)
            .build(RecordingObserver::new());
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_build_rejects_unknown_starting_card() {
        let mut cards = CardCatalog::new();
        for def in CardCatalog::standard().iter().filter(|d| d.kind != CardKind::Evade) {
            cards.register(def.clone());
        }
        let result = GameRunBuilder::new()
            .config(RunConfig::headless())
            .cards(cards)
            .build(RecordingObserver::new());
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_start_run() {
        let run = headless_run(1);

        assert_eq!(run.piles().deck().len(), 8);
        assert!(run.piles().hand().is_empty());
        assert_eq!(run.map().floor_count(), 7);
        assert_eq!(run.current_floor(), 0);
        assert_eq!(run.selectable_nodes().len(), run.map().start_nodes().len());
        assert_eq!(run.observer().count(&ObserverEvent::ShowMap), 1);

        let mut ids: Vec<u32> = run.piles().iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_travel_into_fight() {
        let mut run = headless_run(2);
        let target = run.selectable_nodes()[0];

        assert!(run.travel_to_node(target));
        assert_eq!(run.current_floor(), 1);
        assert_eq!(run.last_visited_node(), Some(target));
        assert!(run.map().node(target).unwrap().completed);
        assert!(run.in_combat());
        assert!(run.enemy().unwrap().current_intent.is_some());
        assert_eq!(run.piles().hand().len(), 5);
        assert_eq!(run.player().ap, 3);

        // No travel mid-fight
        assert!(run.selectable_nodes().is_empty());
        let other = NodeId::new(1, 0);
        assert!(!run.travel_to_node(other));
    }

    #[test]
    fn test_travel_to_unreachable_node_ignored() {
        let mut run = headless_run(3);
        assert!(!run.travel_to_node(NodeId::new(2, 0)));
        assert!(!run.travel_to_node(NodeId::new(0, 9)));
        assert_eq!(run.current_floor(), 0);
    }

    #[test]
    fn test_play_card_insufficient_ap() {
        let mut run = headless_run(4);
        run.start_combat(zombie());
        run.player.ap = 0;
        let card = &run.piles().hand()[0];
        let (card, needed) = (card.id, card.ap_cost);
        let before = run.piles().clone();

        let outcome = run.play_card(card);
        assert_eq!(outcome, PlayOutcome::InsufficientAp { needed, available: 0 });
        assert_eq!(run.piles(), &before);
        assert!(run.observer().logged(LogCategory::Warning));
    }

    #[test]
    fn test_play_card_not_in_hand_ignored() {
        let mut run = headless_run(5);
        run.start_combat(zombie());
        let in_deck = run.piles().deck()[0].id;

        assert_eq!(run.play_card(in_deck), PlayOutcome::Ignored);
        assert_eq!(run.play_card(CardId::new(999)), PlayOutcome::Ignored);
    }

    #[test]
    fn test_play_outside_combat_ignored() {
        let mut run = headless_run(5);
        assert_eq!(run.play_card(CardId::new(1)), PlayOutcome::Ignored);
        assert!(!run.end_player_turn());
    }

    #[test]
    fn test_end_turn_runs_enemy_then_player() {
        let mut run = headless_run(6);
        run.start_combat(zombie());
        let hp_before = run.player().hp;

        assert!(run.end_player_turn());

        assert_eq!(run.turn_state(), TurnState::Player);
        assert_eq!(run.stats().player_turns, 2);
        assert_eq!(run.piles().hand().len(), 5);
        assert!(run.player().hp <= hp_before);
        assert!(hp_before - run.player().hp <= 6);
        assert_eq!(run.piles().total_cards(), 8);
    }

    #[test]
    fn test_pending_continuation_blocks_inbound_calls() {
        let config = RunConfig::headless().with_delays(Duration::from_millis(500), Duration::ZERO);
        let mut run = GameRunBuilder::new()
            .config(config)
            .seed(7)
            .build(RecordingObserver::new())
            .unwrap();
        run.start_run().unwrap();
        run.start_combat(zombie());

        assert!(run.end_player_turn());
        assert_eq!(run.turn_state(), TurnState::Enemy);
        assert_eq!(
            run.pending(),
            Some(Pending::new(Continuation::EnemyTurn, Duration::from_millis(500)))
        );

        assert!(!run.end_player_turn());
        assert_eq!(run.start_run(), Ok(false));
        assert!(run.selectable_nodes().is_empty());

        assert!(run.resume());
        assert_eq!(run.pending().map(|p| p.continuation), Some(Continuation::PlayerTurn));
        assert!(run.resume());
        assert!(run.pending().is_none());
        assert_eq!(run.turn_state(), TurnState::Player);
        assert!(!run.resume());
    }

    #[test]
    fn test_victory_opens_draft() {
        let config = RunConfig::headless()
            .with_starting_deck([DeckEntry::new(CardKind::Shotgun, 5)]);
        let mut run = GameRunBuilder::new()
            .config(config)
            .seed(8)
            .build(RecordingObserver::new())
            .unwrap();
        run.start_run().unwrap();
        run.player.ammo = 10;
        run.start_combat(Enemy::new(EnemyId::new(1), "Infected Dog", 10, "🐕"));

        let card = run.piles().hand()[0].id;
        assert_eq!(run.play_card(card), PlayOutcome::Played);

        assert!(!run.in_combat());
        assert_eq!(run.turn_state(), TurnState::Drafting);
        assert_eq!(run.draft_choices().len(), 3);
        assert_eq!(run.stats().victories, 1);
        assert_eq!(run.observer().count(&ObserverEvent::EnemyHit), 1);
        assert!(run.selectable_nodes().is_empty());

        // Out-of-range pick leaves the draft open
        assert!(!run.resolve_draft(DraftSelection::Pick(3)));
        assert_eq!(run.turn_state(), TurnState::Drafting);

        assert!(run.resolve_draft(DraftSelection::Skip));
        assert_eq!(run.turn_state(), TurnState::Player);
        assert!(run.draft_choices().is_empty());
        assert_eq!(run.piles().deck().len(), 5);
        assert!(!run.resolve_draft(DraftSelection::Skip));
    }

    #[test]
    fn test_safe_room_heals_and_reveals_map() {
        let mut run = headless_run(9);
        run.player.hp = 10;
        run.player.ammo = 8;

        // Stage a safe room directly after floor 0.
        let start = run.selectable_nodes()[0];
        run.map.node_mut(start).unwrap().node_type = NodeType::Safe;
        run.observer_mut().clear();

        assert!(run.travel_to_node(start));
        assert_eq!(run.player().hp, 25);
        assert_eq!(run.player().ammo, 10);
        assert!(!run.in_combat());
        assert_eq!(run.observer().count(&ObserverEvent::ShowMap), 1);
        assert!(!run.selectable_nodes().is_empty());
    }
}
