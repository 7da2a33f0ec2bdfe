//! Presentation port.
//!
//! The engine never renders anything. It reports what happened through an
//! `Observer`, and the observer reads live state back through `GameRun`'s
//! accessors afterwards. Only `log` is required; every other callback
//! defaults to a no-op so headless hosts implement just what they need.

use tracing::{debug, info};

use super::draft::DraftChoice;

/// Styling hint for a player-facing log line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogCategory {
    #[default]
    Info,
    /// The player dealt damage.
    DamageEnemy,
    /// The player took damage.
    DamagePlayer,
    /// HP restored.
    Heal,
    /// An action was refused (e.g. not enough AP).
    Warning,
}

/// Receives everything the presentation layer needs to show.
pub trait Observer {
    /// Append a line to the player-facing combat log.
    fn log(&mut self, message: &str, category: LogCategory);

    /// Player stats, enemy panel or hand changed.
    fn refresh_all(&mut self) {}

    /// The map should be shown with the currently selectable nodes.
    fn show_map(&mut self) {}

    fn hide_all_overlays(&mut self) {}

    /// The player died.
    fn show_game_over(&mut self) {}

    /// Post-victory draft is open.
    fn show_draft_choices(&mut self, _choices: &[DraftChoice]) {}

    /// A card damaged the enemy.
    fn play_enemy_hit_animation(&mut self) {}
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn log(&mut self, message: &str, category: LogCategory) {
        (**self).log(message, category);
    }

    fn refresh_all(&mut self) {
        (**self).refresh_all();
    }

    fn show_map(&mut self) {
        (**self).show_map();
    }

    fn hide_all_overlays(&mut self) {
        (**self).hide_all_overlays();
    }

    fn show_game_over(&mut self) {
        (**self).show_game_over();
    }

    fn show_draft_choices(&mut self, choices: &[DraftChoice]) {
        (**self).show_draft_choices(choices);
    }

    fn play_enemy_hit_animation(&mut self) {
        (**self).play_enemy_hit_animation();
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn log(&mut self, _message: &str, _category: LogCategory) {}
}

/// Forwards observer traffic to `tracing` for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn log(&mut self, message: &str, category: LogCategory) {
        info!(?category, "{message}");
    }

    fn show_map(&mut self) {
        debug!("show map");
    }

    fn show_game_over(&mut self) {
        info!("game over");
    }

    fn show_draft_choices(&mut self, choices: &[DraftChoice]) {
        for (index, choice) in choices.iter().enumerate() {
            debug!(index, "{}", choice.title());
        }
    }
}

/// One recorded observer call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObserverEvent {
    Log { message: String, category: LogCategory },
    RefreshAll,
    ShowMap,
    HideAllOverlays,
    ShowGameOver,
    ShowDraftChoices(Vec<DraftChoice>),
    EnemyHit,
}

/// Keeps every call in order. Used by tests and replay tooling.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ObserverEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged messages, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ObserverEvent::Log { message, .. } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Number of recorded events equal to `event`.
    #[must_use]
    pub fn count(&self, event: &ObserverEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    /// Was any line logged with `category`?
    #[must_use]
    pub fn logged(&self, category: LogCategory) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, ObserverEvent::Log { category: c, .. } if *c == category))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Observer for RecordingObserver {
    fn log(&mut self, message: &str, category: LogCategory) {
        self.events.push(ObserverEvent::Log {
            message: message.to_string(),
            category,
        });
    }

    fn refresh_all(&mut self) {
        self.events.push(ObserverEvent::RefreshAll);
    }

    fn show_map(&mut self) {
        self.events.push(ObserverEvent::ShowMap);
    }

    fn hide_all_overlays(&mut self) {
        self.events.push(ObserverEvent::HideAllOverlays);
    }

    fn show_game_over(&mut self) {
        self.events.push(ObserverEvent::ShowGameOver);
    }

    fn show_draft_choices(&mut self, choices: &[DraftChoice]) {
        self.events.push(ObserverEvent::ShowDraftChoices(choices.to_vec()));
    }

    fn play_enemy_hit_animation(&mut self) {
        self.events.push(ObserverEvent::EnemyHit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer() {
        let mut obs = RecordingObserver::new();
        obs.log("Deck shuffled.", LogCategory::Info);
        obs.refresh_all();
        obs.log("Not enough AP!", LogCategory::Warning);

        assert_eq!(obs.messages().collect::<Vec<_>>(), vec!["Deck shuffled.", "Not enough AP!"]);
        assert_eq!(obs.count(&ObserverEvent::RefreshAll), 1);
        assert!(obs.logged(LogCategory::Warning));
        assert!(!obs.logged(LogCategory::Heal));

        obs.clear();
        assert!(obs.events.is_empty());
    }

    #[test]
    fn test_boxed_observer_forwards() {
        let mut boxed: Box<RecordingObserver> = Box::new(RecordingObserver::new());
        boxed.show_map();
        boxed.play_enemy_hit_animation();
        assert_eq!(boxed.events, vec![ObserverEvent::ShowMap, ObserverEvent::EnemyHit]);
    }

    #[test]
    fn test_default_callbacks_are_noops() {
        let mut obs = NullObserver;
        obs.refresh_all();
        obs.show_game_over();
        obs.show_draft_choices(&[]);
    }
}
