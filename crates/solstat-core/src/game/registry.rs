use serde_json::Value;

use crate::game::{GameId, GameInfo, PlayCounter};

/// Source of game metadata, per-player counters and play histories.
///
/// The sorting methods have default implementations built on
/// [`GameRegistry::game_ids`], [`GameRegistry::game_title`] and
/// [`GameRegistry::play_counter`]: name order is ascending by title
/// (case-insensitive), every other order is descending by its metric with
/// ties kept in name order.
pub trait GameRegistry {
    /// All known game ids
    fn game_ids(&self) -> Vec<GameId>;

    /// Full display title of a game
    fn game_title(&self, id: GameId) -> String;

    /// Counters of `player` for one game (all zero when never played)
    fn play_counter(&self, player: &str, id: GameId) -> PlayCounter;

    fn game_info(&self, id: GameId) -> Option<GameInfo>;

    /// Replacement id for games that are no longer registered under their stored id
    fn protected_game_alias(&self, id: GameId) -> Option<GameId>;

    /// Id of the game currently being played
    fn current_game_id(&self) -> Option<GameId>;

    /// Records of the games played in the current session
    fn session_history(&self, player: &str) -> Option<Vec<Value>>;

    /// Records of every game ever played
    fn full_history(&self, player: &str) -> Option<Vec<Value>>;

    fn game_ids_by_name(&self, _player: &str) -> Vec<GameId> {
        let mut ids = self.game_ids();
        ids.sort_by_cached_key(|&id| (self.game_title(id).to_lowercase(), id));
        ids
    }

    fn game_ids_by_played(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, |c| c.played() as f64)
    }

    fn game_ids_by_won(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, |c| f64::from(c.won))
    }

    fn game_ids_by_lost(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, |c| f64::from(c.lost))
    }

    fn game_ids_by_time(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, |c| c.time)
    }

    fn game_ids_by_moves(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, |c| c.moves)
    }

    fn game_ids_by_percent(&self, player: &str) -> Vec<GameId> {
        sort_descending_by(self, player, PlayCounter::win_ratio)
    }
}

fn sort_descending_by<R, F>(registry: &R, player: &str, metric: F) -> Vec<GameId>
where
    R: GameRegistry + ?Sized,
    F: Fn(&PlayCounter) -> f64,
{
    let mut keyed: Vec<(f64, GameId)> = registry
        .game_ids_by_name(player)
        .into_iter()
        .map(|id| (metric(&registry.play_counter(player, id)), id))
        .collect();
    // Stable sort keeps name order among equal metrics
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, id)| id).collect()
}
