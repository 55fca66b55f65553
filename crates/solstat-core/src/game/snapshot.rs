//! In-memory game registry loaded from a JSON snapshot.
//!
//! A snapshot holds everything the report engine reads from the host
//! application: the game list, protected aliases, the current game and each
//! player's counters and histories.
//!
//! ```json
//! {
//!   "games": [{ "id": 2, "title": "Klondike", "short_name": "Klondike" }],
//!   "protected_aliases": { "900": 2 },
//!   "current_game": 2,
//!   "players": {
//!     "alice": {
//!       "counters": { "2": { "won": 3, "lost": 1, "time": 400, "moves": 40 } },
//!       "full_history": [[2, "0123456789abcdef", 1, 1000000000, ""]],
//!       "session_history": []
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::game::{GameId, GameInfo, GameRegistry, PlayCounter};
use crate::labels;

/// One registered game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: GameId,
    pub title: String,
    /// Name used in log listings (falls back to `title`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// Stored data of one player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub counters: HashMap<GameId, PlayCounter>,
    pub full_history: Option<Vec<Value>>,
    pub session_history: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub games: Vec<GameEntry>,
    pub protected_aliases: HashMap<GameId, GameId>,
    pub current_game: Option<GameId>,
    pub players: HashMap<String, PlayerRecord>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;
        debug!(
            "Loaded snapshot from {}: {} games, {} players",
            path.display(),
            snapshot.games.len(),
            snapshot.players.len()
        );
        Ok(snapshot)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn add_game(&mut self, id: GameId, title: &str) {
        self.games.push(GameEntry {
            id,
            title: title.to_string(),
            short_name: None,
        });
    }

    pub fn set_counter(&mut self, player: &str, id: GameId, counter: PlayCounter) {
        self.player_mut(player).counters.insert(id, counter);
    }

    pub fn player_mut(&mut self, player: &str) -> &mut PlayerRecord {
        self.players.entry(player.to_string()).or_default()
    }

    fn entry(&self, id: GameId) -> Option<&GameEntry> {
        self.games.iter().find(|game| game.id == id)
    }
}

impl GameRegistry for Snapshot {
    fn game_ids(&self) -> Vec<GameId> {
        self.games.iter().map(|game| game.id).collect()
    }

    fn game_title(&self, id: GameId) -> String {
        self.entry(id)
            .map(|game| game.title.clone())
            .unwrap_or_else(|| labels::unknown_game(id))
    }

    fn play_counter(&self, player: &str, id: GameId) -> PlayCounter {
        self.players
            .get(player)
            .and_then(|record| record.counters.get(&id))
            .copied()
            .unwrap_or_default()
    }

    fn game_info(&self, id: GameId) -> Option<GameInfo> {
        self.entry(id).map(|game| GameInfo {
            short_name: game.short_name.clone().unwrap_or_else(|| game.title.clone()),
        })
    }

    fn protected_game_alias(&self, id: GameId) -> Option<GameId> {
        self.protected_aliases.get(&id).copied()
    }

    fn current_game_id(&self) -> Option<GameId> {
        self.current_game
    }

    fn session_history(&self, player: &str) -> Option<Vec<Value>> {
        self.players.get(player)?.session_history.clone()
    }

    fn full_history(&self, player: &str) -> Option<Vec<Value>> {
        self.players.get(player)?.full_history.clone()
    }
}
