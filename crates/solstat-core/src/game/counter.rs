use serde::{Deserialize, Serialize};

/// Identifier of a game variant in the registry
pub type GameId = i64;

/// Accumulated results of one player on one game
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayCounter {
    pub won: u32,
    pub lost: u32,
    /// Total playing time in seconds
    pub time: f64,
    /// Total number of moves
    pub moves: f64,
}

impl PlayCounter {
    pub fn new(won: u32, lost: u32, time: f64, moves: f64) -> Self {
        Self {
            won,
            lost,
            time,
            moves,
        }
    }

    /// Number of finished games (won + lost)
    pub fn played(&self) -> u64 {
        u64::from(self.won) + u64::from(self.lost)
    }

    /// True if at least one game was finished
    pub fn has_activity(&self) -> bool {
        self.won > 0 || self.lost > 0
    }

    /// Win ratio in `0.0..=1.0`, zero when nothing was played
    pub fn win_ratio(&self) -> f64 {
        match self.played() {
            0 => 0.0,
            played => f64::from(self.won) / played as f64,
        }
    }
}

/// Display metadata of a game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub short_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_and_activity() {
        let counter = PlayCounter::new(3, 1, 400.0, 40.0);
        assert_eq!(counter.played(), 4);
        assert!(counter.has_activity());

        let idle = PlayCounter::default();
        assert_eq!(idle.played(), 0);
        assert!(!idle.has_activity());
    }

    #[test]
    fn test_win_ratio() {
        assert_eq!(PlayCounter::new(3, 1, 0.0, 0.0).win_ratio(), 0.75);
        assert_eq!(PlayCounter::new(0, 2, 0.0, 0.0).win_ratio(), 0.0);
        assert_eq!(PlayCounter::default().win_ratio(), 0.0);
    }

    #[test]
    fn test_played_does_not_overflow() {
        let counter = PlayCounter::new(u32::MAX, 1, 0.0, 0.0);
        assert_eq!(counter.played(), u64::from(u32::MAX) + 1);
        assert!(counter.win_ratio() < 1.0);
    }

    #[test]
    fn test_counter_deserialize_defaults() {
        let counter: PlayCounter = serde_json::from_str(r#"{"won": 2}"#).unwrap();
        assert_eq!(counter, PlayCounter::new(2, 0, 0.0, 0.0));
    }
}
