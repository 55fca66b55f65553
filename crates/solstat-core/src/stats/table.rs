use crate::format::{format_moves, format_percent, format_time, round1};
use crate::game::{GameId, PlayCounter};

/// One line of the statistics table
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub name: String,
    pub games_played: u64,
    pub won: u32,
    pub lost: u32,
    pub formatted_time: String,
    pub formatted_moves: String,
    pub percent_won: String,
    pub game_id: GameId,
}

impl StatRow {
    pub fn new(game_id: GameId, name: String, counter: &PlayCounter) -> Self {
        Self {
            name,
            games_played: counter.played(),
            won: counter.won,
            lost: counter.lost,
            formatted_time: format_time(counter.time),
            formatted_moves: format_moves(counter.moves),
            percent_won: format_percent(u64::from(counter.won), u64::from(counter.lost)),
            game_id,
        }
    }
}

/// Running totals of the counters of several games
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatTotals {
    pub won: u64,
    pub lost: u64,
    pub time: f64,
    pub moves: f64,
}

impl StatTotals {
    pub fn add(&mut self, counter: &PlayCounter) {
        self.won = self.won.saturating_add(u64::from(counter.won));
        self.lost = self.lost.saturating_add(u64::from(counter.lost));
        self.time += counter.time;
        self.moves += counter.moves;
    }
}

impl From<PlayCounter> for StatTotals {
    fn from(counter: PlayCounter) -> Self {
        let mut totals = Self::default();
        totals.add(&counter);
        totals
    }
}

/// Totals over every game known for a player
#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    /// Number of known games, shown or not
    pub total_games: usize,
    /// Number of games that got a row
    pub played_games: u32,
    pub won_games: u64,
    pub lost_games: u64,
    /// Average playing time per played game
    pub avg_time: String,
    /// Average moves per played game, one decimal
    pub avg_moves: f64,
    /// `avg_moves` as displayed, a bare "0" when no average was taken
    pub formatted_moves: String,
    pub percent_won: String,
}

impl StatSummary {
    /// Build the summary from running totals.
    ///
    /// Averages are only reported when at least one game was won; a player
    /// with losses only gets zero averages.
    pub fn from_totals(total_games: usize, played_games: u32, totals: &StatTotals) -> Self {
        let (avg_time, avg_moves, formatted_moves) = if totals.won > 0 && played_games > 0 {
            let played = f64::from(played_games);
            let avg_moves = round1(totals.moves / played);
            (format_time(totals.time / played), avg_moves, format_moves(avg_moves))
        } else {
            (format_time(0.0), 0.0, "0".to_string())
        };

        Self {
            total_games,
            played_games,
            won_games: totals.won,
            lost_games: totals.lost,
            avg_time,
            avg_moves,
            formatted_moves,
            percent_won: format_percent(totals.won, totals.lost),
        }
    }

    /// `(total, played, won, lost, avg_time, avg_moves, percent)`
    pub fn as_tuple(&self) -> (usize, u32, u64, u64, &str, f64, &str) {
        (
            self.total_games,
            self.played_games,
            self.won_games,
            self.lost_games,
            &self.avg_time,
            self.avg_moves,
            &self.percent_won,
        )
    }
}

/// Rows of the statistics table together with their summary
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    rows: Vec<StatRow>,
    summary: StatSummary,
}

impl StatTable {
    pub(crate) fn new(rows: Vec<StatRow>, summary: StatSummary) -> Self {
        Self { rows, summary }
    }

    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    pub fn summary(&self) -> &StatSummary {
        &self.summary
    }
}
