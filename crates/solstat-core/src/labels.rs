//! Display strings used in rendered reports.

use crate::game::GameId;

pub const STAT_HEADER: [&str; 7] = [
    "Game",
    "Played",
    "Won",
    "Lost",
    "Playing time",
    "Moves",
    "% won",
];

pub const LOG_HEADER: [&str; 4] = ["Game", "Game number", "Started at", "Status"];

pub const DEMO_PLAYER: &str = "Demo";

pub const GAME_NUMBER_ERROR: &str = "** ERROR **";

pub const STATUS_ERROR: &str = "*error*";

pub fn unknown_game(id: GameId) -> String {
    format!("** UNKNOWN {} **", id)
}

pub fn stats_title(player: &str) -> String {
    format!("Statistics for {}", player)
}

pub fn full_log_title(player: &str) -> String {
    format!("Full log for {}", player)
}

pub fn session_log_title(player: &str) -> String {
    format!("Session log for {}", player)
}

pub fn total_row(played: u32, total: usize) -> String {
    format!("Total ({} out of {} games)", played, total)
}
