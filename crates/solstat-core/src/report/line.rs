//! Fixed-width line layouts

use crate::labels;
use crate::stats::{LogRow, StatRow, StatSummary};

/// Statistics line: name in 30 columns, then six right-aligned 7-column fields
pub fn format_stats_line(columns: [&str; 7]) -> String {
    let [name, played, won, lost, time, moves, percent] = columns;
    format!(
        "{:<30} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}\n",
        name, played, won, lost, time, moves, percent
    )
}

/// Log line: game name, game number, date, then the status
pub fn format_log_line(columns: [&str; 4]) -> String {
    let [name, number, date, status] = columns;
    format!("{:<25} {:<20}  {:>17}  {}\n", name, number, date, status)
}

pub fn format_stat_row(row: &StatRow) -> String {
    format_stats_line([
        &row.name,
        &row.games_played.to_string(),
        &row.won.to_string(),
        &row.lost.to_string(),
        &row.formatted_time,
        &row.formatted_moves,
        &row.percent_won,
    ])
}

pub fn format_total_row(summary: &StatSummary) -> String {
    format_stats_line([
        &labels::total_row(summary.played_games, summary.total_games),
        &summary.won_games.saturating_add(summary.lost_games).to_string(),
        &summary.won_games.to_string(),
        &summary.lost_games.to_string(),
        &summary.avg_time,
        &summary.formatted_moves,
        &summary.percent_won,
    ])
}

pub fn format_log_row(row: &LogRow) -> String {
    format_log_line([&row.game_name, &row.game_number, &row.date, row.status])
}

/// Title on the left and date on the right of a `page_width` line, with at
/// least one blank between them
pub fn format_title_line(title: &str, date: &str, page_width: usize) -> String {
    let used = title.chars().count() + date.chars().count();
    let blanks = page_width.saturating_sub(used).max(1);
    format!("{}{}{}\n", title, " ".repeat(blanks), date)
}
