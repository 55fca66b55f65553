//! Value formatting shared by the statistics and log tables

use chrono::{DateTime, Local};

use crate::labels;

/// Date layout of log rows and report headers
pub const DATE_FORMAT: &str = "%Y-%m-%d  %H:%M";

/// Seeds longer than this are not displayable
pub const MAX_SEED_LEN: usize = 20;

/// Format a duration in seconds as `M:SS`, or `H:MM:SS` from one hour on
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let secs = seconds as u64;
    if secs < 3600 {
        format!("{}:{:02}", secs / 60, secs % 60)
    } else {
        format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a move count with one decimal place
pub fn format_moves(moves: f64) -> String {
    format!("{:.1}", round1(moves))
}

/// Percentage of won games with one decimal place, "0.0" when nothing was played
pub fn format_percent(won: u64, lost: u64) -> String {
    let played = won.saturating_add(lost);
    if played == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", 100.0 * won as f64 / played as f64)
}

/// Format a game seed for display.
///
/// 16-character seeds drop their first group and show the remaining twelve
/// characters as three dash-separated groups.
pub fn format_game_number(seed: &str) -> String {
    let chars: Vec<char> = seed.chars().collect();
    match chars.len() {
        16 => {
            let group = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
            format!("{}-{}-{}", group(4..8), group(8..12), group(12..16))
        }
        len if len <= MAX_SEED_LEN => seed.to_string(),
        _ => labels::GAME_NUMBER_ERROR.to_string(),
    }
}

/// Format a Unix timestamp in local time, `None` if it is out of range
pub fn format_timestamp(timestamp: f64) -> Option<String> {
    if !timestamp.is_finite() {
        return None;
    }
    let utc = DateTime::from_timestamp(timestamp.floor() as i64, 0)?;
    Some(format_date(&utc.with_timezone(&Local)))
}

pub fn format_date(date: &DateTime<Local>) -> String {
    date.format(DATE_FORMAT).to_string()
}
