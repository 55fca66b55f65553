use std::io::Write;

use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::format::format_date;
use crate::game::{GameRegistry, SortKey};
use crate::labels;
use crate::stats::StatsAggregator;

use super::line::{
    format_log_line, format_log_row, format_stat_row, format_stats_line, format_title_line,
    format_total_row,
};

/// Writes statistics and log reports as UTF-8 text to a sink
pub struct ReportWriter<'a, W: Write> {
    sink: W,
    registry: &'a dyn GameRegistry,
    config: ReportConfig,
    /// Fixed report date, current local time when unset
    generated_at: Option<DateTime<Local>>,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    /// Create a writer with the default configuration
    pub fn new(sink: W, registry: &'a dyn GameRegistry) -> Self {
        Self::with_config(sink, registry, ReportConfig::default())
    }

    pub fn with_config(sink: W, registry: &'a dyn GameRegistry, config: ReportConfig) -> Self {
        Self {
            sink,
            registry,
            config,
            generated_at: None,
        }
    }

    /// Stamp every header with `date` instead of the current time
    pub fn generated_at(mut self, date: DateTime<Local>) -> Self {
        self.generated_at = Some(date);
        self
    }

    /// Consume the writer and return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn p(&mut self, text: &str) -> Result<()> {
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    fn nl(&mut self, count: usize) -> Result<()> {
        self.p(&"\n".repeat(count))
    }

    fn player_name(&self, player: Option<&str>) -> String {
        player.unwrap_or(&self.config.demo_player).to_string()
    }

    /// Title line with the date on the right, a rule and a blank line
    pub fn write_header(&mut self, title: &str, page_width: usize) -> Result<()> {
        let date = format_date(&self.generated_at.unwrap_or_else(Local::now));
        self.p(&format_title_line(title, &date, page_width))?;
        self.p(&format!("{}\n", "-".repeat(page_width)))?;
        self.nl(1)
    }

    /// Write the statistics table of `player` and return the number of played games
    pub fn write_stats(&mut self, player: Option<&str>, sort_key: SortKey) -> Result<u32> {
        let player = self.player_name(player);
        let table = StatsAggregator::new(self.registry).stat_results(&player, sort_key);

        self.write_header(&labels::stats_title(&player), self.config.stats_page_width)?;
        self.p(&format_stats_line(StatsAggregator::stat_header()))?;
        self.nl(1)?;
        for row in table.rows() {
            self.p(&format_stat_row(row))?;
        }
        self.nl(1)?;
        self.p(&format_total_row(table.summary()))?;
        self.nl(2)?;

        Ok(table.summary().played_games)
    }

    /// Write a game log.
    ///
    /// Returns `false` without writing anything when there is no player or
    /// no stored record.
    pub fn write_log(
        &mut self,
        player: Option<&str>,
        title: &str,
        records: Option<&[Value]>,
    ) -> Result<bool> {
        let (Some(player), Some(records)) = (player.filter(|p| !p.is_empty()), records) else {
            return Ok(false);
        };
        if records.is_empty() {
            debug!("No history records for {}", player);
            return Ok(false);
        }

        self.write_header(title, self.config.log_page_width)?;
        self.p(&format_log_line(StatsAggregator::log_header()))?;
        self.nl(1)?;
        let aggregator = StatsAggregator::new(self.registry);
        for row in aggregator.log_results(player, records) {
            self.p(&format_log_row(&row))?;
        }
        self.nl(2)?;

        Ok(true)
    }

    /// Write the log of every game `player` has played
    pub fn write_full_log(&mut self, player: Option<&str>) -> Result<bool> {
        let player = self.player_name(player);
        let records = self.registry.full_history(&player);
        self.write_log(
            Some(&player),
            &labels::full_log_title(&player),
            records.as_deref(),
        )
    }

    /// Write the log of the games `player` has played in the current session
    pub fn write_session_log(&mut self, player: Option<&str>) -> Result<bool> {
        let player = self.player_name(player);
        let records = self.registry.session_history(&player);
        self.write_log(
            Some(&player),
            &labels::session_log_title(&player),
            records.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_timestamp;
    use crate::game::{PlayCounter, Snapshot};
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap()
    }

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.add_game(1, "Klondike");
        snapshot.add_game(2, "Spider");
        snapshot.set_counter("Alice", 1, PlayCounter::new(3, 1, 400.0, 40.0));
        snapshot.player_mut("Alice").full_history = Some(vec![
            json!([1, "0123456789abcdef", 1, 1000000000, ""]),
            json!(42),
            json!([2, "77", 0, 1000000000, "", null, null]),
        ]);
        snapshot.player_mut("Alice").session_history = Some(vec![]);
        snapshot
    }

    fn render<F>(snapshot: &Snapshot, write: F) -> String
    where
        F: FnOnce(&mut ReportWriter<'_, Vec<u8>>),
    {
        let mut writer = ReportWriter::new(Vec::new(), snapshot).generated_at(fixed_date());
        write(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_write_header() {
        let output = render(&snapshot(), |w| w.write_header("Report", 30).unwrap());
        assert_eq!(
            output,
            format!(
                "Report{}2024-03-05  09:07\n{}\n\n",
                " ".repeat(7),
                "-".repeat(30)
            )
        );
    }

    #[test]
    fn test_write_stats() {
        let mut played = 0;
        let output = render(&snapshot(), |w| {
            played = w.write_stats(Some("Alice"), SortKey::Name).unwrap();
        });
        assert_eq!(played, 1);

        let lines: Vec<&str> = output.split('\n').collect();
        assert!(lines[0].starts_with("Statistics for Alice"));
        assert!(lines[0].ends_with("2024-03-05  09:07"));
        assert_eq!(lines[0].chars().count(), 62);
        assert_eq!(lines[1], "-".repeat(62));
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Game "));
        assert!(lines[3].ends_with("  % won"));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("Klondike "));
        assert!(lines[5].ends_with("    75.0"));
        assert_eq!(lines[6], "");
        assert!(lines[7].starts_with("Total (1 out of 2 games)"));
        assert!(lines[7].ends_with("       4       3       1    6:40    40.0    75.0"));
        assert_eq!(&lines[8..], ["", "", ""]);
    }

    #[test]
    fn test_write_stats_demo_player() {
        let output = render(&snapshot(), |w| {
            assert_eq!(w.write_stats(None, SortKey::Won).unwrap(), 0);
        });
        assert!(output.starts_with("Statistics for Demo "));
        assert!(output.contains("Total (0 out of 2 games)"));
    }

    #[test]
    fn test_write_full_log() {
        let output = render(&snapshot(), |w| {
            assert!(w.write_full_log(Some("Alice")).unwrap());
        });
        let date = format_timestamp(1e9).unwrap();

        let lines: Vec<&str> = output.split('\n').collect();
        assert!(lines[0].starts_with("Full log for Alice"));
        assert_eq!(lines[0].chars().count(), 71);
        assert_eq!(lines[1], "-".repeat(71));
        assert_eq!(
            lines[3],
            "Game                      Game number                  Started at  Status"
        );
        assert_eq!(lines[4], "");
        assert_eq!(
            lines[5],
            format!("{:<25} {:<20}  {:>17}  Won", "Klondike", "4567-89ab-cdef", date)
        );
        assert_eq!(
            lines[6],
            format!("{:<25} {:<20}  {:>17}  Lost", "Spider", "77", date)
        );
        assert_eq!(&lines[7..], ["", "", ""]);
    }

    #[test]
    fn test_write_log_without_records_writes_nothing() {
        let output = render(&snapshot(), |w| {
            assert!(!w.write_log(Some("Alice"), "Log", Some(&[])).unwrap());
            assert!(!w.write_log(Some("Alice"), "Log", None).unwrap());
            assert!(!w.write_session_log(Some("Alice")).unwrap());
            assert!(!w.write_full_log(Some("Bob")).unwrap());
            assert!(!w.write_full_log(None).unwrap());
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_write_log_requires_player() {
        let records = vec![json!([1, "1", 1, 0, ""])];
        let output = render(&snapshot(), |w| {
            assert!(!w.write_log(None, "Log", Some(&records)).unwrap());
            assert!(!w.write_log(Some(""), "Log", Some(&records)).unwrap());
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_write_log_with_only_invalid_records_keeps_frame() {
        let records = vec![json!("junk")];
        let output = render(&snapshot(), |w| {
            assert!(w.write_log(Some("Alice"), "Log", Some(&records)).unwrap());
        });
        assert_eq!(output.lines().count(), 7);
    }

    #[test]
    fn test_configured_widths() {
        let config = ReportConfig::builder()
            .stats_page_width(40)
            .demo_player("Guest")
            .build();
        let snapshot = snapshot();
        let mut writer =
            ReportWriter::with_config(Vec::new(), &snapshot, config).generated_at(fixed_date());
        writer.write_stats(None, SortKey::Name).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Statistics for Guest   2024-03-05  09:07"
        );
        assert_eq!(lines.next().unwrap(), "-".repeat(40));
    }
}
