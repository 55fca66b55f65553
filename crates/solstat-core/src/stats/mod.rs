//! Statistics and log tables.
//!
//! [`StatsAggregator`] turns registry data into display rows:
//!
//! - **Statistics table**: one row per game the player has finished (plus the
//!   game currently being played), sorted by a [`SortKey`], with totals over
//!   every known game
//! - **Log table**: one row per accepted history record, in history order

mod log;
mod table;

pub use log::*;
pub use table::*;

use serde_json::Value;
use tracing::debug;

use crate::game::{GameRegistry, SortKey};
use crate::labels;

pub struct StatsAggregator<'a> {
    registry: &'a dyn GameRegistry,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(registry: &'a dyn GameRegistry) -> Self {
        Self { registry }
    }

    pub fn stat_header() -> [&'static str; 7] {
        labels::STAT_HEADER
    }

    /// Build the statistics table of `player`.
    ///
    /// Totals run over every known game, but only games with a recorded win
    /// or loss, or the current game, get a row and count as played.
    pub fn stat_results(&self, player: &str, sort_key: SortKey) -> StatTable {
        let ids = sort_key.sorted_game_ids(self.registry, player);
        let current = self.registry.current_game_id();

        let mut totals = StatTotals::default();
        let mut rows = Vec::new();
        for &id in &ids {
            let counter = self.registry.play_counter(player, id);
            totals.add(&counter);

            if counter.has_activity() || current == Some(id) {
                rows.push(StatRow::new(id, self.registry.game_title(id), &counter));
            }
        }

        let played = rows.len() as u32;
        debug!(
            "Statistics for {} by {}: {} of {} games played",
            player,
            sort_key,
            played,
            ids.len()
        );
        StatTable::new(rows, StatSummary::from_totals(ids.len(), played, &totals))
    }

    pub fn log_header() -> [&'static str; 4] {
        labels::LOG_HEADER
    }

    /// Rows of a stored history, skipping records that cannot be read
    pub fn log_results<'r>(&self, player: &str, records: &'r [Value]) -> LogRows<'a, 'r> {
        debug!("Log for {}: {} stored records", player, records.len());
        LogRows::new(self.registry, records)
    }
}
