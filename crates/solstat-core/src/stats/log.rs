use std::slice;

use serde_json::Value;
use strum::{FromRepr, IntoStaticStr};
use tracing::debug;

use crate::format::{format_game_number, format_timestamp};
use crate::game::{GameId, GameRegistry};
use crate::history::LogRecord;
use crate::labels;

/// Outcome of a logged game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr)]
#[repr(i8)]
pub enum GameStatus {
    Loaded = -2,
    #[strum(serialize = "Not won")]
    NotWon = -1,
    Lost = 0,
    Won = 1,
    Perfect = 2,
}

impl GameStatus {
    pub fn from_result(result: i64) -> Option<Self> {
        i8::try_from(result).ok().and_then(Self::from_repr)
    }

    /// Status text of a result code, `*error*` for unknown codes
    pub fn label(result: i64) -> &'static str {
        Self::from_result(result)
            .map(Into::into)
            .unwrap_or(labels::STATUS_ERROR)
    }
}

/// One line of a game log
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub game_name: String,
    pub game_number: String,
    pub date: String,
    pub status: &'static str,
    pub result: i64,
    pub game_id: GameId,
}

/// Won and not-won counts of the records seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogTally {
    pub won: u32,
    pub lost: u32,
}

impl LogTally {
    /// Loaded and abandoned games (negative results) are not counted
    fn record(&mut self, result: i64) {
        if result > 0 {
            self.won += 1;
        } else if result == 0 {
            self.lost += 1;
        }
    }
}

/// Lazy iterator over the accepted records of a history
pub struct LogRows<'a, 'r> {
    registry: &'a dyn GameRegistry,
    records: slice::Iter<'r, Value>,
    tally: LogTally,
}

impl<'a, 'r> LogRows<'a, 'r> {
    pub(crate) fn new(registry: &'a dyn GameRegistry, records: &'r [Value]) -> Self {
        Self {
            registry,
            records: records.iter(),
            tally: LogTally::default(),
        }
    }

    /// Counts over the rows produced so far
    pub fn tally(&self) -> LogTally {
        self.tally
    }
}

impl Iterator for LogRows<'_, '_> {
    type Item = LogRow;

    fn next(&mut self) -> Option<LogRow> {
        for value in self.records.by_ref() {
            let Some(record) = LogRecord::from_value(value) else {
                continue;
            };
            if let Some(row) = build_row(self.registry, record) {
                self.tally.record(row.result);
                return Some(row);
            }
        }
        None
    }
}

/// Display name of a game, trying its protected alias before giving up
fn game_name(registry: &dyn GameRegistry, id: GameId) -> String {
    registry
        .game_info(id)
        .or_else(|| {
            registry
                .protected_game_alias(id)
                .and_then(|alias| registry.game_info(alias))
        })
        .map(|info| info.short_name)
        .unwrap_or_else(|| {
            debug!("No game registered for id {}", id);
            labels::unknown_game(id)
        })
}

fn build_row(registry: &dyn GameRegistry, record: LogRecord) -> Option<LogRow> {
    let Some(date) = format_timestamp(record.timestamp) else {
        debug!(
            "Skipping history record with invalid timestamp {}",
            record.timestamp
        );
        return None;
    };
    Some(LogRow {
        game_name: game_name(registry, record.game_id),
        game_number: format_game_number(&record.seed),
        date,
        status: GameStatus::label(record.result),
        result: record.result,
        game_id: record.game_id,
    })
}
