//! # solstat-core
//!
//! Statistics and game log reports for a solitaire game collection.
//!
//! This crate provides:
//! - Game registry abstraction (titles, per-player counters, histories)
//! - Statistics table with per-game rows and totals, in seven sort orders
//! - Migration of stored history records from older layouts
//! - Fixed-width text rendering of statistics and logs

pub mod config;
pub mod error;
pub mod format;
pub mod game;
pub mod history;
pub mod labels;
pub mod report;
pub mod stats;

pub use config::{ReportConfig, ReportConfigBuilder};
pub use error::{Error, Result};
pub use game::{
    GameEntry, GameId, GameInfo, GameRegistry, PlayCounter, PlayerRecord, Snapshot, SortKey,
};
pub use history::{HistoryRecord, LogRecord};
pub use report::ReportWriter;
pub use stats::{
    GameStatus, LogRow, LogRows, LogTally, StatRow, StatSummary, StatTable, StatTotals,
    StatsAggregator,
};
