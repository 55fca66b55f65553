//! Report layout configuration.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::game::SortKey;
use crate::labels;

/// Default page width of the statistics block
pub const STATS_PAGE_WIDTH: usize = 62;
/// Default page width of the log blocks
pub const LOG_PAGE_WIDTH: usize = 71;

/// Configuration of rendered reports
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page width of the statistics header
    pub stats_page_width: usize,
    /// Page width of the log headers
    pub log_page_width: usize,
    /// Name shown for reports without a player
    pub demo_player: String,
    /// Sort key used when none is requested
    pub default_sort: SortKey,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stats_page_width: STATS_PAGE_WIDTH,
            log_page_width: LOG_PAGE_WIDTH,
            demo_player: labels::DEMO_PLAYER.to_string(),
            default_sort: SortKey::default(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.stats_page_width == 0 || self.log_page_width == 0 {
            return Err(Error::Config("page width must be positive".to_string()));
        }
        if self.demo_player.trim().is_empty() {
            return Err(Error::Config("demo player name is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for ReportConfig
#[derive(Debug, Clone, Default)]
pub struct ReportConfigBuilder {
    stats_page_width: Option<usize>,
    log_page_width: Option<usize>,
    demo_player: Option<String>,
    default_sort: Option<SortKey>,
}

impl ReportConfigBuilder {
    pub fn stats_page_width(mut self, width: usize) -> Self {
        self.stats_page_width = Some(width);
        self
    }

    pub fn log_page_width(mut self, width: usize) -> Self {
        self.log_page_width = Some(width);
        self
    }

    pub fn demo_player<S: Into<String>>(mut self, name: S) -> Self {
        self.demo_player = Some(name.into());
        self
    }

    pub fn default_sort(mut self, key: SortKey) -> Self {
        self.default_sort = Some(key);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig {
            stats_page_width: self.stats_page_width.unwrap_or(default.stats_page_width),
            log_page_width: self.log_page_width.unwrap_or(default.log_page_width),
            demo_player: self.demo_player.unwrap_or(default.demo_player),
            default_sort: self.default_sort.unwrap_or(default.default_sort),
        }
    }
}
