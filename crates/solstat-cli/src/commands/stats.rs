//! Stats command implementation.

use std::io::Write;

use anyhow::Result;
use solstat_core::{ReportConfig, ReportWriter, SortKey};
use tracing::info;

use super::{load_snapshot, open_output};
use crate::cli::ReportSource;

/// Write the statistics table of the requested player
pub fn run(source: &ReportSource, sort: Option<SortKey>, config: ReportConfig) -> Result<()> {
    let snapshot = load_snapshot(&source.snapshot)?;
    let sort = sort.unwrap_or(config.default_sort);

    let sink = open_output(source.output.as_deref())?;
    let mut writer = ReportWriter::with_config(sink, &snapshot, config);
    let played = writer.write_stats(source.player.as_deref(), sort)?;
    writer.into_inner().flush()?;

    info!("Wrote statistics sorted by {} ({} games played)", sort, played);
    Ok(())
}
