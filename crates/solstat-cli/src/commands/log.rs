//! Full and session log commands.

use std::io::Write;

use anyhow::Result;
use solstat_core::{ReportConfig, ReportWriter};
use tracing::info;

use super::{load_snapshot, open_output};
use crate::cli::ReportSource;

/// Which history a log is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Full,
    Session,
}

pub fn run(source: &ReportSource, kind: LogKind, config: ReportConfig) -> Result<()> {
    let snapshot = load_snapshot(&source.snapshot)?;
    let sink = open_output(source.output.as_deref())?;
    let mut writer = ReportWriter::with_config(sink, &snapshot, config);

    let player = source.player.as_deref();
    let written = match kind {
        LogKind::Full => writer.write_full_log(player)?,
        LogKind::Session => writer.write_session_log(player)?,
    };
    writer.into_inner().flush()?;

    if written {
        info!("Wrote {:?} log", kind);
    } else {
        info!("No {:?} log recorded, nothing written", kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "games": [{ "id": 1, "title": "Klondike", "short_name": "Klon" }],
        "players": {
            "alice": {
                "full_history": [
                    [1, "0123456789abcdef", 1, 1000000000, ""],
                    [1, "77", 0, 1000000000, "", null, null, null, 1]
                ],
                "session_history": [[1, "77", 0, 1000000000, "", null, null, null, 1]]
            }
        }
    }"#;

    fn source(dir: &TempDir, player: Option<&str>) -> ReportSource {
        let snapshot = dir.path().join("snapshot.json");
        fs::write(&snapshot, SNAPSHOT).unwrap();
        ReportSource {
            snapshot,
            player: player.map(str::to_string),
            output: Some(dir.path().join("log.txt")),
        }
    }

    fn output(source: &ReportSource) -> String {
        fs::read_to_string(source.output.as_ref().unwrap()).unwrap()
    }

    #[test]
    fn test_full_log() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, Some("alice"));

        run(&source, LogKind::Full, ReportConfig::default()).unwrap();

        let output = output(&source);
        assert!(output.starts_with("Full log for alice"));
        assert!(output.contains("Klon                      4567-89ab-cdef"));
        assert_eq!(output.lines().filter(|l| l.starts_with("Klon ")).count(), 2);
    }

    #[test]
    fn test_session_log() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, Some("alice"));

        run(&source, LogKind::Session, ReportConfig::default()).unwrap();

        let output = output(&source);
        assert!(output.starts_with("Session log for alice"));
        assert!(output.contains("  Lost\n"));
    }

    #[test]
    fn test_log_without_history_is_empty() {
        let dir = TempDir::new().unwrap();
        let source = source(&dir, None);

        run(&source, LogKind::Full, ReportConfig::default()).unwrap();

        assert!(output(&source).is_empty());
    }
}
