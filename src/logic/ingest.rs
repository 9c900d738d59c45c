//! CSV ingest: the result sheet → validated match records.
//!
//! Per-row shape problems (missing round/match, unreadable row) are dropped
//! silently; only I/O and CSV-structure failures surface as errors.

use crate::models::{MatchRecord, MatchType, RawMatchRow};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Parse CSV text into validated match records. The header row drives field
/// names; rows the sheet left half-filled are filtered here and never reach
/// the engine.
pub fn parse_csv_str(text: &str) -> Result<Vec<MatchRecord>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<RawMatchRow>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("Dropping unreadable CSV row: {}", e);
                dropped += 1;
                continue;
            }
        };
        match MatchRecord::from_raw(raw) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        log::info!("Dropped {} malformed row(s) during ingest", dropped);
    }
    Ok(records)
}

/// The loaded dataset plus provenance for the status endpoint.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub records: Vec<MatchRecord>,
    /// Where the CSV came from (path or URL), for logs and status.
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn from_csv_str(text: &str, source: impl Into<String>) -> Result<Self, csv::Error> {
        Ok(Self {
            records: parse_csv_str(text)?,
            source: source.into(),
            loaded_at: Utc::now(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        let source = path.display().to_string();
        Self::from_csv_str(&text, source).map_err(std::io::Error::other)
    }

    /// Records matching the analytics filters. `None` means "all" for either
    /// dimension.
    pub fn filtered(&self, round: Option<u32>, match_type: Option<MatchType>) -> Vec<MatchRecord> {
        self.records
            .iter()
            .filter(|r| round.map_or(true, |round| r.round == round))
            .filter(|r| match_type.map_or(true, |t| r.match_type == t))
            .cloned()
            .collect()
    }

    /// Distinct rounds present, ascending (for the round filter dropdown).
    pub fn rounds(&self) -> Vec<u32> {
        let mut rounds: Vec<u32> = self.records.iter().map(|r| r.round).collect();
        rounds.sort_unstable();
        rounds.dedup();
        rounds
    }
}
