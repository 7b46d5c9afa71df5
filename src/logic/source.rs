//! Record sources: where the full match list for a query scope comes from.
//!
//! The aggregator only ever sees a complete, parsed record list. A source either returns all of
//! its records or an error; partial results are never handed on.

use crate::models::{Deck, MatchRecord, MatchResult, Mode, PlayOrder, StatsError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Supplies every match record for the current scope.
pub trait RecordSource {
    fn fetch_all(&self) -> Result<Vec<MatchRecord>, StatsError>;
}

/// Records already in memory.
impl RecordSource for Vec<MatchRecord> {
    fn fetch_all(&self) -> Result<Vec<MatchRecord>, StatsError> {
        Ok(self.clone())
    }
}

/// Flat CSV layout of a record: one column per field, deck pairs split into main/sub.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: Uuid,
    date: NaiveDate,
    season_code: String,
    #[serde(default)]
    mode: String,
    #[serde(default)]
    rank: String,
    my_deck_main: String,
    #[serde(default)]
    my_deck_sub: String,
    #[serde(default)]
    opp_deck_main: String,
    #[serde(default)]
    opp_deck_sub: String,
    play_order: String,
    result: String,
    #[serde(default)]
    note: String,
}

impl CsvRow {
    fn from_record(r: &MatchRecord) -> Self {
        Self {
            id: r.id,
            date: r.date,
            season_code: r.season_code.clone(),
            mode: r.mode.label().to_string(),
            rank: r.rank.clone(),
            my_deck_main: r.my_deck.main.clone(),
            my_deck_sub: r.my_deck.sub.clone().unwrap_or_default(),
            opp_deck_main: r.opp_deck.main.clone(),
            opp_deck_sub: r.opp_deck.sub.clone().unwrap_or_default(),
            play_order: r.play_order.label().to_string(),
            result: r.result.label().to_string(),
            note: r.note.clone().unwrap_or_default(),
        }
    }

    fn into_record(self) -> Result<MatchRecord, String> {
        let mode = Mode::parse(&self.mode)
            .ok_or_else(|| StatsError::UnknownMode(self.mode.clone()).to_string())?;
        let play_order = PlayOrder::parse(&self.play_order)
            .ok_or_else(|| format!("play order must be 先攻 or 後攻 (got '{}')", self.play_order))?;
        let result = MatchResult::parse(&self.result)
            .ok_or_else(|| format!("result must be W or L (got '{}')", self.result))?;
        let note = self.note.trim();
        Ok(MatchRecord {
            id: self.id,
            date: self.date,
            mode,
            rank: self.rank,
            my_deck: Deck::new(self.my_deck_main, Some(&self.my_deck_sub)),
            opp_deck: Deck::new(self.opp_deck_main, Some(&self.opp_deck_sub)),
            play_order,
            result,
            note: (!note.is_empty()).then(|| note.to_string()),
            season_code: self.season_code,
        })
    }
}

/// Parse every record from CSV data with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<MatchRecord>, StatsError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row_number = i + 1;
        let record = row
            .map_err(|e| e.to_string())
            .and_then(CsvRow::into_record)
            .map_err(|message| StatsError::Csv {
                row: row_number,
                message,
            })?;
        records.push(record);
    }
    Ok(records)
}

/// Write records as CSV, header included, in the layout [`read_csv`] accepts.
pub fn write_csv<W: Write>(records: &[MatchRecord], writer: W) -> Result<(), StatsError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(CsvRow::from_record(record))
            .map_err(|e| StatsError::Io(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Records stored in a CSV file; re-read on every fetch.
#[derive(Clone, Debug)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvRecordSource {
    fn fetch_all(&self) -> Result<Vec<MatchRecord>, StatsError> {
        let file = File::open(&self.path)
            .map_err(|e| StatsError::Io(format!("{}: {}", self.path.display(), e)))?;
        let records = read_csv(file)?;
        log::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
