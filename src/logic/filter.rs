//! Query scope: narrow the record set to one season and/or mode before aggregating.

use crate::models::{MatchRecord, Mode};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Which records a view covers. Empty fields match everything.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub season_code: Option<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
}

impl MatchQuery {
    pub fn season(code: impl Into<String>) -> Self {
        Self {
            season_code: Some(code.into()),
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.season_code.is_none() && self.mode.is_none()
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        let season_ok = self
            .season_code
            .as_deref()
            .map_or(true, |code| record.season_code == code);
        let mode_ok = self.mode.map_or(true, |mode| record.mode == mode);
        season_ok && mode_ok
    }
}

/// Records in `records` that fall inside `query`, in their original order.
pub fn filter_records(records: &[MatchRecord], query: &MatchQuery) -> Vec<MatchRecord> {
    records
        .iter()
        .filter(|r| query.matches(r))
        .cloned()
        .collect()
}

/// Distinct season codes present in the records, sorted ascending.
pub fn seasons(records: &[MatchRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.season_code.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
