//! Derived statistics: snapshot totals, per-deck rows, per-matchup rows, and sort keys.

use serde::{Deserialize, Serialize};

/// Deck tables shown to the user are capped at this many rows.
pub const DECK_TABLE_LIMIT: usize = 30;

/// Opponent label used when a record has no opponent deck name.
pub const UNKNOWN_DECK: &str = "unknown";

/// Primary ordering for deck and matchup tables. The other metric breaks ties, then the name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Games,
    #[serde(alias = "winRate")]
    WinRate,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "games" | "Games" => Some(SortKey::Games),
            "win_rate" | "winRate" | "WinRate" => Some(SortKey::WinRate),
            _ => None,
        }
    }
}

/// Percentage `part / whole * 100`, or 0 when `whole` is 0.
pub fn rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}

/// Win/loss totals for one deck, split by play order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckStatRow {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub first_games: u32,
    pub first_wins: u32,
    pub first_losses: u32,
    pub first_win_rate: f64,
    /// Share of this deck's games played first, in percent.
    pub first_rate: f64,
    pub second_games: u32,
    pub second_wins: u32,
    pub second_losses: u32,
    pub second_win_rate: f64,
}

/// Results of one own deck against one opponent deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupRow {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

/// Ranking view shared by deck and matchup rows so both use one comparator.
pub trait RankedRow {
    fn name(&self) -> &str;
    fn games(&self) -> u32;
    fn win_rate(&self) -> f64;
}

impl RankedRow for DeckStatRow {
    fn name(&self) -> &str {
        &self.name
    }
    fn games(&self) -> u32 {
        self.games
    }
    fn win_rate(&self) -> f64 {
        self.win_rate
    }
}

impl RankedRow for MatchupRow {
    fn name(&self) -> &str {
        &self.name
    }
    fn games(&self) -> u32 {
        self.games
    }
    fn win_rate(&self) -> f64 {
        self.win_rate
    }
}

/// Aggregate view over a full record set. Rebuilt from scratch on every change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub first_count: u32,
    pub second_count: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    /// Share of all games played first, in percent.
    pub first_rate: f64,
    pub first_win_rate: f64,
    pub second_win_rate: f64,
    /// Order used for `my_decks`.
    pub deck_sort: SortKey,
    /// One row per distinct own main deck, every deck included.
    pub my_decks: Vec<DeckStatRow>,
}

impl StatsSnapshot {
    /// Deck rows for display: the first `DECK_TABLE_LIMIT` rows of `my_decks`.
    pub fn top_decks(&self) -> &[DeckStatRow] {
        let n = self.my_decks.len().min(DECK_TABLE_LIMIT);
        &self.my_decks[..n]
    }

    pub fn deck(&self, name: &str) -> Option<&DeckStatRow> {
        self.my_decks.iter().find(|d| d.name == name)
    }
}
