//! MatchRecord and its enumerated fields (mode, play order, result, deck pair).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a match record.
pub type MatchId = Uuid;

/// Sub-archetype label the record store uses for "no sub deck".
pub const NO_SUB_DECK: &str = "無";

/// Which ladder the match was played on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(alias = "ranked")]
    Ranked,
    #[serde(alias = "rating")]
    Rating,
    #[serde(rename = "DC", alias = "dc")]
    Dc,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Ranked => "Ranked",
            Mode::Rating => "Rating",
            Mode::Dc => "DC",
        }
    }

    /// Parse a mode label; blank input means the default (Ranked).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "" | "Ranked" | "ranked" => Some(Mode::Ranked),
            "Rating" | "rating" => Some(Mode::Rating),
            "DC" | "dc" => Some(Mode::Dc),
            _ => None,
        }
    }
}

/// Whether our side moved first or second.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum PlayOrder {
    #[serde(rename = "先攻", alias = "first", alias = "First")]
    First,
    #[serde(rename = "後攻", alias = "second", alias = "Second")]
    Second,
}

impl PlayOrder {
    pub fn label(self) -> &'static str {
        match self {
            PlayOrder::First => "先攻",
            PlayOrder::Second => "後攻",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "先攻" | "first" | "First" => Some(PlayOrder::First),
            "後攻" | "second" | "Second" => Some(PlayOrder::Second),
            _ => None,
        }
    }
}

/// Outcome of a match from our side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "W", alias = "win", alias = "Win")]
    Win,
    #[serde(rename = "L", alias = "loss", alias = "Loss")]
    Loss,
}

impl MatchResult {
    pub fn label(self) -> &'static str {
        match self {
            MatchResult::Win => "W",
            MatchResult::Loss => "L",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "W" | "win" | "Win" => Some(MatchResult::Win),
            "L" | "loss" | "Loss" => Some(MatchResult::Loss),
            _ => None,
        }
    }

    pub fn is_win(self) -> bool {
        self == MatchResult::Win
    }
}

/// A deck archetype pair: main archetype plus optional sub archetype.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub main: String,
    /// `None` covers both a missing sub deck and the store's "無" label.
    #[serde(default, deserialize_with = "deserialize_sub")]
    pub sub: Option<String>,
}

impl Deck {
    pub fn new(main: impl Into<String>, sub: Option<&str>) -> Self {
        Self {
            main: main.into(),
            sub: normalize_sub(sub),
        }
    }

    /// Main archetype only.
    pub fn main_only(main: impl Into<String>) -> Self {
        Self::new(main, None)
    }
}

/// Collapse "無", empty, and whitespace-only sub labels into `None`.
pub fn normalize_sub(sub: Option<&str>) -> Option<String> {
    let s = sub?.trim();
    if s.is_empty() || s == NO_SUB_DECK {
        None
    } else {
        Some(s.to_string())
    }
}

fn deserialize_sub<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_sub(raw.as_deref()))
}

/// One logged match. Owned by the record store; read-only input for aggregation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub date: NaiveDate,
    #[serde(default)]
    pub mode: Mode,
    /// Rank label (e.g. "金IV"); only meaningful in Ranked mode.
    #[serde(default)]
    pub rank: String,
    pub my_deck: Deck,
    pub opp_deck: Deck,
    pub play_order: PlayOrder,
    pub result: MatchResult,
    #[serde(default)]
    pub note: Option<String>,
    pub season_code: String,
}

impl MatchRecord {
    /// Minimal record with a fresh id; remaining fields can be set with the `with_*` helpers.
    pub fn new(
        date: NaiveDate,
        my_deck: Deck,
        opp_deck: Deck,
        play_order: PlayOrder,
        result: MatchResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            mode: Mode::Ranked,
            rank: String::new(),
            my_deck,
            opp_deck,
            play_order,
            result,
            note: None,
            season_code: String::new(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn with_season(mut self, season_code: impl Into<String>) -> Self {
        self.season_code = season_code.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }

    pub fn is_win(&self) -> bool {
        self.result.is_win()
    }
}
