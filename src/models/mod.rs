//! Data structures for the match tracker: records, derived statistics, window state, colour tables.

mod error;
mod palette;
mod record;
mod stats;
mod window;

pub use error::StatsError;
pub use palette::{DeckPalette, DeckTemplate, DeckTheme, RankTier, Scheme, ThemeColors};
pub use record::{normalize_sub, Deck, MatchId, MatchRecord, MatchResult, Mode, PlayOrder, NO_SUB_DECK};
pub use stats::{
    rate, DeckStatRow, MatchupRow, RankedRow, SortKey, StatsSnapshot, DECK_TABLE_LIMIT, UNKNOWN_DECK,
};
pub use window::{VirtualRow, VisibleRange, WindowState, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT};
