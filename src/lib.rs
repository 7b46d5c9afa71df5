//! Match history tracker core: win-rate aggregation over match records and windowed table rendering.

pub mod logic;
pub mod models;

pub use logic::{
    compare_rows, compute_matchups, compute_snapshot, compute_visible_range, filter_records,
    materialize, mode_colors, rank_colors, rank_tier, read_csv, resort_snapshot, seasons,
    sort_rows, win_rate_class, write_csv, CsvRecordSource, MatchQuery, RecordSource,
};
pub use models::{
    normalize_sub, rate, Deck, DeckPalette, DeckStatRow, DeckTemplate, DeckTheme, MatchId,
    MatchRecord, MatchResult, MatchupRow, Mode, PlayOrder, RankTier, RankedRow, Scheme, SortKey,
    StatsError, StatsSnapshot, ThemeColors, VirtualRow, VisibleRange, WindowState,
    DECK_TABLE_LIMIT, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, NO_SUB_DECK, UNKNOWN_DECK,
};
