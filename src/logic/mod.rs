//! Match tracker logic: aggregation, matchups, query scope, windowing, colour lookups, record sources.

mod aggregate;
mod filter;
mod matchups;
mod palette;
mod source;
mod window;

pub use aggregate::{compare_rows, compute_snapshot, resort_snapshot, sort_rows};
pub use filter::{filter_records, seasons, MatchQuery};
pub use matchups::compute_matchups;
pub use palette::{mode_colors, rank_colors, rank_tier, win_rate_class};
pub use source::{read_csv, write_csv, CsvRecordSource, RecordSource};
pub use window::{compute_visible_range, materialize};
