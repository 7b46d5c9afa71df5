//! Integration tests for query scoping ahead of aggregation.

use chrono::NaiveDate;
use duel_log_stats::{
    compute_snapshot, filter_records, seasons, Deck, MatchQuery, MatchRecord, MatchResult, Mode,
    PlayOrder, SortKey,
};

fn record(season: &str, mode: Mode, result: MatchResult) -> MatchRecord {
    let date = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    MatchRecord::new(date, Deck::main_only("A"), Deck::main_only("B"), PlayOrder::First, result)
        .with_season(season)
        .with_mode(mode)
}

fn sample() -> Vec<MatchRecord> {
    vec![
        record("S47", Mode::Ranked, MatchResult::Win),
        record("S48", Mode::Ranked, MatchResult::Loss),
        record("S48", Mode::Rating, MatchResult::Win),
        record("S48", Mode::Dc, MatchResult::Win),
    ]
}

#[test]
fn empty_query_keeps_everything() {
    let records = sample();
    let q = MatchQuery::default();
    assert!(q.is_empty());
    assert_eq!(filter_records(&records, &q), records);
}

#[test]
fn season_and_mode_narrow_the_set() {
    let records = sample();
    assert_eq!(filter_records(&records, &MatchQuery::season("S48")).len(), 3);

    let q = MatchQuery::season("S48").with_mode(Mode::Ranked);
    let scoped = filter_records(&records, &q);
    assert_eq!(scoped.len(), 1);
    let s = compute_snapshot(&scoped, SortKey::Games);
    assert_eq!((s.total, s.wins, s.losses), (1, 0, 1));
}

#[test]
fn seasons_are_distinct_and_sorted() {
    assert_eq!(seasons(&sample()), ["S47", "S48"]);
    assert!(seasons(&[]).is_empty());
}
