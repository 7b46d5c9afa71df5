//! Integration tests for the matchup breakdown of a selected deck.

use chrono::NaiveDate;
use duel_log_stats::{compute_matchups, Deck, MatchRecord, MatchResult, PlayOrder, SortKey, UNKNOWN_DECK};

fn record(my: &str, opp: &str, result: MatchResult) -> MatchRecord {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    MatchRecord::new(date, Deck::main_only(my), Deck::main_only(opp), PlayOrder::First, result)
}

fn sample() -> Vec<MatchRecord> {
    vec![
        record("A", "X", MatchResult::Win),
        record("A", "X", MatchResult::Loss),
        record("A", "Y", MatchResult::Win),
        record("A", "", MatchResult::Loss),
        record("B", "Z", MatchResult::Win),
        record("B", "X", MatchResult::Win),
    ]
}

#[test]
fn no_selection_is_empty() {
    assert!(compute_matchups(&sample(), None, SortKey::Games).is_empty());
}

#[test]
fn unplayed_deck_is_empty() {
    assert!(compute_matchups(&sample(), Some("Nope"), SortKey::Games).is_empty());
}

#[test]
fn only_records_of_selected_deck_count() {
    let rows = compute_matchups(&sample(), Some("A"), SortKey::Games);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    // X: 2 games; Y: 1 game 100%; unknown: 1 game 0%
    assert_eq!(names, ["X", "Y", UNKNOWN_DECK]);
    assert!(rows.iter().all(|r| r.name != "Z"));

    let x = &rows[0];
    assert_eq!((x.games, x.wins, x.losses), (2, 1, 1));
    assert_eq!(x.win_rate, 50.0);
    assert_eq!(rows.iter().map(|r| r.games).sum::<u32>(), 4);
}

#[test]
fn win_rate_sort() {
    let rows = compute_matchups(&sample(), Some("A"), SortKey::WinRate);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Y", "X", UNKNOWN_DECK]);
}

#[test]
fn equal_rows_order_by_name() {
    let records = vec![
        record("A", "Q", MatchResult::Win),
        record("A", "P", MatchResult::Win),
        record("A", "R", MatchResult::Win),
    ];
    for key in [SortKey::Games, SortKey::WinRate] {
        let rows = compute_matchups(&records, Some("A"), key);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["P", "Q", "R"]);
    }
}
