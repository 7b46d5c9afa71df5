//! Snapshot aggregation: global totals, play-order splits, and ranked per-deck rows.

use crate::models::{
    rate, DeckStatRow, MatchRecord, PlayOrder, RankedRow, SortKey, StatsSnapshot,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Running win/loss counts for one bucket of records.
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    first_wins: u32,
    first_losses: u32,
    second_wins: u32,
    second_losses: u32,
}

impl Tally {
    fn add(&mut self, record: &MatchRecord) {
        match (record.play_order, record.is_win()) {
            (PlayOrder::First, true) => self.first_wins += 1,
            (PlayOrder::First, false) => self.first_losses += 1,
            (PlayOrder::Second, true) => self.second_wins += 1,
            (PlayOrder::Second, false) => self.second_losses += 1,
        }
    }

    fn wins(&self) -> u32 {
        self.first_wins + self.second_wins
    }

    fn losses(&self) -> u32 {
        self.first_losses + self.second_losses
    }

    fn first_games(&self) -> u32 {
        self.first_wins + self.first_losses
    }

    fn second_games(&self) -> u32 {
        self.second_wins + self.second_losses
    }

    fn games(&self) -> u32 {
        self.first_games() + self.second_games()
    }

    fn into_row(self, name: String) -> DeckStatRow {
        let games = self.games();
        let first_games = self.first_games();
        let second_games = self.second_games();
        DeckStatRow {
            name,
            games,
            wins: self.wins(),
            losses: self.losses(),
            win_rate: rate(self.wins(), games),
            first_games,
            first_wins: self.first_wins,
            first_losses: self.first_losses,
            first_win_rate: rate(self.first_wins, first_games),
            first_rate: rate(first_games, games),
            second_games,
            second_wins: self.second_wins,
            second_losses: self.second_losses,
            second_win_rate: rate(self.second_wins, second_games),
        }
    }
}

/// Three-level ordering: the `key` metric descending, the other metric descending, name ascending.
pub fn compare_rows<T: RankedRow>(a: &T, b: &T, key: SortKey) -> Ordering {
    let by_games = b.games().cmp(&a.games());
    let by_rate = b.win_rate().total_cmp(&a.win_rate());
    let (primary, secondary) = match key {
        SortKey::Games => (by_games, by_rate),
        SortKey::WinRate => (by_rate, by_games),
    };
    primary
        .then(secondary)
        .then_with(|| a.name().cmp(b.name()))
}

/// Sort rows in place with [`compare_rows`].
pub fn sort_rows<T: RankedRow>(rows: &mut [T], key: SortKey) {
    rows.sort_by(|a, b| compare_rows(a, b, key));
}

/// Build a fresh snapshot from a record set in one pass.
///
/// Empty input yields an all-zero snapshot. Every record lands in exactly one deck bucket
/// (its `my_deck.main`, blank names included), so the deck rows' games sum to `total`.
pub fn compute_snapshot(records: &[MatchRecord], deck_sort: SortKey) -> StatsSnapshot {
    let mut overall = Tally::default();
    let mut by_deck: HashMap<&str, Tally> = HashMap::new();

    for record in records {
        overall.add(record);
        by_deck
            .entry(record.my_deck.main.as_str())
            .or_default()
            .add(record);
    }

    let mut my_decks: Vec<DeckStatRow> = by_deck
        .into_iter()
        .map(|(name, tally)| tally.into_row(name.to_string()))
        .collect();
    sort_rows(&mut my_decks, deck_sort);

    let total = overall.games();
    log::debug!(
        "Computed snapshot over {} records ({} decks, sorted by {:?})",
        total,
        my_decks.len(),
        deck_sort
    );

    StatsSnapshot {
        total,
        wins: overall.wins(),
        losses: overall.losses(),
        win_rate: rate(overall.wins(), total),
        first_count: overall.first_games(),
        second_count: overall.second_games(),
        first_wins: overall.first_wins,
        second_wins: overall.second_wins,
        first_rate: rate(overall.first_games(), total),
        first_win_rate: rate(overall.first_wins, overall.first_games()),
        second_win_rate: rate(overall.second_wins, overall.second_games()),
        deck_sort,
        my_decks,
    }
}

/// Re-rank an existing snapshot's deck rows under a different key, leaving the counts untouched.
pub fn resort_snapshot(snapshot: &StatsSnapshot, deck_sort: SortKey) -> StatsSnapshot {
    let mut next = snapshot.clone();
    sort_rows(&mut next.my_decks, deck_sort);
    next.deck_sort = deck_sort;
    next
}
