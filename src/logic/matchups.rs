//! Matchup breakdown: how one own deck fared against each opponent deck.

use crate::logic::aggregate::sort_rows;
use crate::models::{rate, MatchRecord, MatchupRow, SortKey, UNKNOWN_DECK};
use std::collections::HashMap;

/// Rows for every opponent deck faced by `selected_deck`, ranked by `sort`.
///
/// No selection, or a deck with no records, gives an empty list. Opponents with a blank
/// main deck are grouped under [`UNKNOWN_DECK`].
pub fn compute_matchups(
    records: &[MatchRecord],
    selected_deck: Option<&str>,
    sort: SortKey,
) -> Vec<MatchupRow> {
    let Some(deck) = selected_deck else {
        return Vec::new();
    };

    let mut by_opponent: HashMap<&str, (u32, u32)> = HashMap::new();
    for record in records.iter().filter(|r| r.my_deck.main == deck) {
        let opponent = match record.opp_deck.main.trim() {
            "" => UNKNOWN_DECK,
            _ => record.opp_deck.main.as_str(),
        };
        let entry = by_opponent.entry(opponent).or_default();
        if record.is_win() {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let mut rows: Vec<MatchupRow> = by_opponent
        .into_iter()
        .map(|(name, (wins, losses))| {
            let games = wins + losses;
            MatchupRow {
                name: name.to_string(),
                games,
                wins,
                losses,
                win_rate: rate(wins, games),
            }
        })
        .collect();
    sort_rows(&mut rows, sort);

    log::debug!("Computed {} matchup rows for deck '{}'", rows.len(), deck);
    rows
}
