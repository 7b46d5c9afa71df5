//! Write a CSV of randomly generated match records, for trying out the web server.
//! Run with: cargo run --bin seed -- data/matches.csv [count]

use chrono::{Days, NaiveDate};
use clap::Parser;
use duel_log_stats::{write_csv, Deck, MatchRecord, MatchResult, Mode, PlayOrder};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

const MY_DECKS: [(&str, &str); 5] = [
    ("天盃龍", "無"),
    ("閃刀姬", "無"),
    ("R-ACE", "無"),
    ("蛇眼", "炎王"),
    ("白銀城", "無"),
];

const OPP_DECKS: [&str; 8] = [
    "天盃龍", "閃刀姬", "R-ACE", "蛇眼", "白銀城", "神碑", "粛声", "宿神像",
];

const RANKS: [&str; 6] = ["銅V", "銀III", "金IV", "白金II", "鑽石I", "大師V"];

/// Season boundaries: (first day, code).
const SEASONS: [((i32, u32, u32), &str); 3] = [
    ((2025, 1, 1), "S46"),
    ((2025, 2, 1), "S47"),
    ((2025, 3, 1), "S48"),
];

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Generate random match records as CSV")]
struct Args {
    /// CSV file to write (parent directories are created)
    output: PathBuf,

    /// Number of records to generate
    #[arg(default_value_t = 500)]
    count: usize,
}

fn season_for(date: NaiveDate) -> &'static str {
    SEASONS
        .iter()
        .rev()
        .find(|((y, m, d), _)| NaiveDate::from_ymd_opt(*y, *m, *d).is_some_and(|start| date >= start))
        .map(|(_, code)| *code)
        .unwrap_or(SEASONS[0].1)
}

fn random_record(rng: &mut impl Rng, start: NaiveDate) -> Option<MatchRecord> {
    let (main, sub) = MY_DECKS.choose(rng)?;
    let opp = OPP_DECKS.choose(rng)?;
    let date = start.checked_add_days(Days::new(rng.gen_range(0..90)))?;
    let play_order = if rng.gen_bool(0.5) {
        PlayOrder::First
    } else {
        PlayOrder::Second
    };
    // Going first wins a little more often.
    let win_chance = match play_order {
        PlayOrder::First => 0.58,
        PlayOrder::Second => 0.46,
    };
    let result = if rng.gen_bool(win_chance) {
        MatchResult::Win
    } else {
        MatchResult::Loss
    };
    let mode = match rng.gen_range(0..10) {
        0 => Mode::Dc,
        1 | 2 => Mode::Rating,
        _ => Mode::Ranked,
    };
    let rank = if mode == Mode::Ranked {
        RANKS.choose(rng).copied().unwrap_or_default()
    } else {
        ""
    };
    Some(
        MatchRecord::new(date, Deck::new(*main, Some(*sub)), Deck::main_only(*opp), play_order, result)
            .with_mode(mode)
            .with_rank(rank)
            .with_season(season_for(date)),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let Args { output: path, count } = Args::parse();

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("invalid start date")?;
    let mut rng = rand::thread_rng();
    let mut records: Vec<MatchRecord> = (0..count)
        .filter_map(|_| random_record(&mut rng, start))
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    write_csv(&records, BufWriter::new(File::create(&path)?))?;
    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn count_defaults_to_500() {
        let args = Args::try_parse_from(["seed", "out.csv"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.csv"));
        assert_eq!(args.count, 500);
    }

    #[test]
    fn output_is_required_and_count_must_be_a_number() {
        assert!(Args::try_parse_from(["seed"]).is_err());
        assert!(Args::try_parse_from(["seed", "out.csv", "abc"]).is_err());
        assert_eq!(Args::try_parse_from(["seed", "out.csv", "20"]).unwrap().count, 20);
    }

    #[test]
    fn generated_records_land_in_their_season() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let r = random_record(&mut rng, start).unwrap();
            assert_eq!(r.season_code, season_for(r.date));
            assert_eq!(r.rank.is_empty(), r.mode != Mode::Ranked);
        }
    }
}
