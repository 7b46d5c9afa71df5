//! Colour lookups for rank and mode chips.

use crate::models::{Mode, RankTier, Scheme};

// Longer prefixes first: "白金" must not be read as anything else.
const RANK_PREFIXES: [(&str, RankTier); 6] = [
    ("白金", RankTier::Platinum),
    ("鑽石", RankTier::Diamond),
    ("大師", RankTier::Master),
    ("銅", RankTier::Bronze),
    ("銀", RankTier::Silver),
    ("金", RankTier::Gold),
];

/// Tier of a rank label such as "金IV" or "大師V". Unrecognised labels are `Unranked`.
pub fn rank_tier(rank: &str) -> RankTier {
    let rank = rank.trim();
    RANK_PREFIXES
        .iter()
        .find(|(prefix, _)| rank.starts_with(prefix))
        .map(|&(_, tier)| tier)
        .unwrap_or(RankTier::Unranked)
}

/// CSS classes for a rank chip.
pub fn rank_colors(rank: &str, scheme: Scheme) -> &'static str {
    use RankTier::*;
    match (rank_tier(rank), scheme) {
        (Bronze, Scheme::Dark) => "bg-amber-700/30 text-amber-500",
        (Bronze, Scheme::Light) => "bg-amber-700/20 text-amber-800 border border-amber-600",
        (Silver, Scheme::Dark) => "bg-gray-400/20 text-gray-300",
        (Silver, Scheme::Light) => "bg-gray-200 text-gray-700 border border-gray-400",
        (Gold, Scheme::Dark) => "bg-yellow-500/20 text-yellow-400",
        (Gold, Scheme::Light) => "bg-yellow-100 text-yellow-700 border border-yellow-400",
        (Platinum, Scheme::Dark) => "bg-cyan-500/20 text-cyan-300",
        (Platinum, Scheme::Light) => "bg-cyan-100 text-cyan-700 border border-cyan-400",
        (Diamond, Scheme::Dark) => "bg-pink-500/20 text-pink-400",
        (Diamond, Scheme::Light) => "bg-pink-100 text-pink-700 border border-pink-400",
        (Master, Scheme::Dark) => "bg-orange-500/20 text-orange-400",
        (Master, Scheme::Light) => "bg-orange-100 text-orange-700 border border-orange-400",
        (Unranked, Scheme::Dark) => "bg-gray-500/20 text-gray-400",
        (Unranked, Scheme::Light) => "bg-gray-100 text-gray-600 border border-gray-300",
    }
}

/// CSS classes for a mode chip. Ranked games show their rank chip instead, so Ranked is muted.
pub fn mode_colors(mode: Mode, scheme: Scheme) -> &'static str {
    match (mode, scheme) {
        (Mode::Dc, Scheme::Dark) => "bg-fuchsia-500/20 text-fuchsia-300",
        (Mode::Dc, Scheme::Light) => "bg-fuchsia-100 text-fuchsia-700 border border-fuchsia-300",
        (Mode::Rating, Scheme::Dark) => "bg-emerald-500/20 text-emerald-300",
        (Mode::Rating, Scheme::Light) => "bg-emerald-100 text-emerald-700 border border-emerald-300",
        (Mode::Ranked, Scheme::Dark) => "bg-white/5 text-gray-400",
        (Mode::Ranked, Scheme::Light) => "bg-gray-100 text-gray-600 border border-gray-200",
    }
}

/// Win-rate cells are green at or above even, red below.
pub fn win_rate_class(win_rate: f64) -> &'static str {
    if win_rate >= 50.0 {
        "text-green-500"
    } else {
        "text-red-500"
    }
}
