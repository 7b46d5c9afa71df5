//! Colour tables for deck, rank, and mode labels. Passed to the renderer explicitly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Background and text CSS classes for a label chip.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
}

/// Card-frame theme a deck template is tagged with.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DeckTheme {
    #[serde(rename = "融合")]
    Fusion,
    #[serde(rename = "超量")]
    Xyz,
    #[serde(rename = "連結")]
    Link,
    #[serde(rename = "同步")]
    Synchro,
    #[serde(rename = "陷阱")]
    Trap,
    #[serde(rename = "魔法")]
    Spell,
    #[serde(rename = "輔助")]
    Support,
    #[serde(rename = "儀式")]
    Ritual,
    #[serde(rename = "鐘擺")]
    Pendulum,
    #[default]
    #[serde(rename = "無")]
    Unthemed,
}

impl DeckTheme {
    pub const ALL: [DeckTheme; 10] = [
        DeckTheme::Fusion,
        DeckTheme::Xyz,
        DeckTheme::Link,
        DeckTheme::Synchro,
        DeckTheme::Trap,
        DeckTheme::Spell,
        DeckTheme::Support,
        DeckTheme::Ritual,
        DeckTheme::Pendulum,
        DeckTheme::Unthemed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeckTheme::Fusion => "融合",
            DeckTheme::Xyz => "超量",
            DeckTheme::Link => "連結",
            DeckTheme::Synchro => "同步",
            DeckTheme::Trap => "陷阱",
            DeckTheme::Spell => "魔法",
            DeckTheme::Support => "輔助",
            DeckTheme::Ritual => "儀式",
            DeckTheme::Pendulum => "鐘擺",
            DeckTheme::Unthemed => "無",
        }
    }

    /// Unrecognised labels map to `Unthemed`.
    pub fn from_label(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .unwrap_or_default()
    }

    pub fn colors(self) -> ThemeColors {
        let (bg, text) = match self {
            DeckTheme::Fusion => ("bg-purple-500", "text-white"),
            DeckTheme::Xyz => ("bg-gray-900", "text-white"),
            DeckTheme::Link => ("bg-blue-700", "text-white"),
            DeckTheme::Synchro => ("bg-gray-200", "text-gray-800"),
            DeckTheme::Trap => ("bg-red-600", "text-white"),
            DeckTheme::Spell => ("bg-emerald-600", "text-white"),
            DeckTheme::Support => ("bg-amber-700", "text-white"),
            DeckTheme::Ritual => ("bg-blue-500", "text-white"),
            DeckTheme::Pendulum => ("bg-teal-500", "text-white"),
            DeckTheme::Unthemed => ("bg-gray-500", "text-white"),
        };
        ThemeColors { bg, text }
    }
}

/// A deck template as the record store lists it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DeckTemplate {
    pub name: String,
    #[serde(default)]
    pub theme: DeckTheme,
}

/// Deck name to theme lookup, built once from the deck templates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckPalette {
    themes: HashMap<String, DeckTheme>,
}

impl DeckPalette {
    pub fn from_templates<'a>(templates: impl IntoIterator<Item = &'a DeckTemplate>) -> Self {
        let themes = templates
            .into_iter()
            .map(|t| (t.name.clone(), t.theme))
            .collect();
        Self { themes }
    }

    pub fn insert(&mut self, name: impl Into<String>, theme: DeckTheme) {
        self.themes.insert(name.into(), theme);
    }

    /// Theme for a deck name; unknown decks get the neutral theme.
    pub fn theme(&self, deck_name: &str) -> DeckTheme {
        self.themes.get(deck_name).copied().unwrap_or_default()
    }

    pub fn colors(&self, deck_name: &str) -> ThemeColors {
        self.theme(deck_name).colors()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Ladder tier derived from the leading characters of a rank label (e.g. "鑽石III").
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Unranked,
}

/// Light or dark UI scheme.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}
