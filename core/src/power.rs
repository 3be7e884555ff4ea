//! Card power model
//!
//! Turns free-form trait strings into tiers and tiers into a power value.
//! Each collection may carry its own multiplier table; collections without
//! one fall back to [`DEFAULT_POWER_TABLE`].

use crate::types::{Card, Foil, Power, Rarity, Wear};

#[cfg(feature = "std")]
use serde::Serialize;

/// Collection id of the VibeFID cards.
pub const VIBEFID_COLLECTION: &str = "vibefid";

/// Base value per rarity and multipliers per wear and foil tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerTable {
    pub common: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
    pub mythic: f64,
    pub pristine: f64,
    pub mint: f64,
    pub played: f64,
    pub foil_none: f64,
    pub foil_standard: f64,
    pub foil_prize: f64,
}

impl PowerTable {
    pub const fn base(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythic => self.mythic,
        }
    }

    pub const fn wear_multiplier(&self, wear: Wear) -> f64 {
        match wear {
            Wear::Pristine => self.pristine,
            Wear::Mint => self.mint,
            Wear::LightlyPlayed | Wear::ModeratelyPlayed | Wear::HeavilyPlayed => self.played,
        }
    }

    pub const fn foil_multiplier(&self, foil: Foil) -> f64 {
        match foil {
            Foil::None => self.foil_none,
            Foil::Standard => self.foil_standard,
            Foil::Prize => self.foil_prize,
        }
    }
}

pub const DEFAULT_POWER_TABLE: PowerTable = PowerTable {
    common: 5.0,
    rare: 20.0,
    epic: 80.0,
    legendary: 240.0,
    mythic: 800.0,
    pristine: 1.8,
    mint: 1.4,
    played: 1.0,
    foil_none: 1.0,
    foil_standard: 2.5,
    foil_prize: 15.0,
};

pub const VIBEFID_POWER_TABLE: PowerTable = PowerTable {
    common: 10.0,
    rare: 20.0,
    epic: 50.0,
    legendary: 100.0,
    mythic: 600.0,
    pristine: 1.8,
    mint: 1.4,
    played: 1.0,
    foil_none: 1.0,
    foil_standard: 2.0,
    foil_prize: 6.0,
};

/// Collections with their own table. Anything else uses the default.
const COLLECTION_TABLES: &[(&str, &PowerTable)] = &[(VIBEFID_COLLECTION, &VIBEFID_POWER_TABLE)];

/// Multiplier table for a collection id.
pub fn power_table(collection: &str) -> &'static PowerTable {
    COLLECTION_TABLES
        .iter()
        .find(|(id, _)| *id == collection)
        .map(|(_, table)| *table)
        .unwrap_or(&DEFAULT_POWER_TABLE)
}

// Keyword lists are checked top to bottom; the first hit wins.
const RARITY_KEYWORDS: &[(&str, Rarity)] = &[
    ("mythic", Rarity::Mythic),
    ("legend", Rarity::Legendary),
    ("epic", Rarity::Epic),
    ("rare", Rarity::Rare),
    ("common", Rarity::Common),
];

const WEAR_KEYWORDS: &[(&str, Wear)] = &[
    ("pristine", Wear::Pristine),
    ("mint", Wear::Mint),
    ("light", Wear::LightlyPlayed),
    ("moderate", Wear::ModeratelyPlayed),
    ("heav", Wear::HeavilyPlayed),
];

const FOIL_KEYWORDS: &[(&str, Foil)] = &[("prize", Foil::Prize), ("standard", Foil::Standard)];

fn match_keyword<T: Copy>(raw: &str, keywords: &[(&str, T)], fallback: T) -> T {
    let lowered = raw.to_lowercase();
    keywords
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, tier)| *tier)
        .unwrap_or(fallback)
}

/// Case-insensitive keyword match; unknown input is `Common`.
pub fn normalize_rarity(raw: &str) -> Rarity {
    match_keyword(raw, RARITY_KEYWORDS, Rarity::Common)
}

/// Case-insensitive keyword match; unknown input is `LightlyPlayed`.
pub fn normalize_wear(raw: &str) -> Wear {
    match_keyword(raw, WEAR_KEYWORDS, Wear::LightlyPlayed)
}

/// Case-insensitive keyword match; unknown input is `None`.
pub fn normalize_foil(raw: &str) -> Foil {
    match_keyword(raw, FOIL_KEYWORDS, Foil::None)
}

/// Rounds halves toward positive infinity, matching the rounding the stored
/// balances were produced with (`-6.5` rounds to `-6`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    floor(value + 0.5)
}

// `f64::floor` lives in std; truncation is exact for the magnitudes used here.
fn floor(value: f64) -> f64 {
    let truncated = value as i64 as f64;
    if truncated > value {
        truncated - 1.0
    } else {
        truncated
    }
}

/// Power of a card with the given traits, never below 1.
pub fn calculate_power(rarity: Rarity, wear: Wear, foil: Foil, collection: &str) -> Power {
    calculate_power_detailed(rarity, wear, foil, collection).power
}

/// Power together with the factors that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct PowerBreakdown {
    pub power: Power,
    pub base_value: f64,
    pub wear_multiplier: f64,
    pub foil_multiplier: f64,
}

pub fn calculate_power_detailed(
    rarity: Rarity,
    wear: Wear,
    foil: Foil,
    collection: &str,
) -> PowerBreakdown {
    let table = power_table(collection);
    let base_value = table.base(rarity);
    let wear_multiplier = table.wear_multiplier(wear);
    let foil_multiplier = table.foil_multiplier(foil);
    let raw = round_half_up(base_value * wear_multiplier * foil_multiplier);

    PowerBreakdown {
        power: raw.max(1.0).min(Power::MAX as f64) as Power,
        base_value,
        wear_multiplier,
        foil_multiplier,
    }
}

/// Recompute a card's stored power from its traits.
pub fn recalculate(card: &Card) -> Card {
    Card {
        power: calculate_power(card.rarity, card.wear, card.foil, &card.collection),
        ..card.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-6.5), -6.0);
        assert_eq!(round_half_up(-6.6), -7.0);
    }

    #[test]
    fn test_unknown_collection_uses_default_table() {
        assert_eq!(power_table("gmvbrs"), &DEFAULT_POWER_TABLE);
        assert_eq!(power_table(""), &DEFAULT_POWER_TABLE);
        assert_eq!(power_table(VIBEFID_COLLECTION), &VIBEFID_POWER_TABLE);
    }
}
