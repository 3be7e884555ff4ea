//! Hand validation and card collection summaries.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, HandError};
use crate::types::{Card, Power, RawCard};

/// Number of cards in a battle hand
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct HandValidation {
    pub is_valid: bool,
    pub errors: Vec<HandError>,
}

/// Check a candidate hand: exactly `required_count` cards, each with an id and
/// a numeric power. Every violation is reported.
pub fn validate_hand(cards: &[RawCard], required_count: usize) -> HandValidation {
    let mut errors = Vec::new();

    if cards.len() != required_count {
        errors.push(HandError::WrongCardCount {
            expected: required_count as u32,
            actual: cards.len() as u32,
        });
    }

    for (index, card) in cards.iter().enumerate() {
        let index = index as u32;
        if card.card_id().is_none() {
            errors.push(HandError::MissingId { index });
        }
        if card.numeric_power().is_none() {
            errors.push(HandError::InvalidPower { index });
        }
    }

    HandValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// The `count` highest-power cards, strongest first. Ties keep pool order.
pub fn strongest(cards: &[Card], count: usize) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.power.cmp(&a.power));
    sorted.truncate(count);
    sorted
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CardStats {
    pub total_power: u64,
    /// Rounded to the nearest integer
    pub avg_power: u64,
    pub max_power: Power,
    pub min_power: Power,
    pub count: u32,
}

pub fn card_stats(cards: &[Card]) -> CardStats {
    if cards.is_empty() {
        return CardStats::default();
    }

    let total_power: u64 = cards.iter().map(|c| u64::from(c.power)).sum();
    let count = cards.len() as u64;

    CardStats {
        total_power,
        avg_power: (total_power + count / 2) / count,
        max_power: cards.iter().map(|c| c.power).max().unwrap_or_default(),
        min_power: cards.iter().map(|c| c.power).min().unwrap_or_default(),
        count: count as u32,
    }
}

/// Stored power summed per collection family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct CollectionPower {
    pub vibe_power: u64,
    pub vbrs_power: u64,
    pub vibefid_power: u64,
}

pub fn power_by_collection(cards: &[Card]) -> CollectionPower {
    cards.iter().fold(CollectionPower::default(), |mut acc, card| {
        let power = u64::from(card.power);
        match card.collection.to_lowercase().as_str() {
            "gmvbrs" => acc.vbrs_power += power,
            "vibefid" => acc.vibefid_power += power,
            // vibe, custom and anything unrecognised
            _ => acc.vibe_power += power,
        }
        acc
    })
}

// ==========================================
// TCG DECKS
// ==========================================

pub const TCG_DECK_SIZE: usize = 12;
/// Minimum VBMS plus VibeFID cards in a deck
pub const TCG_MIN_VBMS: usize = 5;
/// Maximum Nothing plus Other cards in a deck
pub const TCG_MAX_NOTHING: usize = 7;

/// Where a TCG card comes from. Nothing and Other cards fight at half power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum DeckCardType {
    Vbms,
    Vibefid,
    Nothing,
    Other,
}

impl DeckCardType {
    pub const fn is_half_power(self) -> bool {
        matches!(self, DeckCardType::Nothing | DeckCardType::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct DeckCard {
    /// Untyped cards play at full power and count toward neither limit
    #[cfg_attr(feature = "std", serde(rename = "type", default))]
    pub card_type: Option<DeckCardType>,
    #[cfg_attr(feature = "std", serde(default))]
    pub card_id: String,
    pub power: Power,
}

impl DeckCard {
    pub fn new(card_id: &str, card_type: DeckCardType, power: Power) -> Self {
        Self {
            card_type: Some(card_type),
            card_id: card_id.into(),
            power,
        }
    }

    /// Power in a lane: halved and rounded down for Nothing and Other cards.
    pub fn lane_power(&self) -> u64 {
        let power = u64::from(self.power);
        match self.card_type {
            Some(t) if t.is_half_power() => power / 2,
            _ => power,
        }
    }
}

fn count_types(cards: &[DeckCard], pred: impl Fn(DeckCardType) -> bool) -> usize {
    cards
        .iter()
        .filter(|c| c.card_type.map_or(false, &pred))
        .count()
}

/// Sum of lane powers.
pub fn lane_power(cards: &[DeckCard]) -> u64 {
    cards.iter().map(DeckCard::lane_power).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct DeckValidation {
    pub is_valid: bool,
    pub errors: Vec<DeckError>,
    pub total_power: u64,
}

/// Check a TCG deck: exactly [`TCG_DECK_SIZE`] cards, at least
/// [`TCG_MIN_VBMS`] VBMS/VibeFID, at most [`TCG_MAX_NOTHING`] Nothing/Other.
/// The total power is reported even for an invalid deck.
pub fn validate_deck(cards: &[DeckCard]) -> DeckValidation {
    let mut errors = Vec::new();

    if cards.len() != TCG_DECK_SIZE {
        errors.push(DeckError::WrongSize {
            expected: TCG_DECK_SIZE as u32,
            actual: cards.len() as u32,
        });
    }

    let vbms = count_types(cards, |t| matches!(t, DeckCardType::Vbms | DeckCardType::Vibefid));
    if vbms < TCG_MIN_VBMS {
        errors.push(DeckError::TooFewVbms {
            min: TCG_MIN_VBMS as u32,
            actual: vbms as u32,
        });
    }

    let half_power = count_types(cards, DeckCardType::is_half_power);
    if half_power > TCG_MAX_NOTHING {
        errors.push(DeckError::TooManyNothing {
            max: TCG_MAX_NOTHING as u32,
            actual: half_power as u32,
        });
    }

    DeckValidation {
        is_valid: errors.is_empty(),
        errors,
        total_power: lane_power(cards),
    }
}
