//! Records shared by every part of the engine.
//!
//! Cards, match history and battle outcomes are plain data: the persistence
//! layer hands them in and the engine hands new ones back.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Card power as stored, before any battle-time buff.
pub type Power = u32;

/// Card rarity tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Default for Rarity {
    fn default() -> Self {
        Rarity::Common
    }
}

/// Physical condition of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub enum Wear {
    Pristine,
    Mint,
    #[cfg_attr(feature = "std", serde(rename = "Lightly Played"))]
    LightlyPlayed,
    #[cfg_attr(feature = "std", serde(rename = "Moderately Played"))]
    ModeratelyPlayed,
    #[cfg_attr(feature = "std", serde(rename = "Heavily Played"))]
    HeavilyPlayed,
}

impl Default for Wear {
    fn default() -> Self {
        Wear::LightlyPlayed
    }
}

/// Foil finish of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub enum Foil {
    None,
    Standard,
    Prize,
}

impl Default for Foil {
    fn default() -> Self {
        Foil::None
    }
}

/// A card as the battle engine sees it.
///
/// `power` is the stored value. Collection buffs are applied when a hand is
/// scored and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Card {
    pub id: String,
    pub power: Power,
    #[cfg_attr(feature = "std", serde(default))]
    pub rarity: Rarity,
    #[cfg_attr(feature = "std", serde(default))]
    pub wear: Wear,
    #[cfg_attr(feature = "std", serde(default))]
    pub foil: Foil,
    #[cfg_attr(feature = "std", serde(default))]
    pub collection: String,
}

impl Card {
    pub fn new(id: &str, power: Power, collection: &str) -> Self {
        Self {
            id: id.into(),
            power,
            rarity: Rarity::default(),
            wear: Wear::default(),
            foil: Foil::default(),
            collection: collection.into(),
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_traits(mut self, rarity: Rarity, wear: Wear, foil: Foil) -> Self {
        self.rarity = rarity;
        self.wear = wear;
        self.foil = foil;
        self
    }
}

/// A field of an untyped upstream record, kept as found so validation can
/// judge it instead of the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    /// Null, booleans, arrays and objects
    Other,
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.into())
    }
}

/// A card record as it arrives from storage or NFT metadata.
///
/// Every field may be missing or malformed; [`crate::hand::validate_hand`]
/// reports the problems and [`RawCard::to_card`] normalizes what it can.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct RawCard {
    #[cfg_attr(feature = "std", serde(alias = "tokenId"))]
    pub id: Option<Scalar>,
    pub power: Option<Scalar>,
    pub rarity: Option<String>,
    pub wear: Option<String>,
    pub foil: Option<String>,
    pub collection: Option<String>,
}

impl RawCard {
    /// Card id. Empty strings and `0` count as missing; numeric token ids are
    /// rendered without a fraction.
    pub fn card_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Scalar::Text(id) if !id.is_empty() => Some(id.clone()),
            Scalar::Number(n) if n.is_finite() && *n != 0.0 => {
                let whole = *n as i64;
                if whole as f64 == *n {
                    Some(alloc::format!("{whole}"))
                } else {
                    Some(alloc::format!("{n}"))
                }
            }
            _ => None,
        }
    }

    /// Power, only if it is a real number. Numeric strings are not accepted.
    pub fn numeric_power(&self) -> Option<f64> {
        self.power
            .as_ref()
            .and_then(Scalar::as_number)
            .filter(|p| p.is_finite())
    }

    /// Normalize into a [`Card`]. Returns `None` when the id or power is unusable.
    pub fn to_card(&self) -> Option<Card> {
        self.card_id()?;
        self.numeric_power()?;
        Some(self.to_battle_card())
    }

    /// Total conversion used when scoring: unusable power counts as 0 and a
    /// missing id is left empty.
    pub fn to_battle_card(&self) -> Card {
        let power = self.numeric_power().unwrap_or(0.0);
        Card {
            id: self.card_id().unwrap_or_default(),
            power: power.max(0.0).min(Power::MAX as f64) as Power,
            rarity: crate::power::normalize_rarity(self.rarity.as_deref().unwrap_or_default()),
            wear: crate::power::normalize_wear(self.wear.as_deref().unwrap_or_default()),
            foil: crate::power::normalize_foil(self.foil.as_deref().unwrap_or_default()),
            collection: self.collection.clone().unwrap_or_default(),
        }
    }
}

/// AI opponent tiers, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Gey,
    Goofy,
    Gooner,
    Gangster,
    Gigachad,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Gey,
        Difficulty::Goofy,
        Difficulty::Gooner,
        Difficulty::Gangster,
        Difficulty::Gigachad,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Gey => "gey",
            Difficulty::Goofy => "goofy",
            Difficulty::Gooner => "gooner",
            Difficulty::Gangster => "gangster",
            Difficulty::Gigachad => "gigachad",
        }
    }
}

/// Returned when a difficulty string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError(pub String);

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {}", self.0)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError(s.into()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum MatchType {
    Pve,
    Pvp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum MatchResult {
    Win,
    Loss,
    Tie,
}

/// One finished match in a player's history. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct MatchRecord {
    #[cfg_attr(feature = "std", serde(rename = "type"))]
    pub match_type: MatchType,
    pub result: MatchResult,
    #[cfg_attr(feature = "std", serde(default, skip_serializing_if = "Option::is_none"))]
    pub difficulty: Option<Difficulty>,
    #[cfg_attr(feature = "std", serde(default, skip_serializing_if = "Option::is_none"))]
    pub player_power: Option<u64>,
    pub timestamp: u64,
}

impl MatchRecord {
    pub fn pve(result: MatchResult, difficulty: Difficulty, timestamp: u64) -> Self {
        Self {
            match_type: MatchType::Pve,
            result,
            difficulty: Some(difficulty),
            player_power: None,
            timestamp,
        }
    }

    pub fn pvp(result: MatchResult, timestamp: u64) -> Self {
        Self {
            match_type: MatchType::Pvp,
            result,
            difficulty: None,
            player_power: None,
            timestamp,
        }
    }

    pub fn with_player_power(mut self, power: u64) -> Self {
        self.player_power = Some(power);
        self
    }

    pub fn is_win(&self) -> bool {
        self.result == MatchResult::Win
    }
}

/// Which side took a battle or a single elimination round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

impl Winner {
    /// Strictly greater wins; equality is a tie.
    pub fn compare<T: Ord>(player: T, opponent: T) -> Self {
        match player.cmp(&opponent) {
            core::cmp::Ordering::Greater => Winner::Player,
            core::cmp::Ordering::Less => Winner::Opponent,
            core::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

#[cfg(feature = "std")]
mod lenient {
    use super::*;

    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("any value")
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Scalar, E> {
            Ok(Scalar::Other)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
            Ok(Scalar::Number(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
            Ok(Scalar::Number(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
            Ok(Scalar::Number(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
            Ok(Scalar::Text(v.into()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
            Ok(Scalar::Text(v))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
            Ok(Scalar::Other)
        }

        fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
            Ok(Scalar::Other)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Scalar, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Scalar, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Scalar::Other)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Scalar, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Scalar::Other)
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_any(ScalarVisitor)
        }
    }

    impl Serialize for Scalar {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            match self {
                Scalar::Number(n) => s.serialize_f64(*n),
                Scalar::Text(t) => s.serialize_str(t),
                Scalar::Other => s.serialize_unit(),
            }
        }
    }

    // Stored trait strings vary ("legendary", "Near Mint"); they go through
    // the same keyword match as raw metadata. Non-strings get the lowest tier.
    fn trait_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Scalar::deserialize(d)? {
            Scalar::Text(text) => text,
            _ => String::new(),
        })
    }

    impl<'de> Deserialize<'de> for Rarity {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            trait_text(d).map(|t| crate::power::normalize_rarity(&t))
        }
    }

    impl<'de> Deserialize<'de> for Wear {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            trait_text(d).map(|t| crate::power::normalize_wear(&t))
        }
    }

    impl<'de> Deserialize<'de> for Foil {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            trait_text(d).map(|t| crate::power::normalize_foil(&t))
        }
    }
}
