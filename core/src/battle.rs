use alloc::string::String;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::hand::strongest;
use crate::types::{Card, Power, Winner};

/// Battle-time multiplier a collection applies on top of stored power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionBuff {
    Times(u64),
    /// Half power, rounded down
    Half,
}

impl CollectionBuff {
    pub fn for_collection(collection: &str, leaderboard_attack: bool) -> Self {
        match collection {
            "vibefid" if leaderboard_attack => CollectionBuff::Times(10),
            "vibefid" => CollectionBuff::Times(5),
            "vibe" => CollectionBuff::Times(2),
            "nothing" => CollectionBuff::Half,
            _ => CollectionBuff::Times(1),
        }
    }

    pub fn apply(self, power: Power) -> u64 {
        match self {
            CollectionBuff::Times(n) => u64::from(power) * n,
            CollectionBuff::Half => u64::from(power) / 2,
        }
    }
}

/// Power of a single card in battle, collection buff included.
pub fn display_power(card: &Card, leaderboard_attack: bool) -> u64 {
    CollectionBuff::for_collection(&card.collection, leaderboard_attack).apply(card.power)
}

/// Sum of buffed card powers.
pub fn calc_battle_power(hand: &[Card]) -> u64 {
    hand.iter().map(|card| display_power(card, false)).sum()
}

/// Aggregate result of a full-hand battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct BattleOutcome {
    pub player_power: u64,
    pub opponent_power: u64,
    pub winner: Winner,
    pub power_difference: u64,
}

// ==========================================
// MAIN BATTLE RESOLVER
// ==========================================

pub fn resolve_battle(player_hand: &[Card], opponent_hand: &[Card]) -> BattleOutcome {
    let player_power = calc_battle_power(player_hand);
    let opponent_power = calc_battle_power(opponent_hand);

    BattleOutcome {
        player_power,
        opponent_power,
        winner: Winner::compare(player_power, opponent_power),
        power_difference: player_power.abs_diff(opponent_power),
    }
}

/// One position-paired duel of elimination mode.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct EliminationRound {
    /// 1-based
    pub round: u32,
    pub player_card_id: String,
    pub opponent_card_id: String,
    pub player_power: Power,
    pub opponent_power: Power,
    pub winner: Winner,
}

/// Pairs the hands by position, up to the shorter one. Rounds compare stored
/// power only; collection buffs do not apply at this granularity.
pub fn resolve_elimination(player_hand: &[Card], opponent_hand: &[Card]) -> Vec<EliminationRound> {
    player_hand
        .iter()
        .zip(opponent_hand)
        .enumerate()
        .map(|(i, (player, opponent))| EliminationRound {
            round: i as u32 + 1,
            player_card_id: player.id.clone(),
            opponent_card_id: opponent.id.clone(),
            player_power: player.power,
            opponent_power: opponent.power,
            winner: Winner::compare(player.power, opponent.power),
        })
        .collect()
}

/// Whoever took more rounds; equal counts are a tie.
pub fn elimination_winner(rounds: &[EliminationRound]) -> Winner {
    let player = rounds.iter().filter(|r| r.winner == Winner::Player).count();
    let opponent = rounds.iter().filter(|r| r.winner == Winner::Opponent).count();
    Winner::compare(player, opponent)
}

/// Logistic estimate of the player's chance to win, in `[0, 1]`.
///
/// `1 / (1 + e^(-5 * (ratio - 1)))` with `ratio = player / opponent`; exactly
/// `1.0` when the opponent has no power.
#[cfg(feature = "std")]
pub fn win_probability(player_power: u64, opponent_power: u64) -> f64 {
    if opponent_power == 0 {
        return 1.0;
    }
    let ratio = player_power as f64 / opponent_power as f64;
    1.0 / (1.0 + (-5.0 * (ratio - 1.0)).exp())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Suggested hand against a known target power.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Recommendation {
    pub recommended: Vec<Card>,
    pub total_power: u64,
    pub confidence: Confidence,
}

/// Strongest `hand_size` cards by stored power, rated against `target_power`.
pub fn battle_recommendation(pool: &[Card], target_power: u64, hand_size: usize) -> Recommendation {
    let recommended = strongest(pool, hand_size);
    let total_power: u64 = recommended.iter().map(|c| u64::from(c.power)).sum();

    // ratio >= 1.2 is high, >= 1.0 medium; a zero target is always beaten
    let (total, target) = (u128::from(total_power), u128::from(target_power));
    let confidence = if target == 0 || total * 5 >= target * 6 {
        Confidence::High
    } else if total >= target {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    Recommendation {
        recommended,
        total_power,
        confidence,
    }
}
