#![cfg_attr(not(feature = "std"), no_std)]

//! Rules core for Vibe Most Wanted: card power, battles, rewards, quest
//! progress and on-chain settlement checks.
//!
//! Every function is pure. The host loads records, calls in, and persists
//! whatever comes back.

extern crate alloc;

pub mod battle;
pub mod config;
pub mod economy;
pub mod error;
pub mod hand;
pub mod opponents;
pub mod power;
pub mod quests;
pub mod rng;
pub mod settlement;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

pub use battle::{
    battle_recommendation, calc_battle_power, display_power, elimination_winner,
    resolve_battle, resolve_elimination, BattleOutcome, Confidence, EliminationRound,
    Recommendation,
};
#[cfg(feature = "std")]
pub use battle::win_probability;
pub use config::{EconomyConfig, RewardSchedule};
pub use economy::{
    aura_multiplier, clamp_to_daily_cap, settle_pve_match, settle_pvp_match, streak_bonus,
    MissionUnlock, PvpMatch, Settlement,
};
pub use error::{DeckError, HandError, NoRewardReason, TransferMismatch};
pub use hand::{
    lane_power, validate_deck, validate_hand, DeckCard, DeckCardType, DeckValidation,
    HandValidation, HAND_SIZE,
};
pub use opponents::select_ai_deck;
pub use power::{calculate_power, normalize_foil, normalize_rarity, normalize_wear};
pub use quests::{leaderboard_reward, quest_progress, QuestProgress, QuestRequirement, QuestType};
pub use rng::{DeckRng, MatchRng};
pub use settlement::{
    find_matching_transfer, is_free_operation_hash, is_valid_tx_hash, parse_transfer_log,
    require_matching_transfer, validate_native_transfer, ParsedTransfer, SettlementConfig,
    TransferLog,
};
pub use state::{DailyLimits, PlayerEconomyState};
pub use types::*;

pub use primitive_types::U256;
