use alloc::string::String;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Per-day counters. Reset by the host's daily job, never by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct DailyLimits {
    pub pve_wins: u32,
    pub pvp_matches: u32,
    pub first_pve_bonus: bool,
    pub first_pvp_bonus: bool,
    pub login_bonus: bool,
    pub streak_bonus: bool,
    /// `YYYY-MM-DD` (UTC) of the last reset
    pub last_reset_date: String,
}

impl DailyLimits {
    pub fn new(today: &str) -> Self {
        Self {
            last_reset_date: today.into(),
            ..Self::default()
        }
    }
}

/// A player's balances and counters, as the persistence layer stores them.
///
/// The engine returns a new value from each settlement; the host writes it
/// back under a per-player single-writer mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct PlayerEconomyState {
    /// Pending VBMS awaiting on-chain claim. May go negative; the host clamps.
    pub inbox_balance: i64,
    pub coins: i64,
    pub lifetime_earned: i64,
    pub lifetime_spent: i64,
    pub daily_limits: DailyLimits,
    pub win_streak: u32,
    /// Unix millis of the last PvP win. Losses leave it unchanged.
    pub last_win_timestamp: u64,
}

impl PlayerEconomyState {
    pub fn new(today: &str) -> Self {
        Self {
            daily_limits: DailyLimits::new(today),
            ..Self::default()
        }
    }

    pub fn with_coins(mut self, coins: i64) -> Self {
        self.coins = coins;
        self
    }

    pub fn with_inbox(mut self, inbox_balance: i64) -> Self {
        self.inbox_balance = inbox_balance;
        self
    }
}
