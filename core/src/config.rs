//! Economy tunables.
//!
//! [`EconomyConfig::default`] reproduces the live constants. Hosts may
//! deserialize an override; omitted fields keep their defaults.

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::types::Difficulty;

/// Max tokens a player can earn per day
pub const DAILY_CAP: i64 = 1500;
/// Max paid PvE wins per day
pub const PVE_WIN_LIMIT: u32 = 30;
/// Max paid PvP matches per day
pub const PVP_MATCH_LIMIT: u32 = 10;
/// Fee held from the inbox to enter a VBMS PvP match
pub const VBMS_ENTRY_FEE: i64 = 20;
/// Extra multiplier for beating whoever last beat you
pub const REVENGE_BONUS: f64 = 1.2;

/// Base PvP win reward and loss penalty.
///
/// Two schedules are live and neither supersedes the other: the coin economy
/// and the VBMS token economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct RewardSchedule {
    pub win_reward: i64,
    /// Zero or negative
    pub loss_penalty: i64,
}

impl RewardSchedule {
    /// Coin economy
    pub const LEGACY: RewardSchedule = RewardSchedule {
        win_reward: 50,
        loss_penalty: -10,
    };

    /// VBMS token economy
    pub const VBMS: RewardSchedule = RewardSchedule {
        win_reward: 100,
        loss_penalty: -20,
    };
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self::VBMS
    }
}

/// Reward for a PvE win, by difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct PveRewards {
    pub gey: i64,
    pub goofy: i64,
    pub gooner: i64,
    pub gangster: i64,
    pub gigachad: i64,
}

impl PveRewards {
    pub const fn get(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Gey => self.gey,
            Difficulty::Goofy => self.goofy,
            Difficulty::Gooner => self.gooner,
            Difficulty::Gangster => self.gangster,
            Difficulty::Gigachad => self.gigachad,
        }
    }
}

impl Default for PveRewards {
    fn default() -> Self {
        Self {
            gey: 1,
            goofy: 2,
            gooner: 5,
            gangster: 10,
            gigachad: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct EconomyConfig {
    pub daily_cap: i64,
    pub pve_win_limit: u32,
    pub pvp_match_limit: u32,
    pub pve_rewards: PveRewards,
    pub pvp_schedule: RewardSchedule,
    pub vbms_entry_fee: i64,
}

impl EconomyConfig {
    pub fn new() -> Self {
        Self {
            daily_cap: DAILY_CAP,
            pve_win_limit: PVE_WIN_LIMIT,
            pvp_match_limit: PVP_MATCH_LIMIT,
            pve_rewards: PveRewards::default(),
            pvp_schedule: RewardSchedule::default(),
            vbms_entry_fee: VBMS_ENTRY_FEE,
        }
    }

    pub fn with_daily_cap(mut self, daily_cap: i64) -> Self {
        self.daily_cap = daily_cap;
        self
    }

    pub fn with_pvp_schedule(mut self, schedule: RewardSchedule) -> Self {
        self.pvp_schedule = schedule;
        self
    }

    pub fn with_limits(mut self, pve_win_limit: u32, pvp_match_limit: u32) -> Self {
        self.pve_win_limit = pve_win_limit;
        self.pvp_match_limit = pvp_match_limit;
        self
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self::new()
    }
}
