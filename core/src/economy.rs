//! Economy reward engine
//!
//! Converts match outcomes into token deltas. All functions are total: odd
//! input such as negative aura yields a consistent number, never an error.
//! Validating inputs is the persistence layer's job.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::config::{
    EconomyConfig, PveRewards, RewardSchedule, DAILY_CAP, REVENGE_BONUS, VBMS_ENTRY_FEE,
};
use crate::error::NoRewardReason;
use crate::power::round_half_up;
use crate::state::{DailyLimits, PlayerEconomyState};
use crate::types::Difficulty;

pub const FIRST_PVE_BONUS: i64 = 50;
pub const FIRST_PVP_BONUS: i64 = 100;
pub const LOGIN_BONUS: i64 = 25;
pub const STREAK_3_BONUS: i64 = 150;
pub const STREAK_5_BONUS: i64 = 300;
pub const STREAK_10_BONUS: i64 = 750;

// Rough per-match earnings used to estimate what a player made today.
const ESTIMATE_PER_PVE_WIN: i64 = 30;
const ESTIMATE_PER_PVP_MATCH: i64 = 60;

/// Multipliers from the largest skill gap down. Lower bounds are inclusive.
const WIN_BONUS: [f64; 4] = [2.0, 1.5, 1.3, 1.15];
const LOSS_REDUCTION: [f64; 4] = [0.4, 0.5, 0.65, 0.8];

const AURA_BANDS: [i64; 4] = [500, 200, 100, 50];
const RANK_BANDS: [i64; 4] = [50, 20, 10, 5];

fn band_multiplier(diff: i64, bands: &[i64; 4], is_win: bool) -> f64 {
    let multipliers = if is_win { &WIN_BONUS } else { &LOSS_REDUCTION };
    bands
        .iter()
        .zip(multipliers)
        .find(|(band, _)| diff >= **band)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Scale a PvP outcome by how much stronger the opponent was.
///
/// Wins against a stronger opponent pay more; losses against a stronger
/// opponent cost less. A weaker opponent never changes the base amount.
pub fn aura_multiplier(player_aura: i64, opponent_aura: i64, is_win: bool) -> f64 {
    band_multiplier(opponent_aura.saturating_sub(player_aura), &AURA_BANDS, is_win)
}

/// Leaderboard-rank variant of [`aura_multiplier`]. A larger rank number is a
/// weaker player, so the gap is `player_rank - opponent_rank`.
pub fn ranking_multiplier(player_rank: i64, opponent_rank: i64, is_win: bool) -> f64 {
    band_multiplier(player_rank.saturating_sub(opponent_rank), &RANK_BANDS, is_win)
}

impl RewardSchedule {
    /// `round(win_reward * multiplier)`, then the revenge bonus on top.
    pub fn pvp_win_reward(&self, multiplier: f64, is_revenge: bool) -> i64 {
        let base = round_half_up(self.win_reward as f64 * multiplier);
        let reward = if is_revenge {
            round_half_up(base * REVENGE_BONUS)
        } else {
            base
        };
        reward as i64
    }

    /// `round(loss_penalty * multiplier)`; never positive for a non-negative multiplier.
    pub fn pvp_loss_penalty(&self, multiplier: f64) -> i64 {
        round_half_up(self.loss_penalty as f64 * multiplier) as i64
    }
}

/// Bonus for reaching exactly 3, 5 or 10 consecutive wins. Other lengths pay 0.
pub fn streak_bonus(streak: u32) -> i64 {
    match streak {
        3 => STREAK_3_BONUS,
        5 => STREAK_5_BONUS,
        10 => STREAK_10_BONUS,
        _ => 0,
    }
}

/// Trim a reward so today's total stays within [`DAILY_CAP`].
pub fn clamp_to_daily_cap(proposed: i64, earned_today: i64) -> i64 {
    clamp_to_cap(proposed, earned_today, DAILY_CAP)
}

/// Only earnings are capped; callers pass penalties around this.
pub fn clamp_to_cap(proposed: i64, earned_today: i64, cap: i64) -> i64 {
    if earned_today.saturating_add(proposed) > cap {
        cap.saturating_sub(earned_today).max(0)
    } else {
        proposed
    }
}

/// Default PvE win reward for a difficulty.
pub fn pve_reward(difficulty: Difficulty) -> i64 {
    PveRewards::default().get(difficulty)
}

/// Estimate of what the player has earned today from the daily counters.
pub fn daily_earned(limits: &DailyLimits) -> i64 {
    let mut total = i64::from(limits.pve_wins) * ESTIMATE_PER_PVE_WIN
        + i64::from(limits.pvp_matches) * ESTIMATE_PER_PVP_MATCH;
    if limits.first_pve_bonus {
        total += FIRST_PVE_BONUS;
    }
    if limits.first_pvp_bonus {
        total += FIRST_PVP_BONUS;
    }
    if limits.login_bonus {
        total += LOGIN_BONUS;
    }
    if limits.streak_bonus {
        total += STREAK_3_BONUS;
    }
    total
}

// ==========================================
// VBMS TOKEN PATH
// ==========================================

/// Inbox delta for a VBMS PvP match. Winners also get their entry fee back.
pub fn vbms_pvp_reward(won: bool) -> i64 {
    if won {
        RewardSchedule::VBMS.win_reward + VBMS_ENTRY_FEE
    } else {
        RewardSchedule::VBMS.loss_penalty
    }
}

/// Inbox after a VBMS PvP match. Can go negative; the host clamps.
pub fn new_inbox(inbox: i64, won: bool) -> i64 {
    inbox + vbms_pvp_reward(won)
}

pub fn can_afford_entry(inbox: i64) -> bool {
    inbox >= VBMS_ENTRY_FEE
}

pub fn deduct_entry_fee(inbox: i64) -> i64 {
    inbox - VBMS_ENTRY_FEE
}

/// Losses are not counted against lifetime earnings.
pub fn lifetime_earned_increment(won: bool) -> i64 {
    if won {
        vbms_pvp_reward(true)
    } else {
        0
    }
}

// ==========================================
// MATCH SETTLEMENT
// ==========================================

/// One-off bonus a settlement unlocked. The player claims it separately, so
/// its value is not part of [`Settlement::awarded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum MissionUnlock {
    FirstPveWin,
    FirstPvpMatch,
    Streak { length: u32 },
}

impl MissionUnlock {
    pub fn reward(&self) -> i64 {
        match self {
            MissionUnlock::FirstPveWin => FIRST_PVE_BONUS,
            MissionUnlock::FirstPvpMatch => FIRST_PVP_BONUS,
            MissionUnlock::Streak { length } => streak_bonus(*length),
        }
    }
}

/// Result of settling one match against a player's state.
///
/// Either `reason` is set and `state` is the input unchanged, or `state` is
/// the complete new state with `awarded` already applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Settlement {
    /// Coin delta; negative for a PvP loss. Coins never drop below 0, so a
    /// loss may remove less than this.
    pub awarded: i64,
    pub multiplier: f64,
    pub reason: Option<NoRewardReason>,
    pub unlocked: Vec<MissionUnlock>,
    pub state: PlayerEconomyState,
}

impl Settlement {
    fn rejected(state: &PlayerEconomyState, reason: NoRewardReason) -> Self {
        Self {
            awarded: 0,
            multiplier: 1.0,
            reason: Some(reason),
            unlocked: Vec::new(),
            state: state.clone(),
        }
    }
}

/// Settle a PvE match. Losses and limit hits pay nothing.
pub fn settle_pve_match(
    state: &PlayerEconomyState,
    difficulty: Difficulty,
    won: bool,
    config: &EconomyConfig,
) -> Settlement {
    if !won {
        return Settlement::rejected(state, NoRewardReason::Lost);
    }
    if state.daily_limits.pve_wins >= config.pve_win_limit {
        return Settlement::rejected(state, NoRewardReason::PveWinLimit);
    }

    let proposed = config.pve_rewards.get(difficulty);
    let earned = daily_earned(&state.daily_limits);
    let awarded = clamp_to_cap(proposed, earned, config.daily_cap);
    if awarded == 0 && proposed > 0 {
        return Settlement::rejected(state, NoRewardReason::DailyCapReached);
    }
    if awarded < proposed {
        log::debug!("settle_pve_match: clamped {proposed} to {awarded} (earned {earned})");
    }

    let mut next = state.clone();
    let mut unlocked = Vec::new();
    if !next.daily_limits.first_pve_bonus {
        next.daily_limits.first_pve_bonus = true;
        unlocked.push(MissionUnlock::FirstPveWin);
    }
    next.coins += awarded;
    next.lifetime_earned += awarded;
    next.daily_limits.pve_wins += 1;

    Settlement {
        awarded,
        multiplier: 1.0,
        reason: None,
        unlocked,
        state: next,
    }
}

/// A finished PvP match from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct PvpMatch {
    pub won: bool,
    pub player_aura: i64,
    pub opponent_aura: i64,
    /// The opponent was the last player to beat this one
    #[cfg_attr(feature = "std", serde(default))]
    pub is_revenge: bool,
    pub timestamp: u64,
}

/// Settle a PvP match: aura-scaled reward or penalty, win streak, milestone
/// unlocks. PvP is bounded by the daily match limit rather than the earning cap.
pub fn settle_pvp_match(
    state: &PlayerEconomyState,
    pvp: &PvpMatch,
    config: &EconomyConfig,
) -> Settlement {
    if state.daily_limits.pvp_matches >= config.pvp_match_limit {
        return Settlement::rejected(state, NoRewardReason::PvpMatchLimit);
    }

    let multiplier = aura_multiplier(pvp.player_aura, pvp.opponent_aura, pvp.won);
    let mut next = state.clone();
    let mut unlocked = Vec::new();
    next.daily_limits.pvp_matches += 1;

    let awarded = if pvp.won {
        let reward = config.pvp_schedule.pvp_win_reward(multiplier, pvp.is_revenge);
        next.win_streak += 1;
        next.last_win_timestamp = pvp.timestamp;

        if !next.daily_limits.first_pvp_bonus {
            next.daily_limits.first_pvp_bonus = true;
            unlocked.push(MissionUnlock::FirstPvpMatch);
        }
        if streak_bonus(next.win_streak) > 0 {
            unlocked.push(MissionUnlock::Streak {
                length: next.win_streak,
            });
        }
        if next.win_streak == 3 {
            next.daily_limits.streak_bonus = true;
        }

        next.coins += reward;
        next.lifetime_earned += reward;
        reward
    } else {
        let penalty = config.pvp_schedule.pvp_loss_penalty(multiplier);
        next.win_streak = 0;
        next.coins = (next.coins + penalty).max(0);
        next.lifetime_spent += penalty.abs();
        penalty
    };

    Settlement {
        awarded,
        multiplier,
        reason: None,
        unlocked,
        state: next,
    }
}
