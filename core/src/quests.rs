//! Quest progress, derived on demand from match history.

use core::fmt;

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, MatchRecord, MatchType};

/// `perfect_day` target when the requirement leaves `count` at 0
const PERFECT_DAY_DEFAULT_COUNT: u32 = 2;

pub const LEADERBOARD_RANK_1: i64 = 2000;
pub const LEADERBOARD_RANK_2: i64 = 1500;
pub const LEADERBOARD_RANK_3: i64 = 1000;
pub const LEADERBOARD_TOP_10: i64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum QuestType {
    #[cfg_attr(feature = "std", serde(rename = "win_pve_3"))]
    WinPve3,
    #[cfg_attr(feature = "std", serde(rename = "win_pve_5"))]
    WinPve5,
    DefeatGangster,
    DefeatGigachad,
    #[cfg_attr(feature = "std", serde(rename = "play_pvp_3"))]
    PlayPvp3,
    #[cfg_attr(feature = "std", serde(rename = "win_pvp_3"))]
    WinPvp3,
    #[cfg_attr(feature = "std", serde(rename = "win_streak_3"))]
    WinStreak3,
    LowPowerWin,
    #[cfg_attr(feature = "std", serde(rename = "complete_5_battles"))]
    Complete5Battles,
    PerfectDay,
}

impl QuestType {
    pub const ALL: [QuestType; 10] = [
        QuestType::WinPve3,
        QuestType::WinPve5,
        QuestType::DefeatGangster,
        QuestType::DefeatGigachad,
        QuestType::PlayPvp3,
        QuestType::WinPvp3,
        QuestType::WinStreak3,
        QuestType::LowPowerWin,
        QuestType::Complete5Battles,
        QuestType::PerfectDay,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            QuestType::WinPve3 => "win_pve_3",
            QuestType::WinPve5 => "win_pve_5",
            QuestType::DefeatGangster => "defeat_gangster",
            QuestType::DefeatGigachad => "defeat_gigachad",
            QuestType::PlayPvp3 => "play_pvp_3",
            QuestType::WinPvp3 => "win_pvp_3",
            QuestType::WinStreak3 => "win_streak_3",
            QuestType::LowPowerWin => "low_power_win",
            QuestType::Complete5Battles => "complete_5_battles",
            QuestType::PerfectDay => "perfect_day",
        }
    }

    /// Exact, case-sensitive match on the stored quest id.
    pub fn parse(id: &str) -> Option<QuestType> {
        QuestType::ALL.into_iter().find(|q| q.as_str() == id)
    }

    pub fn progress(&self, requirement: &QuestRequirement, matches: &[MatchRecord]) -> QuestProgress {
        let current = match self {
            QuestType::WinPve3 | QuestType::WinPve5 => count_where(matches, is_pve_win),
            QuestType::DefeatGangster | QuestType::DefeatGigachad => count_where(matches, |m| {
                is_pve_win(m) && m.difficulty == requirement.difficulty
            }),
            QuestType::PlayPvp3 => count_where(matches, |m| m.match_type == MatchType::Pvp),
            QuestType::WinPvp3 => count_where(matches, is_pvp_win),
            QuestType::WinStreak3 => {
                let mut sorted: Vec<&MatchRecord> = matches.iter().collect();
                sorted.sort_by_key(|m| m.timestamp);
                let results: Vec<bool> = sorted.iter().map(|m| m.is_win()).collect();
                pve_streak(&results).max_streak
            }
            QuestType::LowPowerWin => {
                let max_power = requirement.max_power.unwrap_or(0);
                count_where(matches, |m| {
                    is_pve_win(m) && m.player_power.unwrap_or(0) <= max_power
                })
            }
            QuestType::Complete5Battles => matches.len() as u32,
            QuestType::PerfectDay => {
                let pve_wins = count_where(matches, is_pve_win);
                let pvp_wins = count_where(matches, is_pvp_win);
                let required = match requirement.count {
                    0 => PERFECT_DAY_DEFAULT_COUNT,
                    n => n,
                };
                return QuestProgress {
                    current_progress: pve_wins.min(pvp_wins),
                    completed: pve_wins >= required && pvp_wins >= required,
                };
            }
        };

        QuestProgress {
            current_progress: current,
            completed: current >= requirement.count,
        }
    }
}

fn is_pve_win(m: &MatchRecord) -> bool {
    m.match_type == MatchType::Pve && m.is_win()
}

fn is_pvp_win(m: &MatchRecord) -> bool {
    m.match_type == MatchType::Pvp && m.is_win()
}

fn count_where(matches: &[MatchRecord], pred: impl Fn(&MatchRecord) -> bool) -> u32 {
    matches.iter().filter(|m| pred(*m)).count() as u32
}

impl fmt::Display for QuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(default, rename_all = "camelCase"))]
pub struct QuestRequirement {
    pub count: u32,
    /// Required PvE difficulty for the `defeat_*` quests
    pub difficulty: Option<Difficulty>,
    /// Highest hand power that still counts for `low_power_win`
    pub max_power: Option<u64>,
}

impl QuestRequirement {
    pub fn count(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_max_power(mut self, max_power: u64) -> Self {
        self.max_power = Some(max_power);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct QuestProgress {
    pub current_progress: u32,
    pub completed: bool,
}

/// Progress for a quest id as stored. Unknown ids make no progress.
pub fn quest_progress(
    quest_type: &str,
    requirement: &QuestRequirement,
    matches: &[MatchRecord],
) -> QuestProgress {
    match QuestType::parse(quest_type) {
        Some(quest) => quest.progress(requirement, matches),
        None => {
            log::debug!("quest_progress: unknown quest type {quest_type:?}");
            QuestProgress::default()
        }
    }
}

/// Weekly leaderboard payout by rank. Ranks are 1-based.
pub fn leaderboard_reward(rank: i64) -> i64 {
    match rank {
        1 => LEADERBOARD_RANK_1,
        2 => LEADERBOARD_RANK_2,
        3 => LEADERBOARD_RANK_3,
        4..=10 => LEADERBOARD_TOP_10,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct Streak {
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Current and longest run of wins in chronological `results`. Any non-win
/// breaks the run.
pub fn pve_streak(results: &[bool]) -> Streak {
    results.iter().fold(Streak::default(), |mut s, won| {
        if *won {
            s.current_streak += 1;
            s.max_streak = s.max_streak.max(s.current_streak);
        } else {
            s.current_streak = 0;
        }
        s
    })
}

/// Quests claimed on Arbitrum pay double.
pub fn quest_reward(base_reward: i64, chain: Option<&str>) -> i64 {
    match chain {
        Some("arbitrum") => base_reward * 2,
        _ => base_reward,
    }
}
