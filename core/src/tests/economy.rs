use crate::config::*;
use crate::economy::*;
use crate::error::NoRewardReason;
use crate::state::PlayerEconomyState;
use crate::types::Difficulty;

fn fresh_state() -> PlayerEconomyState {
    PlayerEconomyState::new("2026-01-01")
}

fn win(player_aura: i64, opponent_aura: i64) -> PvpMatch {
    PvpMatch {
        won: true,
        player_aura,
        opponent_aura,
        is_revenge: false,
        timestamp: 1_000,
    }
}

fn loss(player_aura: i64, opponent_aura: i64) -> PvpMatch {
    PvpMatch {
        won: false,
        ..win(player_aura, opponent_aura)
    }
}

// ==========================================
// MULTIPLIERS
// ==========================================

#[test]
fn test_aura_no_diff_no_adjustment() {
    for aura in [-100, 0, 250, 10_000] {
        assert_eq!(aura_multiplier(aura, aura, true), 1.0);
        assert_eq!(aura_multiplier(aura, aura, false), 1.0);
    }
}

#[test]
fn test_aura_bands_are_inclusive() {
    let cases = [
        (49, 1.0, 1.0),
        (50, 1.15, 0.8),
        (99, 1.15, 0.8),
        (100, 1.3, 0.65),
        (200, 1.5, 0.5),
        (499, 1.5, 0.5),
        (500, 2.0, 0.4),
        (5_000, 2.0, 0.4),
    ];
    for (diff, on_win, on_loss) in cases {
        assert_eq!(aura_multiplier(1_000, 1_000 + diff, true), on_win, "win diff {diff}");
        assert_eq!(aura_multiplier(1_000, 1_000 + diff, false), on_loss, "loss diff {diff}");
    }
}

#[test]
fn test_weaker_opponent_changes_nothing() {
    assert_eq!(aura_multiplier(1_000, 100, true), 1.0);
    assert_eq!(aura_multiplier(1_000, 100, false), 1.0);
}

#[test]
fn test_ranking_multiplier() {
    // Rank 30 beating rank 5 is a 25-place upset
    assert_eq!(ranking_multiplier(30, 5, true), 1.5);
    assert_eq!(ranking_multiplier(30, 5, false), 0.5);
    assert_eq!(ranking_multiplier(60, 10, true), 2.0);
    assert_eq!(ranking_multiplier(10, 5, true), 1.15);
    assert_eq!(ranking_multiplier(5, 30, true), 1.0);
}

// ==========================================
// REWARDS AND PENALTIES
// ==========================================

#[test]
fn test_vbms_scenario_diff_250() {
    let on_win = aura_multiplier(100, 350, true);
    assert_eq!(on_win, 1.5);
    assert_eq!(RewardSchedule::VBMS.pvp_win_reward(on_win, false), 150);

    let on_loss = aura_multiplier(100, 350, false);
    assert_eq!(on_loss, 0.5);
    assert_eq!(RewardSchedule::VBMS.pvp_loss_penalty(on_loss), -10);
}

#[test]
fn test_schedules_are_independent() {
    assert_eq!(RewardSchedule::LEGACY.pvp_win_reward(1.0, false), 50);
    assert_eq!(RewardSchedule::LEGACY.pvp_loss_penalty(1.0), -10);
    assert_eq!(RewardSchedule::VBMS.pvp_win_reward(1.0, false), 100);
    assert_eq!(RewardSchedule::VBMS.pvp_loss_penalty(1.0), -20);
    assert_eq!(RewardSchedule::default(), RewardSchedule::VBMS);
}

#[test]
fn test_revenge_rounds_twice() {
    // round(50 * 1.5) = 75, then round(75 * 1.2) = 90
    assert_eq!(RewardSchedule::LEGACY.pvp_win_reward(1.5, true), 90);
    assert_eq!(RewardSchedule::VBMS.pvp_win_reward(1.0, true), 120);
}

#[test]
fn test_loss_penalty_rounds_half_up() {
    // -10 * 0.65 = -6.5
    assert_eq!(RewardSchedule::LEGACY.pvp_loss_penalty(0.65), -6);
    for multiplier in [0.4, 0.5, 0.65, 0.8, 1.0] {
        assert!(RewardSchedule::VBMS.pvp_loss_penalty(multiplier) <= 0);
        assert!(RewardSchedule::LEGACY.pvp_loss_penalty(multiplier) <= 0);
    }
}

#[test]
fn test_streak_bonus_only_at_milestones() {
    assert_eq!(streak_bonus(3), 150);
    assert_eq!(streak_bonus(5), 300);
    assert_eq!(streak_bonus(10), 750);
    for streak in [0, 1, 2, 4, 6, 9, 11, 100] {
        assert_eq!(streak_bonus(streak), 0);
    }
}

#[test]
fn test_daily_cap_clamp() {
    assert_eq!(clamp_to_daily_cap(100, DAILY_CAP), 0);
    assert_eq!(clamp_to_daily_cap(100, DAILY_CAP - 50), 50);
    assert_eq!(clamp_to_daily_cap(100, 0), 100);
    assert_eq!(clamp_to_daily_cap(100, DAILY_CAP + 500), 0);
    assert_eq!(clamp_to_cap(30, 90, 100), 10);
}

#[test]
fn test_pve_rewards() {
    let rewards: Vec<i64> = Difficulty::ALL.into_iter().map(pve_reward).collect();
    assert_eq!(rewards, vec![1, 2, 5, 10, 20]);
}

#[test]
fn test_daily_earned_estimate() {
    let mut state = fresh_state();
    assert_eq!(daily_earned(&state.daily_limits), 0);

    state.daily_limits.pve_wins = 3;
    state.daily_limits.pvp_matches = 2;
    state.daily_limits.first_pve_bonus = true;
    state.daily_limits.login_bonus = true;
    assert_eq!(daily_earned(&state.daily_limits), 90 + 120 + 50 + 25);
}

// ==========================================
// VBMS INBOX
// ==========================================

#[test]
fn test_vbms_inbox_path() {
    assert_eq!(vbms_pvp_reward(true), 120);
    assert_eq!(vbms_pvp_reward(false), -20);

    assert!(can_afford_entry(20));
    assert!(!can_afford_entry(19));

    let inbox = deduct_entry_fee(100);
    assert_eq!(inbox, 80);
    assert_eq!(new_inbox(inbox, true), 200);
    assert_eq!(new_inbox(inbox, false), 60);

    assert_eq!(lifetime_earned_increment(true), 120);
    assert_eq!(lifetime_earned_increment(false), 0);
}

// ==========================================
// SETTLEMENT
// ==========================================

#[test]
fn test_pve_loss_pays_nothing() {
    let state = fresh_state().with_coins(10);
    let settled = settle_pve_match(&state, Difficulty::Gigachad, false, &EconomyConfig::default());
    assert_eq!(settled.awarded, 0);
    assert_eq!(settled.reason, Some(NoRewardReason::Lost));
    assert_eq!(settled.state, state);
}

#[test]
fn test_first_pve_win() {
    let state = fresh_state();
    let settled = settle_pve_match(&state, Difficulty::Gangster, true, &EconomyConfig::default());

    assert_eq!(settled.awarded, 10);
    assert_eq!(settled.reason, None);
    assert_eq!(settled.unlocked, vec![MissionUnlock::FirstPveWin]);
    assert_eq!(settled.unlocked[0].reward(), FIRST_PVE_BONUS);
    assert_eq!(settled.state.coins, 10);
    assert_eq!(settled.state.lifetime_earned, 10);
    assert_eq!(settled.state.daily_limits.pve_wins, 1);
    assert!(settled.state.daily_limits.first_pve_bonus);

    let again = settle_pve_match(&settled.state, Difficulty::Gangster, true, &EconomyConfig::default());
    assert!(again.unlocked.is_empty());
    assert_eq!(again.state.coins, 20);
}

#[test]
fn test_pve_win_limit() {
    let mut state = fresh_state();
    state.daily_limits.pve_wins = PVE_WIN_LIMIT;

    let settled = settle_pve_match(&state, Difficulty::Gey, true, &EconomyConfig::default());
    assert_eq!(settled.reason, Some(NoRewardReason::PveWinLimit));
    assert_eq!(settled.state, state);
}

#[test]
fn test_pve_clamped_by_daily_cap() {
    let config = EconomyConfig::default().with_daily_cap(100);
    let mut state = fresh_state();
    // 3 wins estimate 90 earned
    state.daily_limits.pve_wins = 3;

    let settled = settle_pve_match(&state, Difficulty::Gigachad, true, &config);
    assert_eq!(settled.awarded, 10);
    assert_eq!(settled.reason, None);
    assert_eq!(settled.state.coins, 10);
}

#[test]
fn test_pve_cap_reached() {
    let config = EconomyConfig::default().with_daily_cap(100);
    let mut state = fresh_state();
    state.daily_limits.pve_wins = 3;
    state.daily_limits.first_pve_bonus = true;

    let settled = settle_pve_match(&state, Difficulty::Gigachad, true, &config);
    assert_eq!(settled.awarded, 0);
    assert_eq!(settled.reason, Some(NoRewardReason::DailyCapReached));
    assert_eq!(settled.state, state);
    assert_eq!(
        NoRewardReason::DailyCapReached.to_string(),
        "Daily cap reached"
    );
}

#[test]
fn test_pvp_win_settlement() {
    let state = fresh_state();
    let settled = settle_pvp_match(&state, &win(100, 350), &EconomyConfig::default());

    assert_eq!(settled.multiplier, 1.5);
    assert_eq!(settled.awarded, 150);
    assert_eq!(settled.unlocked, vec![MissionUnlock::FirstPvpMatch]);
    assert_eq!(settled.state.coins, 150);
    assert_eq!(settled.state.lifetime_earned, 150);
    assert_eq!(settled.state.win_streak, 1);
    assert_eq!(settled.state.last_win_timestamp, 1_000);
    assert_eq!(settled.state.daily_limits.pvp_matches, 1);
    assert!(settled.state.daily_limits.first_pvp_bonus);
}

#[test]
fn test_pvp_revenge_win() {
    let pvp = PvpMatch {
        is_revenge: true,
        ..win(500, 500)
    };
    let settled = settle_pvp_match(&fresh_state(), &pvp, &EconomyConfig::default());
    assert_eq!(settled.awarded, 120);

    let legacy = EconomyConfig::default().with_pvp_schedule(RewardSchedule::LEGACY);
    assert_eq!(settle_pvp_match(&fresh_state(), &pvp, &legacy).awarded, 60);
}

#[test]
fn test_pvp_loss_resets_streak_and_floors_coins() {
    let mut state = fresh_state().with_coins(5);
    state.win_streak = 4;
    state.last_win_timestamp = 77;

    let settled = settle_pvp_match(&state, &loss(100, 350), &EconomyConfig::default());
    assert_eq!(settled.awarded, -10);
    assert_eq!(settled.multiplier, 0.5);
    assert_eq!(settled.state.coins, 0);
    assert_eq!(settled.state.lifetime_spent, 10);
    assert_eq!(settled.state.win_streak, 0);
    assert_eq!(settled.state.last_win_timestamp, 77);
    assert_eq!(settled.state.daily_limits.pvp_matches, 1);
    assert!(settled.unlocked.is_empty());
}

#[test]
fn test_pvp_streak_milestone() {
    let mut state = fresh_state();
    state.win_streak = 2;
    state.daily_limits.first_pvp_bonus = true;

    let settled = settle_pvp_match(&state, &win(0, 0), &EconomyConfig::default());
    assert_eq!(settled.state.win_streak, 3);
    assert_eq!(settled.unlocked, vec![MissionUnlock::Streak { length: 3 }]);
    assert_eq!(settled.unlocked[0].reward(), 150);
    assert!(settled.state.daily_limits.streak_bonus);

    let fourth = settle_pvp_match(&settled.state, &win(0, 0), &EconomyConfig::default());
    assert!(fourth.unlocked.is_empty());
}

#[test]
fn test_pvp_match_limit() {
    let mut state = fresh_state();
    state.daily_limits.pvp_matches = PVP_MATCH_LIMIT;

    let settled = settle_pvp_match(&state, &win(0, 0), &EconomyConfig::default());
    assert_eq!(settled.awarded, 0);
    assert_eq!(settled.reason, Some(NoRewardReason::PvpMatchLimit));
    assert_eq!(settled.state, state);
}

#[test]
fn test_config_overrides_from_json() {
    let config: EconomyConfig =
        serde_json::from_str(r#"{"dailyCap":500,"pvpSchedule":{"winReward":50,"lossPenalty":-10}}"#)
            .expect("valid config json");

    assert_eq!(config.daily_cap, 500);
    assert_eq!(config.pvp_schedule, RewardSchedule::LEGACY);
    assert_eq!(config.pve_win_limit, PVE_WIN_LIMIT);
    assert_eq!(config.pve_rewards.gigachad, 20);
}
