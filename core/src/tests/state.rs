use parity_scale_codec::{Decode, Encode};

use crate::economy::{settle_pvp_match, PvpMatch};
use crate::state::*;
use crate::EconomyConfig;

#[test]
fn test_profile_from_stored_json() {
    // Shape written by the persistence layer; unknown fields are ignored
    let state: PlayerEconomyState = serde_json::from_str(
        r#"{
            "inboxBalance": 340,
            "coins": 1200,
            "winStreak": 2,
            "lastWinTimestamp": 1735689600000,
            "dailyLimits": {
                "pveWins": 4,
                "pvpMatches": 1,
                "firstPveBonus": true,
                "firstPvpBonus": false,
                "loginBonus": true,
                "streakBonus": false,
                "lastResetDate": "2026-01-01"
            },
            "username": "ignored"
        }"#,
    )
    .expect("valid profile json");

    assert_eq!(state.inbox_balance, 340);
    assert_eq!(state.coins, 1200);
    assert_eq!(state.lifetime_earned, 0);
    assert_eq!(state.daily_limits.pve_wins, 4);
    assert_eq!(state.daily_limits.last_reset_date, "2026-01-01");
}

#[test]
fn test_missing_limits_default_to_fresh_day() {
    let state: PlayerEconomyState =
        serde_json::from_str(r#"{"coins": 5}"#).expect("valid profile json");
    assert_eq!(state.daily_limits, DailyLimits::default());
    assert_eq!(state.win_streak, 0);
}

#[test]
fn test_settled_state_survives_scale_encoding() {
    let state = PlayerEconomyState::new("2026-01-01").with_inbox(60).with_coins(10);
    let pvp = PvpMatch {
        won: true,
        player_aura: 0,
        opponent_aura: 600,
        is_revenge: false,
        timestamp: 7,
    };
    let settled = settle_pvp_match(&state, &pvp, &EconomyConfig::default());

    let bytes = settled.state.encode();
    let decoded = PlayerEconomyState::decode(&mut &bytes[..]).expect("decodes");
    assert_eq!(decoded, settled.state);
    assert_eq!(decoded.coins, 210);
    assert_eq!(decoded.inbox_balance, 60);
}
