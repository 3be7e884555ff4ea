//! Reward settlement for Convex actions.
//!
//! Each call takes the stored profile and returns the full next profile, so
//! the caller can write it back in one mutation.

use std::string::String;

use serde::Deserialize;
use vmw_core::config::{EconomyConfig, RewardSchedule};
use vmw_core::economy::{self, PvpMatch};
use vmw_core::state::PlayerEconomyState;
use vmw_core::types::Difficulty;
use wasm_bindgen::prelude::*;

use crate::{console_error, from_js, to_js};

/// Host overrides are optional; `undefined` means the live constants.
fn config_from_js(config_js: JsValue) -> Result<EconomyConfig, String> {
    if config_js.is_undefined() || config_js.is_null() {
        return Ok(EconomyConfig::default());
    }
    from_js(config_js, "economy config")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PveMatchInput {
    difficulty: Difficulty,
    won: bool,
}

#[wasm_bindgen]
pub fn settle_pve_match(
    state_js: JsValue,
    match_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, String> {
    let state: PlayerEconomyState = from_js(state_js, "player state")?;
    let input: PveMatchInput = from_js(match_js, "pve match")?;
    let config = config_from_js(config_js)?;

    let settled = economy::settle_pve_match(&state, input.difficulty, input.won, &config);
    match settled.reason {
        Some(reason) => log::debug!("settle_pve_match: no reward ({reason})"),
        None => log::debug!("settle_pve_match: +{}", settled.awarded),
    }
    to_js(&settled)
}

#[wasm_bindgen]
pub fn settle_pvp_match(
    state_js: JsValue,
    match_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, String> {
    let state: PlayerEconomyState = from_js(state_js, "player state")?;
    let pvp: PvpMatch = from_js(match_js, "pvp match")?;
    let config = config_from_js(config_js)?;

    let settled = economy::settle_pvp_match(&state, &pvp, &config);
    log::debug!(
        "settle_pvp_match: won={} multiplier={} delta={}",
        pvp.won,
        settled.multiplier,
        settled.awarded
    );
    to_js(&settled)
}

#[wasm_bindgen]
pub fn aura_multiplier(player_aura: i64, opponent_aura: i64, is_win: bool) -> f64 {
    economy::aura_multiplier(player_aura, opponent_aura, is_win)
}

fn schedule(name: &str) -> Result<RewardSchedule, String> {
    match name {
        "legacy" => Ok(RewardSchedule::LEGACY),
        "vbms" => Ok(RewardSchedule::VBMS),
        other => Err(console_error(format!("Unknown reward schedule: {other}"))),
    }
}

/// Preview of the PvP win reward and loss penalty shown before a match.
#[wasm_bindgen]
pub fn pvp_stakes(
    schedule_name: &str,
    player_aura: i64,
    opponent_aura: i64,
    is_revenge: bool,
) -> Result<Vec<i64>, String> {
    let schedule = schedule(schedule_name)?;
    let on_win = economy::aura_multiplier(player_aura, opponent_aura, true);
    let on_loss = economy::aura_multiplier(player_aura, opponent_aura, false);
    Ok(vec![
        schedule.pvp_win_reward(on_win, is_revenge),
        schedule.pvp_loss_penalty(on_loss),
    ])
}

#[wasm_bindgen]
pub fn streak_bonus(streak: u32) -> i64 {
    economy::streak_bonus(streak)
}

#[wasm_bindgen]
pub fn clamp_to_daily_cap(proposed: i64, earned_today: i64) -> i64 {
    economy::clamp_to_daily_cap(proposed, earned_today)
}

#[wasm_bindgen]
pub fn can_afford_entry(inbox: i64) -> bool {
    economy::can_afford_entry(inbox)
}

/// Inbox after entering and finishing a VBMS PvP match.
#[wasm_bindgen]
pub fn vbms_inbox_after_match(inbox: i64, won: bool) -> Result<i64, String> {
    if !economy::can_afford_entry(inbox) {
        return Err(console_error(format!("Inbox {inbox} cannot cover the entry fee")));
    }
    Ok(economy::new_inbox(economy::deduct_entry_fee(inbox), won))
}
