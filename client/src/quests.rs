use std::string::String;
use std::vec::Vec;

use vmw_core::quests::{self, QuestRequirement};
use vmw_core::types::MatchRecord;
use wasm_bindgen::prelude::*;

use crate::{from_js, to_js};

#[wasm_bindgen]
pub fn quest_progress(
    quest_type: &str,
    requirement_js: JsValue,
    matches_js: JsValue,
) -> Result<JsValue, String> {
    let requirement: QuestRequirement = from_js(requirement_js, "quest requirement")?;
    let matches: Vec<MatchRecord> = from_js(matches_js, "match history")?;
    to_js(&quests::quest_progress(quest_type, &requirement, &matches))
}

#[wasm_bindgen]
pub fn leaderboard_reward(rank: i64) -> i64 {
    quests::leaderboard_reward(rank)
}

#[wasm_bindgen]
pub fn quest_reward(base_reward: i64, chain: Option<String>) -> i64 {
    quests::quest_reward(base_reward, chain.as_deref())
}
