//! Card power, hand validation and battle resolution for the browser.

use std::string::String;
use std::vec::Vec;

use serde::{Deserialize, Serialize};
use vmw_core::battle::{self, EliminationRound};
use vmw_core::hand::{self, DeckCard, HAND_SIZE};
use vmw_core::opponents::select_ai_deck;
use vmw_core::power;
use vmw_core::rng::MatchRng;
use vmw_core::types::{Card, Difficulty, RawCard, Winner};
use wasm_bindgen::prelude::*;

use crate::{console_error, from_js, to_js};

/// Cards for scoring. Records are read loosely so one odd trait string or
/// power value never rejects the whole hand.
fn cards_from_js(value: JsValue, what: &str) -> Result<Vec<Card>, String> {
    let raw: Vec<RawCard> = from_js(value, what)?;
    Ok(raw.iter().map(RawCard::to_battle_card).collect())
}

/// Card traits as the NFT metadata carries them
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardTraits {
    pub rarity: String,
    pub wear: String,
    pub foil: String,
    pub collection: String,
}

/// Power of a card from its raw trait strings, with the factors used.
#[wasm_bindgen]
pub fn calculate_card_power(traits_js: JsValue) -> Result<JsValue, String> {
    let traits: CardTraits = from_js(traits_js, "card traits")?;
    let breakdown = power::calculate_power_detailed(
        power::normalize_rarity(&traits.rarity),
        power::normalize_wear(&traits.wear),
        power::normalize_foil(&traits.foil),
        &traits.collection,
    );
    to_js(&breakdown)
}

/// Validate a hand the player picked. Never fails; problems are in `errors`.
#[wasm_bindgen]
pub fn validate_hand(cards_js: JsValue, required_count: Option<usize>) -> Result<JsValue, String> {
    let cards: Vec<RawCard> = from_js(cards_js, "hand")?;
    to_js(&hand::validate_hand(&cards, required_count.unwrap_or(HAND_SIZE)))
}

/// Recompute a stored card's power from its traits.
#[wasm_bindgen]
pub fn update_card_power(card_js: JsValue) -> Result<JsValue, String> {
    let card: Card = from_js(card_js, "card")?;
    to_js(&power::recalculate(&card))
}

/// Pick the AI hand for a difficulty. The same match id always yields the
/// same hand.
#[wasm_bindgen]
pub fn select_opponent_deck(
    pool_js: JsValue,
    difficulty: &str,
    match_id: &str,
    hand_size: Option<usize>,
) -> Result<JsValue, String> {
    let pool = cards_from_js(pool_js, "card pool")?;
    let difficulty: Difficulty = difficulty
        .parse()
        .map_err(|e| console_error(format!("{e}")))?;

    let mut rng = MatchRng::from_match_id(match_id);
    let deck = select_ai_deck(&pool, difficulty, hand_size.unwrap_or(HAND_SIZE), &mut rng);
    log::debug!(
        "select_opponent_deck: {} cards for {} in {} (pool {})",
        deck.len(),
        difficulty,
        match_id,
        pool.len()
    );
    to_js(&deck)
}

/// Battle outcome plus the win estimate shown before the fight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    #[serde(flatten)]
    pub outcome: battle::BattleOutcome,
    pub win_probability: f64,
}

#[wasm_bindgen]
pub fn resolve_battle(player_js: JsValue, opponent_js: JsValue) -> Result<JsValue, String> {
    let player = cards_from_js(player_js, "player hand")?;
    let opponent = cards_from_js(opponent_js, "opponent hand")?;

    let outcome = battle::resolve_battle(&player, &opponent);
    log::debug!(
        "resolve_battle: {} vs {} -> {:?}",
        outcome.player_power,
        outcome.opponent_power,
        outcome.winner
    );
    to_js(&BattleReport {
        win_probability: battle::win_probability(outcome.player_power, outcome.opponent_power),
        outcome,
    })
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EliminationReport {
    pub rounds: Vec<EliminationRound>,
    pub winner: Winner,
}

#[wasm_bindgen]
pub fn resolve_elimination(player_js: JsValue, opponent_js: JsValue) -> Result<JsValue, String> {
    let player = cards_from_js(player_js, "player hand")?;
    let opponent = cards_from_js(opponent_js, "opponent hand")?;

    let rounds = battle::resolve_elimination(&player, &opponent);
    to_js(&EliminationReport {
        winner: battle::elimination_winner(&rounds),
        rounds,
    })
}

#[wasm_bindgen]
pub fn win_probability(player_power: u64, opponent_power: u64) -> f64 {
    battle::win_probability(player_power, opponent_power)
}

/// Strongest hand from the player's collection, rated against a target.
#[wasm_bindgen]
pub fn recommend_hand(pool_js: JsValue, target_power: u64) -> Result<JsValue, String> {
    let pool = cards_from_js(pool_js, "card pool")?;
    to_js(&battle::battle_recommendation(&pool, target_power, HAND_SIZE))
}

/// Totals for a collection screen: overall stats and power per collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub stats: hand::CardStats,
    pub by_collection: hand::CollectionPower,
}

#[wasm_bindgen]
pub fn collection_summary(cards_js: JsValue) -> Result<JsValue, String> {
    let cards = cards_from_js(cards_js, "cards")?;
    to_js(&CollectionSummary {
        stats: hand::card_stats(&cards),
        by_collection: hand::power_by_collection(&cards),
    })
}

/// Check a TCG deck; problems are listed in `errors`.
#[wasm_bindgen]
pub fn validate_deck(cards_js: JsValue) -> Result<JsValue, String> {
    let cards: Vec<DeckCard> = from_js(cards_js, "deck")?;
    to_js(&hand::validate_deck(&cards))
}

#[wasm_bindgen]
pub fn lane_power(cards_js: JsValue) -> Result<u64, String> {
    let cards: Vec<DeckCard> = from_js(cards_js, "lane")?;
    Ok(hand::lane_power(&cards))
}
