mod economy;
mod hand;
mod state;

use alloc::vec::Vec;

use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn card(id: &str, power: Power) -> Card {
    Card::new(id, power, "")
}

fn card_in(id: &str, power: Power, collection: &str) -> Card {
    Card::new(id, power, collection)
}

/// Five cards of one collection with the given powers, ids `c0..c4`.
fn hand_of(powers: &[Power], collection: &str) -> Vec<Card> {
    powers
        .iter()
        .enumerate()
        .map(|(i, p)| Card::new(&alloc::format!("c{i}"), *p, collection))
        .collect()
}

fn raw_card(id: &str, power: f64) -> RawCard {
    RawCard {
        id: Some(Scalar::from(id)),
        power: Some(Scalar::from(power)),
        ..RawCard::default()
    }
}

fn pve(result: MatchResult, difficulty: Difficulty, timestamp: u64) -> MatchRecord {
    MatchRecord::pve(result, difficulty, timestamp)
}

fn pvp(result: MatchResult, timestamp: u64) -> MatchRecord {
    MatchRecord::pvp(result, timestamp)
}
