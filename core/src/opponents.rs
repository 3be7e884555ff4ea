//! AI opponent deck selection
//!
//! Each difficulty is an ordered list of rules. The first rule that yields a
//! full hand wins; when none does, the hand is the strongest cards in the pool.
//! A tier is a preference, never a reason to field a short hand.

use alloc::vec::Vec;

use crate::hand::strongest;
use crate::rng::DeckRng;
use crate::types::{Card, Difficulty, Power, Rarity};

/// Which cards a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFilter {
    /// Stored power equals one of the listed values
    PowerIn(&'static [Power]),
    RarityIs(Rarity),
}

impl CardFilter {
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CardFilter::PowerIn(powers) => powers.contains(&card.power),
            CardFilter::RarityIs(rarity) => card.rarity == *rarity,
        }
    }
}

/// A candidate filter and whether the matches are shuffled before picking.
/// Unshuffled rules pick strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckRule {
    pub filter: CardFilter,
    pub shuffle: bool,
}

const fn shuffled(powers: &'static [Power]) -> DeckRule {
    DeckRule {
        filter: CardFilter::PowerIn(powers),
        shuffle: true,
    }
}

const GEY_RULES: &[DeckRule] = &[shuffled(&[15])];
const GOOFY_RULES: &[DeckRule] = &[shuffled(&[18, 21])];
const GOONER_RULES: &[DeckRule] = &[shuffled(&[60, 72])];
const GANGSTER_RULES: &[DeckRule] = &[
    shuffled(&[150]),
    DeckRule {
        filter: CardFilter::RarityIs(Rarity::Legendary),
        shuffle: false,
    },
];

/// Rules for a difficulty, highest priority first. An empty list means
/// "strongest cards".
pub fn deck_rules(difficulty: Difficulty) -> &'static [DeckRule] {
    match difficulty {
        Difficulty::Gey => GEY_RULES,
        Difficulty::Goofy => GOOFY_RULES,
        Difficulty::Gooner => GOONER_RULES,
        Difficulty::Gangster => GANGSTER_RULES,
        Difficulty::Gigachad => &[],
    }
}

/// Pick the AI's hand from `pool`.
///
/// Returns `hand_size` cards whenever the pool holds at least that many, and
/// the whole pool (strongest first) otherwise.
pub fn select_ai_deck<R: DeckRng>(
    pool: &[Card],
    difficulty: Difficulty,
    hand_size: usize,
    rng: &mut R,
) -> Vec<Card> {
    if pool.is_empty() {
        return Vec::new();
    }

    let sorted = strongest(pool, pool.len());

    for rule in deck_rules(difficulty) {
        let mut candidates: Vec<Card> = sorted
            .iter()
            .filter(|card| rule.filter.matches(card))
            .cloned()
            .collect();

        if candidates.len() < hand_size {
            continue;
        }
        if rule.shuffle {
            rng.shuffle(&mut candidates);
        }
        candidates.truncate(hand_size);
        return candidates;
    }

    log::debug!(
        "select_ai_deck: no {} rule filled {} cards, using strongest",
        difficulty,
        hand_size
    );
    strongest(&sorted, hand_size)
}
