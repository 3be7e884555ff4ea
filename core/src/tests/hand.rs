use super::*;
use crate::error::{DeckError, HandError};
use crate::hand::*;

#[test]
fn test_valid_hand() {
    let cards: Vec<RawCard> = (0..5).map(|i| raw_card(&i.to_string(), 10.0)).collect();
    let result = validate_hand(&cards, HAND_SIZE);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_validation_collects_every_error() {
    let cards = vec![
        raw_card("a", 10.0),
        raw_card("", 10.0),
        RawCard {
            id: Some(Scalar::from("c")),
            power: None,
            ..RawCard::default()
        },
        RawCard::default(),
    ];

    let result = validate_hand(&cards, HAND_SIZE);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            HandError::WrongCardCount {
                expected: 5,
                actual: 4
            },
            HandError::MissingId { index: 1 },
            HandError::InvalidPower { index: 2 },
            HandError::MissingId { index: 3 },
            HandError::InvalidPower { index: 3 },
        ]
    );
}

#[test]
fn test_empty_hand_reports_count_only() {
    let result = validate_hand(&[], 5);
    assert_eq!(
        result.errors,
        vec![HandError::WrongCardCount {
            expected: 5,
            actual: 0
        }]
    );
    assert_eq!(
        result.errors[0].to_string(),
        "Must select exactly 5 cards (got 0)"
    );
}

#[test]
fn test_strongest_is_stable() {
    let pool = vec![card("a", 10), card("b", 30), card("c", 10), card("d", 20)];
    let ids: Vec<String> = strongest(&pool, 3).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b", "d", "a"]);
    assert_eq!(strongest(&pool, 10).len(), 4);
}

#[test]
fn test_card_stats() {
    let stats = card_stats(&[card("a", 10), card("b", 25), card("c", 30)]);
    assert_eq!(stats.total_power, 65);
    // 21.67 rounds to 22
    assert_eq!(stats.avg_power, 22);
    assert_eq!(stats.max_power, 30);
    assert_eq!(stats.min_power, 10);
    assert_eq!(stats.count, 3);

    assert_eq!(card_stats(&[]), CardStats::default());
}

#[test]
fn test_power_by_collection() {
    let cards = vec![
        card_in("a", 10, "vibe"),
        card_in("b", 20, "GMVBRS"),
        card_in("c", 30, "vibefid"),
        card_in("d", 40, "custom"),
        card("e", 5),
    ];

    let power = power_by_collection(&cards);
    assert_eq!(power.vibe_power, 55);
    assert_eq!(power.vbrs_power, 20);
    assert_eq!(power.vibefid_power, 30);
}

#[test]
fn test_loose_json_hand_reports_errors() {
    let cards: Vec<RawCard> = serde_json::from_str(
        r#"[
            {"tokenId":"1","power":"50"},
            {"tokenId":7,"power":10},
            {"tokenId":0,"power":[1]}
        ]"#,
    )
    .expect("any field shape decodes");

    assert_eq!(cards[1].card_id().as_deref(), Some("7"));
    assert_eq!(cards[1].to_card().map(|c| c.power), Some(10));

    let result = validate_hand(&cards, 3);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            HandError::InvalidPower { index: 0 },
            HandError::MissingId { index: 2 },
            HandError::InvalidPower { index: 2 },
        ]
    );
}

// ==========================================
// TCG DECKS
// ==========================================

fn deck_of(vbms: usize, nothing: usize) -> Vec<DeckCard> {
    let mut cards: Vec<DeckCard> = (0..vbms)
        .map(|i| DeckCard::new(&format!("vbms-{i}"), DeckCardType::Vbms, 20))
        .collect();
    cards.extend((0..nothing).map(|i| DeckCard::new(&format!("nothing-{i}"), DeckCardType::Nothing, 10)));
    cards
}

fn typed(card_type: DeckCardType, count: usize, power: Power) -> Vec<DeckCard> {
    (0..count)
        .map(|i| DeckCard::new(&format!("{card_type:?}-{i}"), card_type, power))
        .collect()
}

#[test]
fn test_valid_deck() {
    let result = validate_deck(&deck_of(7, 5));
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.total_power, 7 * 20 + 5 * 5);

    assert!(validate_deck(&deck_of(5, 7)).is_valid);
    assert!(validate_deck(&typed(DeckCardType::Vbms, 12, 30)).is_valid);
}

#[test]
fn test_deck_wrong_size() {
    let result = validate_deck(&deck_of(5, 0));
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![DeckError::WrongSize {
            expected: 12,
            actual: 5
        }]
    );
    assert_eq!(result.errors[0].to_string(), "Deck must have exactly 12 cards");

    let empty = validate_deck(&[]);
    assert!(!empty.is_valid);
    assert_eq!(empty.errors.len(), 2);
}

#[test]
fn test_deck_needs_enough_vbms() {
    let result = validate_deck(&deck_of(4, 8));
    assert!(result
        .errors
        .contains(&DeckError::TooFewVbms { min: 5, actual: 4 }));
    assert!(result.errors.iter().any(|e| e.to_string() == "Deck must have at least 5 VBMS/VibeFID cards"));

    // VibeFID counts toward the minimum
    let mut cards = typed(DeckCardType::Vbms, 3, 20);
    cards.extend(typed(DeckCardType::Vibefid, 2, 20));
    cards.extend(typed(DeckCardType::Nothing, 7, 20));
    assert!(validate_deck(&cards).is_valid);
}

#[test]
fn test_deck_limits_nothing_and_other() {
    let mut cards = typed(DeckCardType::Vbms, 5, 20);
    cards.extend(typed(DeckCardType::Nothing, 4, 20));
    cards.extend(typed(DeckCardType::Other, 4, 20));

    let result = validate_deck(&cards);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            DeckError::WrongSize {
                expected: 12,
                actual: 13
            },
            DeckError::TooManyNothing { max: 7, actual: 8 },
        ]
    );
    assert_eq!(
        result.errors[1].to_string(),
        "Deck can have at most 7 Nothing/Other cards"
    );
}

#[test]
fn test_deck_reports_every_error() {
    let result = validate_deck(&deck_of(2, 2));
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_deck_total_power_halves_nothing_and_other() {
    let mut cards = typed(DeckCardType::Vbms, 6, 20);
    cards.extend(typed(DeckCardType::Nothing, 6, 20));
    assert_eq!(validate_deck(&cards).total_power, 180);

    let mut cards = typed(DeckCardType::Vbms, 6, 10);
    cards.extend(typed(DeckCardType::Other, 6, 10));
    assert_eq!(validate_deck(&cards).total_power, 90);

    // floor(15 / 2) = 7
    let mut cards = typed(DeckCardType::Vbms, 5, 10);
    cards.extend(typed(DeckCardType::Nothing, 7, 15));
    assert_eq!(validate_deck(&cards).total_power, 99);
}

#[test]
fn test_lane_power() {
    assert_eq!(DeckCard::new("a", DeckCardType::Vbms, 20).lane_power(), 20);
    assert_eq!(DeckCard::new("a", DeckCardType::Nothing, 20).lane_power(), 10);
    assert_eq!(DeckCard::new("a", DeckCardType::Other, 20).lane_power(), 10);
    assert_eq!(DeckCard::new("a", DeckCardType::Nothing, 15).lane_power(), 7);
    assert_eq!(DeckCard::new("a", DeckCardType::Vbms, 0).lane_power(), 0);

    let lane = vec![
        DeckCard::new("a", DeckCardType::Vbms, 20),
        DeckCard::new("b", DeckCardType::Nothing, 20),
    ];
    assert_eq!(lane_power(&lane), 30);
    assert_eq!(lane_power(&[]), 0);
}

#[test]
fn test_untyped_lane_card_is_full_power() {
    let lane: Vec<DeckCard> = serde_json::from_str(r#"[{"power":30},{"power":20,"type":"other"}]"#)
        .expect("lane json");
    assert_eq!(lane[0].card_type, None);
    assert_eq!(lane_power(&lane), 40);
}
