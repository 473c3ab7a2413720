//! Strategy chart and deviation tests.

use twentyone::strategy::{
    applicable_deviation, basic_strategy_action, hand_value, is_pair, should_take_insurance,
    suggest_action,
};
use twentyone::{Action, Card, Rank, Suit};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks
        .iter()
        .map(|&rank| Card {
            rank,
            suit: Suit::Hearts,
        })
        .collect()
}

#[test]
fn hand_values_demote_aces_as_needed() {
    let soft = hand_value(&cards(&[Rank::Ace, Rank::Six]));
    assert_eq!(soft.value, 17);
    assert!(soft.is_soft);

    let hardened = hand_value(&cards(&[Rank::Ace, Rank::Six, Rank::Ten]));
    assert_eq!(hardened.value, 17);
    assert!(!hardened.is_soft);

    let two_aces = hand_value(&cards(&[Rank::Ace, Rank::Ace]));
    assert_eq!(two_aces.value, 12);
    assert!(two_aces.is_soft);

    let natural = hand_value(&cards(&[Rank::Ace, Rank::King]));
    assert_eq!(natural.value, 21);
    assert!(natural.is_soft);
}

#[test]
fn face_cards_pair_with_tens() {
    assert!(is_pair(&cards(&[Rank::King, Rank::Ten])));
    assert!(is_pair(&cards(&[Rank::Jack, Rank::Queen])));
    assert!(is_pair(&cards(&[Rank::Eight, Rank::Eight])));
    assert!(!is_pair(&cards(&[Rank::Nine, Rank::Ten])));
    assert!(!is_pair(&cards(&[Rank::Eight, Rank::Eight, Rank::Eight])));
}

#[test]
fn hard_chart_spot_checks() {
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Five, Rank::Six]), Rank::Five),
        Action::Double
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Six]), Rank::Ten),
        Action::Surrender
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Five]), Rank::Ten),
        Action::Surrender
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Two]), Rank::Two),
        Action::Hit
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Three]), Rank::Two),
        Action::Stand
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Seven]), Rank::Ace),
        Action::Stand
    );
}

#[test]
fn soft_chart_spot_checks() {
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ace, Rank::Seven]), Rank::Three),
        Action::Double
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ace, Rank::Seven]), Rank::Nine),
        Action::Hit
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ace, Rank::Six]), Rank::Three),
        Action::Double
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ace, Rank::Eight]), Rank::Six),
        Action::Stand
    );
}

#[test]
fn pair_chart_spot_checks() {
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Eight, Rank::Eight]), Rank::Ten),
        Action::Split
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ace, Rank::Ace]), Rank::Ace),
        Action::Split
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::King]), Rank::Six),
        Action::Stand
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Five, Rank::Five]), Rank::Nine),
        Action::Double
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Nine, Rank::Nine]), Rank::Seven),
        Action::Stand
    );
}

#[test]
fn face_upcards_read_the_ten_column() {
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Ten, Rank::Six]), Rank::Jack),
        Action::Surrender
    );
    assert_eq!(
        basic_strategy_action(&cards(&[Rank::Nine, Rank::Nine]), Rank::Queen),
        Action::Stand
    );
}

#[test]
fn deviations_trigger_at_their_thresholds() {
    let sixteen = cards(&[Rank::Ten, Rank::Six]);
    // 16 vs 10 stands at TC 0 and surrenders at the same index; the
    // surrender entry wins.
    let dev = applicable_deviation(&sixteen, Rank::Ten, 0).unwrap();
    assert_eq!(dev.action, Action::Surrender);
    assert!(applicable_deviation(&sixteen, Rank::Ten, -1).is_none());

    let twelve = cards(&[Rank::Ten, Rank::Two]);
    let dev = applicable_deviation(&twelve, Rank::Two, 3).unwrap();
    assert_eq!(dev.action, Action::Stand);
    assert!(applicable_deviation(&twelve, Rank::Two, 2).is_none());

    let thirteen = cards(&[Rank::Ten, Rank::Three]);
    let dev = applicable_deviation(&thirteen, Rank::Two, -1).unwrap();
    assert_eq!(dev.action, Action::Stand);
}

#[test]
fn surrender_deviation_outranks_stand_at_sixteen_vs_nine() {
    let sixteen = cards(&[Rank::Nine, Rank::Seven]);
    // At TC +5 both the surrender (+1) and stand (+5) entries match.
    let dev = applicable_deviation(&sixteen, Rank::Nine, 5).unwrap();
    assert_eq!(dev.action, Action::Surrender);
}

#[test]
fn deviations_match_face_upcards() {
    let sixteen = cards(&[Rank::Ten, Rank::Six]);
    let dev = applicable_deviation(&sixteen, Rank::King, 2).unwrap();
    assert_eq!(dev.action, Action::Surrender);
}

#[test]
fn suggestions_prefer_deviations_when_enabled() {
    let twelve = cards(&[Rank::Ten, Rank::Two]);
    assert_eq!(suggest_action(&twelve, Rank::Two, 3, true), Action::Stand);
    assert_eq!(suggest_action(&twelve, Rank::Two, 3, false), Action::Hit);
}

#[test]
fn two_card_twenty_one_always_stands() {
    let natural = cards(&[Rank::Ace, Rank::King]);
    assert_eq!(suggest_action(&natural, Rank::Six, 10, true), Action::Stand);
}

#[test]
fn insurance_index_is_plus_three_with_deviations_only() {
    assert!(should_take_insurance(3, true));
    assert!(should_take_insurance(7, true));
    assert!(!should_take_insurance(2, true));
    assert!(!should_take_insurance(10, false));
}
