//! Hand evaluation, basic strategy, and Hi-Lo index deviations.
//!
//! Everything here is a pure function over well-formed input: a hand and
//! dealer combination absent from every table resolves through a
//! documented fallback, never an error.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, draw exactly one card, then stand or bust.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet and end the hand.
    Surrender,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hit => "HIT",
            Self::Stand => "STAND",
            Self::Double => "DOUBLE",
            Self::Split => "SPLIT",
            Self::Surrender => "SURRENDER",
        };
        f.write_str(name)
    }
}

/// Evaluated hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandValue {
    /// Best total not exceeding 21 when possible.
    pub value: u8,
    /// Whether an ace is still counted as 11 in the final total.
    pub is_soft: bool,
}

/// Sums a hand, demoting aces from 11 to 1 one at a time while the total
/// busts and an ace is still counted high.
#[must_use]
pub fn hand_value(cards: &[Card]) -> HandValue {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value = value.saturating_add(card.rank.pip_value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    HandValue {
        value,
        is_soft: aces > 0,
    }
}

/// Canonical pair rank of a two-card hand, if it is a pair. Ten-value
/// cards match each other regardless of face: a 10-J hand pairs as tens.
#[must_use]
pub fn pair_rank(cards: &[Card]) -> Option<Rank> {
    match cards {
        [a, b] if a.rank.canonical() == b.rank.canonical() => Some(a.rank.canonical()),
        _ => None,
    }
}

/// Whether the hand is exactly two cards of matching pair rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    pair_rank(cards).is_some()
}

use Action::{Double as D, Hit as H, Split as P, Stand as S, Surrender as R};

/// Dealer upcard column: 2 through 9, then the shared ten column, then ace.
const fn upcard_col(rank: Rank) -> usize {
    match rank {
        Rank::Two => 0,
        Rank::Three => 1,
        Rank::Four => 2,
        Rank::Five => 3,
        Rank::Six => 4,
        Rank::Seven => 5,
        Rank::Eight => 6,
        Rank::Nine => 7,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 8,
        Rank::Ace => 9,
    }
}

/// Hard totals 5..=21 by dealer upcard.
const HARD: [[Action; 10]; 17] = [
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, D], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, R, H], // 15
    [S, S, S, S, S, H, H, R, R, R], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Soft totals 13..=21 by dealer upcard.
const SOFT: [[Action; 10]; 9] = [
    [H, H, H, D, D, H, H, H, H, H], // A,2
    [H, H, H, D, D, H, H, H, H, H], // A,3
    [H, H, D, D, D, H, H, H, H, H], // A,4
    [H, H, D, D, D, H, H, H, H, H], // A,5
    [H, D, D, D, D, H, H, H, H, H], // A,6
    [S, D, D, D, D, S, S, H, H, H], // A,7
    [S, S, S, S, S, S, S, S, S, S], // A,8
    [S, S, S, S, S, S, S, S, S, S], // A,9
    [S, S, S, S, S, S, S, S, S, S], // A,10
];

const PAIR_ACES: [Action; 10] = [P, P, P, P, P, P, P, P, P, P];
const PAIR_TENS: [Action; 10] = [S, S, S, S, S, S, S, S, S, S];
const PAIR_NINES: [Action; 10] = [P, P, P, P, P, S, P, P, S, S];
const PAIR_EIGHTS: [Action; 10] = [P, P, P, P, P, P, P, P, P, P];
const PAIR_SEVENS: [Action; 10] = [P, P, P, P, P, P, H, H, H, H];
const PAIR_SIXES: [Action; 10] = [P, P, P, P, P, H, H, H, H, H];
const PAIR_FIVES: [Action; 10] = [D, D, D, D, D, D, D, D, H, H];
const PAIR_FOURS: [Action; 10] = [H, H, H, P, P, H, H, H, H, H];
const PAIR_THREES: [Action; 10] = [P, P, P, P, P, P, H, H, H, H];
const PAIR_TWOS: [Action; 10] = [P, P, P, P, P, P, H, H, H, H];

const fn lookup_pair(rank: Rank, col: usize) -> Option<Action> {
    let row: &[Action; 10] = match rank {
        Rank::Ace => &PAIR_ACES,
        Rank::Ten => &PAIR_TENS,
        Rank::Nine => &PAIR_NINES,
        Rank::Eight => &PAIR_EIGHTS,
        Rank::Seven => &PAIR_SEVENS,
        Rank::Six => &PAIR_SIXES,
        Rank::Five => &PAIR_FIVES,
        Rank::Four => &PAIR_FOURS,
        Rank::Three => &PAIR_THREES,
        Rank::Two => &PAIR_TWOS,
        // Face ranks are canonicalized to Ten before lookup.
        Rank::Jack | Rank::Queen | Rank::King => return None,
    };
    Some(row[col])
}

fn lookup_soft(total: u8, col: usize) -> Option<Action> {
    if (13..=21).contains(&total) {
        Some(SOFT[(total - 13) as usize][col])
    } else {
        None
    }
}

fn lookup_hard(total: u8, col: usize) -> Option<Action> {
    if (5..=21).contains(&total) {
        Some(HARD[(total - 5) as usize][col])
    } else {
        None
    }
}

/// Basic-strategy lookup: pair table first, then soft, then hard, each
/// keyed on the dealer's upcard. A total absent from every table falls
/// back to hit under 17, stand otherwise.
#[must_use]
pub fn basic_strategy_action(cards: &[Card], dealer_upcard: Rank) -> Action {
    let col = upcard_col(dealer_upcard);

    if let Some(rank) = pair_rank(cards) {
        if let Some(action) = lookup_pair(rank, col) {
            return action;
        }
    }

    let hv = hand_value(cards);
    if hv.is_soft {
        if let Some(action) = lookup_soft(hv.value, col) {
            return action;
        }
    }
    if let Some(action) = lookup_hard(hv.value, col) {
        return action;
    }

    if hv.value < 17 { Action::Hit } else { Action::Stand }
}

/// A count-indexed departure from basic strategy for a specific hand
/// total and dealer upcard, profitable from `threshold` true count up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deviation {
    /// Player hand total the deviation applies to.
    pub hand_total: u8,
    /// Dealer upcard, canonical ([`Rank::Ten`] covers any ten-value card).
    pub dealer_upcard: Rank,
    /// Minimum true count at which the deviation applies.
    pub threshold: i32,
    /// The action to take instead of basic strategy.
    pub action: Action,
    /// Human-readable summary for hint panels.
    pub description: &'static str,
}

const fn dev(
    hand_total: u8,
    dealer_upcard: Rank,
    threshold: i32,
    action: Action,
    description: &'static str,
) -> Deviation {
    Deviation {
        hand_total,
        dealer_upcard,
        threshold,
        action,
        description,
    }
}

/// The Illustrious 18 plus the Fab 4 surrenders (insurance at +3 lives in
/// [`should_take_insurance`]), in lookup priority order: surrenders before
/// all non-surrenders, higher thresholds before lower within each class.
/// A surrender deviation therefore overrides a stand/double deviation at
/// the same hand and upcard.
pub const DEVIATIONS: &[Deviation] = &[
    dev(14, Rank::Ten, 3, R, "14 vs 10: Surrender at TC ≥ +3"),
    dev(15, Rank::Nine, 2, R, "15 vs 9: Surrender at TC ≥ +2"),
    dev(16, Rank::Nine, 1, R, "16 vs 9: Surrender at TC ≥ +1"),
    dev(15, Rank::Ace, 1, R, "15 vs A: Surrender at TC ≥ +1"),
    dev(16, Rank::Ten, 0, R, "16 vs 10: Surrender at TC ≥ 0"),
    dev(15, Rank::Ten, 0, R, "15 vs 10: Surrender at TC ≥ 0"),
    dev(16, Rank::Ace, -1, R, "16 vs A: Surrender at TC ≥ -1"),
    dev(20, Rank::Five, 5, D, "20 vs 5: Double at TC ≥ +5"),
    dev(16, Rank::Nine, 5, S, "16 vs 9: Stand at TC ≥ +5"),
    dev(16, Rank::Ace, 5, S, "16 vs A: Stand at TC ≥ +5"),
    dev(15, Rank::Ace, 5, S, "15 vs A: Stand at TC ≥ +5"),
    dev(15, Rank::Ten, 4, S, "15 vs 10: Stand at TC ≥ +4"),
    dev(20, Rank::Six, 4, D, "20 vs 6: Double at TC ≥ +4"),
    dev(10, Rank::Ten, 4, D, "10 vs 10: Double at TC ≥ +4"),
    dev(10, Rank::Ace, 4, D, "10 vs A: Double at TC ≥ +4"),
    dev(12, Rank::Two, 3, S, "12 vs 2: Stand at TC ≥ +3"),
    dev(9, Rank::Seven, 3, D, "9 vs 7: Double at TC ≥ +3"),
    dev(12, Rank::Three, 2, S, "12 vs 3: Stand at TC ≥ +2"),
    dev(8, Rank::Six, 2, D, "8 vs 6: Double at TC ≥ +2"),
    dev(11, Rank::Ace, 1, D, "11 vs A: Double at TC ≥ +1"),
    dev(9, Rank::Two, 1, D, "9 vs 2: Double at TC ≥ +1"),
    dev(16, Rank::Ten, 0, S, "16 vs 10: Stand at TC ≥ 0"),
    dev(12, Rank::Four, 0, S, "12 vs 4: Stand at TC ≥ 0"),
    dev(13, Rank::Two, -1, S, "13 vs 2: Stand at TC ≥ -1"),
    dev(12, Rank::Six, -1, S, "12 vs 6: Stand at TC ≥ -1"),
    dev(12, Rank::Five, -2, S, "12 vs 5: Stand at TC ≥ -2"),
    dev(13, Rank::Three, -2, S, "13 vs 3: Stand at TC ≥ -2"),
];

/// First catalogue entry matching the hand total, the dealer upcard, and
/// `true_count >= threshold`. The catalogue is statically ordered, so the
/// first match is the highest-priority one.
#[must_use]
pub fn applicable_deviation(
    cards: &[Card],
    dealer_upcard: Rank,
    true_count: i32,
) -> Option<&'static Deviation> {
    let total = hand_value(cards).value;
    let upcard = dealer_upcard.canonical();
    DEVIATIONS.iter().find(|d| {
        d.hand_total == total && d.dealer_upcard == upcard && true_count >= d.threshold
    })
}

/// True count at or above which insurance becomes profitable under Hi-Lo.
pub const INSURANCE_INDEX: i32 = 3;

/// Whether to take insurance. Never, under plain basic strategy; at
/// `TC >= +3` when playing the count.
#[must_use]
pub const fn should_take_insurance(true_count: i32, enable_deviations: bool) -> bool {
    enable_deviations && true_count >= INSURANCE_INDEX
}

/// Recommends the statistically best action for the hand.
///
/// A two-card 21 always stands. Index deviations, when enabled, take
/// precedence over the basic-strategy tables.
#[must_use]
pub fn suggest_action(
    cards: &[Card],
    dealer_upcard: Rank,
    true_count: i32,
    enable_deviations: bool,
) -> Action {
    if cards.len() == 2 && hand_value(cards).value == 21 {
        return Action::Stand;
    }

    if enable_deviations {
        if let Some(deviation) = applicable_deviation(cards, dealer_upcard, true_count) {
            return deviation.action;
        }
    }

    basic_strategy_action(cards, dealer_upcard)
}
