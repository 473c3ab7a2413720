//! Shoe, counter, and serialization tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use twentyone::{
    BlackjackConfig, Card, Counter, DECK_SIZE, Game, Rank, SavedBankroll, Shoe, Suit,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank) -> Card {
    Card {
        rank,
        suit: Suit::Diamonds,
    }
}

#[test]
fn shoe_deals_every_playable_card_exactly_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut shoe = Shoe::new(2, 0.75, 0, &mut rng);
    assert_eq!(shoe.total_cards(), 2 * DECK_SIZE);

    let mut seen = Vec::new();
    while let Some(card) = shoe.deal_one() {
        seen.push(card);
    }
    assert_eq!(seen.len(), 2 * DECK_SIZE);
    assert_eq!(shoe.cards_remaining(), 0);
    assert!(shoe.deal_one().is_none());

    // Two of each card across two decks.
    let distinct: HashSet<String> = seen.iter().map(Card::filename).collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn left_out_cards_shrink_the_playable_shoe() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let shoe = Shoe::new(1, 1.0, 5, &mut rng);
    assert_eq!(shoe.total_cards(), DECK_SIZE - 5);
    assert_eq!(shoe.left_out_cards().len(), 5);
}

#[test]
fn penetration_is_reached_at_the_cutoff() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut shoe = Shoe::new(1, 0.5, 0, &mut rng);
    for _ in 0..25 {
        shoe.deal_one();
    }
    assert!(!shoe.reached_penetration());
    shoe.deal_one();
    assert!(shoe.reached_penetration());
}

#[test]
fn hi_lo_tags_sum_over_observations() {
    let mut counter = Counter::new();
    for rank in [Rank::Two, Rank::Six, Rank::Seven, Rank::King, Rank::Ace] {
        counter.observe(card(rank));
    }
    // +1 +1 0 -1 -1
    assert_eq!(counter.running_count(), 0);
    assert_eq!(counter.cards_seen(), 5);

    counter.observe(card(Rank::Five));
    assert_eq!(counter.running_count(), 1);
    counter.reset();
    assert_eq!(counter.running_count(), 0);
    assert_eq!(counter.cards_seen(), 0);
}

#[test]
fn true_count_floors_toward_negative_infinity() {
    let mut counter = Counter::new();
    for _ in 0..7 {
        counter.observe(card(Rank::King));
    }
    assert_eq!(counter.running_count(), -7);
    // Two decks remaining: -7 / 2 floors to -4.
    let snapshot = counter.snapshot(2 * DECK_SIZE);
    assert_eq!(snapshot.true_count, -4);
    assert_eq!(snapshot.decks_remaining, 2.0);
}

#[test]
fn partial_decks_round_up_for_the_true_count() {
    let mut counter = Counter::new();
    for _ in 0..6 {
        counter.observe(card(Rank::Two));
    }
    // 60 cards remaining counts as two decks: +6 / 2 = +3.
    let snapshot = counter.snapshot(60);
    assert_eq!(snapshot.true_count, 3);
    // Display rounds to one decimal.
    assert_eq!(snapshot.decks_remaining, 1.2);
}

#[test]
fn empty_remainder_zeroes_the_true_count() {
    let mut counter = Counter::new();
    counter.observe(card(Rank::Five));
    let snapshot = counter.snapshot(0);
    assert_eq!(snapshot.true_count, 0);
    assert_eq!(snapshot.running_count, 1);
}

#[test]
fn saved_bankroll_round_trips_through_json() {
    let saved = SavedBankroll {
        bankroll: 87_500,
        buy_in: 200_000,
    };
    let json = serde_json::to_string(&saved).unwrap();
    let back: SavedBankroll = serde_json::from_str(&json).unwrap();
    assert_eq!(back, saved);
}

#[test]
fn table_state_serializes_with_wire_names() {
    let game = Game::new(BlackjackConfig::default(), None, 3);
    let value = serde_json::to_value(game.state()).unwrap();
    assert_eq!(value["phase"], "BETTING");
    assert_eq!(value["seats"][0]["hands"][0]["status"], "active");
    assert_eq!(value["total_cards"], 312);
}

#[test]
fn card_filenames_match_the_asset_scheme() {
    let ace = Card {
        rank: Rank::Ace,
        suit: Suit::Spades,
    };
    assert_eq!(ace.filename(), "SPADE-1.svg");
    let queen = Card {
        rank: Rank::Queen,
        suit: Suit::Hearts,
    };
    assert_eq!(queen.filename(), "HEART-12-QUEEN.svg");
}
