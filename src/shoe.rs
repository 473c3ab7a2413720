//! Shoe construction, shuffling, and cursor-based dealing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// A dealing shoe of one or more shuffled decks.
///
/// Cards are dealt front-to-back behind a cursor; dealt cards are never
/// redealt. An optional trailing block of "left-out" cards is carved off
/// after the shuffle and never enters play, as if those cards had never
/// been loaded.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    dealt: usize,
    penetration_pct: f64,
    left_out: Vec<Card>,
}

fn build_decks(num_decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks as usize * crate::card::DECK_SIZE);
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

impl Shoe {
    /// Creates a freshly shuffled shoe.
    ///
    /// `penetration_pct` is the fraction of the shoe dealt before
    /// [`Self::reached_penetration`] reports true. `leave_out_cards` are
    /// removed permanently from the tail of the shuffled sequence.
    #[must_use]
    pub fn new(
        num_decks: u8,
        penetration_pct: f64,
        leave_out_cards: usize,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            dealt: 0,
            penetration_pct,
            left_out: Vec::new(),
        };
        shoe.reshuffle(num_decks, leave_out_cards, rng);
        shoe
    }

    /// Builds an unshuffled shoe from a fixed card sequence. The next deal
    /// comes from the front of `cards`. Intended for deterministic replays
    /// and tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, penetration_pct: f64) -> Self {
        Self {
            cards,
            dealt: 0,
            penetration_pct,
            left_out: Vec::new(),
        }
    }

    /// Replaces the shoe with a fresh uniformly-shuffled sequence and
    /// resets the dealing cursor.
    pub fn reshuffle(&mut self, num_decks: u8, leave_out_cards: usize, rng: &mut ChaCha8Rng) {
        let mut cards = build_decks(num_decks);
        cards.shuffle(rng);
        let cut = cards.len().saturating_sub(leave_out_cards);
        self.left_out = cards.split_off(cut);
        self.cards = cards;
        self.dealt = 0;
    }

    /// Deals the next undealt card, or `None` when the shoe is exhausted.
    /// Exhaustion has no side effect.
    pub fn deal_one(&mut self) -> Option<Card> {
        let card = self.cards.get(self.dealt).copied()?;
        self.dealt += 1;
        Some(card)
    }

    /// Number of undealt cards.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.cards.len() - self.dealt
    }

    /// Number of cards dealt since the last reshuffle.
    #[must_use]
    pub const fn dealt_count(&self) -> usize {
        self.dealt
    }

    /// Total playable cards loaded (left-out cards excluded).
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// Whether the configured penetration fraction has been dealt.
    /// Always false immediately after a reshuffle of a non-empty shoe.
    #[must_use]
    pub fn reached_penetration(&self) -> bool {
        self.penetration_dealt() >= self.penetration_pct
    }

    /// Fraction of the playable shoe dealt so far, in `[0, 1]`.
    #[must_use]
    pub fn penetration_dealt(&self) -> f64 {
        if self.cards.is_empty() {
            return 1.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let dealt_pct = self.dealt as f64 / self.cards.len() as f64;
        dealt_pct
    }

    /// Cards permanently excluded from play this shoe.
    #[must_use]
    pub fn left_out_cards(&self) -> &[Card] {
        &self.left_out
    }
}
