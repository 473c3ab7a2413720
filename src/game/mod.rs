//! Multi-seat blackjack round state machine.
//!
//! A [`Game`] owns the shoe, the running count, every seat, and the dealer
//! hand. Operations return `Result` and either fully apply or leave the
//! table untouched; the presentation layer drives the machine through
//! phase transitions and reads [`TableState`] snapshots between them.

mod actions;
mod bet;
mod dealer;
mod insurance;
mod state;

pub use state::{RoundPhase, SavedBankroll, TableState};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::count::{Counter, CountSnapshot};
use crate::hand::{DealerHand, Seat};
use crate::options::{BlackjackConfig, Cents};
use crate::shoe::Shoe;
use crate::strategy::{self, Action};

/// Most hands a single seat can hold after splits.
pub const MAX_HANDS_PER_SEAT: usize = 3;

/// Largest single chip purchase, in cents.
pub const MAX_REBUY: Cents = 100_000;

/// Starting bankroll and buy-in for a fresh human seat, in cents.
pub const DEFAULT_BUY_IN: Cents = 100_000;

/// A blackjack table with one human seat and zero or more bot seats.
#[derive(Debug)]
pub struct Game {
    config: BlackjackConfig,
    shoe: Shoe,
    counter: Counter,
    phase: RoundPhase,
    seats: Vec<Seat>,
    dealer: DealerHand,
    current_seat: usize,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a table with a freshly shuffled shoe in the `Betting` phase.
    ///
    /// Seat 0 is the human; `config.bot_seats` bot seats follow. When
    /// `saved` is present the human seat resumes with that bankroll,
    /// otherwise it starts at [`DEFAULT_BUY_IN`].
    #[must_use]
    pub fn new(config: BlackjackConfig, saved: Option<SavedBankroll>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(config.decks, config.penetration_pct, 0, &mut rng);
        let human = match saved {
            Some(s) => Seat::new_human(s.bankroll, s.buy_in),
            None => Seat::new_human(DEFAULT_BUY_IN, DEFAULT_BUY_IN),
        };
        let mut seats = vec![human];
        for _ in 0..config.bot_seats {
            seats.push(Seat::new_bot());
        }
        Self {
            config,
            shoe,
            counter: Counter::new(),
            phase: RoundPhase::Betting,
            seats,
            dealer: DealerHand::new(),
            current_seat: 0,
            rng,
        }
    }

    /// The human seat's bankroll record, for persistence.
    #[must_use]
    pub fn saved_bankroll(&self) -> SavedBankroll {
        let human = &self.seats[0];
        SavedBankroll {
            bankroll: human.bankroll(),
            buy_in: human.buy_in(),
        }
    }

    /// Cards above the penetration cutoff that can still be dealt.
    ///
    /// The cutoff is fractional, so the result is too.
    #[must_use]
    pub fn playable_cards_remaining(&self) -> f64 {
        #[expect(clippy::cast_precision_loss, reason = "shoe sizes are small")]
        let remaining = self.shoe.cards_remaining() as f64;
        #[expect(clippy::cast_precision_loss, reason = "shoe sizes are small")]
        let total = self.shoe.total_cards() as f64;
        let cutoff = total * (1.0 - self.config.penetration_pct);
        (remaining - cutoff).max(0.0)
    }

    /// Count figures computed against the playable remainder of the shoe.
    #[must_use]
    pub fn count_snapshot(&self) -> CountSnapshot {
        self.counter.snapshot_with_playable(
            self.shoe.cards_remaining(),
            self.playable_cards_remaining(),
        )
    }

    /// Full table snapshot for the presentation layer.
    #[must_use]
    pub fn state(&self) -> TableState {
        TableState {
            phase: self.phase,
            seats: self.seats.clone(),
            dealer: self.dealer.clone(),
            current_seat: self.current_seat,
            snapshot: self.count_snapshot(),
            penetration: self.shoe.penetration_dealt(),
            total_cards: self.shoe.total_cards(),
            needs_shuffle: self.should_reshuffle(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the shoe has been dealt past its penetration cutoff.
    #[must_use]
    pub fn should_reshuffle(&self) -> bool {
        self.shoe.reached_penetration()
    }

    /// Reshuffles the full shoe and resets the running count.
    pub fn reshuffle_now(&mut self) {
        self.shoe.reshuffle(self.config.decks, 0, &mut self.rng);
        self.counter.reset();
    }

    /// Basic-strategy (and, when enabled, index-deviation) suggestion for
    /// the given hand. Returns `Stand` when the seat, hand, or dealer
    /// upcard is missing.
    #[must_use]
    pub fn suggested_action(&self, seat: usize, hand: usize) -> Action {
        let Some(cards) = self.hand_cards(seat, hand) else {
            return Action::Stand;
        };
        let Some(up) = self.dealer.up_card() else {
            return Action::Stand;
        };
        let tc = self.count_snapshot().true_count;
        strategy::suggest_action(cards, up.rank, tc, self.config.enable_index_deviations)
    }

    /// The index deviation the suggestion came from, if any. `None` when
    /// deviations are disabled or basic strategy already agrees.
    #[must_use]
    pub fn deviation_hint(&self, seat: usize, hand: usize) -> Option<&'static strategy::Deviation> {
        if !self.config.enable_index_deviations {
            return None;
        }
        let cards = self.hand_cards(seat, hand)?;
        let up = self.dealer.up_card()?;
        let tc = self.count_snapshot().true_count;
        strategy::applicable_deviation(cards, up.rank, tc)
    }

    /// Whether the insurance index (TC >= +3) says to take insurance.
    #[must_use]
    pub fn should_take_insurance(&self) -> bool {
        strategy::should_take_insurance(
            self.count_snapshot().true_count,
            self.config.enable_index_deviations,
        )
    }

    /// Table configuration.
    #[must_use]
    pub const fn config(&self) -> &BlackjackConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect where it is read: bet
    /// limits at the next bet, payout at the next settlement, deck count
    /// at the next shuffle. The seat roster is not rebuilt.
    pub fn set_config(&mut self, config: BlackjackConfig) {
        self.config = config;
    }

    fn hand_cards(&self, seat: usize, hand: usize) -> Option<&[Card]> {
        Some(self.seats.get(seat)?.hands().get(hand)?.cards())
    }

    /// Replaces the shoe contents with a fixed card order, for
    /// deterministic tests and scripted demonstrations.
    pub fn rig_shoe(&mut self, cards: Vec<Card>) {
        self.shoe = Shoe::from_cards(cards, self.config.penetration_pct);
        self.counter.reset();
    }
}
