//! Counting drill: flip through a shoe and keep the running count.
//!
//! The drill deals cards one at a time, or in small groups when group
//! mode is on, and tracks the Hi-Lo count alongside so the UI can grade
//! the player's answer at any point. Leaving cards out of the shoe turns
//! the end of the drill into a test: the player calls the final count,
//! and [`DrillSession::expected_final_count`] is the right answer.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::count::{CountSnapshot, Counter};
use crate::options::DrillConfig;
use crate::shoe::Shoe;

/// Result of one drill advance.
#[derive(Debug, Clone)]
pub struct DrillStep {
    /// Whether the shoe is exhausted after this step.
    pub done: bool,
    /// The cards dealt this step, empty when already exhausted.
    pub cards: Vec<Card>,
    /// Count figures after observing this step's cards.
    pub snapshot: CountSnapshot,
}

/// A card-counting practice session over a dedicated shoe.
#[derive(Debug)]
pub struct DrillSession {
    config: DrillConfig,
    shoe: Shoe,
    counter: Counter,
    rng: ChaCha8Rng,
}

impl DrillSession {
    /// Starts a drill with a freshly shuffled shoe.
    #[must_use]
    pub fn new(config: DrillConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(config.decks, 1.0, config.leave_out_cards, &mut rng);
        Self {
            config,
            shoe,
            counter: Counter::new(),
            rng,
        }
    }

    /// How many cards the next step should flip.
    ///
    /// Single cards outside group mode. In group mode the size adapts to
    /// the remainder of the shoe: plenty left means a uniformly random
    /// group of 2 to the maximum, a tail shorter than the maximum goes
    /// out whole, and in between the size is chosen so the shoe never
    /// strands a single final card.
    fn group_size(&mut self) -> usize {
        if !self.config.enable_group_mode {
            return 1;
        }
        let remaining = self.shoe.cards_remaining();
        let max = self.config.max_group_size;
        if remaining >= 2 * max {
            return self.rng.random_range(2..=max);
        }
        if remaining <= max {
            return remaining;
        }
        for size in (2..=max).rev() {
            let leftover = remaining % size;
            if leftover == 0 || leftover >= 2 {
                return size;
            }
        }
        max
    }

    /// Deals the next card or group, observing each card in the count.
    ///
    /// On an exhausted shoe returns `done` with no cards and a snapshot
    /// over zero remaining.
    pub fn next(&mut self) -> DrillStep {
        if self.shoe.cards_remaining() == 0 {
            return DrillStep {
                done: true,
                cards: Vec::new(),
                snapshot: self.counter.snapshot(0),
            };
        }
        let size = self.group_size();
        let mut cards = Vec::with_capacity(size);
        for _ in 0..size {
            let Some(card) = self.shoe.deal_one() else {
                break;
            };
            self.counter.observe(card);
            cards.push(card);
        }
        DrillStep {
            done: self.shoe.cards_remaining() == 0,
            cards,
            snapshot: self.counter.snapshot(self.shoe.cards_remaining()),
        }
    }

    /// Count figures at the current position.
    #[must_use]
    pub fn snapshot(&self) -> CountSnapshot {
        self.counter.snapshot(self.shoe.cards_remaining())
    }

    /// Whether every playable card has been dealt.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shoe.cards_remaining() == 0
    }

    /// Reshuffles the shoe (drawing a fresh left-out set) and zeroes the
    /// count.
    pub fn reset(&mut self) {
        self.shoe.reshuffle(
            self.config.decks,
            self.config.leave_out_cards,
            &mut self.rng,
        );
        self.counter.reset();
    }

    /// The cards withheld from this shoe, for the end-of-drill reveal.
    #[must_use]
    pub fn left_out_cards(&self) -> &[Card] {
        self.shoe.left_out_cards()
    }

    /// The running count a perfect counter reaches after the full shoe.
    ///
    /// A complete shoe sums to zero, so the dealt portion is the negated
    /// sum of the left-out cards' tags.
    #[must_use]
    pub fn expected_final_count(&self) -> i32 {
        -self
            .shoe
            .left_out_cards()
            .iter()
            .map(|c| c.rank.hi_lo())
            .sum::<i32>()
    }

    /// Drill configuration.
    #[must_use]
    pub const fn config(&self) -> &DrillConfig {
        &self.config
    }
}
