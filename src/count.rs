//! Hi-Lo running count and true-count snapshots.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// A Hi-Lo card counter.
///
/// The running count is the sum of [`crate::card::Rank::hi_lo`] over every
/// card observed since the last reset. Reset wholesale on reshuffle.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    running: i32,
    seen: u32,
}

/// Derived count figures, recomputed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountSnapshot {
    /// Raw Hi-Lo running count.
    pub running_count: i32,
    /// Running count normalized by decks remaining, floored toward
    /// negative infinity.
    pub true_count: i32,
    /// Decks remaining for display, rounded to one decimal.
    pub decks_remaining: f64,
    /// Undealt cards physically left in the shoe.
    pub cards_remaining: usize,
}

impl Counter {
    /// Creates a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { running: 0, seen: 0 }
    }

    /// Folds one observed card into the running count.
    pub const fn observe(&mut self, card: Card) {
        self.running += card.rank.hi_lo();
        self.seen += 1;
    }

    /// Zeroes the running count and the cards-seen total.
    pub const fn reset(&mut self) {
        self.running = 0;
        self.seen = 0;
    }

    /// Current running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running
    }

    /// Number of cards observed since the last reset.
    #[must_use]
    pub const fn cards_seen(&self) -> u32 {
        self.seen
    }

    /// Snapshot where every remaining card is playable (drill mode).
    #[must_use]
    pub fn snapshot(&self, cards_remaining: usize) -> CountSnapshot {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let playable = cards_remaining as f64;
        self.snapshot_with_playable(cards_remaining, playable)
    }

    /// Snapshot against an explicit playable remainder.
    ///
    /// The full game passes a remainder that excludes cards beyond the
    /// penetration cutoff, so the true count reflects cards that will
    /// actually still be dealt this shoe. The remainder is fractional
    /// because the cutoff rarely lands on a whole card.
    ///
    /// Decks remaining for the true count are rounded *up* per counting
    /// convention; the division itself floors toward negative infinity
    /// (a running count of -5 over 2 decks gives -3, not -2).
    #[must_use]
    pub fn snapshot_with_playable(
        &self,
        cards_remaining: usize,
        playable_remaining: f64,
    ) -> CountSnapshot {
        let decks_for_tc = if playable_remaining > 0.0 {
            (playable_remaining / 52.0).ceil() as i32
        } else {
            0
        };
        let true_count = if decks_for_tc > 0 {
            self.running.div_euclid(decks_for_tc)
        } else {
            0
        };

        CountSnapshot {
            running_count: self.running,
            true_count,
            decks_remaining: (playable_remaining / 52.0 * 10.0).round() / 10.0,
            cards_remaining,
        }
    }
}
