//! Round phase and table snapshot types.

use serde::{Deserialize, Serialize};

use crate::count::CountSnapshot;
use crate::hand::{DealerHand, Seat};
use crate::options::Cents;

/// Phase of the blackjack round state machine.
///
/// A round cycles from `Betting` through `Insurance` (only when the
/// dealer shows an ace), `Player`, `Dealer`, and `Settle` (via
/// `Shuffling` when penetration was reached), then back to `Betting` on
/// an explicit new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    /// Accepting bets and hand changes.
    Betting,
    /// Dealer shows an ace; insurance decisions pending.
    Insurance,
    /// Waiting for player actions.
    Player,
    /// Dealer plays out their hand.
    Dealer,
    /// Round settled; awaiting an explicit new round.
    Settle,
    /// Penetration reached; a shuffle must run before the next round.
    Shuffling,
}

/// Full read-only snapshot of the table for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct TableState {
    /// Current phase.
    pub phase: RoundPhase,
    /// Every seat, human first.
    pub seats: Vec<Seat>,
    /// The dealer's hand.
    pub dealer: DealerHand,
    /// Index of the seat currently acting.
    pub current_seat: usize,
    /// Count figures against the playable remainder.
    pub snapshot: CountSnapshot,
    /// Fraction of the shoe dealt, in `[0, 1]`.
    pub penetration: f64,
    /// Total playable cards loaded in the shoe.
    pub total_cards: usize,
    /// Whether penetration has been reached and a shuffle is due.
    pub needs_shuffle: bool,
}

/// The human seat's persisted record. The hosting application saves it
/// after every bankroll-affecting operation and passes it back at
/// construction to resume across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBankroll {
    /// Bankroll in cents.
    pub bankroll: Cents,
    /// Cumulative buy-in total in cents.
    pub buy_in: Cents,
}
