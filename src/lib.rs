//! A blackjack card-counting trainer engine.
//!
//! Three practice surfaces share one rule core: a [`Game`] runs a full
//! multi-seat blackjack round with Hi-Lo counting and strategy hints, a
//! [`DrillSession`] flips through a shoe for pure counting practice, and
//! a [`QuizSession`] deals random situations and grades them against
//! basic strategy and the index deviations.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{BlackjackConfig, Game};
//!
//! let config = BlackjackConfig::default();
//! let mut game = Game::new(config, None, 42);
//! game.place_bet(0, 0, 2_000).unwrap();
//! game.deal().unwrap();
//! ```

pub mod card;
pub mod count;
pub mod drill;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod quiz;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use count::{CountSnapshot, Counter};
pub use drill::{DrillSession, DrillStep};
pub use error::{
    ActionError, BetError, DealError, InsuranceError, QuizError, RebuyError, ReshuffleError,
    SeatError, SettleError,
};
pub use game::{
    DEFAULT_BUY_IN, Game, MAX_HANDS_PER_SEAT, MAX_REBUY, RoundPhase, SavedBankroll, TableState,
};
pub use hand::{DealerHand, Hand, HandStatus, Seat};
pub use options::{
    AdvanceMode, BlackjackConfig, Cents, DrillConfig, Payout, QuizConfig,
};
pub use quiz::{QuizAnswerResult, QuizHand, QuizSession, QuizStats};
pub use shoe::Shoe;
pub use strategy::{Action, Deviation, HandValue};
