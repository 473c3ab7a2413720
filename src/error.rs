//! Error types for engine operations.
//!
//! Every failure is a caller-correctable precondition violation. A
//! returned error means the operation did not mutate any state.

use thiserror::Error;

/// Errors from adding or removing hands during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Hands can only be added or removed during the betting phase.
    #[error("hands can only be changed during betting")]
    WrongPhase,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand index out of range.
    #[error("hand not found")]
    HandNotFound,
    /// The seat already holds the maximum number of hands.
    #[error("seat already has the maximum number of hands")]
    TooManyHands,
    /// A seat must keep at least one hand.
    #[error("cannot remove a seat's last hand")]
    LastHand,
}

/// Errors from placing or clearing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only be changed during the betting phase.
    #[error("bets can only be changed during betting")]
    WrongPhase,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand index out of range.
    #[error("hand not found")]
    HandNotFound,
    /// The hand already carries a bet.
    #[error("hand already has a bet")]
    AlreadyPlaced,
    /// Bet amount outside the table's min/max limits.
    #[error("bet amount outside table limits")]
    OutOfRange,
    /// The human bankroll cannot cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Clearing a bet requires one to be placed.
    #[error("hand has no bet to clear")]
    NoBet,
}

/// Errors from the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Dealing is only valid from the betting phase.
    #[error("dealing is only valid during betting")]
    WrongPhase,
}

/// Errors from player actions during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player actions are only valid during the player phase.
    #[error("action is only valid during the player phase")]
    WrongPhase,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand index out of range.
    #[error("hand not found")]
    HandNotFound,
    /// The hand has already stood, busted, surrendered, or is a blackjack.
    #[error("hand is not active")]
    HandNotActive,
    /// Double and surrender require exactly two cards.
    #[error("hand does not have exactly two cards")]
    NotTwoCards,
    /// Split requires two cards of matching pair rank.
    #[error("hand is not a pair")]
    NotAPair,
    /// The human bankroll cannot cover the additional bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("shoe is exhausted")]
    ShoeEmpty,
}

/// Errors from the insurance phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance operations are only valid during the insurance phase.
    #[error("insurance is only valid during the insurance phase")]
    WrongPhase,
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand index out of range.
    #[error("hand not found")]
    HandNotFound,
    /// Insurance was already placed on this hand.
    #[error("insurance already placed on this hand")]
    AlreadyPlaced,
    /// The human bankroll cannot cover the insurance stake.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors from dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Dealer play and settlement run after the player phase completes.
    #[error("invalid phase for dealer play or settlement")]
    WrongPhase,
}

/// Errors from the explicit post-settlement shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The pending-shuffle transition only exists in the shuffling phase.
    #[error("no shuffle is pending")]
    WrongPhase,
}

/// Errors from chip rebuys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RebuyError {
    /// Seat index out of range.
    #[error("seat not found")]
    SeatNotFound,
    /// Bot seats never move real currency.
    #[error("bot seats cannot buy chips")]
    BotSeat,
    /// Rebuy amount must be positive and within the per-rebuy cap.
    #[error("rebuy amount out of range")]
    AmountOutOfRange,
}

/// Errors from quiz grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An answer can only be checked against a generated hand.
    #[error("no quiz hand has been generated")]
    NoHand,
}
