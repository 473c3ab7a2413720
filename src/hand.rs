//! Player hands, the dealer's hand, and table seats.

use serde::Serialize;

use crate::card::{Card, Rank};
use crate::options::Cents;
use crate::strategy::{self, HandValue};

/// Hand status.
///
/// Transitions are one-directional: `Active` moves to exactly one of the
/// other states and never back. A non-active hand receives no further
/// cards; doubling deals its one card before terminating to stand or bust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandStatus {
    /// Hand can still take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand went over 21.
    Bust,
    /// Natural two-card 21 on the initial deal.
    Blackjack,
    /// Player surrendered for half the bet.
    Surrender,
}

/// A player's hand with its bet and insurance stake.
#[derive(Debug, Clone, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
    bet: Cents,
    status: HandStatus,
    doubled: bool,
    insurance_bet: Cents,
}

impl Hand {
    /// Creates an empty active hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: 0,
            status: HandStatus::Active,
            doubled: false,
            insurance_bet: 0,
        }
    }

    /// Creates the sibling hand of a split: one card, matching bet.
    pub(crate) fn from_split(card: Card, bet: Cents) -> Self {
        Self {
            cards: vec![card],
            bet,
            status: HandStatus::Active,
            doubled: false,
            insurance_bet: 0,
        }
    }

    /// Cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The bet riding on this hand, in cents.
    #[must_use]
    pub const fn bet(&self) -> Cents {
        self.bet
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Whether the hand was doubled down.
    #[must_use]
    pub const fn doubled(&self) -> bool {
        self.doubled
    }

    /// Insurance stake on this hand, in cents.
    #[must_use]
    pub const fn insurance_bet(&self) -> Cents {
        self.insurance_bet
    }

    /// Evaluated hand total.
    #[must_use]
    pub fn value(&self) -> HandValue {
        strategy::hand_value(&self.cards)
    }

    /// Whether the hand is exactly two cards of matching pair rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        strategy::is_pair(&self.cards)
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    pub(crate) const fn set_bet(&mut self, bet: Cents) {
        self.bet = bet;
    }

    pub(crate) const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    pub(crate) const fn set_insurance_bet(&mut self, stake: Cents) {
        self.insurance_bet = stake;
    }

    /// Removes and returns the second card when splitting.
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand. The second card stays face-down (and uncounted)
/// until reveal.
#[derive(Debug, Clone, Serialize)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_hidden: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand with the hole card position hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_hidden: true,
        }
    }

    /// All cards, including the hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up card (first dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Whether the hole card is still face-down.
    #[must_use]
    pub const fn is_hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Visible total: the full hand after reveal, only the upcard before.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_hidden {
            self.cards.first().map_or(0, |c| c.rank.pip_value())
        } else {
            self.value().value
        }
    }

    /// Evaluated total of the full hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        strategy::hand_value(&self.cards)
    }

    /// Whether the hand is a natural two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value().value == 21
    }

    /// Whether the hand went over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value().value > 21
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the upcard is an ace, which triggers the insurance phase.
    #[must_use]
    pub fn shows_ace(&self) -> bool {
        self.up_card().is_some_and(|c| c.rank == Rank::Ace)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn hole_card(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    pub(crate) const fn reveal_hole(&mut self) {
        self.hole_hidden = false;
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.hole_hidden = true;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}

/// One seat at the table: its hands, the hand currently acting, and the
/// human seat's money.
///
/// Bot seats track hands and bets for table realism but never move real
/// currency; bankroll and buy-in stay zero.
#[derive(Debug, Clone, Serialize)]
pub struct Seat {
    hands: Vec<Hand>,
    current_hand: usize,
    bankroll: Cents,
    buy_in: Cents,
    is_bot: bool,
}

impl Seat {
    /// Creates the human seat with a starting bankroll and buy-in total.
    #[must_use]
    pub fn new_human(bankroll: Cents, buy_in: Cents) -> Self {
        Self {
            hands: vec![Hand::new()],
            current_hand: 0,
            bankroll,
            buy_in,
            is_bot: false,
        }
    }

    /// Creates a bot seat.
    #[must_use]
    pub fn new_bot() -> Self {
        Self {
            hands: vec![Hand::new()],
            current_hand: 0,
            bankroll: 0,
            buy_in: 0,
            is_bot: true,
        }
    }

    /// The seat's hands, in table order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// A hand by index.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Index of the hand currently acting.
    #[must_use]
    pub const fn current_hand(&self) -> usize {
        self.current_hand
    }

    /// Bankroll in cents. Always zero for bots.
    #[must_use]
    pub const fn bankroll(&self) -> Cents {
        self.bankroll
    }

    /// Cumulative buy-in total in cents. Always zero for bots.
    #[must_use]
    pub const fn buy_in(&self) -> Cents {
        self.buy_in
    }

    /// Whether this seat is a bot.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    pub(crate) fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }

    pub(crate) const fn set_current_hand(&mut self, index: usize) {
        self.current_hand = index;
    }

    pub(crate) const fn credit(&mut self, amount: Cents) {
        self.bankroll += amount;
    }

    pub(crate) const fn debit(&mut self, amount: Cents) {
        self.bankroll -= amount;
    }

    pub(crate) const fn rebuy(&mut self, amount: Cents) {
        self.bankroll += amount;
        self.buy_in += amount;
    }

    /// Resets the seat to a single fresh empty hand.
    pub(crate) fn reset_hands(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new());
        self.current_hand = 0;
    }
}
