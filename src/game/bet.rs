//! Betting-phase operations: hand management, wagers, rebuys, and the
//! initial deal.

use log::debug;

use crate::error::{BetError, DealError, RebuyError, SeatError};
use crate::hand::{Hand, HandStatus};
use crate::options::Cents;

use super::{Game, MAX_HANDS_PER_SEAT, MAX_REBUY, RoundPhase};

impl Game {
    /// Adds an empty hand to the seat, up to [`MAX_HANDS_PER_SEAT`].
    pub fn add_hand(&mut self, seat: usize) -> Result<(), SeatError> {
        if self.phase != RoundPhase::Betting {
            return Err(SeatError::WrongPhase);
        }
        let seat = self.seats.get_mut(seat).ok_or(SeatError::SeatNotFound)?;
        if seat.hands().len() >= MAX_HANDS_PER_SEAT {
            return Err(SeatError::TooManyHands);
        }
        seat.hands_mut().push(Hand::new());
        Ok(())
    }

    /// Removes a hand from the seat, refunding any bet on it. A seat
    /// always keeps at least one hand.
    pub fn remove_hand(&mut self, seat: usize, hand: usize) -> Result<(), SeatError> {
        if self.phase != RoundPhase::Betting {
            return Err(SeatError::WrongPhase);
        }
        let seat = self.seats.get_mut(seat).ok_or(SeatError::SeatNotFound)?;
        if seat.hands().len() <= 1 {
            return Err(SeatError::LastHand);
        }
        if hand >= seat.hands().len() {
            return Err(SeatError::HandNotFound);
        }
        let removed = seat.hands_mut().remove(hand);
        if !seat.is_bot() {
            seat.credit(removed.bet());
        }
        Ok(())
    }

    /// Places a wager on a hand. Human wagers are deducted from the
    /// bankroll immediately; bot wagers are tracked but move no money.
    pub fn place_bet(&mut self, seat: usize, hand: usize, amount: Cents) -> Result<(), BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::WrongPhase);
        }
        if amount < self.config.min_bet || amount > self.config.max_bet {
            return Err(BetError::OutOfRange);
        }
        let seat = self.seats.get_mut(seat).ok_or(BetError::SeatNotFound)?;
        let is_bot = seat.is_bot();
        let bankroll = seat.bankroll();
        let hand = seat.hand_mut(hand).ok_or(BetError::HandNotFound)?;
        if hand.bet() > 0 {
            return Err(BetError::AlreadyPlaced);
        }
        if !is_bot && bankroll < amount {
            return Err(BetError::InsufficientFunds);
        }
        hand.set_bet(amount);
        if !is_bot {
            seat.debit(amount);
        }
        Ok(())
    }

    /// Clears a hand's wager, refunding it to a human bankroll.
    pub fn clear_bet(&mut self, seat: usize, hand: usize) -> Result<(), BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::WrongPhase);
        }
        let seat = self.seats.get_mut(seat).ok_or(BetError::SeatNotFound)?;
        let hand = seat.hand_mut(hand).ok_or(BetError::HandNotFound)?;
        let bet = hand.bet();
        if bet == 0 {
            return Err(BetError::NoBet);
        }
        hand.set_bet(0);
        if !seat.is_bot() {
            seat.credit(bet);
        }
        Ok(())
    }

    /// Buys chips for a human seat, in any phase. The amount must be
    /// positive and at most [`MAX_REBUY`]; both the bankroll and the
    /// cumulative buy-in grow by it.
    pub fn add_chips(&mut self, seat: usize, amount: Cents) -> Result<(), RebuyError> {
        let seat = self.seats.get_mut(seat).ok_or(RebuyError::SeatNotFound)?;
        if seat.is_bot() {
            return Err(RebuyError::BotSeat);
        }
        if amount == 0 || amount > MAX_REBUY {
            return Err(RebuyError::AmountOutOfRange);
        }
        seat.rebuy(amount);
        Ok(())
    }

    /// Deals the initial round: two cards per hand, then two to the
    /// dealer with the hole card hidden and unseen by the count.
    ///
    /// Hands only receive cards when the shoe can supply both; a hand
    /// left short keeps zero cards. Transitions to
    /// `Insurance` when the dealer shows an ace, otherwise to `Player`
    /// (skipping already-resolved hands).
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::WrongPhase);
        }
        self.dealer.clear();
        for seat in &mut self.seats {
            for hand in seat.hands_mut() {
                let first = self.shoe.deal_one();
                let second = self.shoe.deal_one();
                if let (Some(c1), Some(c2)) = (first, second) {
                    self.counter.observe(c1);
                    self.counter.observe(c2);
                    hand.add_card(c1);
                    hand.add_card(c2);
                    if hand.value().value == 21 {
                        hand.set_status(HandStatus::Blackjack);
                    }
                }
            }
        }
        if let (Some(up), Some(hole)) = (self.shoe.deal_one(), self.shoe.deal_one()) {
            self.counter.observe(up);
            self.dealer.add_card(up);
            self.dealer.add_card(hole);
        }
        debug!(
            "dealt round: {} seats, dealer shows {:?}",
            self.seats.len(),
            self.dealer.up_card()
        );
        if self.dealer.shows_ace() {
            self.phase = RoundPhase::Insurance;
        } else {
            self.phase = RoundPhase::Player;
            self.current_seat = 0;
            self.next_turn();
        }
        Ok(())
    }
}
