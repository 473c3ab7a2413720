//! Player-phase actions: hit, stand, double, split, surrender, and the
//! turn cursor.

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::strategy;

use super::{Game, RoundPhase};

impl Game {
    fn active_hand_check(&self, seat: usize, hand: usize) -> Result<(), ActionError> {
        if self.phase != RoundPhase::Player {
            return Err(ActionError::WrongPhase);
        }
        let seat = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;
        let hand = seat.hand(hand).ok_or(ActionError::HandNotFound)?;
        if hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }
        Ok(())
    }

    /// Draws one card to the hand. Busts are marked; the turn advances
    /// when the hand resolves.
    pub fn hit(&mut self, seat: usize, hand: usize) -> Result<Card, ActionError> {
        self.active_hand_check(seat, hand)?;
        let card = self.shoe.deal_one().ok_or(ActionError::ShoeEmpty)?;
        self.counter.observe(card);
        let hand = self.seats[seat]
            .hand_mut(hand)
            .ok_or(ActionError::HandNotFound)?;
        hand.add_card(card);
        if hand.value().value > 21 {
            hand.set_status(HandStatus::Bust);
            self.next_turn();
        }
        Ok(card)
    }

    /// Stands the hand and advances the turn.
    pub fn stand(&mut self, seat: usize, hand: usize) -> Result<(), ActionError> {
        self.active_hand_check(seat, hand)?;
        let hand = self.seats[seat]
            .hand_mut(hand)
            .ok_or(ActionError::HandNotFound)?;
        hand.set_status(HandStatus::Stand);
        self.next_turn();
        Ok(())
    }

    /// Doubles the wager, draws exactly one card, and resolves the hand
    /// as a stand or a bust. Only valid on a two-card hand; the human
    /// bankroll must cover the matching wager.
    pub fn double_down(&mut self, seat: usize, hand: usize) -> Result<Card, ActionError> {
        self.active_hand_check(seat, hand)?;
        let seat_ref = &self.seats[seat];
        let is_bot = seat_ref.is_bot();
        let bankroll = seat_ref.bankroll();
        let hand_ref = seat_ref.hand(hand).ok_or(ActionError::HandNotFound)?;
        if hand_ref.len() != 2 {
            return Err(ActionError::NotTwoCards);
        }
        let bet = hand_ref.bet();
        if !is_bot && bankroll < bet {
            return Err(ActionError::InsufficientFunds);
        }
        // Drawn before any mutation so an exhausted shoe leaves the
        // hand and bankroll untouched.
        let card = self.shoe.deal_one().ok_or(ActionError::ShoeEmpty)?;
        self.counter.observe(card);
        let seat_mut = &mut self.seats[seat];
        if !is_bot {
            seat_mut.debit(bet);
        }
        let hand = seat_mut.hand_mut(hand).ok_or(ActionError::HandNotFound)?;
        hand.double_bet();
        hand.add_card(card);
        if hand.value().value > 21 {
            hand.set_status(HandStatus::Bust);
        } else {
            hand.set_status(HandStatus::Stand);
        }
        self.next_turn();
        Ok(card)
    }

    /// Splits a two-card pair into two hands, matching the original
    /// wager on the new hand and dealing one card to each half.
    ///
    /// Requires two cards left in the shoe; a split ten-ace counts as 21,
    /// not blackjack, and hands formed by splitting may split again.
    pub fn split(&mut self, seat: usize, hand: usize) -> Result<(), ActionError> {
        self.active_hand_check(seat, hand)?;
        let seat_ref = &self.seats[seat];
        let is_bot = seat_ref.is_bot();
        let bankroll = seat_ref.bankroll();
        let hand_ref = seat_ref.hand(hand).ok_or(ActionError::HandNotFound)?;
        if hand_ref.len() != 2 {
            return Err(ActionError::NotTwoCards);
        }
        if strategy::pair_rank(hand_ref.cards()).is_none() {
            return Err(ActionError::NotAPair);
        }
        let bet = hand_ref.bet();
        if !is_bot && bankroll < bet {
            return Err(ActionError::InsufficientFunds);
        }
        // Both halves must receive a card or nothing changes.
        if self.shoe.cards_remaining() < 2 {
            return Err(ActionError::ShoeEmpty);
        }
        let seat_mut = &mut self.seats[seat];
        if !is_bot {
            seat_mut.debit(bet);
        }
        let moved = {
            let hand_mut = seat_mut.hand_mut(hand).ok_or(ActionError::HandNotFound)?;
            hand_mut
                .take_split_card()
                .ok_or(ActionError::NotTwoCards)?
        };
        seat_mut
            .hands_mut()
            .insert(hand + 1, Hand::from_split(moved, bet));
        for index in [hand, hand + 1] {
            if let Some(card) = self.shoe.deal_one() {
                self.counter.observe(card);
                if let Some(h) = self.seats[seat].hand_mut(index) {
                    h.add_card(card);
                }
            }
        }
        Ok(())
    }

    /// Surrenders a two-card hand, forfeiting half the wager. The other
    /// half returns to a human bankroll; the turn advances.
    pub fn surrender(&mut self, seat: usize, hand: usize) -> Result<(), ActionError> {
        self.active_hand_check(seat, hand)?;
        let seat_mut = &mut self.seats[seat];
        let is_bot = seat_mut.is_bot();
        let hand_mut = seat_mut.hand_mut(hand).ok_or(ActionError::HandNotFound)?;
        if hand_mut.len() != 2 {
            return Err(ActionError::NotTwoCards);
        }
        let refund = hand_mut.bet() / 2;
        hand_mut.set_status(HandStatus::Surrender);
        if !is_bot {
            seat_mut.credit(refund);
        }
        self.next_turn();
        Ok(())
    }

    /// Advances the turn cursor to the next active hand, walking hands
    /// within a seat and then seats left to right. When every hand is
    /// resolved the phase moves to `Dealer`.
    ///
    /// Every resolving action calls this internally; calling it again is
    /// a no-op when the cursor already points at an active hand.
    pub fn next_turn(&mut self) {
        if self.phase != RoundPhase::Player {
            return;
        }
        loop {
            let Some(seat) = self.seats.get_mut(self.current_seat) else {
                self.phase = RoundPhase::Dealer;
                break;
            };
            let cursor = seat.current_hand();
            if seat
                .hand(cursor)
                .is_some_and(|h| h.status() == HandStatus::Active)
            {
                break;
            }
            let next = cursor + 1;
            if next < seat.hands().len() {
                seat.set_current_hand(next);
                continue;
            }
            self.current_seat += 1;
            if self.current_seat < self.seats.len() {
                self.seats[self.current_seat].set_current_hand(0);
            } else {
                self.phase = RoundPhase::Dealer;
                break;
            }
        }
    }
}
