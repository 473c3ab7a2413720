//! Insurance phase: side bets against a dealer blackjack.

use log::debug;

use crate::error::InsuranceError;
use crate::options::Cents;

use super::{Game, RoundPhase};

impl Game {
    /// Places an insurance side bet on a hand for half its wager,
    /// returning the stake. Human stakes are deducted immediately.
    pub fn place_insurance(&mut self, seat: usize, hand: usize) -> Result<Cents, InsuranceError> {
        if self.phase != RoundPhase::Insurance {
            return Err(InsuranceError::WrongPhase);
        }
        let seat = self
            .seats
            .get_mut(seat)
            .ok_or(InsuranceError::SeatNotFound)?;
        let is_bot = seat.is_bot();
        let bankroll = seat.bankroll();
        let hand = seat.hand_mut(hand).ok_or(InsuranceError::HandNotFound)?;
        if hand.insurance_bet() > 0 {
            return Err(InsuranceError::AlreadyPlaced);
        }
        let stake = hand.bet() / 2;
        if !is_bot && bankroll < stake {
            return Err(InsuranceError::InsufficientFunds);
        }
        hand.set_insurance_bet(stake);
        if !is_bot {
            seat.debit(stake);
        }
        Ok(stake)
    }

    /// Closes the insurance phase once every seat has decided.
    ///
    /// If the dealer has blackjack the hole card is revealed and counted,
    /// insurance pays, and the round settles immediately. Otherwise the
    /// stakes are lost and play proceeds to the first active hand.
    pub fn proceed_after_insurance(&mut self) -> Result<(), InsuranceError> {
        if self.phase != RoundPhase::Insurance {
            return Err(InsuranceError::WrongPhase);
        }
        if self.dealer.is_blackjack() {
            if let Some(hole) = self.dealer.hole_card() {
                self.counter.observe(hole);
            }
            self.dealer.reveal_hole();
            self.settle_insurance(true);
            debug!("dealer blackjack under the ace, settling round");
            self.phase = RoundPhase::Dealer;
            self.settle_bets();
        } else {
            self.settle_insurance(false);
            self.phase = RoundPhase::Player;
            self.current_seat = 0;
            self.seats[0].set_current_hand(0);
            self.next_turn();
        }
        Ok(())
    }

    /// Pays each insured hand 2:1 (stake plus twice the stake back) when
    /// the dealer has blackjack; otherwise the stakes are simply gone,
    /// having been deducted when placed.
    fn settle_insurance(&mut self, dealer_blackjack: bool) {
        if !dealer_blackjack {
            return;
        }
        for seat in &mut self.seats {
            let payout: Cents = seat.hands().iter().map(|h| h.insurance_bet() * 3).sum();
            if !seat.is_bot() && payout > 0 {
                seat.credit(payout);
            }
        }
    }
}
