//! Dealer play, settlement, and the end-of-round transitions.

use log::debug;

use crate::card::Card;
use crate::error::{ReshuffleError, SettleError};
use crate::hand::HandStatus;
use crate::options::Cents;
use crate::strategy::hand_value;

use super::{Game, RoundPhase};

impl Game {
    /// Reveals the hole card and draws out the dealer hand: hit below
    /// 17, and on soft 17 when the table rule says so. Softness is
    /// re-evaluated after every draw, so a soft 17 that hits into a
    /// hard 17 stands. Returns the cards drawn after the reveal.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, SettleError> {
        if self.phase != RoundPhase::Dealer {
            return Err(SettleError::WrongPhase);
        }
        if self.dealer.is_hole_hidden() && self.dealer.len() > 1 {
            if let Some(hole) = self.dealer.hole_card() {
                self.counter.observe(hole);
            }
            self.dealer.reveal_hole();
        }
        let mut drawn = Vec::new();
        loop {
            let value = self.dealer.value();
            let must_hit = value.value < 17
                || (value.value == 17 && value.is_soft && self.config.dealer_hits_soft_17);
            if !must_hit {
                break;
            }
            let Some(card) = self.shoe.deal_one() else {
                break;
            };
            self.counter.observe(card);
            self.dealer.add_card(card);
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Settles every hand against the dealer and moves to `Settle`, or
    /// to `Shuffling` when the shoe passed its penetration cutoff.
    pub fn settle(&mut self) -> Result<(), SettleError> {
        if self.phase != RoundPhase::Dealer && self.phase != RoundPhase::Settle {
            return Err(SettleError::WrongPhase);
        }
        self.settle_bets();
        Ok(())
    }

    /// Runs the pending shuffle and returns to `Settle`, ready for a new
    /// round.
    pub fn perform_shuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.phase != RoundPhase::Shuffling {
            return Err(ReshuffleError::WrongPhase);
        }
        self.reshuffle_now();
        self.phase = RoundPhase::Settle;
        Ok(())
    }

    /// Clears every hand and the dealer and returns to `Betting`. Bets
    /// do not carry over between rounds.
    pub fn new_round(&mut self) {
        self.phase = RoundPhase::Betting;
        self.current_seat = 0;
        self.dealer.clear();
        for seat in &mut self.seats {
            seat.reset_hands();
        }
    }

    /// Pays out each hand against the final dealer total. Human credits
    /// touch the bankroll; bot results are implied by hand status.
    pub(super) fn settle_bets(&mut self) {
        let dealer_value = hand_value(self.dealer.cards()).value;
        let dealer_blackjack = self.dealer.is_blackjack();
        let dealer_bust = dealer_value > 21;
        let payout = self.config.blackjack_payout;
        for seat in &mut self.seats {
            let mut credit: Cents = 0;
            for hand in seat.hands() {
                let bet = hand.bet();
                credit += match hand.status() {
                    // Half the bet already went back when the hand
                    // surrendered.
                    HandStatus::Surrender | HandStatus::Bust => 0,
                    HandStatus::Blackjack => {
                        if dealer_blackjack {
                            bet
                        } else {
                            bet + payout.winnings(bet)
                        }
                    }
                    HandStatus::Active | HandStatus::Stand => {
                        let value = hand.value().value;
                        if dealer_bust || value > dealer_value {
                            bet * 2
                        } else if value == dealer_value {
                            bet
                        } else {
                            0
                        }
                    }
                };
            }
            if !seat.is_bot() && credit > 0 {
                seat.credit(credit);
            }
        }
        debug!("round settled at dealer {dealer_value}");
        self.phase = if self.should_reshuffle() {
            RoundPhase::Shuffling
        } else {
            RoundPhase::Settle
        };
    }
}
