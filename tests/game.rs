//! Round state machine integration tests.

use twentyone::{
    ActionError, BetError, BlackjackConfig, Card, Game, HandStatus, InsuranceError, Payout, Rank,
    RebuyError, RoundPhase, SavedBankroll, SeatError, Suit,
};

const fn card(rank: Rank) -> Card {
    Card {
        rank,
        suit: Suit::Spades,
    }
}

fn game_with_draws(config: BlackjackConfig, draws: &[Rank]) -> Game {
    let mut game = Game::new(config, None, 42);
    game.rig_shoe(draws.iter().copied().map(card).collect());
    game
}

#[test]
fn betting_moves_money_and_validates_limits() {
    let mut game = Game::new(BlackjackConfig::default(), None, 1);
    assert_eq!(game.state().seats[0].bankroll(), 100_000);

    game.place_bet(0, 0, 2_000).unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 98_000);
    assert_eq!(game.place_bet(0, 0, 2_000), Err(BetError::AlreadyPlaced));

    game.clear_bet(0, 0).unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 100_000);
    assert_eq!(game.clear_bet(0, 0), Err(BetError::NoBet));

    assert_eq!(game.place_bet(0, 0, 500), Err(BetError::OutOfRange));
    assert_eq!(game.place_bet(0, 0, 600_000), Err(BetError::OutOfRange));
    assert_eq!(game.place_bet(5, 0, 2_000), Err(BetError::SeatNotFound));
    assert_eq!(
        game.place_bet(0, 0, 200_000),
        Err(BetError::InsufficientFunds)
    );
}

#[test]
fn hand_roster_is_bounded() {
    let mut game = Game::new(BlackjackConfig::default(), None, 1);
    game.add_hand(0).unwrap();
    game.add_hand(0).unwrap();
    assert_eq!(game.add_hand(0), Err(SeatError::TooManyHands));
    assert_eq!(game.state().seats[0].hands().len(), 3);

    game.remove_hand(0, 2).unwrap();
    game.remove_hand(0, 1).unwrap();
    assert_eq!(game.remove_hand(0, 0), Err(SeatError::LastHand));
}

#[test]
fn removing_a_hand_refunds_its_bet() {
    let mut game = Game::new(BlackjackConfig::default(), None, 1);
    game.add_hand(0).unwrap();
    game.place_bet(0, 1, 5_000).unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 95_000);
    game.remove_hand(0, 1).unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 100_000);
}

#[test]
fn deal_marks_blackjack_and_skips_to_dealer() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ace, Rank::King, Rank::Nine, Rank::Eight],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    // The only hand resolved at the deal, so the turn walks straight
    // through the player phase.
    assert_eq!(game.phase(), RoundPhase::Dealer);
    assert_eq!(game.state().seats[0].hands()[0].status(), HandStatus::Blackjack);
}

#[test]
fn natural_beats_dealer_nineteen_at_three_to_two() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ace, Rank::King, Rank::Ten, Rank::Nine],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();
    // 99_000 after the bet, plus 1_000 back plus 1_500 winnings.
    assert_eq!(game.state().seats[0].bankroll(), 101_500);
}

#[test]
fn six_to_five_pays_less() {
    let config = BlackjackConfig::default().with_blackjack_payout(Payout::SIX_TO_FIVE);
    let mut game = game_with_draws(config, &[Rank::Ace, Rank::King, Rank::Ten, Rank::Nine]);
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 101_200);
}

#[test]
fn twenty_beats_dealer_eighteen() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Queen, Rank::Ten, Rank::Eight],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.stand(0, 0).unwrap();
    assert_eq!(game.phase(), RoundPhase::Dealer);
    game.dealer_play().unwrap();
    game.settle().unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 101_000);
}

#[test]
fn bust_forfeits_the_bet() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Six, Rank::Ten, Rank::Eight, Rank::King],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.hit(0, 0).unwrap();
    assert_eq!(game.state().seats[0].hands()[0].status(), HandStatus::Bust);
    assert_eq!(game.phase(), RoundPhase::Dealer);
    game.dealer_play().unwrap();
    game.settle().unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 99_000);
}

#[test]
fn push_returns_the_bet_exactly() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Eight, Rank::Ten, Rank::Eight],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.stand(0, 0).unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();
    assert_eq!(game.state().seats[0].bankroll(), 100_000);
}

#[test]
fn double_down_draws_once_and_doubles_the_stake() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Five, Rank::Six, Rank::Nine, Rank::Ten, Rank::Ten],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    let drawn = game.double_down(0, 0).unwrap();
    assert_eq!(drawn.rank, Rank::Ten);
    let hand = game.state().seats[0].hands()[0].clone();
    assert_eq!(hand.bet(), 2_000);
    assert!(hand.doubled());
    assert_eq!(hand.status(), HandStatus::Stand);
    assert_eq!(game.state().seats[0].bankroll(), 98_000);

    game.dealer_play().unwrap();
    game.settle().unwrap();
    // 21 beats the dealer's 19 for twice the doubled bet.
    assert_eq!(game.state().seats[0].bankroll(), 102_000);
}

#[test]
fn double_down_requires_two_cards_and_funds() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Two, Rank::Three, Rank::Nine, Rank::Ten, Rank::Two],
    );
    game.place_bet(0, 0, 60_000).unwrap();
    game.deal().unwrap();
    // 60k bet against a 40k remaining bankroll.
    assert_eq!(game.double_down(0, 0), Err(ActionError::InsufficientFunds));
    game.hit(0, 0).unwrap();
    assert_eq!(game.double_down(0, 0), Err(ActionError::NotTwoCards));
}

#[test]
fn split_builds_two_hands_with_matching_bets() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[
            Rank::Eight,
            Rank::Eight,
            Rank::Six,
            Rank::Ten,
            Rank::Three,
            Rank::Two,
        ],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.split(0, 0).unwrap();

    let seat = game.state().seats[0].clone();
    assert_eq!(seat.hands().len(), 2);
    assert_eq!(seat.hands()[0].bet(), 1_000);
    assert_eq!(seat.hands()[1].bet(), 1_000);
    assert_eq!(seat.hands()[0].cards().len(), 2);
    assert_eq!(seat.hands()[1].cards().len(), 2);
    assert_eq!(seat.bankroll(), 98_000);
    // Still the player's turn on the first split hand.
    assert_eq!(game.phase(), RoundPhase::Player);
}

#[test]
fn split_rejects_non_pairs_but_accepts_mixed_tens() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Seven, Rank::Six, Rank::Ten],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    assert_eq!(game.split(0, 0), Err(ActionError::NotAPair));

    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[
            Rank::King,
            Rank::Ten,
            Rank::Six,
            Rank::Ten,
            Rank::Four,
            Rank::Five,
        ],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.split(0, 0).unwrap();
    assert_eq!(game.state().seats[0].hands().len(), 2);
}

#[test]
fn surrender_recovers_half_the_bet() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Six, Rank::Ten, Rank::Nine],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.surrender(0, 0).unwrap();
    assert_eq!(
        game.state().seats[0].hands()[0].status(),
        HandStatus::Surrender
    );
    assert_eq!(game.state().seats[0].bankroll(), 99_500);
    game.dealer_play().unwrap();
    game.settle().unwrap();
    // Nothing further at settlement.
    assert_eq!(game.state().seats[0].bankroll(), 99_500);
}

#[test]
fn ace_upcard_opens_insurance_and_dealer_blackjack_pays_two_to_one() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Seven, Rank::Ace, Rank::King],
    );
    game.place_bet(0, 0, 2_000).unwrap();
    game.deal().unwrap();
    assert_eq!(game.phase(), RoundPhase::Insurance);

    let stake = game.place_insurance(0, 0).unwrap();
    assert_eq!(stake, 1_000);
    assert_eq!(game.state().seats[0].bankroll(), 97_000);
    assert_eq!(
        game.place_insurance(0, 0),
        Err(InsuranceError::AlreadyPlaced)
    );

    game.proceed_after_insurance().unwrap();
    // The side bet paid 2:1 while the main bet lost, washing the round.
    assert_eq!(game.state().seats[0].bankroll(), 100_000);
    assert!(matches!(
        game.phase(),
        RoundPhase::Settle | RoundPhase::Shuffling
    ));
}

#[test]
fn insurance_stake_is_lost_when_dealer_misses() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Seven, Rank::Ace, Rank::Eight],
    );
    game.place_bet(0, 0, 2_000).unwrap();
    game.deal().unwrap();
    game.place_insurance(0, 0).unwrap();
    game.proceed_after_insurance().unwrap();
    // No dealer blackjack: the stake stays gone and play resumes.
    assert_eq!(game.phase(), RoundPhase::Player);
    assert_eq!(game.state().seats[0].bankroll(), 97_000);
}

#[test]
fn dealer_hits_soft_seventeen_only_when_configured() {
    let draws = [Rank::Ten, Rank::Ten, Rank::Six, Rank::Ace, Rank::Five];
    let mut game = game_with_draws(BlackjackConfig::default(), &draws);
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.stand(0, 0).unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let config = BlackjackConfig::default().with_dealer_hits_soft_17(true);
    let mut game = game_with_draws(config, &draws);
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.stand(0, 0).unwrap();
    // Soft 17 hits the five into a hard 12 and keeps drawing until the
    // shoe runs out.
    assert_eq!(game.dealer_play().unwrap().len(), 1);
}

#[test]
fn dealer_hole_card_joins_the_count_only_on_reveal() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Queen, Rank::Ten, Rank::Five],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    assert_eq!(game.count_snapshot().running_count, -3);
    game.stand(0, 0).unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.count_snapshot().running_count, -2);
}

#[test]
fn penetration_forces_a_shuffle_before_the_next_round() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[
            Rank::Five,
            Rank::Five,
            Rank::Ten,
            Rank::Seven,
            Rank::Three,
            Rank::Three,
            Rank::Two,
            Rank::Two,
        ],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.hit(0, 0).unwrap();
    game.hit(0, 0).unwrap();
    game.stand(0, 0).unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();
    assert_eq!(game.phase(), RoundPhase::Shuffling);

    game.perform_shuffle().unwrap();
    assert_eq!(game.phase(), RoundPhase::Settle);
    assert_eq!(game.count_snapshot().running_count, 0);
    assert_eq!(game.state().total_cards, 312);
}

#[test]
fn new_round_resets_seats_but_not_bankrolls() {
    let mut game = game_with_draws(
        BlackjackConfig::default(),
        &[Rank::Ten, Rank::Eight, Rank::Ten, Rank::Nine],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.deal().unwrap();
    game.stand(0, 0).unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();
    game.new_round();

    let state = game.state();
    assert_eq!(state.phase, RoundPhase::Betting);
    assert_eq!(state.seats[0].hands().len(), 1);
    assert_eq!(state.seats[0].hands()[0].bet(), 0);
    assert!(state.dealer.is_empty());
    assert_eq!(state.seats[0].bankroll(), 99_000);
}

#[test]
fn bot_seats_take_turns_without_moving_money() {
    let config = BlackjackConfig::default().with_bot_seats(1);
    let mut game = game_with_draws(
        config,
        &[
            Rank::Ten,
            Rank::Nine,
            Rank::Ten,
            Rank::Eight,
            Rank::Ten,
            Rank::Seven,
        ],
    );
    game.place_bet(0, 0, 1_000).unwrap();
    game.place_bet(1, 0, 1_000).unwrap();
    assert_eq!(game.state().seats[1].bankroll(), 0);

    game.deal().unwrap();
    assert_eq!(game.state().current_seat, 0);
    game.stand(0, 0).unwrap();
    assert_eq!(game.state().current_seat, 1);
    game.stand(1, 0).unwrap();
    assert_eq!(game.phase(), RoundPhase::Dealer);
    game.dealer_play().unwrap();
    game.settle().unwrap();
    // The bot's winning 18 vs 17 stays off the books.
    assert_eq!(game.state().seats[1].bankroll(), 0);
    assert_eq!(game.state().seats[0].bankroll(), 101_000);
}

#[test]
fn rebuy_rules() {
    let mut game = Game::new(BlackjackConfig::default().with_bot_seats(1), None, 1);
    game.add_chips(0, 50_000).unwrap();
    let saved = game.saved_bankroll();
    assert_eq!(saved.bankroll, 150_000);
    assert_eq!(saved.buy_in, 150_000);

    assert_eq!(game.add_chips(0, 0), Err(RebuyError::AmountOutOfRange));
    assert_eq!(game.add_chips(0, 100_001), Err(RebuyError::AmountOutOfRange));
    assert_eq!(game.add_chips(1, 10_000), Err(RebuyError::BotSeat));
    assert_eq!(game.add_chips(7, 10_000), Err(RebuyError::SeatNotFound));
}

#[test]
fn saved_bankroll_resumes_a_table() {
    let saved = SavedBankroll {
        bankroll: 42_000,
        buy_in: 200_000,
    };
    let game = Game::new(BlackjackConfig::default(), Some(saved), 1);
    assert_eq!(game.saved_bankroll(), saved);
}
