//! CLI counting-trainer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{BlackjackConfig, Card, Cents, Game, RoundPhase, TableState};

fn main() {
    println!("Blackjack counting trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let config = BlackjackConfig::default();
    let mut game = Game::new(config, None, seed);

    loop {
        let bankroll = game.state().seats[0].bankroll();
        if bankroll < game.config().min_bet {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_cents(&format!(
            "Bet in dollars ({}-{}, 0 to quit): ",
            dollars(game.config().min_bet),
            dollars(bankroll.min(game.config().max_bet))
        )) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(0, 0, bet) {
            println!("Bet error: {err}");
            continue;
        }
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        if game.phase() == RoundPhase::Insurance {
            println!("Dealer shows an Ace. Insurance offered.");
            if game.should_take_insurance() {
                println!("(The count says take it.)");
            }
            if prompt_line("Take insurance? (y/n): ").starts_with('y') {
                match game.place_insurance(0, 0) {
                    Ok(stake) => println!("Insurance bet placed: ${}", dollars(stake)),
                    Err(err) => println!("Insurance error: {err}"),
                }
            }
            if let Err(err) = game.proceed_after_insurance() {
                println!("Insurance error: {err}");
            }
            if game.phase() != RoundPhase::Player {
                println!("Dealer has blackjack.");
            }
        }

        while game.phase() == RoundPhase::Player {
            let state = game.state();
            print_table(&state);
            let hand_index = state.seats[0].current_hand();
            println!(
                "Hint: {} | hit, stand, double, split, surrender",
                game.suggested_action(0, hand_index)
            );

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit(0, hand_index).map(|_| ()),
                "s" | "stand" => game.stand(0, hand_index),
                "d" | "double" => game.double_down(0, hand_index).map(|_| ()),
                "p" | "split" => game.split(0, hand_index),
                "u" | "surrender" => game.surrender(0, hand_index),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.phase() == RoundPhase::Dealer {
            match game.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
            if let Err(err) = game.settle() {
                println!("Settle error: {err}");
            }
        }

        let state = game.state();
        print_table(&state);
        println!("Bankroll: ${}", dollars(state.seats[0].bankroll()));
        println!(
            "Count: running {:+}, true {:+}, {} decks left",
            state.snapshot.running_count, state.snapshot.true_count, state.snapshot.decks_remaining
        );

        if game.phase() == RoundPhase::Shuffling {
            if let Err(err) = game.perform_shuffle() {
                println!("Shuffle error: {err}");
            } else {
                println!("Shoe reshuffled; the count starts over.");
            }
        }
        game.new_round();
    }
}

fn dollars(amount: Cents) -> u64 {
    amount / 100
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_cents(prompt: &str) -> Option<Cents> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value * 100),
            Err(_) => println!("Please enter a whole dollar amount."),
        }
    }
}

fn print_table(state: &TableState) {
    println!("\nShoe: {} cards remaining", state.snapshot.cards_remaining);

    let dealer_view = if state.dealer.is_hole_hidden() {
        match state.dealer.up_card() {
            Some(card) => format!("{card} ??"),
            None => String::from("(empty)"),
        }
    } else {
        format_cards(state.dealer.cards())
    };
    println!("Dealer: {dealer_view} (value {})", state.dealer.visible_value());

    let seat = &state.seats[0];
    for (index, hand) in seat.hands().iter().enumerate() {
        let marker = if index == seat.current_hand() { "*" } else { " " };
        println!(
            "{} Hand {}: {} | value {} | bet ${} | {:?}",
            marker,
            index,
            format_cards(hand.cards()),
            hand.value().value,
            dollars(hand.bet()),
            hand.status()
        );
    }
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
