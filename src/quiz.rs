//! Strategy quiz: random two-card situations graded against the charts.

use std::fmt::Write as _;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::card::Card;
use crate::error::QuizError;
use crate::options::QuizConfig;
use crate::shoe::Shoe;
use crate::strategy::{Action, hand_value, is_pair, suggest_action};

const QUIZ_DECKS: u8 = 6;

/// Reshuffle threshold so a drawn situation never runs the shoe dry.
const MIN_CARDS: usize = 20;

/// A dealt quiz situation: the player's first two cards against an
/// upcard, at a given true count.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizHand {
    /// The player's two cards.
    pub player_cards: [Card; 2],
    /// The dealer's visible card.
    pub dealer_upcard: Card,
    /// True count in effect for this situation. Zero unless deviations
    /// are enabled.
    pub true_count: i32,
    /// Doubling is offered (always, on first two cards).
    pub can_double: bool,
    /// Splitting is offered (the cards form a pair).
    pub can_split: bool,
    /// Surrender is offered (per configuration).
    pub can_surrender: bool,
}

/// Running tally of graded answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizStats {
    /// Correct answers.
    pub correct: u32,
    /// Incorrect answers.
    pub incorrect: u32,
    /// Current streak of correct answers.
    pub streak: u32,
    /// Longest streak so far.
    pub best_streak: u32,
}

/// The verdict on one answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuizAnswerResult {
    /// Whether the answer matched the correct action.
    pub is_correct: bool,
    /// The action the charts prescribe.
    pub correct_action: Action,
    /// A one-sentence explanation of the correct play.
    pub explanation: String,
}

/// Generates random situations from a shoe and grades answers against
/// basic strategy and, when enabled, the index deviations.
#[derive(Debug)]
pub struct QuizSession {
    config: QuizConfig,
    shoe: Shoe,
    rng: ChaCha8Rng,
    current: Option<QuizHand>,
    stats: QuizStats,
}

impl QuizSession {
    /// Starts a quiz with a freshly shuffled six-deck shoe.
    #[must_use]
    pub fn new(config: QuizConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(QUIZ_DECKS, 1.0, 0, &mut rng);
        Self {
            config,
            shoe,
            rng,
            current: None,
            stats: QuizStats::default(),
        }
    }

    /// Deals the next situation: two player cards, one upcard, and a
    /// random true count in `[-10, 10]` when deviations are enabled.
    pub fn generate_new_hand(&mut self) -> QuizHand {
        loop {
            if self.shoe.cards_remaining() < MIN_CARDS {
                self.shoe.reshuffle(QUIZ_DECKS, 0, &mut self.rng);
            }
            let cards = (
                self.shoe.deal_one(),
                self.shoe.deal_one(),
                self.shoe.deal_one(),
            );
            let (Some(first), Some(second), Some(upcard)) = cards else {
                self.shoe.reshuffle(QUIZ_DECKS, 0, &mut self.rng);
                continue;
            };
            let player_cards = [first, second];
            let true_count = if self.config.enable_deviations {
                self.rng.random_range(-10..=10)
            } else {
                0
            };
            let hand = QuizHand {
                player_cards,
                dealer_upcard: upcard,
                true_count,
                can_double: true,
                can_split: is_pair(&player_cards),
                can_surrender: self.config.allow_surrender,
            };
            self.current = Some(hand);
            return hand;
        }
    }

    /// Grades an answer against the current situation and updates the
    /// streak tally. Prescriptions the situation cannot offer are
    /// downgraded first: an unavailable surrender becomes a hit.
    pub fn check_answer(&mut self, answer: Action) -> Result<QuizAnswerResult, QuizError> {
        let hand = self.current.ok_or(QuizError::NoHand)?;
        let mut correct = suggest_action(
            &hand.player_cards,
            hand.dealer_upcard.rank,
            hand.true_count,
            self.config.enable_deviations,
        );
        if correct == Action::Split && !hand.can_split {
            correct = suggest_action(
                &hand.player_cards,
                hand.dealer_upcard.rank,
                hand.true_count,
                false,
            );
        }
        if correct == Action::Surrender && !hand.can_surrender {
            correct = Action::Hit;
        }

        let is_correct = answer == correct;
        if is_correct {
            self.stats.correct += 1;
            self.stats.streak += 1;
            self.stats.best_streak = self.stats.best_streak.max(self.stats.streak);
        } else {
            self.stats.incorrect += 1;
            self.stats.streak = 0;
        }

        Ok(QuizAnswerResult {
            is_correct,
            correct_action: correct,
            explanation: self.explanation(&hand, correct),
        })
    }

    fn explanation(&self, hand: &QuizHand, correct: Action) -> String {
        let value = hand_value(&hand.player_cards);
        let up = hand.dealer_upcard.rank.symbol();
        let mut text = if is_pair(&hand.player_cards) {
            format!(
                "With a pair of {}'s ({}) vs dealer {up}, ",
                hand.player_cards[0].rank.symbol(),
                value.value
            )
        } else if value.is_soft {
            format!("With soft {} vs dealer {up}, ", value.value)
        } else {
            format!("With hard {} vs dealer {up}, ", value.value)
        };
        if self.config.enable_deviations && hand.true_count != 0 {
            let _ = write!(text, "at true count {:+}, ", hand.true_count);
        }
        let _ = write!(text, "the correct play is to {correct}.");
        if self.config.enable_deviations {
            let basis = if hand.true_count == 0 {
                "basic strategy"
            } else {
                "index deviation"
            };
            let _ = write!(text, " This is based on {basis}.");
        }
        text
    }

    /// The situation currently awaiting an answer.
    #[must_use]
    pub const fn current_hand(&self) -> Option<QuizHand> {
        self.current
    }

    /// The running tally.
    #[must_use]
    pub const fn stats(&self) -> QuizStats {
        self.stats
    }

    /// Zeroes the tally.
    pub fn reset_stats(&mut self) {
        self.stats = QuizStats::default();
    }

    /// Quiz configuration.
    #[must_use]
    pub const fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Replaces the configuration; the next generated hand uses it.
    pub fn set_config(&mut self, config: QuizConfig) {
        self.config = config;
    }
}
