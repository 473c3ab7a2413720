//! Session configuration types.
//!
//! All currency is in integer cents; payout ratios are exact rationals so
//! bet math never drifts.

use serde::{Deserialize, Serialize};

/// Currency amount in cents.
pub type Cents = u64;

/// An exact payout ratio applied to cent amounts.
///
/// Winnings are `bet * num / den`, truncating to whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payout {
    /// Numerator.
    pub num: u64,
    /// Denominator.
    pub den: u64,
}

impl Payout {
    /// 3:2, the traditional blackjack payout.
    pub const THREE_TO_TWO: Self = Self { num: 3, den: 2 };
    /// 6:5, the short payout on some tables.
    pub const SIX_TO_FIVE: Self = Self { num: 6, den: 5 };
    /// 1:1, the regular win payout.
    pub const EVEN: Self = Self { num: 1, den: 1 };

    /// Winnings on `bet`, excluding the returned stake.
    #[must_use]
    pub const fn winnings(self, bet: Cents) -> Cents {
        bet * self.num / self.den
    }
}

/// Configuration for the full blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::{BlackjackConfig, Payout};
///
/// let config = BlackjackConfig::default()
///     .with_decks(8)
///     .with_blackjack_payout(Payout::SIX_TO_FIVE)
///     .with_dealer_hits_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackjackConfig {
    /// Number of decks in the shoe, 1 through 8.
    pub decks: u8,
    /// Fraction of the shoe dealt before a mandatory reshuffle, in (0, 1].
    pub penetration_pct: f64,
    /// Number of bot seats beyond the single human seat.
    pub bot_seats: usize,
    /// Minimum bet in cents.
    pub min_bet: Cents,
    /// Maximum bet in cents.
    pub max_bet: Cents,
    /// Whether the dealer hits a soft 17.
    pub dealer_hits_soft_17: bool,
    /// Blackjack payout ratio.
    pub blackjack_payout: Payout,
    /// Whether basic-strategy hints are surfaced to the player.
    pub enable_basic_strategy_hints: bool,
    /// Whether index deviations inform hints and insurance advice.
    pub enable_index_deviations: bool,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            decks: 6,
            penetration_pct: 0.75,
            bot_seats: 0,
            min_bet: 1_000,
            max_bet: 500_000,
            dealer_hits_soft_17: false,
            blackjack_payout: Payout::THREE_TO_TWO,
            enable_basic_strategy_hints: true,
            enable_index_deviations: true,
        }
    }
}

impl BlackjackConfig {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the penetration fraction.
    #[must_use]
    pub const fn with_penetration_pct(mut self, penetration_pct: f64) -> Self {
        self.penetration_pct = penetration_pct;
        self
    }

    /// Sets the number of bot seats.
    #[must_use]
    pub const fn with_bot_seats(mut self, bot_seats: usize) -> Self {
        self.bot_seats = bot_seats;
        self
    }

    /// Sets the table bet limits, in cents.
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: Cents, max_bet: Cents) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets whether the dealer hits a soft 17.
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_payout(mut self, payout: Payout) -> Self {
        self.blackjack_payout = payout;
        self
    }

    /// Sets whether basic-strategy hints are surfaced.
    #[must_use]
    pub const fn with_basic_strategy_hints(mut self, enabled: bool) -> Self {
        self.enable_basic_strategy_hints = enabled;
        self
    }

    /// Sets whether index deviations are applied.
    #[must_use]
    pub const fn with_index_deviations(mut self, enabled: bool) -> Self {
        self.enable_index_deviations = enabled;
        self
    }
}

/// How the drill advances to the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceMode {
    /// The user advances each step.
    Manual,
    /// The presentation layer advances on a timer.
    Auto,
}

/// Configuration for the card-counting drill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Number of decks in the drill shoe.
    pub decks: u8,
    /// Cards carved off the shuffled shoe for end-of-drill verification,
    /// 0 through 52.
    pub leave_out_cards: usize,
    /// Whether the UI shows recently dealt cards. Stored only; the engine
    /// never interprets it.
    pub show_card_history: bool,
    /// Manual or timed advancement. Stored only.
    pub advance_mode: AdvanceMode,
    /// Auto-advance interval in milliseconds. Stored only.
    pub auto_ms: u64,
    /// Whether cards are dealt in randomly sized groups.
    pub enable_group_mode: bool,
    /// Largest group size when group mode is on, 2 through 6.
    pub max_group_size: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            decks: 6,
            leave_out_cards: 0,
            show_card_history: true,
            advance_mode: AdvanceMode::Manual,
            auto_ms: 1_000,
            enable_group_mode: false,
            max_group_size: 6,
        }
    }
}

impl DrillConfig {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of left-out verification cards.
    #[must_use]
    pub const fn with_leave_out_cards(mut self, leave_out_cards: usize) -> Self {
        self.leave_out_cards = leave_out_cards;
        self
    }

    /// Enables group mode with the given maximum group size.
    #[must_use]
    pub const fn with_group_mode(mut self, max_group_size: usize) -> Self {
        self.enable_group_mode = true;
        self.max_group_size = max_group_size;
        self
    }

    /// Sets the advance mode.
    #[must_use]
    pub const fn with_advance_mode(mut self, advance_mode: AdvanceMode) -> Self {
        self.advance_mode = advance_mode;
        self
    }
}

/// Configuration for the strategy quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Whether graded answers account for index deviations, with a
    /// synthetic true count attached to each hand.
    pub enable_deviations: bool,
    /// Rule context shown with each question.
    pub dealer_hits_soft_17: bool,
    /// Whether double after split is allowed.
    pub allow_double_after_split: bool,
    /// Whether surrender is an available answer.
    pub allow_surrender: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            enable_deviations: false,
            dealer_hits_soft_17: false,
            allow_double_after_split: true,
            allow_surrender: true,
        }
    }
}

impl QuizConfig {
    /// Sets whether index deviations are quizzed.
    #[must_use]
    pub const fn with_deviations(mut self, enabled: bool) -> Self {
        self.enable_deviations = enabled;
        self
    }

    /// Sets whether surrender is an available answer.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.allow_surrender = allowed;
        self
    }
}
