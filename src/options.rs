//! Table configuration options.

use crate::deck::MIN_BUFFER;

/// Most seats a table can hold.
pub const MAX_SEATS: u8 = 4;

/// Conditions under which the human seat may double down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two-card hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether doubling is allowed on a hand with the given best score.
    #[must_use]
    pub fn allows(self, value: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seats(3)
///     .with_starting_balance(500)
///     .with_blackjack_pays(1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of seats, 1 through 4. Seat 0 is the human; the rest are bots.
    pub seats: u8,
    /// Whether rounds are played for stakes.
    pub betting: bool,
    /// Balance a session starts with (and returns to on a full reset).
    pub starting_balance: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts on odd stakes.
    pub rounding_blackjack: RoundingMode,
    /// Double down conditions.
    pub double: DoubleOption,
    /// The deck is replaced by a fresh shuffle once fewer cards than this remain.
    pub reshuffle_threshold: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seats: 1,
            betting: true,
            starting_balance: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            double: DoubleOption::Any,
            reshuffle_threshold: MIN_BUFFER,
        }
    }
}

impl GameOptions {
    /// Sets the number of seats, clamped to 1 through 4.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_seats(3).seats, 3);
    /// assert_eq!(GameOptions::default().with_seats(9).seats, 4);
    /// ```
    #[must_use]
    pub const fn with_seats(mut self, seats: u8) -> Self {
        self.seats = clamp_seats(seats);
        self
    }

    /// Sets whether rounds are played for stakes.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_betting(false);
    /// assert!(!options.betting);
    /// ```
    #[must_use]
    pub const fn with_betting(mut self, betting: bool) -> Self {
        self.betting = betting;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::NineThrough11);
    /// assert_eq!(options.double, DoubleOption::NineThrough11);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(30);
    /// assert_eq!(options.reshuffle_threshold, 30);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }
}

pub(crate) const fn clamp_seats(seats: u8) -> u8 {
    if seats == 0 {
        1
    } else if seats > MAX_SEATS {
        MAX_SEATS
    } else {
        seats
    }
}
