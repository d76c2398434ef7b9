//! The human seat's bankroll.

use serde::{Deserialize, Serialize};

use crate::error::{ActionError, BetError};

/// Balance and stake bookkeeping that persists across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bankroll {
    balance: usize,
    current_bet: usize,
    last_bet: usize,
    is_doubled: bool,
}

impl Bankroll {
    /// Creates a bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            current_bet: 0,
            last_bet: 0,
            is_doubled: false,
        }
    }

    /// Returns the available balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the stake riding on the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the most recent opening stake.
    #[must_use]
    pub const fn last_bet(&self) -> usize {
        self.last_bet
    }

    /// Returns whether the current stake was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    /// Debits an opening stake and remembers it for repeat bets.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or exceeds the balance.
    pub const fn stake(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.current_bet = amount;
        self.last_bet = amount;
        self.is_doubled = false;
        Ok(())
    }

    /// Debits a second stake equal to the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance cannot cover the additional stake.
    pub const fn double(&mut self) -> Result<(), ActionError> {
        if self.balance < self.current_bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.balance -= self.current_bet;
        self.current_bet *= 2;
        self.is_doubled = true;
        Ok(())
    }

    /// Credits a settlement payout and closes the round's stake.
    pub const fn settle(&mut self, payout: usize) {
        self.balance += payout;
        self.current_bet = 0;
        self.is_doubled = false;
    }

    /// Drops the current stake without paying it back.
    pub const fn forfeit(&mut self) {
        self.current_bet = 0;
        self.is_doubled = false;
    }
}
