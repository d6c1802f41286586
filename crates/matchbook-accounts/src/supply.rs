//! Supply conservation invariant checker.
//!
//! Mathematical invariant enforced after every funds movement:
//! ```text
//! Σ(account balances) + house custody == Σ(deposits) - Σ(withdrawals)
//! ```
//!
//! Stake placement and payout release only move funds between accounts
//! and custody, so they must never change the total. If this invariant
//! ever breaks, something has gone catastrophically wrong.

use matchbook_types::{Amount, LedgerError, Result};

/// Tracks deposit and withdrawal totals since genesis and validates
/// conservation on demand.
#[derive(Debug, Default)]
pub struct SupplyLedger {
    /// Total deposits since genesis.
    deposits: Amount,
    /// Total withdrawals since genesis.
    withdrawals: Amount,
}

impl SupplyLedger {
    /// Create a new supply ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deposit.
    ///
    /// # Errors
    /// Returns [`LedgerError::ArithmeticOverflow`] if the genesis total
    /// would overflow.
    pub fn record_deposit(&mut self, amount: Amount) -> Result<()> {
        self.deposits = self
            .deposits
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Record a withdrawal.
    ///
    /// # Errors
    /// Returns [`LedgerError::ArithmeticOverflow`] if the genesis total
    /// would overflow.
    pub fn record_withdrawal(&mut self, amount: Amount) -> Result<()> {
        self.withdrawals = self
            .withdrawals
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Expected total supply: deposits - withdrawals.
    #[must_use]
    pub fn expected_supply(&self) -> Amount {
        self.deposits.saturating_sub(self.withdrawals)
    }

    /// Total deposits since genesis.
    #[must_use]
    pub fn total_deposits(&self) -> Amount {
        self.deposits
    }

    /// Total withdrawals since genesis.
    #[must_use]
    pub fn total_withdrawals(&self) -> Amount {
        self.withdrawals
    }

    /// Verify that the actual supply matches the expected supply.
    ///
    /// # Errors
    /// Returns [`LedgerError::SupplyInvariantViolation`] if actual ≠ expected.
    pub fn verify(&self, actual_supply: Amount) -> Result<()> {
        let expected = self.expected_supply();
        if actual_supply != expected {
            return Err(LedgerError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual_supply} != expected {expected} \
                     (deposits={}, withdrawals={})",
                    self.deposits, self.withdrawals,
                ),
            });
        }
        Ok(())
    }
}
