//! Account book — per-account balances and house custody.
//!
//! All mutations are atomic: either the full operation succeeds or the
//! book is unchanged. Funds staked on a match leave the bettor's balance
//! and enter house custody; payouts move the other way. The book never
//! creates or destroys funds except through `deposit` and `withdraw`,
//! which are recorded in the supply ledger.

use std::collections::HashMap;

use matchbook_types::{AccountId, Amount, LedgerError, Result};

use crate::supply::SupplyLedger;

/// Source of truth for all balance state.
///
/// The settlement ledger calls into it to move stakes into custody and
/// release payouts; it never touches balances directly.
#[derive(Debug, Default)]
pub struct AccountBook {
    /// Available balance per account.
    balances: HashMap<AccountId, Amount>,
    /// Funds held by the ledger across all pools and unclaimed winnings.
    custody: Amount,
    /// Deposit/withdrawal totals for supply verification.
    supply: SupplyLedger,
}

impl AccountBook {
    /// Create an empty account book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit funds into an account.
    ///
    /// # Errors
    /// Returns [`LedgerError::ArithmeticOverflow`] if the account balance
    /// or the genesis deposit total would overflow.
    pub fn deposit(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balances.entry(account).or_insert(0);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.supply.record_deposit(amount)?;
        *balance = new_balance;
        Ok(())
    }

    /// Withdraw funds from an account.
    ///
    /// # Errors
    /// Returns [`LedgerError::InsufficientBalance`] if available < amount.
    pub fn withdraw(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let balance = self.balances.entry(account).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available: *balance,
            });
        }
        self.supply.record_withdrawal(amount)?;
        *balance -= amount;
        Ok(())
    }

    /// Move funds from an account into house custody (stake placement).
    ///
    /// # Errors
    /// Returns [`LedgerError::InsufficientBalance`] if available < amount,
    /// or [`LedgerError::ArithmeticOverflow`] if custody would overflow.
    /// Nothing is mutated on failure.
    pub fn stake_into_custody(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let available = self.balance(account);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        let new_custody = self
            .custody
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.balances.insert(account, available - amount);
        self.custody = new_custody;
        Ok(())
    }

    /// Move funds from house custody to an account (payout release).
    ///
    /// # Errors
    /// Returns [`LedgerError::CustodyUnderflow`] if the release exceeds
    /// held custody, or [`LedgerError::ArithmeticOverflow`] if the account
    /// balance would overflow. Nothing is mutated on failure.
    pub fn release_from_custody(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        if self.custody < amount {
            return Err(LedgerError::CustodyUnderflow {
                amount,
                custody: self.custody,
            });
        }
        let new_balance = self
            .balance(account)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.custody -= amount;
        self.balances.insert(account, new_balance);
        Ok(())
    }

    /// Available balance for an account. Unknown accounts hold zero.
    #[must_use]
    pub fn balance(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Funds currently held by the ledger.
    #[must_use]
    pub fn custody(&self) -> Amount {
        self.custody
    }

    /// Sum of all account balances plus house custody.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.balances
            .values()
            .fold(self.custody, |acc, b| acc.saturating_add(*b))
    }

    /// Verify the supply conservation invariant.
    ///
    /// # Errors
    /// Returns [`LedgerError::SupplyInvariantViolation`] if the actual
    /// supply diverges from deposits minus withdrawals.
    pub fn verify_supply(&self) -> Result<()> {
        let result = self.supply.verify(self.total_supply());
        if let Err(ref err) = result {
            tracing::error!(%err, "supply conservation check failed");
        }
        result
    }
}
