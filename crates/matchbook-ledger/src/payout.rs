//! Pari-mutuel payout arithmetic.
//!
//! All stakes on losing outcomes are redistributed proportionally among
//! stakes on the winning outcome:
//!
//! ```text
//! payout = stake * total_pool / winning_pool
//! ```
//!
//! The product is computed in `u128` so it cannot overflow (both factors
//! fit in `u64` because a match's combined pools are capped at
//! `Amount::MAX`), and the quotient truncates toward zero. Since
//! `stake <= winning_pool`, the payout never exceeds `total_pool` and
//! always converts back to `Amount`. Units lost to truncation are dust:
//! they stay locked in house custody and are never redistributed.

use matchbook_types::{Amount, LedgerError, Result};

/// Compute a winning stake's share of the entire pool.
///
/// `stake` must be part of `winning_pool`, and `winning_pool` part of
/// `total_pool`; violations of that geometry are reported as
/// [`LedgerError::ArithmeticOverflow`] rather than paying out more than
/// the pool holds.
///
/// # Errors
/// Returns [`LedgerError::InvalidAmount`] if `winning_pool` is zero —
/// with no winning stakes there is nobody this formula applies to.
pub fn pari_mutuel_payout(stake: Amount, winning_pool: Amount, total_pool: Amount) -> Result<Amount> {
    if winning_pool == 0 {
        return Err(LedgerError::InvalidAmount { amount: 0 });
    }
    if stake > winning_pool || winning_pool > total_pool {
        return Err(LedgerError::ArithmeticOverflow);
    }
    let share = u128::from(stake) * u128::from(total_pool) / u128::from(winning_pool);
    Amount::try_from(share).map_err(|_| LedgerError::ArithmeticOverflow)
}

/// Dust left in custody after every winner of a pool has claimed:
/// the total pool minus the sum of all truncated payouts.
///
/// # Errors
/// Propagates the same failures as [`pari_mutuel_payout`].
pub fn truncation_dust(winning_stakes: &[Amount], total_pool: Amount) -> Result<Amount> {
    let winning_pool: Amount = winning_stakes
        .iter()
        .try_fold(0, |acc: Amount, s| acc.checked_add(*s))
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let mut paid: Amount = 0;
    for stake in winning_stakes {
        paid = paid
            .checked_add(pari_mutuel_payout(*stake, winning_pool, total_pool)?)
            .ok_or(LedgerError::ArithmeticOverflow)?;
    }
    Ok(total_pool - paid)
}
