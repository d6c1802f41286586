//! Error types for the Matchbook settlement ledger.
//!
//! All errors use the `MB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Match errors
//! - 2xx: Stake errors
//! - 3xx: Claim errors
//! - 4xx: Access errors
//! - 5xx: Balance errors
//! - 6xx: Invariant errors
//!
//! Every failure is a distinct named condition so callers can tell
//! "permission denied" from "bad input" from "business-rule violation"
//! without inspecting message strings.

use thiserror::Error;

use crate::{AccountId, Amount, MatchId, MatchOutcome};

/// Central error enum for all Matchbook operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Match Errors (1xx)
    // =================================================================
    /// The requested match id is out of range.
    #[error("MB_ERR_100: Match not found: {0}")]
    MatchNotFound(MatchId),

    /// Match creation input failed validation (empty team name, bad time).
    #[error("MB_ERR_101: Invalid match input: {reason}")]
    InvalidMatchInput { reason: String },

    /// No wagers are accepted on this match (result recorded, or past the
    /// enforced betting cutoff).
    #[error("MB_ERR_102: Match closed for betting: {0}")]
    MatchClosed(MatchId),

    /// A result has already been recorded for this match.
    #[error("MB_ERR_103: Match already finished: {0}")]
    AlreadyFinished(MatchId),

    /// The match has no recorded result yet, so winnings cannot be claimed.
    #[error("MB_ERR_104: Match not finished: {0}")]
    MatchNotFinished(MatchId),

    // =================================================================
    // Stake Errors (2xx)
    // =================================================================
    /// The outcome wire code is not one of 1/2/3.
    #[error("MB_ERR_200: Invalid outcome code: {0}")]
    InvalidOutcome(u8),

    /// The stake amount is not strictly positive or is below the minimum.
    #[error("MB_ERR_201: Invalid stake amount: {amount}")]
    InvalidAmount { amount: Amount },

    /// The caller already holds a stake on this match. Re-entry under a
    /// different outcome is rejected the same way.
    #[error("MB_ERR_202: Already bet on {0}")]
    AlreadyBet(MatchId),

    /// The caller holds no stake on this match.
    #[error("MB_ERR_203: No bet on {0}")]
    NoBet(MatchId),

    // =================================================================
    // Claim Errors (3xx)
    // =================================================================
    /// The caller's chosen outcome differs from the recorded result.
    /// Losing stakes are never refunded in the pari-mutuel model.
    #[error("MB_ERR_300: Not a winner: chose {chosen}, result was {result}")]
    NotAWinner {
        chosen: MatchOutcome,
        result: MatchOutcome,
    },

    /// A payout has already been released for this stake.
    #[error("MB_ERR_301: Reward already claimed for {0}")]
    AlreadyClaimed(MatchId),

    // =================================================================
    // Access Errors (4xx)
    // =================================================================
    /// The caller is not the ledger's designated administrator.
    #[error("MB_ERR_400: Unauthorized: {0} is not the administrator")]
    Unauthorized(AccountId),

    // =================================================================
    // Balance Errors (5xx)
    // =================================================================
    /// Not enough available balance to fund the operation.
    #[error("MB_ERR_500: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// A custody release would exceed the funds the ledger holds.
    #[error("MB_ERR_501: Custody underflow: releasing {amount}, holding {custody}")]
    CustodyUnderflow { amount: Amount, custody: Amount },

    /// A checked arithmetic step would overflow the amount type.
    #[error("MB_ERR_502: Amount arithmetic overflow")]
    ArithmeticOverflow,

    // =================================================================
    // Invariant Errors (6xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("MB_ERR_600: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;
