//! Stake model: one bettor's committed wager on one match.
//!
//! At most one stake exists per (match, bettor) pair. `amount` and
//! `outcome` are write-once; `claimed` is the only field that mutates
//! after creation, flipping to true exactly once when a winning payout
//! is released.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, MatchId, MatchOutcome};

/// A single bettor's wager on one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stake {
    /// The match this stake is on.
    pub match_id: MatchId,
    /// The account that placed the stake.
    pub bettor: AccountId,
    /// Committed amount, strictly positive.
    pub amount: Amount,
    /// The outcome wagered on. Write-once.
    pub outcome: MatchOutcome,
    /// True once a winning payout has been released. Terminal.
    pub claimed: bool,
    /// When the stake was placed.
    pub placed_at: DateTime<Utc>,
}

impl Stake {
    /// Whether this stake wagered on the recorded result.
    #[must_use]
    pub fn is_winner(&self, result: MatchOutcome) -> bool {
        self.outcome == result
    }
}
