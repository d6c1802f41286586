//! Match model: the per-match record the ledger owns.
//!
//! A match is open at creation and transitions to finished exactly once
//! when the administrator records a result. The `finished == true iff
//! result != Unset` invariant of the operation surface is encoded
//! structurally: `result` is an `Option<MatchOutcome>` and "finished"
//! means `result.is_some()`. Once finished, pools are frozen and the
//! result is immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, LedgerError, MatchId, MatchOutcome, Result};

/// Running stake totals per outcome for one match.
///
/// The combined total across all three pools is capped at `Amount::MAX`
/// so the pari-mutuel product `stake * total` always fits in `u128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomePools {
    pub team_a: Amount,
    pub team_b: Amount,
    pub draw: Amount,
}

impl OutcomePools {
    /// The pool accumulated for one outcome.
    #[must_use]
    pub fn get(&self, outcome: MatchOutcome) -> Amount {
        match outcome {
            MatchOutcome::TeamAWins => self.team_a,
            MatchOutcome::TeamBWins => self.team_b,
            MatchOutcome::Draw => self.draw,
        }
    }

    /// Sum of all three pools.
    #[must_use]
    pub fn total(&self) -> Amount {
        // credit() guarantees the sum never overflows.
        self.team_a + self.team_b + self.draw
    }

    /// Add a stake to one outcome's pool.
    ///
    /// # Errors
    /// Returns [`LedgerError::ArithmeticOverflow`] if the combined total
    /// across all pools would exceed `Amount::MAX`. Nothing is mutated on
    /// failure.
    pub fn credit(&mut self, outcome: MatchOutcome, amount: Amount) -> Result<()> {
        self.total()
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        match outcome {
            MatchOutcome::TeamAWins => self.team_a += amount,
            MatchOutcome::TeamBWins => self.team_b += amount,
            MatchOutcome::Draw => self.draw += amount,
        }
        Ok(())
    }

    /// Whether no stakes have been placed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// A single sports match and its betting pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Sequential id, assigned at creation, immutable.
    pub id: MatchId,
    /// Display label for the first team. Immutable once set.
    pub team_a: String,
    /// Display label for the second team. Immutable once set.
    pub team_b: String,
    /// When the match is considered underway. Advisory metadata unless the
    /// ledger is configured to enforce a betting cutoff.
    pub start_time: DateTime<Utc>,
    /// `None` until a result is recorded, then immutable.
    pub result: Option<MatchOutcome>,
    /// Running stake totals per outcome. Frozen once `result` is set.
    pub pools: OutcomePools,
    /// When the match record was created.
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Whether a result has been recorded. Terminal once true.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Sum of all three outcome pools.
    #[must_use]
    pub fn total_pool(&self) -> Amount {
        self.pools.total()
    }

    /// Whether `start_time` has passed relative to `now`.
    #[must_use]
    pub fn is_underway(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_match() -> Match {
        Match {
            id: MatchId(0),
            team_a: "Arsenal".to_string(),
            team_b: "Chelsea".to_string(),
            start_time: Utc::now(),
            result: None,
            pools: OutcomePools::default(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_match_is_open_and_empty() {
        let m = open_match();
        assert!(!m.is_finished());
        assert!(m.pools.is_empty());
        assert_eq!(m.total_pool(), 0);
    }

    #[test]
    fn pools_accumulate_per_outcome() {
        let mut pools = OutcomePools::default();
        pools.credit(MatchOutcome::TeamAWins, 100).unwrap();
        pools.credit(MatchOutcome::TeamAWins, 50).unwrap();
        pools.credit(MatchOutcome::Draw, 25).unwrap();

        assert_eq!(pools.get(MatchOutcome::TeamAWins), 150);
        assert_eq!(pools.get(MatchOutcome::TeamBWins), 0);
        assert_eq!(pools.get(MatchOutcome::Draw), 25);
        assert_eq!(pools.total(), 175);
    }

    #[test]
    fn pool_credit_overflow_rejected() {
        let mut pools = OutcomePools::default();
        pools.credit(MatchOutcome::TeamAWins, Amount::MAX - 10).unwrap();

        // Combined total would exceed Amount::MAX even though the draw
        // pool alone would not.
        let err = pools.credit(MatchOutcome::Draw, 11).unwrap_err();
        assert!(matches!(err, LedgerError::ArithmeticOverflow));

        // Nothing mutated on failure.
        assert_eq!(pools.get(MatchOutcome::Draw), 0);
        assert_eq!(pools.total(), Amount::MAX - 10);
    }

    #[test]
    fn finished_iff_result_set() {
        let mut m = open_match();
        assert!(!m.is_finished());
        m.result = Some(MatchOutcome::Draw);
        assert!(m.is_finished());
    }

    #[test]
    fn underway_check() {
        let mut m = open_match();
        m.start_time = Utc::now() - chrono::Duration::hours(1);
        assert!(m.is_underway(Utc::now()));
        m.start_time = Utc::now() + chrono::Duration::hours(1);
        assert!(!m.is_underway(Utc::now()));
    }

    #[test]
    fn match_serde_roundtrip() {
        let m = open_match();
        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m.id, back.id);
        assert_eq!(m.team_a, back.team_a);
        assert_eq!(m.pools, back.pools);
    }
}
