//! Configuration for a Matchbook ledger instance.

use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, constants};

/// Configuration fixed at ledger creation.
///
/// The administrator identity cannot be reassigned after construction;
/// there is deliberately no operation to transfer administration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The single principal allowed to create matches and record results.
    pub admin: AccountId,
    /// When true, `place_bet` is rejected once a match's `start_time` has
    /// passed. Off by default: `start_time` is advisory metadata.
    pub enforce_start_cutoff: bool,
    /// Smallest accepted stake, in base units. Must be at least 1 —
    /// zero-amount stakes mean "no stake placed".
    pub min_stake: Amount,
}

impl LedgerConfig {
    /// Default configuration for the given administrator.
    #[must_use]
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            enforce_start_cutoff: false,
            min_stake: constants::DEFAULT_MIN_STAKE,
        }
    }

    /// Enable the betting cutoff at `start_time`.
    #[must_use]
    pub fn with_start_cutoff(mut self) -> Self {
        self.enforce_start_cutoff = true;
        self
    }
}
