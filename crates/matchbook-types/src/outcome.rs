//! Match outcome enumeration.
//!
//! Clients submit outcomes as raw small integers (1 = team A wins,
//! 2 = team B wins, 3 = draw). Out-of-range codes are rejected at the
//! boundary by [`MatchOutcome::from_code`]; inside the ledger the closed
//! enum is matched exhaustively.

use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result};

/// The three possible results of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum MatchOutcome {
    TeamAWins,
    TeamBWins,
    Draw,
}

impl MatchOutcome {
    /// All outcomes, in wire-code order.
    pub const ALL: [Self; 3] = [Self::TeamAWins, Self::TeamBWins, Self::Draw];

    /// Decode a wire code (1/2/3) into an outcome.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidOutcome`] for any other code,
    /// including 0.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::TeamAWins),
            2 => Ok(Self::TeamBWins),
            3 => Ok(Self::Draw),
            other => Err(LedgerError::InvalidOutcome(other)),
        }
    }

    /// The wire code for this outcome.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::TeamAWins => 1,
            Self::TeamBWins => 2,
            Self::Draw => 3,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TeamAWins => write!(f, "TEAM_A_WINS"),
            Self::TeamBWins => write!(f, "TEAM_B_WINS"),
            Self::Draw => write!(f, "DRAW"),
        }
    }
}
