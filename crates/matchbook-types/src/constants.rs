//! System-wide constants for the Matchbook settlement ledger.

use crate::Amount;

/// Base units per whole coin (9 decimal places).
pub const UNITS_PER_COIN: Amount = 1_000_000_000;

/// Smallest accepted stake by default (one base unit).
pub const DEFAULT_MIN_STAKE: Amount = 1;

/// Maximum length of a team display label, in bytes.
pub const MAX_TEAM_NAME_LEN: usize = 64;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ledger name.
pub const LEDGER_NAME: &str = "Matchbook";
