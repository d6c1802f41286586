//! # matchbook-types
//!
//! Shared types, errors, and configuration for the **Matchbook** settlement
//! ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MatchId`], [`AccountId`]
//! - **Outcome model**: [`MatchOutcome`] with wire codes 1/2/3
//! - **Match model**: [`Match`], [`OutcomePools`]
//! - **Stake model**: [`Stake`]
//! - **Receipt model**: [`Receipt`], [`ReceiptKind`]
//! - **Configuration**: [`LedgerConfig`]
//! - **Errors**: [`LedgerError`] with `MB_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod matches;
pub mod outcome;
pub mod receipt;
pub mod stake;

// Re-export all primary types at crate root for ergonomic imports:
//   use matchbook_types::{Match, MatchOutcome, Stake, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use matches::*;
pub use outcome::*;
pub use receipt::*;
pub use stake::*;

/// Currency amount in base units (10^9 base units per coin).
///
/// Amounts are integers end to end; the pari-mutuel payout formula widens
/// to `u128` for the intermediate product so it never overflows.
pub type Amount = u64;

// Constants are accessed via `matchbook_types::constants::FOO`
// (not re-exported to avoid name collisions).
