//! # matchbook-accounts
//!
//! Funds custody for the Matchbook ledger.
//!
//! The ledger holds one native currency. Every account has an available
//! balance; funds committed to betting pools move into a single **house
//! custody** counter and only leave it as winning payouts. The
//! [`SupplyLedger`] tracks deposits and withdrawals since genesis and
//! verifies the conservation invariant:
//!
//! ```text
//! Σ account balances + house custody == Σ deposits − Σ withdrawals
//! ```

pub mod book;
pub mod supply;

pub use book::AccountBook;
pub use supply::SupplyLedger;
