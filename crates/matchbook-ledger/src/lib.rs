//! # matchbook-ledger
//!
//! The authoritative settlement core of Matchbook: a single state machine
//! that owns all matches, betting pools, and per-bettor stakes, and
//! exposes the public operation surface:
//!
//! | Operation      | Access | Effect                                        |
//! |----------------|--------|-----------------------------------------------|
//! | `create_match` | admin  | allocate a new open match                     |
//! | `match_count`  | public | number of matches ever created                |
//! | `get_match`    | public | full match record                             |
//! | `place_bet`    | public | record a stake, move funds into custody       |
//! | `bet_of`       | public | the caller's stake on a match, if any         |
//! | `set_result`   | admin  | record the result; terminal transition        |
//! | `claim_reward` | public | release a winning pari-mutuel payout          |
//!
//! Every operation is a single atomic transaction: it either fully
//! commits or fully fails with a distinct [`matchbook_types::LedgerError`]
//! variant, leaving all state untouched.

pub mod access;
pub mod ledger;
pub mod payout;
pub mod receipts;

pub use access::AdminGate;
pub use ledger::SettlementLedger;
pub use receipts::ReceiptLog;
