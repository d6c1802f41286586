//! Audit receipt types for the Matchbook ledger.
//!
//! Every state-changing operation (match created, stake accepted, result
//! recorded, payout released) appends a [`Receipt`] to an append-only
//! log, giving the ledger an independently checkable audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, MatchId};

/// The kind of action a receipt proves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiptKind {
    /// A new match was created by the administrator.
    MatchCreated,
    /// A stake was accepted and funds moved into house custody.
    StakeAccepted,
    /// The administrator recorded the match result.
    ResultRecorded,
    /// A winning payout left house custody.
    PayoutReleased,
}

impl std::fmt::Display for ReceiptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MatchCreated => write!(f, "MATCH_CREATED"),
            Self::StakeAccepted => write!(f, "STAKE_ACCEPTED"),
            Self::ResultRecorded => write!(f, "RESULT_RECORDED"),
            Self::PayoutReleased => write!(f, "PAYOUT_RELEASED"),
        }
    }
}

/// A record proving that a ledger action occurred.
///
/// Receipts form an append-only audit trail. Each receipt carries a
/// SHA-256 digest of the serialized record it was issued for, so a reader
/// holding the record can verify the receipt refers to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// What kind of action this receipt proves.
    pub kind: ReceiptKind,
    /// The match the action concerned.
    pub match_id: MatchId,
    /// The account involved, if the action had one (bettor or admin).
    pub account: Option<AccountId>,
    /// The amount moved, if the action moved funds.
    pub amount: Option<Amount>,
    /// SHA-256 digest of the serialized subject record.
    pub payload_hash: [u8; 32],
    /// When this receipt was issued.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Hex form of the payload digest, for logs and display.
    #[must_use]
    pub fn payload_hash_hex(&self) -> String {
        hex::encode(self.payload_hash)
    }
}
