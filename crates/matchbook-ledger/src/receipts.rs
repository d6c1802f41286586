//! Append-only audit receipt log.
//!
//! The ledger issues a receipt for every state-changing operation. Each
//! receipt carries a SHA-256 digest of the serialized subject record
//! (the match or stake as it stood after the operation), so an auditor
//! holding the records can verify the trail independently.

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use matchbook_types::{AccountId, Amount, MatchId, Receipt, ReceiptKind};

/// Append-only log of audit receipts.
#[derive(Debug, Default)]
pub struct ReceiptLog {
    receipts: Vec<Receipt>,
}

impl ReceiptLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a receipt for an action on `subject`.
    ///
    /// Serialization of ledger-owned records cannot fail; if it somehow
    /// does, the receipt is issued with a zero digest rather than
    /// aborting the already-committed operation.
    pub fn record<S: Serialize>(
        &mut self,
        kind: ReceiptKind,
        match_id: MatchId,
        account: Option<AccountId>,
        amount: Option<Amount>,
        subject: &S,
    ) {
        let payload_hash = serde_json::to_vec(subject).map_or([0u8; 32], |bytes| {
            let mut hasher = Sha256::new();
            hasher.update(&bytes);
            hasher.finalize().into()
        });

        self.receipts.push(Receipt {
            kind,
            match_id,
            account,
            amount,
            payload_hash,
            issued_at: Utc::now(),
        });
    }

    /// All receipts issued so far, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Receipts concerning one match, oldest first.
    pub fn for_match(&self, match_id: MatchId) -> impl Iterator<Item = &Receipt> {
        self.receipts.iter().filter(move |r| r.match_id == match_id)
    }

    /// Number of receipts issued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    /// Whether no receipts have been issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}
