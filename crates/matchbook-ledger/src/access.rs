//! Administrator access control.
//!
//! Every privileged operation goes through the same predicate, so there
//! is exactly one place where the admin check can be right or wrong.
//! The admin principal is fixed at construction; there is no operation
//! to transfer administration.

use matchbook_types::{AccountId, LedgerError, Result};

/// Gate for administrator-only operations.
#[derive(Debug, Clone, Copy)]
pub struct AdminGate {
    admin: AccountId,
}

impl AdminGate {
    /// Create a gate for the given fixed administrator.
    #[must_use]
    pub fn new(admin: AccountId) -> Self {
        Self { admin }
    }

    /// The administrator principal.
    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// Whether the caller is the administrator.
    #[must_use]
    pub fn is_admin(&self, caller: AccountId) -> bool {
        caller == self.admin
    }

    /// Require that the caller is the administrator.
    ///
    /// # Errors
    /// Returns [`LedgerError::Unauthorized`] for any other caller.
    pub fn require(&self, caller: AccountId) -> Result<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized(caller))
        }
    }
}
