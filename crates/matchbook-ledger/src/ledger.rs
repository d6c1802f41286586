//! The settlement ledger — authoritative owner of matches and stakes.
//!
//! A singleton shared-state resource. Every operation is a single atomic
//! transaction: all validation happens before the first mutation, so a
//! failed invocation leaves pools, stakes, balances, and match flags
//! untouched. The hosting environment is expected to serialize calls
//! (`&mut self` enforces exactly that); no operation blocks or suspends
//! internally.
//!
//! Match lifecycle: `Open -> (place_bet)* -> Open -> (set_result) -> Finished`,
//! with `Finished` terminal. Stake lifecycle: created once by `place_bet`,
//! never deleted; `claimed` flips to true at most once.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use matchbook_accounts::AccountBook;
use matchbook_types::{
    AccountId, Amount, LedgerConfig, LedgerError, Match, MatchId, MatchOutcome, OutcomePools,
    Receipt, ReceiptKind, Result, Stake, constants,
};

use crate::access::AdminGate;
use crate::payout::pari_mutuel_payout;
use crate::receipts::ReceiptLog;

/// The authoritative betting-pool settlement ledger.
///
/// Owns all [`Match`] and [`Stake`] records (append-only, never deleted)
/// and the [`AccountBook`] holding bettor funds and house custody.
pub struct SettlementLedger {
    config: LedgerConfig,
    gate: AdminGate,
    /// All matches ever created, indexed by `MatchId`.
    matches: Vec<Match>,
    /// At most one stake per (match, bettor) pair.
    stakes: HashMap<(MatchId, AccountId), Stake>,
    accounts: AccountBook,
    receipts: ReceiptLog,
}

impl SettlementLedger {
    /// Create a ledger with the given configuration. The configured
    /// administrator is fixed for the life of the ledger.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        let gate = AdminGate::new(config.admin);
        Self {
            config,
            gate,
            matches: Vec::new(),
            stakes: HashMap::new(),
            accounts: AccountBook::new(),
            receipts: ReceiptLog::new(),
        }
    }

    /// Create a ledger with default configuration for `admin`.
    #[must_use]
    pub fn with_admin(admin: AccountId) -> Self {
        Self::new(LedgerConfig::new(admin))
    }

    // =====================================================================
    // Funding surface
    // =====================================================================

    /// Deposit funds into a bettor account.
    pub fn deposit(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        self.accounts.deposit(account, amount)
    }

    /// Withdraw available funds from a bettor account.
    pub fn withdraw(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        self.accounts.withdraw(account, amount)
    }

    /// Available balance of an account.
    #[must_use]
    pub fn balance(&self, account: AccountId) -> Amount {
        self.accounts.balance(account)
    }

    /// Funds held by the ledger: open pools, unclaimed winnings, and
    /// truncation dust.
    #[must_use]
    pub fn custody(&self) -> Amount {
        self.accounts.custody()
    }

    // =====================================================================
    // Admin operations
    // =====================================================================

    /// Create a new match. Administrator only.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] if `caller` is not the admin
    /// - [`LedgerError::InvalidMatchInput`] for empty team labels, labels
    ///   over [`constants::MAX_TEAM_NAME_LEN`], or a non-positive
    ///   `start_time`
    pub fn create_match(
        &mut self,
        caller: AccountId,
        team_a: &str,
        team_b: &str,
        start_time: DateTime<Utc>,
    ) -> Result<MatchId> {
        self.gate.require(caller)?;
        Self::validate_team_label(team_a, "team_a")?;
        Self::validate_team_label(team_b, "team_b")?;
        if start_time.timestamp() <= 0 {
            return Err(LedgerError::InvalidMatchInput {
                reason: format!("start_time must be a positive instant, got {start_time}"),
            });
        }

        let id = MatchId(self.match_count());
        let record = Match {
            id,
            team_a: team_a.trim().to_string(),
            team_b: team_b.trim().to_string(),
            start_time,
            result: None,
            pools: OutcomePools::default(),
            created_at: Utc::now(),
        };
        self.receipts
            .record(ReceiptKind::MatchCreated, id, Some(caller), None, &record);
        tracing::info!(%id, team_a, team_b, %start_time, "match created");
        self.matches.push(record);
        Ok(id)
    }

    /// Record the result of a match. Administrator only, one-way: no
    /// operation reverts a finished match or changes its result.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] if `caller` is not the admin
    /// - [`LedgerError::MatchNotFound`] if `match_id` is out of range
    /// - [`LedgerError::AlreadyFinished`] if a result is already recorded
    pub fn set_result(
        &mut self,
        caller: AccountId,
        match_id: MatchId,
        outcome: MatchOutcome,
    ) -> Result<()> {
        self.gate.require(caller)?;
        let record = self
            .matches
            .get_mut(match_id.index())
            .ok_or(LedgerError::MatchNotFound(match_id))?;
        if record.is_finished() {
            return Err(LedgerError::AlreadyFinished(match_id));
        }

        record.result = Some(outcome);
        let snapshot = record.clone();
        self.receipts.record(
            ReceiptKind::ResultRecorded,
            match_id,
            Some(caller),
            None,
            &snapshot,
        );
        tracing::info!(%match_id, %outcome, "result recorded");
        Ok(())
    }

    // =====================================================================
    // Public read surface
    // =====================================================================

    /// Number of matches ever created. Monotonically non-decreasing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn match_count(&self) -> u64 {
        self.matches.len() as u64
    }

    /// The full match record.
    ///
    /// # Errors
    /// Returns [`LedgerError::MatchNotFound`] if `match_id` is out of range.
    pub fn get_match(&self, match_id: MatchId) -> Result<&Match> {
        self.matches
            .get(match_id.index())
            .ok_or(LedgerError::MatchNotFound(match_id))
    }

    /// The caller's stake on a match, if one was ever placed.
    ///
    /// # Errors
    /// Returns [`LedgerError::MatchNotFound`] if `match_id` is out of range.
    pub fn bet_of(&self, match_id: MatchId, caller: AccountId) -> Result<Option<&Stake>> {
        self.get_match(match_id)?;
        Ok(self.stakes.get(&(match_id, caller)))
    }

    /// The audit receipt trail, oldest first.
    #[must_use]
    pub fn receipts(&self) -> &[Receipt] {
        self.receipts.all()
    }

    /// Verify the supply conservation invariant across accounts and custody.
    pub fn verify_supply(&self) -> Result<()> {
        self.accounts.verify_supply()
    }

    // =====================================================================
    // Public betting surface
    // =====================================================================

    /// Place a stake on a match outcome. Funds move from the caller's
    /// balance into house custody atomically with stake creation.
    ///
    /// Preconditions, checked in order, each with a distinct failure:
    /// 1. match exists — [`LedgerError::MatchNotFound`]
    /// 2. match open — [`LedgerError::MatchClosed`] (a recorded result, or
    ///    the start cutoff when configured)
    /// 3. amount at least the configured minimum — [`LedgerError::InvalidAmount`]
    /// 4. no existing stake for this caller — [`LedgerError::AlreadyBet`],
    ///    regardless of the outcome chosen
    /// 5. caller can fund it — [`LedgerError::InsufficientBalance`]
    ///
    /// Out-of-range outcome codes are rejected upstream by
    /// [`MatchOutcome::from_code`] before this typed surface is reached.
    pub fn place_bet(
        &mut self,
        caller: AccountId,
        match_id: MatchId,
        outcome: MatchOutcome,
        amount: Amount,
    ) -> Result<()> {
        let cutoff = self.config.enforce_start_cutoff;
        let min_stake = self.config.min_stake;
        let record = self
            .matches
            .get(match_id.index())
            .ok_or(LedgerError::MatchNotFound(match_id))?;
        if record.is_finished() {
            return Err(LedgerError::MatchClosed(match_id));
        }
        if cutoff && record.is_underway(Utc::now()) {
            return Err(LedgerError::MatchClosed(match_id));
        }
        if amount == 0 || amount < min_stake {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if self.stakes.contains_key(&(match_id, caller)) {
            return Err(LedgerError::AlreadyBet(match_id));
        }
        // Prove the pool credit cannot overflow before touching funds.
        record
            .total_pool()
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        // Point of no return: the custody debit is the last fallible step
        // and is itself all-or-nothing; the credit below was proven above.
        self.accounts.stake_into_custody(caller, amount)?;

        if let Some(record) = self.matches.get_mut(match_id.index()) {
            record
                .pools
                .credit(outcome, amount)
                .unwrap_or_else(|_| debug_assert!(false, "pool credit was pre-checked"));
        }

        let stake = Stake {
            match_id,
            bettor: caller,
            amount,
            outcome,
            claimed: false,
            placed_at: Utc::now(),
        };
        self.receipts.record(
            ReceiptKind::StakeAccepted,
            match_id,
            Some(caller),
            Some(amount),
            &stake,
        );
        tracing::debug!(%match_id, bettor = %caller.short(), %outcome, amount, "stake accepted");
        self.stakes.insert((match_id, caller), stake);
        Ok(())
    }

    /// Claim the pari-mutuel payout for a winning stake. The payout is
    /// released from house custody to the caller atomically with the
    /// `claimed` flag, so no stake can pay out twice.
    ///
    /// Losing stakes are never refunded: this is a winner-take-the-losing-
    /// pools model.
    ///
    /// # Errors
    /// - [`LedgerError::MatchNotFound`] if `match_id` is out of range
    /// - [`LedgerError::MatchNotFinished`] if no result is recorded
    /// - [`LedgerError::NoBet`] if the caller never staked on this match
    /// - [`LedgerError::NotAWinner`] if the caller's outcome lost
    /// - [`LedgerError::AlreadyClaimed`] if the payout was already released
    pub fn claim_reward(&mut self, caller: AccountId, match_id: MatchId) -> Result<Amount> {
        let record = self
            .matches
            .get(match_id.index())
            .ok_or(LedgerError::MatchNotFound(match_id))?;
        let result = record
            .result
            .ok_or(LedgerError::MatchNotFinished(match_id))?;

        let stake = self
            .stakes
            .get(&(match_id, caller))
            .ok_or(LedgerError::NoBet(match_id))?;
        if !stake.is_winner(result) {
            return Err(LedgerError::NotAWinner {
                chosen: stake.outcome,
                result,
            });
        }
        if stake.claimed {
            return Err(LedgerError::AlreadyClaimed(match_id));
        }

        // winning_pool > 0 is guaranteed: the caller's own stake is in it.
        let payout =
            pari_mutuel_payout(stake.amount, record.pools.get(result), record.total_pool())?;

        // Funds first (all-or-nothing), then the claimed flag. Both
        // mutations commit together or not at all.
        self.accounts.release_from_custody(caller, payout)?;
        if let Some(stake) = self.stakes.get_mut(&(match_id, caller)) {
            stake.claimed = true;
            self.receipts.record(
                ReceiptKind::PayoutReleased,
                match_id,
                Some(caller),
                Some(payout),
                stake,
            );
        }
        tracing::info!(%match_id, bettor = %caller.short(), payout, "payout released");
        Ok(payout)
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn validate_team_label(label: &str, field: &str) -> Result<()> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::InvalidMatchInput {
                reason: format!("{field} must be non-empty"),
            });
        }
        if trimmed.len() > constants::MAX_TEAM_NAME_LEN {
            return Err(LedgerError::InvalidMatchInput {
                reason: format!("{field} exceeds {} bytes", constants::MAX_TEAM_NAME_LEN),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fixture() -> (SettlementLedger, AccountId) {
        let admin = AccountId::new();
        (SettlementLedger::with_admin(admin), admin)
    }

    fn upcoming() -> DateTime<Utc> {
        Utc::now() + Duration::hours(2)
    }

    #[test]
    fn create_match_assigns_sequential_ids() {
        let (mut ledger, admin) = fixture();
        let a = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let b = ledger.create_match(admin, "Lyon", "Nice", upcoming()).unwrap();
        assert_eq!(a, MatchId(0));
        assert_eq!(b, MatchId(1));
        assert_eq!(ledger.match_count(), 2);
    }

    #[test]
    fn create_match_rejects_non_admin() {
        let (mut ledger, _) = fixture();
        let outsider = AccountId::new();
        let err = ledger
            .create_match(outsider, "Arsenal", "Chelsea", upcoming())
            .unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
        assert_eq!(ledger.match_count(), 0);
    }

    #[test]
    fn create_match_rejects_empty_team() {
        let (mut ledger, admin) = fixture();
        let err = ledger
            .create_match(admin, "  ", "Chelsea", upcoming())
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidMatchInput { .. }));
    }

    #[test]
    fn create_match_rejects_oversized_team() {
        let (mut ledger, admin) = fixture();
        let long = "x".repeat(constants::MAX_TEAM_NAME_LEN + 1);
        let err = ledger
            .create_match(admin, &long, "Chelsea", upcoming())
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidMatchInput { .. }));
    }

    #[test]
    fn create_match_rejects_non_positive_start() {
        let (mut ledger, admin) = fixture();
        let epoch = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        let err = ledger
            .create_match(admin, "Arsenal", "Chelsea", epoch)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidMatchInput { .. }));
    }

    #[test]
    fn get_match_out_of_range() {
        let (ledger, _) = fixture();
        let err = ledger.get_match(MatchId(0)).unwrap_err();
        assert!(matches!(err, LedgerError::MatchNotFound(MatchId(0))));
    }

    #[test]
    fn place_bet_records_stake_and_pool() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 1_000).unwrap();

        ledger.place_bet(bettor, id, MatchOutcome::TeamAWins, 400).unwrap();

        let m = ledger.get_match(id).unwrap();
        assert_eq!(m.pools.get(MatchOutcome::TeamAWins), 400);
        assert_eq!(m.total_pool(), 400);
        assert_eq!(ledger.balance(bettor), 600);
        assert_eq!(ledger.custody(), 400);

        let stake = ledger.bet_of(id, bettor).unwrap().unwrap();
        assert_eq!(stake.amount, 400);
        assert_eq!(stake.outcome, MatchOutcome::TeamAWins);
        assert!(!stake.claimed);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn place_bet_precondition_order() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 100).unwrap();

        // 1. unknown match
        let err = ledger
            .place_bet(bettor, MatchId(9), MatchOutcome::Draw, 10)
            .unwrap_err();
        assert!(matches!(err, LedgerError::MatchNotFound(_)));

        // 3. zero amount
        let err = ledger.place_bet(bettor, id, MatchOutcome::Draw, 0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount { amount: 0 }));

        // 4. double bet, even with a different outcome
        ledger.place_bet(bettor, id, MatchOutcome::Draw, 10).unwrap();
        let err = ledger
            .place_bet(bettor, id, MatchOutcome::TeamBWins, 10)
            .unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyBet(_)));

        // 2. closed after result
        ledger.set_result(admin, id, MatchOutcome::Draw).unwrap();
        let other = AccountId::new();
        ledger.deposit(other, 100).unwrap();
        let err = ledger.place_bet(other, id, MatchOutcome::Draw, 10).unwrap_err();
        assert!(matches!(err, LedgerError::MatchClosed(_)));
    }

    #[test]
    fn place_bet_underfunded_leaves_state_untouched() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 5).unwrap();

        let err = ledger
            .place_bet(bettor, id, MatchOutcome::TeamAWins, 10)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));

        assert!(ledger.bet_of(id, bettor).unwrap().is_none());
        assert_eq!(ledger.get_match(id).unwrap().total_pool(), 0);
        assert_eq!(ledger.balance(bettor), 5);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn start_cutoff_enforced_when_configured() {
        let admin = AccountId::new();
        let config = LedgerConfig::new(admin).with_start_cutoff();
        let mut ledger = SettlementLedger::new(config);

        let started = Utc::now() - Duration::minutes(5);
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", started).unwrap();

        let bettor = AccountId::new();
        ledger.deposit(bettor, 100).unwrap();
        let err = ledger.place_bet(bettor, id, MatchOutcome::Draw, 10).unwrap_err();
        assert!(matches!(err, LedgerError::MatchClosed(_)));
    }

    #[test]
    fn start_time_advisory_by_default() {
        let (mut ledger, admin) = fixture();
        let started = Utc::now() - Duration::minutes(5);
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", started).unwrap();

        let bettor = AccountId::new();
        ledger.deposit(bettor, 100).unwrap();
        ledger.place_bet(bettor, id, MatchOutcome::Draw, 10).unwrap();
    }

    #[test]
    fn set_result_is_terminal() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();

        ledger.set_result(admin, id, MatchOutcome::TeamBWins).unwrap();
        let err = ledger.set_result(admin, id, MatchOutcome::Draw).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyFinished(_)));

        // Original result unchanged.
        assert_eq!(
            ledger.get_match(id).unwrap().result,
            Some(MatchOutcome::TeamBWins)
        );
    }

    #[test]
    fn set_result_rejects_non_admin() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let outsider = AccountId::new();
        let err = ledger.set_result(outsider, id, MatchOutcome::Draw).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
        assert!(!ledger.get_match(id).unwrap().is_finished());
    }

    #[test]
    fn claim_reward_pays_sole_winner_everything() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();

        let (a, b, c) = (AccountId::new(), AccountId::new(), AccountId::new());
        for (who, outcome, amount) in [
            (a, MatchOutcome::TeamAWins, 1),
            (b, MatchOutcome::TeamBWins, 2),
            (c, MatchOutcome::Draw, 3),
        ] {
            ledger.deposit(who, 10).unwrap();
            ledger.place_bet(who, id, outcome, amount).unwrap();
        }
        ledger.set_result(admin, id, MatchOutcome::TeamAWins).unwrap();

        // 1 * 6 / 1 = 6: the sole winner collects the entire pool.
        let payout = ledger.claim_reward(a, id).unwrap();
        assert_eq!(payout, 6);
        assert_eq!(ledger.balance(a), 9 + 6);

        for loser in [b, c] {
            let err = ledger.claim_reward(loser, id).unwrap_err();
            assert!(matches!(err, LedgerError::NotAWinner { .. }));
        }
        assert_eq!(ledger.custody(), 0);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn claim_reward_precondition_order() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 100).unwrap();

        let err = ledger.claim_reward(bettor, MatchId(9)).unwrap_err();
        assert!(matches!(err, LedgerError::MatchNotFound(_)));

        let err = ledger.claim_reward(bettor, id).unwrap_err();
        assert!(matches!(err, LedgerError::MatchNotFinished(_)));

        ledger.set_result(admin, id, MatchOutcome::Draw).unwrap();
        let err = ledger.claim_reward(bettor, id).unwrap_err();
        assert!(matches!(err, LedgerError::NoBet(_)));
    }

    #[test]
    fn double_claim_blocked() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 100).unwrap();
        ledger.place_bet(bettor, id, MatchOutcome::Draw, 50).unwrap();
        ledger.set_result(admin, id, MatchOutcome::Draw).unwrap();

        let payout = ledger.claim_reward(bettor, id).unwrap();
        assert_eq!(payout, 50);
        let balance_after_first = ledger.balance(bettor);

        let err = ledger.claim_reward(bettor, id).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyClaimed(_)));
        // Second call transfers nothing.
        assert_eq!(ledger.balance(bettor), balance_after_first);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn pool_totals_match_stake_totals() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();

        let mut staked = 0;
        for (outcome, amount) in [
            (MatchOutcome::TeamAWins, 17),
            (MatchOutcome::TeamAWins, 4),
            (MatchOutcome::TeamBWins, 9),
            (MatchOutcome::Draw, 30),
        ] {
            let who = AccountId::new();
            ledger.deposit(who, amount).unwrap();
            ledger.place_bet(who, id, outcome, amount).unwrap();
            staked += amount;
            assert_eq!(ledger.get_match(id).unwrap().total_pool(), staked);
        }
        assert_eq!(ledger.custody(), staked);
    }

    #[test]
    fn dust_stays_in_custody() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();

        // Winners staked 3 and 7; the loser contributed 5. Payouts
        // truncate to 4 and 10, leaving 1 unit of dust locked.
        let (w1, w2, loser) = (AccountId::new(), AccountId::new(), AccountId::new());
        ledger.deposit(w1, 3).unwrap();
        ledger.deposit(w2, 7).unwrap();
        ledger.deposit(loser, 5).unwrap();
        ledger.place_bet(w1, id, MatchOutcome::TeamAWins, 3).unwrap();
        ledger.place_bet(w2, id, MatchOutcome::TeamAWins, 7).unwrap();
        ledger.place_bet(loser, id, MatchOutcome::Draw, 5).unwrap();
        ledger.set_result(admin, id, MatchOutcome::TeamAWins).unwrap();

        assert_eq!(ledger.claim_reward(w1, id).unwrap(), 4);
        assert_eq!(ledger.claim_reward(w2, id).unwrap(), 10);
        assert_eq!(ledger.custody(), 1);
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn receipts_cover_full_lifecycle() {
        let (mut ledger, admin) = fixture();
        let id = ledger.create_match(admin, "Arsenal", "Chelsea", upcoming()).unwrap();
        let bettor = AccountId::new();
        ledger.deposit(bettor, 10).unwrap();
        ledger.place_bet(bettor, id, MatchOutcome::Draw, 10).unwrap();
        ledger.set_result(admin, id, MatchOutcome::Draw).unwrap();
        ledger.claim_reward(bettor, id).unwrap();

        let kinds: Vec<ReceiptKind> = ledger.receipts().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReceiptKind::MatchCreated,
                ReceiptKind::StakeAccepted,
                ReceiptKind::ResultRecorded,
                ReceiptKind::PayoutReleased,
            ]
        );
    }

    #[test]
    fn bet_of_unknown_match_errors() {
        let (ledger, _) = fixture();
        let err = ledger.bet_of(MatchId(0), AccountId::new()).unwrap_err();
        assert!(matches!(err, LedgerError::MatchNotFound(_)));
    }
}
