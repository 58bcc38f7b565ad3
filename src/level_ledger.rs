multiversx_sc::imports!();

use crate::types::{AccountEraEntry, EntryPoint, EraAccounting, GatedOp, RevokeOutcome};
use crate::{
    ERR_ALREADY_PROCESSED, ERR_ALREADY_WITHDRAWN, ERR_AMOUNT_TOO_LARGE, ERR_FUTURE_ERA,
    ERR_INVALID_AMOUNT, ERR_INVALID_ERA,
};

// ============================================================
// Level ledger — per-era accounting of levels and token claims.
// One instance serves one participant role; the role workflow
// contract is the only caller allowed to credit, the withdrawal
// wrapper the only one allowed to withdraw.
// ============================================================

#[multiversx_sc::module]
pub trait LevelLedgerModule:
    crate::era_clock::EraClockModule + crate::access_gate::AccessGateModule
{
    // ========================================================
    // ENDPOINT: credit
    // Idempotent crediting: the caller supplies the id of the
    // real-world event (inspection id, report id, ...) and the
    // same id can never credit twice.
    // ========================================================

    #[endpoint(credit)]
    fn credit(&self, account: ManagedAddress, amount: u64, era: u64, key: ManagedBuffer) {
        self.require_not_paused();
        self.require_bound_caller(GatedOp::Credit);
        self.guard_enter(EntryPoint::Credit);

        require!(!self.processed_keys(&key).get(), ERR_ALREADY_PROCESSED);
        require!(era >= 1, ERR_INVALID_ERA);
        require!(amount > 0, ERR_INVALID_AMOUNT);
        require!(
            amount <= self.max_levels_per_event().get(),
            ERR_AMOUNT_TOO_LARGE
        );

        self.processed_keys(&key).set(true);

        let mut accounting = self.era_accounting_or_default(era);
        accounting.total_levels += amount;
        self.era_accounting(era).set(&accounting);

        let mut entry = self.account_era_or_default(&account, era);
        entry.levels += amount;
        self.account_era(&account, era).set(&entry);

        let lifetime = self.lifetime_levels(&account).get();
        if lifetime == 0 {
            self.population_size().update(|p| *p += 1);
        }
        self.lifetime_levels(&account).set(lifetime + amount);
        self.grand_total_levels().update(|t| *t += amount);

        self.level_credited_event(&account, era, amount, entry.levels, accounting.total_levels);

        self.guard_exit(EntryPoint::Credit);
    }

    // ========================================================
    // ENDPOINT: revoke
    // Clamps to the account's holding in that era; removing
    // from an empty holding is a no-op, not an error.
    // ========================================================

    #[endpoint(revoke)]
    fn revoke(&self, account: ManagedAddress, era: u64, amount: u64) -> RevokeOutcome {
        self.require_not_paused();
        self.require_allowed_caller();
        self.guard_enter(EntryPoint::Revoke);

        let outcome = self.revoke_levels(&account, era, amount);

        self.guard_exit(EntryPoint::Revoke);
        outcome
    }

    fn revoke_levels(&self, account: &ManagedAddress, era: u64, amount: u64) -> RevokeOutcome {
        let mut entry = self.account_era_or_default(account, era);
        let clamped = core::cmp::min(amount, entry.levels);
        if clamped == 0 {
            return RevokeOutcome::NoOp;
        }

        entry.levels -= clamped;
        self.account_era(account, era).set(&entry);

        let mut accounting = self.era_accounting_or_default(era);
        accounting.total_levels -= clamped;
        self.era_accounting(era).set(&accounting);

        let lifetime = self.lifetime_levels(account).get();
        let remaining = lifetime - clamped;
        self.lifetime_levels(account).set(remaining);
        if remaining == 0 {
            self.population_size().update(|p| *p -= 1);
        }
        self.grand_total_levels().update(|t| *t -= clamped);

        self.level_revoked_event(account, era, clamped, entry.levels, accounting.total_levels);
        RevokeOutcome::Revoked(clamped)
    }

    // ========================================================
    // ENDPOINT: withdraw
    // One-shot per (account, era), only for fully closed eras.
    // Returns the payout; moving tokens is the caller's job, as
    // is any "next claimable era" pointer it keeps.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, account: ManagedAddress, era: u64) -> BigUint {
        self.require_not_paused();
        self.require_bound_caller(GatedOp::Withdraw);
        self.guard_enter(EntryPoint::Withdraw);

        require!(self.can_withdraw_era(era), ERR_FUTURE_ERA);

        let mut entry = self.account_era_or_default(&account, era);
        require!(!entry.withdrawn, ERR_ALREADY_WITHDRAWN);

        let mut accounting = self.era_accounting_or_default(era);
        let payout = self.era_share(
            entry.levels,
            accounting.total_levels,
            &self.pool_supply().get(),
            era,
        );

        entry.withdrawn = true;
        entry.tokens_withdrawn = payout.clone();
        self.account_era(&account, era).set(&entry);

        accounting.claim_count += 1;
        accounting.tokens_claimed += &payout;
        self.era_accounting(era).set(&accounting);

        self.levels_withdrawn_event(&account, era, entry.levels, &payout);

        self.guard_exit(EntryPoint::Withdraw);
        payout
    }

    /// Proportional era share, floor division throughout. The dust
    /// an era's claims leave behind stays in the pool.
    fn era_share(&self, levels: u64, total_levels: u64, supply: &BigUint, era: u64) -> BigUint {
        if levels == 0 || total_levels == 0 {
            return BigUint::zero();
        }
        let emission = self.emission_for_era(supply, era);
        BigUint::from(levels) * emission / BigUint::from(total_levels)
    }

    // ── Views ──

    /// Non-mutating projection of the withdraw computation, so a
    /// caller can skip a withdrawal that would pay zero.
    #[view(hasClaimable)]
    fn has_claimable(&self, account: &ManagedAddress, era: u64) -> bool {
        self.claimable_amount(account, era) > 0u64
    }

    #[view(getClaimableAmount)]
    fn claimable_amount(&self, account: &ManagedAddress, era: u64) -> BigUint {
        if !self.can_withdraw_era(era) {
            return BigUint::zero();
        }
        let entry = self.account_era_or_default(account, era);
        if entry.withdrawn {
            return BigUint::zero();
        }
        let accounting = self.era_accounting_or_default(era);
        self.era_share(
            entry.levels,
            accounting.total_levels,
            &self.pool_supply().get(),
            era,
        )
    }

    #[view(getEmissionForEpoch)]
    fn pool_emission_for_epoch(&self, epoch: u64) -> BigUint {
        self.emission_for_epoch(&self.pool_supply().get(), epoch)
    }

    #[view(getEmissionForEra)]
    fn pool_emission_for_era(&self, era: u64) -> BigUint {
        self.emission_for_era(&self.pool_supply().get(), era)
    }

    #[view(getEraAccounting)]
    fn era_accounting_view(&self, era: u64) -> EraAccounting<Self::Api> {
        self.era_accounting_or_default(era)
    }

    #[view(getAccountEra)]
    fn account_era_view(&self, account: &ManagedAddress, era: u64) -> AccountEraEntry<Self::Api> {
        self.account_era_or_default(account, era)
    }

    // ── Lazily-created records ──

    fn era_accounting_or_default(&self, era: u64) -> EraAccounting<Self::Api> {
        let mapper = self.era_accounting(era);
        if mapper.is_empty() {
            EraAccounting::empty()
        } else {
            mapper.get()
        }
    }

    fn account_era_or_default(
        &self,
        account: &ManagedAddress,
        era: u64,
    ) -> AccountEraEntry<Self::Api> {
        let mapper = self.account_era(account, era);
        if mapper.is_empty() {
            AccountEraEntry::empty()
        } else {
            mapper.get()
        }
    }

    // ── Events ──

    #[event("levelCredited")]
    fn level_credited_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] era: u64,
        #[indexed] amount: u64,
        #[indexed] account_levels: u64,
        era_total_levels: u64,
    );

    #[event("levelRevoked")]
    fn level_revoked_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] era: u64,
        #[indexed] amount: u64,
        #[indexed] account_levels: u64,
        era_total_levels: u64,
    );

    #[event("levelsWithdrawn")]
    fn levels_withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] era: u64,
        #[indexed] levels: u64,
        payout: &BigUint,
    );

    // ── Storage ──

    #[storage_mapper("eraAccounting")]
    fn era_accounting(&self, era: u64) -> SingleValueMapper<EraAccounting<Self::Api>>;

    #[storage_mapper("accountEra")]
    fn account_era(
        &self,
        account: &ManagedAddress,
        era: u64,
    ) -> SingleValueMapper<AccountEraEntry<Self::Api>>;

    #[storage_mapper("processedKeys")]
    fn processed_keys(&self, key: &ManagedBuffer) -> SingleValueMapper<bool>;

    #[view(getLifetimeLevels)]
    #[storage_mapper("lifetimeLevels")]
    fn lifetime_levels(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getGrandTotalLevels)]
    #[storage_mapper("grandTotalLevels")]
    fn grand_total_levels(&self) -> SingleValueMapper<u64>;

    /// Number of accounts currently holding a nonzero lifetime
    /// level total; feeds the eligibility rule and the quorum
    /// schedule.
    #[view(getPopulationSize)]
    #[storage_mapper("populationSize")]
    fn population_size(&self) -> SingleValueMapper<u64>;

    #[view(getPoolSupply)]
    #[storage_mapper("poolSupply")]
    fn pool_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getMaxLevelsPerEvent)]
    #[storage_mapper("maxLevelsPerEvent")]
    fn max_levels_per_event(&self) -> SingleValueMapper<u64>;
}
