multiversx_sc::imports!();

use crate::collaborator_proxy;
use crate::types::{AccountEraEntry, AccusationRound, EntryPoint, EraAccounting, GatedOp};
use crate::{
    ERR_ALREADY_DENIED, ERR_ALREADY_VOTED, ERR_ALREADY_WITHDRAWN, ERR_COOLDOWN_ACTIVE,
    ERR_FUTURE_ERA, ERR_INSUFFICIENT_POINTS, ERR_INVALID_ERA, ERR_NOTHING_TO_WITHDRAW,
    ERR_UNAUTHORIZED,
};

/// Fixed quora while the voter population bootstraps.
const SMALL_POPULATION: u64 = 12;
const SMALL_QUORUM: u64 = 2;
const MEDIUM_POPULATION: u64 = 167;
const MEDIUM_QUORUM: u64 = 5;

/// Mature populations need 3% + 1 votes, never more than this.
const QUORUM_CAP: u64 = 360;

/// Exchange rate of accumulated vote points into one bounty level.
const POINTS_PER_LEVEL: u64 = 50;

// ============================================================
// Quorum invalidation — accumulates accusation votes per
// (accused, era), permanently denies an account once quorum is
// reached, and pays the first accuser from a bounty ledger that
// mirrors the level ledger's era accounting.
// ============================================================

#[multiversx_sc::module]
pub trait QuorumModule:
    crate::era_clock::EraClockModule
    + crate::access_gate::AccessGateModule
    + crate::level_ledger::LevelLedgerModule
    + crate::eligibility::EligibilityModule
{
    /// Three-tier quorum schedule over the current voter population.
    #[view(getQuorumFor)]
    fn quorum_for(&self, population: u64) -> u64 {
        if population < SMALL_POPULATION {
            SMALL_QUORUM
        } else if population < MEDIUM_POPULATION {
            MEDIUM_QUORUM
        } else {
            core::cmp::min(population * 3 / 100 + 1, QUORUM_CAP)
        }
    }

    #[view(getCurrentQuorum)]
    fn current_quorum(&self) -> u64 {
        self.quorum_for(self.population_size().get())
    }

    // ========================================================
    // ENDPOINT: accuse
    // Any above-average voter may accuse, at most once per
    // (accused, era) and no more often than the vote cooldown
    // allows. Every vote earns one point regardless of outcome.
    // ========================================================

    #[endpoint(accuse)]
    fn accuse(&self, accused: ManagedAddress, era: u64, justification: ManagedBuffer) {
        self.require_not_paused();
        self.guard_enter(EntryPoint::Accuse);

        let voter = self.blockchain().get_caller();

        require!(!self.denied(&accused).get(), ERR_ALREADY_DENIED);
        require!(era >= 1, ERR_INVALID_ERA);
        require!(self.is_eligible_voter(&voter), ERR_UNAUTHORIZED);

        let now = self.current_tick();
        let cooldown = self.last_vote_tick(&voter);
        if !cooldown.is_empty() {
            require!(
                now >= cooldown.get() + self.time_between_votes().get(),
                ERR_COOLDOWN_ACTIVE
            );
        }
        require!(
            !self.has_voted(&voter, &accused, era).get(),
            ERR_ALREADY_VOTED
        );

        self.has_voted(&voter, &accused, era).set(true);
        self.last_vote_tick(&voter).set(now);
        self.voter_points(&voter).update(|p| *p += 1);

        // A voter's bounty claims start at the era of their first vote.
        if self.bounty_next_claim_era(&voter).is_empty() {
            self.bounty_next_claim_era(&voter).set(self.current_era());
        }

        let round_mapper = self.accusation(&accused, era);
        let mut round = if round_mapper.is_empty() {
            AccusationRound {
                vote_count: 0,
                hunter: voter.clone(),
            }
        } else {
            round_mapper.get()
        };
        round.vote_count += 1;
        round_mapper.set(&round);

        self.accusation_vote_event(&accused, era, &voter, round.vote_count, &justification);

        if round.vote_count >= self.quorum_for(self.population_size().get()) {
            self.resolve_denial(&accused, era, &round.hunter);
        }

        self.guard_exit(EntryPoint::Accuse);
    }

    /// Denial is global, terminal and irreversible: further votes
    /// against the account are rejected up front, and collaborators
    /// consult isDenied before crediting or paying it again.
    fn resolve_denial(&self, accused: &ManagedAddress, era: u64, hunter: &ManagedAddress) {
        self.denied(accused).set(true);
        self.participant_denied_event(accused, era);

        // One bounty per (hunter, accused), however many rounds the
        // account accumulated before going down.
        if !self.hunter_rewarded(hunter, accused).get() {
            self.hunter_rewarded(hunter, accused).set(true);
            let reward_era = self.current_era();
            self.bounty_credit(hunter, reward_era, 1);
            self.hunter_rewarded_event(hunter, accused, reward_era);
        }

        // Local writes are complete; the collaborator callback runs
        // last and translates the denial into role bookkeeping
        // before forwarding to revoke.
        let hook = self.bound_caller(&GatedOp::RevokeHook);
        if !hook.is_empty() {
            self.tx()
                .to(hook.get())
                .typed(collaborator_proxy::CollaboratorProxy)
                .on_participant_denied(accused, true)
                .sync_call();
        }
    }

    // ========================================================
    // ENDPOINT: convertPointsToLevel
    // Loyalty reward, independent of any accusation succeeding.
    // ========================================================

    #[endpoint(convertPointsToLevel)]
    fn convert_points_to_level(&self) {
        self.require_not_paused();
        self.guard_enter(EntryPoint::ConvertPoints);

        let voter = self.blockchain().get_caller();
        let points = self.voter_points(&voter).get();
        require!(points >= POINTS_PER_LEVEL, ERR_INSUFFICIENT_POINTS);

        let remaining = points - POINTS_PER_LEVEL;
        self.voter_points(&voter).set(remaining);

        let era = self.current_era();
        self.bounty_credit(&voter, era, 1);
        self.points_converted_event(&voter, era, remaining);

        self.guard_exit(EntryPoint::ConvertPoints);
    }

    // ========================================================
    // ENDPOINT: withdrawBounty
    // One era step per call, against the voter's own claim
    // pointer. Eras where the voter earned nothing pay zero and
    // still advance the pointer.
    // ========================================================

    #[endpoint(withdrawBounty)]
    fn withdraw_bounty(&self) -> BigUint {
        self.require_not_paused();
        self.guard_enter(EntryPoint::WithdrawBounty);

        let voter = self.blockchain().get_caller();
        let pointer = self.bounty_next_claim_era(&voter);
        require!(!pointer.is_empty(), ERR_NOTHING_TO_WITHDRAW);

        let era = pointer.get();
        require!(self.can_withdraw_era(era), ERR_FUTURE_ERA);

        let mut entry = self.bounty_entry_or_default(&voter, era);
        require!(!entry.withdrawn, ERR_ALREADY_WITHDRAWN);

        let mut accounting = self.bounty_era_accounting_or_default(era);
        let payout = self.era_share(
            entry.levels,
            accounting.total_levels,
            &self.bounty_pool_supply().get(),
            era,
        );

        entry.withdrawn = true;
        entry.tokens_withdrawn = payout.clone();
        self.bounty_entry(&voter, era).set(&entry);

        accounting.claim_count += 1;
        accounting.tokens_claimed += &payout;
        self.bounty_era_accounting(era).set(&accounting);

        pointer.set(era + 1);

        self.bounty_withdrawn_event(&voter, era, &payout);

        self.guard_exit(EntryPoint::WithdrawBounty);
        payout
    }

    // ── Bounty ledger internals ──

    fn bounty_credit(&self, voter: &ManagedAddress, era: u64, amount: u64) {
        let mut accounting = self.bounty_era_accounting_or_default(era);
        accounting.total_levels += amount;
        self.bounty_era_accounting(era).set(&accounting);

        let mut entry = self.bounty_entry_or_default(voter, era);
        entry.levels += amount;
        self.bounty_entry(voter, era).set(&entry);
    }

    fn bounty_era_accounting_or_default(&self, era: u64) -> EraAccounting<Self::Api> {
        let mapper = self.bounty_era_accounting(era);
        if mapper.is_empty() {
            EraAccounting::empty()
        } else {
            mapper.get()
        }
    }

    fn bounty_entry_or_default(
        &self,
        voter: &ManagedAddress,
        era: u64,
    ) -> AccountEraEntry<Self::Api> {
        let mapper = self.bounty_entry(voter, era);
        if mapper.is_empty() {
            AccountEraEntry::empty()
        } else {
            mapper.get()
        }
    }

    // ── Views ──

    #[view(getAccusation)]
    fn accusation_view(&self, accused: &ManagedAddress, era: u64) -> AccusationRound<Self::Api> {
        let mapper = self.accusation(accused, era);
        if mapper.is_empty() {
            AccusationRound {
                vote_count: 0,
                hunter: ManagedAddress::zero(),
            }
        } else {
            mapper.get()
        }
    }

    #[view(getBountyEntry)]
    fn bounty_entry_view(&self, voter: &ManagedAddress, era: u64) -> AccountEraEntry<Self::Api> {
        self.bounty_entry_or_default(voter, era)
    }

    #[view(getBountyEraAccounting)]
    fn bounty_era_accounting_view(&self, era: u64) -> EraAccounting<Self::Api> {
        self.bounty_era_accounting_or_default(era)
    }

    // ── Events ──

    #[event("accusationVote")]
    fn accusation_vote_event(
        &self,
        #[indexed] accused: &ManagedAddress,
        #[indexed] era: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] vote_count: u64,
        justification: &ManagedBuffer,
    );

    #[event("participantDenied")]
    fn participant_denied_event(&self, #[indexed] account: &ManagedAddress, #[indexed] era: u64);

    #[event("hunterRewarded")]
    fn hunter_rewarded_event(
        &self,
        #[indexed] hunter: &ManagedAddress,
        #[indexed] accused: &ManagedAddress,
        #[indexed] era: u64,
    );

    #[event("pointsConverted")]
    fn points_converted_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] era: u64,
        remaining_points: u64,
    );

    #[event("bountyWithdrawn")]
    fn bounty_withdrawn_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] era: u64,
        payout: &BigUint,
    );

    // ── Storage ──

    #[storage_mapper("accusation")]
    fn accusation(
        &self,
        accused: &ManagedAddress,
        era: u64,
    ) -> SingleValueMapper<AccusationRound<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        voter: &ManagedAddress,
        accused: &ManagedAddress,
        era: u64,
    ) -> SingleValueMapper<bool>;

    #[view(isDenied)]
    #[storage_mapper("denied")]
    fn denied(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("hunterRewarded")]
    fn hunter_rewarded(
        &self,
        hunter: &ManagedAddress,
        accused: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    #[view(getVoterPoints)]
    #[storage_mapper("voterPoints")]
    fn voter_points(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("lastVoteTick")]
    fn last_vote_tick(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getBountyNextClaimEra)]
    #[storage_mapper("bountyNextClaimEra")]
    fn bounty_next_claim_era(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("bountyEraAccounting")]
    fn bounty_era_accounting(&self, era: u64) -> SingleValueMapper<EraAccounting<Self::Api>>;

    #[storage_mapper("bountyEntry")]
    fn bounty_entry(
        &self,
        voter: &ManagedAddress,
        era: u64,
    ) -> SingleValueMapper<AccountEraEntry<Self::Api>>;

    #[view(getTimeBetweenVotes)]
    #[storage_mapper("timeBetweenVotes")]
    fn time_between_votes(&self) -> SingleValueMapper<u64>;

    #[view(getBountyPoolSupply)]
    #[storage_mapper("bountyPoolSupply")]
    fn bounty_pool_supply(&self) -> SingleValueMapper<BigUint>;
}
