#![no_std]

multiversx_sc::imports!();

pub mod access_gate;
pub mod collaborator_proxy;
pub mod eligibility;
pub mod era_clock;
pub mod level_ledger;
pub mod pool_proxy;
pub mod quorum;
pub mod types;

// ============================================================
// Error messages
// ============================================================

pub const ERR_PAUSED: &str = "ERR_PAUSED";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_REENTRANCY: &str = "ERR_REENTRANCY";
pub const ERR_INVALID_PARAMS: &str = "ERR_INVALID_PARAMS";
pub const ERR_INVALID_ERA: &str = "ERR_INVALID_ERA";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_AMOUNT_TOO_LARGE: &str = "ERR_AMOUNT_TOO_LARGE";
pub const ERR_ALREADY_PROCESSED: &str = "ERR_ALREADY_PROCESSED";
pub const ERR_ALREADY_WITHDRAWN: &str = "ERR_ALREADY_WITHDRAWN";
pub const ERR_FUTURE_ERA: &str = "ERR_FUTURE_ERA";
pub const ERR_COOLDOWN_ACTIVE: &str = "ERR_COOLDOWN_ACTIVE";
pub const ERR_ALREADY_VOTED: &str = "ERR_ALREADY_VOTED";
pub const ERR_INSUFFICIENT_POINTS: &str = "ERR_INSUFFICIENT_POINTS";
pub const ERR_ALREADY_DENIED: &str = "ERR_ALREADY_DENIED";
pub const ERR_ALREADY_AUTHORIZED: &str = "ERR_ALREADY_AUTHORIZED";
pub const ERR_ALREADY_BOUND: &str = "ERR_ALREADY_BOUND";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "ERR_NOTHING_TO_WITHDRAW";

// ============================================================
// Contract
//
// One pool per participant role. The role's workflow contract
// decides *when* levels are earned or revoked; everything here
// is the shared accounting: the era/epoch clock with its
// halving emission, the per-era proportional level ledger, and
// the quorum engine that strips levels from accounts the
// community votes out.
// ============================================================

#[multiversx_sc::contract]
pub trait LevelPool:
    era_clock::EraClockModule
    + access_gate::AccessGateModule
    + level_ledger::LevelLedgerModule
    + eligibility::EligibilityModule
    + quorum::QuorumModule
{
    #[init]
    fn init(
        &self,
        ticks_per_era: u64,
        eras_per_epoch: u64,
        pool_supply: BigUint,
        bounty_pool_supply: BigUint,
        max_levels_per_event: u64,
        time_between_votes: u64,
    ) {
        require!(ticks_per_era > 0, ERR_INVALID_PARAMS);
        require!(eras_per_epoch > 0, ERR_INVALID_PARAMS);
        require!(pool_supply > 0u64, ERR_INVALID_PARAMS);
        require!(max_levels_per_event > 0, ERR_INVALID_PARAMS);

        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.paused().set(false);

        self.ticks_per_era().set(ticks_per_era);
        self.eras_per_epoch().set(eras_per_epoch);
        self.genesis_tick().set(self.blockchain().get_block_nonce());

        self.pool_supply().set(&pool_supply);
        self.bounty_pool_supply().set(&bounty_pool_supply);
        self.max_levels_per_event().set(max_levels_per_event);
        self.time_between_votes().set(time_between_votes);

        self.grand_total_levels().set(0u64);
        self.population_size().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue7<u64, u64, u64, BigUint, BigUint, u64, u64> {
        (
            self.ticks_per_era().get(),
            self.eras_per_epoch().get(),
            self.genesis_tick().get(),
            self.pool_supply().get(),
            self.bounty_pool_supply().get(),
            self.max_levels_per_event().get(),
            self.time_between_votes().get(),
        )
            .into()
    }
}
