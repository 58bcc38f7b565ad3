multiversx_sc::imports!();

use crate::ERR_INVALID_ERA;

// ============================================================
// Era clock — tick → era/epoch arithmetic and the halving
// emission schedule. Pure functions of the block nonce plus
// three parameters fixed at deployment.
// ============================================================

#[multiversx_sc::module]
pub trait EraClockModule {
    /// Ticks are block nonces; the chain's own epoch counter is
    /// not used anywhere in the schedule.
    fn current_tick(&self) -> u64 {
        self.blockchain().get_block_nonce()
    }

    /// Eras are 1-indexed from the deployment tick.
    #[view(getCurrentEra)]
    fn current_era(&self) -> u64 {
        let elapsed = self.current_tick() - self.genesis_tick().get();
        elapsed / self.ticks_per_era().get() + 1
    }

    /// Epochs are 1-indexed groups of `eras_per_epoch` eras.
    #[view(getEpochOf)]
    fn epoch_of(&self, era: u64) -> u64 {
        require!(era >= 1, ERR_INVALID_ERA);
        (era - 1) / self.eras_per_epoch().get() + 1
    }

    /// Emission halves every epoch: epoch 1 releases half the pool,
    /// so under integer truncation the pool is never fully drained.
    /// Repeated floor halving equals a single division by 2^epoch.
    fn emission_for_epoch(&self, supply: &BigUint, epoch: u64) -> BigUint {
        let mut emission = supply.clone();
        let mut remaining = epoch;
        while remaining > 0 && emission > 0u64 {
            emission = emission / 2u64;
            remaining -= 1;
        }
        emission
    }

    /// Two truncating divisions, in this order. The per-era amounts
    /// of an epoch deliberately sum to slightly less than the epoch
    /// emission; the remainder stays in the pool.
    fn emission_for_era(&self, supply: &BigUint, era: u64) -> BigUint {
        let epoch_emission = self.emission_for_epoch(supply, self.epoch_of(era));
        epoch_emission / self.eras_per_epoch().get()
    }

    /// Signed tick distance to the first tick of `target_era + 1`:
    /// positive while `target_era` is ongoing or future, zero or
    /// negative once it has ended.
    #[view(getTicksUntilEraEnds)]
    fn ticks_until_era_ends(&self, target_era: u64) -> i64 {
        require!(target_era >= 1, ERR_INVALID_ERA);
        let end_tick = self.genesis_tick().get() + target_era * self.ticks_per_era().get();
        end_tick as i64 - self.current_tick() as i64
    }

    /// An era becomes claimable only once it has fully closed.
    fn can_withdraw_era(&self, era: u64) -> bool {
        era < self.current_era()
    }

    // ── Parameters (set once at init) ──

    #[view(getTicksPerEra)]
    #[storage_mapper("ticksPerEra")]
    fn ticks_per_era(&self) -> SingleValueMapper<u64>;

    #[view(getErasPerEpoch)]
    #[storage_mapper("erasPerEpoch")]
    fn eras_per_epoch(&self) -> SingleValueMapper<u64>;

    #[view(getGenesisTick)]
    #[storage_mapper("genesisTick")]
    fn genesis_tick(&self) -> SingleValueMapper<u64>;
}
