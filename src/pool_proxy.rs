use multiversx_sc::proxy_imports::*;

use crate::types::{AccountEraEntry, AccusationRound, EraAccounting, GatedOp, RevokeOutcome};

pub struct LevelPoolProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for LevelPoolProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = LevelPoolProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        LevelPoolProxyMethods { wrapped_tx: tx }
    }
}

pub struct LevelPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> LevelPoolProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<u64>,
    >(
        self,
        ticks_per_era: Arg0,
        eras_per_epoch: Arg1,
        pool_supply: Arg2,
        bounty_pool_supply: Arg3,
        max_levels_per_event: Arg4,
        time_between_votes: Arg5,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&ticks_per_era)
            .argument(&eras_per_epoch)
            .argument(&pool_supply)
            .argument(&bounty_pool_supply)
            .argument(&max_levels_per_event)
            .argument(&time_between_votes)
            .original_result()
    }
}

impl<Env, From, To, Gas> LevelPoolProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    // ── Access gate ──

    pub fn authorize_caller<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("authorizeCaller")
            .argument(&identity)
            .original_result()
    }

    pub fn bind_caller<Arg0: ProxyArg<GatedOp>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        op: Arg0,
        identity: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("bindCaller")
            .argument(&op)
            .argument(&identity)
            .original_result()
    }

    pub fn set_paused<Arg0: ProxyArg<bool>>(
        self,
        paused: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPaused")
            .argument(&paused)
            .original_result()
    }

    pub fn is_allowed_caller<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAllowedCaller")
            .argument(&identity)
            .original_result()
    }

    pub fn is_paused(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaused")
            .original_result()
    }

    // ── Era clock ──

    pub fn current_era(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentEra")
            .original_result()
    }

    pub fn epoch_of<Arg0: ProxyArg<u64>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEpochOf")
            .argument(&era)
            .original_result()
    }

    pub fn ticks_until_era_ends<Arg0: ProxyArg<u64>>(
        self,
        target_era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, i64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTicksUntilEraEnds")
            .argument(&target_era)
            .original_result()
    }

    // ── Level ledger ──

    pub fn credit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        account: Arg0,
        amount: Arg1,
        era: Arg2,
        key: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("credit")
            .argument(&account)
            .argument(&amount)
            .argument(&era)
            .argument(&key)
            .original_result()
    }

    pub fn revoke<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        account: Arg0,
        era: Arg1,
        amount: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, RevokeOutcome> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revoke")
            .argument(&account)
            .argument(&era)
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        account: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&account)
            .argument(&era)
            .original_result()
    }

    pub fn has_claimable<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        account: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasClaimable")
            .argument(&account)
            .argument(&era)
            .original_result()
    }

    pub fn claimable_amount<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        account: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClaimableAmount")
            .argument(&account)
            .argument(&era)
            .original_result()
    }

    pub fn emission_for_epoch<Arg0: ProxyArg<u64>>(
        self,
        epoch: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEmissionForEpoch")
            .argument(&epoch)
            .original_result()
    }

    pub fn emission_for_era<Arg0: ProxyArg<u64>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEmissionForEra")
            .argument(&era)
            .original_result()
    }

    pub fn era_accounting<Arg0: ProxyArg<u64>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EraAccounting<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEraAccounting")
            .argument(&era)
            .original_result()
    }

    pub fn account_era<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        account: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AccountEraEntry<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccountEra")
            .argument(&account)
            .argument(&era)
            .original_result()
    }

    pub fn lifetime_levels<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLifetimeLevels")
            .argument(&account)
            .original_result()
    }

    pub fn grand_total_levels(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getGrandTotalLevels")
            .original_result()
    }

    pub fn population_size(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPopulationSize")
            .original_result()
    }

    // ── Eligibility ──

    pub fn is_eligible_voter<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isEligibleVoter")
            .argument(&account)
            .original_result()
    }

    // ── Quorum engine ──

    pub fn quorum_for<Arg0: ProxyArg<u64>>(
        self,
        population: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQuorumFor")
            .argument(&population)
            .original_result()
    }

    pub fn current_quorum(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentQuorum")
            .original_result()
    }

    pub fn accuse<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        accused: Arg0,
        era: Arg1,
        justification: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("accuse")
            .argument(&accused)
            .argument(&era)
            .argument(&justification)
            .original_result()
    }

    pub fn convert_points_to_level(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("convertPointsToLevel")
            .original_result()
    }

    pub fn withdraw_bounty(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawBounty")
            .original_result()
    }

    pub fn accusation<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        accused: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AccusationRound<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccusation")
            .argument(&accused)
            .argument(&era)
            .original_result()
    }

    pub fn is_denied<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDenied")
            .argument(&account)
            .original_result()
    }

    pub fn voter_points<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoterPoints")
            .argument(&voter)
            .original_result()
    }

    pub fn bounty_next_claim_era<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBountyNextClaimEra")
            .argument(&voter)
            .original_result()
    }

    pub fn bounty_entry<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        voter: Arg0,
        era: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AccountEraEntry<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBountyEntry")
            .argument(&voter)
            .argument(&era)
            .original_result()
    }

    pub fn bounty_era_accounting<Arg0: ProxyArg<u64>>(
        self,
        era: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EraAccounting<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBountyEraAccounting")
            .argument(&era)
            .original_result()
    }

    // ── Config ──

    #[allow(clippy::type_complexity)]
    pub fn contract_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue7<u64, u64, u64, BigUint<Env::Api>, BigUint<Env::Api>, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }
}
