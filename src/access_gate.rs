multiversx_sc::imports!();

use crate::types::{EntryPoint, GatedOp};
use crate::{
    ERR_ALREADY_AUTHORIZED, ERR_ALREADY_BOUND, ERR_PAUSED, ERR_REENTRANCY, ERR_UNAUTHORIZED,
};

// ============================================================
// Access gate — capability allow-list plus one-shot
// exact-contract bindings. Configured once by the deploying
// authority after deployment; the table is append-only, there
// is no removal path.
// ============================================================

#[multiversx_sc::module]
pub trait AccessGateModule {
    // ========================================================
    // ENDPOINT: authorizeCaller
    // One-time-per-identity addition to the allow-list.
    // ========================================================

    #[endpoint(authorizeCaller)]
    fn authorize_caller(&self, identity: ManagedAddress) {
        self.require_owner();
        require!(
            !self.allowed_callers().contains(&identity),
            ERR_ALREADY_AUTHORIZED
        );
        self.allowed_callers().insert(identity.clone());
        self.caller_authorized_event(&identity);
    }

    // ========================================================
    // ENDPOINT: bindCaller
    // Binds the single contract allowed to invoke one gated
    // operation. Settable exactly once per operation.
    // ========================================================

    #[endpoint(bindCaller)]
    fn bind_caller(&self, op: GatedOp, identity: ManagedAddress) {
        self.require_owner();
        require!(self.bound_caller(&op).is_empty(), ERR_ALREADY_BOUND);
        self.bound_caller(&op).set(&identity);
        self.caller_bound_event(&op, &identity);
    }

    // ========================================================
    // ENDPOINT: setPaused
    // Circuit breaker over every mutating entry point.
    // ========================================================

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_owner();
        self.paused().set(paused);
    }

    // ── Guards ──

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn require_allowed_caller(&self) {
        require!(
            self.allowed_callers()
                .contains(&self.blockchain().get_caller()),
            ERR_UNAUTHORIZED
        );
    }

    /// An unbound operation admits nobody.
    fn require_bound_caller(&self, op: GatedOp) {
        let binding = self.bound_caller(&op);
        require!(!binding.is_empty(), ERR_UNAUTHORIZED);
        require!(
            self.blockchain().get_caller() == binding.get(),
            ERR_UNAUTHORIZED
        );
    }

    // ── Re-entrancy guard ──
    // Busy flag per entry point: set on entry, cleared on exit.
    // A nested call into the same entry point aborts; a failed
    // transaction rolls the flag back with everything else.

    fn guard_enter(&self, entry: EntryPoint) {
        require!(!self.entry_busy(&entry).get(), ERR_REENTRANCY);
        self.entry_busy(&entry).set(true);
    }

    fn guard_exit(&self, entry: EntryPoint) {
        self.entry_busy(&entry).set(false);
    }

    // ── Events ──

    #[event("callerAuthorized")]
    fn caller_authorized_event(&self, #[indexed] identity: &ManagedAddress);

    #[event("callerBound")]
    fn caller_bound_event(&self, #[indexed] op: &GatedOp, #[indexed] identity: &ManagedAddress);

    // ── Storage ──

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("allowedCallers")]
    fn allowed_callers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getBoundCaller)]
    #[storage_mapper("boundCaller")]
    fn bound_caller(&self, op: &GatedOp) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("entryBusy")]
    fn entry_busy(&self, entry: &EntryPoint) -> SingleValueMapper<bool>;

    // ── Views ──

    #[view(isAllowedCaller)]
    fn is_allowed_caller(&self, identity: &ManagedAddress) -> bool {
        self.allowed_callers().contains(identity)
    }
}
