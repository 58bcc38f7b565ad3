multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Gated operations — exact-contract capability bindings
// ============================================================

/// Operations that accept exactly one pre-bound caller contract.
/// `Credit` and `Withdraw` gate inbound calls from the role
/// collaborator and the withdrawal wrapper; `RevokeHook` is the
/// outbound target invoked when a denial lands.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum GatedOp {
    Credit,
    Withdraw,
    RevokeHook,
}

/// Mutating entry points protected by the per-entry busy flag.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum EntryPoint {
    Credit,
    Revoke,
    Withdraw,
    Accuse,
    ConvertPoints,
    WithdrawBounty,
}

// ============================================================
// Revocation outcome
// ============================================================

/// "Nothing to remove" is a designed no-op, not a failure — the
/// distinction is carried in the return value instead of an error.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RevokeOutcome {
    NoOp,
    /// Levels actually removed, after clamping to the holding.
    Revoked(u64),
}

// ============================================================
// Era accounting — per-era aggregate record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct EraAccounting<M: ManagedTypeApi> {
    /// Sum of all accounts' levels credited in this era.
    pub total_levels: u64,
    pub claim_count: u64,
    pub tokens_claimed: BigUint<M>,
}

impl<M: ManagedTypeApi> EraAccounting<M> {
    pub fn empty() -> Self {
        EraAccounting {
            total_levels: 0,
            claim_count: 0,
            tokens_claimed: BigUint::zero(),
        }
    }
}

// ============================================================
// Per-account-per-era entry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AccountEraEntry<M: ManagedTypeApi> {
    pub levels: u64,
    /// Set once, by the era's single withdrawal.
    pub tokens_withdrawn: BigUint<M>,
    /// One-shot flag — the only serialization withdraw needs.
    pub withdrawn: bool,
}

impl<M: ManagedTypeApi> AccountEraEntry<M> {
    pub fn empty() -> Self {
        AccountEraEntry {
            levels: 0,
            tokens_withdrawn: BigUint::zero(),
            withdrawn: false,
        }
    }
}

// ============================================================
// Accusation round — one per (accused, era)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AccusationRound<M: ManagedTypeApi> {
    pub vote_count: u64,
    /// First voter recorded against this (accused, era) pair;
    /// rewarded from the bounty ledger if the round reaches quorum.
    pub hunter: ManagedAddress<M>,
}
