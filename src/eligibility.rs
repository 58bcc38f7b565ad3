multiversx_sc::imports!();

/// Below this population everyone qualifies, so a nascent role is
/// not gridlocked by a strict average nobody clears.
const BOOTSTRAP_POPULATION: u64 = 5;

// ============================================================
// Voter eligibility — one predicate, two policies. The same
// above-average rule decides who may send invitations and who
// may cast accusation votes; collaborators consume it through
// the isEligibleVoter view.
// ============================================================

#[multiversx_sc::module]
pub trait EligibilityModule:
    crate::level_ledger::LevelLedgerModule
    + crate::era_clock::EraClockModule
    + crate::access_gate::AccessGateModule
{
    /// Strictly above the population mean, compared by
    /// cross-multiplication so no division is involved.
    fn is_above_average(
        &self,
        account_levels: u64,
        population_total: u64,
        population_size: u64,
    ) -> bool {
        if population_size == 0 {
            return false;
        }
        if population_size <= BOOTSTRAP_POPULATION {
            return true;
        }
        account_levels as u128 * population_size as u128 > population_total as u128
    }

    #[view(isEligibleVoter)]
    fn is_eligible_voter(&self, account: &ManagedAddress) -> bool {
        self.is_above_average(
            self.lifetime_levels(account).get(),
            self.grand_total_levels().get(),
            self.population_size().get(),
        )
    }
}
