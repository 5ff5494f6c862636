multiversx_sc::imports!();

use crate::errors::{ERR_PERCENTAGE_RANGE, ERR_ZERO_PERIOD, ERR_ZERO_THRESHOLD};

/// Voting window: 7 days in seconds
pub const DEFAULT_VOTING_PERIOD: u64 = 604_800;

/// Minimum participation, as a percentage of total voting supply
pub const DEFAULT_QUORUM_PERCENTAGE: u64 = 10;

/// Number of community-passed proposals that triggers a bundle
pub const DEFAULT_BUNDLE_COUNT_THRESHOLD: u64 = 5;

/// Maximum wait before waiting proposals get bundled anyway: 7 days
pub const DEFAULT_BUNDLE_TIME_THRESHOLD: u64 = 604_800;

pub const PERCENTAGE_DENOMINATOR: u64 = 100;

#[multiversx_sc::module]
pub trait ConfigModule {
    fn init_config(&self, fund_token: EgldOrEsdtTokenIdentifier, pass_threshold_percentage: u64) {
        self.fund_token().set(fund_token);
        self.set_pass_threshold_checked(pass_threshold_percentage);
        self.voting_period().set(DEFAULT_VOTING_PERIOD);
        self.quorum_percentage().set(DEFAULT_QUORUM_PERCENTAGE);
        self.bundle_count_threshold().set(DEFAULT_BUNDLE_COUNT_THRESHOLD);
        self.bundle_time_threshold().set(DEFAULT_BUNDLE_TIME_THRESHOLD);
    }

    // ========================================================
    // OWNER: parameter updates
    // ========================================================

    #[only_owner]
    #[endpoint(setVotingPeriod)]
    fn set_voting_period(&self, seconds: u64) {
        require!(seconds > 0, ERR_ZERO_PERIOD);
        self.voting_period().set(seconds);
    }

    #[only_owner]
    #[endpoint(setQuorumPercentage)]
    fn set_quorum_percentage(&self, percentage: u64) {
        require!(percentage <= PERCENTAGE_DENOMINATOR, ERR_PERCENTAGE_RANGE);
        self.quorum_percentage().set(percentage);
    }

    #[only_owner]
    #[endpoint(setPassThreshold)]
    fn set_pass_threshold(&self, percentage: u64) {
        self.set_pass_threshold_checked(percentage);
    }

    #[only_owner]
    #[endpoint(setBundleThresholds)]
    fn set_bundle_thresholds(&self, count_threshold: u64, time_threshold: u64) {
        require!(count_threshold > 0, ERR_ZERO_THRESHOLD);
        require!(time_threshold > 0, ERR_ZERO_PERIOD);
        self.bundle_count_threshold().set(count_threshold);
        self.bundle_time_threshold().set(time_threshold);
    }

    #[only_owner]
    #[endpoint(setCollaborators)]
    fn set_collaborators(
        &self,
        capability_registry: ManagedAddress,
        voting_power_ledger: ManagedAddress,
        receipt_issuer: ManagedAddress,
    ) {
        self.capability_registry_address().set(capability_registry);
        self.voting_power_address().set(voting_power_ledger);
        self.receipt_issuer_address().set(receipt_issuer);
    }

    fn set_pass_threshold_checked(&self, percentage: u64) {
        require!(
            percentage > 0 && percentage <= PERCENTAGE_DENOMINATOR,
            ERR_PERCENTAGE_RANGE
        );
        self.pass_threshold_percentage().set(percentage);
    }

    /// (voting period, quorum %, pass threshold %, bundle count threshold, bundle time threshold)
    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue5<u64, u64, u64, u64, u64> {
        (
            self.voting_period().get(),
            self.quorum_percentage().get(),
            self.pass_threshold_percentage().get(),
            self.bundle_count_threshold().get(),
            self.bundle_time_threshold().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Collaborators ──

    #[view(getFundToken)]
    #[storage_mapper("fundToken")]
    fn fund_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("capabilityRegistryAddress")]
    fn capability_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("votingPowerAddress")]
    fn voting_power_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("receiptIssuerAddress")]
    fn receipt_issuer_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Parameters ──

    #[storage_mapper("votingPeriod")]
    fn voting_period(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumPercentage")]
    fn quorum_percentage(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("passThresholdPercentage")]
    fn pass_threshold_percentage(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bundleCountThreshold")]
    fn bundle_count_threshold(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bundleTimeThreshold")]
    fn bundle_time_threshold(&self) -> SingleValueMapper<u64>;
}
