#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod capability_proxy;
pub mod config;
pub mod errors;
pub mod events;
pub mod pool;
pub mod receipt_issuer_proxy;
pub mod registry;
pub mod review;
pub mod types;
pub mod voting;
pub mod voting_power_proxy;

use access::Capability;
use errors::{ERR_INVALID_TOKEN, ERR_NOT_ORGANIZER_OR_ADMIN, ERR_WRONG_TOKEN};
use types::{Classification, ComplianceStatus, VoteChoice};

// ============================================================
// Contract
//
// Routes caller operations to the four engines (registry, voting,
// review, pool). Each endpoint reads the caller and the block time once,
// resolves capabilities and ledger values through the collaborator
// contracts, and hands everything to the engines explicitly.
// ============================================================

#[multiversx_sc::contract]
pub trait FundingGovernance:
    config::ConfigModule
    + events::EventsModule
    + access::AccessModule
    + registry::RegistryModule
    + voting::VotingModule
    + review::ReviewModule
    + pool::PoolModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        fund_token: EgldOrEsdtTokenIdentifier,
        capability_registry: ManagedAddress,
        voting_power_ledger: ManagedAddress,
        receipt_issuer: ManagedAddress,
        pass_threshold_percentage: u64,
    ) {
        require!(fund_token.is_valid(), ERR_INVALID_TOKEN);

        self.init_config(fund_token, pass_threshold_percentage);
        self.capability_registry_address().set(capability_registry);
        self.voting_power_address().set(voting_power_ledger);
        self.receipt_issuer_address().set(receipt_issuer);

        let now = self.blockchain().get_block_timestamp();
        self.init_review(now);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Proposal Registry
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal_endpoint(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        funding_goal: BigUint,
        emergency: bool,
        compliance_ref: ManagedBuffer,
        checklist: MultiValueEncoded<ManagedBuffer>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_capability(&caller, Capability::Organizer);

        let now = self.blockchain().get_block_timestamp();
        self.create_proposal(
            &caller,
            title,
            description,
            funding_goal,
            emergency,
            compliance_ref,
            checklist.to_vec(),
            now,
        )
    }

    #[endpoint(setComplianceStatus)]
    fn set_compliance_status_endpoint(
        &self,
        proposal_id: u64,
        status: ComplianceStatus,
        notes: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_capability(&caller, Capability::ComplianceOracle);

        self.set_compliance_status(proposal_id, status, notes);
    }

    #[endpoint(submitProposal)]
    fn submit_proposal_endpoint(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.submit_proposal(&caller, proposal_id, now);
    }

    #[endpoint(cancelProposal)]
    fn cancel_proposal_endpoint(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let proposal = self.require_proposal(proposal_id);
        if proposal.organizer != caller {
            require!(
                self.has_capability(&caller, Capability::Admin),
                ERR_NOT_ORGANIZER_OR_ADMIN
            );
        }

        self.cancel_proposal(proposal_id, &caller);
    }

    // ========================================================
    // Community Voting
    // ========================================================

    #[endpoint(castVote)]
    fn cast_vote_endpoint(&self, proposal_id: u64, choice: VoteChoice) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let weight = self.live_voting_weight(&caller);

        self.record_vote(&caller, proposal_id, choice, &weight, now);
    }

    /// Anyone may finalize once the window has closed. A pass immediately
    /// gives the bundler a chance to run.
    #[endpoint(finalizeVoting)]
    fn finalize_voting_endpoint(&self, proposal_id: u64) -> bool {
        let now = self.blockchain().get_block_timestamp();
        let total_supply = self.live_voting_supply();

        let passed = self.finalize_tally(proposal_id, &total_supply, now);
        if passed {
            let _ = self.try_bundle(now);
        }
        passed
    }

    // ========================================================
    // Council Review
    // ========================================================

    #[endpoint(tryBundle)]
    fn try_bundle_endpoint(&self) -> OptionalValue<u64> {
        let now = self.blockchain().get_block_timestamp();
        self.try_bundle(now).into()
    }

    #[endpoint(createBundle)]
    fn create_bundle_endpoint(&self, proposal_ids: MultiValueEncoded<u64>) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_capability(&caller, Capability::Admin);

        let now = self.blockchain().get_block_timestamp();
        self.create_bundle_from(proposal_ids.to_vec(), now)
    }

    #[endpoint(review)]
    fn review_endpoint(
        &self,
        bundle_id: u64,
        proposal_id: u64,
        approved: bool,
        classification: Classification,
        proof_ref: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        self.require_capability(&caller, Capability::Council);

        let now = self.blockchain().get_block_timestamp();
        self.record_review(
            &caller,
            bundle_id,
            proposal_id,
            approved,
            classification,
            proof_ref,
            now,
        );
    }

    /// Returns (approved, rejected) counts for the bundle.
    #[endpoint(finalizeBundle)]
    fn finalize_bundle_endpoint(&self, bundle_id: u64) -> MultiValue2<u64, u64> {
        let caller = self.blockchain().get_caller();
        self.require_capability(&caller, Capability::Council);

        let council_size = self.council_size();
        let outcome = self.finalize_bundle_decisions(bundle_id, council_size);
        (outcome.approved, outcome.rejected).into()
    }

    // ========================================================
    // Pool Funding
    // ========================================================

    #[endpoint(createPool)]
    fn create_pool_endpoint(&self, proposal_id: u64) -> u64 {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        self.open_pool(&caller, proposal_id, now)
    }

    /// The attached payment is the donation. If it is not in the fund token
    /// the whole call reverts and nothing is booked.
    #[endpoint(donate)]
    #[payable("*")]
    fn donate(&self, pool_id: u64, metadata_ref: ManagedBuffer) -> u64 {
        let donor = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.fund_token().get() && payment.token_nonce == 0,
            ERR_WRONG_TOKEN
        );

        let pool = self.record_donation(&donor, pool_id, &payment.amount);
        let title = self.require_proposal(pool.proposal_id).title;
        let receipt_id = self.issue_receipt(&donor, &pool, &payment.amount, title);

        self.donation_received_event(pool_id, &donor, &payment.amount, receipt_id, &metadata_ref);

        receipt_id
    }

    /// Pool bookkeeping is committed before the payout leaves the contract,
    /// so a re-entrant withdraw sees `withdrawn == true`.
    #[endpoint(withdraw)]
    fn withdraw(&self, pool_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.settle_withdrawal(&caller, pool_id);

        let token = self.fund_token().get();
        self.send().direct(&caller, &token, 0, &amount);

        self.funds_withdrawn_event(pool_id, &caller, &amount);

        amount
    }
}
