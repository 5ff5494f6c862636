multiversx_sc::imports!();

use crate::types::{Classification, ComplianceStatus, VoteChoice, VoteTally};

/// Notifications for indexers and UIs. None of them carry decision logic.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] organizer: &ManagedAddress,
        #[indexed] emergency: bool,
        funding_goal: &BigUint,
    );

    #[event("complianceStatusUpdated")]
    fn compliance_status_updated_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] status: ComplianceStatus,
        notes: &ManagedBuffer,
    );

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] vote_start: u64,
        vote_end: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] choice: VoteChoice,
        weight: &BigUint,
    );

    #[event("votingFinalized")]
    fn voting_finalized_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
        tally: &VoteTally<Self::Api>,
    );

    #[event("bundleCreated")]
    fn bundle_created_event(
        &self,
        #[indexed] bundle_id: u64,
        #[indexed] created_at: u64,
        proposal_ids: &ManagedVec<u64>,
    );

    #[event("proposalReviewed")]
    fn proposal_reviewed_event(
        &self,
        #[indexed] bundle_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] reviewer: &ManagedAddress,
        #[indexed] approved: bool,
        classification: Classification,
    );

    #[event("bundleFinalized")]
    fn bundle_finalized_event(
        &self,
        #[indexed] bundle_id: u64,
        #[indexed] approved_count: u64,
        rejected_count: u64,
    );

    #[event("poolCreated")]
    fn pool_created_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] organizer: &ManagedAddress,
        funding_goal: &BigUint,
    );

    #[event("donationReceived")]
    fn donation_received_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] donor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] receipt_id: u64,
        metadata_ref: &ManagedBuffer,
    );

    #[event("fundingGoalReached")]
    fn funding_goal_reached_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] funding_goal: &BigUint,
        raised: &BigUint,
    );

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] organizer: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalCanceled")]
    fn proposal_canceled_event(&self, #[indexed] proposal_id: u64, #[indexed] by: &ManagedAddress);
}
