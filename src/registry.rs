multiversx_sc::imports!();

use crate::errors::{
    ERR_COMPLIANCE_NOT_VERIFIED, ERR_EMPTY_TITLE, ERR_ILLEGAL_TRANSITION, ERR_NOT_CANCELABLE,
    ERR_NOT_DRAFT, ERR_NOT_ORGANIZER, ERR_POOL_EXISTS, ERR_PROPOSAL_NOT_FOUND,
    ERR_PROPOSAL_TERMINAL, ERR_ZERO_GOAL,
};
use crate::types::{
    Classification, ComplianceStatus, Proposal, ProposalStatus, VoteChoice, VoteTally,
};

/// Single owner of proposal records. The engines go through
/// `apply_transition`, `add_to_tally`, `apply_council_decision` and
/// `link_pool`; nothing else writes a proposal.
#[multiversx_sc::module]
pub trait RegistryModule: crate::events::EventsModule + crate::config::ConfigModule {
    // ========================================================
    // Organizer / oracle operations
    // ========================================================

    fn create_proposal(
        &self,
        organizer: &ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        funding_goal: BigUint,
        emergency: bool,
        compliance_ref: ManagedBuffer,
        checklist: ManagedVec<ManagedBuffer>,
        now: u64,
    ) -> u64 {
        require!(!title.is_empty(), ERR_EMPTY_TITLE);
        require!(funding_goal > 0u64, ERR_ZERO_GOAL);

        let proposal_id = self.proposal_count().get() + 1;
        let compliance_status = if emergency {
            ComplianceStatus::NotRequired
        } else {
            ComplianceStatus::Pending
        };

        let proposal = Proposal {
            id: proposal_id,
            organizer: organizer.clone(),
            title,
            description,
            funding_goal,
            emergency,
            compliance_status,
            compliance_notes: ManagedBuffer::new(),
            compliance_ref,
            created_at: now,
            vote_start: 0,
            vote_end: 0,
            tally: VoteTally::zero(),
            status: ProposalStatus::Draft,
            classification: Classification::Normal,
            pool_id: None,
            checklist,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.status_index(ProposalStatus::Draft).insert(proposal_id);

        self.proposal_created_event(proposal_id, organizer, emergency, &proposal.funding_goal);

        proposal_id
    }

    fn set_compliance_status(
        &self,
        proposal_id: u64,
        status: ComplianceStatus,
        notes: ManagedBuffer,
    ) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.status.is_terminal(), ERR_PROPOSAL_TERMINAL);

        proposal.compliance_status = status;
        proposal.compliance_notes = notes;
        self.proposals(proposal_id).set(&proposal);

        self.compliance_status_updated_event(proposal_id, status, &proposal.compliance_notes);
    }

    /// Opens the vote window `[now, now + votingPeriod]`.
    fn submit_proposal(&self, caller: &ManagedAddress, proposal_id: u64, now: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.organizer == *caller, ERR_NOT_ORGANIZER);
        require!(proposal.status == ProposalStatus::Draft, ERR_NOT_DRAFT);
        require!(
            proposal.emergency || proposal.compliance_status == ComplianceStatus::Verified,
            ERR_COMPLIANCE_NOT_VERIFIED
        );

        proposal.vote_start = now;
        proposal.vote_end = now + self.voting_period().get();
        self.store_transition(&mut proposal, ProposalStatus::CommunityVoting);

        self.proposal_submitted_event(proposal_id, proposal.vote_start, proposal.vote_end);
    }

    /// Authorization (organizer or admin) is checked by the caller of this function.
    fn cancel_proposal(&self, proposal_id: u64, canceled_by: &ManagedAddress) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.status.is_cancelable(), ERR_NOT_CANCELABLE);

        self.store_transition(&mut proposal, ProposalStatus::Canceled);

        self.proposal_canceled_event(proposal_id, canceled_by);
    }

    // ========================================================
    // Engine-facing mutators
    // ========================================================

    fn apply_transition(
        &self,
        proposal_id: u64,
        next: ProposalStatus,
        tally: Option<VoteTally<Self::Api>>,
    ) {
        let mut proposal = self.require_proposal(proposal_id);
        if let Some(final_tally) = tally {
            proposal.tally = final_tally;
        }
        self.store_transition(&mut proposal, next);
    }

    /// Adds one vote's weight to the running tally held on the proposal.
    fn add_to_tally(&self, proposal_id: u64, choice: VoteChoice, weight: &BigUint) {
        let mut proposal = self.require_proposal(proposal_id);
        proposal.tally.add(choice, weight);
        self.proposals(proposal_id).set(&proposal);
    }

    fn apply_council_decision(
        &self,
        proposal_id: u64,
        approved: bool,
        classification: Classification,
    ) {
        let mut proposal = self.require_proposal(proposal_id);
        if approved {
            proposal.classification = classification;
            self.store_transition(&mut proposal, ProposalStatus::CouncilApproved);
        } else {
            self.store_transition(&mut proposal, ProposalStatus::CouncilRejected);
        }
    }

    /// Links the pool (once) and moves the proposal to PoolCreated.
    fn link_pool(&self, proposal_id: u64, pool_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.pool_id.is_none(), ERR_POOL_EXISTS);

        proposal.pool_id = Some(pool_id);
        self.store_transition(&mut proposal, ProposalStatus::PoolCreated);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// Validates the edge, moves the id between status indexes and persists.
    fn store_transition(&self, proposal: &mut Proposal<Self::Api>, next: ProposalStatus) {
        let previous = proposal.status;
        require!(previous.can_transition_to(&next), ERR_ILLEGAL_TRANSITION);

        proposal.status = next;
        self.status_index(previous).remove(&proposal.id);
        self.status_index(next).insert(proposal.id);
        self.proposals(proposal.id).set(&*proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// Ids in the order they entered `status`.
    #[view(getProposalsByStatus)]
    fn get_proposals_by_status(&self, status: ProposalStatus) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.status_index(status).iter() {
            result.push(proposal_id);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("statusIndex")]
    fn status_index(&self, status: ProposalStatus) -> SetMapper<u64>;
}
