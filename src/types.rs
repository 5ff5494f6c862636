multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Created, waiting for compliance and submission by the organizer.
    Draft,
    /// Vote window open. Token holders vote for/against/abstain.
    CommunityVoting,
    /// Community vote passed. Waiting to be bundled for council review.
    CommunityPassed,
    /// Community vote failed (quorum or threshold). Terminal.
    CommunityRejected,
    /// Part of a review bundle; council decisions are being collected.
    CouncilReview,
    /// Council quorum approved. Organizer may open a pool.
    CouncilApproved,
    /// Council quorum not reached. Terminal.
    CouncilRejected,
    /// Funding pool open.
    PoolCreated,
    /// Pool paid out. Terminal.
    Completed,
    /// Canceled by the organizer or an admin. Terminal.
    Canceled,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalStatus::CommunityRejected
                | ProposalStatus::CouncilRejected
                | ProposalStatus::Completed
                | ProposalStatus::Canceled
        )
    }

    /// Every live state except PoolCreated can still be canceled.
    pub fn is_cancelable(&self) -> bool {
        !self.is_terminal() && *self != ProposalStatus::PoolCreated
    }

    /// The lifecycle graph. Any edge not listed here is illegal.
    pub fn can_transition_to(&self, next: &ProposalStatus) -> bool {
        use ProposalStatus::*;

        match (self, next) {
            (Draft, CommunityVoting)
            | (CommunityVoting, CommunityPassed)
            | (CommunityVoting, CommunityRejected)
            | (CommunityPassed, CouncilReview)
            | (CouncilReview, CouncilApproved)
            | (CouncilReview, CouncilRejected)
            | (CouncilApproved, PoolCreated)
            | (PoolCreated, Completed) => true,
            (current, Canceled) => current.is_cancelable(),
            _ => false,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ComplianceStatus {
    NotRequired,
    Pending,
    Verified,
    Rejected,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Classification {
    Normal,
    Compliant,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteChoice {
    For,
    Against,
    Abstain,
}

// ============================================================
// Vote Tally: weighted totals per choice
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteTally<M: ManagedTypeApi> {
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub abstain_votes: BigUint<M>,
}

impl<M: ManagedTypeApi> VoteTally<M> {
    pub fn zero() -> Self {
        VoteTally {
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            abstain_votes: BigUint::zero(),
        }
    }

    pub fn add(&mut self, choice: VoteChoice, weight: &BigUint<M>) {
        match choice {
            VoteChoice::For => self.for_votes += weight,
            VoteChoice::Against => self.against_votes += weight,
            VoteChoice::Abstain => self.abstain_votes += weight,
        }
    }

    pub fn total_cast(&self) -> BigUint<M> {
        let mut total = &self.for_votes + &self.against_votes;
        total += &self.abstain_votes;
        total
    }

    /// Weight that expressed an opinion (abstentions excluded).
    pub fn decisive(&self) -> BigUint<M> {
        &self.for_votes + &self.against_votes
    }
}

// ============================================================
// Proposal: the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub organizer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub funding_goal: BigUint<M>,
    pub emergency: bool,
    pub compliance_status: ComplianceStatus,
    pub compliance_notes: ManagedBuffer<M>,
    /// Opaque reference to off-chain compliance material.
    pub compliance_ref: ManagedBuffer<M>,
    pub created_at: u64,
    /// Both 0 until the proposal is submitted.
    pub vote_start: u64,
    pub vote_end: u64,
    /// Running weighted totals, updated on every vote and frozen once voting
    /// is finalized or the proposal is canceled.
    pub tally: VoteTally<M>,
    pub status: ProposalStatus,
    pub classification: Classification,
    pub pool_id: Option<u64>,
    pub checklist: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Review Bundle: batch of proposals under council review
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ReviewBundle<M: ManagedTypeApi> {
    pub id: u64,
    pub proposal_ids: ManagedVec<M, u64>,
    pub created_at: u64,
    pub finalized: bool,
}

impl<M: ManagedTypeApi> ReviewBundle<M> {
    pub fn contains(&self, proposal_id: u64) -> bool {
        self.proposal_ids.iter().any(|id| id == proposal_id)
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ReviewDecision<M: ManagedTypeApi> {
    pub reviewer: ManagedAddress<M>,
    pub approved: bool,
    pub classification: Classification,
    /// Opaque proof reference, accepted as given.
    pub proof_ref: ManagedBuffer<M>,
    pub reviewed_at: u64,
}

// ============================================================
// Campaign Pool: escrow for one approved proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CampaignPool<M: ManagedTypeApi> {
    pub id: u64,
    pub proposal_id: u64,
    pub organizer: ManagedAddress<M>,
    pub funding_goal: BigUint<M>,
    pub raised: BigUint<M>,
    pub classification: Classification,
    pub active: bool,
    pub withdrawn: bool,
    pub created_at: u64,
}
