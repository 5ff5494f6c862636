multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REVIEWED, ERR_BUNDLE_FINALIZED, ERR_BUNDLE_NOT_FOUND, ERR_DUPLICATE_IN_BUNDLE,
    ERR_EMPTY_BUNDLE, ERR_NOT_COMMUNITY_PASSED, ERR_NOT_IN_BUNDLE,
};
use crate::types::{Classification, ProposalStatus, ReviewBundle, ReviewDecision};

/// Distinct approvals a proposal needs: ceil(2/3 of the current council).
/// Never below one, so an approval always takes at least one reviewer.
pub fn council_quorum(council_size: usize) -> usize {
    let quorum = (council_size * 2 + 2) / 3;
    core::cmp::max(quorum, 1)
}

/// A bundle is due when something is waiting and either enough proposals
/// piled up or the oldest possible wait exceeded the time threshold.
pub fn bundle_due(
    eligible: usize,
    count_threshold: u64,
    now: u64,
    last_bundle_time: u64,
    time_threshold: u64,
) -> bool {
    eligible > 0
        && (eligible as u64 >= count_threshold
            || now.saturating_sub(last_bundle_time) >= time_threshold)
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct BundleOutcome {
    pub approved: u64,
    pub rejected: u64,
}

/// Batches community-passed proposals and runs the council's multi-signer
/// review over each batch.
#[multiversx_sc::module]
pub trait ReviewModule:
    crate::registry::RegistryModule + crate::events::EventsModule + crate::config::ConfigModule
{
    fn init_review(&self, now: u64) {
        self.last_bundle_time().set(now);
    }

    // ========================================================
    // Bundling
    // ========================================================

    /// Bundles every CommunityPassed proposal when the policy says so.
    /// Returns `None` (and changes nothing) otherwise.
    fn try_bundle(&self, now: u64) -> Option<u64> {
        let eligible = self.status_index(ProposalStatus::CommunityPassed);
        if !bundle_due(
            eligible.len(),
            self.bundle_count_threshold().get(),
            now,
            self.last_bundle_time().get(),
            self.bundle_time_threshold().get(),
        ) {
            return None;
        }

        let mut proposal_ids = ManagedVec::new();
        for proposal_id in eligible.iter() {
            proposal_ids.push(proposal_id);
        }

        let bundle_id = self.open_bundle(proposal_ids, now);
        self.last_bundle_time().set(now);
        Some(bundle_id)
    }

    /// Admin path: bundles exactly the listed proposals and leaves the
    /// automatic timer alone.
    fn create_bundle_from(&self, proposal_ids: ManagedVec<u64>, now: u64) -> u64 {
        require!(!proposal_ids.is_empty(), ERR_EMPTY_BUNDLE);

        for (index, proposal_id) in proposal_ids.iter().enumerate() {
            for other_id in proposal_ids.iter().skip(index + 1) {
                require!(other_id != proposal_id, ERR_DUPLICATE_IN_BUNDLE);
            }
            let proposal = self.require_proposal(proposal_id);
            require!(
                proposal.status == ProposalStatus::CommunityPassed,
                ERR_NOT_COMMUNITY_PASSED
            );
        }

        self.open_bundle(proposal_ids, now)
    }

    fn open_bundle(&self, proposal_ids: ManagedVec<u64>, now: u64) -> u64 {
        let bundle_id = self.bundle_count().get() + 1;

        for proposal_id in proposal_ids.iter() {
            self.apply_transition(proposal_id, ProposalStatus::CouncilReview, None);
        }

        let bundle = ReviewBundle {
            id: bundle_id,
            proposal_ids,
            created_at: now,
            finalized: false,
        };
        self.bundles(bundle_id).set(&bundle);
        self.bundle_count().set(bundle_id);

        self.bundle_created_event(bundle_id, now, &bundle.proposal_ids);

        bundle_id
    }

    // ========================================================
    // Council review
    // ========================================================

    fn record_review(
        &self,
        reviewer: &ManagedAddress,
        bundle_id: u64,
        proposal_id: u64,
        approved: bool,
        classification: Classification,
        proof_ref: ManagedBuffer,
        now: u64,
    ) {
        let bundle = self.require_bundle(bundle_id);
        require!(!bundle.finalized, ERR_BUNDLE_FINALIZED);
        require!(bundle.contains(proposal_id), ERR_NOT_IN_BUNDLE);

        let decision_mapper = self.review_decision(bundle_id, proposal_id, reviewer);
        require!(decision_mapper.is_empty(), ERR_ALREADY_REVIEWED);

        decision_mapper.set(ReviewDecision {
            reviewer: reviewer.clone(),
            approved,
            classification,
            proof_ref,
            reviewed_at: now,
        });
        self.reviewers(bundle_id, proposal_id).insert(reviewer.clone());

        // latest approving reviewer's declaration wins
        if approved {
            self.tentative_classification(bundle_id, proposal_id)
                .set(classification);
        }

        self.proposal_reviewed_event(bundle_id, proposal_id, reviewer, approved, classification);
    }

    /// Seals the bundle and decides each member against the council quorum.
    /// Members canceled while under review are skipped.
    fn finalize_bundle_decisions(&self, bundle_id: u64, council_size: usize) -> BundleOutcome {
        let mut bundle = self.require_bundle(bundle_id);
        require!(!bundle.finalized, ERR_BUNDLE_FINALIZED);

        bundle.finalized = true;
        self.bundles(bundle_id).set(&bundle);

        let quorum = council_quorum(council_size);
        let mut outcome = BundleOutcome::default();

        for proposal_id in bundle.proposal_ids.iter() {
            let proposal = self.require_proposal(proposal_id);
            if proposal.status != ProposalStatus::CouncilReview {
                continue;
            }

            if self.count_approvals(bundle_id, proposal_id) >= quorum {
                let classification = self.tentative_classification(bundle_id, proposal_id).get();
                self.apply_council_decision(proposal_id, true, classification);
                outcome.approved += 1;
            } else {
                self.apply_council_decision(proposal_id, false, Classification::Normal);
                outcome.rejected += 1;
            }
        }

        self.bundle_finalized_event(bundle_id, outcome.approved, outcome.rejected);

        outcome
    }

    /// Distinct reviewers whose decision on this proposal is an approval.
    fn count_approvals(&self, bundle_id: u64, proposal_id: u64) -> usize {
        self.reviewers(bundle_id, proposal_id)
            .iter()
            .filter(|reviewer| {
                self.review_decision(bundle_id, proposal_id, reviewer)
                    .get()
                    .approved
            })
            .count()
    }

    fn require_bundle(&self, bundle_id: u64) -> ReviewBundle<Self::Api> {
        require!(!self.bundles(bundle_id).is_empty(), ERR_BUNDLE_NOT_FOUND);
        self.bundles(bundle_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBundle)]
    fn get_bundle(&self, bundle_id: u64) -> ReviewBundle<Self::Api> {
        self.require_bundle(bundle_id)
    }

    #[view(getReviewDecision)]
    fn get_review_decision(
        &self,
        bundle_id: u64,
        proposal_id: u64,
        reviewer: ManagedAddress,
    ) -> OptionalValue<ReviewDecision<Self::Api>> {
        let mapper = self.review_decision(bundle_id, proposal_id, &reviewer);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getApprovalCount)]
    fn get_approval_count(&self, bundle_id: u64, proposal_id: u64) -> u32 {
        self.count_approvals(bundle_id, proposal_id) as u32
    }

    #[view(councilQuorum)]
    fn council_quorum_for(&self, council_size: u32) -> u32 {
        council_quorum(council_size as usize) as u32
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getBundleCount)]
    #[storage_mapper("bundleCount")]
    fn bundle_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bundles")]
    fn bundles(&self, bundle_id: u64) -> SingleValueMapper<ReviewBundle<Self::Api>>;

    #[view(getLastBundleTime)]
    #[storage_mapper("lastBundleTime")]
    fn last_bundle_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reviewDecision")]
    fn review_decision(
        &self,
        bundle_id: u64,
        proposal_id: u64,
        reviewer: &ManagedAddress,
    ) -> SingleValueMapper<ReviewDecision<Self::Api>>;

    #[storage_mapper("reviewers")]
    fn reviewers(&self, bundle_id: u64, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("tentativeClassification")]
    fn tentative_classification(
        &self,
        bundle_id: u64,
        proposal_id: u64,
    ) -> SingleValueMapper<Classification>;
}
