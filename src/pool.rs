multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_WITHDRAWN, ERR_NOTHING_RAISED, ERR_NOT_COUNCIL_APPROVED, ERR_NOT_ORGANIZER,
    ERR_POOL_EXISTS, ERR_POOL_INACTIVE, ERR_POOL_NOT_FOUND, ERR_RECEIPT_NOT_ISSUED,
    ERR_ZERO_AMOUNT,
};
use crate::receipt_issuer_proxy;
use crate::types::{CampaignPool, ProposalStatus};

/// True only for the donation that moves `raised` from below the goal to
/// at-or-above it.
pub fn goal_crossed<M: ManagedTypeApi>(
    raised_before: &BigUint<M>,
    raised_after: &BigUint<M>,
    funding_goal: &BigUint<M>,
) -> bool {
    raised_before < funding_goal && raised_after >= funding_goal
}

/// Escrow pools: one per council-approved proposal, many donations, one payout.
#[multiversx_sc::module]
pub trait PoolModule:
    crate::registry::RegistryModule + crate::events::EventsModule + crate::config::ConfigModule
{
    fn open_pool(&self, caller: &ManagedAddress, proposal_id: u64, now: u64) -> u64 {
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.organizer == *caller, ERR_NOT_ORGANIZER);
        require!(proposal.pool_id.is_none(), ERR_POOL_EXISTS);
        require!(
            proposal.status == ProposalStatus::CouncilApproved,
            ERR_NOT_COUNCIL_APPROVED
        );

        let pool_id = self.pool_count().get() + 1;
        let pool = CampaignPool {
            id: pool_id,
            proposal_id,
            organizer: proposal.organizer,
            funding_goal: proposal.funding_goal,
            raised: BigUint::zero(),
            classification: proposal.classification,
            active: true,
            withdrawn: false,
            created_at: now,
        };
        self.pools(pool_id).set(&pool);
        self.pool_count().set(pool_id);
        self.link_pool(proposal_id, pool_id);

        self.pool_created_event(pool_id, proposal_id, caller, &pool.funding_goal);

        pool_id
    }

    /// Books a donation whose funds already sit in the contract.
    /// Returns the pool as updated.
    fn record_donation(
        &self,
        donor: &ManagedAddress,
        pool_id: u64,
        amount: &BigUint,
    ) -> CampaignPool<Self::Api> {
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);
        let mut pool = self.require_pool(pool_id);
        require!(pool.active, ERR_POOL_INACTIVE);

        let raised_before = pool.raised.clone();
        pool.raised += amount;

        let contribution = self.contributions(pool_id, donor);
        if contribution.is_empty() {
            self.pool_donors(pool_id).push(donor);
        }
        contribution.update(|total| *total += amount);
        self.pools(pool_id).set(&pool);

        if goal_crossed(&raised_before, &pool.raised, &pool.funding_goal) {
            self.funding_goal_reached_event(pool_id, &pool.funding_goal, &pool.raised);
        }

        pool
    }

    /// One fresh receipt per donation, never merged with earlier ones.
    fn issue_receipt(
        &self,
        donor: &ManagedAddress,
        pool: &CampaignPool<Self::Api>,
        amount: &BigUint,
        title: ManagedBuffer,
    ) -> u64 {
        let issuer = self.receipt_issuer_address().get();
        let receipt_id: u64 = self
            .tx()
            .to(&issuer)
            .typed(receipt_issuer_proxy::ReceiptIssuerProxy)
            .issue(donor.clone(), pool.id, amount.clone(), title, pool.classification)
            .returns(ReturnsResult)
            .sync_call();
        require!(receipt_id > 0, ERR_RECEIPT_NOT_ISSUED);

        self.pool_receipts(pool.id).push(&receipt_id);
        receipt_id
    }

    /// Closes the pool and completes the proposal. The caller pays out the
    /// returned amount only after this has been committed.
    fn settle_withdrawal(&self, caller: &ManagedAddress, pool_id: u64) -> BigUint {
        let mut pool = self.require_pool(pool_id);
        require!(pool.organizer == *caller, ERR_NOT_ORGANIZER);
        require!(!pool.withdrawn, ERR_ALREADY_WITHDRAWN);
        require!(pool.raised > 0u64, ERR_NOTHING_RAISED);

        pool.withdrawn = true;
        pool.active = false;
        self.pools(pool_id).set(&pool);
        self.apply_transition(pool.proposal_id, ProposalStatus::Completed, None);

        pool.raised
    }

    fn require_pool(&self, pool_id: u64) -> CampaignPool<Self::Api> {
        require!(!self.pools(pool_id).is_empty(), ERR_POOL_NOT_FOUND);
        self.pools(pool_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPool)]
    fn get_pool(&self, pool_id: u64) -> CampaignPool<Self::Api> {
        self.require_pool(pool_id)
    }

    #[view(getPoolDonors)]
    fn get_pool_donors(&self, pool_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for donor in self.pool_donors(pool_id).iter() {
            result.push(donor);
        }
        result
    }

    #[view(getPoolReceipts)]
    fn get_pool_receipts(&self, pool_id: u64) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for receipt_id in self.pool_receipts(pool_id).iter() {
            result.push(receipt_id);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getPoolCount)]
    #[storage_mapper("poolCount")]
    fn pool_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pools")]
    fn pools(&self, pool_id: u64) -> SingleValueMapper<CampaignPool<Self::Api>>;

    /// Distinct donors in order of first contribution.
    #[storage_mapper("poolDonors")]
    fn pool_donors(&self, pool_id: u64) -> VecMapper<ManagedAddress>;

    #[view(getContribution)]
    #[storage_mapper("contributions")]
    fn contributions(&self, pool_id: u64, donor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("poolReceipts")]
    fn pool_receipts(&self, pool_id: u64) -> VecMapper<u64>;
}
