multiversx_sc::imports!();

use crate::config::PERCENTAGE_DENOMINATOR;
use crate::errors::{
    ERR_ALREADY_VOTED, ERR_NOT_VOTING, ERR_NO_VOTING_POWER, ERR_OUTSIDE_VOTE_WINDOW,
    ERR_VOTE_WINDOW_OPEN, ERR_VOTING_FINALIZED,
};
use crate::types::{ProposalStatus, VoteChoice, VoteTally};
use crate::voting_power_proxy;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TallyOutcome {
    pub quorum_met: bool,
    pub passed: bool,
}

/// quorum:  for + against + abstain >= total_supply * quorum% / 100
/// passed:  quorum met, some decisive weight, and for * 100 >= (for + against) * threshold%
pub fn evaluate_tally<M: ManagedTypeApi>(
    tally: &VoteTally<M>,
    total_supply: &BigUint<M>,
    quorum_percentage: u64,
    pass_threshold_percentage: u64,
) -> TallyOutcome {
    let quorum_required = (total_supply * quorum_percentage) / PERCENTAGE_DENOMINATOR;
    let quorum_met = tally.total_cast() >= quorum_required;

    let decisive = tally.decisive();
    let passed = quorum_met
        && decisive > 0u64
        && &tally.for_votes * PERCENTAGE_DENOMINATOR >= &decisive * pass_threshold_percentage;

    TallyOutcome { quorum_met, passed }
}

/// Weighted community vote. Weights come from the voting-power ledger at
/// the moment of casting and are passed in by the contract endpoint.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::registry::RegistryModule + crate::events::EventsModule + crate::config::ConfigModule
{
    fn record_vote(
        &self,
        voter: &ManagedAddress,
        proposal_id: u64,
        choice: VoteChoice,
        weight: &BigUint,
        now: u64,
    ) {
        let proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::CommunityVoting,
            ERR_NOT_VOTING
        );
        require!(
            now >= proposal.vote_start && now <= proposal.vote_end,
            ERR_OUTSIDE_VOTE_WINDOW
        );
        require!(
            !self.has_voted(proposal_id, voter).get(),
            ERR_ALREADY_VOTED
        );
        require!(*weight > 0u64, ERR_NO_VOTING_POWER);

        self.add_to_tally(proposal_id, choice, weight);
        self.has_voted(proposal_id, voter).set(true);

        self.vote_cast_event(proposal_id, voter, choice, weight);
    }

    /// Closes the vote and moves the proposal to CommunityPassed or
    /// CommunityRejected. Falling short of quorum is an outcome, not an error.
    fn finalize_tally(&self, proposal_id: u64, total_supply: &BigUint, now: u64) -> bool {
        require!(
            !self.voting_finalized(proposal_id).get(),
            ERR_VOTING_FINALIZED
        );
        let proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status == ProposalStatus::CommunityVoting,
            ERR_NOT_VOTING
        );
        require!(now > proposal.vote_end, ERR_VOTE_WINDOW_OPEN);

        let tally = proposal.tally;
        let outcome = evaluate_tally(
            &tally,
            total_supply,
            self.quorum_percentage().get(),
            self.pass_threshold_percentage().get(),
        );
        let next = if outcome.passed {
            ProposalStatus::CommunityPassed
        } else {
            ProposalStatus::CommunityRejected
        };

        self.voting_finalized(proposal_id).set(true);
        self.voting_finalized_event(proposal_id, outcome.passed, &tally);
        self.apply_transition(proposal_id, next, Some(tally));

        outcome.passed
    }

    /// Live balance on the voting-power ledger; not snapshotted.
    fn live_voting_weight(&self, voter: &ManagedAddress) -> BigUint {
        let ledger = self.voting_power_address().get();
        self.tx()
            .to(&ledger)
            .typed(voting_power_proxy::VotingPowerProxy)
            .balance_of(voter.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn live_voting_supply(&self) -> BigUint {
        let ledger = self.voting_power_address().get();
        self.tx()
            .to(&ledger)
            .typed(voting_power_proxy::VotingPowerProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Running tally while voting is open; final tally afterwards. Same value
    /// as the proposal's own `tally`.
    #[view(getVoteTally)]
    fn get_vote_tally(&self, proposal_id: u64) -> VoteTally<Self::Api> {
        self.require_proposal(proposal_id).tally
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(hasVoted)]
    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("votingFinalized")]
    fn voting_finalized(&self, proposal_id: u64) -> SingleValueMapper<bool>;
}
