// Tests for the pure decision rules: lifecycle graph, tally arithmetic,
// council quorum, bundling trigger and goal crossing.
//
// These need no blockchain state; managed numbers use StaticApi.

use funding_governance::pool::goal_crossed;
use funding_governance::review::{bundle_due, council_quorum};
use funding_governance::types::{ProposalStatus, VoteChoice, VoteTally};
use funding_governance::voting::evaluate_tally;
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn tally(for_votes: u64, against_votes: u64, abstain_votes: u64) -> VoteTally<StaticApi> {
    let mut tally = VoteTally::zero();
    tally.add(VoteChoice::For, &big(for_votes));
    tally.add(VoteChoice::Against, &big(against_votes));
    tally.add(VoteChoice::Abstain, &big(abstain_votes));
    tally
}

// ============================================================
// Lifecycle graph
// ============================================================

#[test]
fn test_happy_path_edges_are_legal() {
    let path = [
        ProposalStatus::Draft,
        ProposalStatus::CommunityVoting,
        ProposalStatus::CommunityPassed,
        ProposalStatus::CouncilReview,
        ProposalStatus::CouncilApproved,
        ProposalStatus::PoolCreated,
        ProposalStatus::Completed,
    ];
    for step in path.windows(2) {
        assert!(step[0].can_transition_to(&step[1]), "{:?} -> {:?}", step[0], step[1]);
    }
}

#[test]
fn test_skipping_an_edge_is_illegal() {
    assert!(!ProposalStatus::Draft.can_transition_to(&ProposalStatus::CommunityPassed));
    assert!(!ProposalStatus::CommunityVoting.can_transition_to(&ProposalStatus::CouncilReview));
    assert!(!ProposalStatus::CommunityPassed.can_transition_to(&ProposalStatus::CouncilApproved));
    assert!(!ProposalStatus::CouncilApproved.can_transition_to(&ProposalStatus::Completed));
    assert!(!ProposalStatus::CouncilReview.can_transition_to(&ProposalStatus::CouncilReview));
}

#[test]
fn test_terminal_states_have_no_successors() {
    let terminals = [
        ProposalStatus::CommunityRejected,
        ProposalStatus::CouncilRejected,
        ProposalStatus::Completed,
        ProposalStatus::Canceled,
    ];
    let all = [
        ProposalStatus::Draft,
        ProposalStatus::CommunityVoting,
        ProposalStatus::CommunityPassed,
        ProposalStatus::CommunityRejected,
        ProposalStatus::CouncilReview,
        ProposalStatus::CouncilApproved,
        ProposalStatus::CouncilRejected,
        ProposalStatus::PoolCreated,
        ProposalStatus::Completed,
        ProposalStatus::Canceled,
    ];
    for terminal in terminals {
        assert!(terminal.is_terminal());
        for next in all {
            assert!(!terminal.can_transition_to(&next));
        }
    }
}

#[test]
fn test_cancel_allowed_until_pool_exists() {
    for status in [
        ProposalStatus::Draft,
        ProposalStatus::CommunityVoting,
        ProposalStatus::CommunityPassed,
        ProposalStatus::CouncilReview,
        ProposalStatus::CouncilApproved,
    ] {
        assert!(status.can_transition_to(&ProposalStatus::Canceled), "{:?}", status);
    }
    assert!(!ProposalStatus::PoolCreated.can_transition_to(&ProposalStatus::Canceled));
    assert!(!ProposalStatus::Completed.can_transition_to(&ProposalStatus::Canceled));
}

// ============================================================
// Community tally
// ============================================================

#[test]
fn test_scenario_a_passes_at_51_percent() {
    // for 200, against 100, supply 1000, quorum 10% -> 300 >= 100
    let outcome = evaluate_tally(&tally(200, 100, 0), &big(1_000), 10, 51);
    assert!(outcome.quorum_met);
    assert!(outcome.passed);
}

#[test]
fn test_pass_threshold_is_configuration() {
    let votes = tally(200, 100, 0);
    // 20000 >= 300 * 66 = 19800
    assert!(evaluate_tally(&votes, &big(1_000), 10, 66).passed);
    // 20000 < 300 * 67 = 20100
    assert!(!evaluate_tally(&votes, &big(1_000), 10, 67).passed);
}

#[test]
fn test_quorum_counts_abstentions() {
    // 20 for + 80 abstain = 100 cast, exactly the 10% quorum of 1000
    let outcome = evaluate_tally(&tally(20, 0, 80), &big(1_000), 10, 51);
    assert!(outcome.quorum_met);
    assert!(outcome.passed);
}

#[test]
fn test_quorum_not_met_is_a_rejection() {
    let outcome = evaluate_tally(&tally(99, 0, 0), &big(1_000), 10, 51);
    assert!(!outcome.quorum_met);
    assert!(!outcome.passed);
}

#[test]
fn test_only_abstentions_never_pass() {
    let outcome = evaluate_tally(&tally(0, 0, 500), &big(1_000), 10, 51);
    assert!(outcome.quorum_met);
    assert!(!outcome.passed);
}

#[test]
fn test_zero_quorum_still_needs_decisive_weight() {
    assert!(!evaluate_tally(&tally(0, 0, 0), &big(1_000), 0, 51).passed);
    assert!(evaluate_tally(&tally(1, 0, 0), &big(1_000), 0, 51).passed);
}

#[test]
fn test_tally_totals() {
    let votes = tally(200, 100, 50);
    assert_eq!(votes.total_cast(), big(350));
    assert_eq!(votes.decisive(), big(300));
}

// ============================================================
// Council quorum
// ============================================================

#[test]
fn test_council_quorum_is_two_thirds_rounded_up() {
    assert_eq!(council_quorum(3), 2);
    assert_eq!(council_quorum(5), 4);
    assert_eq!(council_quorum(1), 1);
    assert_eq!(council_quorum(2), 2);
    assert_eq!(council_quorum(4), 3);
    assert_eq!(council_quorum(6), 4);
    assert_eq!(council_quorum(9), 6);
}

#[test]
fn test_council_quorum_never_zero() {
    assert_eq!(council_quorum(0), 1);
}

// ============================================================
// Bundling trigger
// ============================================================

#[test]
fn test_bundle_due_on_count() {
    assert!(bundle_due(5, 5, 100, 90, 604_800));
    assert!(!bundle_due(4, 5, 100, 90, 604_800));
}

#[test]
fn test_bundle_due_on_time() {
    assert!(bundle_due(1, 5, 604_800, 0, 604_800));
    assert!(!bundle_due(1, 5, 604_799, 0, 604_800));
}

#[test]
fn test_bundle_never_due_when_nothing_waits() {
    assert!(!bundle_due(0, 5, 10_000_000, 0, 604_800));
    assert!(!bundle_due(0, 0, 10_000_000, 0, 0));
}

// ============================================================
// Funding goal
// ============================================================

#[test]
fn test_goal_reached_fires_once_across_donations() {
    let goal = big(1_000);
    let donations = [500u64, 300, 200, 100];
    let mut raised = big(0);
    let mut crossings = 0;

    for amount in donations {
        let before = raised.clone();
        raised += &big(amount);
        if goal_crossed(&before, &raised, &goal) {
            crossings += 1;
        }
    }

    assert_eq!(crossings, 1);
    assert_eq!(raised, big(1_100));
}

#[test]
fn test_single_donation_overshooting_goal_crosses() {
    assert!(goal_crossed(&big(0), &big(5_000), &big(1_000)));
    assert!(!goal_crossed(&big(1_000), &big(1_001), &big(1_000)));
}
