//! Revert messages for `require!`, each prefixed with its failure category:
//! PermissionDenied, InvalidState, AlreadyDone, ValidationError, NotFound,
//! ExternalTransferFailed.

// ── PermissionDenied ──
pub const ERR_MISSING_CAPABILITY: &str = "PermissionDenied: missing capability";
pub const ERR_NOT_ORGANIZER: &str = "PermissionDenied: caller is not the organizer";
pub const ERR_NOT_ORGANIZER_OR_ADMIN: &str =
    "PermissionDenied: caller is neither organizer nor admin";

// ── InvalidState ──
pub const ERR_ILLEGAL_TRANSITION: &str = "InvalidState: illegal lifecycle transition";
pub const ERR_NOT_DRAFT: &str = "InvalidState: proposal is not a draft";
pub const ERR_COMPLIANCE_NOT_VERIFIED: &str = "InvalidState: compliance not verified";
pub const ERR_PROPOSAL_TERMINAL: &str = "InvalidState: proposal is in a terminal state";
pub const ERR_NOT_CANCELABLE: &str = "InvalidState: proposal can no longer be canceled";
pub const ERR_NOT_VOTING: &str = "InvalidState: proposal is not open for voting";
pub const ERR_OUTSIDE_VOTE_WINDOW: &str = "InvalidState: outside the vote window";
pub const ERR_VOTE_WINDOW_OPEN: &str = "InvalidState: vote window has not ended";
pub const ERR_NOT_COMMUNITY_PASSED: &str = "InvalidState: proposal has not passed community vote";
pub const ERR_NOT_IN_BUNDLE: &str = "InvalidState: proposal is not part of the bundle";
pub const ERR_NOT_COUNCIL_APPROVED: &str = "InvalidState: proposal is not council approved";
pub const ERR_POOL_INACTIVE: &str = "InvalidState: pool is not active";
pub const ERR_NOTHING_RAISED: &str = "InvalidState: pool has raised nothing";

// ── AlreadyDone ──
pub const ERR_ALREADY_VOTED: &str = "AlreadyDone: already voted";
pub const ERR_VOTING_FINALIZED: &str = "AlreadyDone: voting already finalized";
pub const ERR_ALREADY_REVIEWED: &str = "AlreadyDone: already reviewed";
pub const ERR_BUNDLE_FINALIZED: &str = "AlreadyDone: bundle already finalized";
pub const ERR_POOL_EXISTS: &str = "AlreadyDone: proposal already has a pool";
pub const ERR_ALREADY_WITHDRAWN: &str = "AlreadyDone: pool already withdrawn";

// ── ValidationError ──
pub const ERR_EMPTY_TITLE: &str = "ValidationError: title must not be empty";
pub const ERR_ZERO_GOAL: &str = "ValidationError: funding goal must be positive";
pub const ERR_ZERO_AMOUNT: &str = "ValidationError: amount must be positive";
pub const ERR_NO_VOTING_POWER: &str = "ValidationError: no voting power";
pub const ERR_WRONG_TOKEN: &str = "ValidationError: payment token not accepted";
pub const ERR_INVALID_TOKEN: &str = "ValidationError: invalid fund token";
pub const ERR_PERCENTAGE_RANGE: &str = "ValidationError: percentage out of range";
pub const ERR_ZERO_PERIOD: &str = "ValidationError: period must be positive";
pub const ERR_ZERO_THRESHOLD: &str = "ValidationError: threshold must be positive";
pub const ERR_EMPTY_BUNDLE: &str = "ValidationError: bundle must not be empty";
pub const ERR_DUPLICATE_IN_BUNDLE: &str = "ValidationError: duplicate proposal in bundle";
pub const ERR_EMPTY_COUNCIL: &str = "ValidationError: council is empty";

// ── NotFound ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "NotFound: proposal does not exist";
pub const ERR_BUNDLE_NOT_FOUND: &str = "NotFound: bundle does not exist";
pub const ERR_POOL_NOT_FOUND: &str = "NotFound: pool does not exist";

// ── ExternalTransferFailed ──
pub const ERR_RECEIPT_NOT_ISSUED: &str = "ExternalTransferFailed: receipt issuer returned no id";
