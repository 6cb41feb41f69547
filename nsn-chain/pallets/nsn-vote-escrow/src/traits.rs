// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Interfaces other pallets use to read and fund vote-escrow locks.

use crate::types::Point;
use sp_runtime::{DispatchError, DispatchResult};

/// Read access to voting power.
///
/// Governance, bridging and weighting pallets depend on this trait instead of
/// on the escrow pallet itself, so a runtime can hand them the read-only
/// [`VoteEscrowView`](crate::VoteEscrowView).
pub trait VotingEscrow<AccountId, BlockNumber> {
    /// Current voting power of `who`.
    fn votes(who: &AccountId) -> u128;

    /// Voting power of `who` as of `block`.
    ///
    /// Fails for blocks after the current one.
    fn past_votes(who: &AccountId, block: BlockNumber) -> Result<u128, DispatchError>;

    /// Aggregate voting power as of `block`.
    fn past_total_supply(block: BlockNumber) -> Result<u128, DispatchError>;

    /// Aggregate voting power at timestamp `ts`, which may lie in the future.
    fn total_supply_locked_at(ts: u64) -> u128;

    /// Most recent checkpoint of `who`, or the empty point.
    fn last_user_point(who: &AccountId) -> Point;

    /// Unlock time of the lock held by `who` (0 without a lock).
    fn locked_end(who: &AccountId) -> u64;

    /// Longest lock duration in seconds.
    fn max_lock_duration() -> u64;
}

/// Write access for funding locks on behalf of another account.
pub trait LockManager<AccountId, Balance> {
    /// `payer` funds a new lock owned by `beneficiary`.
    fn create_lock_for(
        payer: &AccountId,
        beneficiary: &AccountId,
        amount: Balance,
        duration: u64,
    ) -> DispatchResult;

    /// `payer` adds `amount` to the active lock of `beneficiary`.
    fn deposit_for(payer: &AccountId, beneficiary: &AccountId, amount: Balance) -> DispatchResult;
}
