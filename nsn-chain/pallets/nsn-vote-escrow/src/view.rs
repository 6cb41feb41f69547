// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Read-only view over the vote escrow.
//!
//! [`VoteEscrowView`] is what governance, bridge and weighting pallets are
//! configured with. It has its own account, distinct from the escrow ledger
//! identity, and every read recomputes through [`Pallet`]. Writes are
//! rejected with [`Error::WrongEntryPoint`].

use crate::{
    pallet::{BalanceOf, Config, Error, Pallet},
    traits::{LockManager, VotingEscrow},
    types::Point,
};
use frame_support::traits::Get;
use frame_system::pallet_prelude::BlockNumberFor;
use sp_runtime::{traits::AccountIdConversion, DispatchError, DispatchResult};
use sp_std::marker::PhantomData;

/// Stateless read-only facade of the vote escrow pallet.
pub struct VoteEscrowView<T>(PhantomData<T>);

impl<T: Config> VoteEscrowView<T> {
    /// Identity of the view.
    pub fn account_id() -> T::AccountId {
        T::ViewPalletId::get().into_account_truncating()
    }

    /// Identity of the underlying ledger.
    pub fn ledger() -> T::AccountId {
        Pallet::<T>::account_id()
    }

    /// Checkpoint `index` of `who`; the empty point when out of range.
    pub fn user_point(who: &T::AccountId, index: u64) -> Point {
        Pallet::<T>::user_point(who, index).unwrap_or_default()
    }

    pub fn user_point_count(who: &T::AccountId) -> u64 {
        Pallet::<T>::user_point_count(who)
    }

    /// Tokens currently locked by `who`.
    pub fn balance_of(who: &T::AccountId) -> BalanceOf<T> {
        Pallet::<T>::locked_balance(who).amount
    }

    pub fn balance_of_at(
        who: &T::AccountId,
        block: BlockNumberFor<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        Pallet::<T>::balance_of_at(who, block)
    }

    /// Total tokens currently locked.
    pub fn total_supply() -> BalanceOf<T> {
        Pallet::<T>::supply()
    }

    pub fn total_supply_at(block: BlockNumberFor<T>) -> Result<BalanceOf<T>, DispatchError> {
        Pallet::<T>::total_supply_at(block)
    }

    pub fn total_supply_locked() -> u128 {
        Pallet::<T>::total_supply_locked()
    }

    pub fn voting_power_at(who: &T::AccountId, ts: u64) -> u128 {
        Pallet::<T>::voting_power_at(who, ts)
    }
}

impl<T: Config> VotingEscrow<T::AccountId, BlockNumberFor<T>> for VoteEscrowView<T> {
    fn votes(who: &T::AccountId) -> u128 {
        Pallet::<T>::votes(who)
    }

    fn past_votes(who: &T::AccountId, block: BlockNumberFor<T>) -> Result<u128, DispatchError> {
        Pallet::<T>::past_votes(who, block)
    }

    fn past_total_supply(block: BlockNumberFor<T>) -> Result<u128, DispatchError> {
        Pallet::<T>::past_total_supply(block)
    }

    fn total_supply_locked_at(ts: u64) -> u128 {
        Pallet::<T>::total_supply_locked_at(ts)
    }

    fn last_user_point(who: &T::AccountId) -> Point {
        Pallet::<T>::last_user_point(who)
    }

    fn locked_end(who: &T::AccountId) -> u64 {
        Pallet::<T>::locked_end(who)
    }

    fn max_lock_duration() -> u64 {
        T::MaxLockDuration::get()
    }
}

impl<T: Config> LockManager<T::AccountId, BalanceOf<T>> for VoteEscrowView<T> {
    fn create_lock_for(
        _payer: &T::AccountId,
        _beneficiary: &T::AccountId,
        _amount: BalanceOf<T>,
        _duration: u64,
    ) -> DispatchResult {
        Err(Error::<T>::WrongEntryPoint.into())
    }

    fn deposit_for(
        _payer: &T::AccountId,
        _beneficiary: &T::AccountId,
        _amount: BalanceOf<T>,
    ) -> DispatchResult {
        Err(Error::<T>::WrongEntryPoint.into())
    }
}
