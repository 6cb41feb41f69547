// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// NSN Chain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! # NSN Vote Escrow Pallet
//!
//! Time-decaying voting power for locked NSN tokens.
//!
//! ## Overview
//!
//! Accounts lock tokens until an epoch-aligned unlock time and receive voting
//! power `amount / MaxLockDuration * (unlock_time - now)`, decaying linearly to
//! zero at unlock. Locked tokens stay in the owner's account under a
//! [`FreezeReason::VoteEscrow`] freeze that `withdraw` lifts. The pallet keeps:
//! - One lock per account (amount, unlock time)
//! - A per-account checkpoint history of voting power curves
//! - A global checkpoint history of the aggregate curve, densified with one
//!   synthetic point per elapsed epoch
//! - A slope-change schedule keyed by epoch timestamp, so the aggregate curve
//!   is advanced per elapsed epoch rather than per active lock
//!
//! Historical queries binary-search those histories by block number or by
//! timestamp and extrapolate the linear decay from the located point.
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! - `create_lock`: Lock tokens for a duration
//! - `create_lock_for`: Fund a new lock owned by another account
//! - `increase_amount`: Add tokens to an active lock
//! - `deposit_for`: Add tokens to another account's active lock
//! - `increase_unlock_time`: Push an active lock's unlock time further out
//! - `withdraw`: Reclaim the tokens of an expired lock
//! - `checkpoint`: Catch the global history up to now
//!
//! ### Cross-pallet interfaces
//!
//! - [`VotingEscrow`]: voting power reads, implemented by the pallet and by the
//!   read-only [`VoteEscrowView`]
//! - [`LockManager`]: payer-funded lock writes for vesting-style collaborators

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

mod checkpoint;
mod history;
mod traits;
mod types;
mod view;

pub use traits::{LockManager, VotingEscrow};
pub use types::{DepositKind, LockedBalance, Point, MAX_LOCK_AMOUNT};
pub use view::VoteEscrowView;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::nsn-vote-escrow";

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use crate::checkpoint::LockChange;
    use frame_support::{
        pallet_prelude::*,
        traits::{
            fungible::{Inspect, InspectFreeze, Mutate, MutateFreeze},
            tokens::{Fortitude, Preservation},
            StorageVersion, UnixTime,
        },
        PalletId,
    };
    use frame_system::pallet_prelude::*;
    use sp_runtime::traits::{AccountIdConversion, CheckedAdd, CheckedSub, SaturatedConversion, Zero};

    pub type BalanceOf<T> =
        <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

    /// The in-code storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Configuration trait for the NSN Vote Escrow pallet
    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Token being locked
        type Currency: Inspect<Self::AccountId>
            + InspectFreeze<Self::AccountId>
            + Mutate<Self::AccountId>
            + MutateFreeze<Self::AccountId, Id = Self::RuntimeFreezeReason>;

        /// The overarching freeze reason
        type RuntimeFreezeReason: From<FreezeReason>;

        /// Wall-clock source; all lock arithmetic is in seconds
        type UnixTime: UnixTime;

        /// Identity of the ledger itself
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Identity of the read-only view exposed to external consumers
        #[pallet::constant]
        type ViewPalletId: Get<PalletId>;

        /// Epoch length in seconds; unlock times are multiples of it (1 week)
        #[pallet::constant]
        type EpochLength: Get<u64>;

        /// Longest lock in seconds (4 years)
        #[pallet::constant]
        type MaxLockDuration: Get<u64>;

        /// Most synthetic epoch points one call may write to the global history
        #[pallet::constant]
        type MaxCatchUpEpochs: Get<u32>;

        /// Weight information
        type WeightInfo: WeightInfo;
    }

    /// The reason for freezing funds
    #[pallet::composite_enum]
    pub enum FreezeReason {
        /// Tokens backing a vote escrow lock
        VoteEscrow,
    }

    /// Lock held by each account
    ///
    /// `ValueQuery`: accounts without a lock read as a zero amount with
    /// `end_time == 0`.
    ///
    /// # Storage Key
    /// Blake2_128Concat(AccountId) - safe for user-controlled keys
    #[pallet::storage]
    #[pallet::getter(fn locked_balance)]
    pub type LockedBalances<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        LockedBalance<BalanceOf<T>>,
        ValueQuery,
    >;

    /// Total tokens currently held in locks, expired-but-unwithdrawn included
    #[pallet::storage]
    #[pallet::getter(fn supply)]
    pub type Supply<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

    /// Index of the most recent global point
    ///
    /// Index 0 is the empty genesis point and is never written; the first
    /// real point has index 1.
    #[pallet::storage]
    #[pallet::getter(fn total_num_points)]
    pub type TotalNumPoints<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// Global voting power history (aggregate of every lock)
    ///
    /// Append-only. Contains one synthetic point per elapsed epoch boundary
    /// plus one point per lock mutation or checkpoint. Timestamps and block
    /// numbers are non-decreasing with the index.
    #[pallet::storage]
    #[pallet::getter(fn supply_point)]
    pub type SupplyPoints<T: Config> = StorageMap<_, Twox64Concat, u64, Point, ValueQuery>;

    /// Number of checkpoints recorded for each account
    #[pallet::storage]
    #[pallet::getter(fn user_point_count)]
    pub type UserPointCount<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

    /// Per-account voting power history, indexed from 0
    ///
    /// One point is appended on every create, increase, extension, deposit
    /// and withdrawal. Entries are never modified.
    ///
    /// # Storage Keys
    /// - Primary: Blake2_128Concat(AccountId)
    /// - Secondary: Twox64Concat(point index)
    #[pallet::storage]
    #[pallet::getter(fn user_point)]
    pub type UserPoints<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Twox64Concat,
        u64,
        Point,
        OptionQuery,
    >;

    /// Slope leaving the aggregate curve at each epoch boundary
    ///
    /// Every active lock contributes its slope at its unlock time.
    #[pallet::storage]
    #[pallet::getter(fn slope_change)]
    pub type SlopeChanges<T: Config> = StorageMap<_, Twox64Concat, u64, i128, ValueQuery>;

    /// Events emitted by the pallet
    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens deposited or lock extended
        Deposit {
            who: T::AccountId,
            payer: T::AccountId,
            amount: BalanceOf<T>,
            unlock_time: u64,
            kind: DepositKind,
            ts: u64,
        },
        /// Expired lock withdrawn
        Withdraw {
            who: T::AccountId,
            amount: BalanceOf<T>,
            ts: u64,
        },
        /// Total locked tokens changed
        SupplyUpdated {
            previous: BalanceOf<T>,
            current: BalanceOf<T>,
        },
        /// Global history caught up
        Checkpoint { num_points: u64, ts: u64 },
    }

    /// Errors returned by the pallet
    #[pallet::error]
    pub enum Error<T> {
        /// Amount is zero
        ZeroValue,
        /// Value does not fit its container (96-bit amounts, 128-bit power)
        Overflow,
        /// Account has no lock
        NoValueLocked,
        /// Account already holds a lock
        LockedValueNotZero,
        /// Spendable balance does not cover the amount to lock
        InsufficientBalance,
        /// Lock has expired; only withdrawal is possible
        LockExpired,
        /// Lock has not expired yet
        LockNotExpired,
        /// Unlock time is not after the current one (or after now)
        UnlockTimeIncorrect,
        /// Unlock time is further out than `MaxLockDuration`
        MaxUnlockTimeReached,
        /// Queried block is in the future
        WrongBlockNumber,
        /// Queried timestamp is in the future
        WrongTimestamp,
        /// Writes must go through the escrow pallet, not its view
        WrongEntryPoint,
        /// Global history is too far behind; call `checkpoint` first
        CatchUpIncomplete,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::EpochLength::get() > 0, "EpochLength must be non-zero");
            assert!(
                T::MaxLockDuration::get() >= T::EpochLength::get(),
                "MaxLockDuration must span at least one epoch"
            );
            assert!(T::MaxCatchUpEpochs::get() > 0, "MaxCatchUpEpochs must be non-zero");
            assert!(
                T::PalletId::get() != T::ViewPalletId::get(),
                "the view needs an identity distinct from the ledger"
            );
        }
    }

    /// Extrinsic calls
    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Lock tokens of the caller
        ///
        /// # Arguments
        /// * `amount` - Tokens to lock
        /// * `duration` - Seconds from now; the unlock time is rounded down to
        ///   an epoch boundary
        ///
        /// # Errors
        /// * `ZeroValue` - `amount` is zero
        /// * `LockedValueNotZero` - The caller already holds a lock
        /// * `UnlockTimeIncorrect` - Rounded unlock time is not in the future
        /// * `MaxUnlockTimeReached` - Unlock time beyond `MaxLockDuration`
        /// * `Overflow` - `amount` exceeds 96 bits
        /// * `InsufficientBalance` - Spendable balance below `amount`
        /// * `CatchUpIncomplete` - Global history more than `MaxCatchUpEpochs` behind
        ///
        /// # Weight
        /// Charged for a full `MaxCatchUpEpochs` catch-up; the points not
        /// written are refunded. The same holds for every lock mutation.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_lock(T::MaxCatchUpEpochs::get()))]
        pub fn create_lock(
            origin: OriginFor<T>,
            amount: BalanceOf<T>,
            duration: u64,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let points = Self::do_create_lock(&who, &who, amount, duration)?;
            Ok(Some(T::WeightInfo::create_lock(points)).into())
        }

        /// Lock tokens of the caller on behalf of `beneficiary`
        ///
        /// The lock, and its voting power, belongs to `beneficiary`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::create_lock_for(T::MaxCatchUpEpochs::get()))]
        pub fn create_lock_for(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            amount: BalanceOf<T>,
            duration: u64,
        ) -> DispatchResultWithPostInfo {
            let payer = ensure_signed(origin)?;
            let points = Self::do_create_lock(&payer, &beneficiary, amount, duration)?;
            Ok(Some(T::WeightInfo::create_lock_for(points)).into())
        }

        /// Add tokens to the caller's active lock without changing its unlock time
        ///
        /// # Errors
        /// * `ZeroValue` - `amount` is zero
        /// * `NoValueLocked` - The caller has no lock
        /// * `LockExpired` - The lock has expired
        /// * `Overflow` - Resulting amount exceeds 96 bits
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::increase_amount(T::MaxCatchUpEpochs::get()))]
        pub fn increase_amount(
            origin: OriginFor<T>,
            amount: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let points =
                Self::do_deposit_for(&who, &who, amount, DepositKind::IncreaseLockAmount)?;
            Ok(Some(T::WeightInfo::increase_amount(points)).into())
        }

        /// Add caller tokens to the active lock of `beneficiary`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::deposit_for(T::MaxCatchUpEpochs::get()))]
        pub fn deposit_for(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            amount: BalanceOf<T>,
        ) -> DispatchResultWithPostInfo {
            let payer = ensure_signed(origin)?;
            let points =
                Self::do_deposit_for(&payer, &beneficiary, amount, DepositKind::DepositFor)?;
            Ok(Some(T::WeightInfo::deposit_for(points)).into())
        }

        /// Move the caller's unlock time to `now + duration`, rounded down to an epoch
        ///
        /// # Errors
        /// * `NoValueLocked` - The caller has no lock
        /// * `LockExpired` - The lock has expired
        /// * `UnlockTimeIncorrect` - New unlock time is not after the current one
        /// * `MaxUnlockTimeReached` - New unlock time beyond `MaxLockDuration`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::increase_unlock_time(T::MaxCatchUpEpochs::get()))]
        pub fn increase_unlock_time(
            origin: OriginFor<T>,
            duration: u64,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;

            let locked = Self::locked_balance(&who);
            ensure!(!locked.amount.is_zero(), Error::<T>::NoValueLocked);
            let now = Self::now();
            ensure!(locked.end_time > now, Error::<T>::LockExpired);

            let unlock_time = Self::unlock_time_for(now, duration)?;
            ensure!(unlock_time > locked.end_time, Error::<T>::UnlockTimeIncorrect);
            ensure!(
                unlock_time <= now.saturating_add(T::MaxLockDuration::get()),
                Error::<T>::MaxUnlockTimeReached
            );

            let points = Self::apply_deposit(
                &who,
                &who,
                Zero::zero(),
                unlock_time,
                locked,
                DepositKind::IncreaseUnlockTime,
                now,
            )?;
            Ok(Some(T::WeightInfo::increase_unlock_time(points)).into())
        }

        /// Withdraw all tokens of the caller's expired lock
        ///
        /// Lifts the freeze on the caller's tokens and appends a zero point to
        /// the caller's history.
        ///
        /// # Errors
        /// * `NoValueLocked` - The caller has no lock
        /// * `LockNotExpired` - Unlock time not reached yet
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::withdraw(T::MaxCatchUpEpochs::get()))]
        pub fn withdraw(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;

            let locked = Self::locked_balance(&who);
            ensure!(!locked.amount.is_zero(), Error::<T>::NoValueLocked);
            let now = Self::now();
            ensure!(locked.end_time <= now, Error::<T>::LockNotExpired);

            let previous = Self::supply();
            let current = previous
                .checked_sub(&locked.amount)
                .ok_or(Error::<T>::Overflow)?;

            let staged = Self::stage_checkpoint(
                Some(LockChange {
                    who: who.clone(),
                    old: Self::raw_lock(&locked),
                    new: LockedBalance::default(),
                }),
                current.saturated_into(),
                now,
                Self::current_block(),
            )?;

            let points = staged.points_written();

            T::Currency::thaw(&T::RuntimeFreezeReason::from(FreezeReason::VoteEscrow), &who)?;

            LockedBalances::<T>::remove(&who);
            Supply::<T>::put(current);
            staged.commit();

            log::debug!(
                target: LOG_TARGET,
                "withdrawn {:?} for {:?} at {}",
                locked.amount,
                who,
                now,
            );

            Self::deposit_event(Event::Withdraw {
                who,
                amount: locked.amount,
                ts: now,
            });
            Self::deposit_event(Event::SupplyUpdated { previous, current });
            Ok(Some(T::WeightInfo::withdraw(points)).into())
        }

        /// Catch the global history up to the current time
        ///
        /// Writes at most `MaxCatchUpEpochs` synthetic epoch points; call again
        /// to continue when further behind. Does nothing when the latest global
        /// point is already at the current time.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::checkpoint(T::MaxCatchUpEpochs::get()))]
        pub fn checkpoint(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;

            let now = Self::now();
            let num_points = Self::total_num_points();
            if num_points > 0 && Self::supply_point(num_points).ts == now {
                return Ok(Some(T::WeightInfo::checkpoint(0)).into());
            }

            let staged = Self::stage_checkpoint(
                None,
                Self::supply().saturated_into(),
                now,
                Self::current_block(),
            )?;
            let points = staged.points_written();
            let (num_points, ts) = staged.commit();

            log::trace!(target: LOG_TARGET, "global history at point {} (ts {})", num_points, ts);

            Self::deposit_event(Event::Checkpoint { num_points, ts });
            Ok(Some(T::WeightInfo::checkpoint(points)).into())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Account identity of the ledger.
        pub fn account_id() -> T::AccountId {
            T::PalletId::get().into_account_truncating()
        }

        /// Current unix time in seconds.
        pub fn now() -> u64 {
            T::UnixTime::now().as_secs()
        }

        pub(crate) fn current_block() -> u64 {
            <frame_system::Pallet<T>>::block_number().saturated_into()
        }

        /// Unlock time of the lock held by `who` (0 without a lock).
        pub fn locked_end(who: &T::AccountId) -> u64 {
            Self::locked_balance(who).end_time
        }

        pub(crate) fn raw_lock(lock: &LockedBalance<BalanceOf<T>>) -> LockedBalance<u128> {
            LockedBalance {
                amount: lock.amount.saturated_into(),
                end_time: lock.end_time,
            }
        }

        fn unlock_time_for(now: u64, duration: u64) -> Result<u64, Error<T>> {
            let epoch = T::EpochLength::get();
            let unlock_time = now.checked_add(duration).ok_or(Error::<T>::Overflow)?;
            Ok(unlock_time / epoch * epoch)
        }

        pub(crate) fn do_create_lock(
            payer: &T::AccountId,
            beneficiary: &T::AccountId,
            amount: BalanceOf<T>,
            duration: u64,
        ) -> Result<u32, DispatchError> {
            ensure!(!amount.is_zero(), Error::<T>::ZeroValue);

            let locked = Self::locked_balance(beneficiary);
            ensure!(locked.amount.is_zero(), Error::<T>::LockedValueNotZero);

            let now = Self::now();
            let unlock_time = Self::unlock_time_for(now, duration)?;
            ensure!(unlock_time > now, Error::<T>::UnlockTimeIncorrect);
            ensure!(
                unlock_time <= now.saturating_add(T::MaxLockDuration::get()),
                Error::<T>::MaxUnlockTimeReached
            );

            Self::apply_deposit(
                payer,
                beneficiary,
                amount,
                unlock_time,
                locked,
                DepositKind::CreateLock,
                now,
            )
        }

        pub(crate) fn do_deposit_for(
            payer: &T::AccountId,
            beneficiary: &T::AccountId,
            amount: BalanceOf<T>,
            kind: DepositKind,
        ) -> Result<u32, DispatchError> {
            ensure!(!amount.is_zero(), Error::<T>::ZeroValue);

            let locked = Self::locked_balance(beneficiary);
            ensure!(!locked.amount.is_zero(), Error::<T>::NoValueLocked);
            let now = Self::now();
            ensure!(locked.end_time > now, Error::<T>::LockExpired);

            Self::apply_deposit(payer, beneficiary, amount, 0, locked, kind, now)
        }

        /// Lock update shared by every deposit path.
        ///
        /// Stages the checkpoint, moves the tokens from `payer` to the
        /// beneficiary, freezes the new lock amount there, then commits.
        /// `unlock_time == 0` keeps the current unlock time. Returns the number
        /// of global points written.
        fn apply_deposit(
            payer: &T::AccountId,
            beneficiary: &T::AccountId,
            amount: BalanceOf<T>,
            unlock_time: u64,
            locked: LockedBalance<BalanceOf<T>>,
            kind: DepositKind,
            now: u64,
        ) -> Result<u32, DispatchError> {
            let mut new_locked = locked;
            new_locked.amount = locked
                .amount
                .checked_add(&amount)
                .ok_or(Error::<T>::Overflow)?;
            if unlock_time != 0 {
                new_locked.end_time = unlock_time;
            }
            ensure!(
                new_locked.amount.saturated_into::<u128>() <= MAX_LOCK_AMOUNT,
                Error::<T>::Overflow
            );

            let previous = Self::supply();
            let current = previous.checked_add(&amount).ok_or(Error::<T>::Overflow)?;

            let staged = Self::stage_checkpoint(
                Some(LockChange {
                    who: beneficiary.clone(),
                    old: Self::raw_lock(&locked),
                    new: Self::raw_lock(&new_locked),
                }),
                current.saturated_into(),
                now,
                Self::current_block(),
            )?;

            let points = staged.points_written();

            if !amount.is_zero() {
                if payer == beneficiary {
                    let spendable = T::Currency::reducible_balance(
                        beneficiary,
                        Preservation::Expendable,
                        Fortitude::Polite,
                    );
                    ensure!(spendable >= amount, Error::<T>::InsufficientBalance);
                } else {
                    T::Currency::transfer(payer, beneficiary, amount, Preservation::Preserve)?;
                }
                T::Currency::set_freeze(
                    &T::RuntimeFreezeReason::from(FreezeReason::VoteEscrow),
                    beneficiary,
                    new_locked.amount,
                )?;
            }

            LockedBalances::<T>::insert(beneficiary, new_locked);
            Supply::<T>::put(current);
            staged.commit();

            log::debug!(
                target: LOG_TARGET,
                "{:?} for {:?} by {:?}: {:?} until {}",
                kind,
                beneficiary,
                payer,
                amount,
                new_locked.end_time,
            );

            Self::deposit_event(Event::Deposit {
                who: beneficiary.clone(),
                payer: payer.clone(),
                amount,
                unlock_time: new_locked.end_time,
                kind,
                ts: now,
            });
            Self::deposit_event(Event::SupplyUpdated { previous, current });
            Ok(points)
        }
    }
}

impl<T: Config> VotingEscrow<T::AccountId, frame_system::pallet_prelude::BlockNumberFor<T>>
    for Pallet<T>
{
    fn votes(who: &T::AccountId) -> u128 {
        Self::votes(who)
    }

    fn past_votes(
        who: &T::AccountId,
        block: frame_system::pallet_prelude::BlockNumberFor<T>,
    ) -> Result<u128, sp_runtime::DispatchError> {
        Self::past_votes(who, block)
    }

    fn past_total_supply(
        block: frame_system::pallet_prelude::BlockNumberFor<T>,
    ) -> Result<u128, sp_runtime::DispatchError> {
        Self::past_total_supply(block)
    }

    fn total_supply_locked_at(ts: u64) -> u128 {
        Self::total_supply_locked_at(ts)
    }

    fn last_user_point(who: &T::AccountId) -> Point {
        Self::last_user_point(who)
    }

    fn locked_end(who: &T::AccountId) -> u64 {
        Self::locked_end(who)
    }

    fn max_lock_duration() -> u64 {
        use frame_support::traits::Get;
        T::MaxLockDuration::get()
    }
}

impl<T: Config> LockManager<T::AccountId, BalanceOf<T>> for Pallet<T> {
    fn create_lock_for(
        payer: &T::AccountId,
        beneficiary: &T::AccountId,
        amount: BalanceOf<T>,
        duration: u64,
    ) -> sp_runtime::DispatchResult {
        Self::do_create_lock(payer, beneficiary, amount, duration).map(|_| ())
    }

    fn deposit_for(
        payer: &T::AccountId,
        beneficiary: &T::AccountId,
        amount: BalanceOf<T>,
    ) -> sp_runtime::DispatchResult {
        Self::do_deposit_for(payer, beneficiary, amount, DepositKind::DepositFor).map(|_| ())
    }
}
