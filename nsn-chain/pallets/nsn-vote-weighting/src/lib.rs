// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// NSN Chain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! # NSN Vote Weighting Pallet
//!
//! Lets vote-escrow lock holders split their decaying voting power across
//! registered nominees and exposes each nominee's relative weight over time.
//!
//! ## Overview
//!
//! - Nominees are `(account, chain_id)` pairs registered once and kept forever
//! - A vote assigns basis points of the voter's escrow slope to a nominee,
//!   starting at the next epoch boundary and ending at the voter's unlock time
//! - Each nominee, and the sum over all nominees, keeps a weekly weight curve
//!   with a slope-change schedule, caught up lazily one epoch at a time
//! - An account's allocations never exceed 100% and a vote for the same
//!   nominee is rate limited by `VoteCooldown`
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! - `add_nominee`: Register a nominee
//! - `vote_for_nominee_weights`: Allocate power to a nominee
//! - `vote_for_nominee_weights_batch`: Several allocations, all or nothing
//! - `checkpoint`: Catch the sum curve up to now
//! - `checkpoint_nominee`: Catch one nominee's curve and the sum up to now

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

mod curve;
mod types;
pub use types::{Nominee, NomineeId, VotedSlope, WeightPoint, MAX_WEIGHT};

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Log target of this pallet.
pub const LOG_TARGET: &str = "runtime::nsn-vote-weighting";

/// Prepares voters for benchmarks.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    /// Give `who` a lock lasting the maximum duration.
    fn setup_voter(who: &AccountId);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::{
        pallet_prelude::*,
        storage::with_storage_layer,
        traits::{StorageVersion, UnixTime},
    };
    use frame_system::pallet_prelude::*;
    use pallet_nsn_vote_escrow::VotingEscrow;
    use sp_runtime::Perquintill;
    use sp_std::vec::Vec;

    /// The in-code storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Configuration trait for the NSN Vote Weighting pallet
    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Source of voting power, usually the vote escrow's read-only view
        type VotingEscrow: VotingEscrow<Self::AccountId, BlockNumberFor<Self>>;

        /// Wall-clock source, in seconds
        type UnixTime: UnixTime;

        /// Epoch length in seconds; must match the vote escrow's (1 week)
        #[pallet::constant]
        type EpochLength: Get<u64>;

        /// Minimum time between two votes for the same nominee (10 days)
        #[pallet::constant]
        type VoteCooldown: Get<u64>;

        /// Most epochs one call may walk a weight curve forward
        #[pallet::constant]
        type MaxCatchUpEpochs: Get<u32>;

        /// Largest accepted chain id
        #[pallet::constant]
        type MaxChainId: Get<u64>;

        /// Most votes in one batch
        #[pallet::constant]
        type MaxBatchVotes: Get<u32>;

        /// Weight information
        type WeightInfo: WeightInfo;

        /// Benchmark setup
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
    }

    /// Number of registered nominees, equal to the highest id
    #[pallet::storage]
    #[pallet::getter(fn num_nominees)]
    pub type NomineeCount<T: Config> = StorageValue<_, NomineeId, ValueQuery>;

    /// Nominee → id
    ///
    /// # Storage Key
    /// Blake2_128Concat(Nominee) - user-supplied key
    #[pallet::storage]
    #[pallet::getter(fn nominee_id_of)]
    pub type NomineeIds<T: Config> = StorageMap<_, Blake2_128Concat, Nominee, NomineeId, OptionQuery>;

    /// Id → nominee
    #[pallet::storage]
    #[pallet::getter(fn nominee)]
    pub type Nominees<T: Config> = StorageMap<_, Twox64Concat, NomineeId, Nominee, OptionQuery>;

    /// Epoch boundary each nominee's curve has been written up to
    #[pallet::storage]
    #[pallet::getter(fn time_weight)]
    pub type TimeWeight<T: Config> = StorageMap<_, Twox64Concat, NomineeId, u64, ValueQuery>;

    /// Nominee weight curve per epoch boundary
    ///
    /// # Storage Keys
    /// - Primary: Twox64Concat(NomineeId)
    /// - Secondary: Twox64Concat(epoch timestamp)
    #[pallet::storage]
    #[pallet::getter(fn points_weight)]
    pub type PointsWeight<T: Config> =
        StorageDoubleMap<_, Twox64Concat, NomineeId, Twox64Concat, u64, WeightPoint, ValueQuery>;

    /// Slope leaving a nominee's curve at an epoch boundary
    #[pallet::storage]
    #[pallet::getter(fn changes_weight)]
    pub type ChangesWeight<T: Config> =
        StorageDoubleMap<_, Twox64Concat, NomineeId, Twox64Concat, u64, u128, ValueQuery>;

    /// Epoch boundary the sum curve has been written up to (0 until first use)
    #[pallet::storage]
    #[pallet::getter(fn time_sum)]
    pub type TimeSum<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// Sum of all nominee curves per epoch boundary
    #[pallet::storage]
    #[pallet::getter(fn points_sum)]
    pub type PointsSum<T: Config> = StorageMap<_, Twox64Concat, u64, WeightPoint, ValueQuery>;

    /// Slope leaving the sum curve at an epoch boundary
    #[pallet::storage]
    #[pallet::getter(fn changes_sum)]
    pub type ChangesSum<T: Config> = StorageMap<_, Twox64Concat, u64, u128, ValueQuery>;

    /// Current vote of each account for each nominee
    ///
    /// # Storage Keys
    /// - Primary: Blake2_128Concat(AccountId)
    /// - Secondary: Twox64Concat(NomineeId)
    #[pallet::storage]
    #[pallet::getter(fn vote_user_slopes)]
    pub type VoteUserSlopes<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Twox64Concat,
        NomineeId,
        VotedSlope,
        ValueQuery,
    >;

    /// Basis points of power each account has allocated in total
    #[pallet::storage]
    #[pallet::getter(fn vote_user_power)]
    pub type VoteUserPower<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u16, ValueQuery>;

    /// Time of each account's last vote for each nominee
    #[pallet::storage]
    #[pallet::getter(fn last_user_vote)]
    pub type LastUserVote<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Twox64Concat,
        NomineeId,
        u64,
        ValueQuery,
    >;

    /// Events emitted by the pallet
    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Nominee registered
        NomineeAdded {
            account: [u8; 32],
            chain_id: u64,
            id: NomineeId,
        },
        /// Voting power allocated to a nominee
        VoteForNominee {
            who: T::AccountId,
            account: [u8; 32],
            chain_id: u64,
            power: u16,
        },
        /// Nominee curve caught up
        NomineeCheckpoint { id: NomineeId, time: u64, bias: u128 },
        /// Sum curve caught up
        SumCheckpoint { time: u64, bias: u128 },
    }

    /// Errors returned by the pallet
    #[pallet::error]
    pub enum Error<T> {
        /// Chain id is zero
        ZeroValue,
        /// Nominee key is all zeroes
        ZeroKey,
        /// Chain id, power or a product of them is out of range
        Overflow,
        /// Nominee already registered
        NomineeAlreadyExists,
        /// Nominee not registered
        NomineeDoesNotExist,
        /// Voter's lock ends before the next epoch
        LockExpired,
        /// Voted for this nominee within the cooldown
        VoteTooOften,
        /// Batch arguments have different lengths
        WrongArrayLength,
        /// Weight curve is too far behind; call a checkpoint first
        CatchUpIncomplete,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::EpochLength::get() > 0, "EpochLength must be non-zero");
            assert!(T::MaxCatchUpEpochs::get() > 0, "MaxCatchUpEpochs must be non-zero");
            assert!(T::MaxBatchVotes::get() > 0, "MaxBatchVotes must be non-zero");
            assert!(T::MaxChainId::get() > 0, "MaxChainId must be non-zero");
        }
    }

    /// Extrinsic calls
    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register a nominee
        ///
        /// # Errors
        /// * `ZeroKey` - `account` is all zeroes
        /// * `ZeroValue` - `chain_id` is zero
        /// * `Overflow` - `chain_id` above `MaxChainId`
        /// * `NomineeAlreadyExists` - Pair already registered
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_nominee())]
        pub fn add_nominee(origin: OriginFor<T>, account: [u8; 32], chain_id: u64) -> DispatchResult {
            ensure_signed(origin)?;

            ensure!(account != [0u8; 32], Error::<T>::ZeroKey);
            ensure!(chain_id != 0, Error::<T>::ZeroValue);
            ensure!(chain_id <= T::MaxChainId::get(), Error::<T>::Overflow);

            let nominee = Nominee { account, chain_id };
            ensure!(
                !NomineeIds::<T>::contains_key(nominee),
                Error::<T>::NomineeAlreadyExists
            );

            let id = Self::num_nominees().checked_add(1).ok_or(Error::<T>::Overflow)?;
            let now = Self::now();
            Self::start_sum(now);

            NomineeCount::<T>::put(id);
            NomineeIds::<T>::insert(nominee, id);
            Nominees::<T>::insert(id, nominee);
            TimeWeight::<T>::insert(id, Self::next_epoch(now));

            Self::deposit_event(Event::NomineeAdded { account, chain_id, id });
            Ok(())
        }

        /// Allocate `power` basis points of the caller's voting power to a nominee
        ///
        /// Replaces the caller's previous allocation to the same nominee; zero
        /// power withdraws it. The allocation starts at the next epoch boundary.
        ///
        /// # Errors
        /// * `NomineeDoesNotExist` - Nominee not registered
        /// * `LockExpired` - Caller's lock ends at or before the next epoch
        /// * `Overflow` - `power` above 10 000 or total allocation above 10 000
        /// * `VoteTooOften` - Voted for this nominee within `VoteCooldown`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::vote_for_nominee_weights(
            T::MaxCatchUpEpochs::get().saturating_mul(2)
        ))]
        pub fn vote_for_nominee_weights(
            origin: OriginFor<T>,
            account: [u8; 32],
            chain_id: u64,
            power: u16,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let epochs = with_storage_layer(|| Self::do_vote(&who, account, chain_id, power))?;
            Ok(Some(T::WeightInfo::vote_for_nominee_weights(epochs)).into())
        }

        /// Apply several votes; any failing vote reverts them all
        ///
        /// Charged for one nominee catch-up per vote plus one sum catch-up.
        ///
        /// # Errors
        /// * `WrongArrayLength` - Argument lengths differ
        /// * Any error of `vote_for_nominee_weights`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::vote_for_nominee_weights_batch(
            accounts.len() as u32,
            T::MaxCatchUpEpochs::get().saturating_mul(accounts.len() as u32 + 1)
        ))]
        pub fn vote_for_nominee_weights_batch(
            origin: OriginFor<T>,
            accounts: BoundedVec<[u8; 32], T::MaxBatchVotes>,
            chain_ids: BoundedVec<u64, T::MaxBatchVotes>,
            powers: BoundedVec<u16, T::MaxBatchVotes>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            ensure!(
                accounts.len() == chain_ids.len() && accounts.len() == powers.len(),
                Error::<T>::WrongArrayLength
            );
            let votes = accounts.len() as u32;

            let epochs = with_storage_layer(|| -> Result<u32, DispatchError> {
                let mut epochs = 0u32;
                for ((account, chain_id), power) in
                    accounts.into_iter().zip(chain_ids.into_iter()).zip(powers.into_iter())
                {
                    let walked = Self::do_vote(&who, account, chain_id, power)?;
                    epochs = epochs.saturating_add(walked);
                }
                Ok(epochs)
            })?;
            Ok(Some(T::WeightInfo::vote_for_nominee_weights_batch(votes, epochs)).into())
        }

        /// Catch the sum curve up to the current epoch
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::checkpoint(T::MaxCatchUpEpochs::get()))]
        pub fn checkpoint(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;

            let now = Self::now();
            Self::start_sum(now);
            let sum = Self::catch_up_sum(now);

            Self::deposit_event(Event::SumCheckpoint { time: sum.time, bias: sum.point.bias });
            Ok(Some(T::WeightInfo::checkpoint(sum.epochs)).into())
        }

        /// Catch one nominee's curve and the sum curve up to the current epoch
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::checkpoint_nominee(
            T::MaxCatchUpEpochs::get().saturating_mul(2)
        ))]
        pub fn checkpoint_nominee(
            origin: OriginFor<T>,
            account: [u8; 32],
            chain_id: u64,
        ) -> DispatchResultWithPostInfo {
            ensure_signed(origin)?;

            let id = Self::nominee_id(account, chain_id)?;
            let now = Self::now();
            Self::start_sum(now);
            let sum = Self::catch_up_sum(now);
            let nominee = Self::catch_up_nominee(id, now);

            Self::deposit_event(Event::SumCheckpoint { time: sum.time, bias: sum.point.bias });
            Self::deposit_event(Event::NomineeCheckpoint {
                id,
                time: nominee.time,
                bias: nominee.point.bias,
            });
            let epochs = sum.epochs.saturating_add(nominee.epochs);
            Ok(Some(T::WeightInfo::checkpoint_nominee(epochs)).into())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Current unix time in seconds.
        pub fn now() -> u64 {
            T::UnixTime::now().as_secs()
        }

        /// First epoch boundary strictly after `ts`.
        pub(crate) fn next_epoch(ts: u64) -> u64 {
            let epoch = T::EpochLength::get();
            ts.saturating_add(epoch) / epoch * epoch
        }

        /// Id of a registered nominee.
        pub fn nominee_id(account: [u8; 32], chain_id: u64) -> Result<NomineeId, DispatchError> {
            Self::nominee_id_of(Nominee { account, chain_id })
                .ok_or_else(|| Error::<T>::NomineeDoesNotExist.into())
        }

        /// Registered nominees with ids `start..start + count`.
        pub fn nominees(start: NomineeId, count: u32) -> Vec<Nominee> {
            (start..start.saturating_add(count))
                .map_while(|id| Nominees::<T>::get(id))
                .collect()
        }

        /// Earliest time `who` may vote again for the nominee.
        pub fn next_allowed_voting_time(
            who: &T::AccountId,
            account: [u8; 32],
            chain_id: u64,
        ) -> Result<u64, DispatchError> {
            let id = Self::nominee_id(account, chain_id)?;
            Ok(Self::last_user_vote(who, id).saturating_add(T::VoteCooldown::get()))
        }

        /// Weight of a nominee at `ts`, rounded down to its epoch.
        pub fn nominee_weight_at(id: NomineeId, ts: u64) -> u128 {
            Self::weight_curve_at(
                Self::time_weight(id),
                ts,
                |t| PointsWeight::<T>::get(id, t),
                |t| ChangesWeight::<T>::get(id, t),
            )
        }

        /// Sum of all nominee weights at `ts`, rounded down to its epoch.
        pub fn weights_sum_at(ts: u64) -> u128 {
            Self::weight_curve_at(
                Self::time_sum(),
                ts,
                |t| PointsSum::<T>::get(t),
                |t| ChangesSum::<T>::get(t),
            )
        }

        /// Weight of a nominee at the current epoch.
        pub fn nominee_weight(account: [u8; 32], chain_id: u64) -> Result<u128, DispatchError> {
            let id = Self::nominee_id(account, chain_id)?;
            Ok(Self::nominee_weight_at(id, Self::now()))
        }

        /// Sum of all weights at the current epoch.
        pub fn weights_sum() -> u128 {
            Self::weights_sum_at(Self::now())
        }

        /// Share of the total weight held by a nominee at `ts`; zero when there
        /// is no weight at all.
        pub fn nominee_relative_weight(
            account: [u8; 32],
            chain_id: u64,
            ts: u64,
        ) -> Result<Perquintill, DispatchError> {
            let id = Self::nominee_id(account, chain_id)?;
            Ok(Self::relative_weight(id, ts))
        }

        pub(crate) fn relative_weight(id: NomineeId, ts: u64) -> Perquintill {
            let total = Self::weights_sum_at(ts);
            if total == 0 {
                return Perquintill::zero();
            }
            Perquintill::from_rational(Self::nominee_weight_at(id, ts), total)
        }

        /// Set the sum curve's starting epoch on first use.
        fn start_sum(now: u64) {
            if Self::time_sum() == 0 {
                let epoch = T::EpochLength::get();
                TimeSum::<T>::put(now / epoch * epoch);
            }
        }

        fn do_vote(
            who: &T::AccountId,
            account: [u8; 32],
            chain_id: u64,
            power: u16,
        ) -> Result<u32, DispatchError> {
            let id = Self::nominee_id(account, chain_id)?;

            let now = Self::now();
            let next_time = Self::next_epoch(now);
            let user_slope = T::VotingEscrow::last_user_point(who).slope.max(0) as u128;
            let lock_end = T::VotingEscrow::locked_end(who);
            ensure!(lock_end > next_time, Error::<T>::LockExpired);
            ensure!(power <= MAX_WEIGHT, Error::<T>::Overflow);

            let last_vote = Self::last_user_vote(who, id);
            ensure!(
                last_vote.saturating_add(T::VoteCooldown::get()) <= now,
                Error::<T>::VoteTooOften
            );

            let old = Self::vote_user_slopes(who, id);
            let power_used = Self::vote_user_power(who)
                .saturating_add(power)
                .saturating_sub(old.power);
            ensure!(power_used <= MAX_WEIGHT, Error::<T>::Overflow);

            let old_bias = if old.end > next_time {
                old.slope.saturating_mul(u128::from(old.end - next_time))
            } else {
                0
            };
            let new_slope = user_slope
                .checked_mul(u128::from(power))
                .ok_or(Error::<T>::Overflow)?
                / u128::from(MAX_WEIGHT);
            let new_bias = new_slope
                .checked_mul(u128::from(lock_end - next_time))
                .ok_or(Error::<T>::Overflow)?;
            let new = VotedSlope { slope: new_slope, power, end: lock_end };

            Self::start_sum(now);
            let nominee = Self::catch_up_nominee(id, now);
            let sum = Self::catch_up_sum(now);
            ensure!(nominee.done && sum.done, Error::<T>::CatchUpIncomplete);

            let replace = |point: WeightPoint| -> WeightPoint {
                let bias = point.bias.saturating_add(new_bias).saturating_sub(old_bias);
                let slope = if old.end > next_time {
                    point.slope.saturating_add(new_slope).saturating_sub(old.slope)
                } else {
                    point.slope.saturating_add(new_slope)
                };
                WeightPoint { bias, slope }
            };
            PointsWeight::<T>::insert(id, next_time, replace(nominee.point));
            PointsSum::<T>::insert(next_time, replace(sum.point));

            if old.end > now {
                ChangesWeight::<T>::mutate(id, old.end, |c| *c = c.saturating_sub(old.slope));
                ChangesSum::<T>::mutate(old.end, |c| *c = c.saturating_sub(old.slope));
            }
            ChangesWeight::<T>::mutate(id, lock_end, |c| *c = c.saturating_add(new_slope));
            ChangesSum::<T>::mutate(lock_end, |c| *c = c.saturating_add(new_slope));

            VoteUserSlopes::<T>::insert(who, id, new);
            VoteUserPower::<T>::insert(who, power_used);
            LastUserVote::<T>::insert(who, id, now);

            log::debug!(
                target: LOG_TARGET,
                "{:?} allocated {} bps to nominee {} (slope {}, until {})",
                who,
                power,
                id,
                new_slope,
                lock_end,
            );

            Self::deposit_event(Event::VoteForNominee {
                who: who.clone(),
                account,
                chain_id,
                power,
            });
            Ok(nominee.epochs.saturating_add(sum.epochs))
        }
    }
}
