// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Benchmarking for pallet-nsn-vote-weighting

#![cfg(feature = "runtime-benchmarks")]

use super::*;

#[allow(unused)]
use crate::Pallet as VoteWeighting;
use frame_benchmarking::v2::*;
use frame_support::{traits::Get, BoundedVec};
use frame_system::RawOrigin;
use sp_std::vec::Vec;

fn nominee_key(index: u32) -> [u8; 32] {
    let mut key = [0xAAu8; 32];
    key[..4].copy_from_slice(&index.to_le_bytes());
    key
}

fn register<T: Config>(index: u32) -> [u8; 32] {
    let key = nominee_key(index);
    let caller: T::AccountId = whitelisted_caller();
    Pallet::<T>::add_nominee(RawOrigin::Signed(caller).into(), key, 1)
        .expect("nominee is registered");
    key
}

/// Start epoch of a curve whose next catch-up walks `e` epochs.
fn lagging_start<T: Config>(e: u32) -> u64 {
    let now = Pallet::<T>::now();
    if e == 0 {
        return Pallet::<T>::next_epoch(now);
    }
    let epoch = T::EpochLength::get();
    let behind = u64::from(e - 1).saturating_mul(epoch);
    (now / epoch * epoch).saturating_sub(behind)
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_nominee() {
        let caller: T::AccountId = whitelisted_caller();
        let key = nominee_key(0);

        #[extrinsic_call]
        add_nominee(RawOrigin::Signed(caller), key, 1);

        assert_eq!(NomineeCount::<T>::get(), 1);
    }

    #[benchmark]
    fn vote_for_nominee_weights(e: Linear<0, { T::MaxCatchUpEpochs::get() }>) {
        let voter: T::AccountId = account("voter", 0, 0);
        T::BenchmarkHelper::setup_voter(&voter);
        let key = register::<T>(0);
        TimeWeight::<T>::insert(1, lagging_start::<T>(e));
        TimeSum::<T>::put(lagging_start::<T>(0));

        #[extrinsic_call]
        vote_for_nominee_weights(RawOrigin::Signed(voter.clone()), key, 1, MAX_WEIGHT);

        assert_eq!(VoteUserPower::<T>::get(&voter), MAX_WEIGHT);
    }

    #[benchmark]
    fn vote_for_nominee_weights_batch(
        n: Linear<1, { T::MaxBatchVotes::get() }>,
        e: Linear<0, { T::MaxCatchUpEpochs::get() }>,
    ) {
        let voter: T::AccountId = account("voter", 0, 0);
        T::BenchmarkHelper::setup_voter(&voter);
        let keys: Vec<[u8; 32]> = (0..n).map(register::<T>).collect();
        TimeWeight::<T>::insert(1, lagging_start::<T>(e));
        TimeSum::<T>::put(lagging_start::<T>(0));
        let share = MAX_WEIGHT / n as u16;

        let accounts = BoundedVec::truncate_from(keys);
        let chain_ids = BoundedVec::truncate_from(sp_std::vec![1u64; n as usize]);
        let powers = BoundedVec::truncate_from(sp_std::vec![share; n as usize]);

        #[extrinsic_call]
        vote_for_nominee_weights_batch(
            RawOrigin::Signed(voter.clone()),
            accounts,
            chain_ids,
            powers,
        );

        assert_eq!(VoteUserPower::<T>::get(&voter), share * n as u16);
    }

    #[benchmark]
    fn checkpoint(e: Linear<0, { T::MaxCatchUpEpochs::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        TimeSum::<T>::put(lagging_start::<T>(e));

        #[extrinsic_call]
        checkpoint(RawOrigin::Signed(caller));

        assert!(TimeSum::<T>::get() > 0);
    }

    #[benchmark]
    fn checkpoint_nominee(e: Linear<0, { T::MaxCatchUpEpochs::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let key = register::<T>(0);
        TimeWeight::<T>::insert(1, lagging_start::<T>(e));
        TimeSum::<T>::put(lagging_start::<T>(0));

        #[extrinsic_call]
        checkpoint_nominee(RawOrigin::Signed(caller), key, 1);

        assert!(TimeWeight::<T>::get(1) > 0);
    }

    impl_benchmark_test_suite!(VoteWeighting, crate::mock::new_test_ext(), crate::mock::Test);
}
