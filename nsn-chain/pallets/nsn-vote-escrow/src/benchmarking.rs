// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Benchmarking for pallet-nsn-vote-escrow

#![cfg(feature = "runtime-benchmarks")]

use super::*;

#[allow(unused)]
use crate::Pallet as VoteEscrow;
use frame_benchmarking::v2::*;
use frame_support::traits::{
    fungible::{Inspect, Mutate},
    Get,
};
use frame_system::RawOrigin;
use sp_runtime::traits::{Saturating, Zero};

fn funded_account<T: Config>(name: &'static str, index: u32) -> (T::AccountId, BalanceOf<T>) {
    let who: T::AccountId = account(name, index, 0);
    let amount = T::Currency::minimum_balance().saturating_mul(1_000u32.into());
    T::Currency::set_balance(&who, amount.saturating_mul(10u32.into()));
    (who, amount)
}

/// Move the latest global point back so the next checkpoint writes `p` points.
fn lag_history<T: Config>(p: u32) {
    let epoch = T::EpochLength::get();
    let now = Pallet::<T>::now();
    let behind = u64::from(p.saturating_sub(1)).saturating_mul(epoch);
    let ts = (now / epoch * epoch).saturating_sub(behind);

    let latest = TotalNumPoints::<T>::get();
    if latest == 0 {
        SupplyPoints::<T>::insert(1, Point { ts, ..Default::default() });
        TotalNumPoints::<T>::put(1);
    } else {
        SupplyPoints::<T>::mutate(latest, |point| point.ts = ts);
    }
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_lock(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (caller, amount) = funded_account::<T>("caller", 0);
        let duration = T::MaxLockDuration::get();
        lag_history::<T>(p);

        #[extrinsic_call]
        create_lock(RawOrigin::Signed(caller.clone()), amount, duration);

        assert_eq!(LockedBalances::<T>::get(&caller).amount, amount);
    }

    #[benchmark]
    fn create_lock_for(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (payer, amount) = funded_account::<T>("payer", 0);
        let (beneficiary, _) = funded_account::<T>("beneficiary", 0);
        let duration = T::MaxLockDuration::get();
        lag_history::<T>(p);

        #[extrinsic_call]
        create_lock_for(RawOrigin::Signed(payer), beneficiary.clone(), amount, duration);

        assert_eq!(LockedBalances::<T>::get(&beneficiary).amount, amount);
    }

    #[benchmark]
    fn increase_amount(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (caller, amount) = funded_account::<T>("caller", 0);
        Pallet::<T>::do_create_lock(&caller, &caller, amount, T::MaxLockDuration::get())
            .expect("lock is created");
        lag_history::<T>(p);

        #[extrinsic_call]
        increase_amount(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(LockedBalances::<T>::get(&caller).amount, amount.saturating_mul(2u32.into()));
    }

    #[benchmark]
    fn deposit_for(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (owner, amount) = funded_account::<T>("owner", 0);
        let (payer, _) = funded_account::<T>("payer", 1);
        Pallet::<T>::do_create_lock(&owner, &owner, amount, T::MaxLockDuration::get())
            .expect("lock is created");
        lag_history::<T>(p);

        #[extrinsic_call]
        deposit_for(RawOrigin::Signed(payer), owner.clone(), amount);

        assert_eq!(LockedBalances::<T>::get(&owner).amount, amount.saturating_mul(2u32.into()));
    }

    #[benchmark]
    fn increase_unlock_time(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (caller, amount) = funded_account::<T>("caller", 0);
        Pallet::<T>::do_create_lock(&caller, &caller, amount, T::EpochLength::get())
            .expect("lock is created");
        let before = LockedBalances::<T>::get(&caller).end_time;
        lag_history::<T>(p);

        #[extrinsic_call]
        increase_unlock_time(RawOrigin::Signed(caller.clone()), T::MaxLockDuration::get());

        assert!(LockedBalances::<T>::get(&caller).end_time > before);
    }

    #[benchmark]
    fn withdraw(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let (caller, amount) = funded_account::<T>("caller", 0);
        Pallet::<T>::do_create_lock(&caller, &caller, amount, T::MaxLockDuration::get())
            .expect("lock is created");
        // Expire the lock in place
        LockedBalances::<T>::mutate(&caller, |lock| lock.end_time = 0);
        lag_history::<T>(p);

        #[extrinsic_call]
        withdraw(RawOrigin::Signed(caller.clone()));

        assert!(LockedBalances::<T>::get(&caller).amount.is_zero());
    }

    #[benchmark]
    fn checkpoint(p: Linear<1, { T::MaxCatchUpEpochs::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        lag_history::<T>(p);

        #[extrinsic_call]
        checkpoint(RawOrigin::Signed(caller));

        assert!(TotalNumPoints::<T>::get() >= 1);
    }

    impl_benchmark_test_suite!(VoteEscrow, crate::mock::new_test_ext(), crate::mock::Test);
}
