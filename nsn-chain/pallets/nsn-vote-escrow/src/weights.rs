// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Weights for pallet-nsn-vote-escrow
//!
//! THIS FILE WAS AUTO-GENERATED USING THE SUBSTRATE BENCHMARK CLI VERSION 4.0.0-dev
//! DATE: Placeholder - benchmarks to be run
//! HOSTNAME: Placeholder
//! CPU: Placeholder
//!
//! NOTE: Runtime benchmarking not yet performed. These are placeholder weights
//! with estimated PoV (Proof of Validity) sizes for Cumulus compatibility.
//!
//! PoV Size Estimation:
//! - Point MaxEncodedLen = 16 + 16 + 8 + 8 + 16 = 64 bytes
//! - `p` is the number of global points written: one per elapsed epoch
//!   boundary plus the point at "now", at most `MaxCatchUpEpochs`. Each costs
//!   a SlopeChanges read and a SupplyPoints write.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_nsn_vote_escrow.
pub trait WeightInfo {
    fn create_lock(p: u32) -> Weight;
    fn create_lock_for(p: u32) -> Weight;
    fn increase_amount(p: u32) -> Weight;
    fn deposit_for(p: u32) -> Weight;
    fn increase_unlock_time(p: u32) -> Weight;
    fn withdraw(p: u32) -> Weight;
    fn checkpoint(p: u32) -> Weight;
}

/// Weights for pallet_nsn_vote_escrow using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: NsnVoteEscrow LockedBalances (r:1 w:1)
    /// Storage: NsnVoteEscrow Supply (r:1 w:1)
    /// Storage: NsnVoteEscrow TotalNumPoints (r:1 w:1)
    /// Storage: NsnVoteEscrow SupplyPoints (r:1 w:p)
    /// Storage: NsnVoteEscrow SlopeChanges (r:p+2 w:1)
    /// Storage: NsnVoteEscrow UserPointCount (r:1 w:1)
    /// Storage: NsnVoteEscrow UserPoints (r:0 w:1)
    /// Storage: Balances Freezes (r:1 w:1)
    /// Storage: System Account (r:1 w:1)
    /// The range of component `p` is `[1, 255]`.
    fn create_lock(p: u32) -> Weight {
        // PoV size: account(~128) + freezes(~64) + lock(~96) + overhead(64)
        Weight::from_parts(70_000_000, 4_200)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(10))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(8))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    /// Same storage as `create_lock`, plus the payer's account.
    /// Storage: System Account (r:2 w:2)
    fn create_lock_for(p: u32) -> Weight {
        Weight::from_parts(85_000_000, 6_300)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(11))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(9))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    fn increase_amount(p: u32) -> Weight {
        Weight::from_parts(68_000_000, 4_200)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(10))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(8))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    fn deposit_for(p: u32) -> Weight {
        Weight::from_parts(83_000_000, 6_300)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(11))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(9))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    /// Storage: NsnVoteEscrow SlopeChanges (r:p+2 w:2)
    /// No token movement.
    fn increase_unlock_time(p: u32) -> Weight {
        Weight::from_parts(55_000_000, 3_100)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(7))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    /// Storage: NsnVoteEscrow LockedBalances (r:1 w:1)
    /// Storage: Balances Freezes (r:1 w:1)
    /// Storage: System Account (r:1 w:1)
    fn withdraw(p: u32) -> Weight {
        Weight::from_parts(60_000_000, 4_000)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(7))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }

    /// Storage: NsnVoteEscrow TotalNumPoints (r:1 w:1)
    /// Storage: NsnVoteEscrow SupplyPoints (r:1 w:p)
    /// Storage: NsnVoteEscrow SlopeChanges (r:p w:0)
    fn checkpoint(p: u32) -> Weight {
        Weight::from_parts(18_000_000, 1_600)
            .saturating_add(Weight::from_parts(4_500_000, 0).saturating_mul(p.into()))
            .saturating_add(Weight::from_parts(0, 2_600).saturating_mul(p.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(p.into())))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(p.into())))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn create_lock(p: u32) -> Weight {
        Weight::from_parts(70_000_000, 4_200)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn create_lock_for(p: u32) -> Weight {
        Weight::from_parts(85_000_000, 6_300)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn increase_amount(p: u32) -> Weight {
        Weight::from_parts(68_000_000, 4_200)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn deposit_for(p: u32) -> Weight {
        Weight::from_parts(83_000_000, 6_300)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn increase_unlock_time(p: u32) -> Weight {
        Weight::from_parts(55_000_000, 3_100)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn withdraw(p: u32) -> Weight {
        Weight::from_parts(60_000_000, 4_000)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
    fn checkpoint(p: u32) -> Weight {
        Weight::from_parts(18_000_000, 1_600)
            .saturating_add(Weight::from_parts(4_500_000, 2_600).saturating_mul(p.into()))
    }
}
