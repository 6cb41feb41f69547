// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Weights for pallet-nsn-vote-weighting
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
//! - WeightPoint MaxEncodedLen = 16 + 16 = 32 bytes
//! - VotedSlope MaxEncodedLen = 16 + 2 + 8 = 26 bytes
//! - `e` is the number of curve epochs written by catch-up, across the
//!   nominee and sum curves. Each costs a Changes read and a Points write.

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_nsn_vote_weighting.
pub trait WeightInfo {
    fn add_nominee() -> Weight;
    fn vote_for_nominee_weights(e: u32) -> Weight;
    fn vote_for_nominee_weights_batch(n: u32, e: u32) -> Weight;
    fn checkpoint(e: u32) -> Weight;
    fn checkpoint_nominee(e: u32) -> Weight;
}

/// Weights for pallet_nsn_vote_weighting using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: NsnVoteWeighting NomineeIds (r:1 w:1)
    /// Storage: NsnVoteWeighting NomineeCount (r:1 w:1)
    /// Storage: NsnVoteWeighting TimeSum (r:1 w:1)
    /// Storage: NsnVoteWeighting Nominees (r:0 w:1)
    /// Storage: NsnVoteWeighting TimeWeight (r:0 w:1)
    fn add_nominee() -> Weight {
        Weight::from_parts(25_000_000, 1_200)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(5))
    }

    /// Storage: NsnVoteEscrow UserPointCount, UserPoints, LockedBalances (r:3 w:0)
    /// Storage: NsnVoteWeighting NomineeIds (r:1 w:0)
    /// Storage: NsnVoteWeighting LastUserVote (r:1 w:1)
    /// Storage: NsnVoteWeighting VoteUserSlopes (r:1 w:1)
    /// Storage: NsnVoteWeighting VoteUserPower (r:1 w:1)
    /// Storage: NsnVoteWeighting TimeWeight, TimeSum (r:2 w:2)
    /// Storage: NsnVoteWeighting PointsWeight, PointsSum (r:2 w:e+2)
    /// Storage: NsnVoteWeighting ChangesWeight, ChangesSum (r:e+4 w:4)
    fn vote_for_nominee_weights(e: u32) -> Weight {
        // PoV size: escrow point(~96) + curves(~320) + vote(~96) + overhead(64)
        Weight::from_parts(80_000_000, 5_800)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(e.into()))
            .saturating_add(Weight::from_parts(0, 2_500).saturating_mul(e.into()))
            .saturating_add(T::DbWeight::get().reads(15))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(e.into())))
            .saturating_add(T::DbWeight::get().writes(11))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(e.into())))
    }

    /// `n` votes writing `e` catch-up epochs in total.
    fn vote_for_nominee_weights_batch(n: u32, e: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(80_000_000, 5_800).saturating_mul(n.into()))
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
            .saturating_add(T::DbWeight::get().reads(15u64.saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(e.into())))
            .saturating_add(T::DbWeight::get().writes(11u64.saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(e.into())))
    }

    /// Storage: NsnVoteWeighting TimeSum (r:1 w:1)
    /// Storage: NsnVoteWeighting PointsSum (r:1 w:e)
    /// Storage: NsnVoteWeighting ChangesSum (r:e w:0)
    fn checkpoint(e: u32) -> Weight {
        Weight::from_parts(15_000_000, 1_100)
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(e.into())))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(e.into())))
    }

    /// Sum curve as in `checkpoint`, plus the nominee lookup and its curve.
    fn checkpoint_nominee(e: u32) -> Weight {
        Weight::from_parts(30_000_000, 2_300)
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(e.into())))
            .saturating_add(T::DbWeight::get().writes(2))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(e.into())))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn add_nominee() -> Weight {
        Weight::from_parts(25_000_000, 1_200)
    }
    fn vote_for_nominee_weights(e: u32) -> Weight {
        Weight::from_parts(80_000_000, 5_800)
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
    }
    fn vote_for_nominee_weights_batch(n: u32, e: u32) -> Weight {
        Weight::from_parts(80_000_000, 5_800)
            .saturating_mul(n.into())
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
    }
    fn checkpoint(e: u32) -> Weight {
        Weight::from_parts(15_000_000, 1_100)
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
    }
    fn checkpoint_nominee(e: u32) -> Weight {
        Weight::from_parts(30_000_000, 2_300)
            .saturating_add(Weight::from_parts(3_000_000, 2_500).saturating_mul(e.into()))
    }
}
