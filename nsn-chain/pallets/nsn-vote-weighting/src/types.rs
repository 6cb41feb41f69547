// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Types for pallet-nsn-vote-weighting

use frame_support::pallet_prelude::*;
use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Arena index of a registered nominee. Ids start at 1.
pub type NomineeId = u32;

/// Full voting power, in basis points.
pub const MAX_WEIGHT: u16 = 10_000;

/// External target receiving vote weight: a 32-byte key on a given chain.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
)]
pub struct Nominee {
    pub account: [u8; 32],
    pub chain_id: u64,
}

/// Aggregated weight curve at an epoch boundary.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
    Default,
)]
pub struct WeightPoint {
    pub bias: u128,
    pub slope: u128,
}

/// Contribution of one account's vote to one nominee.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
    Default,
)]
pub struct VotedSlope {
    /// Share of the voter's slope
    pub slope: u128,
    /// Basis points of the voter's power
    pub power: u16,
    /// Unlock time of the voter's lock when voting
    pub end: u64,
}
