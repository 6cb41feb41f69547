// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Types for pallet-nsn-vote-escrow

use frame_support::pallet_prelude::*;
use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Largest amount a single lock may hold (2^96 - 1).
pub const MAX_LOCK_AMOUNT: u128 = (1u128 << 96) - 1;

/// Tokens locked by one account and the epoch-aligned unlock time.
///
/// An account has at most one lock. `amount == 0` means no lock; an expired
/// lock keeps its amount until it is withdrawn.
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
pub struct LockedBalance<Balance> {
    /// Locked token amount
    pub amount: Balance,
    /// Unix timestamp (seconds) at which the lock can be withdrawn
    pub end_time: u64,
}

/// Snapshot of a linearly decaying voting power curve.
///
/// Power at time `t >= ts` is `max(0, bias - slope * (t - ts))`. The same
/// shape is used for per-account history and for the global aggregate, where
/// `balance` is the account's locked tokens or the total locked supply.
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
pub struct Point {
    /// Voting power at `ts`
    pub bias: i128,
    /// Power lost per second
    pub slope: i128,
    /// Unix timestamp (seconds)
    pub ts: u64,
    /// Block number at `ts`, interpolated for synthetic epoch points
    pub block_number: u64,
    /// Locked tokens at `ts`
    pub balance: u128,
}

impl Point {
    /// Power of this point extrapolated to `ts`, floored at zero.
    pub fn power_at(&self, ts: u64) -> i128 {
        let elapsed = i128::from(ts) - i128::from(self.ts);
        let bias = self.bias.saturating_sub(self.slope.saturating_mul(elapsed));
        bias.max(0)
    }
}

/// Which entry point produced a deposit.
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
pub enum DepositKind {
    /// Fresh lock created
    CreateLock,
    /// Tokens added to an existing lock
    IncreaseLockAmount,
    /// Existing lock extended
    IncreaseUnlockTime,
    /// Third party added tokens to someone else's lock
    DepositFor,
}
