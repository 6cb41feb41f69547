// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// NSN Chain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Test utilities for pallet-nsn-vote-weighting

use crate as pallet_nsn_vote_weighting;
use frame_support::{
	construct_runtime, parameter_types,
	traits::{ConstU32, ConstU64, Everything},
};
use frame_system::pallet_prelude::BlockNumberFor;
use pallet_nsn_vote_escrow::{Point, VotingEscrow};
use sp_core::H256;
use sp_runtime::{
	traits::{BlakeTwo256, IdentityLookup},
	BuildStorage, DispatchError,
};
use std::{cell::RefCell, collections::BTreeMap};

pub type AccountId = u64;
pub type BlockNumber = BlockNumberFor<Test>;

type Block = frame_system::mocking::MockBlockU32<Test>;

// Configure mock runtime
construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		Timestamp: pallet_timestamp,
		VoteWeighting: pallet_nsn_vote_weighting,
	}
);

parameter_types! {
	pub const BlockHashCount: u32 = 250;
}

impl frame_system::Config for Test {
	type BaseCallFilter = Everything;
	type BlockWeights = ();
	type BlockLength = ();
	type DbWeight = ();
	type RuntimeOrigin = RuntimeOrigin;
	type RuntimeCall = RuntimeCall;
	type RuntimeTask = RuntimeTask;
	type Nonce = u64;
	type Hash = H256;
	type Hashing = BlakeTwo256;
	type AccountId = AccountId;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Block = Block;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = BlockHashCount;
	type Version = ();
	type PalletInfo = PalletInfo;
	type AccountData = ();
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type SS58Prefix = ();
	type OnSetCode = ();
	type MaxConsumers = ConstU32<16>;
	type SingleBlockMigrations = ();
	type MultiBlockMigrator = ();
	type PreInherents = ();
	type PostInherents = ();
	type PostTransactions = ();
	type ExtensionsWeightInfo = ();
}

impl pallet_timestamp::Config for Test {
	type Moment = u64;
	type OnTimestampSet = ();
	type MinimumPeriod = ConstU64<1>;
	type WeightInfo = ();
}

/// One week
pub const WEEK: u64 = 7 * 86_400;
/// One day
pub const DAY: u64 = 86_400;
/// Four years
pub const MAX_LOCK: u64 = 4 * 365 * 86_400;
/// Genesis time, aligned to an epoch boundary
pub const START: u64 = 2_800 * WEEK;
/// Slope of a voter locking 1 000 tokens (18 decimals) for the maximum duration
pub const SLOPE: i128 = 1_000_000_000_000_000_000_000 / MAX_LOCK as i128;

thread_local! {
	static LOCKS: RefCell<BTreeMap<AccountId, (i128, u64)>> = RefCell::new(BTreeMap::new());
}

/// Give `who` a lock with `slope` ending at `end`
pub fn set_lock(who: AccountId, slope: i128, end: u64) {
	LOCKS.with(|l| l.borrow_mut().insert(who, (slope, end)));
}

/// Give `who` a lock of `SLOPE` ending `weeks` epochs from now
pub fn lock_for_weeks(who: AccountId, weeks: u64) {
	set_lock(who, SLOPE, (now() + weeks * WEEK) / WEEK * WEEK);
}

fn lock_of(who: &AccountId) -> (i128, u64) {
	LOCKS.with(|l| l.borrow().get(who).copied().unwrap_or_default())
}

/// Escrow stand-in whose locks are set directly by tests
pub struct MockVotingEscrow;
impl VotingEscrow<AccountId, BlockNumber> for MockVotingEscrow {
	fn votes(who: &AccountId) -> u128 {
		Self::last_user_point(who).power_at(now()) as u128
	}

	fn past_votes(who: &AccountId, _block: BlockNumber) -> Result<u128, DispatchError> {
		Ok(Self::votes(who))
	}

	fn past_total_supply(_block: BlockNumber) -> Result<u128, DispatchError> {
		Ok(0)
	}

	fn total_supply_locked_at(_ts: u64) -> u128 {
		0
	}

	fn last_user_point(who: &AccountId) -> Point {
		let (slope, end) = lock_of(who);
		let ts = now();
		Point {
			bias: slope * end.saturating_sub(ts) as i128,
			slope,
			ts,
			block_number: System::block_number() as u64,
			balance: 0,
		}
	}

	fn locked_end(who: &AccountId) -> u64 {
		lock_of(who).1
	}

	fn max_lock_duration() -> u64 {
		MAX_LOCK
	}
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;
#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId> for MockBenchmarkHelper {
	fn setup_voter(who: &AccountId) {
		set_lock(*who, SLOPE, (now() + MAX_LOCK) / WEEK * WEEK);
	}
}

parameter_types! {
	pub const EpochLength: u64 = WEEK;
	pub const VoteCooldown: u64 = 10 * DAY;
	pub static MaxCatchUpEpochs: u32 = 53;
	pub const MaxChainId: u64 = u64::MAX / 2;
	pub const MaxBatchVotes: u32 = 8;
}

impl pallet_nsn_vote_weighting::Config for Test {
	type VotingEscrow = MockVotingEscrow;
	type UnixTime = Timestamp;
	type EpochLength = EpochLength;
	type VoteCooldown = VoteCooldown;
	type MaxCatchUpEpochs = MaxCatchUpEpochs;
	type MaxChainId = MaxChainId;
	type MaxBatchVotes = MaxBatchVotes;
	type WeightInfo = ();
	#[cfg(feature = "runtime-benchmarks")]
	type BenchmarkHelper = MockBenchmarkHelper;
}

// Test accounts
pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;

/// Chain id used for most nominees
pub const CHAIN: u64 = 1;

/// Nominee key `n`
pub fn key(n: u8) -> [u8; 32] {
	[n; 32]
}

pub fn new_test_ext() -> sp_io::TestExternalities {
	let storage = frame_system::GenesisConfig::<Test>::default()
		.build_storage()
		.unwrap();

	let mut ext = sp_io::TestExternalities::new(storage);
	ext.execute_with(|| {
		System::set_block_number(1);
		Timestamp::set_timestamp(START * 1000);
	});
	ext
}

/// Current time in seconds
pub fn now() -> u64 {
	Timestamp::get() / 1000
}

/// Move to the next block, `secs` seconds later
pub fn advance(secs: u64) {
	System::set_block_number(System::block_number() + 1);
	Timestamp::set_timestamp(Timestamp::get() + secs * 1000);
}

// Helper to get last event
pub fn last_event() -> RuntimeEvent {
	System::events().pop().expect("Event expected").event
}
