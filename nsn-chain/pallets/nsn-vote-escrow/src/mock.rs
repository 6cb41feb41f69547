// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// NSN Chain is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Test utilities for pallet-nsn-vote-escrow

use crate as pallet_nsn_vote_escrow;
use frame_support::{
	construct_runtime, parameter_types,
	traits::{ConstU32, ConstU64, Everything, VariantCountOf},
	PalletId,
};
use frame_system::pallet_prelude::BlockNumberFor;
use sp_core::H256;
use sp_runtime::{
	traits::{BlakeTwo256, IdentityLookup},
	BuildStorage,
};

pub type AccountId = u64;
pub type Balance = u128;
pub type BlockNumber = BlockNumberFor<Test>;

type Block = frame_system::mocking::MockBlockU32<Test>;

// Configure mock runtime
construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		Timestamp: pallet_timestamp,
		Balances: pallet_balances,
		VoteEscrow: pallet_nsn_vote_escrow,
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
	type AccountData = pallet_balances::AccountData<Balance>;
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

parameter_types! {
	pub static ExistentialDeposit: Balance = 1;
}

impl pallet_balances::Config for Test {
	type MaxLocks = ();
	type MaxReserves = ();
	type ReserveIdentifier = [u8; 8];
	type Balance = Balance;
	type RuntimeEvent = RuntimeEvent;
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type AccountStore = System;
	type WeightInfo = ();
	type RuntimeHoldReason = ();
	type FreezeIdentifier = RuntimeFreezeReason;
	type MaxFreezes = VariantCountOf<RuntimeFreezeReason>;
	type RuntimeFreezeReason = RuntimeFreezeReason;
	type DoneSlashHandler = ();
}

/// One week
pub const WEEK: u64 = 7 * 86_400;
/// Four years
pub const MAX_LOCK: u64 = 4 * 365 * 86_400;
/// Genesis time, aligned to an epoch boundary
pub const START: u64 = 2_800 * WEEK;
/// One token (18 decimals)
pub const UNIT: Balance = 1_000_000_000_000_000_000;

parameter_types! {
	pub const VoteEscrowPalletId: PalletId = PalletId(*b"nsn/vesc");
	pub const VoteEscrowViewPalletId: PalletId = PalletId(*b"nsn/vevw");
	pub const EpochLength: u64 = WEEK;
	pub const MaxLockDuration: u64 = MAX_LOCK;
	pub static MaxCatchUpEpochs: u32 = 255;
}

impl pallet_nsn_vote_escrow::Config for Test {
	type Currency = Balances;
	type RuntimeFreezeReason = RuntimeFreezeReason;
	type UnixTime = Timestamp;
	type PalletId = VoteEscrowPalletId;
	type ViewPalletId = VoteEscrowViewPalletId;
	type EpochLength = EpochLength;
	type MaxLockDuration = MaxLockDuration;
	type MaxCatchUpEpochs = MaxCatchUpEpochs;
	type WeightInfo = ();
}

// Test accounts
pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;
pub const EVE: AccountId = 5;

// Build test externalities
pub struct ExtBuilder {
	balances: Vec<(AccountId, Balance)>,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			balances: vec![
				(ALICE, 10_000 * UNIT),
				(BOB, 10_000 * UNIT),
				(CHARLIE, 10_000 * UNIT),
				(DAVE, 10_000 * UNIT),
				(EVE, 10_000 * UNIT),
			],
		}
	}
}

impl ExtBuilder {
	pub fn with_balances(mut self, balances: Vec<(AccountId, Balance)>) -> Self {
		self.balances = balances;
		self
	}

	pub fn build(self) -> sp_io::TestExternalities {
		let mut storage = frame_system::GenesisConfig::<Test>::default()
			.build_storage()
			.unwrap();

		pallet_balances::GenesisConfig::<Test> {
			balances: self.balances,
			dev_accounts: None,
		}
		.assimilate_storage(&mut storage)
		.unwrap();

		let mut ext = sp_io::TestExternalities::new(storage);
		ext.execute_with(|| {
			System::set_block_number(1);
			Timestamp::set_timestamp(START * 1000);
		});
		ext
	}
}

#[cfg(feature = "runtime-benchmarks")]
pub fn new_test_ext() -> sp_io::TestExternalities {
	ExtBuilder::default().build()
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

/// Jump to `block` at time `ts` (seconds)
pub fn jump_to(block: BlockNumber, ts: u64) {
	System::set_block_number(block);
	Timestamp::set_timestamp(ts * 1000);
}

// Helper to get last event
pub fn last_event() -> RuntimeEvent {
	System::events().pop().expect("Event expected").event
}

/// Tokens of `who` frozen by the escrow
pub fn frozen(who: AccountId) -> Balance {
	use frame_support::traits::fungible::InspectFreeze;
	Balances::balance_frozen(
		&RuntimeFreezeReason::VoteEscrow(pallet_nsn_vote_escrow::FreezeReason::VoteEscrow),
		&who,
	)
}

/// Slope of a lock of `amount`
pub fn slope_of(amount: Balance) -> i128 {
	amount as i128 / MAX_LOCK as i128
}
