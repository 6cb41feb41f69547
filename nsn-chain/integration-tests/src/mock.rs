// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// Integration test mock runtime with the vote escrow and vote weighting pallets.
// Unlike the weighting unit test mock, voting power comes from REAL escrow locks.

use frame_support::{
    assert_ok, construct_runtime, derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, VariantCountOf},
    PalletId,
};
use pallet_nsn_vote_escrow::VoteEscrowView;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

pub type AccountId = u64;
pub type Balance = u128;
pub type BlockNumber = u32;

type Block = frame_system::mocking::MockBlockU32<Test>;

// Configure mock runtime with both vote pallets
construct_runtime!(
    pub enum Test
    {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Balances: pallet_balances,
        NsnVoteEscrow: pallet_nsn_vote_escrow,
        NsnVoteWeighting: pallet_nsn_vote_weighting,
    }
);

parameter_types! {
    pub const BlockHashCount: u32 = 250;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
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
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

parameter_types! {
    pub const ExistentialDeposit: Balance = NSN / 100;
}

impl pallet_balances::Config for Test {
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ConstU32<50>;
    type ReserveIdentifier = [u8; 8];
    type Balance = Balance;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ExistentialDeposit;
    type AccountStore = System;
    type WeightInfo = ();
    type FreezeIdentifier = RuntimeFreezeReason;
    type MaxFreezes = VariantCountOf<RuntimeFreezeReason>;
    type RuntimeHoldReason = ();
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type DoneSlashHandler = ();
}

// ============================================================================
// NSN Vote Escrow Pallet Configuration
// ============================================================================

/// One week
pub const WEEK: u64 = 7 * 86_400;
/// One day
pub const DAY: u64 = 86_400;
/// Four years
pub const MAX_LOCK: u64 = 4 * 365 * 86_400;
/// Genesis time, aligned to an epoch boundary
pub const START: u64 = 2_800 * WEEK;

parameter_types! {
    pub const VoteEscrowPalletId: PalletId = PalletId(*b"nsn/vesc");
    pub const VoteEscrowViewPalletId: PalletId = PalletId(*b"nsn/vevw");
    pub const EpochLength: u64 = WEEK;
    pub const MaxLockDuration: u64 = MAX_LOCK;
    pub const EscrowMaxCatchUpEpochs: u32 = 255;
}

impl pallet_nsn_vote_escrow::Config for Test {
    type Currency = Balances;
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type UnixTime = Timestamp;
    type PalletId = VoteEscrowPalletId;
    type ViewPalletId = VoteEscrowViewPalletId;
    type EpochLength = EpochLength;
    type MaxLockDuration = MaxLockDuration;
    type MaxCatchUpEpochs = EscrowMaxCatchUpEpochs;
    type WeightInfo = ();
}

// ============================================================================
// NSN Vote Weighting Pallet Configuration
// ============================================================================

parameter_types! {
    pub const VoteCooldown: u64 = 10 * DAY;
    pub const WeightingMaxCatchUpEpochs: u32 = 53;
    pub const MaxChainId: u64 = u64::MAX / 2;
    pub const MaxBatchVotes: u32 = 16;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct EscrowBenchmarkHelper;
#[cfg(feature = "runtime-benchmarks")]
impl pallet_nsn_vote_weighting::BenchmarkHelper<AccountId> for EscrowBenchmarkHelper {
    fn setup_voter(who: &AccountId) {
        use frame_support::traits::fungible::Mutate;
        use pallet_nsn_vote_escrow::LockManager;

        let _ = Balances::set_balance(who, 1_000 * NSN);
        let _ = <NsnVoteEscrow as LockManager<AccountId, Balance>>::create_lock_for(
            who,
            who,
            100 * NSN,
            MAX_LOCK,
        );
    }
}

impl pallet_nsn_vote_weighting::Config for Test {
    // REAL voting power through the read-only view - not a mock!
    type VotingEscrow = VoteEscrowView<Test>;
    type UnixTime = Timestamp;
    type EpochLength = EpochLength;
    type VoteCooldown = VoteCooldown;
    type MaxCatchUpEpochs = WeightingMaxCatchUpEpochs;
    type MaxChainId = MaxChainId;
    type MaxBatchVotes = MaxBatchVotes;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = EscrowBenchmarkHelper;
}

// ============================================================================
// Test Accounts and Constants
// ============================================================================

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;
pub const VESTING: AccountId = 10;

/// NSN token unit (18 decimals)
pub const NSN: Balance = 1_000_000_000_000_000_000;

/// Chain id used for nominees
pub const CHAIN: u64 = 1;

// ============================================================================
// Test Externalities Builder
// ============================================================================

pub struct ExtBuilder {
    balances: Vec<(AccountId, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            balances: vec![
                (ALICE, 10_000 * NSN),
                (BOB, 10_000 * NSN),
                (CHARLIE, 10_000 * NSN),
                (DAVE, 10_000 * NSN),
                (VESTING, 100_000 * NSN),
            ],
        }
    }
}

impl ExtBuilder {
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

/// Convenience function to create test externalities with default config
pub fn new_test_ext() -> sp_io::TestExternalities {
    ExtBuilder::default().build()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Current time in seconds
pub fn now() -> u64 {
    Timestamp::get() / 1000
}

/// Produce blocks every `block_time` seconds until `n`
pub fn roll_to(n: BlockNumber, block_time: u64) {
    while System::block_number() < n {
        System::set_block_number(System::block_number() + 1);
        Timestamp::set_timestamp(Timestamp::get() + block_time * 1000);
    }
}

/// Move to the next block, `secs` seconds later
pub fn advance(secs: u64) {
    System::set_block_number(System::block_number() + 1);
    Timestamp::set_timestamp(Timestamp::get() + secs * 1000);
}

/// Lock `amount` for `duration` seconds
pub fn lock(who: AccountId, amount: Balance, duration: u64) {
    assert!(Balances::free_balance(who) > amount, "Insufficient balance for locking");
    assert_ok!(NsnVoteEscrow::create_lock(RuntimeOrigin::signed(who), amount, duration));
}

/// Tokens frozen behind `who`'s escrow lock
pub fn frozen(who: AccountId) -> Balance {
    use frame_support::traits::fungible::InspectFreeze;
    Balances::balance_frozen(
        &RuntimeFreezeReason::NsnVoteEscrow(pallet_nsn_vote_escrow::FreezeReason::VoteEscrow),
        &who,
    )
}

/// Nominee key `n`
pub fn key(n: u8) -> [u8; 32] {
    [n; 32]
}

/// Register nominee `n` on `CHAIN`
pub fn add_nominee(n: u8) {
    assert_ok!(NsnVoteWeighting::add_nominee(RuntimeOrigin::signed(ALICE), key(n), CHAIN));
}

/// Allocate `power` basis points of `who`'s voting power to nominee `n`
pub fn vote(who: AccountId, n: u8, power: u16) {
    assert_ok!(NsnVoteWeighting::vote_for_nominee_weights(
        RuntimeOrigin::signed(who),
        key(n),
        CHAIN,
        power
    ));
}
