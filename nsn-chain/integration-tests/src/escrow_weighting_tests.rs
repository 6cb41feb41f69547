// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.
//
// Integration tests for nominee weighting driven by escrow locks.
// Tests that the weighting pallet reads voting power through the escrow view.

use crate::mock::*;
use frame_support::{assert_noop, assert_ok};
use pallet_nsn_vote_weighting::{Error as WeightingError, WeightPoint, MAX_WEIGHT};
use sp_runtime::Perquintill;

fn slope_of(who: AccountId) -> u128 {
    NsnVoteEscrow::last_user_point(&who).slope as u128
}

/// Test that a full-power vote copies the escrow slope into the nominee curve
#[test]
fn test_vote_uses_escrow_slope_and_unlock_time() {
    new_test_ext().execute_with(|| {
        lock(ALICE, 1_000 * NSN, 52 * WEEK);
        add_nominee(1);

        vote(ALICE, 1, MAX_WEIGHT);

        let slope = slope_of(ALICE);
        assert_eq!(slope, 1_000 * NSN / u128::from(MAX_LOCK));
        assert_eq!(NsnVoteEscrow::locked_end(&ALICE), START + 52 * WEEK);
        assert_eq!(
            NsnVoteWeighting::points_weight(1, START + WEEK),
            WeightPoint { bias: slope * u128::from(51 * WEEK), slope }
        );
        assert_eq!(NsnVoteWeighting::changes_weight(1, START + 52 * WEEK), slope);
    });
}

/// Test that allocations across nominees are capped at 100%
#[test]
fn test_allocation_cap_across_nominees() {
    new_test_ext().execute_with(|| {
        lock(ALICE, 1_000 * NSN, 52 * WEEK);
        add_nominee(1);
        add_nominee(2);
        add_nominee(3);

        vote(ALICE, 1, 5_000);
        vote(ALICE, 2, 5_000);
        assert_eq!(NsnVoteWeighting::vote_user_power(ALICE), MAX_WEIGHT);

        assert_noop!(
            NsnVoteWeighting::vote_for_nominee_weights(
                RuntimeOrigin::signed(ALICE),
                key(3),
                CHAIN,
                1
            ),
            WeightingError::<Test>::Overflow
        );
    });
}

/// Test that accounts without a live lock cannot vote
#[test]
fn test_expiring_or_missing_lock_cannot_vote() {
    new_test_ext().execute_with(|| {
        add_nominee(1);

        // Lock ends at the next epoch boundary
        lock(BOB, 100 * NSN, WEEK);
        assert_noop!(
            NsnVoteWeighting::vote_for_nominee_weights(
                RuntimeOrigin::signed(BOB),
                key(1),
                CHAIN,
                MAX_WEIGHT
            ),
            WeightingError::<Test>::LockExpired
        );

        // No lock at all
        assert_noop!(
            NsnVoteWeighting::vote_for_nominee_weights(
                RuntimeOrigin::signed(CHARLIE),
                key(1),
                CHAIN,
                MAX_WEIGHT
            ),
            WeightingError::<Test>::LockExpired
        );
    });
}

/// Test relative weights of nominees backed by proportional locks
#[test]
fn test_relative_weights_follow_locked_amounts() {
    new_test_ext().execute_with(|| {
        lock(ALICE, 1_000 * NSN, 52 * WEEK);
        lock(BOB, 3_000 * NSN, 52 * WEEK);
        add_nominee(1);
        add_nominee(2);

        vote(ALICE, 1, MAX_WEIGHT);
        vote(BOB, 2, MAX_WEIGHT);

        for week in [1u64, 10, 30, 51] {
            let t = START + week * WEEK;
            assert_eq!(
                NsnVoteWeighting::nominee_relative_weight(key(1), CHAIN, t),
                Ok(Perquintill::from_percent(25)),
                "week {}",
                week
            );
            assert_eq!(
                NsnVoteWeighting::nominee_relative_weight(key(2), CHAIN, t),
                Ok(Perquintill::from_percent(75)),
                "week {}",
                week
            );
        }

        // Both locks are over
        assert_eq!(
            NsnVoteWeighting::nominee_relative_weight(key(1), CHAIN, START + 52 * WEEK),
            Ok(Perquintill::zero())
        );
    });
}

/// Test that a new lock after withdrawal feeds a fresh slope into votes
#[test]
fn test_relock_after_withdraw_votes_with_new_slope() {
    new_test_ext().execute_with(|| {
        lock(ALICE, 100 * NSN, 2 * WEEK);
        add_nominee(1);
        vote(ALICE, 1, MAX_WEIGHT);
        let old_slope = slope_of(ALICE);

        // Lock expires and is withdrawn
        advance(2 * WEEK);
        assert_ok!(NsnVoteEscrow::withdraw(RuntimeOrigin::signed(ALICE)));
        assert_eq!(NsnVoteWeighting::nominee_weight_at(1, now()), 0);

        // New, larger lock
        lock(ALICE, 400 * NSN, 52 * WEEK);
        let new_slope = slope_of(ALICE);
        assert!(new_slope > old_slope);

        vote(ALICE, 1, MAX_WEIGHT);

        let next = START + 3 * WEEK;
        assert_eq!(
            NsnVoteWeighting::points_weight(1, next),
            WeightPoint { bias: new_slope * u128::from(51 * WEEK), slope: new_slope }
        );
        assert_eq!(NsnVoteWeighting::vote_user_power(ALICE), MAX_WEIGHT);
    });
}

/// Test that a batch through the real escrow is all or nothing
#[test]
fn test_batch_vote_reverts_as_a_whole() {
    new_test_ext().execute_with(|| {
        lock(ALICE, 1_000 * NSN, 52 * WEEK);
        add_nominee(1);
        add_nominee(2);

        // Second nominee is not registered on chain 2
        assert_noop!(
            NsnVoteWeighting::vote_for_nominee_weights_batch(
                RuntimeOrigin::signed(ALICE),
                vec![key(1), key(2)].try_into().unwrap(),
                vec![CHAIN, 2].try_into().unwrap(),
                vec![4_000, 4_000].try_into().unwrap(),
            ),
            WeightingError::<Test>::NomineeDoesNotExist
        );

        assert_ok!(NsnVoteWeighting::vote_for_nominee_weights_batch(
            RuntimeOrigin::signed(ALICE),
            vec![key(1), key(2)].try_into().unwrap(),
            vec![CHAIN, CHAIN].try_into().unwrap(),
            vec![4_000, 4_000].try_into().unwrap(),
        ));
        assert_eq!(NsnVoteWeighting::vote_user_power(ALICE), 8_000);
    });
}
