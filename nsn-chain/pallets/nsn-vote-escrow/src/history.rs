// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Historical voting power queries.
//!
//! Block queries locate the last checkpoint at or before the block, resolve
//! the block's timestamp from the bracketing global points and extrapolate.
//! Timestamp queries locate the last checkpoint at or before the timestamp
//! and extrapolate, walking the slope-change schedule for the aggregate.

use crate::{
    pallet::{BalanceOf, Config, Error, Pallet, SlopeChanges, SupplyPoints, UserPoints},
    types::Point,
};
use frame_support::{ensure, traits::Get};
use frame_system::pallet_prelude::BlockNumberFor;
use sp_runtime::{traits::SaturatedConversion, DispatchError};

/// Last index in `[low, high]` whose key is `<= target`.
///
/// Keys must be non-decreasing over the range. Ties resolve to the highest
/// index. Returns `low` when no key qualifies; callers check the key of the
/// returned index.
pub(crate) fn find_point_index(
    low: u64,
    high: u64,
    target: u64,
    key: impl Fn(u64) -> u64,
) -> u64 {
    let (mut low, mut high) = (low, high);
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if key(mid) <= target {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

impl<T: Config> Pallet<T> {
    /// Latest checkpoint of `who`, or the empty point.
    pub fn last_user_point(who: &T::AccountId) -> Point {
        match Self::user_point_count(who) {
            0 => Point::default(),
            count => Self::user_point(who, count - 1).unwrap_or_default(),
        }
    }

    /// Current voting power of `who`.
    pub fn votes(who: &T::AccountId) -> u128 {
        Self::last_user_point(who).power_at(Self::now()) as u128
    }

    /// Voting power of `who` at `ts`, extrapolated from the last checkpoint at
    /// or before `ts`.
    pub fn voting_power_at(who: &T::AccountId, ts: u64) -> u128 {
        match Self::user_point_by_time(who, ts) {
            Some(point) => point.power_at(ts) as u128,
            None => 0,
        }
    }

    /// Voting power of `who` as of `block`.
    ///
    /// # Errors
    /// * `WrongBlockNumber` - `block` is after the current block
    pub fn past_votes(who: &T::AccountId, block: BlockNumberFor<T>) -> Result<u128, DispatchError> {
        let block: u64 = block.saturated_into();
        let (_, ts) = Self::block_time(block)?;
        Ok(match Self::user_point_by_block(who, block) {
            Some(point) => point.power_at(ts) as u128,
            None => 0,
        })
    }

    /// Aggregate voting power as of `block`.
    ///
    /// # Errors
    /// * `WrongBlockNumber` - `block` is after the current block
    pub fn past_total_supply(block: BlockNumberFor<T>) -> Result<u128, DispatchError> {
        let (point, ts) = Self::block_time(block.saturated_into())?;
        Ok(Self::supply_locked_from(point, ts))
    }

    /// Tokens locked by `who` as of `block`.
    pub fn balance_of_at(
        who: &T::AccountId,
        block: BlockNumberFor<T>,
    ) -> Result<BalanceOf<T>, DispatchError> {
        let block: u64 = block.saturated_into();
        ensure!(block <= Self::current_block(), Error::<T>::WrongBlockNumber);
        let balance = Self::user_point_by_block(who, block).map_or(0, |point| point.balance);
        Ok(balance.saturated_into())
    }

    /// Total tokens locked as of `block`.
    pub fn total_supply_at(block: BlockNumberFor<T>) -> Result<BalanceOf<T>, DispatchError> {
        let block: u64 = block.saturated_into();
        ensure!(block <= Self::current_block(), Error::<T>::WrongBlockNumber);
        let (_, point) = Self::supply_point_by_block(block);
        Ok(point.balance.saturated_into())
    }

    /// Current aggregate voting power.
    pub fn total_supply_locked() -> u128 {
        Self::total_supply_locked_at(Self::now())
    }

    /// Aggregate voting power at `ts`, past or future.
    pub fn total_supply_locked_at(ts: u64) -> u128 {
        let num_points = Self::total_num_points();
        let index = find_point_index(0, num_points, ts, |i| SupplyPoints::<T>::get(i).ts);
        let point = SupplyPoints::<T>::get(index);
        if point.ts > ts {
            return 0;
        }
        Self::supply_locked_from(point, ts)
    }

    /// Global checkpoint in effect at `ts`.
    ///
    /// # Errors
    /// * `WrongTimestamp` - `ts` is in the future
    pub fn supply_point_at(ts: u64) -> Result<Point, DispatchError> {
        ensure!(ts <= Self::now(), Error::<T>::WrongTimestamp);
        let num_points = Self::total_num_points();
        let index = find_point_index(0, num_points, ts, |i| SupplyPoints::<T>::get(i).ts);
        Ok(SupplyPoints::<T>::get(index))
    }

    /// Checkpoint of `who` in effect at `ts`, or the empty point.
    ///
    /// # Errors
    /// * `WrongTimestamp` - `ts` is in the future
    pub fn user_point_at(who: &T::AccountId, ts: u64) -> Result<Point, DispatchError> {
        ensure!(ts <= Self::now(), Error::<T>::WrongTimestamp);
        Ok(Self::user_point_by_time(who, ts).unwrap_or_default())
    }

    fn user_point_by_time(who: &T::AccountId, ts: u64) -> Option<Point> {
        Self::user_point_by(who, ts, |point| point.ts)
    }

    fn user_point_by_block(who: &T::AccountId, block: u64) -> Option<Point> {
        Self::user_point_by(who, block, |point| point.block_number)
    }

    fn user_point_by(
        who: &T::AccountId,
        target: u64,
        key: impl Fn(&Point) -> u64,
    ) -> Option<Point> {
        let count = Self::user_point_count(who);
        if count == 0 {
            return None;
        }
        let point_key = |i| UserPoints::<T>::get(who, i).map_or(u64::MAX, |p| key(&p));
        let index = find_point_index(0, count - 1, target, point_key);
        UserPoints::<T>::get(who, index).filter(|point| key(point) <= target)
    }

    fn supply_point_by_block(block: u64) -> (u64, Point) {
        let num_points = Self::total_num_points();
        let index =
            find_point_index(0, num_points, block, |i| SupplyPoints::<T>::get(i).block_number);
        (index, SupplyPoints::<T>::get(index))
    }

    /// Global point at or before `block` and the timestamp of `block`.
    ///
    /// The timestamp is interpolated between the located point and the next
    /// one, or the current block and time when the point is the latest.
    fn block_time(block: u64) -> Result<(Point, u64), Error<T>> {
        let current_block = Self::current_block();
        ensure!(block <= current_block, Error::<T>::WrongBlockNumber);

        let (index, point) = Self::supply_point_by_block(block);
        let (block_span, time_span) = if index < Self::total_num_points() {
            let next = SupplyPoints::<T>::get(index + 1);
            (
                next.block_number.saturating_sub(point.block_number),
                next.ts.saturating_sub(point.ts),
            )
        } else {
            (
                current_block.saturating_sub(point.block_number),
                Self::now().saturating_sub(point.ts),
            )
        };

        let mut ts = point.ts;
        if block_span > 0 {
            let elapsed = u128::from(block.saturating_sub(point.block_number));
            let offset = u128::from(time_span).saturating_mul(elapsed) / u128::from(block_span);
            ts = ts.saturating_add(offset as u64);
        }
        Ok((point, ts))
    }

    /// Aggregate power at `ts` extrapolated from the global `point`.
    ///
    /// Steps through each epoch boundary up to `ts`, retiring scheduled
    /// slopes. Every lock ends within `MaxLockDuration` of any point, so the
    /// walk stops once the slope or bias is gone or that horizon is passed.
    pub(crate) fn supply_locked_from(point: Point, ts: u64) -> u128 {
        let epoch = T::EpochLength::get();
        let max_steps = T::MaxLockDuration::get() / epoch + 2;

        let mut last = point;
        let mut t_step = last.ts / epoch * epoch;
        for _ in 0..max_steps {
            t_step = t_step.saturating_add(epoch);
            let mut slope_change = 0;
            if t_step > ts {
                t_step = ts;
            } else {
                slope_change = SlopeChanges::<T>::get(t_step);
            }

            let elapsed = i128::from(t_step.saturating_sub(last.ts));
            last.bias = last.bias.saturating_sub(last.slope.saturating_mul(elapsed));
            if t_step == ts || last.bias <= 0 {
                break;
            }
            last.slope = last.slope.saturating_sub(slope_change);
            last.ts = t_step;
            if last.slope <= 0 {
                break;
            }
        }
        last.bias.max(0) as u128
    }
}
