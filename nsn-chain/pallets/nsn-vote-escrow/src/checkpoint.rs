// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Global and per-account checkpoint writes.
//!
//! A checkpoint is computed in full before anything is written:
//! [`Pallet::stage_checkpoint`] reads the current histories and returns a
//! [`StagedCheckpoint`] holding every new point and slope-schedule edit.
//! Callers commit it only once all other checks (including the token
//! freeze) have passed.

use crate::{
    pallet::{
        Config, Error, Pallet, SlopeChanges, SupplyPoints, TotalNumPoints, UserPointCount,
        UserPoints,
    },
    types::{LockedBalance, Point},
    LOG_TARGET,
};
use frame_support::traits::Get;
use sp_std::vec::Vec;

/// Lock of one account before and after a mutation, amounts in raw units.
pub(crate) struct LockChange<AccountId> {
    pub who: AccountId,
    pub old: LockedBalance<u128>,
    pub new: LockedBalance<u128>,
}

/// Writes produced by one checkpoint, not yet applied to storage.
pub(crate) struct StagedCheckpoint<T: Config> {
    supply_points: Vec<(u64, Point)>,
    num_points: u64,
    user_point: Option<(T::AccountId, u64, Point)>,
    slope_changes: Vec<(u64, i128)>,
}

impl<T: Config> StagedCheckpoint<T> {
    /// Apply the staged writes. Returns the index and timestamp of the latest
    /// global point.
    pub(crate) fn commit(self) -> (u64, u64) {
        let mut last_ts = 0;
        for (index, point) in self.supply_points {
            last_ts = point.ts;
            SupplyPoints::<T>::insert(index, point);
        }
        TotalNumPoints::<T>::put(self.num_points);

        for (ts, slope) in self.slope_changes {
            SlopeChanges::<T>::insert(ts, slope);
        }

        if let Some((who, index, point)) = self.user_point {
            UserPoints::<T>::insert(&who, index, point);
            UserPointCount::<T>::insert(&who, index.saturating_add(1));
        }

        (self.num_points, last_ts)
    }

    /// Number of global points this checkpoint writes; the catch-up
    /// component of the call's weight.
    pub(crate) fn points_written(&self) -> u32 {
        self.supply_points.len() as u32
    }

    #[cfg(test)]
    pub(crate) fn supply_points(&self) -> &[(u64, Point)] {
        &self.supply_points
    }
}

impl<T: Config> Pallet<T> {
    /// Voting power curve of a lock as of `now`.
    ///
    /// Expired or empty locks have no curve. The slope is
    /// `amount / MaxLockDuration`, floored.
    pub(crate) fn lock_curve(lock: &LockedBalance<u128>, now: u64) -> Result<Point, Error<T>> {
        if lock.end_time <= now || lock.amount == 0 {
            return Ok(Point::default());
        }
        let amount = i128::try_from(lock.amount).map_err(|_| Error::<T>::Overflow)?;
        let slope = amount / i128::from(T::MaxLockDuration::get());
        let bias = slope
            .checked_mul(i128::from(lock.end_time - now))
            .ok_or(Error::<T>::Overflow)?;
        Ok(Point {
            bias,
            slope,
            ..Default::default()
        })
    }

    /// Block number of a synthetic point at `ts`, interpolated between
    /// `from` and the current `(now, block)`.
    fn interpolate_block(from: &Point, now: u64, block: u64, ts: u64) -> u64 {
        let time_span = now.saturating_sub(from.ts);
        if time_span == 0 {
            return from.block_number;
        }
        let block_span = u128::from(block.saturating_sub(from.block_number));
        let elapsed = u128::from(ts.saturating_sub(from.ts));
        let offset = block_span.saturating_mul(elapsed) / u128::from(time_span);
        from.block_number.saturating_add(offset as u64)
    }

    /// Compute the writes of a checkpoint at `(now, block)`.
    ///
    /// Walks the global curve forward one epoch at a time from its latest
    /// point, retiring the slopes scheduled at each boundary and recording a
    /// synthetic point per boundary, then records a point at `now`. With a
    /// `change`, the account's curve delta is folded into that last point, a
    /// user point is appended and the slope schedule is moved to the new
    /// unlock time.
    ///
    /// At most `MaxCatchUpEpochs` epochs are walked. Without a `change` the
    /// partial progress is returned; with one the checkpoint fails with
    /// `CatchUpIncomplete`.
    pub(crate) fn stage_checkpoint(
        change: Option<LockChange<T::AccountId>>,
        supply_after: u128,
        now: u64,
        block: u64,
    ) -> Result<StagedCheckpoint<T>, Error<T>> {
        let epoch = T::EpochLength::get();
        let mut num_points = TotalNumPoints::<T>::get();
        let mut last = if num_points > 0 {
            SupplyPoints::<T>::get(num_points)
        } else {
            Point {
                ts: now,
                block_number: block,
                ..Default::default()
            }
        };
        let initial = last;

        let (user_old, user_new) = match &change {
            Some(change) => (
                Self::lock_curve(&change.old, now)?,
                Self::lock_curve(&change.new, now)?,
            ),
            None => (Point::default(), Point::default()),
        };

        let mut supply_points = Vec::new();
        let mut t_step = last.ts / epoch * epoch;
        let mut caught_up = false;
        for _ in 0..T::MaxCatchUpEpochs::get() {
            t_step = t_step.saturating_add(epoch);
            let mut slope_change = 0;
            if t_step > now {
                t_step = now;
            } else {
                slope_change = SlopeChanges::<T>::get(t_step);
            }

            let elapsed = i128::from(t_step.saturating_sub(last.ts));
            let decay = last.slope.checked_mul(elapsed).ok_or(Error::<T>::Overflow)?;
            last.bias = last.bias.checked_sub(decay).ok_or(Error::<T>::Overflow)?.max(0);
            last.slope = last
                .slope
                .checked_sub(slope_change)
                .ok_or(Error::<T>::Overflow)?
                .max(0);
            last.ts = t_step;
            last.block_number = Self::interpolate_block(&initial, now, block, t_step);
            last.balance = initial.balance;
            num_points = num_points.saturating_add(1);

            if t_step == now {
                last.block_number = block;
                last.balance = supply_after;
                caught_up = true;
                break;
            }
            supply_points.push((num_points, last));
        }

        if !caught_up {
            if change.is_some() {
                return Err(Error::<T>::CatchUpIncomplete);
            }
            log::debug!(
                target: LOG_TARGET,
                "catch-up stopped at {} after {} epochs, now is {}",
                t_step,
                T::MaxCatchUpEpochs::get(),
                now,
            );
            return Ok(StagedCheckpoint {
                supply_points,
                num_points,
                user_point: None,
                slope_changes: Vec::new(),
            });
        }

        let Some(change) = change else {
            supply_points.push((num_points, last));
            return Ok(StagedCheckpoint {
                supply_points,
                num_points,
                user_point: None,
                slope_changes: Vec::new(),
            });
        };

        let slope_delta = user_new
            .slope
            .checked_sub(user_old.slope)
            .ok_or(Error::<T>::Overflow)?;
        let bias_delta = user_new
            .bias
            .checked_sub(user_old.bias)
            .ok_or(Error::<T>::Overflow)?;
        last.slope = last.slope.checked_add(slope_delta).ok_or(Error::<T>::Overflow)?.max(0);
        last.bias = last.bias.checked_add(bias_delta).ok_or(Error::<T>::Overflow)?.max(0);
        supply_points.push((num_points, last));

        let old_end = change.old.end_time;
        let new_end = change.new.end_time;
        let mut slope_changes = Vec::new();
        if old_end > now {
            let mut retiring = SlopeChanges::<T>::get(old_end)
                .checked_sub(user_old.slope)
                .ok_or(Error::<T>::Overflow)?;
            if new_end == old_end {
                retiring = retiring.checked_add(user_new.slope).ok_or(Error::<T>::Overflow)?;
            }
            slope_changes.push((old_end, retiring));
        }
        if new_end > now && new_end > old_end {
            let retiring = SlopeChanges::<T>::get(new_end)
                .checked_add(user_new.slope)
                .ok_or(Error::<T>::Overflow)?;
            slope_changes.push((new_end, retiring));
        }

        let user_point = Point {
            bias: user_new.bias,
            slope: user_new.slope,
            ts: now,
            block_number: block,
            balance: change.new.amount,
        };
        let index = UserPointCount::<T>::get(&change.who);

        Ok(StagedCheckpoint {
            supply_points,
            num_points,
            user_point: Some((change.who, index, user_point)),
            slope_changes,
        })
    }
}
