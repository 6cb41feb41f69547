// Copyright 2024 Neural Sovereign Network
// This file is part of NSN Chain.

//! Weekly weight curves: bounded catch-up writes and read-only extrapolation.

use crate::{
    ChangesSum, ChangesWeight, Config, NomineeId, Pallet, PointsSum, PointsWeight, TimeSum,
    TimeWeight, WeightPoint, LOG_TARGET,
};
use frame_support::traits::Get;
use pallet_nsn_vote_escrow::VotingEscrow;

/// Progress of a bounded catch-up walk.
pub(crate) struct CatchUp {
    /// Point at the last written epoch
    pub point: WeightPoint,
    /// Last written epoch
    pub time: u64,
    /// Curve reaches past "now"
    pub done: bool,
    /// Epochs written by this walk
    pub epochs: u32,
}

/// Advance `point` by one epoch ending at `t`, retiring `change` of slope.
fn decay(point: WeightPoint, epoch: u64, change: u128) -> WeightPoint {
    let d_bias = point.slope.saturating_mul(u128::from(epoch));
    if point.bias > d_bias {
        WeightPoint {
            bias: point.bias - d_bias,
            slope: point.slope.saturating_sub(change),
        }
    } else {
        WeightPoint::default()
    }
}

impl<T: Config> Pallet<T> {
    /// Write a curve forward one epoch at a time until it passes `now` or
    /// `MaxCatchUpEpochs` is hit.
    fn walk_curve(
        start: u64,
        now: u64,
        point_at: impl Fn(u64) -> WeightPoint,
        change_at: impl Fn(u64) -> u128,
        mut write: impl FnMut(u64, WeightPoint),
    ) -> CatchUp {
        let epoch = T::EpochLength::get();
        let mut t = start;
        let mut point = point_at(t);
        let mut epochs = 0u32;

        while epochs < T::MaxCatchUpEpochs::get() && t <= now {
            t = t.saturating_add(epoch);
            point = decay(point, epoch, change_at(t));
            write(t, point);
            epochs += 1;
        }

        CatchUp { point, time: t, done: t > now, epochs }
    }

    /// Catch a nominee's curve up to `now`, keeping partial progress.
    pub(crate) fn catch_up_nominee(id: NomineeId, now: u64) -> CatchUp {
        let start = Self::time_weight(id);
        let progress = Self::walk_curve(
            start,
            now,
            |t| PointsWeight::<T>::get(id, t),
            |t| ChangesWeight::<T>::get(id, t),
            |t, p| PointsWeight::<T>::insert(id, t, p),
        );
        TimeWeight::<T>::insert(id, progress.time);

        if !progress.done {
            log::debug!(
                target: LOG_TARGET,
                "nominee {} curve caught up to {} of {}",
                id,
                progress.time,
                now,
            );
        }
        progress
    }

    /// Catch the sum curve up to `now`, keeping partial progress.
    pub(crate) fn catch_up_sum(now: u64) -> CatchUp {
        let progress = Self::walk_curve(
            Self::time_sum(),
            now,
            |t| PointsSum::<T>::get(t),
            |t| ChangesSum::<T>::get(t),
            |t, p| PointsSum::<T>::insert(t, p),
        );
        TimeSum::<T>::put(progress.time);

        if !progress.done {
            log::debug!(target: LOG_TARGET, "sum curve caught up to {} of {}", progress.time, now);
        }
        progress
    }

    /// Bias of a curve at the epoch containing `ts`, extrapolating past the
    /// last written epoch without touching storage.
    pub(crate) fn weight_curve_at(
        last: u64,
        ts: u64,
        point_at: impl Fn(u64) -> WeightPoint,
        change_at: impl Fn(u64) -> u128,
    ) -> u128 {
        let epoch = T::EpochLength::get();
        let target = ts / epoch * epoch;
        if last == 0 {
            return 0;
        }
        if target <= last {
            return point_at(target).bias;
        }

        // Every vote ends within one max lock duration of being cast.
        let max_steps = T::VotingEscrow::max_lock_duration() / epoch + 2;
        let mut t = last;
        let mut point = point_at(t);
        let mut steps = 0u64;
        while t < target {
            if point.bias == 0 || point.slope == 0 {
                return point.bias;
            }
            if steps >= max_steps {
                return 0;
            }
            t = t.saturating_add(epoch);
            point = decay(point, epoch, change_at(t));
            steps += 1;
        }
        point.bias
    }
}
