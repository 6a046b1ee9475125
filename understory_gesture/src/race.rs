// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for pending per-touch races.

use core::time::Duration;

use kurbo::Point;
use smallvec::SmallVec;

use crate::event::Touch;
use crate::finger::FingerId;

/// A touch whose outcome is not decided yet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingRace {
    /// Finger that opened the race.
    pub finger: FingerId,
    /// Where the finger first touched down.
    pub origin: Point,
    /// When the race's timer fires.
    pub deadline: Duration,
}

/// Open races in creation order.
#[derive(Clone, Debug, Default)]
pub(crate) struct RaceTable {
    races: SmallVec<[PendingRace; 4]>,
}

impl RaceTable {
    pub(crate) fn open(&mut self, touch: Touch, deadline: Duration) {
        self.races.push(PendingRace {
            finger: touch.finger,
            origin: touch.position,
            deadline,
        });
    }

    /// Remove and return the races for `finger`.
    pub(crate) fn take_finger(&mut self, finger: FingerId) -> SmallVec<[PendingRace; 1]> {
        self.take_where(|race| race.finger == finger)
    }

    /// Remove and return the races for `finger` that started farther than
    /// `max_distance` from `position`.
    pub(crate) fn take_moved_beyond(
        &mut self,
        finger: FingerId,
        position: Point,
        max_distance: f64,
    ) -> SmallVec<[PendingRace; 1]> {
        self.take_where(|race| race.finger == finger && race.origin.distance(position) > max_distance)
    }

    /// Remove and return every race whose deadline is at or before `now`,
    /// ordered by deadline.
    pub(crate) fn take_expired(&mut self, now: Duration) -> SmallVec<[PendingRace; 1]> {
        let mut expired = self.take_where(|race| race.deadline <= now);
        // Stable, so equal deadlines keep creation order.
        expired.sort_by_key(|race| race.deadline);
        expired
    }

    pub(crate) fn next_deadline(&self) -> Option<Duration> {
        self.races.iter().map(|race| race.deadline).min()
    }

    pub(crate) fn as_slice(&self) -> &[PendingRace] {
        &self.races
    }

    pub(crate) fn clear(&mut self) {
        self.races.clear();
    }

    fn take_where(&mut self, mut pred: impl FnMut(&PendingRace) -> bool) -> SmallVec<[PendingRace; 1]> {
        let mut taken = SmallVec::new();
        self.races.retain(|race| {
            if pred(race) {
                taken.push(*race);
                false
            } else {
                true
            }
        });
        taken
    }
}
