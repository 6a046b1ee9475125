// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition.
//!
//! Every [`Touch`] opens a race with three possible endings:
//!
//! 1. **Release**: the same finger is released before the race's deadline.
//!    The race resolves to a [`Tap`] at the original touch position.
//! 2. **Timeout**: the deadline (`touch time + max_tap_duration`) passes
//!    first. No tap.
//! 3. **Drift**: the same finger is dragged more than `max_tap_distance` away
//!    from its touch position. No tap, even if it comes back before release.
//!
//! Races are independent: each touch owns its own race and only events for
//! its own finger can end it. Inputs must be fed in the order they happened,
//! and time must be advanced with [`TapRecognizer::advance`] before feeding
//! an event stamped at that time, so that a deadline reached at the same
//! instant as a release wins over the release.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_gesture::tap::TapRecognizer;
//! use understory_gesture::{FingerId, Release, Touch};
//!
//! let mut taps = TapRecognizer::new(Duration::from_millis(200), 24.0);
//! let finger = FingerId(1);
//!
//! taps.on_touch(Touch { finger, position: Point::ORIGIN }, Duration::ZERO);
//! taps.advance(Duration::from_millis(100));
//! let tap = taps.on_release(&Release { finger, position: Point::new(3.0, 0.0) });
//! assert_eq!(tap.map(|t| t.position), Some(Point::ORIGIN));
//! ```

use core::time::Duration;

use alloc::vec::Vec;

use crate::event::{Move, Release, Touch};
use crate::gesture::Tap;
use crate::race::{PendingRace, RaceTable};

/// Recognizes taps from debounced touches, releases, and moves.
#[derive(Clone, Debug)]
pub struct TapRecognizer {
    races: RaceTable,
    /// Longest press-to-release time that still counts as a tap.
    pub max_duration: Duration,
    /// How far a finger may drift from its touch point and still tap.
    pub max_distance: f64,
}

impl TapRecognizer {
    /// Create a recognizer with the given thresholds.
    pub fn new(max_duration: Duration, max_distance: f64) -> Self {
        Self {
            races: RaceTable::default(),
            max_duration,
            max_distance,
        }
    }

    /// Open a race for `touch`, made at time `now`.
    pub fn on_touch(&mut self, touch: Touch, now: Duration) {
        let deadline = now.saturating_add(self.max_duration);
        log::trace!("tap race opened for {:?}, deadline {deadline:?}", touch.finger);
        self.races.open(touch, deadline);
    }

    /// Resolve the finger's race, if it is still open.
    ///
    /// Returns the recognized tap. Should two races be open for the same
    /// finger, the oldest one is reported; all of them are closed.
    pub fn on_release(&mut self, release: &Release) -> Option<Tap> {
        self.races
            .take_finger(release.finger)
            .first()
            .map(|race| Tap {
                finger: race.finger,
                position: race.origin,
            })
    }

    /// Cancel the finger's race if it drifted too far.
    ///
    /// Returns `true` if a race was canceled.
    pub fn on_move(&mut self, moved: &Move) -> bool {
        let canceled = self
            .races
            .take_moved_beyond(moved.finger, moved.position, self.max_distance);
        if !canceled.is_empty() {
            log::trace!("tap race for {:?} canceled by drift", moved.finger);
        }
        !canceled.is_empty()
    }

    /// Close every race whose deadline is at or before `now`.
    ///
    /// Returns the races that timed out; none of them produce a tap.
    pub fn advance(&mut self, now: Duration) -> Vec<PendingRace> {
        let expired: Vec<PendingRace> = self.races.take_expired(now).into_iter().collect();
        for race in &expired {
            log::trace!("tap race for {:?} timed out", race.finger);
        }
        expired
    }

    /// Earliest deadline among open races.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.races.next_deadline()
    }

    /// Open races in creation order.
    pub fn pending(&self) -> &[PendingRace] {
        self.races.as_slice()
    }

    /// Close every race without recognizing anything.
    pub fn cancel_all(&mut self) {
        self.races.clear();
    }
}
