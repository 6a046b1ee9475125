// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press recognition.
//!
//! The race mirrors [`tap`](crate::tap) with the winning condition flipped:
//! a touch that is neither released nor dragged beyond `max_distance` before
//! its deadline (`touch time + min_duration`) becomes a [`LongPress`] when
//! time is advanced past the deadline.

use core::time::Duration;

use alloc::vec::Vec;

use crate::event::{Move, Release, Touch};
use crate::gesture::LongPress;
use crate::race::{PendingRace, RaceTable};

/// Recognizes long presses from debounced touches, releases, and moves.
#[derive(Clone, Debug)]
pub struct LongPressRecognizer {
    races: RaceTable,
    /// How long a finger must stay down.
    pub min_duration: Duration,
    /// How far a finger may drift from its touch point.
    pub max_distance: f64,
}

impl LongPressRecognizer {
    /// Create a recognizer with the given thresholds.
    pub fn new(min_duration: Duration, max_distance: f64) -> Self {
        Self {
            races: RaceTable::default(),
            min_duration,
            max_distance,
        }
    }

    /// Open a race for `touch`, made at time `now`.
    pub fn on_touch(&mut self, touch: Touch, now: Duration) {
        let deadline = now.saturating_add(self.min_duration);
        log::trace!("long-press race opened for {:?}, deadline {deadline:?}", touch.finger);
        self.races.open(touch, deadline);
    }

    /// Cancel the finger's race: it was let go too early.
    ///
    /// Returns `true` if a race was canceled.
    pub fn on_release(&mut self, release: &Release) -> bool {
        !self.races.take_finger(release.finger).is_empty()
    }

    /// Cancel the finger's race if it drifted too far.
    ///
    /// Returns `true` if a race was canceled.
    pub fn on_move(&mut self, moved: &Move) -> bool {
        let canceled = self
            .races
            .take_moved_beyond(moved.finger, moved.position, self.max_distance);
        if !canceled.is_empty() {
            log::trace!("long-press race for {:?} canceled by drift", moved.finger);
        }
        !canceled.is_empty()
    }

    /// Recognize every race whose deadline is at or before `now`.
    ///
    /// Long presses come out ordered by deadline.
    pub fn advance(&mut self, now: Duration) -> Vec<LongPress> {
        self.races
            .take_expired(now)
            .into_iter()
            .map(|race| LongPress {
                finger: race.finger,
                position: race.origin,
            })
            .collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finger::FingerId;
    use kurbo::{Point, Vec2};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recognizer() -> LongPressRecognizer {
        LongPressRecognizer::new(ms(750), 24.0)
    }

    fn touch(id: u32) -> Touch {
        Touch {
            finger: FingerId(id),
            position: Point::new(5.0, 5.0),
        }
    }

    fn drag(id: u32, x: f64) -> Move {
        Move {
            finger: FingerId(id),
            position: Point::new(x, 5.0),
            delta: Vec2::ZERO,
        }
    }

    #[test]
    fn holding_past_the_deadline_is_a_long_press() {
        let mut presses = recognizer();
        presses.on_touch(touch(1), ms(0));
        assert!(presses.advance(ms(700)).is_empty());
        assert_eq!(
            presses.advance(ms(1000)),
            [LongPress {
                finger: FingerId(1),
                position: Point::new(5.0, 5.0),
            }]
        );
        // Recognized once only.
        assert!(presses.advance(ms(2000)).is_empty());
    }

    #[test]
    fn early_release_cancels() {
        let mut presses = recognizer();
        presses.on_touch(touch(1), ms(0));
        assert!(presses.on_release(&Release {
            finger: FingerId(1),
            position: Point::ORIGIN,
        }));
        assert!(presses.advance(ms(1000)).is_empty());
    }

    #[test]
    fn drift_cancels() {
        let mut presses = recognizer();
        presses.on_touch(touch(1), ms(0));
        assert!(!presses.on_move(&drag(1, 20.0)));
        assert!(presses.on_move(&drag(1, 40.0)));
        assert!(presses.advance(ms(1000)).is_empty());
    }

    #[test]
    fn uses_its_own_distance_bound() {
        let mut presses = LongPressRecognizer::new(ms(750), 100.0);
        presses.on_touch(touch(1), ms(0));
        // Farther than the default tap bound, within this one.
        assert!(!presses.on_move(&drag(1, 60.0)));
        assert_eq!(presses.advance(ms(750)).len(), 1);
    }

    #[test]
    fn other_fingers_do_not_interfere() {
        let mut presses = recognizer();
        presses.on_touch(touch(1), ms(0));
        presses.on_touch(touch(2), ms(100));
        presses.on_release(&Release {
            finger: FingerId(2),
            position: Point::ORIGIN,
        });
        presses.on_move(&drag(2, 500.0));

        let recognized = presses.advance(ms(900));
        assert_eq!(recognized.len(), 1);
        assert_eq!(recognized[0].finger, FingerId(1));
    }

    #[test]
    fn simultaneous_holds_fire_in_deadline_order() {
        let mut presses = recognizer();
        presses.on_touch(touch(2), ms(0));
        presses.on_touch(touch(1), ms(10));
        let recognized = presses.advance(ms(800));
        assert_eq!(recognized[0].finger, FingerId(2));
        assert_eq!(recognized[1].finger, FingerId(1));
        assert_eq!(presses.next_deadline(), None);
    }
}
