// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognized gestures and the channels they are pushed through.
//!
//! The controller pushes each recognized gesture into a [`GestureSink`], one
//! method per channel. Hosts implement the trait for whatever they forward to
//! (synthetic engine events, a UI queue, ...). Two ready-made sinks exist:
//!
//! - [`GestureQueue`] keeps the four channels apart, one `Vec` each.
//! - `Vec<Gesture>` keeps a single stream in emission order.
//!
//! ```
//! use understory_gesture::{Gesture, GestureSink, Pinch};
//! use kurbo::Point;
//!
//! let mut log: Vec<Gesture> = Vec::new();
//! log.pinch(Pinch { factor: 2.0, position: Point::ORIGIN, fingers: 2 });
//! assert!(matches!(log[0], Gesture::Pinch(p) if p.factor == 2.0));
//! ```

use alloc::vec::Vec;

use kurbo::Point;

use crate::finger::FingerId;

/// A short press and release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tap {
    /// Finger that tapped.
    pub finger: FingerId,
    /// Where the finger first touched down.
    pub position: Point,
}

/// A press held in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LongPress {
    /// Finger that was held.
    pub finger: FingerId,
    /// Where the finger first touched down.
    pub position: Point,
}

/// Change in finger spread between two consecutive snapshots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pinch {
    /// Signed spread delta. Positive when fingers move apart.
    pub factor: f64,
    /// Centroid of the fingers after the change.
    pub position: Point,
    /// Number of fingers involved.
    pub fingers: usize,
}

/// Rotation of the fingers around their centroid between two consecutive
/// snapshots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Twist {
    /// Mean per-finger rotation in radians, within (−π, π].
    ///
    /// Positive values rotate from the +x axis toward the +y axis; in y-down
    /// screen coordinates that is clockwise.
    pub angle: f64,
    /// Centroid of the fingers after the change.
    pub position: Point,
    /// Number of fingers involved.
    pub fingers: usize,
}

/// Any recognized gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    /// See [`Tap`].
    Tap(Tap),
    /// See [`LongPress`].
    LongPress(LongPress),
    /// See [`Pinch`].
    Pinch(Pinch),
    /// See [`Twist`].
    Twist(Twist),
}

/// Receiver for the four gesture channels.
///
/// Every method defaults to dropping the gesture, so a sink only implements
/// the channels it listens to.
pub trait GestureSink {
    /// A tap was recognized.
    fn tap(&mut self, tap: Tap) {
        let _ = tap;
    }

    /// A long press was recognized.
    fn long_press(&mut self, long_press: LongPress) {
        let _ = long_press;
    }

    /// A pinch step was recognized.
    fn pinch(&mut self, pinch: Pinch) {
        let _ = pinch;
    }

    /// A twist step was recognized.
    fn twist(&mut self, twist: Twist) {
        let _ = twist;
    }
}

impl GestureSink for () {}

impl<S: GestureSink + ?Sized> GestureSink for &mut S {
    fn tap(&mut self, tap: Tap) {
        (**self).tap(tap);
    }

    fn long_press(&mut self, long_press: LongPress) {
        (**self).long_press(long_press);
    }

    fn pinch(&mut self, pinch: Pinch) {
        (**self).pinch(pinch);
    }

    fn twist(&mut self, twist: Twist) {
        (**self).twist(twist);
    }
}

impl GestureSink for Vec<Gesture> {
    fn tap(&mut self, tap: Tap) {
        self.push(Gesture::Tap(tap));
    }

    fn long_press(&mut self, long_press: LongPress) {
        self.push(Gesture::LongPress(long_press));
    }

    fn pinch(&mut self, pinch: Pinch) {
        self.push(Gesture::Pinch(pinch));
    }

    fn twist(&mut self, twist: Twist) {
        self.push(Gesture::Twist(twist));
    }
}

/// Collects each channel into its own queue.
#[derive(Clone, Debug, Default)]
pub struct GestureQueue {
    /// Recognized taps, oldest first.
    pub taps: Vec<Tap>,
    /// Recognized long presses, oldest first.
    pub long_presses: Vec<LongPress>,
    /// Recognized pinch steps, oldest first.
    pub pinches: Vec<Pinch>,
    /// Recognized twist steps, oldest first.
    pub twists: Vec<Twist>,
}

impl GestureQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no channel holds anything.
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
            && self.long_presses.is_empty()
            && self.pinches.is_empty()
            && self.twists.is_empty()
    }

    /// Take all queued taps.
    pub fn take_taps(&mut self) -> Vec<Tap> {
        core::mem::take(&mut self.taps)
    }

    /// Take all queued long presses.
    pub fn take_long_presses(&mut self) -> Vec<LongPress> {
        core::mem::take(&mut self.long_presses)
    }

    /// Take all queued pinch steps.
    pub fn take_pinches(&mut self) -> Vec<Pinch> {
        core::mem::take(&mut self.pinches)
    }

    /// Take all queued twist steps.
    pub fn take_twists(&mut self) -> Vec<Twist> {
        core::mem::take(&mut self.twists)
    }

    /// Empty every channel.
    pub fn clear(&mut self) {
        self.taps.clear();
        self.long_presses.clear();
        self.pinches.clear();
        self.twists.clear();
    }
}

impl GestureSink for GestureQueue {
    fn tap(&mut self, tap: Tap) {
        self.taps.push(tap);
    }

    fn long_press(&mut self, long_press: LongPress) {
        self.long_presses.push(long_press);
    }

    fn pinch(&mut self, pinch: Pinch) {
        self.pinches.push(pinch);
    }

    fn twist(&mut self, twist: Twist) {
        self.twists.push(twist);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(id: u32) -> Tap {
        Tap {
            finger: FingerId(id),
            position: Point::ORIGIN,
        }
    }

    #[test]
    fn queue_keeps_channels_apart() {
        let mut queue = GestureQueue::new();
        queue.tap(tap(1));
        queue.twist(Twist {
            angle: 0.5,
            position: Point::ORIGIN,
            fingers: 2,
        });

        assert_eq!(queue.taps.len(), 1);
        assert_eq!(queue.twists.len(), 1);
        assert!(queue.long_presses.is_empty());
        assert!(queue.pinches.is_empty());

        assert_eq!(queue.take_taps(), [tap(1)]);
        assert!(queue.taps.is_empty());
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn vec_sink_keeps_emission_order() {
        let mut log: Vec<Gesture> = Vec::new();
        log.tap(tap(1));
        log.long_press(LongPress {
            finger: FingerId(2),
            position: Point::ORIGIN,
        });
        log.tap(tap(3));

        assert!(matches!(log[0], Gesture::Tap(t) if t.finger == FingerId(1)));
        assert!(matches!(log[1], Gesture::LongPress(_)));
        assert!(matches!(log[2], Gesture::Tap(t) if t.finger == FingerId(3)));
    }

    #[test]
    fn unit_sink_drops_everything() {
        let sink: &mut dyn GestureSink = &mut ();
        sink.tap(tap(1));
        sink.pinch(Pinch {
            factor: 1.0,
            position: Point::ORIGIN,
            fingers: 2,
        });
    }
}
