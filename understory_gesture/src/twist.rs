// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Twist recognition.
//!
//! A twist step measures, for every finger present in two consecutive
//! snapshots, the signed angle between its offset from the old centroid and
//! its offset from the new centroid, then averages them. Averaging keeps the
//! reading independent of how many fingers take part.
//!
//! Each per-finger angle is normalized to (−π, π] before averaging. Without
//! that, a half-turn step can come out as +π for one finger and −π for the
//! other and average to zero.
//!
//! ```
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::Point;
//! use understory_gesture::twist::twist_between;
//! use understory_gesture::{Finger, FingerId, GestureState};
//!
//! let at = |x: f64, y: f64| Finger::new(Point::new(x, y));
//! let before = GestureState::new().with_finger(FingerId(1), at(-1.0, 0.0)).with_finger(FingerId(2), at(1.0, 0.0));
//! let after = GestureState::new().with_finger(FingerId(1), at(0.0, -1.0)).with_finger(FingerId(2), at(0.0, 1.0));
//!
//! let twist = twist_between(&before, &after).unwrap();
//! assert!((twist.angle - FRAC_PI_2).abs() < 1e-12);
//! ```

use core::f64::consts::{PI, TAU};

use kurbo::Vec2;

use crate::finger::GestureState;
use crate::gesture::Twist;

/// Signed angle from `from` to `to`, in (−π, π].
///
/// Positive values turn from the +x axis toward the +y axis.
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    normalize_angle(Vec2::new(from.dot(to), from.cross(to)).atan2())
}

/// Wrap `angle` into (−π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let mut angle = angle % TAU;
    if angle <= -PI {
        angle += TAU;
    } else if angle > PI {
        angle -= TAU;
    }
    angle
}

/// The twist step from `prev` to `current`.
///
/// `None` when the finger count changed, fewer than two fingers are down, or
/// no finger is common to both snapshots.
pub fn twist_between(prev: &GestureState, current: &GestureState) -> Option<Twist> {
    if prev.len() != current.len() || prev.len() < 2 {
        return None;
    }

    let prev_centroid = prev.centroid();
    let current_centroid = current.centroid();

    let (sum, count) = prev
        .iter()
        .filter_map(|(id, before)| {
            let after = current.get(id)?;
            Some(signed_angle(
                before.position - prev_centroid,
                after.position - current_centroid,
            ))
        })
        .fold((0.0, 0_usize), |(sum, count), angle| (sum + angle, count + 1));

    if count == 0 {
        return None;
    }
    Some(Twist {
        angle: sum / count as f64,
        position: current_centroid,
        fingers: current.len(),
    })
}

/// Feeds consecutive snapshots through [`twist_between`].
#[derive(Clone, Debug, Default)]
pub struct TwistRecognizer {
    previous: GestureState,
}

impl TwistRecognizer {
    /// Create a recognizer whose first pair starts from the empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the next snapshot.
    pub fn observe(&mut self, state: &GestureState) -> Option<Twist> {
        let twist = twist_between(&self.previous, state);
        self.previous = state.clone();
        twist
    }

    /// Forget the previous snapshot.
    pub fn reset(&mut self) {
        self.previous = GestureState::new();
    }
}
