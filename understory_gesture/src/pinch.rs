// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognition.
//!
//! A pinch step compares the [spread](GestureState::spread) of two
//! consecutive snapshots. A finger going down or up changes the spread for
//! reasons that have nothing to do with pinching, so pairs with different
//! finger counts are skipped.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pinch::pinch_between;
//! use understory_gesture::{Finger, FingerId, GestureState};
//!
//! let at = |x: f64| Finger::new(Point::new(x, 0.0));
//! let before = GestureState::new().with_finger(FingerId(1), at(0.0)).with_finger(FingerId(2), at(10.0));
//! let after = before.with_finger(FingerId(2), at(20.0));
//!
//! let pinch = pinch_between(&before, &after).unwrap();
//! assert_eq!(pinch.factor, 10.0);
//! ```

use crate::finger::GestureState;
use crate::gesture::Pinch;

/// The pinch step from `prev` to `current`, if the finger count held.
pub fn pinch_between(prev: &GestureState, current: &GestureState) -> Option<Pinch> {
    if prev.len() != current.len() {
        return None;
    }
    Some(Pinch {
        factor: current.spread() - prev.spread(),
        position: current.centroid(),
        fingers: current.len(),
    })
}

/// Feeds consecutive snapshots through [`pinch_between`].
#[derive(Clone, Debug, Default)]
pub struct PinchRecognizer {
    previous: GestureState,
}

impl PinchRecognizer {
    /// Create a recognizer whose first pair starts from the empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the next snapshot.
    pub fn observe(&mut self, state: &GestureState) -> Option<Pinch> {
        let pinch = pinch_between(&self.previous, state);
        self.previous = state.clone();
        pinch
    }

    /// Forget the previous snapshot.
    pub fn reset(&mut self) {
        self.previous = GestureState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finger::{Finger, FingerId};
    use kurbo::Point;

    fn state(fingers: &[(u32, (f64, f64))]) -> GestureState {
        fingers
            .iter()
            .map(|&(id, (x, y))| (FingerId(id), Finger::new(Point::new(x, y))))
            .collect()
    }

    #[test]
    fn spreading_apart_is_positive() {
        let a = state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0))]);
        let b = state(&[(1, (0.0, 0.0)), (2, (20.0, 0.0))]);
        let pinch = pinch_between(&a, &b).unwrap();
        assert!(pinch.factor > 0.0);
        assert_eq!(pinch.fingers, 2);
        assert_eq!(pinch.position, Point::new(10.0, 0.0));
    }

    #[test]
    fn closing_in_is_negative() {
        let a = state(&[(1, (0.0, 0.0)), (2, (20.0, 0.0))]);
        let b = state(&[(1, (5.0, 0.0)), (2, (15.0, 0.0))]);
        assert_eq!(pinch_between(&a, &b).unwrap().factor, -10.0);
    }

    #[test]
    fn finger_count_change_is_skipped() {
        let a = state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0))]);
        let b = state(&[(1, (0.0, 0.0))]);
        assert_eq!(pinch_between(&a, &b), None);
        assert_eq!(pinch_between(&b, &a), None);
    }

    #[test]
    fn translation_alone_has_zero_factor() {
        let a = state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0)), (3, (5.0, 8.0))]);
        let b = state(&[(1, (100.0, 50.0)), (2, (110.0, 50.0)), (3, (105.0, 58.0))]);
        assert!(pinch_between(&a, &b).unwrap().factor.abs() < 1e-9);
    }

    #[test]
    fn recognizer_pairs_consecutive_snapshots() {
        let mut pinches = PinchRecognizer::new();
        // Empty -> one finger: count changed.
        assert_eq!(pinches.observe(&state(&[(1, (0.0, 0.0))])), None);
        // One -> two: count changed.
        assert_eq!(
            pinches.observe(&state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0))])),
            None
        );
        // Two -> two, wider.
        let pinch = pinches
            .observe(&state(&[(1, (0.0, 0.0)), (2, (30.0, 0.0))]))
            .unwrap();
        assert_eq!(pinch.factor, 20.0);
    }
}
