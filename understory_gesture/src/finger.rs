// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fingers and multi-finger state snapshots.
//!
//! A [`GestureState`] is an immutable value: "changing" it means building the
//! next snapshot with [`GestureState::with_finger`] or
//! [`GestureState::without_finger`]. Two snapshots compare equal when they hold
//! the same finger ids at the same positions, which is what the tracker uses to
//! suppress redundant transitions.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{Finger, FingerId, GestureState};
//!
//! let state = GestureState::new()
//!     .with_finger(FingerId(1), Finger::new(Point::new(0.0, 0.0)))
//!     .with_finger(FingerId(2), Finger::new(Point::new(10.0, 0.0)));
//!
//! assert_eq!(state.len(), 2);
//! assert_eq!(state.centroid(), Point::new(5.0, 0.0));
//! assert_eq!(state.spread(), 10.0);
//! ```

use alloc::collections::BTreeMap;

use kurbo::{Point, Vec2};

/// Identifier of one contact point.
///
/// Ids are unique among fingers that are down at the same time; the host may
/// reuse an id once its finger has been lifted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FingerId(pub u32);

/// One tracked finger.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Finger {
    /// Latest known position of the finger.
    pub position: Point,
}

impl Finger {
    /// Create a finger at `position`.
    pub const fn new(position: Point) -> Self {
        Self { position }
    }
}

/// The set of all fingers currently down, with their latest positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    fingers: BTreeMap<FingerId, Finger>,
}

impl GestureState {
    /// An empty snapshot with no fingers down.
    pub const fn new() -> Self {
        Self {
            fingers: BTreeMap::new(),
        }
    }

    /// Number of fingers down.
    pub fn len(&self) -> usize {
        self.fingers.len()
    }

    /// Returns `true` if no finger is down.
    pub fn is_empty(&self) -> bool {
        self.fingers.is_empty()
    }

    /// Look up one finger.
    pub fn get(&self, id: FingerId) -> Option<&Finger> {
        self.fingers.get(&id)
    }

    /// Returns `true` if `id` is down in this snapshot.
    pub fn contains(&self, id: FingerId) -> bool {
        self.fingers.contains_key(&id)
    }

    /// Iterate fingers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (FingerId, &Finger)> {
        self.fingers.iter().map(|(id, finger)| (*id, finger))
    }

    /// Iterate finger ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FingerId> + '_ {
        self.fingers.keys().copied()
    }

    /// The next snapshot with `id` placed at `finger`, overwriting any
    /// previous entry for that id.
    #[must_use]
    pub fn with_finger(&self, id: FingerId, finger: Finger) -> Self {
        let mut fingers = self.fingers.clone();
        fingers.insert(id, finger);
        Self { fingers }
    }

    /// The next snapshot with `id` removed.
    ///
    /// Removing an id that is not present yields an equal snapshot.
    #[must_use]
    pub fn without_finger(&self, id: FingerId) -> Self {
        let mut fingers = self.fingers.clone();
        fingers.remove(&id);
        Self { fingers }
    }

    /// Arithmetic mean of all finger positions, or the origin when empty.
    pub fn centroid(&self) -> Point {
        centroid(self.fingers.values().map(|finger| finger.position))
    }

    /// Sum of the distances from each finger to the centroid.
    ///
    /// This is a scalar measure of how "open" the hand is; it is zero for
    /// zero or one finger.
    pub fn spread(&self) -> f64 {
        let centroid = self.centroid();
        self.fingers
            .values()
            .map(|finger| finger.position.distance(centroid))
            .sum()
    }
}

impl FromIterator<(FingerId, Finger)> for GestureState {
    fn from_iter<I: IntoIterator<Item = (FingerId, Finger)>>(iter: I) -> Self {
        Self {
            fingers: iter.into_iter().collect(),
        }
    }
}

/// Arithmetic mean of `points`, or the origin when there are none.
pub fn centroid(points: impl IntoIterator<Item = Point>) -> Point {
    let (sum, count) = points
        .into_iter()
        .fold((Vec2::ZERO, 0_usize), |(sum, count), point| {
            (sum + point.to_vec2(), count + 1)
        });
    if count == 0 {
        return Point::ORIGIN;
    }
    (sum / count as f64).to_point()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(fingers: &[(u32, (f64, f64))]) -> GestureState {
        fingers
            .iter()
            .map(|&(id, (x, y))| (FingerId(id), Finger::new(Point::new(x, y))))
            .collect()
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_eq!(centroid(core::iter::empty()), Point::ORIGIN);
        assert_eq!(GestureState::new().centroid(), Point::ORIGIN);
    }

    #[test]
    fn centroid_is_mean_position() {
        let s = state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0)), (3, (5.0, 15.0))]);
        assert_eq!(s.centroid(), Point::new(5.0, 5.0));
    }

    #[test]
    fn spread_of_single_finger_is_zero() {
        assert_eq!(GestureState::new().spread(), 0.0);
        assert_eq!(state(&[(1, (42.0, -7.0))]).spread(), 0.0);
    }

    #[test]
    fn spread_sums_distances_to_centroid() {
        // Centroid (5, 0); each finger 5 away.
        let s = state(&[(1, (0.0, 0.0)), (2, (10.0, 0.0))]);
        assert_eq!(s.spread(), 10.0);
    }

    #[test]
    fn with_finger_overwrites_same_id() {
        let s = GestureState::new()
            .with_finger(FingerId(1), Finger::new(Point::new(1.0, 1.0)))
            .with_finger(FingerId(1), Finger::new(Point::new(2.0, 2.0)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(FingerId(1)).unwrap().position, Point::new(2.0, 2.0));
    }

    #[test]
    fn without_missing_finger_is_structurally_equal() {
        let s = state(&[(1, (3.0, 4.0))]);
        assert_eq!(s.without_finger(FingerId(9)), s);
    }

    #[test]
    fn snapshots_are_values() {
        let before = state(&[(1, (0.0, 0.0))]);
        let after = before.with_finger(FingerId(2), Finger::new(Point::new(1.0, 0.0)));
        // The earlier snapshot is untouched.
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after.ids().collect::<alloc::vec::Vec<_>>(), [FingerId(1), FingerId(2)]);
    }
}
