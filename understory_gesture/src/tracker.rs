// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folding raw touch events into state snapshots and per-finger transitions.
//!
//! [`apply`] is the pure step: `(state, event) -> state`. [`StateTracker`]
//! threads it through a single owned cell and additionally derives the
//! debounced touch/release transitions and the move records that the
//! windowed recognizers consume.
//!
//! ## Debouncing
//!
//! Hosts occasionally repeat a "pressed" report for a finger that is already
//! down, or report a lift for a finger they never reported down. The tracker
//! forwards only real transitions: the first down after a release (or after
//! start) becomes a [`Touch`], the first up after a down becomes a
//! [`Release`]. The snapshot itself still follows every event, so a repeated
//! down moves the finger to the newly reported position.
//!
//! ```
//! use understory_gesture::{FingerId, RawTouchEvent, StateTracker};
//!
//! let mut tracker = StateTracker::new();
//!
//! let step = tracker.step(&RawTouchEvent::down(1, (0.0, 0.0)));
//! assert!(step.touch.is_some());
//! assert_eq!(step.state.as_ref().map(|s| s.len()), Some(1));
//!
//! // A second "pressed" report for the same finger is not a new touch.
//! let step = tracker.step(&RawTouchEvent::down(1, (0.0, 0.0)));
//! assert!(step.touch.is_none());
//! assert!(step.state.is_none());
//!
//! let step = tracker.step(&RawTouchEvent::up(1, (0.0, 0.0)));
//! assert_eq!(step.release.map(|r| r.finger), Some(FingerId(1)));
//! assert!(tracker.current().is_empty());
//! ```

use hashbrown::HashSet;

use crate::event::{Move, RawTouchEvent, Release, Touch};
use crate::finger::{Finger, FingerId, GestureState};

/// Compute the snapshot that follows `state` once `event` is applied.
///
/// Total: releasing or moving an untracked finger returns an equal snapshot,
/// and a repeated down overwrites the finger's position.
pub fn apply(state: &GestureState, event: &RawTouchEvent) -> GestureState {
    match *event {
        RawTouchEvent::FingerDown { id, position } => {
            state.with_finger(id, Finger::new(position))
        }
        RawTouchEvent::FingerUp { id, .. } => state.without_finger(id),
        RawTouchEvent::FingerMove { id, position, .. } => {
            if state.contains(id) {
                state.with_finger(id, Finger::new(position))
            } else {
                state.clone()
            }
        }
    }
}

/// Everything one raw event produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerStep {
    /// The new snapshot, if it differs from the previous one.
    pub state: Option<GestureState>,
    /// A debounced finger-down transition.
    pub touch: Option<Touch>,
    /// A debounced finger-up transition.
    pub release: Option<Release>,
    /// The drag record, for every move event.
    pub moved: Option<Move>,
}

/// Holds the current snapshot and the per-finger pressed flags.
#[derive(Clone, Debug, Default)]
pub struct StateTracker {
    current: GestureState,
    pressed: HashSet<FingerId>,
}

impl StateTracker {
    /// Create a tracker with no fingers down.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot.
    pub fn current(&self) -> &GestureState {
        &self.current
    }

    /// Returns `true` if the tracker considers `id` pressed.
    pub fn is_pressed(&self, id: FingerId) -> bool {
        self.pressed.contains(&id)
    }

    /// Apply one event.
    pub fn step(&mut self, event: &RawTouchEvent) -> TrackerStep {
        let mut out = TrackerStep::default();

        let next = apply(&self.current, event);
        if next != self.current {
            log::trace!("state changed: {} -> {} fingers", self.current.len(), next.len());
            self.current = next.clone();
            out.state = Some(next);
        }

        match *event {
            RawTouchEvent::FingerDown { id, position } => {
                if self.pressed.insert(id) {
                    out.touch = Some(Touch {
                        finger: id,
                        position,
                    });
                } else {
                    log::trace!("ignoring repeated press of {id:?}");
                }
            }
            RawTouchEvent::FingerUp { id, position } => {
                if self.pressed.remove(&id) {
                    out.release = Some(Release {
                        finger: id,
                        position,
                    });
                } else {
                    log::trace!("ignoring release of unpressed {id:?}");
                }
            }
            RawTouchEvent::FingerMove {
                id,
                position,
                delta,
            } => {
                out.moved = Some(Move {
                    finger: id,
                    position,
                    delta,
                });
            }
        }

        out
    }

    /// Forget every finger.
    pub fn reset(&mut self) {
        self.current = GestureState::new();
        self.pressed.clear();
    }
}
