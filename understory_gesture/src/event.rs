// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw touch input and the per-finger records derived from it.

use kurbo::{Point, Vec2};

use crate::finger::FingerId;

/// One low-level touch event supplied by the host.
///
/// Events must be delivered in the order they happened. The host attaches the
/// timestamp when it hands the event to
/// [`GestureController::handle`](crate::GestureController::handle).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RawTouchEvent {
    /// A finger touched the surface.
    FingerDown {
        /// Finger identifier.
        id: FingerId,
        /// Contact position.
        position: Point,
    },
    /// A finger was lifted.
    FingerUp {
        /// Finger identifier.
        id: FingerId,
        /// Position at lift time.
        position: Point,
    },
    /// A finger was dragged.
    FingerMove {
        /// Finger identifier.
        id: FingerId,
        /// New position.
        position: Point,
        /// Movement relative to the previous position reported by the host.
        delta: Vec2,
    },
}

impl RawTouchEvent {
    /// Shorthand for [`RawTouchEvent::FingerDown`].
    pub fn down(id: u32, position: impl Into<Point>) -> Self {
        Self::FingerDown {
            id: FingerId(id),
            position: position.into(),
        }
    }

    /// Shorthand for [`RawTouchEvent::FingerUp`].
    pub fn up(id: u32, position: impl Into<Point>) -> Self {
        Self::FingerUp {
            id: FingerId(id),
            position: position.into(),
        }
    }

    /// Shorthand for [`RawTouchEvent::FingerMove`].
    pub fn drag(id: u32, position: impl Into<Point>, delta: impl Into<Vec2>) -> Self {
        Self::FingerMove {
            id: FingerId(id),
            position: position.into(),
            delta: delta.into(),
        }
    }

    /// The finger this event refers to.
    pub fn finger(&self) -> FingerId {
        match *self {
            Self::FingerDown { id, .. } | Self::FingerUp { id, .. } | Self::FingerMove { id, .. } => {
                id
            }
        }
    }

    /// The position carried by this event.
    pub fn position(&self) -> Point {
        match *self {
            Self::FingerDown { position, .. }
            | Self::FingerUp { position, .. }
            | Self::FingerMove { position, .. } => position,
        }
    }
}

/// A finger went down (first press after a release, or after start).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// Finger identifier.
    pub finger: FingerId,
    /// Contact position.
    pub position: Point,
}

/// A finger went up (first release after a press).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Finger identifier.
    pub finger: FingerId,
    /// Position at lift time.
    pub position: Point,
}

/// A finger was dragged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Move {
    /// Finger identifier.
    pub finger: FingerId,
    /// New position.
    pub position: Point,
    /// Movement relative to the previous report.
    pub delta: Vec2,
}
