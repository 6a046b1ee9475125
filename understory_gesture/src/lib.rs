// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: tap, long-press, pinch, and twist recognition from raw multi-touch input.
//!
//! ## Overview
//!
//! This crate turns a stream of per-finger down/up/drag events into higher-level gestures.
//! It is platform-agnostic: the host delivers [`RawTouchEvent`]s stamped with its monotonic clock,
//! arms a single one-shot timer when asked, and forwards the recognized gestures wherever it likes.
//!
//! ## Pipeline
//!
//! 1) Track: [`StateTracker`] folds events into [`GestureState`] snapshots (which fingers are down,
//!    and where) and derives debounced [`Touch`] / [`Release`] transitions plus [`Move`] records.
//! 2) Race: [`tap::TapRecognizer`] and [`long_press::LongPressRecognizer`] open one race per touch.
//!    A race ends on the first of: release of the same finger, drift beyond a distance bound,
//!    or its deadline.
//! 3) Compare: [`pinch::PinchRecognizer`] and [`twist::TwistRecognizer`] look at consecutive
//!    snapshots and report the change in spread and the mean rotation about the centroid.
//! 4) Deliver: [`GestureController`] wires it all together and pushes results into a
//!    [`GestureSink`], one method per channel.
//!
//! The recognizers are independent: nothing one of them decides affects another.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_gesture::{GestureController, GestureQueue, RawTouchEvent};
//!
//! let ms = Duration::from_millis;
//! let mut controller = GestureController::default();
//! let mut out = GestureQueue::new();
//!
//! // Two fingers go down, then spread apart.
//! controller.handle(&RawTouchEvent::down(1, (0.0, 0.0)), ms(0), &mut out);
//! controller.handle(&RawTouchEvent::down(2, (10.0, 0.0)), ms(5), &mut out);
//! controller.handle(&RawTouchEvent::drag(2, (30.0, 0.0), (20.0, 0.0)), ms(21), &mut out);
//!
//! assert_eq!(out.pinches.len(), 1);
//! assert!(out.pinches[0].factor > 0.0);
//! ```
//!
//! ## Timing
//!
//! Time is a [`Duration`](core::time::Duration) since an epoch of the host's choosing.
//! Before an event stamped `t` is applied, every deadline at or before `t` fires, so a release that
//! lands exactly on the tap deadline is too late, and a long press whose deadline equals the release
//! time is recognized.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod event;
mod finger;
mod gesture;
pub mod long_press;
pub mod pinch;
mod race;
pub mod tap;
mod tracker;
pub mod twist;

pub use config::{ConfigError, GestureConfig};
pub use controller::GestureController;
pub use event::{Move, RawTouchEvent, Release, Touch};
pub use finger::{Finger, FingerId, GestureState, centroid};
pub use gesture::{Gesture, GestureQueue, GestureSink, LongPress, Pinch, Tap, Twist};
pub use race::PendingRace;
pub use tracker::{StateTracker, TrackerStep, apply};
