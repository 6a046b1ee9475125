// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root: raw events in, gestures out.
//!
//! [`GestureController`] owns the [`StateTracker`] and the four recognizers
//! and drives them from two entry points:
//!
//! - [`GestureController::handle`] for every raw event, stamped with the
//!   host's monotonic clock;
//! - [`GestureController::advance`] when the host's timer fires.
//!
//! The host arms a single one-shot timer for
//! [`GestureController::next_deadline`] after each call. Races that resolve
//! drop out of the deadline immediately, so a stale timer at worst finds
//! nothing to do.
//!
//! ## Ordering
//!
//! Before an event stamped `t` is applied, every timer due at or before `t`
//! fires. Then the snapshot is updated (pinch and twist steps are pushed)
//! and finally the touch/release/move transition reaches the tap and
//! long-press races.
//!
//! ```
//! use core::time::Duration;
//! use understory_gesture::{GestureConfig, GestureController, GestureQueue, RawTouchEvent};
//!
//! let ms = Duration::from_millis;
//! let mut controller = GestureController::new(GestureConfig::default());
//! let mut out = GestureQueue::new();
//!
//! controller.handle(&RawTouchEvent::down(1, (0.0, 0.0)), ms(0), &mut out);
//! controller.handle(&RawTouchEvent::up(1, (0.0, 0.0)), ms(100), &mut out);
//! assert_eq!(out.taps.len(), 1);
//!
//! controller.handle(&RawTouchEvent::down(2, (50.0, 50.0)), ms(1000), &mut out);
//! // The tap window closes first, then the long press is due.
//! assert_eq!(controller.next_deadline(), Some(ms(1200)));
//! controller.advance(ms(1200), &mut out);
//! assert_eq!(controller.next_deadline(), Some(ms(1750)));
//! controller.advance(ms(1750), &mut out);
//! assert_eq!(out.long_presses.len(), 1);
//! ```

use core::time::Duration;

use crate::config::{ConfigError, GestureConfig};
use crate::event::RawTouchEvent;
use crate::finger::GestureState;
use crate::gesture::GestureSink;
use crate::long_press::LongPressRecognizer;
use crate::pinch::PinchRecognizer;
use crate::race::PendingRace;
use crate::tap::TapRecognizer;
use crate::tracker::StateTracker;
use crate::twist::TwistRecognizer;

/// Turns raw touch events into taps, long presses, pinches, and twists.
#[derive(Clone, Debug)]
pub struct GestureController {
    config: GestureConfig,
    tracker: StateTracker,
    taps: TapRecognizer,
    long_presses: LongPressRecognizer,
    pinches: PinchRecognizer,
    twists: TwistRecognizer,
    /// Latest time seen; the clock never runs backwards.
    now: Duration,
    torn_down: bool,
}

impl GestureController {
    /// Create a controller with `config`, unchecked.
    ///
    /// Use [`GestureController::try_new`] for thresholds that come from
    /// outside the program.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracker: StateTracker::new(),
            taps: TapRecognizer::new(config.max_tap_duration, config.max_tap_distance),
            long_presses: LongPressRecognizer::new(
                config.min_long_press_duration,
                config.max_long_press_distance,
            ),
            pinches: PinchRecognizer::new(),
            twists: TwistRecognizer::new(),
            now: Duration::ZERO,
            torn_down: false,
        }
    }

    /// Create a controller after validating `config`.
    pub fn try_new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The thresholds in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The current snapshot of fingers down.
    pub fn state(&self) -> &GestureState {
        self.tracker.current()
    }

    /// Open tap races, oldest first.
    pub fn pending_taps(&self) -> &[PendingRace] {
        self.taps.pending()
    }

    /// Open long-press races, oldest first.
    pub fn pending_long_presses(&self) -> &[PendingRace] {
        self.long_presses.pending()
    }

    /// Earliest time at which [`GestureController::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        match (self.taps.next_deadline(), self.long_presses.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Returns `true` once [`GestureController::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Feed one raw event that happened at `now`.
    pub fn handle(&mut self, event: &RawTouchEvent, now: Duration, sink: &mut impl GestureSink) {
        if self.torn_down {
            log::trace!("dropping {event:?} after teardown");
            return;
        }
        self.advance(now, sink);

        let step = self.tracker.step(event);

        if let Some(state) = &step.state {
            if let Some(pinch) = self.pinches.observe(state) {
                sink.pinch(pinch);
            }
            if let Some(twist) = self.twists.observe(state) {
                sink.twist(twist);
            }
        }

        if let Some(touch) = step.touch {
            self.taps.on_touch(touch, self.now);
            self.long_presses.on_touch(touch, self.now);
        }

        if let Some(release) = &step.release {
            if let Some(tap) = self.taps.on_release(release) {
                log::debug!("tap by {:?} at {:?}", tap.finger, tap.position);
                sink.tap(tap);
            }
            self.long_presses.on_release(release);
        }

        if let Some(moved) = &step.moved {
            self.taps.on_move(moved);
            self.long_presses.on_move(moved);
        }
    }

    /// Let time pass until `now`, firing every timer that is due.
    ///
    /// Times earlier than one already seen are treated as that time.
    pub fn advance(&mut self, now: Duration, sink: &mut impl GestureSink) {
        if self.torn_down {
            return;
        }
        if now < self.now {
            log::trace!("clock went backwards ({now:?} < {:?}), holding", self.now);
        }
        self.now = self.now.max(now);

        // Expired taps produce nothing; they only need closing.
        self.taps.advance(self.now);
        for long_press in self.long_presses.advance(self.now) {
            log::debug!("long press by {:?} at {:?}", long_press.finger, long_press.position);
            sink.long_press(long_press);
        }
    }

    /// Drop every finger and open race, keeping the controller usable.
    ///
    /// Useful when the host loses input focus and will not report the lifts.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.taps.cancel_all();
        self.long_presses.cancel_all();
        self.pinches.reset();
        self.twists.reset();
    }

    /// Stop recognizing for good.
    ///
    /// Every open race resolves to nothing, and later calls to
    /// [`GestureController::handle`] or [`GestureController::advance`] emit
    /// nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        log::debug!(
            "tearing down with {} tap and {} long-press races open",
            self.taps.pending().len(),
            self.long_presses.pending().len()
        );
        self.reset();
        self.torn_down = true;
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
