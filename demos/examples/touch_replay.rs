// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a scripted touch session through `understory_gesture`.
//!
//! This example plays the host's part:
//! - it feeds timestamped raw events to a `GestureController`,
//! - it fires the controller's one-shot timer whenever `next_deadline` comes
//!   due before the next event,
//! - it prints every gesture pushed into its sink.
//!
//! Run:
//! - `RUST_LOG=understory_gesture=debug cargo run -p understory_gesture_demos --example touch_replay`

use std::time::Duration;

use kurbo::Point;
use understory_gesture::{
    GestureConfig, GestureController, GestureSink, LongPress, Pinch, RawTouchEvent, Tap, Twist,
};

/// Prints each channel with the time it fired at.
struct Printer {
    now: Duration,
}

impl GestureSink for Printer {
    fn tap(&mut self, tap: Tap) {
        println!("{:>6?}  tap        {:?} at {}", self.now, tap.finger, fmt(tap.position));
    }

    fn long_press(&mut self, long_press: LongPress) {
        println!(
            "{:>6?}  long press {:?} at {}",
            self.now,
            long_press.finger,
            fmt(long_press.position)
        );
    }

    fn pinch(&mut self, pinch: Pinch) {
        println!(
            "{:>6?}  pinch      {:+.2} ({} fingers about {})",
            self.now,
            pinch.factor,
            pinch.fingers,
            fmt(pinch.position)
        );
    }

    fn twist(&mut self, twist: Twist) {
        println!(
            "{:>6?}  twist      {:+.1}° ({} fingers about {})",
            self.now,
            twist.angle.to_degrees(),
            twist.fingers,
            fmt(twist.position)
        );
    }
}

fn fmt(p: Point) -> String {
    format!("({:.0}, {:.0})", p.x, p.y)
}

/// A two-finger quarter turn about `center`, in `steps` drags per finger.
fn rotation(center: Point, radius: f64, start_ms: u64, steps: u32) -> Vec<(u64, RawTouchEvent)> {
    let mut script = Vec::new();
    let mut previous = [center + (-radius, 0.0), center + (radius, 0.0)];
    for step in 1..=steps {
        let theta = std::f64::consts::FRAC_PI_2 * f64::from(step) / f64::from(steps);
        let offset = (radius * theta.cos(), radius * theta.sin());
        let next = [
            center - kurbo::Vec2::from(offset),
            center + kurbo::Vec2::from(offset),
        ];
        for ((id, lag), (from, to)) in [(10, 0), (11, 8)].into_iter().zip(previous.iter().zip(next)) {
            let t = start_ms + u64::from(step) * 16 + lag;
            script.push((t, RawTouchEvent::drag(id, to, to - *from)));
        }
        previous = next;
    }
    script
}

fn main() {
    env_logger::init();

    let mut script: Vec<(u64, RawTouchEvent)> = vec![
        // A quick tap.
        (0, RawTouchEvent::down(1, (100.0, 100.0))),
        (90, RawTouchEvent::up(1, (102.0, 101.0))),
        // A press that slides away: neither tap nor long press.
        (400, RawTouchEvent::down(2, (200.0, 200.0))),
        (450, RawTouchEvent::drag(2, (260.0, 200.0), (60.0, 0.0))),
        (520, RawTouchEvent::up(2, (260.0, 200.0))),
        // A held press.
        (1000, RawTouchEvent::down(3, (50.0, 300.0))),
        (2000, RawTouchEvent::up(3, (51.0, 300.0))),
        // Two fingers spread apart.
        (3000, RawTouchEvent::down(4, (140.0, 400.0))),
        (3004, RawTouchEvent::down(5, (160.0, 400.0))),
        (3020, RawTouchEvent::drag(5, (180.0, 400.0), (20.0, 0.0))),
        (3036, RawTouchEvent::drag(4, (120.0, 400.0), (-20.0, 0.0))),
        (3100, RawTouchEvent::up(4, (120.0, 400.0))),
        (3104, RawTouchEvent::up(5, (180.0, 400.0))),
        // Two fingers turning.
        (4000, RawTouchEvent::down(10, (260.0, 500.0))),
        (4004, RawTouchEvent::down(11, (340.0, 500.0))),
    ];
    script.extend(rotation(Point::new(300.0, 500.0), 40.0, 4004, 6));
    script.push((4200, RawTouchEvent::up(10, (300.0, 460.0))));
    script.push((4204, RawTouchEvent::up(11, (300.0, 540.0))));

    let mut controller = match GestureController::try_new(GestureConfig::default()) {
        Ok(controller) => controller,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };
    let mut printer = Printer {
        now: Duration::ZERO,
    };

    for (t, event) in script {
        let at = Duration::from_millis(t);
        // Fire the host timer on time if it comes due before this event.
        while let Some(deadline) = controller.next_deadline().filter(|d| *d <= at) {
            printer.now = deadline;
            controller.advance(deadline, &mut printer);
        }
        printer.now = at;
        controller.handle(&event, at, &mut printer);
    }

    controller.teardown();
    println!("torn down: {}", controller.is_torn_down());
}
