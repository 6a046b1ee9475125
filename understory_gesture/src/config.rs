// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable recognition thresholds.

use core::time::Duration;

/// Thresholds for the windowed recognizers.
///
/// Distances are in the same units as the positions the host reports
/// (typically logical pixels).
///
/// ```
/// use core::time::Duration;
/// use understory_gesture::GestureConfig;
///
/// let config = GestureConfig::default()
///     .with_max_tap_duration(Duration::from_millis(150))
///     .with_max_tap_distance(12.0);
/// assert!(config.validate().is_ok());
///
/// let broken = GestureConfig::default().with_max_tap_distance(-1.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Longest press-to-release time that still counts as a tap.
    pub max_tap_duration: Duration,
    /// How far a finger may drift from its touch point and still tap.
    pub max_tap_distance: f64,
    /// How long a finger must stay down to count as a long press.
    pub min_long_press_duration: Duration,
    /// How far a finger may drift from its touch point during a long press.
    pub max_long_press_distance: f64,
    /// Reserved for swipe recognition, which is not implemented.
    pub max_swipe_duration: Duration,
    /// Reserved for swipe recognition, which is not implemented.
    pub min_swipe_distance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_tap_duration: Duration::from_millis(200),
            max_tap_distance: 24.0,
            min_long_press_duration: Duration::from_millis(750),
            max_long_press_distance: 24.0,
            max_swipe_duration: Duration::from_millis(500),
            min_swipe_distance: 200.0,
        }
    }
}

/// A threshold that cannot drive recognition.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A duration threshold is zero.
    #[error("`{name}` must be a positive duration")]
    ZeroDuration {
        /// Field name.
        name: &'static str,
    },
    /// A distance threshold is zero, negative, or not finite.
    #[error("`{name}` must be a positive finite distance, got {value}")]
    InvalidDistance {
        /// Field name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl GestureConfig {
    /// Set [`GestureConfig::max_tap_duration`].
    #[must_use]
    pub fn with_max_tap_duration(mut self, duration: Duration) -> Self {
        self.max_tap_duration = duration;
        self
    }

    /// Set [`GestureConfig::max_tap_distance`].
    #[must_use]
    pub fn with_max_tap_distance(mut self, distance: f64) -> Self {
        self.max_tap_distance = distance;
        self
    }

    /// Set [`GestureConfig::min_long_press_duration`].
    #[must_use]
    pub fn with_min_long_press_duration(mut self, duration: Duration) -> Self {
        self.min_long_press_duration = duration;
        self
    }

    /// Set [`GestureConfig::max_long_press_distance`].
    #[must_use]
    pub fn with_max_long_press_distance(mut self, distance: f64) -> Self {
        self.max_long_press_distance = distance;
        self
    }

    /// Check that every threshold is positive (and finite, for distances).
    ///
    /// The reserved swipe thresholds are checked too so a configuration that
    /// validates today keeps validating once they are used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, duration) in [
            ("max_tap_duration", self.max_tap_duration),
            ("min_long_press_duration", self.min_long_press_duration),
            ("max_swipe_duration", self.max_swipe_duration),
        ] {
            if duration.is_zero() {
                return Err(ConfigError::ZeroDuration { name });
            }
        }
        for (name, value) in [
            ("max_tap_distance", self.max_tap_distance),
            ("max_long_press_distance", self.max_long_press_distance),
            ("min_swipe_distance", self.min_swipe_distance),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GestureConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_tap_duration, Duration::from_millis(200));
        assert_eq!(config.min_long_press_duration, Duration::from_millis(750));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let config = GestureConfig::default().with_min_long_press_duration(Duration::ZERO);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration {
                name: "min_long_press_duration"
            })
        );
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        let config = GestureConfig::default().with_max_long_press_distance(f64::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDistance {
                name: "max_long_press_distance",
                ..
            })
        ));
        let config = GestureConfig::default().with_max_tap_distance(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = ConfigError::InvalidDistance {
            name: "max_tap_distance",
            value: -2.0,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "`max_tap_distance` must be a positive finite distance, got -2"
        );
    }
}
