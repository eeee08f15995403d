// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismiss thresholds and partial overrides.

use kurbo::Size;

/// Default velocity magnitude past which a release dismisses, in units per second.
pub const DEFAULT_DISMISS_VELOCITY: f64 = 750.0;

/// Fully resolved dismiss thresholds.
///
/// All components are non-negative. Negative and NaN inputs are normalized to
/// `0.0`, which makes the corresponding criterion trigger on any movement
/// past rest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawThreshold"))]
pub struct DismissThreshold {
    /// Velocity magnitude (after direction clamping) past which the view is dismissed.
    pub velocity: f64,
    /// Horizontal translation past which the view is dismissed.
    pub x: f64,
    /// Vertical translation past which the view is dismissed.
    pub y: f64,
}

impl DismissThreshold {
    /// Creates thresholds from explicit values.
    #[must_use]
    pub fn new(velocity: f64, x: f64, y: f64) -> Self {
        Self {
            velocity: non_negative(velocity),
            x: non_negative(x),
            y: non_negative(y),
        }
    }

    /// Default thresholds for a screen of the given size.
    ///
    /// Velocity is [`DEFAULT_DISMISS_VELOCITY`]; the translation thresholds are
    /// a quarter of the screen width and height.
    #[must_use]
    pub fn for_screen(screen: Size) -> Self {
        Self::new(
            DEFAULT_DISMISS_VELOCITY,
            screen.width / 4.0,
            screen.height / 4.0,
        )
    }

    /// Returns these thresholds with any fields set in `overrides` replaced.
    #[must_use]
    pub fn with_overrides(self, overrides: ThresholdOverride) -> Self {
        overrides.resolve(self)
    }
}

// Deserialized thresholds go through `DismissThreshold::new` like any other.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawThreshold {
    velocity: f64,
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl From<RawThreshold> for DismissThreshold {
    fn from(raw: RawThreshold) -> Self {
        Self::new(raw.velocity, raw.x, raw.y)
    }
}

/// Partial thresholds; unset fields fall back to a [`DismissThreshold`].
///
/// ```
/// use kurbo::Size;
/// use understory_pan::{DismissThreshold, ThresholdOverride};
///
/// let defaults = DismissThreshold::for_screen(Size::new(400.0, 800.0));
/// let t = ThresholdOverride::default().with_y(120.0).resolve(defaults);
/// assert_eq!(t, DismissThreshold::new(750.0, 100.0, 120.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThresholdOverride {
    /// Overrides [`DismissThreshold::velocity`].
    pub velocity: Option<f64>,
    /// Overrides [`DismissThreshold::x`].
    pub x: Option<f64>,
    /// Overrides [`DismissThreshold::y`].
    pub y: Option<f64>,
}

impl ThresholdOverride {
    /// Sets the velocity override.
    #[must_use]
    pub const fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Sets the horizontal translation override.
    #[must_use]
    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Sets the vertical translation override.
    #[must_use]
    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Returns `true` if no field is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.velocity.is_none() && self.x.is_none() && self.y.is_none()
    }

    /// Merges the set fields over `defaults`.
    #[must_use]
    pub fn resolve(self, defaults: DismissThreshold) -> DismissThreshold {
        DismissThreshold::new(
            self.velocity.unwrap_or(defaults.velocity),
            self.x.unwrap_or(defaults.x),
            self.y.unwrap_or(defaults.y),
        )
    }
}

fn non_negative(value: f64) -> f64 {
    // Also maps NaN to zero.
    if value > 0.0 { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{DEFAULT_DISMISS_VELOCITY, DismissThreshold, ThresholdOverride};

    #[test]
    fn screen_defaults_use_quarter_extents() {
        let t = DismissThreshold::for_screen(Size::new(360.0, 800.0));
        assert_eq!(t.velocity, DEFAULT_DISMISS_VELOCITY);
        assert_eq!(t.x, 90.0);
        assert_eq!(t.y, 200.0);
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let defaults = DismissThreshold::new(500.0, 10.0, 20.0);
        let ov = ThresholdOverride::default();
        assert!(ov.is_empty());
        assert_eq!(defaults.with_overrides(ov), defaults);
    }

    #[test]
    fn override_replaces_only_set_fields() {
        let defaults = DismissThreshold::new(500.0, 10.0, 20.0);
        let t = defaults.with_overrides(ThresholdOverride::default().with_velocity(1200.0));
        assert_eq!(t, DismissThreshold::new(1200.0, 10.0, 20.0));

        let t = defaults.with_overrides(ThresholdOverride::default().with_x(0.0).with_y(64.0));
        assert_eq!(t, DismissThreshold::new(500.0, 0.0, 64.0));
    }

    #[test]
    fn negative_and_nan_normalize_to_zero() {
        let t = DismissThreshold::new(-1.0, f64::NAN, -0.0);
        assert_eq!(t, DismissThreshold::new(0.0, 0.0, 0.0));
        assert!(t.y.is_sign_positive());

        let t = DismissThreshold::new(1.0, 1.0, 1.0)
            .with_overrides(ThresholdOverride::default().with_velocity(-5.0));
        assert_eq!(t.velocity, 0.0);
    }
}
