// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismiss decision and departure velocity for a released pan gesture.
//!
//! On release, the host hands the final [`PanSample`] to [`evaluate_dismiss`].
//! The view is dismissed if any of three criteria holds:
//!
//! - the direction-clamped release velocity is faster than
//!   [`DismissThreshold::velocity`];
//! - the view's current horizontal translation is past
//!   [`DismissThreshold::x`] on an allowed side;
//! - the view's current vertical translation is past
//!   [`DismissThreshold::y`] on an allowed side.
//!
//! A dismissal carries a [`DepartureVelocity`] for the exit animation. A slow
//! release past a translation threshold still leaves at threshold speed, in
//! the direction of the gesture's translation.

use kurbo::{Size, Vec2};

use crate::direction::Directions;
use crate::threshold::{DismissThreshold, ThresholdOverride};
use crate::translation::TranslationOptions;
use crate::velocity::clamp_velocity;

/// One gesture sample as reported by the host's gesture recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanSample {
    /// Translation since the gesture started.
    pub translation: Vec2,
    /// Instantaneous velocity, in units per second.
    pub velocity: Vec2,
}

impl PanSample {
    /// Creates a sample from a translation and a velocity.
    #[must_use]
    pub const fn new(translation: Vec2, velocity: Vec2) -> Self {
        Self {
            translation,
            velocity,
        }
    }
}

/// Velocity handed to the exit animation of a dismissed view.
///
/// An axis is `None` when no velocity was derived for it, for example the
/// vertical axis of a purely horizontal swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepartureVelocity {
    /// Horizontal velocity, if derived.
    pub x: Option<f64>,
    /// Vertical velocity, if derived.
    pub y: Option<f64>,
}

impl DepartureVelocity {
    /// A departure velocity with both axes set.
    #[must_use]
    pub const fn new(velocity: Vec2) -> Self {
        Self {
            x: Some(velocity.x),
            y: Some(velocity.y),
        }
    }

    /// Converts to a vector, treating unset axes as `0.0`.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

impl From<Vec2> for DepartureVelocity {
    fn from(velocity: Vec2) -> Self {
        Self::new(velocity)
    }
}

/// Outcome of [`evaluate_dismiss`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dismissal {
    /// No threshold was passed; the host should return the view to rest.
    Stay,
    /// Dismiss the view, starting the exit animation with this velocity.
    Dismiss(DepartureVelocity),
}

impl Dismissal {
    /// Returns `true` for [`Dismissal::Dismiss`].
    #[must_use]
    pub const fn is_dismiss(&self) -> bool {
        matches!(self, Self::Dismiss(_))
    }

    /// The departure velocity, if the view is being dismissed.
    #[must_use]
    pub const fn velocity(&self) -> Option<DepartureVelocity> {
        match self {
            Self::Stay => None,
            Self::Dismiss(v) => Some(*v),
        }
    }
}

/// Which dismiss criteria a sample passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DismissCriteria {
    /// The clamped release speed exceeded the velocity threshold.
    pub velocity: bool,
    /// The current horizontal translation exceeded the x threshold on an allowed side.
    pub x: bool,
    /// The current vertical translation exceeded the y threshold on an allowed side.
    pub y: bool,
}

impl DismissCriteria {
    /// Returns `true` if any criterion passed.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.velocity || self.x || self.y
    }

    /// Returns `true` if the velocity criterion passed and neither translation criterion did.
    #[must_use]
    pub const fn velocity_only(&self) -> bool {
        self.velocity && !self.x && !self.y
    }
}

/// Evaluates the three dismiss criteria for a sample.
///
/// Velocity is measured after [`clamp_velocity`], so fast movement in a
/// disallowed direction never counts. Translation is measured on
/// `options.current`, not on the sample.
#[must_use]
pub fn dismiss_criteria(
    sample: PanSample,
    directions: Directions,
    options: TranslationOptions,
    threshold: DismissThreshold,
) -> DismissCriteria {
    let speed = clamp_velocity(sample.velocity, directions).hypot();
    let current = options.current;
    DismissCriteria {
        velocity: speed > threshold.velocity,
        x: (directions.contains(Directions::RIGHT) && current.x > threshold.x)
            || (directions.contains(Directions::LEFT) && -current.x > threshold.x),
        y: (directions.contains(Directions::DOWN) && current.y > threshold.y)
            || (directions.contains(Directions::UP) && -current.y > threshold.y),
    }
}

/// Decides whether a released gesture dismisses the view.
///
/// Returns [`Dismissal::Stay`] when no criterion passes. Otherwise the
/// departure velocity is:
///
/// - the raw sample velocity, if the velocity criterion passed;
/// - else, if both translation components are non-zero, the translation's
///   direction scaled so its dominant axis moves at exactly
///   `threshold.velocity` (an exact tie counts the vertical axis as dominant);
/// - else `threshold.velocity` along the single non-zero translation axis,
///   leaving the other axis unset.
///
/// With `options.direction_lock`, the axis not in motion in
/// `options.current` is then zeroed.
///
/// `threshold` must already be resolved. Use [`evaluate_dismiss_with`] to
/// derive it from the screen size and a [`ThresholdOverride`].
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_pan::{
///     DepartureVelocity, Directions, DismissThreshold, Dismissal, PanSample,
///     TranslationOptions, evaluate_dismiss,
/// };
///
/// let threshold = DismissThreshold::for_screen(Size::new(400.0, 800.0));
/// let sample = PanSample::new(Vec2::new(0.0, 300.0), Vec2::ZERO);
/// let options = TranslationOptions::new(Vec2::new(0.0, 300.0));
///
/// let outcome = evaluate_dismiss(sample, Directions::DOWN, options, threshold);
/// assert_eq!(
///     outcome,
///     Dismissal::Dismiss(DepartureVelocity { x: None, y: Some(750.0) })
/// );
/// ```
#[must_use]
pub fn evaluate_dismiss(
    sample: PanSample,
    directions: Directions,
    options: TranslationOptions,
    threshold: DismissThreshold,
) -> Dismissal {
    let criteria = dismiss_criteria(sample, directions, options, threshold);
    if !criteria.any() {
        #[cfg(feature = "tracing")]
        tracing::trace!(?criteria, "pan released below dismiss thresholds");
        return Dismissal::Stay;
    }

    let speed = threshold.velocity;
    let t = sample.translation;
    let mut departure = if criteria.velocity {
        DepartureVelocity::new(sample.velocity)
    } else if t.x != 0.0 && t.y != 0.0 {
        if t.x.abs() > t.y.abs() {
            DepartureVelocity {
                x: Some(sign(t.x) * speed),
                y: Some(speed * t.y / t.x.abs()),
            }
        } else {
            DepartureVelocity {
                x: Some(speed * t.x / t.y.abs()),
                y: Some(sign(t.y) * speed),
            }
        }
    } else if t.x != 0.0 {
        DepartureVelocity {
            x: Some(sign(t.x) * speed),
            y: None,
        }
    } else {
        DepartureVelocity {
            x: None,
            y: Some(sign(t.y) * speed),
        }
    };

    if options.direction_lock {
        if options.current.x != 0.0 {
            departure.y = Some(0.0);
        } else if options.current.y != 0.0 {
            departure.x = Some(0.0);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(?criteria, ?departure, "pan released past dismiss threshold");
    Dismissal::Dismiss(departure)
}

/// [`evaluate_dismiss`] with thresholds derived from the screen size.
///
/// Fields set in `overrides` replace the defaults of
/// [`DismissThreshold::for_screen`]; pass `ThresholdOverride::default()` to
/// keep them all.
#[must_use]
pub fn evaluate_dismiss_with(
    sample: PanSample,
    directions: Directions,
    options: TranslationOptions,
    screen: Size,
    overrides: ThresholdOverride,
) -> Dismissal {
    let threshold = DismissThreshold::for_screen(screen).with_overrides(overrides);
    evaluate_dismiss(sample, directions, options, threshold)
}

/// `1`, `-1`, or `0` for zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
