// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-constrained translation clamping with optional axis lock.

use kurbo::Vec2;

use crate::direction::Directions;

/// Host-owned translation state read by the clamp and dismiss helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TranslationOptions {
    /// The view's accumulated translation at the time of the call.
    pub current: Vec2,
    /// Restrict movement to a single axis.
    ///
    /// Once [`current`](Self::current) has a non-zero component, movement is
    /// locked to that axis. From rest, the axis with the larger delta wins.
    pub direction_lock: bool,
}

impl TranslationOptions {
    /// Options for a view currently translated by `current`, without axis lock.
    #[must_use]
    pub const fn new(current: Vec2) -> Self {
        Self {
            current,
            direction_lock: false,
        }
    }

    /// Returns a copy with the axis lock set to `lock`.
    #[must_use]
    pub const fn with_direction_lock(mut self, lock: bool) -> Self {
        self.direction_lock = lock;
        self
    }
}

/// Computes the next displayed translation for a gesture sample.
///
/// `delta` is the gesture's translation since it started and `initial` is the
/// view's translation at that moment; hosts that only track a single
/// accumulated offset pass it as both `initial` and `options.current`.
///
/// Each axis of `initial + delta` is then constrained by `directions`:
/// - both directions allowed: passed through unchanged;
/// - only the negative direction (`LEFT`/`UP`): clamped to `<= 0`;
/// - only the positive direction (`RIGHT`/`DOWN`): clamped to `>= 0`;
/// - neither: `0`.
///
/// Finally [`apply_direction_lock`] is applied.
///
/// ```
/// use kurbo::Vec2;
/// use understory_pan::{Directions, TranslationOptions, clamp_translation};
///
/// // A bottom sheet that can only be pulled down.
/// let options = TranslationOptions::default();
/// let t = clamp_translation(Vec2::new(12.0, -40.0), Vec2::ZERO, Directions::DOWN, options);
/// assert_eq!(t, Vec2::ZERO);
///
/// let t = clamp_translation(Vec2::new(12.0, 40.0), Vec2::ZERO, Directions::DOWN, options);
/// assert_eq!(t, Vec2::new(0.0, 40.0));
/// ```
#[must_use]
pub fn clamp_translation(
    delta: Vec2,
    initial: Vec2,
    directions: Directions,
    options: TranslationOptions,
) -> Vec2 {
    let x = clamp_axis(
        initial.x + delta.x,
        directions.contains(Directions::LEFT),
        directions.contains(Directions::RIGHT),
    );
    let y = clamp_axis(
        initial.y + delta.y,
        directions.contains(Directions::UP),
        directions.contains(Directions::DOWN),
    );
    apply_direction_lock(Vec2::new(x, y), options)
}

/// Restricts `translation` to a single axis when `options.direction_lock` is set.
///
/// - `current.x != 0`: keep x, zero y.
/// - otherwise `current.y != 0`: keep y, zero x.
/// - otherwise the axis with the strictly larger magnitude in `translation`
///   wins; an exact tie keeps the vertical axis.
///
/// Without the lock, `translation` is returned unchanged.
#[must_use]
pub fn apply_direction_lock(translation: Vec2, options: TranslationOptions) -> Vec2 {
    if !options.direction_lock {
        return translation;
    }
    let current = options.current;
    if current.x != 0.0 {
        Vec2::new(translation.x, 0.0)
    } else if current.y != 0.0 {
        Vec2::new(0.0, translation.y)
    } else if translation.x.abs() > translation.y.abs() {
        Vec2::new(translation.x, 0.0)
    } else {
        Vec2::new(0.0, translation.y)
    }
}

fn clamp_axis(value: f64, negative: bool, positive: bool) -> f64 {
    match (negative, positive) {
        (true, true) => value,
        (true, false) => value.min(0.0),
        (false, true) => value.max(0.0),
        (false, false) => 0.0,
    }
}
