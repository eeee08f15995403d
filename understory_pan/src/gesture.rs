// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture helper: keep a view's offset across gestures and decide on release.
//!
//! ## Usage
//!
//! 1) Configure a [`PanGesture`] with the allowed [`Directions`] and a [`DismissThreshold`].
//! 2) Call [`PanGesture::begin`] when the recognizer reports the gesture started.
//! 3) On each update, call [`PanGesture::update`] and apply the returned offset to the view.
//! 4) On release, call [`PanGesture::end`]. On [`Dismissal::Stay`] the host usually
//!    springs the view back and then calls [`PanGesture::reset`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Size, Vec2};
//! use understory_pan::{Directions, DismissThreshold, PanGesture, PanSample};
//!
//! let threshold = DismissThreshold::for_screen(Size::new(400.0, 800.0));
//! let mut pan = PanGesture::new(Directions::DOWN, threshold);
//!
//! pan.begin();
//! // Dragging up is not allowed for a pull-down sheet.
//! assert_eq!(pan.update(PanSample::new(Vec2::new(5.0, -20.0), Vec2::ZERO)), Vec2::ZERO);
//! assert_eq!(pan.update(PanSample::new(Vec2::new(5.0, 60.0), Vec2::ZERO)), Vec2::new(0.0, 60.0));
//!
//! // Released slowly, not far enough.
//! let outcome = pan.end(PanSample::new(Vec2::new(5.0, 60.0), Vec2::new(0.0, 40.0)));
//! assert!(!outcome.is_dismiss());
//! assert_eq!(pan.offset(), Vec2::new(0.0, 60.0));
//! ```

use kurbo::Vec2;

use crate::direction::Directions;
use crate::dismiss::{Dismissal, PanSample, evaluate_dismiss};
use crate::threshold::DismissThreshold;
use crate::translation::{TranslationOptions, clamp_translation};

/// Tracks a view's pan offset across gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    /// Directions the view may move in.
    pub directions: Directions,
    /// Restrict each gesture to a single axis.
    pub direction_lock: bool,
    /// Thresholds used on release.
    pub threshold: DismissThreshold,
    offset: Vec2,
    start: Option<Vec2>,
}

impl PanGesture {
    /// Creates a tracker at rest.
    #[must_use]
    pub const fn new(directions: Directions, threshold: DismissThreshold) -> Self {
        Self {
            directions,
            direction_lock: false,
            threshold,
            offset: Vec2::ZERO,
            start: None,
        }
    }

    /// Returns a copy with the axis lock set to `lock`.
    #[must_use]
    pub const fn with_direction_lock(mut self, lock: bool) -> Self {
        self.direction_lock = lock;
        self
    }

    /// Current offset of the view.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns `true` between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Starts a gesture from the current offset.
    pub fn begin(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(offset = ?self.offset, "pan began");
        self.start = Some(self.offset);
    }

    /// Applies a gesture sample and returns the new offset.
    ///
    /// A sample arriving before [`begin`](Self::begin) starts the gesture.
    pub fn update(&mut self, sample: PanSample) -> Vec2 {
        let start = *self.start.get_or_insert(self.offset);
        self.offset = clamp_translation(
            sample.translation,
            start,
            self.directions,
            self.options(),
        );
        self.offset
    }

    /// Ends the gesture and decides whether the view is dismissed.
    ///
    /// The offset is left as is so the host can animate from it.
    pub fn end(&mut self, sample: PanSample) -> Dismissal {
        self.start = None;
        let outcome = evaluate_dismiss(sample, self.directions, self.options(), self.threshold);
        #[cfg(feature = "tracing")]
        tracing::trace!(offset = ?self.offset, ?outcome, "pan ended");
        outcome
    }

    /// Sets the offset, e.g. while the host animates the view.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Returns the view to rest and cancels any active gesture.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.start = None;
    }

    fn options(&self) -> TranslationOptions {
        TranslationOptions {
            current: self.offset,
            direction_lock: self.direction_lock,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::PanGesture;
    use crate::direction::Directions;
    use crate::dismiss::{DepartureVelocity, Dismissal, PanSample};
    use crate::threshold::DismissThreshold;

    fn sample(tx: f64, ty: f64) -> PanSample {
        PanSample::new(Vec2::new(tx, ty), Vec2::ZERO)
    }

    fn gesture(directions: Directions) -> PanGesture {
        PanGesture::new(directions, DismissThreshold::for_screen(Size::new(400.0, 800.0)))
    }

    #[test]
    fn new_gesture_is_at_rest() {
        let pan = gesture(Directions::ALL);
        assert!(!pan.is_active());
        assert_eq!(pan.offset(), Vec2::ZERO);
    }

    #[test]
    fn second_gesture_starts_from_previous_offset() {
        let mut pan = gesture(Directions::ALL);
        pan.begin();
        pan.update(sample(30.0, 10.0));
        assert_eq!(pan.end(sample(30.0, 10.0)), Dismissal::Stay);

        pan.begin();
        assert!(pan.is_active());
        assert_eq!(pan.update(sample(-5.0, 5.0)), Vec2::new(25.0, 15.0));
    }

    #[test]
    fn update_before_begin_starts_gesture() {
        let mut pan = gesture(Directions::RIGHT);
        pan.set_offset(Vec2::new(10.0, 0.0));
        assert_eq!(pan.update(sample(-4.0, 0.0)), Vec2::new(6.0, 0.0));
        assert!(pan.is_active());
        assert_eq!(pan.update(sample(-40.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn locks_to_first_axis_in_motion() {
        let mut pan = gesture(Directions::ALL).with_direction_lock(true);
        pan.begin();
        assert_eq!(pan.update(sample(8.0, 3.0)), Vec2::new(8.0, 0.0));
        // Now moving in x: y stays pinned even when it dominates.
        assert_eq!(pan.update(sample(9.0, 50.0)), Vec2::new(9.0, 0.0));
    }

    #[test]
    fn release_past_threshold_dismisses() {
        let mut pan = gesture(Directions::DOWN);
        pan.begin();
        pan.update(sample(0.0, 260.0));
        let outcome = pan.end(sample(0.0, 260.0));
        assert_eq!(
            outcome,
            Dismissal::Dismiss(DepartureVelocity {
                x: None,
                y: Some(750.0)
            })
        );
        assert!(!pan.is_active());
        assert_eq!(pan.offset(), Vec2::new(0.0, 260.0));

        pan.reset();
        assert_eq!(pan.offset(), Vec2::ZERO);
    }
}
