// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan --heading-base-level=0

//! Understory Pan: headless math for draggable and swipe-to-dismiss views.
//!
//! This crate computes, from a continuous drag gesture:
//! - a clamped 2D offset for the dragged view, restricted to a set of allowed
//!   [`Directions`] and optionally locked to a single axis;
//! - on release, whether the view should be dismissed, and the
//!   [`DepartureVelocity`] to start its exit animation with.
//!
//! It does **not** recognize gestures, animate, or render. Callers are
//! expected to:
//! - Feed translation and velocity from their gesture recognizer as
//!   [`PanSample`] values (both relative to the gesture's start).
//! - Own the view's accumulated offset and pass it in through
//!   [`TranslationOptions`], or let [`PanGesture`] hold it.
//! - Supply display metrics to [`DismissThreshold::for_screen`].
//!
//! ## Dragging
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_pan::{Directions, TranslationOptions, clamp_translation};
//!
//! // A card that can be swiped horizontally, one axis at a time.
//! let options = TranslationOptions::default().with_direction_lock(true);
//! let offset = clamp_translation(
//!     Vec2::new(-40.0, 12.0),
//!     Vec2::ZERO,
//!     Directions::HORIZONTAL,
//!     options,
//! );
//! assert_eq!(offset, Vec2::new(-40.0, 0.0));
//! ```
//!
//! ## Releasing
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_pan::{
//!     Direction, Directions, DismissThreshold, Dismissal, PanSample,
//!     ThresholdOverride, TranslationOptions, evaluate_dismiss,
//! };
//!
//! let directions: Directions = [Direction::Left, Direction::Right].into_iter().collect();
//! let threshold = DismissThreshold::for_screen(Size::new(400.0, 800.0))
//!     .with_overrides(ThresholdOverride::default().with_velocity(600.0));
//!
//! // A quick flick to the left.
//! let sample = PanSample::new(Vec2::new(-30.0, 0.0), Vec2::new(-900.0, 100.0));
//! let options = TranslationOptions::new(Vec2::new(-30.0, 0.0));
//!
//! match evaluate_dismiss(sample, directions, options, threshold) {
//!     Dismissal::Dismiss(velocity) => assert_eq!(velocity.to_vec2(), Vec2::new(-900.0, 100.0)),
//!     Dismissal::Stay => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: serialize [`Direction`], [`Directions`], [`DismissThreshold`],
//!   and [`ThresholdOverride`].
//! - `tracing`: emit `trace!` events for gesture begin/end and dismiss decisions.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod direction;
pub mod dismiss;
pub mod gesture;
pub mod threshold;
pub mod translation;
pub mod velocity;

pub use direction::{Direction, Directions, ParseDirectionError};
pub use dismiss::{
    DepartureVelocity, DismissCriteria, Dismissal, PanSample, dismiss_criteria, evaluate_dismiss,
    evaluate_dismiss_with,
};
pub use gesture::PanGesture;
pub use threshold::{DEFAULT_DISMISS_VELOCITY, DismissThreshold, ThresholdOverride};
pub use translation::{TranslationOptions, apply_direction_lock, clamp_translation};
pub use velocity::clamp_velocity;
