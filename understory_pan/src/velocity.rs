// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction-constrained release velocity.

use kurbo::Vec2;

use crate::direction::Directions;

/// Zeroes velocity components that point in a disallowed direction.
///
/// A component survives only if it is strictly negative with `LEFT`/`UP`
/// allowed, or strictly positive with `RIGHT`/`DOWN` allowed. An exactly zero
/// component is always zero.
#[must_use]
pub fn clamp_velocity(velocity: Vec2, directions: Directions) -> Vec2 {
    let keep_x = (directions.contains(Directions::LEFT) && velocity.x < 0.0)
        || (directions.contains(Directions::RIGHT) && velocity.x > 0.0);
    let keep_y = (directions.contains(Directions::UP) && velocity.y < 0.0)
        || (directions.contains(Directions::DOWN) && velocity.y > 0.0);
    Vec2::new(
        if keep_x { velocity.x } else { 0.0 },
        if keep_y { velocity.y } else { 0.0 },
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::clamp_velocity;
    use crate::direction::Directions;

    #[test]
    fn empty_set_is_always_zero() {
        for v in [
            Vec2::new(900.0, -100.0),
            Vec2::new(-1.0, 1.0),
            Vec2::ZERO,
        ] {
            assert_eq!(clamp_velocity(v, Directions::empty()), Vec2::ZERO);
        }
    }

    #[test]
    fn keeps_only_allowed_signs() {
        let v = Vec2::new(-300.0, 200.0);
        assert_eq!(clamp_velocity(v, Directions::LEFT), Vec2::new(-300.0, 0.0));
        assert_eq!(clamp_velocity(v, Directions::RIGHT), Vec2::ZERO);
        assert_eq!(clamp_velocity(v, Directions::DOWN), Vec2::new(0.0, 200.0));
        assert_eq!(clamp_velocity(v, Directions::UP), Vec2::ZERO);
        assert_eq!(clamp_velocity(v, Directions::ALL), v);
    }

    #[test]
    fn zero_component_stays_zero() {
        let v = Vec2::new(0.0, -0.0);
        let out = clamp_velocity(v, Directions::ALL);
        assert_eq!(out, Vec2::ZERO);
        assert!(out.y.is_sign_positive());
    }
}
