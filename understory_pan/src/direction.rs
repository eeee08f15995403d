// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan directions and the set of directions a gesture may move in.

use core::fmt;
use core::str::FromStr;

/// A single direction a view can be dragged in.
///
/// Directions are expressed in view space: `Up` is towards negative y and
/// `Left` is towards negative x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Lowercase name of this direction (`"up"`, `"down"`, `"left"`, `"right"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The direction pointing the other way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns `true` for `Left` and `Right`.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of `up`, `down`, `left`, `right`")
    }
}

impl core::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(ParseDirectionError)
    }
}

bitflags::bitflags! {
    /// Set of directions a pan gesture is allowed to move in.
    ///
    /// Each axis is constrained independently:
    /// - both directions of an axis set: the axis moves freely;
    /// - one direction set: the axis can only move to that side of its rest position;
    /// - neither set: the axis never moves.
    ///
    /// The empty set is valid and pins the view in place.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// Allow movement towards negative y.
        const UP    = 0b0000_0001;
        /// Allow movement towards positive y.
        const DOWN  = 0b0000_0010;
        /// Allow movement towards negative x.
        const LEFT  = 0b0000_0100;
        /// Allow movement towards positive x.
        const RIGHT = 0b0000_1000;

        /// Free horizontal movement.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Free vertical movement.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// Free movement on both axes.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Directions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Directions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Directions {
    /// Returns `true` if movement in `direction` is allowed.
    #[must_use]
    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    /// The single-flag set for `direction`.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, d| set | Self::from_direction(d))
    }
}

impl Extend<Direction> for Directions {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, iter: I) {
        for d in iter {
            self.insert(Self::from_direction(d));
        }
    }
}
