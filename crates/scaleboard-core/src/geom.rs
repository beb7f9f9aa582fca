// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`], [`Size`] and [`Offset`] are all 2D integer (`i32`) types,
//! representing positions, sizes and translations respectively. [`Rect`]
//! combines a position with a size.
//!
//! Units are whatever the caller uses consistently (usually pixels).
//!
//! Conversions types mostly use [`Cast`] and [`Conv`]. Floating-point values
//! are converted to pixel coordinates with [`round`], which is the one
//! rounding rule used throughout this crate.

use crate::cast::*;
use std::cmp::{Ordering, PartialOrd};
use std::fmt;

/// Round a floating-point value to the nearest integer coordinate
///
/// Ties are rounded away from zero: `round(2.5) == 3`, `round(-2.5) == -3`.
/// Out-of-range values saturate to `i32::MIN` or `i32::MAX`.
#[inline]
pub fn round(x: f64) -> i32 {
    try_round(x).unwrap_or(if x < 0.0 { i32::MIN } else { i32::MAX })
}

/// Round as [`round`], returning `None` if the result is out of range
#[inline]
pub fn try_round(x: f64) -> Option<i32> {
    i32::try_conv_nearest(x).ok()
}

/// A dimension (axis) of a two-dimensional value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// The horizontal extent
    Width,
    /// The vertical extent
    Height,
}

impl Dimension {
    /// The other dimension
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        })
    }
}

macro_rules! impl_common {
    ($T:ty) => {
        impl $T {
            /// The constant `(0, 0)`
            pub const ZERO: Self = Self(0, 0);

            /// Return the minimum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0), self.1.min(other.1))
            }

            /// Return the maximum, componentwise
            #[inline]
            #[must_use = "method does not modify self but returns a new value"]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0), self.1.max(other.1))
            }

            /// Extract one component, based on a dimension
            #[inline]
            pub fn extract(self, dim: Dimension) -> i32 {
                match dim {
                    Dimension::Width => self.0,
                    Dimension::Height => self.1,
                }
            }

            /// Set one component of self, based on a dimension
            #[inline]
            pub fn set_component(&mut self, dim: Dimension, value: i32) {
                match dim {
                    Dimension::Width => self.0 = value,
                    Dimension::Height => self.1 = value,
                }
            }
        }

        impl PartialOrd for $T {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                if self == rhs {
                    Some(Ordering::Equal)
                } else if self.0 <= rhs.0 && self.1 <= rhs.1 {
                    Some(Ordering::Less)
                } else if self.0 >= rhs.0 && self.1 >= rhs.1 {
                    Some(Ordering::Greater)
                } else {
                    None
                }
            }
        }
    };
}

/// A 2D coordinate, also known as a point
///
/// A coordinate (or point) is an absolute position. One cannot add a point to
/// a point. The difference between two points is an [`Offset`].
///
/// `Coord` implements [`PartialOrd`] such that the comparison must be true of
/// all components. `Coord` does not implement [`Ord`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl std::ops::Sub for Coord {
    type Output = Offset;

    #[inline]
    fn sub(self, other: Self) -> Offset {
        Offset(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::Add<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Offset) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}
impl std::ops::Sub<Offset> for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Offset) -> Self {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

/// A 2D size, also known as an extent
///
/// Unlike a layout size, a `Size` passed to the geometry engine is *not*
/// assumed to be valid: operations requiring a scaling basis check
/// [`Size::is_positive`] and report an error otherwise.
///
/// `Size` implements [`PartialOrd`] such that the comparison must be true of
/// all components: `a <= b` iff `a` fits within `b`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// True if both width and height are strictly positive
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    /// True if either width or height is zero
    #[inline]
    pub fn has_zero_extent(self) -> bool {
        self.0 == 0 || self.1 == 0
    }

    /// Convert to floating-point `(width, height)`
    #[inline]
    pub fn as_f64(self) -> (f64, f64) {
        (f64::conv(self.0), f64::conv(self.1))
    }

    /// Multiply both components by `scale`, rounding each
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn scaled(self, scale: f64) -> Size {
        let (w, h) = self.as_f64();
        Size(round(w * scale), round(h * scale))
    }
}

impl Conv<Offset> for Size {
    #[inline]
    fn try_conv(v: Offset) -> Result<Self> {
        debug_assert!(v.0 >= 0 && v.1 >= 0, "Size::conv({v:?}): negative value");
        Ok(Self(v.0, v.1))
    }
}

/// A `(x, y)` offset, also known as a **vector**
///
/// This is a relative position. It can be added to or subtracted from a
/// [`Coord`]; see also [`Rect::checked_translate`]. It can be negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset(pub i32, pub i32);

impl_common!(Offset);

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`, allowing easy
/// translations. It is empty unless `size` is positive on both axes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Coord::ZERO, Size::ZERO);

    /// Construct from a [`Coord`] and [`Size`]
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Construct from components `x, y, width, height`
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect::new(Coord(x, y), Size(w, h))
    }

    /// Construct at the origin with the given size
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Rect::new(Coord::ZERO, size)
    }

    /// Construct from two coords
    ///
    /// It is expected that `pos <= pos2`.
    #[inline]
    pub fn from_coords(pos: Coord, pos2: Coord) -> Self {
        let size = (pos2 - pos).cast();
        Rect { pos, size }
    }

    /// Get the second point (pos + size)
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }

    /// Check whether the given coordinate is contained within this rect
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.0 >= self.pos.0
            && c.0 < self.pos.0 + (self.size.0)
            && c.1 >= self.pos.1
            && c.1 < self.pos.1 + (self.size.1)
    }

    /// Calculate the bounding box of two rects
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn union(&self, rhs: &Rect) -> Rect {
        let pos = self.pos.min(rhs.pos);
        let pos2 = self.pos2().max(rhs.pos2());
        Rect::from_coords(pos, pos2)
    }

    /// Scale position and size by `scale`, rounding each component
    ///
    /// Returns `None` if any component is out of range.
    #[must_use = "method does not modify self but returns a new value"]
    pub fn checked_scaled(&self, scale: f64) -> Option<Rect> {
        let mul = |v: i32| try_round(f64::conv(v) * scale);
        let pos = Coord(mul(self.pos.0)?, mul(self.pos.1)?);
        let size = Size(mul(self.size.0)?, mul(self.size.1)?);
        Some(Rect::new(pos, size))
    }

    /// Translate by `offset`, returning `None` on overflow
    #[must_use = "method does not modify self but returns a new value"]
    pub fn checked_translate(&self, offset: Offset) -> Option<Rect> {
        let x = self.pos.0.checked_add(offset.0)?;
        let y = self.pos.1.checked_add(offset.1)?;
        Some(Rect::new(Coord(x, y), self.size))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rect { pos, size } = self;
        write!(f, "({}, {}; {}x{})", pos.0, pos.1, size.0, size.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_ties_away_from_zero() {
        assert_eq!(round(0.4), 0);
        assert_eq!(round(0.5), 1);
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -3);
        assert_eq!(round(199.99999), 200);
    }

    #[test]
    fn size_order_is_containment() {
        assert!(Size(10, 10) <= Size(10, 20));
        assert!(Size(10, 20) >= Size(5, 20));
        assert!(!(Size(11, 5) <= Size(10, 20)));
        assert_eq!(Size(11, 5).partial_cmp(&Size(10, 20)), None);
    }

    #[test]
    fn rect_union_and_contains() {
        let a = Rect::from_xywh(0, 0, 400, 300);
        let b = Rect::from_xywh(-10, 20, 50, 500);
        let u = a.union(&b);
        assert_eq!(u, Rect::from_xywh(-10, 0, 410, 520));
        assert!(u.contains(Coord(-10, 0)));
        assert!(!u.contains(u.pos2()));
    }

    #[test]
    fn round_out_of_range() {
        assert_eq!(try_round(3.0e9), None);
        assert_eq!(try_round(-2147483648.4), Some(i32::MIN));
        assert_eq!(round(3.0e9), i32::MAX);
        assert_eq!(round(-3.0e9), i32::MIN);
    }

    #[test]
    fn rect_scaled() {
        let r = Rect::from_xywh(10, 15, 50, 25);
        assert_eq!(r.checked_scaled(2.0), Some(Rect::from_xywh(20, 30, 100, 50)));
        assert_eq!(r.checked_scaled(0.5), Some(Rect::from_xywh(5, 8, 25, 13)));
        let far = Rect::from_xywh(1_500_000_000, 0, 10, 10);
        assert_eq!(far.checked_scaled(2.0), None);
    }

    #[test]
    fn rect_translate_overflow() {
        let r = Rect::from_xywh(i32::MAX - 5, 0, 10, 10);
        assert_eq!(r.checked_translate(Offset(5, 1)), Some(Rect::from_xywh(i32::MAX, 1, 10, 10)));
        assert_eq!(r.checked_translate(Offset(6, 0)), None);
    }

    #[test]
    fn extract_by_dimension() {
        let mut s = Size(4, 3);
        assert_eq!(s.extract(Dimension::Width), 4);
        assert_eq!(s.extract(Dimension::Height), 3);
        s.set_component(Dimension::Height.flipped(), 7);
        assert_eq!(s, Size(7, 3));
        assert_eq!(Dimension::Width.to_string(), "width");
    }
}
