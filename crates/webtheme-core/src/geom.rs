// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`] and [`Size`] are 2D integer (`i32`) types representing pixel
//! positions and extents. A [`Rect`] covers the pixels `pos.0 .. pos.0 + size.0`
//! horizontally and `pos.1 .. pos.1 + size.1` vertically; the far edges are
//! exclusive. Surface coordinates address pixels directly: `Coord(x, y)` is
//! the pixel whose center lies at `(x + 0.5, y + 0.5)`.
//!
//! Arithmetic between these types saturates at the `i32` range.

use std::cmp::{Ordering, PartialOrd};

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
        }

        impl PartialOrd for $T {
            fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                let xord = self.0.cmp(&rhs.0);
                let yord = self.1.cmp(&rhs.1);
                if xord == yord { Some(xord) } else { None }
            }

            #[inline]
            fn lt(&self, rhs: &Self) -> bool {
                self.0 < rhs.0 && self.1 < rhs.1
            }

            #[inline]
            fn le(&self, rhs: &Self) -> bool {
                self.0 <= rhs.0 && self.1 <= rhs.1
            }

            #[inline]
            fn ge(&self, rhs: &Self) -> bool {
                self.0 >= rhs.0 && self.1 >= rhs.1
            }

            #[inline]
            fn gt(&self, rhs: &Self) -> bool {
                self.0 > rhs.0 && self.1 > rhs.1
            }
        }

        impl From<(i32, i32)> for $T {
            #[inline]
            fn from(v: (i32, i32)) -> Self {
                Self(v.0, v.1)
            }
        }

        impl From<$T> for (i32, i32) {
            #[inline]
            fn from(v: $T) -> Self {
                (v.0, v.1)
            }
        }
    };
}

/// A 2D pixel position
///
/// `Coord` implements [`PartialOrd`] such that the comparison must be true of
/// all components: for example `a < b == a.0 < b.0 && a.1 < b.1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl Coord {
    /// Construct
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Size) -> Self {
        Self(self.0.saturating_add(rhs.0), self.1.saturating_add(rhs.1))
    }
}

impl std::ops::Sub<Size> for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Size) -> Self {
        Self(self.0.saturating_sub(rhs.0), self.1.saturating_sub(rhs.1))
    }
}

impl std::ops::Sub for Coord {
    type Output = Size;

    #[inline]
    fn sub(self, rhs: Self) -> Size {
        Size(self.0.saturating_sub(rhs.0), self.1.saturating_sub(rhs.1))
    }
}

/// A 2D pixel extent
///
/// Sizes are expected to be non-negative; [`Rect`] treats a non-positive
/// component as empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// Construct
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self(w, h)
    }

    /// Construct, using the same value on all axes
    #[inline]
    pub const fn splat(n: i32) -> Self {
        Self(n, n)
    }

    /// The smaller of the two components
    #[inline]
    pub fn min_comp(self) -> i32 {
        self.0.min(self.1)
    }

    /// True if either component is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 <= 0 || self.1 <= 0
    }
}

impl std::ops::Add for Size {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0), self.1.saturating_add(rhs.1))
    }
}

impl std::ops::Sub for Size {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0), self.1.saturating_sub(rhs.1))
    }
}

impl std::ops::Div<i32> for Size {
    type Output = Self;

    #[inline]
    fn div(self, x: i32) -> Self {
        Size(self.0 / x, self.1 / x)
    }
}

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`. It is empty
/// unless `size` is positive on both axes.
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

    /// Construct from edge coordinates
    ///
    /// `right` and `bottom` are exclusive. If `right < left` or
    /// `bottom < top` the corresponding extent is clamped to zero.
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let size = Size(
            right.saturating_sub(left).max(0),
            bottom.saturating_sub(top).max(0),
        );
        Rect::new(Coord(left, top), size)
    }

    /// Construct from two coords
    ///
    /// It is expected that `pos <= pos2`; otherwise the extent is clamped to
    /// zero.
    #[inline]
    pub fn from_coords(pos: Coord, pos2: Coord) -> Self {
        Rect::from_ltrb(pos.0, pos.1, pos2.0, pos2.1)
    }

    /// Get the second point (pos + size), exclusive
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }

    /// Clamp `size` so that it is non-negative and `pos2` is representable
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn clamp_size(&self) -> Rect {
        let max = Size(
            i32::MAX.saturating_sub(self.pos.0),
            i32::MAX.saturating_sub(self.pos.1),
        );
        Rect::new(self.pos, self.size.max(Size::ZERO).min(max))
    }

    /// True if the rect covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check whether the given coordinate is contained within this rect
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.0 >= self.pos.0
            && c.0 < self.pos.0.saturating_add(self.size.0)
            && c.1 >= self.pos.1
            && c.1 < self.pos.1.saturating_add(self.size.1)
    }

    /// Calculate the intersection of two rects
    ///
    /// Returns `None` if the result would not cover any pixels.
    #[inline]
    pub fn intersection(&self, rhs: &Rect) -> Option<Rect> {
        let (l1, l2) = (self.pos, self.pos2());
        let (r1, r2) = (rhs.pos, rhs.pos2());
        let pos = l1.max(r1);
        let pos2 = l2.min(r2);
        if pos < pos2 {
            Some(Rect::new(pos, pos2 - pos))
        } else {
            None
        }
    }

    /// Shrink self in all directions by the given `n`
    ///
    /// The result may be empty (non-positive size).
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn shrink(&self, n: i32) -> Rect {
        let pos = self.pos + Size::splat(n);
        let size = self.size - Size::splat(n) - Size::splat(n);
        Rect { pos, size }
    }

    /// Construct a rect of the given size, centered within self
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn center_rect(&self, size: Size) -> Rect {
        let pos = self.pos + (self.size - size) / 2;
        Rect { pos, size }
    }
}
