// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drawing surface interface

use crate::color::Rgba8Srgb;
use crate::geom::{Coord, Rect, Size};

/// The drawing capability consumed by [`ThemeControl`](crate::ThemeControl)
///
/// All coordinates address pixels in the surface's own coordinate space.
/// A [`Rect`] covers the pixels from `rect.pos` (inclusive) to
/// `rect.pos2()` (exclusive). Points (line ends, polygon vertices) name
/// pixels: a shape touching point `Coord(x, y)` may write pixel `(x, y)`.
///
/// Shapes are not anti-aliased by the renderer's expectation; an
/// implementation may anti-alias but must not write outside the geometry
/// described for each method nor outside the active clip region.
///
/// Stroke methods draw a one-pixel line on the inside of the shape's outline.
pub trait Surface {
    /// Restrict drawing to `rect`, intersected with the current clip region
    ///
    /// Each call must be matched by a call to [`Self::pop_clip`].
    fn push_clip(&mut self, rect: Rect);

    /// Restore the clip region active before the last [`Self::push_clip`]
    fn pop_clip(&mut self);

    /// Fill `rect` with `col`
    fn fill_rect(&mut self, rect: Rect, col: Rgba8Srgb);

    /// Draw a one-pixel frame along the inside edge of `rect`
    ///
    /// The default implementation draws the frame as four rects.
    fn stroke_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
        if rect.is_empty() {
            return;
        }
        let Rect { pos, size } = rect;
        if size.0 <= 2 || size.1 <= 2 {
            self.fill_rect(rect, col);
            return;
        }

        self.fill_rect(Rect::new(pos, Size(size.0, 1)), col);
        self.fill_rect(Rect::new(Coord(pos.0, pos.1 + size.1 - 1), Size(size.0, 1)), col);
        let side = Size(1, size.1 - 2);
        self.fill_rect(Rect::new(Coord(pos.0, pos.1 + 1), side), col);
        self.fill_rect(Rect::new(Coord(pos.0 + size.0 - 1, pos.1 + 1), side), col);
    }

    /// Fill a rect with circular corners of the given `radius`
    ///
    /// The radius is clamped to half the shorter side of `rect`.
    fn fill_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb);

    /// Stroke the outline of a rect with circular corners
    fn stroke_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb);

    /// Fill the axis-aligned oval inscribed in `rect`
    fn fill_oval(&mut self, rect: Rect, col: Rgba8Srgb);

    /// Stroke the outline of the axis-aligned oval inscribed in `rect`
    fn stroke_oval(&mut self, rect: Rect, col: Rgba8Srgb);

    /// Fill a circle inscribed in the square of side `2 * radius` centered
    /// on the corner between pixels at `center`
    ///
    /// The default implementation calls [`Self::fill_oval`].
    fn fill_circle(&mut self, center: Coord, radius: i32, col: Rgba8Srgb) {
        let r = Size::splat(radius);
        self.fill_oval(Rect::new(center - r, r + r), col);
    }

    /// Fill the polygon with the given vertices
    fn fill_polygon(&mut self, points: &[Coord], col: Rgba8Srgb);

    /// Stroke the (closed) outline of the polygon with the given vertices
    ///
    /// The default implementation draws each edge with [`Self::line`].
    fn stroke_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
        if let [first, .., last] = points {
            for pair in points.windows(2) {
                self.line(pair[0], pair[1], col);
            }
            self.line(*last, *first, col);
        } else if let [p] = points {
            self.line(*p, *p, col);
        }
    }

    /// Draw a one-pixel line between `p1` and `p2`, including both ends
    fn line(&mut self, p1: Coord, p2: Coord, col: Rgba8Srgb);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn push_clip(&mut self, rect: Rect) {
        (**self).push_clip(rect);
    }
    #[inline]
    fn pop_clip(&mut self) {
        (**self).pop_clip();
    }
    #[inline]
    fn fill_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
        (**self).fill_rect(rect, col);
    }
    #[inline]
    fn stroke_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
        (**self).stroke_rect(rect, col);
    }
    #[inline]
    fn fill_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        (**self).fill_round_rect(rect, radius, col);
    }
    #[inline]
    fn stroke_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        (**self).stroke_round_rect(rect, radius, col);
    }
    #[inline]
    fn fill_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        (**self).fill_oval(rect, col);
    }
    #[inline]
    fn stroke_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        (**self).stroke_oval(rect, col);
    }
    #[inline]
    fn fill_circle(&mut self, center: Coord, radius: i32, col: Rgba8Srgb) {
        (**self).fill_circle(center, radius, col);
    }
    #[inline]
    fn fill_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
        (**self).fill_polygon(points, col);
    }
    #[inline]
    fn stroke_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
        (**self).stroke_polygon(points, col);
    }
    #[inline]
    fn line(&mut self, p1: Coord, p2: Coord, col: Rgba8Srgb) {
        (**self).line(p1, p2, col);
    }
}
