// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Exact pixel buffer

use webtheme::Surface;
use webtheme::cast::{Cast, Conv};
use webtheme::color::Rgba8Srgb;
use webtheme::geom::{Coord, Rect, Size};

/// Is pixel `(x, y)` inside the oval inscribed in `rect`?
///
/// Tests the pixel center against the ellipse equation, in doubled
/// coordinates so that everything stays integral.
fn in_oval(rect: Rect, x: i32, y: i32) -> bool {
    if !rect.contains(Coord(x, y)) {
        return false;
    }
    let (w, h) = (i64::from(rect.size.0), i64::from(rect.size.1));
    let dx = i64::from(2 * x + 1) - (2 * i64::from(rect.pos.0) + w);
    let dy = i64::from(2 * y + 1) - (2 * i64::from(rect.pos.1) + h);
    dx * dx * h * h + dy * dy * w * w <= w * w * h * h
}

/// Doubled offset of `v`'s center from the corner circle's center on one
/// axis, or zero when `v` lies between the corners.
fn corner_offset(v: i32, lo: i32, hi: i32, r: i32) -> i64 {
    let c = i64::from(2 * v + 1);
    let (a, b) = (2 * i64::from(lo + r), 2 * i64::from(hi - r));
    if c < a {
        a - c
    } else if c > b {
        c - b
    } else {
        0
    }
}

/// Is pixel `(x, y)` inside `rect` with corners of the given `radius`?
fn in_round_rect(rect: Rect, radius: i32, x: i32, y: i32) -> bool {
    if !rect.contains(Coord(x, y)) {
        return false;
    }
    let r = radius.clamp(0, rect.size.min_comp() / 2);
    let pos2 = rect.pos2();
    let dx = corner_offset(x, rect.pos.0, pos2.0, r);
    let dy = corner_offset(y, rect.pos.1, pos2.1, r);
    let r2 = 2 * i64::from(r);
    dx * dx + dy * dy <= r2 * r2
}

fn on_segment(p: Coord, a: Coord, b: Coord) -> bool {
    let cross = i64::from(b.0 - a.0) * i64::from(p.1 - a.1)
        - i64::from(b.1 - a.1) * i64::from(p.0 - a.0);
    cross == 0 && a.min(b) <= p && p <= a.max(b)
}

/// Is point `p` inside the polygon or on its outline?
fn in_polygon(p: Coord, points: &[Coord]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for (i, a) in points.iter().enumerate() {
        let (a, b) = (*a, points[j]);
        j = i;
        if on_segment(p, a, b) {
            return true;
        }
        if (a.1 > p.1) != (b.1 > p.1) {
            let lhs = i64::from(p.0 - a.0) * i64::from(b.1 - a.1);
            let rhs = i64::from(p.1 - a.1) * i64::from(b.0 - a.0);
            if (b.1 > a.1 && lhs < rhs) || (b.1 < a.1 && lhs > rhs) {
                inside = !inside;
            }
        }
    }
    inside
}

/// An in-memory RGBA pixel buffer
///
/// Shapes are rasterised without anti-aliasing by sampling pixel centers, so
/// output depends only on the input geometry. Colours are blended over the
/// existing contents (source-over); opaque colours simply replace them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixels {
    size: Size,
    data: Vec<Rgba8Srgb>,
    clip: Vec<Rect>,
}

impl Pixels {
    /// Construct a transparent buffer
    ///
    /// Negative sizes are treated as zero.
    pub fn new(size: Size) -> Self {
        let size = size.max(Size::ZERO);
        let len = usize::conv(size.0) * usize::conv(size.1);
        Pixels {
            size,
            data: vec![Rgba8Srgb::TRANSPARENT; len],
            clip: vec![],
        }
    }

    /// The buffer size
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The full buffer as a rect
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(Coord::ZERO, self.size)
    }

    /// Pixel data, row-major
    #[inline]
    pub fn data(&self) -> &[Rgba8Srgb] {
        &self.data
    }

    /// Set every pixel to `col`, ignoring the clip region
    pub fn clear(&mut self, col: Rgba8Srgb) {
        self.data.fill(col);
    }

    /// Read a pixel
    ///
    /// Returns `None` if `(x, y)` is outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8Srgb> {
        self.index(x, y).map(|i| self.data[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.rect()
            .contains(Coord(x, y))
            .then(|| (y * self.size.0 + x).cast())
    }

    /// The active clip region, within the buffer
    fn clip_rect(&self) -> Rect {
        match self.clip.last() {
            Some(rect) => *rect,
            None => self.rect(),
        }
    }

    /// The pixels of `rect` which may be written
    fn visible(&self, rect: Rect) -> Option<Rect> {
        rect.intersection(&self.clip_rect())
    }

    /// Blend `col` into pixel `(x, y)` if within the clip region
    fn plot(&mut self, x: i32, y: i32, col: Rgba8Srgb) {
        if !self.clip_rect().contains(Coord(x, y)) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.data[i] = col.over(self.data[i]);
        }
    }

    /// Plot every visible pixel of `area` for which `f(x, y)` holds
    fn fill_where(&mut self, area: Rect, col: Rgba8Srgb, f: impl Fn(i32, i32) -> bool) {
        let Some(area) = self.visible(area) else {
            return;
        };
        let pos2 = area.pos2();
        for y in area.pos.1..pos2.1 {
            for x in area.pos.0..pos2.0 {
                if f(x, y) {
                    self.plot(x, y, col);
                }
            }
        }
    }
}

impl Surface for Pixels {
    fn push_clip(&mut self, rect: Rect) {
        let clip = self.visible(rect).unwrap_or(Rect::ZERO);
        self.clip.push(clip);
    }

    fn pop_clip(&mut self) {
        if self.clip.pop().is_none() {
            log::warn!("Pixels::pop_clip: clip stack is empty");
        }
    }

    fn fill_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
        self.fill_where(rect, col, |_, _| true);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        self.fill_where(rect, col, |x, y| in_round_rect(rect, radius, x, y));
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        let inner = rect.shrink(1);
        let inner_radius = (radius - 1).max(0);
        self.fill_where(rect, col, |x, y| {
            in_round_rect(rect, radius, x, y) && !in_round_rect(inner, inner_radius, x, y)
        });
    }

    fn fill_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        self.fill_where(rect, col, |x, y| in_oval(rect, x, y));
    }

    fn stroke_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        let inner = rect.shrink(1);
        self.fill_where(rect, col, |x, y| {
            in_oval(rect, x, y) && !in_oval(inner, x, y)
        });
    }

    fn fill_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
        let Some(first) = points.first() else {
            return;
        };
        let (mut a, mut b) = (*first, *first);
        for p in points {
            a = a.min(*p);
            b = b.max(*p);
        }
        let area = Rect::from_coords(a, b + Size::splat(1));
        self.fill_where(area, col, |x, y| in_polygon(Coord(x, y), points));
    }

    fn line(&mut self, p1: Coord, p2: Coord, col: Rgba8Srgb) {
        let Coord(mut x, mut y) = p1;
        let dx = (p2.0 - x).abs();
        let dy = -(p2.1 - y).abs();
        let sx = if x < p2.0 { 1 } else { -1 };
        let sy = if y < p2.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y, col);
            if x == p2.0 && y == p2.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
