// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Surface over a tiny-skia pixmap

use crate::Error;
use tiny_skia::{FillRule, LineCap, Mask, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};
use webtheme::Surface;
use webtheme::cast::{Cast, Conv};
use webtheme::color::Rgba8Srgb;
use webtheme::geom::{Coord, Rect, Size};

fn paint(col: Rgba8Srgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(col.r(), col.g(), col.b(), col.a());
    paint.anti_alias = false;
    paint
}

/// Convert `rect`, shrunk by `inset` on each side
fn sk_rect(rect: Rect, inset: f32) -> Option<tiny_skia::Rect> {
    let x = f32::conv(rect.pos.0) + inset;
    let y = f32::conv(rect.pos.1) + inset;
    let w = f32::conv(rect.size.0) - 2.0 * inset;
    let h = f32::conv(rect.size.1) - 2.0 * inset;
    tiny_skia::Rect::from_xywh(x, y, w, h)
}

fn round_rect_path(rect: tiny_skia::Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let (l, t, r_, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(r_ - r, t);
    pb.quad_to(r_, t, r_, t + r);
    pb.line_to(r_, b - r);
    pb.quad_to(r_, b, r_ - r, b);
    pb.line_to(l + r, b);
    pb.quad_to(l, b, l, b - r);
    pb.line_to(l, t + r);
    pb.quad_to(l, t, l + r, t);
    pb.close();
    pb.finish()
}

/// Path through the centers of the given pixels
fn polygon_path(points: &[Coord]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let center = |c: &Coord| (f32::conv(c.0) + 0.5, f32::conv(c.1) + 0.5);
    let mut pb = PathBuilder::new();
    let (x, y) = center(first);
    pb.move_to(x, y);
    for p in rest {
        let (x, y) = center(p);
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

fn one_pixel_stroke() -> Stroke {
    Stroke {
        width: 1.0,
        ..Stroke::default()
    }
}

/// A [`Surface`] drawing to a [`Pixmap`]
///
/// Anti-aliasing is disabled. Clip regions are applied through a
/// [`Mask`] rebuilt whenever the clip stack changes.
pub struct PixmapSurface {
    pixmap: Pixmap,
    clip: Vec<Rect>,
    mask: Option<Mask>,
}

impl PixmapSurface {
    /// Construct a transparent surface
    pub fn new(size: Size) -> Result<Self, Error> {
        if size.is_empty() {
            return Err(Error::ZeroSize(size));
        }
        let pixmap = Pixmap::new(size.0.cast(), size.1.cast()).ok_or(Error::ZeroSize(size))?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Wrap an existing pixmap
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        PixmapSurface {
            pixmap,
            clip: vec![],
            mask: None,
        }
    }

    /// The surface size
    pub fn size(&self) -> Size {
        Size(self.pixmap.width().cast(), self.pixmap.height().cast())
    }

    /// Access the pixmap
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Set every pixel to `col`, ignoring the clip region
    pub fn clear(&mut self, col: Rgba8Srgb) {
        let col = tiny_skia::Color::from_rgba8(col.r(), col.g(), col.b(), col.a());
        self.pixmap.fill(col);
    }

    /// Read a pixel (de-multiplied)
    ///
    /// Returns `None` if `(x, y)` is outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8Srgb> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba8Srgb::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn update_mask(&mut self) {
        let Some(rect) = self.clip.last() else {
            self.mask = None;
            return;
        };
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height());
        if let (Some(mask), Some(r)) = (mask.as_mut(), sk_rect(*rect, 0.0)) {
            let path = PathBuilder::from_rect(r);
            mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
        }
        self.mask = mask;
    }

    fn fill_path(&mut self, path: &Path, col: Rgba8Srgb) {
        self.pixmap.fill_path(
            path,
            &paint(col),
            FillRule::Winding,
            Transform::identity(),
            self.mask.as_ref(),
        );
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, col: Rgba8Srgb) {
        self.pixmap.stroke_path(
            path,
            &paint(col),
            stroke,
            Transform::identity(),
            self.mask.as_ref(),
        );
    }
}

impl Surface for PixmapSurface {
    fn push_clip(&mut self, rect: Rect) {
        let bounds = Rect::new(Coord::ZERO, self.size());
        let current = self.clip.last().copied().unwrap_or(bounds);
        self.clip.push(rect.intersection(&current).unwrap_or(Rect::ZERO));
        self.update_mask();
    }

    fn pop_clip(&mut self) {
        if self.clip.pop().is_none() {
            log::warn!("PixmapSurface::pop_clip: clip stack is empty");
        }
        self.update_mask();
    }

    fn fill_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
        if let Some(r) = sk_rect(rect, 0.0) {
            let paint = paint(col);
            self.pixmap
                .fill_rect(r, &paint, Transform::identity(), self.mask.as_ref());
        }
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        if let Some(path) = sk_rect(rect, 0.0).and_then(|r| round_rect_path(r, f32::conv(radius))) {
            self.fill_path(&path, col);
        }
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
        let radius = f32::conv(radius) - 0.5;
        if let Some(path) = sk_rect(rect, 0.5).and_then(|r| round_rect_path(r, radius)) {
            self.stroke_path(&path, &one_pixel_stroke(), col);
        }
    }

    fn fill_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        if let Some(path) = sk_rect(rect, 0.0).and_then(PathBuilder::from_oval) {
            self.fill_path(&path, col);
        }
    }

    fn stroke_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
        if let Some(path) = sk_rect(rect, 0.5).and_then(PathBuilder::from_oval) {
            self.stroke_path(&path, &one_pixel_stroke(), col);
        }
    }

    fn fill_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
        if let Some(path) = polygon_path(points) {
            self.fill_path(&path, col);
        }
    }

    fn line(&mut self, p1: Coord, p2: Coord, col: Rgba8Srgb) {
        if p1 == p2 {
            self.fill_rect(Rect::new(p1, Size::splat(1)), col);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(f32::conv(p1.0) + 0.5, f32::conv(p1.1) + 0.5);
        pb.line_to(f32::conv(p2.0) + 0.5, f32::conv(p2.1) + 0.5);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                line_cap: LineCap::Square,
                ..one_pixel_stroke()
            };
            self.stroke_path(&path, &stroke, col);
        }
    }
}
