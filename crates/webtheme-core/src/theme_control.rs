// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Control rendering

use crate::color::Rgba8Srgb;
use crate::colors::Palette;
use crate::config::{Config, Dimensions};
use crate::control::{ControlState, ControlType};
use crate::geom::{Coord, Rect, Size};
use crate::marker;
use crate::surface::Surface;

/// Direction an arrow points in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A control, ready to draw onto a borrowed surface
///
/// This pairs a surface borrow with the control's bounds, type and state.
/// The colours ([`Palette`]) and edge coordinates are fixed at construction.
/// Nothing is retained between instances: drawing the same control twice
/// writes the same pixels.
///
/// All drawing is clipped to the bounds. Empty bounds draw nothing.
///
/// ```
/// # use webtheme_core::{ThemeControl, ControlType, ControlState, Surface};
/// # use webtheme_core::geom::Rect;
/// fn draw_button<S: Surface>(surface: &mut S) {
///     let bounds = Rect::from_ltrb(0, 0, 80, 24);
///     ThemeControl::new(surface, bounds, ControlType::PushButton, ControlState::Hover).render();
/// }
/// ```
pub struct ThemeControl<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    config: &'a Config,
    dims: Dimensions,
    rect: Rect,
    ty: ControlType,
    state: ControlState,
    palette: Palette,

    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
    width: i32,
    height: i32,
}

impl<'a, S: Surface + ?Sized> ThemeControl<'a, S> {
    /// Construct with the default [`Config`]
    #[inline]
    pub fn new(surface: &'a mut S, rect: Rect, ty: ControlType, state: ControlState) -> Self {
        Self::with_config(surface, rect, ty, state, &Config::DEFAULT)
    }

    /// Construct with a custom [`Config`]
    ///
    /// The config is expected to pass [`Config::validate`]; otherwise
    /// states may not be distinguishable. Dimensions below 1 are raised to 1
    /// so that drawing never faults.
    pub fn with_config(
        surface: &'a mut S,
        rect: Rect,
        ty: ControlType,
        state: ControlState,
        config: &'a Config,
    ) -> Self {
        let rect = rect.clamp_size();
        let palette = config.colors.palette(state);
        let pos2 = rect.pos2();
        ThemeControl {
            surface,
            config,
            dims: config.dims.clamped(),
            rect,
            ty,
            state,
            palette,
            left: rect.pos.0,
            right: pos2.0,
            top: rect.pos.1,
            bottom: pos2.1,
            width: rect.size.0,
            height: rect.size.1,
        }
    }

    /// The control's bounds
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The control's type
    #[inline]
    pub fn control_type(&self) -> ControlType {
        self.ty
    }

    /// The control's state
    #[inline]
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// The colours derived from the control's state
    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Draw the control, then its state marker
    ///
    /// [`ControlType::TextField`] and [`ControlType::ProgressBar`] must be
    /// drawn with [`Self::render_text_field`] and
    /// [`Self::render_progress_bar`]. Passing these here is a caller error.
    /// It is reported with `log::warn!` and never asserted: the control is
    /// drawn like [`ControlType::Unknown`], as a plain box plus marker, so a
    /// harness sweeping all types still gets a decodable state.
    pub fn render(&mut self) {
        log::trace!("render: {} ({}) at {:?}", self.ty, self.state, self.rect);
        if self.rect.is_empty() {
            log::debug!("render: empty bounds {:?}; nothing to draw", self.rect);
            return;
        }

        let Palette {
            background: bg,
            foreground: fg,
            ..
        } = self.palette;
        let dims = self.dims;
        let min = self.width.min(self.height);

        self.surface.push_clip(self.rect);
        match self.ty {
            ControlType::PushButton | ControlType::UncheckedBox => {
                self.round_rect(bg);
            }
            ControlType::CheckedBox => {
                self.round_rect(bg);
                self.check_mark(min / dims.mark_div);
            }
            ControlType::IndeterminateCheckbox => {
                self.round_rect(bg);
                self.dash(min / dims.mark_div, (self.height / dims.mark_div).max(1));
            }
            ControlType::UncheckedRadio => {
                self.oval(bg);
            }
            ControlType::CheckedRadio => {
                self.oval(bg);
                self.circle(min / dims.mark_div, fg);
            }
            ControlType::HorizontalScrollTrackBack
            | ControlType::HorizontalScrollTrackForward
            | ControlType::VerticalScrollTrackBack
            | ControlType::VerticalScrollTrackForward => {
                self.boxed(self.rect, bg);
            }
            ControlType::HorizontalScrollThumb | ControlType::VerticalScrollThumb => {
                self.nested_boxes((min / dims.thumb_inset_div).max(1), bg, fg);
            }
            ControlType::HorizontalScrollGrip | ControlType::VerticalScrollGrip => {
                self.boxed(self.rect.shrink(min / dims.grip_inset_div), fg);
            }
            ControlType::LeftArrow => self.arrow(self.rect, Direction::Left),
            ControlType::RightArrow => self.arrow(self.rect, Direction::Right),
            ControlType::UpArrow => self.arrow(self.rect, Direction::Up),
            ControlType::DownArrow => self.arrow(self.rect, Direction::Down),
            ControlType::HorizontalSliderTrack => {
                let th = (self.height / dims.slider_track_div).max(1);
                let pos = Coord(self.left, self.top + (self.height - th) / 2);
                self.boxed(Rect::new(pos, Size(self.width, th)), bg);
            }
            ControlType::VerticalSliderTrack => {
                let th = (self.width / dims.slider_track_div).max(1);
                let pos = Coord(self.left + (self.width - th) / 2, self.top);
                self.boxed(Rect::new(pos, Size(th, self.height)), bg);
            }
            ControlType::HorizontalSliderThumb | ControlType::VerticalSliderThumb => {
                self.round_rect(fg);
            }
            ControlType::DropDownButton => {
                self.boxed(self.rect, bg);
                let inner = self.rect.center_rect(self.rect.size / 2);
                if !inner.is_empty() {
                    self.arrow(inner, Direction::Down);
                }
            }
            ControlType::TextField | ControlType::ProgressBar => {
                log::warn!(
                    "render: {} requires a dedicated render method; drawing as Unknown",
                    self.ty
                );
                self.boxed(self.rect, bg);
            }
            ControlType::Unknown => {
                self.boxed(self.rect, bg);
            }
        }
        self.mark_state();
        self.surface.pop_clip();
    }

    /// Draw a text field
    ///
    /// If `fill_content_area`, the bounds are filled with `col` (not a
    /// palette colour: field styling is decided by the caller). If
    /// `draw_edges`, a frame is drawn in the palette's edge colour.
    ///
    /// No state marker is drawn.
    pub fn render_text_field(&mut self, draw_edges: bool, fill_content_area: bool, col: Rgba8Srgb) {
        log::trace!(
            "render_text_field: ({}) at {:?}, edges={draw_edges}, fill={fill_content_area}",
            self.state,
            self.rect
        );
        if self.rect.is_empty() {
            return;
        }

        self.surface.push_clip(self.rect);
        if fill_content_area {
            self.surface.fill_rect(self.rect, col);
        }
        if draw_edges {
            self.surface.stroke_rect(self.rect, self.palette.edge);
        }
        self.surface.pop_clip();
    }

    /// Draw a progress bar
    ///
    /// The track is a box over the bounds; `fill_rect` (the completed part)
    /// is clipped to the bounds and filled with the foreground colour.
    ///
    /// No state marker is drawn.
    pub fn render_progress_bar(&mut self, fill_rect: Rect) {
        log::trace!(
            "render_progress_bar: ({}) at {:?}, fill={fill_rect:?}",
            self.state,
            self.rect
        );
        if self.rect.is_empty() {
            return;
        }

        self.surface.push_clip(self.rect);
        self.boxed(self.rect, self.palette.background);
        if let Some(fill) = fill_rect.intersection(&self.rect) {
            self.surface.fill_rect(fill, self.palette.foreground);
        }
        self.surface.pop_clip();
    }

    // Clamp a point to the pixels within bounds.
    fn clamp(&self, c: Coord) -> Coord {
        Coord(
            c.0.clamp(self.left, self.right - 1),
            c.1.clamp(self.top, self.bottom - 1),
        )
    }

    // Fill `rect` with `col` and frame it in the edge colour.
    fn boxed(&mut self, rect: Rect, col: Rgba8Srgb) {
        if rect.is_empty() {
            return;
        }
        self.surface.fill_rect(rect, col);
        self.surface.stroke_rect(rect, self.palette.edge);
    }

    // Box over the bounds, then an inner box inset by `inset` on all sides.
    fn nested_boxes(&mut self, inset: i32, outer: Rgba8Srgb, inner: Rgba8Srgb) {
        self.boxed(self.rect, outer);
        let rect = self.rect.shrink(inset);
        if !rect.is_empty() {
            self.surface.fill_rect(rect, inner);
        }
    }

    fn round_rect(&mut self, col: Rgba8Srgb) {
        let radius = self.width.min(self.height) / self.dims.corner_div;
        self.surface.fill_round_rect(self.rect, radius, col);
        self.surface
            .stroke_round_rect(self.rect, radius, self.palette.edge);
    }

    fn oval(&mut self, col: Rgba8Srgb) {
        self.surface.fill_oval(self.rect, col);
        self.surface.stroke_oval(self.rect, self.palette.edge);
    }

    // Filled circle centered in the bounds; a single pixel if `radius` is 0.
    fn circle(&mut self, radius: i32, col: Rgba8Srgb) {
        let center = Coord(self.left + self.width / 2, self.top + self.height / 2);
        if radius > 0 {
            self.surface.fill_circle(center, radius, col);
        } else {
            let pos = self.clamp(center);
            self.surface.fill_rect(Rect::new(pos, Size::splat(1)), col);
        }
    }

    fn triangle(&mut self, points: [Coord; 3]) {
        let points = points.map(|p| self.clamp(p));
        self.surface.fill_polygon(&points, self.palette.foreground);
        self.surface.stroke_polygon(&points, self.palette.edge);
    }

    // Isosceles triangle filling `rect` with its apex on the `dir` side.
    fn arrow(&mut self, rect: Rect, dir: Direction) {
        let (l, t) = (rect.pos.0, rect.pos.1);
        let (r, b) = (l + rect.size.0 - 1, t + rect.size.1 - 1);
        let cx = l + (rect.size.0 - 1) / 2;
        let cy = t + (rect.size.1 - 1) / 2;
        let points = match dir {
            Direction::Left => [Coord(l, cy), Coord(r, t), Coord(r, b)],
            Direction::Right => [Coord(r, cy), Coord(l, t), Coord(l, b)],
            Direction::Up => [Coord(cx, t), Coord(l, b), Coord(r, b)],
            Direction::Down => [Coord(cx, b), Coord(l, t), Coord(r, t)],
        };
        self.triangle(points);
    }

    // Check glyph: two strokes meeting at a vertex below the center.
    fn check_mark(&mut self, inset: i32) {
        let a = self.clamp(Coord(self.left + inset, self.top + self.height / 2));
        let v = self.clamp(Coord(self.left + self.width / 2, self.bottom - 1 - inset));
        let c = self.clamp(Coord(self.right - 1 - inset, self.top + inset));
        let fg = self.palette.foreground;
        self.surface.line(a, v, fg);
        self.surface.line(v, c, fg);
    }

    // Horizontal bar of thickness `th`, centered vertically, inset by `inset`.
    fn dash(&mut self, inset: i32, th: i32) {
        let pos = Coord(self.left + inset, self.top + (self.height - th) / 2);
        let size = Size(self.width - inset - inset, th);
        let rect = Rect::new(pos, size);
        if !rect.is_empty() {
            self.surface.fill_rect(rect, self.palette.foreground);
        } else {
            let pos = self.clamp(Coord(self.left + self.width / 2, self.top + self.height / 2));
            self.surface
                .fill_rect(Rect::new(pos, Size::splat(1)), self.palette.foreground);
        }
    }

    fn mark_state(&mut self) {
        let col = self.config.colors.marker.get(self.state);
        marker::draw(
            &mut *self.surface,
            self.rect,
            self.dims.marker_length,
            col,
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clip(Rect),
        Unclip,
        Rect(Rect, Rgba8Srgb),
        RoundRect(Rect, i32, Rgba8Srgb),
        StrokeRoundRect(Rect, i32, Rgba8Srgb),
        Oval(Rect, Rgba8Srgb),
        StrokeOval(Rect, Rgba8Srgb),
        Polygon(Vec<Coord>, Rgba8Srgb),
        Line(Coord, Coord, Rgba8Srgb),
    }

    /// Records draw calls (stroke_rect and stroke_polygon use defaults)
    #[derive(Default)]
    struct Log(Vec<Op>);

    impl Surface for Log {
        fn push_clip(&mut self, rect: Rect) {
            self.0.push(Op::Clip(rect));
        }
        fn pop_clip(&mut self) {
            self.0.push(Op::Unclip);
        }
        fn fill_rect(&mut self, rect: Rect, col: Rgba8Srgb) {
            self.0.push(Op::Rect(rect, col));
        }
        fn fill_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
            self.0.push(Op::RoundRect(rect, radius, col));
        }
        fn stroke_round_rect(&mut self, rect: Rect, radius: i32, col: Rgba8Srgb) {
            self.0.push(Op::StrokeRoundRect(rect, radius, col));
        }
        fn fill_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
            self.0.push(Op::Oval(rect, col));
        }
        fn stroke_oval(&mut self, rect: Rect, col: Rgba8Srgb) {
            self.0.push(Op::StrokeOval(rect, col));
        }
        fn fill_polygon(&mut self, points: &[Coord], col: Rgba8Srgb) {
            self.0.push(Op::Polygon(points.to_vec(), col));
        }
        fn line(&mut self, p1: Coord, p2: Coord, col: Rgba8Srgb) {
            self.0.push(Op::Line(p1, p2, col));
        }
    }

    fn record(rect: Rect, ty: ControlType, state: ControlState) -> Vec<Op> {
        let mut log = Log::default();
        ThemeControl::new(&mut log, rect, ty, state).render();
        log.0
    }

    fn px(x: i32, y: i32) -> Rect {
        Rect::new(Coord(x, y), Size::splat(1))
    }

    const R16: Rect = Rect::new(Coord(0, 0), Size(16, 16));

    #[test]
    fn checked_box() {
        let p = Config::DEFAULT.colors.palette(ControlState::Pressed);
        let marker = Config::DEFAULT.colors.marker.pressed;
        let ops = record(R16, ControlType::CheckedBox, ControlState::Pressed);
        assert_eq!(ops, vec![
            Op::Clip(R16),
            Op::RoundRect(R16, 4, p.background),
            Op::StrokeRoundRect(R16, 4, p.edge),
            Op::Line(Coord(4, 8), Coord(8, 11), p.foreground),
            Op::Line(Coord(8, 11), Coord(11, 4), p.foreground),
            Op::Rect(px(0, 0), marker),
            Op::Rect(px(1, 1), marker),
            Op::Rect(px(2, 2), marker),
            Op::Rect(px(3, 3), marker),
            Op::Unclip,
        ]);
    }

    #[test]
    fn checked_radio_dot() {
        let p = Config::DEFAULT.colors.palette(ControlState::Normal);
        let rect = Rect::new(Coord(10, 10), Size(20, 12));
        let ops = record(rect, ControlType::CheckedRadio, ControlState::Normal);
        assert_eq!(ops[1], Op::Oval(rect, p.background));
        assert_eq!(ops[2], Op::StrokeOval(rect, p.edge));
        // radius = min(20, 12) / 4 = 3, centered on (20, 16)
        assert_eq!(ops[3], Op::Oval(Rect::from_ltrb(17, 13, 23, 19), p.foreground));
    }

    #[test]
    fn arrows_point_the_right_way() {
        let rect = Rect::new(Coord(0, 0), Size(9, 7));
        let fg = Config::DEFAULT.colors.foreground;
        let cases = [
            (ControlType::LeftArrow, [Coord(0, 3), Coord(8, 0), Coord(8, 6)]),
            (ControlType::RightArrow, [Coord(8, 3), Coord(0, 0), Coord(0, 6)]),
            (ControlType::UpArrow, [Coord(4, 0), Coord(0, 6), Coord(8, 6)]),
            (ControlType::DownArrow, [Coord(4, 6), Coord(0, 0), Coord(8, 0)]),
        ];
        for (ty, points) in cases {
            let ops = record(rect, ty, ControlState::Normal);
            assert_eq!(ops[1], Op::Polygon(points.to_vec(), fg), "{ty}");
        }
    }

    #[test]
    fn drop_down_arrow_is_centered() {
        let rect = Rect::new(Coord(0, 0), Size(20, 16));
        let ops = record(rect, ControlType::DropDownButton, ControlState::Hot);
        let fg = Config::DEFAULT.colors.foreground;
        // inner rect is (5, 4) .. (15, 12)
        let arrow = Op::Polygon(vec![Coord(9, 11), Coord(5, 4), Coord(14, 4)], fg);
        assert!(ops.contains(&arrow));
    }

    #[test]
    fn slider_track_is_thin() {
        let p = Config::DEFAULT.colors.palette(ControlState::Normal);
        let rect = Rect::new(Coord(0, 0), Size(60, 12));
        let ops = record(rect, ControlType::HorizontalSliderTrack, ControlState::Normal);
        assert_eq!(ops[1], Op::Rect(Rect::from_ltrb(0, 4, 60, 8), p.background));

        let rect = Rect::new(Coord(0, 0), Size(12, 60));
        let ops = record(rect, ControlType::VerticalSliderTrack, ControlState::Normal);
        assert_eq!(ops[1], Op::Rect(Rect::from_ltrb(4, 0, 8, 60), p.background));
    }

    #[test]
    fn thumb_and_grip_insets() {
        let p = Config::DEFAULT.colors.palette(ControlState::Focused);
        let rect = Rect::new(Coord(0, 0), Size(40, 16));
        let ops = record(rect, ControlType::HorizontalScrollThumb, ControlState::Focused);
        assert!(ops.contains(&Op::Rect(Rect::from_ltrb(4, 4, 36, 12), p.foreground)));

        let ops = record(rect, ControlType::VerticalScrollGrip, ControlState::Focused);
        assert_eq!(ops[1], Op::Rect(Rect::from_ltrb(2, 2, 38, 14), p.foreground));
    }

    #[test]
    fn special_types_fall_back_to_box() {
        let rect = Rect::new(Coord(0, 0), Size(30, 10));
        let plain = record(rect, ControlType::Unknown, ControlState::Hover);
        assert_eq!(record(rect, ControlType::TextField, ControlState::Hover), plain);
        assert_eq!(record(rect, ControlType::ProgressBar, ControlState::Hover), plain);
    }

    #[test]
    fn empty_bounds_draw_nothing() {
        let rect = Rect::new(Coord(5, 5), Size(0, 10));
        for ty in ControlType::ALL {
            assert!(record(rect, *ty, ControlState::Normal).is_empty());
        }

        let mut log = Log::default();
        let mut control =
            ThemeControl::new(&mut log, rect, ControlType::TextField, ControlState::Normal);
        control.render_text_field(true, true, Rgba8Srgb::WHITE);
        control.render_progress_bar(rect);
        assert!(log.0.is_empty());
    }

    #[test]
    fn negative_size_is_clamped() {
        let mut log = Log::default();
        let rect = Rect::new(Coord(5, 5), Size(-3, 10));
        let control = ThemeControl::new(&mut log, rect, ControlType::Unknown, ControlState::Normal);
        assert_eq!(control.rect().size, Size(0, 10));
    }

    #[test]
    fn zero_dimensions_do_not_fault() {
        let mut config = Config::DEFAULT;
        config.dims = Dimensions {
            corner_div: 0,
            thumb_inset_div: 0,
            grip_inset_div: 0,
            mark_div: 0,
            slider_track_div: 0,
            marker_length: 0,
        };
        let marker = config.colors.marker.normal;
        for ty in ControlType::ALL {
            let mut log = Log::default();
            ThemeControl::with_config(&mut log, R16, *ty, ControlState::Normal, &config).render();
            // marker_length is raised to 1
            let n = log.0.len();
            assert_eq!(log.0[n - 2], Op::Rect(px(0, 0), marker), "{ty}");
            assert_eq!(log.0[n - 1], Op::Unclip);
        }
    }

    #[test]
    fn bounds_near_coordinate_limit() {
        let rect = Rect::new(Coord(i32::MAX - 4, 0), Size(10, 10));
        let clipped = Rect::new(Coord(i32::MAX - 4, 0), Size(4, 10));
        for ty in ControlType::ALL {
            let ops = record(rect, *ty, ControlState::Hover);
            assert_eq!(ops[0], Op::Clip(clipped), "{ty}");
            assert_eq!(ops.last(), Some(&Op::Unclip));
        }
    }

    #[test]
    fn progress_fill_is_clipped() {
        let mut log = Log::default();
        let rect = Rect::from_ltrb(0, 0, 100, 20);
        let mut control =
            ThemeControl::new(&mut log, rect, ControlType::ProgressBar, ControlState::Normal);
        let fg = control.palette().foreground;
        control.render_progress_bar(Rect::from_ltrb(0, 0, 150, 20));
        assert!(log.0.contains(&Op::Rect(rect, fg)));
        assert!(!log.0.iter().any(|op| matches!(op, Op::Rect(r, _) if r.size.0 > 100)));
    }
}
