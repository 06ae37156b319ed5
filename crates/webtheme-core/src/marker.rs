// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! State marker
//!
//! Every control drawn by [`ThemeControl::render`] is stamped with a short
//! diagonal of single pixels running from the top-left pixel of its bounds
//! towards the bottom-right. The diagonal has length
//! `min(marker_length, width, height)` and is drawn last, in the marker
//! colour of the control's state (see [`StateColors::MARKER`]).
//!
//! The pixel returned by [`marker_pixel`] therefore always holds the marker
//! colour after a render, whatever the control type, and
//! [`StateColors::decode`] maps it back to the state.
//!
//! [`ThemeControl::render`]: crate::ThemeControl::render
//! [`StateColors::MARKER`]: crate::colors::StateColors::MARKER
//! [`StateColors::decode`]: crate::colors::StateColors::decode

use crate::color::Rgba8Srgb;
use crate::geom::{Coord, Rect, Size};
use crate::surface::Surface;

/// The pixel sampled to recover a control's state
///
/// Returns `None` for empty bounds.
#[inline]
pub fn marker_pixel(bounds: Rect) -> Option<Coord> {
    (!bounds.is_empty()).then_some(bounds.pos)
}

/// Draw the marker diagonal within `bounds`
pub(crate) fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    bounds: Rect,
    length: i32,
    col: Rgba8Srgb,
) {
    let n = length.min(bounds.size.min_comp());
    for i in 0..n {
        let pos = Coord(bounds.pos.0 + i, bounds.pos.1 + i);
        surface.fill_rect(Rect::new(pos, Size::splat(1)), col);
    }
}
