// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Software drawing surfaces for webtheme
//!
//! -   [`Pixels`] is a plain RGBA buffer with exact, integer rasterisation.
//!     Output is fully determined by the input geometry, which makes it the
//!     surface of choice for pixel-comparison tests.
//! -   [`PixmapSurface`] draws to a [tiny-skia] [`Pixmap`](tiny_skia::Pixmap).
//!
//! [tiny-skia]: https://crates.io/crates/tiny-skia

pub use tiny_skia;

mod pixels;
mod pixmap;

pub use pixels::Pixels;
pub use pixmap::PixmapSurface;

use thiserror::Error;
use webtheme::geom::Size;

/// Surface construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("surface size must be positive on both axes (found {0:?})")]
    ZeroSize(Size),
}
