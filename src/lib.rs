// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! webtheme: a procedural control theme for layout tests
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`webtheme_core`] provides control types, colours, configuration and
//!     the [`ThemeControl`] renderer
//! -   `webtheme_soft` provides software [`Surface`] implementations
//!     (feature `soft`, enabled by default)
//!
//! All items from [`webtheme_core`] are directly re-exported from this crate
//! (e.g. [`webtheme::geom::Rect`](crate::geom::Rect)); the software
//! surfaces are re-exported as the [`soft`] module.
//!
//! ```
//! # #[cfg(feature = "soft")] {
//! use webtheme::geom::{Rect, Size};
//! use webtheme::soft::Pixels;
//! use webtheme::{ControlState, ControlType, StateColors, ThemeControl, marker_pixel};
//!
//! let mut pixels = Pixels::new(Size(32, 32));
//! let bounds = Rect::from_ltrb(4, 4, 20, 20);
//! ThemeControl::new(&mut pixels, bounds, ControlType::CheckedBox, ControlState::Hover).render();
//!
//! let at = marker_pixel(bounds).unwrap();
//! let col = pixels.pixel(at.0, at.1).unwrap();
//! assert_eq!(StateColors::MARKER.decode(col), Some(ControlState::Hover));
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use webtheme_core::*;

/// Software surfaces: an exact pixel buffer and a tiny-skia adapter
#[cfg(feature = "soft")]
#[cfg_attr(docsrs, doc(cfg(feature = "soft")))]
pub mod soft {
    pub use webtheme_soft::*;
}
