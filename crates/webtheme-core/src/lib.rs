// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! webtheme core
//!
//! A procedural theme for form controls, intended for layout test harnesses.
//! Each control part is drawn from simple shapes coloured by its
//! [`ControlState`], then stamped with a state marker: the pixel at the
//! top-left corner of the bounds (see [`marker_pixel`]) identifies the state
//! in the rendered output.
//!
//! Drawing goes through the [`Surface`] trait; see `webtheme-soft` for
//! software implementations.
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `cast`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub extern crate easy_cast as cast;

mod marker;
mod theme_control;

pub mod color;
pub mod colors;
pub mod config;
pub mod control;
pub mod geom;
pub mod surface;

pub use colors::{Colors, Palette, StateColors};
pub use config::Config;
pub use control::{ControlState, ControlType};
pub use marker::marker_pixel;
pub use surface::Surface;
pub use theme_control::ThemeControl;
