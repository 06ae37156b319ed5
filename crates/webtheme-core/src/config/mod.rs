// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme configuration
//!
//! The defaults ([`Config::DEFAULT`]) are what [`ThemeControl::new`] uses.
//! With feature `serde` plus at least one of `json`, `toml` or `ron` a
//! configuration may be read from or written to a file, the [`Format`] being
//! chosen by file extension.
//!
//! [`ThemeControl::new`]: crate::ThemeControl::new

mod format;

pub use format::{Error, Format};

use crate::colors::Colors;
use crate::control::ControlState;
#[cfg(feature = "serde")]
use std::path::Path;

/// Proportions used by control compositions
///
/// Each value is a divisor applied to a control dimension, except for
/// `marker_length` which is in pixels. All values must be at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Corner radius of rounded rects is `min(w, h) / corner_div`
    #[cfg_attr(feature = "serde", serde(default = "defaults::corner_div"))]
    pub corner_div: i32,
    /// Scroll thumb inner box inset is `min(w, h) / thumb_inset_div`
    #[cfg_attr(feature = "serde", serde(default = "defaults::thumb_inset_div"))]
    pub thumb_inset_div: i32,
    /// Scroll grip inset is `min(w, h) / grip_inset_div`
    #[cfg_attr(feature = "serde", serde(default = "defaults::grip_inset_div"))]
    pub grip_inset_div: i32,
    /// Check mark inset and radio dot radius are `min(w, h) / mark_div`
    #[cfg_attr(feature = "serde", serde(default = "defaults::mark_div"))]
    pub mark_div: i32,
    /// Slider track thickness is `extent / slider_track_div`
    #[cfg_attr(feature = "serde", serde(default = "defaults::slider_track_div"))]
    pub slider_track_div: i32,
    /// Length of the state marker diagonal, in pixels
    #[cfg_attr(feature = "serde", serde(default = "defaults::marker_length"))]
    pub marker_length: i32,
}

impl Dimensions {
    /// Default proportions
    pub const DEFAULT: Self = Dimensions {
        corner_div: defaults::corner_div(),
        thumb_inset_div: defaults::thumb_inset_div(),
        grip_inset_div: defaults::grip_inset_div(),
        mark_div: defaults::mark_div(),
        slider_track_div: defaults::slider_track_div(),
        marker_length: defaults::marker_length(),
    };

    /// Raise every value below 1 to 1
    #[must_use = "method does not modify self but returns a new value"]
    pub fn clamped(self) -> Self {
        Dimensions {
            corner_div: self.corner_div.max(1),
            thumb_inset_div: self.thumb_inset_div.max(1),
            grip_inset_div: self.grip_inset_div.max(1),
            mark_div: self.mark_div.max(1),
            slider_track_div: self.slider_track_div.max(1),
            marker_length: self.marker_length.max(1),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("corner_div", self.corner_div),
            ("thumb_inset_div", self.thumb_inset_div),
            ("grip_inset_div", self.grip_inset_div),
            ("mark_div", self.mark_div),
            ("slider_track_div", self.slider_track_div),
            ("marker_length", self.marker_length),
        ];
        for (name, value) in fields {
            if value < 1 {
                return Err(Error::InvalidDimension(name, value));
            }
        }
        Ok(())
    }
}

impl Default for Dimensions {
    #[inline]
    fn default() -> Self {
        Dimensions::DEFAULT
    }
}

/// Theme configuration: colours and proportions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// The colour scheme
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: Colors,
    /// Composition proportions
    #[cfg_attr(feature = "serde", serde(default))]
    pub dims: Dimensions,
}

impl Config {
    /// The default configuration
    pub const DEFAULT: Self = Config {
        colors: Colors::DEFAULT,
        dims: Dimensions::DEFAULT,
    };

    /// Check that the configuration keeps states distinguishable
    ///
    /// Fails if two states share a marker colour, if a marker colour is not
    /// opaque (it would be blended with what lies beneath) or if a dimension
    /// is less than 1.
    pub fn validate(&self) -> Result<(), Error> {
        let markers = &self.colors.marker;
        if let Some((a, b)) = markers.find_duplicate() {
            return Err(Error::DuplicateMarker(a, b));
        }
        if let Some(state) = ControlState::ALL
            .iter()
            .copied()
            .find(|state| !markers.get(*state).is_opaque())
        {
            return Err(Error::TranslucentMarker(state));
        }
        self.dims.validate()
    }

    /// Read and validate a configuration
    ///
    /// The format is chosen from the extension of `path`.
    #[cfg(feature = "serde")]
    pub fn read_path(path: &Path) -> Result<Self, Error> {
        let format = Format::expect_path(path)?;
        log::info!("Config::read_path: path={}, format={format}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = format.parse(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration
    ///
    /// The format is chosen from the extension of `path`. The whole document
    /// is encoded before the file is touched.
    #[cfg(feature = "serde")]
    pub fn write_path(&self, path: &Path) -> Result<(), Error> {
        let format = Format::expect_path(path)?;
        log::info!("Config::write_path: path={}, format={format}", path.display());
        let text = format.emit(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

mod defaults {
    pub const fn corner_div() -> i32 {
        4
    }
    pub const fn thumb_inset_div() -> i32 {
        4
    }
    pub const fn grip_inset_div() -> i32 {
        8
    }
    pub const fn mark_div() -> i32 {
        4
    }
    pub const fn slider_track_div() -> i32 {
        3
    }
    pub const fn marker_length() -> i32 {
        4
    }
}
