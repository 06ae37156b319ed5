// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Colour schemes

use crate::color::Rgba8Srgb;
use crate::control::ControlState;

/// One colour per [`ControlState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateColors {
    pub unknown: Rgba8Srgb,
    pub disabled: Rgba8Srgb,
    pub read_only: Rgba8Srgb,
    pub normal: Rgba8Srgb,
    pub hot: Rgba8Srgb,
    pub hover: Rgba8Srgb,
    pub focused: Rgba8Srgb,
    pub pressed: Rgba8Srgb,
    pub indeterminate: Rgba8Srgb,
}

impl StateColors {
    /// Default control background colours
    pub const BACKGROUND: Self = StateColors {
        unknown: Rgba8Srgb::BLACK,
        disabled: Rgba8Srgb::rgb(0xc9, 0xc9, 0xc9),
        read_only: Rgba8Srgb::rgb(0xf3, 0xe0, 0xd0),
        normal: Rgba8Srgb::rgb(0x89, 0xc4, 0xff),
        hot: Rgba8Srgb::rgb(0x43, 0xf9, 0xff),
        hover: Rgba8Srgb::rgb(0x20, 0xf6, 0xcc),
        focused: Rgba8Srgb::rgb(0x00, 0xf3, 0xac),
        pressed: Rgba8Srgb::rgb(0xa9, 0xff, 0x12),
        indeterminate: Rgba8Srgb::rgb(0xcc, 0xcc, 0xcc),
    };

    /// Default state marker colours
    ///
    /// These are all distinct, allowing the state to be decoded from the
    /// marker pixel with [`StateColors::decode`].
    pub const MARKER: Self = StateColors {
        unknown: Rgba8Srgb::BLACK,
        disabled: Rgba8Srgb::grey(0x80),
        read_only: Rgba8Srgb::grey(0x60),
        normal: Rgba8Srgb::WHITE,
        hot: Rgba8Srgb::rgb(0xff, 0xbf, 0x00),
        hover: Rgba8Srgb::rgb(0x00, 0x00, 0xff),
        focused: Rgba8Srgb::rgb(0x00, 0xa0, 0x00),
        pressed: Rgba8Srgb::rgb(0xff, 0x00, 0x00),
        indeterminate: Rgba8Srgb::rgb(0x80, 0x00, 0x80),
    };

    /// Get the colour for `state`
    pub fn get(&self, state: ControlState) -> Rgba8Srgb {
        match state {
            ControlState::Unknown => self.unknown,
            ControlState::Disabled => self.disabled,
            ControlState::ReadOnly => self.read_only,
            ControlState::Normal => self.normal,
            ControlState::Hot => self.hot,
            ControlState::Hover => self.hover,
            ControlState::Focused => self.focused,
            ControlState::Pressed => self.pressed,
            ControlState::Indeterminate => self.indeterminate,
        }
    }

    /// Find the state assigned `col`
    ///
    /// If several states share `col`, the first (in numeric order) is
    /// returned.
    pub fn decode(&self, col: Rgba8Srgb) -> Option<ControlState> {
        ControlState::ALL
            .iter()
            .copied()
            .find(|state| self.get(*state) == col)
    }

    /// Find a pair of states sharing a colour, if any
    pub fn find_duplicate(&self) -> Option<(ControlState, ControlState)> {
        let all = ControlState::ALL;
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                if self.get(*a) == self.get(*b) {
                    return Some((*a, *b));
                }
            }
        }
        None
    }
}

/// Provides standard theme colours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colors {
    /// Colour of outlines
    pub edge: Rgba8Srgb,
    /// Colour of marks and thumbs
    pub foreground: Rgba8Srgb,
    /// Background colour of control shapes, per state
    pub background: StateColors,
    /// Colour of the state marker, per state
    pub marker: StateColors,
}

impl Colors {
    /// The default scheme
    pub const DEFAULT: Self = Colors {
        edge: Rgba8Srgb::BLACK,
        foreground: Rgba8Srgb::BLACK,
        background: StateColors::BACKGROUND,
        marker: StateColors::MARKER,
    };

    /// Derive the [`Palette`] for `state`
    pub fn palette(&self, state: ControlState) -> Palette {
        Palette {
            edge: self.edge,
            background: self.background.get(state),
            foreground: self.foreground,
        }
    }
}

impl Default for Colors {
    #[inline]
    fn default() -> Self {
        Colors::DEFAULT
    }
}

/// Colours used to draw one control
///
/// This is derived from the control's state alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Colour of outlines
    pub edge: Rgba8Srgb,
    /// Fill colour of the control's main shape
    pub background: Rgba8Srgb,
    /// Fill colour of marks, thumbs and indicators
    pub foreground: Rgba8Srgb,
}
