// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Control types and interaction states

use thiserror::Error;

macro_rules! control_enum {
    (
        $(#[$meta:meta])*
        pub enum $T:ident {
            $( $(#[$vmeta:meta])* $V:ident = $n:literal => $name:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        pub enum $T {
            $( $(#[$vmeta])* $V = $n, )*
        }

        impl $T {
            /// All enumerants, in numeric order
            pub const ALL: &'static [$T] = &[ $( $T::$V, )* ];

            /// Convert from the raw numbering
            ///
            /// Values outside of the enumeration map to `Unknown`.
            pub fn from_raw(value: u32) -> Self {
                match value {
                    $( $n => $T::$V, )*
                    _ => $T::Unknown,
                }
            }

            /// The raw numbering
            #[inline]
            pub fn raw(self) -> u32 {
                self as u32
            }

            /// Name of the enumerant
            pub fn name(self) -> &'static str {
                match self {
                    $( $T::$V => $name, )*
                }
            }
        }

        impl std::fmt::Display for $T {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $T {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok($T::$V), )*
                    _ => Err(UnknownName(s.to_string())),
                }
            }
        }
    };
}

/// Error returned when parsing an unrecognised enumerant name
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognised name: {0:?}")]
pub struct UnknownName(pub String);

control_enum! {
    /// Interaction state of a control
    ///
    /// A control is in exactly one state at a time:
    ///
    /// -   `Disabled`: can't be modified or selected (HTML `disabled`)
    /// -   `ReadOnly`: can't be modified but can be selected
    /// -   `Normal`: idle, neither focused nor otherwise active
    /// -   `Hot`: the pointer hovers over another part of the same control
    /// -   `Hover`: the pointer is directly over the control (CSS `:hover`)
    /// -   `Focused`: the control has keyboard focus
    /// -   `Pressed`: the control is being triggered (mouse down or key)
    /// -   `Indeterminate`: indeterminate progress
    pub enum ControlState {
        #[default]
        Unknown = 0 => "Unknown",
        Disabled = 1 => "Disabled",
        ReadOnly = 2 => "ReadOnly",
        Normal = 3 => "Normal",
        Hot = 4 => "Hot",
        Hover = 5 => "Hover",
        Focused = 6 => "Focused",
        Pressed = 7 => "Pressed",
        Indeterminate = 8 => "Indeterminate",
    }
}

control_enum! {
    /// Type of a control, or control part
    ///
    /// What the user sees as a single control may be made of several parts.
    /// A scroll bar, for example, has two arrows, the thumb, the track on
    /// either side of the thumb and the grip drawn on the thumb.
    pub enum ControlType {
        #[default]
        Unknown = 0 => "Unknown",
        TextField = 1 => "TextField",
        PushButton = 2 => "PushButton",
        UncheckedBox = 3 => "UncheckedBox",
        CheckedBox = 4 => "CheckedBox",
        IndeterminateCheckbox = 5 => "IndeterminateCheckbox",
        UncheckedRadio = 6 => "UncheckedRadio",
        CheckedRadio = 7 => "CheckedRadio",
        HorizontalScrollTrackBack = 8 => "HorizontalScrollTrackBack",
        HorizontalScrollTrackForward = 9 => "HorizontalScrollTrackForward",
        HorizontalScrollThumb = 10 => "HorizontalScrollThumb",
        HorizontalScrollGrip = 11 => "HorizontalScrollGrip",
        VerticalScrollTrackBack = 12 => "VerticalScrollTrackBack",
        VerticalScrollTrackForward = 13 => "VerticalScrollTrackForward",
        VerticalScrollThumb = 14 => "VerticalScrollThumb",
        VerticalScrollGrip = 15 => "VerticalScrollGrip",
        LeftArrow = 16 => "LeftArrow",
        RightArrow = 17 => "RightArrow",
        UpArrow = 18 => "UpArrow",
        DownArrow = 19 => "DownArrow",
        HorizontalSliderTrack = 20 => "HorizontalSliderTrack",
        HorizontalSliderThumb = 21 => "HorizontalSliderThumb",
        VerticalSliderTrack = 22 => "VerticalSliderTrack",
        VerticalSliderThumb = 23 => "VerticalSliderThumb",
        DropDownButton = 24 => "DropDownButton",
        ProgressBar = 25 => "ProgressBar",
    }
}

impl ControlType {
    /// True if this type is drawn by [`ThemeControl::render`]
    ///
    /// [`ControlType::TextField`] and [`ControlType::ProgressBar`] need extra
    /// inputs and have dedicated entry points.
    ///
    /// [`ThemeControl::render`]: crate::ThemeControl::render
    #[inline]
    pub fn is_generic(self) -> bool {
        !matches!(self, ControlType::TextField | ControlType::ProgressBar)
    }
}
