// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme config file formats

use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "serde")]
use super::Config;
use crate::control::ControlState;

/// Theme config errors
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("theme config: invalid JSON")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "ron")]
    #[error("theme config: RON encoding failed")]
    RonEncode(#[from] ron::Error),

    #[cfg(feature = "ron")]
    #[error("theme config: invalid RON")]
    RonDecode(#[from] ron::error::SpannedError),

    #[cfg(feature = "toml")]
    #[error("theme config: invalid TOML")]
    TomlDecode(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("theme config: TOML encoding failed")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("theme config: file access failed")]
    Io(#[from] std::io::Error),

    #[error("theme config: no file format matches {0:?}")]
    UnknownExtension(PathBuf),

    #[error("theme config: {0} support is not enabled")]
    Unsupported(Format),

    #[error("states {0} and {1} share a marker colour")]
    DuplicateMarker(ControlState, ControlState),

    #[error("marker colour of state {0} is not opaque")]
    TranslucentMarker(ControlState),

    #[error("dimension `{0}` must be at least 1 (found {1})")]
    InvalidDimension(&'static str, i32),
}

/// A theme config file format
///
/// Each format needs its feature (`json`, `toml` or `ron`) to be usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Toml,
    Ron,
}

impl Format {
    /// Select a format from the file extension of `path`
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "ron" => Some(Format::Ron),
            _ => None,
        }
    }

    /// Like [`Format::from_path`], failing with [`Error::UnknownExtension`]
    pub fn expect_path(path: &Path) -> Result<Format, Error> {
        Format::from_path(path).ok_or_else(|| Error::UnknownExtension(path.to_path_buf()))
    }

    /// The conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Ron => "ron",
        }
    }

    /// Decode a config
    ///
    /// Missing fields take their defaults. The result is not validated.
    #[cfg(feature = "serde")]
    pub fn parse(self, text: &str) -> Result<Config, Error> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::from_str(text)?),
            #[cfg(feature = "ron")]
            Format::Ron => Ok(ron::from_str(text)?),
            #[allow(unreachable_patterns)]
            _ => {
                let _ = text;
                Err(Error::Unsupported(self))
            }
        }
    }

    /// Encode a config as human-readable text
    #[cfg(feature = "serde")]
    pub fn emit(self, config: &Config) -> Result<String, Error> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::to_string_pretty(config)?),
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::to_string_pretty(config)?),
            #[cfg(feature = "ron")]
            Format::Ron => Ok(ron::ser::to_string_pretty(
                config,
                ron::ser::PrettyConfig::default(),
            )?),
            #[allow(unreachable_patterns)]
            _ => {
                let _ = config;
                Err(Error::Unsupported(self))
            }
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Ron => "RON",
        })
    }
}
