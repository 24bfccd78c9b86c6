// SPDX-License-Identifier: LGPL-3.0-only

//! Settings loading errors.

use std::path::PathBuf;

use smartscale_core::error::ScaleError;
use thiserror::Error;

/// Errors that can occur when loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read a settings file.
    #[error("Failed to read settings file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    /// Failed to parse a settings file.
    #[error("Failed to parse settings file {0}: {1}")]
    ParseError(PathBuf, String),

    /// Failed to parse inline TOML content.
    #[error("Failed to parse settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// XDG base directories could not be determined.
    #[error("XDG base directories unavailable: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    /// A value parsed but is not usable.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] ScaleError),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
