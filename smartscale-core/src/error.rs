// SPDX-License-Identifier: LGPL-3.0-only

//! Parsing and validation errors.
//!
//! The scaling computations themselves never fail. Errors only appear at the
//! edges, when names coming from configuration or the host are turned into
//! typed values, or when a ratio override is checked.

use thiserror::Error;

/// Errors that can occur when parsing or validating scaling inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// The name does not match any size category.
    #[error("Unknown size category: {0}")]
    UnknownSizeCategory(String),

    /// The name does not match any text style.
    #[error("Unknown text style: {0}")]
    UnknownTextStyle(String),

    /// The name does not match any image scale.
    #[error("Unknown image scale: {0}")]
    UnknownImageScale(String),

    /// A ratio override is negative, NaN or infinite.
    #[error("Invalid {ratio} ratio: {value}")]
    InvalidRatio {
        /// Which ratio of the triple was rejected.
        ratio: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type alias for parsing and validation.
pub type ScaleResult<T> = Result<T, ScaleError>;

impl ScaleError {
    /// Create an invalid ratio error.
    pub fn invalid_ratio(ratio: &'static str, value: f64) -> Self {
        Self::InvalidRatio { ratio, value }
    }
}
