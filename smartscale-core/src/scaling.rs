// SPDX-License-Identifier: LGPL-3.0-only

//! The scaling use-cases.
//!
//! Three of them are damped by size category through
//! [DampedScale](crate::strategy::DampedScale) and share one rule: at exactly
//! [SizeCategory::REFERENCE](crate::size_category::SizeCategory::REFERENCE)
//! the base value is returned untouched, whatever the scaled metric says.
//! Image containers scale by a fixed ratio instead.

/// Damped padding.
pub mod padding;
/// Damped two-dimensional sizes.
pub mod size;
/// Damped text container heights.
pub mod typography;
/// Image-scale driven container sizes.
pub mod image;

pub use image::{ImageScale, ImageScaler};
pub use padding::DampedPadding;
pub use size::ScaledMetricsSize;
pub use typography::{ScaleFontSource, TypographyScaler};
