// SPDX-License-Identifier: LGPL-3.0-only

use nalgebra::Vector2;

use crate::size_category::SizeCategory;
use crate::strategy::{DampedScale, ScaleRatios};

/// A frame size damped independently on each axis.
///
/// Width and height each get their own scaled metric, so a target below the
/// base on one axis only affects that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetricsSize {
    base_size: Vector2<f64>,
    size_category: SizeCategory,
    ratios: ScaleRatios,
}

impl ScaledMetricsSize {
    /// Default ratios for frame sizes.
    pub const RATIOS: ScaleRatios = ScaleRatios::new(1.0, 0.3, 0.225);

    /// Create a damped size for the given effective category.
    pub fn new(base_size: Vector2<f64>, size_category: SizeCategory) -> Self {
        Self {
            base_size,
            size_category,
            ratios: Self::RATIOS,
        }
    }

    /// Use a different ratio triple.
    pub fn with_ratios(mut self, ratios: ScaleRatios) -> Self {
        self.ratios = ratios;
        self
    }

    /// The undamped size.
    pub fn base_size(&self) -> Vector2<f64> {
        self.base_size
    }

    /// Compute the size from the platform's scaled width and height.
    pub fn make(&self, scaled_width: f64, scaled_height: f64) -> Vector2<f64> {
        if self.size_category.is_reference() {
            return self.base_size;
        }

        Vector2::new(
            self.scale(self.base_size.x, scaled_width),
            self.scale(self.base_size.y, scaled_height),
        )
    }
}

impl DampedScale for ScaledMetricsSize {
    fn size_category(&self) -> SizeCategory {
        self.size_category
    }

    fn ratios(&self) -> &ScaleRatios {
        &self.ratios
    }
}
