// SPDX-License-Identifier: LGPL-3.0-only

use crate::size_category::SizeCategory;
use crate::strategy::{DampedScale, ScaleRatios};

/// Padding that grows with the text size, but slower than the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedPadding {
    base_padding: f64,
    size_category: SizeCategory,
    ratios: ScaleRatios,
}

impl DampedPadding {
    /// Default ratios for padding.
    pub const RATIOS: ScaleRatios = ScaleRatios::new(2.0, 0.6, 0.45);

    /// Create a damped padding for the given effective category.
    pub fn new(base_padding: f64, size_category: SizeCategory) -> Self {
        Self {
            base_padding,
            size_category,
            ratios: Self::RATIOS,
        }
    }

    /// Use a different ratio triple.
    pub fn with_ratios(mut self, ratios: ScaleRatios) -> Self {
        self.ratios = ratios;
        self
    }

    /// The undamped padding.
    pub fn base_padding(&self) -> f64 {
        self.base_padding
    }

    /// Compute the padding from the platform's scaled metric.
    pub fn make(&self, scaled_metric: f64) -> f64 {
        if self.size_category.is_reference() {
            return self.base_padding;
        }

        self.scale(self.base_padding, scaled_metric)
    }
}

impl DampedScale for DampedPadding {
    fn size_category(&self) -> SizeCategory {
        self.size_category
    }

    fn ratios(&self) -> &ScaleRatios {
        &self.ratios
    }
}
