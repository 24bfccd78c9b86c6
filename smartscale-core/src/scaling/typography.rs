// SPDX-License-Identifier: LGPL-3.0-only

use crate::metrics::TextStyle;
use crate::size_category::SizeCategory;
use crate::strategy::{DampedScale, ScaleRatios};

/// Damped heights for single-line text containers (capsules, pills, badges).
///
/// The base height comes from [TextStyle::ideal_base_height]. Results are
/// rounded to whole points. Callers usually reuse the height as the
/// container's minimum width so short labels stay square.
///
/// Note that the square-root ratio here (1.0) is lighter than
/// [DampedPadding](crate::scaling::DampedPadding)'s (2.0), not heavier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypographyScaler {
    size_category: SizeCategory,
    ratios: ScaleRatios,
}

impl TypographyScaler {
    /// Default ratios for text containers.
    pub const RATIOS: ScaleRatios = ScaleRatios::new(1.0, 0.3, 0.225);

    /// Create a scaler for the given effective category.
    pub fn new(size_category: SizeCategory) -> Self {
        Self {
            size_category,
            ratios: Self::RATIOS,
        }
    }

    /// Use a different ratio triple.
    pub fn with_ratios(mut self, ratios: ScaleRatios) -> Self {
        self.ratios = ratios;
        self
    }

    /// Container height for `text_style`, given the platform's scaled metric
    /// for its ideal base height.
    pub fn make(&self, text_style: TextStyle, scaled_metric: f64) -> f64 {
        let base_height = text_style.ideal_base_height();

        if self.size_category.is_reference() {
            return base_height;
        }

        self.scale(base_height, scaled_metric).round()
    }

    /// Container height for either a fixed font size or a dynamic text style.
    ///
    /// Fixed sizes opt out of dynamic type, so `scaled_metric` is ignored for
    /// them.
    pub fn container_height(&self, source: ScaleFontSource, scaled_metric: f64) -> f64 {
        match source {
            ScaleFontSource::Fixed(_) => source.base_height(),
            ScaleFontSource::Dynamic(style) => self.make(style, scaled_metric),
        }
    }
}

impl DampedScale for TypographyScaler {
    fn size_category(&self) -> SizeCategory {
        self.size_category
    }

    fn ratios(&self) -> &ScaleRatios {
        &self.ratios
    }
}

/// Where a text container takes its font size from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFontSource {
    /// A fixed point size that does not follow dynamic type.
    Fixed(f64),
    /// A semantic text style that follows dynamic type.
    Dynamic(TextStyle),
}

impl ScaleFontSource {
    /// Container height at the reference category.
    pub fn base_height(self) -> f64 {
        match self {
            ScaleFontSource::Fixed(size) => size * 2.0,
            ScaleFontSource::Dynamic(style) => style.ideal_base_height(),
        }
    }
}

impl From<TextStyle> for ScaleFontSource {
    fn from(style: TextStyle) -> Self {
        ScaleFontSource::Dynamic(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_returns_ideal_height() {
        let scaler = TypographyScaler::new(SizeCategory::Large);
        for style in TextStyle::ALL {
            assert_eq!(scaler.make(style, 1000.0), style.ideal_base_height());
        }
    }

    #[test]
    fn test_damped_and_rounded() {
        // body: base 44, 44 + (64 - 44) * 0.3 = 50
        assert_eq!(TypographyScaler::new(SizeCategory::XxxLarge).make(TextStyle::Body, 64.0), 50.0);
        // title2: base 48, 48 + sqrt(141 - 48) = 57.64 -> 58
        assert_eq!(
            TypographyScaler::new(SizeCategory::Accessibility5).make(TextStyle::Title2, 141.0),
            58.0
        );
        // caption: base 32, 32 + (28 - 32) * 0.225 = 31.1 -> 31
        assert_eq!(TypographyScaler::new(SizeCategory::Small).make(TextStyle::Caption, 28.0), 31.0);
    }

    #[test]
    fn test_square_root_ratio_lighter_than_padding() {
        use crate::scaling::DampedPadding;
        assert_eq!(TypographyScaler::RATIOS.square_root, 1.0);
        assert!(TypographyScaler::RATIOS.square_root < DampedPadding::RATIOS.square_root);
    }

    #[test]
    fn test_fixed_source_ignores_category() {
        let scaler = TypographyScaler::new(SizeCategory::Accessibility5);
        assert_eq!(scaler.container_height(ScaleFontSource::Fixed(22.0), 500.0), 44.0);
    }

    #[test]
    fn test_dynamic_source_delegates() {
        let scaler = TypographyScaler::new(SizeCategory::XLarge);
        assert_eq!(
            scaler.container_height(TextStyle::Headline.into(), 54.0),
            scaler.make(TextStyle::Headline, 54.0)
        );
    }
}
