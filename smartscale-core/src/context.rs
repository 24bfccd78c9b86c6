// SPDX-License-Identifier: LGPL-3.0-only

//! Explicit size context passed down a view hierarchy.
//!
//! The host reads the user's size category once and wraps it in a
//! [ScaleContext] together with a ceiling. Nested scopes narrow the ceiling
//! with [ScaleContext::constrained] and hand the new context to their
//! children; nothing is looked up from global state.
//!
//! ```rust
//! use smartscale_core::context::ScaleContext;
//! use smartscale_core::size_category::SizeCategory;
//!
//! let root = ScaleContext::new(SizeCategory::Accessibility4);
//! assert_eq!(root.effective_category(), SizeCategory::Accessibility1);
//! assert!(root.should_show_oversize_affordance());
//!
//! let toolbar = root.constrained(Some(SizeCategory::XxLarge));
//! assert_eq!(toolbar.effective_category(), SizeCategory::XxLarge);
//! assert!(!toolbar.should_show_oversize_affordance());
//! ```

use nalgebra::Vector2;

use crate::metrics::TextStyle;
use crate::scaling::{DampedPadding, ScaleFontSource, ScaledMetricsSize, TypographyScaler};
use crate::size_category::{self, SizeCategory};
use crate::strategy::ScaleRatios;

/// The system size category and the ceiling in force for a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleContext {
    system: SizeCategory,
    ceiling: SizeCategory,
}

impl ScaleContext {
    /// Ceiling used when no scope sets one.
    pub const DEFAULT_CEILING: SizeCategory = SizeCategory::Accessibility1;

    /// Create a context with the default ceiling.
    pub fn new(system: SizeCategory) -> Self {
        Self {
            system,
            ceiling: Self::DEFAULT_CEILING,
        }
    }

    /// Replace the ceiling.
    pub fn with_ceiling(mut self, ceiling: SizeCategory) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Context for a nested scope. An explicit ceiling wins; `None` keeps
    /// the ceiling inherited from this scope.
    pub fn constrained(self, ceiling: Option<SizeCategory>) -> Self {
        match ceiling {
            Some(ceiling) => self.with_ceiling(ceiling),
            None => self,
        }
    }

    /// The user's size category as reported by the system.
    pub fn system(&self) -> SizeCategory {
        self.system
    }

    /// The ceiling in force.
    pub fn ceiling(&self) -> SizeCategory {
        self.ceiling
    }

    /// The category used for scaling.
    pub fn effective_category(&self) -> SizeCategory {
        size_category::effective_category(self.system, self.ceiling)
    }

    /// Whether content in this scope was capped hard enough to warrant a
    /// large content viewer.
    pub fn should_show_oversize_affordance(&self) -> bool {
        size_category::should_show_oversize_affordance(self.system, self.ceiling)
    }

    /// Damped padding with the default padding ratios.
    pub fn damped_padding(&self, base_padding: f64, scaled_metric: f64) -> f64 {
        self.damped_padding_with(base_padding, scaled_metric, DampedPadding::RATIOS)
    }

    /// Damped padding with explicit ratios.
    pub fn damped_padding_with(&self, base_padding: f64, scaled_metric: f64, ratios: ScaleRatios) -> f64 {
        DampedPadding::new(base_padding, self.effective_category())
            .with_ratios(ratios)
            .make(scaled_metric)
    }

    /// Damped frame size with the default size ratios.
    pub fn scaled_size(&self, base_size: Vector2<f64>, scaled_size: Vector2<f64>) -> Vector2<f64> {
        self.scaled_size_with(base_size, scaled_size, ScaledMetricsSize::RATIOS)
    }

    /// Damped frame size with explicit ratios.
    pub fn scaled_size_with(
        &self,
        base_size: Vector2<f64>,
        scaled_size: Vector2<f64>,
        ratios: ScaleRatios,
    ) -> Vector2<f64> {
        ScaledMetricsSize::new(base_size, self.effective_category())
            .with_ratios(ratios)
            .make(scaled_size.x, scaled_size.y)
    }

    /// Damped text container height with the default typography ratios.
    pub fn text_container_height(&self, text_style: TextStyle, scaled_metric: f64) -> f64 {
        self.text_container_height_with(text_style.into(), scaled_metric, TypographyScaler::RATIOS)
    }

    /// Text container height for any font source, with explicit ratios.
    pub fn text_container_height_with(
        &self,
        source: ScaleFontSource,
        scaled_metric: f64,
        ratios: ScaleRatios,
    ) -> f64 {
        TypographyScaler::new(self.effective_category())
            .with_ratios(ratios)
            .container_height(source, scaled_metric)
    }
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self::new(SizeCategory::REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        let context = ScaleContext::default();
        assert_eq!(context.ceiling(), SizeCategory::Accessibility1);
        assert_eq!(context.effective_category(), SizeCategory::Large);
    }

    #[test]
    fn test_explicit_override_wins() {
        let parent = ScaleContext::new(SizeCategory::Accessibility3).with_ceiling(SizeCategory::Accessibility2);
        assert_eq!(parent.constrained(None).ceiling(), SizeCategory::Accessibility2);
        assert_eq!(parent.constrained(Some(SizeCategory::Medium)).ceiling(), SizeCategory::Medium);
        // A nested ceiling may also be looser than the parent's.
        assert_eq!(
            parent.constrained(Some(SizeCategory::Accessibility5)).effective_category(),
            SizeCategory::Accessibility3
        );
    }

    #[test]
    fn test_capped_to_reference_skips_damping() {
        let context = ScaleContext::new(SizeCategory::Accessibility5).with_ceiling(SizeCategory::Large);
        assert_eq!(context.damped_padding(12.0, 40.0), 12.0);
        assert_eq!(
            context.scaled_size(Vector2::new(30.0, 20.0), Vector2::new(90.0, 60.0)),
            Vector2::new(30.0, 20.0)
        );
        assert_eq!(context.text_container_height(TextStyle::Footnote, 80.0), 36.0);
    }

    #[test]
    fn test_entry_points_use_effective_category() {
        let context = ScaleContext::new(SizeCategory::Accessibility5);
        // Effective category is accessibility1: 16 + sqrt(9) * 2.
        assert_eq!(context.damped_padding(16.0, 25.0), 22.0);
        assert_eq!(
            context.scaled_size(Vector2::new(100.0, 100.0), Vector2::new(200.0, 80.0)),
            Vector2::new(110.0, 100.0)
        );
    }

    #[test]
    fn test_fixed_font_source() {
        let context = ScaleContext::new(SizeCategory::XxLarge);
        assert_eq!(
            context.text_container_height_with(ScaleFontSource::Fixed(18.0), 99.0, TypographyScaler::RATIOS),
            36.0
        );
    }
}
