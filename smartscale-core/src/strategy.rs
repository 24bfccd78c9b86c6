// SPDX-License-Identifier: LGPL-3.0-only

//! Strategy selection and damping.
//!
//! Every damped use-case goes through the same two steps:
//!
//! 1. [select_strategy] picks an interpolation from the effective
//!    [SizeCategory] and the use-case's [ScaleRatios].
//! 2. [apply_damping] moves from the base value towards the platform's scaled
//!    metric according to that strategy.
//!
//! ```rust
//! use smartscale_core::size_category::SizeCategory;
//! use smartscale_core::strategy::{apply_damping, select_strategy, ScaleRatios};
//!
//! let ratios = ScaleRatios::new(1.0, 0.3, 0.225);
//! let strategy = select_strategy(SizeCategory::XxxLarge, &ratios);
//! assert_eq!(apply_damping(100.0, 150.0, strategy), 115.0);
//! ```

use crate::error::{ScaleError, ScaleResult};
use crate::size_category::SizeCategory;

/// How a base value grows towards its scaled metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleStrategy {
    /// `base + sqrt(max(0, target - base)) * ratio`. Used for accessibility
    /// categories so growth stays sub-linear.
    SquareRoot(f64),
    /// `base + (target - base) * ratio`. Used for standard categories.
    Proportional(f64),
}

impl ScaleStrategy {
    /// Apply the strategy to a base value and its scaled metric.
    pub fn apply(self, base: f64, target: f64) -> f64 {
        match self {
            ScaleStrategy::SquareRoot(ratio) => {
                let extra = target - base;
                if extra < 0.0 {
                    log::debug!("Scaled metric {target} is below base {base}; keeping base");
                }
                base + extra.max(0.0).sqrt() * ratio
            },
            ScaleStrategy::Proportional(ratio) => base + (target - base) * ratio,
        }
    }
}

/// The three tunable ratios of a damped use-case.
///
/// Each use-case owns its own triple; they calibrate different visual
/// magnitudes and are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatios {
    /// Ratio for the square-root strategy (accessibility categories).
    pub square_root: f64,
    /// Proportional ratio for standard categories above the reference.
    pub large: f64,
    /// Proportional ratio for categories at or below the reference.
    pub small: f64,
}

impl ScaleRatios {
    /// Create a ratio triple.
    pub const fn new(square_root: f64, large: f64, small: f64) -> Self {
        Self {
            square_root,
            large,
            small,
        }
    }

    /// Reject negative, NaN and infinite ratios.
    pub fn validate(&self) -> ScaleResult<()> {
        for (name, value) in [
            ("square_root", self.square_root),
            ("large", self.large),
            ("small", self.small),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScaleError::invalid_ratio(name, value));
            }
        }
        Ok(())
    }
}

/// Pick the interpolation for a category.
///
/// Accessibility categories use the square-root strategy; standard
/// categories above [SizeCategory::REFERENCE] use the large proportional
/// ratio; everything else uses the small proportional ratio.
pub fn select_strategy(category: SizeCategory, ratios: &ScaleRatios) -> ScaleStrategy {
    let strategy = if category.is_accessibility() {
        ScaleStrategy::SquareRoot(ratios.square_root)
    } else if category > SizeCategory::REFERENCE {
        ScaleStrategy::Proportional(ratios.large)
    } else {
        ScaleStrategy::Proportional(ratios.small)
    };

    log::trace!("Selected {strategy:?} for {category}");
    strategy
}

/// Damp `base` towards `target` using `strategy`.
pub fn apply_damping(base: f64, target: f64, strategy: ScaleStrategy) -> f64 {
    strategy.apply(base, target)
}

/// Shared behaviour of the category-damped use-cases.
///
/// Implementors only say which category they scale for and which ratio
/// triple they use; strategy selection and damping are provided.
pub trait DampedScale {
    /// The effective size category to scale for.
    fn size_category(&self) -> SizeCategory;

    /// The use-case's ratio triple.
    fn ratios(&self) -> &ScaleRatios;

    /// The strategy for [DampedScale::size_category].
    fn strategy(&self) -> ScaleStrategy {
        select_strategy(self.size_category(), self.ratios())
    }

    /// Damp `base` towards the platform's `scaled_metric`.
    fn scale(&self, base: f64, scaled_metric: f64) -> f64 {
        apply_damping(base, scaled_metric, self.strategy())
    }
}
