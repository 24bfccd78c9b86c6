#![warn(missing_docs)]

//! Accessibility-aware scaling for padding, frames and text containers.

pub use nalgebra as math;

pub use smartscale_core as core;
#[cfg(feature = "services")]
pub use smartscale_services as services;

/// A "prelude" for users of smartscale.
///
/// Importing this module brings into scope the types needed to scale
/// dimensions from a host UI layer.
///
/// ```rust
/// use smartscale::prelude::*;
///
/// let context = ScaleContext::new(SizeCategory::Accessibility2);
/// let padding = context.damped_padding(16.0, 41.0);
/// assert_eq!(padding, 26.0);
/// ```
pub mod prelude {
    pub use crate::core::context::ScaleContext;
    pub use crate::core::error::{ScaleError, ScaleResult};
    pub use crate::core::metrics::TextStyle;
    pub use crate::core::scaling::{
        DampedPadding, ImageScale, ImageScaler, ScaleFontSource, ScaledMetricsSize, TypographyScaler,
    };
    pub use crate::core::size_category::{effective_category, should_show_oversize_affordance, SizeCategory};
    pub use crate::core::strategy::{apply_damping, select_strategy, DampedScale, ScaleRatios, ScaleStrategy};

    #[cfg(feature = "services")]
    pub use crate::services::settings::{ScaleSettings, SettingsRegistry};

    // Math
    pub use nalgebra::Vector2;
}
