// SPDX-License-Identifier: LGPL-3.0-only

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::ScaleError;

/// The platform's image scale setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageScale {
    /// Small images.
    Small,
    /// Medium images, the default.
    #[default]
    Medium,
    /// Large images.
    Large,
}

impl ImageScale {
    /// The canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageScale::Small => "small",
            ImageScale::Medium => "medium",
            ImageScale::Large => "large",
        }
    }
}

impl fmt::Display for ImageScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageScale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(ImageScale::Small),
            "medium" => Ok(ImageScale::Medium),
            "large" => Ok(ImageScale::Large),
            _ => Err(ScaleError::UnknownImageScale(s.to_string())),
        }
    }
}

/// Scales icon containers so they keep hugging their image when the image
/// scale changes. Not damped by text size category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageScaler {
    ratio: f64,
}

impl ImageScaler {
    /// Container side per point of font size, before the image scale ratio.
    pub const CONTAINER_FACTOR: f64 = 2.0;

    /// Create a scaler for an image scale.
    pub fn new(image_scale: ImageScale) -> Self {
        let ratio = match image_scale {
            ImageScale::Small => 0.82,
            ImageScale::Medium => 1.0,
            ImageScale::Large => 1.18,
        };
        Self { ratio }
    }

    /// Create a scaler from a host-supplied image scale name.
    ///
    /// Names the host might add later are not errors; they scale by 1.0.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<ImageScale>() {
            Ok(image_scale) => Self::new(image_scale),
            Err(e) => {
                log::warn!("{e}; using ratio 1.0");
                Self { ratio: 1.0 }
            },
        }
    }

    /// The scale ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Side length of a square container around an image drawn at
    /// `base_font_size`.
    pub fn container_side(&self, base_font_size: f64) -> f64 {
        base_font_size * Self::CONTAINER_FACTOR * self.ratio
    }

    /// Scale both axes of a size by the ratio.
    pub fn scale_size(&self, size: Vector2<f64>) -> Vector2<f64> {
        size * self.ratio
    }
}

impl Default for ImageScaler {
    fn default() -> Self {
        Self::new(ImageScale::default())
    }
}
