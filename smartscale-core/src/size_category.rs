// SPDX-License-Identifier: LGPL-3.0-only

//! Preferred text size categories.
//!
//! A [SizeCategory] is the user's preferred content size, ordered from the
//! smallest standard size up to the largest accessibility size. Comparison is
//! by rank in [SizeCategory::ALL], so `min`/`max` and the comparison operators
//! behave the way layout code expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// A text size category chosen by the user.
///
/// The seven standard categories rank below the five accessibility
/// categories. [SizeCategory::Large] is the platform default and acts as the
/// zero point of every damping computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SizeCategory {
    /// Extra small.
    XSmall,
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large, the platform default.
    #[default]
    Large,
    /// Extra large.
    XLarge,
    /// Extra extra large.
    XxLarge,
    /// Extra extra extra large, the largest standard category.
    XxxLarge,
    /// First accessibility category.
    Accessibility1,
    /// Second accessibility category.
    Accessibility2,
    /// Third accessibility category.
    Accessibility3,
    /// Fourth accessibility category.
    Accessibility4,
    /// Fifth accessibility category, the largest one.
    Accessibility5,
}

impl SizeCategory {
    /// Every category in rank order.
    pub const ALL: [SizeCategory; 12] = [
        SizeCategory::XSmall,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::XLarge,
        SizeCategory::XxLarge,
        SizeCategory::XxxLarge,
        SizeCategory::Accessibility1,
        SizeCategory::Accessibility2,
        SizeCategory::Accessibility3,
        SizeCategory::Accessibility4,
        SizeCategory::Accessibility5,
    ];

    /// The platform default category. Damping is measured from here.
    pub const REFERENCE: SizeCategory = SizeCategory::Large;

    /// Position of the category in [SizeCategory::ALL].
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns `true` for the five accessibility categories.
    pub fn is_accessibility(self) -> bool {
        self >= SizeCategory::Accessibility1
    }

    /// Returns `true` if this is exactly [SizeCategory::REFERENCE].
    pub fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }

    /// The canonical kebab-case name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeCategory::XSmall => "x-small",
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::XLarge => "x-large",
            SizeCategory::XxLarge => "xx-large",
            SizeCategory::XxxLarge => "xxx-large",
            SizeCategory::Accessibility1 => "accessibility1",
            SizeCategory::Accessibility2 => "accessibility2",
            SizeCategory::Accessibility3 => "accessibility3",
            SizeCategory::Accessibility4 => "accessibility4",
            SizeCategory::Accessibility5 => "accessibility5",
        }
    }
}

/// The category actually used for scaling: the system category, capped at
/// the ceiling.
pub fn effective_category(system: SizeCategory, ceiling: SizeCategory) -> SizeCategory {
    system.min(ceiling)
}

/// Whether the host should offer a large content viewer.
///
/// True exactly when the system category was capped by the ceiling and the
/// ceiling itself is an accessibility category.
pub fn should_show_oversize_affordance(system: SizeCategory, ceiling: SizeCategory) -> bool {
    system > ceiling && ceiling.is_accessibility()
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeCategory {
    type Err = ScaleError;

    /// Accepts kebab-case (`xxx-large`), camelCase (`xxxLarge`) and
    /// snake_case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let category = match normalized.as_str() {
            "xsmall" | "extrasmall" => SizeCategory::XSmall,
            "small" => SizeCategory::Small,
            "medium" => SizeCategory::Medium,
            "large" => SizeCategory::Large,
            "xlarge" | "extralarge" => SizeCategory::XLarge,
            "xxlarge" | "extraextralarge" => SizeCategory::XxLarge,
            "xxxlarge" | "extraextraextralarge" => SizeCategory::XxxLarge,
            "accessibility1" | "accessibilitymedium" => SizeCategory::Accessibility1,
            "accessibility2" | "accessibilitylarge" => SizeCategory::Accessibility2,
            "accessibility3" | "accessibilityextralarge" => SizeCategory::Accessibility3,
            "accessibility4" | "accessibilityextraextralarge" => SizeCategory::Accessibility4,
            "accessibility5" | "accessibilityextraextraextralarge" => SizeCategory::Accessibility5,
            _ => return Err(ScaleError::UnknownSizeCategory(s.to_string())),
        };

        Ok(category)
    }
}

impl TryFrom<String> for SizeCategory {
    type Error = ScaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeCategory> for String {
    fn from(category: SizeCategory) -> Self {
        category.as_str().to_string()
    }
}
