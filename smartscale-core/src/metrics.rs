// SPDX-License-Identifier: LGPL-3.0-only

//! Baseline typography metrics.
//!
//! Each [TextStyle] carries a fixed leading (line height in points at the
//! reference size category). Text containers derive their base height from
//! it via [TextStyle::ideal_base_height].

use std::fmt;
use std::str::FromStr;

use crate::error::ScaleError;

/// A semantic text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    /// Large title.
    LargeTitle,
    /// First-level title.
    Title,
    /// Second-level title.
    Title2,
    /// Third-level title.
    Title3,
    /// Headline.
    Headline,
    /// Body text.
    #[default]
    Body,
    /// Callout.
    Callout,
    /// Subheadline.
    Subheadline,
    /// Footnote.
    Footnote,
    /// Caption.
    Caption,
    /// Secondary caption.
    Caption2,
}

impl TextStyle {
    /// Every text style, largest leading first.
    pub const ALL: [TextStyle; 11] = [
        TextStyle::LargeTitle,
        TextStyle::Title,
        TextStyle::Title2,
        TextStyle::Title3,
        TextStyle::Headline,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Subheadline,
        TextStyle::Footnote,
        TextStyle::Caption,
        TextStyle::Caption2,
    ];

    /// Line height in points at the reference size category.
    pub fn leading(self) -> f64 {
        match self {
            TextStyle::LargeTitle => 32.0,
            TextStyle::Title => 25.0,
            TextStyle::Title2 => 24.0,
            TextStyle::Title3 => 23.0,
            TextStyle::Headline | TextStyle::Body => 22.0,
            TextStyle::Callout => 21.0,
            TextStyle::Subheadline => 20.0,
            TextStyle::Footnote => 18.0,
            TextStyle::Caption => 16.0,
            TextStyle::Caption2 => 14.0,
        }
    }

    /// Height of a single-line container hugging this style:
    /// the leading plus half a leading of padding on each side, rounded to
    /// whole points.
    pub fn ideal_base_height(self) -> f64 {
        let leading = self.leading();
        leading + 2.0 * (leading / 2.0).round()
    }

    /// The canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            TextStyle::LargeTitle => "large-title",
            TextStyle::Title => "title",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Headline => "headline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption => "caption",
            TextStyle::Caption2 => "caption2",
        }
    }
}

/// Free-function form of [TextStyle::leading].
pub fn leading(style: TextStyle) -> f64 {
    style.leading()
}

/// Free-function form of [TextStyle::ideal_base_height].
pub fn ideal_base_height(style: TextStyle) -> f64 {
    style.ideal_base_height()
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextStyle {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "largetitle" => Ok(TextStyle::LargeTitle),
            "title" | "title1" => Ok(TextStyle::Title),
            "title2" => Ok(TextStyle::Title2),
            "title3" => Ok(TextStyle::Title3),
            "headline" => Ok(TextStyle::Headline),
            "body" => Ok(TextStyle::Body),
            "callout" => Ok(TextStyle::Callout),
            "subheadline" => Ok(TextStyle::Subheadline),
            "footnote" => Ok(TextStyle::Footnote),
            "caption" | "caption1" => Ok(TextStyle::Caption),
            "caption2" => Ok(TextStyle::Caption2),
            _ => Err(ScaleError::UnknownTextStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_and_body_share_leading() {
        assert_eq!(TextStyle::Headline.leading(), TextStyle::Body.leading());
    }

    #[test]
    fn test_leading_decreases_with_style() {
        let leadings: Vec<f64> = TextStyle::ALL.iter().map(|s| s.leading()).collect();
        assert!(leadings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ideal_base_height() {
        // Even leadings double exactly.
        assert_eq!(TextStyle::Body.ideal_base_height(), 44.0);
        assert_eq!(TextStyle::LargeTitle.ideal_base_height(), 64.0);
        assert_eq!(TextStyle::Caption2.ideal_base_height(), 28.0);
        // Odd leadings round the half-leading up before doubling.
        assert_eq!(TextStyle::Title.ideal_base_height(), 51.0);
        assert_eq!(TextStyle::Title3.ideal_base_height(), 47.0);
        assert_eq!(TextStyle::Callout.ideal_base_height(), 43.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("largeTitle".parse::<TextStyle>(), Ok(TextStyle::LargeTitle));
        assert_eq!("large-title".parse::<TextStyle>(), Ok(TextStyle::LargeTitle));
        assert_eq!("Caption2".parse::<TextStyle>(), Ok(TextStyle::Caption2));
        assert!("display".parse::<TextStyle>().is_err());
    }
}
