//! Tests for the damped use-cases against the platform reference category

use nalgebra::Vector2;
use smartscale_core::metrics::TextStyle;
use smartscale_core::scaling::{DampedPadding, ScaledMetricsSize, TypographyScaler};
use smartscale_core::size_category::SizeCategory;
use smartscale_core::strategy::{apply_damping, select_strategy, ScaleRatios, ScaleStrategy};

fn square() -> Vector2<f64> {
    Vector2::new(100.0, 100.0)
}

#[test]
fn test_standard_scaling_returns_base() {
    let calculator = ScaledMetricsSize::new(square(), SizeCategory::Large);

    let result = calculator.make(100.0, 100.0);
    assert_eq!(result, square());

    let result = calculator.make(180.0, 20.0);
    assert_eq!(result, square());
}

#[test]
fn test_large_scaling() {
    let calculator = ScaledMetricsSize::new(square(), SizeCategory::XxxLarge);

    let result = calculator.make(150.0, 150.0);

    // 100 + (50 * 0.3)
    assert_eq!(result.x, 115.0);
    assert_eq!(result.y, 115.0);
}

#[test]
fn test_accessibility_scaling() {
    let calculator = ScaledMetricsSize::new(square(), SizeCategory::Accessibility1);

    let result = calculator.make(200.0, 200.0);

    // 100 + sqrt(100)
    assert_eq!(result.x, 110.0);
    assert_eq!(result.y, 110.0);
}

#[test]
fn test_corrupted_metrics_keep_base() {
    let calculator = ScaledMetricsSize::new(square(), SizeCategory::Accessibility1);

    let result = calculator.make(80.0, 80.0);

    assert_eq!(result.x, 100.0);
    assert_eq!(result.y, 100.0);
}

#[test]
fn test_asymmetric_scaling() {
    let calculator = ScaledMetricsSize::new(Vector2::new(100.0, 50.0), SizeCategory::XxxLarge);

    let result = calculator.make(150.0, 75.0);

    // Width: 100 + (50 * 0.3), height: 50 + (25 * 0.3)
    assert_eq!(result.x, 115.0);
    assert_eq!(result.y, 57.5);
}

#[test]
fn test_typography_scaler_stays_bounded() {
    let scaler = TypographyScaler::new(SizeCategory::Accessibility5);

    let height = scaler.make(TextStyle::Title2, 141.0);

    assert!(height > TextStyle::Title2.ideal_base_height());
    assert!(height < 141.0);
}

#[test]
fn test_reference_ignores_target_for_every_use_case() {
    for target in [-50.0, 0.0, 13.0, 1e6] {
        assert_eq!(DampedPadding::new(8.0, SizeCategory::Large).make(target), 8.0);
        assert_eq!(
            ScaledMetricsSize::new(Vector2::new(10.0, 20.0), SizeCategory::Large).make(target, target),
            Vector2::new(10.0, 20.0)
        );
        assert_eq!(
            TypographyScaler::new(SizeCategory::Large).make(TextStyle::Callout, target),
            TextStyle::Callout.ideal_base_height()
        );
    }
}

#[test]
fn test_below_reference_is_still_damped() {
    // Only the reference itself short-circuits; smaller categories damp
    // with the small ratio.
    let calculator = ScaledMetricsSize::new(square(), SizeCategory::Medium);
    let result = calculator.make(80.0, 120.0);
    assert!((result.x - 95.5).abs() < 1e-9);
    assert!((result.y - 104.5).abs() < 1e-9);
}

#[test]
fn test_use_case_ratios_differ() {
    assert_ne!(DampedPadding::RATIOS, ScaledMetricsSize::RATIOS);

    let strategy = select_strategy(SizeCategory::XLarge, &DampedPadding::RATIOS);
    assert_eq!(strategy, ScaleStrategy::Proportional(0.6));
    assert_eq!(apply_damping(10.0, 20.0, strategy), 16.0);

    let custom = ScaleRatios::new(0.5, 0.5, 0.5);
    assert_eq!(
        ScaledMetricsSize::new(square(), SizeCategory::Accessibility2)
            .with_ratios(custom)
            .make(164.0, 100.0),
        Vector2::new(104.0, 100.0)
    );
}
