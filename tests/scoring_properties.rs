//! Composite score behaviour across whole analysis results.

mod common;

use common::{example_result, quadratic_result, violation};
use solidlens::models::{AnalysisResult, LintFinding, Principle, SolidReport};
use solidlens::scoring::{
    composite_score, violation_count, Category, GrowthClass, ScoreBand, StatusLabel,
};

#[test]
fn test_perfect_result_scores_hundred() {
    let score = composite_score(&example_result());
    assert_eq!(score.percentage(), 100);
    assert_eq!(score.band(), ScoreBand::Strong);
    for category in Category::ALL {
        assert!(
            (score.points(category) - category.max_points()).abs() < 1e-9,
            "{} should be at its maximum",
            category.label()
        );
    }
}

#[test]
fn test_quadratic_result_breakdown() {
    let score = composite_score(&quadratic_result());
    assert!((score.solid - 28.0).abs() < 1e-9);
    assert!((score.time - 5.25).abs() < 1e-9);
    assert!((score.space - 7.5).abs() < 1e-9);
    assert_eq!(score.percentage(), 81);
    assert_eq!(violation_count(&quadratic_result()), 1);
}

#[test]
fn test_empty_result_scores_zero() {
    let score = composite_score(&AnalysisResult::default());
    assert_eq!(score.percentage(), 0);
    assert_eq!(score.band(), ScoreBand::Weak);
}

#[test]
fn test_score_never_exceeds_hundred() {
    let mut result = example_result();
    result.total_violations = Some(0);
    for label in ["O(1)", "O(log n)", "O(n)", "O(n log n)", "O(n^2)", "O(2^n)", "O(n!)", "huh"] {
        result.time_complexity = Some(label.to_string());
        result.space_complexity = Some(label.to_string());
        let score = composite_score(&result);
        assert!(score.total() <= 100.0 + 1e-9, "{} overflowed", label);
        assert!(score.total() >= 0.0, "{} went negative", label);
    }
}

#[test]
fn test_worse_growth_never_scores_higher() {
    let labels = [
        "O(1)",
        "O(log n)",
        "O(n)",
        "O(n log n)",
        "O(n^2)",
        "O(n^3)",
        "O(2^n)",
        "O(n!)",
    ];
    let mut result = example_result();
    let mut previous = f64::INFINITY;
    for label in labels {
        result.time_complexity = Some(label.to_string());
        let time = composite_score(&result).time;
        assert!(time <= previous, "{} scored above a better class", label);
        previous = time;
    }
}

#[test]
fn test_each_violation_costs_seven_points() {
    let mut result = example_result();
    let mut solid = SolidReport::uniform(common::pass("ok"));
    let baseline = composite_score(&result).total();

    for (i, principle) in Principle::ALL.iter().enumerate() {
        solid.set(*principle, violation("bad", "fix"));
        result.solid_report = Some(solid.clone());
        result.total_violations = None;

        let lost = baseline - composite_score(&result).total();
        assert!((lost - 7.0 * (i + 1) as f64).abs() < 1e-9);
        assert_eq!(violation_count(&result), (i + 1) as u32);
    }
}

#[test]
fn test_more_lint_findings_never_score_higher() {
    let mut result = example_result();
    let mut previous = f64::INFINITY;
    for findings in [0, 1, 2, 3, 5, 6, 10, 11, 40] {
        if let Some(clean) = result.clean_report.as_mut() {
            clean.pylint = Some(vec![LintFinding::default(); findings]);
        }
        let lint = composite_score(&result).clean_code.lint;
        assert!(lint <= previous, "{} findings scored higher", findings);
        previous = lint;
    }
}

#[test]
fn test_status_labels_follow_growth_class() {
    assert_eq!(StatusLabel::classify(Some("O(1)")), StatusLabel::Excellent);
    assert_eq!(StatusLabel::classify(Some("O(n log n)")), StatusLabel::Good);
    assert_eq!(StatusLabel::classify(Some("O(N^2)")), StatusLabel::Poor);
    assert_eq!(StatusLabel::classify(Some("depends")), StatusLabel::Review);
    assert_eq!(StatusLabel::classify(None), StatusLabel::Review);
    assert_eq!(GrowthClass::parse("O(N^2)"), GrowthClass::Polynomial(2));
}

#[test]
fn test_higher_naming_score_never_scores_lower() {
    let mut result = example_result();
    let mut previous = f64::NEG_INFINITY;
    for naming in (0..=100).map(f64::from) {
        if let Some(quality) = result
            .clean_report
            .as_mut()
            .and_then(|c| c.naming_quality.as_mut())
        {
            quality.naming_score = Some(naming);
        }
        let total = composite_score(&result).total();
        assert!(total >= previous, "naming {} lowered the total", naming);
        previous = total;
    }
    assert!((previous - 100.0).abs() < 1e-9);
}

#[test]
fn test_higher_maintainability_never_scores_lower() {
    let mut result = example_result();
    let mut previous = f64::NEG_INFINITY;
    for mi in (0..=100).map(f64::from) {
        if let Some(radon) = result.clean_report.as_mut().and_then(|c| c.radon.as_mut()) {
            radon.maintainability_index = Some(mi);
        }
        let total = composite_score(&result).total();
        assert!(total >= previous, "maintainability {} lowered the total", mi);
        previous = total;
    }
    assert!((previous - 100.0).abs() < 1e-9);
}
