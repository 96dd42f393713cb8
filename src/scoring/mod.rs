//! Derivation functions over an [`AnalysisResult`].
//!
//! Everything in this module is pure and total: any field of the result may
//! be missing, and a missing input scores zero instead of failing.
//!
//! The composite score weights four categories:
//!
//! | Category         | Points |
//! |------------------|--------|
//! | Clean code       | 40     |
//! | SOLID            | 35     |
//! | Time complexity  | 15     |
//! | Space complexity | 10     |

mod growth;

pub use growth::{GrowthClass, StatusLabel};

use crate::models::{AnalysisResult, CleanReport, LintFinding, Principle};

pub const CLEAN_CODE_POINTS: f64 = 40.0;
pub const SOLID_POINTS: f64 = 35.0;
pub const TIME_POINTS: f64 = 15.0;
pub const SPACE_POINTS: f64 = 10.0;

const NAMING_POINTS: f64 = 15.0;
const MAINTAINABILITY_POINTS: f64 = 15.0;
const LINT_POINTS: f64 = 10.0;

/// A scoring category of the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CleanCode,
    Solid,
    TimeComplexity,
    SpaceComplexity,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::CleanCode,
        Category::Solid,
        Category::TimeComplexity,
        Category::SpaceComplexity,
    ];

    pub fn max_points(&self) -> f64 {
        match self {
            Category::CleanCode => CLEAN_CODE_POINTS,
            Category::Solid => SOLID_POINTS,
            Category::TimeComplexity => TIME_POINTS,
            Category::SpaceComplexity => SPACE_POINTS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::CleanCode => "Clean code",
            Category::Solid => "SOLID",
            Category::TimeComplexity => "Time complexity",
            Category::SpaceComplexity => "Space complexity",
        }
    }
}

/// Clean-code points split by sub-report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CleanCodeBreakdown {
    pub naming: f64,
    pub maintainability: f64,
    pub lint: f64,
}

impl CleanCodeBreakdown {
    pub fn total(&self) -> f64 {
        self.naming + self.maintainability + self.lint
    }
}

/// Points earned per category.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub clean_code: CleanCodeBreakdown,
    pub solid: f64,
    pub time: f64,
    pub space: f64,
}

impl ScoreBreakdown {
    pub fn points(&self, category: Category) -> f64 {
        match category {
            Category::CleanCode => self.clean_code.total(),
            Category::Solid => self.solid,
            Category::TimeComplexity => self.time,
            Category::SpaceComplexity => self.space,
        }
    }

    /// Unrounded composite in `0.0..=100.0`.
    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.points(*c)).sum()
    }

    /// Composite rounded to a whole percentage.
    pub fn percentage(&self) -> u8 {
        self.total().round().clamp(0.0, 100.0) as u8
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

/// Coarse rating of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => ScoreBand::Strong,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong",
            ScoreBand::Fair => "Fair",
            ScoreBand::Weak => "Weak",
        }
    }
}

/// Score every category of a result.
pub fn composite_score(result: &AnalysisResult) -> ScoreBreakdown {
    ScoreBreakdown {
        clean_code: clean_code_points(result.clean_report.as_ref()),
        solid: solid_points(result),
        time: complexity_points(result.time_complexity.as_deref(), TIME_POINTS),
        space: complexity_points(result.space_complexity.as_deref(), SPACE_POINTS),
    }
}

/// Clean-code points; an absent report or sub-report scores zero.
pub fn clean_code_points(report: Option<&CleanReport>) -> CleanCodeBreakdown {
    let Some(report) = report else {
        return CleanCodeBreakdown::default();
    };
    CleanCodeBreakdown {
        naming: NAMING_POINTS * tier(report.naming_score()),
        maintainability: MAINTAINABILITY_POINTS * tier(report.maintainability_index()),
        lint: lint_points(report.lint_findings()),
    }
}

/// 7 points for every principle the backend reported as passing.
///
/// A missing section scores zero, and so does a principle missing from it.
pub fn solid_points(result: &AnalysisResult) -> f64 {
    let Some(report) = result.solid_report.as_ref() else {
        return 0.0;
    };
    let per_principle = SOLID_POINTS / Principle::ALL.len() as f64;
    let passing = Principle::ALL
        .iter()
        .filter(|p| report.get(**p).is_some_and(|r| r.status.is_pass()))
        .count();
    per_principle * passing as f64
}

pub fn complexity_points(label: Option<&str>, max_points: f64) -> f64 {
    label
        .map(|l| max_points * GrowthClass::parse(l).score_fraction())
        .unwrap_or(0.0)
}

/// Number of SOLID violations, preferring the backend's own count.
pub fn violation_count(result: &AnalysisResult) -> u32 {
    if let Some(total) = result.total_violations {
        return total;
    }
    result
        .solid_report
        .as_ref()
        .map(|report| {
            Principle::ALL
                .iter()
                .filter(|p| report.get(**p).is_some_and(|r| r.status.is_violation()))
                .count() as u32
        })
        .unwrap_or(0)
}

/// Threshold rule shared by the 0-100 clean-code metrics.
fn tier(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v >= 80.0 => 1.0,
        Some(v) if v >= 60.0 => 2.0 / 3.0,
        Some(v) if v >= 40.0 => 1.0 / 3.0,
        _ => 0.0,
    }
}

fn lint_points(findings: Option<&[LintFinding]>) -> f64 {
    match findings.map(<[LintFinding]>::len) {
        None => 0.0,
        Some(0) => LINT_POINTS,
        Some(1..=2) => 7.0,
        Some(3..=5) => 4.0,
        Some(6..=10) => 2.0,
        Some(_) => 0.0,
    }
}
