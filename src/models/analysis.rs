//! Analysis payload types received from the analyzer backend.
//!
//! The backend owns this schema and sends it wholesale for every snippet.
//! Every field is optional on the wire: a half-finished analysis (or the
//! backend's own error fallback) must deserialize cleanly, and every consumer
//! applies a default at the point of use.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// SOLID
// ============================================================================

/// One of the five SOLID principles, keyed by its initial on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// All principles in S, O, L, I, D order.
    pub const ALL: [Principle; 5] = [
        Principle::SingleResponsibility,
        Principle::OpenClosed,
        Principle::LiskovSubstitution,
        Principle::InterfaceSegregation,
        Principle::DependencyInversion,
    ];

    /// Single-letter key used by the backend.
    pub fn key(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "S",
            Principle::OpenClosed => "O",
            Principle::LiskovSubstitution => "L",
            Principle::InterfaceSegregation => "I",
            Principle::DependencyInversion => "D",
        }
    }

    /// Human-readable principle name.
    pub fn name(&self) -> &'static str {
        match self {
            Principle::SingleResponsibility => "Single Responsibility",
            Principle::OpenClosed => "Open/Closed",
            Principle::LiskovSubstitution => "Liskov Substitution",
            Principle::InterfaceSegregation => "Interface Segregation",
            Principle::DependencyInversion => "Dependency Inversion",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.key())
    }
}

/// Verdict for a single principle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PrincipleStatus {
    #[default]
    Pass,
    Violation,
    /// Anything the backend sends that is not a known verdict
    #[serde(other)]
    Unknown,
}

impl PrincipleStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, PrincipleStatus::Pass)
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, PrincipleStatus::Violation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipleStatus::Pass => "Pass",
            PrincipleStatus::Violation => "Violation",
            PrincipleStatus::Unknown => "Unknown",
        }
    }
}

/// Per-principle finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PrincipleReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PrincipleStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestion: String,
}

impl PrincipleReport {
    /// The "Pass / Ready" card shown before any analysis has arrived.
    pub fn ready() -> Self {
        Self {
            status: PrincipleStatus::Pass,
            reason: "Ready".to_string(),
            suggestion: "N/A".to_string(),
        }
    }
}

/// SOLID section of the payload. The backend sends `{}` when it bailed out,
/// so each principle is optional on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SolidReport {
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub single_responsibility: Option<PrincipleReport>,
    #[serde(rename = "O", default, skip_serializing_if = "Option::is_none")]
    pub open_closed: Option<PrincipleReport>,
    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub liskov_substitution: Option<PrincipleReport>,
    #[serde(rename = "I", default, skip_serializing_if = "Option::is_none")]
    pub interface_segregation: Option<PrincipleReport>,
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    pub dependency_inversion: Option<PrincipleReport>,
}

impl SolidReport {
    /// Report where every principle carries the same verdict.
    pub fn uniform(report: PrincipleReport) -> Self {
        Self {
            single_responsibility: Some(report.clone()),
            open_closed: Some(report.clone()),
            liskov_substitution: Some(report.clone()),
            interface_segregation: Some(report.clone()),
            dependency_inversion: Some(report),
        }
    }

    pub fn get(&self, principle: Principle) -> Option<&PrincipleReport> {
        match principle {
            Principle::SingleResponsibility => self.single_responsibility.as_ref(),
            Principle::OpenClosed => self.open_closed.as_ref(),
            Principle::LiskovSubstitution => self.liskov_substitution.as_ref(),
            Principle::InterfaceSegregation => self.interface_segregation.as_ref(),
            Principle::DependencyInversion => self.dependency_inversion.as_ref(),
        }
    }

    pub fn set(&mut self, principle: Principle, report: PrincipleReport) {
        let slot = match principle {
            Principle::SingleResponsibility => &mut self.single_responsibility,
            Principle::OpenClosed => &mut self.open_closed,
            Principle::LiskovSubstitution => &mut self.liskov_substitution,
            Principle::InterfaceSegregation => &mut self.interface_segregation,
            Principle::DependencyInversion => &mut self.dependency_inversion,
        };
        *slot = Some(report);
    }
}

// ============================================================================
// Clean code
// ============================================================================

/// A naming-convention problem found by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamingIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// `function`, `class` or `variable`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub violation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamingQuality {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<NamingIssue>,
}

/// Raw line counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RawMetrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_lines_of_code: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logical_lines_of_code: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RadonReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainability_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_metrics: Option<RawMetrics>,
}

/// One static-analysis message, in the linter's JSON output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LintFinding {
    /// `convention`, `refactor`, `warning`, ...
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "message-id", default, deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CleanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming_quality: Option<NamingQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radon: Option<RadonReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pylint: Option<Vec<LintFinding>>,
    /// Set when the clean-code sub-module failed on the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleanReport {
    pub fn naming_score(&self) -> Option<f64> {
        self.naming_quality.as_ref().and_then(|n| n.naming_score)
    }

    pub fn maintainability_index(&self) -> Option<f64> {
        self.radon.as_ref().and_then(|r| r.maintainability_index)
    }

    pub fn raw_metrics(&self) -> Option<RawMetrics> {
        self.radon.as_ref().and_then(|r| r.raw_metrics)
    }

    pub fn naming_issues(&self) -> &[NamingIssue] {
        self.naming_quality
            .as_ref()
            .map(|n| n.issues.as_slice())
            .unwrap_or(&[])
    }

    /// Lint findings, or `None` when the linter did not report at all.
    pub fn lint_findings(&self) -> Option<&[LintFinding]> {
        self.pylint.as_deref()
    }
}

// ============================================================================
// Hotspots
// ============================================================================

/// Points at the line that drives a complexity verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hotspot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

impl Hotspot {
    /// One-line description for cards, e.g. `line 4: for j in items`.
    pub fn describe(&self) -> String {
        let detail = self
            .snippet
            .as_deref()
            .or(self.variable.as_deref())
            .map(str::trim)
            .unwrap_or("");
        match (self.line, detail.is_empty()) {
            (Some(line), false) => format!("line {}: {}", line, detail),
            (Some(line), true) => format!("line {}", line),
            (None, false) => detail.to_string(),
            (None, true) => "unknown location".to_string(),
        }
    }
}

// ============================================================================
// Analysis result
// ============================================================================

/// The backend's per-snippet analysis payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solid_report: Option<SolidReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_report: Option<CleanReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_violations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_hotspot: Option<Hotspot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_hotspot: Option<Hotspot>,
    /// Present when the backend failed to analyze the snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// State shown before the first message arrives: every principle passes
    /// with a "Ready" note, nothing else is known yet.
    pub fn placeholder() -> Self {
        Self {
            solid_report: Some(SolidReport::uniform(PrincipleReport::ready())),
            ..Self::default()
        }
    }

    /// Report for a principle, falling back to the "Ready" card when the
    /// section or the principle is missing.
    pub fn principle(&self, principle: Principle) -> Cow<'_, PrincipleReport> {
        match self.solid_report.as_ref().and_then(|r| r.get(principle)) {
            Some(report) => Cow::Borrowed(report),
            None => Cow::Owned(PrincipleReport::ready()),
        }
    }

    /// Clean-code section, if the backend sent one with any content.
    pub fn clean(&self) -> Option<&CleanReport> {
        self.clean_report.as_ref().filter(|c| {
            c.naming_quality.is_some() || c.radon.is_some() || c.pylint.is_some()
        })
    }

    pub fn time_label(&self) -> &str {
        self.time_complexity.as_deref().unwrap_or("-")
    }

    pub fn space_label(&self) -> &str {
        self.space_complexity.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "time_complexity": "O(N^2)",
            "space_complexity": "O(1)",
            "solid_report": {
                "S": {"status": "Pass", "reason": "Focused.", "suggestion": "N/A"},
                "O": {"status": "Violation", "reason": "Line 3: Type-based branching.", "suggestion": "Use Polymorphism."},
                "L": {"status": "Pass", "reason": "Contracts maintained.", "suggestion": "N/A"},
                "I": {"status": "Pass", "reason": "Lean interfaces.", "suggestion": "N/A"},
                "D": {"status": "Pass", "reason": "Abstractions used.", "suggestion": "N/A"}
            },
            "clean_report": {
                "naming_quality": {"naming_score": 80, "issues": [
                    {"name": "BadName", "line": 2, "type": "function", "violation": "Function 'BadName' should be snake_case"}
                ]},
                "radon": {"maintainability_index": 71.5, "raw_metrics": {
                    "total_lines_of_code": 12, "logical_lines_of_code": 9, "comments": 1
                }},
                "pylint": [
                    {"type": "convention", "symbol": "invalid-name", "message": "bad", "message-id": "C0103", "line": 2, "column": 4, "path": "/tmp/x.py"}
                ]
            },
            "total_violations": 1,
            "time_hotspot": {"line": 4, "snippet": "for j in items:"}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.time_label(), "O(N^2)");
        assert_eq!(
            result.principle(Principle::OpenClosed).status,
            PrincipleStatus::Violation
        );
        let clean = result.clean().unwrap();
        assert_eq!(clean.naming_score(), Some(80.0));
        assert_eq!(clean.maintainability_index(), Some(71.5));
        assert_eq!(clean.raw_metrics().unwrap().logical_lines_of_code, 9);
        assert_eq!(clean.naming_issues()[0].kind.as_deref(), Some("function"));
        assert_eq!(clean.lint_findings().unwrap()[0].message_id, "C0103");
        assert_eq!(result.total_violations, Some(1));
        assert_eq!(
            result.time_hotspot.unwrap().describe(),
            "line 4: for j in items:"
        );
    }

    #[test]
    fn test_empty_object_deserializes() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.time_label(), "-");
        assert!(result.clean().is_none());
    }

    #[test]
    fn test_empty_sections_deserialize() {
        let json = r#"{"time_complexity": "O(1)", "space_complexity": "O(1)",
                       "solid_report": {}, "clean_report": {}, "total_violations": 0}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.clean().is_none());
        for principle in Principle::ALL {
            assert_eq!(*result.principle(principle), PrincipleReport::ready());
        }
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"status": "Skipped", "reason": "n/a"}"#;
        let report: PrincipleReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, PrincipleStatus::Unknown);
        assert!(report.suggestion.is_empty());
    }

    #[test]
    fn test_placeholder_shape() {
        let placeholder = AnalysisResult::placeholder();
        for principle in Principle::ALL {
            let report = placeholder.principle(principle);
            assert!(report.status.is_pass());
            assert_eq!(report.reason, "Ready");
        }
        assert!(placeholder.clean().is_none());
        assert!(placeholder.time_complexity.is_none());
    }

    #[test]
    fn test_missing_solid_report_defaults_to_ready() {
        let result = AnalysisResult {
            time_complexity: Some("O(n)".to_string()),
            ..AnalysisResult::default()
        };
        let report = result.principle(Principle::DependencyInversion);
        assert!(matches!(report, Cow::Owned(_)));
        assert_eq!(report.reason, "Ready");
    }

    #[test]
    fn test_clean_report_with_only_error_counts_as_absent() {
        let json = r#"{"clean_report": {"error": "Module failed"}}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.clean().is_none());
    }

    #[test]
    fn test_hotspot_describe_variants() {
        let var = Hotspot {
            line: Some(7),
            snippet: None,
            variable: Some("seen".to_string()),
        };
        assert_eq!(var.describe(), "line 7: seen");
        assert_eq!(
            Hotspot {
                line: Some(2),
                ..Hotspot::default()
            }
            .describe(),
            "line 2"
        );
        assert_eq!(Hotspot::default().describe(), "unknown location");
    }

    #[test]
    fn test_principle_keys_and_display() {
        let keys: Vec<&str> = Principle::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["S", "O", "L", "I", "D"]);
        assert_eq!(
            Principle::LiskovSubstitution.to_string(),
            "Liskov Substitution (L)"
        );
    }

    #[test]
    fn test_solid_report_set_and_get() {
        let mut report = SolidReport::default();
        assert!(report.get(Principle::OpenClosed).is_none());
        report.set(Principle::OpenClosed, PrincipleReport::ready());
        assert_eq!(
            report.get(Principle::OpenClosed),
            Some(&PrincipleReport::ready())
        );
    }
}
