//! Data models shared by the state store, scoring and UI.

pub mod analysis;
pub mod language;

pub use analysis::{
    AnalysisResult, CleanReport, Hotspot, LintFinding, NamingIssue, NamingQuality, Principle,
    PrincipleReport, PrincipleStatus, RadonReport, RawMetrics, SolidReport,
};
pub use language::Language;
