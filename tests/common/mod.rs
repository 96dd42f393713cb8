//! Shared fixtures for the integration suites.
//!
//! ```ignore
//! mod common;
//! use common::{example_result, offline_app};
//!
//! let mut app = offline_app();
//! app.handle_incoming(WsIncomingMessage::Analysis(Box::new(example_result())));
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use solidlens::adapters::MockTransport;
use solidlens::app::{AnalysisLink, App};
use solidlens::models::{
    AnalysisResult, CleanReport, Hotspot, NamingQuality, PrincipleReport, PrincipleStatus,
    RadonReport, RawMetrics, SolidReport,
};
use solidlens::ui;

pub const TEST_ENDPOINT: &str = "ws://127.0.0.1:8000/ws/analyze";
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(300);

/// A passing principle with the given reason.
pub fn pass(reason: &str) -> PrincipleReport {
    PrincipleReport {
        status: PrincipleStatus::Pass,
        reason: reason.to_string(),
        suggestion: "N/A".to_string(),
    }
}

/// A violated principle with the given reason and suggestion.
pub fn violation(reason: &str, suggestion: &str) -> PrincipleReport {
    PrincipleReport {
        status: PrincipleStatus::Violation,
        reason: reason.to_string(),
        suggestion: suggestion.to_string(),
    }
}

/// Clean report with perfect naming, high maintainability and no lint findings.
pub fn spotless_clean_report() -> CleanReport {
    CleanReport {
        naming_quality: Some(NamingQuality {
            naming_score: Some(100.0),
            issues: vec![],
        }),
        radon: Some(RadonReport {
            maintainability_index: Some(92.0),
            raw_metrics: Some(RawMetrics {
                total_lines_of_code: 6,
                logical_lines_of_code: 4,
                comments: 0,
            }),
        }),
        pylint: Some(vec![]),
        error: None,
    }
}

/// A result that earns every point.
pub fn example_result() -> AnalysisResult {
    AnalysisResult {
        time_complexity: Some("O(1)".to_string()),
        space_complexity: Some("O(1)".to_string()),
        solid_report: Some(SolidReport::uniform(pass("Focused."))),
        clean_report: Some(spotless_clean_report()),
        total_violations: Some(0),
        time_hotspot: None,
        space_hotspot: None,
        error: None,
    }
}

/// A result with a nested loop and an Open/Closed violation.
pub fn quadratic_result() -> AnalysisResult {
    let mut solid = SolidReport::uniform(pass("Contracts maintained."));
    solid.set(
        solidlens::models::Principle::OpenClosed,
        violation("Line 3: Type-based branching.", "Use Polymorphism."),
    );
    AnalysisResult {
        time_complexity: Some("O(N^2)".to_string()),
        space_complexity: Some("O(N)".to_string()),
        solid_report: Some(solid),
        clean_report: Some(spotless_clean_report()),
        total_violations: Some(1),
        time_hotspot: Some(Hotspot {
            line: Some(4),
            snippet: Some("for j in items:".to_string()),
            variable: None,
        }),
        space_hotspot: None,
        error: None,
    }
}

/// JSON frame for `result`, as the analyzer would send it.
pub fn frame(result: &AnalysisResult) -> String {
    serde_json::to_string(result).expect("analysis result serializes")
}

/// App with no analyzer connection.
pub fn offline_app() -> App {
    App::new(AnalysisLink::offline(TEST_DEBOUNCE), TEST_ENDPOINT)
}

/// App wired to an open mock transport.
pub fn mock_app() -> (App, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let link = AnalysisLink::new(mock.clone(), TEST_DEBOUNCE);
    (App::new(link, TEST_ENDPOINT), mock)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Render the app into a test buffer.
pub fn render(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| ui::render(f, app))
        .expect("render succeeds");
    terminal.backend().buffer().clone()
}

/// Flatten a buffer into one string per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
