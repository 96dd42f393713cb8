//! UI rendering for the solidlens dashboard
//!
//! Every page is a stateless renderer over [`App`]:
//! - Header with page tabs (F1-F7)
//! - Page body chosen by [`Page`]
//! - Footer with key hints and the connection indicator
//!
//! Sizing decisions go through [`LayoutContext`], built once per frame from
//! the terminal area.

mod chrome;
mod clean_code;
mod complexity;
mod dashboard;
mod helpers;
mod info;
mod layout;
mod results;
mod solid;
pub mod theme;

pub use helpers::{format_points, truncate_string, WAITING_FOR_ANALYSIS};
pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::state::Page;

/// Render the UI for the current page
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    chrome::render_header(frame, header, app, &ctx);
    match app.page() {
        Page::Dashboard => dashboard::render_dashboard(frame, body, app, &ctx),
        Page::Results => results::render_results(frame, body, app, &ctx),
        Page::SolidReport => solid::render_solid(frame, body, app, &ctx),
        Page::ComplexityReport => complexity::render_complexity(frame, body, app, &ctx),
        Page::CleanCodeReport => clean_code::render_clean_code(frame, body, app, &ctx),
        Page::About => info::render_about(frame, body, app),
        Page::Help => info::render_help(frame, body),
    }
    chrome::render_footer(frame, footer, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnalysisLink;
    use crate::models::{
        AnalysisResult, CleanReport, LintFinding, NamingQuality, PrincipleReport,
        PrincipleStatus, RadonReport, SolidReport,
    };
    use crate::websocket::WsIncomingMessage;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn create_test_app() -> App {
        App::new(
            AnalysisLink::offline(Duration::from_millis(300)),
            "ws://127.0.0.1:8000/ws/analyze",
        )
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn analysed_app() -> App {
        let mut app = create_test_app();
        let mut solid = SolidReport::uniform(PrincipleReport {
            status: PrincipleStatus::Pass,
            reason: "Focused".to_string(),
            suggestion: "None".to_string(),
        });
        solid.set(
            crate::models::Principle::OpenClosed,
            PrincipleReport {
                status: PrincipleStatus::Violation,
                reason: "Switch on type".to_string(),
                suggestion: "Use polymorphism".to_string(),
            },
        );
        app.handle_incoming(WsIncomingMessage::Analysis(Box::new(AnalysisResult {
            time_complexity: Some("O(n^2)".to_string()),
            space_complexity: Some("O(1)".to_string()),
            solid_report: Some(solid),
            clean_report: Some(CleanReport {
                naming_quality: Some(NamingQuality {
                    naming_score: Some(90.0),
                    issues: vec![],
                }),
                radon: Some(RadonReport {
                    maintainability_index: Some(70.0),
                    raw_metrics: None,
                }),
                pylint: Some(vec![LintFinding {
                    kind: "convention".to_string(),
                    symbol: "missing-docstring".to_string(),
                    message: "Missing function docstring".to_string(),
                    message_id: "C0116".to_string(),
                    line: Some(1),
                    column: Some(0),
                }]),
                error: None,
            }),
            ..AnalysisResult::default()
        })));
        app
    }

    #[test]
    fn test_every_page_renders() {
        let mut app = analysed_app();
        for page in Page::ALL {
            app.navigate(page);
            let text = draw(&app, 100, 30);
            assert!(text.contains("solidlens"), "{:?} should show the header", page);
        }
    }

    #[test]
    fn test_every_page_renders_in_small_terminal() {
        let mut app = create_test_app();
        for page in Page::ALL {
            app.navigate(page);
            draw(&app, 40, 12);
        }
    }

    #[test]
    fn test_dashboard_waits_for_first_result() {
        let app = create_test_app();
        let text = draw(&app, 100, 30);
        assert!(text.contains(WAITING_FOR_ANALYSIS));
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_dashboard_shows_score_after_result() {
        let app = analysed_app();
        let text = draw(&app, 100, 30);
        let expected = format!("{}%", app.state.score().percentage());
        assert!(text.contains(&expected));
        assert!(text.contains("O(n^2)"));
    }

    #[test]
    fn test_solid_page_placeholder_cards() {
        let mut app = create_test_app();
        app.navigate(Page::SolidReport);
        let text = draw(&app, 160, 40);
        assert_eq!(text.matches("Ready").count(), 5);
        assert!(text.contains("Pass"));
    }

    #[test]
    fn test_solid_page_shows_violation() {
        let mut app = analysed_app();
        app.navigate(Page::SolidReport);
        let text = draw(&app, 160, 40);
        assert!(text.contains("Violation"));
        assert!(text.contains("Switch on type"));
    }

    #[test]
    fn test_complexity_page_status_labels() {
        let mut app = analysed_app();
        app.navigate(Page::ComplexityReport);
        let text = draw(&app, 100, 30);
        assert!(text.contains("Poor"));
        assert!(text.contains("Excellent"));
    }

    #[test]
    fn test_clean_code_page_placeholder() {
        let mut app = create_test_app();
        app.navigate(Page::CleanCodeReport);
        let text = draw(&app, 100, 30);
        assert!(text.contains(WAITING_FOR_ANALYSIS));
    }

    #[test]
    fn test_clean_code_page_lint_table() {
        let mut app = analysed_app();
        app.navigate(Page::CleanCodeReport);
        let text = draw(&app, 120, 40);
        assert!(text.contains("C0116"));
        assert!(text.contains("missing-docstring"));
        assert!(text.contains("No naming issues"));
    }

    #[test]
    fn test_about_page_shows_endpoint() {
        let mut app = create_test_app();
        app.navigate(Page::About);
        let text = draw(&app, 100, 30);
        assert!(text.contains("ws://127.0.0.1:8000/ws/analyze"));
        assert!(text.contains("300 ms"));
    }

    #[test]
    fn test_footer_hints_follow_page() {
        let mut app = create_test_app();
        let text = draw(&app, 120, 30);
        assert!(text.contains("Ctrl+L"));
        app.navigate(Page::Help);
        let text = draw(&app, 120, 30);
        assert!(text.contains("Esc dashboard"));
    }
}
