//! Full-frame renders of the dashboard across a session.

mod common;

use crossterm::event::KeyCode;

use common::{buffer_text, example_result, key, offline_app, quadratic_result, render};
use solidlens::state::Page;
use solidlens::ui::WAITING_FOR_ANALYSIS;
use solidlens::websocket::WsIncomingMessage;

#[test]
fn test_session_from_empty_to_scored() {
    let mut app = offline_app();
    let text = buffer_text(&render(&app, 120, 36));
    assert!(text.contains(WAITING_FOR_ANALYSIS));

    for c in "x = 1".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_incoming(WsIncomingMessage::Analysis(Box::new(example_result())));

    let text = buffer_text(&render(&app, 120, 36));
    assert!(text.contains("x = 1"));
    assert!(text.contains("100%"));
    assert!(!text.contains(WAITING_FOR_ANALYSIS));
}

#[test]
fn test_report_pages_follow_latest_result() {
    let mut app = offline_app();
    app.handle_incoming(WsIncomingMessage::Analysis(Box::new(example_result())));
    app.handle_incoming(WsIncomingMessage::Analysis(Box::new(quadratic_result())));

    app.navigate(Page::ComplexityReport);
    let text = buffer_text(&render(&app, 140, 40));
    assert!(text.contains("O(N^2)"));
    assert!(text.contains("Poor"));
    assert!(text.contains("for j in items:"));

    app.navigate(Page::SolidReport);
    let text = buffer_text(&render(&app, 160, 40));
    assert!(text.contains("Violation"));
    assert!(text.contains("Use Polymorphism."));
}

#[test]
fn test_rejected_result_keeps_rendered_score() {
    let mut app = offline_app();
    app.handle_incoming(WsIncomingMessage::Analysis(Box::new(quadratic_result())));
    let before = buffer_text(&render(&app, 120, 36));

    app.handle_incoming(WsIncomingMessage::Rejected {
        error: "SyntaxError".to_string(),
    });
    let after = buffer_text(&render(&app, 120, 36));

    assert!(before.contains("81%"));
    assert!(after.contains("81%"));
}

#[test]
fn test_tiny_terminal_renders_every_page() {
    let mut app = offline_app();
    app.handle_incoming(WsIncomingMessage::Analysis(Box::new(quadratic_result())));
    for page in Page::ALL {
        app.navigate(page);
        for (w, h) in [(20, 6), (40, 10), (80, 24)] {
            render(&app, w, h);
        }
    }
}
