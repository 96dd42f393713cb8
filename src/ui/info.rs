//! Static About and Help pages.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::scoring::Category;

use super::helpers::card;
use super::theme::{COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))
}

fn pair(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", key), Style::default().fg(COLOR_TEXT)),
        Span::styled(value, Style::default().fg(COLOR_DIM)),
    ])
}

pub fn render_about(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        heading(&format!("solidlens {}", crate::cli::version::VERSION)),
        Line::from(Span::styled(
            "Live code-quality dashboard: complexity, SOLID compliance and clean-code metrics \
             for the snippet on the Dashboard page.",
            Style::default().fg(COLOR_TEXT),
        )),
        Line::default(),
        heading("Connection"),
        pair("Endpoint", app.endpoint.clone()),
        pair("Status", app.state.connection().label().to_string()),
        pair("Debounce", format!("{} ms", app.link.delay().as_millis())),
        pair("Results received", app.state.received_count().to_string()),
        Line::default(),
        heading("Score weights"),
    ];
    lines.extend(
        Category::ALL
            .iter()
            .map(|c| pair(c.label(), format!("{:.0} points", c.max_points()))),
    );

    let block = card("About");
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        heading("Anywhere"),
        pair("F1 .. F7", "switch page".to_string()),
        pair("Esc", "back to Dashboard".to_string()),
        pair("Ctrl+L", "cycle language".to_string()),
        pair("Ctrl+C / Ctrl+Q", "quit".to_string()),
        Line::default(),
        heading("Dashboard"),
        pair("typing / paste", "edit the snippet".to_string()),
        pair("arrows Home End", "move the cursor".to_string()),
        pair("Tab", "indent four spaces".to_string()),
        Line::default(),
        heading("Report pages"),
        pair("1 .. 7", "switch page".to_string()),
        pair("Tab / Shift+Tab", "next / previous page".to_string()),
        pair("q", "quit".to_string()),
        Line::default(),
        heading("Complexity labels"),
        pair("Excellent", "O(1), O(log n)".to_string()),
        pair("Good", "O(n), O(n log n)".to_string()),
        pair("Poor", "O(n^2) and worse".to_string()),
        pair("Review", "unrecognized label".to_string()),
    ];

    let block = card("Help");
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
