//! SOLID report: one card per principle.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{Principle, PrincipleReport};

use super::helpers::{card, grid};
use super::layout::LayoutContext;
use super::theme::{principle_color, COLOR_DIM, COLOR_TEXT};

pub fn render_solid(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let result = app.state.result();
    let cells = grid(area, Principle::ALL.len(), ctx.card_columns());
    for (principle, cell) in Principle::ALL.iter().zip(cells) {
        let report = result.principle(*principle);
        let block = card(&principle.to_string());
        let inner = block.inner(cell);
        frame.render_widget(block, cell);
        frame.render_widget(
            Paragraph::new(principle_lines(&report)).wrap(Wrap { trim: true }),
            inner,
        );
    }
}

fn principle_lines(report: &PrincipleReport) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            report.status.as_str(),
            Style::default()
                .fg(principle_color(report.status))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Reason: ", Style::default().fg(COLOR_DIM)),
            Span::styled(report.reason.clone(), Style::default().fg(COLOR_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Suggestion: ", Style::default().fg(COLOR_DIM)),
            Span::styled(report.suggestion.clone(), Style::default().fg(COLOR_TEXT)),
        ]),
    ]
}
