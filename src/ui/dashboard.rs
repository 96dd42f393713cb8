//! Dashboard page: editor on one side, live score on the other.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, LineGauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::scoring::{self, Category, ScoreBreakdown};
use crate::widgets::CodeEditorWidget;

use super::helpers::{card, format_points, placeholder, WAITING_FOR_ANALYSIS};
use super::layout::LayoutContext;
use super::theme::{band_color, COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let (left, right) = ctx.two_column_percents();
    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let [editor_area, score_area] = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(left), Constraint::Percentage(right)])
        .areas(area);

    let title = format!(" Code ({}) ", app.state.language());
    frame.render_widget(CodeEditorWidget::new(&app.editor, &title, true), editor_area);

    render_score_panel(frame, score_area, app);
}

fn render_score_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = card("Score");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !app.state.has_analysis() {
        frame.render_widget(placeholder(WAITING_FOR_ANALYSIS), inner);
        return;
    }

    let breakdown = app.state.score();
    let [gauge_area, categories_area, summary_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(Category::ALL.len() as u16 * 2),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_gauge(frame, gauge_area, &breakdown);
    render_categories(frame, categories_area, &breakdown);

    let result = app.state.result();
    let summary = vec![
        Line::from(vec![
            Span::styled("Time  ", Style::default().fg(COLOR_DIM)),
            Span::styled(result.time_label().to_string(), Style::default().fg(COLOR_TEXT)),
            Span::styled("   Space  ", Style::default().fg(COLOR_DIM)),
            Span::styled(result.space_label().to_string(), Style::default().fg(COLOR_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Violations  ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                scoring::violation_count(result).to_string(),
                Style::default().fg(COLOR_TEXT),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), summary_area);
}

pub(super) fn render_gauge(frame: &mut Frame, area: Rect, breakdown: &ScoreBreakdown) {
    let percentage = breakdown.percentage();
    let band = breakdown.band();
    let gauge = Gauge::default()
        .block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .gauge_style(Style::default().fg(band_color(band)))
        .percent(percentage as u16)
        .label(Span::styled(
            format!("{}% {}", percentage, band.as_str()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}

fn render_categories(frame: &mut Frame, area: Rect, breakdown: &ScoreBreakdown) {
    let rows = Layout::vertical(vec![Constraint::Length(2); Category::ALL.len()]).split(area);
    for (category, row) in Category::ALL.iter().zip(rows.iter()) {
        let points = breakdown.points(*category);
        let max = category.max_points();
        let gauge = LineGauge::default()
            .ratio((points / max).clamp(0.0, 1.0))
            .label(format!(
                "{:<17}{:>9}",
                category.label(),
                format_points(points, max)
            ))
            .filled_style(Style::default().fg(COLOR_TEXT))
            .unfilled_style(Style::default().fg(COLOR_BORDER));
        frame.render_widget(gauge, *row);
    }
}
