//! Results overview: one card per category plus composite and violations.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::{AnalysisResult, Principle};
use crate::scoring::{self, Category, ScoreBreakdown, StatusLabel};

use super::dashboard::render_gauge;
use super::helpers::{
    card, format_metric, format_points, grid, placeholder, WAITING_FOR_ANALYSIS,
};
use super::layout::LayoutContext;
use super::theme::{status_label_color, COLOR_BAD, COLOR_DIM, COLOR_GOOD, COLOR_TEXT};

pub fn render_results(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    if !app.state.has_analysis() {
        let block = card("Results");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(placeholder(WAITING_FOR_ANALYSIS), inner);
        return;
    }

    let result = app.state.result();
    let breakdown = app.state.score();

    let [gauge_area, cards_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    render_gauge(frame, gauge_area, &breakdown);

    let cards: Vec<(String, Vec<Line>)> = Category::ALL
        .iter()
        .map(|c| (c.label().to_string(), category_lines(*c, result, &breakdown)))
        .chain(std::iter::once((
            "Violations".to_string(),
            violation_lines(result),
        )))
        .collect();

    let cells = grid(cards_area, cards.len(), ctx.card_columns());
    for ((title, lines), cell) in cards.into_iter().zip(cells) {
        let block = card(&title);
        let inner = block.inner(cell);
        frame.render_widget(block, cell);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn points_line(points: f64, max: f64) -> Line<'static> {
    Line::from(Span::styled(
        format_points(points, max),
        Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn detail(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_TEXT)),
    ])
}

fn complexity_line(label: &str) -> Line<'static> {
    let status = StatusLabel::classify(Some(label));
    Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(COLOR_TEXT)),
        Span::raw("  "),
        Span::styled(status.as_str(), Style::default().fg(status_label_color(status))),
    ])
}

fn category_lines(
    category: Category,
    result: &AnalysisResult,
    breakdown: &ScoreBreakdown,
) -> Vec<Line<'static>> {
    let mut lines = vec![points_line(breakdown.points(category), category.max_points())];
    match category {
        Category::CleanCode => {
            let clean = result.clean();
            lines.push(detail(
                "Naming",
                format_metric(clean.and_then(|c| c.naming_score())),
            ));
            lines.push(detail(
                "Maintainability",
                format_metric(clean.and_then(|c| c.maintainability_index())),
            ));
            let lint = clean
                .and_then(|c| c.lint_findings())
                .map(|f| f.len().to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(detail("Lint findings", lint));
        }
        Category::Solid => {
            let passing = result.solid_report.as_ref().map(|report| {
                Principle::ALL
                    .iter()
                    .filter(|p| report.get(**p).is_some_and(|r| r.status.is_pass()))
                    .count()
            });
            let value = match passing {
                Some(n) => format!("{} of {}", n, Principle::ALL.len()),
                None => "-".to_string(),
            };
            lines.push(detail("Passing", value));
        }
        Category::TimeComplexity => {
            if let Some(label) = result.time_complexity.as_deref() {
                lines.push(complexity_line(label));
            } else {
                lines.push(detail("Growth", "-".to_string()));
            }
        }
        Category::SpaceComplexity => {
            if let Some(label) = result.space_complexity.as_deref() {
                lines.push(complexity_line(label));
            } else {
                lines.push(detail("Growth", "-".to_string()));
            }
        }
    }
    lines
}

fn violation_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let count = scoring::violation_count(result);
    let color = if count == 0 { COLOR_GOOD } else { COLOR_BAD };
    vec![
        Line::from(Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            if count == 0 {
                "No SOLID violations"
            } else {
                "SOLID principles violated"
            },
            Style::default().fg(COLOR_DIM),
        )),
    ]
}
