//! Complexity report: time and space growth side by side.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Hotspot;
use crate::scoring::{self, GrowthClass, StatusLabel, SPACE_POINTS, TIME_POINTS};

use super::helpers::{card, format_points};
use super::layout::LayoutContext;
use super::theme::{status_label_color, COLOR_DIM, COLOR_TEXT};

pub fn render_complexity(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let [time_area, space_area] = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    let result = app.state.result();
    render_growth_card(
        frame,
        time_area,
        "Time complexity",
        result.time_complexity.as_deref(),
        result.time_hotspot.as_ref(),
        TIME_POINTS,
    );
    render_growth_card(
        frame,
        space_area,
        "Space complexity",
        result.space_complexity.as_deref(),
        result.space_hotspot.as_ref(),
        SPACE_POINTS,
    );
}

fn render_growth_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    label: Option<&str>,
    hotspot: Option<&Hotspot>,
    max_points: f64,
) {
    let block = card(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = StatusLabel::classify(label);
    let class = label.map(GrowthClass::parse).unwrap_or(GrowthClass::Unknown);
    let points = scoring::complexity_points(label, max_points);

    let mut lines = vec![
        Line::from(Span::styled(
            label.unwrap_or("-").to_string(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            status.as_str(),
            Style::default()
                .fg(status_label_color(status))
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Growth: ", Style::default().fg(COLOR_DIM)),
            Span::styled(class.to_string(), Style::default().fg(COLOR_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Points: ", Style::default().fg(COLOR_DIM)),
            Span::styled(format_points(points, max_points), Style::default().fg(COLOR_TEXT)),
        ]),
    ];

    if let Some(hotspot) = hotspot {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Hotspot", Style::default().fg(COLOR_DIM))));
        lines.push(Line::from(Span::styled(
            hotspot.describe(),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
