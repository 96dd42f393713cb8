//! Helper functions for UI rendering
//!
//! Formatting, truncation and the shared card/placeholder building blocks.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub const WAITING_FOR_ANALYSIS: &str = "Waiting for analysis";

/// Truncate to at most `max_width` display columns, adding "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            let target = max_width.saturating_sub(3);
            let mut kept = String::new();
            let mut kept_width = 0;
            for c in s[..idx].chars() {
                let w = c.width().unwrap_or(0);
                if kept_width + w > target {
                    break;
                }
                kept.push(c);
                kept_width += w;
            }
            return format!("{}...", kept);
        }
    }
    s.to_string()
}

/// Points as `earned / max`, one decimal when not whole.
pub fn format_points(points: f64, max: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0} / {:.0}", points, max)
    } else {
        format!("{:.1} / {:.0}", points, max)
    }
}

/// A 0-100 metric, or "-" when absent.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// Bordered card with a bold title.
pub fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

/// Dim, centered message for sections with no data yet.
pub fn placeholder(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(COLOR_DIM))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Split `area` into a grid of `count` cells, `columns` per row.
pub fn grid(area: Rect, count: usize, columns: usize) -> Vec<Rect> {
    if count == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = count.div_ceil(columns);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    let mut cells = Vec::with_capacity(count);
    for (r, row_area) in row_areas.iter().enumerate() {
        let in_row = (count - r * columns).min(columns);
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        cells.extend(col_areas.iter().take(in_row).copied());
    }
    cells
}
