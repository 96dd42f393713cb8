//! Header tabs and footer status line shared by every page.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::state::Page;

use super::layout::LayoutContext;
use super::theme::{connection_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| {
            if ctx.is_narrow() {
                Line::from(format!("F{}", page.function_key()))
            } else {
                Line::from(format!("F{} {}", page.function_key(), page.title()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    " solidlens ",
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .select(app.page().index());

    frame.render_widget(tabs, area);
}

/// Key hints for the current page.
pub fn key_hints(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "type to edit  F1-F7 pages  Ctrl+L language  Ctrl+C quit",
        _ => "1-7/Tab pages  Esc dashboard  q quit",
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let connection = app.state.connection();
    let mut status = vec![
        Span::styled("● ", Style::default().fg(connection_color(connection))),
        Span::styled(connection.label(), Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("  {}", app.state.language()),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if let Some(updated) = app.state.last_update() {
        status.push(Span::styled(
            format!("  updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        ));
    }
    let status_width: u16 = status.iter().map(|s| s.width() as u16).sum();

    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width + 1)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(key_hints(app.page()), Style::default().fg(COLOR_DIM))),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(ratatui::layout::Alignment::Right),
        status_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hints_differ_on_dashboard() {
        assert!(key_hints(Page::Dashboard).contains("Ctrl+L"));
        assert!(key_hints(Page::Help).contains("Esc"));
    }
}
