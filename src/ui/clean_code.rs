//! Clean-code report: naming, maintainability, raw metrics and lint table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{CleanReport, LintFinding, NamingIssue};
use crate::scoring::{self, CLEAN_CODE_POINTS};

use super::helpers::{
    card, format_metric, format_points, placeholder, truncate_string, WAITING_FOR_ANALYSIS,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_BAD, COLOR_DIM, COLOR_GOOD, COLOR_HEADER, COLOR_TEXT};

pub fn render_clean_code(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let result = app.state.result();
    let Some(report) = result.clean() else {
        let block = card("Clean code");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let note = result
            .clean_report
            .as_ref()
            .and_then(|c| c.error.as_deref())
            .unwrap_or(WAITING_FOR_ANALYSIS);
        frame.render_widget(placeholder(note), inner);
        return;
    };

    let [top, lint_area] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let [metrics_area, naming_area] = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .areas(top);

    render_metrics(frame, metrics_area, report);
    render_naming_issues(frame, naming_area, report.naming_issues());
    render_lint_table(frame, lint_area, report.lint_findings());
}

fn metric_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<17}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_TEXT)),
    ])
}

fn render_metrics(frame: &mut Frame, area: Rect, report: &CleanReport) {
    let block = card("Metrics");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let points = scoring::clean_code_points(Some(report));
    let mut lines = vec![
        Line::from(Span::styled(
            format_points(points.total(), CLEAN_CODE_POINTS),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        metric_line("Naming score", format_metric(report.naming_score())),
        metric_line(
            "Maintainability",
            format_metric(report.maintainability_index()),
        ),
    ];
    if let Some(raw) = report.raw_metrics() {
        lines.push(metric_line("Lines of code", raw.total_lines_of_code.to_string()));
        lines.push(metric_line("Logical lines", raw.logical_lines_of_code.to_string()));
        lines.push(metric_line("Comments", raw.comments.to_string()));
    }
    if let Some(error) = report.error.as_deref() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_BAD),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_naming_issues(frame: &mut Frame, area: Rect, issues: &[NamingIssue]) {
    let block = card(&format!("Naming issues ({})", issues.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if issues.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No naming issues", Style::default().fg(COLOR_GOOD))),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = issues
        .iter()
        .map(|issue| {
            let location = issue
                .line
                .map(|l| format!("L{} ", l))
                .unwrap_or_default();
            let kind = issue.kind.as_deref().unwrap_or("name");
            Line::from(vec![
                Span::styled(location, Style::default().fg(COLOR_DIM)),
                Span::styled(
                    format!("{} `{}`", kind, issue.name),
                    Style::default().fg(COLOR_TEXT),
                ),
                Span::styled(
                    format!(" {}", issue.violation),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_lint_table(frame: &mut Frame, area: Rect, findings: Option<&[LintFinding]>) {
    let Some(findings) = findings else {
        let block = card("Lint findings");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(placeholder("Linter did not report"), inner);
        return;
    };

    let block = card(&format!("Lint findings ({})", findings.len()));
    if findings.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled("No findings", Style::default().fg(COLOR_GOOD))),
            inner,
        );
        return;
    }

    let message_width = area.width.saturating_sub(40) as usize;
    let rows: Vec<Row> = findings
        .iter()
        .map(|f| {
            Row::new(vec![
                Cell::from(f.line.map(|l| l.to_string()).unwrap_or_default()),
                Cell::from(f.column.map(|c| c.to_string()).unwrap_or_default()),
                Cell::from(f.message_id.clone()),
                Cell::from(f.symbol.clone()),
                Cell::from(truncate_string(&f.message, message_width.max(10))),
            ])
            .style(Style::default().fg(COLOR_TEXT))
        })
        .collect();

    let header = Row::new(vec!["Line", "Col", "Id", "Symbol", "Message"]).style(
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(22),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);
    frame.render_widget(table, area);
}
