//! "My Reports" tab: searchable history with status counts and a detail pane

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::classify::{intensity_color, status_badge_for_label};
use crate::data::{ReportStatus, StatusFilter, UserReport};
use crate::ui::region_picker::scroll_offset;
use crate::ui::titled_block;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Status counts
            Constraint::Min(3),    // List and detail
        ])
        .split(area);

    render_search(frame, app, chunks[0]);
    render_counts(frame, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let reports = app.filtered_reports();
    render_list(frame, app, &reports, body[0]);
    render_detail(frame, reports.get(app.report_cursor).copied(), body[1]);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Search;
    let text = if app.report_query.is_empty() && !editing {
        Span::styled(
            "Search by location, ID or description",
            Style::default().fg(Color::DarkGray),
        )
    } else if editing {
        Span::raw(format!("{}_", app.report_query))
    } else {
        Span::raw(app.report_query.clone())
    };

    let border = if editing { Color::Yellow } else { Color::DarkGray };
    let block = titled_block("Search").border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_counts(frame: &mut Frame, app: &App, area: Rect) {
    let counts = app.report_counts();
    let entries = [
        (StatusFilter::All, "All", counts.all),
        (StatusFilter::Only(ReportStatus::Pending), "Pending", counts.pending),
        (StatusFilter::Only(ReportStatus::Verified), "Verified", counts.verified),
        (StatusFilter::Only(ReportStatus::Resolved), "Resolved", counts.resolved),
    ];

    let mut spans = Vec::new();
    for (filter, label, count) in entries {
        let style = if filter == app.report_filter {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{} ({})", label, count), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, app: &App, reports: &[&UserReport], area: Rect) {
    let block = titled_block(&format!("Reports · {}", app.report_filter.label()));

    if reports.is_empty() {
        let empty = Paragraph::new("No reports found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = block.inner(area).height as usize;
    let offset = scroll_offset(app.report_cursor, visible, reports.len());
    let lines: Vec<Line> = reports
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, report)| {
            let is_selected = i == app.report_cursor;
            let prefix = if is_selected { "▶ " } else { "  " };
            let (badge, color) = status_badge_for_label(report.status.label());
            let location_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::raw(prefix),
                Span::styled(format!("{} ", report.id), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:<9}", badge), Style::default().fg(color)),
                Span::styled(report.location.clone(), location_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_detail(frame: &mut Frame, report: Option<&UserReport>, area: Rect) {
    let block = titled_block("Details");
    let Some(report) = report else {
        frame.render_widget(block, area);
        return;
    };

    let (badge, color) = status_badge_for_label(report.status.label());
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));
    let lines = vec![
        Line::from(Span::styled(
            report.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            label("Status:    "),
            Span::styled(badge, Style::default().fg(color)),
        ]),
        Line::from(vec![
            label("Intensity: "),
            Span::styled(
                report.intensity.label(),
                Style::default().fg(intensity_color(report.intensity)),
            ),
        ]),
        Line::from(vec![
            label("Reported:  "),
            Span::raw(report.reported_at.format("%d/%m/%Y %H:%M").to_string()),
        ]),
        Line::from(vec![
            label("Position:  "),
            Span::raw(format!(
                "{:.4}, {:.4}",
                report.coordinates.lat, report.coordinates.lng
            )),
        ]),
        Line::from(vec![
            label("Images:    "),
            Span::raw(if report.has_images { "Attached" } else { "None" }),
        ]),
        Line::from(""),
        Line::from(report.description.clone()),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
