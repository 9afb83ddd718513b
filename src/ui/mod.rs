//! UI rendering module for EarthSentinel
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. `render` draws the shared
//! chrome (header, tabs, notification, key hints) and dispatches the body to
//! the active tab's renderer.

pub mod carbon;
pub mod fires;
pub mod forecast;
pub mod help_overlay;
pub mod impact;
pub mod region_picker;
pub mod report_form;
pub mod reports;
pub mod weather;
pub mod widgets;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, AppState, InputMode, NotificationLevel, View};
use crate::classify::risk_color;

/// Renders the whole screen for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    if app.state == AppState::Loading {
        let area = frame.area();
        render_loading(frame, area, "Loading dashboard...");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title and region
            Constraint::Length(1), // Tabs
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Notification
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);

    if app.is_view_loading() {
        render_loading(frame, chunks[2], loading_message(app));
    } else {
        match app.view {
            View::Weather => weather::render(frame, app, chunks[2]),
            View::Forecast => forecast::render(frame, app, chunks[2]),
            View::Fires => fires::render(frame, app, chunks[2]),
            View::Carbon => carbon::render(frame, app, chunks[2]),
            View::Reports => reports::render(frame, app, chunks[2]),
            View::Impact => impact::render(frame, app, chunks[2]),
            View::Report => report_form::render(frame, app, chunks[2]),
        }
    }

    render_notification(frame, app, chunks[3]);
    render_key_hints(frame, app, chunks[4]);

    if app.region_picker.is_some() {
        region_picker::render(frame, app);
    }
    if app.show_help {
        help_overlay::render(frame);
    }
}

fn loading_message(app: &App) -> &'static str {
    match app.view {
        View::Fires if app.fire_mode.is_national() => "Loading fire map...",
        _ => "Loading data...",
    }
}

/// Renders a centred loading message
fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

/// Title line with clock, then the selected region and its fire risk
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let time_str = Local::now().format("%a %b %d, %H:%M").to_string();
    let risk = app.fire_risk();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "EARTHSENTINEL",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(time_str, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Region: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.region_label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Fire risk: ", Style::default().fg(Color::Gray)),
            Span::styled(
                risk.label(),
                Style::default()
                    .fg(risk_color(risk))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| format!("{} {}", i + 1, view.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(note) = &app.notification else {
        return;
    };
    let (icon, color) = match note.level {
        NotificationLevel::Success => ("\u{2714}", Color::Green), // ✔
        NotificationLevel::Error => ("\u{2716}", Color::Red),     // ✖
    };
    let line = Line::from(vec![
        Span::styled(format!("{} {}", icon, note.title), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(note.message.clone(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the key hints for the current tab, with data freshness
fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let mut pairs: Vec<(&str, &str)> = match (app.input_mode, app.view) {
        (InputMode::Search, _) => vec![("Enter", "Apply"), ("Esc", "Clear")],
        (InputMode::Form, _) => vec![
            ("Tab", "Next field"),
            ("Ctrl-G", "Use my location"),
            ("Ctrl-S", "Submit"),
            ("Esc", "Stop editing"),
        ],
        (InputMode::Normal, View::Fires) => vec![
            ("↑/↓", "Focus"),
            ("Enter", "Details"),
            ("m", "Map/List"),
            ("f", "Risk filter"),
        ],
        (InputMode::Normal, View::Carbon) => vec![("t", "Regions/Sources")],
        (InputMode::Normal, View::Reports) => vec![("/", "Search"), ("s", "Status"), ("↑/↓", "Navigate")],
        (InputMode::Normal, View::Report) => vec![("Enter", "Edit"), ("Ctrl-S", "Submit")],
        (InputMode::Normal, _) => Vec::new(),
    };
    if app.input_mode == InputMode::Normal {
        pairs.extend([("Tab", "Next tab"), ("r", "Region"), ("?", "Help"), ("q", "Quit")]);
    }

    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in pairs {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}  ", action)));
    }

    let mins_ago = (Local::now() - app.last_refresh).num_minutes();
    let freshness = if mins_ago < 1 {
        "│ Data: just now".to_string()
    } else {
        format!("│ Data: {}m ago", mins_ago)
    };
    spans.push(Span::styled(freshness, Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Bordered block with a padded title, shared by every tab
pub(crate) fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}
