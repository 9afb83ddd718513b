//! Fire alerts tab
//!
//! Shows the regional risk banner, then the alerts as a list or on the
//! projected map. The nationwide modes add a stats line with the alert
//! count and burning area. The alert whose marker is toggled open gets a
//! detail panel beside the body.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FireMode};
use crate::classify::risk_color;
use crate::data::{high_risk_count, total_area, FireAlert};
use crate::ui::region_picker::scroll_offset;
use crate::ui::titled_block;
use crate::ui::widgets::FireMap;

const DETAIL_WIDTH: u16 = 34;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let national = app.fire_mode.is_national();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Risk banner
            Constraint::Length(1),                   // Mode and filter
            Constraint::Length(u16::from(national)), // Nationwide stats
            Constraint::Min(3),                      // Alerts
        ])
        .split(area);

    render_risk_banner(frame, app, chunks[0]);
    render_mode_line(frame, app, chunks[1]);
    if national {
        frame.render_widget(Paragraph::new(national_stats(app.fire_dataset())), chunks[2]);
    }

    let alerts = app.visible_fire_alerts();
    let active = alerts
        .iter()
        .copied()
        .find(|alert| app.markers.is_active(&alert.id));

    let body = if let Some(alert) = active {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(DETAIL_WIDTH)])
            .split(chunks[3]);
        render_alert_detail(frame, alert, split[1]);
        split[0]
    } else {
        chunks[3]
    };

    match app.fire_mode {
        FireMode::List => render_alert_list(frame, app, &alerts, "Active Alerts", body),
        FireMode::NationalList => render_alert_list(frame, app, &alerts, "National Alerts", body),
        FireMode::Map | FireMode::National => render_alert_map(frame, app, &alerts, body),
    }
}

fn render_risk_banner(frame: &mut Frame, app: &App, area: Rect) {
    let risk = app.fire_risk();
    let color = risk_color(risk);
    let lines = vec![
        Line::from(vec![
            Span::styled("Fire risk: ", Style::default().fg(Color::Gray)),
            Span::styled(
                risk.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} high-risk alerts", high_risk_count(app.fire_dataset())),
                Style::default().fg(Color::LightRed),
            ),
        ]),
        Line::from(Span::styled(risk.advisory(), Style::default().fg(color))),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_mode_line(frame: &mut Frame, app: &App, area: Rect) {
    let min_risk = app.min_risk.map_or("All", |risk| risk.label());
    let line = Line::from(vec![
        Span::styled("View: ", Style::default().fg(Color::Gray)),
        Span::styled(app.fire_mode.label(), Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled("Min risk: ", Style::default().fg(Color::Gray)),
        Span::styled(min_risk, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Count, burning area and high-risk count of the nationwide alerts
fn national_stats(alerts: &[FireAlert]) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} alerts", alerts.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("{} ha burning", total_area(alerts)),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" · "),
        Span::styled(
            format!("{} high risk", high_risk_count(alerts)),
            Style::default().fg(Color::LightRed),
        ),
    ])
}

fn render_alert_list(
    frame: &mut Frame,
    app: &App,
    alerts: &[&FireAlert],
    title: &str,
    area: Rect,
) {
    let block = titled_block(title);

    if alerts.is_empty() {
        let empty = Paragraph::new("No alerts match the current filter")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = block.inner(area).height as usize;
    let offset = scroll_offset(app.fire_cursor, visible, alerts.len());
    let lines: Vec<Line> = alerts
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, alert)| {
            let is_selected = i == app.fire_cursor;
            let prefix = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if app.markers.is_active(&alert.id) { "◆" } else { "●" };

            Line::from(vec![
                Span::raw(prefix),
                Span::styled(marker, Style::default().fg(risk_color(alert.risk))),
                Span::raw(" "),
                Span::styled(format!("{:<28}", alert.location), name_style),
                Span::styled(format!("{:<4}", alert.region), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{:<9}", alert.risk.label()),
                    Style::default().fg(risk_color(alert.risk)),
                ),
                Span::raw(format!("{:>5} ha", alert.area)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_alert_map(frame: &mut Frame, app: &App, alerts: &[&FireAlert], area: Rect) {
    let title = format!("{} · {} alerts", app.fire_mode.label(), alerts.len());
    let block = titled_block(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let map = FireMap::new(alerts)
        .focused(app.fire_cursor)
        .active(app.markers.active());
    frame.render_widget(map, inner);
}

fn render_alert_detail(frame: &mut Frame, alert: &FireAlert, area: Rect) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));
    let lines = vec![
        Line::from(Span::styled(
            alert.location.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label("Region:   "), Span::raw(alert.region.clone())]),
        Line::from(vec![
            label("Risk:     "),
            Span::styled(
                alert.risk.label(),
                Style::default().fg(risk_color(alert.risk)),
            ),
        ]),
        Line::from(vec![label("Area:     "), Span::raw(format!("{} ha", alert.area))]),
        Line::from(vec![
            label("Detected: "),
            Span::raw(alert.detected_at.format("%H:%M").to_string()),
        ]),
        Line::from(vec![label("Source:   "), Span::raw(alert.source.label())]),
        Line::from(vec![
            label("Position: "),
            Span::raw(format!(
                "{:.2}, {:.2}",
                alert.coordinates.lat, alert.coordinates.lng
            )),
        ]),
    ];

    let block = titled_block(&alert.id).border_style(Style::default().fg(risk_color(alert.risk)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::{App, FireMode, View};
    use crate::cli::StartupConfig;
    use crate::data::{high_risk_count, total_area, RegionCode, RiskLevel};
    use crate::ui::test_support::render_to_string;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fires_app(region: &str) -> App {
        let mut app = App::with_startup_config(StartupConfig {
            region: RegionCode::new(region),
            view: View::Fires,
            seed: Some(5),
            ..Default::default()
        });
        app.tick();
        app
    }

    #[test]
    fn test_banner_shows_regional_advisory() {
        let app = fires_app("mt");
        let content = render_to_string(&app, 140, 30);
        assert!(content.contains("Fire risk: Extreme"));
        assert!(content.contains("Extreme fire risk."));
    }

    #[test]
    fn test_list_mode_shows_every_alert() {
        let app = fires_app("all");
        let content = render_to_string(&app, 140, 30);

        assert!(content.contains("Active Alerts"));
        for alert in &app.fire_alerts {
            assert!(content.contains(&format!("{} ha", alert.area)));
        }
    }

    #[test]
    fn test_enter_opens_detail_panel() {
        let mut app = fires_app("all");
        let focused = app.fire_alerts[0].id.clone();

        app.handle_key(key_event(KeyCode::Enter));
        let content = render_to_string(&app, 140, 30);

        assert!(content.contains(&focused));
        assert!(content.contains("Source:"));
    }

    #[test]
    fn test_map_mode_draws_markers() {
        let mut app = fires_app("all");
        app.set_fire_mode(FireMode::Map);
        let content = render_to_string(&app, 140, 30);

        assert!(content.contains("View: Map"));
        assert!(content.contains('●'));
    }

    #[test]
    fn test_national_map_shows_stats_line() {
        let mut app = fires_app("sp");
        app.set_fire_mode(FireMode::National);
        let content = render_to_string(&app, 140, 40);

        assert!(content.contains("30 alerts"));
        assert!(content.contains(&format!("{} ha burning", total_area(&app.map_alerts))));
        assert!(content.contains(&format!("{} high risk", high_risk_count(&app.map_alerts))));
    }

    #[test]
    fn test_regional_list_has_no_stats_line() {
        let app = fires_app("sp");
        let content = render_to_string(&app, 140, 30);
        assert!(!content.contains("ha burning"));
    }

    #[test]
    fn test_national_list_shows_nationwide_alerts() {
        let mut app = fires_app("sp");
        app.set_fire_mode(FireMode::NationalList);
        let content = render_to_string(&app, 140, 50);

        assert!(content.contains("View: National list"));
        assert!(content.contains("National Alerts"));
        assert!(content.contains("30 alerts"));
        for alert in &app.map_alerts {
            assert!(content.contains(&alert.location));
        }
    }

    #[test]
    fn test_alert_list_scrolls_to_cursor() {
        let mut app = fires_app("sp");
        app.set_fire_mode(FireMode::NationalList);
        app.map_alerts[29].location = "Serra do Cachimbo".to_string();

        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.fire_cursor, 29);
        let content = render_to_string(&app, 140, 24);

        assert!(content.contains("▶ ● Serra do Cachimbo"));
    }

    #[test]
    fn test_banner_counts_nationwide_alerts_in_national_mode() {
        let mut app = fires_app("sp");
        app.set_fire_mode(FireMode::National);
        app.fire_alerts.clear();
        for alert in &mut app.map_alerts {
            alert.risk = RiskLevel::Extreme;
        }
        let content = render_to_string(&app, 140, 40);

        assert!(content.contains("30 high-risk alerts"));
    }

    #[test]
    fn test_filter_with_no_matches_shows_message() {
        let mut app = fires_app("all");
        app.fire_alerts.clear();
        let content = render_to_string(&app, 140, 30);
        assert!(content.contains("No alerts match"));
    }
}
