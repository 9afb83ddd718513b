//! "My Impact" tab: contribution gauge, totals, monthly chart and badges

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::impact::{badges, impact_months, impact_summary};
use crate::ui::titled_block;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Gauge
            Constraint::Length(1), // Totals
            Constraint::Min(6),    // Chart and badges
        ])
        .split(area);

    let level = app.impact_level();
    let gauge = Gauge::default()
        .block(titled_block("Contribution Level"))
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .percent(u16::from(level))
        .label(format!("{}%", level));
    frame.render_widget(gauge, chunks[0]);

    let summary = impact_summary();
    let totals = Line::from(vec![
        Span::styled("Reports: ", Style::default().fg(Color::Gray)),
        Span::styled(
            summary.total_reports.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("CO2 avoided: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} t", summary.total_co2_avoided),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Badges: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}/{}", summary.badges_unlocked, summary.badges_total),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(totals), chunks[1]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(44)])
        .split(chunks[2]);

    render_monthly_chart(frame, lower[0]);
    render_badges(frame, lower[1]);
}

fn render_monthly_chart(frame: &mut Frame, area: Rect) {
    let months = impact_months();
    let bars: Vec<Bar> = months
        .iter()
        .map(|month| {
            Bar::default()
                .value(u64::from(month.co2_avoided))
                .label(Line::from(month.month))
                .style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::Black).bg(Color::Green))
        })
        .collect();

    let max = months
        .iter()
        .map(|month| u64::from(month.co2_avoided))
        .max()
        .unwrap_or(0)
        .max(1);

    let chart = BarChart::default()
        .block(titled_block("CO2 avoided per month (t)"))
        .data(BarGroup::default().bars(&bars))
        .max(max)
        .bar_gap(1)
        .bar_width(3);
    frame.render_widget(chart, area);
}

fn render_badges(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = badges()
        .iter()
        .map(|badge| {
            let (icon, style) = if badge.unlocked {
                ("★", Style::default().fg(Color::Yellow))
            } else {
                ("☆", Style::default().fg(Color::DarkGray))
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(
                    badge.name,
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", badge.description),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(titled_block("Badges")), area);
}

#[cfg(test)]
mod tests {
    use crate::app::{App, View};
    use crate::cli::StartupConfig;
    use crate::ui::test_support::render_to_string;

    fn impact_app() -> App {
        let mut app = App::with_startup_config(StartupConfig {
            view: View::Impact,
            seed: Some(1),
            ..Default::default()
        });
        app.tick();
        app
    }

    #[test]
    fn test_gauge_shows_contribution_level() {
        let app = impact_app();
        let content = render_to_string(&app, 120, 30);
        assert!(content.contains("Contribution Level"));
        assert!(content.contains("85%"));
    }

    #[test]
    fn test_totals_line() {
        let app = impact_app();
        let content = render_to_string(&app, 120, 30);
        assert!(content.contains("Reports: 12"));
        assert!(content.contains("CO2 avoided: 84 t"));
        assert!(content.contains("Badges: 3/6"));
    }

    #[test]
    fn test_badges_are_listed() {
        let app = impact_app();
        let content = render_to_string(&app, 120, 30);
        assert!(content.contains("Novice Sentinel"));
        assert!(content.contains("Elite Protector"));
    }
}
