//! Five-day forecast tab, one card per day

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::classify::{temperature_color, weather_icon};
use crate::data::ForecastDay;
use crate::ui::titled_block;
use crate::ui::widgets::PercentBar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("5-Day Forecast · {}", app.forecast.location);
    let block = titled_block(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let days = &app.forecast.days;
    if days.is_empty() {
        frame.render_widget(
            Paragraph::new("No forecast available").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let constraints: Vec<Constraint> = days
        .iter()
        .map(|_| Constraint::Ratio(1, days.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (day, column) in days.iter().zip(columns.iter()) {
        render_day_card(frame, day, *column);
    }
}

fn render_day_card(frame: &mut Frame, day: &ForecastDay, area: Rect) {
    let block = titled_block(&day.day_label);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Date, sky, temperatures
            Constraint::Length(1), // Rain label
            Constraint::Length(1), // Rain bar
            Constraint::Min(0),    // Humidity
        ])
        .split(inner);

    let summary = vec![
        Line::from(Span::styled(
            day.date.format("%d/%m").to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(format!(
            "{} {}",
            weather_icon(day.condition),
            day.condition.label()
        )),
        Line::from(vec![
            Span::styled(
                format!("{}°", day.max_temp),
                Style::default()
                    .fg(temperature_color(day.max_temp))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{}°", day.min_temp),
                Style::default().fg(temperature_color(day.min_temp)),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), rows[0]);

    frame.render_widget(
        Paragraph::new(format!("Rain {}%", day.rain_chance)),
        rows[1],
    );
    frame.render_widget(
        PercentBar::new(day.rain_chance).style(Style::default().fg(Color::Blue)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(format!("Humidity {}%", day.humidity))
            .style(Style::default().fg(Color::Gray)),
        rows[3],
    );
}
