//! Current weather tab: one table row per reading

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::classify::{temperature_color, weather_icon};
use crate::data::WeatherRecord;
use crate::ui::titled_block;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.weather.first() {
        Some(first) => format!("Current Weather · updated {}", first.updated_at.format("%H:%M")),
        None => "Current Weather".to_string(),
    };
    let block = titled_block(&title);

    if app.weather.is_empty() {
        let empty = Paragraph::new("No weather data for this region")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Location"),
        Cell::from("Sky"),
        Cell::from("Temp"),
        Cell::from("Feels"),
        Cell::from("Humidity"),
        Cell::from("Wind"),
        Cell::from("Pressure"),
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app.weather.iter().map(weather_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(18),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, area);
}

fn weather_row(record: &WeatherRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(record.location.clone()),
        Cell::from(format!(
            "{} {}",
            weather_icon(record.condition),
            record.condition.label()
        )),
        Cell::from(Span::styled(
            format!("{}°C", record.temperature),
            Style::default()
                .fg(temperature_color(record.temperature))
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(format!("{}°C", record.feels_like)),
        Cell::from(format!("{}%", record.humidity)),
        Cell::from(format!(
            "{} km/h {}",
            record.wind_speed,
            record.wind_direction.label()
        )),
        Cell::from(format!("{} hPa", record.pressure)),
    ])
}
