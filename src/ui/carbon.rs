//! Carbon balance tab: regional balances and the emissions breakdown

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, CarbonTab};
use crate::classify::{balance_color, trend_arrow};
use crate::data::{emission_sources, total_balance, CarbonRegion};
use crate::ui::titled_block;
use crate::ui::widgets::PercentBar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sub-tab selector
            Constraint::Length(2), // Total balance
            Constraint::Min(3),    // Content
        ])
        .split(area);

    render_sub_tabs(frame, app.carbon_tab, chunks[0]);
    render_total(frame, &app.carbon, chunks[1]);

    match app.carbon_tab {
        CarbonTab::Regions => render_regions(frame, &app.carbon, chunks[2]),
        CarbonTab::Sources => render_sources(frame, chunks[2]),
    }
}

fn render_sub_tabs(frame: &mut Frame, tab: CarbonTab, area: Rect) {
    let style_for = |selected: bool| {
        if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    let line = Line::from(vec![
        Span::styled("[Regions]", style_for(tab == CarbonTab::Regions)),
        Span::raw(" "),
        Span::styled("[Emission sources]", style_for(tab == CarbonTab::Sources)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_total(frame: &mut Frame, regions: &[CarbonRegion], area: Rect) {
    let total = total_balance(regions);
    let verdict = if total >= 0 { "net capture" } else { "net emission" };
    let line = Line::from(vec![
        Span::styled("Total balance: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{} t CO2", format_tons(total)),
            Style::default()
                .fg(balance_color(total))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", verdict), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_regions(frame: &mut Frame, regions: &[CarbonRegion], area: Rect) {
    let year = regions.first().map(|r| r.year);
    let title = match year {
        Some(year) => format!("Carbon Balance by Region · {}", year),
        None => "Carbon Balance by Region".to_string(),
    };

    let header = Row::new(vec![
        Cell::from("Region"),
        Cell::from("Emissions"),
        Cell::from("Capture"),
        Cell::from("Balance"),
        Cell::from("Trend"),
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = regions
        .iter()
        .map(|region| {
            let balance = region.balance();
            Row::new(vec![
                Cell::from(region.region.clone()),
                Cell::from(format!("{} t", format_tons(region.emissions))),
                Cell::from(format!("{} t", format_tons(region.capture))),
                Cell::from(Span::styled(
                    format!("{} t", format_tons(balance)),
                    Style::default().fg(balance_color(balance)),
                )),
                Cell::from(format!(
                    "{} {}",
                    trend_arrow(region.trend),
                    region.trend.label()
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(titled_block(&title));

    frame.render_widget(table, area);
}

fn render_sources(frame: &mut Frame, area: Rect) {
    let block = titled_block("Emission Sources");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sources = emission_sources();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(sources.iter().map(|_| Constraint::Length(1)))
        .split(inner);

    for (source, row) in sources.iter().zip(rows.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Length(5),
                Constraint::Min(1),
            ])
            .split(*row);

        frame.render_widget(Paragraph::new(source.name), columns[0]);
        frame.render_widget(
            Paragraph::new(format!("{}%", source.share)).style(Style::default().fg(Color::Gray)),
            columns[1],
        );
        frame.render_widget(
            PercentBar::new(source.share).style(Style::default().fg(Color::LightRed)),
            columns[2],
        );
    }
}

/// Formats tonnes with thousands separators, keeping the sign
fn format_tons(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
