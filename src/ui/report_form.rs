//! "Report Fire" tab: the submission form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode};
use crate::classify::intensity_color;
use crate::data::Intensity;
use crate::report_form::{FormField, MAX_IMAGES};
use crate::ui::titled_block;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.is_submitting() {
        let block = titled_block("Report Fire");
        let sending = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Sending report...",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block);
        frame.render_widget(sending, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Location
            Constraint::Length(6), // Intensity
            Constraint::Length(4), // Description
            Constraint::Min(3),    // Images
        ])
        .split(area);

    render_location(frame, app, chunks[0]);
    render_intensity(frame, app, chunks[1]);
    render_description(frame, app, chunks[2]);
    render_images(frame, app, chunks[3]);
}

/// Block for a field, highlighted while it has focus in form mode
fn field_block(app: &App, field: FormField, title: &str) -> Block<'static> {
    let focused = app.input_mode == InputMode::Form && app.form_field == field;
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    titled_block(title).border_style(Style::default().fg(color))
}

/// Text with a cursor while focused, or a placeholder while empty
fn field_text(app: &App, field: FormField, value: &str, placeholder: &'static str) -> Span<'static> {
    let focused = app.input_mode == InputMode::Form && app.form_field == field;
    if focused {
        Span::raw(format!("{}_", value))
    } else if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    }
}

fn render_location(frame: &mut Frame, app: &App, area: Rect) {
    let block = field_block(app, FormField::Location, "Location · Ctrl-G uses my location");
    let text = field_text(
        app,
        FormField::Location,
        &app.draft.location,
        "Address, landmark or coordinates",
    );
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

fn render_intensity(frame: &mut Frame, app: &App, area: Rect) {
    let block = field_block(app, FormField::Intensity, "Fire intensity");
    let lines: Vec<Line> = Intensity::ALL
        .iter()
        .map(|&intensity| {
            let selected = app.draft.intensity == Some(intensity);
            let radio = if selected { "(•) " } else { "( ) " };
            let name_style = if selected {
                Style::default()
                    .fg(intensity_color(intensity))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(intensity_color(intensity))
            };
            Line::from(vec![
                Span::raw(radio),
                Span::styled(format!("{:<9}", intensity.label()), name_style),
                Span::styled(intensity.hint(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_description(frame: &mut Frame, app: &App, area: Rect) {
    let block = field_block(app, FormField::Description, "Description");
    let text = field_text(
        app,
        FormField::Description,
        &app.draft.description,
        "What do you see? Smoke, flames, affected area",
    );
    let paragraph = Paragraph::new(Line::from(text))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_images(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("Images {}/{}", app.draft.images.len(), MAX_IMAGES);
    let block = field_block(app, FormField::Images, &title);

    let mut lines: Vec<Line> = app
        .draft
        .images
        .iter()
        .map(|path| {
            Line::from(vec![
                Span::styled("▣ ", Style::default().fg(Color::Cyan)),
                Span::raw(path.display().to_string()),
            ])
        })
        .collect();

    if app.draft.can_add_images() {
        let input = field_text(
            app,
            FormField::Images,
            &app.draft.image_input,
            "Paths separated by commas, Enter to attach",
        );
        lines.push(Line::from(input));
    } else {
        lines.push(Line::from(Span::styled(
            "Image limit reached",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
