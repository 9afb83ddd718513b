//! Region picker overlay
//!
//! Lists "All of Brazil" followed by the 27 states, scrolling so the
//! cursor stays visible.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::regions::{region_label, selectable_codes};
use crate::ui::help_overlay::centered_rect;

pub fn render(frame: &mut Frame, app: &App) {
    let Some(cursor) = app.region_picker else {
        return;
    };
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Select region ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let visible = block.inner(area).height as usize;

    let codes = selectable_codes();
    let current = app.region();
    let offset = scroll_offset(cursor, visible, codes.len());

    let lines: Vec<Line> = codes
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, code)| {
            let prefix = if i == cursor { "▶ " } else { "  " };
            let mut style = Style::default();
            if i == cursor {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            let marker = if *code == current { " ✓" } else { "" };
            let tag = if code.is_all() {
                "   ".to_string()
            } else {
                format!("{} ", code.to_upper())
            };
            Line::from(vec![
                Span::raw(prefix),
                Span::styled(tag, Style::default().fg(Color::Gray)),
                Span::styled(region_label(code), style),
                Span::styled(marker, Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// First visible row so that `cursor` stays on screen
pub(crate) fn scroll_offset(cursor: usize, visible: usize, total: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    cursor
        .saturating_sub(visible - 1)
        .min(total - visible)
}
