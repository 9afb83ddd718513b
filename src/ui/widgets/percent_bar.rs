//! Horizontal percentage bar for inline visualization

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const FILLED: char = '█';
const EMPTY: char = '░';

/// A one-row bar filled in proportion to a percentage
pub struct PercentBar {
    /// Fill level, clamped to 100
    percent: u8,
    style: Style,
    empty_style: Style,
}

impl PercentBar {
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
            style: Style::default().fg(Color::Cyan),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Number of filled cells for a bar `width` cells wide
    fn filled_cells(&self, width: u16) -> u16 {
        ((f64::from(self.percent) / 100.0) * f64::from(width)).round() as u16
    }
}

impl Widget for PercentBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let filled = self.filled_cells(area.width);
        for i in 0..area.width {
            let (symbol, style) = if i < filled {
                (FILLED, self.style)
            } else {
                (EMPTY, self.empty_style)
            };
            if let Some(cell) = buf.cell_mut((area.x + i, area.y)) {
                cell.set_char(symbol).set_style(style);
            }
        }
    }
}
