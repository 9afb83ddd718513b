//! Fire marker map widget
//!
//! Places one marker per alert on a dotted canvas using the linear map
//! projection. Markers that project outside the canvas are not drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::classify::risk_color;
use crate::data::FireAlert;
use crate::projection::project;

const BACKGROUND: char = '·';
const MARKER: char = '●';
const ACTIVE_MARKER: char = '◆';

/// Draws fire alerts on a projected canvas
pub struct FireMap<'a> {
    alerts: &'a [&'a FireAlert],
    focused: Option<usize>,
    active: Option<&'a str>,
}

impl<'a> FireMap<'a> {
    pub fn new(alerts: &'a [&'a FireAlert]) -> Self {
        Self {
            alerts,
            focused: None,
            active: None,
        }
    }

    /// Highlights the marker at this index
    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    /// Marks the alert whose detail popover is open
    pub fn active(mut self, id: Option<&'a str>) -> Self {
        self.active = id;
        self
    }

    /// Cells each alert lands on, by alert index
    pub fn placements(&self, area: Rect) -> Vec<(usize, (u16, u16))> {
        self.alerts
            .iter()
            .enumerate()
            .filter_map(|(i, alert)| project(alert.coordinates).to_cell(area).map(|cell| (i, cell)))
            .collect()
    }
}

impl<'a> Widget for FireMap<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let background = Style::default().fg(Color::DarkGray);
        for y in area.top()..area.bottom() {
            for x in (area.left()..area.right()).step_by(2) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(BACKGROUND).set_style(background);
                }
            }
        }

        for (i, (x, y)) in self.placements(area) {
            let alert = self.alerts[i];
            let is_active = self.active == Some(alert.id.as_str());
            let mut style = Style::default().fg(risk_color(alert.risk));
            if self.focused == Some(i) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            let symbol = if is_active { ACTIVE_MARKER } else { MARKER };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(symbol).set_style(style);
            }
        }
    }
}
