//! Map projection and marker selection
//!
//! Coordinates are mapped linearly into a percentage space over a
//! Brazil-centric bounding box, then from percentages onto terminal cells.

use ratatui::layout::Rect;

/// Latitude offset and span of the bounding box
const LAT_OFFSET: f64 = 33.0;
const LAT_SPAN: f64 = 66.0;

/// Longitude offset and span of the bounding box
const LNG_OFFSET: f64 = 74.0;
const LNG_SPAN: f64 = 148.0;

/// A position on the map canvas, in percent of its height and width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub top: f64,
    pub left: f64,
}

/// Projects a coordinate onto the canvas
///
/// Values are not clamped; points outside the bounding box land outside
/// 0-100 and are dropped by [`MapPoint::to_cell`].
pub fn project(coords: crate::data::Coordinates) -> MapPoint {
    MapPoint {
        top: (coords.lat + LAT_OFFSET) / LAT_SPAN * 100.0,
        left: (coords.lng + LNG_OFFSET) / LNG_SPAN * 100.0,
    }
}

impl MapPoint {
    /// Returns the `(column, row)` cell for this point inside `area`
    ///
    /// # Returns
    /// * `Some((x, y))` in absolute terminal coordinates
    /// * `None` if the area is empty or the point lies off the canvas
    pub fn to_cell(&self, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if !(0.0..=100.0).contains(&self.top) || !(0.0..=100.0).contains(&self.left) {
            return None;
        }

        let col = (self.left / 100.0 * f64::from(area.width - 1)).round() as u16;
        let row = (self.top / 100.0 * f64::from(area.height - 1)).round() as u16;
        Some((area.x + col, area.y + row))
    }
}

/// Tracks the single marker whose detail popover is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSelection {
    active: Option<String>,
}

impl MarkerSelection {
    /// Opens `id`, or closes it if it is already open
    ///
    /// Opening a marker replaces whichever marker was open before.
    pub fn toggle(&mut self, id: &str) {
        if self.is_active(id) {
            self.active = None;
        } else {
            self.active = Some(id.to_string());
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
