//! Colour and badge lookups for risk, intensity, status and trend values

use ratatui::style::Color;

use crate::data::{Intensity, ReportStatus, RiskLevel, Trend, WeatherCondition};

/// Colour for a fire risk level
pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Extreme => Color::Red,
    }
}

/// Colour for a risk level given by name; unknown names are gray
pub fn risk_color_for_label(label: &str) -> Color {
    RiskLevel::from_label(label)
        .map(risk_color)
        .unwrap_or(Color::Gray)
}

/// Colour for a reported fire intensity
pub fn intensity_color(intensity: Intensity) -> Color {
    match intensity {
        Intensity::Low => Color::Yellow,
        Intensity::Medium => Color::LightYellow,
        Intensity::High => Color::LightRed,
        Intensity::Extreme => Color::Red,
    }
}

/// Colour for a report review status
pub fn status_color(status: ReportStatus) -> Color {
    match status {
        ReportStatus::Pending => Color::Yellow,
        ReportStatus::Verified => Color::Blue,
        ReportStatus::Resolved => Color::Green,
    }
}

/// Badge label and colour for a status given by name
///
/// Unrecognised names render as a gray "Unknown" badge.
pub fn status_badge_for_label(label: &str) -> (&'static str, Color) {
    match ReportStatus::from_str(label) {
        Some(status) => (status.label(), status_color(status)),
        None => ("Unknown", Color::Gray),
    }
}

pub fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "\u{2191}",     // ↑
        Trend::Down => "\u{2193}",   // ↓
        Trend::Stable => "\u{2192}", // →
    }
}

/// Green for net capture, red for net emission
pub fn balance_color(balance: i64) -> Color {
    if balance >= 0 {
        Color::Green
    } else {
        Color::Red
    }
}

/// Weather condition to icon mapping
pub fn weather_icon(condition: WeatherCondition) -> &'static str {
    match condition {
        WeatherCondition::Sunny => "\u{2600}",        // ☀
        WeatherCondition::PartlyCloudy => "\u{26C5}", // ⛅
        WeatherCondition::Cloudy => "\u{2601}",       // ☁
        WeatherCondition::LightRain => "\u{1F326}",   // 🌦
        WeatherCondition::Rainy => "\u{1F327}",       // 🌧
        WeatherCondition::Clear => "\u{263C}",        // ☼
    }
}

/// Color for temperature (warmer = more red, cooler = more blue)
pub fn temperature_color(temp: i32) -> Color {
    if temp >= 32 {
        Color::Red
    } else if temp >= 28 {
        Color::LightRed
    } else if temp >= 24 {
        Color::Yellow
    } else if temp >= 20 {
        Color::Green
    } else {
        Color::Cyan
    }
}
