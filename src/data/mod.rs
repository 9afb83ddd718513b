//! Core data models for EarthSentinel
//!
//! This module contains the record types shown by every dashboard view,
//! plus the mock generators that produce them for a selected region.

pub mod carbon;
pub mod fires;
pub mod forecast;
pub mod impact;
pub mod regions;
pub mod reports;
pub mod weather;

pub use carbon::{emission_sources, generate_carbon, total_balance};
pub use fires::{generate_fire_alerts, generate_map_alerts, high_risk_count, total_area};
pub use forecast::generate_forecast;
pub use regions::{all_regions, get_region, regional_fire_risk, Region};
pub use reports::{filter_reports, mock_reports, status_counts, StatusCounts, StatusFilter};
pub use weather::generate_weather;

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier for a Brazilian state, or the nationwide sentinel `"all"`
///
/// Codes are normalised to lowercase but never validated: an unknown code
/// simply fails to match the lookup tables and every generator falls back
/// to its generic labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionCode(String);

impl RegionCode {
    /// Sentinel value selecting the whole country
    pub const ALL: &'static str = "all";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_lowercase())
    }

    /// The nationwide selection
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-case form used in display labels (e.g. "SP")
    pub fn to_upper(&self) -> String {
        self.0.to_uppercase()
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns a copy shifted by up to ±`max_degrees` on each axis
    pub fn jitter<R: Rng>(self, rng: &mut R, max_degrees: f64) -> Self {
        Self {
            lat: self.lat + rng.gen_range(-max_degrees..max_degrees),
            lng: self.lng + rng.gen_range(-max_degrees..max_degrees),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Sky conditions used by the weather and forecast views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    LightRain,
    Rainy,
    Clear,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::LightRain => "Light rain",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Clear => "Clear sky",
        }
    }
}

/// Eight-point compass direction for wind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::N => "N",
            WindDirection::NE => "NE",
            WindDirection::E => "E",
            WindDirection::SE => "SE",
            WindDirection::S => "S",
            WindDirection::SW => "SW",
            WindDirection::W => "W",
            WindDirection::NW => "NW",
        }
    }
}

/// Current weather conditions at one location
#[derive(Debug, Clone, Serialize)]
pub struct WeatherRecord {
    /// Display label, e.g. "Manaus, AM"
    pub location: String,
    /// Air temperature in Celsius
    pub temperature: i32,
    /// Feels-like temperature in Celsius
    pub feels_like: i32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_speed: u32,
    pub wind_direction: WindDirection,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    pub condition: WeatherCondition,
    pub updated_at: DateTime<Local>,
}

/// One day of the rolling five-day forecast
#[derive(Debug, Clone, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// "Today" for the first day, otherwise the weekday name
    pub day_label: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub condition: WeatherCondition,
    /// Probability of precipitation (0-100)
    pub rain_chance: u8,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
}

/// A forecast window together with the place it describes
#[derive(Debug, Clone, Default, Serialize)]
pub struct Forecast {
    pub location: String,
    pub days: Vec<ForecastDay>,
}

/// Fire risk classification, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }

    /// Parses a level name, case-insensitively
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" | "moderate" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "extreme" => Some(RiskLevel::Extreme),
            _ => None,
        }
    }

    /// Public guidance shown alongside a regional risk level
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Low fire risk. Conditions are favourable for outdoor activities."
            }
            RiskLevel::Medium => {
                "Moderate fire risk. Take care with activities that can produce sparks."
            }
            RiskLevel::High => {
                "High fire risk. Avoid activities that can produce sparks and watch for fire outbreaks."
            }
            RiskLevel::Extreme => {
                "Extreme fire risk. Critical situation requiring maximum attention. Avoid any activity that can produce sparks."
            }
        }
    }

    /// The next level up, saturating at Extreme
    pub fn next(&self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::High,
            RiskLevel::High | RiskLevel::Extreme => RiskLevel::Extreme,
        }
    }
}

/// Attribution for a fire detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireSource {
    Inpe,
    NasaFirms,
    Sentinel2,
    Modis,
    UserReport,
}

impl FireSource {
    pub const ALL: [FireSource; 5] = [
        FireSource::Inpe,
        FireSource::NasaFirms,
        FireSource::Sentinel2,
        FireSource::Modis,
        FireSource::UserReport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FireSource::Inpe => "INPE",
            FireSource::NasaFirms => "NASA FIRMS",
            FireSource::Sentinel2 => "Sentinel-2",
            FireSource::Modis => "MODIS",
            FireSource::UserReport => "User report",
        }
    }
}

/// A detected fire outbreak
#[derive(Debug, Clone, Serialize)]
pub struct FireAlert {
    pub id: String,
    /// City or biome label
    pub location: String,
    /// Upper-case region code the alert belongs to
    pub region: String,
    pub risk: RiskLevel,
    pub coordinates: Coordinates,
    /// Affected area in hectares, always positive
    pub area: u32,
    pub detected_at: DateTime<Local>,
    pub source: FireSource,
}

/// Direction of a carbon emissions trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Increasing",
            Trend::Down => "Decreasing",
            Trend::Stable => "Stable",
        }
    }
}

/// Annual carbon figures for one region
#[derive(Debug, Clone, Serialize)]
pub struct CarbonRegion {
    pub region: String,
    /// Emissions in tons of CO2 equivalent
    pub emissions: i64,
    /// Capture in tons of CO2 equivalent
    pub capture: i64,
    pub year: i32,
    pub trend: Trend,
}

impl CarbonRegion {
    /// Net balance: positive means net capture, negative means net emission
    pub fn balance(&self) -> i64 {
        self.capture - self.emissions
    }
}

/// Share of emissions attributed to one sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmissionSource {
    pub name: &'static str,
    /// Percentage of total emissions
    pub share: u8,
}

/// Review state of a citizen fire report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Verified,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::Verified,
        ReportStatus::Resolved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Verified => "Verified",
            ReportStatus::Resolved => "Resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(ReportStatus::Pending),
            "verified" => Some(ReportStatus::Verified),
            "resolved" => Some(ReportStatus::Resolved),
            _ => None,
        }
    }
}

/// Observed fire intensity on a citizen report, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
    Extreme,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Extreme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
            Intensity::Extreme => "Extreme",
        }
    }

    /// Guidance shown in the report form next to each option
    pub fn hint(&self) -> &'static str {
        match self {
            Intensity::Low => "Visible smoke, no apparent flames",
            Intensity::Medium => "Visible flames, small area",
            Intensity::High => "Large flames, extensive area",
            Intensity::Extreme => "Uncontrolled fire, immediate danger",
        }
    }
}

/// A fire outbreak reported by the user
#[derive(Debug, Clone, Serialize)]
pub struct UserReport {
    pub id: String,
    pub reported_at: NaiveDateTime,
    pub location: String,
    pub coordinates: Coordinates,
    pub status: ReportStatus,
    pub intensity: Intensity,
    pub description: String,
    pub has_images: bool,
}

/// Picks one element from a non-empty constant table
pub(crate) fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}
