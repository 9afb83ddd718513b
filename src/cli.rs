//! Command-line interface parsing for EarthSentinel
//!
//! This module handles parsing of CLI arguments using clap: the initial
//! region and tab, an optional RNG seed, an optional fixed position for the
//! report form, and the non-interactive `--dump` mode.

use clap::Parser;
use thiserror::Error;

use crate::app::View;
use crate::data::{Coordinates, RegionCode};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified view name is not recognized
    #[error("Invalid view: '{0}'. Valid views: weather, forecast, fires, carbon, reports, impact, report")]
    InvalidView(String),

    /// The position is not a `lat,lng` pair
    #[error("Invalid position: '{0}'. Expected LAT,LNG in decimal degrees, e.g. -15.78,-47.93")]
    InvalidPosition(String),
}

/// EarthSentinel - Environmental monitoring for Brazil
#[derive(Parser, Debug)]
#[command(name = "earthsentinel")]
#[command(about = "Weather, fire alerts, carbon balance and citizen fire reports for Brazil")]
#[command(version)]
pub struct Cli {
    /// Initial region: a two-letter state code or "all"
    #[arg(long, value_name = "CODE", default_value = RegionCode::ALL)]
    pub region: String,

    /// Tab to open on start
    ///
    /// Valid views: weather, forecast, fires, carbon, reports, impact, report
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,

    /// Seed for the mock data generators
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Position reported by "use my location" in the report form
    ///
    /// Example: --position=-15.78,-47.93
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Print the selected view's data as JSON and exit
    #[arg(long)]
    pub dump: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub region: RegionCode,
    pub view: View,
    pub seed: Option<u64>,
    pub position: Option<Coordinates>,
    pub dump: bool,
}

/// Parses a view name argument into a View.
///
/// # Arguments
/// * `s` - The view string from CLI
///
/// # Returns
/// * `Ok(View)` if the string matches a valid view
/// * `Err(CliError::InvalidView)` if the string doesn't match
pub fn parse_view_arg(s: &str) -> Result<View, CliError> {
    View::from_str(s).ok_or_else(|| CliError::InvalidView(s.to_string()))
}

/// Parses a `lat,lng` pair
pub fn parse_position_arg(s: &str) -> Result<Coordinates, CliError> {
    let invalid = || CliError::InvalidPosition(s.to_string());
    let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }
    Ok(Coordinates::new(lat, lng))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the view or position is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let view = match &cli.view {
            Some(view) => parse_view_arg(view)?,
            None => View::default(),
        };
        let position = cli.position.as_deref().map(parse_position_arg).transpose()?;

        Ok(StartupConfig {
            region: RegionCode::new(&cli.region),
            view,
            seed: cli.seed,
            position,
            dump: cli.dump,
        })
    }
}
