//! Remote data endpoints
//!
//! Placeholders for a future monitoring backend. Every fetch accepts a region
//! code and currently resolves to an empty list, which callers treat as "no
//! remote data" and keep showing their generated data.

use thiserror::Error;

use crate::data::{CarbonRegion, FireAlert, ForecastDay, RegionCode, WeatherRecord};

/// Errors that can occur when fetching remote data
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be reached
    #[error("{endpoint} request failed: {message}")]
    RequestFailed {
        endpoint: &'static str,
        message: String,
    },

    /// The response body could not be decoded
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub async fn fetch_weather_data(region: &RegionCode) -> Result<Vec<WeatherRecord>, ApiError> {
    tracing::debug!(%region, "fetch_weather_data");
    Ok(Vec::new())
}

pub async fn fetch_forecast_data(region: &RegionCode) -> Result<Vec<ForecastDay>, ApiError> {
    tracing::debug!(%region, "fetch_forecast_data");
    Ok(Vec::new())
}

pub async fn fetch_fire_alerts(region: &RegionCode) -> Result<Vec<FireAlert>, ApiError> {
    tracing::debug!(%region, "fetch_fire_alerts");
    Ok(Vec::new())
}

pub async fn fetch_carbon_data(region: &RegionCode) -> Result<Vec<CarbonRegion>, ApiError> {
    tracing::debug!(%region, "fetch_carbon_data");
    Ok(Vec::new())
}

/// Results of one round of fetches for a region
#[derive(Debug)]
pub struct ApiSnapshot {
    pub region: RegionCode,
    pub weather: Result<Vec<WeatherRecord>, ApiError>,
    pub forecast: Result<Vec<ForecastDay>, ApiError>,
    pub fires: Result<Vec<FireAlert>, ApiError>,
    pub carbon: Result<Vec<CarbonRegion>, ApiError>,
}

/// Fetches every dataset for a region concurrently
pub async fn fetch_all(region: &RegionCode) -> ApiSnapshot {
    let (weather, forecast, fires, carbon) = futures::join!(
        fetch_weather_data(region),
        fetch_forecast_data(region),
        fetch_fire_alerts(region),
        fetch_carbon_data(region),
    );

    ApiSnapshot {
        region: region.clone(),
        weather,
        forecast,
        fires,
        carbon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetches_return_empty_lists() {
        for code in ["all", "sp", "zz"] {
            let region = RegionCode::new(code);
            assert!(fetch_weather_data(&region).await.unwrap().is_empty());
            assert!(fetch_forecast_data(&region).await.unwrap().is_empty());
            assert!(fetch_fire_alerts(&region).await.unwrap().is_empty());
            assert!(fetch_carbon_data(&region).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_fetch_all_collects_every_endpoint() {
        let snapshot = fetch_all(&RegionCode::new("am")).await;
        assert_eq!(snapshot.region, RegionCode::new("am"));
        assert!(snapshot.weather.unwrap().is_empty());
        assert!(snapshot.forecast.unwrap().is_empty());
        assert!(snapshot.fires.unwrap().is_empty());
        assert!(snapshot.carbon.unwrap().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::RequestFailed {
            endpoint: "fire alerts",
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "fire alerts request failed: connection refused");

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(ApiError::from(parse).to_string().starts_with("Failed to parse API response"));
    }
}
