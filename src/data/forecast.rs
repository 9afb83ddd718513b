//! Mock five-day forecast generator

use chrono::{DateTime, Datelike, Duration, Local, Weekday};
use rand::Rng;

use super::{pick, regions::get_region, Forecast, ForecastDay, RegionCode, WeatherCondition};

/// Number of days in the rolling forecast window
pub const FORECAST_DAYS: usize = 5;

const CONDITIONS: [WeatherCondition; 5] = [
    WeatherCondition::Sunny,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Rainy,
    WeatherCondition::Cloudy,
    WeatherCondition::Clear,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Location shown in the forecast heading
///
/// "Brazil" for the nationwide selection; the state name for the ten major
/// states; otherwise the upper-case code.
pub fn forecast_location(region: &RegionCode) -> String {
    if region.is_all() {
        return "Brazil".to_string();
    }
    match get_region(region) {
        Some(r) if r.capital.is_some() => r.name.to_string(),
        _ => region.to_upper(),
    }
}

/// Generates a five-day forecast starting today
///
/// Maximums are drawn from 25-34°C and minimums from 15-24°C, so a day's
/// minimum never exceeds its maximum.
pub fn generate_forecast<R: Rng>(region: &RegionCode, rng: &mut R, now: DateTime<Local>) -> Forecast {
    let today = now.date_naive();

    let days = (0..FORECAST_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset as i64);
            let day_label = if offset == 0 {
                "Today".to_string()
            } else {
                weekday_name(date.weekday()).to_string()
            };

            ForecastDay {
                date,
                day_label,
                max_temp: rng.gen_range(25..35),
                min_temp: rng.gen_range(15..25),
                condition: pick(rng, &CONDITIONS),
                rain_chance: rng.gen_range(0..100),
                humidity: rng.gen_range(40..80),
            }
        })
        .collect();

    Forecast {
        location: forecast_location(region),
        days,
    }
}
