//! Mock current-weather generator
//!
//! Produces the weather cards for a region. The nationwide selection gets a
//! fixed list of major capitals; a single state gets three synthesized
//! readings around its capital, interior and north.

use chrono::{DateTime, Local};
use rand::Rng;

use super::{pick, regions::get_region, RegionCode, WeatherCondition, WeatherRecord, WindDirection};

/// Label used when a state has no capital in the lookup table
const FALLBACK_CITY: &str = "Main City";

/// Conditions drawn for synthesized readings
const CONDITIONS: [WeatherCondition; 5] = [
    WeatherCondition::Sunny,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Cloudy,
    WeatherCondition::LightRain,
    WeatherCondition::Clear,
];

/// Fixed nationwide readings: (location, temperature, feels like, humidity, wind, pressure, condition)
const NATIONWIDE: [(&str, i32, i32, u8, u32, u32, WeatherCondition); 6] = [
    ("São Paulo, SP", 24, 26, 65, 12, 1012, WeatherCondition::PartlyCloudy),
    ("Rio de Janeiro, RJ", 28, 31, 70, 8, 1010, WeatherCondition::Sunny),
    ("Brasília, DF", 26, 27, 45, 15, 1015, WeatherCondition::Clear),
    ("Salvador, BA", 30, 33, 75, 10, 1008, WeatherCondition::Sunny),
    ("Manaus, AM", 32, 36, 85, 5, 1005, WeatherCondition::LightRain),
    ("Porto Alegre, RS", 22, 23, 60, 18, 1018, WeatherCondition::Cloudy),
];

/// Generates current weather readings for a region
///
/// # Arguments
/// * `region` - The selected region code
/// * `rng` - Random source for the synthesized values
/// * `now` - Timestamp stamped on every reading
///
/// # Returns
/// Six fixed readings for the nationwide selection, otherwise three readings
/// with temperature 20-34°C, feels-like 22-36°C, humidity 40-79%, wind
/// 5-24 km/h and pressure 1000-1019 hPa.
pub fn generate_weather<R: Rng>(
    region: &RegionCode,
    rng: &mut R,
    now: DateTime<Local>,
) -> Vec<WeatherRecord> {
    if region.is_all() {
        return NATIONWIDE
            .iter()
            .map(
                |&(location, temperature, feels_like, humidity, wind_speed, pressure, condition)| {
                    WeatherRecord {
                        location: location.to_string(),
                        temperature,
                        feels_like,
                        humidity,
                        wind_speed,
                        // Wind direction varies even for the fixed readings
                        wind_direction: pick(rng, &WindDirection::ALL),
                        pressure,
                        condition,
                        updated_at: now,
                    }
                },
            )
            .collect();
    }

    let code = region.to_upper();
    let city = get_region(region)
        .and_then(|r| r.capital)
        .unwrap_or(FALLBACK_CITY);

    [
        format!("{}, {}", city, code),
        format!("Interior, {}", code),
        format!("North Region, {}", code),
    ]
    .into_iter()
    .map(|location| WeatherRecord {
        location,
        temperature: rng.gen_range(20..35),
        feels_like: rng.gen_range(22..37),
        humidity: rng.gen_range(40..80),
        wind_speed: rng.gen_range(5..25),
        wind_direction: pick(rng, &WindDirection::ALL),
        pressure: rng.gen_range(1000..1020),
        condition: pick(rng, &CONDITIONS),
        updated_at: now,
    })
    .collect()
}
