//! Mock fire-alert generators
//!
//! Alerts are placed by jittering a region's base coordinate by up to one
//! degree on each axis. The nationwide selection draws alerts from random
//! states and labels them with biome names.

use chrono::{DateTime, Local};
use rand::Rng;

use super::{
    pick,
    regions::{get_region, BIOMES, FALLBACK_FIRE_BASE, REGIONS},
    Coordinates, FireAlert, FireSource, RegionCode, RiskLevel,
};

/// Number of alerts generated for the nationwide selection
pub const NATIONWIDE_ALERTS: usize = 8;

/// Number of alerts on the nationwide fire map
pub const MAP_ALERTS: usize = 30;

/// Maximum coordinate jitter in degrees
const JITTER_DEGREES: f64 = 1.0;

/// States the nationwide fire map attributes alerts to
const MAP_STATES: [&str; 10] = ["AM", "PA", "MT", "GO", "MG", "SP", "PR", "RS", "BA", "PE"];

/// Generates fire alerts for a region
///
/// # Returns
/// * Nationwide: 8 alerts from random states, labelled with biomes, 50-1049 ha
/// * A state: 2-4 alerts attributed to the state's cities, 20-519 ha
pub fn generate_fire_alerts<R: Rng>(
    region: &RegionCode,
    rng: &mut R,
    now: DateTime<Local>,
) -> Vec<FireAlert> {
    if region.is_all() {
        return (0..NATIONWIDE_ALERTS)
            .map(|i| {
                let biome = pick(rng, &BIOMES);
                let state = &REGIONS[rng.gen_range(0..REGIONS.len())];
                FireAlert {
                    id: format!("fire-{}-{}", i, state.code),
                    location: biome.to_string(),
                    region: state.code.to_uppercase(),
                    risk: pick(rng, &RiskLevel::ALL),
                    coordinates: state.fire_base.jitter(rng, JITTER_DEGREES),
                    area: rng.gen_range(50..1050),
                    detected_at: now,
                    source: pick(rng, &FireSource::ALL),
                }
            })
            .collect();
    }

    let code = region.to_upper();
    let known = get_region(region);
    let base = known.map(|r| r.fire_base).unwrap_or(FALLBACK_FIRE_BASE);
    let cities: Vec<String> = match known {
        Some(r) if !r.fire_cities.is_empty() => {
            r.fire_cities.iter().map(|c| c.to_string()).collect()
        }
        _ => vec![format!("Capital of {}", code), format!("Interior of {}", code)],
    };

    let count = rng.gen_range(2..=4);
    (0..count)
        .map(|i| FireAlert {
            id: format!("fire-{}-{}", i, region.as_str()),
            location: cities[rng.gen_range(0..cities.len())].clone(),
            region: code.clone(),
            risk: pick(rng, &RiskLevel::ALL),
            coordinates: base.jitter(rng, JITTER_DEGREES),
            area: rng.gen_range(20..520),
            detected_at: now,
            source: pick(rng, &FireSource::ALL),
        })
        .collect()
}

/// Generates the 30-alert dataset for the nationwide fire map
///
/// Coordinates fall within ten degrees of (-15, -50), which covers central
/// Brazil.
pub fn generate_map_alerts<R: Rng>(rng: &mut R, now: DateTime<Local>) -> Vec<FireAlert> {
    let centre = Coordinates::new(-15.0, -50.0);
    (1..=MAP_ALERTS)
        .map(|n| FireAlert {
            id: format!("FIRE-{}", n),
            location: format!("Location {}", n),
            region: pick(rng, &MAP_STATES).to_string(),
            risk: pick(rng, &RiskLevel::ALL),
            coordinates: centre.jitter(rng, 10.0),
            area: rng.gen_range(10..1010),
            detected_at: now,
            source: pick(rng, &FireSource::ALL),
        })
        .collect()
}

/// Counts alerts at High risk or above
pub fn high_risk_count(alerts: &[FireAlert]) -> usize {
    alerts.iter().filter(|a| a.risk >= RiskLevel::High).count()
}

/// Total burning area in hectares
pub fn total_area(alerts: &[FireAlert]) -> u64 {
    alerts.iter().map(|a| u64::from(a.area)).sum()
}
