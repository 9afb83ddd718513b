//! Mock carbon balance generator

use rand::Rng;

use super::{pick, CarbonRegion, EmissionSource, RegionCode, Trend};

/// Reporting year for all carbon figures
pub const CARBON_YEAR: i32 = 2023;

/// Fixed macro-region figures: (region, emissions, capture, trend)
const MACRO_REGIONS: [(&str, i64, i64, Trend); 5] = [
    ("North", 120_000, 180_000, Trend::Stable),
    ("Northeast", 150_000, 90_000, Trend::Up),
    ("Center-West", 200_000, 130_000, Trend::Down),
    ("Southeast", 350_000, 120_000, Trend::Up),
    ("South", 180_000, 150_000, Trend::Down),
];

/// Sub-regions synthesized for a single state
const STATE_SUBREGIONS: [&str; 3] = ["Capital", "Interior", "North Region"];

const EMISSION_SOURCES: [EmissionSource; 5] = [
    EmissionSource { name: "Transport", share: 35 },
    EmissionSource { name: "Industry", share: 25 },
    EmissionSource { name: "Agriculture", share: 20 },
    EmissionSource { name: "Energy", share: 15 },
    EmissionSource { name: "Waste", share: 5 },
];

/// Generates carbon figures for a region
///
/// The nationwide selection returns the five macro-regions. A state returns
/// three sub-regions with emissions 50,000-149,999 t and capture
/// 30,000-129,999 t.
pub fn generate_carbon<R: Rng>(region: &RegionCode, rng: &mut R) -> Vec<CarbonRegion> {
    if region.is_all() {
        return MACRO_REGIONS
            .iter()
            .map(|&(name, emissions, capture, trend)| CarbonRegion {
                region: name.to_string(),
                emissions,
                capture,
                year: CARBON_YEAR,
                trend,
            })
            .collect();
    }

    let code = region.to_upper();
    STATE_SUBREGIONS
        .iter()
        .map(|name| CarbonRegion {
            region: format!("{} ({})", name, code),
            emissions: rng.gen_range(50_000..150_000),
            capture: rng.gen_range(30_000..130_000),
            year: CARBON_YEAR,
            trend: pick(rng, &Trend::ALL),
        })
        .collect()
}

/// Sum of all regional balances; negative means net emission
pub fn total_balance(regions: &[CarbonRegion]) -> i64 {
    regions.iter().map(CarbonRegion::balance).sum()
}

/// Breakdown of emissions by sector
pub fn emission_sources() -> &'static [EmissionSource] {
    &EMISSION_SOURCES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_nationwide_returns_macro_regions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let regions = generate_carbon(&RegionCode::all(), &mut rng);

        assert_eq!(regions.len(), 5);
        assert_eq!(regions[0].region, "North");
        assert_eq!(regions[0].balance(), 60_000);
        assert_eq!(regions[3].balance(), -230_000);
        assert!(regions.iter().all(|r| r.year == CARBON_YEAR));
    }

    #[test]
    fn test_nationwide_total_balance_is_net_emission() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let regions = generate_carbon(&RegionCode::all(), &mut rng);
        // 60000 - 60000 - 70000 - 230000 - 30000
        assert_eq!(total_balance(&regions), -330_000);
    }

    #[test]
    fn test_state_returns_three_labelled_subregions() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let regions = generate_carbon(&RegionCode::new("mg"), &mut rng);

        let labels: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(labels, vec!["Capital (MG)", "Interior (MG)", "North Region (MG)"]);
    }

    #[test]
    fn test_balance_always_derived_from_capture_and_emissions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for code in ["all", "am", "rs", "zz"] {
            for _ in 0..50 {
                for region in generate_carbon(&RegionCode::new(code), &mut rng) {
                    assert_eq!(region.balance(), region.capture - region.emissions);
                }
            }
        }
    }

    #[test]
    fn test_state_values_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..100 {
            for region in generate_carbon(&RegionCode::new("pa"), &mut rng) {
                assert!((50_000..150_000).contains(&region.emissions));
                assert!((30_000..130_000).contains(&region.capture));
            }
        }
    }

    #[test]
    fn test_total_balance_of_empty_is_zero() {
        assert_eq!(total_balance(&[]), 0);
    }

    #[test]
    fn test_emission_sources_sum_to_one_hundred() {
        let total: u32 = emission_sources().iter().map(|s| s.share as u32).sum();
        assert_eq!(total, 100);
    }
}
