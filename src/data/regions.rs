//! Static region data for Brazilian states
//!
//! This module contains the lookup table for all 27 federative units: display
//! names, the capital used for weather headlines, the base coordinate used to
//! place fire alerts, the cities fire alerts are attributed to, and the static
//! fire-risk classification shown in the regional risk banner.

use super::{Coordinates, RegionCode, RiskLevel};

/// A Brazilian state and its mock-data parameters
#[derive(Debug, Clone, Copy)]
pub struct Region {
    /// Lowercase two-letter code (e.g. "sp")
    pub code: &'static str,
    /// State name
    pub name: &'static str,
    /// Capital used for weather headlines; only the ten major states carry one
    pub capital: Option<&'static str>,
    /// Approximate centre used as the base for fire alert coordinates
    pub fire_base: Coordinates,
    /// Cities fire alerts are attributed to; empty means the generic fallback
    pub fire_cities: &'static [&'static str],
    /// Static fire-risk classification
    pub fire_risk: RiskLevel,
}

/// Label shown for the nationwide selection
pub const NATIONWIDE_LABEL: &str = "All of Brazil";

/// Biome labels used for nationwide fire alerts
pub const BIOMES: [&str; 5] = [
    "Central Amazon",
    "Cerrado",
    "Pantanal",
    "Caatinga",
    "Atlantic Forest",
];

/// Base coordinate used when a region code is not in the table
pub const FALLBACK_FIRE_BASE: Coordinates = Coordinates::new(-15.0, -50.0);

/// Static array of all Brazilian states, ordered by state name
pub static REGIONS: [Region; 27] = [
    Region {
        code: "ac",
        name: "Acre",
        capital: None,
        fire_base: Coordinates::new(-9.0, -70.0),
        fire_cities: &["Rio Branco", "Cruzeiro do Sul", "Sena Madureira"],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "al",
        name: "Alagoas",
        capital: None,
        fire_base: Coordinates::new(-9.5, -36.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "ap",
        name: "Amapá",
        capital: None,
        fire_base: Coordinates::new(1.0, -52.0),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "am",
        name: "Amazonas",
        capital: Some("Manaus"),
        fire_base: Coordinates::new(-3.5, -65.0),
        fire_cities: &["Manaus", "Parintins", "Tefé", "Coari"],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "ba",
        name: "Bahia",
        capital: Some("Salvador"),
        fire_base: Coordinates::new(-12.5, -41.5),
        fire_cities: &["Salvador", "Feira de Santana", "Vitória da Conquista", "Ilhéus"],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "ce",
        name: "Ceará",
        capital: Some("Fortaleza"),
        fire_base: Coordinates::new(-5.0, -39.0),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "df",
        name: "Distrito Federal",
        capital: Some("Brasília"),
        fire_base: Coordinates::new(-15.8, -47.9),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "es",
        name: "Espírito Santo",
        capital: None,
        fire_base: Coordinates::new(-19.5, -40.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "go",
        name: "Goiás",
        capital: None,
        fire_base: Coordinates::new(-16.0, -49.5),
        fire_cities: &["Goiânia", "Anápolis", "Rio Verde", "Catalão"],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "ma",
        name: "Maranhão",
        capital: None,
        fire_base: Coordinates::new(-5.0, -45.0),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "mt",
        name: "Mato Grosso",
        capital: None,
        fire_base: Coordinates::new(-13.0, -56.0),
        fire_cities: &["Cuiabá", "Sinop", "Rondonópolis", "Cáceres"],
        fire_risk: RiskLevel::Extreme,
    },
    Region {
        code: "ms",
        name: "Mato Grosso do Sul",
        capital: None,
        fire_base: Coordinates::new(-20.5, -55.0),
        fire_cities: &["Campo Grande", "Dourados", "Três Lagoas"],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "mg",
        name: "Minas Gerais",
        capital: Some("Belo Horizonte"),
        fire_base: Coordinates::new(-18.0, -44.0),
        fire_cities: &["Belo Horizonte", "Uberlândia", "Juiz de Fora", "Montes Claros"],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "pa",
        name: "Pará",
        capital: None,
        fire_base: Coordinates::new(-3.0, -52.5),
        fire_cities: &["Belém", "Santarém", "Marabá", "Altamira"],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "pb",
        name: "Paraíba",
        capital: None,
        fire_base: Coordinates::new(-7.0, -36.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "pr",
        name: "Paraná",
        capital: Some("Curitiba"),
        fire_base: Coordinates::new(-24.5, -51.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "pe",
        name: "Pernambuco",
        capital: Some("Recife"),
        fire_base: Coordinates::new(-8.5, -37.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "pi",
        name: "Piauí",
        capital: None,
        fire_base: Coordinates::new(-7.5, -42.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "rj",
        name: "Rio de Janeiro",
        capital: Some("Rio de Janeiro"),
        fire_base: Coordinates::new(-22.0, -43.0),
        fire_cities: &["Rio de Janeiro", "Niterói", "Campos dos Goytacazes", "Petrópolis"],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "rn",
        name: "Rio Grande do Norte",
        capital: None,
        fire_base: Coordinates::new(-5.5, -36.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "rs",
        name: "Rio Grande do Sul",
        capital: Some("Porto Alegre"),
        fire_base: Coordinates::new(-30.0, -53.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "ro",
        name: "Rondônia",
        capital: None,
        fire_base: Coordinates::new(-10.5, -63.0),
        fire_cities: &[],
        fire_risk: RiskLevel::High,
    },
    Region {
        code: "rr",
        name: "Roraima",
        capital: None,
        fire_base: Coordinates::new(2.0, -61.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
    Region {
        code: "sc",
        name: "Santa Catarina",
        capital: None,
        fire_base: Coordinates::new(-27.5, -50.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "sp",
        name: "São Paulo",
        capital: Some("São Paulo"),
        fire_base: Coordinates::new(-22.0, -48.0),
        fire_cities: &["São Paulo", "Campinas", "Ribeirão Preto", "São José dos Campos"],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "se",
        name: "Sergipe",
        capital: None,
        fire_base: Coordinates::new(-10.5, -37.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Low,
    },
    Region {
        code: "to",
        name: "Tocantins",
        capital: None,
        fire_base: Coordinates::new(-10.0, -48.5),
        fire_cities: &[],
        fire_risk: RiskLevel::Medium,
    },
];

/// Get all states
pub fn all_regions() -> &'static [Region] {
    &REGIONS
}

/// Get a state by its code
///
/// Returns `None` for the nationwide sentinel and for unknown codes.
pub fn get_region(code: &RegionCode) -> Option<&'static Region> {
    REGIONS.iter().find(|region| region.code == code.as_str())
}

/// Human-readable label for a selection, as shown in the region picker
pub fn region_label(code: &RegionCode) -> String {
    if code.is_all() {
        return NATIONWIDE_LABEL.to_string();
    }
    get_region(code)
        .map(|region| region.name.to_string())
        .unwrap_or_else(|| code.to_upper())
}

/// Static fire-risk level for a selection
///
/// The nationwide selection reports a medium level; unknown codes report low.
pub fn regional_fire_risk(code: &RegionCode) -> RiskLevel {
    if code.is_all() {
        return RiskLevel::Medium;
    }
    get_region(code)
        .map(|region| region.fire_risk)
        .unwrap_or(RiskLevel::Low)
}

/// Every selectable region code, nationwide first, in picker order
pub fn selectable_codes() -> Vec<RegionCode> {
    std::iter::once(RegionCode::all())
        .chain(REGIONS.iter().map(|region| RegionCode::new(region.code)))
        .collect()
}
