//! Gamified impact tracking for the signed-in user

use serde::Serialize;

/// Contribution level the impact gauge animates to
pub const CONTRIBUTION_LEVEL: u8 = 85;

/// Reports and CO2 avoided in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactMonth {
    pub month: &'static str,
    pub reports: u32,
    /// Estimated tons of CO2 avoided
    pub co2_avoided: u32,
}

/// An achievement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Totals shown in the impact summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    pub total_reports: u32,
    pub total_co2_avoided: u32,
    pub badges_unlocked: usize,
    pub badges_total: usize,
}

pub static IMPACT_MONTHS: [ImpactMonth; 12] = [
    ImpactMonth { month: "Jan", reports: 1, co2_avoided: 5 },
    ImpactMonth { month: "Feb", reports: 2, co2_avoided: 12 },
    ImpactMonth { month: "Mar", reports: 3, co2_avoided: 18 },
    ImpactMonth { month: "Apr", reports: 1, co2_avoided: 7 },
    ImpactMonth { month: "May", reports: 2, co2_avoided: 15 },
    ImpactMonth { month: "Jun", reports: 0, co2_avoided: 0 },
    ImpactMonth { month: "Jul", reports: 1, co2_avoided: 8 },
    ImpactMonth { month: "Aug", reports: 0, co2_avoided: 0 },
    ImpactMonth { month: "Sep", reports: 1, co2_avoided: 10 },
    ImpactMonth { month: "Oct", reports: 0, co2_avoided: 0 },
    ImpactMonth { month: "Nov", reports: 1, co2_avoided: 9 },
    ImpactMonth { month: "Dec", reports: 0, co2_avoided: 0 },
];

pub static BADGES: [Badge; 6] = [
    Badge {
        id: "badge-1",
        name: "Novice Sentinel",
        description: "Reported your first fire outbreak",
        unlocked: true,
    },
    Badge {
        id: "badge-2",
        name: "Forest Protector",
        description: "Reported 5 fire outbreaks",
        unlocked: true,
    },
    Badge {
        id: "badge-3",
        name: "Environmental Guardian",
        description: "Reported 10 fire outbreaks",
        unlocked: true,
    },
    Badge {
        id: "badge-4",
        name: "Seasoned Sentinel",
        description: "Reported outbreaks in 3 different states",
        unlocked: false,
    },
    Badge {
        id: "badge-5",
        name: "Environmental Analyst",
        description: "Reported 5 consecutive verified outbreaks",
        unlocked: false,
    },
    Badge {
        id: "badge-6",
        name: "Elite Protector",
        description: "Helped avoid 100 tons of CO2",
        unlocked: false,
    },
];

pub fn impact_months() -> &'static [ImpactMonth] {
    &IMPACT_MONTHS
}

pub fn badges() -> &'static [Badge] {
    &BADGES
}

/// Sums the monthly series and counts unlocked badges
pub fn impact_summary() -> ImpactSummary {
    ImpactSummary {
        total_reports: IMPACT_MONTHS.iter().map(|m| m.reports).sum(),
        total_co2_avoided: IMPACT_MONTHS.iter().map(|m| m.co2_avoided).sum(),
        badges_unlocked: BADGES.iter().filter(|b| b.unlocked).count(),
        badges_total: BADGES.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_summary_totals() {
        let summary = impact_summary();
        assert_eq!(summary.total_reports, 12);
        assert_eq!(summary.total_co2_avoided, 84);
        assert_eq!(summary.badges_unlocked, 3);
        assert_eq!(summary.badges_total, 6);
    }

    #[test]
    fn test_months_cover_a_year() {
        assert_eq!(impact_months().len(), 12);
        assert_eq!(impact_months()[0].month, "Jan");
        assert_eq!(impact_months()[11].month, "Dec");
    }

    #[test]
    fn test_months_without_reports_avoid_no_co2() {
        for month in impact_months() {
            if month.reports == 0 {
                assert_eq!(month.co2_avoided, 0, "{} has CO2 without reports", month.month);
            }
        }
    }

    #[test]
    fn test_badge_ids_unique() {
        let mut ids: Vec<&str> = badges().iter().map(|b| b.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), badges().len());
    }
}
