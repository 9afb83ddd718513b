//! The user's fire report history
//!
//! Holds the fixed list of reports the user has submitted and the
//! search/status filtering used by the reports view.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::{Coordinates, Intensity, ReportStatus, UserReport};

/// Status filter applied to the report list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every report regardless of status
    #[default]
    All,
    /// Show only reports with this status
    Only(ReportStatus),
}

impl StatusFilter {
    /// Order the filter cycles through in the UI
    pub const CYCLE: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(ReportStatus::Pending),
        StatusFilter::Only(ReportStatus::Verified),
        StatusFilter::Only(ReportStatus::Resolved),
    ];

    /// Parses "all", "pending", "verified" or "resolved"
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        ReportStatus::from_str(s).map(StatusFilter::Only)
    }

    pub fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// The next filter in cycle order, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::CYCLE.iter().position(|f| f == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }
}

/// Number of reports per status tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub verified: usize,
    pub resolved: usize,
}

/// Filters reports by free-text query and status
///
/// The query matches case-insensitively against the location, id or
/// description. An empty query matches everything. The input order is
/// preserved.
pub fn filter_reports<'a>(
    reports: &'a [UserReport],
    query: &str,
    filter: StatusFilter,
) -> Vec<&'a UserReport> {
    let needle = query.to_lowercase();
    reports
        .iter()
        .filter(|report| {
            needle.is_empty()
                || report.location.to_lowercase().contains(&needle)
                || report.id.to_lowercase().contains(&needle)
                || report.description.to_lowercase().contains(&needle)
        })
        .filter(|report| filter.matches(report.status))
        .collect()
}

/// Counts reports per status
pub fn status_counts(reports: &[&UserReport]) -> StatusCounts {
    reports.iter().fold(
        StatusCounts {
            all: reports.len(),
            ..StatusCounts::default()
        },
        |mut counts, report| {
            match report.status {
                ReportStatus::Pending => counts.pending += 1,
                ReportStatus::Verified => counts.verified += 1,
                ReportStatus::Resolved => counts.resolved += 1,
            }
            counts
        },
    )
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    reported_at: NaiveDateTime,
    location: &str,
    coordinates: Coordinates,
    status: ReportStatus,
    intensity: Intensity,
    description: &str,
    has_images: bool,
) -> UserReport {
    UserReport {
        id: id.to_string(),
        reported_at,
        location: location.to_string(),
        coordinates,
        status,
        intensity,
        description: description.to_string(),
        has_images,
    }
}

/// The user's twelve past reports, newest first
pub fn mock_reports() -> Vec<UserReport> {
    use Intensity as I;
    use ReportStatus as S;

    vec![
        report(
            "REP-001",
            timestamp(2023, 5, 10, 14, 32),
            "Chapada dos Veadeiros National Park, GO",
            Coordinates::new(-14.1347, -47.8292),
            S::Verified,
            I::Medium,
            "Fire outbreak near the main trail. Flames visible about 500m from the park entrance.",
            true,
        ),
        report(
            "REP-002",
            timestamp(2023, 4, 22, 9, 15),
            "Forest Reserve, MT",
            Coordinates::new(-15.6013, -56.0978),
            S::Resolved,
            I::High,
            "Large burning area next to the highway. Dense smoke visible for kilometres.",
            true,
        ),
        report(
            "REP-003",
            timestamp(2023, 4, 5, 16, 45),
            "Preservation Area, AM",
            Coordinates::new(-3.1190, -60.0217),
            S::Pending,
            I::Low,
            "Small plume of smoke seen in the woods. No visible flames, but the vegetation is dry.",
            false,
        ),
        report(
            "REP-004",
            timestamp(2023, 3, 28, 11, 20),
            "Santa Luzia Farm, MT",
            Coordinates::new(-12.6819, -55.7892),
            S::Verified,
            I::Extreme,
            "Major fire on pasture land, spreading towards a preservation area.",
            true,
        ),
        report(
            "REP-005",
            timestamp(2023, 3, 15, 8, 30),
            "Araguaia River Bank, TO",
            Coordinates::new(-10.5478, -50.6358),
            S::Resolved,
            I::Medium,
            "Fire in riverside vegetation. Hard to reach area.",
            false,
        ),
        report(
            "REP-006",
            timestamp(2023, 3, 2, 17, 10),
            "Serra do Cipó, MG",
            Coordinates::new(-19.3722, -43.5889),
            S::Resolved,
            I::High,
            "Fire in rocky grassland. Strong winds spreading the flames quickly.",
            true,
        ),
        report(
            "REP-007",
            timestamp(2023, 2, 18, 13, 25),
            "State Park, SP",
            Coordinates::new(-23.5505, -46.6333),
            S::Pending,
            I::Low,
            "Small fire near the camping area. Possibly caused by a badly extinguished campfire.",
            true,
        ),
        report(
            "REP-008",
            timestamp(2023, 2, 5, 10, 40),
            "Rural Area, PR",
            Coordinates::new(-25.4284, -49.2733),
            S::Verified,
            I::Medium,
            "Fire on farmland, approaching a fragment of native forest.",
            false,
        ),
        report(
            "REP-009",
            timestamp(2023, 1, 20, 15, 55),
            "Indigenous Reserve, RO",
            Coordinates::new(-8.7619, -63.9039),
            S::Resolved,
            I::Extreme,
            "Large forest fire threatening an indigenous village. Critical situation.",
            true,
        ),
        report(
            "REP-010",
            timestamp(2023, 1, 8, 12, 15),
            "Conservation Area, BA",
            Coordinates::new(-12.9714, -38.5014),
            S::Verified,
            I::High,
            "Fire in caatinga scrubland. Extremely dry vegetation helping it spread.",
            true,
        ),
        report(
            "REP-011",
            timestamp(2023, 1, 1, 0, 30),
            "Praia do Forte, BA",
            Coordinates::new(-12.5797, -38.0189),
            S::Resolved,
            I::Low,
            "Small fire caused by New Year fireworks. Contained quickly.",
            false,
        ),
        report(
            "REP-012",
            timestamp(2022, 12, 15, 14, 20),
            "Tijuca National Park, RJ",
            Coordinates::new(-22.9629, -43.2096),
            S::Resolved,
            I::Medium,
            "Fire on a hard to reach hillside. Helicopters were used to fight it.",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ids(reports: &[&UserReport]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_mock_reports_has_12_entries_with_unique_ids() {
        let reports = mock_reports();
        assert_eq!(reports.len(), 12);

        let ids: HashSet<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_mock_report_timestamps_are_valid() {
        let default = NaiveDateTime::default();
        for report in mock_reports() {
            assert_ne!(report.reported_at, default, "{} has no timestamp", report.id);
        }
    }

    #[test]
    fn test_empty_query_and_all_returns_everything_in_order() {
        let reports = mock_reports();
        let filtered = filter_reports(&reports, "", StatusFilter::All);

        assert_eq!(filtered.len(), 12);
        let expected: Vec<String> = reports.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn test_resolved_filter_returns_only_resolved() {
        let reports = mock_reports();
        let filtered = filter_reports(&reports, "", StatusFilter::Only(ReportStatus::Resolved));

        assert_eq!(filtered.len(), 6);
        assert!(filtered.iter().all(|r| r.status == ReportStatus::Resolved));
    }

    #[test]
    fn test_unmatched_query_returns_empty() {
        let reports = mock_reports();
        let filtered = filter_reports(&reports, "volcano eruption", StatusFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let reports = mock_reports();

        // Location
        assert_eq!(ids(&filter_reports(&reports, "serra do CIPÓ", StatusFilter::All)), vec!["REP-006"]);
        // Id
        assert_eq!(ids(&filter_reports(&reports, "rep-011", StatusFilter::All)), vec!["REP-011"]);
        // Description
        assert_eq!(ids(&filter_reports(&reports, "HELICOPTERS", StatusFilter::All)), vec!["REP-012"]);
    }

    #[test]
    fn test_query_and_status_combine() {
        let reports = mock_reports();
        let filtered = filter_reports(&reports, ", MT", StatusFilter::Only(ReportStatus::Verified));
        assert_eq!(ids(&filtered), vec!["REP-004"]);
    }

    #[test]
    fn test_status_counts() {
        let reports = mock_reports();
        let all = filter_reports(&reports, "", StatusFilter::All);
        let counts = status_counts(&all);

        assert_eq!(
            counts,
            StatusCounts {
                all: 12,
                pending: 2,
                verified: 4,
                resolved: 6,
            }
        );
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!(StatusFilter::from_str("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_str("Pending"),
            Some(StatusFilter::Only(ReportStatus::Pending))
        );
        assert_eq!(StatusFilter::from_str("archived"), None);
    }

    #[test]
    fn test_status_filter_cycles_and_wraps() {
        let mut filter = StatusFilter::All;
        for expected in StatusFilter::CYCLE.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), StatusFilter::All);
    }
}
