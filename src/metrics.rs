//! Derived metrics over the roster and the stats snapshot.
//!
//! Everything here is a pure function of store contents and is recomputed
//! on every render; the roster is small enough that no caching is needed.

use crate::models::{DashboardStats, Mode, Researcher, StatField, SurveyStatus};

/// Placeholder group for researchers with neither unit nor specialty.
pub const DEFAULT_DEPARTMENT: &str = "General";
/// Placeholder group for researchers without a location.
pub const DEFAULT_LOCATION: &str = "Unknown";
/// Breakdowns keep only the largest groups.
pub const BREAKDOWN_LIMIT: usize = 5;

/// `value / total` as a rounded percentage, 0 when `total` is 0.
pub fn percent(value: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(value) / f64::from(total) * 100.0).round() as u32
}

/// Unrounded bar width in percent, 0.0 when `total` is 0.
pub fn percent_width(value: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(value) / f64::from(total) * 100.0
}

/// How top-line numbers combine the server snapshot with the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregatePolicy {
    /// Use each server counter when it is non-zero, else recount locally.
    ///
    /// A genuine server zero is indistinguishable from "not reported" and is
    /// replaced by the recount.
    #[default]
    PreferServer,
    /// Ignore the snapshot and always recount from the roster.
    AlwaysRecompute,
}

/// Top-line numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedStats {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub in_progress: u32,
    pub not_started: u32,
    pub cp: u32,
    pub gc: u32,
    pub completion_rate: u32,
}

impl DerivedStats {
    pub fn compute(
        stats: Option<&DashboardStats>,
        roster: &[Researcher],
        policy: AggregatePolicy,
    ) -> Self {
        let server = |field: StatField| match policy {
            AggregatePolicy::PreferServer => stats.and_then(|s| s.field(field)),
            AggregatePolicy::AlwaysRecompute => None,
        };
        let count_status = |status: SurveyStatus| count(roster, |r| r.status == status);
        let count_mode = |mode: Mode| count(roster, |r| r.mode == mode);

        let total = server(StatField::TotalResearchers).unwrap_or(roster.len() as u32);
        let completed = server(StatField::CompletedSurveys)
            .unwrap_or_else(|| count_status(SurveyStatus::Completed));

        Self {
            total,
            completed,
            pending: server(StatField::PendingSurveys)
                .unwrap_or_else(|| count_status(SurveyStatus::Pending)),
            in_progress: server(StatField::InProgressSurveys)
                .unwrap_or_else(|| count_status(SurveyStatus::InProgress)),
            not_started: server(StatField::NotStartedSurveys)
                .unwrap_or_else(|| count_status(SurveyStatus::NotStarted)),
            cp: server(StatField::CpResearchers).unwrap_or_else(|| count_mode(Mode::Cp)),
            gc: server(StatField::GcResearchers).unwrap_or_else(|| count_mode(Mode::Gc)),
            completion_rate: server(StatField::CompletionRate)
                .unwrap_or_else(|| percent(completed, total)),
        }
    }

    /// Pending plus in-progress: the "needs attention" card.
    pub fn open_surveys(&self) -> u32 {
        self.pending + self.in_progress
    }
}

fn count(roster: &[Researcher], pred: impl Fn(&Researcher) -> bool) -> u32 {
    roster.iter().filter(|&r| pred(r)).count() as u32
}

/// Completion numbers for one department group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStat {
    pub name: String,
    pub total: u32,
    pub completed: u32,
    /// completed / total, rounded
    pub percentage: u32,
}

/// Head-count for one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationStat {
    pub location: String,
    pub count: u32,
    /// Share of the whole roster, rounded
    pub percentage: u32,
}

/// Groups keep first-seen order so that the stable sort breaks ties by
/// appearance in the roster.
fn group_by<'a>(
    roster: &'a [Researcher],
    key: impl Fn(&'a Researcher) -> &'a str,
) -> Vec<(&'a str, Vec<&'a Researcher>)> {
    let mut groups: Vec<(&str, Vec<&Researcher>)> = Vec::new();
    for r in roster {
        let k = key(r);
        match groups.iter_mut().find(|(name, _)| *name == k) {
            Some((_, members)) => members.push(r),
            None => groups.push((k, vec![r])),
        }
    }
    groups
}

fn department_of(r: &Researcher) -> &str {
    if !r.unit.is_empty() {
        &r.unit
    } else if !r.specialty.is_empty() {
        &r.specialty
    } else {
        DEFAULT_DEPARTMENT
    }
}

/// Top departments by head-count with their completion percentage.
pub fn department_breakdown(roster: &[Researcher]) -> Vec<GroupStat> {
    let mut stats: Vec<GroupStat> = group_by(roster, department_of)
        .into_iter()
        .map(|(name, members)| {
            let total = members.len() as u32;
            let completed = members
                .iter()
                .filter(|r| r.status == SurveyStatus::Completed)
                .count() as u32;
            GroupStat {
                name: name.to_string(),
                total,
                completed,
                percentage: percent(completed, total),
            }
        })
        .collect();
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats.truncate(BREAKDOWN_LIMIT);
    stats
}

/// Top locations by head-count.
pub fn geographic_breakdown(roster: &[Researcher]) -> Vec<LocationStat> {
    let roster_size = roster.len() as u32;
    let mut stats: Vec<LocationStat> = group_by(roster, |r| {
        if r.location.is_empty() {
            DEFAULT_LOCATION
        } else {
            r.location.as_str()
        }
    })
    .into_iter()
    .map(|(location, members)| {
        let count = members.len() as u32;
        LocationStat {
            location: location.to_string(),
            count,
            percentage: percent(count, roster_size),
        }
    })
    .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(BREAKDOWN_LIMIT);
    stats
}

/// Mean survey progress, rounded; 0 for an empty roster.
pub fn average_progress(roster: &[Researcher]) -> u32 {
    if roster.is_empty() {
        return 0;
    }
    let sum: u32 = roster.iter().map(|r| u32::from(r.survey_progress)).sum();
    (f64::from(sum) / roster.len() as f64).round() as u32
}

/// First few completed researchers, in roster order.
pub fn completed_timeline(roster: &[Researcher]) -> Vec<&Researcher> {
    roster
        .iter()
        .filter(|r| r.status == SurveyStatus::Completed)
        .take(BREAKDOWN_LIMIT)
        .collect()
}

/// Avatar initials: first character of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Coarse progress bucket used to color progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Complete,
    High,
    Started,
    None,
}

pub fn progress_band(progress: u8) -> ProgressBand {
    match progress {
        100.. => ProgressBand::Complete,
        50..=99 => ProgressBand::High,
        1..=49 => ProgressBand::Started,
        0 => ProgressBand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn researcher(unit: &str, location: &str, mode: Mode, status: SurveyStatus, progress: u8) -> Researcher {
        Researcher {
            id: format!("{}-{}", unit, progress),
            name: "Dr. Test Person".to_string(),
            mobile: String::new(),
            email: String::new(),
            unit: unit.to_string(),
            specialty: String::new(),
            department: String::new(),
            zsm: String::new(),
            bdm: String::new(),
            mode,
            status,
            completion_date: None,
            location: location.to_string(),
            experience: 0,
            rating: 0.0,
            last_activity: String::new(),
            survey_progress: progress,
            join_date: String::new(),
            designation: String::new(),
            emp1_mobile: String::new(),
            emp2_mobile: String::new(),
        }
    }

    #[test]
    fn test_percent_guards_zero_total() {
        for x in [0, 1, 7, 1000] {
            assert_eq!(percent(x, 0), 0);
        }
        assert_eq!(percent(0, 9), 0);
        assert_eq!(percent(9, 9), 100);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
    }

    #[test]
    fn test_percent_width() {
        assert_eq!(percent_width(5, 0), 0.0);
        assert!((percent_width(1, 3) - 33.333).abs() < 0.01);
        assert_eq!(percent_width(4, 4), 100.0);
    }

    #[test]
    fn test_all_zero_stats_fall_back_to_roster() {
        let roster = vec![
            researcher("A", "X", Mode::Cp, SurveyStatus::Completed, 100),
            researcher("B", "Y", Mode::Gc, SurveyStatus::Pending, 10),
        ];
        let stats = DashboardStats::default();
        let derived = DerivedStats::compute(Some(&stats), &roster, AggregatePolicy::PreferServer);
        assert_eq!(derived.total, 2);
        assert_eq!(derived.completed, 1);
        assert_eq!(derived.pending, 1);
        assert_eq!(derived.cp, 1);
        assert_eq!(derived.gc, 1);
        assert_eq!(derived.completion_rate, 50);
        assert_eq!(derived.open_surveys(), 1);
    }

    #[test]
    fn test_server_values_win_when_non_zero() {
        let roster = vec![researcher("A", "X", Mode::Cp, SurveyStatus::Completed, 100)];
        let stats = DashboardStats {
            total_researchers: 40,
            completed_surveys: 10,
            completion_rate: 25,
            ..Default::default()
        };
        let derived = DerivedStats::compute(Some(&stats), &roster, AggregatePolicy::PreferServer);
        assert_eq!(derived.total, 40);
        assert_eq!(derived.completed, 10);
        assert_eq!(derived.completion_rate, 25);
        // zero server counters are recounted
        assert_eq!(derived.cp, 1);
        assert_eq!(derived.gc, 0);
    }

    #[test]
    fn test_always_recompute_ignores_server() {
        let roster = vec![researcher("A", "X", Mode::Gc, SurveyStatus::Pending, 5)];
        let stats = DashboardStats {
            total_researchers: 40,
            gc_researchers: 30,
            ..Default::default()
        };
        let derived =
            DerivedStats::compute(Some(&stats), &roster, AggregatePolicy::AlwaysRecompute);
        assert_eq!(derived.total, 1);
        assert_eq!(derived.gc, 1);
        assert_eq!(derived.completion_rate, 0);
    }

    #[test]
    fn test_no_stats_and_empty_roster() {
        let derived = DerivedStats::compute(None, &[], AggregatePolicy::PreferServer);
        assert_eq!(derived, DerivedStats::default());
    }

    #[test]
    fn test_department_breakdown_example() {
        let roster = vec![
            researcher("A", "", Mode::Cp, SurveyStatus::Completed, 100),
            researcher("A", "", Mode::Cp, SurveyStatus::Pending, 0),
            researcher("B", "", Mode::Cp, SurveyStatus::Completed, 100),
        ];
        let groups = department_breakdown(&roster);
        assert_eq!(
            groups,
            vec![
                GroupStat { name: "A".into(), total: 2, completed: 1, percentage: 50 },
                GroupStat { name: "B".into(), total: 1, completed: 1, percentage: 100 },
            ]
        );
    }

    #[test]
    fn test_department_falls_back_to_specialty_then_placeholder() {
        let mut by_specialty = researcher("", "", Mode::Cp, SurveyStatus::Pending, 0);
        by_specialty.specialty = "Oncology".to_string();
        let nothing = researcher("", "", Mode::Cp, SurveyStatus::Pending, 0);
        let groups = department_breakdown(&[by_specialty, nothing]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Oncology", DEFAULT_DEPARTMENT]);
    }

    #[test]
    fn test_breakdowns_keep_top_five_with_stable_ties() {
        let roster: Vec<Researcher> = ["u1", "u2", "u3", "u4", "u5", "u6", "u6"]
            .iter()
            .map(|u| researcher(u, u, Mode::Cp, SurveyStatus::Pending, 0))
            .collect();
        let groups = department_breakdown(&roster);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["u6", "u1", "u2", "u3", "u4"]);

        let locations = geographic_breakdown(&roster);
        assert_eq!(locations.len(), BREAKDOWN_LIMIT);
        assert_eq!(locations[0].location, "u6");
        assert_eq!(locations[0].count, 2);
        assert_eq!(locations[0].percentage, 29);
    }

    #[test]
    fn test_geographic_breakdown_unknown_placeholder() {
        let roster = vec![
            researcher("A", "", Mode::Cp, SurveyStatus::Pending, 0),
            researcher("A", "Boston, MA", Mode::Cp, SurveyStatus::Pending, 0),
            researcher("A", "", Mode::Cp, SurveyStatus::Pending, 0),
        ];
        let locations = geographic_breakdown(&roster);
        assert_eq!(locations[0].location, DEFAULT_LOCATION);
        assert_eq!(locations[0].count, 2);
        assert_eq!(locations[0].percentage, 67);
        assert_eq!(locations[1].percentage, 33);
    }

    #[test]
    fn test_average_progress() {
        assert_eq!(average_progress(&[]), 0);
        let roster = vec![
            researcher("A", "", Mode::Cp, SurveyStatus::Completed, 100),
            researcher("A", "", Mode::Cp, SurveyStatus::Pending, 25),
            researcher("A", "", Mode::Cp, SurveyStatus::InProgress, 0),
        ];
        // 125 / 3 = 41.67
        assert_eq!(average_progress(&roster), 42);
    }

    #[test]
    fn test_completed_timeline_limit() {
        let roster: Vec<Researcher> = (0..8)
            .map(|i| researcher("A", "", Mode::Cp, SurveyStatus::Completed, i))
            .collect();
        assert_eq!(completed_timeline(&roster).len(), BREAKDOWN_LIMIT);
    }

    #[test]
    fn test_initials_and_progress_band() {
        assert_eq!(initials("Dr. Sarah Johnson"), "DSJ");
        assert_eq!(initials("  "), "");
        assert_eq!(progress_band(100), ProgressBand::Complete);
        assert_eq!(progress_band(50), ProgressBand::High);
        assert_eq!(progress_band(1), ProgressBand::Started);
        assert_eq!(progress_band(0), ProgressBand::None);
    }
}
