//! Search and filter predicate for the researcher table.

use crate::models::{Mode, Researcher, SurveyStatus};

/// Mode dropdown: all, or one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFilter {
    #[default]
    All,
    Only(Mode),
}

impl ModeFilter {
    /// All -> CP -> GC -> All
    pub fn next(self) -> Self {
        match self {
            ModeFilter::All => ModeFilter::Only(Mode::Cp),
            ModeFilter::Only(Mode::Cp) => ModeFilter::Only(Mode::Gc),
            ModeFilter::Only(Mode::Gc) => ModeFilter::All,
        }
    }

    pub fn accepts(&self, mode: Mode) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Only(m) => *m == mode,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModeFilter::All => "All Modes",
            ModeFilter::Only(Mode::Cp) => "CP Only",
            ModeFilter::Only(Mode::Gc) => "GC Only",
        }
    }
}

/// Status dropdown: all, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SurveyStatus),
}

impl StatusFilter {
    /// All -> completed -> in-progress -> pending -> not-started -> All
    pub fn next(self) -> Self {
        let order = SurveyStatus::ALL;
        match self {
            StatusFilter::All => StatusFilter::Only(order[0]),
            StatusFilter::Only(current) => order
                .iter()
                .position(|s| *s == current)
                .and_then(|i| order.get(i + 1))
                .map_or(StatusFilter::All, |s| StatusFilter::Only(*s)),
        }
    }

    pub fn accepts(&self, status: SurveyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(SurveyStatus::Completed) => "Completed",
            StatusFilter::Only(SurveyStatus::InProgress) => "In Progress",
            StatusFilter::Only(SurveyStatus::Pending) => "Pending",
            StatusFilter::Only(SurveyStatus::NotStarted) => "Not Started",
        }
    }
}

/// Search text plus the two dropdown filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResearcherFilter {
    pub search: String,
    pub mode: ModeFilter,
    pub status: StatusFilter,
}

impl ResearcherFilter {
    pub fn new(search: impl Into<String>, mode: ModeFilter, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            mode,
            status,
        }
    }

    /// True when no filter narrows the roster.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.mode == ModeFilter::All && self.status == StatusFilter::All
    }

    /// Whether `r` passes search, mode and status.
    ///
    /// Text fields are compared case-insensitively. The mobile number is
    /// compared against the raw search term, so punctuation such as `+1-555`
    /// matches as typed.
    pub fn matches(&self, r: &Researcher) -> bool {
        self.matches_search(r) && self.mode.accepts(r.mode) && self.status.accepts(r.status)
    }

    fn matches_search(&self, r: &Researcher) -> bool {
        let needle = self.search.to_lowercase();
        [&r.name, &r.unit, &r.specialty, &r.zsm, &r.bdm, &r.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
            || r.mobile.contains(self.search.as_str())
    }

    /// Filtered view, preserving roster order.
    pub fn apply<'a>(&self, roster: &'a [Researcher]) -> Vec<&'a Researcher> {
        roster.iter().filter(|r| self.matches(r)).collect()
    }
}
