//! Per-frame view of the store.

use crate::metrics::{
    average_progress, department_breakdown, geographic_breakdown, DerivedStats, GroupStat,
    LocationStat,
};
use crate::models::Researcher;
use crate::state::DashboardState;

use super::Theme;

/// Complete render context for one frame
///
/// Borrows the roster from the store and precomputes the derived numbers
/// every page needs, so a frame computes them once.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub state: &'a DashboardState,
    /// Top-line numbers after the aggregate policy
    pub derived: DerivedStats,
    /// Dashboard table rows
    pub filtered: Vec<&'a Researcher>,
    pub departments: Vec<GroupStat>,
    pub locations: Vec<LocationStat>,
    pub average_progress: u32,
    pub theme: Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self {
            state,
            derived: state.derived(),
            filtered: state.filtered(),
            departments: department_breakdown(&state.researchers),
            locations: geographic_breakdown(&state.researchers),
            average_progress: average_progress(&state.researchers),
            theme: Theme::for_mode(state.dark_mode),
        }
    }

    /// The full roster.
    pub fn roster(&self) -> &'a [Researcher] {
        &self.state.researchers
    }
}
