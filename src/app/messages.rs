//! AppMessage enum for async communication within the application.

use crate::gateway::GatewayError;
use crate::models::{DashboardStats, Researcher};
use crate::state::{Event, ExportSummary, Seq};

/// Results sent back by background tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A researchers request finished
    ResearchersFetched {
        seq: Seq,
        result: Result<Vec<Researcher>, GatewayError>,
    },
    /// A stats request finished
    StatsFetched {
        seq: Seq,
        result: Result<DashboardStats, GatewayError>,
    },
    /// CSV export finished or failed
    ExportFinished(Result<ExportSummary, String>),
}

impl From<AppMessage> for Event {
    fn from(msg: AppMessage) -> Self {
        match msg {
            AppMessage::ResearchersFetched { seq, result } => {
                Event::ResearchersLoaded { seq, result }
            }
            AppMessage::StatsFetched { seq, result } => Event::StatsLoaded { seq, result },
            AppMessage::ExportFinished(result) => Event::ExportFinished(result),
        }
    }
}
