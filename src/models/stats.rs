//! Aggregate survey statistics.

use serde::{Deserialize, Serialize};

use super::deserialize_nullable_u32;

/// Server-computed snapshot returned by `/api/dashboard-stats/`.
///
/// The sub-counts are trusted as sent; nothing checks that they add up to
/// `total_researchers`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub total_researchers: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub completed_surveys: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub in_progress_surveys: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub pending_surveys: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub not_started_surveys: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub cp_researchers: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub gc_researchers: u32,
    /// Integer percentage
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub completion_rate: u32,
}

/// Names the individual counters of [`DashboardStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    TotalResearchers,
    CompletedSurveys,
    InProgressSurveys,
    PendingSurveys,
    NotStartedSurveys,
    CpResearchers,
    GcResearchers,
    CompletionRate,
}

impl DashboardStats {
    /// Raw counter value.
    pub fn value(&self, field: StatField) -> u32 {
        match field {
            StatField::TotalResearchers => self.total_researchers,
            StatField::CompletedSurveys => self.completed_surveys,
            StatField::InProgressSurveys => self.in_progress_surveys,
            StatField::PendingSurveys => self.pending_surveys,
            StatField::NotStartedSurveys => self.not_started_surveys,
            StatField::CpResearchers => self.cp_researchers,
            StatField::GcResearchers => self.gc_researchers,
            StatField::CompletionRate => self.completion_rate,
        }
    }

    /// Counter value, treating zero as "not reported".
    ///
    /// The API cannot distinguish an absent counter from a real zero, so a
    /// zero here always yields `None`.
    pub fn field(&self, field: StatField) -> Option<u32> {
        match self.value(field) {
            0 => None,
            v => Some(v),
        }
    }
}

/// Envelope for `GET /api/dashboard-stats/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
}
