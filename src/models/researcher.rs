//! Researcher roster entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{deserialize_id, deserialize_nullable_string, deserialize_nullable_u32};

/// Researcher mode. Exactly one of two categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mode {
    #[serde(rename = "CP")]
    Cp,
    #[serde(rename = "GC")]
    Gc,
}

impl Mode {
    /// Wire label ("CP" / "GC").
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cp => "CP",
            Mode::Gc => "GC",
        }
    }

    /// Long label used in the mode distribution card.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Cp => "CP (Clinical Practice)",
            Mode::Gc => "GC (General Care)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Survey status of a researcher. The four states are mutually exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SurveyStatus {
    Completed,
    Pending,
    InProgress,
    NotStarted,
}

impl SurveyStatus {
    /// All statuses in filter-cycle order.
    pub const ALL: [SurveyStatus; 4] = [
        SurveyStatus::Completed,
        SurveyStatus::InProgress,
        SurveyStatus::Pending,
        SurveyStatus::NotStarted,
    ];

    /// Wire label ("completed", "in-progress", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyStatus::Completed => "completed",
            SurveyStatus::Pending => "pending",
            SurveyStatus::InProgress => "in-progress",
            SurveyStatus::NotStarted => "not-started",
        }
    }

    /// Human label with the dash replaced by a space ("in progress").
    pub fn label(&self) -> &'static str {
        match self {
            SurveyStatus::Completed => "completed",
            SurveyStatus::Pending => "pending",
            SurveyStatus::InProgress => "in progress",
            SurveyStatus::NotStarted => "not started",
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One roster entry as returned by `/api/researchers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Researcher {
    /// Unique within a fetch (the server sends a stringified integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub mobile: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub unit: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub specialty: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub department: String,
    /// Zonal sales manager
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub zsm: String,
    /// Business development manager
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub bdm: String,
    pub mode: Mode,
    pub status: SurveyStatus,
    /// Only present when `status` is completed
    #[serde(default)]
    pub completion_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub location: String,
    /// Years of experience
    #[serde(default, deserialize_with = "deserialize_nullable_u32")]
    pub experience: u32,
    /// 0.0..=5.0, display only
    #[serde(default)]
    pub rating: f32,
    /// Relative time string ("2 hours ago"), opaque
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub last_activity: String,
    /// 0..=100. Not cross-checked against `status`.
    #[serde(default)]
    pub survey_progress: u8,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub join_date: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub designation: String,
    #[serde(
        default,
        rename = "emp1_mobile",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub emp1_mobile: String,
    #[serde(
        default,
        rename = "emp2_mobile",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub emp2_mobile: String,
}

/// Envelope for `GET /api/researchers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchersResponse {
    pub success: bool,
    #[serde(default)]
    pub researchers: Vec<Researcher>,
    /// Server-side count, informational only
    #[serde(default)]
    pub total: Option<u32>,
}
