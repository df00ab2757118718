//! Wire models for the dashboard API.
//!
//! These mirror the JSON payloads served by `/api/researchers/` and
//! `/api/dashboard-stats/`. Enumerated fields are validated on decode, so a
//! payload with an unknown `mode` or `status` fails to parse instead of
//! silently producing a half-filled record.

mod researcher;
mod stats;

pub use researcher::{Mode, Researcher, ResearchersResponse, SurveyStatus};
pub use stats::{DashboardStats, StatField, StatsResponse};

use serde::{Deserialize, Deserializer};

/// Researcher ids arrive as JSON numbers from some backends and strings
/// from others; both become a `String`.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

/// `null` or a missing field reads as the empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Nullable integer counterpart of [`deserialize_nullable_string`].
pub(crate) fn deserialize_nullable_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct IdHolder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[derive(Debug, Deserialize)]
    struct Nullable {
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        text: String,
        #[serde(default, deserialize_with = "deserialize_nullable_u32")]
        count: u32,
    }

    #[test]
    fn test_deserialize_id_accepts_string_and_integer() {
        let from_str: IdHolder = serde_json::from_str(r#"{"id": "17"}"#).unwrap();
        let from_int: IdHolder = serde_json::from_str(r#"{"id": 17}"#).unwrap();
        assert_eq!(from_str.id, "17");
        assert_eq!(from_int.id, "17");
    }

    #[test]
    fn test_nullable_fields_default() {
        let parsed: Nullable = serde_json::from_str(r#"{"text": null, "count": null}"#).unwrap();
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.count, 0);

        let missing: Nullable = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.text, "");
        assert_eq!(missing.count, 0);
    }
}
