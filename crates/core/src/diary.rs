//! Site diary record shapes.
//!
//! A diary entry moves through four shapes:
//!
//! - [`DiaryCandidate`]: whatever a caller submitted, every field optional.
//! - [`NewDiaryDocument`]: a candidate that passed validation, in canonical
//!   form (empty optionals dropped), ready to hand to a record store.
//! - [`DiaryDocument`]: a persisted document as a store returns it. Absence of
//!   an optional field may be encoded as `None` or as an empty value.
//! - [`DiaryRecord`] / [`SummaryRecord`]: the full and summary projections
//!   returned to every entry point.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::Timestamp;

/// Entity name used in error messages and logs.
pub const DIARY_ENTITY: &str = "SiteDiary";

// ---------------------------------------------------------------------------
// Wire field names
// ---------------------------------------------------------------------------

pub const FIELD_ID: &str = "id";
pub const FIELD_DATE: &str = "date";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_CREATED_BY: &str = "createdBy";

/// Fields every diary record must carry, in reporting order.
pub const REQUIRED_FIELDS: &[&str] = &[FIELD_ID, FIELD_DATE, FIELD_TITLE, FIELD_CREATED_BY];

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Weather reading attached to a diary entry. Both parts are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub description: String,
    pub temperature: f64,
}

/// Weather as submitted by a caller, before validation.
///
/// `temperature` stays an untyped JSON value so that a non-numeric reading
/// is reported as an invalid weather block instead of a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateWeather {
    pub description: Option<String>,
    pub temperature: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Input shapes
// ---------------------------------------------------------------------------

/// A diary entry as submitted for creation.
///
/// Required fields accept any JSON value; anything but a string reads as
/// `None`, so the validator reports it among the missing fields instead of
/// the body failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryCandidate {
    #[serde(default, deserialize_with = "text_or_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub created_by: Option<String>,
    pub content: Option<String>,
    pub weather: Option<CandidateWeather>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// A validated diary entry in canonical form.
///
/// Optional fields are `None` whenever they carry nothing, so a store never
/// persists an empty string or empty list for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiaryDocument {
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub attendees: Option<Vec<String>>,
    #[serde(default)]
    pub attachments: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Persisted shape
// ---------------------------------------------------------------------------

/// A diary document as held by a record store.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryDocument {
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
    pub content: Option<String>,
    pub weather: Option<Weather>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiaryDocument {
    /// Materialize a freshly inserted document with both timestamps set to `now`.
    pub fn stamped(fields: NewDiaryDocument, now: Timestamp) -> Self {
        Self {
            id: fields.id,
            date: fields.date,
            title: fields.title,
            created_by: fields.created_by,
            content: fields.content,
            weather: fields.weather,
            attendees: fields.attendees,
            attachments: fields.attachments,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Full projection of a diary record.
///
/// Absent optional fields serialize as `null`; the key is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRecord {
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
    pub content: Option<String>,
    pub weather: Option<Weather>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
}

/// Summary projection used by list views: exactly `id`, `date`, `title`, `createdBy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_reads_camel_case_keys() {
        let candidate: DiaryCandidate = serde_json::from_value(serde_json::json!({
            "id": "diary-1",
            "createdBy": "Sam",
            "weather": { "description": "Sunny", "temperature": 21 }
        }))
        .unwrap();

        assert_eq!(candidate.id.as_deref(), Some("diary-1"));
        assert_eq!(candidate.created_by.as_deref(), Some("Sam"));
        assert!(candidate.date.is_none());
        let weather = candidate.weather.unwrap();
        assert_eq!(weather.temperature.and_then(|t| t.as_f64()), Some(21.0));
    }

    #[test]
    fn non_string_required_values_read_as_absent() {
        let candidate: DiaryCandidate = serde_json::from_value(serde_json::json!({
            "id": 7,
            "date": "2024-03-01",
            "title": 42,
            "createdBy": ["Sam"]
        }))
        .unwrap();

        assert!(candidate.id.is_none());
        assert_eq!(candidate.date.as_deref(), Some("2024-03-01"));
        assert!(candidate.title.is_none());
        assert!(candidate.created_by.is_none());
    }

    #[test]
    fn full_record_keeps_null_keys() {
        let record = DiaryRecord {
            id: "diary-1".into(),
            date: "2024-03-01".into(),
            title: "Pour".into(),
            created_by: "Sam".into(),
            content: None,
            weather: None,
            attendees: None,
            attachments: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert!(obj["attendees"].is_null());
        assert_eq!(obj["createdBy"], "Sam");
    }

    #[test]
    fn summary_record_has_four_keys() {
        let summary = SummaryRecord {
            id: "diary-1".into(),
            date: "2024-03-01".into(),
            title: "Pour".into(),
            created_by: "Sam".into(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["createdBy", "date", "id", "title"]);
    }
}
