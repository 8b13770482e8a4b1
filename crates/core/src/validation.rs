//! Diary record validation.
//!
//! Checks a [`DiaryCandidate`] before anything reaches a record store and
//! produces the canonical [`NewDiaryDocument`] on success. Never touches a
//! store.

use crate::diary::{
    CandidateWeather, DiaryCandidate, NewDiaryDocument, Weather, FIELD_CREATED_BY, FIELD_DATE,
    FIELD_ID, FIELD_TITLE,
};

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are absent or blank. Lists every one.
    #[error("missing required field(s): {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },

    /// A weather block is present but incomplete or non-numeric.
    #[error("invalid weather: {0}")]
    InvalidWeather(String),
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a candidate and return it in canonical form.
///
/// Missing required fields are reported together and take precedence over a
/// weather problem. Empty `content`, `attendees` and `attachments` are valid
/// and come back as `None`.
pub fn validate(candidate: &DiaryCandidate) -> Result<NewDiaryDocument, ValidationError> {
    let required = [
        (FIELD_ID, candidate.id.as_deref()),
        (FIELD_DATE, candidate.date.as_deref()),
        (FIELD_TITLE, candidate.title.as_deref()),
        (FIELD_CREATED_BY, candidate.created_by.as_deref()),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingField { fields: missing });
    }

    let weather = candidate
        .weather
        .as_ref()
        .map(validate_weather)
        .transpose()?;

    Ok(NewDiaryDocument {
        id: required_value(&candidate.id),
        date: required_value(&candidate.date),
        title: required_value(&candidate.title),
        created_by: required_value(&candidate.created_by),
        content: non_empty_text(candidate.content.as_ref()),
        weather,
        attendees: non_empty_list(candidate.attendees.as_ref()),
        attachments: non_empty_list(candidate.attachments.as_ref()),
    })
}

/// Validate a submitted weather block: both parts present, temperature numeric.
pub fn validate_weather(weather: &CandidateWeather) -> Result<Weather, ValidationError> {
    let description = match weather.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ => {
            return Err(ValidationError::InvalidWeather(
                "description is required".to_string(),
            ))
        }
    };

    let temperature = match &weather.temperature {
        None | Some(serde_json::Value::Null) => {
            return Err(ValidationError::InvalidWeather(
                "temperature is required".to_string(),
            ))
        }
        Some(value) => value.as_f64().ok_or_else(|| {
            ValidationError::InvalidWeather(format!("temperature must be a number, got {value}"))
        })?,
    };

    Ok(Weather {
        description,
        temperature,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A required value is missing when absent or whitespace only.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Only called after the blank check has passed.
fn required_value(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// `None` for an absent or empty string, the string otherwise.
pub fn non_empty_text(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// `None` for an absent or empty list, the list otherwise.
pub fn non_empty_list(value: Option<&Vec<String>>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty()).cloned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
