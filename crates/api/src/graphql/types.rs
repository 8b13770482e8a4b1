//! GraphQL object and input types.
//!
//! Objects are built only from service projections; nothing here reshapes
//! store documents.

use async_graphql::{InputObject, Json, SimpleObject};
use sitediary_core::diary::{CandidateWeather, DiaryCandidate, DiaryRecord, Weather};

/// A site diary entry, full projection.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "SiteDiary")]
pub struct SiteDiaryObject {
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
    pub content: Option<String>,
    pub weather: Option<WeatherObject>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Weather")]
pub struct WeatherObject {
    pub description: String,
    pub temperature: f64,
}

impl From<Weather> for WeatherObject {
    fn from(w: Weather) -> Self {
        Self {
            description: w.description,
            temperature: w.temperature,
        }
    }
}

impl From<DiaryRecord> for SiteDiaryObject {
    fn from(r: DiaryRecord) -> Self {
        Self {
            id: r.id,
            date: r.date,
            title: r.title,
            created_by: r.created_by,
            content: r.content,
            weather: r.weather.map(WeatherObject::from),
            attendees: r.attendees,
            attachments: r.attachments,
        }
    }
}

/// Input for `createSiteDiary`.
///
/// Every field is nullable at the schema level so that missing required
/// fields are reported by the validator, with the same structure REST uses.
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "SiteDiaryInput")]
pub struct SiteDiaryInput {
    pub id: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub created_by: Option<String>,
    pub content: Option<String>,
    pub weather: Option<WeatherInput>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
}

/// Weather as submitted. `temperature` is untyped JSON so a non-numeric
/// reading reaches the validator and comes back as `VALIDATION_ERROR`.
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "WeatherInput")]
pub struct WeatherInput {
    pub description: Option<String>,
    pub temperature: Option<Json<serde_json::Value>>,
}

impl From<SiteDiaryInput> for DiaryCandidate {
    fn from(input: SiteDiaryInput) -> Self {
        Self {
            id: input.id,
            date: input.date,
            title: input.title,
            created_by: input.created_by,
            content: input.content,
            weather: input.weather.map(|w| CandidateWeather {
                description: w.description,
                temperature: w.temperature.map(|t| t.0),
            }),
            attendees: input.attendees,
            attachments: input.attachments,
        }
    }
}
