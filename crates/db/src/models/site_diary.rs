//! Site diary model.

use sitediary_core::diary::{DiaryDocument, Weather};
use sitediary_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `site_diaries` table.
#[derive(Debug, Clone, FromRow)]
pub struct SiteDiaryRow {
    pub pk: DbId,
    pub id: String,
    pub date: String,
    pub title: String,
    pub created_by: String,
    pub content: Option<String>,
    pub weather_description: Option<String>,
    pub weather_temperature: Option<f64>,
    pub attendees: Option<Vec<String>>,
    pub attachments: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SiteDiaryRow> for DiaryDocument {
    fn from(row: SiteDiaryRow) -> Self {
        // The table constraint keeps both weather columns set or both NULL.
        let weather = match (row.weather_description, row.weather_temperature) {
            (Some(description), Some(temperature)) => Some(Weather {
                description,
                temperature,
            }),
            _ => None,
        };

        DiaryDocument {
            id: row.id,
            date: row.date,
            title: row.title,
            created_by: row.created_by,
            content: row.content,
            weather,
            attendees: row.attendees,
            attachments: row.attachments,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
