//! Mapping from persisted diary documents to response shapes.
//!
//! Both functions are pure and total over documents that satisfy the diary
//! invariants. Whatever encoding a store uses for "not set" (missing,
//! `NULL`, empty string, empty list), callers only ever see `None`.

use crate::diary::{DiaryDocument, DiaryRecord, SummaryRecord};
use crate::validation::{non_empty_list, non_empty_text};

/// Full projection of a persisted document.
pub fn to_wire(doc: &DiaryDocument) -> DiaryRecord {
    DiaryRecord {
        id: doc.id.clone(),
        date: doc.date.clone(),
        title: doc.title.clone(),
        created_by: doc.created_by.clone(),
        content: non_empty_text(doc.content.as_ref()),
        weather: doc.weather.clone(),
        attendees: non_empty_list(doc.attendees.as_ref()),
        attachments: non_empty_list(doc.attachments.as_ref()),
    }
}

/// Summary projection: the four identifying fields, nothing else.
pub fn to_summary(doc: &DiaryDocument) -> SummaryRecord {
    SummaryRecord {
        id: doc.id.clone(),
        date: doc.date.clone(),
        title: doc.title.clone(),
        created_by: doc.created_by.clone(),
    }
}
