//! Site diary domain core.
//!
//! Holds the diary record types, the validation and normalization rules that
//! every entry point shares, the [`store::RecordStore`] seam, and the
//! [`service::DiaryRecordService`] that ties them together.

pub mod diary;
pub mod error;
pub mod normalize;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
