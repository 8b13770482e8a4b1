/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All database surrogate keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;
