/// SQLite `INTEGER PRIMARY KEY` row ids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates carry no time zone (`YYYY-MM-DD`).
pub type Date = chrono::NaiveDate;
