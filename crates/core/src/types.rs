/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar date a show was watched (no time component).
pub type WatchDate = chrono::NaiveDate;
