/// Store-assigned primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Sub-categories are referenced by UUID, carried as a string on the wire.
pub type SubCategoryId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
