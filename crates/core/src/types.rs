/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monetary amounts are stored as NUMERIC and handled as exact decimals.
pub type Money = rust_decimal::Decimal;
