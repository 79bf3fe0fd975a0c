//! Scalar aliases shared by every crate in the workspace.

/// Primary key of every table (`BIGSERIAL`).
pub type DbId = i64;

/// Karma carried by one ledger row (`INTEGER`). Sums are widened to `i64`.
pub type Points = i32;

/// Stored as `TIMESTAMPTZ`, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
