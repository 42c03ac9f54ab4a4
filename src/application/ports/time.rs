// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for default timestamps and date-window filters.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
