// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl inkwell_blog::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Lowercases and joins words with `-`; enough for ASCII titles in tests.
#[derive(Clone)]
pub struct DummySlug;

impl inkwell_blog::domain::services::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}
