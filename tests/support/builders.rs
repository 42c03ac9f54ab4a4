// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use inkwell_blog::domain::article::Article;

use super::mocks::{InMemoryBlog, fixed_now};

/// `fixed_now()` shifted back by whole days.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - Duration::days(days)
}

/// Seeds "Article 1" .. "Article n" with strictly decreasing publication
/// dates, so "Article 1" is the newest. Returned in that order.
pub fn seed_numbered_articles(store: &InMemoryBlog, n: usize) -> Vec<Article> {
    (1..=n)
        .map(|i| {
            store.seed_article(
                &format!("Article {i}"),
                &format!("article-{i}"),
                fixed_now() - Duration::hours(i as i64),
                None,
            )
        })
        .collect()
}
