// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Validate a URL slug: non-empty, bounded, and limited to ASCII letters,
/// digits, hyphens and underscores.
pub(crate) fn validate_slug(value: &str, max_len: usize) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation("slug cannot be empty".into()));
    }
    if value.len() > max_len {
        return Err(DomainError::Validation(format!(
            "slug must be at most {max_len} characters"
        )));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(DomainError::Validation(
            "slug may only contain letters, numbers, underscores or hyphens".into(),
        ));
    }
    Ok(())
}

/// Validate a required free-text field: non-blank and at most `max_len`
/// characters when a bound is given.
pub(crate) fn validate_text(
    field: &str,
    value: &str,
    max_len: Option<usize>,
) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if let Some(max_len) = max_len {
        let len = value.chars().count();
        if len > max_len {
            return Err(DomainError::Validation(format!(
                "{field} must be at most {max_len} characters (it has {len})"
            )));
        }
    }
    Ok(())
}
