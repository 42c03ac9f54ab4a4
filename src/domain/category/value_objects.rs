// src/domain/category/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{validate_slug, validate_text};
use std::fmt;

pub const CATEGORY_NAME_MAX_LEN: usize = 100;
pub const CATEGORY_SLUG_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "category id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        validate_text("name", &value, Some(CATEGORY_NAME_MAX_LEN))?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlug(String);

impl CategorySlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        validate_slug(&value, CATEGORY_SLUG_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = CategoryName::new("  Rust  ").unwrap();
        assert_eq!(name.as_str(), "Rust");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            CategoryName::new(" \t"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn id_must_be_positive() {
        assert!(CategoryId::new(0).is_err());
        assert_eq!(i64::from(CategoryId::new(3).unwrap()), 3);
    }
}
