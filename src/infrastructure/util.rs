// src/infrastructure/util.rs
use crate::domain::services::SlugGenerator;
use slug::slugify;

/// Transliterating slugifier: "Привет, мир!" becomes "privet-mir".
#[derive(Debug, Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
