use serde::Serialize;

use crate::model::language::Language;
use crate::model::product::{Category, Product};
use crate::ordered_map::OrderedMap;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub product_name_en: String,

    pub product_name_zh: String,

    pub category: Category,

    pub target_language: Language,

    /// Country slug of `target_language`, not an ISO code.
    pub country_code: String,

    pub alt_texts: OrderedMap<Language, String>,
}

impl MappingEntry {
    /// Entry with metadata only; alt texts are filled in by the generator.
    pub fn new(product: &Product, target_language: Language) -> Self {
        Self {
            product_name_en: product.name_en.to_string(),
            product_name_zh: product.name_zh.to_string(),
            category: product.category,
            target_language,
            country_code: target_language.country().to_string(),
            alt_texts: OrderedMap::new(),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: Language,
    pub country: &'static str,
    pub country_name: &'static str,
}

impl From<Language> for LanguageDescriptor {
    fn from(lang: Language) -> Self {
        Self {
            code: lang,
            country: lang.country(),
            country_name: lang.country_name(),
        }
    }
}
