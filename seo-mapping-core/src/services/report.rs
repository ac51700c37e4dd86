use serde::Serialize;

use crate::model::entry::{LanguageDescriptor, MappingEntry};
use crate::model::language::Language;
use crate::ordered_map::OrderedMap;
use crate::services::generator::FilenameMapping;

pub const FILENAME_FORMAT: &str = "[product-name]-[core-keyword]-[country-name]-[lang-code].jpg";
pub const FILENAME_EXAMPLE: &str = "carousel-ride-manufacturer-thailand-th.jpg";
/// Pinned so that reruns produce identical bytes.
pub const GENERATED_AT: &str = "2025-01-28";
pub const DESCRIPTION: &str =
    "Multilingual image filename and Alt text mapping for SEO optimization";
pub const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub total_products: usize,
    pub total_languages: usize,
    pub total_filenames: usize,
    pub filename_format: &'static str,
    pub example: &'static str,
    pub generated_at: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MappingDocument<'a> {
    pub metadata: Metadata,
    pub languages: OrderedMap<Language, LanguageDescriptor>,
    pub mapping: &'a FilenameMapping,
}

#[derive(Debug, Serialize)]
pub struct MappingSummary<'a> {
    pub total_products: usize,
    pub total_filenames: usize,
    pub sample_filenames: Vec<&'a str>,
    pub sample_entry: Option<&'a MappingEntry>,
}

pub fn document(total_products: usize, mapping: &FilenameMapping) -> MappingDocument<'_> {
    let mut languages = OrderedMap::new();
    for lang in Language::ALL {
        languages.insert(lang, LanguageDescriptor::from(lang));
    }

    MappingDocument {
        metadata: Metadata {
            total_products,
            total_languages: Language::ALL.len(),
            total_filenames: mapping.len(),
            filename_format: FILENAME_FORMAT,
            example: FILENAME_EXAMPLE,
            generated_at: GENERATED_AT,
            description: DESCRIPTION,
        },
        languages,
        mapping,
    }
}

pub fn summary(total_products: usize, mapping: &FilenameMapping) -> MappingSummary<'_> {
    MappingSummary {
        total_products,
        total_filenames: mapping.len(),
        sample_filenames: mapping.keys().take(SAMPLE_SIZE).map(String::as_str).collect(),
        sample_entry: mapping.first().map(|(_, entry)| entry),
    }
}
