use crate::model::language::Language;
use crate::services::{classify, slug};

pub const IMAGE_EXTENSION: &str = "jpg";

/// `{product-slug}-{keyword}-{country}-{lang}.jpg`
pub fn build_filename(name: &str, lang: Language, category: &str) -> String {
    format!(
        "{}-{}-{}-{}.{}",
        slug::slugify(name),
        classify::classify(name, category),
        lang.country(),
        lang.code(),
        IMAGE_EXTENSION
    )
}
