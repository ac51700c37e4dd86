use crate::model::entry::MappingEntry;
use crate::model::language::Language;
use crate::model::product::Product;
use crate::ordered_map::OrderedMap;
use crate::services::{alt_text, filename};

pub type FilenameMapping = OrderedMap<String, MappingEntry>;

/// One pass over products x languages.
///
/// Metadata belongs to whichever (product, language) pair produced a
/// filename first. Alt texts are rewritten on every visit, so when two
/// products share a filename the alt texts carry the later product's names.
pub fn generate(products: &[Product]) -> FilenameMapping {
    let mut mapping = FilenameMapping::new();

    for product in products {
        let category = product.category.label();

        for lang in Language::ALL {
            let name = filename::build_filename(product.name_en, lang, category);
            let entry = mapping.get_or_insert_with(name, || MappingEntry::new(product, lang));

            for alt_lang in Language::ALL {
                let text = alt_text::build_alt_text(product.name_en, product.name_zh, alt_lang.code());
                entry.alt_texts.insert(alt_lang, text);
            }
        }
    }

    mapping
}
