use crate::config::Config;
use crate::error::MappingError;
use crate::model::language::Language;
use crate::model::product::Product;
use crate::services::generator::{self, FilenameMapping};
use crate::services::report;
use crate::services::store::{self, WrittenArtifact};

#[derive(Debug)]
pub struct PipelineReport {
    pub total_products: usize,
    pub mapping: FilenameMapping,
    pub mapping_file: WrittenArtifact,
    pub summary_file: WrittenArtifact,
}

impl PipelineReport {
    pub fn example_filename(&self) -> Option<&str> {
        self.mapping.first().map(|(name, _)| name.as_str())
    }

    pub fn example_alt_text(&self) -> Option<&str> {
        self.mapping
            .first()
            .and_then(|(_, entry)| entry.alt_texts.get(&Language::English))
            .map(String::as_str)
    }
}

pub fn run(products: &[Product], cfg: &Config) -> Result<PipelineReport, MappingError> {
    eprintln!("[MAP] output directory: {}", cfg.out_dir.display());

    let mapping = generator::generate(products);

    let mapping_file = store::write_json(
        &cfg.mapping_path(),
        "mapping",
        &report::document(products.len(), &mapping),
    )?;

    let summary_file = store::write_json(
        &cfg.summary_path(),
        "summary",
        &report::summary(products.len(), &mapping),
    )?;

    Ok(PipelineReport {
        total_products: products.len(),
        mapping,
        mapping_file,
        summary_file,
    })
}
