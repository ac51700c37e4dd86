#[cfg(test)]
mod integration_tests {
    use std::fs;

    use serde_json::Value;

    use crate::catalog::PRODUCTS;
    use crate::config::{Config, MAPPING_FILE, SUMMARY_FILE};
    use crate::model::language::Language;
    use crate::services::pipeline;

    fn run_into_tempdir() -> (tempfile::TempDir, pipeline::PipelineReport) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::resolve(Some(dir.path().to_string_lossy().into_owned()));
        let report = pipeline::run(PRODUCTS, &cfg).unwrap();
        (dir, report)
    }

    fn read_json(dir: &tempfile::TempDir, name: &str) -> (String, Value) {
        let raw = fs::read_to_string(dir.path().join(name)).unwrap();
        let value = serde_json::from_str(&raw).unwrap();
        (raw, value)
    }

    #[test]
    fn writes_both_artifacts() {
        let (dir, report) = run_into_tempdir();

        assert_eq!(report.mapping_file.path, dir.path().join(MAPPING_FILE));
        assert_eq!(report.summary_file.path, dir.path().join(SUMMARY_FILE));
        assert_eq!(
            report.example_filename(),
            Some("nuclear-energy-crisis-amusement-ride-manufacturer-usa-en.jpg")
        );
        assert_eq!(
            report.example_alt_text(),
            Some("Nuclear energy crisis - Premium Amusement Ride Equipment by Miying Manufacturer")
        );

        let (_, doc) = read_json(&dir, MAPPING_FILE);
        let top: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(top.len(), 3);
        assert_eq!(doc["metadata"]["total_products"], 69);
        assert_eq!(doc["metadata"]["total_languages"], 11);
        assert_eq!(doc["metadata"]["total_filenames"], 737);
        assert_eq!(doc["metadata"]["generated_at"], "2025-01-28");
        assert_eq!(doc["mapping"].as_object().unwrap().len(), 737);

        let th = &doc["languages"]["th"];
        assert_eq!(th["code"], "th");
        assert_eq!(th["country"], "thailand");
        assert_eq!(th["country_name"], "ไทย");
    }

    #[test]
    fn mapping_entry_shape() {
        let (dir, _) = run_into_tempdir();
        let (_, doc) = read_json(&dir, MAPPING_FILE);

        let entry = &doc["mapping"]["nuclear-energy-crisis-amusement-ride-manufacturer-thailand-th.jpg"];
        assert_eq!(entry["product_name_en"], "Nuclear energy crisis");
        assert_eq!(entry["product_name_zh"], "核能危机");
        assert_eq!(entry["category"], "Family Ride");
        assert_eq!(entry["target_language"], "th");
        assert_eq!(entry["country_code"], "thailand");

        let alt = entry["alt_texts"].as_object().unwrap();
        assert_eq!(alt.len(), 11);
        for lang in Language::ALL {
            assert!(alt.contains_key(lang.code()), "missing {lang}");
        }
        assert_eq!(
            alt["en"],
            "Nuclear energy crisis - Premium Amusement Ride Equipment by Miying Manufacturer"
        );
    }

    #[test]
    fn output_is_pretty_and_unescaped() {
        let (dir, _) = run_into_tempdir();
        let (raw, _) = read_json(&dir, SUMMARY_FILE);

        assert!(raw.starts_with("{\n  \"total_products\": 69,\n  \"total_filenames\": 737,\n"));
        assert!(raw.contains("\"product_name_zh\": \"核能危机\""));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn summary_matches_mapping_order() {
        let (dir, _) = run_into_tempdir();
        let (raw, summary) = read_json(&dir, SUMMARY_FILE);
        let (mapping_raw, _) = read_json(&dir, MAPPING_FILE);

        let samples = summary["sample_filenames"].as_array().unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[4], "nuclear-energy-crisis-amusement-ride-manufacturer-japan-ja.jpg");

        // serde_json::Value does not keep key order, so check positions in the raw text
        let positions: Vec<usize> = samples
            .iter()
            .map(|s| mapping_raw.find(&format!("\"{}\"", s.as_str().unwrap())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(summary["sample_entry"]["target_language"], "en");
        assert!(raw.contains("\"country_code\": \"usa\""));
    }

    #[test]
    fn reruns_are_byte_identical() {
        let (_a, first) = run_into_tempdir();
        let (_b, second) = run_into_tempdir();

        assert_eq!(first.mapping_file.sha256, second.mapping_file.sha256);
        assert_eq!(first.summary_file.sha256, second.summary_file.sha256);
        assert_eq!(first.mapping_file.bytes, second.mapping_file.bytes);
    }

    #[test]
    fn empty_catalog_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::resolve(Some(dir.path().to_string_lossy().into_owned()));
        let report = pipeline::run(&[], &cfg).unwrap();

        assert_eq!(report.example_filename(), None);
        let (_, summary) = read_json(&dir, SUMMARY_FILE);
        assert_eq!(summary["total_filenames"], 0);
        assert!(summary["sample_entry"].is_null());
    }
}
