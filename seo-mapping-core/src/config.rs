use std::path::PathBuf;

pub const OUT_DIR_ENV: &str = "SEO_MAPPING_OUT_DIR";

pub const MAPPING_FILE: &str = "product_image_mapping.json";
pub const SUMMARY_FILE: &str = "product_image_mapping_summary.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub out_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(OUT_DIR_ENV).ok())
    }

    /// Blank or missing override means the current directory.
    pub fn resolve(override_dir: Option<String>) -> Self {
        if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
            return Self {
                out_dir: PathBuf::from(dir.trim()),
            };
        }
        Self {
            out_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.out_dir.join(MAPPING_FILE)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.out_dir.join(SUMMARY_FILE)
    }
}
