mod catalog;
mod config;
mod error;
mod model;
mod ordered_map;
mod services;

#[cfg(test)]
mod tests;

use config::Config;
use services::pipeline;

fn main() {
    let cfg = Config::from_env();

    let report = match pipeline::run(catalog::PRODUCTS, &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[MAP] {e}");
            std::process::exit(1);
        }
    };

    println!("[OK] Generated mapping for {} products", report.total_products);
    println!("[OK] Total filenames: {}", report.mapping.len());
    println!("[OK] Output files:");
    println!("   - {} (complete mapping)", file_name(&report.mapping_file.path));
    println!("   - {} (summary)", file_name(&report.summary_file.path));
    println!();
    println!(
        "[INFO] Example filename: {}",
        report.example_filename().unwrap_or("N/A")
    );
    println!(
        "[INFO] Example Alt text (en): {}",
        report.example_alt_text().unwrap_or("N/A")
    );
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
