pub mod calculate;
pub mod dispatch;
pub mod summarize;

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::types::workout::Package;
use std::path::Path;

pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn load_packages(path: &Path) -> Result<Vec<Package>, AppError> {
    let bytes = std::fs::read(path)?;
    let packages: Vec<Package> = serde_json::from_slice(&bytes)?;
    tracing::info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Dispatches, summarizes and renders one package as a single output line.
pub fn process(package: &Package, output: OutputFormat) -> Result<String, AppError> {
    let workout = dispatch::read_package(&package.code, &package.data)?;
    let summary = summarize::build_summary(&workout)?;

    match output {
        OutputFormat::Text => Ok(summary.render()),
        OutputFormat::Json => Ok(serde_json::to_string(&summary)?),
    }
}

/// Processes every package in order. A failing package yields its error in
/// place and does not stop the ones after it.
pub fn process_all(
    packages: &[Package],
    output: OutputFormat,
) -> Vec<Result<String, AppError>> {
    packages
        .iter()
        .map(|package| {
            let result = process(package, output);
            if let Err(e) = &result {
                tracing::warn!("Skipping {} package: {}", package.code, e);
            }
            result
        })
        .collect()
}
