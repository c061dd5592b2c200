use anyhow::{bail, Context, Result};
use common::{FeatureWindow, SensorReading};
use compute::{turbine_id_from_source, WindowConfig, WindowExtractor};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Extract feature windows from raw turbine files into one JSON file.
///
/// `input` is either a single raw file or a directory whose
/// `turbine_*.json` files are processed in name order.
pub fn extract_features(input: &Path, output: &Path, window_size: usize, step: usize) -> Result<Vec<FeatureWindow>> {
    trace!("Entering extract_features function");
    let extractor = WindowExtractor::new(WindowConfig { window_size, step })?;

    let sources = raw_files(input)?;
    if sources.is_empty() {
        bail!("No turbine_*.json files found in {}", input.display());
    }
    info!("Extracting features from {} raw files", sources.len());

    let mut all_windows = Vec::new();
    for source in &sources {
        let raw = std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let readings: Vec<SensorReading> = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a list of sensor readings", source.display()))?;

        let source_name = source.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let turbine_id = turbine_id_from_source(&source_name);
        debug!("Processing {} ({} readings) as {}", source.display(), readings.len(), turbine_id);

        let windows = extractor.extract(&turbine_id, &readings)?;
        if windows.is_empty() {
            warn!("{} yielded no windows", source.display());
        }
        all_windows.extend(windows);
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(output, serde_json::to_string_pretty(&all_windows)?)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let anomalous = all_windows.iter().filter(|w| w.label == 1).count();
    info!(
        "Wrote {} windows ({} anomalous) to {}",
        all_windows.len(),
        anomalous,
        output.display()
    );
    Ok(all_windows)
}

fn raw_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input)
        .with_context(|| format!("Failed to list {}", input.display()))?
    {
        let path = entry?.path();
        let is_raw = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("turbine_") && n.ends_with(".json"));
        if is_raw {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
