use anyhow::{Context, Result};
use chrono::{Local, SubsecRound};
use compute::TurbineSimulator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Simulate the three-turbine scenario and write one file per turbine.
///
/// Readings end at the current local time. Returns the written paths.
pub fn simulate(output_dir: &Path, hours: usize, seed: Option<u64>) -> Result<Vec<PathBuf>> {
    trace!("Entering simulate function");
    info!("Simulating {} hours of telemetry into {}", hours, output_dir.display());

    match seed {
        Some(seed) => {
            debug!("Using seed {}", seed);
            simulate_with(&mut StdRng::seed_from_u64(seed), output_dir, hours)
        }
        None => simulate_with(&mut rand::rng(), output_dir, hours),
    }
}

fn simulate_with<R: Rng>(rng: &mut R, output_dir: &Path, hours: usize) -> Result<Vec<PathBuf>> {
    let end = Local::now().naive_local().trunc_subsecs(0);
    let fleet = TurbineSimulator::new(end).simulate_fleet(rng, hours)?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = Vec::with_capacity(fleet.len());
    for turbine in &fleet {
        let path = output_dir.join(turbine.file_name());
        let json = serde_json::to_string_pretty(&turbine.readings)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {} readings to {}", turbine.readings.len(), path.display());
        written.push(path);
    }

    info!("Telemetry simulation completed");
    Ok(written)
}
