use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{extract_features, predict, serve, simulate};

#[derive(Parser)]
#[command(name = "windwatch")]
#[command(about = "Wind turbine predictive maintenance dashboard and tooling")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server and serve the dashboard
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides `bind_address` from windwatch.toml.
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Generate synthetic telemetry for three turbines
    ///
    /// Turbine 1 develops gearbox overheating, turbine 2 excessive vibration,
    /// turbine 3 stays healthy. One JSON file is written per turbine.
    Simulate {
        /// Directory the per-turbine files are written to
        #[arg(short, long, default_value = "data/raw")]
        output_dir: PathBuf,

        /// Hours of one-minute readings per turbine
        #[arg(long, default_value_t = 24 * 7)]
        hours: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Turn raw turbine files into sliding-window features
    Features {
        /// Raw turbine file, or a directory of `turbine_*.json` files
        #[arg(short, long, default_value = "data/raw")]
        input: PathBuf,

        /// Output JSON file with every feature window
        #[arg(short, long, default_value = "data/processed/features.json")]
        output: PathBuf,

        /// Readings per window
        #[arg(long, default_value_t = 10)]
        window_size: usize,

        /// Readings between window starts
        #[arg(long, default_value_t = 5)]
        step: usize,
    },
    /// Send one feature vector to the prediction endpoint
    Predict {
        /// JSON object of feature name to value; catalog defaults when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Prediction endpoint URL
        #[arg(short, long, env = "WINDWATCH_PREDICTION_ENDPOINT")]
        endpoint: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(bind_address).await?;
            }
            Commands::Simulate { output_dir, hours, seed } => {
                simulate(&output_dir, hours, seed)?;
            }
            Commands::Features { input, output, window_size, step } => {
                extract_features(&input, &output, window_size, step)?;
            }
            Commands::Predict { input, endpoint } => {
                predict(input.as_deref(), endpoint).await?;
            }
        }
        Ok(())
    }
}
