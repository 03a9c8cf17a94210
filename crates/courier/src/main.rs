// SPDX-FileCopyrightText: 2026 Courier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Courier - shipment booking and tracking service.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use courier_config::{ConfigError, CourierConfig};

/// Courier - shipment booking and tracking service.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server.
    Serve,
    /// Print the effective configuration as TOML.
    Config,
    /// Quote a shipment without starting the server.
    Quote {
        /// Package weight.
        #[arg(long, value_parser = parse_weight)]
        weight: f64,
        /// Package type (document, small, medium, large, fragile, ...).
        #[arg(long = "type", value_name = "TYPE")]
        package_type: String,
        /// Distance class (local, regional, national, international).
        #[arg(long, default_value = "local")]
        distance: String,
    },
}

fn parse_weight(raw: &str) -> Result<f64, String> {
    let weight: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err("weight must be a non-negative number".to_string());
    }
    Ok(weight)
}

fn load_config(path: Option<&PathBuf>) -> CourierConfig {
    let loaded: Result<CourierConfig, Vec<ConfigError>> = match path {
        Some(path) => courier_config::load_and_validate_path(path),
        None => courier_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            courier_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => {
            let config = load_config(cli.config.as_ref());
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            let config = load_config(cli.config.as_ref());
            match toml::to_string_pretty(&config) {
                Ok(rendered) => print!("{rendered}"),
                Err(e) => {
                    eprintln!("error: failed to render configuration: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Quote {
            weight,
            package_type,
            distance,
        }) => {
            let quote = courier_quote::calculate(weight, &package_type, &distance);
            println!("total:       {}", quote.total);
            println!("base cost:   {}", quote.breakdown.base_cost);
            println!("weight cost: {}", quote.breakdown.weight_cost);
        }
        None => {
            println!("courier: use --help for available commands");
        }
    }
}
