// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::{PiskyClient, DEFAULT_PHOTOGRAPH_LIMIT};
use crate::config::{ClientConfig, ENV_API_URL, ENV_TIMEOUT_SECS};

/// Pi in the Sky API client
#[derive(Parser, Debug)]
#[command(name = "pisky-cli")]
#[command(version)]
#[command(about = "Browse photographs and trigger captures on a Pi in the Sky server", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the API server (e.g. http://raspberrypi.local:8000)
    #[arg(long, global = true, env = ENV_API_URL)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recent photographs
    List {
        /// Maximum number of photographs to show
        #[arg(long, default_value_t = DEFAULT_PHOTOGRAPH_LIMIT, allow_hyphen_values = true)]
        limit: i64,
    },

    /// Show one photograph and its detections
    Show {
        /// Photograph ID
        id: i64,
    },

    /// Show detection totals
    Stats,

    /// Take a photograph now, keeping it even without detections
    Shoot,

    /// Download a photograph or tile image
    Download {
        /// image_url / tile_url from the API, or a bare file name
        target: String,

        /// Destination file (defaults to the image's file name)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Info,
}

/// Resolve configuration for a CLI invocation
pub fn resolve_config(args: &ConnectionArgs) -> Result<ClientConfig> {
    let config = ClientConfig::load()
        .context("failed to load configuration")?
        .with_overrides(args.api_url.clone(), args.timeout_secs, None)
        .validated()?;
    Ok(config)
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli.connection)?;
    let client = PiskyClient::from_config(&config)?;

    match cli.command {
        Commands::Info => {
            print!("{}", render::config_info(&config));
        }
        Commands::List { limit } => {
            let photographs = client.get_photographs(limit).await?;
            print!("{}", render::photograph_table(&photographs));
        }
        Commands::Show { id } => {
            let photograph = client.get_photograph(id).await?;
            print!("{}", render::photograph_detail(&photograph, &client)?);
        }
        Commands::Stats => {
            let stats = client.get_stats().await?;
            print!("{}", render::stats(&stats));
        }
        Commands::Shoot => {
            println!("📷 Triggering capture...");
            let response = client.trigger_shoot().await?;
            print!("{}", render::shoot_result(&response));
        }
        Commands::Download { target, output } => {
            let output = match output {
                Some(path) => path,
                None => default_output_path(&target)?,
            };
            let bytes = client.fetch_image(&target).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!("Saved {} bytes to {}", bytes.len(), output.display());
            println!("✅ Saved {}", output.display());
        }
    }

    Ok(())
}

/// One-line report of an error and every cause beneath it
pub fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Last path segment of an image URL, query stripped
pub fn default_output_path(target: &str) -> Result<PathBuf> {
    let without_query = target.split(['?', '#']).next().unwrap_or_default();
    let name = without_query
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| anyhow!("cannot derive a file name from '{}'; use --output", target))?;
    Ok(Path::new(name).to_path_buf())
}
