//! resume-cli - Command-line tool for the resume parsing service
//!
//! Uploads a resume (PDF or DOCX) to a parse service and prints the
//! extracted JSON.

mod commands;
mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resume_client::ParserClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, DEFAULT_SERVER};
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "resume-cli")]
#[command(author, version, about = "Resume parsing service CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Parse service base URL
    #[arg(short, long, env = "RESUME_PARSER_URL", default_value = DEFAULT_SERVER)]
    server: String,

    /// Configuration file path
    #[arg(short, long, env = "RESUME_CLI_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a resume (PDF or DOCX) and print the parsed JSON
    Upload {
        /// Resume file path
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(Some(&cli.server), Some(cli.output.into()), cli.no_color);

    // Create output context
    let mut ctx = OutputContext::new(cli.output, merged.no_color, cli.quiet);

    // Execute command
    let code = match &cli.command {
        Commands::Upload { file } => {
            let client = create_client(&merged.server)?;
            commands::upload(&client, file.as_deref(), &mut ctx).await
        }
    };

    Ok(code)
}

/// Create a parse service client for the given base URL
fn create_client(server: &str) -> Result<ParserClient> {
    ParserClient::new(server).context("Failed to create parse service client")
}

// Implement conversion for OutputFormat to string (for config merge)
impl From<OutputFormat> for &str {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Compact => "compact",
        }
    }
}
