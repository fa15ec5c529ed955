//! Mbedconf CLI
//!
//! Command-line driver for the configuration header generator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mbedconf_core::config::{DEFAULT_TARGET, DEFAULT_TOOLCHAIN};
use mbedconf_core::ToolchainConfig;
use mbedconf_report::acquire::{MbedCli, ReportAcquirer};
use mbedconf_report::{ensure_target_marker, extract_macros, render_header};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "mbedconf")]
#[command(author, version, about = "Configuration header generator for mbed projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a configuration header for a project
    Generate {
        /// Project folder to operate on
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Build target identifier
        #[arg(short = 'm', long, default_value = DEFAULT_TARGET)]
        target: String,

        /// Compiler toolchain identifier
        #[arg(short = 't', long, default_value = DEFAULT_TOOLCHAIN)]
        toolchain: String,

        /// Output format (header, json)
        #[arg(short, long, default_value = "header")]
        format: String,
    },

    /// Print the raw configuration report for a project
    Report {
        /// Project folder to operate on
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Build target identifier
        #[arg(short = 'm', long, default_value = DEFAULT_TARGET)]
        target: String,

        /// Compiler toolchain identifier
        #[arg(short = 't', long, default_value = DEFAULT_TOOLCHAIN)]
        toolchain: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            folder,
            target,
            toolchain,
            format,
        } => {
            cmd_generate(&folder, &target, &toolchain, &format)?;
        }
        Commands::Report {
            folder,
            target,
            toolchain,
        } => {
            cmd_report(&folder, &target, &toolchain)?;
        }
    }

    Ok(())
}

fn acquire_report(folder: &PathBuf, target: &str, toolchain: &str) -> Result<String> {
    let config = ToolchainConfig::new(target, toolchain);

    ensure_target_marker(folder, &config.target)?;

    let acquirer = ReportAcquirer::new(MbedCli, config);
    let report = acquirer.acquire(folder)?;
    debug!("Captured {} bytes of report text", report.len());

    Ok(report)
}

fn cmd_generate(folder: &PathBuf, target: &str, toolchain: &str, format: &str) -> Result<()> {
    let report = acquire_report(folder, target, toolchain)?;
    let macros = extract_macros(&report);
    debug!("Extracted {} macro records", macros.len());

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&macros)?;
            println!("{}", json);
        }
        _ => {
            print!("{}", render_header(&macros));
        }
    }

    Ok(())
}

fn cmd_report(folder: &PathBuf, target: &str, toolchain: &str) -> Result<()> {
    let report = acquire_report(folder, target, toolchain)?;
    print!("{}", report);

    Ok(())
}
