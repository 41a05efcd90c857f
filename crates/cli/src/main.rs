use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

mod cmd;
mod output;

/// kiosk - Install and inspect bundled web resources
#[derive(Parser)]
#[command(name = "kiosk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the manifest for a resource tree
    Manifest {
        /// Directory containing the bundled resources
        resource_dir: PathBuf,

        /// Logical prefix the resources are mounted at
        #[arg(long, default_value = "/ui")]
        mount: String,

        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show what a sync against an install directory would change
    Plan {
        /// Directory containing the bundled resources
        resource_dir: PathBuf,

        /// Install directory to compare against
        #[arg(long)]
        install_dir: PathBuf,

        /// Logical prefix the resources are mounted at
        #[arg(long, default_value = "/ui")]
        mount: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Synchronize an install directory with a resource tree
    Sync {
        /// Directory containing the bundled resources
        resource_dir: PathBuf,

        /// Install directory to synchronize
        #[arg(long)]
        install_dir: PathBuf,

        /// Logical prefix the resources are mounted at
        #[arg(long, default_value = "/ui")]
        mount: String,
    },

    /// Inspect an install directory
    Info {
        /// Install directory to inspect
        #[arg(long)]
        install_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    match cli.command {
        Commands::Manifest {
            resource_dir,
            mount,
            output,
        } => cmd::cmd_manifest(&resource_dir, &mount, output.as_deref()),
        Commands::Plan {
            resource_dir,
            install_dir,
            mount,
            format,
        } => cmd::cmd_plan(&resource_dir, &install_dir, &mount, format),
        Commands::Sync {
            resource_dir,
            install_dir,
            mount,
        } => cmd::cmd_sync(&resource_dir, &install_dir, &mount),
        Commands::Info { install_dir } => cmd::cmd_info(&install_dir),
    }
}
