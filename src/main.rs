//! # offer-sync CLI (`offersync`)
//!
//! The `offersync` binary keeps a local, deduplicated list of compute
//! instance size identifiers derived from a cloud service's published price
//! catalog.
//!
//! ## Usage
//!
//! ```bash
//! offersync --config ./config/offersync.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `offersync refresh` | Refresh the artifact if it is older than the freshness window |
//! | `offersync refresh --force` | Refresh unconditionally |
//! | `offersync show` | Print the persisted set in columns, no network |
//! | `offersync status` | Artifact age and freshness summary |

mod artifact;
mod config;
mod display;
mod error;
mod extract;
mod fetcher;
mod freshness;
mod models;
mod normalize;
mod refresh;
mod resolver;
mod show;
mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// offer-sync: remote price catalog refresh with cached instance size
/// extraction.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file falls back to built-in defaults, so the tool runs
/// without any setup.
#[derive(Parser)]
#[command(
    name = "offersync",
    about = "Remote price catalog refresh with cached instance size extraction",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/offersync.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Refresh the size-type artifact from the remote catalog.
    ///
    /// Resolves the configured service through the offer index, downloads
    /// the current catalog, extracts and normalizes the instance size
    /// identifiers, and replaces the artifact. Skipped entirely while the
    /// artifact is younger than the freshness window.
    Refresh {
        /// Refresh even if the artifact is still fresh.
        #[arg(long)]
        force: bool,
    },

    /// Print the persisted size-type set in a fixed-column layout.
    ///
    /// Reads only the local artifact; never touches the network.
    Show,

    /// Show artifact age, entry count, and freshness state.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Refresh { force } => {
            refresh::run_refresh(&cfg, force).await?;
        }
        Commands::Show => {
            show::run_show(&cfg)?;
        }
        Commands::Status => {
            status::run_status(&cfg)?;
        }
    }

    Ok(())
}
