//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Without a strategy flag, `clean` and `verify` ask for one.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vanillafy::{DiscoveryStrategy, VolumeId};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// vanillafy - return a modded game installation to its vanilla state
#[derive(Parser, Debug)]
#[command(name = "vanillafy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'vanillafy clean' without a strategy flag to pick one from a menu.")]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.config/vanillafy/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How to find the installation. At most one may be given.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct StrategyArgs {
    /// Scan every volume for the installation
    #[arg(long)]
    pub scan_all: bool,

    /// Scan a single volume (drive letter such as C, or a mount path)
    #[arg(long, value_name = "ID")]
    pub volume: Option<String>,

    /// Use this directory as the installation
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

impl StrategyArgs {
    /// The strategy chosen on the command line, if any.
    pub fn strategy(&self) -> Option<DiscoveryStrategy> {
        if self.scan_all {
            Some(DiscoveryStrategy::FullScan)
        } else if let Some(volume) = &self.volume {
            Some(DiscoveryStrategy::SingleVolume(VolumeId::parse(volume)))
        } else {
            self.path.clone().map(DiscoveryStrategy::DirectPath)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate the installation and remove everything not in the manifest
    Clean {
        #[command(flatten)]
        strategy: StrategyArgs,

        /// Answer yes to every prompt
        #[arg(short, long)]
        yes: bool,

        /// Show what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,

        /// Wait for Enter before exiting
        #[arg(long)]
        pause: bool,
    },

    /// Locate the installation and report missing and extra entries
    Verify {
        #[command(flatten)]
        strategy: StrategyArgs,
    },

    /// List protected folders and suggested install locations
    Zones,
}
