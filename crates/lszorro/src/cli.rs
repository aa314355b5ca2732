//! CLI - Command-line argument parsing
//!
//! Single-letter switches, one per option, as the tool has always had.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// List all Zorro devices
#[derive(Parser, Debug, Default)]
#[command(name = "lszorro")]
#[command(about = "List all Zorro devices", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Be verbose (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Show numeric IDs
    #[arg(short = 'n')]
    pub numeric: bool,

    /// Show hex-dump of config space
    #[arg(short = 'x', action = ArgAction::Count)]
    pub hex: u8,

    /// Show only device in selected slot
    #[arg(short = 's', value_name = "SLOT", allow_hyphen_values = true)]
    pub slot: Option<String>,

    /// Show only selected devices
    #[arg(
        short = 'd',
        value_name = "[MANUF]:[PROD]:[EPC]",
        allow_hyphen_values = true
    )]
    pub device: Option<String>,

    /// Produce machine-readable output
    #[arg(short = 'm')]
    pub machine: bool,

    /// Use specified ID database instead of /etc/zorro.ids
    #[arg(short = 'i', value_name = "FILE")]
    pub ids_file: Option<PathBuf>,

    /// Use specified bus directory instead of /proc/bus/zorro
    #[arg(short = 'p', value_name = "DIR")]
    pub bus_dir: Option<PathBuf>,

    /// Print version and exit
    #[arg(long)]
    pub version: bool,
}
