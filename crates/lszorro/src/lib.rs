//! lszorro library - exposes the listing pipeline for testing
//!
//! Pipeline: parse filters, scan the bus, read config space, sort by slot,
//! print through the name database.

pub mod cli;
pub mod errors;
pub mod logging;
pub mod output;
pub mod scan;

use anyhow::{anyhow, Result};
use cli::Cli;
use output::DisplayOptions;
use std::io::Write;
use std::path::PathBuf;
use zorro_shared::{DeviceFilter, NameDatabase, ZorroConfig, ZORROUTILS_VERSION};

/// Effective settings after merging the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub ids_path: PathBuf,
    pub bus_dir: PathBuf,
    pub numeric: bool,
    pub filter: DeviceFilter,
    pub display: DisplayOptions,
}

impl Options {
    /// Command-line values win over the config file. Filter errors name the switch.
    pub fn resolve(cli: &Cli, config: ZorroConfig) -> Result<Self> {
        let mut filter = DeviceFilter::new();
        if let Some(slot) = &cli.slot {
            filter.parse_slot(slot).map_err(|e| anyhow!("-s: {}", e))?;
        }
        if let Some(id) = &cli.device {
            filter.parse_id(id).map_err(|e| anyhow!("-d: {}", e))?;
        }

        Ok(Self {
            ids_path: cli.ids_file.clone().unwrap_or(config.ids_path),
            bus_dir: cli.bus_dir.clone().unwrap_or(config.bus_dir),
            numeric: cli.numeric || config.numeric,
            filter,
            display: DisplayOptions {
                verbose: cli.verbose,
                hex: cli.hex,
                machine: cli.machine,
            },
        })
    }
}

/// Run lszorro with parsed arguments, writing the listing to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.version {
        writeln!(out, "lszorro version {}", ZORROUTILS_VERSION)?;
        return Ok(());
    }

    let opts = Options::resolve(cli, ZorroConfig::load()?)?;
    list(&opts, out)
}

/// Scan, sort and print according to `opts`.
pub fn list<W: Write>(opts: &Options, out: &mut W) -> Result<()> {
    let mut names = NameDatabase::new(&opts.ids_path);
    if opts.numeric {
        names.force_numeric();
    }

    let mut devices = scan::scan_devices(&opts.bus_dir, &opts.filter)?;
    scan::read_configs(&opts.bus_dir, &mut devices)?;
    scan::sort_devices(&mut devices);

    output::show(out, &devices, &names, &opts.display)?;
    out.flush()?;
    Ok(())
}
