//! Device listing formats.
//!
//! - terse: `SS: <vendor> <device>`
//! - verbose: terse line plus board type, address and size
//! - machine-readable: quoted vendor/device fields, or tagged lines with `-v`
//! - hex dump: raw `ConfigDev` bytes, appended to any of the above

use crate::scan::Device;
use anyhow::Result;
use std::io::Write;
use zorro_shared::NameDatabase;

/// Which formats to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub verbose: u8,
    pub hex: u8,
    pub machine: bool,
}

/// Print every device in `devices`, in order.
pub fn show<W: Write>(
    out: &mut W,
    devices: &[Device],
    names: &NameDatabase,
    opts: &DisplayOptions,
) -> Result<()> {
    for dev in devices {
        if opts.machine {
            show_machine(out, dev, names, opts.verbose > 0)?;
        } else if opts.verbose > 0 {
            show_verbose(out, dev, names)?;
        } else {
            show_terse(out, dev, names)?;
        }
        if opts.hex > 0 {
            show_hex_dump(out, &dev.config)?;
        }
        if opts.verbose > 0 || opts.hex > 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn show_terse<W: Write>(out: &mut W, dev: &Device, names: &NameDatabase) -> Result<()> {
    let id = &dev.id;
    writeln!(
        out,
        "{:02x}: {}",
        id.slot,
        names.resolve_full(id.manufacturer, id.product, id.extended_product)?
    )?;
    Ok(())
}

pub fn show_verbose<W: Write>(out: &mut W, dev: &Device, names: &NameDatabase) -> Result<()> {
    show_terse(out, dev, names)?;
    writeln!(
        out,
        "\tType: {}, address {:08x}, size {:08x}",
        dev.board_type.kind(),
        dev.board_addr,
        dev.board_size
    )?;
    if dev.board_type.is_memory() {
        writeln!(out, "\tFlags: memory list")?;
    }
    Ok(())
}

pub fn show_machine<W: Write>(
    out: &mut W,
    dev: &Device,
    names: &NameDatabase,
    verbose: bool,
) -> Result<()> {
    let id = &dev.id;
    let vendor = names.resolve_vendor(id.manufacturer)?;
    let device = names.resolve_device(id.manufacturer, id.product, id.extended_product)?;

    if verbose {
        writeln!(out, "Slot:\t{:02x}", id.slot)?;
        writeln!(out, "Vendor:\t{}", vendor)?;
        writeln!(out, "Device:\t{}", device)?;
    } else {
        writeln!(out, "{:02x}: \"{}\" \"{}\"", id.slot, vendor, device)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Sixteen bytes per line, each line prefixed with its offset.
pub fn show_hex_dump<W: Write>(out: &mut W, config: &[u8]) -> Result<()> {
    for (row, chunk) in config.chunks(16).enumerate() {
        write!(out, "{:02x}:", row * 16)?;
        for byte in chunk {
            write!(out, " {:02x}", byte)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
