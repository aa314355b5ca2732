//! Interface to `/proc/bus/zorro`.
//!
//! - `devices`: one line per board, `slot id boardaddr boardsize boardtype` in hex
//! - `<slot>`: the board's `ConfigDev` record, `CONFIG_DEV_SIZE` bytes

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use zorro_shared::device::CONFIG_DEV_SIZE;
use zorro_shared::{BoardType, DeviceFilter, DeviceId, ScanError, ZorroId};

/// One board on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub board_addr: u32,
    pub board_size: u32,
    pub board_type: BoardType,
    /// Raw `ConfigDev` bytes, empty until `read_config`
    pub config: Vec<u8>,
}

impl Device {
    pub fn new(id: DeviceId) -> Self {
        Self {
            id,
            board_addr: 0,
            board_size: 0,
            board_type: BoardType::default(),
            config: Vec::new(),
        }
    }

    pub fn slot(&self) -> u8 {
        self.id.slot
    }
}

pub fn devices_path(bus_dir: &Path) -> PathBuf {
    bus_dir.join("devices")
}

pub fn config_path(bus_dir: &Path, slot: u8) -> PathBuf {
    bus_dir.join(format!("{:02x}", slot))
}

/// Read the device list and keep the boards accepted by `filter`.
pub fn scan_devices(bus_dir: &Path, filter: &DeviceFilter) -> Result<Vec<Device>, ScanError> {
    let path = devices_path(bus_dir);
    let text = fs::read_to_string(&path).map_err(|source| ScanError::DeviceList {
        path: path.clone(),
        source,
    })?;
    let devices = parse_device_list(&path, &text, filter)?;
    debug!(path = %path.display(), count = devices.len(), "scanned Zorro bus");
    Ok(devices)
}

/// Parse the text of a `devices` file.
///
/// Slot and ID are required; missing trailing fields read as zero.
pub fn parse_device_list(
    path: &Path,
    text: &str,
    filter: &DeviceFilter,
) -> Result<Vec<Device>, ScanError> {
    let mut devices = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || ScanError::MalformedDevice {
            path: path.to_path_buf(),
            line_num: line_idx + 1,
        };

        let fields = line
            .split_whitespace()
            .map(parse_hex_field)
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(malformed)?;
        if fields.len() < 2 {
            return Err(malformed());
        }
        let slot = u8::try_from(fields[0]).map_err(|_| malformed())?;
        let field = |i: usize| fields.get(i).copied().unwrap_or(0);

        let id = DeviceId::new(slot, ZorroId(fields[1]));
        if !filter.matches_device(&id) {
            trace!(slot, manufacturer = id.manufacturer, "filtered out");
            continue;
        }

        devices.push(Device {
            id,
            board_addr: field(2),
            board_size: field(3),
            board_type: BoardType(field(4) as u8),
            config: Vec::new(),
        });
    }

    Ok(devices)
}

fn parse_hex_field(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}

/// Fill `dev.config` from `<bus_dir>/<slot>`. Fewer than `CONFIG_DEV_SIZE` bytes is an error.
pub fn read_config(bus_dir: &Path, dev: &mut Device) -> Result<(), ScanError> {
    let path = config_path(bus_dir, dev.slot());
    let file = File::open(&path).map_err(|source| ScanError::ConfigOpen {
        path: path.clone(),
        source,
    })?;

    let mut config = Vec::with_capacity(CONFIG_DEV_SIZE);
    file.take(CONFIG_DEV_SIZE as u64)
        .read_to_end(&mut config)
        .map_err(|source| ScanError::ConfigRead {
            path: path.clone(),
            source,
        })?;
    if config.len() != CONFIG_DEV_SIZE {
        return Err(ScanError::ShortConfig { got: config.len() });
    }

    dev.config = config;
    Ok(())
}

pub fn read_configs(bus_dir: &Path, devices: &mut [Device]) -> Result<(), ScanError> {
    devices.iter_mut().try_for_each(|dev| read_config(bus_dir, dev))
}

/// Order by slot number. Stable, so equal slots keep their bus order.
pub fn sort_devices(devices: &mut [Device]) {
    devices.sort_by_key(Device::slot);
}
