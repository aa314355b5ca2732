//! End-to-end listing against a fake `/proc/bus/zorro`.
//!
//! Tests verify:
//! - Devices are filtered, sorted by slot and named through the ID database
//! - Missing database falls back to numeric IDs
//! - Short or missing config space is fatal

use lszorro::output::DisplayOptions;
use lszorro::{list, Options};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zorro_shared::DeviceFilter;

const IDS: &str = "\
0201  Commodore Braunschweig
\t5400  A4091 SCSI Host Adapter
07e1  Great Valley Products
\t0b30  G-Force 040 with SCSI Host Adapter
2140  Phase 5
";

const DEVICES: &str = "\
02\t07e10b30\t00e90000\t00010000\tc1
00\t21402200\t40000000\t01000000\t80
01\t02015400\t00ea0000\t00010000\tc1
";

struct FakeBus {
    dir: TempDir,
}

impl FakeBus {
    fn new(devices: &str, config_len: usize) -> Self {
        let dir = TempDir::new().unwrap();
        let bus = dir.path().join("bus");
        fs::create_dir(&bus).unwrap();
        fs::write(bus.join("devices"), devices).unwrap();
        for slot in 0u8..3 {
            let config: Vec<u8> = (0..config_len).map(|i| (i as u8) ^ slot).collect();
            fs::write(bus.join(format!("{:02x}", slot)), config).unwrap();
        }
        fs::write(dir.path().join("zorro.ids"), IDS).unwrap();
        Self { dir }
    }

    fn bus_dir(&self) -> PathBuf {
        self.dir.path().join("bus")
    }

    fn ids_path(&self) -> PathBuf {
        self.dir.path().join("zorro.ids")
    }

    fn options(&self) -> Options {
        Options {
            ids_path: self.ids_path(),
            bus_dir: self.bus_dir(),
            numeric: false,
            filter: DeviceFilter::new(),
            display: DisplayOptions::default(),
        }
    }
}

fn run_list(opts: &Options) -> anyhow::Result<String> {
    let mut out = Vec::new();
    list(opts, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_terse_listing_sorted_and_named() {
    let bus = FakeBus::new(DEVICES, 68);
    let output = run_list(&bus.options()).unwrap();
    assert_eq!(
        output,
        "00: Phase 5: Unknown device 22:00\n\
         01: Commodore Braunschweig A4091 SCSI Host Adapter\n\
         02: Great Valley Products G-Force 040 with SCSI Host Adapter\n"
    );
}

#[test]
fn test_numeric_listing() {
    let bus = FakeBus::new(DEVICES, 68);
    let opts = Options {
        numeric: true,
        ..bus.options()
    };
    assert_eq!(
        run_list(&opts).unwrap(),
        "00: 2140:22:00\n01: 0201:54:00\n02: 07e1:0b:30\n"
    );
}

#[test]
fn test_missing_database_lists_numeric() {
    let bus = FakeBus::new(DEVICES, 68);
    let opts = Options {
        ids_path: bus.dir.path().join("missing.ids"),
        ..bus.options()
    };
    assert!(run_list(&opts).unwrap().starts_with("00: 2140:22:00\n"));
}

#[test]
fn test_filtered_listing() {
    let bus = FakeBus::new(DEVICES, 68);
    let opts = Options {
        filter: DeviceFilter::from_args(None, Some("7e1::")).unwrap(),
        ..bus.options()
    };
    assert_eq!(
        run_list(&opts).unwrap(),
        "02: Great Valley Products G-Force 040 with SCSI Host Adapter\n"
    );

    let opts = Options {
        filter: DeviceFilter::from_args(Some("1"), None).unwrap(),
        ..bus.options()
    };
    assert_eq!(
        run_list(&opts).unwrap(),
        "01: Commodore Braunschweig A4091 SCSI Host Adapter\n"
    );
}

#[test]
fn test_hex_dump_of_config_space() {
    let bus = FakeBus::new(DEVICES, 68);
    let opts = Options {
        filter: DeviceFilter::from_args(Some("0"), None).unwrap(),
        display: DisplayOptions {
            hex: 1,
            ..Default::default()
        },
        ..bus.options()
    };
    let output = run_list(&opts).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "00: Phase 5: Unknown device 22:00");
    assert_eq!(
        lines[1],
        "00: 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f"
    );
    assert_eq!(lines[5], "40: 40 41 42 43");
    assert_eq!(lines[6], "");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_short_config_space_is_fatal() {
    let bus = FakeBus::new(DEVICES, 16);
    let err = run_list(&bus.options()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only 16 bytes of config space available to you"
    );
}

#[test]
fn test_missing_config_file_is_fatal() {
    let bus = FakeBus::new("00 21402200\n07 07e10b30\n", 68);
    let err = run_list(&bus.options()).unwrap_err();
    assert!(err.to_string().starts_with("Unable to open "));
    assert!(err.to_string().contains(&format!("{}", Path::new("bus").join("07").display())));
}

#[test]
fn test_missing_device_list_is_fatal() {
    let bus = FakeBus::new(DEVICES, 68);
    fs::remove_file(bus.bus_dir().join("devices")).unwrap();
    let err = run_list(&bus.options()).unwrap_err();
    assert!(err.to_string().contains("devices: "));
}

#[test]
fn test_corrupt_database_is_fatal() {
    let bus = FakeBus::new(DEVICES, 68);
    fs::write(bus.ids_path(), "0201  Commodore\n0201  Commodore\n").unwrap();
    let err = run_list(&bus.options()).unwrap_err();
    assert!(err.to_string().ends_with(", line 2: duplicate entry"));
}
