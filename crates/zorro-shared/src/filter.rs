//! Device filtering.
//!
//! Two small grammars feed one filter:
//!
//! - slot filter: `[slot]`
//! - ID filter: `[manufacturer]:[product]:[extended_product]`, the last
//!   component and its colon being optional
//!
//! An empty component or `*` leaves that field unconstrained. Numbers are
//! hexadecimal and parsed the way C `strtol(s, &end, 16)` does: leading
//! whitespace, an optional sign and an optional `0x` prefix are accepted,
//! anything left over after the digits is rejected.

use crate::device::DeviceId;
use crate::error::FilterError;

const WILDCARD: &str = "*";

/// Exclusive upper bounds. The top value of each field is rejected.
const SLOT_LIMIT: i64 = 0xff;
const MANUFACTURER_LIMIT: i64 = 0xffff;
const PRODUCT_LIMIT: i64 = 0xff;
const EXTENDED_PRODUCT_LIMIT: i64 = 0xff;

/// Four-field match record. `None` matches anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    pub slot: Option<u8>,
    pub manufacturer: Option<u16>,
    pub product: Option<u8>,
    pub extended_product: Option<u8>,
}

impl DeviceFilter {
    /// Filter matching every device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from optional slot and ID filter text.
    pub fn from_args(slot: Option<&str>, id: Option<&str>) -> Result<Self, FilterError> {
        let mut filter = Self::new();
        if let Some(slot) = slot {
            filter.parse_slot(slot)?;
        }
        if let Some(id) = id {
            filter.parse_id(id)?;
        }
        Ok(filter)
    }

    /// Apply a slot filter (`[slot]`).
    pub fn parse_slot(&mut self, s: &str) -> Result<(), FilterError> {
        if let Some(slot) = parse_component(s, SLOT_LIMIT, FilterError::InvalidSlot)? {
            self.slot = Some(slot as u8);
        }
        Ok(())
    }

    /// Apply an ID filter (`[manufacturer]:[product]:[extended_product]`).
    pub fn parse_id(&mut self, s: &str) -> Result<(), FilterError> {
        if s.is_empty() {
            return Ok(());
        }
        let (manufacturer, rest) = s.split_once(':').ok_or(FilterError::MissingColon)?;
        let (product, extended_product) = match rest.split_once(':') {
            Some((product, extended_product)) => (product, Some(extended_product)),
            None => (rest, None),
        };

        let manufacturer = parse_component(
            manufacturer,
            MANUFACTURER_LIMIT,
            FilterError::InvalidManufacturer,
        )?;
        let product = parse_component(product, PRODUCT_LIMIT, FilterError::InvalidProduct)?;
        let extended_product = match extended_product {
            Some(s) => parse_component(
                s,
                EXTENDED_PRODUCT_LIMIT,
                FilterError::InvalidExtendedProduct,
            )?,
            None => None,
        };

        // Nothing is stored until every component has parsed.
        if let Some(v) = manufacturer {
            self.manufacturer = Some(v as u16);
        }
        if let Some(v) = product {
            self.product = Some(v as u8);
        }
        if let Some(v) = extended_product {
            self.extended_product = Some(v as u8);
        }
        Ok(())
    }

    /// True when every constrained field equals the device's value.
    pub fn matches(&self, slot: u8, manufacturer: u16, product: u8, extended_product: u8) -> bool {
        field_matches(self.slot, slot)
            & field_matches(self.manufacturer, manufacturer)
            & field_matches(self.product, product)
            & field_matches(self.extended_product, extended_product)
    }

    pub fn matches_device(&self, dev: &DeviceId) -> bool {
        self.matches(dev.slot, dev.manufacturer, dev.product, dev.extended_product)
    }

    /// No field is constrained.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn field_matches<T: PartialEq>(want: Option<T>, have: T) -> bool {
    want.map_or(true, |want| want == have)
}

/// Parse one filter component. `Ok(None)` means unconstrained.
fn parse_component(s: &str, limit: i64, err: FilterError) -> Result<Option<i64>, FilterError> {
    if s.is_empty() || s == WILDCARD {
        return Ok(None);
    }
    match strtol_hex(s) {
        Some(x) if (0..limit).contains(&x) => Ok(Some(x)),
        _ => Err(err),
    }
}

/// Base-16 `strtol` that fails on trailing characters. Saturates on overflow.
fn strtol_hex(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_hexdigit()) => rest,
        _ => s,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0i64, |acc, d| acc.saturating_mul(16).saturating_add(d as i64));
    Some(if negative { -value } else { value })
}
