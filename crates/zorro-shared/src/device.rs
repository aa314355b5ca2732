//! Device identity as exposed by `/proc/bus/zorro`.

/// Size of the AmigaOS `ConfigDev` record exported per slot.
///
/// Node (14) + flags/pad (2) + ExpansionRom (16) + board address/size (8)
/// + slot address/size (4) + driver/next pointers (8) + unused (16).
pub const CONFIG_DEV_SIZE: usize = 68;

/// Combined 32-bit board ID: manufacturer in bits 16-31, product in 8-15,
/// extended product code in 0-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZorroId(pub u32);

impl ZorroId {
    pub fn new(manufacturer: u16, product: u8, extended_product: u8) -> Self {
        Self(((manufacturer as u32) << 16) | ((product as u32) << 8) | extended_product as u32)
    }

    pub fn manufacturer(self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn product(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub fn extended_product(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// The identifying tuple every filter and name lookup works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    pub slot: u8,
    pub manufacturer: u16,
    pub product: u8,
    pub extended_product: u8,
}

impl DeviceId {
    pub fn new(slot: u8, id: ZorroId) -> Self {
        Self {
            slot,
            manufacturer: id.manufacturer(),
            product: id.product(),
            extended_product: id.extended_product(),
        }
    }

    pub fn zorro_id(&self) -> ZorroId {
        ZorroId::new(self.manufacturer, self.product, self.extended_product)
    }
}

/// Bus generation encoded in the top two bits of `er_Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    ZorroII,
    ZorroIII,
    Unknown,
}

impl std::fmt::Display for BoardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardKind::ZorroII => write!(f, "Zorro II"),
            BoardKind::ZorroIII => write!(f, "Zorro III"),
            BoardKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Raw `er_Type` byte of the board's expansion ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardType(pub u8);

impl BoardType {
    const TYPE_MASK: u8 = 0xc0;
    const ZORRO_II: u8 = 0xc0;
    const ZORRO_III: u8 = 0x80;
    const MEMLIST: u8 = 1 << 5;

    pub fn kind(self) -> BoardKind {
        match self.0 & Self::TYPE_MASK {
            Self::ZORRO_II => BoardKind::ZorroII,
            Self::ZORRO_III => BoardKind::ZorroIII,
            _ => BoardKind::Unknown,
        }
    }

    /// Board RAM is linked into the free memory list.
    pub fn is_memory(self) -> bool {
        self.0 & Self::MEMLIST != 0
    }
}
