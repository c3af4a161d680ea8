//! Fixed offsets of the trainer data inside a Red/Blue save image.
//!
//! The save is a flat 32 KiB snapshot of cartridge RAM; every field the
//! crate exposes lives at a hard-coded offset inside it. Nothing here is
//! discovered at runtime.

/// Byte length of a complete save image.
pub const SAVE_LEN: usize = 0x8000;

/// Sentinel ending a name inside its window.
pub const TEXT_TERMINATOR: u8 = 0x50;

/// Window reserved for a trainer name, terminator included.
pub const NAME_LEN: usize = 11;

/// Byte length of each Pokedex bitset.
pub const DEX_FLAG_BYTES: usize = 13;

/// Flag slots per Pokedex bitset, one bit per species.
pub const DEX_FLAG_SLOTS: u32 = DEX_FLAG_BYTES as u32 * 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWindow {
    pub offset: usize,
    pub len: usize,
}

impl FieldWindow {
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

pub const PLAYER_NAME: FieldWindow = FieldWindow {
    offset: 0x2598,
    len: NAME_LEN,
};

pub const POKEDEX_OWNED: FieldWindow = FieldWindow {
    offset: 0x25A3,
    len: DEX_FLAG_BYTES,
};

pub const POKEDEX_SEEN: FieldWindow = FieldWindow {
    offset: 0x25B6,
    len: DEX_FLAG_BYTES,
};

pub const RIVAL_NAME: FieldWindow = FieldWindow {
    offset: 0x25F6,
    len: NAME_LEN,
};

pub const PLAYER_ID: FieldWindow = FieldWindow {
    offset: 0x2605,
    len: 2,
};
