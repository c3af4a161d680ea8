//! Lazy field extraction from a loaded save image.

use std::io;

use crate::layout::{self, FieldWindow};
use crate::text;

/// An immutable save image plus accessors for the trainer facts inside it.
///
/// Construction never validates the buffer; every accessor slices its own
/// fixed window on demand, so a short or corrupt image fails at the first
/// access that actually needs the damaged bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveImage {
    bytes: Vec<u8>,
}

impl SaveImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Trainer name, decoded up to (and excluding) its terminator.
    pub fn player_name(&self) -> io::Result<String> {
        self.terminated_text(layout::PLAYER_NAME, "player name")
    }

    /// Rival name, decoded up to (and excluding) its terminator.
    pub fn rival_name(&self) -> io::Result<String> {
        self.terminated_text(layout::RIVAL_NAME, "rival name")
    }

    /// Trainer ID number, stored big-endian.
    pub fn player_id(&self) -> io::Result<u16> {
        let window = self.window(layout::PLAYER_ID, "player id")?;
        Ok(u16::from_be_bytes([window[0], window[1]]))
    }

    /// Number of species marked seen in the Pokedex bitset.
    pub fn pokedex_seen(&self) -> io::Result<u32> {
        Ok(popcount_sum(self.window(layout::POKEDEX_SEEN, "pokedex seen flags")?))
    }

    /// Number of species marked owned in the Pokedex bitset.
    pub fn pokedex_owned(&self) -> io::Result<u32> {
        Ok(popcount_sum(self.window(layout::POKEDEX_OWNED, "pokedex owned flags")?))
    }

    fn window(&self, field: FieldWindow, what: &str) -> io::Result<&[u8]> {
        self.bytes.get(field.offset..field.end()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "{what} window {:#06x}..{:#06x} is outside the {} byte save image",
                    field.offset,
                    field.end(),
                    self.bytes.len()
                ),
            )
        })
    }

    fn terminated_text(&self, field: FieldWindow, what: &str) -> io::Result<String> {
        let window = self.window(field, what)?;
        let length = window
            .iter()
            .position(|&b| b == layout::TEXT_TERMINATOR)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("{what} has no terminator within its {} byte window", field.len),
                )
            })?;
        Ok(text::decode_text(&window[..length]))
    }
}

fn popcount_sum(window: &[u8]) -> u32 {
    window.iter().map(|&b| b.count_ones()).sum()
}
