//! Loading a save image from the places one can live on disk.
//!
//! Besides the raw battery save, several emulators write gzip-compressed
//! state snapshots that embed the full save image at a fixed offset. The
//! loaders here never inspect the content to guess a layout; the caller
//! names the format and gets exactly [`layout::SAVE_LEN`] bytes or an
//! error.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;

use crate::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    /// Raw battery save (`.sav`), the save image itself.
    Sav,
    /// BGB state snapshot (`.sgm`), gzip with the save at 0x837C.
    Bgb,
    /// Mob state snapshot (`.st1`), gzip with the save at 0x8044.
    Mob,
    /// VisualBoyAdvance state snapshot (`.sg1`), gzip with the save at 0xFCE6.
    Vba,
}

impl StateFormat {
    /// Maps a file extension to its format. This is loader selection, not
    /// content sniffing; unknown extensions yield `None`.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "sav" => Some(Self::Sav),
            "sgm" => Some(Self::Bgb),
            "st1" => Some(Self::Mob),
            "sg1" => Some(Self::Vba),
            _ => None,
        }
    }

    /// Offset of the save image inside the (decompressed) source.
    pub fn save_offset(&self) -> u64 {
        match self {
            Self::Sav => 0,
            Self::Bgb => 0x837C,
            Self::Mob => 0x8044,
            Self::Vba => 0xFCE6,
        }
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::Sav)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sav => "sav",
            Self::Bgb => "bgb",
            Self::Mob => "mob",
            Self::Vba => "vba",
        }
    }
}

impl fmt::Display for StateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn load_from_path(path: &Path, format: StateFormat) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), format)
}

pub fn load_from_bytes(bytes: &[u8], format: StateFormat) -> io::Result<Vec<u8>> {
    load_from_reader(bytes, format)
}

pub fn load_from_reader<R: Read>(reader: R, format: StateFormat) -> io::Result<Vec<u8>> {
    debug!(
        "loading {format} state, save image at offset {:#x}",
        format.save_offset()
    );
    if format.is_compressed() {
        read_save_image(GzDecoder::new(reader), format.save_offset())
    } else {
        read_save_image(reader, format.save_offset())
    }
}

fn read_save_image<R: Read>(mut reader: R, offset: u64) -> io::Result<Vec<u8>> {
    // Gzip streams cannot seek, so reaching the save image means reading
    // and discarding everything in front of it.
    if offset > 0 {
        let skipped = io::copy(&mut reader.by_ref().take(offset), &mut io::sink())?;
        if skipped < offset {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("state ends at byte {skipped}, before the save image at {offset:#x}"),
            ));
        }
    }

    let mut save = vec![0u8; layout::SAVE_LEN];
    reader.read_exact(&mut save)?;
    Ok(save)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::Path;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::layout;

    fn marked_save() -> Vec<u8> {
        let mut save = vec![0u8; layout::SAVE_LEN];
        save[0] = 0xAB;
        save[layout::SAVE_LEN - 1] = 0xCD;
        save[layout::PLAYER_ID.offset] = 0x12;
        save
    }

    fn gzip_state(save: &[u8], offset: u64, trailing: usize) -> Vec<u8> {
        let mut raw = vec![0u8; offset as usize];
        raw.extend_from_slice(save);
        raw.extend_from_slice(&vec![0u8; trailing]);

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw).expect("gzip encode should write state");
        encoder.finish().expect("gzip encode should finish")
    }

    #[test]
    fn raw_save_loads_verbatim() {
        let save = marked_save();
        let loaded = load_from_bytes(&save, StateFormat::Sav).expect("raw save should load");
        assert_eq!(loaded, save);
    }

    #[test]
    fn raw_save_ignores_trailing_bytes() {
        let mut on_disk = marked_save();
        on_disk.extend_from_slice(&[0xEE; 32]);

        let loaded = load_from_bytes(&on_disk, StateFormat::Sav).expect("raw save should load");
        assert_eq!(loaded.len(), layout::SAVE_LEN);
        assert_eq!(loaded[layout::SAVE_LEN - 1], 0xCD);
    }

    #[test]
    fn short_raw_save_fails() {
        let err = load_from_bytes(&[0u8; 100], StateFormat::Sav).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn each_compressed_format_finds_the_save_at_its_offset() {
        let save = marked_save();
        for format in [StateFormat::Bgb, StateFormat::Mob, StateFormat::Vba] {
            let state = gzip_state(&save, format.save_offset(), 256);
            let loaded = load_from_bytes(&state, format)
                .unwrap_or_else(|e| panic!("{format} state should load: {e}"));
            assert_eq!(loaded, save, "wrong bytes for {format}");
        }
    }

    #[test]
    fn state_ending_before_the_save_image_fails() {
        let state = gzip_state(&[], StateFormat::Bgb.save_offset() - 100, 0);
        let err = load_from_bytes(&state, StateFormat::Bgb).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn state_with_a_partial_save_image_fails() {
        let partial = vec![0u8; layout::SAVE_LEN / 2];
        let state = gzip_state(&partial, StateFormat::Vba.save_offset(), 0);
        let err = load_from_bytes(&state, StateFormat::Vba).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn extensions_map_to_formats_case_insensitively() {
        assert_eq!(
            StateFormat::from_extension(Path::new("red.sav")),
            Some(StateFormat::Sav)
        );
        assert_eq!(
            StateFormat::from_extension(Path::new("red.SGM")),
            Some(StateFormat::Bgb)
        );
        assert_eq!(
            StateFormat::from_extension(Path::new("red.st1")),
            Some(StateFormat::Mob)
        );
        assert_eq!(
            StateFormat::from_extension(Path::new("red.sg1")),
            Some(StateFormat::Vba)
        );
        assert_eq!(StateFormat::from_extension(Path::new("red.state")), None);
        assert_eq!(StateFormat::from_extension(Path::new("red")), None);
    }

    #[test]
    fn only_the_raw_format_is_uncompressed() {
        assert!(!StateFormat::Sav.is_compressed());
        assert!(StateFormat::Bgb.is_compressed());
        assert!(StateFormat::Mob.is_compressed());
        assert!(StateFormat::Vba.is_compressed());
        assert_eq!(StateFormat::Sav.save_offset(), 0);
    }
}
