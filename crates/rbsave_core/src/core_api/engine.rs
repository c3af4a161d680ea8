use std::io;
use std::path::Path;

use log::debug;

use crate::save::SaveImage;
use crate::state::{self, StateFormat};

use super::error::{CoreError, CoreErrorCode};
use super::types::Snapshot;

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// An opened save. Field accessors slice the image on demand, so each
/// one can fail (or succeed) independently of the others.
#[derive(Debug)]
pub struct Session {
    format: StateFormat,
    save: SaveImage,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Opens an in-memory source of the given format.
    pub fn open_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        format: StateFormat,
    ) -> Result<Session, CoreError> {
        let save_bytes = state::load_from_bytes(bytes.as_ref(), format)
            .map_err(|e| CoreError::from_io(format!("failed to load {format} state"), e))?;

        Ok(Session {
            format,
            save: SaveImage::new(save_bytes),
        })
    }

    /// Opens a file, inferring the format from the extension when none is
    /// given. The content itself is never sniffed.
    pub fn open_path(
        &self,
        path: &Path,
        format: Option<StateFormat>,
    ) -> Result<Session, CoreError> {
        let format = match format {
            Some(format) => format,
            None => StateFormat::from_extension(path).ok_or_else(|| {
                CoreError::new(
                    CoreErrorCode::UnknownFormat,
                    format!(
                        "cannot infer the state format of {} from its extension; \
                         expected .sav, .sgm, .st1 or .sg1",
                        path.display()
                    ),
                )
            })?,
        };

        let save_bytes = state::load_from_path(path, format).map_err(|e| {
            CoreError::from_io(
                format!("failed to load {} as {format} state", path.display()),
                e,
            )
        })?;

        debug!("opened {} as {format} state", path.display());
        Ok(Session {
            format,
            save: SaveImage::new(save_bytes),
        })
    }
}

impl Session {
    pub fn format(&self) -> StateFormat {
        self.format
    }

    pub fn save(&self) -> &SaveImage {
        &self.save
    }

    pub fn player_name(&self) -> Result<String, CoreError> {
        self.save.player_name().map_err(field_error)
    }

    pub fn rival_name(&self) -> Result<String, CoreError> {
        self.save.rival_name().map_err(field_error)
    }

    pub fn player_id(&self) -> Result<u16, CoreError> {
        self.save.player_id().map_err(field_error)
    }

    pub fn pokedex_seen(&self) -> Result<u32, CoreError> {
        self.save.pokedex_seen().map_err(field_error)
    }

    pub fn pokedex_owned(&self) -> Result<u32, CoreError> {
        self.save.pokedex_owned().map_err(field_error)
    }

    /// Evaluates every field. Fails on the first damaged one; callers
    /// that want partial data use the per-field accessors instead.
    pub fn snapshot(&self) -> Result<Snapshot, CoreError> {
        Ok(Snapshot {
            player_name: self.player_name()?,
            player_id: self.player_id()?,
            rival_name: self.rival_name()?,
            pokedex_seen: self.pokedex_seen()?,
            pokedex_owned: self.pokedex_owned()?,
        })
    }
}

fn field_error(err: io::Error) -> CoreError {
    CoreError::from_io("failed to read save field", err)
}
