//! Read-only access to the trainer data in Game Boy Pokemon Red/Blue
//! saves, loaded either from raw battery saves or from the emulator
//! state snapshots that embed one.

pub mod core_api;
pub mod layout;
pub mod save;
pub mod state;
pub mod text;
