use serde::{Deserialize, Serialize};

/// The trainer facts a save exposes, gathered in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub player_name: String,
    pub player_id: u16,
    pub rival_name: String,
    pub pokedex_seen: u32,
    pub pokedex_owned: u32,
}
