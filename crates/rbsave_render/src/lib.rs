//! Rendering of trainer data as canonical JSON, key=value pairs and a
//! fixed-width text card. All callers share the field order defined here.

use std::fmt::Write as _;

use rbsave_core::core_api::{CoreError, Session, Snapshot};
use serde_json::{Map as JsonMap, Value as JsonValue};

const CARD_WIDTH: usize = 40;
const CARD_NAME_COL_WIDTH: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    TrainerCard,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub id: bool,
    pub rival: bool,
    pub seen: bool,
    pub owned: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.name || self.id || self.rival || self.seen || self.owned
    }
}

pub fn render_json_full(snapshot: &Snapshot, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(full_json(snapshot)),
    }
}

/// JSON for the selected fields only. Reads each requested field straight
/// from the session, so unselected damaged fields cannot fail the call.
pub fn render_json_selected(
    session: &Session,
    fields: &FieldSelection,
    style: JsonStyle,
) -> Result<JsonValue, CoreError> {
    match style {
        JsonStyle::CanonicalV1 => Ok(JsonValue::Object(selected_json(session, fields)?)),
    }
}

/// Key/value pairs for the selected fields, in canonical order.
pub fn selected_pairs(
    session: &Session,
    fields: &FieldSelection,
) -> Result<Vec<(&'static str, String)>, CoreError> {
    let mut out = Vec::new();

    if fields.name {
        out.push(("name", session.player_name()?));
    }
    if fields.id {
        out.push(("id", session.player_id()?.to_string()));
    }
    if fields.rival {
        out.push(("rival", session.rival_name()?));
    }
    if fields.seen {
        out.push(("seen", session.pokedex_seen()?.to_string()));
    }
    if fields.owned {
        out.push(("owned", session.pokedex_owned()?.to_string()));
    }

    Ok(out)
}

pub fn render_trainer_card(snapshot: &Snapshot) -> String {
    render_trainer_card_impl(snapshot)
}

pub fn render_text(snapshot: &Snapshot, style: TextStyle) -> String {
    match style {
        TextStyle::TrainerCard => render_trainer_card_impl(snapshot),
    }
}

fn full_json(snapshot: &Snapshot) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    out.insert(
        "name".to_string(),
        JsonValue::String(snapshot.player_name.clone()),
    );
    out.insert("id".to_string(), JsonValue::from(snapshot.player_id));
    out.insert(
        "rival".to_string(),
        JsonValue::String(snapshot.rival_name.clone()),
    );
    out.insert("seen".to_string(), JsonValue::from(snapshot.pokedex_seen));
    out.insert("owned".to_string(), JsonValue::from(snapshot.pokedex_owned));

    out
}

fn selected_json(
    session: &Session,
    fields: &FieldSelection,
) -> Result<JsonMap<String, JsonValue>, CoreError> {
    let mut out = JsonMap::new();

    if fields.name {
        out.insert(
            "name".to_string(),
            JsonValue::String(session.player_name()?),
        );
    }
    if fields.id {
        out.insert("id".to_string(), JsonValue::from(session.player_id()?));
    }
    if fields.rival {
        out.insert(
            "rival".to_string(),
            JsonValue::String(session.rival_name()?),
        );
    }
    if fields.seen {
        out.insert("seen".to_string(), JsonValue::from(session.pokedex_seen()?));
    }
    if fields.owned {
        out.insert(
            "owned".to_string(),
            JsonValue::from(session.pokedex_owned()?),
        );
    }

    Ok(out)
}

fn render_trainer_card_impl(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing("TRAINER CARD", CARD_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    let player_section = format!(
        "  Player: {:<width$}",
        snapshot.player_name,
        width = CARD_NAME_COL_WIDTH
    );
    writeln!(&mut out, "{}IDNo/{:05}", player_section, snapshot.player_id)
        .expect("writing to String cannot fail");
    writeln!(&mut out, "  Rival:  {}", snapshot.rival_name)
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Pokedex :::").expect("writing to String cannot fail");
    writeln!(&mut out, "  Seen:  {}", snapshot.pokedex_seen)
        .expect("writing to String cannot fail");
    writeln!(&mut out, "  Owned: {}", snapshot.pokedex_owned)
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}
