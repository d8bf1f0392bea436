//! Public encoding of game state: hands other than the viewer's become card counts,
//! and the viewer's own hand is sorted for display.

use serde_json::{json, Value};

use euchre_engine::{snapshot, ErrorCode, Phase, Seat};

/// Snapshot of `phase` as seen by `viewer`; with no viewer every hand is a count.
pub fn public_state(phase: &Phase, viewer: Option<Seat>) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(snapshot(phase))?;
    let to_act = phase.turn();

    if let Some(data) = value.pointer_mut("/phase/data") {
        if let Some(Value::Array(hands)) = data.pointer_mut("/table/hands") {
            for (seat, hand) in hands.iter_mut().enumerate() {
                if Some(seat as Seat) == viewer {
                    if let Some(table) = phase.table() {
                        let mut cards = table.hands[seat].clone();
                        cards.sort_by_key(|c| c.sort_key());
                        *hand = serde_json::to_value(cards)?;
                    }
                } else {
                    let count = hand.as_array().map_or(0, Vec::len);
                    *hand = json!(count);
                }
            }
        }
        if viewer.is_none() || viewer != to_act {
            if let Some(obj) = data.as_object_mut() {
                obj.remove("playable");
            }
        }
    }
    Ok(value)
}

pub fn error_object(code: ErrorCode, detail: &str) -> Value {
    json!({ "code": code.as_str(), "detail": detail })
}
