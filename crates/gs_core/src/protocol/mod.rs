//! Decoded view of a single-mode (training career) server response.
//!
//! Only the members the analyzers read are modelled; everything else in the
//! payload is ignored by serde. Every member is optional because the server
//! sends many partial pushes per turn.

pub mod datasets;
pub mod types;

pub use datasets::*;
pub use types::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `null` the same as a missing member.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TurnResponse {
    /// Decode a raw payload. Returns `None` when the payload has no `data`
    /// object or does not match the expected shape.
    pub fn from_value(payload: &Value) -> Option<Self> {
        if !payload.get("data").is_some_and(Value::is_object) {
            return None;
        }
        match TurnResponse::deserialize(payload) {
            Ok(response) => Some(response),
            Err(e) => {
                log::debug!("Ignoring payload that does not decode as a turn response: {}", e);
                None
            }
        }
    }

    pub fn chara_info(&self) -> Option<&CharaInfo> {
        self.data.chara_info.as_ref()
    }

    pub fn turn(&self) -> Option<i32> {
        self.chara_info().map(|c| c.turn)
    }

    pub fn scenario_id(&self) -> Option<i32> {
        self.chara_info().map(|c| c.scenario_id)
    }

    /// Commands on the home screen, empty when the home info is absent.
    pub fn commands(&self) -> &[CommandInfo] {
        self.data
            .home_info
            .as_ref()
            .and_then(|h| h.command_info_array.as_deref())
            .unwrap_or(&[])
    }

    pub fn unchecked_events(&self) -> &[UncheckedEvent] {
        self.data.unchecked_event_array.as_deref().unwrap_or(&[])
    }
}
