//! UAF (sport) scenario status.

use super::BaseStatus;
use crate::protocol::TurnResponse;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UafStatus {
    /// Sport rank per training entry, in the order the server lists them.
    pub sport_rank: Vec<i32>,
}

impl UafStatus {
    pub fn from_response(response: &TurnResponse) -> Self {
        let sport_rank = response
            .data
            .sport_data_set
            .as_ref()
            .map(|dataset| dataset.training_array.iter().map(|t| t.sport_rank).collect())
            .unwrap_or_default();
        Self { sport_rank }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UafSnapshot {
    pub base_game: BaseStatus,
    pub uaf: UafStatus,
}

impl UafSnapshot {
    pub fn from_response(response: &TurnResponse) -> Self {
        Self {
            base_game: BaseStatus::from_response(response),
            uaf: UafStatus::from_response(response),
        }
    }
}
