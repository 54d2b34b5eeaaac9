//! L'Arc scenario status.

use super::BaseStatus;
use crate::protocol::TurnResponse;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LArcStatus {
    pub global_exp: i32,
    pub approval_rate: i32,
    pub rival_count: i32,
}

impl LArcStatus {
    pub fn from_response(response: &TurnResponse) -> Self {
        let Some(dataset) = response.data.arc_data_set.as_ref() else {
            return Self::default();
        };
        let (global_exp, approval_rate) = dataset
            .arc_info
            .as_ref()
            .map(|info| (info.global_exp, info.approval_rate))
            .unwrap_or_default();

        Self { global_exp, approval_rate, rival_count: dataset.arc_rival_array.len() as i32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LArcSnapshot {
    pub base_game: BaseStatus,
    pub larc: LArcStatus,
}

impl LArcSnapshot {
    pub fn from_response(response: &TurnResponse) -> Self {
        Self {
            base_game: BaseStatus::from_response(response),
            larc: LArcStatus::from_response(response),
        }
    }
}
