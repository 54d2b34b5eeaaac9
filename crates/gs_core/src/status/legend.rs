//! Legend scenario status.

use super::BaseStatus;
use crate::protocol::TurnResponse;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendStatus {
    pub buff_ids: Vec<i32>,
    /// Gauge count per legend, in server order.
    pub gauge_count: Vec<i32>,
}

impl LegendStatus {
    pub fn from_response(response: &TurnResponse) -> Self {
        let Some(dataset) = response.data.legend_data_set.as_ref() else {
            return Self::default();
        };
        Self {
            buff_ids: dataset.buff_info_array.iter().map(|b| b.buff_id).collect(),
            gauge_count: dataset.gauge_count_array.iter().map(|g| g.count).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSnapshot {
    pub base_game: BaseStatus,
    pub legend: LegendStatus,
}

impl LegendSnapshot {
    pub fn from_response(response: &TurnResponse) -> Self {
        Self {
            base_game: BaseStatus::from_response(response),
            legend: LegendStatus::from_response(response),
        }
    }
}
