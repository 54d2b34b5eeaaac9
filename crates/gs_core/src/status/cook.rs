//! Cook scenario status.

use super::BaseStatus;
use crate::protocol::TurnResponse;
use serde::Serialize;

pub const COOK_MATERIAL_COUNT: usize = 5;
pub const COOK_FACILITY_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookStatus {
    pub cook_point: i32,
    /// Indexed by `material_id - 1`.
    pub material_num: [i32; COOK_MATERIAL_COUNT],
    /// Indexed by `facility_id - 1`.
    pub facility_level: [i32; COOK_FACILITY_COUNT],
}

/// 0-based slot of a 1-based id, if it fits in `len` slots.
fn slot(id: i32, len: usize) -> Option<usize> {
    usize::try_from(id).ok()?.checked_sub(1).filter(|&slot| slot < len)
}

impl CookStatus {
    pub fn from_response(response: &TurnResponse) -> Self {
        let mut status = Self::default();
        let Some(dataset) = response.data.cook_data_set.as_ref() else {
            return status;
        };

        if let Some(info) = dataset.cook_info.as_ref() {
            status.cook_point = info.cooking_success_point;
        }
        for material in &dataset.material_info_array {
            if let Some(i) = slot(material.material_id, COOK_MATERIAL_COUNT) {
                status.material_num[i] = material.num;
            }
        }
        for facility in &dataset.facility_info_array {
            if let Some(i) = slot(facility.facility_id, COOK_FACILITY_COUNT) {
                status.facility_level[i] = facility.facility_level;
            }
        }
        status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookSnapshot {
    pub base_game: BaseStatus,
    pub cook: CookStatus,
}

impl CookSnapshot {
    pub fn from_response(response: &TurnResponse) -> Self {
        Self {
            base_game: BaseStatus::from_response(response),
            cook: CookStatus::from_response(response),
        }
    }
}
