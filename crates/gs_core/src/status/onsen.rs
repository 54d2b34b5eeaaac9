//! Hot-springs scenario status
//!
//! The trainee digs hot-spring sites. Each site is layered into strata of
//! sand, soil or rock, and each material has its own dig power and level.

use super::{BaseStatus, ExtractContext};
use crate::error::{ExtractError, Result};
use crate::protocol::{OnsenDataSet, TurnResponse};
use crate::scenario::ONSEN_VARIANT_SCENARIO_ID;
use serde::Serialize;

/// Number of dig sites in the scenario.
pub const ONSEN_SITE_COUNT: usize = 10;

/// Number of stratum materials.
pub const MATERIAL_COUNT: usize = 3;

/// `playing_state` while the game waits for the player to pick the next site.
pub const PLAYING_STATE_SITE_SELECTION: i32 = 36;

/// `onsen_info.state` of the site currently being dug.
const SITE_STATE_DIGGING: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialType {
    Sand,
    Soil,
    Rock,
}

impl MaterialType {
    /// Classify a stratum id. Ids outside the known tables return `None`.
    pub fn from_stratum_id(stratum_id: i32) -> Option<Self> {
        match stratum_id {
            4 | 7 | 9 | 15 | 18 => Some(MaterialType::Sand),
            5 | 8 | 11 | 13 | 16 | 19 => Some(MaterialType::Soil),
            6 | 10 | 12 | 14 | 17 | 20 => Some(MaterialType::Rock),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            MaterialType::Sand => 0,
            MaterialType::Soil => 1,
            MaterialType::Rock => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BathingStatus {
    pub ticket_num: i32,
    pub buff_remain_turn: i32,
    /// The next bath gives the superior recovery.
    pub is_super_ready: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnsenStatus {
    /// Index of the site being dug, -1 if none.
    pub current_onsen: i32,
    pub bathing: BathingStatus,
    pub onsen_state: [bool; ONSEN_SITE_COUNT],
    /// Remaining volume per site and material.
    pub dig_remain: [[i32; MATERIAL_COUNT]; ONSEN_SITE_COUNT],
    /// Sites dug, not counting the starting site.
    pub dig_count: i32,
    pub dig_power: [i32; MATERIAL_COUNT],
    pub dig_level: [i32; MATERIAL_COUNT],
    pub dig_vital_cost: i32,
    pub pending_selection: bool,
}

impl Default for OnsenStatus {
    fn default() -> Self {
        Self {
            current_onsen: -1,
            bathing: BathingStatus::default(),
            onsen_state: [false; ONSEN_SITE_COUNT],
            dig_remain: [[0; MATERIAL_COUNT]; ONSEN_SITE_COUNT],
            dig_count: 0,
            dig_power: [0; MATERIAL_COUNT],
            dig_level: [1; MATERIAL_COUNT],
            dig_vital_cost: 0,
            pending_selection: false,
        }
    }
}

impl OnsenStatus {
    pub fn from_response(response: &TurnResponse, ctx: &ExtractContext) -> Result<Self> {
        let mut status = Self {
            dig_vital_cost: ctx.dig_vital_cost,
            pending_selection: response
                .chara_info()
                .is_some_and(|c| c.playing_state == PLAYING_STATE_SITE_SELECTION),
            ..Self::default()
        };

        if let Some(dataset) = response.data.onsen_data_set.as_ref() {
            status.apply_dataset(dataset)?;
        }
        Ok(status)
    }

    fn apply_dataset(&mut self, dataset: &OnsenDataSet) -> Result<()> {
        if let Some(bathing) = dataset.bathing_info.as_ref() {
            self.bathing = BathingStatus {
                ticket_num: bathing.ticket_num,
                buff_remain_turn: bathing.onsen_effect_remain_count,
                is_super_ready: bathing.superior_state > 0,
            };
        }

        if dataset.dug_onsen_id_array.is_empty() {
            return Err(ExtractError::EmptyDugSites);
        }
        for &id in &dataset.dug_onsen_id_array {
            let slot = usize::try_from(id)
                .ok()
                .and_then(|id| id.checked_sub(1))
                .filter(|&slot| slot < ONSEN_SITE_COUNT)
                .ok_or(ExtractError::SiteIdOutOfRange { id, max: ONSEN_SITE_COUNT })?;
            self.onsen_state[slot] = true;
        }
        self.dig_count = dataset.dug_onsen_id_array.len() as i32 - 1;

        for (site, info) in dataset.onsen_info_array.iter().take(ONSEN_SITE_COUNT).enumerate() {
            if info.state == SITE_STATE_DIGGING {
                self.current_onsen = site as i32;
            }
            // Later strata of the same material overwrite earlier ones.
            for stratum in info.stratum_info_array.iter().filter(|s| s.rest_volume > 0) {
                if let Some(material) = MaterialType::from_stratum_id(stratum.stratum_id) {
                    self.dig_remain[site][material.index()] = stratum.rest_volume;
                }
            }
        }

        for (slot, effect) in dataset.dig_effect_info_array.iter().take(MATERIAL_COUNT).enumerate()
        {
            self.dig_power[slot] = effect.dig_effect_value;
            self.dig_level[slot] = effect.item_level;
        }
        Ok(())
    }
}

/// Output document for the hot-springs scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnsenSnapshot {
    pub base_game: BaseStatus,
    pub onsen: OnsenStatus,
}

impl OnsenSnapshot {
    pub fn from_response(response: &TurnResponse, ctx: &ExtractContext) -> Result<Self> {
        let mut base_game = BaseStatus::from_response(response);
        base_game.scenario_id = ONSEN_VARIANT_SCENARIO_ID;
        Ok(Self { base_game, onsen: OnsenStatus::from_response(response, ctx)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn onsen_turn(dataset: Value) -> TurnResponse {
        TurnResponse::from_value(&json!({
            "data": {
                "chara_info": { "turn": 25, "scenario_id": 11, "state": 1, "playing_state": 1 },
                "home_info": { "command_info_array": [] },
                "onsen_data_set": dataset
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_stratum_classification() {
        for id in [4, 7, 9, 15, 18] {
            assert_eq!(MaterialType::from_stratum_id(id), Some(MaterialType::Sand));
        }
        for id in [5, 8, 11, 13, 16, 19] {
            assert_eq!(MaterialType::from_stratum_id(id), Some(MaterialType::Soil));
        }
        for id in [6, 10, 12, 14, 17, 20] {
            assert_eq!(MaterialType::from_stratum_id(id), Some(MaterialType::Rock));
        }
        for id in [0, 1, 2, 3, 21, 99, -7] {
            assert_eq!(MaterialType::from_stratum_id(id), None);
        }
    }

    #[test]
    fn test_dug_sites_are_one_based() {
        let response = onsen_turn(json!({ "dug_onsen_id_array": [3, 1, 5] }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();

        let dug: Vec<usize> = (0..ONSEN_SITE_COUNT).filter(|&i| status.onsen_state[i]).collect();
        assert_eq!(dug, vec![0, 2, 4]);
        assert_eq!(status.dig_count, 2);
    }

    #[test]
    fn test_remaining_volume_by_material() {
        let response = onsen_turn(json!({
            "dug_onsen_id_array": [1],
            "onsen_info_array": [
                { "onsen_id": 1, "state": 2, "stratum_info_array": [
                    { "stratum_id": 7, "rest_volume": 120 },
                    { "stratum_id": 99, "rest_volume": 500 },
                    { "stratum_id": 10, "rest_volume": 0 }
                ]},
                { "onsen_id": 2, "state": 1, "stratum_info_array": [
                    { "stratum_id": 8, "rest_volume": 40 },
                    { "stratum_id": 14, "rest_volume": 75 }
                ]}
            ]
        }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();

        assert_eq!(status.dig_remain[0], [120, 0, 0]);
        assert_eq!(status.dig_remain[1], [0, 40, 75]);
        assert_eq!(status.current_onsen, 0);
    }

    #[test]
    fn test_same_material_last_write_wins() {
        let response = onsen_turn(json!({
            "dug_onsen_id_array": [1],
            "onsen_info_array": [
                { "state": 1, "stratum_info_array": [
                    { "stratum_id": 4, "rest_volume": 30 },
                    { "stratum_id": 15, "rest_volume": 90 }
                ]}
            ]
        }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();
        assert_eq!(status.dig_remain[0][MaterialType::Sand.index()], 90);
        assert_eq!(status.current_onsen, -1);
    }

    #[test]
    fn test_bathing_and_selection_state() {
        let mut payload = json!({
            "data": {
                "chara_info": { "turn": 40, "scenario_id": 12, "playing_state": 36 },
                "onsen_data_set": {
                    "bathing_info": {
                        "ticket_num": 2, "onsen_effect_remain_count": 1, "superior_state": 1
                    },
                    "dug_onsen_id_array": [1, 2]
                }
            }
        });
        let response = TurnResponse::from_value(&payload).unwrap();
        let status = OnsenStatus::from_response(&response, &ExtractContext::new(87)).unwrap();

        assert!(status.pending_selection);
        assert_eq!(
            status.bathing,
            BathingStatus { ticket_num: 2, buff_remain_turn: 1, is_super_ready: true }
        );
        assert_eq!(status.dig_vital_cost, 87);

        payload["data"]["onsen_data_set"]["bathing_info"]["superior_state"] = json!(0);
        let response = TurnResponse::from_value(&payload).unwrap();
        let status = OnsenStatus::from_response(&response, &ExtractContext::new(87)).unwrap();
        assert!(!status.bathing.is_super_ready);
    }

    #[test]
    fn test_dig_effects_copied_positionally() {
        let response = onsen_turn(json!({
            "dug_onsen_id_array": [1],
            "dig_effect_info_array": [
                { "dig_effect_value": 15, "item_level": 2 },
                { "dig_effect_value": 30, "item_level": 4 }
            ]
        }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();
        assert_eq!(status.dig_power, [15, 30, 0]);
        assert_eq!(status.dig_level, [2, 4, 1]);
    }

    #[test]
    fn test_dig_effects_beyond_three_are_ignored() {
        let response = onsen_turn(json!({
            "dug_onsen_id_array": [1],
            "dig_effect_info_array": [
                { "dig_effect_value": 10, "item_level": 1 },
                { "dig_effect_value": 20, "item_level": 2 },
                { "dig_effect_value": 30, "item_level": 3 },
                { "dig_effect_value": 40, "item_level": 4 }
            ]
        }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();
        assert_eq!(status.dig_power, [10, 20, 30]);
        assert_eq!(status.dig_level, [1, 2, 3]);
    }

    #[test]
    fn test_sites_beyond_table_are_ignored() {
        let mut sites: Vec<Value> = (1..=ONSEN_SITE_COUNT)
            .map(|id| {
                let state = if id == 4 { 2 } else { 1 };
                json!({ "onsen_id": id, "state": state, "stratum_info_array": [
                    { "stratum_id": 5, "rest_volume": id * 10 }
                ]})
            })
            .collect();
        sites.push(json!({ "onsen_id": 11, "state": 2, "stratum_info_array": [
            { "stratum_id": 7, "rest_volume": 999 }
        ]}));
        let response = onsen_turn(json!({ "dug_onsen_id_array": [1], "onsen_info_array": sites }));
        let status = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap();

        assert_eq!(status.current_onsen, 3);
        assert_eq!(status.dig_remain.len(), ONSEN_SITE_COUNT);
        for (site, remain) in status.dig_remain.iter().enumerate() {
            assert_eq!(*remain, [0, (site as i32 + 1) * 10, 0]);
        }
    }

    #[test]
    fn test_missing_dataset_keeps_defaults_except_vital_cost() {
        let response = TurnResponse::from_value(&json!({
            "data": { "chara_info": { "turn": 2, "scenario_id": 11 } }
        }))
        .unwrap();
        let status = OnsenStatus::from_response(&response, &ExtractContext::new(12)).unwrap();

        let expected = OnsenStatus { dig_vital_cost: 12, ..OnsenStatus::default() };
        assert_eq!(status, expected);
        assert_eq!(status.dig_level, [1, 1, 1]);
    }

    #[test]
    fn test_empty_dug_list_is_rejected() {
        let response = onsen_turn(json!({ "dug_onsen_id_array": [] }));
        let err = OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDugSites));
    }

    #[test]
    fn test_out_of_range_site_id_is_rejected() {
        for id in [0, 11, -1] {
            let response = onsen_turn(json!({ "dug_onsen_id_array": [1, id] }));
            let err =
                OnsenStatus::from_response(&response, &ExtractContext::default()).unwrap_err();
            assert!(matches!(err, ExtractError::SiteIdOutOfRange { id: bad, .. } if bad == id));
        }
    }

    #[test]
    fn test_snapshot_reports_variant_scenario_id() {
        let response = onsen_turn(json!({ "dug_onsen_id_array": [1] }));
        let snapshot = OnsenSnapshot::from_response(&response, &ExtractContext::default()).unwrap();
        assert_eq!(snapshot.base_game.scenario_id, ONSEN_VARIANT_SCENARIO_ID);
        assert_eq!(snapshot.base_game.turn, 25);
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let response = onsen_turn(json!({ "dug_onsen_id_array": [1, 2] }));
        let snapshot = OnsenSnapshot::from_response(&response, &ExtractContext::new(5)).unwrap();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["onsen"]["currentOnsen"], -1);
        assert_eq!(json["onsen"]["digCount"], 1);
        assert_eq!(json["onsen"]["digVitalCost"], 5);
        assert_eq!(json["onsen"]["bathing"]["ticketNum"], 0);
        assert_eq!(json["onsen"]["onsenState"][1], true);
        assert_eq!(json["onsen"]["digRemain"].as_array().unwrap().len(), ONSEN_SITE_COUNT);
        assert_eq!(json["baseGame"]["scenarioId"], 12);
    }
}
