//! Scenario-specific data sets carried next to `chara_info`.

use serde::Deserialize;

// Hot springs

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OnsenDataSet {
    pub bathing_info: Option<BathingInfo>,
    /// 1-based ids; the first entry is the starting site.
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub dug_onsen_id_array: Vec<i32>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub onsen_info_array: Vec<OnsenInfo>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub dig_effect_info_array: Vec<DigEffectInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BathingInfo {
    pub ticket_num: i32,
    pub onsen_effect_remain_count: i32,
    pub superior_state: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OnsenInfo {
    pub onsen_id: i32,
    /// 2 = currently being dug.
    pub state: i32,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub stratum_info_array: Vec<StratumInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StratumInfo {
    pub stratum_id: i32,
    pub rest_volume: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DigEffectInfo {
    pub dig_effect_value: i32,
    pub item_level: i32,
}

// L'Arc

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArcDataSet {
    pub arc_info: Option<ArcInfo>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub arc_rival_array: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArcInfo {
    pub global_exp: i32,
    pub approval_rate: i32,
}

// UAF

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SportDataSet {
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub training_array: Vec<SportTraining>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SportTraining {
    pub command_id: i32,
    pub sport_rank: i32,
}

// Cook

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CookDataSet {
    pub cook_info: Option<CookInfo>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub material_info_array: Vec<MaterialInfo>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub facility_info_array: Vec<FacilityInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CookInfo {
    pub cooking_success_point: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MaterialInfo {
    pub material_id: i32,
    pub num: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FacilityInfo {
    pub facility_id: i32,
    pub facility_level: i32,
}

// Legend

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegendDataSet {
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub buff_info_array: Vec<LegendBuffInfo>,
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub gauge_count_array: Vec<LegendGauge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegendBuffInfo {
    pub buff_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegendGauge {
    pub legend_id: i32,
    pub count: i32,
}
