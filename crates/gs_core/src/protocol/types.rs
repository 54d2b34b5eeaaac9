use super::datasets::*;
use serde::Deserialize;
use serde_json::Value;

/// Root of a decoded server push: `{"data": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnResponse {
    pub data: TurnData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TurnData {
    pub chara_info: Option<CharaInfo>,
    pub home_info: Option<HomeInfo>,
    /// Only presence matters; `null` decodes as absent.
    pub race_reward_info: Option<Value>,
    pub race_start_info: Option<Value>,
    pub unchecked_event_array: Option<Vec<UncheckedEvent>>,

    pub onsen_data_set: Option<OnsenDataSet>,
    pub arc_data_set: Option<ArcDataSet>,
    pub sport_data_set: Option<SportDataSet>,
    pub cook_data_set: Option<CookDataSet>,
    pub legend_data_set: Option<LegendDataSet>,
}

/// Character and turn info of the trainee.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CharaInfo {
    pub turn: i32,
    pub scenario_id: i32,
    /// 2 and 3 are mid-race / finished states.
    pub state: i32,
    pub playing_state: i32,
    pub card_id: i32,

    pub speed: i32,
    pub stamina: i32,
    pub power: i32,
    pub guts: i32,
    pub wiz: i32,
    pub max_speed: i32,
    pub max_stamina: i32,
    pub max_power: i32,
    pub max_guts: i32,
    pub max_wiz: i32,

    pub vital: i32,
    pub max_vital: i32,
    pub motivation: i32,
    pub skill_point: i32,
    pub fans: i32,
}

impl CharaInfo {
    pub fn five_status(&self) -> [i32; 5] {
        [self.speed, self.stamina, self.power, self.guts, self.wiz]
    }

    pub fn five_status_limit(&self) -> [i32; 5] {
        [self.max_speed, self.max_stamina, self.max_power, self.max_guts, self.max_wiz]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HomeInfo {
    pub command_info_array: Option<Vec<CommandInfo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommandInfo {
    pub command_id: i32,
    pub is_enable: i32,
    pub failure_rate: i32,
}

/// A narrative event waiting for the player.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UncheckedEvent {
    pub story_id: i64,
    pub event_contents_info: EventContentsInfo,
}

impl UncheckedEvent {
    pub fn choice_count(&self) -> usize {
        self.event_contents_info.choice_array.len()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventContentsInfo {
    #[serde(deserialize_with = "crate::protocol::null_as_default")]
    pub choice_array: Vec<EventChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventChoice {
    pub select_index: i32,
    pub receive_item_id: i32,
}
