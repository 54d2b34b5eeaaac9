//! Fields shared by every scenario record.

use crate::protocol::{CommandInfo, TurnResponse};
use serde::Serialize;

/// Trainee state common to all scenarios (`baseGame` in the output).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStatus {
    pub turn: i32,
    pub scenario_id: i32,
    pub card_id: i32,
    /// Speed, stamina, power, guts, wisdom.
    pub five_status: [i32; 5],
    pub five_status_limit: [i32; 5],
    pub vital: i32,
    pub max_vital: i32,
    pub motivation: i32,
    pub skill_pt: i32,
    pub fans: i32,
    /// Absent when the push carries no home command info (event turns).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_fail_rate: Option<[i32; 5]>,
    pub islegal: bool,
}

impl BaseStatus {
    pub fn from_response(response: &TurnResponse) -> Self {
        let Some(chara) = response.chara_info() else {
            return Self::default();
        };

        let commands = response.commands();
        let train_fail_rate = (!commands.is_empty()).then(|| train_fail_rates(commands));

        Self {
            turn: chara.turn,
            scenario_id: chara.scenario_id,
            card_id: chara.card_id,
            five_status: chara.five_status(),
            five_status_limit: chara.five_status_limit(),
            vital: chara.vital,
            max_vital: chara.max_vital,
            motivation: chara.motivation,
            skill_pt: chara.skill_point,
            fans: chara.fans,
            train_fail_rate,
            islegal: chara.turn > 0,
        }
    }
}

/// Slot (speed, stamina, power, guts, wisdom) of a training command.
pub fn training_slot(command_id: i32) -> Option<usize> {
    match command_id {
        101 | 601 => Some(0),
        105 | 602 => Some(1),
        102 | 603 => Some(2),
        103 | 604 => Some(3),
        106 | 605 => Some(4),
        _ => None,
    }
}

fn train_fail_rates(commands: &[CommandInfo]) -> [i32; 5] {
    let mut rates = [0; 5];
    for command in commands {
        if let Some(slot) = training_slot(command.command_id) {
            rates[slot] = command.failure_rate;
        }
    }
    rates
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_status_from_chara_info() {
        let payload = json!({
            "data": {
                "chara_info": {
                    "turn": 30, "scenario_id": 8, "card_id": 100101,
                    "speed": 400, "stamina": 300, "power": 350, "guts": 250, "wiz": 280,
                    "max_speed": 1200, "max_stamina": 1200, "max_power": 1200,
                    "max_guts": 1200, "max_wiz": 1200,
                    "vital": 55, "max_vital": 100, "motivation": 4,
                    "skill_point": 320, "fans": 12000
                },
                "home_info": { "command_info_array": [
                    { "command_id": 101, "failure_rate": 3 },
                    { "command_id": 105, "failure_rate": 5 },
                    { "command_id": 106, "failure_rate": 0 },
                    { "command_id": 301, "failure_rate": 99 }
                ]}
            }
        });
        let response = TurnResponse::from_value(&payload).unwrap();
        let base = BaseStatus::from_response(&response);

        assert_eq!(base.turn, 30);
        assert_eq!(base.five_status, [400, 300, 350, 250, 280]);
        assert_eq!(base.skill_pt, 320);
        assert_eq!(base.train_fail_rate, Some([3, 5, 0, 0, 0]));
        assert!(base.islegal);
    }

    #[test]
    fn test_missing_chara_info_is_not_legal() {
        let response = TurnResponse::from_value(&json!({ "data": {} })).unwrap();
        let base = BaseStatus::from_response(&response);
        assert!(!base.islegal);
        assert_eq!(base.train_fail_rate, None);
    }

    #[test]
    fn test_turn_zero_is_not_legal() {
        let response =
            TurnResponse::from_value(&json!({ "data": { "chara_info": { "turn": 0 } } })).unwrap();
        assert!(!BaseStatus::from_response(&response).islegal);
    }

    #[test]
    fn test_fail_rate_omitted_from_json_without_commands() {
        let response =
            TurnResponse::from_value(&json!({ "data": { "chara_info": { "turn": 5 } } })).unwrap();
        let json = serde_json::to_value(BaseStatus::from_response(&response)).unwrap();
        assert!(json.get("trainFailRate").is_none());
        assert_eq!(json["islegal"], true);
        assert_eq!(json["skillPt"], 0);
    }
}
