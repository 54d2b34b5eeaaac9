//! Scenario classification
//!
//! The server sends several near-duplicate pushes per turn. `classify` picks
//! the single "turn settled" push worth reporting and names the scenario it
//! belongs to.

use crate::protocol::TurnResponse;
use serde::Serialize;
use std::fmt;

/// Scenario id that the hot-springs snapshots are reported under, and which
/// is routed to hot springs regardless of the regular id table.
pub const ONSEN_VARIANT_SCENARIO_ID: i32 = 12;

/// Story scenarios with a status extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScenarioKind {
    LArc,
    Uaf,
    Cook,
    Legend,
    Onsen,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::LArc,
        ScenarioKind::Uaf,
        ScenarioKind::Cook,
        ScenarioKind::Legend,
        ScenarioKind::Onsen,
    ];

    /// Regular `chara_info.scenario_id` of the scenario.
    pub fn scenario_id(self) -> i32 {
        match self {
            ScenarioKind::LArc => 6,
            ScenarioKind::Uaf => 7,
            ScenarioKind::Cook => 8,
            ScenarioKind::Legend => 10,
            ScenarioKind::Onsen => 11,
        }
    }

    pub fn from_scenario_id(id: i32) -> Option<Self> {
        if id == ONSEN_VARIANT_SCENARIO_ID {
            return Some(ScenarioKind::Onsen);
        }
        Self::ALL.into_iter().find(|kind| kind.scenario_id() == id)
    }

    /// Whether `response` is running this scenario.
    pub fn is_active(self, response: &TurnResponse) -> bool {
        response.scenario_id().and_then(Self::from_scenario_id) == Some(self)
    }

    /// Snapshots of these scenarios go to the plugin's own data directory
    /// instead of the shared game-data directory.
    pub fn uses_plugin_dir(self) -> bool {
        matches!(self, ScenarioKind::Legend | ScenarioKind::Onsen)
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::LArc => "L'Arc",
            ScenarioKind::Uaf => "UAF",
            ScenarioKind::Cook => "Cook",
            ScenarioKind::Legend => "Legend",
            ScenarioKind::Onsen => "Onsen",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a push was not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    NoCharaInfo,
    NoCommandInfo,
    RaceReward,
    /// Character state 2 or 3 (racing / finished).
    InactiveState(i32),
    PendingEvents,
    RaceStart,
    UnsupportedScenario(i32),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::NoCharaInfo => write!(f, "no chara_info"),
            SkipReason::NoCommandInfo => write!(f, "no home command info"),
            SkipReason::RaceReward => write!(f, "race reward push"),
            SkipReason::InactiveState(state) => write!(f, "character state {}", state),
            SkipReason::PendingEvents => write!(f, "unchecked events pending"),
            SkipReason::RaceStart => write!(f, "race start push"),
            SkipReason::UnsupportedScenario(id) => write!(f, "unsupported scenario {}", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Report(ScenarioKind),
    Skip(SkipReason),
}

impl Classification {
    pub fn scenario(self) -> Option<ScenarioKind> {
        match self {
            Classification::Report(kind) => Some(kind),
            Classification::Skip(_) => None,
        }
    }
}

/// Decide whether `response` is a settled turn and which scenario handles it.
pub fn classify(response: &TurnResponse) -> Classification {
    let data = &response.data;

    let Some(chara_info) = data.chara_info.as_ref() else {
        return Classification::Skip(SkipReason::NoCharaInfo);
    };
    if data.home_info.as_ref().and_then(|h| h.command_info_array.as_ref()).is_none() {
        return Classification::Skip(SkipReason::NoCommandInfo);
    }
    if data.race_reward_info.is_some() {
        return Classification::Skip(SkipReason::RaceReward);
    }
    if matches!(chara_info.state, 2 | 3) {
        return Classification::Skip(SkipReason::InactiveState(chara_info.state));
    }
    if !response.unchecked_events().is_empty() {
        return Classification::Skip(SkipReason::PendingEvents);
    }
    if data.race_start_info.is_some() {
        return Classification::Skip(SkipReason::RaceStart);
    }

    match ScenarioKind::from_scenario_id(chara_info.scenario_id) {
        Some(kind) => Classification::Report(kind),
        None => Classification::Skip(SkipReason::UnsupportedScenario(chara_info.scenario_id)),
    }
}
