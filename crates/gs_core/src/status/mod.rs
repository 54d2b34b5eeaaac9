//! Per-scenario status records
//!
//! Every record is a complete snapshot built from one response. Nothing is
//! carried over from earlier turns except the injected [`ExtractContext`].

pub mod base;
pub mod cook;
pub mod larc;
pub mod legend;
pub mod onsen;
pub mod uaf;

pub use base::BaseStatus;
pub use cook::{CookSnapshot, CookStatus};
pub use larc::{LArcSnapshot, LArcStatus};
pub use legend::{LegendSnapshot, LegendStatus};
pub use onsen::{BathingStatus, MaterialType, OnsenSnapshot, OnsenStatus, ONSEN_SITE_COUNT};
pub use uaf::{UafSnapshot, UafStatus};

use crate::error::Result;
use crate::protocol::TurnResponse;
use crate::scenario::ScenarioKind;
use serde::Serialize;

/// Values owned by collaborators outside this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractContext {
    /// Vitality spent on digging so far, tallied by the event logger.
    pub dig_vital_cost: i32,
}

impl ExtractContext {
    pub fn new(dig_vital_cost: i32) -> Self {
        Self { dig_vital_cost }
    }
}

/// Snapshot handed to the writer. Serializes as the inner record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameStatus {
    LArc(LArcSnapshot),
    Uaf(UafSnapshot),
    Cook(CookSnapshot),
    Legend(LegendSnapshot),
    Onsen(OnsenSnapshot),
}

impl GameStatus {
    /// Build the record for `kind` from `response`.
    pub fn extract(
        kind: ScenarioKind,
        response: &TurnResponse,
        ctx: &ExtractContext,
    ) -> Result<Self> {
        let status = match kind {
            ScenarioKind::LArc => GameStatus::LArc(LArcSnapshot::from_response(response)),
            ScenarioKind::Uaf => GameStatus::Uaf(UafSnapshot::from_response(response)),
            ScenarioKind::Cook => GameStatus::Cook(CookSnapshot::from_response(response)),
            ScenarioKind::Legend => GameStatus::Legend(LegendSnapshot::from_response(response)),
            ScenarioKind::Onsen => GameStatus::Onsen(OnsenSnapshot::from_response(response, ctx)?),
        };
        Ok(status)
    }

    pub fn kind(&self) -> ScenarioKind {
        match self {
            GameStatus::LArc(_) => ScenarioKind::LArc,
            GameStatus::Uaf(_) => ScenarioKind::Uaf,
            GameStatus::Cook(_) => ScenarioKind::Cook,
            GameStatus::Legend(_) => ScenarioKind::Legend,
            GameStatus::Onsen(_) => ScenarioKind::Onsen,
        }
    }

    pub fn base(&self) -> &BaseStatus {
        match self {
            GameStatus::LArc(s) => &s.base_game,
            GameStatus::Uaf(s) => &s.base_game,
            GameStatus::Cook(s) => &s.base_game,
            GameStatus::Legend(s) => &s.base_game,
            GameStatus::Onsen(s) => &s.base_game,
        }
    }

    pub fn turn(&self) -> i32 {
        self.base().turn
    }

    pub fn is_legal(&self) -> bool {
        self.base().islegal
    }
}
