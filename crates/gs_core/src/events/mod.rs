//! Choice events with known effects
//!
//! Event turns are filtered out by the classifier, but an event that asks the
//! player to pick between choices is worth a snapshot when its effects are in
//! the event database.

use crate::error::ConfigError;
use crate::protocol::{TurnResponse, UncheckedEvent};
use crate::scenario::ScenarioKind;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Minimum number of choices for an event to count as a decision.
pub const MIN_DECISION_CHOICES: usize = 2;

/// Story ids whose choice effects are known.
#[derive(Debug, Clone, Default)]
pub struct EventEffects {
    story_ids: HashSet<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventDatabase {
    /// `{"830137001": {...}, ...}`
    Keyed(BTreeMap<String, Value>),
    /// `[{"story_id": 830137001, ...}, ...]`
    Listed(Vec<EventEntry>),
}

#[derive(Deserialize)]
struct EventEntry {
    story_id: i64,
}

impl EventEffects {
    pub fn contains(&self, story_id: i64) -> bool {
        self.story_ids.contains(&story_id)
    }

    pub fn len(&self) -> usize {
        self.story_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.story_ids.is_empty()
    }

    /// Parse an event database document. Keys that are not story ids are
    /// skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let story_ids = match serde_json::from_str::<EventDatabase>(json)? {
            EventDatabase::Keyed(map) => map.keys().filter_map(|k| k.parse().ok()).collect(),
            EventDatabase::Listed(entries) => entries.into_iter().map(|e| e.story_id).collect(),
        };
        Ok(Self { story_ids })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let effects = Self::from_json(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        log::debug!("Loaded {} known events from {}", effects.len(), path.display());
        Ok(effects)
    }
}

impl FromIterator<i64> for EventEffects {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self { story_ids: iter.into_iter().collect() }
    }
}

/// Whether `event` is a multi-choice event with recorded effects.
pub fn is_known_decision(event: &UncheckedEvent, effects: &EventEffects) -> bool {
    event.choice_count() >= MIN_DECISION_CHOICES && effects.contains(event.story_id)
}

/// Scenario to send for the pending events of `response`, if any qualifies.
///
/// Only hot springs reports event turns. Several qualifying events in one push
/// still produce a single send.
pub fn scan_events(response: &TurnResponse, effects: &EventEffects) -> Option<ScenarioKind> {
    let events = response.unchecked_events();
    if events.is_empty() {
        return None;
    }

    // Covers the variant scenario id as well.
    if !ScenarioKind::Onsen.is_active(response) {
        return None;
    }

    let qualifying = events.iter().filter(|e| is_known_decision(e, effects)).count();
    if qualifying == 0 {
        return None;
    }
    log::debug!("{} choice event(s) with known effects pending", qualifying);
    Some(ScenarioKind::Onsen)
}
