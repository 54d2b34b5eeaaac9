//! Replay Library
//!
//! Feeds captured server pushes (one JSON document per file) through the
//! plugin analyzers, the same way the host does on a live session.

use anyhow::{Context, Result};
use gs_core::{classify, Classification, ExtractContext, SendGameStatusPlugin, TurnResponse};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Counts from one replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub payloads: usize,
    pub turn_sends: usize,
    pub event_sends: usize,
    pub unreadable: usize,
}

/// Payload files under `input`: the file itself, or the `.json` files of a
/// directory in file-name order.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let entries = fs::read_dir(input)
        .with_context(|| format!("Failed to read input directory: {}", input.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn load_payload(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse payload: {}", path.display()))
}

/// Run both analyzers over every file, turn analyzer first. Unreadable files
/// are counted and skipped.
pub fn replay<S: gs_core::writer::SnapshotSink>(
    plugin: &SendGameStatusPlugin<S>,
    files: &[PathBuf],
    ctx: &ExtractContext,
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    for path in files {
        summary.payloads += 1;
        let payload = match load_payload(path) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("{:#}", e);
                summary.unreadable += 1;
                continue;
            }
        };

        if plugin.analyze_turn(&payload, ctx).is_some() {
            summary.turn_sends += 1;
        }
        if plugin.analyze_event(&payload, ctx).is_some() {
            summary.event_sends += 1;
        }
    }
    summary
}

/// One-line classification of a payload file.
pub fn describe(path: &Path) -> Result<String> {
    let payload = load_payload(path)?;
    let Some(response) = TurnResponse::from_value(&payload) else {
        return Ok("not a turn response".to_string());
    };
    let turn = response.turn().map_or_else(|| "-".to_string(), |t| t.to_string());
    Ok(match classify(&response) {
        Classification::Report(kind) => format!("turn {}: report {}", turn, kind),
        Classification::Skip(reason) => format!("turn {}: skip ({})", turn, reason),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::writer::RetryPolicy;
    use gs_core::{EventEffects, PluginConfig, SnapshotWriter};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_payload(dir: &Path, name: &str, payload: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string(payload).unwrap()).unwrap();
        path
    }

    fn onsen_turn(turn: i32) -> Value {
        json!({
            "data": {
                "chara_info": { "turn": turn, "scenario_id": 11, "state": 1 },
                "home_info": { "command_info_array": [] },
                "onsen_data_set": { "dug_onsen_id_array": [1] }
            }
        })
    }

    #[test]
    fn test_collect_inputs_sorted_json_only() {
        let temp_dir = TempDir::new().unwrap();
        write_payload(temp_dir.path(), "b.json", &json!({}));
        write_payload(temp_dir.path(), "a.json", &json!({}));
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let files = collect_inputs(temp_dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_owned()).collect();
        assert_eq!(names, vec!["a.json", "b.json"]);

        let single = collect_inputs(&files[0]).unwrap();
        assert_eq!(single, vec![files[0].clone()]);
    }

    #[test]
    fn test_replay_counts_sends() {
        let inputs = TempDir::new().unwrap();
        let outputs = TempDir::new().unwrap();

        write_payload(inputs.path(), "001.json", &onsen_turn(1));
        let mut racing = onsen_turn(2);
        racing["data"]["chara_info"]["state"] = json!(3);
        write_payload(inputs.path(), "002.json", &racing);
        let mut event = onsen_turn(3);
        event["data"]["unchecked_event_array"] = json!([{
            "story_id": 77,
            "event_contents_info": { "choice_array": [{}, {}] }
        }]);
        write_payload(inputs.path(), "003.json", &event);
        fs::write(inputs.path().join("004.json"), "{ broken").unwrap();

        let config = PluginConfig {
            game_data_dir: outputs.path().join("game"),
            plugin_data_dir: outputs.path().join("plugin"),
            retry: RetryPolicy { max_attempts: 2, delay_ms: 1 },
            events_path: None,
        };
        let writer = SnapshotWriter::new(config.retry);
        let effects: EventEffects = [77].into_iter().collect();
        let plugin = SendGameStatusPlugin::with_parts(config, writer, effects);

        let files = collect_inputs(inputs.path()).unwrap();
        let summary = replay(&plugin, &files, &ExtractContext::default());

        assert_eq!(
            summary,
            ReplaySummary { payloads: 4, turn_sends: 1, event_sends: 1, unreadable: 1 }
        );
        assert!(outputs.path().join("plugin").join("turn1.json").exists());
        assert!(outputs.path().join("plugin").join("turn3.json").exists());
        assert!(!outputs.path().join("plugin").join("turn2.json").exists());
    }

    #[test]
    fn test_describe() {
        let temp_dir = TempDir::new().unwrap();
        let settled = write_payload(temp_dir.path(), "a.json", &onsen_turn(4));
        let other = write_payload(temp_dir.path(), "b.json", &json!({ "response_code": 1 }));

        assert_eq!(describe(&settled).unwrap(), "turn 4: report Onsen");
        assert_eq!(describe(&other).unwrap(), "not a turn response");
    }
}
