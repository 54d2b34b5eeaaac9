//! Snapshot writer
//!
//! Every send writes the same document twice: `thisTurn.json`, which the AI
//! polls, and `turn{N}.json` as a per-turn record. A failed attempt (usually
//! the AI holding the file open) is retried after a fixed delay.

pub mod sink;

pub use sink::{FsSink, SnapshotSink};

use crate::error::WriteError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub const LATEST_FILE_NAME: &str = "thisTurn.json";

pub fn turn_file_name(turn: i32) -> String {
    format!("turn{}.json", turn)
}

/// Bounded fixed-delay retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 10, delay_ms: 500 }
    }
}

impl RetryPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub attempts: u32,
    pub latest: PathBuf,
    pub per_turn: PathBuf,
}

/// Render `record` as indented JSON with every `null` member removed.
pub fn render<T: Serialize + ?Sized>(record: &T) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(record)?;
    strip_nulls(&mut value);
    serde_json::to_string_pretty(&value)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

pub struct SnapshotWriter<S = FsSink> {
    sink: S,
    policy: RetryPolicy,
}

impl SnapshotWriter<FsSink> {
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_sink(FsSink, policy)
    }
}

impl Default for SnapshotWriter<FsSink> {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl<S: SnapshotSink> SnapshotWriter<S> {
    pub fn with_sink(sink: S, policy: RetryPolicy) -> Self {
        Self { sink, policy }
    }

    /// Write `record` to `dir/thisTurn.json` and `dir/turn{turn}.json`.
    ///
    /// Blocks the caller between attempts. Serialization failures are not
    /// retried.
    pub fn write_snapshot<T: Serialize + ?Sized>(
        &self,
        record: &T,
        dir: &Path,
        turn: i32,
    ) -> Result<WriteOutcome, WriteError> {
        let contents = render(record)?;
        let latest = dir.join(LATEST_FILE_NAME);
        let per_turn = dir.join(turn_file_name(turn));
        let max_attempts = self.policy.max_attempts.max(1);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.try_write(dir, &latest, &per_turn, &contents) {
                Ok(()) => {
                    log::info!("Turn {} saved, waiting for AI ({})", turn, latest.display());
                    return Ok(WriteOutcome { attempts: attempt, latest, per_turn });
                }
                Err(e) if attempt < max_attempts => {
                    log::warn!(
                        "Write failed (attempt {}/{}): {}, retrying in {}ms",
                        attempt,
                        max_attempts,
                        e,
                        self.policy.delay_ms
                    );
                    thread::sleep(self.policy.delay());
                }
                Err(e) => {
                    log::error!("Writing {} failed: {}", latest.display(), e);
                    return Err(WriteError::RetriesExhausted {
                        path: latest,
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }

    fn try_write(
        &self,
        dir: &Path,
        latest: &Path,
        per_turn: &Path,
        contents: &str,
    ) -> std::io::Result<()> {
        self.sink.create_dir_all(dir)?;
        self.sink.write(latest, contents)?;
        self.sink.write(per_turn, contents)
    }
}
