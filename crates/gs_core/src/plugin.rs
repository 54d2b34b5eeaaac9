//! Analyzers registered with the response-analyzer host.
//!
//! The host hands every decoded server push to each registered analyzer in
//! priority order. Nothing here returns an error to the host: failures are
//! logged and the push is dropped.

use crate::config::PluginConfig;
use crate::events::{scan_events, EventEffects};
use crate::protocol::TurnResponse;
use crate::scenario::{classify, Classification, ScenarioKind};
use crate::status::{ExtractContext, GameStatus};
use crate::writer::{FsSink, SnapshotSink, SnapshotWriter, WriteOutcome};
use serde_json::Value;
use std::cmp::Reverse;

pub const PLUGIN_NAME: &str = "SendGameStatusPlugin";
pub const PLUGIN_AUTHOR: &str = "UmaAi Team";

pub const EVENT_ANALYZER_PRIORITY: i32 = 0;
pub const TURN_ANALYZER_PRIORITY: i32 = 2;

/// A callback the host invokes once per received payload.
pub trait Analyzer {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Higher priorities run first.
    fn priority(&self) -> i32 {
        0
    }

    fn analyze(&self, payload: &Value, ctx: &ExtractContext);
}

/// Run `analyzers` over one payload, highest priority first. Ties keep their
/// registration order.
pub fn dispatch(analyzers: &[&dyn Analyzer], payload: &Value, ctx: &ExtractContext) {
    let mut ordered = analyzers.to_vec();
    ordered.sort_by_key(|a| Reverse(a.priority()));
    for analyzer in ordered {
        log::trace!("Running analyzer {} ({})", analyzer.name(), analyzer.description());
        analyzer.analyze(payload, ctx);
    }
}

/// Sends scenario status snapshots to the AI.
pub struct SendGameStatusPlugin<S = FsSink> {
    config: PluginConfig,
    writer: SnapshotWriter<S>,
    events: EventEffects,
}

impl SendGameStatusPlugin<FsSink> {
    /// Build from `config`, loading the event database it points to. A broken
    /// database disables event sends instead of failing.
    pub fn new(config: PluginConfig) -> Self {
        let events = match config.events_path.as_deref() {
            Some(path) => EventEffects::load(path).unwrap_or_else(|e| {
                log::warn!("Event database unavailable, event sends disabled: {}", e);
                EventEffects::default()
            }),
            None => EventEffects::default(),
        };
        let writer = SnapshotWriter::new(config.retry);
        Self::with_parts(config, writer, events)
    }
}

impl<S: SnapshotSink> SendGameStatusPlugin<S> {
    pub fn with_parts(config: PluginConfig, writer: SnapshotWriter<S>, events: EventEffects) -> Self {
        Self { config, writer, events }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn events(&self) -> &EventEffects {
        &self.events
    }

    /// Main path: report a settled turn.
    pub fn analyze_turn(&self, payload: &Value, ctx: &ExtractContext) -> Option<WriteOutcome> {
        let response = TurnResponse::from_value(payload)?;
        match classify(&response) {
            Classification::Report(kind) => self.send(kind, &response, ctx),
            Classification::Skip(reason) => {
                log::trace!("Turn push skipped: {}", reason);
                None
            }
        }
    }

    /// Event path: report a pending choice event whose effects are known.
    pub fn analyze_event(&self, payload: &Value, ctx: &ExtractContext) -> Option<WriteOutcome> {
        let response = TurnResponse::from_value(payload)?;
        let kind = scan_events(&response, &self.events)?;
        self.send(kind, &response, ctx)
    }

    /// Extract the status for `kind` and write it out.
    pub fn send(
        &self,
        kind: ScenarioKind,
        response: &TurnResponse,
        ctx: &ExtractContext,
    ) -> Option<WriteOutcome> {
        let status = match GameStatus::extract(kind, response, ctx) {
            Ok(status) => status,
            Err(e) => {
                log::error!("Failed to send {} status to AI: {}", kind, e);
                return None;
            }
        };
        if !status.is_legal() {
            log::debug!("{} status for turn {} is not legal, not sent", kind, status.turn());
            return None;
        }

        let dir = self.config.output_dir(kind);
        match self.writer.write_snapshot(&status, dir, status.turn()) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log::error!("Failed to send {} status to AI: {}", kind, e);
                None
            }
        }
    }

    pub fn turn_analyzer(&self) -> TurnAnalyzer<'_, S> {
        TurnAnalyzer { plugin: self }
    }

    pub fn event_analyzer(&self) -> EventAnalyzer<'_, S> {
        EventAnalyzer { plugin: self }
    }
}

pub struct TurnAnalyzer<'a, S> {
    plugin: &'a SendGameStatusPlugin<S>,
}

impl<S: SnapshotSink> Analyzer for TurnAnalyzer<'_, S> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn description(&self) -> &str {
        "Send the settled turn status to the AI"
    }

    fn priority(&self) -> i32 {
        TURN_ANALYZER_PRIORITY
    }

    fn analyze(&self, payload: &Value, ctx: &ExtractContext) {
        self.plugin.analyze_turn(payload, ctx);
    }
}

pub struct EventAnalyzer<'a, S> {
    plugin: &'a SendGameStatusPlugin<S>,
}

impl<S: SnapshotSink> Analyzer for EventAnalyzer<'_, S> {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn description(&self) -> &str {
        "Send pending choice events with known effects to the AI"
    }

    fn priority(&self) -> i32 {
        EVENT_ANALYZER_PRIORITY
    }

    fn analyze(&self, payload: &Value, ctx: &ExtractContext) {
        self.plugin.analyze_event(payload, ctx);
    }
}
