//! # gs_core - Scenario status snapshots for the training AI
//!
//! Reads decoded server pushes of the training career mode, picks the ones
//! that mark a settled turn, extracts a scenario-specific status record and
//! writes it where the external AI process polls for it.
//!
//! ## Flow
//! - [`scenario::classify`] filters duplicate, race and event pushes
//! - [`status::GameStatus::extract`] builds the record for the scenario
//! - [`writer::SnapshotWriter`] writes `thisTurn.json` and `turn{N}.json`
//! - [`events::scan_events`] lets known choice events through on their own path

pub mod config;
pub mod error;
pub mod events;
pub mod plugin;
pub mod protocol;
pub mod scenario;
pub mod status;
pub mod writer;

pub use config::{config, PluginConfig};
pub use error::{ConfigError, ExtractError, WriteError};
pub use events::{scan_events, EventEffects};
pub use plugin::{dispatch, Analyzer, SendGameStatusPlugin};
pub use protocol::TurnResponse;
pub use scenario::{classify, Classification, ScenarioKind, SkipReason};
pub use status::{ExtractContext, GameStatus};
pub use writer::{RetryPolicy, SnapshotWriter, WriteOutcome};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
