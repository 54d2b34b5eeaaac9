//! Replay CLI
//!
//! Captured server pushes → status snapshots, without the analyzer host

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use gs_core::plugin::{PLUGIN_AUTHOR, PLUGIN_NAME};
#[cfg(feature = "cli")]
use gs_core::{EventEffects, ExtractContext, PluginConfig, SendGameStatusPlugin, SnapshotWriter};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "gs-replay")]
#[command(about = "Replay captured game responses through the status send plugin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run payloads through both analyzers and write snapshots
    Send {
        /// Payload JSON file, or a directory of them
        #[arg(long)]
        input: PathBuf,

        /// Plugin config JSON (defaults to GSS_CONFIG_PATH, falling back to built-in defaults)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Event database JSON, overrides the config's events_path
        #[arg(long)]
        events: Option<PathBuf>,

        /// Vitality already spent on digging
        #[arg(long, default_value_t = 0)]
        vital_cost: i32,

        /// Print the summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print how each payload is classified, without writing anything
    Classify {
        /// Payload JSON file, or a directory of them
        #[arg(long)]
        input: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Send { input, config, events, vital_cost, json } => {
            let mut config = match config {
                Some(path) => PluginConfig::load(&path)?,
                None => gs_core::config().clone(),
            };
            if events.is_some() {
                config.events_path = events;
            }
            let effects = match config.events_path.as_deref() {
                Some(path) => EventEffects::load(path)?,
                None => EventEffects::default(),
            };

            let writer = SnapshotWriter::new(config.retry);
            let plugin = SendGameStatusPlugin::with_parts(config, writer, effects);

            println!(
                "🔁 Replaying payloads ({} v{} by {})",
                PLUGIN_NAME,
                gs_core::VERSION,
                PLUGIN_AUTHOR
            );
            println!("   Input:       {}", input.display());
            println!("   Game data:   {}", plugin.config().game_data_dir.display());
            println!("   Plugin data: {}", plugin.config().plugin_data_dir.display());
            println!("   Known events: {}", plugin.events().len());

            let files = gs_replay::collect_inputs(&input)?;
            let summary =
                gs_replay::replay(&plugin, &files, &ExtractContext::new(vital_cost));

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("\n✅ Replay finished");
                println!("   Payloads:    {}", summary.payloads);
                println!("   Turn sends:  {}", summary.turn_sends);
                println!("   Event sends: {}", summary.event_sends);
                println!("   Unreadable:  {}", summary.unreadable);
            }
        }

        Commands::Classify { input } => {
            for path in gs_replay::collect_inputs(&input)? {
                let line = gs_replay::describe(&path)
                    .with_context(|| format!("Failed to classify {}", path.display()))?;
                println!("{}: {}", path.display(), line);
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("gs-replay CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
