//! cardlayout - business-card layout editor
//!
//! Headless driver: loads an editor config, replays a recorded event script
//! against it and writes the resulting layout as JSON.

mod config;
mod event_script;

use anyhow::{Context, Result};
use cardlayout_testkit::{EventRecord, JsonlSink};
use config::EditorConfig;
use event_script::EventScriptPlayer;
use std::{env, fs, path::PathBuf};
use tracing::info;

const USAGE: &str = "\
Usage: cardlayout [OPTIONS]

Options:
  --config <PATH>        Editor config (TOML). Default: config/editor.toml
  --script <PATH>        Event script (JSON) to replay
  --out <PATH>           Write the layout JSON here instead of stdout
  --event-log <PATH>     Write one JSONL record per replayed step
  --write-config <PATH>  Save the effective config as TOML
  -h, --help             Print this help";

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting cardlayout v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = match cli.config.as_deref() {
        Some(path) => EditorConfig::load_from_path(path),
        None => EditorConfig::load(),
    };
    if let Some(path) = cli.write_config.as_deref() {
        config
            .save_to_path(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!(path = %path.display(), "config written");
    }

    let mut editor = config.build_editor();

    if let Some(script_path) = cli.script.as_deref() {
        let mut script = EventScriptPlayer::from_path(script_path)
            .with_context(|| format!("failed to load event script {}", script_path.display()))?;
        let mut sink = match cli.event_log.as_deref() {
            Some(path) => Some(
                JsonlSink::create(path)
                    .with_context(|| format!("failed to create event log {}", path.display()))?,
            ),
            None => None,
        };

        let applied = script.replay(&mut editor, |step, event, outcome| {
            tracing::debug!(step, kind = event.kind(), %outcome, "event applied");
            if let Some(sink) = sink.as_mut() {
                sink.write(&EventRecord {
                    step,
                    kind: event.kind(),
                    outcome: &outcome.to_string(),
                })?;
            }
            Ok(())
        })?;
        info!(applied, finished = script.is_finished(), "event script finished");
    } else if cli.event_log.is_some() {
        tracing::warn!("--event-log has no effect without --script");
    }

    let layout = serde_json::to_string_pretty(&editor.snapshot())?;
    match cli.out.as_deref() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{layout}\n"))
                .with_context(|| format!("failed to write layout to {}", path.display()))?;
            info!(path = %path.display(), "layout written");
        }
        None => println!("{layout}"),
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    help: bool,
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    out: Option<PathBuf>,
    event_log: Option<PathBuf>,
    write_config: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "-h" | "--help" => {
                    opts.help = true;
                    continue;
                }
                "--config" => &mut opts.config,
                "--script" => &mut opts.script,
                "--out" => &mut opts.out,
                "--event-log" => &mut opts.event_log,
                "--write-config" => &mut opts.write_config,
                other => {
                    tracing::warn!(arg = %other, "ignoring unknown argument");
                    continue;
                }
            };
            match args.next() {
                Some(path) => *slot = Some(PathBuf::from(path)),
                None => tracing::error!("{arg} requires a file path"),
            }
        }

        opts
    }
}
