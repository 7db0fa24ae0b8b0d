//! Step-by-step snapshot harness for scripted editor sessions.
//!
//! A step test feeds a fixed list of inputs to some state, snapshotting it
//! before the first input and after each one. The resulting report is
//! compared against a golden JSON file on disk (or rewritten when
//! `CARDLAYOUT_UPDATE_SNAPSHOTS=1` is set).

use crate::snapshot::assert_json_snapshot;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a step snapshot test.
#[derive(Debug, Clone)]
pub struct StepSnapshotConfig {
    /// Human-readable name (written into the report).
    pub name: String,
    /// Path to the golden JSON file.
    pub snapshot_path: PathBuf,
}

/// Snapshot captured after a given step.
#[derive(Debug, Clone, Serialize)]
pub struct StepFrame<S> {
    /// Step number; 0 is the initial state.
    pub step: u64,
    /// Kind label of the input applied at this step (`"initial"` for step 0).
    pub input: String,
    /// Snapshot payload.
    pub snapshot: S,
}

#[derive(Debug, Clone, Serialize)]
struct StepReport<S> {
    name: String,
    frames: Vec<StepFrame<S>>,
}

/// Run a step snapshot test and assert (or update) the golden at
/// `config.snapshot_path`.
///
/// The report holds `inputs.len() + 1` frames. `label` names each input in
/// the report, `step` applies it and `snapshot` captures the state.
pub fn run_step_snapshot<State, Input, Snapshot, LabelFn, StepFn, SnapFn>(
    config: StepSnapshotConfig,
    mut state: State,
    inputs: &[Input],
    mut label: LabelFn,
    mut step: StepFn,
    mut snapshot: SnapFn,
) -> Result<()>
where
    Snapshot: Serialize,
    LabelFn: FnMut(&Input) -> String,
    StepFn: FnMut(&Input, &mut State),
    SnapFn: FnMut(&State) -> Snapshot,
{
    let mut frames = Vec::with_capacity(inputs.len() + 1);
    frames.push(StepFrame {
        step: 0,
        input: "initial".to_string(),
        snapshot: snapshot(&state),
    });

    for (index, input) in inputs.iter().enumerate() {
        step(input, &mut state);
        frames.push(StepFrame {
            step: index as u64 + 1,
            input: label(input),
            snapshot: snapshot(&state),
        });
    }

    let report = StepReport {
        name: config.name,
        frames,
    };
    assert_json_snapshot(config.snapshot_path, &report)
}
