use anyhow::Result;
use cardlayout_editor::{EditorEvent, EditorState, Outcome};
use serde::Deserialize;
use std::{collections::VecDeque, fs, path::Path};

#[derive(Debug, Deserialize)]
struct EventScriptFile {
    steps: Vec<EditorEvent>,
}

/// Recorded editor session replayer.
///
/// Scripts are a JSON list of editor events, applied in file order.
#[derive(Debug)]
pub struct EventScriptPlayer {
    pending: VecDeque<EditorEvent>,
    applied: u64,
}

impl EventScriptPlayer {
    /// Load an event script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load an event script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: EventScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("event script contains no steps");
        }

        for (index, event) in file.steps.iter().enumerate() {
            validate(index + 1, event)?;
        }

        Ok(Self {
            pending: file.steps.into(),
            applied: 0,
        })
    }

    /// Pop the next event with its 1-based step number.
    pub fn next_step(&mut self) -> Option<(u64, EditorEvent)> {
        let event = self.pending.pop_front()?;
        self.applied += 1;
        Some((self.applied, event))
    }

    /// Apply every remaining step to `editor`, reporting each outcome to `on_step`.
    pub fn replay<F>(&mut self, editor: &mut EditorState, mut on_step: F) -> Result<u64>
    where
        F: FnMut(u64, &EditorEvent, Outcome) -> Result<()>,
    {
        let start = self.applied;
        while let Some((step, event)) = self.next_step() {
            let outcome = editor.apply(&event);
            on_step(step, &event, outcome)?;
        }
        Ok(self.applied - start)
    }

    /// Whether every step has been applied.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

fn validate(step: usize, event: &EditorEvent) -> Result<()> {
    match event {
        EditorEvent::Measure { width, height }
            if ![width, height].iter().all(|v| v.is_finite() && **v >= 0.0) =>
        {
            anyhow::bail!("step {step}: measure dimensions must be finite and not negative")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlayout_core::{ElementId, Percent, SurfaceSize, TextSpec};

    #[test]
    fn event_script_rejects_empty_scripts() {
        let err = EventScriptPlayer::from_str(r#"{"steps": []}"#).unwrap_err();
        assert!(err.to_string().contains("no steps"), "unexpected error: {err:#}");
    }

    #[test]
    fn event_script_rejects_unknown_kinds() {
        let err = EventScriptPlayer::from_str(r#"{"steps": [{"kind": "teleport"}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn event_script_rejects_negative_measure() {
        let err = EventScriptPlayer::from_str(
            r#"{"steps": [{"kind": "measure", "width": -1, "height": 200}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("step 1"), "unexpected error: {err:#}");
    }

    #[test]
    fn event_script_rejects_non_finite_measure() {
        for (width, height) in [("1e39", "200"), ("360", "-0.5")] {
            let json = format!(
                r#"{{"steps": [{{"kind": "grow_logo"}}, {{"kind": "measure", "width": {width}, "height": {height}}}]}}"#
            );
            let err = EventScriptPlayer::from_str(&json).unwrap_err();
            assert!(err.to_string().contains("step 2"), "unexpected error: {err:#}");
        }
        assert!(EventScriptPlayer::from_str(
            r#"{"steps": [{"kind": "measure", "width": 0, "height": 0}]}"#
        )
        .is_ok());
    }

    #[test]
    fn event_script_allows_clearing_text() {
        let json = r#"{
            "steps": [
                {"kind": "update_text", "element": 1, "text": ""},
                {"kind": "add_text", "text": "   ", "position": {"x": 10, "y": 10}}
            ]
        }"#;
        let mut script = EventScriptPlayer::from_str(json).expect("empty text is a valid edit");
        let mut editor = EditorState::new(SurfaceSize::new(400.0, 200.0))
            .with_elements([TextSpec::new("Acme", Percent::new(50.0, 50.0))]);

        script
            .replay(&mut editor, |step, _, outcome| {
                anyhow::ensure!(!outcome.is_ignored(), "step {step} ignored");
                Ok(())
            })
            .expect("replay succeeds");

        assert_eq!(editor.element(ElementId(1)).unwrap().text, "");
        assert_eq!(editor.element(ElementId(2)).unwrap().text, "   ");
    }

    #[test]
    fn event_script_replays_in_order() {
        let json = r#"{
            "steps": [
                {"kind": "pointer_down", "element": 1, "x": 200, "y": 100},
                {"kind": "pointer_move", "x": 100, "y": 50},
                {"kind": "pointer_up"},
                {"kind": "pointer_up"},
                {"kind": "grow_logo"}
            ]
        }"#;
        let mut script = EventScriptPlayer::from_str(json).expect("script should parse");
        let mut editor = EditorState::new(SurfaceSize::new(400.0, 200.0))
            .with_elements([TextSpec::new("Acme", Percent::new(50.0, 50.0))]);

        let mut seen = Vec::new();
        let applied = script
            .replay(&mut editor, |step, event, outcome| {
                seen.push((step, event.kind(), outcome.is_ignored()));
                Ok(())
            })
            .expect("replay succeeds");

        assert_eq!(applied, 5);
        assert!(script.is_finished());
        assert_eq!(
            seen,
            vec![
                (1, "pointer_down", false),
                (2, "pointer_move", false),
                (3, "pointer_up", false),
                (4, "pointer_up", true),
                (5, "grow_logo", false),
            ]
        );
        assert_eq!(
            editor.element(ElementId(1)).unwrap().position(),
            Percent::new(25.0, 25.0)
        );
        assert_eq!(editor.logo().size(), 90);
    }

    #[test]
    fn bundled_demo_script_replays_cleanly() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/business_card_session.json");
        let mut script = EventScriptPlayer::from_path(&path).expect("demo script should parse");
        let mut editor = cardlayout_editor::business_card(cardlayout_editor::DEFAULT_SURFACE);

        script
            .replay(&mut editor, |step, event, outcome| {
                anyhow::ensure!(!outcome.is_ignored(), "step {step} ({}) ignored", event.kind());
                Ok(())
            })
            .expect("every demo step applies");

        assert_eq!(editor.elements().len(), 6);
        assert_eq!(editor.elements()[0].text, "Acme Studio");
        assert_eq!(editor.logo().size(), 60);
    }
}
