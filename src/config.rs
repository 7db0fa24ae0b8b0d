use anyhow::Result;
use cardlayout_core::{LogoPlacement, LogoPreset, SurfaceSize, TextSpec, LOGO_SIZE_STEP};
use cardlayout_editor::{business_card_template, EditorState, DEFAULT_SURFACE};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/editor.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Card size in pixels.
    pub surface: SurfaceConfig,
    /// Starting logo preset, size and grow/shrink step.
    pub logo: LogoConfig,
    /// Starting text elements, in draw order. Defaults to the stock business card.
    pub elements: Vec<TextSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Card width in pixels. Zero leaves the card unmeasured until a `measure` event.
    pub width: f32,
    /// Card height in pixels.
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Anchor preset, e.g. `top-left`.
    pub placement: LogoPreset,
    /// Square side in pixels, clamped to 30..=170.
    pub size: u32,
    /// Increment for the grow/shrink buttons.
    pub step: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            logo: LogoConfig::default(),
            elements: business_card_template(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE.width,
            height: DEFAULT_SURFACE.height,
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        let logo = LogoPlacement::default();
        Self {
            placement: logo.preset,
            size: logo.size(),
            step: LOGO_SIZE_STEP,
        }
    }
}

impl EditorConfig {
    /// Load editor configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<EditorConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    EditorConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                EditorConfig::default()
            }
        }
    }

    /// Save editor configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Build an editor in the configured starting state.
    pub fn build_editor(&self) -> EditorState {
        let surface = SurfaceSize::new(self.surface.width, self.surface.height);
        if !surface.is_measured() {
            warn!(
                width = surface.width,
                height = surface.height,
                "Configured surface has no usable size; drags wait for a measure event"
            );
        }
        let mut logo_step = self.logo.step;
        if logo_step == 0 {
            warn!("logo.step must be positive; using {LOGO_SIZE_STEP}");
            logo_step = LOGO_SIZE_STEP;
        }
        EditorState::new(surface)
            .with_logo(LogoPlacement::new(self.logo.placement, self.logo.size))
            .with_logo_step(logo_step)
            .with_elements(self.elements.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlayout_core::{FontWeight, Percent, LOGO_SIZE_MAX};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("cardlayout_{name}_{timestamp}.toml"))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = EditorConfig::load_from_path(Path::new("/nonexistent/cardlayout/editor.toml"));
        assert_eq!(cfg, EditorConfig::default());
        assert_eq!(cfg.elements.len(), 5);
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let path = temp_path("invalid");
        fs::write(&path, "surface = [not toml").unwrap();
        assert_eq!(EditorConfig::load_from_path(&path), EditorConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg: EditorConfig = toml::from_str(
            r##"
            [logo]
            placement = "top-right"
            size = 500

            [[elements]]
            text = "Acme"
            position = { x = 20.0, y = 30.0 }
            font_weight = "bold"
            "##,
        )
        .expect("config parses");

        assert_eq!(cfg.surface, SurfaceConfig::default());
        assert_eq!(cfg.logo.step, LOGO_SIZE_STEP);

        let editor = cfg.build_editor();
        assert_eq!(editor.logo().preset, LogoPreset::TopRight);
        assert_eq!(editor.logo().size(), LOGO_SIZE_MAX);
        assert_eq!(editor.elements().len(), 1);
        assert_eq!(editor.elements()[0].position(), Percent::new(20.0, 30.0));
        assert_eq!(editor.elements()[0].font_weight, FontWeight::Bold);
    }

    #[test]
    fn unknown_placement_is_rejected_by_parser() {
        let parsed = toml::from_str::<EditorConfig>("[logo]\nplacement = \"bottom\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn save_then_load_preserves_config() {
        let path = temp_path("roundtrip");
        let mut cfg = EditorConfig::default();
        cfg.logo.placement = LogoPreset::Center;
        cfg.logo.step = 20;
        cfg.save_to_path(&path).expect("config saves");

        assert_eq!(EditorConfig::load_from_path(&path), cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn zero_step_is_replaced() {
        let mut cfg = EditorConfig::default();
        cfg.logo.step = 0;
        assert_eq!(cfg.build_editor().logo_step(), LOGO_SIZE_STEP);
    }

    #[test]
    fn bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let contents = fs::read_to_string(path).expect("bundled config exists");
        let cfg: EditorConfig = toml::from_str(&contents).expect("bundled config parses");
        assert_eq!(cfg, EditorConfig::default());
    }
}
