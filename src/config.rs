use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::entry_card::CardDisplayConfig;
use crate::ui::theme::{parse_hex_color, Theme, ThemeSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Start with the dark palette
    pub start_dark: bool,
    /// Preset used while the theme flag is light
    pub light_theme: String,
    /// Preset used while the theme flag is dark
    pub dark_theme: String,
    /// Hex override for the accent color of both palettes
    pub accent: Option<String>,
    /// "truecolor" or "256"
    pub color_mode: String,
    pub title: String,
    pub subtitle: String,
    pub star: String,
    pub unstar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Show edit/delete/star hints on the selected card
    pub show_actions: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            start_dark: false,
            light_theme: "light".to_string(),
            dark_theme: "dark".to_string(),
            accent: None,
            color_mode: "truecolor".to_string(),
            title: "MY DIARY".to_string(),
            subtitle: "by MMONEN KHIEN AGDORO".to_string(),
            star: "★".to_string(),
            unstar: "☆".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { show_actions: true }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        Self::load_from(Path::new(expanded.as_ref()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            tracing::info!("Config file not found, using defaults");
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Default config location under the XDG config dir
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("darkwall-diary")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if let Some(ref accent) = self.appearance.accent {
            parse_hex_color(accent)
                .with_context(|| format!("Invalid accent color {:?}", accent))?;
        }
        Ok(())
    }

    /// Build the light/dark palettes from presets and overrides
    pub fn resolve_themes(&self) -> ThemeSet {
        let appearance = &self.appearance;
        let mut set = ThemeSet {
            light: resolve_preset(&appearance.light_theme, Theme::light),
            dark: resolve_preset(&appearance.dark_theme, Theme::dark),
        };

        if let Some(accent) = appearance.accent.as_deref().and_then(|a| parse_hex_color(a).ok()) {
            set.light = set.light.with_accent(accent);
            set.dark = set.dark.with_accent(accent);
        }

        if appearance.color_mode == "256" {
            set.light = set.light.to_256_color();
            set.dark = set.dark.to_256_color();
        }

        set
    }

    pub fn card_display_config(&self) -> CardDisplayConfig {
        CardDisplayConfig {
            show_actions: self.behavior.show_actions,
        }
    }
}

fn resolve_preset(name: &str, fallback: fn() -> Theme) -> Theme {
    Theme::from_preset(name).unwrap_or_else(|| {
        tracing::warn!("Unknown theme preset {:?}, using built-in palette", name);
        fallback()
    })
}
