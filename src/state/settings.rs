/// Viewer configuration
///
/// Read once at startup from the user's config directory:
/// - Linux: ~/.config/svg-icon-viewer/config.json
/// - macOS: ~/Library/Application Support/svg-icon-viewer/config.json
/// - Windows: %APPDATA%\svg-icon-viewer\config.json
///
/// Every field is optional; a missing or broken file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::snippet::SnippetStyle;

/// How icons are laid out inside an expanded folder
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// User-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Virtual mount segment used in asset URLs and folder labels
    pub mount_segment: String,
    /// Base class shared by every generated icon element
    pub base_class: String,
    /// File-name keyword that marks icons needing a dark preview backdrop
    pub dark_preview_keyword: String,
    /// Layout used when the app starts
    pub default_view: ViewMode,
    /// Syntax theme for snippet views (e.g. "base16-ocean", "solarized-dark")
    pub highlight_theme: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mount_segment: "assets".to_string(),
            base_class: "icon".to_string(),
            dark_preview_keyword: "white".to_string(),
            default_view: ViewMode::Grid,
            highlight_theme: "base16-ocean".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load the config from its default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("⚠️  Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Get the path where the config file is expected
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("svg-icon-viewer");
        path.push("config.json");
        Some(path)
    }

    /// Load config from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Snippet settings derived from this config
    pub fn snippet_style(&self) -> SnippetStyle {
        SnippetStyle {
            base_class: self.base_class.clone(),
            mount_segment: self.mount_segment.clone(),
        }
    }

    /// Resolve the configured highlight theme, defaulting to Base16 Ocean
    pub fn highlighter_theme(&self) -> iced::highlighter::Theme {
        use iced::highlighter::Theme;

        match self.highlight_theme.to_lowercase().as_str() {
            "solarized-dark" => Theme::SolarizedDark,
            "base16-mocha" => Theme::Base16Mocha,
            "base16-eighties" => Theme::Base16Eighties,
            "inspired-github" => Theme::InspiredGitHub,
            _ => Theme::Base16Ocean,
        }
    }
}
