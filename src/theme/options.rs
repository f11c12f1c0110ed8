use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::theme_log;
use log::Level::Debug;

/// Caller-facing theme configuration.
///
/// Fields stay as raw strings so a config file or CLI flag is validated in
/// one place, when the theme is composed.
///
/// Example YAML:
///
/// palette: cat_bright
/// context: presentation
/// grid: false
/// minimal: true
/// font_scale: 1.2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOptions {
    /// Color cycle; falls back to a style-appropriate default.
    pub palette: Option<String>,
    /// One of print, notebook, presentation. `None` means notebook.
    pub context: Option<String>,
    pub grid: bool,
    /// Drop grid, top/right spines and the legend border.
    pub minimal: bool,
    pub font_scale: f64,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            palette: None,
            context: None,
            grid: true,
            minimal: false,
            font_scale: 1.0,
        }
    }
}

impl ThemeOptions {
    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = Some(palette.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // an empty document is a null, not an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        theme_log!(Debug, "loading theme options from {}", path.display());
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
