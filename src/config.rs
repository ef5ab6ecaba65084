//! Editor configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult, DEFAULT_PROXIMITY};

/// Complete editor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph store configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Snap threshold for locating an existing vertex (coordinate units)
    pub proximity: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            proximity: DEFAULT_PROXIMITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width
    pub width: u32,

    /// Canvas height
    pub height: u32,

    /// Radius of a drawn vertex
    pub vertex_radius: f64,

    /// Stroke width of a drawn edge
    pub line_width: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            vertex_radius: 3.0,
            line_width: 2.0,
        }
    }
}

impl Config {
    /// Load from TOML file
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pathgraph")
            .join("config.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check every value is in range.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.graph.proximity.is_finite() || self.graph.proximity < 0.0 {
            return Err(GraphError::InvalidProximity(self.graph.proximity));
        }
        let r = &self.render;
        if r.width == 0 || r.height == 0 {
            return Err(GraphError::Config(format!(
                "canvas size must be positive, got {}x{}",
                r.width, r.height
            )));
        }
        if !(r.vertex_radius > 0.0 && r.line_width > 0.0) {
            return Err(GraphError::Config(
                "vertex_radius and line_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
