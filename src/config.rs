use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::style::{
    DEFAULT_GRID_COLOR, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH, DEFAULT_POINT_COLOR,
    DEFAULT_POINT_RADIUS, StyleConfig,
};
use crate::types::{GridMapping, Rgba};

const CONFIG_FILE_NAME: &str = "contourpad.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub padding: f64,
    pub hcells: u32,
    pub vcells: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            padding: GridMapping::DEFAULT_PADDING,
            hcells: GridMapping::DEFAULT_CELLS,
            vcells: GridMapping::DEFAULT_CELLS,
        }
    }
}

impl CanvasConfig {
    pub fn sanitized(&self) -> Self {
        let padding = if self.padding.is_finite() {
            self.padding.clamp(0.0, 500.0)
        } else {
            GridMapping::DEFAULT_PADDING
        };
        Self {
            padding,
            hcells: self.hcells.clamp(1, 200),
            vcells: self.vcells.clamp(1, 200),
        }
    }

    /// Mapping for a canvas of the given size.
    pub const fn mapping(&self, width: f64, height: f64) -> GridMapping {
        GridMapping::new(width, height, self.padding, self.hcells, self.vcells)
    }
}

/// Initial values of the settings panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    pub line_width: f64,
    pub point_radius: f64,
    pub grid_enabled: bool,
    pub color_per_path: bool,
    pub line_color: Rgba,
    pub grid_color: Rgba,
    pub point_color: Rgba,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            point_radius: DEFAULT_POINT_RADIUS,
            grid_enabled: true,
            color_per_path: false,
            line_color: DEFAULT_LINE_COLOR,
            grid_color: DEFAULT_GRID_COLOR,
            point_color: DEFAULT_POINT_COLOR,
        }
    }
}

impl StyleDefaults {
    /// Build the startup style. Out-of-range sizes keep the built-in default.
    pub fn to_style(&self) -> StyleConfig {
        let mut style = StyleConfig::default();
        if !style.set_line_width(self.line_width) {
            warn!(value = self.line_width, "ignoring non-positive line_width");
        }
        if !style.set_point_radius(self.point_radius) {
            warn!(value = self.point_radius, "ignoring non-positive point_radius");
        }
        style.set_grid_enabled(self.grid_enabled);
        style.set_color_per_path(self.color_per_path);
        style.set_line_color(self.line_color);
        style.set_grid_color(self.grid_color);
        style.set_point_color(self.point_color);
        style
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
        }
    }
}

impl WindowConfig {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width.clamp(320.0, 8192.0), self.height.clamp(240.0, 8192.0)]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub canvas: CanvasConfig,
    pub style: StyleDefaults,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::load_from(&Self::candidate_paths())
    }

    /// First readable and valid config among `paths`, else defaults.
    pub fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            let Ok(contents) = fs::read_to_string(path) else {
                debug!(path = %path.display(), "no config file");
                continue;
            };
            match Self::from_toml_str(&contents) {
                Ok(cfg) => {
                    info!(path = %path.display(), "loaded config");
                    return cfg;
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to parse config");
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let mut cfg = toml::from_str::<Self>(contents)?;
        cfg.canvas = cfg.canvas.sanitized();
        Ok(cfg)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Contourpad", "Contourpad") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("contourpad")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }

    /// Directory offered first by the "Save image" dialog.
    pub fn default_export_dir() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// Config path shown in the settings panel, if any candidate exists.
pub fn existing_config_path() -> Option<PathBuf> {
    AppConfig::candidate_paths()
        .into_iter()
        .find(|p| p.is_file())
}
