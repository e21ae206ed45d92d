use crate::{
    align::{AlignMode, Viewport},
    compositor::RenderMode,
    error::LogoError,
    options::{validate_layout, FilledOptions, RenderOptions, DEFAULT_FONT},
    palette::PaletteSource,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Logo settings as read from a YAML file. Anything left out takes its default value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    #[serde(default)]
    pub palette: Option<PaletteSource>,

    #[serde(default)]
    pub font: Option<String>,

    /// The render mode. Unknown values fall back to vertical.
    #[serde(default)]
    pub direction: Option<String>,

    /// The alignment. Unknown values fall back to left.
    #[serde(default)]
    pub align: Option<String>,

    /// The viewport width; the terminal's own width is not consulted when this is set.
    #[serde(default)]
    pub width: Option<u16>,

    #[serde(default)]
    pub letter_spacing: Option<i32>,

    #[serde(default)]
    pub line_height: Option<i32>,

    #[serde(default)]
    pub skip_lines: bool,
}

impl LogoConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, LogoError> {
        let config: Self = serde_yaml::from_str(contents)?;
        validate_layout(config.letter_spacing, config.line_height)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, LogoError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Where the config file lives by default, e.g. `~/.config/gradient-logo/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gradient-logo").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load the config from its default path, if there's a file there.
    pub fn load_default() -> Result<Self, LogoError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            palette: self.palette.clone().unwrap_or_default(),
            font: self.font(),
            direction: self.direction.as_deref().map(RenderMode::parse_lenient).unwrap_or_default(),
            align: self.align(),
            viewport: self.viewport(),
        }
    }

    pub fn filled_options(&self) -> FilledOptions {
        FilledOptions {
            palette: self.palette.clone().unwrap_or_default(),
            font: self.font(),
            letter_spacing: self.letter_spacing,
            line_height: self.line_height,
            skip_lines: self.skip_lines,
            align: self.align(),
            viewport: self.viewport(),
        }
    }

    fn font(&self) -> String {
        self.font.clone().unwrap_or_else(|| DEFAULT_FONT.to_string())
    }

    fn align(&self) -> AlignMode {
        self.align.as_deref().map(AlignMode::parse_lenient).unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: self.width }
    }
}
