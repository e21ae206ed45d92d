use crate::{
    error::LogoError,
    gradient::{colorize_line, Gradient},
};
use serde::Deserialize;

/// The palette used when none is requested.
pub const DEFAULT_PALETTE: &str = "grad-blue";

/// Where a gradient's colors come from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PaletteSource {
    /// A palette looked up by name.
    Named(String),

    /// Literal color stops.
    Colors(Vec<String>),
}

impl Default for PaletteSource {
    fn default() -> Self {
        Self::Named(DEFAULT_PALETTE.to_string())
    }
}

impl From<&str> for PaletteSource {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<Vec<String>> for PaletteSource {
    fn from(colors: Vec<String>) -> Self {
        Self::Colors(colors)
    }
}

impl<const N: usize> From<[&str; N]> for PaletteSource {
    fn from(colors: [&str; N]) -> Self {
        Self::Colors(colors.iter().map(ToString::to_string).collect())
    }
}

/// A lookup from palette names to color stops.
pub trait PaletteLookup {
    fn colors(&self, name: &str) -> Option<Vec<String>>;

    /// Every palette name this lookup knows about.
    fn names(&self) -> Vec<String>;
}

/// The palettes that ship with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinPalettes;

const BUILTIN_PALETTES: &[(&str, &[&str])] = &[
    ("grad-blue", &["#4ea8de", "#5e60ce", "#7400b8"]),
    ("sunset", &["#ff9966", "#ff5e62", "#ffa34e"]),
    ("dawn", &["#00c6ff", "#0072ff"]),
    ("nebula", &["#654ea3", "#eaafc8"]),
    ("ocean", &["#667eea", "#764ba2"]),
    ("fire", &["#ff0844", "#ffb199"]),
    ("forest", &["#134e5e", "#71b280"]),
    ("gold", &["#f7971e", "#ffd200"]),
    ("purple", &["#8e2de2", "#4a00e0"]),
    ("mint", &["#00b09b", "#96c93d"]),
    ("pastel", &["#74ebd5", "#74ecd5", "#acb6e5"]),
    ("rainbow", &["#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff", "#4b0082", "#9400d3"]),
    ("monochrome", &["#ffffff", "#808080", "#404040"]),
];

impl PaletteLookup for BuiltinPalettes {
    fn colors(&self, name: &str) -> Option<Vec<String>> {
        BUILTIN_PALETTES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, colors)| colors.iter().map(ToString::to_string).collect())
    }

    fn names(&self) -> Vec<String> {
        BUILTIN_PALETTES.iter().map(|(name, _)| name.to_string()).collect()
    }
}

/// Turn a palette source into concrete color stops.
pub fn resolve_colors<L: PaletteLookup + ?Sized>(source: &PaletteSource, lookup: &L) -> Result<Vec<String>, LogoError> {
    let colors = match source {
        PaletteSource::Colors(colors) => colors.clone(),
        PaletteSource::Named(name) => {
            lookup.colors(name).ok_or_else(|| LogoError::InvalidPalette(format!("Unknown palette: {name}")))?
        }
    };
    if colors.is_empty() {
        return Err(LogoError::InvalidPalette("palette has no colors".into()));
    }
    Ok(colors)
}

/// The palette's name painted with its own colors.
pub fn palette_preview<L: PaletteLookup + ?Sized>(name: &str, lookup: &L) -> Result<String, LogoError> {
    let colors = resolve_colors(&PaletteSource::Named(name.to_string()), lookup)?;
    let gradient = Gradient::new(&colors)?;
    Ok(colorize_line(name, &gradient))
}
