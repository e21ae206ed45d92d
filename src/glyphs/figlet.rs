use super::GlyphSource;
use crate::error::LogoError;
use figlet_rs::FIGfont;
use once_cell::sync::OnceCell;
use std::{
    any::Any,
    collections::BTreeMap,
    panic::{catch_unwind, AssertUnwindSafe},
    path::{Path, PathBuf},
};

/// The font that's always available, compiled into the rasterizer.
pub const EMBEDDED_FONT: &str = "standard";

/// Directories FIGlet fonts are usually installed in.
const FONT_DIRS: &[&str] = &[
    "/opt/homebrew/share/figlet/fonts",
    "/usr/local/share/figlet",
    "/usr/local/share/figlet/fonts",
    "/usr/share/figlet",
    "/usr/share/figlet/fonts",
];

/// Fonts known to make the rasterizer panic. They're skipped without even being tried.
pub const BROKEN_FONTS: &[&str] = &[
    "banner", "big", "bubble", "digital", "dwhistled", "gradient", "ivrit", "l4me", "maxfour", "morse", "pyramid",
    "rot13", "term", "tsalagi",
];

/// Validated system fonts, keyed by lowercased name without the `.flf` extension.
static SYSTEM_FONTS: OnceCell<BTreeMap<String, PathBuf>> = OnceCell::new();

/// Every `.flf` file found in the well-known FIGlet directories, sorted by name.
pub fn discover_font_files() -> Vec<(String, PathBuf)> {
    let mut fonts = Vec::new();
    for dir in FONT_DIRS.iter().map(Path::new).filter(|d| d.is_dir()) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.extension().is_some_and(|ext| ext == "flf") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    fonts.push((stem.to_lowercase(), path.clone()));
                }
            }
        }
    }
    fonts.sort_by(|a, b| a.0.cmp(&b.0));
    fonts
}

/// Load the font at `path` and convert a sample with it, catching any panic along the way.
pub fn check_font_file(path: &Path) -> bool {
    let loaded = catch_unwind(AssertUnwindSafe(|| FIGfont::from_file(&path.to_string_lossy())));
    let Ok(Ok(font)) = loaded else {
        return false;
    };
    let converted = catch_unwind(AssertUnwindSafe(|| font.convert("TEST").is_some()));
    matches!(converted, Ok(true))
}

fn build_system_fonts() -> BTreeMap<String, PathBuf> {
    let mut fonts = BTreeMap::new();
    for (name, path) in discover_font_files() {
        if BROKEN_FONTS.contains(&name.as_str()) || fonts.contains_key(&name) {
            continue;
        }
        if check_font_file(&path) {
            fonts.insert(name, path);
        }
    }
    tracing::debug!("detected {} usable system FIGlet font(s)", fonts.len());
    fonts
}

fn system_fonts() -> &'static BTreeMap<String, PathBuf> {
    SYSTEM_FONTS.get_or_init(build_system_fonts)
}

/// Names of every font [FigletSource] can render with.
pub fn available_fonts() -> Vec<String> {
    let mut names: Vec<String> = system_fonts().keys().cloned().collect();
    if !names.iter().any(|name| name == EMBEDDED_FONT) {
        names.insert(0, EMBEDDED_FONT.to_string());
    }
    names
}

/// Glyph source backed by FIGlet fonts.
///
/// The embedded `standard` font is always available. Any other font must have been found in
/// one of the system font directories and survived a test conversion; there is no fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct FigletSource;

impl FigletSource {
    fn load_font(font_name: &str) -> Result<FIGfont, LogoError> {
        let name = font_name.to_lowercase();
        let loaded = if name == EMBEDDED_FONT {
            catch_unwind(AssertUnwindSafe(FIGfont::standard))
        } else {
            let path = system_fonts().get(&name).ok_or_else(|| LogoError::Font(font_name.to_string()))?;
            catch_unwind(AssertUnwindSafe(|| FIGfont::from_file(&path.to_string_lossy())))
        };
        match loaded {
            Ok(Ok(font)) => Ok(font),
            Ok(Err(e)) => {
                tracing::warn!("failed to load font '{font_name}': {e}");
                Err(LogoError::Font(font_name.to_string()))
            }
            Err(_) => {
                tracing::warn!("font '{font_name}' panicked while loading");
                Err(LogoError::Font(font_name.to_string()))
            }
        }
    }
}

impl GlyphSource for FigletSource {
    fn render(&self, text: &str, font: &str) -> Result<String, LogoError> {
        let figlet = Self::load_font(font)?;
        let converted = catch_unwind(AssertUnwindSafe(|| figlet.convert(text).map(|figure| figure.to_string())));
        match converted {
            Ok(Some(art)) => Ok(art.trim_end_matches('\n').to_string()),
            Ok(None) => Err(LogoError::Conversion(text.to_string())),
            Err(panic) => Err(classify_failure(panic_message(&*panic), font, text)),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}

/// Rasterizer failures that talk about the font are the font's fault; anything else is blamed on
/// the text being converted.
fn classify_failure(message: String, font: &str, text: &str) -> LogoError {
    if message.to_lowercase().contains("font") {
        LogoError::Font(font.to_string())
    } else {
        LogoError::Conversion(text.to_string())
    }
}
