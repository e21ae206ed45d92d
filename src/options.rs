use crate::{
    align::{AlignMode, Viewport},
    compositor::RenderMode,
    error::LogoError,
    glyphs::{GlyphLayout, EMBEDDED_FONT},
    palette::PaletteSource,
};

/// The font used when none is requested.
pub const DEFAULT_FONT: &str = EMBEDDED_FONT;

/// Options for [crate::render].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub palette: PaletteSource,
    pub font: String,
    pub direction: RenderMode,
    pub align: AlignMode,
    pub viewport: Viewport,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            palette: PaletteSource::default(),
            font: DEFAULT_FONT.to_string(),
            direction: RenderMode::default(),
            align: AlignMode::default(),
            viewport: Viewport::default(),
        }
    }
}

/// Options for [crate::render_filled].
#[derive(Clone, Debug, PartialEq)]
pub struct FilledOptions {
    pub palette: PaletteSource,
    pub font: String,

    /// Columns between glyphs. Must not be negative.
    pub letter_spacing: Option<i32>,

    /// Rows taken by each line of text. Must be at least 1.
    pub line_height: Option<i32>,

    /// Swap solid fill for a slightly shorter block so rows are visibly separated.
    pub skip_lines: bool,

    pub align: AlignMode,
    pub viewport: Viewport,
}

impl Default for FilledOptions {
    fn default() -> Self {
        Self {
            palette: PaletteSource::default(),
            font: DEFAULT_FONT.to_string(),
            letter_spacing: None,
            line_height: None,
            skip_lines: false,
            align: AlignMode::default(),
            viewport: Viewport::default(),
        }
    }
}

impl FilledOptions {
    /// Check the numeric options and turn them into a glyph layout.
    pub fn validate(&self) -> Result<GlyphLayout, LogoError> {
        validate_layout(self.letter_spacing, self.line_height)
    }
}

pub(crate) fn validate_layout(letter_spacing: Option<i32>, line_height: Option<i32>) -> Result<GlyphLayout, LogoError> {
    let letter_spacing = match letter_spacing {
        Some(spacing) if spacing < 0 => {
            return Err(LogoError::Config(format!("letter spacing must be 0 or greater, got {spacing}")));
        }
        other => other.map(|spacing| spacing as usize),
    };
    let line_height = match line_height {
        Some(height) if height < 1 => {
            return Err(LogoError::Config(format!("line height must be 1 or greater, got {height}")));
        }
        other => other.map(|height| height as usize),
    };
    Ok(GlyphLayout { letter_spacing, line_height })
}
