//! Turning text into glyph art, and reshaping that art before it gets colored.

mod figlet;
mod filters;

pub use figlet::{available_fonts, check_font_file, discover_font_files, FigletSource, BROKEN_FONTS, EMBEDDED_FONT};
pub use filters::{skip_lines, FULL_BLOCK, PARTIAL_BLOCK};

use crate::{ansi::visible_width, error::LogoError};
use itertools::Itertools;

/// Something that can rasterize text into multi-line glyph art using a named font.
pub trait GlyphSource {
    /// Render `text` using `font`. Unknown fonts are reported as [LogoError::Font].
    fn render(&self, text: &str, font: &str) -> Result<String, LogoError>;
}

/// How rasterized glyphs are spaced out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphLayout {
    /// Columns between consecutive glyphs. When unset glyphs are laid out by the font itself.
    pub letter_spacing: Option<usize>,

    /// Rows taken by every line of text, counting the line itself. When unset lines are stacked
    /// right on top of each other.
    pub line_height: Option<usize>,
}

/// Rasterize `text` line by line, applying `layout`.
pub fn rasterize<S: GlyphSource + ?Sized>(source: &S, text: &str, font: &str, layout: GlyphLayout) -> Result<String, LogoError> {
    let gap = layout.line_height.unwrap_or(1).saturating_sub(1);
    let mut blocks = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            blocks.push(String::new());
            continue;
        }
        let block = match layout.letter_spacing {
            Some(spacing) => rasterize_spaced(source, line, font, spacing)?,
            None => source.render(line, font)?,
        };
        blocks.push(block);
    }
    let separator = format!("\n{}", "\n".repeat(gap));
    Ok(blocks.into_iter().join(&separator))
}

fn rasterize_spaced<S: GlyphSource + ?Sized>(source: &S, line: &str, font: &str, spacing: usize) -> Result<String, LogoError> {
    let glyphs = line.chars().map(|c| source.render(&c.to_string(), font)).collect::<Result<Vec<_>, _>>()?;
    Ok(join_horizontally(&glyphs, spacing))
}

/// Place glyph blocks side by side, `spacing` columns apart.
///
/// Every block is padded to its own widest row and shorter blocks are padded at the bottom, so
/// all rows of the result share the same width.
pub(crate) fn join_horizontally(glyphs: &[String], spacing: usize) -> String {
    let rows: Vec<Vec<&str>> = glyphs.iter().map(|glyph| glyph.split('\n').collect()).collect();
    let height = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = rows.iter().map(|lines| lines.iter().map(|l| visible_width(l)).max().unwrap_or(0)).collect();
    let gap = " ".repeat(spacing);
    (0..height)
        .map(|row| {
            rows.iter()
                .zip(&widths)
                .map(|(lines, width)| {
                    let line = lines.get(row).copied().unwrap_or("");
                    let padding = width.saturating_sub(visible_width(line));
                    format!("{line}{}", " ".repeat(padding))
                })
                .join(&gap)
        })
        .join("\n")
}
