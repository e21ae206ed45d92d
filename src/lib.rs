//! Render text as FIGlet logos painted with color gradients.
//!
//! Rendering goes through the same stages every time: the text is rasterized into glyph art,
//! the art is painted with a gradient laid along the requested [RenderMode] and finally every
//! line is padded according to the requested [AlignMode].
//!
//! ```no_run
//! use gradient_logo::{render, AlignMode, RenderMode, RenderOptions};
//!
//! let options = RenderOptions {
//!     palette: ["#ff5e62", "#ff9966"].into(),
//!     direction: RenderMode::Horizontal,
//!     align: AlignMode::Center,
//!     ..Default::default()
//! };
//! println!("{}", render("hello", &options).unwrap());
//! ```

pub mod align;
pub mod ansi;
pub mod color;
pub mod compositor;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod gradient;
pub mod options;
pub mod palette;
pub mod sink;

pub use align::{align, AlignMode, Viewport, DEFAULT_VIEWPORT_WIDTH};
pub use color::Color;
pub use compositor::{compose, RenderMode};
pub use config::LogoConfig;
pub use error::LogoError;
pub use glyphs::{FigletSource, GlyphSource};
pub use gradient::{colorize_block, colorize_line, Gradient};
pub use options::{FilledOptions, RenderOptions, DEFAULT_FONT};
pub use palette::{BuiltinPalettes, PaletteLookup, PaletteSource, DEFAULT_PALETTE};
pub use sink::{FixedDelay, Settle, TerminalSink};

use glyphs::{rasterize, skip_lines, GlyphLayout};
use palette::resolve_colors;
use std::io::Write;

/// Render `text` as a colored, aligned logo using FIGlet fonts and the built in palettes.
pub fn render(text: &str, options: &RenderOptions) -> Result<String, LogoError> {
    render_with(&FigletSource, &BuiltinPalettes, text, options)
}

/// Same as [render] but with explicit glyph and palette sources.
pub fn render_with<G, P>(glyphs: &G, palettes: &P, text: &str, options: &RenderOptions) -> Result<String, LogoError>
where
    G: GlyphSource + ?Sized,
    P: PaletteLookup + ?Sized,
{
    let colors = resolve_colors(&options.palette, palettes)?;
    let gradient = Gradient::new(&colors)?;
    tracing::debug!(font = %options.font, mode = %options.direction, align = %options.align, "rendering logo");
    let art = rasterize(glyphs, text, &options.font, GlyphLayout::default())?;
    let painted = compose(&art, &gradient, options.direction);
    Ok(align(&painted, options.align, options.viewport.columns()))
}

/// Render `text` as a filled logo, honoring spacing and the skip lines filter.
///
/// With skip lines on, glyphs are always laid out one character at a time, one column apart
/// unless another letter spacing is given, and text lines are stacked with no extra rows.
///
/// This only computes the output; use [render_filled_to] to also write it out.
pub fn render_filled(text: &str, options: &FilledOptions) -> Result<String, LogoError> {
    render_filled_with(&FigletSource, &BuiltinPalettes, text, options)
}

/// Same as [render_filled] but with explicit glyph and palette sources.
pub fn render_filled_with<G, P>(
    glyphs: &G,
    palettes: &P,
    text: &str,
    options: &FilledOptions,
) -> Result<String, LogoError>
where
    G: GlyphSource + ?Sized,
    P: PaletteLookup + ?Sized,
{
    let mut layout = options.validate()?;
    if options.skip_lines {
        layout = GlyphLayout { letter_spacing: Some(layout.letter_spacing.unwrap_or(1)), line_height: Some(1) };
    }
    let colors = resolve_colors(&options.palette, palettes)?;
    let gradient = Gradient::new(&colors)?;
    tracing::debug!(font = %options.font, ?layout, skip_lines = options.skip_lines, "rendering filled logo");
    let mut art = rasterize(glyphs, text, &options.font, layout)?;
    if options.skip_lines {
        art = skip_lines(&art);
    }
    let painted = colorize_block(&art, &gradient);
    Ok(align(&painted, options.align, options.viewport.columns()))
}

/// Render a filled logo and write it to `sink`, returning once the terminal has settled.
pub fn render_filled_to<W, S>(sink: &mut TerminalSink<W, S>, text: &str, options: &FilledOptions) -> Result<(), LogoError>
where
    W: Write,
    S: Settle,
{
    let output = render_filled(text, options)?;
    sink.write_and_settle(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ansi::{strip_ansi, visible_width},
        glyphs::tests::BlockGlyphs,
        gradient::tests::colors_in,
        sink::tests::CountingSettle,
    };
    use rstest::rstest;

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    /// Glyphs that are the text itself, so tests can reason about exact rows.
    struct Verbatim;

    impl GlyphSource for Verbatim {
        fn render(&self, text: &str, _font: &str) -> Result<String, LogoError> {
            Ok(text.to_string())
        }
    }

    fn options(mode: RenderMode, align: AlignMode) -> RenderOptions {
        RenderOptions {
            palette: ["#000000", "#ffffff"].into(),
            direction: mode,
            align,
            viewport: Viewport::new(20),
            ..Default::default()
        }
    }

    #[test]
    fn vertical_example() {
        let output = render_with(&Verbatim, &BuiltinPalettes, "X\n\nY", &options(RenderMode::Vertical, AlignMode::Left))
            .expect("render failed");
        let lines: Vec<_> = output.split('\n').collect();
        assert_eq!(colors_in(lines[0]), vec![BLACK]);
        assert_eq!(lines[1], "");
        assert_eq!(colors_in(lines[2]), vec![WHITE]);
    }

    #[rstest]
    #[case(RenderMode::Vertical)]
    #[case(RenderMode::Horizontal)]
    #[case(RenderMode::Diagonal)]
    fn alignment_only_adds_padding(#[case] mode: RenderMode) {
        let text = "ab\n\nabcd";
        let output =
            render_with(&Verbatim, &BuiltinPalettes, text, &options(mode, AlignMode::Right)).expect("render failed");
        let lines: Vec<_> = output.split('\n').collect();
        assert_eq!(lines.len(), 3);
        for (line, original) in lines.iter().zip(text.split('\n')) {
            assert_eq!(visible_width(line), 20);
            assert_eq!(strip_ansi(line).trim_start(), original);
        }
    }

    #[test]
    fn centered_figlet_logo() {
        let options = RenderOptions { align: AlignMode::Center, viewport: Viewport::new(100), ..Default::default() };
        let output = render("Hi", &options).expect("render failed");
        let plain = FigletSource.render("Hi", DEFAULT_FONT).expect("render failed");
        for (line, original) in output.split('\n').zip(plain.split('\n')) {
            let padding = (100 - visible_width(original)) / 2;
            assert_eq!(strip_ansi(line), format!("{}{original}", " ".repeat(padding)));
        }
    }

    #[test]
    fn unknown_palette() {
        let options = RenderOptions { palette: "not-a-real-palette".into(), ..Default::default() };
        let result = render("Hi", &options);
        assert!(matches!(result, Err(LogoError::InvalidPalette(_))));
    }

    #[test]
    fn unknown_font() {
        let options = RenderOptions { font: "nope".into(), ..Default::default() };
        let result = render_with(&BlockGlyphs, &BuiltinPalettes, "Hi", &options);
        assert!(matches!(result, Err(LogoError::Font(name)) if name == "nope"));
    }

    #[rstest]
    #[case::negative_spacing(Some(-1), None)]
    #[case::zero_line_height(None, Some(0))]
    fn filled_rejects_bad_layout(#[case] letter_spacing: Option<i32>, #[case] line_height: Option<i32>) {
        let options = FilledOptions { letter_spacing, line_height, ..Default::default() };
        assert!(matches!(render_filled("Hi", &options), Err(LogoError::Config(_))));
    }

    #[test]
    fn filled_skip_lines() {
        let options = FilledOptions {
            font: "block".into(),
            palette: ["#000000", "#ffffff"].into(),
            skip_lines: true,
            letter_spacing: Some(1),
            ..Default::default()
        };
        let output = render_filled_with(&BlockGlyphs, &BuiltinPalettes, "██", &options).expect("render failed");
        let lines: Vec<_> = output.split('\n').collect();
        assert_eq!(strip_ansi(lines[0]), "▇▇ ▇▇");
        assert_eq!(colors_in(lines[0]), vec![BLACK, BLACK]);
        assert_eq!(colors_in(lines[1]), vec![WHITE, WHITE]);
    }

    #[test]
    fn filled_skip_lines_layout() {
        let options = FilledOptions {
            font: "block".into(),
            skip_lines: true,
            line_height: Some(3),
            ..Default::default()
        };
        let output = render_filled_with(&BlockGlyphs, &BuiltinPalettes, "ab\nc", &options).expect("render failed");
        let rows: Vec<_> = output.split('\n').map(strip_ansi).collect();
        assert_eq!(rows, vec!["aa bb", "aa bb", "cc", "cc"]);
    }

    /// Glyphs whose rows end at different columns, like most FIGlet letters.
    struct Ragged;

    impl GlyphSource for Ragged {
        fn render(&self, text: &str, _font: &str) -> Result<String, LogoError> {
            Ok(match text {
                "L" => "L\nL\nLLL".to_string(),
                "T" => "TTT\n T\n T".to_string(),
                other => other.to_string(),
            })
        }
    }

    #[test]
    fn right_aligned_spaced_rows_stay_together() {
        let options = FilledOptions {
            letter_spacing: Some(1),
            align: AlignMode::Right,
            viewport: Viewport::new(20),
            ..Default::default()
        };
        let output = render_filled_with(&Ragged, &BuiltinPalettes, "LT", &options).expect("render failed");
        let pads: Vec<_> = output
            .split('\n')
            .map(|line| {
                let plain = strip_ansi(line);
                plain.len() - plain.trim_start().len()
            })
            .collect();
        assert_eq!(pads, vec![13, 13, 13]);
    }

    #[test]
    fn filled_to_sink() {
        let settle = CountingSettle::default();
        let mut sink = TerminalSink::new(Vec::new(), settle.clone());
        render_filled_to(&mut sink, "Hi", &FilledOptions::default()).expect("render failed");

        let written = String::from_utf8(sink.into_inner()).expect("not utf8");
        let expected = render_filled("Hi", &FilledOptions::default()).expect("render failed");
        assert!(written.starts_with(&expected));
        assert!(written.ends_with("\x1b[0m\x1b[?25h\x1b[K"));
        assert_eq!(settle.0.get(), 1);
    }
}
