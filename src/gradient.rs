//! Color gradients over a normalized position and the helpers that paint text with them.

use crate::{color::Color, error::LogoError};
use crossterm::style::SetForegroundColor;
use itertools::Itertools;

/// A piecewise-linear gradient across evenly spaced color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Build a gradient out of color stops given as hex strings or color names.
    pub fn new<S: AsRef<str>>(stops: &[S]) -> Result<Self, LogoError> {
        let colors = stops.iter().map(|stop| stop.as_ref().parse::<Color>()).collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(colors)
    }

    pub fn from_colors(stops: Vec<Color>) -> Result<Self, LogoError> {
        if stops.is_empty() {
            return Err(LogoError::InvalidPalette("a gradient needs at least one color".into()));
        }
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// The color at position `t`, clamped to [0, 1].
    pub fn at(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        if segments == 0 {
            return self.stops[0];
        }
        let scaled = t * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local = scaled - index as f32;
        self.stops[index].lerp(self.stops[index + 1], local)
    }

    /// The same gradient with its stops rotated for line `index` out of `line_count`.
    pub(crate) fn rotated(&self, index: usize, line_count: usize) -> Self {
        Self { stops: rotate_stops(&self.stops, index, line_count) }
    }
}

/// Rotate the stops for line `index` out of `line_count`.
///
/// Every slot is shifted by the same fraction of the palette, `index / line_count * len`, and the
/// shifted position is floored and wrapped around the palette.
pub(crate) fn rotate_stops(stops: &[Color], index: usize, line_count: usize) -> Vec<Color> {
    let len = stops.len();
    if len == 0 || line_count == 0 {
        return stops.to_vec();
    }
    let shift = index as f64 / line_count as f64 * len as f64;
    (0..len)
        .map(|slot| {
            let source = (slot as f64 + shift).floor() as usize % len;
            stops[source]
        })
        .collect()
}

/// Whether a line has nothing visible in it. These are never colored.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Paint a single line with a full left-to-right sweep over its visible characters.
pub fn colorize_line(line: &str, gradient: &Gradient) -> String {
    if is_blank(line) {
        return line.to_string();
    }
    let visible = line.chars().filter(|c| !c.is_whitespace()).count();
    paint(line, |index| gradient.at(position(index, visible)))
}

/// Paint a whole block with one continuous top-to-bottom sweep.
///
/// Every row gets a single color. Blank rows are left untouched but still take up their slot in
/// the sweep so the colors on either side of them stay continuous.
pub fn colorize_block(block: &str, gradient: &Gradient) -> String {
    let rows = block.split('\n').count();
    block
        .split('\n')
        .enumerate()
        .map(|(row, line)| {
            if is_blank(line) {
                return line.to_string();
            }
            let color = gradient.at(position(row, rows));
            paint(line, |_| color)
        })
        .join("\n")
}

fn position(index: usize, total: usize) -> f32 {
    if total > 1 { index as f32 / (total - 1) as f32 } else { 0.0 }
}

/// Emit `line` with every visible character colored by `color_at(visible_index)`.
///
/// Consecutive characters sharing a color are grouped under a single escape sequence and the
/// foreground color is reset before any whitespace and at the end of the line.
fn paint<F>(line: &str, color_at: F) -> String
where
    F: Fn(usize) -> Color,
{
    let mut output = String::with_capacity(line.len() * 4);
    let mut current: Option<Color> = None;
    let mut visible_index = 0;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if current.take().is_some() {
                set_foreground(&mut output, crossterm::style::Color::Reset);
            }
            output.push(ch);
            continue;
        }
        let color = color_at(visible_index);
        visible_index += 1;
        if current != Some(color) {
            set_foreground(&mut output, color.into());
            current = Some(color);
        }
        output.push(ch);
    }
    if current.is_some() {
        set_foreground(&mut output, crossterm::style::Color::Reset);
    }
    output
}

fn set_foreground(output: &mut String, color: crossterm::style::Color) {
    output.push_str(&SetForegroundColor(color).to_string());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ansi::strip_ansi as strip;
    use rstest::rstest;

    /// Extract the colors of every foreground escape in `line`, in order.
    pub(crate) fn colors_in(line: &str) -> Vec<Color> {
        line.split("\x1b[38;2;")
            .skip(1)
            .filter_map(|chunk| {
                let (params, _) = chunk.split_once('m')?;
                let channels: Vec<u8> = params.split(';').filter_map(|c| c.parse().ok()).collect();
                match channels.as_slice() {
                    [r, g, b] => Some(Color::new(*r, *g, *b)),
                    _ => None,
                }
            })
            .collect()
    }

    const BLACK: Color = Color::new(0, 0, 0);
    const WHITE: Color = Color::new(255, 255, 255);

    fn black_to_white() -> Gradient {
        Gradient::new(&["#000000", "#ffffff"]).expect("invalid gradient")
    }

    #[rstest]
    #[case::two_stops(&["#000000", "#ffffff"])]
    #[case::three_stops(&["red", "#00ff00", "blue"])]
    #[case::four_stops(&["#123456", "#abcdef", "#fedcba", "#654321"])]
    fn boundaries_are_exact(#[case] stops: &[&str]) {
        let gradient = Gradient::new(stops).expect("invalid gradient");
        let first: Color = stops[0].parse().unwrap();
        let last: Color = stops[stops.len() - 1].parse().unwrap();
        assert_eq!(gradient.at(0.0), first);
        assert_eq!(gradient.at(1.0), last);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.3)]
    #[case(1.0)]
    #[case(-4.0)]
    fn single_stop(#[case] t: f32) {
        let gradient = Gradient::new(&["#336699"]).expect("invalid gradient");
        assert_eq!(gradient.at(t), Color::new(0x33, 0x66, 0x99));
    }

    #[test]
    fn out_of_range_is_clamped() {
        let gradient = black_to_white();
        assert_eq!(gradient.at(-1.0), BLACK);
        assert_eq!(gradient.at(2.5), WHITE);
        assert_eq!(gradient.at(f32::NAN), BLACK);
    }

    #[test]
    fn evenly_spaced_stops() {
        let gradient = Gradient::new(&["#ff0000", "#00ff00", "#0000ff"]).expect("invalid gradient");
        assert_eq!(gradient.at(0.5), Color::new(0, 255, 0));
        assert_eq!(gradient.at(0.25), Color::new(128, 128, 0));
    }

    #[test]
    fn empty_stops() {
        let stops: &[&str] = &[];
        assert!(matches!(Gradient::new(stops), Err(LogoError::InvalidPalette(_))));
    }

    #[test]
    fn invalid_stop() {
        assert!(matches!(Gradient::new(&["#000000", "nope"]), Err(LogoError::InvalidPalette(_))));
    }

    #[test]
    fn line_sweeps_visible_characters() {
        let line = colorize_line("A B C", &black_to_white());
        assert_eq!(colors_in(&line), vec![BLACK, Color::new(128, 128, 128), WHITE]);
        assert_eq!(strip(&line), "A B C");
    }

    #[test]
    fn line_groups_equal_colors() {
        let gradient = Gradient::new(&["red"]).expect("invalid gradient");
        let line = colorize_line("ABC", &gradient);
        assert_eq!(line, "\x1b[38;2;255;0;0mABC\x1b[39m");
    }

    #[test]
    fn line_resets_before_whitespace() {
        let gradient = Gradient::new(&["red"]).expect("invalid gradient");
        let line = colorize_line("A B", &gradient);
        assert_eq!(line, "\x1b[38;2;255;0;0mA\x1b[39m \x1b[38;2;255;0;0mB\x1b[39m");
    }

    #[test]
    fn rotated_keeps_every_stop() {
        let gradient = black_to_white();
        for index in 0..7 {
            let rotated = gradient.rotated(index, 7);
            assert_eq!(rotated.stops().len(), 2);
            assert!(rotated.stops().contains(&BLACK) && rotated.stops().contains(&WHITE));
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("    ")]
    #[case::tabs(" \t ")]
    fn blank_lines_untouched(#[case] line: &str) {
        assert_eq!(colorize_line(line, &black_to_white()), line);
        assert_eq!(colorize_block(line, &black_to_white()), line);
    }

    #[test]
    fn block_is_one_continuous_sweep() {
        let block = colorize_block("X\n\nY", &black_to_white());
        let lines: Vec<_> = block.split('\n').collect();
        assert_eq!(colors_in(lines[0]), vec![BLACK]);
        assert_eq!(lines[1], "");
        assert_eq!(colors_in(lines[2]), vec![WHITE]);
    }

    #[test]
    fn block_never_resets_mid_sweep() {
        let block = colorize_block("##\n##\n##\n##\n##", &black_to_white());
        let shades: Vec<u8> = block.split('\n').map(|line| colors_in(line)[0].r).collect();
        assert!(shades.windows(2).all(|pair| pair[0] < pair[1]), "{shades:?}");
    }
}
